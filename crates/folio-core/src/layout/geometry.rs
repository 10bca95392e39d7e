use crate::model::BoundingBox;
use crate::params::LayoutParams;

/// Page frame with defaults applied; the coordinate space all boxes on the
/// page are snapped into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageFrame {
    pub ulx: f64,
    pub uly: f64,
    pub lrx: f64,
    pub lry: f64,
}

impl PageFrame {
    /// Resolve a record's page box. Missing fields fall back per field:
    /// upper-left corner to 0, lower-right corner to the default page edge.
    pub fn resolve(bbox: Option<&BoundingBox>, params: &LayoutParams) -> PageFrame {
        let edge = params.default_page_edge;
        match bbox {
            Some(b) => PageFrame {
                ulx: b.ulx.unwrap_or(0.0),
                uly: b.uly.unwrap_or(0.0),
                lrx: b.lrx.unwrap_or(edge),
                lry: b.lry.unwrap_or(edge),
            },
            None => PageFrame {
                ulx: 0.0,
                uly: 0.0,
                lrx: edge,
                lry: edge,
            },
        }
    }

    /// Page width in whole units, never below 1.
    pub fn width(&self) -> i64 {
        ((self.lrx - self.ulx) as i64).max(1)
    }

    /// Page height in whole units, never below 1.
    pub fn height(&self) -> i64 {
        ((self.lry - self.uly) as i64).max(1)
    }
}

/// A box snapped to absolute whole-unit page coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AbsBox {
    pub ulx: i64,
    pub uly: i64,
    pub lrx: i64,
    pub lry: i64,
}

impl AbsBox {
    /// Horizontal center of the box. Summed in f64 so edges near the i64
    /// limits cannot overflow.
    pub fn center_x(&self) -> f64 {
        (self.ulx as f64 + self.lrx as f64) / 2.0
    }
}

/// Snap a bounding box to absolute whole-unit coordinates.
///
/// Boxes flagged relative hold fractions of the page frame and scale by its
/// width (x axis) and height (y axis); absolute boxes are truncated as-is.
/// A missing box or missing fields count as 0.
pub fn to_absolute(bbox: Option<&BoundingBox>, frame: &PageFrame) -> AbsBox {
    let b = match bbox {
        Some(b) => b,
        None => {
            return AbsBox {
                ulx: 0,
                uly: 0,
                lrx: 0,
                lry: 0,
            }
        }
    };

    let ulx = b.ulx.unwrap_or(0.0);
    let uly = b.uly.unwrap_or(0.0);
    let lrx = b.lrx.unwrap_or(0.0);
    let lry = b.lry.unwrap_or(0.0);

    if b.is_absolute() {
        AbsBox {
            ulx: ulx as i64,
            uly: uly as i64,
            lrx: lrx as i64,
            lry: lry as i64,
        }
    } else {
        let w = frame.width() as f64;
        let h = frame.height() as f64;
        AbsBox {
            ulx: (ulx * w) as i64,
            uly: (uly * h) as i64,
            lrx: (lrx * w) as i64,
            lry: (lry * h) as i64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame_1000() -> PageFrame {
        PageFrame {
            ulx: 0.0,
            uly: 0.0,
            lrx: 1000.0,
            lry: 1000.0,
        }
    }

    fn boxed(ulx: f64, uly: f64, lrx: f64, lry: f64, absolute: Option<bool>) -> BoundingBox {
        BoundingBox {
            ulx: Some(ulx),
            uly: Some(uly),
            lrx: Some(lrx),
            lry: Some(lry),
            absolute_coords: absolute,
            ..Default::default()
        }
    }

    #[test]
    fn test_relative_box_scales_by_page_frame() {
        let b = boxed(0.5, 0.0, 1.0, 0.5, Some(false));
        let abs = to_absolute(Some(&b), &frame_1000());
        assert_eq!(
            abs,
            AbsBox {
                ulx: 500,
                uly: 0,
                lrx: 1000,
                lry: 500
            }
        );
    }

    #[test]
    fn test_absolute_box_truncates_in_place() {
        let b = boxed(10.9, 20.2, 110.7, 220.9, None);
        let abs = to_absolute(Some(&b), &frame_1000());
        assert_eq!(
            abs,
            AbsBox {
                ulx: 10,
                uly: 20,
                lrx: 110,
                lry: 220
            }
        );
    }

    #[test]
    fn test_missing_box_is_origin() {
        let abs = to_absolute(None, &frame_1000());
        assert_eq!(
            abs,
            AbsBox {
                ulx: 0,
                uly: 0,
                lrx: 0,
                lry: 0
            }
        );
    }

    #[test]
    fn test_missing_fields_count_as_zero() {
        let b = BoundingBox {
            lrx: Some(300.0),
            ..Default::default()
        };
        let abs = to_absolute(Some(&b), &frame_1000());
        assert_eq!(
            abs,
            AbsBox {
                ulx: 0,
                uly: 0,
                lrx: 300,
                lry: 0
            }
        );
    }

    #[test]
    fn test_frame_defaults_when_page_box_absent() {
        let frame = PageFrame::resolve(None, &LayoutParams::default());
        assert_eq!(frame.width(), 1000);
        assert_eq!(frame.height(), 1000);
    }

    #[test]
    fn test_frame_defaults_apply_per_field() {
        let partial = BoundingBox {
            ulx: Some(5.0),
            ..Default::default()
        };
        let frame = PageFrame::resolve(Some(&partial), &LayoutParams::default());
        assert_eq!(frame.ulx, 5.0);
        assert_eq!(frame.uly, 0.0);
        assert_eq!(frame.lrx, 1000.0);
        assert_eq!(frame.lry, 1000.0);
    }

    #[test]
    fn test_center_x_copes_with_extreme_edges() {
        let b = AbsBox {
            ulx: i64::MAX,
            uly: 0,
            lrx: i64::MAX,
            lry: 40,
        };
        assert_eq!(b.center_x(), i64::MAX as f64);
    }

    #[test]
    fn test_degenerate_frame_width_floors_at_one() {
        let b = boxed(0.0, 0.0, 0.0, 0.0, None);
        let frame = PageFrame::resolve(Some(&b), &LayoutParams::default());
        assert_eq!(frame.width(), 1);
        assert_eq!(frame.height(), 1);

        let rel = boxed(0.5, 0.5, 1.0, 1.0, Some(false));
        let abs = to_absolute(Some(&rel), &frame);
        assert_eq!(
            abs,
            AbsBox {
                ulx: 0,
                uly: 0,
                lrx: 1,
                lry: 1
            }
        );
    }
}
