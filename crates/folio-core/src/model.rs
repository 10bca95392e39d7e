use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The relation name that links a parent annotation to its word children.
pub const CHILD_RELATION: &str = "child";

/// Category assigned by the layout engine to leaf word annotations.
pub const WORD_CATEGORY: &str = "word";

/// Sub-category that carries a word's reading-order rank.
pub const READING_ORDER_KEY: &str = "reading_order";

/// One detected region on a page: a table, a text block, a word, a figure.
///
/// Fields the engine emits but this crate does not interpret (scores, model
/// ids, ...) are kept in `extra` and written back out unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Annotation {
    #[serde(rename = "_annotation_id")]
    pub id: String,
    pub category_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bounding_box: Option<BoundingBox>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_categories: Option<IndexMap<String, SubCategoryEntry>>,
    /// Relation name -> ids of related annotations on the same page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relationships: Option<IndexMap<String, Vec<String>>>,
    /// Merged child text; absent until aggregation fills it in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl Annotation {
    /// Ids listed under the `child` relation, if any.
    pub fn child_ids(&self) -> Option<&[String]> {
        self.relationships
            .as_ref()
            .and_then(|rels| rels.get(CHILD_RELATION))
            .map(|ids| ids.as_slice())
    }
}

/// One entry of an annotation's `sub_categories` map.
///
/// Engines occasionally emit bare scalars here; anything that is not a
/// mapping is carried as `Other` and written back out unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SubCategoryEntry {
    Record(SubCategory),
    Other(Value),
}

impl SubCategoryEntry {
    /// The typed record, when this entry is a mapping.
    pub fn as_record(&self) -> Option<&SubCategory> {
        match self {
            SubCategoryEntry::Record(record) => Some(record),
            SubCategoryEntry::Other(_) => None,
        }
    }
}

/// A mapping-shaped `sub_categories` entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubCategory {
    /// Outer level distinguishes a missing `value` key from an explicit
    /// null; a null claims the slot and counts as empty text.
    #[serde(
        default,
        deserialize_with = "deserialize_present_value",
        skip_serializing_if = "Option::is_none"
    )]
    pub value: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

fn deserialize_present_value<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

/// Region box in engine coordinates. Coordinates may be absolute pixels or
/// page-relative fractions, per `absolute_coords`.
///
/// All fields are optional on the wire; absent coordinates are treated as 0
/// at the point of use and are never invented on output.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BoundingBox {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ulx: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uly: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lrx: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lry: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub absolute_coords: Option<bool>,
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl BoundingBox {
    /// `absolute_coords` is treated as true when absent.
    pub fn is_absolute(&self) -> bool {
        self.absolute_coords.unwrap_or(true)
    }
}

/// A single per-page record as produced by the layout engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    /// Page frame; absent fields fall back to the default page box.
    #[serde(rename = "_bbox", default, skip_serializing_if = "Option::is_none")]
    pub bbox: Option<BoundingBox>,
    #[serde(default)]
    pub annotations: Vec<Annotation>,
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}
