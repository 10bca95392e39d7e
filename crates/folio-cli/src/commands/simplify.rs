use std::path::PathBuf;

use folio_core::error::FolioError;

use crate::output;

pub fn run(
    input_file: PathBuf,
    output_format: &str,
    output_file: Option<PathBuf>,
    params_file: Option<PathBuf>,
) -> Result<(), FolioError> {
    let params = super::resolve_params(params_file)?;
    let mut page = super::read_page(&input_file)?;
    let stats = folio_core::simplify_page(&mut page, &params);

    match output_file {
        Some(path) => {
            // Always write JSON when saving to file
            let json = output::json::format_page(&page)?;
            std::fs::write(&path, json)?;
            eprintln!(
                "Simplified annotations: {} -> {}",
                stats.annotations_before, stats.annotations_after
            );
            eprintln!("  written to {}", path.display());
        }
        None => {
            let output_str = match output_format {
                "summary" => output::summary::format_page(&page, &stats),
                _ => output::json::format_page(&page)?,
            };
            println!("{output_str}");
        }
    }

    Ok(())
}
