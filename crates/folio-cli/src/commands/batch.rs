use std::path::PathBuf;

use folio_core::error::FolioError;
use log::info;

use crate::output;

pub fn run(
    input_dir: PathBuf,
    suffix: &str,
    params_file: Option<PathBuf>,
) -> Result<(), FolioError> {
    let params = super::resolve_params(params_file)?;

    let mut inputs: Vec<PathBuf> = Vec::new();
    for entry in std::fs::read_dir(&input_dir)? {
        let path = entry?.path();
        if path.extension().and_then(|e| e.to_str()) != Some("json") {
            continue;
        }
        let stem = match path.file_stem().and_then(|s| s.to_str()) {
            Some(stem) => stem,
            None => continue,
        };
        // Outputs of a previous run are not inputs.
        if stem.ends_with(suffix) {
            info!("skipping {}", path.display());
            continue;
        }
        inputs.push(path);
    }
    inputs.sort();

    if inputs.is_empty() {
        println!("No page records found in {}", input_dir.display());
        return Ok(());
    }

    for path in &inputs {
        let mut page = super::read_page(path)?;
        let stats = folio_core::simplify_page(&mut page, &params);

        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("page");
        let out_path = path.with_file_name(format!("{stem}{suffix}.json"));
        let json = output::json::format_page(&page)?;
        std::fs::write(&out_path, json)?;

        println!(
            "{}: {} -> {} annotations, written to {}",
            path.display(),
            stats.annotations_before,
            stats.annotations_after,
            out_path.display()
        );
    }

    Ok(())
}
