// src/export.rs
//
// CSV export of the working subset.
// Header row = canonical column names; no index column, nothing after the rows.

use std::fs;
use std::path::{Path, PathBuf};

use base64::{Engine as _, engine::general_purpose::STANDARD};
use tracing::info;

use crate::config::consts::{EXPORT_FILE_NAME, EXPORT_LINK_TEXT};
use crate::config::options::ExportOptions;
use crate::data::SelectionView;
use crate::error::Result;
use crate::store::RecordTable;

/// Serialize the view as CSV text.
pub fn to_csv_string(view: &SelectionView<'_>) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    wtr.write_record(RecordTable::headers())?;
    for row in view.rows() {
        wtr.write_record(row.to_record())?;
    }
    let bytes = wtr.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// `data:` URI with the CSV base64-encoded.
pub fn to_data_uri(csv: &str) -> String {
    format!("data:file/csv;base64,{}", STANDARD.encode(csv.as_bytes()))
}

/// HTML anchor that downloads the view as `nifty50_data_stats.csv`.
pub fn download_link(view: &SelectionView<'_>) -> Result<String> {
    let csv = to_csv_string(view)?;
    Ok(format!(
        r#"<a href="{}" download="{}">{}</a>"#,
        to_data_uri(&csv),
        EXPORT_FILE_NAME,
        EXPORT_LINK_TEXT
    ))
}

/// Write the view to `opts.out_path()`, creating the directory if needed.
pub fn write_csv(opts: &ExportOptions, view: &SelectionView<'_>) -> Result<PathBuf> {
    let path = opts.out_path();
    ensure_parent(&path)?;
    let csv = to_csv_string(view)?;
    fs::write(&path, csv)?;
    info!(rows = view.len(), path = %path.display(), "Export: OK");
    Ok(path)
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
