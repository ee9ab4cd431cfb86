use crate::errors::{AppError, AppResult};
use crate::export::{MonthExport, notify_export_success};
use crate::ui::messages::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Export JSON pretty-printed.
pub(crate) fn export_json(data: &MonthExport, path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(data)
        .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

/// Export CSV: one row per record (header from serde), then the totals
/// as `label,value` lines.
pub(crate) fn export_csv(data: &MonthExport, path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let csv_err = |e: csv::Error| AppError::Export(format!("CSV write error: {e}"));

    let mut wtr = csv::WriterBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(|e| AppError::Export(format!("CSV open error: {e}")))?;

    for item in &data.records {
        wtr.serialize(item).map_err(csv_err)?;
    }

    if data.records.is_empty() {
        wtr.write_record(["date", "hours"]).map_err(csv_err)?;
    }

    wtr.write_record([""]).map_err(csv_err)?;
    for (label, value) in data.totals_rows() {
        wtr.write_record([label, value.as_str()]).map_err(csv_err)?;
    }

    wtr.flush()?;

    notify_export_success("CSV", path);
    Ok(())
}
