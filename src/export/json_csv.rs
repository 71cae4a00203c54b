use crate::errors::{AppError, AppResult};
use crate::export::model::{csv_headers, session_to_row};
use crate::export::{notify_export_success, SessionExport};
use crate::ui::messages::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Export JSON pretty-printed.
pub(crate) fn export_json(sessions: &[SessionExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(sessions)
        .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

/// Export CSV.
///
/// Fields are joined with plain commas and never quoted; a cost or note
/// containing a comma would shift columns. Kept as-is for compatibility
/// with files produced by earlier releases.
pub(crate) fn export_csv(
    sessions: &[SessionExport],
    path: &Path,
    currency: &str,
) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Never)
        .from_path(path)
        .map_err(|e| AppError::Export(format!("CSV open error: {e}")))?;

    wtr.write_record(csv_headers(currency))
        .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;

    for item in sessions {
        wtr.write_record(session_to_row(item))
            .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
    }

    wtr.flush()
        .map_err(|e| AppError::Export(format!("CSV flush error: {e}")))?;

    notify_export_success("CSV", path);
    Ok(())
}
