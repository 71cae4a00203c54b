use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::SessionExport;
use crate::export::range::parse_range;
use crate::export::ExportFormat;
use crate::store::Store;
use crate::ui::messages::warning;

use chrono::NaiveDate;
use std::path::Path;

/// High-level export flow.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the session history.
    ///
    /// - `file`: absolute output path
    /// - `range`: `None`, `"all"` or an expression such as:
    ///   - `YYYY`
    ///   - `YYYY-MM`
    ///   - `YYYY-MM-DD`
    ///   - `YYYY:YYYY`
    ///   - `YYYY-MM:YYYY-MM`
    ///   - `YYYY-MM-DD:YYYY-MM-DD`
    pub fn export(
        store: &mut dyn Store,
        format: ExportFormat,
        file: &str,
        range: &Option<String>,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "Output file path must be absolute: {file}"
            )));
        }

        ensure_writable(path, force)?;

        let date_bounds: Option<(NaiveDate, NaiveDate)> = match range {
            None => None,
            Some(r) if r.eq_ignore_ascii_case("all") => None,
            Some(r) => Some(parse_range(r)?),
        };

        let currency = store.load_profile()?.currency;
        let records = load_sessions(store, date_bounds)?;

        if records.is_empty() {
            warning("No sessions found for selected range.");
            return Ok(());
        }

        match format {
            ExportFormat::Csv => export_csv(&records, path, &currency)?,
            ExportFormat::Json => export_json(&records, path)?,
        }

        Ok(())
    }
}

/// Load sessions within the bounds, oldest first for readable output.
fn load_sessions(
    store: &mut dyn Store,
    bounds: Option<(NaiveDate, NaiveDate)>,
) -> AppResult<Vec<SessionExport>> {
    let mut sessions = store.list_sessions()?;
    sessions.reverse();

    let mut records = Vec::new();
    for s in &sessions {
        if let Some((start, end)) = bounds {
            let date = s.date()?;
            if date < start || date > end {
                continue;
            }
        }
        records.push(SessionExport::from_session(s));
    }

    Ok(records)
}
