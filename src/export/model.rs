use crate::models::session::ChargingSession;
use serde::Serialize;

/// Flat per-session record for export.
#[derive(Serialize, Clone, Debug)]
pub struct SessionExport {
    pub date: String,
    pub cost: Option<f64>,
    pub start_percent: i32,
    pub end_percent: Option<i32>,
    pub kwh: Option<f64>,
    pub charge_type: String,
}

impl SessionExport {
    pub fn from_session(s: &ChargingSession) -> Self {
        Self {
            date: s
                .date()
                .map(|d| d.to_string())
                .unwrap_or_else(|_| s.charged_at.clone()),
            cost: s.cost,
            start_percent: s.start_percent,
            end_percent: s.end_percent,
            kwh: s.kwh,
            charge_type: s
                .charge_type
                .map(|t| t.to_db_str().to_string())
                .unwrap_or_default(),
        }
    }
}

/// CSV header. The cost column carries the currency label.
pub(crate) fn csv_headers(currency: &str) -> Vec<String> {
    vec![
        "Date".to_string(),
        format!("Cost ({currency})"),
        "Start %".to_string(),
        "End %".to_string(),
        "kWh".to_string(),
        "Type".to_string(),
    ]
}

pub(crate) fn session_to_row(e: &SessionExport) -> Vec<String> {
    vec![
        e.date.clone(),
        e.cost.map(|c| c.to_string()).unwrap_or_default(),
        e.start_percent.to_string(),
        e.end_percent.map(|p| p.to_string()).unwrap_or_default(),
        e.kwh.map(|k| k.to_string()).unwrap_or_default(),
        e.charge_type.clone(),
    ]
}
