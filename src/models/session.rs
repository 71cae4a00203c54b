use super::{charge_type::ChargeType, status::SessionStatus};
use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One charging event.
///
/// The JSON field names are a compatibility contract: `id`, `cost`,
/// `start_percent`, `end_percent`, `charged_at`, `user_id`, `kwh` and
/// `charge_type` must match the shapes already persisted by older guest
/// stores. `odometer`, `currency` and `status` were added later and
/// deserialize with defaults when absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChargingSession {
    pub id: String,
    pub cost: Option<f64>,
    pub start_percent: i32,
    pub end_percent: Option<i32>,
    pub charged_at: String, // RFC 3339
    pub user_id: Option<String>,
    #[serde(default)]
    pub kwh: Option<f64>,
    #[serde(default)]
    pub charge_type: Option<ChargeType>,
    #[serde(default)]
    pub odometer: Option<i64>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub status: SessionStatus,
}

impl ChargingSession {
    /// High-level constructor for sessions created from the CLI.
    /// - Generates a fresh uuid
    /// - Leaves `user_id` empty; the store fills it in when scoped
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        cost: Option<f64>,
        start_percent: i32,
        end_percent: Option<i32>,
        charged_at: DateTime<Local>,
        kwh: Option<f64>,
        charge_type: Option<ChargeType>,
        odometer: Option<i64>,
        currency: Option<String>,
        status: SessionStatus,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            cost,
            start_percent,
            end_percent,
            charged_at: charged_at.to_rfc3339(),
            user_id: None,
            kwh,
            charge_type,
            odometer,
            currency,
            status,
        }
    }

    /// Calendar date of the session, in the local offset stored at creation.
    pub fn date(&self) -> AppResult<NaiveDate> {
        DateTime::parse_from_rfc3339(&self.charged_at)
            .map(|dt| dt.date_naive())
            .map_err(|_| AppError::InvalidDate(self.charged_at.clone()))
    }

    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }
}

/// Reject out-of-range battery percentages before any persistence call.
pub fn validate_percent(p: i32) -> AppResult<()> {
    if (0..=100).contains(&p) {
        Ok(())
    } else {
        Err(AppError::InvalidPercent(p))
    }
}
