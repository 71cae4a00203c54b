use serde::{Deserialize, Serialize};

pub const DEFAULT_CURRENCY: &str = "JPY";

/// Per-owner vehicle settings: battery capacity, home electricity rate and
/// preferred currency. Singleton per owner, upserted on save.
///
/// A missing profile is not an error; callers fall back to `Profile::default()`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub battery_capacity: Option<f64>, // kWh
    pub home_rate: Option<f64>,        // cost per kWh
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            battery_capacity: None,
            home_rate: None,
            currency: default_currency(),
        }
    }
}
