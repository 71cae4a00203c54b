use serde::{Deserialize, Serialize};

/// Connector/speed category of a charging session.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChargeType {
    Fast,
    Standard,
}

impl ChargeType {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            ChargeType::Fast => "fast",
            ChargeType::Standard => "standard",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "fast" => Some(ChargeType::Fast),
            "standard" => Some(ChargeType::Standard),
            _ => None,
        }
    }

    /// Helper: convert input from the CLI (case-insensitive)
    pub fn from_code(code: &str) -> Option<Self> {
        ChargeType::from_db_str(&code.to_lowercase())
    }

    pub fn label(&self) -> &'static str {
        match self {
            ChargeType::Fast => "Fast",
            ChargeType::Standard => "Standard",
        }
    }
}
