use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseCategory {
    Maintenance,
    Repair,
    Insurance,
    Tax,
    Other,
}

impl ExpenseCategory {
    pub fn to_db_str(&self) -> &'static str {
        match self {
            ExpenseCategory::Maintenance => "maintenance",
            ExpenseCategory::Repair => "repair",
            ExpenseCategory::Insurance => "insurance",
            ExpenseCategory::Tax => "tax",
            ExpenseCategory::Other => "other",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "maintenance" => Some(ExpenseCategory::Maintenance),
            "repair" => Some(ExpenseCategory::Repair),
            "insurance" => Some(ExpenseCategory::Insurance),
            "tax" => Some(ExpenseCategory::Tax),
            "other" => Some(ExpenseCategory::Other),
            _ => None,
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        ExpenseCategory::from_db_str(&code.to_lowercase())
    }

    pub fn label(&self) -> &'static str {
        match self {
            ExpenseCategory::Maintenance => "Maintenance",
            ExpenseCategory::Repair => "Repair",
            ExpenseCategory::Insurance => "Insurance",
            ExpenseCategory::Tax => "Tax",
            ExpenseCategory::Other => "Other",
        }
    }
}
