use super::category::ExpenseCategory;
use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A maintenance/repair/insurance/tax entry for the vehicle.
///
/// No edit flow exists: expenses are created once and removed with
/// delete + recreate when wrong.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VehicleExpense {
    pub id: String,
    pub title: String,
    pub amount: f64,
    pub expense_date: String, // RFC 3339
    pub category: ExpenseCategory,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub odometer: Option<i64>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub currency: Option<String>,
    pub user_id: Option<String>,
}

impl VehicleExpense {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        title: String,
        amount: f64,
        expense_date: DateTime<Local>,
        category: ExpenseCategory,
        description: Option<String>,
        odometer: Option<i64>,
        location: Option<String>,
        currency: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title,
            amount,
            expense_date: expense_date.to_rfc3339(),
            category,
            description,
            odometer,
            location,
            currency,
            user_id: None,
        }
    }

    /// Calendar date. Accepts both RFC 3339 stamps and the plain
    /// `YYYY-MM-DD` form older records carry.
    pub fn date(&self) -> AppResult<NaiveDate> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(&self.expense_date) {
            return Ok(dt.date_naive());
        }
        NaiveDate::parse_from_str(&self.expense_date, "%Y-%m-%d")
            .map_err(|_| AppError::InvalidDate(self.expense_date.clone()))
    }
}

/// Field checks performed before any persistence call.
pub fn validate_expense(title: &str, amount: f64) -> AppResult<()> {
    if title.trim().is_empty() {
        return Err(AppError::Validation("expense title must not be empty".into()));
    }
    if amount < 0.0 {
        return Err(AppError::Validation(format!(
            "expense amount must not be negative: {amount}"
        )));
    }
    Ok(())
}
