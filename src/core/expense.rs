use crate::errors::{AppError, AppResult};
use crate::models::category::ExpenseCategory;
use crate::models::expense::{validate_expense, VehicleExpense};
use crate::store::Store;
use crate::ui::messages::success;
use crate::utils::format::short_id;
use chrono::{DateTime, Local};

/// High-level business logic for the expense commands.
pub struct ExpenseLogic;

impl ExpenseLogic {
    #[allow(clippy::too_many_arguments)]
    pub fn add(
        store: &mut dyn Store,
        title: String,
        amount: f64,
        date: DateTime<Local>,
        category: ExpenseCategory,
        description: Option<String>,
        odometer: Option<i64>,
        location: Option<String>,
    ) -> AppResult<VehicleExpense> {
        validate_expense(&title, amount)?;

        let profile = store.load_profile()?;
        let expense = VehicleExpense::new(
            title,
            amount,
            date,
            category,
            description,
            odometer,
            location,
            Some(profile.currency.clone()),
        );

        let stored = store.add_expense(expense)?;
        success(format!(
            "Recorded expense {} ({}).",
            short_id(&stored.id),
            stored.title
        ));

        Ok(stored)
    }

    pub fn delete(store: &mut dyn Store, id: &str) -> AppResult<()> {
        let expense = Self::resolve(store, id)?;
        store.delete_expense(&expense.id)?;
        success(format!("Expense {} deleted.", short_id(&expense.id)));
        Ok(())
    }

    /// Find an expense by full id or unique prefix.
    pub fn resolve(store: &mut dyn Store, id: &str) -> AppResult<VehicleExpense> {
        let expenses = store.list_expenses()?;

        if let Some(e) = expenses.iter().find(|e| e.id == id) {
            return Ok(e.clone());
        }

        let matches: Vec<&VehicleExpense> =
            expenses.iter().filter(|e| e.id.starts_with(id)).collect();
        match matches.len() {
            0 => Err(AppError::NotFound(id.to_string())),
            1 => Ok(matches[0].clone()),
            _ => Err(AppError::Validation(format!(
                "Id prefix '{}' is ambiguous ({} matches).",
                id,
                matches.len()
            ))),
        }
    }
}
