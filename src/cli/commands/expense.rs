use crate::cli::commands::ask_confirmation;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::expense::ExpenseLogic;
use crate::errors::{AppError, AppResult};
use crate::export::parse_range;
use crate::models::category::ExpenseCategory;
use crate::store;
use crate::ui::messages::info;
use crate::utils::date::parse_datetime;
use crate::utils::format::{format_amount, pad_left, pad_right, short_id};
use chrono::Local;

/// Handle `add-expense`, `del-expense` and `expenses`.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    match cmd {
        Commands::AddExpense {
            title,
            amount,
            date,
            category,
            odometer,
            location,
            notes,
        } => {
            let category = ExpenseCategory::from_code(category)
                .ok_or_else(|| AppError::InvalidCategory(category.clone()))?;
            let date = match date {
                Some(raw) => {
                    parse_datetime(raw).ok_or_else(|| AppError::InvalidDate(raw.clone()))?
                }
                None => Local::now(),
            };

            let mut store = store::open(cfg)?;
            ExpenseLogic::add(
                store.as_mut(),
                title.clone(),
                *amount,
                date,
                category,
                notes.clone(),
                *odometer,
                location.clone(),
            )?;
        }

        Commands::DelExpense { id, yes } => {
            let mut store = store::open(cfg)?;
            let expense = ExpenseLogic::resolve(store.as_mut(), id)?;

            if !yes {
                let prompt = format!(
                    "Delete expense {} ({})? This action is irreversible.",
                    short_id(&expense.id),
                    expense.title
                );
                if !ask_confirmation(&prompt) {
                    info("Operation cancelled.");
                    return Ok(());
                }
            }

            ExpenseLogic::delete(store.as_mut(), &expense.id)?;
        }

        Commands::Expenses { period } => {
            let bounds = match period {
                None => None,
                Some(p) if p.eq_ignore_ascii_case("all") => None,
                Some(p) => Some(parse_range(p)?),
            };

            let mut store = store::open(cfg)?;
            let profile = store.load_profile()?;
            let expenses = store.list_expenses()?;

            let mut shown = 0usize;
            println!(
                "{}  {}  {}  {}  {}",
                pad_right("ID", 8),
                pad_right("DATE", 10),
                pad_right("CATEGORY", 12),
                pad_left("AMOUNT", 10),
                "TITLE",
            );

            for e in &expenses {
                if let Some((start, end)) = bounds {
                    let date = e.date()?;
                    if date < start || date > end {
                        continue;
                    }
                }

                println!(
                    "{}  {}  {}  {}  {}",
                    pad_right(short_id(&e.id), 8),
                    pad_right(&e.date()?.to_string(), 10),
                    pad_right(e.category.label(), 12),
                    pad_left(
                        &format_amount(
                            e.amount,
                            e.currency.as_deref().unwrap_or(profile.currency.as_str())
                        ),
                        10
                    ),
                    e.title,
                );
                shown += 1;
            }

            if shown == 0 {
                info("No expenses found.");
            }
        }

        _ => {}
    }

    Ok(())
}
