use crate::core::metrics::{
    lifetime_totals, monthly_expense_totals, monthly_session_totals, type_cost_breakdown,
};
use crate::errors::AppResult;
use crate::store::Store;
use crate::ui::messages::{header, info};
use crate::utils::date::month_label;
use crate::utils::format::{format_amount, pad_left, pad_right};
use chrono::NaiveDate;

/// Render the `stats` report: monthly charging costs, charge-type
/// breakdown and lifetime totals. When `bounds` is given, only records
/// dated inside the interval contribute.
pub struct StatsLogic;

impl StatsLogic {
    pub fn report(
        store: &mut dyn Store,
        bounds: Option<(NaiveDate, NaiveDate)>,
    ) -> AppResult<()> {
        let profile = store.load_profile()?;
        let mut sessions = store.list_sessions()?;
        let mut expenses = store.list_expenses()?;
        let currency = &profile.currency;

        if let Some((start, end)) = bounds {
            let mut kept = Vec::with_capacity(sessions.len());
            for s in sessions {
                let date = s.date()?;
                if date >= start && date <= end {
                    kept.push(s);
                }
            }
            sessions = kept;

            let mut kept = Vec::with_capacity(expenses.len());
            for e in expenses {
                let date = e.date()?;
                if date >= start && date <= end {
                    kept.push(e);
                }
            }
            expenses = kept;
        }

        if sessions.is_empty() && expenses.is_empty() {
            if bounds.is_some() {
                info("No data found for selected period.");
            } else {
                info("No data recorded yet.");
            }
            return Ok(());
        }

        // ------------------------------------------------
        // Monthly charging costs (per currency, newest last)
        // ------------------------------------------------
        header("Monthly charging cost");
        let monthly = monthly_session_totals(&sessions, currency);
        if monthly.is_empty() {
            println!("  (no costed sessions)");
        }
        for (month, by_currency) in &monthly {
            for (cur, total) in by_currency {
                println!(
                    "  {}  {}",
                    pad_right(&month_label(month), 10),
                    pad_left(&format_amount(*total, cur), 12)
                );
            }
        }

        // ------------------------------------------------
        // Monthly other expenses
        // ------------------------------------------------
        let monthly_exp = monthly_expense_totals(&expenses, currency);
        if !monthly_exp.is_empty() {
            println!();
            header("Monthly vehicle expenses");
            for (month, by_currency) in &monthly_exp {
                for (cur, total) in by_currency {
                    println!(
                        "  {}  {}",
                        pad_right(&month_label(month), 10),
                        pad_left(&format_amount(*total, cur), 12)
                    );
                }
            }
        }

        // ------------------------------------------------
        // Charge-type breakdown
        // ------------------------------------------------
        println!();
        header("Cost by charge type");
        let b = type_cost_breakdown(&sessions);
        println!(
            "  fast      {}",
            pad_left(&format_amount(b.fast, currency), 12)
        );
        println!(
            "  standard  {}",
            pad_left(&format_amount(b.standard, currency), 12)
        );
        println!(
            "  untagged  {}",
            pad_left(&format_amount(b.untagged, currency), 12)
        );

        // ------------------------------------------------
        // Lifetime totals
        // ------------------------------------------------
        println!();
        header("Lifetime");
        let t = lifetime_totals(&sessions, profile.battery_capacity);
        println!("  Sessions:       {}", t.session_count);
        println!("  Total spent:    {}", format_amount(t.total_cost, currency));
        println!("  Avg per charge: {}", format_amount(t.avg_cost, currency));
        println!("  Total energy:   {:.1} kWh", t.total_kwh);

        Ok(())
    }
}
