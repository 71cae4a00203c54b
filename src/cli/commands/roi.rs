use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::roi::{estimate, RoiInputs};
use crate::errors::AppResult;
use crate::store;
use crate::ui::messages::{header, info};
use crate::utils::format::format_amount;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Roi {
        gas_price,
        gas_mileage,
        ev_mileage,
        distance,
    } = cmd
    {
        let mut store = store::open(cfg)?;
        let profile = store.load_profile()?;
        let sessions = store.list_sessions()?;

        let inputs = RoiInputs {
            gas_price: *gas_price,
            gas_mileage: *gas_mileage,
            ev_mileage: *ev_mileage,
            distance_per_year: *distance,
        };

        match estimate(&sessions, &inputs) {
            None => {
                info("Not enough data for an estimate: check the inputs and record costed sessions with kWh or odometer readings.");
            }
            Some(est) => {
                let cur = &profile.currency;
                header("Yearly cost estimate");
                println!(
                    "  Gas car:  {}",
                    format_amount(est.annual_gas_cost, cur)
                );
                println!(
                    "  EV:       {}",
                    format_amount(est.annual_ev_cost, cur)
                );
                println!(
                    "  Savings:  {} ({:.1}%)",
                    format_amount(est.annual_savings, cur),
                    est.savings_percent
                );
            }
        }
    }

    Ok(())
}
