use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::ev_catalog;
use crate::store;
use crate::ui::messages::{header, success};
use crate::utils::format::pad_right;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Profile {
        capacity,
        rate,
        currency,
        ev,
        list_evs,
        print,
    } = cmd
    {
        if *list_evs {
            header("EV model catalogue");
            for m in ev_catalog::EV_CATALOG {
                let name = match m.trim {
                    Some(trim) => format!("{} {} ({})", m.make, m.model, trim),
                    None => format!("{} {}", m.make, m.model),
                };
                println!(
                    "  {}  {}  {:.1} kWh",
                    pad_right(m.id, 20),
                    pad_right(&name, 40),
                    m.capacity
                );
            }
            return Ok(());
        }

        let mut store = store::open(cfg)?;
        let mut profile = store.load_profile()?;
        let mut changed = false;

        if let Some(model_id) = ev {
            let model = ev_catalog::find(model_id)
                .ok_or_else(|| AppError::NotFound(model_id.clone()))?;
            profile.battery_capacity = Some(model.capacity);
            changed = true;
        }
        if let Some(cap) = capacity {
            if *cap <= 0.0 {
                return Err(AppError::Validation(format!(
                    "battery capacity must be positive: {cap}"
                )));
            }
            profile.battery_capacity = Some(*cap);
            changed = true;
        }
        if let Some(r) = rate {
            if *r < 0.0 {
                return Err(AppError::Validation(format!(
                    "home rate must not be negative: {r}"
                )));
            }
            profile.home_rate = Some(*r);
            changed = true;
        }
        if let Some(cur) = currency {
            if cur.trim().is_empty() {
                return Err(AppError::Validation("currency must not be empty".into()));
            }
            profile.currency = cur.trim().to_uppercase();
            changed = true;
        }

        if changed {
            store.save_profile(&profile)?;
            success("Profile updated.");
        }

        if *print || !changed {
            header("Vehicle profile");
            match profile.battery_capacity {
                Some(cap) => println!("  Battery capacity: {:.1} kWh", cap),
                None => println!("  Battery capacity: (not set)"),
            }
            match profile.home_rate {
                Some(r) => println!("  Home rate:        {} / kWh", r),
                None => println!("  Home rate:        (not set)"),
            }
            println!("  Currency:         {}", profile.currency);
        }
    }

    Ok(())
}
