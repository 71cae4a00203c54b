use crate::cli::commands::{parse_at, parse_charge_type};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::session::{SessionLogic, SessionPatch};
use crate::errors::AppResult;
use crate::store;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        id,
        start,
        end,
        cost,
        kwh,
        charge_type,
        odometer,
        at,
    } = cmd
    {
        let charge_type = parse_charge_type(charge_type.as_deref())?;
        let charged_at = match at {
            Some(_) => Some(parse_at(at.as_deref())?),
            None => None,
        };

        let patch = SessionPatch {
            cost: *cost,
            start_percent: *start,
            end_percent: *end,
            kwh: *kwh,
            charge_type,
            odometer: *odometer,
            charged_at,
        };

        let mut store = store::open(cfg)?;
        SessionLogic::edit(store.as_mut(), id, patch)?;
    }

    Ok(())
}
