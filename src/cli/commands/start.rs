use crate::cli::commands::{parse_at, parse_charge_type};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::session::SessionLogic;
use crate::errors::AppResult;
use crate::store;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Start {
        percent,
        charge_type,
        at,
    } = cmd
    {
        let charge_type = parse_charge_type(charge_type.as_deref())?;
        let when = parse_at(at.as_deref())?;

        let mut store = store::open(cfg)?;
        SessionLogic::start(store.as_mut(), *percent, charge_type, when)?;
    }

    Ok(())
}
