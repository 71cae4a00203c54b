use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::session::SessionLogic;
use crate::errors::AppResult;
use crate::store;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Finish {
        end,
        cost,
        kwh,
        home,
    } = cmd
    {
        let mut store = store::open(cfg)?;
        SessionLogic::finish(store.as_mut(), *end, *cost, *kwh, *home)?;
    }

    Ok(())
}
