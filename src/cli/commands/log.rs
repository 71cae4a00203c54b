use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::log::LogLogic;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::info;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Log { print } = cmd {
        if *print {
            if !Path::new(&cfg.database).exists() {
                info("No account database found. Run `init` or an --account command first.");
                return Ok(());
            }

            let pool = DbPool::new(&cfg.database)?;
            init_db(&pool.conn)?;
            LogLogic::print(&pool)?;
        }
    }

    Ok(())
}
