use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::db::stats;
use crate::errors::AppResult;
use crate::ui::messages::{error, info, success};
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db { check, info: show } = cmd {
        if !Path::new(&cfg.database).exists() {
            info("No account database found. Run `init` or an --account command first.");
            return Ok(());
        }

        let mut pool = DbPool::new(&cfg.database)?;
        init_db(&pool.conn)?;

        if *show {
            stats::print_db_info(&mut pool, &cfg.database)?;
        }

        if *check {
            info("Running integrity check…");
            if stats::check_integrity(&mut pool)? {
                success("Integrity check passed.");
            } else {
                error("Integrity check failed.");
            }
        }
    }

    Ok(())
}
