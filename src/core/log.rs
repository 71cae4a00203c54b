use crate::db::log::load_log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};

/// Print the internal operation log (account mode only).
pub struct LogLogic;

impl LogLogic {
    pub fn print(pool: &DbPool) -> AppResult<()> {
        let rows = load_log(&pool.conn)?;

        if rows.is_empty() {
            info("Log is empty.");
            return Ok(());
        }

        header("Operation log");
        for (date, operation, message) in rows {
            if message.is_empty() {
                println!("  {}  {}", date, operation);
            } else {
                println!("  {}  {}  {}", date, operation, message);
            }
        }

        Ok(())
    }
}
