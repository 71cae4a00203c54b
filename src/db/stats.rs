use crate::db::pool::DbPool;
use rusqlite::OptionalExtension;
use std::fs;

const CYAN: &str = "\x1b[36m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const GREY: &str = "\x1b[90m";
const RESET: &str = "\x1b[0m";

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) RECORD COUNTS
    //
    let sessions: i64 =
        pool.conn
            .query_row("SELECT COUNT(*) FROM charging_sessions", [], |row| {
                row.get(0)
            })?;
    let expenses: i64 =
        pool.conn
            .query_row("SELECT COUNT(*) FROM vehicle_expenses", [], |row| row.get(0))?;

    println!(
        "{}• Charging sessions:{} {}{}{}",
        CYAN, RESET, GREEN, sessions, RESET
    );
    println!(
        "{}• Vehicle expenses:{}  {}{}{}",
        CYAN, RESET, GREEN, expenses, RESET
    );

    //
    // 3) DATE RANGE
    //
    let first: Option<String> = pool
        .conn
        .query_row(
            "SELECT charged_at FROM charging_sessions ORDER BY charged_at ASC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let last: Option<String> = pool
        .conn
        .query_row(
            "SELECT charged_at FROM charging_sessions ORDER BY charged_at DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let fmt_first = first.unwrap_or_else(|| format!("{GREY}--{RESET}"));
    let fmt_last = last.unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• Session range:{}", CYAN, RESET);
    println!("    from: {}", fmt_first);
    println!("    to:   {}", fmt_last);

    println!();
    Ok(())
}

/// Run PRAGMA integrity_check and report the verdict.
pub fn check_integrity(pool: &mut DbPool) -> rusqlite::Result<bool> {
    let verdict: String = pool
        .conn
        .query_row("PRAGMA integrity_check", [], |row| row.get(0))?;
    Ok(verdict == "ok")
}
