use crate::ui::messages::success;
use rusqlite::{Connection, Error, OptionalExtension, Result};

/// Ensure that the internal `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check if a table exists.
fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Check if `charging_sessions` has a `status` column.
fn sessions_has_status_column(conn: &Connection) -> Result<bool> {
    let mut stmt = conn.prepare("PRAGMA table_info('charging_sessions')")?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == "status" {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Create the `charging_sessions` table with the modern schema.
fn create_sessions_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS charging_sessions (
            id            TEXT PRIMARY KEY,
            user_id       TEXT NOT NULL,
            cost          REAL,
            start_percent INTEGER NOT NULL CHECK(start_percent BETWEEN 0 AND 100),
            end_percent   INTEGER CHECK(end_percent BETWEEN 0 AND 100),
            charged_at    TEXT NOT NULL,
            kwh           REAL,
            charge_type   TEXT CHECK(charge_type IN ('fast','standard')),
            odometer      INTEGER,
            currency      TEXT,
            status        TEXT NOT NULL DEFAULT 'completed' CHECK(status IN ('active','completed'))
        );

        CREATE INDEX IF NOT EXISTS idx_sessions_owner_date ON charging_sessions(user_id, charged_at);
        "#,
    )?;
    Ok(())
}

fn create_expenses_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS vehicle_expenses (
            id           TEXT PRIMARY KEY,
            user_id      TEXT NOT NULL,
            title        TEXT NOT NULL,
            amount       REAL NOT NULL,
            expense_date TEXT NOT NULL,
            category     TEXT NOT NULL CHECK(category IN ('maintenance','repair','insurance','tax','other')),
            description  TEXT,
            odometer     INTEGER,
            location     TEXT,
            currency     TEXT
        );

        CREATE INDEX IF NOT EXISTS idx_expenses_owner_date ON vehicle_expenses(user_id, expense_date);
        "#,
    )?;
    Ok(())
}

fn create_profiles_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS profiles (
            user_id          TEXT PRIMARY KEY,
            battery_capacity REAL,
            home_rate        REAL,
            currency         TEXT NOT NULL DEFAULT 'JPY'
        );
        "#,
    )?;
    Ok(())
}

/// Add the `status` column to databases created before active sessions
/// existed; every pre-existing row is a completed session.
fn migrate_add_status_column(conn: &Connection) -> Result<(), Error> {
    let version = "20260114_0003_add_session_status";

    // 1) Already applied?
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    if chk.query_row([version], |_| Ok(())).optional()?.is_some() {
        return Ok(());
    }

    // 2) Run it
    if !sessions_has_status_column(conn)? {
        conn.execute(
            "ALTER TABLE charging_sessions
             ADD COLUMN status TEXT NOT NULL DEFAULT 'completed'
             CHECK(status IN ('active','completed'));",
            [],
        )
        .map_err(|e| {
            Error::SqliteFailure(
                rusqlite::ffi::Error::new(1),
                Some(format!("Failed to add 'status' column: {}", e)),
            )
        })?;

        success(format!(
            "Migration applied: {} → added 'status' to charging_sessions",
            version
        ));
    }

    // 3) Mark as applied
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, 'Added status flag to charging_sessions')",
        [version],
    )?;

    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    // 1) Ensure log table
    ensure_log_table(conn)?;

    // 2) Core tables
    let sessions_existed = table_exists(conn, "charging_sessions")?;
    create_sessions_table(conn)?;
    create_expenses_table(conn)?;
    create_profiles_table(conn)?;

    if !sessions_existed {
        // Fresh schema already carries status; mark the migration so it
        // never re-runs.
        conn.execute(
            "INSERT OR IGNORE INTO log (date, operation, target, message)
             VALUES (datetime('now'), 'migration_applied',
                     '20260114_0003_add_session_status', 'Fresh schema')",
            [],
        )?;
        return Ok(());
    }

    // 3) Column upgrades for databases created by older versions
    migrate_add_status_column(conn)?;

    Ok(())
}
