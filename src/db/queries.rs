use crate::errors::{AppError, AppResult};
use crate::models::category::ExpenseCategory;
use crate::models::charge_type::ChargeType;
use crate::models::expense::VehicleExpense;
use crate::models::profile::Profile;
use crate::models::session::ChargingSession;
use crate::models::status::SessionStatus;
use rusqlite::{params, Connection, Row};

fn conversion_err(what: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(what))
}

pub fn map_session_row(row: &Row) -> rusqlite::Result<ChargingSession> {
    let charge_type: Option<String> = row.get("charge_type")?;
    let charge_type = match charge_type {
        Some(s) => Some(
            ChargeType::from_db_str(&s)
                .ok_or_else(|| conversion_err(AppError::InvalidChargeType(s.clone())))?,
        ),
        None => None,
    };

    let status_str: String = row.get("status")?;
    let status = SessionStatus::from_db_str(&status_str).ok_or_else(|| {
        conversion_err(AppError::Validation(format!("invalid status: {status_str}")))
    })?;

    Ok(ChargingSession {
        id: row.get("id")?,
        cost: row.get("cost")?,
        start_percent: row.get("start_percent")?,
        end_percent: row.get("end_percent")?,
        charged_at: row.get("charged_at")?,
        user_id: row.get("user_id")?,
        kwh: row.get("kwh")?,
        charge_type,
        odometer: row.get("odometer")?,
        currency: row.get("currency")?,
        status,
    })
}

pub fn map_expense_row(row: &Row) -> rusqlite::Result<VehicleExpense> {
    let cat_str: String = row.get("category")?;
    let category = ExpenseCategory::from_db_str(&cat_str)
        .ok_or_else(|| conversion_err(AppError::InvalidCategory(cat_str.clone())))?;

    Ok(VehicleExpense {
        id: row.get("id")?,
        title: row.get("title")?,
        amount: row.get("amount")?,
        expense_date: row.get("expense_date")?,
        category,
        description: row.get("description")?,
        odometer: row.get("odometer")?,
        location: row.get("location")?,
        currency: row.get("currency")?,
        user_id: row.get("user_id")?,
    })
}

// ---------------------------------------------------------------------------
// charging_sessions — every query scoped by owner
// ---------------------------------------------------------------------------

pub fn insert_session(conn: &Connection, owner: &str, s: &ChargingSession) -> AppResult<()> {
    conn.execute(
        "INSERT INTO charging_sessions
         (id, user_id, cost, start_percent, end_percent, charged_at, kwh, charge_type, odometer, currency, status)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
        params![
            s.id,
            owner,
            s.cost,
            s.start_percent,
            s.end_percent,
            s.charged_at,
            s.kwh,
            s.charge_type.map(|t| t.to_db_str()),
            s.odometer,
            s.currency,
            s.status.to_db_str(),
        ],
    )?;
    Ok(())
}

/// Newest first, same ordering the remote interface contract mandates.
pub fn list_sessions(conn: &Connection, owner: &str) -> AppResult<Vec<ChargingSession>> {
    let mut stmt = conn.prepare(
        "SELECT * FROM charging_sessions
         WHERE user_id = ?1
         ORDER BY charged_at DESC",
    )?;

    let rows = stmt.query_map([owner], map_session_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Update a session by id (all fields except id/user_id).
/// Returns the number of touched rows so callers can detect a missing id.
pub fn update_session(conn: &Connection, owner: &str, s: &ChargingSession) -> AppResult<usize> {
    let n = conn.execute(
        "UPDATE charging_sessions
         SET cost = ?1, start_percent = ?2, end_percent = ?3,
             charged_at = ?4, kwh = ?5, charge_type = ?6,
             odometer = ?7, currency = ?8, status = ?9
         WHERE id = ?10 AND user_id = ?11",
        params![
            s.cost,
            s.start_percent,
            s.end_percent,
            s.charged_at,
            s.kwh,
            s.charge_type.map(|t| t.to_db_str()),
            s.odometer,
            s.currency,
            s.status.to_db_str(),
            s.id,
            owner,
        ],
    )?;
    Ok(n)
}

pub fn delete_session(conn: &Connection, owner: &str, id: &str) -> AppResult<usize> {
    let n = conn.execute(
        "DELETE FROM charging_sessions WHERE id = ?1 AND user_id = ?2",
        params![id, owner],
    )?;
    Ok(n)
}

// ---------------------------------------------------------------------------
// vehicle_expenses
// ---------------------------------------------------------------------------

pub fn insert_expense(conn: &Connection, owner: &str, e: &VehicleExpense) -> AppResult<()> {
    conn.execute(
        "INSERT INTO vehicle_expenses
         (id, user_id, title, amount, expense_date, category, description, odometer, location, currency)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
        params![
            e.id,
            owner,
            e.title,
            e.amount,
            e.expense_date,
            e.category.to_db_str(),
            e.description,
            e.odometer,
            e.location,
            e.currency,
        ],
    )?;
    Ok(())
}

pub fn list_expenses(conn: &Connection, owner: &str) -> AppResult<Vec<VehicleExpense>> {
    let mut stmt = conn.prepare(
        "SELECT * FROM vehicle_expenses
         WHERE user_id = ?1
         ORDER BY expense_date DESC",
    )?;

    let rows = stmt.query_map([owner], map_expense_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn delete_expense(conn: &Connection, owner: &str, id: &str) -> AppResult<usize> {
    let n = conn.execute(
        "DELETE FROM vehicle_expenses WHERE id = ?1 AND user_id = ?2",
        params![id, owner],
    )?;
    Ok(n)
}

// ---------------------------------------------------------------------------
// profiles — singleton per owner
// ---------------------------------------------------------------------------

pub fn load_profile(conn: &Connection, owner: &str) -> AppResult<Option<Profile>> {
    use rusqlite::OptionalExtension;

    let profile = conn
        .query_row(
            "SELECT battery_capacity, home_rate, currency
             FROM profiles WHERE user_id = ?1",
            [owner],
            |row| {
                Ok(Profile {
                    battery_capacity: row.get(0)?,
                    home_rate: row.get(1)?,
                    currency: row.get(2)?,
                })
            },
        )
        .optional()?;

    Ok(profile)
}

pub fn save_profile(conn: &Connection, owner: &str, p: &Profile) -> AppResult<()> {
    conn.execute(
        "INSERT INTO profiles (user_id, battery_capacity, home_rate, currency)
         VALUES (?1, ?2, ?3, ?4)
         ON CONFLICT(user_id) DO UPDATE SET
             battery_capacity = excluded.battery_capacity,
             home_rate        = excluded.home_rate,
             currency         = excluded.currency",
        params![owner, p.battery_capacity, p.home_rate, p.currency],
    )?;
    Ok(())
}
