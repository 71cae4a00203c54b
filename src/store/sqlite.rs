//! Account-mode store backed by SQLite.
//!
//! Every query is scoped by the owner id so multiple accounts can share
//! one database file. Mutations leave a best-effort trace in the `log`
//! table; a failed log write never fails the operation itself.

use crate::db::initialize::init_db;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::expense::VehicleExpense;
use crate::models::profile::Profile;
use crate::models::session::ChargingSession;
use crate::store::Store;

pub struct SqliteStore {
    pub pool: DbPool,
    user_id: String,
}

impl SqliteStore {
    pub fn open(db_path: &str, user_id: &str) -> AppResult<Self> {
        let pool = DbPool::new(db_path)?;
        init_db(&pool.conn)?;

        Ok(Self {
            pool,
            user_id: user_id.to_string(),
        })
    }

    fn trace(&self, operation: &str, target: &str, message: &str) {
        let _ = ttlog(&self.pool.conn, operation, target, message);
    }
}

impl Store for SqliteStore {
    fn add_session(&mut self, mut session: ChargingSession) -> AppResult<ChargingSession> {
        session.user_id = Some(self.user_id.clone());
        queries::insert_session(&self.pool.conn, &self.user_id, &session)?;
        self.trace("add_session", &session.id, &session.charged_at);
        Ok(session)
    }

    fn list_sessions(&mut self) -> AppResult<Vec<ChargingSession>> {
        queries::list_sessions(&self.pool.conn, &self.user_id)
    }

    fn update_session(&mut self, session: &ChargingSession) -> AppResult<()> {
        let touched = queries::update_session(&self.pool.conn, &self.user_id, session)?;
        if touched == 0 {
            return Err(AppError::NotFound(session.id.clone()));
        }
        self.trace("update_session", &session.id, "");
        Ok(())
    }

    fn delete_session(&mut self, id: &str) -> AppResult<()> {
        let touched = queries::delete_session(&self.pool.conn, &self.user_id, id)?;
        if touched == 0 {
            return Err(AppError::NotFound(id.to_string()));
        }
        self.trace("delete_session", id, "");
        Ok(())
    }

    fn add_expense(&mut self, mut expense: VehicleExpense) -> AppResult<VehicleExpense> {
        expense.user_id = Some(self.user_id.clone());
        queries::insert_expense(&self.pool.conn, &self.user_id, &expense)?;
        self.trace("add_expense", &expense.id, &expense.title);
        Ok(expense)
    }

    fn list_expenses(&mut self) -> AppResult<Vec<VehicleExpense>> {
        queries::list_expenses(&self.pool.conn, &self.user_id)
    }

    fn delete_expense(&mut self, id: &str) -> AppResult<()> {
        let touched = queries::delete_expense(&self.pool.conn, &self.user_id, id)?;
        if touched == 0 {
            return Err(AppError::NotFound(id.to_string()));
        }
        self.trace("delete_expense", id, "");
        Ok(())
    }

    fn load_profile(&mut self) -> AppResult<Profile> {
        Ok(queries::load_profile(&self.pool.conn, &self.user_id)?.unwrap_or_default())
    }

    fn save_profile(&mut self, profile: &Profile) -> AppResult<()> {
        queries::save_profile(&self.pool.conn, &self.user_id, profile)?;
        self.trace("save_profile", &self.user_id, "");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::status::SessionStatus;
    use chrono::Local;

    fn tmp_store(user: &str) -> (tempfile::TempDir, SqliteStore) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test.sqlite");
        let store = SqliteStore::open(path.to_str().unwrap(), user).unwrap();
        (dir, store)
    }

    fn session(start: i32) -> ChargingSession {
        ChargingSession::new(
            Some(1200.0),
            start,
            Some(80),
            Local::now(),
            Some(30.0),
            None,
            None,
            None,
            SessionStatus::Completed,
        )
    }

    #[test]
    fn owner_scoping_isolates_accounts() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shared.sqlite");
        let db = path.to_str().unwrap();

        let mut alice = SqliteStore::open(db, "alice").unwrap();
        let mut bob = SqliteStore::open(db, "bob").unwrap();

        alice.add_session(session(10)).unwrap();

        assert_eq!(alice.list_sessions().unwrap().len(), 1);
        assert!(bob.list_sessions().unwrap().is_empty());
    }

    #[test]
    fn update_unknown_id_is_not_found() {
        let (_dir, mut store) = tmp_store("u1");
        let ghost = session(10);
        let err = store.update_session(&ghost).unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn profile_defaults_when_never_saved() {
        let (_dir, mut store) = tmp_store("u1");
        let profile = store.load_profile().unwrap();
        assert!(profile.battery_capacity.is_none());
        assert_eq!(profile.currency, "JPY");
    }

    #[test]
    fn active_session_found_after_start() {
        let (_dir, mut store) = tmp_store("u1");

        let mut s = session(25);
        s.status = SessionStatus::Active;
        s.end_percent = None;
        store.add_session(s).unwrap();

        let active = store.active_session().unwrap();
        assert!(active.is_some());
    }
}
