//! Persistence backends.
//!
//! Two stores implement the same trait: a guest-mode JSON file and an
//! account-scoped SQLite database. The backend is chosen once per
//! invocation from the configuration; everything above this module is
//! backend-agnostic.

use crate::config::Config;
use crate::errors::AppResult;
use crate::models::expense::VehicleExpense;
use crate::models::profile::Profile;
use crate::models::session::ChargingSession;

pub mod local;
pub mod sqlite;

pub use local::LocalStore;
pub use sqlite::SqliteStore;

pub trait Store {
    /// Persist a new session and return it as stored (owner filled in).
    fn add_session(&mut self, session: ChargingSession) -> AppResult<ChargingSession>;

    /// All sessions, newest first.
    fn list_sessions(&mut self) -> AppResult<Vec<ChargingSession>>;

    /// Replace a session by id. Errors with NotFound when the id is unknown.
    fn update_session(&mut self, session: &ChargingSession) -> AppResult<()>;

    fn delete_session(&mut self, id: &str) -> AppResult<()>;

    fn add_expense(&mut self, expense: VehicleExpense) -> AppResult<VehicleExpense>;

    /// All expenses, newest first.
    fn list_expenses(&mut self) -> AppResult<Vec<VehicleExpense>>;

    fn delete_expense(&mut self, id: &str) -> AppResult<()>;

    /// The owner's profile, or defaults when none was saved yet.
    fn load_profile(&mut self) -> AppResult<Profile>;

    fn save_profile(&mut self, profile: &Profile) -> AppResult<()>;

    /// The currently running session, if any. At most one can be active.
    fn active_session(&mut self) -> AppResult<Option<ChargingSession>> {
        let sessions = self.list_sessions()?;
        Ok(sessions.into_iter().find(|s| s.is_active()))
    }
}

/// Open the backend the configuration selects: SQLite when an account is
/// set, the guest JSON file otherwise.
pub fn open(cfg: &Config) -> AppResult<Box<dyn Store>> {
    match &cfg.account {
        Some(account) => Ok(Box::new(SqliteStore::open(&cfg.database, account)?)),
        None => Ok(Box::new(LocalStore::open(&cfg.local_file)?)),
    }
}
