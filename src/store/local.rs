//! Guest-mode store: a single JSON file of string keys.
//!
//! The file is a flat object whose values are themselves JSON-encoded
//! strings. The key names are a compatibility contract with data written
//! by earlier releases and must not change:
//!
//!   ev_charging_sessions   JSON array of sessions
//!   ev_vehicle_expenses    JSON array of expenses
//!   evc_battery_capacity   number as string
//!   evc_home_rate          number as string
//!   evc_currency           currency code
//!
//! Every mutation rewrites the whole file. Unknown keys are preserved.

use crate::errors::{AppError, AppResult};
use crate::models::expense::VehicleExpense;
use crate::models::profile::Profile;
use crate::models::session::ChargingSession;
use crate::store::Store;
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

pub const KEY_SESSIONS: &str = "ev_charging_sessions";
pub const KEY_EXPENSES: &str = "ev_vehicle_expenses";
pub const KEY_CAPACITY: &str = "evc_battery_capacity";
pub const KEY_HOME_RATE: &str = "evc_home_rate";
pub const KEY_CURRENCY: &str = "evc_currency";

pub struct LocalStore {
    path: PathBuf,
    data: Map<String, Value>,
}

impl LocalStore {
    pub fn open(path: &str) -> AppResult<Self> {
        let path = PathBuf::from(path);

        let data = if path.exists() {
            let content = fs::read_to_string(&path)?;
            if content.trim().is_empty() {
                Map::new()
            } else {
                let value: Value = serde_json::from_str(&content)?;
                match value {
                    Value::Object(map) => map,
                    _ => {
                        return Err(AppError::LocalStore(format!(
                            "{}: expected a JSON object at top level",
                            path.display()
                        )))
                    }
                }
            }
        } else {
            Map::new()
        };

        Ok(Self { path, data })
    }

    fn flush(&self) -> AppResult<()> {
        if let Some(parent) = Path::new(&self.path).parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let content = serde_json::to_string_pretty(&Value::Object(self.data.clone()))?;
        fs::write(&self.path, content)?;
        Ok(())
    }

    /// Decode a list stored under `key`. Values are JSON strings containing
    /// an array; a missing key is an empty list.
    fn read_list<T: serde::de::DeserializeOwned>(&self, key: &str) -> AppResult<Vec<T>> {
        match self.data.get(key) {
            Some(Value::String(raw)) => Ok(serde_json::from_str(raw)?),
            Some(other) => Err(AppError::LocalStore(format!(
                "key {key} holds {other:?}, expected a string"
            ))),
            None => Ok(Vec::new()),
        }
    }

    fn write_list<T: serde::Serialize>(&mut self, key: &str, list: &[T]) -> AppResult<()> {
        let raw = serde_json::to_string(list)?;
        self.data.insert(key.to_string(), Value::String(raw));
        self.flush()
    }

    fn read_str(&self, key: &str) -> Option<String> {
        match self.data.get(key) {
            Some(Value::String(s)) => Some(s.clone()),
            _ => None,
        }
    }
}

impl Store for LocalStore {
    fn add_session(&mut self, session: ChargingSession) -> AppResult<ChargingSession> {
        let mut sessions: Vec<ChargingSession> = self.read_list(KEY_SESSIONS)?;
        // Newest first, matching list order.
        sessions.insert(0, session.clone());
        self.write_list(KEY_SESSIONS, &sessions)?;
        Ok(session)
    }

    fn list_sessions(&mut self) -> AppResult<Vec<ChargingSession>> {
        let mut sessions: Vec<ChargingSession> = self.read_list(KEY_SESSIONS)?;
        sessions.sort_by(|a, b| b.charged_at.cmp(&a.charged_at));
        Ok(sessions)
    }

    fn update_session(&mut self, session: &ChargingSession) -> AppResult<()> {
        let mut sessions: Vec<ChargingSession> = self.read_list(KEY_SESSIONS)?;

        let slot = sessions
            .iter_mut()
            .find(|s| s.id == session.id)
            .ok_or_else(|| AppError::NotFound(session.id.clone()))?;
        *slot = session.clone();

        self.write_list(KEY_SESSIONS, &sessions)
    }

    fn delete_session(&mut self, id: &str) -> AppResult<()> {
        let mut sessions: Vec<ChargingSession> = self.read_list(KEY_SESSIONS)?;

        let before = sessions.len();
        sessions.retain(|s| s.id != id);
        if sessions.len() == before {
            return Err(AppError::NotFound(id.to_string()));
        }

        self.write_list(KEY_SESSIONS, &sessions)
    }

    fn add_expense(&mut self, expense: VehicleExpense) -> AppResult<VehicleExpense> {
        let mut expenses: Vec<VehicleExpense> = self.read_list(KEY_EXPENSES)?;
        expenses.insert(0, expense.clone());
        self.write_list(KEY_EXPENSES, &expenses)?;
        Ok(expense)
    }

    fn list_expenses(&mut self) -> AppResult<Vec<VehicleExpense>> {
        let mut expenses: Vec<VehicleExpense> = self.read_list(KEY_EXPENSES)?;
        expenses.sort_by(|a, b| b.expense_date.cmp(&a.expense_date));
        Ok(expenses)
    }

    fn delete_expense(&mut self, id: &str) -> AppResult<()> {
        let mut expenses: Vec<VehicleExpense> = self.read_list(KEY_EXPENSES)?;

        let before = expenses.len();
        expenses.retain(|e| e.id != id);
        if expenses.len() == before {
            return Err(AppError::NotFound(id.to_string()));
        }

        self.write_list(KEY_EXPENSES, &expenses)
    }

    fn load_profile(&mut self) -> AppResult<Profile> {
        let mut profile = Profile::default();

        if let Some(raw) = self.read_str(KEY_CAPACITY) {
            profile.battery_capacity = raw.parse().ok();
        }
        if let Some(raw) = self.read_str(KEY_HOME_RATE) {
            profile.home_rate = raw.parse().ok();
        }
        if let Some(cur) = self.read_str(KEY_CURRENCY) {
            if !cur.is_empty() {
                profile.currency = cur;
            }
        }

        Ok(profile)
    }

    fn save_profile(&mut self, profile: &Profile) -> AppResult<()> {
        match profile.battery_capacity {
            Some(cap) => {
                self.data
                    .insert(KEY_CAPACITY.to_string(), Value::String(cap.to_string()));
            }
            None => {
                self.data.remove(KEY_CAPACITY);
            }
        }
        match profile.home_rate {
            Some(rate) => {
                self.data
                    .insert(KEY_HOME_RATE.to_string(), Value::String(rate.to_string()));
            }
            None => {
                self.data.remove(KEY_HOME_RATE);
            }
        }
        self.data.insert(
            KEY_CURRENCY.to_string(),
            Value::String(profile.currency.clone()),
        );

        self.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::status::SessionStatus;
    use chrono::Local;

    fn tmp_store() -> (tempfile::TempDir, LocalStore) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("local.json");
        let store = LocalStore::open(path.to_str().unwrap()).unwrap();
        (dir, store)
    }

    fn session(start: i32, end: Option<i32>) -> ChargingSession {
        ChargingSession::new(
            Some(500.0),
            start,
            end,
            Local::now(),
            None,
            None,
            None,
            None,
            SessionStatus::Completed,
        )
    }

    #[test]
    fn add_then_list_prepends() {
        let (_dir, mut store) = tmp_store();

        let a = store.add_session(session(20, Some(80))).unwrap();
        let b = store.add_session(session(30, Some(90))).unwrap();

        let listed = store.list_sessions().unwrap();
        assert_eq!(listed.len(), 2);
        // Same timestamp second, so insertion order breaks the tie.
        assert!(listed.iter().any(|s| s.id == a.id));
        assert_eq!(listed[0].id, b.id);
    }

    #[test]
    fn delete_unknown_id_is_not_found() {
        let (_dir, mut store) = tmp_store();
        let err = store.delete_session("nope").unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn profile_round_trips_through_string_keys() {
        let (_dir, mut store) = tmp_store();

        let profile = Profile {
            battery_capacity: Some(75.0),
            home_rate: Some(30.0),
            currency: "EUR".to_string(),
        };
        store.save_profile(&profile).unwrap();

        let loaded = store.load_profile().unwrap();
        assert_eq!(loaded.battery_capacity, Some(75.0));
        assert_eq!(loaded.home_rate, Some(30.0));
        assert_eq!(loaded.currency, "EUR");
    }

    #[test]
    fn unknown_keys_survive_a_rewrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("local.json");
        std::fs::write(&path, r#"{"theme":"dark"}"#).unwrap();

        let mut store = LocalStore::open(path.to_str().unwrap()).unwrap();
        store.add_session(session(10, Some(50))).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let value: Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value["theme"], "dark");
        assert!(value.get(KEY_SESSIONS).is_some());
    }
}
