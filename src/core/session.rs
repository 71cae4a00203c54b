use crate::core::metrics::{energy_from_percent, home_charge_cost};
use crate::errors::{AppError, AppResult};
use crate::models::charge_type::ChargeType;
use crate::models::profile::Profile;
use crate::models::session::{validate_percent, ChargingSession};
use crate::models::status::SessionStatus;
use crate::store::Store;
use crate::ui::messages::success;
use crate::utils::format::short_id;
use chrono::{DateTime, Local};

/// High-level business logic for session commands.
pub struct SessionLogic;

/// Optional field updates for `edit`.
#[derive(Debug, Default)]
pub struct SessionPatch {
    pub cost: Option<f64>,
    pub start_percent: Option<i32>,
    pub end_percent: Option<i32>,
    pub kwh: Option<f64>,
    pub charge_type: Option<ChargeType>,
    pub odometer: Option<i64>,
    pub charged_at: Option<DateTime<Local>>,
}

impl SessionPatch {
    pub fn is_empty(&self) -> bool {
        self.cost.is_none()
            && self.start_percent.is_none()
            && self.end_percent.is_none()
            && self.kwh.is_none()
            && self.charge_type.is_none()
            && self.odometer.is_none()
            && self.charged_at.is_none()
    }
}

/// Fill in a home-charging cost from the profile when the user asked for
/// it and gave no explicit cost. Recorded kWh wins over the percent delta.
fn auto_home_cost(
    profile: &Profile,
    start: i32,
    end: Option<i32>,
    kwh: Option<f64>,
) -> Option<f64> {
    let rate = profile.home_rate?;
    let energy = match kwh {
        Some(k) => Some(k),
        None => energy_from_percent(start, end?, profile.battery_capacity?),
    }?;
    Some(home_charge_cost(energy, rate))
}

impl SessionLogic {
    /// Record a completed session in one shot.
    #[allow(clippy::too_many_arguments)]
    pub fn add(
        store: &mut dyn Store,
        cost: Option<f64>,
        start_percent: i32,
        end_percent: Option<i32>,
        kwh: Option<f64>,
        charge_type: Option<ChargeType>,
        odometer: Option<i64>,
        charged_at: DateTime<Local>,
        home: bool,
    ) -> AppResult<ChargingSession> {
        validate_percent(start_percent)?;
        if let Some(end) = end_percent {
            validate_percent(end)?;
        }

        let profile = store.load_profile()?;

        let cost = match cost {
            Some(c) => Some(c),
            None if home => auto_home_cost(&profile, start_percent, end_percent, kwh),
            None => None,
        };

        let session = ChargingSession::new(
            cost,
            start_percent,
            end_percent,
            charged_at,
            kwh,
            charge_type,
            odometer,
            Some(profile.currency.clone()),
            SessionStatus::Completed,
        );

        let stored = store.add_session(session)?;
        success(format!(
            "Recorded session {} ({}% → {}).",
            short_id(&stored.id),
            stored.start_percent,
            stored
                .end_percent
                .map(|e| format!("{}%", e))
                .unwrap_or_else(|| "?".to_string()),
        ));

        Ok(stored)
    }

    /// Begin an active session. Refuses when one is already running.
    pub fn start(
        store: &mut dyn Store,
        start_percent: i32,
        charge_type: Option<ChargeType>,
        charged_at: DateTime<Local>,
    ) -> AppResult<ChargingSession> {
        validate_percent(start_percent)?;

        if let Some(active) = store.active_session()? {
            return Err(AppError::SessionAlreadyActive(active.charged_at));
        }

        let profile = store.load_profile()?;
        let session = ChargingSession::new(
            None,
            start_percent,
            None,
            charged_at,
            None,
            charge_type,
            None,
            Some(profile.currency.clone()),
            SessionStatus::Active,
        );

        let stored = store.add_session(session)?;
        success(format!(
            "Charging started at {}% (session {}).",
            stored.start_percent,
            short_id(&stored.id)
        ));

        Ok(stored)
    }

    /// Complete the active session.
    pub fn finish(
        store: &mut dyn Store,
        end_percent: Option<i32>,
        cost: Option<f64>,
        kwh: Option<f64>,
        home: bool,
    ) -> AppResult<ChargingSession> {
        let mut session = store.active_session()?.ok_or(AppError::NoActiveSession)?;

        if let Some(end) = end_percent {
            validate_percent(end)?;
            session.end_percent = Some(end);
        }
        if let Some(k) = kwh {
            session.kwh = Some(k);
        }

        session.cost = match cost {
            Some(c) => Some(c),
            None if home => {
                let profile = store.load_profile()?;
                auto_home_cost(
                    &profile,
                    session.start_percent,
                    session.end_percent,
                    session.kwh,
                )
            }
            None => session.cost,
        };

        session.status = SessionStatus::Completed;
        store.update_session(&session)?;

        success(format!("Session {} completed.", short_id(&session.id)));
        Ok(session)
    }

    /// Update any subset of a session's fields.
    pub fn edit(store: &mut dyn Store, id: &str, patch: SessionPatch) -> AppResult<ChargingSession> {
        if patch.is_empty() {
            return Err(AppError::Validation(
                "Nothing to do: specify at least one field to change.".into(),
            ));
        }

        let mut session = Self::resolve(store, id)?;

        if let Some(start) = patch.start_percent {
            validate_percent(start)?;
            session.start_percent = start;
        }
        if let Some(end) = patch.end_percent {
            validate_percent(end)?;
            session.end_percent = Some(end);
        }
        if let Some(cost) = patch.cost {
            session.cost = Some(cost);
        }
        if let Some(kwh) = patch.kwh {
            session.kwh = Some(kwh);
        }
        if let Some(t) = patch.charge_type {
            session.charge_type = Some(t);
        }
        if let Some(odo) = patch.odometer {
            session.odometer = Some(odo);
        }
        if let Some(at) = patch.charged_at {
            session.charged_at = at.to_rfc3339();
        }

        store.update_session(&session)?;
        success(format!("Session {} updated.", short_id(&session.id)));

        Ok(session)
    }

    pub fn delete(store: &mut dyn Store, id: &str) -> AppResult<()> {
        let session = Self::resolve(store, id)?;
        store.delete_session(&session.id)?;
        success(format!("Session {} deleted.", short_id(&session.id)));
        Ok(())
    }

    /// Find a session by full id or unique prefix.
    pub fn resolve(store: &mut dyn Store, id: &str) -> AppResult<ChargingSession> {
        let sessions = store.list_sessions()?;

        if let Some(s) = sessions.iter().find(|s| s.id == id) {
            return Ok(s.clone());
        }

        let matches: Vec<&ChargingSession> =
            sessions.iter().filter(|s| s.id.starts_with(id)).collect();
        match matches.len() {
            0 => Err(AppError::NotFound(id.to_string())),
            1 => Ok(matches[0].clone()),
            _ => Err(AppError::Validation(format!(
                "Id prefix '{}' is ambiguous ({} matches).",
                id,
                matches.len()
            ))),
        }
    }
}
