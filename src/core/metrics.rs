//! Pure derived-metric functions over sessions and expenses.
//! Nothing here touches a store; callers pass slices in.

use crate::models::charge_type::ChargeType;
use crate::models::expense::VehicleExpense;
use crate::models::session::ChargingSession;
use crate::utils::date::month_key;
use std::collections::BTreeMap;

/// Energy implied by a percent delta at a given battery capacity.
/// `Some` only when the session ended higher than it started and the
/// capacity is positive.
pub fn energy_from_percent(start: i32, end: i32, capacity: f64) -> Option<f64> {
    if end > start && capacity > 0.0 {
        Some((end - start) as f64 / 100.0 * capacity)
    } else {
        None
    }
}

/// Best available energy figure for a session: the recorded kWh wins,
/// otherwise derive from the percent delta and capacity.
pub fn session_energy(s: &ChargingSession, capacity: Option<f64>) -> Option<f64> {
    if let Some(kwh) = s.kwh {
        return Some(kwh);
    }
    match (s.end_percent, capacity) {
        (Some(end), Some(cap)) => energy_from_percent(s.start_percent, end, cap),
        _ => None,
    }
}

pub fn home_charge_cost(energy: f64, rate: f64) -> f64 {
    energy * rate
}

/// Month key → currency code → summed cost. Amounts in different
/// currencies stay separate labeled sums; nothing is converted.
pub type MonthlyTotals = BTreeMap<String, BTreeMap<String, f64>>;

pub fn monthly_session_totals(
    sessions: &[ChargingSession],
    fallback_currency: &str,
) -> MonthlyTotals {
    let mut out = MonthlyTotals::new();

    for s in sessions {
        let Some(cost) = s.cost else { continue };
        let Some(month) = month_key(&s.charged_at) else {
            continue;
        };
        let currency = s
            .currency
            .clone()
            .unwrap_or_else(|| fallback_currency.to_string());

        *out.entry(month)
            .or_default()
            .entry(currency)
            .or_insert(0.0) += cost;
    }

    out
}

pub fn monthly_expense_totals(
    expenses: &[VehicleExpense],
    fallback_currency: &str,
) -> MonthlyTotals {
    let mut out = MonthlyTotals::new();

    for e in expenses {
        let Some(month) = month_key(&e.expense_date) else {
            continue;
        };
        let currency = e
            .currency
            .clone()
            .unwrap_or_else(|| fallback_currency.to_string());

        *out.entry(month)
            .or_default()
            .entry(currency)
            .or_insert(0.0) += e.amount;
    }

    out
}

/// Total cost split by charge type.
#[derive(Debug, Default, PartialEq)]
pub struct TypeBreakdown {
    pub fast: f64,
    pub standard: f64,
    pub untagged: f64,
}

pub fn type_cost_breakdown(sessions: &[ChargingSession]) -> TypeBreakdown {
    let mut b = TypeBreakdown::default();

    for s in sessions {
        let Some(cost) = s.cost else { continue };
        match s.charge_type {
            Some(ChargeType::Fast) => b.fast += cost,
            Some(ChargeType::Standard) => b.standard += cost,
            None => b.untagged += cost,
        }
    }

    b
}

#[derive(Debug, Default)]
pub struct LifetimeTotals {
    pub session_count: usize,
    pub total_cost: f64,
    pub avg_cost: f64,
    pub total_kwh: f64,
}

pub fn lifetime_totals(sessions: &[ChargingSession], capacity: Option<f64>) -> LifetimeTotals {
    let mut t = LifetimeTotals {
        session_count: sessions.len(),
        ..Default::default()
    };

    let mut costed = 0usize;
    for s in sessions {
        if let Some(cost) = s.cost {
            t.total_cost += cost;
            costed += 1;
        }
        if let Some(kwh) = session_energy(s, capacity) {
            t.total_kwh += kwh;
        }
    }

    if costed > 0 {
        t.avg_cost = t.total_cost / costed as f64;
    }

    t
}
