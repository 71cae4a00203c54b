//! Yearly gas-versus-EV cost comparison.
//!
//! The estimate is advisory: whenever an input is missing or no cost
//! basis can be derived from the recorded sessions, the result is
//! `None` rather than an error.

use crate::models::session::ChargingSession;

#[derive(Debug, Clone, Copy)]
pub struct RoiInputs {
    /// Price per fuel unit (e.g. per liter).
    pub gas_price: f64,
    /// Gas car efficiency: distance per fuel unit.
    pub gas_mileage: f64,
    /// EV efficiency: distance per kWh.
    pub ev_mileage: f64,
    /// Distance driven per year.
    pub distance_per_year: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoiEstimate {
    pub annual_gas_cost: f64,
    pub annual_ev_cost: f64,
    pub annual_savings: f64,
    pub savings_percent: f64,
}

/// EV cost per distance unit, from recorded data.
///
/// Prefers the actual figure: total cost over the odometer span, which
/// needs at least two odometer readings. Falls back to cost per kWh
/// divided by the EV efficiency when kWh data exists.
fn ev_cost_per_distance(sessions: &[ChargingSession], ev_mileage: f64) -> Option<f64> {
    let total_cost: f64 = sessions.iter().filter_map(|s| s.cost).sum();
    if total_cost <= 0.0 {
        return None;
    }

    // Sessions arrive newest first; readings span is max - min regardless.
    let readings: Vec<i64> = sessions.iter().filter_map(|s| s.odometer).collect();
    if readings.len() >= 2 {
        let min = readings.iter().min()?;
        let max = readings.iter().max()?;
        let span = (max - min) as f64;
        if span > 0.0 {
            return Some(total_cost / span);
        }
    }

    let total_kwh: f64 = sessions.iter().filter_map(|s| s.kwh).sum();
    if total_kwh > 0.0 && ev_mileage > 0.0 {
        return Some((total_cost / total_kwh) / ev_mileage);
    }

    None
}

pub fn estimate(sessions: &[ChargingSession], inputs: &RoiInputs) -> Option<RoiEstimate> {
    if inputs.gas_price <= 0.0
        || inputs.gas_mileage <= 0.0
        || inputs.ev_mileage <= 0.0
        || inputs.distance_per_year <= 0.0
    {
        return None;
    }

    let per_distance = ev_cost_per_distance(sessions, inputs.ev_mileage)?;

    let annual_gas_cost = inputs.distance_per_year / inputs.gas_mileage * inputs.gas_price;
    let annual_ev_cost = per_distance * inputs.distance_per_year;
    let annual_savings = annual_gas_cost - annual_ev_cost;
    let savings_percent = annual_savings / annual_gas_cost * 100.0;

    Some(RoiEstimate {
        annual_gas_cost,
        annual_ev_cost,
        annual_savings,
        savings_percent,
    })
}
