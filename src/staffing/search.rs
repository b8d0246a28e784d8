//! Minimum staffing search.
//!
//! # Algorithm
//!
//! For a single block, the smallest s with λ/(s·μ) below the cap is
//! found directly from ⌊λ/(μ·cap)⌋ + 1 and then nudged to absorb
//! floating-point rounding.
//!
//! For disjoint shifts, cost is additive across shifts and increasing in
//! each shift's head count, while feasibility of a block only depends on
//! the shift covering it. The cheapest feasible plan therefore staffs each
//! shift at the maximum minimum-servers over its blocks.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{daily_labor_cost, StaffingPlan};
use crate::error::Result;
use crate::models::{DemandProfile, Shift};
use crate::validation::{
    validate_profile, validate_queue, validate_shift_cover, validate_threshold, ValidationError,
    ValidationErrorKind,
};

/// Smallest server count keeping utilization strictly below `max_utilization`.
///
/// With `max_utilization = 1.0` this is the smallest stable staffing.
pub fn minimum_servers(arrival_rate: f64, service_rate: f64, max_utilization: f64) -> Result<u32> {
    validate_queue(arrival_rate, service_rate, 1)?;
    validate_threshold(max_utilization)?;

    // Counted in f64: every whole number up to u32::MAX is exact there.
    let limit = f64::from(u32::MAX);
    let rho = |s: f64| arrival_rate / (s * service_rate);
    let mut servers = (arrival_rate / (service_rate * max_utilization))
        .floor()
        .max(1.0);
    if servers < limit {
        while servers > 1.0 && rho(servers - 1.0) < max_utilization {
            servers -= 1.0;
        }
        while servers <= limit && rho(servers) >= max_utilization {
            servers += 1.0;
        }
    }
    if servers > limit || rho(servers) >= max_utilization {
        return Err(vec![ValidationError::new(
            ValidationErrorKind::TooManyServers,
            format!(
                "utilization below {max_utilization} at λ={arrival_rate}, μ={service_rate} needs more than {} servers",
                u32::MAX
            ),
        )]
        .into());
    }
    Ok(servers as u32)
}

/// Cheapest shift staffing meeting a utilization cap in every block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftPlan {
    /// Head count per shift, aligned with the input shifts.
    pub staff: Vec<u32>,
    /// Per-block expansion of `staff`.
    pub plan: StaffingPlan,
    /// Daily labor cost Σ staff × shift hours × wage.
    pub daily_cost: f64,
}

/// Finds the lowest-cost staff levels for `shifts` such that no block
/// reaches `max_utilization`.
///
/// Shifts must partition the profile (each block covered exactly once).
pub fn cheapest_shift_plan(
    profile: &DemandProfile,
    shifts: &[Shift],
    service_rate: f64,
    max_utilization: f64,
    wage_per_hour: f64,
) -> Result<ShiftPlan> {
    validate_profile(profile, service_rate)?;
    validate_shift_cover(shifts, profile.len())?;

    let mut staff = Vec::with_capacity(shifts.len());
    for shift in shifts {
        let mut needed = 1;
        for block in &profile.blocks[shift.blocks()] {
            needed = needed.max(minimum_servers(
                block.arrival_rate,
                service_rate,
                max_utilization,
            )?);
        }
        debug!(shift = %shift.name, staff = needed, "sized shift");
        staff.push(needed);
    }

    let labor: Vec<(u32, f64)> = staff
        .iter()
        .zip(shifts)
        .map(|(&count, shift)| (count, shift.hours))
        .collect();
    let daily_cost = daily_labor_cost(&labor, wage_per_hour)?;
    let plan = StaffingPlan::from_shifts(shifts, &staff, profile.len())?;

    Ok(ShiftPlan {
        staff,
        plan,
        daily_cost,
    })
}
