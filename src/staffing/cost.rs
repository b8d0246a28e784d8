//! Daily labor cost.

use crate::error::Result;
use crate::validation::validate_labor;

/// Total labor cost Σ staffᵢ × hoursᵢ × wage.
///
/// # Arguments
/// * `shifts` - Ordered `(staff_count, duration_hours)` pairs.
/// * `wage_per_hour` - Hourly wage per staff member.
pub fn daily_labor_cost(shifts: &[(u32, f64)], wage_per_hour: f64) -> Result<f64> {
    validate_labor(shifts, wage_per_hour)?;
    Ok(shifts
        .iter()
        .map(|&(staff, hours)| f64::from(staff) * hours * wage_per_hour)
        .sum())
}
