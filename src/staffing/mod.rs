//! Time-varying staffing and labor cost.
//!
//! Demand rarely stays constant over a day. This module evaluates a
//! staffing plan block by block with the M/M/s model, classifies each
//! block against a utilization threshold, prices the plan, and searches
//! for the cheapest shift staffing that keeps every block under the
//! threshold.
//!
//! # Status Classification
//!
//! | Status | Condition |
//! |--------|-----------|
//! | `Unstable` | ρ ≥ 1 |
//! | `High` | threshold ≤ ρ < 1 |
//! | `Ok` | ρ < threshold |
//!
//! Each block is treated as if it reached steady state within its own
//! duration (the stationary independent period-by-period approximation).
//!
//! # Reference
//! Green, Kolesar & Whitt (2007), "Coping with Time-Varying Demand When
//! Setting Staffing Requirements for a Service System"

mod cost;
mod plan;
mod search;

pub use cost::daily_labor_cost;
pub use plan::{evaluate_plan, BlockReport, StaffingPlan, StaffingReport, UtilizationStatus};
pub use search::{cheapest_shift_plan, minimum_servers, ShiftPlan};
