//! M/M/1: single server, Poisson arrivals, exponential service.
//!
//! # Formulas (ρ = λ/μ < 1)
//!
//! | Metric | Formula |
//! |--------|---------|
//! | W | 1 / (μ − λ) |
//! | Wq | ρ / (μ − λ) |
//! | L | ρ / (1 − ρ) |
//! | Lq | ρ² / (1 − ρ) |

use tracing::debug;

use super::QueueModel;
use crate::error::Result;
use crate::models::PerformanceMetrics;
use crate::validation::validate_queue;

/// Steady-state metrics of an M/M/1 queue.
///
/// Returns [`PerformanceMetrics::unstable`] when λ ≥ μ.
pub fn single_server_metrics(arrival_rate: f64, service_rate: f64) -> Result<PerformanceMetrics> {
    validate_queue(arrival_rate, service_rate, 1)?;

    let rho = arrival_rate / service_rate;
    if arrival_rate >= service_rate {
        debug!(arrival_rate, service_rate, utilization = rho, "M/M/1 unstable");
        return Ok(PerformanceMetrics::unstable(rho));
    }

    let slack = service_rate - arrival_rate;
    Ok(PerformanceMetrics::stable(
        rho,
        rho / (1.0 - rho),
        rho * rho / (1.0 - rho),
        1.0 / slack,
        rho / slack,
    ))
}

/// M/M/1 as a [`QueueModel`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SingleServer;

impl QueueModel for SingleServer {
    fn name(&self) -> &'static str {
        "M/M/1"
    }

    fn evaluate(&self, arrival_rate: f64, service_rate: f64) -> Result<PerformanceMetrics> {
        single_server_metrics(arrival_rate, service_rate)
    }

    fn description(&self) -> &'static str {
        "Single server, Poisson arrivals, exponential service"
    }
}
