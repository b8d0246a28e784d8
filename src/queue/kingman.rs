//! Kingman's approximation for a single server with general variability.
//!
//! ```text
//! Lq ≈ ρ²/(1−ρ) · (CVa² + CVs²)/2,   L = Lq + ρ,   W = L/λ,   Wq = Lq/λ
//! ```
//!
//! With CVa = CVs = 1 the variability factor is 1 and the formulas reduce
//! to M/M/1. Only the single-server form is provided; there is no pooled
//! variant.
//!
//! # Reference
//! Kingman (1961), "The single server queue in heavy traffic"

use tracing::debug;

use super::QueueModel;
use crate::error::Result;
use crate::models::{PerformanceMetrics, VariabilityParameters};
use crate::validation::validate_queue;

/// Approximate single-server metrics from the arrival and service CVs.
///
/// Returns [`PerformanceMetrics::unstable`] when λ ≥ μ.
pub fn variability_approx_metrics(
    arrival_rate: f64,
    service_rate: f64,
    arrival_cv: f64,
    service_cv: f64,
) -> Result<PerformanceMetrics> {
    kingman_metrics(
        arrival_rate,
        service_rate,
        VariabilityParameters::new(arrival_cv, service_cv),
    )
}

/// Same as [`variability_approx_metrics`], with the CVs bundled.
pub fn kingman_metrics(
    arrival_rate: f64,
    service_rate: f64,
    variability: VariabilityParameters,
) -> Result<PerformanceMetrics> {
    validate_queue(arrival_rate, service_rate, 1)?;
    variability.validate()?;

    let rho = arrival_rate / service_rate;
    if arrival_rate >= service_rate {
        debug!(
            arrival_rate,
            service_rate,
            utilization = rho,
            "Kingman approximation unstable"
        );
        return Ok(PerformanceMetrics::unstable(rho));
    }

    let in_queue = rho * rho / (1.0 - rho) * variability.factor();
    let in_system = in_queue + rho;
    Ok(PerformanceMetrics::stable(
        rho,
        in_system,
        in_queue,
        in_system / arrival_rate,
        in_queue / arrival_rate,
    ))
}

/// Kingman approximation as a [`QueueModel`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Kingman {
    variability: VariabilityParameters,
}

impl Kingman {
    /// Creates a model with the given variability.
    pub fn new(variability: VariabilityParameters) -> Self {
        Self { variability }
    }

    /// Exponential arrivals and service (matches M/M/1).
    pub fn markovian() -> Self {
        Self::new(VariabilityParameters::markovian())
    }

    /// Configured variability.
    pub fn variability(&self) -> VariabilityParameters {
        self.variability
    }
}

impl QueueModel for Kingman {
    fn name(&self) -> &'static str {
        "G/G/1"
    }

    fn evaluate(&self, arrival_rate: f64, service_rate: f64) -> Result<PerformanceMetrics> {
        kingman_metrics(arrival_rate, service_rate, self.variability)
    }

    fn description(&self) -> &'static str {
        "Single server, Kingman variability approximation"
    }
}
