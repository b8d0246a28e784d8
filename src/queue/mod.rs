//! Closed-form queueing models.
//!
//! Steady-state metrics for single- and multi-server queues, tied
//! together by Little's Law (L = λW, Lq = λWq).
//!
//! # Models
//!
//! | Model | Function | Assumptions |
//! |-------|----------|-------------|
//! | M/M/1 | [`single_server_metrics`] | Poisson arrivals, exponential service, one server |
//! | M/M/s | [`multi_server_metrics`] | Poisson arrivals, exponential service, s pooled servers |
//! | G/G/1 (approx.) | [`variability_approx_metrics`] | Kingman's heavy-traffic approximation |
//!
//! All rates share the caller's time unit; time metrics come back in that
//! unit. Unstable inputs (ρ ≥ 1) yield [`PerformanceMetrics::unstable`]
//! rather than an error.
//!
//! # References
//!
//! - Kleinrock (1975), "Queueing Systems, Volume 1: Theory", Ch. 3
//! - Little (1961), "A Proof for the Queuing Formula: L = λW"
//! - Kingman (1961), "The single server queue in heavy traffic"

mod erlang;
mod kingman;
mod mm1;
mod pooling;
mod sweep;

pub use erlang::{erlang_c, multi_server_metrics, ErlangC, MultiServer};
pub use kingman::{kingman_metrics, variability_approx_metrics, Kingman};
pub use mm1::{single_server_metrics, SingleServer};
pub use pooling::{compare_pooling, PoolingComparison};
pub use sweep::{sweep, sweep_pooling, utilization_grid, CurvePoint};

use std::fmt::Debug;

use crate::error::Result;
use crate::models::{PerformanceMetrics, QueueParameters};
use crate::validation::validate_queue;

/// A queueing model that maps rates to steady-state metrics.
///
/// Implementations are stateless apart from their structural
/// configuration (server count, variability) and safe to share.
pub trait QueueModel: Send + Sync + Debug {
    /// Model name in Kendall notation (e.g., "M/M/1").
    fn name(&self) -> &'static str;

    /// Number of parallel servers the model assumes.
    fn servers(&self) -> u32 {
        1
    }

    /// Evaluates the model for arrival rate λ and per-server service rate μ.
    fn evaluate(&self, arrival_rate: f64, service_rate: f64) -> Result<PerformanceMetrics>;

    /// Model description.
    fn description(&self) -> &'static str {
        self.name()
    }
}

/// Utilization ρ = λ / (s·μ).
///
/// Values ≥ 1 are returned as-is and signal an unstable system.
pub fn utilization(arrival_rate: f64, service_rate: f64, servers: u32) -> Result<f64> {
    validate_queue(arrival_rate, service_rate, servers)?;
    Ok(arrival_rate / (f64::from(servers) * service_rate))
}

/// Evaluates M/M/s metrics for a parameter set.
pub fn evaluate(params: &QueueParameters) -> Result<PerformanceMetrics> {
    multi_server_metrics(params.arrival_rate, params.service_rate, params.servers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::QueueError;

    #[test]
    fn test_utilization() {
        assert!((utilization(8.0, 10.0, 1).unwrap() - 0.8).abs() < 1e-10);
        assert!((utilization(24.0, 10.0, 3).unwrap() - 0.8).abs() < 1e-10);
        // Overload is reported, not rejected
        assert!((utilization(30.0, 10.0, 2).unwrap() - 1.5).abs() < 1e-10);
    }

    #[test]
    fn test_utilization_invalid() {
        let err = utilization(8.0, 10.0, 0).unwrap_err();
        assert!(matches!(err, QueueError::InvalidParameters(_)));
        assert!(utilization(-8.0, 10.0, 1).is_err());
    }

    #[test]
    fn test_evaluate_parameters() {
        let m = evaluate(&QueueParameters::new(8.0, 10.0)).unwrap();
        assert!((m.in_system - 4.0).abs() < 1e-10);
    }

    #[test]
    fn test_models_as_trait_objects() {
        let models: Vec<Box<dyn QueueModel>> = vec![
            Box::new(SingleServer),
            Box::new(MultiServer::new(1)),
            Box::new(Kingman::markovian()),
        ];
        for model in &models {
            let m = model.evaluate(8.0, 10.0).unwrap();
            assert!(
                (m.time_in_system - 0.5).abs() < 1e-10,
                "{} disagrees with M/M/1",
                model.name()
            );
        }
    }
}
