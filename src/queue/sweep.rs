//! Utilization sweeps for trade-off curves.
//!
//! Evaluates a model along a grid of utilization levels, holding μ fixed
//! and setting λ = ρ·s·μ at each point. The resulting series drive the
//! "performance vs. utilization" curves used to show how waiting explodes
//! as ρ → 1.

use serde::{Deserialize, Serialize};

use super::{compare_pooling, PoolingComparison, QueueModel};
use crate::error::Result;
use crate::models::PerformanceMetrics;

/// One point of a utilization curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    /// Target utilization ρ.
    pub utilization: f64,
    /// Arrival rate that produces ρ.
    pub arrival_rate: f64,
    /// Model output at this point.
    pub metrics: PerformanceMetrics,
}

/// `points` evenly spaced values from `from` to `to`, both inclusive.
///
/// Returns an empty grid for `points == 0` and `[from]` for `points == 1`.
pub fn utilization_grid(from: f64, to: f64, points: usize) -> Vec<f64> {
    match points {
        0 => Vec::new(),
        1 => vec![from],
        _ => {
            let step = (to - from) / (points - 1) as f64;
            (0..points).map(|i| from + step * i as f64).collect()
        }
    }
}

/// Evaluates `model` at every utilization in `grid`.
pub fn sweep<M: QueueModel + ?Sized>(
    model: &M,
    service_rate: f64,
    grid: &[f64],
) -> Result<Vec<CurvePoint>> {
    let capacity = f64::from(model.servers()) * service_rate;
    grid.iter()
        .map(|&rho| {
            let arrival_rate = rho * capacity;
            Ok(CurvePoint {
                utilization: rho,
                arrival_rate,
                metrics: model.evaluate(arrival_rate, service_rate)?,
            })
        })
        .collect()
}

/// Separate-vs-pooled comparison at every utilization in `grid`.
pub fn sweep_pooling(
    servers: u32,
    service_rate: f64,
    grid: &[f64],
) -> Result<Vec<PoolingComparison>> {
    grid.iter()
        .map(|&rho| compare_pooling(rho, servers, service_rate))
        .collect()
}
