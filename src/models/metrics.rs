//! Steady-state performance metrics.

use serde::{Deserialize, Serialize};

/// Whether a queue reaches steady state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stability {
    /// ρ < 1: the queue settles to finite averages.
    Stable,
    /// ρ ≥ 1: the queue grows without bound.
    Unstable,
}

/// Average performance of a queue in steady state.
///
/// When `stability` is [`Stability::Unstable`], all four averages are
/// `f64::INFINITY`. Callers must branch on `stability` (or
/// [`is_stable`](Self::is_stable)) before using them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PerformanceMetrics {
    /// Utilization ρ = λ / (s·μ). Reported even when ≥ 1.
    pub utilization: f64,
    /// Stability flag derived from ρ.
    pub stability: Stability,
    /// L: average number of customers in the system.
    pub in_system: f64,
    /// Lq: average number of customers waiting.
    pub in_queue: f64,
    /// W: average time in the system.
    pub time_in_system: f64,
    /// Wq: average time waiting.
    pub time_in_queue: f64,
}

impl PerformanceMetrics {
    /// Creates metrics for a stable queue.
    pub fn stable(
        utilization: f64,
        in_system: f64,
        in_queue: f64,
        time_in_system: f64,
        time_in_queue: f64,
    ) -> Self {
        Self {
            utilization,
            stability: Stability::Stable,
            in_system,
            in_queue,
            time_in_system,
            time_in_queue,
        }
    }

    /// Creates metrics for an unstable queue (all averages infinite).
    pub fn unstable(utilization: f64) -> Self {
        Self {
            utilization,
            stability: Stability::Unstable,
            in_system: f64::INFINITY,
            in_queue: f64::INFINITY,
            time_in_system: f64::INFINITY,
            time_in_queue: f64::INFINITY,
        }
    }

    /// Whether the queue is stable.
    #[inline]
    pub fn is_stable(&self) -> bool {
        self.stability == Stability::Stable
    }

    /// Converts W and Wq from hours to minutes. Counts are unchanged.
    pub fn in_minutes(&self) -> Self {
        Self {
            time_in_system: self.time_in_system * 60.0,
            time_in_queue: self.time_in_queue * 60.0,
            ..*self
        }
    }

    /// Checks Little's Law (L = λW, Lq = λWq) within a relative tolerance.
    ///
    /// Always `true` for unstable metrics, where the law is vacuous.
    pub fn satisfies_littles_law(&self, arrival_rate: f64, tolerance: f64) -> bool {
        if !self.is_stable() {
            return true;
        }
        relative_eq(self.in_system, arrival_rate * self.time_in_system, tolerance)
            && relative_eq(self.in_queue, arrival_rate * self.time_in_queue, tolerance)
    }
}

fn relative_eq(a: f64, b: f64, tolerance: f64) -> bool {
    let scale = a.abs().max(b.abs()).max(1.0);
    (a - b).abs() <= tolerance * scale
}
