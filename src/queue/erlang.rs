//! M/M/s with the Erlang-C waiting probability.
//!
//! # Algorithm
//!
//! The Erlang-C probability C(s, ρ) is the chance an arriving customer
//! finds all s servers busy. With offered load a = s·ρ:
//!
//! ```text
//! C(s, ρ) = [aˢ/s! · 1/(1−ρ)] / [Σₖ₌₀ˢ⁻¹ aᵏ/k! + aˢ/s! · 1/(1−ρ)]
//! ```
//!
//! Factorials overflow `f64` near s = 170, so C is computed through the
//! Erlang-B recursion instead:
//!
//! ```text
//! B(0) = 1,  B(k) = a·B(k−1) / (k + a·B(k−1)),  C = B(s) / (1 − ρ·(1 − B(s)))
//! ```
//!
//! Every intermediate stays in [0, 1], so the result is stable for any s.
//! P0 (probability of an empty system) is summed in log space.
//!
//! # Metrics
//!
//! Lq = C·ρ/(1−ρ), L = Lq + s·ρ, Wq = Lq/λ, W = Wq + 1/μ.
//!
//! # Reference
//! Gross et al. (2008), "Fundamentals of Queueing Theory", Ch. 2.3

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::QueueModel;
use crate::error::Result;
use crate::models::PerformanceMetrics;
use crate::validation::{validate_erlang, validate_queue};

/// Erlang-C quantities for an M/M/s queue.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ErlangC {
    /// Probability an arrival must wait, C(s, ρ).
    pub prob_wait: f64,
    /// Probability the system is empty, P0.
    pub prob_empty: f64,
}

/// Computes C(s, ρ) and P0 for `servers` servers at utilization ρ.
///
/// For ρ ≥ 1 every arrival waits: `prob_wait = 1`, `prob_empty = 0`.
pub fn erlang_c(servers: u32, utilization: f64) -> Result<ErlangC> {
    validate_erlang(servers, utilization)?;

    if utilization >= 1.0 {
        return Ok(ErlangC {
            prob_wait: 1.0,
            prob_empty: 0.0,
        });
    }

    let load = f64::from(servers) * utilization;
    Ok(ErlangC {
        prob_wait: prob_wait(servers, utilization),
        prob_empty: ln_prob_empty(servers, load, utilization).exp(),
    })
}

/// C(s, ρ) alone, for ρ < 1. O(s) time, constant memory.
fn prob_wait(servers: u32, utilization: f64) -> f64 {
    let load = f64::from(servers) * utilization;
    let mut blocking = 1.0;
    for k in 1..=servers {
        let scaled = load * blocking;
        blocking = scaled / (f64::from(k) + scaled);
    }
    blocking / (1.0 - utilization * (1.0 - blocking))
}

/// ln P0 via a streaming log-sum-exp over the terms aᵏ/k! (k < s) and
/// aˢ/(s!·(1−ρ)).
fn ln_prob_empty(servers: u32, load: f64, utilization: f64) -> f64 {
    let ln_load = load.ln();
    let ln_tail = -(1.0 - utilization).ln();

    // k = 0 term: ln 1 = 0
    let mut max = 0.0;
    let mut sum = 1.0;
    let mut ln_term = 0.0;
    for k in 1..=servers {
        ln_term += ln_load - f64::from(k).ln();
        let t = if k == servers { ln_term + ln_tail } else { ln_term };
        if t > max {
            sum = sum * (max - t).exp() + 1.0;
            max = t;
        } else {
            sum += (t - max).exp();
        }
    }
    -(max + sum.ln())
}

/// Steady-state metrics of an M/M/s queue.
///
/// Returns [`PerformanceMetrics::unstable`] when λ ≥ s·μ. With s = 1 the
/// result coincides with [`super::single_server_metrics`].
pub fn multi_server_metrics(
    arrival_rate: f64,
    service_rate: f64,
    servers: u32,
) -> Result<PerformanceMetrics> {
    validate_queue(arrival_rate, service_rate, servers)?;

    let s = f64::from(servers);
    let rho = arrival_rate / (s * service_rate);
    if rho >= 1.0 {
        debug!(
            arrival_rate,
            service_rate,
            servers,
            utilization = rho,
            "M/M/s unstable"
        );
        return Ok(PerformanceMetrics::unstable(rho));
    }

    let in_queue = prob_wait(servers, rho) * rho / (1.0 - rho);
    let in_system = in_queue + s * rho;
    let time_in_queue = in_queue / arrival_rate;
    let time_in_system = time_in_queue + 1.0 / service_rate;

    Ok(PerformanceMetrics::stable(
        rho,
        in_system,
        in_queue,
        time_in_system,
        time_in_queue,
    ))
}

/// M/M/s as a [`QueueModel`].
#[derive(Debug, Clone, Copy)]
pub struct MultiServer {
    servers: u32,
}

impl MultiServer {
    /// Creates a model with `servers` pooled servers.
    pub fn new(servers: u32) -> Self {
        Self { servers }
    }
}

impl QueueModel for MultiServer {
    fn name(&self) -> &'static str {
        "M/M/s"
    }

    fn servers(&self) -> u32 {
        self.servers
    }

    fn evaluate(&self, arrival_rate: f64, service_rate: f64) -> Result<PerformanceMetrics> {
        multi_server_metrics(arrival_rate, service_rate, self.servers)
    }

    fn description(&self) -> &'static str {
        "Pooled servers sharing one queue (Erlang-C)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::queue::single_server_metrics;

    /// Direct factorial form, usable for small s.
    fn erlang_c_direct(s: u32, rho: f64) -> (f64, f64) {
        let a = f64::from(s) * rho;
        let fact = |n: u32| (1..=n).map(f64::from).product::<f64>();
        let sum: f64 = (0..s).map(|k| a.powi(k as i32) / fact(k)).sum();
        let last = a.powi(s as i32) / (fact(s) * (1.0 - rho));
        let p0 = 1.0 / (sum + last);
        (last * p0, p0)
    }

    #[test]
    fn test_erlang_c_matches_factorial_form() {
        for s in 1..=12 {
            for &rho in &[0.1, 0.5, 0.8, 0.95] {
                let c = erlang_c(s, rho).unwrap();
                let (wait, empty) = erlang_c_direct(s, rho);
                assert!((c.prob_wait - wait).abs() < 1e-10, "s={s}, ρ={rho}");
                assert!((c.prob_empty - empty).abs() < 1e-10, "s={s}, ρ={rho}");
            }
        }
    }

    #[test]
    fn test_erlang_c_single_server_is_rho() {
        let c = erlang_c(1, 0.8).unwrap();
        assert!((c.prob_wait - 0.8).abs() < 1e-12);
        assert!((c.prob_empty - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_erlang_c_large_server_count() {
        // Beyond factorial range of f64
        let c = erlang_c(500, 0.9).unwrap();
        assert!(c.prob_wait.is_finite());
        assert!(c.prob_wait > 0.0 && c.prob_wait < 1.0);
        assert!(c.prob_empty >= 0.0 && c.prob_empty < 1.0);
    }

    #[test]
    fn test_prob_empty_light_load() {
        // Nearly idle: P0 → e^(−a)
        let c = erlang_c(200, 1e-4).unwrap();
        assert!((c.prob_empty - (-0.02f64).exp()).abs() < 1e-9);
        assert!(c.prob_wait < 1e-12);
    }

    #[test]
    fn test_prob_empty_single_server_tail() {
        // s = 1: only the k = 0 term and the tail, P0 = 1 − ρ
        assert!((ln_prob_empty(1, 0.3, 0.3).exp() - 0.7).abs() < 1e-12);
    }

    #[test]
    fn test_mms_many_servers() {
        // Ten million servers at half load: no per-server allocation
        let m = multi_server_metrics(5e6, 1.0, 10_000_000).unwrap();
        assert!(m.is_stable());
        assert!(m.in_queue.is_finite() && m.in_queue >= 0.0);
        assert!((m.in_system - 5e6).abs() < 1e-3);
        assert!(m.satisfies_littles_law(5e6, 1e-9));
    }

    #[test]
    fn test_erlang_c_saturated() {
        let c = erlang_c(3, 1.0).unwrap();
        assert!((c.prob_wait - 1.0).abs() < 1e-12);
        assert!((c.prob_empty - 0.0).abs() < 1e-12);
    }

    #[test]
    fn test_erlang_c_invalid() {
        assert!(erlang_c(0, 0.5).is_err());
        assert!(erlang_c(2, 0.0).is_err());
    }

    #[test]
    fn test_mms_single_server_matches_mm1() {
        let pooled = multi_server_metrics(8.0, 10.0, 1).unwrap();
        let single = single_server_metrics(8.0, 10.0).unwrap();
        assert!((pooled.utilization - single.utilization).abs() < 1e-12);
        assert!((pooled.in_system - single.in_system).abs() < 1e-12);
        assert!((pooled.in_queue - single.in_queue).abs() < 1e-12);
        assert!((pooled.time_in_system - single.time_in_system).abs() < 1e-12);
        assert!((pooled.time_in_queue - single.time_in_queue).abs() < 1e-12);
    }

    #[test]
    fn test_mms_three_servers() {
        // λ=24, μ=10, s=3 → ρ=0.8, a=2.4
        let m = multi_server_metrics(24.0, 10.0, 3).unwrap();
        assert!((m.utilization - 0.8).abs() < 1e-10);
        // C(3, 0.8) = 0.6472, Lq = C·4 = 2.5888
        assert!((m.in_queue - 2.588_764_044_943_82).abs() < 1e-9);
        assert!((m.in_system - (m.in_queue + 2.4)).abs() < 1e-10);
        assert!(m.satisfies_littles_law(24.0, 1e-9));
        // Pooling beats three separate M/M/1 queues at the same ρ
        assert!(m.in_queue < 3.0 * 3.2);
    }

    #[test]
    fn test_mms_unstable() {
        let m = multi_server_metrics(30.0, 10.0, 3).unwrap();
        assert!(!m.is_stable());
        assert!((m.utilization - 1.0).abs() < 1e-10);
        assert!(m.time_in_queue.is_infinite());
    }

    #[test]
    fn test_mms_more_servers_less_waiting() {
        let mut previous = f64::INFINITY;
        for s in 3..=8 {
            let m = multi_server_metrics(25.0, 10.0, s).unwrap();
            assert!(m.time_in_queue < previous);
            previous = m.time_in_queue;
        }
    }
}
