//! Discrete-event simulation of an M/M/s FIFO queue.
//!
//! Used to cross-check the closed-form models: with enough customers the
//! simulated averages converge to the Erlang-C values.
//!
//! # Algorithm
//!
//! Customers arrive with exponential inter-arrival times (rate λ) and are
//! served in arrival order. Each customer takes the server that frees up
//! first; its wait is the gap between arrival and that server's release
//! time. Service times are exponential with rate μ.
//!
//! The first 10% of customers are a warm-up period and excluded from the
//! statistics, so the empty initial state does not bias the averages.
//!
//! # Complexity
//! O(n·s) for n customers and s servers.
//!
//! # Reference
//! Law (2015), "Simulation Modeling and Analysis", Ch. 1.4

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::Result;
use crate::validation::{validate_queue, ValidationError, ValidationErrorKind};

/// Averages observed over the measured customers of one run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationSummary {
    /// Customers included in the averages (after warm-up).
    pub customers: usize,
    /// Mean waiting time (estimate of Wq).
    pub mean_wait: f64,
    /// Mean time in system (estimate of W).
    pub mean_sojourn: f64,
    /// Fraction of customers that had to wait (estimate of C(s, ρ)).
    pub fraction_waited: f64,
}

/// Samples an exponential variate with the given rate.
fn exponential<R: Rng + ?Sized>(rng: &mut R, rate: f64) -> f64 {
    // 1 - U lies in (0, 1], so the log is finite.
    -(1.0 - rng.random::<f64>()).ln() / rate
}

/// Simulates `customers` arrivals to an M/M/s FIFO queue.
///
/// Deterministic for a given `seed`. Runs with ρ ≥ 1 are allowed but
/// never reach steady state; their averages grow with `customers`.
pub fn simulate_fifo(
    arrival_rate: f64,
    service_rate: f64,
    servers: u32,
    customers: usize,
    seed: u64,
) -> Result<SimulationSummary> {
    validate_queue(arrival_rate, service_rate, servers)?;
    if customers == 0 {
        return Err(vec![ValidationError::new(
            ValidationErrorKind::EmptySample,
            "simulation needs at least one customer",
        )]
        .into());
    }

    let rho = arrival_rate / (f64::from(servers) * service_rate);
    if rho >= 1.0 {
        warn!(
            arrival_rate,
            service_rate,
            servers,
            utilization = rho,
            "simulating an unstable queue"
        );
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let mut free_at = vec![0.0_f64; servers as usize];
    let warm_up = customers / 10;

    let mut clock = 0.0;
    let mut total_wait = 0.0;
    let mut total_sojourn = 0.0;
    let mut waited = 0usize;
    let mut measured = 0usize;

    for n in 0..customers {
        clock += exponential(&mut rng, arrival_rate);

        let mut server = 0;
        for (i, &t) in free_at.iter().enumerate().skip(1) {
            if t < free_at[server] {
                server = i;
            }
        }
        let start = clock.max(free_at[server]);
        let service = exponential(&mut rng, service_rate);
        free_at[server] = start + service;

        if n >= warm_up {
            let wait = start - clock;
            total_wait += wait;
            total_sojourn += wait + service;
            if wait > 0.0 {
                waited += 1;
            }
            measured += 1;
        }
    }

    let count = measured as f64;
    let summary = SimulationSummary {
        customers: measured,
        mean_wait: total_wait / count,
        mean_sojourn: total_sojourn / count,
        fraction_waited: waited as f64 / count,
    };
    debug!(?summary, seed, "simulation finished");
    Ok(summary)
}
