//! Queue input parameters.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::validation::{validate_queue, validate_variability};

/// Inputs of an M/M/s queue.
///
/// Rates share one time unit chosen by the caller (e.g. per hour); all
/// time metrics derived from them come back in that same unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QueueParameters {
    /// Arrival rate λ (> 0).
    pub arrival_rate: f64,
    /// Service rate per server μ (> 0).
    pub service_rate: f64,
    /// Number of parallel servers s (≥ 1).
    pub servers: u32,
}

impl QueueParameters {
    /// Creates single-server parameters.
    pub fn new(arrival_rate: f64, service_rate: f64) -> Self {
        Self {
            arrival_rate,
            service_rate,
            servers: 1,
        }
    }

    /// Sets the server count.
    pub fn with_servers(mut self, servers: u32) -> Self {
        self.servers = servers;
        self
    }

    /// Checks the parameters, returning every violation found.
    pub fn validate(&self) -> Result<()> {
        validate_queue(self.arrival_rate, self.service_rate, self.servers)?;
        Ok(())
    }

    /// Utilization ρ = λ / (s·μ), unchecked.
    #[inline]
    pub fn utilization(&self) -> f64 {
        self.arrival_rate / (f64::from(self.servers) * self.service_rate)
    }

    /// Offered load a = λ / μ (in Erlangs).
    #[inline]
    pub fn offered_load(&self) -> f64 {
        self.arrival_rate / self.service_rate
    }

    /// Whether the queue reaches steady state (ρ < 1).
    #[inline]
    pub fn is_stable(&self) -> bool {
        self.utilization() < 1.0
    }
}

/// Coefficients of variation for the Kingman approximation.
///
/// CV = standard deviation / mean. Exponential times have CV = 1,
/// deterministic times CV = 0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VariabilityParameters {
    /// CV of inter-arrival times (≥ 0).
    pub arrival_cv: f64,
    /// CV of service times (≥ 0).
    pub service_cv: f64,
}

impl VariabilityParameters {
    /// Creates variability parameters.
    pub fn new(arrival_cv: f64, service_cv: f64) -> Self {
        Self {
            arrival_cv,
            service_cv,
        }
    }

    /// Poisson arrivals with exponential service (CVa = CVs = 1).
    pub fn markovian() -> Self {
        Self::new(1.0, 1.0)
    }

    /// Poisson arrivals with the given service CV.
    pub fn poisson_arrivals(service_cv: f64) -> Self {
        Self::new(1.0, service_cv)
    }

    /// Checks that both coefficients are finite and non-negative.
    pub fn validate(&self) -> Result<()> {
        validate_variability(self.arrival_cv, self.service_cv)?;
        Ok(())
    }

    /// Kingman variability factor (CVa² + CVs²) / 2.
    #[inline]
    pub fn factor(&self) -> f64 {
        (self.arrival_cv.powi(2) + self.service_cv.powi(2)) / 2.0
    }
}

impl Default for VariabilityParameters {
    fn default() -> Self {
        Self::markovian()
    }
}
