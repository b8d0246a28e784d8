//! Queueing-theory capacity metrics for the U-Engine ecosystem.
//!
//! Computes steady-state performance of service systems from arrival and
//! service rates, and evaluates time-varying staffing plans against a
//! utilization target. Everything is a pure function of its inputs: no
//! shared state, no I/O (apart from loading a scenario file).
//!
//! # Modules
//!
//! - **`models`**: Value types — `QueueParameters`, `VariabilityParameters`,
//!   `PerformanceMetrics`, `DemandProfile`, `Shift`
//! - **`queue`**: M/M/1, M/M/s (Erlang-C), Kingman approximation, pooling
//!   comparison, utilization sweeps
//! - **`staffing`**: Labor cost, block-by-block plan evaluation, minimum
//!   staffing search
//! - **`simulation`**: Seeded M/M/s simulator for cross-checking closed forms
//! - **`config`**: TOML scenario loading
//! - **`validation`**: Input integrity checks (rates, server counts, shifts)
//!
//! # Example
//!
//! ```
//! use u_queue::queue::{multi_server_metrics, single_server_metrics};
//!
//! let single = single_server_metrics(8.0, 10.0).unwrap();
//! assert!((single.time_in_system - 0.5).abs() < 1e-10);
//!
//! let pooled = multi_server_metrics(24.0, 10.0, 3).unwrap();
//! assert!(pooled.in_queue < 3.0 * single.in_queue);
//! ```
//!
//! # References
//!
//! - Kleinrock (1975), "Queueing Systems, Volume 1: Theory"
//! - Gross et al. (2008), "Fundamentals of Queueing Theory"
//! - Hopp & Spearman (2011), "Factory Physics", Ch. 8

pub mod config;
pub mod error;
pub mod models;
pub mod queue;
pub mod simulation;
pub mod staffing;
pub mod validation;

pub use error::{QueueError, Result};
