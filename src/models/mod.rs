//! Queueing domain models.
//!
//! Plain value types describing a queueing system and its steady-state
//! performance. Nothing here is stored or mutated after construction:
//! every operation takes its inputs explicitly and returns a fresh result.
//!
//! # Notation
//!
//! | Symbol | Field | Meaning |
//! |--------|-------|---------|
//! | λ | `arrival_rate` | Mean arrivals per time unit |
//! | μ | `service_rate` | Mean completions per server per time unit |
//! | s | `servers` | Parallel service channels |
//! | ρ | `utilization` | λ / (s·μ) |
//! | L, Lq | `in_system`, `in_queue` | Mean customers in system / waiting |
//! | W, Wq | `time_in_system`, `time_in_queue` | Mean time in system / waiting |

mod metrics;
mod parameters;
mod shift;

pub use metrics::{PerformanceMetrics, Stability};
pub use parameters::{QueueParameters, VariabilityParameters};
pub use shift::{DemandProfile, Shift, TimeBlock};
