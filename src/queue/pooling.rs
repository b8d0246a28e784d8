//! Separate versus pooled queues.
//!
//! Compares s independent M/M/1 queues (each customer is routed to one
//! server's line) with a single M/M/s queue served by the same s servers.
//! Both configurations carry the same total arrival rate s·ρ·μ and run
//! every server at the same utilization ρ.

use serde::{Deserialize, Serialize};

use super::{multi_server_metrics, single_server_metrics};
use crate::error::Result;
use crate::models::PerformanceMetrics;
use crate::validation::validate_queue;

/// Metrics of both configurations at one utilization level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PoolingComparison {
    /// Number of servers in each configuration.
    pub servers: u32,
    /// s independent M/M/1 queues, counts summed across queues.
    pub separate: PerformanceMetrics,
    /// One M/M/s queue.
    pub pooled: PerformanceMetrics,
}

impl PoolingComparison {
    /// Fraction by which pooling reduces the waiting count Lq
    /// (0.0 when either side is unstable or nobody waits).
    pub fn queue_reduction(&self) -> f64 {
        if !self.separate.is_stable() || !self.pooled.is_stable() || self.separate.in_queue <= 0.0
        {
            return 0.0;
        }
        1.0 - self.pooled.in_queue / self.separate.in_queue
    }
}

/// Evaluates both configurations at utilization ρ with `servers` servers
/// of rate μ.
pub fn compare_pooling(
    utilization: f64,
    servers: u32,
    service_rate: f64,
) -> Result<PoolingComparison> {
    let per_queue_rate = utilization * service_rate;
    let total_rate = per_queue_rate * f64::from(servers);
    validate_queue(total_rate, service_rate, servers)?;

    let single = single_server_metrics(per_queue_rate, service_rate)?;
    let separate = if single.is_stable() {
        let s = f64::from(servers);
        // Per-queue W and Wq equal the aggregate ones by Little's Law.
        PerformanceMetrics::stable(
            single.utilization,
            single.in_system * s,
            single.in_queue * s,
            single.time_in_system,
            single.time_in_queue,
        )
    } else {
        single
    };

    Ok(PoolingComparison {
        servers,
        separate,
        pooled: multi_server_metrics(total_rate, service_rate, servers)?,
    })
}
