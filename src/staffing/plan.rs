//! Staffing plans and block-by-block evaluation.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::Result;
use crate::models::{DemandProfile, PerformanceMetrics, Shift};
use crate::queue::multi_server_metrics;
use crate::validation::{
    validate_lengths, validate_profile, validate_shift_cover, validate_threshold,
};

/// Server count per time block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffingPlan {
    /// Servers on duty in each block, aligned with the demand profile.
    pub servers: Vec<u32>,
}

impl StaffingPlan {
    /// Creates a plan from explicit per-block server counts.
    pub fn new(servers: Vec<u32>) -> Self {
        Self { servers }
    }

    /// Same head count in every one of `blocks` blocks.
    pub fn constant(servers: u32, blocks: usize) -> Self {
        Self {
            servers: vec![servers; blocks],
        }
    }

    /// Expands per-shift staff levels into per-block counts.
    ///
    /// Shifts must cover each of the `block_count` blocks exactly once;
    /// `staff[i]` is the head count of `shifts[i]`.
    pub fn from_shifts(shifts: &[Shift], staff: &[u32], block_count: usize) -> Result<Self> {
        validate_lengths("shift staff levels", shifts.len(), staff.len())?;
        validate_shift_cover(shifts, block_count)?;

        let mut servers = vec![0; block_count];
        for (shift, &count) in shifts.iter().zip(staff) {
            for block in shift.blocks() {
                servers[block] = count;
            }
        }
        Ok(Self { servers })
    }

    /// Number of blocks in the plan.
    pub fn len(&self) -> usize {
        self.servers.len()
    }

    /// Whether the plan has no blocks.
    pub fn is_empty(&self) -> bool {
        self.servers.is_empty()
    }

    /// Staff-hours over the day for the given profile's block lengths.
    pub fn staff_hours(&self, profile: &DemandProfile) -> f64 {
        self.servers
            .iter()
            .zip(&profile.blocks)
            .map(|(&s, block)| f64::from(s) * block.hours)
            .sum()
    }
}

/// Utilization band of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UtilizationStatus {
    /// Below the threshold.
    Ok,
    /// At or above the threshold but stable.
    High,
    /// ρ ≥ 1.
    Unstable,
}

impl UtilizationStatus {
    /// Classifies utilization `rho` against `threshold`.
    pub fn classify(rho: f64, threshold: f64) -> Self {
        if rho >= 1.0 {
            Self::Unstable
        } else if rho >= threshold {
            Self::High
        } else {
            Self::Ok
        }
    }
}

/// Evaluation of one block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockReport {
    /// Block label.
    pub label: String,
    /// Arrival rate in the block.
    pub arrival_rate: f64,
    /// Servers on duty.
    pub servers: u32,
    /// Utilization ρ.
    pub utilization: f64,
    /// Utilization band.
    pub status: UtilizationStatus,
    /// M/M/s metrics (infinite when unstable).
    pub metrics: PerformanceMetrics,
}

/// Evaluation of a whole staffing plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffingReport {
    /// Per-block results in profile order.
    pub blocks: Vec<BlockReport>,
    /// Threshold used for classification.
    pub threshold: f64,
    /// Blocks classified `Ok`.
    pub ok_count: usize,
    /// Blocks classified `High`.
    pub high_count: usize,
    /// Blocks classified `Unstable`.
    pub unstable_count: usize,
}

impl StaffingReport {
    /// Whether every block is below the threshold.
    pub fn all_ok(&self) -> bool {
        self.high_count == 0 && self.unstable_count == 0
    }

    /// Whether every block is stable.
    pub fn is_stable(&self) -> bool {
        self.unstable_count == 0
    }

    /// Highest block utilization (0.0 if there are no blocks).
    pub fn peak_utilization(&self) -> f64 {
        self.blocks
            .iter()
            .map(|b| b.utilization)
            .fold(0.0, f64::max)
    }

    /// Worst status across all blocks.
    pub fn overall_status(&self) -> UtilizationStatus {
        if self.unstable_count > 0 {
            UtilizationStatus::Unstable
        } else if self.high_count > 0 {
            UtilizationStatus::High
        } else {
            UtilizationStatus::Ok
        }
    }
}

/// Evaluates `plan` against `profile` with per-server rate μ.
///
/// Every block is modelled as an M/M/s queue with its own λ and s.
///
/// # Errors
/// Invalid profile, threshold outside (0, 1], a plan whose length differs
/// from the profile, or a block with zero servers.
pub fn evaluate_plan(
    profile: &DemandProfile,
    plan: &StaffingPlan,
    service_rate: f64,
    threshold: f64,
) -> Result<StaffingReport> {
    validate_profile(profile, service_rate)?;
    validate_threshold(threshold)?;
    validate_lengths("staffing plan", profile.len(), plan.len())?;

    let mut blocks = Vec::with_capacity(profile.len());
    let (mut ok_count, mut high_count, mut unstable_count) = (0, 0, 0);

    for (block, &servers) in profile.blocks.iter().zip(&plan.servers) {
        let metrics = multi_server_metrics(block.arrival_rate, service_rate, servers)?;
        let status = UtilizationStatus::classify(metrics.utilization, threshold);
        match status {
            UtilizationStatus::Ok => ok_count += 1,
            UtilizationStatus::High => high_count += 1,
            UtilizationStatus::Unstable => unstable_count += 1,
        }
        trace!(
            block = %block.label,
            servers,
            utilization = metrics.utilization,
            ?status,
            "evaluated block"
        );
        blocks.push(BlockReport {
            label: block.label.clone(),
            arrival_rate: block.arrival_rate,
            servers,
            utilization: metrics.utilization,
            status,
            metrics,
        });
    }

    debug!(
        blocks = blocks.len(),
        ok_count, high_count, unstable_count, threshold, "evaluated staffing plan"
    );

    Ok(StaffingReport {
        blocks,
        threshold,
        ok_count,
        high_count,
        unstable_count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day_profile() -> DemandProfile {
        DemandProfile::hourly(
            &["8-9", "9-10", "10-11", "11-12", "12-1", "1-2", "2-3", "3-4", "4-5", "5-6"],
            &[20.0, 25.0, 20.0, 15.0, 10.0, 15.0, 20.0, 25.0, 30.0, 25.0],
        )
    }

    fn two_shifts() -> Vec<Shift> {
        vec![Shift::new("Morning", 0, 5), Shift::new("Afternoon", 5, 5)]
    }

    #[test]
    fn test_classify() {
        assert_eq!(UtilizationStatus::classify(0.5, 0.9), UtilizationStatus::Ok);
        assert_eq!(UtilizationStatus::classify(0.9, 0.9), UtilizationStatus::High);
        assert_eq!(UtilizationStatus::classify(0.99, 0.9), UtilizationStatus::High);
        assert_eq!(UtilizationStatus::classify(1.0, 0.9), UtilizationStatus::Unstable);
    }

    #[test]
    fn test_constant_single_server_all_unstable() {
        let profile = day_profile();
        let report =
            evaluate_plan(&profile, &StaffingPlan::constant(1, 10), 10.0, 0.85).unwrap();
        assert_eq!(report.unstable_count, 10);
        assert_eq!(report.overall_status(), UtilizationStatus::Unstable);
        assert!(report.blocks.iter().all(|b| b.metrics.in_system.is_infinite()));
    }

    #[test]
    fn test_constant_three_servers_fails_at_peak() {
        let profile = day_profile();
        let report =
            evaluate_plan(&profile, &StaffingPlan::constant(3, 10), 10.0, 0.85).unwrap();
        // Only 4-5 (λ=30) saturates three servers
        assert_eq!(report.unstable_count, 1);
        assert_eq!(report.high_count, 0);
        assert_eq!(report.ok_count, 9);
        assert_eq!(report.blocks[8].status, UtilizationStatus::Unstable);
        assert!((report.peak_utilization() - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_two_shift_plan() {
        let profile = day_profile();
        let plan = StaffingPlan::from_shifts(&two_shifts(), &[3, 4], profile.len()).unwrap();
        assert_eq!(plan.servers, vec![3, 3, 3, 3, 3, 4, 4, 4, 4, 4]);
        assert!((plan.staff_hours(&profile) - 35.0).abs() < 1e-10);

        let report = evaluate_plan(&profile, &plan, 10.0, 0.9).unwrap();
        assert!(report.all_ok());
        assert!(report.is_stable());
        for b in &report.blocks {
            assert!(b.metrics.satisfies_littles_law(b.arrival_rate, 1e-9));
        }
    }

    #[test]
    fn test_high_band() {
        let profile = day_profile();
        let plan = StaffingPlan::from_shifts(&two_shifts(), &[3, 3], profile.len()).unwrap();
        let report = evaluate_plan(&profile, &plan, 10.0, 0.9).unwrap();
        // 4-5 at ρ=1.0 is unstable; no block sits in [0.9, 1)
        assert_eq!(report.unstable_count, 1);
        assert_eq!(report.high_count, 0);

        let report = evaluate_plan(&profile, &plan, 10.0, 0.8).unwrap();
        // 9-10, 3-4 and 5-6 run at 0.833
        assert_eq!(report.high_count, 3);
    }

    #[test]
    fn test_plan_length_mismatch() {
        let profile = day_profile();
        assert!(evaluate_plan(&profile, &StaffingPlan::constant(3, 9), 10.0, 0.9).is_err());
    }

    #[test]
    fn test_zero_servers_rejected() {
        let profile = day_profile();
        assert!(evaluate_plan(&profile, &StaffingPlan::constant(0, 10), 10.0, 0.9).is_err());
    }

    #[test]
    fn test_from_shifts_validates() {
        assert!(StaffingPlan::from_shifts(&two_shifts(), &[3], 10).is_err());
        assert!(StaffingPlan::from_shifts(&two_shifts(), &[3, 4], 12).is_err());
    }

    #[test]
    fn test_report_serializes() {
        let profile = day_profile();
        let plan = StaffingPlan::constant(4, 10);
        let report = evaluate_plan(&profile, &plan, 10.0, 0.9).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["blocks"][0]["label"], "8-9");
        assert_eq!(json["blocks"][0]["status"], "Ok");
    }
}
