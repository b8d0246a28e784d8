//! Scenario configuration.
//!
//! A scenario bundles everything needed to evaluate a staffing day:
//! service rate, wage, demand profile, shift layout and the utilization
//! threshold. Scenarios load from TOML:
//!
//! ```toml
//! service_rate = 10.0
//! wage_per_hour = 25.0
//! threshold = 0.9
//!
//! [[profile.blocks]]
//! label = "8-9"
//! arrival_rate = 20.0
//!
//! [[shifts]]
//! name = "Morning"
//! first_block = 0
//! block_count = 1
//! hours = 1.0
//! ```
//!
//! Omitted top-level fields fall back to [`ScenarioConfig::default`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{QueueError, Result};
use crate::models::{DemandProfile, Shift};
use crate::staffing::{
    cheapest_shift_plan, evaluate_plan, ShiftPlan, StaffingPlan, StaffingReport,
};
use crate::validation::{
    validate_labor, validate_profile, validate_shift_cover, validate_threshold, ValidationError,
};

const DEFAULT_LABELS: [&str; 10] = [
    "8-9", "9-10", "10-11", "11-12", "12-1", "1-2", "2-3", "3-4", "4-5", "5-6",
];
const DEFAULT_ARRIVALS: [f64; 10] = [20.0, 25.0, 20.0, 15.0, 10.0, 15.0, 20.0, 25.0, 30.0, 25.0];

/// A staffing scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioConfig {
    /// Service rate μ per server (per hour).
    pub service_rate: f64,
    /// Hourly wage per staff member.
    pub wage_per_hour: f64,
    /// Utilization at or above which a block counts as `High`.
    pub threshold: f64,
    /// Arrival rates over the day.
    pub profile: DemandProfile,
    /// Shift layout partitioning the profile.
    pub shifts: Vec<Shift>,
}

impl Default for ScenarioConfig {
    /// Ten one-hour blocks from 8 to 6 with a midday dip and a late
    /// afternoon peak, two five-hour shifts, μ = 10/h, €25/h, 90% cap.
    fn default() -> Self {
        Self {
            service_rate: 10.0,
            wage_per_hour: 25.0,
            threshold: 0.9,
            profile: DemandProfile::hourly(&DEFAULT_LABELS, &DEFAULT_ARRIVALS),
            shifts: vec![
                Shift::new("Morning", 0, 5),
                Shift::new("Afternoon", 5, 5),
            ],
        }
    }
}

impl ScenarioConfig {
    /// Parses and validates a scenario from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and validates a scenario from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| QueueError::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&text)
    }

    /// Serializes the scenario to TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| QueueError::Config(e.to_string()))
    }

    /// Checks the profile, threshold, wage and shift layout together.
    pub fn validate(&self) -> Result<()> {
        let mut errors: Vec<ValidationError> = Vec::new();
        for check in [
            validate_profile(&self.profile, self.service_rate),
            validate_threshold(self.threshold),
            validate_shift_cover(&self.shifts, self.profile.len()),
            validate_labor(&[], self.wage_per_hour),
        ] {
            if let Err(mut e) = check {
                errors.append(&mut e);
            }
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors.into())
        }
    }

    /// Evaluates a per-shift staffing choice.
    pub fn evaluate_shift_staff(&self, staff: &[u32]) -> Result<StaffingReport> {
        let plan = StaffingPlan::from_shifts(&self.shifts, staff, self.profile.len())?;
        evaluate_plan(&self.profile, &plan, self.service_rate, self.threshold)
    }

    /// Evaluates the same head count in every block.
    pub fn evaluate_constant_staff(&self, servers: u32) -> Result<StaffingReport> {
        let plan = StaffingPlan::constant(servers, self.profile.len());
        evaluate_plan(&self.profile, &plan, self.service_rate, self.threshold)
    }

    /// Cheapest shift staffing keeping every block below the threshold.
    pub fn cheapest_plan(&self) -> Result<ShiftPlan> {
        cheapest_shift_plan(
            &self.profile,
            &self.shifts,
            self.service_rate,
            self.threshold,
            self.wage_per_hour,
        )
    }
}
