//! Input validation for queueing and staffing computations.
//!
//! Every check collects all violations instead of stopping at the first,
//! so a caller can report the full list at once. Detects:
//! - Non-positive or non-finite rates (λ, μ)
//! - Zero server counts, and required counts beyond `u32`
//! - Negative coefficients of variation
//! - Negative durations and wages
//! - Utilization thresholds outside (0, 1]
//! - Empty demand profiles and shifts outside the profile
//! - Shift layouts that leave blocks uncovered or overlap
//!
//! Unstable systems (ρ ≥ 1) are valid input; stability is a property
//! of the result, not a precondition.

use serde::{Deserialize, Serialize};

use crate::models::{DemandProfile, Shift};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationErrorKind {
    /// A rate is zero or negative.
    NonPositiveRate,
    /// A value is NaN or infinite.
    NonFiniteValue,
    /// Server count is zero.
    NoServers,
    /// A required server count does not fit in `u32`.
    TooManyServers,
    /// A coefficient of variation is negative.
    NegativeVariability,
    /// A duration is negative.
    NegativeDuration,
    /// The hourly wage is negative.
    NegativeWage,
    /// A utilization threshold lies outside (0, 1].
    InvalidThreshold,
    /// A demand profile has no blocks.
    EmptyProfile,
    /// Two sequences that must align have different lengths.
    LengthMismatch,
    /// A shift covers blocks outside the demand profile.
    ShiftOutOfRange,
    /// A block is not covered by any shift.
    UncoveredBlock,
    /// A block is covered by more than one shift.
    OverlappingShifts,
    /// A simulation was asked for zero customers.
    EmptySample,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

fn finish(errors: Vec<ValidationError>) -> ValidationResult {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_rate(name: &str, value: f64, errors: &mut Vec<ValidationError>) {
    if !value.is_finite() {
        errors.push(ValidationError::new(
            ValidationErrorKind::NonFiniteValue,
            format!("{name} must be finite, got {value}"),
        ));
    } else if value <= 0.0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::NonPositiveRate,
            format!("{name} must be positive, got {value}"),
        ));
    }
}

fn check_non_negative(
    name: &str,
    value: f64,
    kind: ValidationErrorKind,
    errors: &mut Vec<ValidationError>,
) {
    if !value.is_finite() {
        errors.push(ValidationError::new(
            ValidationErrorKind::NonFiniteValue,
            format!("{name} must be finite, got {value}"),
        ));
    } else if value < 0.0 {
        errors.push(ValidationError::new(
            kind,
            format!("{name} must be non-negative, got {value}"),
        ));
    }
}

/// Validates M/M/s inputs: λ > 0, μ > 0 (both finite), s ≥ 1.
pub fn validate_queue(arrival_rate: f64, service_rate: f64, servers: u32) -> ValidationResult {
    let mut errors = Vec::new();
    check_rate("arrival rate", arrival_rate, &mut errors);
    check_rate("service rate", service_rate, &mut errors);
    if servers == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::NoServers,
            "server count must be at least 1",
        ));
    }
    finish(errors)
}

/// Validates Erlang-C inputs: s ≥ 1 and ρ > 0 (finite).
///
/// ρ ≥ 1 is accepted; the caller maps it to certain waiting.
pub fn validate_erlang(servers: u32, utilization: f64) -> ValidationResult {
    let mut errors = Vec::new();
    if servers == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::NoServers,
            "server count must be at least 1",
        ));
    }
    check_rate("utilization", utilization, &mut errors);
    finish(errors)
}

/// Validates coefficients of variation (finite, ≥ 0).
pub fn validate_variability(arrival_cv: f64, service_cv: f64) -> ValidationResult {
    let mut errors = Vec::new();
    check_non_negative(
        "arrival CV",
        arrival_cv,
        ValidationErrorKind::NegativeVariability,
        &mut errors,
    );
    check_non_negative(
        "service CV",
        service_cv,
        ValidationErrorKind::NegativeVariability,
        &mut errors,
    );
    finish(errors)
}

/// Validates labor cost inputs: durations and wage non-negative.
pub fn validate_labor(shifts: &[(u32, f64)], wage_per_hour: f64) -> ValidationResult {
    let mut errors = Vec::new();
    for (i, &(_, hours)) in shifts.iter().enumerate() {
        check_non_negative(
            &format!("duration of shift {i}"),
            hours,
            ValidationErrorKind::NegativeDuration,
            &mut errors,
        );
    }
    check_non_negative(
        "wage per hour",
        wage_per_hour,
        ValidationErrorKind::NegativeWage,
        &mut errors,
    );
    finish(errors)
}

/// Validates a utilization threshold in (0, 1].
pub fn validate_threshold(threshold: f64) -> ValidationResult {
    if threshold.is_finite() && threshold > 0.0 && threshold <= 1.0 {
        Ok(())
    } else {
        Err(vec![ValidationError::new(
            ValidationErrorKind::InvalidThreshold,
            format!("utilization threshold must lie in (0, 1], got {threshold}"),
        )])
    }
}

/// Validates a demand profile against a service rate.
///
/// Checks:
/// 1. The profile has at least one block
/// 2. Every block has a positive, finite arrival rate
/// 3. Every block has a non-negative duration
/// 4. The service rate is positive and finite
pub fn validate_profile(profile: &DemandProfile, service_rate: f64) -> ValidationResult {
    let mut errors = Vec::new();
    if profile.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyProfile,
            "demand profile has no blocks",
        ));
    }
    for block in &profile.blocks {
        check_rate(
            &format!("arrival rate of block '{}'", block.label),
            block.arrival_rate,
            &mut errors,
        );
        check_non_negative(
            &format!("duration of block '{}'", block.label),
            block.hours,
            ValidationErrorKind::NegativeDuration,
            &mut errors,
        );
    }
    check_rate("service rate", service_rate, &mut errors);
    finish(errors)
}

/// Validates that shifts fit inside a profile of `block_count` blocks.
pub fn validate_shifts(shifts: &[Shift], block_count: usize) -> ValidationResult {
    let mut errors = Vec::new();
    for shift in shifts {
        if shift.block_count == 0 || shift.blocks().end > block_count {
            errors.push(ValidationError::new(
                ValidationErrorKind::ShiftOutOfRange,
                format!(
                    "shift '{}' covers blocks {:?}, profile has {} blocks",
                    shift.name,
                    shift.blocks(),
                    block_count
                ),
            ));
        }
        check_non_negative(
            &format!("hours of shift '{}'", shift.name),
            shift.hours,
            ValidationErrorKind::NegativeDuration,
            &mut errors,
        );
    }
    finish(errors)
}

/// Validates that shifts partition a profile of `block_count` blocks.
///
/// Every block must be covered by exactly one shift.
pub fn validate_shift_cover(shifts: &[Shift], block_count: usize) -> ValidationResult {
    let mut errors = validate_shifts(shifts, block_count).err().unwrap_or_default();

    let mut coverage = vec![0usize; block_count];
    for shift in shifts {
        let blocks = shift.blocks();
        for block in blocks.start.min(block_count)..blocks.end.min(block_count) {
            coverage[block] += 1;
        }
    }
    for (block, &count) in coverage.iter().enumerate() {
        match count {
            0 => errors.push(ValidationError::new(
                ValidationErrorKind::UncoveredBlock,
                format!("block {block} is not covered by any shift"),
            )),
            1 => {}
            n => errors.push(ValidationError::new(
                ValidationErrorKind::OverlappingShifts,
                format!("block {block} is covered by {n} shifts"),
            )),
        }
    }
    finish(errors)
}

/// Validates that two aligned sequences have equal length.
pub fn validate_lengths(what: &str, expected: usize, actual: usize) -> ValidationResult {
    if expected == actual {
        Ok(())
    } else {
        Err(vec![ValidationError::new(
            ValidationErrorKind::LengthMismatch,
            format!("{what}: expected {expected} entries, got {actual}"),
        )])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TimeBlock;

    #[test]
    fn test_valid_queue() {
        assert!(validate_queue(8.0, 10.0, 1).is_ok());
        // Unstable is still valid input
        assert!(validate_queue(20.0, 10.0, 1).is_ok());
    }

    #[test]
    fn test_non_positive_rates() {
        let errors = validate_queue(0.0, -10.0, 1).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors
            .iter()
            .all(|e| e.kind == ValidationErrorKind::NonPositiveRate));
    }

    #[test]
    fn test_non_finite_rate() {
        let errors = validate_queue(f64::NAN, f64::INFINITY, 1).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors
            .iter()
            .all(|e| e.kind == ValidationErrorKind::NonFiniteValue));
    }

    #[test]
    fn test_no_servers() {
        let errors = validate_queue(8.0, 10.0, 0).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::NoServers);
    }

    #[test]
    fn test_variability() {
        assert!(validate_variability(0.0, 1.5).is_ok());
        let errors = validate_variability(-1.0, -0.5).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors
            .iter()
            .all(|e| e.kind == ValidationErrorKind::NegativeVariability));
    }

    #[test]
    fn test_labor() {
        assert!(validate_labor(&[(2, 5.0), (4, 5.0)], 25.0).is_ok());
        assert!(validate_labor(&[], 0.0).is_ok());
        let errors = validate_labor(&[(2, -1.0)], -25.0).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::NegativeDuration));
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::NegativeWage));
    }

    #[test]
    fn test_threshold() {
        assert!(validate_threshold(0.9).is_ok());
        assert!(validate_threshold(1.0).is_ok());
        assert!(validate_threshold(0.0).is_err());
        assert!(validate_threshold(1.01).is_err());
        assert!(validate_threshold(f64::NAN).is_err());
    }

    #[test]
    fn test_empty_profile() {
        let errors = validate_profile(&DemandProfile::new(), 10.0).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::EmptyProfile));
    }

    #[test]
    fn test_profile_block_rate() {
        let profile = DemandProfile::new()
            .with_block(TimeBlock::new("8-9", 20.0))
            .with_block(TimeBlock::new("9-10", 0.0));
        let errors = validate_profile(&profile, 10.0).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("9-10"));
    }

    #[test]
    fn test_shift_out_of_range() {
        let shifts = vec![Shift::new("Morning", 0, 5), Shift::new("Late", 8, 5)];
        let errors = validate_shifts(&shifts, 10).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::ShiftOutOfRange);
        assert!(errors[0].message.contains("Late"));
    }

    #[test]
    fn test_shift_cover() {
        let shifts = vec![Shift::new("Morning", 0, 5), Shift::new("Afternoon", 5, 5)];
        assert!(validate_shift_cover(&shifts, 10).is_ok());

        let gap = vec![Shift::new("Morning", 0, 4), Shift::new("Afternoon", 5, 5)];
        let errors = validate_shift_cover(&gap, 10).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::UncoveredBlock);

        let overlap = vec![Shift::new("Morning", 0, 6), Shift::new("Afternoon", 5, 5)];
        let errors = validate_shift_cover(&overlap, 10).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::OverlappingShifts);
    }

    #[test]
    fn test_oversized_shift_rejected() {
        let shifts = vec![
            Shift::new("Morning", 0, 1),
            Shift::new("Endless", 1, usize::MAX),
        ];
        let errors = validate_shift_cover(&shifts, 2).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::ShiftOutOfRange);
    }

    #[test]
    fn test_lengths() {
        assert!(validate_lengths("staffing", 10, 10).is_ok());
        let errors = validate_lengths("staffing", 10, 9).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::LengthMismatch);
    }
}
