//! Time-varying demand and shift models.
//!
//! A working day is divided into consecutive [`TimeBlock`]s, each with its
//! own arrival rate. A [`Shift`] covers a contiguous run of blocks and is
//! staffed with a single head count for its whole duration.
//!
//! # Time Model
//! Block durations and shift lengths are in hours. Arrival rates are per hour.

use std::ops::Range;

use serde::{Deserialize, Serialize};

/// A period of the day with a constant arrival rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeBlock {
    /// Display label (e.g. "8-9").
    pub label: String,
    /// Arrival rate λ during this block (per hour).
    pub arrival_rate: f64,
    /// Block duration in hours (default: 1.0).
    #[serde(default = "default_block_hours")]
    pub hours: f64,
}

fn default_block_hours() -> f64 {
    1.0
}

impl TimeBlock {
    /// Creates a one-hour block.
    pub fn new(label: impl Into<String>, arrival_rate: f64) -> Self {
        Self {
            label: label.into(),
            arrival_rate,
            hours: 1.0,
        }
    }

    /// Sets the block duration.
    pub fn with_hours(mut self, hours: f64) -> Self {
        self.hours = hours;
        self
    }
}

/// Ordered sequence of time blocks covering a day.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DemandProfile {
    /// Blocks in chronological order.
    pub blocks: Vec<TimeBlock>,
}

impl DemandProfile {
    /// Creates an empty profile.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a profile of one-hour blocks from parallel label/rate lists.
    ///
    /// Extra entries in the longer list are ignored.
    pub fn hourly<S: AsRef<str>>(labels: &[S], arrival_rates: &[f64]) -> Self {
        Self {
            blocks: labels
                .iter()
                .zip(arrival_rates)
                .map(|(label, &rate)| TimeBlock::new(label.as_ref(), rate))
                .collect(),
        }
    }

    /// Appends a block.
    pub fn with_block(mut self, block: TimeBlock) -> Self {
        self.blocks.push(block);
        self
    }

    /// Number of blocks.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Whether the profile has no blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Total length of the day in hours.
    pub fn total_hours(&self) -> f64 {
        self.blocks.iter().map(|b| b.hours).sum()
    }

    /// Peak arrival rate across all blocks (0.0 if empty).
    pub fn peak_arrival_rate(&self) -> f64 {
        self.blocks
            .iter()
            .map(|b| b.arrival_rate)
            .fold(0.0, f64::max)
    }
}

/// A staffing shift spanning a contiguous run of blocks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shift {
    /// Shift name (e.g. "Morning").
    pub name: String,
    /// Index of the first block covered.
    pub first_block: usize,
    /// Number of consecutive blocks covered.
    pub block_count: usize,
    /// Paid hours per staff member.
    pub hours: f64,
}

impl Shift {
    /// Creates a shift whose paid hours equal its block count.
    pub fn new(name: impl Into<String>, first_block: usize, block_count: usize) -> Self {
        Self {
            name: name.into(),
            first_block,
            block_count,
            hours: block_count as f64,
        }
    }

    /// Overrides the paid hours.
    pub fn with_hours(mut self, hours: f64) -> Self {
        self.hours = hours;
        self
    }

    /// Block indices covered by this shift.
    ///
    /// The end saturates at `usize::MAX`.
    #[inline]
    pub fn blocks(&self) -> Range<usize> {
        self.first_block..self.first_block.saturating_add(self.block_count)
    }

    /// Whether the shift covers the given block index.
    #[inline]
    pub fn covers(&self, block: usize) -> bool {
        self.blocks().contains(&block)
    }
}
