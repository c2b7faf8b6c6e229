//! Download outcome tracking.

use std::iter::Sum;
use std::ops::{Add, AddAssign};

use crate::error::Error;

/// Bytes per reported megabyte.
pub const BYTES_PER_MB: f64 = 1_048_576.0;

/// What happened to a single item.
#[derive(Debug)]
pub enum ItemOutcome {
    Downloaded { bytes: u64 },
    Skipped,
    Failed(Error),
}

/// Aggregate counters of one fetch pass.
///
/// Results of sequential runs combine by field-wise addition; the default
/// value is the identity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunResult {
    pub downloaded: u64,
    pub failed: u64,
    pub skipped: u64,
    pub total_bytes: u64,
}

impl RunResult {
    /// Count one item outcome.
    pub fn record(&mut self, outcome: &ItemOutcome) {
        match outcome {
            ItemOutcome::Downloaded { bytes } => {
                self.downloaded += 1;
                self.total_bytes += bytes;
            }
            ItemOutcome::Skipped => self.skipped += 1,
            ItemOutcome::Failed(_) => self.failed += 1,
        }
    }

    /// Items a request was made for.
    pub fn attempted(&self) -> u64 {
        self.downloaded + self.failed
    }

    /// Every item seen, whatever its outcome.
    pub fn total_items(&self) -> u64 {
        self.downloaded + self.failed + self.skipped
    }

    pub fn total_megabytes(&self) -> f64 {
        self.total_bytes as f64 / BYTES_PER_MB
    }
}

impl Add for RunResult {
    type Output = RunResult;

    fn add(self, other: RunResult) -> RunResult {
        RunResult {
            downloaded: self.downloaded + other.downloaded,
            failed: self.failed + other.failed,
            skipped: self.skipped + other.skipped,
            total_bytes: self.total_bytes + other.total_bytes,
        }
    }
}

impl AddAssign for RunResult {
    fn add_assign(&mut self, other: RunResult) {
        *self = *self + other;
    }
}

impl Sum for RunResult {
    fn sum<I: Iterator<Item = RunResult>>(iter: I) -> Self {
        iter.fold(RunResult::default(), Add::add)
    }
}

/// Totals across the albums of an account run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AccountSummary {
    pub totals: RunResult,
    pub albums_processed: u64,
    pub albums_failed: u64,
}

impl AccountSummary {
    /// Fold in one album's result.
    pub fn add_album(&mut self, result: &RunResult) {
        self.totals += *result;
        self.albums_processed += 1;
    }

    /// Mark an album that could not be downloaded at all.
    pub fn mark_album_failed(&mut self) {
        self.albums_failed += 1;
    }
}
