//! Window aggregation over completed runs.

use std::cmp::Reverse;

use crate::types::{Run, RunCounts, Summary};

/// Number of most recent completed runs considered by [`summarize`].
pub const WINDOW_SIZE: usize = 10;

/// Reduce a run list into summary statistics.
///
/// Only `completed` runs are considered. They are ordered newest first by
/// [`Run::effective_millis`] (ties keep input order) and the first
/// [`WINDOW_SIZE`] form the window. Conclusions other than success/failure
/// are left out of the rate but still count toward the mean duration.
pub fn summarize(runs: &[Run]) -> Summary {
    let mut completed: Vec<&Run> = runs.iter().filter(|r| r.is_completed()).collect();
    completed.sort_by_key(|r| Reverse(r.effective_millis()));
    completed.truncate(WINDOW_SIZE);
    let window = completed;

    let mut counts = RunCounts::default();
    for run in &window {
        if run.concluded("success") {
            counts.success += 1;
        } else if run.concluded("failure") {
            counts.failure += 1;
        }
    }

    let considered = counts.success + counts.failure;
    let success_rate = if considered > 0 {
        f64::from(counts.success) / f64::from(considered)
    } else {
        0.0
    };

    let mean_duration_ms = if window.is_empty() {
        0
    } else {
        let total: f64 = window.iter().map(|r| r.duration_ms()).sum();
        round_half_up(total / window.len() as f64)
    };

    tracing::debug!(
        total = runs.len(),
        windowed = window.len(),
        success = counts.success,
        failure = counts.failure,
        "summarized runs"
    );

    Summary {
        window: WINDOW_SIZE,
        success_rate,
        mean_duration_ms,
        counts,
    }
}

/// Round halves toward +inf, clamping negatives and NaN to zero.
fn round_half_up(value: f64) -> u64 {
    let rounded = (value + 0.5).floor();
    if rounded.is_nan() || rounded <= 0.0 {
        0
    } else {
        rounded as u64
    }
}
