// Engine module - pure metric computation (timeline, statistics, formatting)
// This layer sits between stored entries (types) and CLI presentation.
// Nothing here performs I/O or reads the clock.

pub mod format;
pub mod period;
mod stats;
mod timeline;

pub use format::NumberFormat;
pub use period::same_month;

use chrono::NaiveDate;
use gastrack_types::{ComputedEntry, DashboardStats, FuelEntry};

// Façade API - Stable public interface for runtime and CLI layers

/// Build the per-fill timeline, newest (highest odometer) first
pub fn compute_entries(entries: &[FuelEntry]) -> Vec<ComputedEntry> {
    timeline::compute(entries)
}

/// Summarize all entries for the dashboard, bucketing the month of `today`
pub fn calculate_stats(entries: &[FuelEntry], today: NaiveDate) -> DashboardStats {
    stats::calculate(entries, today)
}

/// [`calculate_stats`] against the local calendar date
pub fn calculate_stats_now(entries: &[FuelEntry]) -> DashboardStats {
    stats::calculate(entries, chrono::Local::now().date_naive())
}
