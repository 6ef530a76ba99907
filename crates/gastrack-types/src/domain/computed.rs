use serde::{Deserialize, Serialize};

use super::entry::FuelEntry;

/// A fuel entry enriched with the metrics derived from its predecessor.
///
/// Recomputed on every read and never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComputedEntry {
    #[serde(flatten)]
    pub entry: FuelEntry,
    /// Odometer delta since the previous fill (0 for the earliest fill)
    pub distance: f64,
    /// km/L of this fill; `None` when there is no previous fill
    pub efficiency: Option<f64>,
}

impl ComputedEntry {
    /// True for the earliest fill, which only sets the starting odometer
    pub fn is_starting_point(&self) -> bool {
        self.efficiency.is_none()
    }

    /// True when the fill contributes to averages and charts
    pub fn is_valid_interval(&self) -> bool {
        matches!(self.efficiency, Some(value) if value != 0.0)
    }
}
