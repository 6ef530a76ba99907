use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Fewest points a trend line needs before it is worth drawing
pub const MIN_CHART_POINTS: usize = 2;

/// Highest single-fill efficiency and the day it happened
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BestEfficiency {
    pub value: f64,
    pub date: NaiveDate,
}

/// One point of the efficiency trend line
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub date: NaiveDate,
    pub value: f64,
}

/// Aggregate summary shown on the dashboard
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    /// Liters-weighted km/L over all valid intervals
    pub average_efficiency: f64,
    pub best_efficiency: Option<BestEfficiency>,
    pub total_cost: f64,
    pub total_distance: f64,
    pub current_month_cost: f64,
    pub current_month_distance: f64,
    /// Valid intervals in ascending date order
    pub efficiency_series: Vec<ChartPoint>,
    pub cost_per_distance: f64,
    pub current_month_cost_per_distance: f64,
}

impl DashboardStats {
    /// Whether the efficiency series has enough points for a trend line
    pub fn has_trend(&self) -> bool {
        self.efficiency_series.len() >= MIN_CHART_POINTS
    }
}
