mod computed;
mod entry;
mod stats;

pub use computed::ComputedEntry;
pub use entry::{EntryId, FuelEntry};
pub use stats::{BestEfficiency, ChartPoint, DashboardStats, MIN_CHART_POINTS};
