//! Refuel histories shared by integration tests.

use chrono::NaiveDate;
use gastrack_types::{EntryId, FuelEntry};

pub fn fill(id: &str, date: &str, odometer: f64, price: f64, liters: f64) -> FuelEntry {
    FuelEntry {
        id: EntryId::new(id),
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").expect("fixture date"),
        odometer,
        price_per_liter: price,
        liters,
        total_cost: (price * liters * 100.0).round() / 100.0,
    }
}

/// Three fills across February and March 2024, stored out of order.
///
/// Intervals: 500 km on 40 L (12.5 km/L) and 450 km on 30 L (15 km/L).
pub fn three_fills() -> Vec<FuelEntry> {
    vec![
        fill("b0000000-0000-4000-8000-000000000002", "2024-03-01", 10500.0, 6.0, 40.0),
        fill("c0000000-0000-4000-8000-000000000003", "2024-03-15", 10950.0, 6.0, 30.0),
        fill("a0000000-0000-4000-8000-000000000001", "2024-02-10", 10000.0, 5.0, 35.0),
    ]
}
