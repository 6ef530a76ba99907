use chrono::NaiveDate;
use gastrack_types::{BestEfficiency, ChartPoint, ComputedEntry, DashboardStats, FuelEntry};

use crate::period::same_month;
use crate::timeline;

pub(crate) fn calculate(entries: &[FuelEntry], today: NaiveDate) -> DashboardStats {
    if entries.is_empty() {
        return DashboardStats::default();
    }

    let computed = timeline::compute(entries);

    let total_cost: f64 = entries.iter().map(|e| e.total_cost).sum();
    let total_distance = odometer_span(entries);

    let valid: Vec<(&ComputedEntry, f64)> = computed
        .iter()
        .filter(|c| c.is_valid_interval())
        .filter_map(|c| c.efficiency.map(|value| (c, value)))
        .collect();

    // Weighted by liters: an effective overall km/L, not a mean of ratios
    let interval_distance: f64 = valid.iter().map(|(c, _)| c.distance).sum();
    let interval_liters: f64 = valid.iter().map(|(c, _)| c.entry.liters).sum();
    let average_efficiency = ratio_or_zero(interval_distance, interval_liters);

    // First maximum in timeline order, as a stable descending sort would pick
    let best_efficiency = valid
        .iter()
        .copied()
        .reduce(|best, candidate| if candidate.1 > best.1 { candidate } else { best })
        .map(|(c, value)| BestEfficiency {
            value,
            date: c.entry.date,
        });

    let mut chronological = valid.clone();
    chronological.sort_by(|(a, _), (b, _)| {
        a.entry
            .date
            .cmp(&b.entry.date)
            .then(a.entry.odometer.total_cmp(&b.entry.odometer))
    });
    let efficiency_series = chronological
        .into_iter()
        .map(|(c, value)| ChartPoint {
            date: c.entry.date,
            value,
        })
        .collect();

    let (current_month_cost, current_month_distance) = computed
        .iter()
        .filter(|c| same_month(c.entry.date, today))
        .fold((0.0, 0.0), |(cost, distance), c| {
            (cost + c.entry.total_cost, distance + c.distance)
        });

    DashboardStats {
        average_efficiency,
        best_efficiency,
        total_cost,
        total_distance,
        current_month_cost,
        current_month_distance,
        efficiency_series,
        cost_per_distance: ratio_or_zero(total_cost, total_distance),
        current_month_cost_per_distance: ratio_or_zero(current_month_cost, current_month_distance),
    }
}

/// Highest minus lowest odometer reading; 0 with fewer than two fills
fn odometer_span(entries: &[FuelEntry]) -> f64 {
    let mut readings: Vec<f64> = entries.iter().map(|e| e.odometer).collect();
    readings.sort_by(f64::total_cmp);

    match (readings.first(), readings.last()) {
        (Some(lowest), Some(highest)) if readings.len() > 1 => highest - lowest,
        _ => 0.0,
    }
}

fn ratio_or_zero(numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 {
        numerator / denominator
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gastrack_types::EntryId;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn fill(id: &str, date: NaiveDate, odometer: f64, liters: f64, total_cost: f64) -> FuelEntry {
        FuelEntry {
            id: EntryId::new(id),
            date,
            odometer,
            price_per_liter: if liters > 0.0 { total_cost / liters } else { 5.0 },
            liters,
            total_cost,
        }
    }

    #[test]
    fn test_empty_input_is_all_zero() {
        let stats = calculate(&[], d(2024, 6, 15));

        assert_eq!(stats, DashboardStats::default());
        assert_eq!(stats.average_efficiency, 0.0);
        assert_eq!(stats.cost_per_distance, 0.0);
        assert!(stats.best_efficiency.is_none());
        assert!(stats.efficiency_series.is_empty());
    }

    #[test]
    fn test_single_entry_has_cost_but_no_distance() {
        let stats = calculate(&[fill("a", d(2024, 6, 1), 10000.0, 40.0, 200.0)], d(2024, 6, 15));

        assert_eq!(stats.total_cost, 200.0);
        assert_eq!(stats.total_distance, 0.0);
        assert_eq!(stats.current_month_cost, 200.0);
        assert_eq!(stats.current_month_distance, 0.0);
        assert_eq!(stats.cost_per_distance, 0.0);
        assert_eq!(stats.current_month_cost_per_distance, 0.0);
        assert!(stats.best_efficiency.is_none());
    }

    #[test]
    fn test_two_fills_500km_apart() {
        let entries = vec![
            fill("a", d(2024, 5, 1), 10000.0, 40.0, 200.0),
            fill("b", d(2024, 5, 20), 10500.0, 35.0, 180.0),
        ];
        let stats = calculate(&entries, d(2024, 5, 31));

        assert_eq!(stats.total_distance, 500.0);
        assert_eq!(stats.total_cost, 380.0);
        assert!((stats.average_efficiency - 500.0 / 35.0).abs() < 1e-9);

        let best = stats.best_efficiency.unwrap();
        assert_eq!(best.date, d(2024, 5, 20));
        assert!((best.value - 14.2857).abs() < 1e-3);

        assert_eq!(stats.current_month_distance, 500.0);
        assert!((stats.cost_per_distance - 0.76).abs() < 1e-9);
    }

    #[test]
    fn test_average_is_weighted_by_liters() {
        // 300 km on 10 L (30 km/L) and 600 km on 60 L (10 km/L)
        let entries = vec![
            fill("a", d(2024, 1, 1), 1000.0, 40.0, 200.0),
            fill("b", d(2024, 1, 10), 1300.0, 10.0, 50.0),
            fill("c", d(2024, 1, 20), 1900.0, 60.0, 300.0),
        ];
        let stats = calculate(&entries, d(2024, 1, 31));

        // Weighted: 900 / 70; arithmetic mean would be 20
        assert!((stats.average_efficiency - 900.0 / 70.0).abs() < 1e-9);
        assert!((stats.average_efficiency - 20.0).abs() > 1.0);
    }

    #[test]
    fn test_zero_distance_fill_is_excluded_from_average() {
        let entries = vec![
            fill("a", d(2024, 1, 1), 1000.0, 40.0, 200.0),
            fill("b", d(2024, 1, 5), 1400.0, 40.0, 200.0),
            fill("c", d(2024, 1, 6), 1400.0, 20.0, 100.0),
        ];
        let stats = calculate(&entries, d(2024, 1, 31));

        // b and c share a reading: b (input order first) records no distance,
        // c carries the 400 km interval on its 20 L
        assert_eq!(stats.efficiency_series.len(), 1);
        assert_eq!(stats.efficiency_series[0].date, d(2024, 1, 6));
        assert_eq!(stats.average_efficiency, 20.0);
    }

    #[test]
    fn test_zero_liters_middle_fill_stays_finite() {
        let entries = vec![
            fill("a", d(2024, 2, 1), 10000.0, 40.0, 200.0),
            fill("b", d(2024, 2, 10), 10400.0, 0.0, 0.0),
            fill("c", d(2024, 2, 20), 10900.0, 50.0, 250.0),
        ];
        let stats = calculate(&entries, d(2024, 2, 28));

        assert!(stats.average_efficiency.is_finite());
        assert_eq!(stats.average_efficiency, 10.0);
        let best = stats.best_efficiency.unwrap();
        assert_eq!(best.value, 10.0);
        assert_eq!(best.date, d(2024, 2, 20));
        assert_eq!(stats.efficiency_series.len(), 1);
        // Total distance is still measured from the extremes
        assert_eq!(stats.total_distance, 900.0);
    }

    #[test]
    fn test_best_efficiency_ties_resolve_to_newest_fill() {
        let entries = vec![
            fill("a", d(2024, 3, 1), 1000.0, 30.0, 150.0),
            fill("b", d(2024, 3, 8), 1300.0, 20.0, 100.0),
            fill("c", d(2024, 3, 15), 1600.0, 20.0, 100.0),
        ];
        let stats = calculate(&entries, d(2024, 3, 31));

        let best = stats.best_efficiency.unwrap();
        assert_eq!(best.value, 15.0);
        assert_eq!(best.date, d(2024, 3, 15));
    }

    #[test]
    fn test_series_is_chronological_by_date() {
        // Dates disagree with odometer order on purpose
        let entries = vec![
            fill("a", d(2024, 4, 1), 1000.0, 40.0, 200.0),
            fill("b", d(2024, 4, 20), 1400.0, 40.0, 200.0),
            fill("c", d(2024, 4, 10), 1900.0, 50.0, 250.0),
        ];
        let stats = calculate(&entries, d(2024, 4, 30));

        let dates: Vec<NaiveDate> = stats.efficiency_series.iter().map(|p| p.date).collect();
        assert_eq!(dates, vec![d(2024, 4, 10), d(2024, 4, 20)]);
        assert_eq!(stats.efficiency_series[0].value, 10.0);
        assert_eq!(stats.efficiency_series[1].value, 10.0);
        assert!(stats.has_trend());
    }

    #[test]
    fn test_same_day_points_order_by_odometer() {
        // Two fills on one day, listed newest first
        let entries = vec![
            fill("c", d(2024, 4, 10), 1900.0, 25.0, 125.0),
            fill("b", d(2024, 4, 10), 1400.0, 40.0, 200.0),
            fill("a", d(2024, 4, 1), 1000.0, 40.0, 200.0),
        ];
        let stats = calculate(&entries, d(2024, 4, 30));

        let values: Vec<f64> = stats.efficiency_series.iter().map(|p| p.value).collect();
        assert_eq!(values, vec![10.0, 20.0]);
        assert!(stats.efficiency_series.iter().all(|p| p.date == d(2024, 4, 10)));
    }

    #[test]
    fn test_series_holds_exactly_the_valid_intervals() {
        let entries = vec![
            fill("a", d(2024, 3, 1), 1000.0, 40.0, 200.0),
            fill("b", d(2024, 3, 5), 1000.0, 30.0, 150.0),
            fill("c", d(2024, 3, 9), 1300.0, 0.0, 100.0),
            fill("d", d(2024, 3, 14), 1700.0, 40.0, 200.0),
        ];
        let stats = calculate(&entries, d(2024, 3, 31));

        let valid: Vec<ChartPoint> = timeline::compute(&entries)
            .iter()
            .filter(|c| c.is_valid_interval())
            .map(|c| ChartPoint {
                date: c.entry.date,
                value: c.efficiency.unwrap(),
            })
            .rev()
            .collect();
        assert_eq!(stats.efficiency_series, valid);
        assert_eq!(valid.len(), 1);
        assert_eq!(valid[0].value, 10.0);
    }

    #[test]
    fn test_current_month_uses_injected_today() {
        let entries = vec![
            fill("a", d(2024, 2, 20), 10000.0, 40.0, 200.0),
            fill("b", d(2024, 2, 28), 10300.0, 30.0, 150.0),
            fill("c", d(2024, 3, 5), 10700.0, 40.0, 220.0),
            fill("d", d(2024, 3, 18), 11000.0, 25.0, 140.0),
        ];

        let march = calculate(&entries, d(2024, 3, 31));
        assert_eq!(march.current_month_cost, 360.0);
        assert_eq!(march.current_month_distance, 700.0);
        assert!((march.current_month_cost_per_distance - 360.0 / 700.0).abs() < 1e-12);

        let february = calculate(&entries, d(2024, 2, 1));
        assert_eq!(february.current_month_cost, 350.0);
        assert_eq!(february.current_month_distance, 300.0);

        // Same month one year later matches nothing
        let next_year = calculate(&entries, d(2025, 3, 10));
        assert_eq!(next_year.current_month_cost, 0.0);
        assert_eq!(next_year.current_month_cost_per_distance, 0.0);
    }

    #[test]
    fn test_total_distance_uses_extremes() {
        let entries = vec![
            fill("a", d(2024, 1, 1), 5200.0, 30.0, 150.0),
            fill("b", d(2024, 1, 2), 5000.0, 30.0, 150.0),
            fill("c", d(2024, 1, 3), 5900.0, 30.0, 150.0),
        ];
        assert_eq!(odometer_span(&entries), 900.0);
        assert_eq!(odometer_span(&entries[..1]), 0.0);
    }

    #[test]
    fn test_calculation_is_idempotent() {
        let entries = vec![
            fill("a", d(2024, 7, 1), 20000.0, 41.3, 251.12),
            fill("b", d(2024, 7, 9), 20437.0, 33.7, 204.97),
            fill("c", d(2024, 7, 21), 20811.0, 29.05, 176.6),
        ];
        let today = d(2024, 7, 25);

        let first = calculate(&entries, today);
        let second = calculate(&entries, today);

        assert_eq!(first.average_efficiency.to_bits(), second.average_efficiency.to_bits());
        assert_eq!(first.cost_per_distance.to_bits(), second.cost_per_distance.to_bits());
        assert_eq!(first, second);
    }
}
