use gastrack_types::{ComputedEntry, FuelEntry};

/// Order entries newest-first and derive distance/efficiency per fill.
///
/// Odometer order stands in for chronology: dates are user-edited, the
/// odometer only goes up. The chronological predecessor of a fill is the
/// next element in the descending sequence.
pub(crate) fn compute(entries: &[FuelEntry]) -> Vec<ComputedEntry> {
    let mut sorted: Vec<&FuelEntry> = entries.iter().collect();
    // Stable sort: fills sharing an odometer reading keep their input order
    sorted.sort_by(|a, b| b.odometer.total_cmp(&a.odometer));

    sorted
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let Some(previous) = sorted.get(index + 1) else {
                return ComputedEntry {
                    entry: (*entry).clone(),
                    distance: 0.0,
                    efficiency: None,
                };
            };

            let distance = entry.odometer - previous.odometer;

            ComputedEntry {
                entry: (*entry).clone(),
                distance,
                efficiency: Some(fill_efficiency(distance, entry.liters)),
            }
        })
        .collect()
}

/// km/L for one fill, using the liters put in at this fill.
///
/// Zero distance yields 0. A fill with distance but no usable liter count
/// (zero, negative, NaN) is clamped to 0 as well, so it drops out of the
/// valid intervals instead of poisoning averages with infinity.
fn fill_efficiency(distance: f64, liters: f64) -> f64 {
    if distance > 0.0 && liters > 0.0 {
        distance / liters
    } else {
        0.0
    }
}
