//! Custom assertions over `--format json` output.

use anyhow::{Context, Result};
use serde_json::Value;

/// Assert that a JSON array output has `expected` elements.
pub fn assert_entry_count(json: &Value, expected: usize) -> Result<()> {
    let entries = json.as_array().context("Expected a JSON array")?;

    if entries.len() != expected {
        anyhow::bail!("Expected {} entries, got {}", expected, entries.len());
    }

    Ok(())
}

/// Assert that the number at `key` is within 1e-9 of `expected`.
pub fn assert_number(json: &Value, key: &str, expected: f64) -> Result<()> {
    let actual = json[key]
        .as_f64()
        .with_context(|| format!("Expected number at '{}', got {}", key, json[key]))?;

    if (actual - expected).abs() > 1e-9 {
        anyhow::bail!("'{}' was {}, expected {}", key, actual, expected);
    }

    Ok(())
}

/// Assert that history rows come out with strictly decreasing odometers.
pub fn assert_newest_first(json: &Value) -> Result<()> {
    let entries = json.as_array().context("Expected a JSON array")?;
    let odometers: Vec<f64> = entries
        .iter()
        .map(|e| e["odometer"].as_f64().context("entry without odometer"))
        .collect::<Result<_>>()?;

    if odometers.windows(2).any(|pair| pair[0] <= pair[1]) {
        anyhow::bail!("History is not newest-first: {:?}", odometers);
    }

    Ok(())
}
