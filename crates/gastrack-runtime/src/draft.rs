use chrono::NaiveDate;
use gastrack_types::{EntryId, FuelEntry};

use crate::{Error, Result};

/// Relative gap between `price * liters` and `total` above which a warning is logged
const CONSISTENCY_TOLERANCE: f64 = 0.01;

/// Fuel entry fields as typed by the user, before validation.
///
/// Any of price, liters and total may be left out as long as the other two
/// allow it to be derived, mirroring how the entry form fills them in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntryDraft {
    pub date: Option<NaiveDate>,
    pub odometer: Option<f64>,
    pub price_per_liter: Option<f64>,
    pub liters: Option<f64>,
    pub total_cost: Option<f64>,
}

impl EntryDraft {
    /// Overlay these edits on an existing entry.
    ///
    /// Changing price or liters without a new total recomputes the total;
    /// changing the total without new liters recomputes the liters.
    pub fn over(&self, existing: &FuelEntry) -> EntryDraft {
        let mut merged = EntryDraft {
            date: Some(self.date.unwrap_or(existing.date)),
            odometer: Some(self.odometer.unwrap_or(existing.odometer)),
            price_per_liter: Some(self.price_per_liter.unwrap_or(existing.price_per_liter)),
            liters: Some(self.liters.unwrap_or(existing.liters)),
            total_cost: Some(self.total_cost.unwrap_or(existing.total_cost)),
        };

        let price_or_liters_changed = self.price_per_liter.is_some() || self.liters.is_some();
        if self.total_cost.is_none() && price_or_liters_changed {
            merged.total_cost = None;
        } else if self.total_cost.is_some() && self.liters.is_none() {
            merged.liters = None;
        }

        merged
    }

    /// Fill in a missing total or liter count from the other two fields
    pub fn auto_complete(mut self) -> Self {
        match (self.price_per_liter, self.liters, self.total_cost) {
            (Some(price), Some(liters), None) if price.is_finite() && liters.is_finite() => {
                self.total_cost = Some(round2(price * liters));
            }
            (Some(price), None, Some(total)) if price > 0.0 && total.is_finite() => {
                self.liters = Some(round2(total / price));
            }
            _ => {}
        }
        self
    }

    /// Validate and turn the draft into an entry carrying `id`.
    ///
    /// `default_date` is used when no date was given.
    pub fn into_entry(self, id: EntryId, default_date: NaiveDate) -> Result<FuelEntry> {
        let draft = self.auto_complete();

        let odometer = require("odometer", draft.odometer)?;
        let price_per_liter = require("price per liter", draft.price_per_liter)?;
        let liters = require("liters", draft.liters)?;
        let total_cost = require("total cost", draft.total_cost)?;

        if odometer < 0.0 {
            return Err(Error::Validation(
                "odometer must not be negative".to_string(),
            ));
        }
        for (field, value) in [
            ("price per liter", price_per_liter),
            ("liters", liters),
            ("total cost", total_cost),
        ] {
            if value <= 0.0 {
                return Err(Error::Validation(format!("{} must be greater than zero", field)));
            }
        }

        let expected = price_per_liter * liters;
        if (expected - total_cost).abs() > total_cost * CONSISTENCY_TOLERANCE {
            tracing::warn!(
                price_per_liter,
                liters,
                total_cost,
                "total cost differs from price x liters"
            );
        }

        Ok(FuelEntry {
            id,
            date: draft.date.unwrap_or(default_date),
            odometer,
            price_per_liter,
            liters,
            total_cost,
        })
    }
}

fn require(field: &str, value: Option<f64>) -> Result<f64> {
    match value {
        Some(value) if value.is_finite() => Ok(value),
        Some(_) => Err(Error::Validation(format!("{} must be a finite number", field))),
        None => Err(Error::Validation(format!("{} is required", field))),
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
