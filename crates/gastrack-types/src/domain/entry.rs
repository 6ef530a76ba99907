use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque identifier of a fuel entry.
///
/// Assigned once at creation and never reused. Stored as a string so that
/// identifiers written by other clients round-trip untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(String);

impl EntryId {
    /// Create an EntryId from an existing identifier string
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh random (UUID v4) identifier
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Get the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First 8 characters, for compact listings
    pub fn short(&self) -> &str {
        self.0.get(..8).unwrap_or(&self.0)
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for EntryId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for EntryId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for EntryId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// One refueling event as entered by the user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FuelEntry {
    pub id: EntryId,
    #[serde(deserialize_with = "crate::date::deserialize_entry_date")]
    pub date: NaiveDate,
    /// Odometer reading in km at the time of the fill
    pub odometer: f64,
    pub price_per_liter: f64,
    pub liters: f64,
    pub total_cost: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_are_unique() {
        let a = EntryId::generate();
        let b = EntryId::generate();
        assert_ne!(a, b);
        assert_eq!(a.as_str().len(), 36);
    }

    #[test]
    fn test_short_id() {
        assert_eq!(EntryId::new("0123456789abcdef").short(), "01234567");
        assert_eq!(EntryId::new("abc").short(), "abc");
    }

    #[test]
    fn test_entry_json_uses_camel_case() {
        let entry = FuelEntry {
            id: EntryId::new("e-1"),
            date: NaiveDate::from_ymd_opt(2024, 5, 10).unwrap(),
            odometer: 10500.0,
            price_per_liter: 5.49,
            liters: 35.0,
            total_cost: 192.15,
        };

        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["id"], "e-1");
        assert_eq!(value["date"], "2024-05-10");
        assert_eq!(value["pricePerLiter"], 5.49);
        assert_eq!(value["totalCost"], 192.15);
        assert!(value.get("price_per_liter").is_none());
    }

    #[test]
    fn test_entry_accepts_legacy_timestamp_date() {
        let json = r#"{
            "id": "legacy",
            "date": "2023-12-31T00:00:00.000Z",
            "odometer": 100,
            "pricePerLiter": 5.0,
            "liters": 10,
            "totalCost": 50
        }"#;

        let entry: FuelEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.date, NaiveDate::from_ymd_opt(2023, 12, 31).unwrap());
        assert_eq!(entry.odometer, 100.0);
    }
}
