use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};

use crate::{Error, Result};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a stored or user-typed refueling date.
///
/// Accepts a plain calendar date (`2024-03-01`) and, for records written by
/// older clients, a full ISO timestamp (`2024-03-01T00:00:00.000Z`). The
/// timestamp case keeps the literal calendar part; it is never converted
/// through a timezone, so a fill can't drift into the previous day or month.
pub fn parse_entry_date(input: &str) -> Result<NaiveDate> {
    let trimmed = input.trim();

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, DATE_FORMAT) {
        return Ok(date);
    }

    let has_time_part = matches!(trimmed.as_bytes().get(10), Some(b'T') | Some(b' '));
    if has_time_part
        && let Some(prefix) = trimmed.get(..10)
        && let Ok(date) = NaiveDate::parse_from_str(prefix, DATE_FORMAT)
    {
        return Ok(date);
    }

    Err(Error::InvalidDate(input.to_string()))
}

/// Serde adapter for `FuelEntry::date`
pub(crate) fn deserialize_entry_date<'de, D>(deserializer: D) -> std::result::Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_entry_date(&raw).map_err(serde::de::Error::custom)
}
