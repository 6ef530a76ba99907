use chrono::{Datelike, NaiveDate};

/// Calendar year+month equality, the bucketing rule for "this month"
pub fn same_month(date: NaiveDate, reference: NaiveDate) -> bool {
    date.year() == reference.year() && date.month() == reference.month()
}
