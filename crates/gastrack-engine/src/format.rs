//! Display helpers for amounts, distances and dates.
//!
//! Defaults follow Brazilian Portuguese conventions (`R$ 1.234,56`,
//! `dd/mm/yy`, month names in pt-BR); separators and the currency symbol can
//! be overridden through configuration.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

const MONTHS: [&str; 12] = [
    "Janeiro",
    "Fevereiro",
    "Março",
    "Abril",
    "Maio",
    "Junho",
    "Julho",
    "Agosto",
    "Setembro",
    "Outubro",
    "Novembro",
    "Dezembro",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NumberFormat {
    pub decimal_separator: char,
    pub thousands_separator: char,
    pub currency_symbol: String,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self {
            decimal_separator: ',',
            thousands_separator: '.',
            currency_symbol: "R$".to_string(),
        }
    }
}

impl NumberFormat {
    /// Format with a fixed number of decimals and grouped thousands
    pub fn number(&self, value: f64, decimals: usize) -> String {
        if !value.is_finite() {
            return "-".to_string();
        }

        let rounded = format!("{:.*}", decimals, value);
        let (negative, digits) = match rounded.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, rounded.as_str()),
        };
        let (integer, fraction) = match digits.split_once('.') {
            Some((integer, fraction)) => (integer, Some(fraction)),
            None => (digits, None),
        };

        let mut out = String::new();
        // "-0,0" reads as noise; only keep the sign for non-zero output
        if negative && digits.chars().any(|c| c.is_ascii_digit() && c != '0') {
            out.push('-');
        }
        out.push_str(&self.group_thousands(integer));
        if let Some(fraction) = fraction {
            out.push(self.decimal_separator);
            out.push_str(fraction);
        }
        out
    }

    /// `R$ 1.234,56`
    pub fn currency(&self, value: f64) -> String {
        format!("{} {}", self.currency_symbol, self.number(value, 2))
    }

    /// `1.234 km`
    pub fn distance(&self, km: f64) -> String {
        format!("{} km", self.number(km, 0))
    }

    /// `14,3 km/L`
    pub fn efficiency(&self, km_per_liter: f64) -> String {
        format!("{} km/L", self.number(km_per_liter, 1))
    }

    fn group_thousands(&self, integer: &str) -> String {
        let len = integer.len();
        let mut grouped = String::with_capacity(len + len / 3);
        for (index, ch) in integer.chars().enumerate() {
            if index > 0 && (len - index) % 3 == 0 {
                grouped.push(self.thousands_separator);
            }
            grouped.push(ch);
        }
        grouped
    }
}

/// Short date as shown in history rows: `18/10/26`
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%y").to_string()
}

/// Capitalized month name, e.g. `Outubro`
pub fn month_name(date: NaiveDate) -> &'static str {
    MONTHS[date.month0() as usize]
}

/// Dashboard header date, e.g. `Domingo, 18 de outubro`
pub fn long_date(date: NaiveDate) -> String {
    format!(
        "{}, {} de {}",
        weekday_name(date.weekday()),
        date.day(),
        month_name(date).to_lowercase()
    )
}

fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Segunda-feira",
        Weekday::Tue => "Terça-feira",
        Weekday::Wed => "Quarta-feira",
        Weekday::Thu => "Quinta-feira",
        Weekday::Fri => "Sexta-feira",
        Weekday::Sat => "Sábado",
        Weekday::Sun => "Domingo",
    }
}
