//! Publication Dates
//!
//! Content tables store human dates ("March 5, 2025", "April 2025"). They are
//! parsed into a sortable value so listings order by date instead of by
//! position in the table.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::entity::DomainError;

/// How much of the date the author actually wrote down
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DatePrecision {
    Month,
    Day,
}

/// Sortable publication date
///
/// Month-precision dates sort as the first of their month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PublishedOn {
    date: NaiveDate,
    precision: DatePrecision,
}

impl PublishedOn {
    pub fn day(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(|date| Self { date, precision: DatePrecision::Day })
    }

    pub fn month(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|date| Self { date, precision: DatePrecision::Month })
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn precision(&self) -> DatePrecision {
        self.precision
    }
}

impl FromStr for PublishedOn {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        for fmt in ["%B %d, %Y", "%Y-%m-%d"] {
            if let Ok(date) = NaiveDate::parse_from_str(s, fmt) {
                return Ok(Self { date, precision: DatePrecision::Day });
            }
        }

        // Month-only forms: "April 2025", "2025-04"
        let month_only = [
            (format!("1 {}", s), "%d %B %Y"),
            (format!("{}-01", s), "%Y-%m-%d"),
        ];
        for (candidate, fmt) in month_only {
            if let Ok(date) = NaiveDate::parse_from_str(&candidate, fmt) {
                return Ok(Self { date, precision: DatePrecision::Month });
            }
        }

        Err(DomainError::Parse(format!("unrecognised date '{}'", s)))
    }
}

impl TryFrom<String> for PublishedOn {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PublishedOn> for String {
    fn from(value: PublishedOn) -> Self {
        value.to_string()
    }
}

impl fmt::Display for PublishedOn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.precision {
            DatePrecision::Day => write!(f, "{}", self.date.format("%B %-d, %Y")),
            DatePrecision::Month => write!(f, "{}", self.date.format("%B %Y")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_day_precision() {
        let d: PublishedOn = "March 5, 2025".parse().unwrap();
        assert_eq!(d, PublishedOn::day(2025, 3, 5).unwrap());
        assert_eq!(d.to_string(), "March 5, 2025");
    }

    #[test]
    fn test_parse_month_precision() {
        let d: PublishedOn = "April 2025".parse().unwrap();
        assert_eq!(d.precision(), DatePrecision::Month);
        assert_eq!(d.to_string(), "April 2025");

        let iso: PublishedOn = "2025-04".parse().unwrap();
        assert_eq!(iso, d);
    }

    #[test]
    fn test_parse_iso_day() {
        let d: PublishedOn = "2025-02-28".parse().unwrap();
        assert_eq!(d.to_string(), "February 28, 2025");
    }

    #[test]
    fn test_ordering_follows_calendar() {
        let newer: PublishedOn = "March 5, 2025".parse().unwrap();
        let older: PublishedOn = "February 28, 2025".parse().unwrap();
        assert!(newer > older);
    }

    #[test]
    fn test_rejects_garbage() {
        let err = "sometime soon".parse::<PublishedOn>().unwrap_err();
        assert!(matches!(err, DomainError::Parse(_)));
    }

    #[test]
    fn test_serde_as_string() {
        let d: PublishedOn = serde_json::from_str("\"February 15, 2025\"").unwrap();
        assert_eq!(serde_json::to_string(&d).unwrap(), "\"February 15, 2025\"");
    }
}
