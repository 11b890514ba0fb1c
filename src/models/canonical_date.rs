//! The canonical `YYYY-MM-DD` date key.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Earliest year representable as a four-digit canonical string.
pub const MIN_YEAR: i32 = 1;
/// Latest year representable as a four-digit canonical string.
pub const MAX_YEAR: i32 = 9999;

/// A calendar day rendered as a zero-padded `YYYY-MM-DD` string.
///
/// This is the key type for every table and cache in the engine. Two inputs
/// that denote the same day always produce equal canonical dates, and the
/// lexicographic order of the text matches chronological order, so the
/// derived `Ord` (which compares the day first) agrees with string order.
///
/// # Example
///
/// ```
/// use cn_workday::models::CanonicalDate;
/// use chrono::NaiveDate;
///
/// let date = CanonicalDate::try_from_date(NaiveDate::from_ymd_opt(2024, 2, 4).unwrap()).unwrap();
/// assert_eq!(date.as_str(), "2024-02-04");
/// assert!(date < "2024-10-01".parse::<CanonicalDate>().unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct CanonicalDate {
    date: NaiveDate,
    text: String,
}

impl CanonicalDate {
    /// Builds a canonical date, rejecting years that do not fit in four digits.
    pub fn try_from_date(date: NaiveDate) -> EngineResult<Self> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&date.year()) {
            return Err(EngineError::invalid_date(
                date.to_string(),
                format!("year must be between {MIN_YEAR} and {MAX_YEAR}"),
            ));
        }
        Ok(Self::from_date(date))
    }

    /// Builds a canonical date without the year-range check.
    ///
    /// Callers must only pass days derived from an already validated date.
    pub(crate) fn from_date(date: NaiveDate) -> Self {
        let text = format!("{:04}-{:02}-{:02}", date.year(), date.month(), date.day());
        Self { date, text }
    }

    /// Wraps text already known to be the canonical form of `date`.
    pub(crate) fn from_parts(date: NaiveDate, text: &str) -> Self {
        Self {
            date,
            text: text.to_owned(),
        }
    }

    /// Returns the `YYYY-MM-DD` text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns the calendar day.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Returns the Gregorian year.
    pub fn year(&self) -> i32 {
        self.date.year()
    }
}

impl fmt::Display for CanonicalDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for CanonicalDate {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl std::str::FromStr for CanonicalDate {
    type Err = EngineError;

    /// Parses strictly canonical text; use the normalizer for other shapes.
    fn from_str(s: &str) -> EngineResult<Self> {
        let date = NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map_err(|e| EngineError::invalid_date(s, e.to_string()))?;
        let canonical = Self::try_from_date(date)?;
        if canonical.text != s {
            return Err(EngineError::invalid_date(s, "not in zero-padded YYYY-MM-DD form"));
        }
        Ok(canonical)
    }
}

impl TryFrom<String> for CanonicalDate {
    type Error = EngineError;

    fn try_from(value: String) -> EngineResult<Self> {
        value.parse()
    }
}

impl From<CanonicalDate> for String {
    fn from(value: CanonicalDate) -> Self {
        value.text
    }
}

impl From<CanonicalDate> for NaiveDate {
    fn from(value: CanonicalDate) -> Self {
        value.date
    }
}
