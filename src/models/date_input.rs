//! The accepted shapes of a date query.

use chrono::NaiveDate;

/// A date as supplied by a caller, before normalization.
///
/// Each accepted shape has its own variant; anything that does not fit one
/// of them is rejected at the boundary instead of being sniffed at runtime.
///
/// # Example
///
/// ```
/// use cn_workday::models::DateInput;
/// use chrono::NaiveDate;
///
/// let inputs: Vec<DateInput> = vec![
///     "2024-10-01".into(),
///     "2024/10/01".into(),
///     1_727_740_800_000_i64.into(),
///     NaiveDate::from_ymd_opt(2024, 10, 1).unwrap().into(),
///     DateInput::today(),
/// ];
/// assert_eq!(inputs.len(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateInput<'a> {
    /// `YYYY-MM-DD` or `YYYY/MM/DD` text.
    Text(&'a str),
    /// Milliseconds since the Unix epoch.
    Timestamp(i64),
    /// An already decoded calendar day.
    Date(NaiveDate),
    /// The current day in the engine's configured time zone.
    Today,
}

impl<'a> DateInput<'a> {
    /// A textual date.
    pub fn text(text: &'a str) -> Self {
        DateInput::Text(text)
    }

    /// An epoch timestamp in milliseconds.
    pub fn timestamp_millis(millis: i64) -> Self {
        DateInput::Timestamp(millis)
    }

    /// A calendar-date value.
    pub fn date(date: NaiveDate) -> Self {
        DateInput::Date(date)
    }

    /// The current day.
    pub fn today() -> Self {
        DateInput::Today
    }
}

impl<'a> From<&'a str> for DateInput<'a> {
    fn from(value: &'a str) -> Self {
        DateInput::Text(value)
    }
}

impl<'a> From<&'a String> for DateInput<'a> {
    fn from(value: &'a String) -> Self {
        DateInput::Text(value.as_str())
    }
}

impl From<i64> for DateInput<'_> {
    fn from(value: i64) -> Self {
        DateInput::Timestamp(value)
    }
}

impl From<NaiveDate> for DateInput<'_> {
    fn from(value: NaiveDate) -> Self {
        DateInput::Date(value)
    }
}

impl<'a> From<&'a crate::models::CanonicalDate> for DateInput<'a> {
    fn from(value: &'a crate::models::CanonicalDate) -> Self {
        DateInput::Text(value.as_str())
    }
}

impl<'a, T> From<Option<T>> for DateInput<'a>
where
    T: Into<DateInput<'a>>,
{
    /// An omitted date means today.
    fn from(value: Option<T>) -> Self {
        value.map_or(DateInput::Today, Into::into)
    }
}
