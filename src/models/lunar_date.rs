//! Approximate lunar calendar information for a Gregorian day.

use serde::{Deserialize, Serialize};

use super::CanonicalDate;

/// Lunar calendar information for a Gregorian day.
///
/// The lunar fields are `None` (and the strings empty) when no lunar new
/// year anchor is known for the day's year or the year before it.
///
/// # Example
///
/// ```
/// use cn_workday::models::LunarDate;
///
/// let info = LunarDate {
///     date: "2024-02-10".parse().unwrap(),
///     lunar_year: Some(2024),
///     lunar_month: Some(1),
///     lunar_day: Some(1),
///     lunar_string: "正月初一".to_string(),
///     lunar_festival: "春节".to_string(),
///     day_of_week: "周末".to_string(),
/// };
/// assert!(info.has_lunar_date());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LunarDate {
    /// The Gregorian day this result describes.
    pub date: CanonicalDate,
    /// The lunar year, counted by the Gregorian year of its new year day.
    pub lunar_year: Option<i32>,
    /// The lunar month, 1 to 12.
    pub lunar_month: Option<u32>,
    /// The lunar day, 1 to 30.
    pub lunar_day: Option<u32>,
    /// Month and day names, e.g. "八月十五".
    pub lunar_string: String,
    /// Traditional festival on this lunar day, or empty.
    pub lunar_festival: String,
    /// Weekend or workday label derived from the calendar weekday.
    pub day_of_week: String,
}

impl LunarDate {
    /// Whether a lunar month and day could be derived.
    pub fn has_lunar_date(&self) -> bool {
        self.lunar_month.is_some() && self.lunar_day.is_some()
    }
}
