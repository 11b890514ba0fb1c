//! Result records for range queries and statistics.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::CanonicalDate;

/// A statutory holiday and its festival name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayEntry {
    /// The holiday.
    pub date: CanonicalDate,
    /// Festival name from the holiday table.
    pub festival: String,
}

/// The next statutory holiday after a reference day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpcomingHoliday {
    /// The holiday.
    pub date: CanonicalDate,
    /// Festival name from the holiday table.
    pub festival: String,
    /// Days from the reference day to the holiday, at least 1.
    pub days_until: u32,
}

/// Day counts over a span of days.
///
/// Every day is counted exactly once as a workday, a holiday or a weekend;
/// shifted workdays are a subset of the workdays.
///
/// # Example
///
/// ```
/// use cn_workday::models::DayCounts;
///
/// let counts = DayCounts { total_days: 10, workdays: 5, holidays: 3, weekends: 2, shifted_workdays: 1 };
/// assert_eq!(counts.workday_percentage().to_string(), "50.00");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayCounts {
    /// Days in the span.
    pub total_days: u32,
    /// Days on which work is mandated.
    pub workdays: u32,
    /// Non-working days listed in the holiday table.
    pub holidays: u32,
    /// Other non-working days.
    pub weekends: u32,
    /// Workdays that fall on a shifted weekend.
    pub shifted_workdays: u32,
}

impl DayCounts {
    /// Share of workdays, as a percentage rounded to two places.
    pub fn workday_percentage(&self) -> Decimal {
        percentage(self.workdays, self.total_days)
    }

    /// Share of holidays, as a percentage rounded to two places.
    pub fn holiday_percentage(&self) -> Decimal {
        percentage(self.holidays, self.total_days)
    }

    /// Share of weekends, as a percentage rounded to two places.
    pub fn weekend_percentage(&self) -> Decimal {
        percentage(self.weekends, self.total_days)
    }
}

fn percentage(part: u32, total: u32) -> Decimal {
    if total == 0 {
        return Decimal::new(0, 2);
    }
    let mut value = (Decimal::from(part) * Decimal::ONE_HUNDRED / Decimal::from(total)).round_dp(2);
    value.rescale(2);
    value
}

/// Statistics for one calendar year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnualStats {
    /// The year.
    pub year: i32,
    /// Day counts for the year.
    #[serde(flatten)]
    pub counts: DayCounts,
    /// Workdays as a percentage of all days.
    pub workday_percentage: Decimal,
    /// Holiday days per festival name.
    pub holiday_distribution: BTreeMap<String, u32>,
}

/// Statistics for one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyStats {
    /// The year.
    pub year: i32,
    /// The month, 1 to 12.
    pub month: u32,
    /// Day counts for the month.
    #[serde(flatten)]
    pub counts: DayCounts,
    /// Workdays as a percentage of all days.
    pub workday_percentage: Decimal,
}

/// Workday, holiday and weekend shares over an arbitrary range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkdayRatio {
    /// First day of the range.
    pub start_date: CanonicalDate,
    /// Last day of the range.
    pub end_date: CanonicalDate,
    /// Day counts for the range.
    #[serde(flatten)]
    pub counts: DayCounts,
    /// Workdays as a percentage of all days.
    pub workday_percentage: Decimal,
    /// Holidays as a percentage of all days.
    pub holiday_percentage: Decimal,
    /// Weekends as a percentage of all days.
    pub weekend_percentage: Decimal,
}

/// The festival with the most holiday days in a year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FestivalCount {
    /// Festival name.
    pub festival: String,
    /// Number of holiday days.
    pub count: u32,
}
