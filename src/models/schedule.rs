//! Custom work schedules.

use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// A work pattern that replaces the statutory calendar for one schedule id.
///
/// Schedules ignore the statutory tables entirely: a day is a workday if it
/// is listed in `workdays_on_weekends`, a rest day if listed in `holidays`,
/// and otherwise follows the `workdays` weekday set.
///
/// # Example
///
/// ```
/// use cn_workday::models::WorkSchedule;
/// use chrono::Weekday;
///
/// let schedule = WorkSchedule {
///     workdays: vec![Weekday::Mon, Weekday::Tue, Weekday::Wed, Weekday::Thu],
///     ..WorkSchedule::default()
/// };
/// assert!(schedule.works_on(Weekday::Thu));
/// assert!(!schedule.works_on(Weekday::Fri));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkSchedule {
    /// Weekdays worked by default.
    #[serde(default = "default_workdays")]
    pub workdays: Vec<Weekday>,
    /// Dates taken off regardless of weekday.
    #[serde(default)]
    pub holidays: Vec<NaiveDate>,
    /// Dates worked regardless of weekday.
    #[serde(default)]
    pub workdays_on_weekends: Vec<NaiveDate>,
}

fn default_workdays() -> Vec<Weekday> {
    vec![
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
    ]
}

impl Default for WorkSchedule {
    fn default() -> Self {
        Self {
            workdays: default_workdays(),
            holidays: Vec::new(),
            workdays_on_weekends: Vec::new(),
        }
    }
}

impl WorkSchedule {
    /// Whether `weekday` is part of the default work week.
    pub fn works_on(&self, weekday: Weekday) -> bool {
        self.workdays.contains(&weekday)
    }
}
