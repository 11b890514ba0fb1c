//! Core data models for the workday engine.
//!
//! This module contains the value types passed into and returned from the
//! calendar queries.

mod canonical_date;
mod classification;
mod date_input;
mod lunar_date;
mod schedule;
mod stats;

pub use canonical_date::{CanonicalDate, MAX_YEAR, MIN_YEAR};
pub use classification::{
    DayClassification, DayKind, MAKEUP_DAY_LABEL, REST_DAY_LABEL, WEEKEND_LABEL, WORKDAY_LABEL,
};
pub use date_input::DateInput;
pub use lunar_date::LunarDate;
pub use schedule::WorkSchedule;
pub use stats::{
    AnnualStats, DayCounts, FestivalCount, HolidayEntry, MonthlyStats, UpcomingHoliday,
    WorkdayRatio,
};
