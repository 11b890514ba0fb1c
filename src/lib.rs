//! Statutory Workday Calendar for Mainland China
//!
//! This crate classifies Gregorian days against the mainland China work
//! calendar: statutory holidays, weekends redesignated as workdays, and
//! ordinary weekends. It also provides an approximate lunar calendar
//! conversion, range and statistics helpers, custom work schedules, and
//! an HTTP query surface.
//!
//! # Example
//!
//! ```
//! use cn_workday::calendar::WorkdayCalendar;
//!
//! let mut calendar = WorkdayCalendar::new();
//! assert!(!calendar.is_workday("2024-10-01").unwrap());
//! assert_eq!(calendar.count_workdays("2024-05-01", "2024-05-10").unwrap(), 5);
//! ```

#![warn(missing_docs)]

pub mod api;
pub mod calendar;
pub mod config;
pub mod error;
pub mod models;
