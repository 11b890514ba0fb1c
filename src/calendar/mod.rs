//! Calendar logic for mainland China statutory workdays.
//!
//! This module contains the lookup tables and query engines:
//!
//! - [`tables`] - Holiday, shifted-workday and lunar new year tables
//! - [`normalizer`] - Turns date inputs into canonical `YYYY-MM-DD` keys
//! - [`cache`] - Bounded LRU result cache with hit/miss statistics
//! - [`engine`] - Workday classification and custom work schedules
//! - [`range`] - Range, adjacency, reminder and statistics helpers
//! - [`lunar`] - Approximate lunar calendar conversion
//!
//! # Classification Order
//!
//! A day is classified by the first rule that applies:
//!
//! 1. Shifted-workday table: a weekend on which work is mandated
//! 2. Holiday table: a statutory day off
//! 3. Saturday or Sunday: an ordinary weekend
//! 4. Anything else: an ordinary workday

pub mod cache;
mod data;
pub mod engine;
pub mod lunar;
pub mod normalizer;
pub mod range;
pub mod tables;

pub use cache::{CacheStats, DEFAULT_CACHE_CAPACITY, LruResultCache};
pub use engine::WorkdayCalendar;
pub use lunar::{DEFAULT_LUNAR_CACHE_CAPACITY, LunarConverter, day_name, lunar_festival, month_name};
pub use normalizer::{CHINA_STANDARD_TIME_OFFSET_SECS, DateNormalizer, NormalizedDate, is_weekend};
pub use range::{ADJACENT_WORKDAY_WINDOW, HOLIDAY_LOOKAHEAD_DAYS};
pub use tables::CalendarTables;
