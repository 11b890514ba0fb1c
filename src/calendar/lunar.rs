//! Approximate Gregorian to lunar conversion.
//!
//! The conversion counts days from the nearest preceding lunar new year
//! anchor and walks months of alternating length, 29 days for odd months and
//! 30 for even ones. Leap months and the true month lengths are ignored, so
//! results drift by a day or more late in some years. Festival names are
//! looked up from the resulting lunar month and day.

use std::num::NonZeroUsize;
use std::sync::Arc;

use chrono::{Datelike, NaiveDate};
use tracing::debug;

use crate::error::EngineResult;
use crate::models::{CanonicalDate, DateInput, LunarDate, WEEKEND_LABEL, WORKDAY_LABEL};

use super::cache::{CacheStats, LruResultCache};
use super::normalizer::{DateNormalizer, NormalizedDate};
use super::tables::CalendarTables;

/// Capacity of the lunar result cache unless configured otherwise.
pub const DEFAULT_LUNAR_CACHE_CAPACITY: usize = 4096;

const MONTH_NAMES: [&str; 12] = [
    "正月", "二月", "三月", "四月", "五月", "六月", "七月", "八月", "九月", "十月", "冬月", "腊月",
];

const DAY_NAMES: [&str; 30] = [
    "初一", "初二", "初三", "初四", "初五", "初六", "初七", "初八", "初九", "初十", "十一", "十二",
    "十三", "十四", "十五", "十六", "十七", "十八", "十九", "二十", "廿一", "廿二", "廿三", "廿四",
    "廿五", "廿六", "廿七", "廿八", "廿九", "三十",
];

const FESTIVALS: [((u32, u32), &str); 7] = [
    ((1, 1), "春节"),
    ((1, 15), "元宵节"),
    ((5, 5), "端午节"),
    ((8, 15), "中秋节"),
    ((9, 9), "重阳节"),
    ((12, 8), "腊八节"),
    ((12, 23), "小年"),
];

/// Traditional name of a lunar month, e.g. "冬月" for 11.
pub fn month_name(month: u32) -> Option<&'static str> {
    let index = usize::try_from(month.checked_sub(1)?).ok()?;
    MONTH_NAMES.get(index).copied()
}

/// Traditional name of a lunar day, e.g. "廿一" for 21.
pub fn day_name(day: u32) -> Option<&'static str> {
    let index = usize::try_from(day.checked_sub(1)?).ok()?;
    DAY_NAMES.get(index).copied()
}

/// Festival falling on a lunar month and day.
pub fn lunar_festival(month: u32, day: u32) -> Option<&'static str> {
    FESTIVALS
        .iter()
        .find(|(key, _)| *key == (month, day))
        .map(|(_, name)| *name)
}

/// Length of a lunar month in the approximation.
fn month_length(month: u32) -> i64 {
    if month % 2 == 1 { 29 } else { 30 }
}

/// Walks `days` days past a new year day.
///
/// Returns the number of lunar years crossed, the month and the day.
fn walk(mut days: i64) -> (i32, u32, u32) {
    let mut years = 0;
    let mut month = 1;
    while days >= month_length(month) {
        days -= month_length(month);
        month += 1;
        if month > 12 {
            month = 1;
            years += 1;
        }
    }
    // days is now below 30
    (years, month, days as u32 + 1)
}

/// Gregorian to lunar converter with a bounded result cache.
///
/// # Example
///
/// ```
/// use cn_workday::calendar::LunarConverter;
///
/// let mut converter = LunarConverter::new();
/// let info = converter.lunar_info("2024-09-17").unwrap();
/// assert_eq!(info.lunar_string, "八月十五");
/// assert_eq!(info.lunar_festival, "中秋节");
/// ```
#[derive(Debug)]
pub struct LunarConverter {
    tables: Arc<CalendarTables>,
    normalizer: DateNormalizer,
    cache: LruResultCache<CanonicalDate, LunarDate>,
}

impl Default for LunarConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl LunarConverter {
    /// A converter over the built-in anchors with an empty 4096-entry cache.
    pub fn new() -> Self {
        let capacity = NonZeroUsize::new(DEFAULT_LUNAR_CACHE_CAPACITY).unwrap_or(NonZeroUsize::MIN);
        Self::with_parts(CalendarTables::builtin(), DateNormalizer::default(), capacity)
    }

    /// A converter with every collaborator supplied explicitly.
    pub fn with_parts(
        tables: Arc<CalendarTables>,
        normalizer: DateNormalizer,
        cache_capacity: NonZeroUsize,
    ) -> Self {
        Self {
            tables,
            normalizer,
            cache: LruResultCache::new(cache_capacity),
        }
    }

    /// Lunar year, month, day, names and festival for a Gregorian day.
    ///
    /// Days with no anchor in their year or the year before get `None`
    /// lunar fields and empty strings.
    ///
    /// # Errors
    ///
    /// Propagates [`crate::error::EngineError::InvalidDateFormat`] from normalization.
    pub fn lunar_info<'a>(&mut self, date: impl Into<DateInput<'a>>) -> EngineResult<LunarDate> {
        let normalized = self.normalizer.normalize(date.into())?;
        if let Some(cached) = self.cache.get(&normalized.canonical) {
            return Ok(cached.clone());
        }
        let info = self.convert(&normalized);
        self.cache.set(normalized.canonical, info.clone());
        Ok(info)
    }

    /// Occupancy and hit/miss counters of the lunar cache.
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Empties the lunar cache and zeroes its counters.
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    /// The anchor at or before `day`, from its own year or the year before.
    fn anchor_for(&self, day: NaiveDate) -> Option<(i32, NaiveDate)> {
        let year = day.year();
        [year, year - 1].into_iter().find_map(|candidate| {
            self.tables
                .lunar_new_year(candidate)
                .filter(|anchor| *anchor <= day)
                .map(|anchor| (candidate, anchor))
        })
    }

    fn convert(&self, normalized: &NormalizedDate) -> LunarDate {
        let day_of_week = if normalized.is_weekend {
            WEEKEND_LABEL
        } else {
            WORKDAY_LABEL
        };
        let day = normalized.canonical.date();

        let Some((anchor_year, anchor)) = self.anchor_for(day) else {
            debug!(date = %normalized.canonical, "no lunar new year anchor");
            return LunarDate {
                date: normalized.canonical.clone(),
                lunar_year: None,
                lunar_month: None,
                lunar_day: None,
                lunar_string: String::new(),
                lunar_festival: String::new(),
                day_of_week: day_of_week.to_string(),
            };
        };

        let (years, month, lunar_day) = walk((day - anchor).num_days());
        let lunar_string = match (month_name(month), day_name(lunar_day)) {
            (Some(m), Some(d)) => format!("{m}{d}"),
            _ => String::new(),
        };

        LunarDate {
            date: normalized.canonical.clone(),
            lunar_year: Some(anchor_year + years),
            lunar_month: Some(month),
            lunar_day: Some(lunar_day),
            lunar_string,
            lunar_festival: lunar_festival(month, lunar_day).unwrap_or_default().to_string(),
            day_of_week: day_of_week.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::data::LUNAR_NEW_YEAR;
    use proptest::prelude::*;

    #[test]
    fn test_every_anchor_is_spring_festival() {
        let mut converter = LunarConverter::new();
        for &(year, month, day) in LUNAR_NEW_YEAR {
            let date = NaiveDate::from_ymd_opt(year, month, day).unwrap();
            let info = converter.lunar_info(date).unwrap();
            assert_eq!(info.lunar_year, Some(year));
            assert_eq!(info.lunar_month, Some(1));
            assert_eq!(info.lunar_day, Some(1));
            assert_eq!(info.lunar_string, "正月初一");
            assert_eq!(info.lunar_festival, "春节");
        }
    }

    #[test]
    fn test_lantern_festival_2024() {
        let mut converter = LunarConverter::new();
        let info = converter.lunar_info("2024-02-24").unwrap();
        assert_eq!(info.lunar_string, "正月十五");
        assert_eq!(info.lunar_festival, "元宵节");
        assert_eq!(info.day_of_week, WEEKEND_LABEL);
    }

    #[test]
    fn test_mid_autumn_2024() {
        let mut converter = LunarConverter::new();
        let info = converter.lunar_info("2024-09-17").unwrap();
        assert_eq!(info.lunar_year, Some(2024));
        assert_eq!(info.lunar_month, Some(8));
        assert_eq!(info.lunar_day, Some(15));
        assert_eq!(info.lunar_festival, "中秋节");
        assert_eq!(info.day_of_week, WORKDAY_LABEL);
    }

    #[test]
    fn test_day_before_anchor_uses_previous_year() {
        let mut converter = LunarConverter::new();
        let info = converter.lunar_info("2024-02-09").unwrap();
        assert!(info.has_lunar_date());
        assert_ne!(info.lunar_festival, "春节");
    }

    #[test]
    fn test_year_without_anchor_wraps_from_previous_year() {
        // 2026-02-17 plus 377 days
        let mut converter = LunarConverter::new();
        let info = converter.lunar_info("2027-03-01").unwrap();
        assert_eq!(info.lunar_year, Some(2027));
        assert_eq!(info.lunar_month, Some(1));
        assert_eq!(info.lunar_day, Some(24));
        assert_eq!(info.lunar_string, "正月廿四");
    }

    #[test]
    fn test_no_anchor_gives_empty_lunar_fields() {
        let mut converter = LunarConverter::new();
        for date in ["2011-01-15", "2030-05-01"] {
            let info = converter.lunar_info(date).unwrap();
            assert!(!info.has_lunar_date());
            assert_eq!(info.lunar_year, None);
            assert_eq!(info.lunar_string, "");
            assert_eq!(info.lunar_festival, "");
            assert_eq!(info.date.as_str(), date);
        }
    }

    #[test]
    fn test_results_are_cached() {
        let mut converter = LunarConverter::new();
        let first = converter.lunar_info("2024-02-24").unwrap();
        let second = converter.lunar_info("2024/2/24").unwrap();
        assert_eq!(first, second);

        let stats = converter.cache_stats();
        assert_eq!(stats.size, 1);
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.max_size, DEFAULT_LUNAR_CACHE_CAPACITY);

        converter.clear_cache();
        assert_eq!(converter.cache_stats().size, 0);
    }

    #[test]
    fn test_invalid_input_is_rejected() {
        let mut converter = LunarConverter::new();
        assert!(converter.lunar_info("2024-13-01").is_err());
    }

    #[test]
    fn test_names() {
        assert_eq!(month_name(11), Some("冬月"));
        assert_eq!(month_name(12), Some("腊月"));
        assert_eq!(month_name(0), None);
        assert_eq!(day_name(20), Some("二十"));
        assert_eq!(day_name(21), Some("廿一"));
        assert_eq!(day_name(31), None);
        assert_eq!(lunar_festival(12, 23), Some("小年"));
        assert_eq!(lunar_festival(2, 2), None);
    }

    proptest! {
        #[test]
        fn prop_walk_stays_in_bounds(days in 0i64..2000) {
            let (_, month, day) = walk(days);
            prop_assert!((1..=12).contains(&month));
            prop_assert!(day >= 1 && i64::from(day) <= month_length(month));
        }
    }
}
