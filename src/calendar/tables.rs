//! Immutable lookup tables behind every classification.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, LazyLock};

use chrono::NaiveDate;

use super::data::{HOLIDAYS, LUNAR_NEW_YEAR, SHIFTED_WORKDAYS};

static BUILTIN: LazyLock<Arc<CalendarTables>> = LazyLock::new(|| {
    Arc::new(CalendarTables::from_entries(
        HOLIDAYS,
        SHIFTED_WORKDAYS,
        LUNAR_NEW_YEAR,
    ))
});

/// The holiday table, the shifted-workday table and the lunar new year anchors.
///
/// Tables are read-only once built and are shared between engines through an
/// [`Arc`]. Keys are canonical `YYYY-MM-DD` strings.
///
/// # Example
///
/// ```
/// use cn_workday::calendar::CalendarTables;
///
/// let tables = CalendarTables::builtin();
/// assert_eq!(tables.holiday("2024-10-01"), Some("国庆节"));
/// assert_eq!(tables.shifted_workday("2024-02-04"), Some("补春节"));
/// assert_eq!(tables.year_span(), Some((2011, 2026)));
/// ```
#[derive(Debug, Clone, Default)]
pub struct CalendarTables {
    holidays: HashMap<&'static str, &'static str>,
    shifted_workdays: HashMap<&'static str, &'static str>,
    lunar_new_year: BTreeMap<i32, NaiveDate>,
    year_span: Option<(i32, i32)>,
}

impl CalendarTables {
    /// The compiled-in statutory tables for 2011 to 2026.
    pub fn builtin() -> Arc<Self> {
        Arc::clone(&BUILTIN)
    }

    /// Builds tables from explicit entries.
    ///
    /// Anchors are `(year, month, day)` triples; triples that do not name a
    /// real day are skipped. A key may appear in both override tables, in
    /// which case the shifted-workday entry wins at classification time.
    pub fn from_entries(
        holidays: &[(&'static str, &'static str)],
        shifted_workdays: &[(&'static str, &'static str)],
        lunar_new_year: &[(i32, u32, u32)],
    ) -> Self {
        let holidays: HashMap<_, _> = holidays.iter().copied().collect();
        let shifted_workdays: HashMap<_, _> = shifted_workdays.iter().copied().collect();
        let lunar_new_year = lunar_new_year
            .iter()
            .filter_map(|&(year, month, day)| {
                NaiveDate::from_ymd_opt(year, month, day).map(|date| (year, date))
            })
            .collect();

        let year_span = holidays
            .keys()
            .chain(shifted_workdays.keys())
            .filter_map(|key| key.get(..4).and_then(|y| y.parse::<i32>().ok()))
            .fold(None, |span: Option<(i32, i32)>, year| match span {
                None => Some((year, year)),
                Some((first, last)) => Some((first.min(year), last.max(year))),
            });

        Self {
            holidays,
            shifted_workdays,
            lunar_new_year,
            year_span,
        }
    }

    /// Festival name if `date` is in the holiday table.
    pub fn holiday(&self, date: &str) -> Option<&'static str> {
        self.holidays.get(date).copied()
    }

    /// Compensation label if `date` is in the shifted-workday table.
    pub fn shifted_workday(&self, date: &str) -> Option<&'static str> {
        self.shifted_workdays.get(date).copied()
    }

    /// Lunar new year day for a Gregorian year.
    pub fn lunar_new_year(&self, year: i32) -> Option<NaiveDate> {
        self.lunar_new_year.get(&year).copied()
    }

    /// All anchors, oldest first.
    pub fn lunar_new_years(&self) -> impl Iterator<Item = (i32, NaiveDate)> + '_ {
        self.lunar_new_year.iter().map(|(&year, &date)| (year, date))
    }

    /// First and last years with override table entries.
    pub fn year_span(&self) -> Option<(i32, i32)> {
        self.year_span
    }

    /// Number of holiday table entries.
    pub fn holiday_count(&self) -> usize {
        self.holidays.len()
    }

    /// Number of shifted-workday table entries.
    pub fn shifted_workday_count(&self) -> usize {
        self.shifted_workdays.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Weekday};

    #[test]
    fn test_builtin_tables_are_shared() {
        let a = CalendarTables::builtin();
        let b = CalendarTables::builtin();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_builtin_table_sizes() {
        let tables = CalendarTables::builtin();
        assert_eq!(tables.holiday_count(), HOLIDAYS.len());
        assert_eq!(tables.shifted_workday_count(), SHIFTED_WORKDAYS.len());
        assert_eq!(tables.lunar_new_years().count(), 16);
    }

    #[test]
    fn test_raw_tables_are_in_canonical_date_order() {
        for table in [HOLIDAYS, SHIFTED_WORKDAYS] {
            for pair in table.windows(2) {
                assert!(pair[0].0 < pair[1].0, "{} !< {}", pair[0].0, pair[1].0);
            }
            for (key, _) in table {
                let parsed = NaiveDate::parse_from_str(key, "%Y-%m-%d").unwrap();
                assert_eq!(parsed.format("%Y-%m-%d").to_string(), *key);
            }
        }
    }

    #[test]
    fn test_shifted_workdays_fall_on_weekends() {
        for (key, _) in SHIFTED_WORKDAYS {
            let date = NaiveDate::parse_from_str(key, "%Y-%m-%d").unwrap();
            assert!(
                matches!(date.weekday(), Weekday::Sat | Weekday::Sun),
                "{key} is not a weekend"
            );
        }
    }

    #[test]
    fn test_every_anchor_is_a_real_day() {
        assert_eq!(LUNAR_NEW_YEAR.len(), 16);
        for &(year, month, day) in LUNAR_NEW_YEAR {
            assert!(NaiveDate::from_ymd_opt(year, month, day).is_some());
        }
    }

    #[test]
    fn test_builtin_contains_one_overlapping_key() {
        let tables = CalendarTables::builtin();
        assert_eq!(tables.holiday("2012-09-30"), Some("中秋节"));
        assert_eq!(tables.shifted_workday("2012-09-30"), Some("补国庆节"));
    }

    #[test]
    fn test_from_entries_skips_impossible_anchors() {
        let tables = CalendarTables::from_entries(&[], &[], &[(2024, 2, 10), (2025, 2, 30)]);
        assert!(tables.lunar_new_year(2024).is_some());
        assert!(tables.lunar_new_year(2025).is_none());
        assert_eq!(tables.year_span(), None);
    }

    #[test]
    fn test_lookup_misses() {
        let tables = CalendarTables::builtin();
        assert_eq!(tables.holiday("2024-10-08"), None);
        assert_eq!(tables.shifted_workday("2024-10-08"), None);
        assert_eq!(tables.lunar_new_year(2030), None);
    }
}
