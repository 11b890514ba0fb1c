//! The classification engine.
//!
//! [`WorkdayCalendar`] answers whether a day is a workday and which festival
//! label it carries, consulting the shifted-workday table, then the holiday
//! table, then the weekend rule. Verdicts are cached per canonical date.

use std::collections::BTreeMap;
use std::num::NonZeroUsize;
use std::sync::Arc;

use chrono::{Datelike, NaiveDate};
use tracing::debug;

use crate::error::EngineResult;
use crate::models::{
    CanonicalDate, DateInput, DayClassification, DayKind, MAKEUP_DAY_LABEL, REST_DAY_LABEL,
    WEEKEND_LABEL, WORKDAY_LABEL, WorkSchedule,
};

use super::cache::{CacheStats, DEFAULT_CACHE_CAPACITY, LruResultCache};
use super::normalizer::{DateNormalizer, NormalizedDate, is_weekend};
use super::tables::CalendarTables;

/// Key of a cached verdict: the statutory calendar or a named custom schedule.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum CacheKey {
    Statutory(CanonicalDate),
    Schedule { id: String, date: CanonicalDate },
}

/// Workday/holiday classifier for the statutory calendar.
///
/// Every query that touches the cache takes `&mut self`. To share one
/// calendar between threads, wrap it in a mutex or give each thread its own.
///
/// # Example
///
/// ```
/// use cn_workday::calendar::WorkdayCalendar;
///
/// let mut calendar = WorkdayCalendar::new();
/// assert!(!calendar.is_workday("2024-10-01").unwrap()); // National Day
/// assert!(calendar.is_workday("2024-02-04").unwrap()); // Sunday, shifted workday
/// assert_eq!(calendar.festival("2024-02-04").unwrap(), "补春节");
/// assert_eq!(calendar.festival("2024-10-08").unwrap(), "工作日");
/// ```
#[derive(Debug)]
pub struct WorkdayCalendar {
    tables: Arc<CalendarTables>,
    normalizer: DateNormalizer,
    cache: LruResultCache<CacheKey, DayClassification>,
    schedules: BTreeMap<String, WorkSchedule>,
}

impl Default for WorkdayCalendar {
    fn default() -> Self {
        Self::new()
    }
}

impl WorkdayCalendar {
    /// A calendar over the built-in tables with an empty 1000-entry cache.
    pub fn new() -> Self {
        Self::with_tables(CalendarTables::builtin())
    }

    /// A calendar over custom tables with an empty 1000-entry cache.
    pub fn with_tables(tables: Arc<CalendarTables>) -> Self {
        let capacity = NonZeroUsize::new(DEFAULT_CACHE_CAPACITY).unwrap_or(NonZeroUsize::MIN);
        Self::with_parts(tables, DateNormalizer::default(), capacity)
    }

    /// A calendar with every collaborator supplied explicitly.
    pub fn with_parts(
        tables: Arc<CalendarTables>,
        normalizer: DateNormalizer,
        cache_capacity: NonZeroUsize,
    ) -> Self {
        Self {
            tables,
            normalizer,
            cache: LruResultCache::new(cache_capacity),
            schedules: BTreeMap::new(),
        }
    }

    /// The tables this calendar classifies against.
    pub fn tables(&self) -> &CalendarTables {
        &self.tables
    }

    /// The normalizer applied to every input.
    pub fn normalizer(&self) -> &DateNormalizer {
        &self.normalizer
    }

    /// Normalizes a date input without classifying it.
    pub fn normalize<'a>(&self, date: impl Into<DateInput<'a>>) -> EngineResult<NormalizedDate> {
        self.normalizer.normalize(date.into())
    }

    // ------------------------------------------------------------------
    // Single-date queries
    // ------------------------------------------------------------------

    /// Classifies one day.
    ///
    /// # Errors
    ///
    /// Propagates [`crate::error::EngineError::InvalidDateFormat`] from normalization.
    pub fn classify<'a>(&mut self, date: impl Into<DateInput<'a>>) -> EngineResult<DayClassification> {
        let normalized = self.normalizer.normalize(date.into())?;
        Ok(self.classify_normalized(&normalized))
    }

    /// Whether work is mandated on the day, including shifted weekend workdays.
    pub fn is_workday<'a>(&mut self, date: impl Into<DateInput<'a>>) -> EngineResult<bool> {
        Ok(self.classify(date)?.is_workday())
    }

    /// Whether the day is off: a statutory holiday or an ordinary weekend.
    pub fn is_holiday<'a>(&mut self, date: impl Into<DateInput<'a>>) -> EngineResult<bool> {
        Ok(!self.is_workday(date)?)
    }

    /// Whether the day is a weekend redesignated as a workday.
    pub fn is_shifted_workday<'a>(&mut self, date: impl Into<DateInput<'a>>) -> EngineResult<bool> {
        Ok(self.classify(date)?.kind == DayKind::ShiftedWorkday)
    }

    /// Whether the day is a Saturday or Sunday, ignoring the override tables.
    ///
    /// Reports `false` for an omitted date unless the normalizer resolves
    /// today's weekday.
    pub fn is_weekend<'a>(&self, date: impl Into<DateInput<'a>>) -> EngineResult<bool> {
        Ok(self.normalizer.normalize(date.into())?.is_weekend)
    }

    /// The festival label: a holiday name, a shifted-workday name,
    /// [`WEEKEND_LABEL`] or [`WORKDAY_LABEL`].
    pub fn festival<'a>(&mut self, date: impl Into<DateInput<'a>>) -> EngineResult<&'static str> {
        Ok(self.classify(date)?.festival)
    }

    // ------------------------------------------------------------------
    // Batch queries
    // ------------------------------------------------------------------

    /// Classifies every input, preserving order.
    ///
    /// All inputs are normalized before any is classified, so one invalid
    /// date fails the whole call and leaves the cache untouched.
    pub fn classify_batch<'a, I, D>(&mut self, dates: I) -> EngineResult<Vec<DayClassification>>
    where
        I: IntoIterator<Item = D>,
        D: Into<DateInput<'a>>,
    {
        let normalized = dates
            .into_iter()
            .map(|date| self.normalizer.normalize(date.into()))
            .collect::<EngineResult<Vec<_>>>()?;
        Ok(normalized
            .iter()
            .map(|date| self.classify_normalized(date))
            .collect())
    }

    /// [`is_workday`](Self::is_workday) over a list.
    pub fn is_workday_batch<'a, I, D>(&mut self, dates: I) -> EngineResult<Vec<bool>>
    where
        I: IntoIterator<Item = D>,
        D: Into<DateInput<'a>>,
    {
        Ok(self
            .classify_batch(dates)?
            .iter()
            .map(DayClassification::is_workday)
            .collect())
    }

    /// [`is_holiday`](Self::is_holiday) over a list.
    pub fn is_holiday_batch<'a, I, D>(&mut self, dates: I) -> EngineResult<Vec<bool>>
    where
        I: IntoIterator<Item = D>,
        D: Into<DateInput<'a>>,
    {
        Ok(self
            .classify_batch(dates)?
            .iter()
            .map(|verdict| !verdict.is_workday())
            .collect())
    }

    /// [`festival`](Self::festival) over a list.
    pub fn festival_batch<'a, I, D>(&mut self, dates: I) -> EngineResult<Vec<&'static str>>
    where
        I: IntoIterator<Item = D>,
        D: Into<DateInput<'a>>,
    {
        Ok(self
            .classify_batch(dates)?
            .iter()
            .map(|verdict| verdict.festival)
            .collect())
    }

    // ------------------------------------------------------------------
    // Cache management
    // ------------------------------------------------------------------

    /// Occupancy and hit/miss counters of the classification cache.
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Empties the classification cache and zeroes its counters.
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    // ------------------------------------------------------------------
    // Custom work schedules
    // ------------------------------------------------------------------

    /// Registers or replaces the schedule stored under `id`.
    pub fn set_work_schedule(&mut self, id: impl Into<String>, schedule: WorkSchedule) {
        let id = id.into();
        self.forget_schedule_verdicts(&id);
        debug!(schedule = %id, "registered work schedule");
        self.schedules.insert(id, schedule);
    }

    /// The schedule stored under `id`.
    pub fn work_schedule(&self, id: &str) -> Option<&WorkSchedule> {
        self.schedules.get(id)
    }

    /// Removes the schedule stored under `id`, returning it.
    pub fn clear_work_schedule(&mut self, id: &str) -> Option<WorkSchedule> {
        self.forget_schedule_verdicts(id);
        self.schedules.remove(id)
    }

    /// Ids of all registered schedules, sorted.
    pub fn available_schedules(&self) -> Vec<&str> {
        self.schedules.keys().map(String::as_str).collect()
    }

    /// Classifies a day under the schedule `id`.
    ///
    /// Unknown ids fall back to the statutory calendar.
    pub fn classify_custom<'a>(
        &mut self,
        date: impl Into<DateInput<'a>>,
        id: &str,
    ) -> EngineResult<DayClassification> {
        let normalized = self.normalizer.normalize(date.into())?;
        if !self.schedules.contains_key(id) {
            return Ok(self.classify_normalized(&normalized));
        }

        let day = normalized.canonical.date();
        let key = CacheKey::Schedule {
            id: id.to_owned(),
            date: normalized.canonical,
        };
        if let Some(cached) = self.cache.get(&key) {
            return Ok(*cached);
        }
        let verdict = match self.schedules.get(id) {
            Some(schedule) => schedule_verdict(schedule, day),
            None => DayClassification::ordinary(normalized.is_weekend),
        };
        self.cache.set(key, verdict);
        Ok(verdict)
    }

    /// Whether the day is a workday under the schedule `id`.
    pub fn is_workday_custom<'a>(
        &mut self,
        date: impl Into<DateInput<'a>>,
        id: &str,
    ) -> EngineResult<bool> {
        Ok(self.classify_custom(date, id)?.is_workday())
    }

    /// Whether the day is off under the schedule `id`.
    pub fn is_holiday_custom<'a>(
        &mut self,
        date: impl Into<DateInput<'a>>,
        id: &str,
    ) -> EngineResult<bool> {
        Ok(!self.is_workday_custom(date, id)?)
    }

    // ------------------------------------------------------------------
    // Pre-normalized days
    // ------------------------------------------------------------------

    /// Classifies a day already passed through [`normalize`](Self::normalize).
    pub fn classify_normalized(&mut self, date: &NormalizedDate) -> DayClassification {
        let key = CacheKey::Statutory(date.canonical.clone());
        if let Some(cached) = self.cache.get(&key) {
            return *cached;
        }
        let verdict = self.lookup(date.canonical.as_str(), date.is_weekend);
        debug!(date = %date.canonical, kind = %verdict.kind, "classified date");
        self.cache.set(key, verdict);
        verdict
    }

    /// Classifies a day reached by walking from a validated date.
    pub(crate) fn classify_day(&mut self, day: NaiveDate) -> DayClassification {
        self.classify_normalized(&NormalizedDate {
            canonical: CanonicalDate::from_date(day),
            is_weekend: is_weekend(day),
        })
    }

    /// Table lookup in priority order: shifted workday, holiday, weekend rule.
    fn lookup(&self, key: &str, is_weekend: bool) -> DayClassification {
        if let Some(label) = self.tables.shifted_workday(key) {
            DayClassification {
                kind: DayKind::ShiftedWorkday,
                festival: label,
            }
        } else if let Some(label) = self.tables.holiday(key) {
            DayClassification {
                kind: DayKind::Holiday,
                festival: label,
            }
        } else {
            DayClassification::ordinary(is_weekend)
        }
    }

    fn forget_schedule_verdicts(&mut self, id: &str) {
        let removed = self
            .cache
            .remove_where(|key| matches!(key, CacheKey::Schedule { id: cached, .. } if cached == id));
        if removed > 0 {
            debug!(schedule = %id, removed, "dropped cached schedule verdicts");
        }
    }
}

/// A custom schedule's verdict: weekend workdays, then holidays, then the weekday set.
fn schedule_verdict(schedule: &WorkSchedule, day: NaiveDate) -> DayClassification {
    if schedule.workdays_on_weekends.contains(&day) {
        DayClassification {
            kind: DayKind::ShiftedWorkday,
            festival: MAKEUP_DAY_LABEL,
        }
    } else if schedule.holidays.contains(&day) {
        DayClassification {
            kind: DayKind::Holiday,
            festival: REST_DAY_LABEL,
        }
    } else if schedule.works_on(day.weekday()) {
        DayClassification {
            kind: DayKind::Workday,
            festival: WORKDAY_LABEL,
        }
    } else {
        DayClassification {
            kind: DayKind::Weekend,
            festival: WEEKEND_LABEL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use chrono::Weekday;
    use proptest::prelude::*;

    fn make_date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn small_calendar(capacity: usize) -> WorkdayCalendar {
        WorkdayCalendar::with_parts(
            CalendarTables::builtin(),
            DateNormalizer::default(),
            NonZeroUsize::new(capacity).unwrap(),
        )
    }

    // ==========================================================================
    // Statutory classification
    // ==========================================================================

    #[test]
    fn test_national_day_is_holiday() {
        let mut calendar = WorkdayCalendar::new();
        assert!(!calendar.is_workday("2024-10-01").unwrap());
        assert!(calendar.is_holiday("2024-10-01").unwrap());
        assert_eq!(calendar.festival("2024-10-01").unwrap(), "国庆节");
    }

    #[test]
    fn test_day_after_golden_week_is_regular_workday() {
        let mut calendar = WorkdayCalendar::new();
        assert!(calendar.is_workday("2024-10-08").unwrap());
        assert_eq!(calendar.festival("2024-10-08").unwrap(), WORKDAY_LABEL);
    }

    #[test]
    fn test_shifted_workday_on_sunday() {
        let mut calendar = WorkdayCalendar::new();
        assert!(calendar.is_workday("2024-02-04").unwrap());
        assert!(calendar.is_shifted_workday("2024-02-04").unwrap());
        assert_eq!(calendar.festival("2024-02-04").unwrap(), "补春节");
    }

    #[test]
    fn test_saturday_is_not_a_workday() {
        let mut calendar = WorkdayCalendar::new();
        assert!(!calendar.is_workday("2024-10-05").unwrap());
        assert!(calendar.is_weekend("2024-10-05").unwrap());
    }

    #[test]
    fn test_ordinary_weekend_label() {
        let mut calendar = WorkdayCalendar::new();
        // 2024-10-19 is a Saturday with no table entry
        assert_eq!(calendar.festival("2024-10-19").unwrap(), WEEKEND_LABEL);
        assert!(calendar.is_holiday("2024-10-19").unwrap());
    }

    #[test]
    fn test_is_shifted_workday_false_for_holiday() {
        let mut calendar = WorkdayCalendar::new();
        assert!(!calendar.is_shifted_workday("2024-10-01").unwrap());
    }

    #[test]
    fn test_shifted_workday_wins_over_holiday_in_builtin_data() {
        // 2012-09-30 is listed in both tables
        let mut calendar = WorkdayCalendar::new();
        let verdict = calendar.classify("2012-09-30").unwrap();
        assert_eq!(verdict.kind, DayKind::ShiftedWorkday);
        assert_eq!(verdict.festival, "补国庆节");
    }

    #[test]
    fn test_shifted_workday_wins_over_holiday_fixture() {
        let tables = CalendarTables::from_entries(
            &[("2030-01-05", "测试假日")],
            &[("2030-01-05", "补测试")],
            &[],
        );
        let mut calendar = WorkdayCalendar::with_tables(Arc::new(tables));
        assert!(calendar.is_workday("2030-01-05").unwrap());
        assert!(calendar.is_shifted_workday("2030-01-05").unwrap());
        assert_eq!(calendar.festival("2030-01-05").unwrap(), "补测试");
    }

    #[test]
    fn test_representations_agree() {
        let mut calendar = WorkdayCalendar::new();
        let expected = calendar.is_workday("2024-10-01").unwrap();
        assert_eq!(calendar.is_workday("2024/10/01").unwrap(), expected);
        assert_eq!(calendar.is_workday(make_date(2024, 10, 1)).unwrap(), expected);
        assert_eq!(calendar.is_workday(1_727_740_800_000_i64).unwrap(), expected);
    }

    #[test]
    fn test_today_yields_a_verdict() {
        let mut calendar = WorkdayCalendar::new();
        assert!(calendar.is_workday(DateInput::Today).is_ok());
        assert!(!calendar.is_weekend(DateInput::Today).unwrap());
    }

    #[test]
    fn test_invalid_date_propagates() {
        let mut calendar = WorkdayCalendar::new();
        assert!(matches!(
            calendar.is_workday("invalid-date"),
            Err(EngineError::InvalidDateFormat { .. })
        ));
        assert!(calendar.festival("2024-02-30").is_err());
        assert_eq!(calendar.cache_stats().size, 0);
    }

    // ==========================================================================
    // Cache behaviour
    // ==========================================================================

    #[test]
    fn test_repeated_query_is_a_cache_hit() {
        let mut calendar = WorkdayCalendar::new();
        let first = calendar.is_workday("2024-10-01").unwrap();
        let hits_after_first = calendar.cache_stats().hits;
        let second = calendar.is_workday("2024-10-01").unwrap();

        assert_eq!(first, second);
        assert_eq!(calendar.cache_stats().hits, hits_after_first + 1);
        assert_eq!(calendar.cache_stats().misses, 1);
    }

    #[test]
    fn test_festival_served_from_workday_entry() {
        let mut calendar = WorkdayCalendar::new();
        calendar.is_workday("2024-02-04").unwrap();
        assert_eq!(calendar.festival("2024-02-04").unwrap(), "补春节");
        assert_eq!(calendar.cache_stats().hits, 1);
    }

    #[test]
    fn test_alternate_representation_hits_same_entry() {
        let mut calendar = WorkdayCalendar::new();
        calendar.is_workday("2024-10-01").unwrap();
        calendar.is_workday("2024/10/1").unwrap();
        let stats = calendar.cache_stats();
        assert_eq!(stats.size, 1);
        assert_eq!(stats.hits, 1);
    }

    #[test]
    fn test_clear_cache_resets_stats() {
        let mut calendar = WorkdayCalendar::new();
        calendar.is_workday("2024-10-01").unwrap();
        calendar.is_workday("2024-10-01").unwrap();
        calendar.clear_cache();

        let stats = calendar.cache_stats();
        assert_eq!(stats.size, 0);
        assert_eq!(stats.hits, 0);
        assert_eq!(stats.misses, 0);
        assert_eq!(stats.max_size, DEFAULT_CACHE_CAPACITY);
        assert!(stats.hit_rate.is_nan());
    }

    #[test]
    fn test_cache_is_bounded() {
        let mut calendar = small_calendar(5);
        let start = make_date(2024, 1, 1);
        for offset in 0..20 {
            calendar.classify(start + chrono::Duration::days(offset)).unwrap();
        }
        assert_eq!(calendar.cache_stats().size, 5);

        // Only the five most recent days survive
        calendar.classify(make_date(2024, 1, 20)).unwrap();
        assert_eq!(calendar.cache_stats().hits, 1);
        calendar.classify(make_date(2024, 1, 1)).unwrap();
        assert_eq!(calendar.cache_stats().hits, 1);
    }

    // ==========================================================================
    // Batch queries
    // ==========================================================================

    #[test]
    fn test_batches_preserve_order() {
        let mut calendar = WorkdayCalendar::new();
        let dates = ["2024-10-01", "2024-10-02", "2024-10-08"];
        assert_eq!(
            calendar.is_workday_batch(dates).unwrap(),
            vec![false, false, true]
        );
        assert_eq!(
            calendar.is_holiday_batch(dates).unwrap(),
            vec![true, true, false]
        );
        assert_eq!(
            calendar.festival_batch(dates).unwrap(),
            vec!["国庆节", "国庆节", "工作日"]
        );
    }

    #[test]
    fn test_batch_accepts_mixed_inputs() {
        let mut calendar = WorkdayCalendar::new();
        let inputs = vec![
            DateInput::from("2024/02/04"),
            DateInput::from(make_date(2024, 10, 1)),
            DateInput::from(1_728_345_600_000_i64), // 2024-10-08T00:00:00Z
        ];
        assert_eq!(
            calendar.is_workday_batch(inputs).unwrap(),
            vec![true, false, true]
        );
    }

    #[test]
    fn test_batch_fails_fast_without_touching_cache() {
        let mut calendar = WorkdayCalendar::new();
        let result = calendar.is_workday_batch(["2024-10-01", "not-a-date", "2024-10-08"]);
        assert!(matches!(result, Err(EngineError::InvalidDateFormat { .. })));
        assert_eq!(calendar.cache_stats().size, 0);
    }

    #[test]
    fn test_empty_batch() {
        let mut calendar = WorkdayCalendar::new();
        let empty: [&str; 0] = [];
        assert!(calendar.classify_batch(empty).unwrap().is_empty());
    }

    // ==========================================================================
    // Custom schedules
    // ==========================================================================

    fn four_day_week() -> WorkSchedule {
        WorkSchedule {
            workdays: vec![Weekday::Mon, Weekday::Tue, Weekday::Wed, Weekday::Thu],
            holidays: vec![make_date(2024, 3, 5)],
            workdays_on_weekends: vec![make_date(2024, 3, 9)],
        }
    }

    #[test]
    fn test_custom_schedule_weekday_set() {
        let mut calendar = WorkdayCalendar::new();
        calendar.set_work_schedule("four_day", four_day_week());
        assert!(calendar.is_workday_custom("2024-03-07", "four_day").unwrap()); // Thursday
        assert!(calendar.is_holiday_custom("2024-03-08", "four_day").unwrap()); // Friday
    }

    #[test]
    fn test_custom_schedule_explicit_dates() {
        let mut calendar = WorkdayCalendar::new();
        calendar.set_work_schedule("four_day", four_day_week());
        assert!(!calendar.is_workday_custom("2024-03-05", "four_day").unwrap()); // Tuesday off
        assert!(calendar.is_workday_custom("2024-03-09", "four_day").unwrap()); // Saturday on
    }

    #[test]
    fn test_custom_schedule_ignores_statutory_tables() {
        let mut calendar = WorkdayCalendar::new();
        calendar.set_work_schedule("plain", WorkSchedule::default());
        // National Day falls on a Tuesday
        assert!(calendar.is_workday_custom("2024-10-01", "plain").unwrap());
        assert!(!calendar.is_workday("2024-10-01").unwrap());
    }

    #[test]
    fn test_unknown_schedule_falls_back_to_statutory() {
        let mut calendar = WorkdayCalendar::new();
        assert!(!calendar.is_workday_custom("2024-10-01", "missing").unwrap());
        assert!(calendar.is_workday_custom("2024-02-04", "missing").unwrap());
    }

    #[test]
    fn test_custom_verdicts_are_cached_separately() {
        let mut calendar = WorkdayCalendar::new();
        calendar.set_work_schedule("plain", WorkSchedule::default());
        calendar.is_workday("2024-10-01").unwrap();
        calendar.is_workday_custom("2024-10-01", "plain").unwrap();
        assert_eq!(calendar.cache_stats().size, 2);

        calendar.is_workday_custom("2024-10-01", "plain").unwrap();
        assert_eq!(calendar.cache_stats().hits, 1);
    }

    #[test]
    fn test_replacing_schedule_drops_stale_verdicts() {
        let mut calendar = WorkdayCalendar::new();
        calendar.set_work_schedule("team", WorkSchedule::default());
        assert!(calendar.is_workday_custom("2024-03-08", "team").unwrap()); // Friday

        calendar.set_work_schedule("team", four_day_week());
        assert!(!calendar.is_workday_custom("2024-03-08", "team").unwrap());
    }

    #[test]
    fn test_schedule_registry() {
        let mut calendar = WorkdayCalendar::new();
        calendar.set_work_schedule("b", WorkSchedule::default());
        calendar.set_work_schedule("a", four_day_week());
        assert_eq!(calendar.available_schedules(), vec!["a", "b"]);
        assert_eq!(calendar.work_schedule("a"), Some(&four_day_week()));

        assert!(calendar.clear_work_schedule("a").is_some());
        assert!(calendar.work_schedule("a").is_none());
        assert_eq!(calendar.available_schedules(), vec!["b"]);
    }

    // ==========================================================================
    // Properties
    // ==========================================================================

    proptest! {
        #[test]
        fn prop_label_consistent_with_workday(days in 0i64..6000) {
            let mut calendar = WorkdayCalendar::new();
            let date = make_date(2010, 1, 1) + chrono::Duration::days(days);
            let verdict = calendar.classify(date).unwrap();
            let workday = calendar.is_workday(date).unwrap();
            prop_assert_eq!(verdict.is_workday(), workday);
            match verdict.kind {
                DayKind::Weekend => prop_assert_eq!(verdict.festival, WEEKEND_LABEL),
                DayKind::Workday => prop_assert_eq!(verdict.festival, WORKDAY_LABEL),
                DayKind::ShiftedWorkday | DayKind::Holiday => {
                    prop_assert_ne!(verdict.festival, WEEKEND_LABEL);
                    prop_assert_ne!(verdict.festival, WORKDAY_LABEL);
                }
            }
        }

        #[test]
        fn prop_batch_matches_single(offsets in proptest::collection::vec(0i64..6000, 0..40)) {
            let dates: Vec<NaiveDate> = offsets
                .iter()
                .map(|&d| make_date(2010, 1, 1) + chrono::Duration::days(d))
                .collect();
            let batch = WorkdayCalendar::new().is_workday_batch(dates.iter().copied()).unwrap();
            let mut single = WorkdayCalendar::new();
            for (date, verdict) in dates.iter().zip(batch) {
                prop_assert_eq!(single.is_workday(*date).unwrap(), verdict);
            }
        }
    }
}
