//! Range, adjacency, reminder and statistics helpers.
//!
//! Everything here is built on [`WorkdayCalendar`]'s per-day classification
//! and walks calendar days one at a time, so results always agree with
//! single-day queries (including the shifted-workday tie-break).

use std::collections::BTreeMap;

use chrono::{Datelike, Days, Months, NaiveDate};
use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{
    AnnualStats, CanonicalDate, DateInput, DayCounts, DayKind, FestivalCount, HolidayEntry,
    MAX_YEAR, MIN_YEAR, MonthlyStats, UpcomingHoliday, WorkdayRatio,
};

use super::engine::WorkdayCalendar;

/// Days searched in either direction for an adjacent workday.
pub const ADJACENT_WORKDAY_WINDOW: u64 = 14;

/// Days searched ahead for the next holiday.
pub const HOLIDAY_LOOKAHEAD_DAYS: u64 = 365;

/// Inclusive day iterator; empty when `start > end`.
fn days_between(start: NaiveDate, end: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    start.iter_days().take_while(move |day| *day <= end)
}

/// `day` plus `days`, unless that leaves the four-digit year range.
fn days_after(day: NaiveDate, days: u64) -> Option<NaiveDate> {
    day.checked_add_days(Days::new(days))
        .filter(|moved| (MIN_YEAR..=MAX_YEAR).contains(&moved.year()))
}

/// `day` minus `days`, unless that leaves the four-digit year range.
fn days_before(day: NaiveDate, days: u64) -> Option<NaiveDate> {
    day.checked_sub_days(Days::new(days))
        .filter(|moved| (MIN_YEAR..=MAX_YEAR).contains(&moved.year()))
}

/// Per-festival holiday day counts, in order of first appearance.
type Distribution = Vec<(&'static str, u32)>;

impl WorkdayCalendar {
    fn day_of<'a>(&self, date: impl Into<DateInput<'a>>) -> EngineResult<NaiveDate> {
        Ok(self.normalize(date)?.canonical.date())
    }

    fn bounds<'a>(
        &self,
        start: impl Into<DateInput<'a>>,
        end: impl Into<DateInput<'a>>,
    ) -> EngineResult<(NaiveDate, NaiveDate)> {
        Ok((self.day_of(start)?, self.day_of(end)?))
    }

    /// Like [`bounds`](Self::bounds) but rejects a start after the end.
    fn ordered_bounds<'a>(
        &self,
        start: impl Into<DateInput<'a>>,
        end: impl Into<DateInput<'a>>,
    ) -> EngineResult<(NaiveDate, NaiveDate)> {
        let (start, end) = self.bounds(start, end)?;
        if start > end {
            return Err(EngineError::InvalidRange {
                start: CanonicalDate::from_date(start).to_string(),
                end: CanonicalDate::from_date(end).to_string(),
            });
        }
        Ok((start, end))
    }

    fn is_workday_on(&mut self, day: NaiveDate) -> bool {
        self.classify_day(day).is_workday()
    }

    fn next_workday_after(&mut self, day: NaiveDate) -> Option<NaiveDate> {
        (1..=ADJACENT_WORKDAY_WINDOW)
            .map_while(|offset| days_after(day, offset))
            .find(|candidate| self.is_workday_on(*candidate))
    }

    fn previous_workday_before(&mut self, day: NaiveDate) -> Option<NaiveDate> {
        (1..=ADJACENT_WORKDAY_WINDOW)
            .map_while(|offset| days_before(day, offset))
            .find(|candidate| self.is_workday_on(*candidate))
    }

    fn next_holiday_after(&mut self, day: NaiveDate, horizon: u64) -> Option<UpcomingHoliday> {
        (1..=horizon)
            .map_while(|offset| days_after(day, offset).map(|d| (offset, d)))
            .find_map(|(offset, candidate)| {
                let verdict = self.classify_day(candidate);
                (verdict.kind == DayKind::Holiday).then(|| UpcomingHoliday {
                    date: CanonicalDate::from_date(candidate),
                    festival: verdict.festival.to_string(),
                    days_until: u32::try_from(offset).unwrap_or(u32::MAX),
                })
            })
    }

    /// Counts every day of an inclusive span by kind.
    fn tally(&mut self, start: NaiveDate, end: NaiveDate) -> (DayCounts, Distribution) {
        let mut counts = DayCounts::default();
        let mut distribution: Distribution = Vec::new();
        for day in days_between(start, end) {
            let verdict = self.classify_day(day);
            counts.total_days += 1;
            match verdict.kind {
                DayKind::Workday => counts.workdays += 1,
                DayKind::ShiftedWorkday => {
                    counts.workdays += 1;
                    counts.shifted_workdays += 1;
                }
                DayKind::Holiday => {
                    counts.holidays += 1;
                    match distribution.iter_mut().find(|(name, _)| *name == verdict.festival) {
                        Some((_, days)) => *days += 1,
                        None => distribution.push((verdict.festival, 1)),
                    }
                }
                DayKind::Weekend => counts.weekends += 1,
            }
        }
        (counts, distribution)
    }

    fn supported_year(&self, year: i32) -> EngineResult<(NaiveDate, NaiveDate)> {
        let (first, last) = self.tables().year_span().unwrap_or((0, -1));
        let bounds = NaiveDate::from_ymd_opt(year, 1, 1).zip(NaiveDate::from_ymd_opt(year, 12, 31));
        match bounds {
            Some(bounds) if (first..=last).contains(&year) => Ok(bounds),
            _ => Err(EngineError::UnsupportedYear { year, first, last }),
        }
    }

    // ------------------------------------------------------------------
    // Adjacency
    // ------------------------------------------------------------------

    /// First workday within the 14 days after `date`.
    ///
    /// Days past year 9999 are never considered.
    pub fn next_workday<'a>(
        &mut self,
        date: impl Into<DateInput<'a>>,
    ) -> EngineResult<Option<CanonicalDate>> {
        let day = self.day_of(date)?;
        Ok(self.next_workday_after(day).map(CanonicalDate::from_date))
    }

    /// Last workday within the 14 days before `date`.
    ///
    /// Days before year 1 are never considered.
    pub fn previous_workday<'a>(
        &mut self,
        date: impl Into<DateInput<'a>>,
    ) -> EngineResult<Option<CanonicalDate>> {
        let day = self.day_of(date)?;
        Ok(self.previous_workday_before(day).map(CanonicalDate::from_date))
    }

    /// Moves `workdays` workdays forward (or backward when negative).
    ///
    /// With `workdays == 0` the date itself is returned if it is a workday,
    /// otherwise the next workday. `None` when a step finds no workday
    /// inside the adjacency window.
    pub fn add_workdays<'a>(
        &mut self,
        date: impl Into<DateInput<'a>>,
        workdays: i64,
    ) -> EngineResult<Option<CanonicalDate>> {
        let day = self.day_of(date)?;
        Ok(self.step_workdays(day, workdays).map(CanonicalDate::from_date))
    }

    fn step_workdays(&mut self, day: NaiveDate, workdays: i64) -> Option<NaiveDate> {
        if workdays == 0 {
            return if self.is_workday_on(day) {
                Some(day)
            } else {
                self.next_workday_after(day)
            };
        }
        let mut current = day;
        for _ in 0..workdays.unsigned_abs() {
            current = if workdays > 0 {
                self.next_workday_after(current)?
            } else {
                self.previous_workday_before(current)?
            };
        }
        Some(current)
    }

    // ------------------------------------------------------------------
    // Ranges
    // ------------------------------------------------------------------

    /// Workdays in the inclusive range; 0 when `start > end`.
    pub fn count_workdays<'a>(
        &mut self,
        start: impl Into<DateInput<'a>>,
        end: impl Into<DateInput<'a>>,
    ) -> EngineResult<u32> {
        let (start, end) = self.bounds(start, end)?;
        let mut count = 0;
        for day in days_between(start, end) {
            if self.is_workday_on(day) {
                count += 1;
            }
        }
        Ok(count)
    }

    /// Workdays in the inclusive range, oldest first.
    pub fn workdays_in_range<'a>(
        &mut self,
        start: impl Into<DateInput<'a>>,
        end: impl Into<DateInput<'a>>,
    ) -> EngineResult<Vec<CanonicalDate>> {
        let (start, end) = self.bounds(start, end)?;
        let mut dates = Vec::new();
        for day in days_between(start, end) {
            if self.is_workday_on(day) {
                dates.push(CanonicalDate::from_date(day));
            }
        }
        Ok(dates)
    }

    /// Statutory holidays in the inclusive range, oldest first.
    ///
    /// Shifted workdays and ordinary weekends are not included.
    pub fn holidays_in_range<'a>(
        &mut self,
        start: impl Into<DateInput<'a>>,
        end: impl Into<DateInput<'a>>,
    ) -> EngineResult<Vec<HolidayEntry>> {
        let (start, end) = self.bounds(start, end)?;
        let mut entries = Vec::new();
        for day in days_between(start, end) {
            let verdict = self.classify_day(day);
            if verdict.kind == DayKind::Holiday {
                entries.push(HolidayEntry {
                    date: CanonicalDate::from_date(day),
                    festival: verdict.festival.to_string(),
                });
            }
        }
        Ok(entries)
    }

    /// Workdays strictly after `start` up to and including `end`.
    ///
    /// When `end` precedes `start`, counts workdays from `end` up to but
    /// excluding `start`.
    pub fn workdays_interval<'a>(
        &mut self,
        start: impl Into<DateInput<'a>>,
        end: impl Into<DateInput<'a>>,
    ) -> EngineResult<u32> {
        let (start, end) = self.bounds(start, end)?;
        let (from, to) = if start <= end {
            (days_after(start, 1), Some(end))
        } else {
            (Some(end), days_before(start, 1))
        };
        let (Some(from), Some(to)) = (from, to) else {
            return Ok(0);
        };
        let mut count = 0;
        for day in days_between(from, to) {
            if self.is_workday_on(day) {
                count += 1;
            }
        }
        Ok(count)
    }

    /// The first workday at or after `start`, then every `interval`-th
    /// workday after it, while not past `end`.
    ///
    /// An `interval` of 0 is treated as 1.
    pub fn workday_sequence<'a>(
        &mut self,
        start: impl Into<DateInput<'a>>,
        end: impl Into<DateInput<'a>>,
        interval: u32,
    ) -> EngineResult<Vec<CanonicalDate>> {
        let (start, end) = self.bounds(start, end)?;
        let step = i64::from(interval.max(1));
        let mut sequence = Vec::new();
        let mut current = self.step_workdays(start, 0);
        while let Some(day) = current.filter(|day| *day <= end) {
            sequence.push(CanonicalDate::from_date(day));
            current = self.step_workdays(day, step);
        }
        Ok(sequence)
    }

    /// Calendar days in the range, counting both ends, in either order.
    pub fn total_days<'a>(
        &self,
        start: impl Into<DateInput<'a>>,
        end: impl Into<DateInput<'a>>,
    ) -> EngineResult<u32> {
        let (start, end) = self.bounds(start, end)?;
        let span = (end - start).num_days().unsigned_abs() + 1;
        Ok(u32::try_from(span).unwrap_or(u32::MAX))
    }

    /// Working hours in the inclusive range at `hours_per_day` per workday.
    pub fn calculate_work_hours<'a>(
        &mut self,
        start: impl Into<DateInput<'a>>,
        end: impl Into<DateInput<'a>>,
        hours_per_day: Decimal,
    ) -> EngineResult<Decimal> {
        let workdays = self.count_workdays(start, end)?;
        Ok(Decimal::from(workdays) * hours_per_day)
    }

    // ------------------------------------------------------------------
    // Holiday reminders
    // ------------------------------------------------------------------

    /// The first statutory holiday within a year after `date`.
    pub fn next_holiday<'a>(
        &mut self,
        date: impl Into<DateInput<'a>>,
    ) -> EngineResult<Option<UpcomingHoliday>> {
        let day = self.day_of(date)?;
        Ok(self.next_holiday_after(day, HOLIDAY_LOOKAHEAD_DAYS))
    }

    /// Days until the next statutory holiday within a year.
    pub fn days_until_holiday<'a>(
        &mut self,
        date: impl Into<DateInput<'a>>,
    ) -> EngineResult<Option<u32>> {
        Ok(self.next_holiday(date)?.map(|holiday| holiday.days_until))
    }

    /// Whether a statutory holiday falls within the next `days_before` days.
    pub fn is_holiday_approaching<'a>(
        &mut self,
        date: impl Into<DateInput<'a>>,
        days_before: u32,
    ) -> EngineResult<bool> {
        let day = self.day_of(date)?;
        Ok(self.next_holiday_after(day, u64::from(days_before)).is_some())
    }

    /// Length of the run of non-workdays starting at `date`.
    ///
    /// 0 unless `date` itself is a statutory holiday. Weekends adjoining the
    /// holiday at the end of the run are counted.
    pub fn consecutive_holidays<'a>(&mut self, date: impl Into<DateInput<'a>>) -> EngineResult<u32> {
        let day = self.day_of(date)?;
        if self.classify_day(day).kind != DayKind::Holiday {
            return Ok(0);
        }
        let mut run = 1;
        let mut current = day;
        while let Some(next) = days_after(current, 1) {
            if self.is_workday_on(next) {
                break;
            }
            run += 1;
            current = next;
        }
        Ok(run)
    }

    // ------------------------------------------------------------------
    // Statistics
    // ------------------------------------------------------------------

    /// Day counts and holiday distribution for a year in the table span.
    ///
    /// # Errors
    ///
    /// [`EngineError::UnsupportedYear`] outside the span.
    pub fn annual_stats(&mut self, year: i32) -> EngineResult<AnnualStats> {
        let (start, end) = self.supported_year(year)?;
        let (counts, distribution) = self.tally(start, end);
        Ok(AnnualStats {
            year,
            counts,
            workday_percentage: counts.workday_percentage(),
            holiday_distribution: distribution
                .into_iter()
                .map(|(festival, days)| (festival.to_string(), days))
                .collect(),
        })
    }

    /// Day counts for one month of a year in the table span.
    ///
    /// # Errors
    ///
    /// [`EngineError::InvalidMonth`] for months outside 1..=12, then
    /// [`EngineError::UnsupportedYear`] outside the span.
    pub fn monthly_stats(&mut self, year: i32, month: u32) -> EngineResult<MonthlyStats> {
        if !(1..=12).contains(&month) {
            return Err(EngineError::InvalidMonth { month });
        }
        self.supported_year(year)?;
        let first = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or(EngineError::InvalidMonth { month })?;
        let last = first
            .checked_add_months(Months::new(1))
            .and_then(|next| next.pred_opt())
            .ok_or(EngineError::InvalidMonth { month })?;
        let (counts, _) = self.tally(first, last);
        Ok(MonthlyStats {
            year,
            month,
            counts,
            workday_percentage: counts.workday_percentage(),
        })
    }

    /// Workday, holiday and weekend shares over an inclusive range.
    pub fn workday_ratio<'a>(
        &mut self,
        start: impl Into<DateInput<'a>>,
        end: impl Into<DateInput<'a>>,
    ) -> EngineResult<WorkdayRatio> {
        let (start, end) = self.ordered_bounds(start, end)?;
        let (counts, _) = self.tally(start, end);
        Ok(WorkdayRatio {
            start_date: CanonicalDate::from_date(start),
            end_date: CanonicalDate::from_date(end),
            counts,
            workday_percentage: counts.workday_percentage(),
            holiday_percentage: counts.holiday_percentage(),
            weekend_percentage: counts.weekend_percentage(),
        })
    }

    /// Statutory holidays in an inclusive range grouped by festival.
    pub fn holidays_by_festival<'a>(
        &mut self,
        start: impl Into<DateInput<'a>>,
        end: impl Into<DateInput<'a>>,
    ) -> EngineResult<BTreeMap<String, Vec<CanonicalDate>>> {
        let (start, end) = self.ordered_bounds(start, end)?;
        let mut grouped: BTreeMap<String, Vec<CanonicalDate>> = BTreeMap::new();
        for day in days_between(start, end) {
            let verdict = self.classify_day(day);
            if verdict.kind == DayKind::Holiday {
                grouped
                    .entry(verdict.festival.to_string())
                    .or_default()
                    .push(CanonicalDate::from_date(day));
            }
        }
        Ok(grouped)
    }

    /// The festival with the most holiday days in a year.
    ///
    /// Ties go to the festival that comes first in the year. `None` when the
    /// year has no holidays.
    pub fn most_common_holiday(&mut self, year: i32) -> EngineResult<Option<FestivalCount>> {
        let (start, end) = self.supported_year(year)?;
        let (_, distribution) = self.tally(start, end);
        let most = distribution
            .into_iter()
            .fold(None, |best: Option<(&str, u32)>, (festival, days)| match best {
                Some((_, most)) if most >= days => best,
                _ => Some((festival, days)),
            });
        Ok(most.map(|(festival, count)| FestivalCount {
            festival: festival.to_string(),
            count,
        }))
    }
}
