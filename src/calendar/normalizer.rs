//! Date normalization.
//!
//! Every query starts by turning a [`DateInput`] into a [`NormalizedDate`]:
//! the canonical `YYYY-MM-DD` key plus whether the day falls on a Saturday
//! or Sunday.

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, Offset, Utc, Weekday};
use tracing::trace;

use crate::error::{EngineError, EngineResult};
use crate::models::{CanonicalDate, DateInput};

/// Offset of China Standard Time from UTC, in seconds.
pub const CHINA_STANDARD_TIME_OFFSET_SECS: i32 = 8 * 3600;

/// A canonical date key with its calendar weekend flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedDate {
    /// The canonical key.
    pub canonical: CanonicalDate,
    /// Whether the day is a Saturday or Sunday.
    pub is_weekend: bool,
}

impl NormalizedDate {
    fn from_date(date: NaiveDate) -> EngineResult<Self> {
        Ok(Self {
            canonical: CanonicalDate::try_from_date(date)?,
            is_weekend: is_weekend(date),
        })
    }
}

/// Converts date inputs into canonical keys.
///
/// Timestamps and "today" are read in a fixed UTC offset, China Standard
/// Time by default.
///
/// When no date is given the weekend flag is reported as `false` without
/// looking at today's weekday. Existing callers rely on this, so resolving
/// the real weekday is opt-in through [`DateNormalizer::new`].
///
/// # Example
///
/// ```
/// use cn_workday::calendar::DateNormalizer;
///
/// let normalizer = DateNormalizer::default();
/// let normalized = normalizer.normalize("2024/10/5".into()).unwrap();
/// assert_eq!(normalized.canonical.as_str(), "2024-10-05");
/// assert!(normalized.is_weekend);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateNormalizer {
    offset: FixedOffset,
    resolve_today_weekday: bool,
}

impl Default for DateNormalizer {
    fn default() -> Self {
        Self::new(china_standard_time(), false)
    }
}

impl DateNormalizer {
    /// Creates a normalizer reading timestamps in `offset`.
    ///
    /// With `resolve_today_weekday` set, an omitted date reports today's
    /// real weekend flag instead of `false`.
    pub fn new(offset: FixedOffset, resolve_today_weekday: bool) -> Self {
        Self {
            offset,
            resolve_today_weekday,
        }
    }

    /// The offset used for timestamps and "today".
    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    /// Normalizes any accepted input shape.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidDateFormat`] for text in an unknown
    /// shape, text naming an impossible day, timestamps out of range, and
    /// days outside years 1 to 9999.
    pub fn normalize(&self, input: DateInput<'_>) -> EngineResult<NormalizedDate> {
        match input {
            DateInput::Text(text) => {
                if let Some(result) = Self::fast_path(text) {
                    trace!(date = text, "canonical fast path");
                    return result;
                }
                NormalizedDate::from_date(parse_text(text)?)
            }
            DateInput::Timestamp(millis) => {
                let instant = DateTime::from_timestamp_millis(millis).ok_or_else(|| {
                    EngineError::invalid_date(millis.to_string(), "timestamp out of range")
                })?;
                NormalizedDate::from_date(instant.with_timezone(&self.offset).date_naive())
            }
            DateInput::Date(date) => NormalizedDate::from_date(date),
            DateInput::Today => {
                let today = Utc::now().with_timezone(&self.offset).date_naive();
                let mut normalized = NormalizedDate::from_date(today)?;
                if !self.resolve_today_weekday {
                    normalized.is_weekend = false;
                }
                Ok(normalized)
            }
        }
    }

    /// Normalizes text that is already exactly `YYYY-MM-DD` shaped.
    ///
    /// Returns `None` when the text is not ten characters with hyphens at
    /// positions 4 and 7 and digits elsewhere; the caller then falls back to
    /// [`DateNormalizer::normalize`]. For every valid canonical string the
    /// result equals the general path's result.
    pub fn fast_path(text: &str) -> Option<EngineResult<NormalizedDate>> {
        let bytes = text.as_bytes();
        if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
            return None;
        }
        let year = ascii_number(&bytes[0..4])?;
        let month = ascii_number(&bytes[5..7])?;
        let day = ascii_number(&bytes[8..10])?;

        let date = i32::try_from(year)
            .ok()
            .filter(|&y| y >= crate::models::MIN_YEAR)
            .and_then(|y| NaiveDate::from_ymd_opt(y, month, day));
        Some(match date {
            Some(date) => Ok(NormalizedDate {
                canonical: CanonicalDate::from_parts(date, text),
                is_weekend: is_weekend(date),
            }),
            None => Err(EngineError::invalid_date(text, "no such calendar day")),
        })
    }
}

/// Whether `date` is a Saturday or Sunday.
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

fn china_standard_time() -> FixedOffset {
    FixedOffset::east_opt(CHINA_STANDARD_TIME_OFFSET_SECS).unwrap_or_else(|| Utc.fix())
}

fn ascii_number(bytes: &[u8]) -> Option<u32> {
    bytes.iter().try_fold(0u32, |acc, &b| {
        b.is_ascii_digit().then(|| acc * 10 + u32::from(b - b'0'))
    })
}

/// Parses `YYYY-M-D` or `YYYY/M/D` with one- or two-digit month and day.
fn parse_text(text: &str) -> EngineResult<NaiveDate> {
    let separator = if text.contains('/') { '/' } else { '-' };
    let parts: Vec<&str> = text.split(separator).collect();
    let [year, month, day] = parts.as_slice() else {
        return Err(EngineError::invalid_date(
            text,
            "expected YYYY-MM-DD or YYYY/MM/DD",
        ));
    };

    if year.len() != 4 || !(1..=2).contains(&month.len()) || !(1..=2).contains(&day.len()) {
        return Err(EngineError::invalid_date(
            text,
            "expected a four-digit year and one- or two-digit month and day",
        ));
    }
    let numbers = (
        ascii_number(year.as_bytes()),
        ascii_number(month.as_bytes()),
        ascii_number(day.as_bytes()),
    );
    let (Some(year), Some(month), Some(day)) = numbers else {
        return Err(EngineError::invalid_date(text, "date parts must be digits"));
    };

    i32::try_from(year)
        .ok()
        .and_then(|y| NaiveDate::from_ymd_opt(y, month, day))
        .ok_or_else(|| EngineError::invalid_date(text, "no such calendar day"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn normalize(input: DateInput<'_>) -> EngineResult<NormalizedDate> {
        DateNormalizer::default().normalize(input)
    }

    fn make_date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_canonical_string_passes_through() {
        let normalized = normalize("2024-10-01".into()).unwrap();
        assert_eq!(normalized.canonical.as_str(), "2024-10-01");
        assert!(!normalized.is_weekend); // Tuesday
    }

    #[test]
    fn test_slash_separated_string() {
        let normalized = normalize("2024/10/01".into()).unwrap();
        assert_eq!(normalized.canonical.as_str(), "2024-10-01");
    }

    #[test]
    fn test_unpadded_parts_are_padded() {
        assert_eq!(normalize("2024/2/4".into()).unwrap().canonical.as_str(), "2024-02-04");
        assert_eq!(normalize("2024-2-4".into()).unwrap().canonical.as_str(), "2024-02-04");
    }

    #[test]
    fn test_weekend_flag() {
        assert!(normalize("2024-10-05".into()).unwrap().is_weekend); // Saturday
        assert!(normalize("2024-10-06".into()).unwrap().is_weekend); // Sunday
        assert!(!normalize("2024-10-07".into()).unwrap().is_weekend); // Monday
    }

    #[test]
    fn test_timestamp_uses_china_standard_time() {
        // 2024-09-30T16:00:00Z is midnight on 2024-10-01 in Beijing
        let normalized = normalize(DateInput::Timestamp(1_727_712_000_000)).unwrap();
        assert_eq!(normalized.canonical.as_str(), "2024-10-01");

        // One millisecond earlier is still 2024-09-30 locally
        let normalized = normalize(DateInput::Timestamp(1_727_711_999_999)).unwrap();
        assert_eq!(normalized.canonical.as_str(), "2024-09-30");
    }

    #[test]
    fn test_timestamp_in_utc_normalizer() {
        let utc = DateNormalizer::new(Utc.fix(), false);
        let normalized = utc.normalize(DateInput::Timestamp(1_727_712_000_000)).unwrap();
        assert_eq!(normalized.canonical.as_str(), "2024-09-30");
    }

    #[test]
    fn test_calendar_date_value() {
        let normalized = normalize(make_date(2024, 2, 4).into()).unwrap();
        assert_eq!(normalized.canonical.as_str(), "2024-02-04");
        assert!(normalized.is_weekend); // Sunday
    }

    #[test]
    fn test_today_assumes_workday_by_default() {
        let normalized = normalize(DateInput::Today).unwrap();
        assert!(!normalized.is_weekend);
    }

    #[test]
    fn test_today_resolves_weekday_when_enabled() {
        let normalizer = DateNormalizer::new(china_standard_time(), true);
        let normalized = normalizer.normalize(DateInput::Today).unwrap();
        assert_eq!(normalized.is_weekend, is_weekend(normalized.canonical.date()));
    }

    #[test]
    fn test_rejects_impossible_days() {
        for input in ["2024-02-30", "2023-02-29", "2024/13/01", "2024-00-10", "0000-01-01"] {
            let result = normalize(input.into());
            assert!(
                matches!(result, Err(EngineError::InvalidDateFormat { .. })),
                "{input} should be rejected"
            );
        }
    }

    #[test]
    fn test_rejects_unknown_shapes() {
        for input in ["invalid-date", "", "2024", "2024-10", "24-10-01", "2024-10-01T08:00", "2024.10.01", "2024-010-01"] {
            let result = normalize(input.into());
            assert!(
                matches!(result, Err(EngineError::InvalidDateFormat { .. })),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_invalid_date_error_keeps_input() {
        let err = normalize("2024-02-30".into()).unwrap_err();
        assert_eq!(
            err,
            EngineError::InvalidDateFormat {
                input: "2024-02-30".to_string(),
                reason: "no such calendar day".to_string(),
            }
        );
    }

    #[test]
    fn test_rejects_out_of_range_timestamp() {
        assert!(normalize(DateInput::Timestamp(i64::MAX)).is_err());
    }

    #[test]
    fn test_fast_path_only_matches_canonical_shape() {
        assert!(DateNormalizer::fast_path("2024-10-01").is_some());
        assert!(DateNormalizer::fast_path("2024/10/01").is_none());
        assert!(DateNormalizer::fast_path("2024-1-01").is_none());
        assert!(DateNormalizer::fast_path("2024-1a-01").is_none());
        assert!(matches!(DateNormalizer::fast_path("2024-02-30"), Some(Err(_))));
    }

    proptest! {
        #[test]
        fn prop_representations_agree(days in 0i64..60_000) {
            let date = make_date(1970, 1, 1) + chrono::Duration::days(days);
            let canonical = date.format("%Y-%m-%d").to_string();
            let slashed = format!("{}/{}/{}", date.year(), date.month(), date.day());
            // Noon UTC keeps the Beijing calendar day unchanged
            let millis = (days * 86_400 + 12 * 3600) * 1000;

            let expected = normalize(DateInput::Date(date)).unwrap();
            prop_assert_eq!(&normalize(canonical.as_str().into()).unwrap(), &expected);
            prop_assert_eq!(&normalize(slashed.as_str().into()).unwrap(), &expected);
            prop_assert_eq!(&normalize(DateInput::Timestamp(millis)).unwrap(), &expected);
            prop_assert_eq!(expected.canonical.as_str(), canonical.as_str());
        }

        #[test]
        fn prop_fast_path_matches_general_path(days in 0i64..2_900_000) {
            let date = make_date(1, 1, 1) + chrono::Duration::days(days);
            let canonical = CanonicalDate::from_date(date);
            let fast = DateNormalizer::fast_path(canonical.as_str()).unwrap().unwrap();
            let general = NormalizedDate::from_date(parse_text(canonical.as_str()).unwrap()).unwrap();
            prop_assert_eq!(fast, general);
        }
    }
}
