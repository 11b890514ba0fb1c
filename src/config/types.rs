//! Configuration types for the workday engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use std::num::NonZeroUsize;

use chrono::FixedOffset;
use serde::{Deserialize, Serialize};

use crate::calendar::{
    CalendarTables, DEFAULT_CACHE_CAPACITY, DEFAULT_LUNAR_CACHE_CAPACITY, DateNormalizer,
    LunarConverter, WorkdayCalendar,
};
use crate::error::{EngineError, EngineResult};

/// Minutes in the default offset, China Standard Time (UTC+8).
pub const DEFAULT_UTC_OFFSET_MINUTES: i32 = 480;

/// Engine settings from `engine.yaml`.
///
/// Every field is optional in the file and falls back to the values of
/// [`EngineConfig::default`].
///
/// # Example
///
/// ```
/// use cn_workday::config::EngineConfig;
///
/// let config: EngineConfig = serde_yaml::from_str("cache_capacity: 250").unwrap();
/// assert_eq!(config.cache_capacity, 250);
/// assert_eq!(config.utc_offset_minutes, 480);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Maximum entries in the classification cache.
    #[serde(default = "default_cache_capacity")]
    pub cache_capacity: usize,
    /// Maximum entries in the lunar result cache.
    #[serde(default = "default_lunar_cache_capacity")]
    pub lunar_cache_capacity: usize,
    /// Offset from UTC used to read timestamps and "today", in minutes.
    #[serde(default = "default_utc_offset_minutes")]
    pub utc_offset_minutes: i32,
    /// Report today's real weekend flag when no date is given.
    #[serde(default)]
    pub resolve_today_weekday: bool,
}

fn default_cache_capacity() -> usize {
    DEFAULT_CACHE_CAPACITY
}

fn default_lunar_cache_capacity() -> usize {
    DEFAULT_LUNAR_CACHE_CAPACITY
}

fn default_utc_offset_minutes() -> i32 {
    DEFAULT_UTC_OFFSET_MINUTES
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            cache_capacity: DEFAULT_CACHE_CAPACITY,
            lunar_cache_capacity: DEFAULT_LUNAR_CACHE_CAPACITY,
            utc_offset_minutes: DEFAULT_UTC_OFFSET_MINUTES,
            resolve_today_weekday: false,
        }
    }
}

impl EngineConfig {
    /// Checks every field is in range.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidConfig`] naming the first bad field.
    pub fn validate(&self) -> EngineResult<()> {
        nonzero("cache_capacity", self.cache_capacity)?;
        nonzero("lunar_cache_capacity", self.lunar_cache_capacity)?;
        self.offset()?;
        Ok(())
    }

    /// The configured UTC offset.
    pub fn offset(&self) -> EngineResult<FixedOffset> {
        self.utc_offset_minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .ok_or_else(|| EngineError::InvalidConfig {
                field: "utc_offset_minutes".to_string(),
                message: format!(
                    "{} is not within -1439..=1439 minutes",
                    self.utc_offset_minutes
                ),
            })
    }

    /// A normalizer honouring the offset and today-weekday settings.
    pub fn normalizer(&self) -> EngineResult<DateNormalizer> {
        Ok(DateNormalizer::new(self.offset()?, self.resolve_today_weekday))
    }

    /// A classification engine over the built-in tables.
    pub fn calendar(&self) -> EngineResult<WorkdayCalendar> {
        Ok(WorkdayCalendar::with_parts(
            CalendarTables::builtin(),
            self.normalizer()?,
            nonzero("cache_capacity", self.cache_capacity)?,
        ))
    }

    /// A lunar converter over the built-in anchors.
    pub fn lunar_converter(&self) -> EngineResult<LunarConverter> {
        Ok(LunarConverter::with_parts(
            CalendarTables::builtin(),
            self.normalizer()?,
            nonzero("lunar_cache_capacity", self.lunar_cache_capacity)?,
        ))
    }
}

fn nonzero(field: &str, value: usize) -> EngineResult<NonZeroUsize> {
    NonZeroUsize::new(value).ok_or_else(|| EngineError::InvalidConfig {
        field: field.to_string(),
        message: "must be at least 1".to_string(),
    })
}
