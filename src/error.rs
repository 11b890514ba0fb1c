//! Error types for the workday engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every error condition the engine can report.

use thiserror::Error;

/// The main error type for the workday engine.
///
/// Classification and lunar queries only ever fail with
/// [`EngineError::InvalidDateFormat`]; the remaining variants come from
/// configuration loading and the range statistics helpers.
///
/// # Example
///
/// ```
/// use cn_workday::error::EngineError;
///
/// let error = EngineError::InvalidDateFormat {
///     input: "2024-02-30".to_string(),
///     reason: "no such calendar day".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid date '2024-02-30': no such calendar day");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A date input could not be parsed or names an impossible calendar day.
    #[error("Invalid date '{input}': {reason}")]
    InvalidDateFormat {
        /// The rejected input, rendered as text.
        input: String,
        /// Why the input was rejected.
        reason: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A configuration value was present but out of range.
    #[error("Invalid configuration field '{field}': {message}")]
    InvalidConfig {
        /// The offending field.
        field: String,
        /// A description of what made the value invalid.
        message: String,
    },

    /// A date range whose start lies after its end.
    #[error("Invalid range: start {start} is after end {end}")]
    InvalidRange {
        /// Canonical start date.
        start: String,
        /// Canonical end date.
        end: String,
    },

    /// A range longer than the caller accepts.
    #[error("Range {start} to {end} spans {days} days, more than the limit of {max}")]
    RangeTooLong {
        /// Canonical start date.
        start: String,
        /// Canonical end date.
        end: String,
        /// Days in the range, counting both ends.
        days: u32,
        /// Longest range accepted.
        max: u32,
    },

    /// A year outside the span covered by the statutory tables.
    #[error("Year {year} is outside the supported range {first}-{last}")]
    UnsupportedYear {
        /// The requested year.
        year: i32,
        /// First year with table data.
        first: i32,
        /// Last year with table data.
        last: i32,
    },

    /// A month number outside 1..=12.
    #[error("Month must be between 1 and 12, got {month}")]
    InvalidMonth {
        /// The requested month.
        month: u32,
    },
}

impl EngineError {
    /// Shorthand for an [`EngineError::InvalidDateFormat`].
    pub(crate) fn invalid_date(input: impl Into<String>, reason: impl Into<String>) -> Self {
        EngineError::InvalidDateFormat {
            input: input.into(),
            reason: reason.into(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_date_displays_input_and_reason() {
        let error = EngineError::invalid_date("invalid-date", "unrecognised date shape");
        assert_eq!(
            error.to_string(),
            "Invalid date 'invalid-date': unrecognised date shape"
        );
    }

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/engine.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/engine.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_config_displays_field() {
        let error = EngineError::InvalidConfig {
            field: "cache_capacity".to_string(),
            message: "must be at least 1".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid configuration field 'cache_capacity': must be at least 1"
        );
    }

    #[test]
    fn test_invalid_range_displays_bounds() {
        let error = EngineError::InvalidRange {
            start: "2024-10-08".to_string(),
            end: "2024-10-01".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid range: start 2024-10-08 is after end 2024-10-01"
        );
    }

    #[test]
    fn test_range_too_long_displays_limit() {
        let error = EngineError::RangeTooLong {
            start: "0001-01-01".to_string(),
            end: "9999-12-31".to_string(),
            days: 3_652_059,
            max: 3660,
        };
        assert_eq!(
            error.to_string(),
            "Range 0001-01-01 to 9999-12-31 spans 3652059 days, more than the limit of 3660"
        );
    }

    #[test]
    fn test_unsupported_year_displays_span() {
        let error = EngineError::UnsupportedYear {
            year: 2030,
            first: 2011,
            last: 2026,
        };
        assert_eq!(
            error.to_string(),
            "Year 2030 is outside the supported range 2011-2026"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_invalid_month() -> EngineResult<()> {
            Err(EngineError::InvalidMonth { month: 13 })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_invalid_month()?;
            Ok(())
        }

        assert_eq!(
            propagates_error(),
            Err(EngineError::InvalidMonth { month: 13 })
        );
    }
}
