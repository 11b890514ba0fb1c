//! Response types for the workday query API.
//!
//! This module defines the success bodies, the error response structure and
//! the mapping from [`EngineError`] to HTTP status codes.

use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::calendar::{CacheStats, NormalizedDate};
use crate::error::EngineError;
use crate::models::{CanonicalDate, DayClassification, DayKind};

/// Everything known about one day, as returned by `GET /days/{date}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayReport {
    /// The canonical day.
    pub date: CanonicalDate,
    /// Whether work is mandated.
    pub is_workday: bool,
    /// Whether the day is off.
    pub is_holiday: bool,
    /// Whether the day is a weekend redesignated as a workday.
    pub is_shifted_workday: bool,
    /// Whether the day is a Saturday or Sunday.
    pub is_weekend: bool,
    /// Festival, compensation, weekend or workday label.
    pub festival: String,
}

impl DayReport {
    /// Builds a report from a normalized day and its verdict.
    pub fn new(date: NormalizedDate, verdict: DayClassification) -> Self {
        Self {
            date: date.canonical,
            is_workday: verdict.is_workday(),
            is_holiday: !verdict.is_workday(),
            is_shifted_workday: verdict.kind == DayKind::ShiftedWorkday,
            is_weekend: date.is_weekend,
            festival: verdict.festival.to_string(),
        }
    }
}

/// Response body for `POST /days/batch`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchResponse {
    /// One report per requested date, in request order.
    pub results: Vec<DayReport>,
}

/// Response body for the adjacent workday endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjacentWorkday {
    /// The workday found, or `null` when none lies within the search window.
    pub date: Option<CanonicalDate>,
}

/// Response body for `GET /ranges/workdays`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkdaysInRange {
    /// Number of workdays.
    pub count: usize,
    /// The workdays, oldest first.
    pub dates: Vec<CanonicalDate>,
}

/// Response body for the cache endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CacheReport {
    /// Classification cache counters.
    pub classification: CacheStats,
    /// Lunar cache counters.
    pub lunar: CacheStats,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// A 400 response carrying `error`.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (
            self.status,
            [(header::CONTENT_TYPE, "application/json")],
            Json(self.error),
        )
            .into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        match error {
            EngineError::InvalidDateFormat { input, .. } => {
                ApiErrorResponse::bad_request(ApiError::with_details(
                    "INVALID_DATE",
                    message,
                    format!(
                        "'{}' is not a YYYY-MM-DD or YYYY/MM/DD date or epoch milliseconds",
                        input
                    ),
                ))
            }
            EngineError::InvalidRange { .. } => {
                ApiErrorResponse::bad_request(ApiError::new("INVALID_RANGE", message))
            }
            EngineError::RangeTooLong { max, .. } => {
                ApiErrorResponse::bad_request(ApiError::with_details(
                    "RANGE_TOO_LONG",
                    message,
                    format!("Ranges may span at most {} days", max),
                ))
            }
            EngineError::UnsupportedYear { first, last, .. } => {
                ApiErrorResponse::bad_request(ApiError::with_details(
                    "UNSUPPORTED_YEAR",
                    message,
                    format!("Statutory tables cover {} to {}", first, last),
                ))
            }
            EngineError::InvalidMonth { .. } => {
                ApiErrorResponse::bad_request(ApiError::new("INVALID_MONTH", message))
            }
            EngineError::ConfigNotFound { .. }
            | EngineError::ConfigParseError { .. }
            | EngineError::InvalidConfig { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
            },
        }
    }
}
