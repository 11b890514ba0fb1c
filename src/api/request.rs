//! Request types for the workday query API.
//!
//! This module defines the JSON bodies and query strings the endpoints accept.

use serde::{Deserialize, Serialize};

use crate::models::DateInput;

/// A date as sent by a client: text or epoch milliseconds.
///
/// In JSON, strings become [`DateParam::Text`] and integers
/// [`DateParam::Millis`]. In a path segment, an optionally signed run of
/// digits is read as milliseconds and anything else as text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DateParam {
    /// Milliseconds since the Unix epoch.
    Millis(i64),
    /// `YYYY-MM-DD` or `YYYY/MM/DD` text.
    Text(String),
}

impl DateParam {
    /// Borrows the parameter as an engine input.
    pub fn as_input(&self) -> DateInput<'_> {
        match self {
            DateParam::Millis(millis) => DateInput::Timestamp(*millis),
            DateParam::Text(text) => DateInput::Text(text),
        }
    }
}

impl From<String> for DateParam {
    fn from(segment: String) -> Self {
        let digits = segment.strip_prefix('-').unwrap_or(&segment);
        let numeric = !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit());
        match segment.parse::<i64>() {
            Ok(millis) if numeric => DateParam::Millis(millis),
            _ => DateParam::Text(segment),
        }
    }
}

/// Request body for `POST /days/batch`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchRequest {
    /// Dates to classify, in response order.
    pub dates: Vec<DateParam>,
}

/// Query string for range endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RangeQuery {
    /// First day of the range.
    pub start: String,
    /// Last day of the range.
    pub end: String,
}
