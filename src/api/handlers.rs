//! HTTP request handlers for the workday query API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{delete, get, post},
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};

use super::request::{BatchRequest, DateParam, RangeQuery};
use super::response::{
    AdjacentWorkday, ApiError, ApiErrorResponse, BatchResponse, CacheReport, DayReport,
    WorkdaysInRange,
};
use super::state::AppState;

/// Longest span, in days counting both ends, accepted by `GET /ranges/workdays`.
pub const MAX_RANGE_DAYS: u32 = 3660;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/days/batch", post(batch_handler))
        .route("/days/:date", get(day_handler))
        .route("/lunar/:date", get(lunar_handler))
        .route("/workdays/next/:date", get(next_workday_handler))
        .route("/workdays/previous/:date", get(previous_workday_handler))
        .route("/ranges/workdays", get(workdays_in_range_handler))
        .route("/stats/annual/:year", get(annual_stats_handler))
        .route("/cache/stats", get(cache_stats_handler))
        .route("/cache", delete(clear_cache_handler))
        .with_state(state)
}

/// Renders an engine result as a JSON response, logging the outcome.
fn respond<T: Serialize>(correlation_id: Uuid, started: Instant, result: EngineResult<T>) -> Response {
    match result {
        Ok(body) => {
            info!(
                correlation_id = %correlation_id,
                duration_us = started.elapsed().as_micros(),
                "Query completed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(body),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Query failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for GET /days/{date}.
async fn day_handler(State(state): State<AppState>, Path(date): Path<String>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, date = %date, "Classifying date");
    let started = Instant::now();

    let param = DateParam::from(date);
    let result = state.with_calendar(|calendar| -> EngineResult<DayReport> {
        let normalized = calendar.normalize(param.as_input())?;
        let verdict = calendar.classify_normalized(&normalized);
        Ok(DayReport::new(normalized, verdict))
    });
    respond(correlation_id, started, result)
}

/// Handler for POST /days/batch.
///
/// Every date is validated before any is classified; one bad date fails
/// the whole request.
async fn batch_handler(
    State(state): State<AppState>,
    payload: Result<Json<BatchRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::validation_error(body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return ApiErrorResponse::bad_request(error).into_response();
        }
    };

    info!(
        correlation_id = %correlation_id,
        dates = request.dates.len(),
        "Classifying batch"
    );
    let started = Instant::now();

    let result = state.with_calendar(|calendar| -> EngineResult<BatchResponse> {
        let normalized = request
            .dates
            .iter()
            .map(|date| calendar.normalize(date.as_input()))
            .collect::<EngineResult<Vec<_>>>()?;
        let results = normalized
            .into_iter()
            .map(|date| {
                let verdict = calendar.classify_normalized(&date);
                DayReport::new(date, verdict)
            })
            .collect();
        Ok(BatchResponse { results })
    });
    respond(correlation_id, started, result)
}

/// Handler for GET /lunar/{date}.
async fn lunar_handler(State(state): State<AppState>, Path(date): Path<String>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, date = %date, "Converting to lunar date");
    let started = Instant::now();

    let param = DateParam::from(date);
    let result = state.with_lunar(|lunar| lunar.lunar_info(param.as_input()));
    respond(correlation_id, started, result)
}

/// Handler for GET /workdays/next/{date}.
async fn next_workday_handler(State(state): State<AppState>, Path(date): Path<String>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, date = %date, "Finding next workday");
    let started = Instant::now();

    let param = DateParam::from(date);
    let result = state.with_calendar(|calendar| -> EngineResult<AdjacentWorkday> {
        Ok(AdjacentWorkday {
            date: calendar.next_workday(param.as_input())?,
        })
    });
    respond(correlation_id, started, result)
}

/// Handler for GET /workdays/previous/{date}.
async fn previous_workday_handler(
    State(state): State<AppState>,
    Path(date): Path<String>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, date = %date, "Finding previous workday");
    let started = Instant::now();

    let param = DateParam::from(date);
    let result = state.with_calendar(|calendar| -> EngineResult<AdjacentWorkday> {
        Ok(AdjacentWorkday {
            date: calendar.previous_workday(param.as_input())?,
        })
    });
    respond(correlation_id, started, result)
}

/// Handler for GET /ranges/workdays?start=&end=.
///
/// Ranges longer than [`MAX_RANGE_DAYS`] are rejected before any day is
/// classified.
async fn workdays_in_range_handler(
    State(state): State<AppState>,
    query: Result<Query<RangeQuery>, QueryRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let Query(range) = match query {
        Ok(query) => query,
        Err(rejection) => {
            warn!(
                correlation_id = %correlation_id,
                error = %rejection.body_text(),
                "Invalid range query"
            );
            return ApiErrorResponse::bad_request(ApiError::validation_error(
                rejection.body_text(),
            ))
            .into_response();
        }
    };

    info!(
        correlation_id = %correlation_id,
        start = %range.start,
        end = %range.end,
        "Listing workdays in range"
    );
    let started = Instant::now();

    let result = state.with_calendar(|calendar| -> EngineResult<WorkdaysInRange> {
        let days = calendar.total_days(range.start.as_str(), range.end.as_str())?;
        if days > MAX_RANGE_DAYS {
            return Err(EngineError::RangeTooLong {
                start: range.start.clone(),
                end: range.end.clone(),
                days,
                max: MAX_RANGE_DAYS,
            });
        }
        let dates = calendar.workdays_in_range(range.start.as_str(), range.end.as_str())?;
        Ok(WorkdaysInRange {
            count: dates.len(),
            dates,
        })
    });
    respond(correlation_id, started, result)
}

/// Handler for GET /stats/annual/{year}.
async fn annual_stats_handler(
    State(state): State<AppState>,
    year: Result<Path<i32>, PathRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let Path(year) = match year {
        Ok(year) => year,
        Err(rejection) => {
            warn!(
                correlation_id = %correlation_id,
                error = %rejection.body_text(),
                "Invalid year"
            );
            return ApiErrorResponse::bad_request(ApiError::validation_error(
                rejection.body_text(),
            ))
            .into_response();
        }
    };

    info!(correlation_id = %correlation_id, year, "Computing annual statistics");
    let started = Instant::now();

    let result = state.with_calendar(|calendar| calendar.annual_stats(year));
    respond(correlation_id, started, result)
}

fn cache_report(state: &AppState) -> CacheReport {
    CacheReport {
        classification: state.with_calendar(|calendar| calendar.cache_stats()),
        lunar: state.with_lunar(|lunar| lunar.cache_stats()),
    }
}

/// Handler for GET /cache/stats.
async fn cache_stats_handler(State(state): State<AppState>) -> Response {
    let correlation_id = Uuid::new_v4();
    let started = Instant::now();
    respond(correlation_id, started, Ok(cache_report(&state)))
}

/// Handler for DELETE /cache.
///
/// Clears the classification cache and returns the counters afterwards.
async fn clear_cache_handler(State(state): State<AppState>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Clearing classification cache");
    let started = Instant::now();

    state.with_calendar(|calendar| calendar.clear_cache());
    respond(correlation_id, started, Ok(cache_report(&state)))
}
