//! HTTP API module for the workday engine.
//!
//! This module exposes classification, lunar conversion, adjacency, range
//! and statistics queries as JSON endpoints on an axum router.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::{MAX_RANGE_DAYS, create_router};
pub use request::{BatchRequest, DateParam, RangeQuery};
pub use response::{
    AdjacentWorkday, ApiError, ApiErrorResponse, BatchResponse, CacheReport, DayReport,
    WorkdaysInRange,
};
pub use state::AppState;
