//! Application state for the workday query API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::{Arc, Mutex, PoisonError};

use crate::calendar::{LunarConverter, WorkdayCalendar};
use crate::config::ConfigLoader;
use crate::error::EngineResult;

/// Shared application state.
///
/// Both engines mutate their caches on every query, so each sits behind a
/// mutex. Locks are held only for the duration of one synchronous query.
#[derive(Clone)]
pub struct AppState {
    calendar: Arc<Mutex<WorkdayCalendar>>,
    lunar: Arc<Mutex<LunarConverter>>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(WorkdayCalendar::new(), LunarConverter::new())
    }
}

impl AppState {
    /// Creates a new application state around the given engines.
    pub fn new(calendar: WorkdayCalendar, lunar: LunarConverter) -> Self {
        Self {
            calendar: Arc::new(Mutex::new(calendar)),
            lunar: Arc::new(Mutex::new(lunar)),
        }
    }

    /// Creates application state from loaded configuration.
    pub fn from_config(config: &ConfigLoader) -> EngineResult<Self> {
        Ok(Self::new(config.calendar()?, config.lunar_converter()?))
    }

    /// Runs `query` with exclusive access to the classification engine.
    ///
    /// A poisoned lock is recovered rather than propagated.
    pub fn with_calendar<R>(&self, query: impl FnOnce(&mut WorkdayCalendar) -> R) -> R {
        let mut calendar = self.calendar.lock().unwrap_or_else(PoisonError::into_inner);
        query(&mut calendar)
    }

    /// Runs `query` with exclusive access to the lunar converter.
    pub fn with_lunar<R>(&self, query: impl FnOnce(&mut LunarConverter) -> R) -> R {
        let mut lunar = self.lunar.lock().unwrap_or_else(PoisonError::into_inner);
        query(&mut lunar)
    }
}
