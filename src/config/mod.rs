//! Configuration loading and management for the workday engine.
//!
//! This module loads engine settings and custom work schedules from YAML
//! files and builds ready-to-use engines from them.
//!
//! # Example
//!
//! ```no_run
//! use cn_workday::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/cn").unwrap();
//! println!("Cache capacity: {}", config.config().cache_capacity);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{DEFAULT_UTC_OFFSET_MINUTES, EngineConfig};
