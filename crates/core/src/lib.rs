//! Core utilities for fuzzmatch
//!
//! This crate provides functionality shared by the fuzzmatch front ends:
//!
//! - **Error handling**: Errors with codes, context, and recovery suggestions
//! - **Configuration**: TOML-based matching and logging defaults with validation
//!
//! # Example
//!
//! ```rust,no_run
//! use fuzzmatch_core::config::Config;
//!
//! let config = Config::load(None).expect("Invalid configuration");
//! let options = config.schema.matching.to_rank_options();
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;

pub use error::{Error, ErrorCode, Result, ResultExt};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::{Config, ConfigSchema, LoggingConfig, MatchingConfig};
    pub use crate::error::{exit_codes, Error, ErrorCode, Result, ResultExt};
}
