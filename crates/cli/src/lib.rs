//! CLI utilities for fuzzmatch
//!
//! Provides shared CLI functionality:
//! - Status messages
//! - Score formatting and bars

#![warn(missing_docs)]

pub mod output;
