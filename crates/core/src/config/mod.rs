//! Configuration loading and schema definitions
//!
//! Matching and logging defaults read from `.fuzzmatch.toml`.

mod loader;
mod schema;

pub use loader::Config;
pub use schema::*;
