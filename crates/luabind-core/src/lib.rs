//! luabind Core
//!
//! Shared error and configuration types for the luabind binding pipeline.

pub mod config;
pub mod error;

pub use config::{Config, PatternRule};
pub use error::{Error, Result};
