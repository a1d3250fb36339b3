//! seek-core - Core library for Seek
//!
//! This crate contains the debounce machinery and the settings shared by the
//! Seek interfaces. It has no UI dependencies.

pub mod config;
pub mod debounce;
pub mod debounced;
pub mod error;

pub use config::SearchSettings;
pub use debounce::{Debouncer, Scheduled};
pub use debounced::{debounce, Debounced};
pub use error::{Error, Result};
