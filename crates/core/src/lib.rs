//! Core types and shared functionality for creations-stats.
//!
//! This crate provides:
//! - The stats data model (platforms, stat triples, canonical rows)
//! - Unified error types
//! - Configuration structures

pub mod config;
pub mod error;
pub mod model;

pub use config::AppConfig;
pub use error::Error;
pub use model::{Identity, Platform, StatRow, Stats};
