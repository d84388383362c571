//! Client code for creations-stats.
//!
//! This crate provides the HTTP fetch pipeline and the stats extraction
//! engine shared by the CLI.

pub mod extract;
pub mod fetch;

pub use extract::{extract_rows, find_platform_block, normalize_platform, parse_count, scan_payload};

pub use fetch::{CreationUrl, FetchClient, FetchConfig, parse_creation_url};
