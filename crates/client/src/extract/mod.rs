//! Stats extraction engine.
//!
//! Turns the best available evidence about a creation into canonical stat
//! rows. Two sources feed it, both unreliable: a JSON payload of variable
//! shape and rendered page text. Strategy precedence, each stage tried only
//! when the previous one produced zero rows:
//!
//! 1. Payload scan ([`scan_payload`]): known container shapes plus a
//!    generic recursive probe over the whole tree.
//! 2. Text heuristic ([`find_platform_block`]): per-platform windows in the
//!    visible text, with "Computer"/"PC" label aliasing for the PC row.
//! 3. A single Unknown-platform placeholder row, so every extraction call
//!    produces at least one row for downstream persistence.
//!
//! The engine is pure and synchronous: no I/O, no shared state, identical
//! inputs give identical row sequences.

pub mod normalize;
pub mod scan;
pub mod text;

pub use normalize::{count_from_value, normalize_platform, parse_count};
pub use scan::scan_payload;
pub use text::find_platform_block;

use creations_core::{Identity, Platform, StatRow, Stats};
use serde_json::Value;

/// Extract stat rows for one creation from whatever evidence is on hand.
///
/// Rows come out in fixed platform order (PC, Xbox) and never mix sources:
/// either all payload-derived, or all text-derived, or the single Unknown
/// placeholder.
pub fn extract_rows(payload: Option<&Value>, text: Option<&str>, identity: &Identity) -> Vec<StatRow> {
    if let Some(payload) = payload {
        let found = scan_payload(payload);
        if !found.is_empty() {
            tracing::debug!(platforms = found.len(), "extracted stats from payload");
            return found.into_iter().map(|(platform, stats)| identity.row(platform, stats)).collect();
        }
    }

    if let Some(text) = text {
        let mut rows = Vec::new();

        // the site renders the PC section as either "Computer" or "PC"
        let pc = find_platform_block(text, "Computer").or_else(|| find_platform_block(text, "PC"));
        if let Some(stats) = pc {
            rows.push(identity.row(Platform::Pc, stats));
        }
        if let Some(stats) = find_platform_block(text, "Xbox") {
            rows.push(identity.row(Platform::Xbox, stats));
        }

        if !rows.is_empty() {
            tracing::debug!(platforms = rows.len(), "extracted stats from rendered text");
            return rows;
        }
    }

    tracing::debug!("no evidence from any source, emitting Unknown placeholder row");
    vec![identity.row(Platform::Unknown, Stats::default())]
}
