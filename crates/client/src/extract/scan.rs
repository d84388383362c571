//! Per-platform stats discovery inside an arbitrary JSON payload.
//!
//! The API response has no stable schema, so discovery is layered: a
//! known-shape pass over the container keys the API has been observed to
//! use, then a generic depth-first walk over the whole tree that probes
//! every object for platform-and-stats-looking fields. Both passes write
//! into the same platform-keyed map, so a later hit for the same platform
//! overwrites an earlier one. The walk trades precision for recall: an
//! unrelated node with matching field names can clobber a known-shape hit,
//! and on a well-formed payload both passes agree anyway.

use std::collections::BTreeMap;

use creations_core::{Platform, Stats};
use serde_json::{Map, Value};

use super::normalize::{count_from_value, normalize_platform};

/// Top-level keys the API uses for platform-stat containers.
const CONTAINER_KEYS: [&str; 4] = ["platformStats", "statsByPlatform", "platforms", "stats"];

/// Keys naming the platform inside a stat object, in precedence order.
const PLATFORM_KEYS: [&str; 5] = ["platform", "platformName", "hardware", "name", "code"];

const LIKE_KEYS: [&str; 3] = ["likes", "likeCount", "totalLikes"];
const BOOKMARK_KEYS: [&str; 4] = ["bookmarks", "bookmarkCount", "favoriteCount", "favorites"];
const PLAY_KEYS: [&str; 5] = ["plays", "playCount", "totalPlays", "uses", "downloadCount"];

/// Scan a payload for per-platform stats.
///
/// Returns at most one entry per platform; the `BTreeMap` keyed by
/// [`Platform`] fixes the read-out order to PC then Xbox regardless of
/// discovery order. Candidates whose three stat fields are all absent are
/// discarded even when their platform label matched.
pub fn scan_payload(payload: &Value) -> BTreeMap<Platform, Stats> {
    let mut found = BTreeMap::new();

    if let Value::Object(map) = payload {
        for key in CONTAINER_KEYS {
            match map.get(key) {
                Some(Value::Array(items)) => {
                    for item in items {
                        if let Value::Object(obj) = item {
                            put(&mut found, platform_of(obj), stats_of(obj));
                        }
                    }
                }
                Some(Value::Object(entries)) => {
                    // keyed-collection form: platform name -> stats object
                    for (name, value) in entries {
                        let stats = match value {
                            Value::Object(obj) => stats_from(obj),
                            _ => Stats::default(),
                        };
                        put(&mut found, normalize_platform(Some(name.as_str())), stats);
                    }
                }
                _ => {}
            }
        }
    }

    walk(payload, &mut found);

    found
}

/// Record a candidate. Only recognized platforms with at least one present
/// stat field survive; last writer wins per platform.
fn put(found: &mut BTreeMap<Platform, Stats>, platform: Option<Platform>, stats: Stats) {
    let Some(platform) = platform else {
        return;
    };
    if stats.is_empty() {
        return;
    }
    found.insert(platform, stats);
}

/// Normalize an object's platform indicator, probing the known key names in
/// order and taking the first non-null string.
fn platform_of(obj: &Map<String, Value>) -> Option<Platform> {
    let label = PLATFORM_KEYS
        .iter()
        .find_map(|key| obj.get(*key).and_then(Value::as_str).filter(|s| !s.is_empty()))?;
    normalize_platform(Some(label))
}

/// Extract stats for an object, preferring its nested `stats` sub-object
/// when present.
fn stats_of(obj: &Map<String, Value>) -> Stats {
    match obj.get("stats") {
        Some(Value::Object(stats)) => stats_from(stats),
        _ => stats_from(obj),
    }
}

/// Probe an object for the three stat fields; per field, the first key that
/// parses to a count wins.
fn stats_from(obj: &Map<String, Value>) -> Stats {
    Stats {
        likes: first_count(obj, &LIKE_KEYS),
        bookmarks: first_count(obj, &BOOKMARK_KEYS),
        plays: first_count(obj, &PLAY_KEYS),
    }
}

fn first_count(obj: &Map<String, Value>, keys: &[&str]) -> Option<u64> {
    keys.iter().find_map(|key| obj.get(*key).and_then(count_from_value))
}

/// Generic recursive pass: probe every object node in the tree, regardless
/// of what the known-shape pass found.
fn walk(node: &Value, found: &mut BTreeMap<Platform, Stats>) {
    match node {
        Value::Object(obj) => {
            put(found, platform_of(obj), stats_of(obj));
            for child in obj.values() {
                walk(child, found);
            }
        }
        Value::Array(items) => {
            for child in items {
                walk(child, found);
            }
        }
        _ => {}
    }
}
