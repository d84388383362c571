//! Data model for creation engagement stats.
//!
//! A single extraction run produces at most one [`StatRow`] per platform.
//! The derived ordering on [`Platform`] (PC before Xbox) is what gives row
//! sets their fixed output order when collected through a `BTreeMap`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Hardware/storefront context for a stat row.
///
/// `Unknown` is only ever emitted as the whole-row fallback when no platform
/// could be extracted from any source; per-candidate normalization failures
/// discard the candidate instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Platform {
    #[serde(rename = "PC")]
    Pc,
    Xbox,
    Unknown,
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Platform::Pc => "PC",
            Platform::Xbox => "Xbox",
            Platform::Unknown => "Unknown",
        };
        f.write_str(s)
    }
}

/// The (likes, bookmarks, plays) triple for one platform.
///
/// Each field is independently optional: absent is not zero, it means the
/// source carried no parseable value for that field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub likes: Option<u64>,
    pub bookmarks: Option<u64>,
    pub plays: Option<u64>,
}

impl Stats {
    /// True when all three fields are absent. Empty stats are never evidence
    /// of a platform's presence and are discarded by every extraction stage.
    pub fn is_empty(&self) -> bool {
        self.likes.is_none() && self.bookmarks.is_none() && self.plays.is_none()
    }
}

/// Identity fields for one extraction run, supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Calendar date of the observation.
    pub date: NaiveDate,
    /// Stable 36-character hex-and-hyphen creation token.
    pub creation_id: String,
    /// Human-readable identifier from the URL path.
    pub slug: String,
    /// Source locator the stats were scraped from.
    pub url: String,
}

impl Identity {
    /// Attach this identity to a platform's stats, producing a terminal row.
    pub fn row(&self, platform: Platform, stats: Stats) -> StatRow {
        StatRow {
            date: self.date,
            creation_id: self.creation_id.clone(),
            slug: self.slug.clone(),
            platform,
            plays: stats.plays,
            likes: stats.likes,
            bookmarks: stats.bookmarks,
            url: self.url.clone(),
        }
    }
}

/// One observation of a creation's stats on one platform.
///
/// Field order matches the CSV column order exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatRow {
    pub date: NaiveDate,
    pub creation_id: String,
    pub slug: String,
    pub platform: Platform,
    pub plays: Option<u64>,
    pub likes: Option<u64>,
    pub bookmarks: Option<u64>,
    pub url: String,
}

impl StatRow {
    /// CSV header, in canonical column order.
    pub const CSV_HEADER: [&'static str; 8] =
        ["date", "creation_id", "slug", "platform", "plays", "likes", "bookmarks", "url"];

    /// Render the row as CSV cells in header order. Absent counts become
    /// empty cells.
    pub fn to_record(&self) -> Vec<String> {
        fn cell(n: Option<u64>) -> String {
            n.map(|v| v.to_string()).unwrap_or_default()
        }

        vec![
            self.date.format("%Y-%m-%d").to_string(),
            self.creation_id.clone(),
            self.slug.clone(),
            self.platform.to_string(),
            cell(self.plays),
            cell(self.likes),
            cell(self.bookmarks),
            self.url.clone(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity() -> Identity {
        Identity {
            date: NaiveDate::from_ymd_opt(2025, 1, 20).unwrap(),
            creation_id: "0f9e8d7c-6b5a-4948-b3a2-1c0d9e8f7a6b".to_string(),
            slug: "test-creation".to_string(),
            url: "https://creations.example.net/en/details/0f9e8d7c-6b5a-4948-b3a2-1c0d9e8f7a6b/test-creation".to_string(),
        }
    }

    #[test]
    fn test_platform_ordering() {
        assert!(Platform::Pc < Platform::Xbox);
        assert!(Platform::Xbox < Platform::Unknown);
    }

    #[test]
    fn test_platform_display() {
        assert_eq!(Platform::Pc.to_string(), "PC");
        assert_eq!(Platform::Xbox.to_string(), "Xbox");
        assert_eq!(Platform::Unknown.to_string(), "Unknown");
    }

    #[test]
    fn test_stats_is_empty() {
        assert!(Stats::default().is_empty());
        assert!(!Stats { likes: Some(0), ..Default::default() }.is_empty());
    }

    #[test]
    fn test_row_field_mapping() {
        let stats = Stats { likes: Some(52), bookmarks: Some(683), plays: Some(142_488) };
        let row = identity().row(Platform::Xbox, stats);

        assert_eq!(row.platform, Platform::Xbox);
        assert_eq!(row.likes, Some(52));
        assert_eq!(row.bookmarks, Some(683));
        assert_eq!(row.plays, Some(142_488));
        assert_eq!(row.slug, "test-creation");
    }

    #[test]
    fn test_record_column_order() {
        let stats = Stats { likes: Some(16), bookmarks: None, plays: Some(75_599) };
        let row = identity().row(Platform::Pc, stats);
        let record = row.to_record();

        assert_eq!(record.len(), StatRow::CSV_HEADER.len());
        assert_eq!(record[0], "2025-01-20");
        assert_eq!(record[1], "0f9e8d7c-6b5a-4948-b3a2-1c0d9e8f7a6b");
        assert_eq!(record[2], "test-creation");
        assert_eq!(record[3], "PC");
        assert_eq!(record[4], "75599");
        assert_eq!(record[5], "16");
        assert_eq!(record[6], "");
        assert!(record[7].starts_with("https://"));
    }
}
