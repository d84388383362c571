//! Append-only CSV sink for stat rows.
//!
//! The header is written once, when the output file does not exist yet;
//! subsequent runs append rows under the existing header so a single file
//! can accumulate observations across days.

use std::fs::OpenOptions;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use creations_core::{Error, StatRow};

/// Append rows to `path`, creating it (with header) on first use.
pub fn append_rows(path: &Path, rows: &[StatRow]) -> Result<(), Error> {
    let exists = path.exists();

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let mut out = BufWriter::new(file);

    if !exists {
        let header: Vec<String> = StatRow::CSV_HEADER.iter().map(|s| s.to_string()).collect();
        write_row(&mut out, &header)?;
    }

    for row in rows {
        write_row(&mut out, &row.to_record())?;
    }

    out.flush()?;
    Ok(())
}

/// Write a single CSV row with RFC-4180 quoting.
fn write_row<W: Write>(mut w: W, row: &[String]) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first {
            write!(w, ",")?;
        } else {
            first = false;
        }
        if needs_quotes(cell) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{escaped}\"")?;
        } else {
            write!(w, "{cell}")?;
        }
    }
    writeln!(w)
}

fn needs_quotes(field: &str) -> bool {
    field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r')
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use creations_core::{Identity, Platform, Stats};

    fn sample_row() -> StatRow {
        let identity = Identity {
            date: NaiveDate::from_ymd_opt(2025, 1, 20).unwrap(),
            creation_id: "0f9e8d7c-6b5a-4948-b3a2-1c0d9e8f7a6b".to_string(),
            slug: "test-creation".to_string(),
            url: "https://creations.example.net/details/0f9e8d7c-6b5a-4948-b3a2-1c0d9e8f7a6b/test-creation"
                .to_string(),
        };
        identity.row(Platform::Xbox, Stats { likes: Some(52), bookmarks: Some(683), plays: Some(142_488) })
    }

    #[test]
    fn test_write_row_plain() {
        let mut buf = Vec::new();
        write_row(&mut buf, &["a".to_string(), "b".to_string()]).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "a,b\n");
    }

    #[test]
    fn test_write_row_quoting() {
        let mut buf = Vec::new();
        write_row(&mut buf, &["with,comma".to_string(), "with\"quote".to_string()]).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "\"with,comma\",\"with\"\"quote\"\n");
    }

    #[test]
    fn test_header_written_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stats.csv");

        append_rows(&path, &[sample_row()]).unwrap();
        append_rows(&path, &[sample_row()]).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "date,creation_id,slug,platform,plays,likes,bookmarks,url");
        assert_eq!(lines[1], lines[2]);
        assert!(lines[1].starts_with("2025-01-20,0f9e8d7c"));
    }

    #[test]
    fn test_absent_counts_are_empty_cells() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stats.csv");

        let identity = Identity {
            date: NaiveDate::from_ymd_opt(2025, 1, 20).unwrap(),
            creation_id: "0f9e8d7c-6b5a-4948-b3a2-1c0d9e8f7a6b".to_string(),
            slug: "s".to_string(),
            url: "https://creations.example.net/x".to_string(),
        };
        let row = identity.row(Platform::Unknown, Stats::default());
        append_rows(&path, &[row]).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let data = contents.lines().nth(1).unwrap();
        assert!(data.contains("Unknown,,,,"));
    }
}
