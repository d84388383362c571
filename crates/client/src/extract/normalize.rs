//! Free-form label and count normalization.
//!
//! Both sources hand us loosely formatted values: platform names like
//! "Windows 11" or "Xbox Series X", counts like "142,488" or the "---"
//! placeholder. These helpers fold them into the closed vocabulary the rest
//! of the engine works with.

use creations_core::Platform;
use serde_json::Value;

/// PC markers, checked before the Xbox marker. A label matching both
/// resolves to PC.
const PC_MARKERS: [&str; 4] = ["computer", "pc", "windows", "steam"];

/// Normalize a free-form platform label.
///
/// Case-insensitive substring match against the known markers. No match
/// returns `None` and the candidate is discarded by the caller; `Unknown`
/// is never produced here, it is reserved for the whole-row fallback.
pub fn normalize_platform(label: Option<&str>) -> Option<Platform> {
    let label = label?.trim().to_lowercase();
    if label.is_empty() {
        return None;
    }
    if PC_MARKERS.iter().any(|m| label.contains(m)) {
        return Some(Platform::Pc);
    }
    if label.contains("xbox") {
        return Some(Platform::Xbox);
    }
    None
}

/// Parse a loosely formatted count.
///
/// Strips every non-digit character and parses whatever digits remain as
/// base 10. A string with no digits at all (including the "---" placeholder)
/// is absent, not zero.
pub fn parse_count(raw: &str) -> Option<u64> {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}

/// [`parse_count`] over a JSON scalar: numbers are coerced to their string
/// form first, so `142488` and `"142,488"` land on the same digits.
pub fn count_from_value(value: &Value) -> Option<u64> {
    match value {
        Value::Null => None,
        Value::String(s) => parse_count(s),
        Value::Number(n) => parse_count(&n.to_string()),
        Value::Bool(_) | Value::Array(_) | Value::Object(_) => None,
    }
}
