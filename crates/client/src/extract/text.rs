//! Heuristic stats extraction from rendered page text.
//!
//! Used only when no structured payload could be obtained. The visible page
//! lists each platform's numbers after its name, so the parser cuts the text
//! into per-platform windows and probes each window for labeled counts.

use creations_core::Stats;
use regex::Regex;

use super::normalize::parse_count;

/// Absent-value placeholder the site renders for counts it does not have.
const PLACEHOLDER: &str = "---";

/// Find the stats block belonging to `label` in rendered page text.
///
/// The window starts just after the first case-insensitive occurrence of
/// `label` and ends at the next platform marker (`Xbox`, `Computer` or `PC`
/// on a word boundary) or end of text. Within the window each of `Likes`,
/// `Bookmarks` and `Plays` is matched against a following digits/commas run
/// or the `---` placeholder; punctuation between label and value is
/// tolerated. Returns `None` when `label` does not occur, and also when all
/// three fields come back absent — a bare label with no parseable numbers is
/// not evidence of the platform's presence.
pub fn find_platform_block(text: &str, label: &str) -> Option<Stats> {
    // regex has no lookahead, so the window terminator is consumed instead;
    // only the captured window is used, so behavior is unchanged
    let pattern = format!(r"(?is){}\s*(.*?)(?:(?:Xbox|Computer|PC)\b|$)", regex::escape(label));
    let window_re = Regex::new(&pattern).expect("valid platform window regex");

    let window = window_re.captures(text)?.get(1)?.as_str();

    let stats = Stats {
        likes: field_after(window, "Likes"),
        bookmarks: field_after(window, "Bookmarks"),
        plays: field_after(window, "Plays"),
    };

    if stats.is_empty() {
        return None;
    }
    Some(stats)
}

/// First digits/commas run or placeholder following `label` in the window.
fn field_after(window: &str, label: &str) -> Option<u64> {
    let pattern = format!(r"(?i){}\W*([\d,]+|---)", label);
    let re = Regex::new(&pattern).expect("valid stat field regex");

    let raw = re.captures(window)?.get(1)?.as_str();
    if raw == PLACEHOLDER {
        return None;
    }
    parse_count(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE_TEXT: &str = "Xbox. Likes. 52. Bookmarks. 683. Plays. 142,488. \
                             Computer. Likes. 16. Bookmarks. 159. Plays. 75,599.";

    #[test]
    fn test_xbox_block() {
        let stats = find_platform_block(PAGE_TEXT, "Xbox").unwrap();
        assert_eq!(stats.likes, Some(52));
        assert_eq!(stats.bookmarks, Some(683));
        assert_eq!(stats.plays, Some(142_488));
    }

    #[test]
    fn test_computer_block_does_not_bleed() {
        let stats = find_platform_block(PAGE_TEXT, "Computer").unwrap();
        assert_eq!(stats.likes, Some(16));
        assert_eq!(stats.bookmarks, Some(159));
        assert_eq!(stats.plays, Some(75_599));
    }

    #[test]
    fn test_label_case_insensitive() {
        let stats = find_platform_block(PAGE_TEXT, "xbox").unwrap();
        assert_eq!(stats.likes, Some(52));
    }

    #[test]
    fn test_missing_label() {
        assert_eq!(find_platform_block(PAGE_TEXT, "PlayStation"), None);
    }

    #[test]
    fn test_placeholder_yields_absent_field() {
        let text = "Xbox. Likes. ---. Bookmarks. 683. Plays. 142,488.";
        let stats = find_platform_block(text, "Xbox").unwrap();
        assert_eq!(stats.likes, None);
        assert_eq!(stats.bookmarks, Some(683));
    }

    #[test]
    fn test_all_placeholders_is_absent_block() {
        let text = "Xbox. Likes. ---. Bookmarks. ---. Plays. ---.";
        assert_eq!(find_platform_block(text, "Xbox"), None);
    }

    #[test]
    fn test_label_with_no_numbers_is_absent() {
        let text = "Xbox is also supported on this creation.";
        assert_eq!(find_platform_block(text, "Xbox"), None);
    }

    #[test]
    fn test_missing_sub_label() {
        let text = "Xbox. Likes. 52. Plays. 142,488. Computer. Likes. 16.";
        let stats = find_platform_block(text, "Xbox").unwrap();
        assert_eq!(stats.likes, Some(52));
        assert_eq!(stats.bookmarks, None);
        assert_eq!(stats.plays, Some(142_488));
    }

    #[test]
    fn test_newline_separated_layout() {
        let text = "Computer\nLikes\n16\nBookmarks\n159\nPlays\n75,599\nXbox\nLikes\n52";
        let stats = find_platform_block(text, "Computer").unwrap();
        assert_eq!(stats.likes, Some(16));
        assert_eq!(stats.bookmarks, Some(159));
        assert_eq!(stats.plays, Some(75_599));
    }

    #[test]
    fn test_pc_alias_label() {
        let text = "PC. Likes. 16. Bookmarks. 159. Plays. 75,599.";
        let stats = find_platform_block(text, "PC").unwrap();
        assert_eq!(stats.plays, Some(75_599));
    }
}
