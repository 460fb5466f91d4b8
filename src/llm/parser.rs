use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

static NUMBERED_ITEM: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+\.\s*").unwrap());

type KeyStrategy = fn(&str) -> Option<&str>;

/// Tried in order; the first that yields a key wins.
const KEY_STRATEGIES: [KeyStrategy; 2] = [numbered_item_key, whole_line_key];

/// Drops repeated list items from model output, keeping the first occurrence of
/// each item and the surviving lines exactly as written. Items are compared by
/// their text without the `N.` prefix; blank items are dropped.
pub fn dedup_numbered_items(text: &str) -> String {
    let mut seen = HashSet::new();

    text.lines()
        .filter(|line| {
            let key = comparison_key(line);
            !key.is_empty() && seen.insert(key.to_string())
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn comparison_key(line: &str) -> &str {
    KEY_STRATEGIES
        .iter()
        .find_map(|strategy| strategy(line))
        .unwrap_or("")
}

fn numbered_item_key(line: &str) -> Option<&str> {
    let trimmed = line.trim();
    NUMBERED_ITEM
        .find(trimmed)
        .map(|prefix| trimmed[prefix.end()..].trim())
}

fn whole_line_key(line: &str) -> Option<&str> {
    Some(line.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_first_occurrence() {
        let input = "1. Fix bug\n2. Add feature\n3. Fix bug";
        assert_eq!(dedup_numbered_items(input), "1. Fix bug\n2. Add feature");
    }

    #[test]
    fn test_duplicates_compared_without_number() {
        let input = "1. Faster search\n2.   Faster search\n10.Faster search\n3. Dark mode";
        assert_eq!(dedup_numbered_items(input), "1. Faster search\n3. Dark mode");
    }

    #[test]
    fn test_unique_list_unchanged() {
        let input = "1. Fix bug\n  2.  Add feature \n3. Remove legacy export";
        assert_eq!(dedup_numbered_items(input), input);
    }

    #[test]
    fn test_idempotent() {
        let inputs = [
            "1. A\n2. B\n3. A\n\n4. C\n5. B",
            "plain line\nplain line\n- bullet\n1. plain line",
            "",
            "\n\n  \n",
            "1.\n2. \n3. Real item",
        ];
        for input in inputs {
            let once = dedup_numbered_items(input);
            assert_eq!(dedup_numbered_items(&once), once, "input: {:?}", input);
        }
    }

    #[test]
    fn test_unnumbered_lines_fall_back_to_whole_line() {
        let input = "Improved login\n  Improved login  \nNew dashboard";
        assert_eq!(dedup_numbered_items(input), "Improved login\nNew dashboard");
    }

    #[test]
    fn test_numbered_and_plain_share_keys() {
        assert_eq!(dedup_numbered_items("1. Improved login\nImproved login"), "1. Improved login");
    }

    #[test]
    fn test_blank_and_empty_items_dropped() {
        assert_eq!(dedup_numbered_items("1. A\n\n2.\n3. B"), "1. A\n3. B");
        assert_eq!(dedup_numbered_items(""), "");
    }
}
