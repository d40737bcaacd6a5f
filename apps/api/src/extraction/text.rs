//! Small string helpers shared by the extractors.

use std::collections::HashSet;

/// Returns the slice of `text` covering `radius` bytes either side of
/// `start..end`, widened to the nearest char boundaries.
pub fn context_window(text: &str, start: usize, end: usize, radius: usize) -> &str {
    let mut from = start.saturating_sub(radius);
    while from > 0 && !text.is_char_boundary(from) {
        from -= 1;
    }
    let mut to = end.saturating_add(radius).min(text.len());
    while to < text.len() && !text.is_char_boundary(to) {
        to += 1;
    }
    &text[from..to]
}

/// Capitalises the first letter of every whitespace-separated word.
pub fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Collapses runs of whitespace to a single space and lowercases.
pub fn normalize_key(s: &str) -> String {
    s.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Drops exact duplicates, keeping the first occurrence.
pub fn dedup_preserving_order(items: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}

/// Word-character test used for manual match boundaries.
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_window_clamps_to_text() {
        let text = "MSc in Physics";
        assert_eq!(context_window(text, 0, 3, 50), text);
    }

    #[test]
    fn test_context_window_respects_char_boundaries() {
        let text = "ééééé Bachelor ééééé";
        let start = text.find("Bachelor").unwrap();
        let window = context_window(text, start, start + 8, 3);
        assert!(window.contains("Bachelor"));
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("ruby on rails"), "Ruby On Rails");
        assert_eq!(title_case("FLASK"), "Flask");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_normalize_key_collapses_whitespace() {
        assert_eq!(normalize_key("Machine\n  Learning"), "machine learning");
    }

    #[test]
    fn test_dedup_preserving_order() {
        let items = vec!["b".to_string(), "a".to_string(), "b".to_string()];
        assert_eq!(dedup_preserving_order(items), vec!["b", "a"]);
    }
}
