//! Shared rendering utilities and helpers.
//!
//! Cursor positioning, search match highlighting and fixed-width cell
//! fitting used across the components. Everything here works on character
//! indices, never byte indices, so multi-byte titles and company names stay
//! intact.
//!
//! # Example
//!
//! ```
//! use jobfinder::ui::helpers::{fit, substring_ranges};
//!
//! assert_eq!(substring_ranges("Data Engineer, Data Platform", "data"), vec![(0, 4), (15, 19)]);
//! assert_eq!(fit("Kuala Lumpur", 8), "Kuala L…");
//! ```

use crate::ui::theme::Theme;

/// Positions the cursor at a specific row and column (1-indexed).
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Character ranges `(start, end)` of every non-overlapping, case-insensitive
/// occurrence of `query` in `text`.
///
/// `query` is expected already trimmed and lowercased. Returns nothing for an
/// empty query, or when lowercasing changes the length of `text` so the
/// indices would not line up.
#[must_use]
pub fn substring_ranges(text: &str, query: &str) -> Vec<(usize, usize)> {
    if query.is_empty() {
        return Vec::new();
    }

    let lowered: Vec<char> = text.to_lowercase().chars().collect();
    if lowered.len() != text.chars().count() {
        return Vec::new();
    }

    let needle: Vec<char> = query.chars().collect();
    let mut ranges = Vec::new();
    let mut start = 0;
    while start + needle.len() <= lowered.len() {
        if lowered[start..start + needle.len()] == needle[..] {
            ranges.push((start, start + needle.len()));
            start += needle.len();
        } else {
            start += 1;
        }
    }
    ranges
}

/// Truncates or pads `text` to exactly `width` characters.
///
/// Truncated text ends with `…`.
#[must_use]
pub fn fit(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len <= width {
        return format!("{text}{}", " ".repeat(width - len));
    }
    if width == 0 {
        return String::new();
    }
    let mut truncated: String = text.chars().take(width - 1).collect();
    truncated.push('…');
    truncated
}

/// Prints `text` with the given character ranges highlighted.
///
/// Ranges are `(start, end)` character indices, end exclusive, sorted and
/// non-overlapping. Selected rows print plain text so the selection
/// background stays uniform.
pub fn render_highlighted_text(text: &str, ranges: &[(usize, usize)], theme: &Theme, is_selected: bool) {
    if ranges.is_empty() || is_selected {
        print!("{text}");
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len());
        let end = end.min(chars.len());
        if start < current_pos || start >= end {
            continue;
        }

        let normal_section: String = chars[current_pos..start].iter().collect();
        print!("{normal_section}");

        print!("{}", Theme::fg(&theme.colors.match_highlight_fg));
        print!("{}", Theme::bg(&theme.colors.match_highlight_bg));
        let highlighted_section: String = chars[start..end].iter().collect();
        print!("{highlighted_section}");
        print!("{}", Theme::reset());
        print!("{}", Theme::fg(&theme.colors.text_normal));

        current_pos = end;
    }

    if current_pos < chars.len() {
        let remaining: String = chars[current_pos..].iter().collect();
        print!("{remaining}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranges_are_char_indexed() {
        assert_eq!(substring_ranges("Café Barista", "barista"), vec![(5, 12)]);
        assert_eq!(substring_ranges("aaaa", "aa"), vec![(0, 2), (2, 4)]);
        assert!(substring_ranges("Chef", "").is_empty());
        assert!(substring_ranges("Chef", "cook").is_empty());
    }

    #[test]
    fn length_changing_lowercase_disables_highlight() {
        // U+0130 lowercases to two chars.
        assert!(substring_ranges("\u{130}stanbul Office", "office").is_empty());
    }

    #[test]
    fn fit_pads_and_truncates() {
        assert_eq!(fit("RM", 4), "RM  ");
        assert_eq!(fit("Penang", 6), "Penang");
        assert_eq!(fit("Petaling Jaya", 5), "Peta…");
        assert_eq!(fit("abc", 0), "");
    }
}
