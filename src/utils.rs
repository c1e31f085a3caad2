//! Common utility functions shared across the codebase.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Checks if the text contains at least one Unicode alphabetic character.
///
/// Returns false for empty strings, pure numbers, or pure symbols.
///
/// # Examples
///
/// ```
/// use tsglot::utils::contains_alphabetic;
///
/// assert!(contains_alphabetic("Hello"));
/// assert!(contains_alphabetic("你好"));
/// assert!(contains_alphabetic("Hello123"));
/// assert!(!contains_alphabetic("123"));
/// assert!(!contains_alphabetic("%1/%2"));
/// assert!(!contains_alphabetic(""));
/// ```
pub fn contains_alphabetic(text: &str) -> bool {
    text.chars().any(|c| c.is_alphabetic())
}

/// Shortens `text` to at most `max_width` terminal columns, ending with `…`.
///
/// Wide characters (CJK) count as two columns. Line breaks are shown as `⏎`
/// so that a value always fits on one report line.
pub fn truncate_display(text: &str, max_width: usize) -> String {
    let single_line = text.replace('\n', "⏎");
    if single_line.width() <= max_width {
        return single_line;
    }

    let mut out = String::new();
    let mut width = 0;
    for ch in single_line.chars() {
        let w = ch.width().unwrap_or(0);
        if width + w + 1 > max_width {
            break;
        }
        out.push(ch);
        width += w;
    }
    out.push('…');
    out
}
