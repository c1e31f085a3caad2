//! Placeholder handling for Qt message strings.
//!
//! Two kinds of place markers appear in catalog texts:
//! - `%n` / `%Ln`: the count of a plural message;
//! - `%1`..`%99` (optionally `%L1`): positional arguments filled by `QString::arg`.

use std::{collections::BTreeSet, sync::LazyLock};

use regex::{Captures, Regex};

static ARG_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"%L?([0-9]{1,2})").unwrap());

static COUNT_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"%L?n").unwrap());

/// Numbered placeholders used in `text`.
pub fn placeholders(text: &str) -> BTreeSet<u8> {
    ARG_REGEX
        .captures_iter(text)
        .filter_map(|caps| caps[1].parse::<u8>().ok())
        .filter(|n| *n >= 1)
        .collect()
}

/// True if `text` contains `%n` or `%Ln`.
pub fn has_count_placeholder(text: &str) -> bool {
    COUNT_REGEX.is_match(text)
}

/// `text` with every place marker removed.
pub fn strip_placeholders(text: &str) -> String {
    let without_count = COUNT_REGEX.replace_all(text, "");
    ARG_REGEX.replace_all(&without_count, "").into_owned()
}

/// Replace `%n` and `%Ln` with `n`.
pub fn substitute_count(template: &str, n: i64) -> String {
    COUNT_REGEX
        .replace_all(template, n.to_string().as_str())
        .into_owned()
}

/// Fill numbered placeholders the way `QString::arg(a1, a2, ...)` does.
///
/// The lowest placeholder number in `template` receives `args[0]`, the next
/// lowest `args[1]`, and so on. Placeholders without an argument are kept.
pub fn substitute_args(template: &str, args: &[String]) -> String {
    if args.is_empty() {
        return template.to_string();
    }

    let numbers: Vec<u8> = placeholders(template).into_iter().collect();
    ARG_REGEX
        .replace_all(template, |caps: &Captures| {
            let value = caps[1].parse::<u8>().ok();
            value
                .and_then(|v| numbers.iter().position(|n| *n == v))
                .and_then(|position| args.get(position))
                .cloned()
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}
