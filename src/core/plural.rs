//! Plural rules used to select `<numerusform>` entries.
//!
//! Qt orders the numerus forms of a translation by the language's plural
//! rule; a rule fixes how many forms a translation must carry and which form
//! a given count picks.

use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluralRule {
    /// A single form for every count (Chinese, Japanese, ...).
    NoPlural,
    /// `1` / everything else (English, German, ...).
    OneOther,
    /// `0, 1` / everything else (French, Brazilian Portuguese).
    ZeroOneOther,
    /// Russian, Ukrainian, Belarusian, Serbian, Croatian, Bosnian.
    EastSlavic,
    Polish,
    /// Czech and Slovak.
    CzechSlovak,
    Lithuanian,
    Latvian,
    Romanian,
    Slovenian,
    /// Icelandic and Macedonian: numbers ending in 1 (except 11) / everything else.
    Icelandic,
    Irish,
    Arabic,
}

const NO_PLURAL: &[&str] = &[
    "bo", "fa", "hu", "id", "ja", "jv", "ka", "km", "ko", "lo", "ms", "my", "su", "th", "tr",
    "vi", "yo", "zh",
];

const ONE_OTHER: &[&str] = &[
    "af", "bg", "bn", "ca", "da", "de", "el", "en", "eo", "es", "et", "eu", "fi", "fo", "fy",
    "gl", "gu", "he", "hi", "it", "kk", "kn", "ml", "mn", "mr", "nb", "ne", "nl", "nn", "no",
    "pa", "pt", "sq", "sv", "sw", "ta", "te", "ur", "zu",
];

const ZERO_ONE_OTHER: &[&str] = &["ak", "am", "br", "fil", "fr", "ln", "mg", "tl", "wa"];

impl PluralRule {
    /// Rule for a language code such as `de`, `zh_CN` or `pt-BR`.
    ///
    /// Returns `None` for languages without a known rule.
    pub fn for_language(code: &str) -> Option<Self> {
        let normalized = code.trim().replace('-', "_").to_ascii_lowercase();
        if normalized == "pt_br" {
            return Some(Self::ZeroOneOther);
        }

        let language = normalized.split('_').next().unwrap_or_default();
        if NO_PLURAL.contains(&language) {
            return Some(Self::NoPlural);
        }
        if ONE_OTHER.contains(&language) {
            return Some(Self::OneOther);
        }
        if ZERO_ONE_OTHER.contains(&language) {
            return Some(Self::ZeroOneOther);
        }

        let rule = match language {
            "ru" | "uk" | "be" | "sr" | "hr" | "bs" => Self::EastSlavic,
            "pl" => Self::Polish,
            "cs" | "sk" => Self::CzechSlovak,
            "lt" => Self::Lithuanian,
            "lv" => Self::Latvian,
            "ro" | "mo" => Self::Romanian,
            "sl" => Self::Slovenian,
            "is" | "mk" => Self::Icelandic,
            "ga" => Self::Irish,
            "ar" => Self::Arabic,
            _ => return None,
        };
        Some(rule)
    }

    /// Number of `<numerusform>` entries a translation must carry.
    pub fn form_count(&self) -> usize {
        match self {
            Self::NoPlural => 1,
            Self::OneOther | Self::ZeroOneOther | Self::Icelandic => 2,
            Self::EastSlavic
            | Self::Polish
            | Self::CzechSlovak
            | Self::Lithuanian
            | Self::Latvian
            | Self::Romanian => 3,
            Self::Slovenian => 4,
            Self::Irish => 5,
            Self::Arabic => 6,
        }
    }

    /// Index of the form used for `n`. Negative counts use their absolute value.
    pub fn form_index(&self, n: i64) -> usize {
        let n = n.unsigned_abs();
        let n10 = n % 10;
        let n100 = n % 100;

        match self {
            Self::NoPlural => 0,
            Self::OneOther => usize::from(n != 1),
            Self::ZeroOneOther => usize::from(n > 1),
            Self::EastSlavic => {
                if n10 == 1 && n100 != 11 {
                    0
                } else if (2..=4).contains(&n10) && !(12..=14).contains(&n100) {
                    1
                } else {
                    2
                }
            }
            Self::Polish => {
                if n == 1 {
                    0
                } else if (2..=4).contains(&n10) && !(12..=14).contains(&n100) {
                    1
                } else {
                    2
                }
            }
            Self::CzechSlovak => match n {
                1 => 0,
                2..=4 => 1,
                _ => 2,
            },
            Self::Lithuanian => {
                if n10 == 1 && n100 != 11 {
                    0
                } else if n10 >= 2 && !(10..20).contains(&n100) {
                    1
                } else {
                    2
                }
            }
            Self::Latvian => {
                if n10 == 1 && n100 != 11 {
                    0
                } else if n != 0 {
                    1
                } else {
                    2
                }
            }
            Self::Romanian => {
                if n == 1 {
                    0
                } else if n == 0 || (1..20).contains(&n100) {
                    1
                } else {
                    2
                }
            }
            Self::Slovenian => match n100 {
                1 => 0,
                2 => 1,
                3 | 4 => 2,
                _ => 3,
            },
            Self::Icelandic => usize::from(!(n10 == 1 && n100 != 11)),
            Self::Irish => match n {
                1 => 0,
                2 => 1,
                3..=6 => 2,
                7..=10 => 3,
                _ => 4,
            },
            Self::Arabic => match n {
                0 => 0,
                1 => 1,
                2 => 2,
                _ if (3..=10).contains(&n100) => 3,
                _ if n100 >= 11 => 4,
                _ => 5,
            },
        }
    }
}

/// Expected number of plural forms for `language`.
///
/// A `pluralForms` override for the full code (`zh_CN`) or its language part
/// (`zh`) takes precedence over the built-in rule.
pub fn expected_form_count(language: &str, overrides: &BTreeMap<String, usize>) -> Option<usize> {
    let base = language.split(['_', '-']).next().unwrap_or(language);
    overrides
        .get(language)
        .or_else(|| overrides.get(base))
        .copied()
        .or_else(|| PluralRule::for_language(language).map(|rule| rule.form_count()))
}
