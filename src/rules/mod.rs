//! Rule implementations for tsglot.
//!
//! This module contains pure functions that check catalog properties.
//! Each function takes only the specific inputs it needs (not a full
//! CheckContext) and returns a specific issue type; the `*_issues` wrappers
//! pull those inputs out of a [`CheckContext`](crate::core::CheckContext).
//!
//! ## Module Structure
//!
//! - `helpers`: Shared iteration and sorting helpers
//! - `orphan`: Keys in non-primary locales but not in primary
//! - `missing`: Keys of the primary catalog absent from a locale
//! - `duplicate`: Keys defined twice in one file
//! - `numerus`: Plural form counts
//! - `placeholder`: `%1`..`%99` and `%n` consistency
//! - `unfinished`: Untranslated entries
//! - `identical`: Translations equal to the source text
//! - `source_drift`: Locale sources out of sync with the primary
//! - `undefined`: Ids used in code but absent from the primary catalog
//! - `unused`: Primary ids never used in code

pub mod duplicate;
pub mod helpers;
pub mod identical;
pub mod missing;
pub mod numerus;
pub mod orphan;
pub mod placeholder;
pub mod source_drift;
pub mod undefined;
pub mod unfinished;
pub mod unused;
