//! Catalog file parsers.
//!
//! - `ts`: Qt Linguist `.ts` XML reader (uses quick-xml)

pub mod ts;

pub use ts::{parse_ts_file, parse_ts_str};
