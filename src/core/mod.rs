//! Catalog engine: data model, `.ts` reading and writing, plural rules,
//! placeholder handling, source id scanning and runtime lookup.

pub mod context;
pub mod data;
pub mod file_scanner;
pub mod format;
pub mod id_usage;
pub mod parsers;
pub mod plural;
pub mod translator;
pub mod writer;

pub use context::CheckContext;
pub use data::*;
pub use id_usage::{IdUsage, SourceIds};
pub use plural::PluralRule;
pub use translator::Translator;
