//! Core data types used across all pipeline phases.
//!
//! This module defines the catalog document model and the location types
//! used when reporting issues.
//!
//! ## Module Structure
//!
//! - `catalog`: The `.ts` document model (TsFile, Context, Message, Translation, Location)
//! - `locale`: Indexed catalog of one locale (LocaleCatalog, CatalogEntry)
//! - `location`: Report locations (MessageLocation, MessageContext)

pub mod catalog;
pub mod locale;
pub mod location;

pub use catalog::{
    Context, LineRef, Location, Message, MessageKey, ResolvedLocation, Translation,
    TranslationText, TranslationType, TsFile, resolve_locations,
};
pub use locale::{AllCatalogs, CatalogEntry, LocaleCatalog, extract_locale};
pub use location::{MessageContext, MessageLocation};
