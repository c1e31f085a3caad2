//! Actions for processing catalog issues.
//!
//! Actions convert Issues into Operations and execute them.
//! This module provides a type-safe way to handle different issue types.
//!
//! ## Architecture
//!
//! ```text
//! Issue (problem detected)
//!     ↓
//! Action (Issue → Operation conversion)
//!     ↓
//! Operation (low-level file operation)
//!     ↓
//! execute (file modification)
//! ```
//!
//! ## Actions
//!
//! - [`DeleteMessage`]: Delete `<message>` entries from `.ts` files (clean)

mod delete_message;
mod operation;
mod traits;

pub use delete_message::DeleteMessage;
pub use operation::Operation;
pub use traits::{Action, ActionStats, execute_operations};
