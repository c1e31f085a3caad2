//! Low-level file operations produced by actions.

use colored::Colorize;

use crate::{core::MessageContext, utils::truncate_display};

/// Maximum display width of message values in previews.
const MAX_VALUE_WIDTH: usize = 60;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// Remove the `<message>` with this key at this line.
    DeleteMessage {
        context: MessageContext,
        /// Short tag shown in previews (e.g. "orphan").
        label: &'static str,
    },
}

impl Operation {
    pub fn file_path(&self) -> &str {
        match self {
            Operation::DeleteMessage { context, .. } => context.file_path(),
        }
    }

    /// Print one preview line (without the file header).
    pub fn preview(&self) {
        match self {
            Operation::DeleteMessage { context, label } => {
                let value = if context.value.is_empty() {
                    String::new()
                } else {
                    format!(": {}", truncate_display(&context.value, MAX_VALUE_WIDTH))
                };
                println!(
                    "  {} {}{}{}  {}",
                    "-".dimmed(),
                    context.key,
                    format!(" (line {})", context.line()).dimmed(),
                    value.dimmed(),
                    format!("[{}]", label).dimmed()
                );
            }
        }
    }
}
