//! Action trait definition.
//!
//! Actions convert Issues into Operations. Each Action can be implemented
//! for multiple Issue types, providing type-safe handling.

use std::{
    collections::{BTreeMap, HashSet},
    path::Path,
};

use anyhow::Result;
use colored::Colorize;

use super::operation::Operation;
use crate::core::{parsers::parse_ts_file, writer::write_ts_file};

/// Statistics from running an action.
#[derive(Debug, Clone, Default)]
pub struct ActionStats {
    /// Number of issues processed.
    pub processed: usize,
    /// Number of issues skipped (message no longer in the file).
    pub skipped: usize,
    /// Number of changes actually applied to files.
    pub changes_applied: usize,
    /// Number of files modified.
    pub files_modified: usize,
}

/// Action trait - converts Issues into Operations.
///
/// # Example
///
/// ```ignore
/// // In command code:
/// if apply {
///     execute_operations(&DeleteMessage::to_operations(&issues))?;
/// } else {
///     DeleteMessage::preview(&issues);
/// }
/// ```
pub trait Action<I> {
    /// Convert issues to low-level operations.
    ///
    /// This is the only method that must be implemented.
    fn to_operations(issues: &[I]) -> Vec<Operation>;

    /// Preview the action (dry-run mode), grouped by file.
    fn preview(issues: &[I]) {
        let ops = Self::to_operations(issues);
        preview_operations(&ops);
    }
}

pub(crate) fn preview_operations(ops: &[Operation]) {
    for (file_path, file_ops) in group_by_file(ops) {
        println!("{}:", file_path.blue());
        for op in file_ops {
            op.preview();
        }
        println!();
    }
}

/// Apply operations file by file.
///
/// Each file is parsed once, every targeted message is removed, and the
/// document is written back in canonical layout.
pub fn execute_operations(ops: &[Operation]) -> Result<ActionStats> {
    let mut stats = ActionStats {
        processed: ops.len(),
        ..ActionStats::default()
    };

    for (file_path, file_ops) in group_by_file(ops) {
        let targets: HashSet<(usize, String)> = file_ops
            .iter()
            .map(|op| match op {
                Operation::DeleteMessage { context, .. } => (context.line(), context.key.clone()),
            })
            .collect();

        let path = Path::new(file_path);
        let mut file = parse_ts_file(path)?;
        let removed = file.remove_messages(|context_name, message| {
            targets.contains(&(message.line, message.key(context_name).to_string()))
        });

        if removed > 0 {
            write_ts_file(&file, path)?;
            stats.changes_applied += removed;
            stats.files_modified += 1;
        }
        stats.skipped += file_ops.len().saturating_sub(removed);
    }

    Ok(stats)
}

fn group_by_file(ops: &[Operation]) -> BTreeMap<&str, Vec<&Operation>> {
    let mut grouped: BTreeMap<&str, Vec<&Operation>> = BTreeMap::new();
    for op in ops {
        grouped.entry(op.file_path()).or_default().push(op);
    }
    grouped
}
