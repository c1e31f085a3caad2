//! Unused message id detection rule.
//!
//! Detects ids defined in the primary catalog but never referenced in any
//! source file. Classic context/source messages are not id-based and are
//! left alone.

use std::collections::HashSet;

use glob::Pattern;

use crate::{
    core::{CheckContext, LocaleCatalog, MessageKey},
    issues::UnusedIdIssue,
    rules::helpers::{live_entries, sort_by_context},
};

pub fn check_unused_ids_issues(ctx: &CheckContext) -> Vec<UnusedIdIssue> {
    let (Some(sources), Some(primary)) = (ctx.source_ids(), ctx.primary_catalog()) else {
        return Vec::new();
    };
    check_unused_ids(&sources.ids(), primary, ctx.ignore_patterns())
}

/// Check for live primary ids missing from `used_ids`.
///
/// # Arguments
/// * `used_ids` - Every id referenced in source code
/// * `primary` - Catalog of the primary locale
/// * `ignore` - `ignoreIds` patterns
pub fn check_unused_ids(
    used_ids: &HashSet<&str>,
    primary: &LocaleCatalog,
    ignore: &[Pattern],
) -> Vec<UnusedIdIssue> {
    let mut issues: Vec<UnusedIdIssue> = live_entries(primary, ignore)
        .into_iter()
        .filter(|(key, _)| match key {
            MessageKey::Id(id) => !used_ids.contains(id.as_str()),
            MessageKey::Text { .. } => false,
        })
        .map(|(key, entry)| UnusedIdIssue {
            context: entry.report_context(
                primary.file_path(),
                key,
                entry.message.source.clone(),
            ),
        })
        .collect();

    sort_by_context(&mut issues, |i| &i.context);
    issues
}
