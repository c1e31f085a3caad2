//! Orphan message id detection rule.
//!
//! Detects message ids that exist in non-primary locales but are missing
//! from the primary catalog.

use glob::Pattern;

use crate::{
    core::{AllCatalogs, CheckContext},
    issues::OrphanIdIssue,
    rules::helpers::{display_value, live_entries, primary_has, replica_catalogs, sort_by_context},
};

pub fn check_orphan_ids_issues(ctx: &CheckContext) -> Vec<OrphanIdIssue> {
    check_orphan_ids(ctx.primary_locale(), &ctx.catalogs, ctx.ignore_patterns())
}

/// Check for orphan message ids.
///
/// Every key of a non-primary catalog must exist in the primary catalog.
/// Vanished and obsolete entries are history kept by lupdate and are exempt.
///
/// # Arguments
/// * `primary_locale` - The primary locale code (e.g., "en")
/// * `all_catalogs` - Catalogs of all locales
/// * `ignore` - `ignoreIds` patterns
///
/// # Returns
/// Vector of OrphanIdIssue for keys missing in the primary catalog
pub fn check_orphan_ids(
    primary_locale: &str,
    all_catalogs: &AllCatalogs,
    ignore: &[Pattern],
) -> Vec<OrphanIdIssue> {
    let Some(primary) = all_catalogs.get(primary_locale) else {
        return Vec::new();
    };

    let mut issues: Vec<OrphanIdIssue> = replica_catalogs(primary_locale, all_catalogs)
        .into_iter()
        .flat_map(|(locale, catalog)| {
            live_entries(catalog, ignore)
                .into_iter()
                .filter(move |(key, _)| !primary_has(primary, key))
                .map(move |(key, entry)| OrphanIdIssue {
                    context: entry.report_context(catalog.file_path(), key, display_value(entry)),
                    locale: locale.to_string(),
                })
        })
        .collect();

    sort_by_context(&mut issues, |i| &i.context);
    issues
}
