//! Unfinished translation detection rule.
//!
//! Detects messages that a locale knows about but has not translated yet.

use glob::Pattern;

use crate::{
    core::{AllCatalogs, CheckContext},
    issues::UnfinishedIssue,
    rules::helpers::{live_entries, replica_catalogs, sort_by_context},
};

pub fn check_unfinished_issues(ctx: &CheckContext) -> Vec<UnfinishedIssue> {
    check_unfinished(ctx.primary_locale(), &ctx.catalogs, ctx.ignore_patterns())
}

/// Check for unfinished or empty translations in non-primary locales.
///
/// The primary catalog is skipped: its entries are the source text.
pub fn check_unfinished(
    primary_locale: &str,
    all_catalogs: &AllCatalogs,
    ignore: &[Pattern],
) -> Vec<UnfinishedIssue> {
    let mut issues: Vec<UnfinishedIssue> = replica_catalogs(primary_locale, all_catalogs)
        .into_iter()
        .flat_map(|(locale, catalog)| {
            live_entries(catalog, ignore)
                .into_iter()
                .filter(|(_, entry)| !entry.message.translation.is_finished())
                .map(move |(key, entry)| UnfinishedIssue {
                    context: entry.report_context(
                        catalog.file_path(),
                        key,
                        entry.message.source.clone(),
                    ),
                    locale: locale.to_string(),
                })
        })
        .collect();

    sort_by_context(&mut issues, |i| &i.context);
    issues
}
