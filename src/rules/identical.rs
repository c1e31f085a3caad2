//! Identical translation detection rule.
//!
//! Detects finished translations that are identical to the primary source,
//! which may indicate that the text was copied instead of translated.
//!
//! Output points to the primary locale file and lists the locales with
//! identical text.

use glob::Pattern;

use crate::{
    core::{AllCatalogs, CheckContext, format::strip_placeholders},
    issues::IdenticalIssue,
    rules::helpers::{live_entries, replica_catalogs, sort_by_context},
    utils::contains_alphabetic,
};

pub fn check_identical_issues(ctx: &CheckContext) -> Vec<IdenticalIssue> {
    check_identical(ctx.primary_locale(), &ctx.catalogs, ctx.ignore_patterns())
}

/// Check for translations equal to the primary source text.
///
/// Sources without letters once place markers are removed (numbers,
/// symbols, a bare `%n`) are skipped. For plural translations any form
/// equal to the source counts.
pub fn check_identical(
    primary_locale: &str,
    all_catalogs: &AllCatalogs,
    ignore: &[Pattern],
) -> Vec<IdenticalIssue> {
    let Some(primary) = all_catalogs.get(primary_locale) else {
        return Vec::new();
    };
    let replicas = replica_catalogs(primary_locale, all_catalogs);

    let mut issues: Vec<IdenticalIssue> = live_entries(primary, ignore)
        .into_iter()
        .filter(|(_, entry)| contains_alphabetic(&strip_placeholders(&entry.message.source)))
        .filter_map(|(key, primary_entry)| {
            let source = primary_entry.message.source.as_str();
            let identical_in: Vec<String> = replicas
                .iter()
                .filter(|(_, catalog)| {
                    catalog.get(key).is_some_and(|entry| {
                        let translation = &entry.message.translation;
                        translation.is_finished()
                            && translation.forms().iter().any(|form| *form == source)
                    })
                })
                .map(|(locale, _)| locale.to_string())
                .collect();
            if identical_in.is_empty() {
                return None;
            }
            Some(IdenticalIssue {
                context: primary_entry.report_context(primary.file_path(), key, source),
                primary_locale: primary_locale.to_string(),
                identical_in,
            })
        })
        .collect();

    sort_by_context(&mut issues, |i| &i.context);
    issues
}
