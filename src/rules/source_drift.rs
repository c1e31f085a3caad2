//! Source drift detection rule.
//!
//! For id-based messages every locale carries a copy of the English source.
//! When the primary source changes and a locale file was not refreshed by
//! lupdate, the copies drift apart and the translation may be outdated.

use glob::Pattern;

use crate::{
    core::{AllCatalogs, CheckContext, MessageKey},
    issues::SourceDriftIssue,
    rules::helpers::{live_entries, replica_catalogs, sort_by_context},
};

pub fn check_source_drift_issues(ctx: &CheckContext) -> Vec<SourceDriftIssue> {
    check_source_drift(ctx.primary_locale(), &ctx.catalogs, ctx.ignore_patterns())
}

/// Check that the `<source>` of id-based messages matches the primary one.
pub fn check_source_drift(
    primary_locale: &str,
    all_catalogs: &AllCatalogs,
    ignore: &[Pattern],
) -> Vec<SourceDriftIssue> {
    let Some(primary) = all_catalogs.get(primary_locale) else {
        return Vec::new();
    };

    let mut issues: Vec<SourceDriftIssue> = replica_catalogs(primary_locale, all_catalogs)
        .into_iter()
        .flat_map(|(locale, catalog)| {
            live_entries(catalog, ignore)
                .into_iter()
                // Text keys include the source, a change there is a new key
                .filter(|(key, _)| matches!(key, MessageKey::Id(_)))
                .filter_map(move |(key, entry)| {
                    let primary_entry = primary.get(key).filter(|e| !e.message.is_retired())?;
                    if primary_entry.message.source == entry.message.source {
                        return None;
                    }
                    Some(SourceDriftIssue {
                        context: entry.report_context(
                            catalog.file_path(),
                            key,
                            entry.message.source.clone(),
                        ),
                        locale: locale.to_string(),
                        primary_source: primary_entry.message.source.clone(),
                    })
                })
        })
        .collect();

    sort_by_context(&mut issues, |i| &i.context);
    issues
}
