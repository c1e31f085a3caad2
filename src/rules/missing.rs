//! Missing message id detection rule.
//!
//! Detects keys of the primary catalog that one or more locales lack.
//!
//! Output format follows the other cross-locale rules:
//! - Points to the primary locale file (source of truth)
//! - Lists the locales missing the key

use glob::Pattern;

use crate::{
    core::{AllCatalogs, CheckContext},
    issues::MissingIdIssue,
    rules::helpers::{live_entries, primary_has, replica_catalogs, sort_by_context},
};

pub fn check_missing_ids_issues(ctx: &CheckContext) -> Vec<MissingIdIssue> {
    check_missing_ids(ctx.primary_locale(), &ctx.catalogs, ctx.ignore_patterns())
}

/// Check for keys of the primary catalog absent from other locales.
///
/// A key that a locale only keeps as vanished/obsolete counts as missing.
/// One issue is reported per key, listing every locale that lacks it.
pub fn check_missing_ids(
    primary_locale: &str,
    all_catalogs: &AllCatalogs,
    ignore: &[Pattern],
) -> Vec<MissingIdIssue> {
    let Some(primary) = all_catalogs.get(primary_locale) else {
        return Vec::new();
    };
    let replicas = replica_catalogs(primary_locale, all_catalogs);

    let mut issues: Vec<MissingIdIssue> = live_entries(primary, ignore)
        .into_iter()
        .filter_map(|(key, entry)| {
            let missing_in: Vec<String> = replicas
                .iter()
                .filter(|(_, catalog)| !primary_has(catalog, key))
                .map(|(locale, _)| locale.to_string())
                .collect();
            if missing_in.is_empty() {
                return None;
            }
            Some(MissingIdIssue {
                context: entry.report_context(
                    primary.file_path(),
                    key,
                    entry.message.source.clone(),
                ),
                primary_locale: primary_locale.to_string(),
                missing_in,
            })
        })
        .collect();

    sort_by_context(&mut issues, |i| &i.context);
    issues
}
