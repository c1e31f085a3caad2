//! Placeholder consistency rule.
//!
//! A translation must use the same numbered place markers (`%1`..`%99`) as
//! its source, and a plural translation must keep the `%n` count.

use std::collections::BTreeSet;

use glob::Pattern;

use crate::{
    core::{
        AllCatalogs, CatalogEntry, CheckContext,
        format::{has_count_placeholder, placeholders},
    },
    issues::{PlaceholderIssue, PlaceholderProblem},
    rules::helpers::{display_value, live_entries, sort_by_context},
};

pub fn check_placeholders_issues(ctx: &CheckContext) -> Vec<PlaceholderIssue> {
    check_placeholders(&ctx.catalogs, ctx.ignore_patterns())
}

/// Compare the place markers of every non-empty translation with its source.
///
/// Problems are aggregated over the plural forms of a message, so one
/// message yields at most one issue per [`PlaceholderProblem`] kind.
pub fn check_placeholders(all_catalogs: &AllCatalogs, ignore: &[Pattern]) -> Vec<PlaceholderIssue> {
    let mut issues = Vec::new();

    for catalog in all_catalogs.values() {
        for (key, entry) in live_entries(catalog, ignore) {
            for problem in placeholder_problems(entry) {
                issues.push(PlaceholderIssue {
                    context: entry.report_context(catalog.file_path(), key, display_value(entry)),
                    locale: catalog.locale.clone(),
                    problem,
                });
            }
        }
    }

    sort_by_context(&mut issues, |i| &i.context);
    issues
}

fn placeholder_problems(entry: &CatalogEntry) -> Vec<PlaceholderProblem> {
    let message = &entry.message;
    let forms: Vec<&str> = message
        .translation
        .forms()
        .into_iter()
        .filter(|form| !form.is_empty())
        .collect();
    if forms.is_empty() {
        return Vec::new();
    }

    let expected = placeholders(&message.source);
    let mut missing = BTreeSet::new();
    let mut extra = BTreeSet::new();
    for form in &forms {
        let found = placeholders(form);
        missing.extend(expected.difference(&found).copied());
        extra.extend(found.difference(&expected).copied());
    }

    let mut problems = Vec::new();
    if !missing.is_empty() {
        problems.push(PlaceholderProblem::Missing(missing.into_iter().collect()));
    }
    if !extra.is_empty() {
        problems.push(PlaceholderProblem::Extra(extra.into_iter().collect()));
    }
    if message.numerus
        && has_count_placeholder(&message.source)
        && !forms.iter().any(|form| has_count_placeholder(form))
    {
        problems.push(PlaceholderProblem::MissingCount);
    }
    problems
}
