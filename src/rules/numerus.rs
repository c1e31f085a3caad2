//! Plural form count rule.
//!
//! Every `numerus="yes"` message must carry exactly as many `<numerusform>`
//! entries as the plural rule of the catalog language requires.

use std::collections::BTreeMap;

use glob::Pattern;

use crate::{
    core::{
        AllCatalogs, CatalogEntry, CheckContext, TranslationText, TranslationType,
        plural::expected_form_count,
    },
    issues::NumerusFormsIssue,
    rules::helpers::{display_value, live_entries, sort_by_context},
};

pub fn check_numerus_forms_issues(ctx: &CheckContext) -> Vec<NumerusFormsIssue> {
    check_numerus_forms(&ctx.catalogs, &ctx.config.plural_forms, ctx.ignore_patterns())
}

/// Check the plural form count of every numerus message.
///
/// # Arguments
/// * `all_catalogs` - Catalogs of all locales
/// * `overrides` - `pluralForms` config (language -> form count)
/// * `ignore` - `ignoreIds` patterns
///
/// Catalogs whose language has no known plural rule and no override are
/// skipped. Messages with no translation text at all are skipped too.
pub fn check_numerus_forms(
    all_catalogs: &AllCatalogs,
    overrides: &BTreeMap<String, usize>,
    ignore: &[Pattern],
) -> Vec<NumerusFormsIssue> {
    let mut issues = Vec::new();

    for catalog in all_catalogs.values() {
        let language = catalog.language();
        let Some(expected) = expected_form_count(language, overrides) else {
            continue;
        };

        for (key, entry) in live_entries(catalog, ignore) {
            let Some(actual) = form_count(entry) else {
                continue;
            };
            if actual != expected {
                issues.push(NumerusFormsIssue {
                    context: entry.report_context(catalog.file_path(), key, display_value(entry)),
                    locale: catalog.locale.clone(),
                    language: language.to_string(),
                    expected,
                    actual,
                });
            }
        }
    }

    sort_by_context(&mut issues, |i| &i.context);
    issues
}

/// Number of plural forms of a numerus message, `None` when not applicable.
///
/// An unfinished translation without any `<numerusform>` has not been
/// started and carries no count.
fn form_count(entry: &CatalogEntry) -> Option<usize> {
    if !entry.message.numerus {
        return None;
    }
    let translation = &entry.message.translation;
    match &translation.text {
        TranslationText::Numerus(forms)
            if forms.is_empty() && translation.kind != TranslationType::Finished =>
        {
            None
        }
        TranslationText::Numerus(forms) => Some(forms.len()),
        TranslationText::Single(text) if text.is_empty() => None,
        TranslationText::Single(_) => Some(1),
    }
}
