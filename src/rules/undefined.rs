//! Undefined message id detection rule.
//!
//! Detects ids passed to `qtTrId` (and its QML/no-op variants) that the
//! primary catalog does not define. At runtime such calls show the raw id.

use glob::Pattern;

use crate::{
    core::{
        CheckContext, LocaleCatalog, MessageContext, MessageKey, MessageLocation, SourceIds,
        context::is_ignored_key,
    },
    issues::UndefinedIdIssue,
    rules::helpers::{primary_has, sort_by_context},
};

pub fn check_undefined_ids_issues(ctx: &CheckContext) -> Vec<UndefinedIdIssue> {
    let (Some(sources), Some(primary)) = (ctx.source_ids(), ctx.primary_catalog()) else {
        return Vec::new();
    };
    check_undefined_ids(sources, primary, ctx.ignore_patterns())
}

/// Check every id usage against the primary catalog.
///
/// Each call site is reported, so an id used in three places yields three
/// issues. A vanished/obsolete definition does not count.
pub fn check_undefined_ids(
    sources: &SourceIds,
    primary: &LocaleCatalog,
    ignore: &[Pattern],
) -> Vec<UndefinedIdIssue> {
    let mut issues: Vec<UndefinedIdIssue> = sources
        .usages
        .iter()
        .filter_map(|usage| {
            let key = MessageKey::Id(usage.id.clone());
            if primary_has(primary, &key) || is_ignored_key(ignore, &key) {
                return None;
            }
            Some(UndefinedIdIssue {
                context: MessageContext::new(
                    MessageLocation::new(&usage.file_path, usage.line, usage.col),
                    usage.id.clone(),
                    usage.meta_text.clone().unwrap_or_default(),
                ),
                primary_locale: primary.locale.clone(),
            })
        })
        .collect();

    sort_by_context(&mut issues, |i| &i.context);
    issues
}
