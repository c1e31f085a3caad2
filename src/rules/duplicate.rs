//! Duplicate message id detection rule.
//!
//! A key must occur at most once per catalog file. The index built at load
//! time keeps only the first live occurrence, so this rule walks the documents.

use std::collections::HashMap;

use glob::Pattern;

use crate::{
    core::{
        AllCatalogs, CheckContext, LocaleCatalog, MessageContext, MessageKey, MessageLocation,
        context::is_ignored_key,
    },
    issues::DuplicateIdIssue,
    rules::helpers::sort_by_context,
};

pub fn check_duplicate_ids_issues(ctx: &CheckContext) -> Vec<DuplicateIdIssue> {
    check_duplicate_ids(&ctx.catalogs, ctx.ignore_patterns())
}

/// Check every catalog for keys defined more than once.
///
/// Each repeated occurrence is reported at its own line and points back at
/// the first definition.
pub fn check_duplicate_ids(all_catalogs: &AllCatalogs, ignore: &[Pattern]) -> Vec<DuplicateIdIssue> {
    let mut issues: Vec<DuplicateIdIssue> = all_catalogs
        .values()
        .flat_map(|catalog| duplicates_in(catalog, ignore))
        .collect();
    sort_by_context(&mut issues, |i| &i.context);
    issues
}

fn duplicates_in(catalog: &LocaleCatalog, ignore: &[Pattern]) -> Vec<DuplicateIdIssue> {
    let mut first_seen: HashMap<MessageKey, usize> = HashMap::new();
    let mut issues = Vec::new();

    for (context_name, message) in catalog.file.messages() {
        if message.is_retired() {
            continue;
        }
        let key = message.key(context_name);
        if is_ignored_key(ignore, &key) {
            continue;
        }
        match first_seen.get(&key) {
            Some(&first_line) => issues.push(DuplicateIdIssue {
                context: MessageContext::new(
                    MessageLocation::with_line(catalog.file_path(), message.line),
                    key.to_string(),
                    message.source.clone(),
                ),
                locale: catalog.locale.clone(),
                first_line,
            }),
            None => {
                first_seen.insert(key, message.line);
            }
        }
    }

    issues
}
