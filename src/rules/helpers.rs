//! Helper functions shared by the rule implementations.

use glob::Pattern;

use crate::core::{
    AllCatalogs, CatalogEntry, LocaleCatalog, MessageContext, MessageKey,
    context::is_ignored_key,
};

/// Live (not vanished/obsolete) entries of a catalog that no `ignoreIds`
/// pattern matches, in file order.
pub fn live_entries<'a>(
    catalog: &'a LocaleCatalog,
    ignore: &'a [Pattern],
) -> Vec<(&'a MessageKey, &'a CatalogEntry)> {
    let mut entries: Vec<(&MessageKey, &CatalogEntry)> = catalog
        .entries
        .iter()
        .filter(|(key, entry)| !entry.message.is_retired() && !is_ignored_key(ignore, key))
        .collect();
    entries.sort_by(|a, b| a.1.message.line.cmp(&b.1.message.line).then_with(|| a.0.cmp(b.0)));
    entries
}

/// Catalogs other than the primary one, sorted by locale.
pub fn replica_catalogs<'a>(
    primary_locale: &str,
    all_catalogs: &'a AllCatalogs,
) -> Vec<(&'a str, &'a LocaleCatalog)> {
    let mut catalogs: Vec<(&str, &LocaleCatalog)> = all_catalogs
        .iter()
        .filter(|(locale, _)| *locale != primary_locale)
        .map(|(locale, catalog)| (locale.as_str(), catalog))
        .collect();
    catalogs.sort_by(|a, b| a.0.cmp(b.0));
    catalogs
}

/// True if the primary catalog defines `key` as a live message.
pub fn primary_has(primary: &LocaleCatalog, key: &MessageKey) -> bool {
    primary
        .get(key)
        .is_some_and(|entry| !entry.message.is_retired())
}

/// Sort issues by file path, then line, then key for deterministic output.
pub fn sort_by_context<T>(issues: &mut [T], context: impl Fn(&T) -> &MessageContext) {
    issues.sort_by(|a, b| {
        let (a, b) = (context(a), context(b));
        a.location
            .file_path
            .cmp(&b.location.file_path)
            .then_with(|| a.location.line.cmp(&b.location.line))
            .then_with(|| a.key.cmp(&b.key))
    });
}

/// Text shown for a message in reports: the translation, or the source when
/// nothing has been translated.
pub fn display_value(entry: &CatalogEntry) -> String {
    if entry.message.translation.is_empty() {
        entry.message.source.clone()
    } else {
        entry.message.translation.display_text()
    }
}
