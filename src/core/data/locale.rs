use std::{
    collections::{HashMap, hash_map::Entry},
    path::Path,
};

use super::catalog::{Message, MessageKey, TsFile};
use super::location::{MessageContext, MessageLocation};

/// One message of a locale catalog, with the data needed for reporting.
#[derive(Debug, Clone)]
pub struct CatalogEntry {
    /// Name of the `<context>` holding the message.
    pub context_name: String,
    pub message: Message,
}

impl CatalogEntry {
    /// Report context pointing at the `<message>` tag, showing `value`.
    pub fn report_context(
        &self,
        file_path: &str,
        key: &MessageKey,
        value: impl Into<String>,
    ) -> MessageContext {
        MessageContext::new(
            MessageLocation::with_line(file_path, self.message.line),
            key.to_string(),
            value,
        )
    }
}

/// All messages for a single locale.
#[derive(Debug, Clone)]
pub struct LocaleCatalog {
    /// Locale code (e.g., "en", "zh_CN").
    pub locale: String,
    /// The parsed document, in file order.
    pub file: TsFile,
    /// Messages keyed by [`MessageKey`]. The first live occurrence of a key
    /// wins; a vanished/obsolete entry is kept only while no live one exists.
    pub entries: HashMap<MessageKey, CatalogEntry>,
}

/// Catalogs of every locale, keyed by locale code.
pub type AllCatalogs = HashMap<String, LocaleCatalog>;

impl LocaleCatalog {
    /// Build the index of a parsed document.
    ///
    /// The locale is the `language` attribute, or derived from the file name
    /// when the attribute is missing.
    pub fn from_file(file: TsFile) -> Self {
        let locale = file
            .language
            .clone()
            .filter(|l| !l.is_empty())
            .or_else(|| extract_locale(&file.file_path))
            .unwrap_or_default();
        Self::with_locale(locale, file)
    }

    pub fn with_locale(locale: impl Into<String>, file: TsFile) -> Self {
        let mut entries: HashMap<MessageKey, CatalogEntry> = HashMap::new();
        for (context_name, message) in file.messages() {
            let entry = CatalogEntry {
                context_name: context_name.to_string(),
                message: message.clone(),
            };
            match entries.entry(message.key(context_name)) {
                Entry::Vacant(slot) => {
                    slot.insert(entry);
                }
                Entry::Occupied(mut slot) => {
                    if slot.get().message.is_retired() && !message.is_retired() {
                        slot.insert(entry);
                    }
                }
            }
        }
        Self {
            locale: locale.into(),
            file,
            entries,
        }
    }

    pub fn file_path(&self) -> &str {
        &self.file.file_path
    }

    /// Language used to pick the plural rule (`language` attribute or locale).
    pub fn language(&self) -> &str {
        self.file
            .language
            .as_deref()
            .filter(|l| !l.is_empty())
            .unwrap_or(&self.locale)
    }

    pub fn get(&self, key: &MessageKey) -> Option<&CatalogEntry> {
        self.entries.get(key)
    }

    /// Look up an id-based message.
    pub fn get_id(&self, id: &str) -> Option<&CatalogEntry> {
        self.entries.get(&MessageKey::Id(id.to_string()))
    }

    pub fn contains_key(&self, key: &MessageKey) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &MessageKey> {
        self.entries.keys()
    }

    /// Number of distinct keys, including vanished/obsolete entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of keys that are still live (not vanished/obsolete).
    pub fn active_len(&self) -> usize {
        self.entries
            .values()
            .filter(|e| !e.message.is_retired())
            .count()
    }
}

/// Extracts a locale from a catalog file name.
///
/// Qt projects name catalogs `<prefix>_<locale>.ts`; a file without an
/// underscore is taken to be named after its locale.
///
/// Examples:
/// - "libfuoten_de.ts" -> Some("de")
/// - "libfuoten_zh_CN.ts" -> Some("zh_CN")
/// - "en.ts" -> Some("en")
pub fn extract_locale(path: impl AsRef<Path>) -> Option<String> {
    let stem = path.as_ref().file_stem().and_then(|s| s.to_str())?;
    if stem.is_empty() {
        return None;
    }
    let locale = match stem.split_once('_') {
        Some((_, rest)) if !rest.is_empty() => rest,
        _ => stem,
    };
    Some(locale.to_string())
}
