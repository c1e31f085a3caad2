//! Runtime message lookup.

use crate::core::{
    data::{LocaleCatalog, Message, TranslationText},
    format::{substitute_args, substitute_count},
    plural::PluralRule,
};

/// Looks up id-based messages in one locale catalog.
///
/// Unfinished and empty translations fall back to the source text; unknown
/// ids are returned unchanged, as `qtTrId` does.
pub struct Translator<'a> {
    catalog: &'a LocaleCatalog,
    rule: PluralRule,
}

impl<'a> Translator<'a> {
    pub fn new(catalog: &'a LocaleCatalog) -> Self {
        let rule = PluralRule::for_language(catalog.language()).unwrap_or(PluralRule::OneOther);
        Self { catalog, rule }
    }

    pub fn locale(&self) -> &str {
        &self.catalog.locale
    }

    pub fn plural_rule(&self) -> PluralRule {
        self.rule
    }

    /// Message for `id`, ignoring vanished and obsolete entries.
    pub fn lookup(&self, id: &str) -> Option<&'a Message> {
        self.catalog
            .get_id(id)
            .map(|entry| &entry.message)
            .filter(|message| !message.is_retired())
    }

    /// Translated text of `id`, with `%n` replaced by `n` when given.
    pub fn translate(&self, id: &str, n: Option<i64>) -> String {
        let Some(message) = self.lookup(id) else {
            return id.to_string();
        };

        let text = if message.translation.is_finished() {
            match &message.translation.text {
                TranslationText::Single(text) => text.as_str(),
                TranslationText::Numerus(forms) => {
                    let index = self.rule.form_index(n.unwrap_or(1));
                    // Short form lists fall back to the last form
                    forms
                        .get(index)
                        .or_else(|| forms.last())
                        .map(String::as_str)
                        .filter(|form| !form.is_empty())
                        .unwrap_or(message.source.as_str())
                }
            }
        } else {
            message.source.as_str()
        };

        match n {
            Some(n) => substitute_count(text, n),
            None => text.to_string(),
        }
    }

    /// [`Translator::translate`] followed by `%1`..`%99` substitution.
    pub fn translate_with_args(&self, id: &str, n: Option<i64>, args: &[String]) -> String {
        substitute_args(&self.translate(id, n), args)
    }
}
