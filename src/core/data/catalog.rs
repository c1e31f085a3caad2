use std::fmt;

/// A parsed Qt Linguist `.ts` document.
///
/// Keeps the document in its original order so that it can be written back
/// without reshuffling contexts or messages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TsFile {
    /// Path the document was read from (empty for in-memory documents).
    pub file_path: String,
    /// `version` attribute of `<TS>` (e.g. "2.1").
    pub version: Option<String>,
    /// `language` attribute of `<TS>` (e.g. "de", "zh_CN").
    pub language: Option<String>,
    /// `sourcelanguage` attribute of `<TS>`.
    pub source_language: Option<String>,
    pub contexts: Vec<Context>,
}

impl TsFile {
    pub fn new(file_path: impl Into<String>) -> Self {
        Self {
            file_path: file_path.into(),
            ..Default::default()
        }
    }

    /// Iterate over all messages together with the name of their context.
    pub fn messages(&self) -> impl Iterator<Item = (&str, &Message)> {
        self.contexts
            .iter()
            .flat_map(|ctx| ctx.messages.iter().map(move |m| (ctx.name.as_str(), m)))
    }

    pub fn message_count(&self) -> usize {
        self.contexts.iter().map(|ctx| ctx.messages.len()).sum()
    }

    /// Remove every message for which `pred` returns true.
    ///
    /// Contexts left without messages are dropped. Returns the number of
    /// removed messages.
    pub fn remove_messages<F>(&mut self, mut pred: F) -> usize
    where
        F: FnMut(&str, &Message) -> bool,
    {
        let mut removed = 0;
        for ctx in &mut self.contexts {
            let before = ctx.messages.len();
            let name = ctx.name.clone();
            ctx.messages.retain(|m| !pred(&name, m));
            removed += before - ctx.messages.len();
        }
        if removed > 0 {
            self.contexts.retain(|ctx| !ctx.messages.is_empty());
        }
        removed
    }
}

/// A `<context>` group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Context {
    /// Context name; empty for id-based catalogs (`<name></name>`).
    pub name: String,
    pub messages: Vec<Message>,
}

impl Context {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            messages: Vec::new(),
        }
    }
}

/// A single `<message>` entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Message {
    /// Stable identifier (`<message id="...">`).
    pub id: Option<String>,
    /// `numerus="yes"`: the translation carries plural forms.
    pub numerus: bool,
    pub locations: Vec<Location>,
    pub source: String,
    pub old_source: Option<String>,
    /// Disambiguation comment.
    pub comment: Option<String>,
    pub old_comment: Option<String>,
    /// Comment for translators extracted from the code (`//:`).
    pub extra_comment: Option<String>,
    pub translator_comment: Option<String>,
    pub translation: Translation,
    /// `<extra-*>` elements, in document order, without the `extra-` prefix.
    pub extras: Vec<(String, String)>,
    /// Line of the `<message>` tag (1-indexed, 0 when unknown).
    pub line: usize,
}

impl Message {
    /// Key identifying this message across locales.
    pub fn key(&self, context_name: &str) -> MessageKey {
        match &self.id {
            Some(id) if !id.is_empty() => MessageKey::Id(id.clone()),
            _ => MessageKey::Text {
                context: context_name.to_string(),
                source: self.source.clone(),
                comment: self.comment.clone().unwrap_or_default(),
            },
        }
    }

    /// True for entries lupdate keeps only for history.
    pub fn is_retired(&self) -> bool {
        self.translation.kind.is_retired()
    }
}

/// Identifies a message across all locale files.
///
/// Id-based catalogs use the `id` attribute; classic catalogs identify a
/// message by its context, source text and disambiguation comment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MessageKey {
    Id(String),
    Text {
        context: String,
        source: String,
        comment: String,
    },
}

impl fmt::Display for MessageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageKey::Id(id) => write!(f, "{}", id),
            MessageKey::Text {
                context,
                source,
                comment,
            } => {
                write!(f, "{}::{}", context, source)?;
                if !comment.is_empty() {
                    write!(f, " ({})", comment)?;
                }
                Ok(())
            }
        }
    }
}

/// `type` attribute of `<translation>`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TranslationType {
    /// No `type` attribute.
    #[default]
    Finished,
    Unfinished,
    /// Source string disappeared (Qt 5 name).
    Vanished,
    /// Source string disappeared (Qt 4 name).
    Obsolete,
}

impl TranslationType {
    pub fn from_attr(value: &str) -> Option<Self> {
        match value {
            "unfinished" => Some(Self::Unfinished),
            "vanished" => Some(Self::Vanished),
            "obsolete" => Some(Self::Obsolete),
            _ => None,
        }
    }

    pub fn as_attr(&self) -> Option<&'static str> {
        match self {
            Self::Finished => None,
            Self::Unfinished => Some("unfinished"),
            Self::Vanished => Some("vanished"),
            Self::Obsolete => Some("obsolete"),
        }
    }

    pub fn is_retired(&self) -> bool {
        matches!(self, Self::Vanished | Self::Obsolete)
    }
}

/// Translated text: a single string or the ordered plural forms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslationText {
    Single(String),
    Numerus(Vec<String>),
}

impl Default for TranslationText {
    fn default() -> Self {
        TranslationText::Single(String::new())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Translation {
    pub kind: TranslationType,
    pub text: TranslationText,
}

impl Translation {
    pub fn single(kind: TranslationType, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: TranslationText::Single(text.into()),
        }
    }

    pub fn numerus(kind: TranslationType, forms: Vec<String>) -> Self {
        Self {
            kind,
            text: TranslationText::Numerus(forms),
        }
    }

    /// True when there is no text at all (every form empty).
    pub fn is_empty(&self) -> bool {
        match &self.text {
            TranslationText::Single(s) => s.is_empty(),
            TranslationText::Numerus(forms) => forms.iter().all(|f| f.is_empty()),
        }
    }

    /// True when the translation can be used at runtime.
    pub fn is_finished(&self) -> bool {
        self.kind == TranslationType::Finished && !self.is_empty()
    }

    /// Plural forms (a single translation counts as one form).
    pub fn forms(&self) -> Vec<&str> {
        match &self.text {
            TranslationText::Single(s) => vec![s.as_str()],
            TranslationText::Numerus(forms) => forms.iter().map(String::as_str).collect(),
        }
    }

    /// Text shown in reports: plural forms joined with " | ".
    pub fn display_text(&self) -> String {
        self.forms().join(" | ")
    }
}

/// Line reference of a `<location>` element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineRef {
    /// `line="94"`
    Absolute(u32),
    /// `line="+94"` or `line="-3"`, relative to the previous location of the same file.
    Relative(i64),
}

impl LineRef {
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if let Some(rest) = value.strip_prefix('+') {
            rest.parse::<i64>().ok().map(LineRef::Relative)
        } else if value.starts_with('-') {
            value.parse::<i64>().ok().map(LineRef::Relative)
        } else {
            value.parse::<u32>().ok().map(LineRef::Absolute)
        }
    }
}

impl fmt::Display for LineRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineRef::Absolute(n) => write!(f, "{}", n),
            LineRef::Relative(n) if *n >= 0 => write!(f, "+{}", n),
            LineRef::Relative(n) => write!(f, "{}", n),
        }
    }
}

/// A `<location>` cross-reference into the application sources.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Location {
    pub filename: Option<String>,
    pub line: Option<LineRef>,
}

/// A location with relative references resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLocation {
    pub filename: Option<String>,
    pub line: Option<u32>,
}

impl fmt::Display for ResolvedLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.filename.as_deref().unwrap_or("<unknown>");
        match self.line {
            Some(line) => write!(f, "{}:{}", name, line),
            None => write!(f, "{}", name),
        }
    }
}

/// Resolve the relative `<location>` references of a whole document.
///
/// A location without `filename` continues the previous location's file; a
/// relative line is added to the last line seen for that file. The returned
/// vectors are parallel to `file.messages()`.
pub fn resolve_locations(file: &TsFile) -> Vec<Vec<ResolvedLocation>> {
    use std::collections::HashMap;

    let mut current_file: Option<String> = None;
    let mut current_line: HashMap<Option<String>, i64> = HashMap::new();

    file.messages()
        .map(|(_, message)| {
            message
                .locations
                .iter()
                .map(|loc| {
                    if loc.filename.is_some() {
                        current_file = loc.filename.clone();
                    }
                    let last = current_line.entry(current_file.clone()).or_insert(0);
                    let line = match loc.line {
                        Some(LineRef::Absolute(n)) => {
                            *last = i64::from(n);
                            Some(n)
                        }
                        Some(LineRef::Relative(delta)) => {
                            *last += delta;
                            u32::try_from(*last).ok()
                        }
                        None => None,
                    };
                    ResolvedLocation {
                        filename: current_file.clone(),
                        line,
                    }
                })
                .collect()
        })
        .collect()
}
