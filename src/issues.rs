//! Issue types for catalog analysis results.
//!
//! Each issue is self-contained with all information needed by:
//! - Reporter: to display the issue to users (CLI, MCP)
//! - Action: to fix the issue (delete messages)

use enum_dispatch::enum_dispatch;

use crate::core::MessageContext;

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Rule identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rule {
    OrphanId,
    MissingId,
    DuplicateId,
    NumerusForms,
    Placeholder,
    Unfinished,
    Identical,
    SourceDrift,
    UndefinedId,
    UnusedId,
    ParseError,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::OrphanId => write!(f, "orphan-id"),
            Rule::MissingId => write!(f, "missing-id"),
            Rule::DuplicateId => write!(f, "duplicate-id"),
            Rule::NumerusForms => write!(f, "numerus-forms"),
            Rule::Placeholder => write!(f, "placeholder"),
            Rule::Unfinished => write!(f, "unfinished"),
            Rule::Identical => write!(f, "identical"),
            Rule::SourceDrift => write!(f, "source-drift"),
            Rule::UndefinedId => write!(f, "undefined-id"),
            Rule::UnusedId => write!(f, "unused-id"),
            Rule::ParseError => write!(f, "parse-error"),
        }
    }
}

// ============================================================
// Placeholder problem
// ============================================================

/// How a translation's place markers disagree with its source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaceholderProblem {
    /// Numbered markers of the source absent from the translation.
    Missing(Vec<u8>),
    /// Numbered markers of the translation absent from the source.
    Extra(Vec<u8>),
    /// The source uses `%n` but no plural form does.
    MissingCount,
}

fn format_markers(numbers: &[u8]) -> String {
    numbers
        .iter()
        .map(|n| format!("%{}", n))
        .collect::<Vec<_>>()
        .join(", ")
}

impl std::fmt::Display for PlaceholderProblem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlaceholderProblem::Missing(numbers) => {
                write!(f, "missing {}", format_markers(numbers))
            }
            PlaceholderProblem::Extra(numbers) => {
                write!(f, "unexpected {}", format_markers(numbers))
            }
            PlaceholderProblem::MissingCount => write!(f, "missing %n"),
        }
    }
}

// ============================================================
// Issue Types - Message Files (MessageContext)
// ============================================================

/// Key exists in a non-primary locale but not in the primary catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrphanIdIssue {
    pub context: MessageContext,
    /// The locale where this orphan key exists.
    pub locale: String,
}

impl OrphanIdIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::OrphanId
    }
}

/// Key exists in the primary catalog but is missing in other locales.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingIdIssue {
    /// Location in the primary catalog.
    pub context: MessageContext,
    /// The primary locale code (e.g., "en").
    pub primary_locale: String,
    /// Locales where this key is missing.
    pub missing_in: Vec<String>,
}

impl MissingIdIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::MissingId
    }
}

/// Key defined more than once in the same file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateIdIssue {
    /// Location of the repeated definition.
    pub context: MessageContext,
    pub locale: String,
    /// Line of the first definition.
    pub first_line: usize,
}

impl DuplicateIdIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::DuplicateId
    }
}

/// Plural message with a wrong number of `<numerusform>` entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumerusFormsIssue {
    pub context: MessageContext,
    pub locale: String,
    /// Language whose plural rule fixes the expected count.
    pub language: String,
    pub expected: usize,
    pub actual: usize,
}

impl NumerusFormsIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::NumerusForms
    }
}

/// Translation whose place markers do not match its source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderIssue {
    pub context: MessageContext,
    pub locale: String,
    pub problem: PlaceholderProblem,
}

impl PlaceholderIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::Placeholder
    }
}

/// Key present in a locale, but its translation is unfinished or empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnfinishedIssue {
    pub context: MessageContext,
    pub locale: String,
}

impl UnfinishedIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::Unfinished
    }
}

/// Translation identical to the source text (possibly not translated).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdenticalIssue {
    /// Location in the primary catalog.
    pub context: MessageContext,
    /// The primary locale code (e.g., "en").
    pub primary_locale: String,
    /// Locales where the translation equals the source.
    pub identical_in: Vec<String>,
}

impl IdenticalIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::Identical
    }
}

/// Locale file carries an outdated `<source>` for a key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDriftIssue {
    /// Location in the locale file; `value` is the locale's source.
    pub context: MessageContext,
    pub locale: String,
    /// Source text of the primary catalog.
    pub primary_source: String,
}

impl SourceDriftIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::SourceDrift
    }
}

// ============================================================
// Issue Types - Source Code
// ============================================================

/// Id passed to `qtTrId` in code but not defined in the primary catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndefinedIdIssue {
    /// Location of the call; `value` is the `//%` text, if any.
    pub context: MessageContext,
    /// The primary locale code (e.g., "en").
    pub primary_locale: String,
}

impl UndefinedIdIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::UndefinedId
    }
}

/// Id defined in the primary catalog but never referenced in code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnusedIdIssue {
    /// Location in the primary catalog.
    pub context: MessageContext,
}

impl UnusedIdIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::UnusedId
    }
}

// ============================================================
// Special Issue Types
// ============================================================

/// File could not be loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseErrorIssue {
    pub file_path: String,
    pub error: String,
}

impl ParseErrorIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::ParseError
    }
}

// ============================================================
// Issue Enum
// ============================================================

/// A catalog issue found during analysis.
#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    OrphanId(OrphanIdIssue),
    MissingId(MissingIdIssue),
    DuplicateId(DuplicateIdIssue),
    NumerusForms(NumerusFormsIssue),
    Placeholder(PlaceholderIssue),
    Unfinished(UnfinishedIssue),
    Identical(IdenticalIssue),
    SourceDrift(SourceDriftIssue),
    UndefinedId(UndefinedIdIssue),
    UnusedId(UnusedIdIssue),
    ParseError(ParseErrorIssue),
}

impl Issue {
    pub fn severity(&self) -> Severity {
        self.report_severity()
    }

    pub fn rule(&self) -> Rule {
        self.report_rule()
    }

    /// Catalog file the issue points at.
    pub fn file_path(&self) -> &str {
        match self.location() {
            ReportLocation::Message(ctx) => &ctx.location.file_path,
            ReportLocation::File { path } => path,
        }
    }
}

// ============================================================
// Report Trait (for CLI output)
// ============================================================

/// Location information for report output.
pub enum ReportLocation<'a> {
    /// Message in a catalog file (has key/value).
    Message(&'a MessageContext),
    /// File-level only (for ParseError - no line context).
    File { path: &'a str },
}

/// Trait for types that can be reported to CLI.
///
/// Implemented by all issue types; `enum_dispatch` forwards calls on the
/// `Issue` enum without dynamic dispatch.
#[enum_dispatch]
pub trait Report {
    /// Get the location for this issue.
    fn location(&self) -> ReportLocation<'_>;

    /// Primary message to display (key name, error, etc.).
    fn message(&self) -> String;

    /// Severity level.
    fn report_severity(&self) -> Severity;

    /// Rule identifier.
    fn report_rule(&self) -> Rule;

    /// Optional hint for fixing the issue.
    fn hint(&self) -> Option<&str> {
        None
    }

    /// Optional details for the "= note:" line.
    fn details(&self) -> Option<String> {
        None
    }
}

// ============================================================
// Report Implementations
// ============================================================

impl Report for OrphanIdIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        self.context.key.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn hint(&self) -> Option<&str> {
        Some("remove it with `tsglot clean --rules orphan --apply`")
    }

    fn details(&self) -> Option<String> {
        Some(format!("in {} (\"{}\")", self.locale, self.context.value))
    }
}

impl Report for MissingIdIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        self.context.key.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "(\"{}\") missing in: {}",
            self.context.value,
            self.missing_in.join(", ")
        ))
    }
}

impl Report for DuplicateIdIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        self.context.key.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "in {}, first defined at line {}",
            self.locale, self.first_line
        ))
    }
}

impl Report for NumerusFormsIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        self.context.key.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "{} expects {} plural form{}, found {}",
            self.language,
            self.expected,
            if self.expected == 1 { "" } else { "s" },
            self.actual
        ))
    }
}

impl Report for PlaceholderIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        self.context.key.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "{} in {} (\"{}\")",
            self.problem, self.locale, self.context.value
        ))
    }
}

impl Report for UnfinishedIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        self.context.key.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!("in {} (\"{}\")", self.locale, self.context.value))
    }
}

impl Report for IdenticalIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        self.context.key.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "(\"{}\") identical in: {}",
            self.context.value,
            self.identical_in.join(", ")
        ))
    }
}

impl Report for SourceDriftIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        self.context.key.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn hint(&self) -> Option<&str> {
        Some("run lupdate to refresh the catalog")
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "in {}: \"{}\", primary: \"{}\"",
            self.locale, self.context.value, self.primary_source
        ))
    }
}

impl Report for UndefinedIdIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        self.context.key.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn hint(&self) -> Option<&str> {
        Some("run lupdate to add it to the catalogs")
    }

    fn details(&self) -> Option<String> {
        if self.context.value.is_empty() {
            Some(format!("not defined in {}", self.primary_locale))
        } else {
            Some(format!(
                "(\"{}\") not defined in {}",
                self.context.value, self.primary_locale
            ))
        }
    }
}

impl Report for UnusedIdIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        self.context.key.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!("(\"{}\") never used in code", self.context.value))
    }
}

impl Report for ParseErrorIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::File {
            path: &self.file_path,
        }
    }

    fn message(&self) -> String {
        self.error.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }
}

// ============================================================
// Ordering for Issue (for sorting in reports)
// ============================================================

impl Issue {
    fn sort_line(&self) -> usize {
        match self.location() {
            ReportLocation::Message(ctx) => ctx.location.line,
            ReportLocation::File { .. } => 0,
        }
    }

    fn sort_col(&self) -> usize {
        match self.location() {
            ReportLocation::Message(ctx) => ctx.location.col,
            ReportLocation::File { .. } => 0,
        }
    }
}

impl Ord for Issue {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Sort by: file_path, line, col, rule, message
        self.file_path()
            .cmp(other.file_path())
            .then_with(|| self.sort_line().cmp(&other.sort_line()))
            .then_with(|| self.sort_col().cmp(&other.sort_col()))
            .then_with(|| self.rule().cmp(&other.rule()))
            .then_with(|| self.message().cmp(&other.message()))
    }
}

impl PartialOrd for Issue {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ============================================================
// Tests
// ============================================================
