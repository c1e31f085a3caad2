use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::issues::{Issue, Report, ReportLocation};

// ============================================================
// Tool Parameters
// ============================================================

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetConfigParams {
    /// Absolute path of the project root (where .tsglotrc.json lives)
    pub project_root_path: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetLocalesParams {
    /// Absolute path of the project root
    pub project_root_path: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScanOverviewParams {
    /// Absolute path of the project root
    pub project_root_path: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScanIssuesParams {
    /// Absolute path of the project root
    pub project_root_path: String,
    /// Rule ids to include (e.g. "orphan-id", "numerus-forms"). Default: all
    pub rules: Option<Vec<String>>,
    /// Maximum number of items to return (default 50, max 100)
    pub limit: Option<u32>,
    /// Number of items to skip
    pub offset: Option<u32>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TranslateParams {
    /// Absolute path of the project root
    pub project_root_path: String,
    /// Message id (qtTrId)
    pub id: String,
    /// Locale code, e.g. "de" or "zh_CN"
    pub locale: String,
    /// Count for plural messages, substituted for %n
    pub count: Option<i64>,
    /// Values for %1, %2, ... in order
    pub args: Option<Vec<String>>,
}

// ============================================================
// Config Types (get_config)
// ============================================================

/// Configuration DTO for MCP
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigDto {
    /// True if config was loaded from a file, false if using defaults
    pub from_file: bool,
    pub config: ConfigValues,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigValues {
    pub translations_root: String,
    pub primary_locale: String,
    pub source_root: String,
    pub ignores: Vec<String>,
    pub ignore_ids: Vec<String>,
    pub plural_forms: BTreeMap<String, usize>,
}

impl From<crate::config::Config> for ConfigValues {
    fn from(c: crate::config::Config) -> Self {
        Self {
            translations_root: c.translations_root,
            primary_locale: c.primary_locale,
            source_root: c.source_root,
            ignores: c.ignores,
            ignore_ids: c.ignore_ids,
            plural_forms: c.plural_forms,
        }
    }
}

// ============================================================
// Locales Types (get_locales)
// ============================================================

/// Result of get_locales operation
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LocalesResult {
    pub translations_dir: String,
    pub primary_locale: String,
    pub locales: Vec<LocaleInfo>,
    /// Files that could not be loaded
    pub parse_errors: Vec<ParseErrorItem>,
}

/// Information about a single locale
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LocaleInfo {
    pub locale: String,
    pub language: String,
    pub file_path: String,
    /// Live (not vanished/obsolete) messages
    pub message_count: usize,
    /// Plural forms expected for the language, if known
    pub plural_forms: Option<usize>,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ParseErrorItem {
    pub file_path: String,
    pub error: String,
}

// ============================================================
// Overview Types (scan_overview)
// ============================================================

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScanOverviewResult {
    pub primary_locale: String,
    pub catalog_file_count: usize,
    pub message_count: usize,
    pub error_count: usize,
    pub warning_count: usize,
    /// Issue counts per rule (rules without issues are omitted)
    pub rules: Vec<RuleStats>,
    /// Translation coverage per non-primary locale
    pub coverage: Vec<LocaleCoverage>,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RuleStats {
    pub rule: String,
    pub severity: String,
    pub total_count: usize,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LocaleCoverage {
    pub locale: String,
    pub finished: usize,
    pub unfinished: usize,
    pub missing: usize,
    /// Finished messages in percent of the primary messages
    pub coverage: f64,
}

// ============================================================
// Issue Types (scan_issues)
// ============================================================

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct IssuesScanResult {
    pub total_count: usize,
    pub items: Vec<IssueItem>,
    pub pagination: Pagination,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct IssueItem {
    pub rule: String,
    pub severity: String,
    pub file_path: String,
    /// Line of the `<message>` tag, absent for file-level issues
    pub line: Option<usize>,
    /// Message key, absent for file-level issues
    pub key: Option<String>,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl From<&Issue> for IssueItem {
    fn from(issue: &Issue) -> Self {
        let (line, key) = match issue.location() {
            ReportLocation::Message(ctx) => (Some(ctx.line()), Some(ctx.key.clone())),
            ReportLocation::File { .. } => (None, None),
        };
        Self {
            rule: issue.rule().to_string(),
            severity: issue.severity().to_string(),
            file_path: issue.file_path().to_string(),
            line,
            key,
            message: issue.message(),
            details: issue.details(),
            hint: issue.hint().map(str::to_string),
        }
    }
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub offset: usize,
    pub limit: usize,
    pub has_more: bool,
}

// ============================================================
// Translate Types (translate)
// ============================================================

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TranslateResult {
    pub id: String,
    pub locale: String,
    pub text: String,
    /// False when the id is not defined for the locale (text is the id)
    pub found: bool,
    /// True when the translation is unfinished and the source text is used
    pub fallback_to_source: bool,
}
