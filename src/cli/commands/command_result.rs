use crate::issues::{Issue, OrphanIdIssue};

use super::clean::RetiredMessage;

#[derive(Debug)]
pub enum CommandSummary {
    Check,
    Clean(CleanSummary),
    Fmt(FmtSummary),
    Stats(StatsSummary),
    Tr(TrSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct CleanSummary {
    pub orphan_count: usize,
    pub obsolete_count: usize,
    pub file_count: usize,
    pub is_apply: bool,
    /// Messages actually removed (0 in dry-run mode).
    pub applied_count: usize,
    /// Delete operations attempted (0 in dry-run mode).
    pub processed_count: usize,
    /// Targets no longer present when the file was rewritten.
    pub skipped_count: usize,
    pub orphan_issues: Vec<OrphanIdIssue>,
    pub retired_messages: Vec<RetiredMessage>,
}

#[derive(Debug)]
pub struct FmtSummary {
    /// Files whose content differs from the canonical layout, sorted.
    pub changed_files: Vec<String>,
    pub files_checked: usize,
    pub is_apply: bool,
}

/// Coverage of one locale against the primary catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleStats {
    pub locale: String,
    pub file_path: String,
    pub total: usize,
    pub finished: usize,
    pub unfinished: usize,
    pub missing: usize,
}

impl LocaleStats {
    /// Finished messages in percent of the primary messages.
    pub fn coverage(&self) -> f64 {
        if self.total == 0 {
            100.0
        } else {
            self.finished as f64 * 100.0 / self.total as f64
        }
    }
}

#[derive(Debug)]
pub struct StatsSummary {
    pub primary_locale: String,
    /// Live messages of the primary catalog.
    pub primary_count: usize,
    /// One row per non-primary locale, sorted by locale.
    pub locales: Vec<LocaleStats>,
}

#[derive(Debug)]
pub struct TrSummary {
    pub text: String,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
    pub error: Option<String>,
}

/// Result of running tsglot commands
pub struct CommandResult {
    pub summary: CommandSummary,
    pub error_count: usize,
    pub warning_count: usize,
    /// If true, exit code 1 should be returned when error_count > 0.
    pub exit_on_errors: bool,
    /// Changes a dry-run would make (messages to delete, files to rewrite).
    /// A non-zero value exits with code 1 to signal work to be done.
    pub pending_changes: usize,
    /// All issues found during the check.
    /// Only parse errors for commands other than check.
    pub issues: Vec<Issue>,
    /// Number of files that failed to parse.
    pub parse_error_count: usize,
    /// Number of catalog files that were checked, including unparsable ones.
    pub catalog_files_checked: usize,
    /// Number of messages in the loaded catalogs.
    pub messages_checked: usize,
}
