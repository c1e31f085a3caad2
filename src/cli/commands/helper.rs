use super::{CommandResult, CommandSummary};
use crate::{
    core::CheckContext,
    issues::{Issue, Severity},
};

pub fn finish(
    summary: CommandSummary,
    mut issues: Vec<Issue>,
    ctx: Option<&CheckContext>,
    exit_on_errors: bool,
    pending_changes: usize,
) -> CommandResult {
    issues.sort();

    let parse_error_count = issues
        .iter()
        .filter(|i| matches!(i, Issue::ParseError(_)))
        .count();

    let mut error_count = issues
        .iter()
        .filter(|i| i.severity() == Severity::Error)
        .count();
    let warning_count = issues
        .iter()
        .filter(|i| i.severity() == Severity::Warning)
        .count();

    if let CommandSummary::Init(ref summary) = summary
        && summary.error.is_some()
    {
        error_count += 1;
    }

    let (catalog_files_checked, messages_checked) = ctx
        .map(|ctx| {
            (
                ctx.catalogs.len() + ctx.parse_errors.len(),
                ctx.catalogs
                    .values()
                    .map(|c| c.file.message_count())
                    .sum(),
            )
        })
        .unwrap_or_default();

    CommandResult {
        summary,
        error_count,
        warning_count,
        exit_on_errors,
        pending_changes,
        issues,
        parse_error_count,
        catalog_files_checked,
        messages_checked,
    }
}

/// Parse errors of the loaded context as issues.
pub fn parse_error_issues(ctx: &CheckContext) -> Vec<Issue> {
    ctx.parse_errors
        .iter()
        .map(|i| Issue::ParseError(i.clone()))
        .collect()
}
