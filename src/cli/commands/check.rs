use anyhow::Result;
use clap::ValueEnum;

use super::super::args::CheckCommand;
use super::{
    helper::{finish, parse_error_issues},
    {CommandResult, CommandSummary},
};

use crate::{
    core::CheckContext,
    issues::Issue,
    rules::{
        duplicate::check_duplicate_ids_issues, identical::check_identical_issues,
        missing::check_missing_ids_issues, numerus::check_numerus_forms_issues,
        orphan::check_orphan_ids_issues, placeholder::check_placeholders_issues,
        source_drift::check_source_drift_issues, undefined::check_undefined_ids_issues,
        unfinished::check_unfinished_issues, unused::check_unused_ids_issues,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum CheckRule {
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
}

impl CheckRule {
    pub fn all() -> Vec<CheckRule> {
        vec![
            CheckRule::OrphanId,
            CheckRule::MissingId,
            CheckRule::DuplicateId,
            CheckRule::NumerusForms,
            CheckRule::Placeholder,
            CheckRule::Unfinished,
            CheckRule::Identical,
            CheckRule::SourceDrift,
            CheckRule::UndefinedId,
            CheckRule::UnusedId,
        ]
    }
}

pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let args = &cmd.args;
    let ctx = CheckContext::new(&args.common)?;

    let checks = if cmd.checks.is_empty() {
        CheckRule::all()
    } else {
        cmd.checks.clone()
    };

    let mut all_issues = run_checks(&ctx, &checks);
    all_issues.extend(parse_error_issues(&ctx));

    Ok(finish(CommandSummary::Check, all_issues, Some(&ctx), true, 0))
}

/// Run `checks` against a loaded context.
///
/// Duplicated rules in `checks` run once.
pub fn run_checks(ctx: &CheckContext, checks: &[CheckRule]) -> Vec<Issue> {
    let mut seen = Vec::new();
    let mut all_issues: Vec<Issue> = Vec::new();

    for check in checks {
        if seen.contains(check) {
            continue;
        }
        seen.push(*check);

        match check {
            CheckRule::OrphanId => {
                let issues = check_orphan_ids_issues(ctx);
                all_issues.extend(issues.into_iter().map(Issue::OrphanId));
            }
            CheckRule::MissingId => {
                let issues = check_missing_ids_issues(ctx);
                all_issues.extend(issues.into_iter().map(Issue::MissingId));
            }
            CheckRule::DuplicateId => {
                let issues = check_duplicate_ids_issues(ctx);
                all_issues.extend(issues.into_iter().map(Issue::DuplicateId));
            }
            CheckRule::NumerusForms => {
                let issues = check_numerus_forms_issues(ctx);
                all_issues.extend(issues.into_iter().map(Issue::NumerusForms));
            }
            CheckRule::Placeholder => {
                let issues = check_placeholders_issues(ctx);
                all_issues.extend(issues.into_iter().map(Issue::Placeholder));
            }
            CheckRule::Unfinished => {
                let issues = check_unfinished_issues(ctx);
                all_issues.extend(issues.into_iter().map(Issue::Unfinished));
            }
            CheckRule::Identical => {
                let issues = check_identical_issues(ctx);
                all_issues.extend(issues.into_iter().map(Issue::Identical));
            }
            CheckRule::SourceDrift => {
                let issues = check_source_drift_issues(ctx);
                all_issues.extend(issues.into_iter().map(Issue::SourceDrift));
            }
            CheckRule::UndefinedId => {
                let issues = check_undefined_ids_issues(ctx);
                all_issues.extend(issues.into_iter().map(Issue::UndefinedId));
            }
            CheckRule::UnusedId => {
                let issues = check_unused_ids_issues(ctx);
                all_issues.extend(issues.into_iter().map(Issue::UnusedId));
            }
        }
    }

    all_issues
}
