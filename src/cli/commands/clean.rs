use std::collections::HashSet;

use anyhow::{Result, bail};
use colored::Colorize;

use super::super::{
    actions::{Action, ActionStats, DeleteMessage, execute_operations},
    args::{CleanCommand, CleanRule},
    report::FAILURE_MARK,
};
use super::helper::finish;
use super::{CleanSummary, CommandResult, CommandSummary};
use crate::{
    core::{CheckContext, MessageContext, MessageLocation},
    issues::OrphanIdIssue,
    rules::{helpers::display_value, orphan::check_orphan_ids_issues},
};

/// A vanished or obsolete entry that `clean` can delete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetiredMessage {
    pub context: MessageContext,
    pub locale: String,
}

impl CleanRule {
    pub fn all() -> HashSet<Self> {
        [Self::Orphan, Self::Obsolete].into_iter().collect()
    }
}

pub fn clean(cmd: CleanCommand) -> Result<CommandResult> {
    let args = &cmd.args;
    let ctx = CheckContext::new(&args.common)?;
    let apply = args.apply;

    if !ctx.parse_errors.is_empty() {
        bail!(
            "{} {}, {} file(s) could not be parsed.\n\
             Run `tsglot check -v` to see details and fix them.",
            FAILURE_MARK,
            "Cannot clean".red().bold(),
            ctx.parse_errors.len()
        );
    }

    let rules = if args.rules.is_empty() {
        CleanRule::all()
    } else {
        args.rules.iter().copied().collect()
    };

    let orphan_issues: Vec<OrphanIdIssue> = if rules.contains(&CleanRule::Orphan) {
        check_orphan_ids_issues(&ctx)
    } else {
        Vec::new()
    };
    let retired_messages: Vec<RetiredMessage> = if rules.contains(&CleanRule::Obsolete) {
        collect_retired_messages(&ctx)
    } else {
        Vec::new()
    };

    let orphan_count = orphan_issues.len();
    let obsolete_count = retired_messages.len();

    let (file_count, stats) = if apply {
        // One pass per file: deletions are matched by line number
        let mut ops = DeleteMessage::to_operations(&orphan_issues);
        ops.extend(DeleteMessage::to_operations(&retired_messages));
        let stats = execute_operations(&ops)?;
        (stats.files_modified, stats)
    } else {
        let mut files: HashSet<&str> = HashSet::new();
        files.extend(orphan_issues.iter().map(|i| i.context.file_path()));
        files.extend(retired_messages.iter().map(|r| r.context.file_path()));
        (files.len(), ActionStats::default())
    };

    let pending_changes = if apply {
        0
    } else {
        orphan_count + obsolete_count
    };

    Ok(finish(
        CommandSummary::Clean(CleanSummary {
            orphan_count,
            obsolete_count,
            file_count,
            is_apply: apply,
            applied_count: stats.changes_applied,
            processed_count: stats.processed,
            skipped_count: stats.skipped,
            orphan_issues,
            retired_messages,
        }),
        Vec::new(),
        Some(&ctx),
        false,
        pending_changes,
    ))
}

/// Vanished and obsolete entries of every catalog, primary included.
///
/// Walks the documents instead of the key index so that repeated retired
/// entries are all collected.
pub fn collect_retired_messages(ctx: &CheckContext) -> Vec<RetiredMessage> {
    let mut retired = Vec::new();

    for locale in ctx.locales() {
        let Some(catalog) = ctx.catalogs.get(locale) else {
            continue;
        };
        for (context_name, message) in catalog.file.messages() {
            if !message.is_retired() {
                continue;
            }
            let key = message.key(context_name);
            if ctx.is_ignored(&key) {
                continue;
            }
            let value = catalog
                .get(&key)
                .filter(|entry| entry.message.line == message.line)
                .map(display_value)
                .unwrap_or_else(|| message.translation.display_text());
            retired.push(RetiredMessage {
                context: MessageContext::new(
                    MessageLocation::with_line(catalog.file_path(), message.line),
                    key.to_string(),
                    value,
                ),
                locale: locale.to_string(),
            });
        }
    }

    retired
}
