use anyhow::Result;
use glob::Pattern;

use super::super::args::StatsCommand;
use super::helper::{finish, parse_error_issues};
use super::{CommandResult, CommandSummary, LocaleStats, StatsSummary};
use crate::{
    core::{AllCatalogs, CheckContext},
    rules::helpers::{live_entries, primary_has, replica_catalogs},
};

pub fn stats(cmd: StatsCommand) -> Result<CommandResult> {
    let ctx = CheckContext::new(&cmd.args.common)?;
    let summary = collect_stats(ctx.primary_locale(), &ctx.catalogs, ctx.ignore_patterns());

    Ok(finish(
        CommandSummary::Stats(summary),
        parse_error_issues(&ctx),
        Some(&ctx),
        false,
        0,
    ))
}

/// Coverage of every non-primary locale against the primary catalog.
///
/// Only keys of the primary catalog are counted: orphans neither raise nor
/// lower the coverage.
pub fn collect_stats(
    primary_locale: &str,
    all_catalogs: &AllCatalogs,
    ignore: &[Pattern],
) -> StatsSummary {
    let primary_keys = all_catalogs
        .get(primary_locale)
        .map(|primary| live_entries(primary, ignore))
        .unwrap_or_default();
    let total = primary_keys.len();

    let locales = replica_catalogs(primary_locale, all_catalogs)
        .into_iter()
        .map(|(locale, catalog)| {
            let mut finished = 0;
            let mut unfinished = 0;
            for (key, _) in &primary_keys {
                if !primary_has(catalog, key) {
                    continue;
                }
                match catalog.get(key) {
                    Some(entry) if entry.message.translation.is_finished() => finished += 1,
                    Some(_) => unfinished += 1,
                    None => {}
                }
            }
            LocaleStats {
                locale: locale.to_string(),
                file_path: catalog.file_path().to_string(),
                total,
                finished,
                unfinished,
                missing: total - finished - unfinished,
            }
        })
        .collect();

    StatsSummary {
        primary_locale: primary_locale.to_string(),
        primary_count: total,
        locales,
    }
}
