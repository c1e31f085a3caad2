//! Fmt command - rewrite catalogs in canonical lupdate layout.
//!
//! Every loaded catalog is serialized with the writer and compared with the
//! file on disk. Use `--apply` to write the files that differ (default is
//! dry-run mode).

use std::{fs, path::Path};

use anyhow::{Context as _, Result};

use super::super::args::FmtCommand;
use super::helper::{finish, parse_error_issues};
use super::{CommandResult, CommandSummary, FmtSummary};
use crate::core::{
    CheckContext, LocaleCatalog,
    writer::{write_ts, write_ts_file},
};

pub fn fmt(cmd: FmtCommand) -> Result<CommandResult> {
    let args = &cmd.args;
    let ctx = CheckContext::new(&args.common)?;
    let apply = args.apply;

    let mut catalogs: Vec<&LocaleCatalog> = ctx.catalogs.values().collect();
    catalogs.sort_by(|a, b| a.file_path().cmp(b.file_path()));

    let mut changed_files = Vec::new();
    for catalog in &catalogs {
        let path = Path::new(catalog.file_path());
        let original = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        if original == write_ts(&catalog.file) {
            continue;
        }
        if apply {
            write_ts_file(&catalog.file, path)?;
        }
        changed_files.push(catalog.file_path().to_string());
    }

    let pending_changes = if apply { 0 } else { changed_files.len() };

    Ok(finish(
        CommandSummary::Fmt(FmtSummary {
            changed_files,
            files_checked: catalogs.len(),
            is_apply: apply,
        }),
        parse_error_issues(&ctx),
        Some(&ctx),
        true,
        pending_changes,
    ))
}
