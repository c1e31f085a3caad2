use anyhow::{Result, bail};

use super::super::args::TrCommand;
use super::helper::finish;
use super::{CommandResult, CommandSummary, TrSummary};
use crate::core::{CheckContext, Translator};

pub fn tr(cmd: TrCommand) -> Result<CommandResult> {
    let args = &cmd.args;
    let ctx = CheckContext::new(&args.common)?;
    let text = translate(&ctx, &args.locale, &args.id, args.count, &args.args)?;

    Ok(finish(
        CommandSummary::Tr(TrSummary { text }),
        Vec::new(),
        Some(&ctx),
        false,
        0,
    ))
}

/// Look up `id` in the catalog of `locale` the way `qtTrId` does.
///
/// # Errors
///
/// Returns error if no catalog was loaded for `locale`.
pub fn translate(
    ctx: &CheckContext,
    locale: &str,
    id: &str,
    count: Option<i64>,
    args: &[String],
) -> Result<String> {
    let Some(catalog) = ctx.catalogs.get(locale) else {
        bail!(
            "Locale '{}' not found (available: {})",
            locale,
            ctx.locales().join(", ")
        );
    };

    let translator = Translator::new(catalog);
    if ctx.verbose && translator.lookup(id).is_none() {
        eprintln!(
            "Note: '{}' is not defined in {}, returning the id",
            id,
            catalog.file_path()
        );
    }

    Ok(translator.translate_with_args(id, count, args))
}
