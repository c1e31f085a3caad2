//! CLI argument definitions using clap.
//!
//! This module defines the command-line interface structure for all tsglot commands.
//! It uses clap's derive API for declarative argument parsing.
//!
//! ## Commands
//!
//! - `check`: Run catalog checks (orphan ids, plural forms, placeholders, ids used in code, etc.)
//! - `clean`: Remove orphan messages and vanished/obsolete entries
//! - `fmt`: Rewrite catalogs in canonical lupdate layout
//! - `stats`: Show translation coverage per locale
//! - `tr`: Look up a message the way the runtime does
//! - `init`: Initialize tsglot configuration file
//! - `serve`: Start MCP server for AI integration

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};

use super::commands::check::CheckRule;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Check(cmd)) => cmd.args.common.verbose,
            Some(Command::Clean(cmd)) => cmd.args.common.verbose,
            Some(Command::Fmt(cmd)) => cmd.args.common.verbose,
            Some(Command::Stats(cmd)) => cmd.args.common.verbose,
            Some(Command::Tr(cmd)) => cmd.args.common.verbose,
            Some(Command::Init) | Some(Command::Serve) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Project root directory, where .tsglotrc.json is searched from
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Translations directory path (overrides config file)
    #[arg(long)]
    pub translations_root: Option<PathBuf>,

    /// Primary locale (overrides config file)
    #[arg(long)]
    pub primary_locale: Option<String>,

    /// Source directory searched for qtTrId calls (overrides config file)
    #[arg(long)]
    pub source_root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Parser)]
pub struct CheckArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    /// Rules to run (default: all)
    #[arg(value_enum)]
    pub checks: Vec<CheckRule>,
    #[command(flatten)]
    pub args: CheckArgs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum CleanRule {
    /// Messages whose id is not in the primary catalog
    Orphan,
    /// Entries marked vanished or obsolete
    Obsolete,
}

#[derive(Debug, Parser)]
pub struct CleanArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Actually delete messages (default is dry-run)
    #[arg(long)]
    pub apply: bool,

    /// Rules to clean (default: all)
    /// Can be specified multiple times: --rules orphan --rules obsolete
    #[arg(long, value_enum)]
    pub rules: Vec<CleanRule>,
}

#[derive(Debug, Args)]
pub struct CleanCommand {
    #[command(flatten)]
    pub args: CleanArgs,
}

#[derive(Debug, Parser)]
pub struct FmtArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Actually rewrite files (default is dry-run)
    #[arg(long)]
    pub apply: bool,
}

#[derive(Debug, Args)]
pub struct FmtCommand {
    #[command(flatten)]
    pub args: FmtArgs,
}

#[derive(Debug, Parser)]
pub struct StatsArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct StatsCommand {
    #[command(flatten)]
    pub args: StatsArgs,
}

#[derive(Debug, Parser)]
pub struct TrArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Message id to look up
    pub id: String,

    /// Locale whose catalog is used
    #[arg(long)]
    pub locale: String,

    /// Count for plural messages, substituted for %n
    #[arg(short = 'n', long = "count")]
    pub count: Option<i64>,

    /// Values for %1, %2, ... in order
    /// Can be specified multiple times: --arg Feeds --arg cloud.example.org
    #[arg(long = "arg")]
    pub args: Vec<String>,
}

#[derive(Debug, Args)]
pub struct TrCommand {
    #[command(flatten)]
    pub args: TrArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check catalogs for issues (orphan ids, plural forms, duplicates, placeholders)
    Check(CheckCommand),
    /// Remove orphan messages and vanished/obsolete entries from .ts files
    Clean(CleanCommand),
    /// Rewrite .ts files in canonical lupdate layout
    Fmt(FmtCommand),
    /// Show translation coverage per locale
    Stats(StatsCommand),
    /// Translate a message id for a locale
    Tr(TrCommand),
    /// Initialize a new .tsglotrc.json configuration file
    Init,
    /// Start MCP server for AI coding agents
    Serve,
}
