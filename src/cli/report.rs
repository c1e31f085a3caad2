//! Report formatting and printing utilities.
//!
//! This module provides functions to display issues in cargo-style format.
//! Separate from core logic to allow tsglot to be used as a library.

use std::io::{self, Write};

use colored::Colorize;

use super::{
    actions::{Action, DeleteMessage},
    commands::{
        CleanSummary, CommandResult, CommandSummary, FmtSummary, InitSummary, StatsSummary,
    },
};
use crate::config::CONFIG_FILE_NAME;
use crate::issues::{Issue, Report, ReportLocation, Severity};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print issues in cargo-style format to stdout.
///
/// This is the main entry point for reporting. Issues are sorted and
/// displayed with severity, location and details.
pub fn report(issues: &[Issue]) {
    report_to(issues, &mut io::stdout().lock());
}

/// Print issues to a custom writer.
///
/// Useful for testing or redirecting output.
pub fn report_to<W: Write>(issues: &[Issue], writer: &mut W) {
    if issues.is_empty() {
        return;
    }

    let mut sorted = issues.to_vec();
    sorted.sort_by(compare_issues);

    // Calculate max line number width for alignment
    let max_line_width = calculate_max_line_width(&sorted);

    for issue in &sorted {
        print_issue(issue, writer, max_line_width);
    }

    print_summary(&sorted, writer);
}

/// Print a success message when no issues are found.
pub fn print_success(catalog_files: usize, messages: usize) {
    print_success_to(catalog_files, messages, &mut io::stdout().lock());
}

/// Print a success message to a custom writer.
pub fn print_success_to<W: Write>(catalog_files: usize, messages: usize, writer: &mut W) {
    let msg = format!(
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Checked {} catalog {} ({} {}) - no issues found",
            catalog_files,
            if catalog_files == 1 { "file" } else { "files" },
            messages,
            if messages == 1 { "message" } else { "messages" }
        )
        .green()
    );
    let _ = writeln!(writer, "{}", msg);
}

/// Print a warning about files that could not be parsed.
pub fn print_parse_warning(count: usize, verbose: bool) {
    print_parse_warning_to(count, verbose, &mut io::stderr().lock());
}

/// Print a parse warning to a custom writer.
pub fn print_parse_warning_to<W: Write>(count: usize, verbose: bool, writer: &mut W) {
    if count > 0 && !verbose {
        let _ = writeln!(
            writer,
            "{} {} file(s) could not be parsed (use {} for details)",
            "warning:".bold().yellow(),
            count,
            "-v".cyan()
        );
    }
}

// ============================================================
// Internal Functions
// ============================================================

fn print_issue<W: Write>(issue: &Issue, writer: &mut W, max_line_width: usize) {
    let loc = issue.location();
    let (file_path, line, col) = extract_location_info(&loc);

    // Print severity and message (cargo-style)
    let severity_str = match issue.report_severity() {
        Severity::Error => "error".bold().red(),
        Severity::Warning => "warning".bold().yellow(),
    };

    let _ = writeln!(
        writer,
        "{}: \"{}\"  {}",
        severity_str,
        issue.message(),
        issue.report_rule().to_string().dimmed().cyan()
    );

    // Print clickable location: --> path:line:col
    if line > 0 {
        let _ = writeln!(writer, "  {} {}:{}:{}", "-->".blue(), file_path, line, col);
    } else {
        let _ = writeln!(writer, "  {} {}", "-->".blue(), file_path);
    }

    // Print details if present (cargo-style note)
    if let Some(details) = issue.details() {
        let _ = writeln!(
            writer,
            "{:>width$} {} {} {}",
            "",
            "=".blue(),
            "note:".bold(),
            details,
            width = max_line_width
        );
    }

    // Print hint if present
    if let Some(hint) = issue.hint() {
        let _ = writeln!(
            writer,
            "{:>width$} {} {} {}",
            "",
            "=".blue(),
            "hint:".bold().cyan(),
            hint,
            width = max_line_width
        );
    }

    let _ = writeln!(writer); // Empty line between issues
}

fn print_summary<W: Write>(issues: &[Issue], writer: &mut W) {
    let total_errors = issues
        .iter()
        .filter(|i| i.report_severity() == Severity::Error)
        .count();
    let total_warnings = issues
        .iter()
        .filter(|i| i.report_severity() == Severity::Warning)
        .count();
    let total_problems = total_errors + total_warnings;

    if total_problems > 0 {
        let _ = writeln!(
            writer,
            "\n{} {} problems ({} {}, {} {})",
            FAILURE_MARK.red(),
            total_problems,
            total_errors,
            if total_errors == 1 { "error" } else { "errors" }.red(),
            total_warnings,
            if total_warnings == 1 {
                "warning"
            } else {
                "warnings"
            }
            .yellow()
        );
    }
}

fn extract_location_info<'a>(loc: &'a ReportLocation<'a>) -> (&'a str, usize, usize) {
    match loc {
        ReportLocation::Message(ctx) => (ctx.file_path(), ctx.line(), ctx.col()),
        ReportLocation::File { path } => (path, 0, 0),
    }
}

fn calculate_max_line_width(issues: &[Issue]) -> usize {
    issues
        .iter()
        .filter_map(|i| match i.location() {
            ReportLocation::Message(ctx) => Some(ctx.line()),
            ReportLocation::File { .. } => None,
        })
        .max()
        .map(|n| n.to_string().len())
        .unwrap_or(1)
}

fn compare_issues(a: &Issue, b: &Issue) -> std::cmp::Ordering {
    let a_loc = a.location();
    let b_loc = b.location();
    let (a_path, a_line, a_col) = extract_location_info(&a_loc);
    let (b_path, b_line, b_col) = extract_location_info(&b_loc);

    a_path
        .cmp(b_path)
        .then_with(|| a_line.cmp(&b_line))
        .then_with(|| a_col.cmp(&b_col))
}

pub fn print(result: &CommandResult, verbose: bool) {
    print_command_output(result);

    if matches!(result.summary, CommandSummary::Check) && result.issues.is_empty() {
        print_success(result.catalog_files_checked, result.messages_checked);
    }

    print_parse_warning(result.parse_error_count, verbose);
}

fn print_command_output(result: &CommandResult) {
    match &result.summary {
        CommandSummary::Check => {
            report(&result.issues);
        }
        CommandSummary::Clean(summary) => {
            print_clean(summary);
        }
        CommandSummary::Fmt(summary) => {
            print_fmt(summary);
        }
        CommandSummary::Stats(summary) => {
            print_stats_to(summary, &mut io::stdout().lock());
        }
        CommandSummary::Tr(summary) => {
            println!("{}", summary.text);
        }
        CommandSummary::Init(summary) => {
            print_init(summary);
        }
    }
}

fn print_clean(summary: &CleanSummary) {
    if !summary.is_apply {
        if !summary.orphan_issues.is_empty() {
            DeleteMessage::preview(&summary.orphan_issues);
        }
        if !summary.retired_messages.is_empty() {
            DeleteMessage::preview(&summary.retired_messages);
        }
    }

    let total = summary.orphan_count + summary.obsolete_count;
    if total == 0 {
        println!(
            "{} {}",
            SUCCESS_MARK.green(),
            "No messages to clean".green()
        );
        return;
    }

    if summary.is_apply {
        println!(
            "{} {} message(s) in {} file(s) (processed {} message(s)).",
            "Deleted".green().bold(),
            summary.applied_count,
            summary.file_count,
            summary.processed_count
        );
    } else {
        println!(
            "{} {} message(s) in {} file(s):",
            "Would delete".yellow().bold(),
            total,
            summary.file_count
        );
    }
    if summary.orphan_count > 0 {
        println!("  - orphan: {} message(s)", summary.orphan_count);
    }
    if summary.obsolete_count > 0 {
        println!("  - obsolete: {} message(s)", summary.obsolete_count);
    }
    if summary.skipped_count > 0 {
        println!(
            "  - skipped: {} message(s) no longer in the file",
            summary.skipped_count
        );
    }
    if !summary.is_apply {
        println!("Run with {} to delete these messages.", "--apply".cyan());
    }
}

fn print_fmt(summary: &FmtSummary) {
    if summary.changed_files.is_empty() {
        println!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "{} catalog file(s) already formatted",
                summary.files_checked
            )
            .green()
        );
        return;
    }

    if summary.is_apply {
        println!(
            "{} {} of {} file(s):",
            "Formatted".green().bold(),
            summary.changed_files.len(),
            summary.files_checked
        );
    } else {
        println!(
            "{} {} of {} file(s):",
            "Would reformat".yellow().bold(),
            summary.changed_files.len(),
            summary.files_checked
        );
    }
    for file in &summary.changed_files {
        println!("  {} {}", "-".dimmed(), file);
    }
    if !summary.is_apply {
        println!("Run with {} to rewrite these files.", "--apply".cyan());
    }
}

fn print_stats_to<W: Write>(summary: &StatsSummary, writer: &mut W) {
    let _ = writeln!(
        writer,
        "Primary locale: {} ({} messages)",
        summary.primary_locale.bold(),
        summary.primary_count
    );

    if summary.locales.is_empty() {
        return;
    }

    let locale_width = summary
        .locales
        .iter()
        .map(|s| s.locale.len())
        .max()
        .unwrap_or(0)
        .max("Locale".len());

    let _ = writeln!(writer);
    let _ = writeln!(
        writer,
        "{:<lw$}  {:>8}  {:>10}  {:>7}  {:>8}",
        "Locale",
        "Finished",
        "Unfinished",
        "Missing",
        "Coverage",
        lw = locale_width
    );
    for row in &summary.locales {
        let coverage = format!("{:.1}%", row.coverage());
        let coverage = if row.finished == row.total {
            coverage.green()
        } else {
            coverage.yellow()
        };
        let _ = writeln!(
            writer,
            "{:<lw$}  {:>8}  {:>10}  {:>7}  {:>8}",
            row.locale,
            row.finished,
            row.unfinished,
            row.missing,
            coverage,
            lw = locale_width
        );
    }
}

fn print_init(summary: &InitSummary) {
    if summary.created {
        println!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    }
    if let Some(error) = &summary.error {
        eprintln!("{} {}", FAILURE_MARK.red(), error);
    }
}

// ============================================================
// Tests
// ============================================================
