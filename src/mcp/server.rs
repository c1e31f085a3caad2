use anyhow::Result;
use clap::ValueEnum;
use rmcp::{
    ErrorData as McpError, ServerHandler, ServiceExt,
    handler::server::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};

use crate::{
    cli::commands::{check::CheckRule, check::run_checks, helper::parse_error_issues, stats},
    config::load_config,
    core::{Translator, plural::expected_form_count},
    issues::{Issue, Rule, Severity},
};

use super::helpers::{json_result, load_context, validate_locale_name};
use super::types::{
    ConfigDto, ConfigValues, GetConfigParams, GetLocalesParams, IssueItem, IssuesScanResult,
    LocaleCoverage, LocaleInfo, LocalesResult, Pagination, ParseErrorItem, RuleStats,
    ScanIssuesParams, ScanOverviewParams, ScanOverviewResult, TranslateParams, TranslateResult,
};

const DEFAULT_LIMIT: usize = 50;
const MAX_LIMIT: usize = 100;

#[derive(Clone)]
pub struct TsglotMcpServer {
    tool_router: ToolRouter<Self>,
}

impl Default for TsglotMcpServer {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_router]
impl TsglotMcpServer {
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
        }
    }

    /// Get overview statistics of all catalog issues
    #[tool(
        description = "Get issue counts per rule and translation coverage per locale without detailed items. Use this first to understand the overall state before diving into details."
    )]
    pub async fn scan_overview(
        &self,
        params: Parameters<ScanOverviewParams>,
    ) -> Result<CallToolResult, McpError> {
        let ctx = load_context(&params.0.project_root_path)?;

        let mut issues = run_checks(&ctx, &CheckRule::all());
        issues.extend(parse_error_issues(&ctx));

        let error_count = issues.iter().filter(|i| i.severity() == Severity::Error).count();
        let warning_count = issues.len() - error_count;

        let rules = all_rules()
            .into_iter()
            .filter_map(|rule| {
                let matching: Vec<&Issue> = issues.iter().filter(|i| i.rule() == rule).collect();
                let first = matching.first()?;
                Some(RuleStats {
                    rule: rule.to_string(),
                    severity: first.severity().to_string(),
                    total_count: matching.len(),
                })
            })
            .collect();

        let summary =
            stats::collect_stats(ctx.primary_locale(), &ctx.catalogs, ctx.ignore_patterns());
        let coverage = summary
            .locales
            .iter()
            .map(|l| LocaleCoverage {
                locale: l.locale.clone(),
                finished: l.finished,
                unfinished: l.unfinished,
                missing: l.missing,
                coverage: (l.coverage() * 10.0).round() / 10.0,
            })
            .collect();

        json_result(&ScanOverviewResult {
            primary_locale: summary.primary_locale,
            catalog_file_count: ctx.catalogs.len() + ctx.parse_errors.len(),
            message_count: summary.primary_count,
            error_count,
            warning_count,
            rules,
            coverage,
        })
    }

    /// Scan for catalog issues
    #[tool(
        description = "List catalog issues (orphan ids, missing ids, duplicate ids, wrong numerus form counts, placeholder mismatches, unfinished, identical and drifted translations, parse errors). Optionally filter by rule. Returns paginated list."
    )]
    pub async fn scan_issues(
        &self,
        params: Parameters<ScanIssuesParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let limit = params
            .limit
            .map(|v| v as usize)
            .unwrap_or(DEFAULT_LIMIT)
            .min(MAX_LIMIT);
        let offset = params.offset.map(|v| v as usize).unwrap_or(0);

        let (checks, include_parse_errors) = match &params.rules {
            None => (CheckRule::all(), true),
            Some(names) if names.is_empty() => (CheckRule::all(), true),
            Some(names) => parse_rule_filter(names)?,
        };

        let ctx = load_context(&params.project_root_path)?;
        let mut issues = run_checks(&ctx, &checks);
        if include_parse_errors {
            issues.extend(parse_error_issues(&ctx));
        }
        issues.sort();

        let total_count = issues.len();
        let items: Vec<IssueItem> = issues
            .iter()
            .skip(offset)
            .take(limit)
            .map(IssueItem::from)
            .collect();
        let has_more = offset + items.len() < total_count;

        json_result(&IssuesScanResult {
            total_count,
            items,
            pagination: Pagination {
                offset,
                limit,
                has_more,
            },
        })
    }

    /// Translate a message id
    #[tool(
        description = "Look up a message id in a locale catalog the way qtTrId does. Substitutes %n with count and %1, %2, ... with args. Unknown ids return the id itself; unfinished translations return the source text."
    )]
    pub async fn translate(
        &self,
        params: Parameters<TranslateParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        validate_locale_name(&params.locale).map_err(|msg| McpError::invalid_params(msg, None))?;

        let ctx = load_context(&params.project_root_path)?;
        let args = params.args.unwrap_or_default();
        let text = crate::cli::commands::tr::translate(
            &ctx,
            &params.locale,
            &params.id,
            params.count,
            &args,
        )
        .map_err(|e| McpError::invalid_params(format!("{:#}", e), None))?;

        let (found, fallback_to_source) = ctx
            .catalogs
            .get(&params.locale)
            .and_then(|catalog| Translator::new(catalog).lookup(&params.id))
            .map(|message| (true, !message.translation.is_finished()))
            .unwrap_or((false, false));

        json_result(&TranslateResult {
            id: params.id,
            locale: params.locale,
            text,
            found,
            fallback_to_source,
        })
    }

    /// Get available locales
    #[tool(description = "Get available locale catalogs, their file paths and message counts.")]
    pub async fn get_locales(
        &self,
        params: Parameters<GetLocalesParams>,
    ) -> Result<CallToolResult, McpError> {
        let ctx = load_context(&params.0.project_root_path)?;

        let locales = ctx
            .locales()
            .into_iter()
            .filter_map(|locale| ctx.catalogs.get(locale))
            .map(|catalog| LocaleInfo {
                locale: catalog.locale.clone(),
                language: catalog.language().to_string(),
                file_path: catalog.file_path().to_string(),
                message_count: catalog.active_len(),
                plural_forms: expected_form_count(
                    catalog.language(),
                    &ctx.config.plural_forms,
                ),
            })
            .collect();

        let parse_errors = ctx
            .parse_errors
            .iter()
            .map(|e| ParseErrorItem {
                file_path: e.file_path.clone(),
                error: e.error.clone(),
            })
            .collect();

        json_result(&LocalesResult {
            translations_dir: ctx.resolved_translations_dir().to_string_lossy().to_string(),
            primary_locale: ctx.primary_locale().to_string(),
            locales,
            parse_errors,
        })
    }

    /// Get current configuration
    #[tool(description = "Get the current tsglot configuration.")]
    pub async fn get_config(
        &self,
        params: Parameters<GetConfigParams>,
    ) -> Result<CallToolResult, McpError> {
        let path = std::path::Path::new(&params.0.project_root_path);

        let result = load_config(path).map_err(|e| {
            McpError::internal_error(format!("Failed to load config: {:#}", e), None)
        })?;

        json_result(&ConfigDto {
            from_file: result.from_file,
            config: ConfigValues::from(result.config),
        })
    }
}

/// Rules in report order.
fn all_rules() -> Vec<Rule> {
    vec![
        Rule::ParseError,
        Rule::OrphanId,
        Rule::UndefinedId,
        Rule::DuplicateId,
        Rule::NumerusForms,
        Rule::Placeholder,
        Rule::SourceDrift,
        Rule::MissingId,
        Rule::Unfinished,
        Rule::Identical,
        Rule::UnusedId,
    ]
}

/// Map rule names to checks. `parse-error` selects load failures.
fn parse_rule_filter(names: &[String]) -> Result<(Vec<CheckRule>, bool), McpError> {
    let mut checks = Vec::new();
    let mut include_parse_errors = false;
    for name in names {
        if name.eq_ignore_ascii_case("parse-error") {
            include_parse_errors = true;
            continue;
        }
        let rule = CheckRule::from_str(name, true).map_err(|_| {
            McpError::invalid_params(format!("Unknown rule: '{}'", name), None)
        })?;
        checks.push(rule);
    }
    Ok((checks, include_parse_errors))
}

#[tool_handler]
impl ServerHandler for TsglotMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "tsglot MCP helps AI agents maintain Qt Linguist (.ts) catalogs that use id-based messages (qtTrId).\n\n\
                 Available tools:\n\
                 1. get_config - Get project configuration\n\
                 2. get_locales - Get locale catalogs and their message counts\n\
                 3. scan_overview - Get issue counts per rule and coverage per locale\n\
                 4. scan_issues - Get detailed issues, optionally filtered by rule (paginated)\n\
                 5. translate - Resolve a message id for a locale, with count and arguments\n\n\
                 Recommended Workflow:\n\
                 1. Use scan_overview to understand the overall state\n\
                 2. Fix parse-error, orphan-id and duplicate-id first: they break lookups\n\
                 3. Then fix numerus-forms and placeholder issues in translations\n\
                 4. Add undefined-id messages to the catalogs (run lupdate) and review unused-id ones\n\
                 5. Finally work through missing-id and unfinished to raise coverage"
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

/// Entry point for MCP server
pub fn run_server() -> Result<()> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let service = TsglotMcpServer::new();
            let server = service.serve(rmcp::transport::stdio()).await?;
            server.waiting().await?;
            Ok(())
        })
}
