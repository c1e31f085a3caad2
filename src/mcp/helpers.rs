//! Helper functions for MCP server operations.

use std::path::PathBuf;

use rmcp::{
    ErrorData as McpError,
    model::{CallToolResult, Content},
};
use serde::Serialize;

use crate::{cli::args::CommonArgs, core::CheckContext};

/// Load every catalog below `project_root_path`.
pub fn load_context(project_root_path: &str) -> Result<CheckContext, McpError> {
    let common = CommonArgs {
        root: Some(PathBuf::from(project_root_path)),
        translations_root: None,
        primary_locale: None,
        source_root: None,
        verbose: false,
    };
    CheckContext::new(&common)
        .map_err(|e| McpError::internal_error(format!("Failed to initialize: {:#}", e), None))
}

/// Serialize `value` as the single text content of a successful result.
pub fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json_str = serde_json::to_string_pretty(value).map_err(|e| {
        McpError::internal_error(format!("JSON serialization failed: {}", e), None)
    })?;
    Ok(CallToolResult::success(vec![Content::text(json_str)]))
}

/// Validate locale name for security.
///
/// Only allows alphanumeric characters, hyphens, and underscores.
pub fn validate_locale_name(locale: &str) -> Result<(), String> {
    if locale.is_empty() {
        return Err("Locale name cannot be empty".to_string());
    }
    if !locale
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(
            "Locale name can only contain letters, numbers, hyphens, and underscores".to_string(),
        );
    }
    Ok(())
}
