//! tsglot - Qt Linguist catalog checker
//!
//! tsglot is a CLI tool and library for validating Qt Linguist `.ts` message
//! catalogs: orphan ids, plural form counts, duplicate ids, placeholder
//! consistency and translation coverage. It also reads, writes and looks up
//! catalog messages at runtime.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (user-facing commands and actions)
//! - `config`: Configuration file loading and parsing
//! - `core`: Catalog model, `.ts` parser/writer, plural rules, translator
//! - `issues`: Issue type definitions and reporting
//! - `mcp`: Model Context Protocol server implementation
//! - `rules`: Checks run against the loaded catalogs
//! - `utils`: Shared utility functions

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
pub mod mcp;
pub mod rules;
pub mod utils;
