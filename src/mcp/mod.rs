//! Model Context Protocol (MCP) server.
//!
//! Exposes catalog inspection and `qtTrId`-style lookup to AI assistants
//! over stdio.
//!
//! ## Module Structure
//!
//! - `helpers`: context loading and result serialization
//! - `server`: tool definitions and the stdio entry point
//! - `types`: tool parameters and result DTOs

mod helpers;
mod server;
pub mod types;

pub use server::{TsglotMcpServer, run_server};
