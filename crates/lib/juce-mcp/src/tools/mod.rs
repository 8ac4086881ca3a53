//! MCP tool modules.
//!
//! Tools are grouped by domain: documentation lookup (search and concept
//! explanations) and plugin code generation.

pub mod codegen;
pub mod docs;
