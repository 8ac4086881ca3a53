//! Static knowledge base for juce-mcp.
//!
//! This crate defines the document model, the fixed table of JUCE guides and
//! templates served by the MCP server, and a read-only lookup index over it.

pub mod catalog;
pub mod models;
pub mod schema;

pub use catalog::{DOCUMENTS, KnowledgeBase};
pub use models::*;
