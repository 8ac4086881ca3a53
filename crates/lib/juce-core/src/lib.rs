//! Core services for juce-mcp.
//!
//! This crate owns the request handlers that sit behind the MCP surface:
//! resource listing and reads, text search, boilerplate code generation, and
//! concept explanations. Every handler is a pure function over the static
//! knowledge base in `juce-kb`.

pub mod control;
pub mod tools;

pub use control::{ControlError, JuceControlPlane};
pub use tools::ToolName;
