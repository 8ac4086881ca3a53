use std::{error::Error, fmt};

use juce_kb::KnowledgeBase;

pub mod codegen;
pub mod explain;
pub mod resources;
pub mod search;

pub use codegen::ComponentKind;
pub use explain::Explanation;
pub use search::SearchResults;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlError {
    /// No document has the requested locator.
    NotFound(String),
    /// A tool call named a tool that is not registered.
    UnknownTool(String),
    /// Code generation was asked for a component kind without a template.
    UnknownComponent(String),
}

impl fmt::Display for ControlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(locator) => write!(f, "Resource not found: {locator}"),
            Self::UnknownTool(name) => write!(f, "Unknown tool: {name}"),
            Self::UnknownComponent(component) => write!(f, "Unknown component: {component}"),
        }
    }
}

impl Error for ControlError {}

/// Entry point for every knowledge-base query.
#[derive(Debug, Clone, Copy)]
pub struct JuceControlPlane {
    kb: &'static KnowledgeBase,
}

impl Default for JuceControlPlane {
    fn default() -> Self {
        Self::new()
    }
}

impl JuceControlPlane {
    /// Creates a control plane over the built-in knowledge base.
    #[must_use]
    pub fn new() -> Self {
        Self::with_knowledge_base(KnowledgeBase::global())
    }

    #[must_use]
    pub const fn with_knowledge_base(kb: &'static KnowledgeBase) -> Self {
        Self { kb }
    }

    #[must_use]
    pub const fn knowledge_base(&self) -> &'static KnowledgeBase {
        self.kb
    }
}
