//! Registry of the tools exposed over MCP.
//!
//! Tool names are a closed set; dispatch matches on [`ToolName`] so a new tool
//! must be handled everywhere it is routed.

use std::fmt;
use std::str::FromStr;

use crate::control::ControlError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolName {
    SearchDocs,
    GeneratePluginCode,
    ExplainConcept,
}

impl ToolName {
    pub const ALL: [Self; 3] = [
        Self::SearchDocs,
        Self::GeneratePluginCode,
        Self::ExplainConcept,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SearchDocs => "search_juce_docs",
            Self::GeneratePluginCode => "generate_plugin_code",
            Self::ExplainConcept => "explain_juce_concept",
        }
    }

    /// Resolves a wire tool name.
    ///
    /// # Errors
    /// Returns `ControlError::UnknownTool` if no tool has that name.
    pub fn parse(name: &str) -> Result<Self, ControlError> {
        Self::ALL
            .into_iter()
            .find(|tool| tool.as_str() == name)
            .ok_or_else(|| ControlError::UnknownTool(name.to_string()))
    }
}

impl fmt::Display for ToolName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ToolName {
    type Err = ControlError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_registered_names() {
        for tool in ToolName::ALL {
            assert_eq!(ToolName::parse(tool.as_str()), Ok(tool));
        }
    }

    #[test]
    fn unknown_name_is_reported_verbatim() {
        let err = ToolName::parse("delete_everything").expect_err("unknown tool");
        assert_eq!(err, ControlError::UnknownTool("delete_everything".to_string()));
        assert_eq!(err.to_string(), "Unknown tool: delete_everything");
    }
}
