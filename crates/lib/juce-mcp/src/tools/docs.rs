use juce_core::control::explain::concept_labels;
use rmcp::{
    ErrorData,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content},
    schemars,
    tool,
    tool_router,
};
use serde::{Deserialize, Serialize};

use crate::JuceMcp;

/// Parameters for searching the documentation.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct SearchDocsParams {
    /// Search query for JUCE documentation
    pub query: String,
}

/// Parameters for explaining a JUCE concept.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct ExplainConceptParams {
    #[schemars(schema_with = "concept_schema")]
    pub concept: String,
}

fn concept_schema(_generator: &mut schemars::SchemaGenerator) -> schemars::Schema {
    schemars::json_schema!({
        "type": "string",
        "enum": concept_labels(),
        "description": "JUCE concept to explain",
    })
}

#[tool_router(router = tool_router_docs, vis = "pub")]
impl JuceMcp {
    #[tool(
        name = "search_juce_docs",
        description = "Search JUCE documentation for specific topics"
    )]
    pub(crate) async fn search_juce_docs(
        &self,
        Parameters(params): Parameters<SearchDocsParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let results = self.control().search(&params.query);
        Ok(CallToolResult::success(vec![Content::text(results.to_string())]))
    }

    #[tool(
        name = "explain_juce_concept",
        description = "Get detailed explanation of JUCE framework concepts"
    )]
    pub(crate) async fn explain_juce_concept(
        &self,
        Parameters(params): Parameters<ExplainConceptParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let explanation = self.control().explain(&params.concept);
        Ok(CallToolResult::success(vec![Content::text(explanation.to_string())]))
    }
}
