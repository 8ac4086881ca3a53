use juce_core::control::ComponentKind;
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
use crate::helpers;

/// Parameters for generating plugin boilerplate.
// `component` stays a string so unknown kinds reach the generator and fail
// with an error naming them.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct GeneratePluginCodeParams {
    #[schemars(schema_with = "component_schema")]
    pub component: String,
    /// Name for the class
    #[serde(rename = "className")]
    pub class_name: String,
}

fn component_schema(_generator: &mut schemars::SchemaGenerator) -> schemars::Schema {
    schemars::json_schema!({
        "type": "string",
        "enum": ComponentKind::ALL.map(ComponentKind::as_str),
        "description": "Type of component to generate",
    })
}

#[tool_router(router = tool_router_codegen, vis = "pub")]
impl JuceMcp {
    #[tool(
        name = "generate_plugin_code",
        description = "Generate boilerplate code for JUCE plugin components"
    )]
    pub(crate) async fn generate_plugin_code(
        &self,
        Parameters(params): Parameters<GeneratePluginCodeParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let code = self
            .control()
            .generate(&params.component, &params.class_name)
            .map_err(helpers::map_control_err)?;
        Ok(CallToolResult::success(vec![Content::text(code)]))
    }
}
