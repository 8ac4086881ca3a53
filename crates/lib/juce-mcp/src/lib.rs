//! MCP server implementation for juce-mcp.
//!
//! This crate wires the JUCE knowledge base into an rmcp `ServerHandler`:
//! documents are exposed as resources, and search, code generation and
//! concept explanations are exposed as tools.

mod helpers;
mod resources;
mod tools;
pub mod server;

pub use tools::codegen::GeneratePluginCodeParams;
pub use tools::docs::{ExplainConceptParams, SearchDocsParams};

use juce_core::{JuceControlPlane, ToolName};
use rmcp::{
    ErrorData,
    RoleServer,
    ServerHandler,
    handler::server::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    service::RequestContext,
};
use rmcp::model::{
    CallToolRequestParams,
    CallToolResult,
    Implementation,
    JsonObject,
    ListResourcesResult,
    ListToolsResult,
    PaginatedRequestParams,
    ReadResourceRequestParams,
    ReadResourceResult,
    ServerCapabilities,
    ServerInfo,
    Tool,
};
use tracing::debug;

pub const SERVER_NAME: &str = "juce-docs-mcp-server";

const SERVER_INSTRUCTIONS: &str = r"juce-mcp serves a small knowledge base about the JUCE C++ audio framework.

Resources:
- `juce://docs/*` guides (getting started, AudioProcessor, DSP module, parameters).
- `juce://templates/basic-plugin` describes the layout of a minimal plugin project.

Tools:
- `search_juce_docs` finds documents whose name, description or body contains `query` (case-insensitive).
- `generate_plugin_code` emits boilerplate for `component` (`processor`, `editor`, `parameter`, `dsp-chain`)
  using `className` as the class name.
- `explain_juce_concept` explains `concept` (`AudioProcessor`, `AudioBuffer`, `MidiBuffer`, `DSP`, `Parameters`, `GUI`).";

/// MCP server over the static JUCE knowledge base.
#[derive(Clone)]
pub struct JuceMcp {
    tool_router: ToolRouter<Self>,
    control: JuceControlPlane,
}

impl Default for JuceMcp {
    fn default() -> Self {
        Self::new()
    }
}

impl JuceMcp {
    /// Creates a server over the built-in knowledge base.
    #[must_use]
    pub fn new() -> Self {
        Self::with_control(JuceControlPlane::new())
    }

    /// Creates a server over a specific control plane.
    #[must_use]
    pub fn with_control(control: JuceControlPlane) -> Self {
        let tool_router = Self::tool_router_docs() + Self::tool_router_codegen();
        Self {
            tool_router,
            control,
        }
    }

    pub(crate) const fn control(&self) -> &JuceControlPlane {
        &self.control
    }

    /// Descriptors for every registered tool.
    #[must_use]
    pub fn tools(&self) -> Vec<Tool> {
        self.tool_router.list_all()
    }

    /// Routes a tool call by name.
    ///
    /// # Errors
    /// Returns `INVALID_PARAMS` for an unknown tool, undecodable arguments, or
    /// an unknown component kind.
    pub async fn call_tool_by_name(
        &self,
        name: &str,
        arguments: Option<JsonObject>,
    ) -> Result<CallToolResult, ErrorData> {
        let tool = ToolName::parse(name).map_err(helpers::map_control_err)?;
        debug!(tool = %tool, "call_tool");
        match tool {
            ToolName::SearchDocs => {
                let params = helpers::decode_arguments(name, arguments)?;
                self.search_juce_docs(Parameters(params)).await
            }
            ToolName::GeneratePluginCode => {
                let params = helpers::decode_arguments(name, arguments)?;
                self.generate_plugin_code(Parameters(params)).await
            }
            ToolName::ExplainConcept => {
                let params = helpers::decode_arguments(name, arguments)?;
                self.explain_juce_concept(Parameters(params)).await
            }
        }
    }
}

fn implementation() -> Implementation {
    let mut implementation = Implementation::from_build_env();
    implementation.name = SERVER_NAME.to_string();
    implementation.version = env!("CARGO_PKG_VERSION").to_string();
    implementation
}

impl ServerHandler for JuceMcp {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: implementation(),
            instructions: Some(SERVER_INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder()
                .enable_resources()
                .enable_tools()
                .build(),
            ..Default::default()
        }
    }

    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, ErrorData> {
        Ok(ListResourcesResult::with_all_items(self.resources()))
    }

    async fn read_resource(
        &self,
        request: ReadResourceRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, ErrorData> {
        self.read_resource_by_uri(&request.uri)
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, ErrorData> {
        Ok(ListToolsResult::with_all_items(self.tools()))
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, ErrorData> {
        self.call_tool_by_name(&request.name, request.arguments).await
    }
}
