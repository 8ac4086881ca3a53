use std::borrow::Cow;

use juce_core::ControlError;
use rmcp::ErrorData;
use rmcp::model::{ErrorCode, JsonObject};
use serde::de::DeserializeOwned;

pub fn mcp_err(code: ErrorCode, message: impl Into<Cow<'static, str>>) -> ErrorData {
    ErrorData {
        code,
        message: message.into(),
        data: None,
    }
}

pub fn map_control_err(err: ControlError) -> ErrorData {
    let code = match &err {
        ControlError::NotFound(_) => ErrorCode::RESOURCE_NOT_FOUND,
        ControlError::UnknownTool(_) | ControlError::UnknownComponent(_) => {
            ErrorCode::INVALID_PARAMS
        }
    };
    mcp_err(code, err.to_string())
}

/// Decodes tool-call arguments into a typed parameter struct.
pub fn decode_arguments<T: DeserializeOwned>(
    tool: &str,
    arguments: Option<JsonObject>,
) -> Result<T, ErrorData> {
    let value = serde_json::Value::Object(arguments.unwrap_or_default());
    serde_json::from_value(value).map_err(|err| {
        mcp_err(
            ErrorCode::INVALID_PARAMS,
            format!("invalid arguments for {tool}: {err}"),
        )
    })
}
