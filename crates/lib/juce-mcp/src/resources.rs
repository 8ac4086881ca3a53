use juce_kb::DocumentSummary;
use rmcp::ErrorData;
use rmcp::model::{AnnotateAble, RawResource, ReadResourceResult, Resource, ResourceContents};
use tracing::debug;

use crate::JuceMcp;
use crate::helpers;

fn to_resource(summary: DocumentSummary) -> Resource {
    let mut raw = RawResource::new(summary.locator, summary.name);
    raw.description = Some(summary.description.to_string());
    raw.mime_type = Some(summary.content_type.to_string());
    raw.no_annotation()
}

impl JuceMcp {
    /// Lists every knowledge-base document as an MCP resource.
    #[must_use]
    pub fn resources(&self) -> Vec<Resource> {
        self.control()
            .list_documents()
            .into_iter()
            .map(to_resource)
            .collect()
    }

    /// Reads a knowledge-base document by its exact URI.
    ///
    /// # Errors
    /// Returns a `RESOURCE_NOT_FOUND` error naming the URI if no document has it.
    pub fn read_resource_by_uri(&self, uri: &str) -> Result<ReadResourceResult, ErrorData> {
        debug!(uri, "read_resource");
        let document = self
            .control()
            .read_document(uri)
            .map_err(helpers::map_control_err)?;

        let mut contents = ResourceContents::text(document.body, document.locator);
        if let ResourceContents::TextResourceContents { mime_type, .. } = &mut contents {
            *mime_type = Some(document.content_type.to_string());
        }
        Ok(ReadResourceResult {
            contents: vec![contents],
        })
    }
}

#[cfg(test)]
mod tests {
    use rmcp::model::ErrorCode;

    use super::*;

    #[test]
    fn resources_expose_listing_fields() {
        let server = JuceMcp::new();
        let resources = server.resources();
        assert_eq!(resources.len(), juce_kb::DOCUMENTS.len());

        let first = &resources[0];
        assert_eq!(first.raw.uri, "juce://docs/getting-started");
        assert_eq!(first.raw.name, "JUCE Getting Started Guide");
        assert_eq!(first.raw.mime_type.as_deref(), Some("text/plain"));
        assert_eq!(
            first.raw.description.as_deref(),
            Some("Introduction to JUCE framework and plugin development")
        );
    }

    #[test]
    fn read_returns_body_with_uri_and_mime_type() {
        let server = JuceMcp::new();
        let result = server
            .read_resource_by_uri("juce://docs/parameters")
            .expect("parameters document");
        assert_eq!(result.contents.len(), 1);

        let value = serde_json::to_value(&result.contents[0]).expect("contents serialize");
        assert_eq!(value["uri"], "juce://docs/parameters");
        assert_eq!(value["mimeType"], "text/plain");
        let text = value["text"].as_str().expect("text contents");
        assert!(text.starts_with("# Parameter Management in JUCE"));
    }

    #[test]
    fn read_unknown_uri_is_resource_not_found() {
        let server = JuceMcp::new();
        let err = server
            .read_resource_by_uri("nonexistent://uri")
            .expect_err("missing resource");
        assert_eq!(err.code, ErrorCode::RESOURCE_NOT_FOUND);
        assert_eq!(err.message, "Resource not found: nonexistent://uri");
    }
}
