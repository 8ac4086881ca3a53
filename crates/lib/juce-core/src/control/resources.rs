use juce_kb::{Document, DocumentSummary};
use tracing::debug;

use super::{ControlError, JuceControlPlane};

impl JuceControlPlane {
    /// Lists every document in table order.
    #[must_use]
    pub fn list_documents(&self) -> Vec<DocumentSummary> {
        self.kb.documents().iter().map(Document::summary).collect()
    }

    /// Fetches a document by its exact locator.
    ///
    /// # Errors
    /// Returns `ControlError::NotFound` if no document has that locator.
    pub fn read_document(&self, locator: &str) -> Result<&'static Document, ControlError> {
        debug!(locator, "reading document");
        self.kb
            .by_locator(locator)
            .ok_or_else(|| ControlError::NotFound(locator.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_document_requires_exact_locator() {
        let control = JuceControlPlane::new();
        assert!(control.read_document("juce://docs/dsp-basics").is_ok());

        for near_miss in [
            "juce://docs/dsp-basics/",
            "JUCE://docs/dsp-basics",
            " juce://docs/dsp-basics",
            "juce://docs/dsp",
            "dsp-basics",
        ] {
            assert_eq!(
                control.read_document(near_miss),
                Err(ControlError::NotFound(near_miss.to_string())),
            );
        }
    }

    #[test]
    fn listing_follows_table_order() {
        let control = JuceControlPlane::new();
        let locators: Vec<_> = control
            .list_documents()
            .into_iter()
            .map(|summary| summary.locator)
            .collect();
        assert_eq!(
            locators,
            [
                "juce://docs/getting-started",
                "juce://docs/audio-processor-basics",
                "juce://templates/basic-plugin",
                "juce://docs/dsp-basics",
                "juce://docs/parameters",
            ]
        );
    }
}
