use std::collections::HashMap;
use std::sync::LazyLock;

use crate::models::Document;
use crate::schema::{
    CONTENT_TYPE_TEXT_PLAIN,
    DOC_AUDIO_PROCESSOR_BASICS,
    DOC_DSP_BASICS,
    DOC_GETTING_STARTED,
    DOC_PARAMETER_MANAGEMENT,
    DOC_PLUGIN_TEMPLATE_BASIC,
};

/// Every document served by the knowledge base, in listing order.
pub static DOCUMENTS: [Document; 5] = [
    Document {
        key: DOC_GETTING_STARTED,
        locator: "juce://docs/getting-started",
        name: "JUCE Getting Started Guide",
        description: "Introduction to JUCE framework and plugin development",
        content_type: CONTENT_TYPE_TEXT_PLAIN,
        body: include_str!("../docs/getting-started.txt"),
    },
    Document {
        key: DOC_AUDIO_PROCESSOR_BASICS,
        locator: "juce://docs/audio-processor-basics",
        name: "AudioProcessor Class Fundamentals",
        description: "Core concepts for implementing audio processing in JUCE",
        content_type: CONTENT_TYPE_TEXT_PLAIN,
        body: include_str!("../docs/audio-processor-basics.txt"),
    },
    Document {
        key: DOC_PLUGIN_TEMPLATE_BASIC,
        locator: "juce://templates/basic-plugin",
        name: "Basic VST Plugin Template",
        description: "Minimal working VST plugin template structure",
        content_type: CONTENT_TYPE_TEXT_PLAIN,
        body: include_str!("../docs/plugin-template-basic.txt"),
    },
    Document {
        key: DOC_DSP_BASICS,
        locator: "juce://docs/dsp-basics",
        name: "JUCE DSP Module Basics",
        description: "Digital signal processing with juce_dsp module",
        content_type: CONTENT_TYPE_TEXT_PLAIN,
        body: include_str!("../docs/dsp-basics.txt"),
    },
    Document {
        key: DOC_PARAMETER_MANAGEMENT,
        locator: "juce://docs/parameters",
        name: "Plugin Parameter Management",
        description: "Managing plugin parameters with AudioProcessorValueTreeState",
        content_type: CONTENT_TYPE_TEXT_PLAIN,
        body: include_str!("../docs/parameter-management.txt"),
    },
];

static GLOBAL: LazyLock<KnowledgeBase> = LazyLock::new(|| KnowledgeBase::new(&DOCUMENTS));

/// Read-only view over a document table with lookup by locator and by key.
#[derive(Debug)]
pub struct KnowledgeBase {
    documents: &'static [Document],
    by_locator: HashMap<&'static str, usize>,
    by_key: HashMap<&'static str, usize>,
}

impl KnowledgeBase {
    /// Builds an index over `documents`.
    ///
    /// Later entries never shadow earlier ones: the first document with a
    /// given locator or key wins.
    #[must_use]
    pub fn new(documents: &'static [Document]) -> Self {
        let mut by_locator = HashMap::with_capacity(documents.len());
        let mut by_key = HashMap::with_capacity(documents.len());
        for (position, document) in documents.iter().enumerate() {
            by_locator.entry(document.locator).or_insert(position);
            by_key.entry(document.key).or_insert(position);
        }
        Self {
            documents,
            by_locator,
            by_key,
        }
    }

    /// The process-wide knowledge base over [`DOCUMENTS`].
    #[must_use]
    pub fn global() -> &'static Self {
        &GLOBAL
    }

    /// All documents in table order.
    #[must_use]
    pub const fn documents(&self) -> &'static [Document] {
        self.documents
    }

    #[must_use]
    pub fn by_locator(&self, locator: &str) -> Option<&'static Document> {
        let documents = self.documents;
        self.by_locator
            .get(locator)
            .and_then(|position| documents.get(*position))
    }

    #[must_use]
    pub fn by_key(&self, key: &str) -> Option<&'static Document> {
        let documents = self.documents;
        self.by_key
            .get(key)
            .and_then(|position| documents.get(*position))
    }
}
