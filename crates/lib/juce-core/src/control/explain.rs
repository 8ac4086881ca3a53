use std::fmt;

use juce_kb::Document;
use juce_kb::schema::{DOC_AUDIO_PROCESSOR_BASICS, DOC_DSP_BASICS, DOC_PARAMETER_MANAGEMENT};
use tracing::debug;

use super::JuceControlPlane;

#[derive(Debug, Clone, Copy)]
enum ConceptSource {
    /// Full body of the knowledge-base document with this key.
    Document(&'static str),
    Inline(&'static str),
}

const CONCEPTS: [(&str, ConceptSource); 6] = [
    ("AudioProcessor", ConceptSource::Document(DOC_AUDIO_PROCESSOR_BASICS)),
    (
        "AudioBuffer",
        ConceptSource::Inline(
            "AudioBuffer holds audio sample data for processing. Access samples via getWritePointer() or getReadPointer().",
        ),
    ),
    (
        "MidiBuffer",
        ConceptSource::Inline(
            "MidiBuffer stores MIDI events. Iterate through events and process them in processBlock().",
        ),
    ),
    ("DSP", ConceptSource::Document(DOC_DSP_BASICS)),
    ("Parameters", ConceptSource::Document(DOC_PARAMETER_MANAGEMENT)),
    (
        "GUI",
        ConceptSource::Inline(
            "JUCE GUI uses Component-based architecture. Create UI in AudioProcessorEditor using sliders, buttons, and custom graphics.",
        ),
    ),
];

/// Concept labels with a known explanation, in advertised order.
#[must_use]
pub fn concept_labels() -> Vec<&'static str> {
    CONCEPTS.iter().map(|(label, _)| *label).collect()
}

/// Outcome of a concept lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Explanation {
    /// The concept is covered by a whole knowledge-base document.
    Document(&'static Document),
    /// The concept has a fixed one-line explanation.
    Inline(&'static str),
    /// The concept is not in the table.
    Unknown(String),
}

impl Explanation {
    #[must_use]
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown(_))
    }
}

impl fmt::Display for Explanation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Document(document) => f.write_str(document.body),
            Self::Inline(text) => f.write_str(text),
            Self::Unknown(concept) => write!(f, "No explanation available for: {concept}"),
        }
    }
}

impl JuceControlPlane {
    /// Looks up an explanation for a JUCE concept label.
    ///
    /// Labels are matched exactly. Unknown labels, and labels whose document
    /// is missing from the knowledge base, yield [`Explanation::Unknown`].
    #[must_use]
    pub fn explain(&self, concept: &str) -> Explanation {
        let source = CONCEPTS
            .iter()
            .find(|(label, _)| *label == concept)
            .map(|(_, source)| *source);
        let explanation = match source {
            Some(ConceptSource::Document(key)) => self
                .kb
                .by_key(key)
                .map_or_else(|| Explanation::Unknown(concept.to_string()), Explanation::Document),
            Some(ConceptSource::Inline(text)) => Explanation::Inline(text),
            None => Explanation::Unknown(concept.to_string()),
        };
        debug!(concept, known = explanation.is_known(), "explained concept");
        explanation
    }
}
