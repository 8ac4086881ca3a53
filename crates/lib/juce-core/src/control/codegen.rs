use std::fmt;
use std::str::FromStr;

use tracing::debug;

use super::{ControlError, JuceControlPlane};

const CLASS_NAME_PLACEHOLDER: &str = "{{class_name}}";

const PROCESSOR_TEMPLATE: &str = include_str!("../../templates/processor.h.tpl");
const EDITOR_TEMPLATE: &str = include_str!("../../templates/editor.h.tpl");
const PARAMETER_TEMPLATE: &str = include_str!("../../templates/parameter.cpp.tpl");
const DSP_CHAIN_TEMPLATE: &str = include_str!("../../templates/dsp-chain.cpp.tpl");

/// Plugin component kinds that have a boilerplate template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    Processor,
    Editor,
    Parameter,
    DspChain,
}

impl ComponentKind {
    pub const ALL: [Self; 4] = [Self::Processor, Self::Editor, Self::Parameter, Self::DspChain];

    /// Wire name of the component kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Processor => "processor",
            Self::Editor => "editor",
            Self::Parameter => "parameter",
            Self::DspChain => "dsp-chain",
        }
    }

    #[must_use]
    pub const fn template(self) -> &'static str {
        match self {
            Self::Processor => PROCESSOR_TEMPLATE,
            Self::Editor => EDITOR_TEMPLATE,
            Self::Parameter => PARAMETER_TEMPLATE,
            Self::DspChain => DSP_CHAIN_TEMPLATE,
        }
    }

    /// Fills this kind's template with `class_name`.
    ///
    /// The class name is substituted as-is; it is not checked for being a
    /// valid C++ identifier.
    #[must_use]
    pub fn render(self, class_name: &str) -> String {
        self.template().replace(CLASS_NAME_PLACEHOLDER, class_name)
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComponentKind {
    type Err = ControlError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == value)
            .ok_or_else(|| ControlError::UnknownComponent(value.to_string()))
    }
}

impl JuceControlPlane {
    /// Generates boilerplate for the named component kind.
    ///
    /// # Errors
    /// Returns `ControlError::UnknownComponent` if `component` is not one of
    /// `processor`, `editor`, `parameter` or `dsp-chain`.
    pub fn generate(&self, component: &str, class_name: &str) -> Result<String, ControlError> {
        let kind = component.parse::<ComponentKind>()?;
        debug!(component = %kind, class_name, "generating plugin code");
        Ok(kind.render(class_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_wire_name() {
        for kind in ComponentKind::ALL {
            assert_eq!(kind.as_str().parse::<ComponentKind>(), Ok(kind));
        }
        assert_eq!(
            "Processor".parse::<ComponentKind>(),
            Err(ControlError::UnknownComponent("Processor".to_string()))
        );
    }

    #[test]
    fn processor_template_names_the_class_everywhere() {
        let code = ComponentKind::Processor.render("MyGain");
        assert!(code.starts_with("// MyGain.h\n#pragma once"));
        assert!(code.contains("class MyGain : public juce::AudioProcessor"));
        assert!(code.contains("    MyGain();\n    ~MyGain() override;"));
        assert!(code.contains("return \"MyGain\";"));
        assert!(code.contains("JUCE_DECLARE_NON_COPYABLE_WITH_LEAK_DETECTOR(MyGain)"));
        assert!(!code.contains(CLASS_NAME_PLACEHOLDER));
    }

    #[test]
    fn editor_template_names_the_class_everywhere() {
        let code = ComponentKind::Editor.render("GainEditor");
        assert!(code.contains("class GainEditor : public juce::AudioProcessorEditor"));
        assert!(code.contains("GainEditor(juce::AudioProcessor&);"));
        assert_eq!(code.matches("GainEditor").count(), 5);
    }

    #[test]
    fn parameter_and_chain_templates_ignore_class_name() {
        for kind in [ComponentKind::Parameter, ComponentKind::DspChain] {
            assert_eq!(kind.render("Anything"), kind.template());
        }
        assert!(ComponentKind::DspChain.template().contains("dsp::ProcessorChain"));
        assert!(ComponentKind::Parameter.template().contains("createParameterLayout()"));
    }

    #[test]
    fn class_name_is_substituted_without_validation() {
        let code = ComponentKind::Editor.render("not an identifier");
        assert!(code.contains("class not an identifier : public"));
    }
}
