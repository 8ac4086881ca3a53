pub const LOCATOR_SCHEME: &str = "juce";

pub const CONTENT_TYPE_TEXT_PLAIN: &str = "text/plain";

pub const DOC_GETTING_STARTED: &str = "getting-started";
pub const DOC_AUDIO_PROCESSOR_BASICS: &str = "audio-processor-basics";
pub const DOC_PLUGIN_TEMPLATE_BASIC: &str = "plugin-template-basic";
pub const DOC_DSP_BASICS: &str = "dsp-basics";
pub const DOC_PARAMETER_MANAGEMENT: &str = "parameter-management";
