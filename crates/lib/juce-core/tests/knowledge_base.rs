use juce_core::control::Explanation;
use juce_core::{ControlError, JuceControlPlane, ToolName};
use juce_kb::DOCUMENTS;

fn control() -> JuceControlPlane {
    JuceControlPlane::new()
}

#[test]
fn every_listed_document_reads_back_its_body() {
    let control = control();
    let listing = control.list_documents();
    assert_eq!(listing.len(), DOCUMENTS.len());

    for document in &DOCUMENTS {
        let occurrences = listing
            .iter()
            .filter(|summary| summary.locator == document.locator)
            .count();
        assert_eq!(occurrences, 1, "{} listed once", document.locator);

        let read = control
            .read_document(document.locator)
            .unwrap_or_else(|err| panic!("read {}: {err}", document.locator));
        assert_eq!(read.body, document.body);
    }
}

#[test]
fn unknown_locator_is_not_found() {
    let err = control()
        .read_document("nonexistent://uri")
        .expect_err("missing document");
    assert_eq!(err, ControlError::NotFound("nonexistent://uri".to_string()));
    assert!(err.to_string().contains("nonexistent://uri"));
}

#[test]
fn reverb_search_finds_dsp_basics() {
    let results = control().search("reverb");
    assert!(
        results
            .hits
            .iter()
            .any(|hit| hit.locator == "juce://docs/dsp-basics"),
        "dsp-basics should mention Reverb"
    );

    let missing = control().search("zzz-not-present");
    assert!(missing.is_empty());
}

#[test]
fn generated_processor_is_deterministic() {
    let control = control();
    let first = control
        .generate("processor", "MyGain")
        .expect("processor template");
    let second = control
        .generate("processor", "MyGain")
        .expect("processor template");
    assert_eq!(first, second);
    assert!(first.contains("class MyGain : public juce::AudioProcessor"));
    assert!(first.contains("MyGain();"));
}

#[test]
fn unknown_component_fails() {
    let err = control()
        .generate("unknown-kind", "X")
        .expect_err("unknown component");
    assert_eq!(err, ControlError::UnknownComponent("unknown-kind".to_string()));
}

#[test]
fn audio_processor_concept_is_the_document_body() {
    let control = control();
    let document = control
        .read_document("juce://docs/audio-processor-basics")
        .expect("audio processor basics");
    let explanation = control.explain("AudioProcessor");
    assert_eq!(explanation.to_string(), document.body);
}

#[test]
fn unknown_concept_degrades_to_message() {
    let explanation = control().explain("not-a-concept");
    assert!(matches!(explanation, Explanation::Unknown(_)));
    assert!(explanation.to_string().contains("not-a-concept"));
}

#[test]
fn unregistered_tool_is_rejected() {
    let err = ToolName::parse("compile_plugin").expect_err("unknown tool");
    assert!(err.to_string().contains("compile_plugin"));
}
