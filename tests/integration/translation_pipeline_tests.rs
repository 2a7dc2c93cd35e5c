/*!
 * End-to-end tests for the translation pipeline: glossary spreadsheet in,
 * prompts out, with a mock completion backend standing in for the provider.
 */

use std::sync::Arc;

use babelgate::app_config::GlossaryStrategy;
use babelgate::file_utils::FileSource;
use babelgate::providers::mock::MockModel;
use babelgate::services::translate::{self, TranslateRequest};
use babelgate::translation::TranslationOrchestrator;

use crate::common;

fn orchestrator(
    model: &MockModel,
    strategy: GlossaryStrategy,
    budget: usize,
) -> TranslationOrchestrator {
    TranslationOrchestrator::new(Arc::new(model.clone()), strategy, budget)
}

fn request_with_glossary(text: &str, target: &str) -> TranslateRequest {
    TranslateRequest {
        text: text.to_string(),
        source_language: "en".to_string(),
        target_language: target.to_string(),
        glossary: Some(FileSource::Path(common::test_resource_path("glossary.xlsx"))),
    }
}

#[tokio::test]
async fn test_translate_noGlossary_shouldReturnTrimmedModelOutput() {
    let model = MockModel::scripted(vec!["\n  Bonjour le monde \n"]);
    let orchestrator = orchestrator(&model, GlossaryStrategy::ChunkedGlossary, 10_000);

    let response = translate::handle(
        &orchestrator,
        TranslateRequest {
            text: "Hello World".to_string(),
            source_language: "en".to_string(),
            target_language: "fr".to_string(),
            glossary: None,
        },
    )
    .await
    .unwrap();

    assert_eq!(response.translated_text, "Bonjour le monde");
    let prompt = &model.prompts()[0];
    assert!(prompt.contains("Translate the following text from en to fr"));
    assert!(prompt.contains("Hello World"));
}

#[tokio::test]
async fn test_translate_glossaryFile_shouldEmbedGlossaryLinesInPrompt() {
    let model = MockModel::scripted(vec!["Me gustan las manzanas"]);
    let orchestrator = orchestrator(&model, GlossaryStrategy::ChunkedGlossary, 10_000);

    let response = translate::handle(&orchestrator, request_with_glossary("I like apples", "es"))
        .await
        .unwrap();

    assert_eq!(response.translated_text, "Me gustan las manzanas");
    assert_eq!(model.call_count(), 1);
    let prompt = &model.prompts()[0];
    assert!(prompt.contains("Glossary Chunk:"));
    assert!(prompt.contains("apple | fruit | manzana | pomme"));
    assert!(prompt.contains("I like apples"));
}

#[tokio::test]
async fn test_translate_tinyChunkBudget_shouldChainChunksSequentially() {
    let model = MockModel::scripted(vec!["pass 1", "pass 2", "pass 3", "pass 4", "pass 5"]);
    // Budget fits one glossary line at a time; the fixture holds five entries.
    let orchestrator = orchestrator(&model, GlossaryStrategy::ChunkedGlossary, 40);

    let response = translate::handle(&orchestrator, request_with_glossary("I like apples", "es"))
        .await
        .unwrap();

    let prompts = model.prompts();
    assert_eq!(response.translated_text, format!("pass {}", prompts.len()));
    assert!(prompts.len() > 1);
    // Every pass after the first consumes the previous pass's output.
    for (index, prompt) in prompts.iter().enumerate().skip(1) {
        assert!(prompt.contains(&format!("pass {}", index)), "prompt {index}");
    }
}

#[tokio::test]
async fn test_translate_substituteStrategy_shouldTranslateSubstitutedText() {
    let model = MockModel::scripted(vec!["Me gustan las manzanas"]);
    let orchestrator = orchestrator(&model, GlossaryStrategy::SubstituteThenTranslate, 10_000);

    translate::handle(&orchestrator, request_with_glossary("I like apples", "es"))
        .await
        .unwrap();

    assert_eq!(model.call_count(), 1);
    let prompt = &model.prompts()[0];
    assert!(prompt.contains("manzanas"));
    assert!(!prompt.contains("Glossary Chunk"));
}

#[tokio::test]
async fn test_translate_backendFailure_shouldSurfaceGenericMessage() {
    let model = MockModel::failing();
    let orchestrator = orchestrator(&model, GlossaryStrategy::ChunkedGlossary, 10_000);

    let error = translate::handle(&orchestrator, request_with_glossary("I like apples", "es"))
        .await
        .unwrap_err();

    assert_eq!(error.status_code(), 500);
    assert_eq!(error.public_message(), "Failed to translate text");
}
