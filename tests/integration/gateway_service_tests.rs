/*!
 * Gateway contract tests: request validation and selector handling happen
 * before any provider call, so these run against a default (credential-less)
 * gateway without touching the network.
 */

use babelgate::app_config::Config;
use babelgate::file_utils::FileSource;
use babelgate::providers::mock::MockModel;
use babelgate::services::knowledge_base::{self, Questions};
use babelgate::services::{
    AskRequest, DetectRequest, Gateway, ItemList, TranslateRequest,
};

use crate::common;

fn gateway() -> Gateway {
    Gateway::new(&Config::default())
}

#[tokio::test]
async fn test_detect_unknownSelector_shouldRejectBeforeAnyProviderCall() {
    let request = DetectRequest {
        image: FileSource::Bytes(vec![0xFF, 0xD8]),
        items: ItemList::Csv("cat, dog".to_string()),
        ai_selection: Some("GPT-5".to_string()),
    };

    let error = gateway().detect(request).await.unwrap_err();

    assert_eq!(error.status_code(), 400);
    assert_eq!(error.public_message(), "Invalid AI selection");
}

#[tokio::test]
async fn test_detect_emptyItems_shouldBeInvalidRequest() {
    let request = DetectRequest {
        image: FileSource::Bytes(vec![0xFF, 0xD8]),
        items: ItemList::Csv(" , ".to_string()),
        ai_selection: Some("AWS Rekognition".to_string()),
    };

    let error = gateway().detect(request).await.unwrap_err();

    assert_eq!(error.status_code(), 400);
    assert_eq!(error.public_message(), "Invalid request");
}

#[tokio::test]
async fn test_translate_emptyForm_shouldRequireFormData() {
    let request = TranslateRequest {
        text: String::new(),
        source_language: String::new(),
        target_language: String::new(),
        glossary: None,
    };

    let error = gateway().translate(request).await.unwrap_err();

    assert_eq!(error.status_code(), 400);
    assert_eq!(error.public_message(), "Form data is required");
}

#[tokio::test]
async fn test_translate_missingTargetLanguage_shouldRequireFormData() {
    let request = TranslateRequest {
        text: "Hello".to_string(),
        source_language: "en".to_string(),
        target_language: String::new(),
        glossary: None,
    };

    let error = gateway().translate(request).await.unwrap_err();

    assert_eq!(error.status_code(), 400);
    assert_eq!(error.public_message(), "Form data is required");
}

#[tokio::test]
async fn test_ask_withoutDocument_shouldBeInvalidRequest() {
    let request = AskRequest {
        question: Questions::One("What is the warranty period?".to_string()),
        file: None,
        pdf_url: None,
    };

    let error = gateway().ask(request).await.unwrap_err();

    assert_eq!(error.status_code(), 400);
    assert_eq!(error.public_message(), "Invalid request");
}

#[tokio::test]
async fn test_ask_unreadableGlossaryPath_shouldBeUnsupportedFormat() {
    let request = AskRequest {
        question: Questions::One("What is this?".to_string()),
        file: Some(FileSource::Path("/nonexistent/manual.pdf".into())),
        pdf_url: None,
    };

    let error = gateway().ask(request).await.unwrap_err();

    assert_eq!(error.public_message(), "Unsupported file format");
}

#[tokio::test]
async fn test_ask_pdfFixture_shouldFeedDocumentTextToModel() {
    let model = MockModel::scripted(vec!["Two years."]);
    let request = AskRequest {
        question: Questions::One("What is the warranty period?".to_string()),
        file: Some(FileSource::Path(common::test_resource_path("manual.pdf"))),
        pdf_url: None,
    };

    let response = knowledge_base::handle(&model, request).await.unwrap();

    assert_eq!(response.answer, "Two years.");
    let prompt = &model.prompts()[0];
    assert!(prompt.contains("warranty"));
    assert!(prompt.contains("What is the warranty period?"));
}

#[tokio::test]
async fn test_detect_rekognitionWithoutCredentials_shouldBeServerError() {
    // Credentials are validated by the Rekognition client before any
    // network traffic, so this exercises the provider error mapping offline.
    let request = DetectRequest {
        image: FileSource::Bytes(vec![0xFF, 0xD8]),
        items: ItemList::List(vec!["cat".to_string()]),
        ai_selection: Some("AWS Rekognition".to_string()),
    };

    let error = gateway().detect(request).await.unwrap_err();

    assert_eq!(error.status_code(), 500);
    assert_eq!(error.public_message(), "Failed to process the AI response");
}
