/*!
 * Tests for the gateway error contract: status codes and the asymmetry
 * between client-facing and provider-facing messages.
 */

use babelgate::errors::{GatewayError, GlossaryError, ProviderError, TranslationError};

#[test]
fn test_clientErrors_shouldMapTo400() {
    let errors = [
        GatewayError::Validation("Invalid request"),
        GatewayError::UnsupportedInput,
        GatewayError::Retrieval("404 Not Found".to_string()),
        GatewayError::Glossary(GlossaryError::Empty),
        GatewayError::InvalidSelection,
    ];
    for error in errors {
        assert_eq!(error.status_code(), 400, "{error}");
    }
}

#[test]
fn test_providerErrors_shouldMapTo500() {
    let provider = GatewayError::Provider(ProviderError::RequestFailed("timeout".to_string()));
    let translation = GatewayError::Translation(TranslationError::Provider(
        ProviderError::RequestFailed("timeout".to_string()),
    ));
    assert_eq!(provider.status_code(), 500);
    assert_eq!(translation.status_code(), 500);
}

#[test]
fn test_clientErrors_shouldExposeOwnMessage() {
    assert_eq!(
        GatewayError::Validation("Form data is required").public_message(),
        "Form data is required"
    );
    assert_eq!(
        GatewayError::UnsupportedInput.public_message(),
        "Unsupported file format"
    );
    assert_eq!(
        GatewayError::Retrieval("404 Not Found".to_string()).public_message(),
        "Failed to fetch PDF from URL: 404 Not Found"
    );
    assert_eq!(
        GatewayError::Glossary(GlossaryError::Empty).public_message(),
        "Invalid glossary format"
    );
    assert_eq!(
        GatewayError::InvalidSelection.public_message(),
        "Invalid AI selection"
    );
}

#[test]
fn test_providerErrors_shouldExposeFixedGenericMessage() {
    let provider = GatewayError::Provider(ProviderError::ApiError {
        status_code: 401,
        message: "invalid api key sk-secret".to_string(),
    });
    let translation = GatewayError::Translation(TranslationError::Provider(
        ProviderError::RequestFailed("connect error to api.openai.com".to_string()),
    ));

    // The real failure must never leak to the caller
    assert_eq!(provider.public_message(), "Failed to process the AI response");
    assert_eq!(translation.public_message(), "Failed to translate text");
    assert!(!provider.public_message().contains("sk-secret"));
    assert!(!translation.public_message().contains("openai.com"));
}

#[test]
fn test_ioError_shouldConvertToUnsupportedInput() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
    let error: GatewayError = io.into();
    assert_eq!(error.public_message(), "Unsupported file format");
    assert_eq!(error.status_code(), 400);
}

#[test]
fn test_glossaryParseError_shouldCarryDetail() {
    let error: GatewayError = GlossaryError::Parse("not a zip archive".to_string()).into();
    assert_eq!(
        error.public_message(),
        "Invalid glossary format: not a zip archive"
    );
}
