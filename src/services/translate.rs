/*!
 * Translation service: request validation, glossary loading, and the call
 * into the translation pipeline.
 */

use log::info;
use serde::Serialize;

use crate::errors::GatewayError;
use crate::file_utils::FileSource;
use crate::glossary::loader::load_glossary;
use crate::translation::TranslationOrchestrator;

/// A translation request
#[derive(Debug)]
pub struct TranslateRequest {
    /// Text to translate
    pub text: String,
    /// Source language code or name
    pub source_language: String,
    /// Target language code or name
    pub target_language: String,
    /// Optional glossary spreadsheet
    pub glossary: Option<FileSource>,
}

/// A translation response
#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TranslateResponse {
    /// The translated text
    pub translated_text: String,
}

/// Validate the request. Any missing field reads as a missing form.
fn validate(request: &TranslateRequest) -> Result<(), GatewayError> {
    if request.text.is_empty()
        || request.source_language.is_empty()
        || request.target_language.is_empty()
    {
        return Err(GatewayError::Validation("Form data is required"));
    }
    Ok(())
}

/// Handle a translation request.
pub async fn handle(
    orchestrator: &TranslationOrchestrator,
    request: TranslateRequest,
) -> Result<TranslateResponse, GatewayError> {
    validate(&request)?;

    let glossary = match &request.glossary {
        Some(source) => {
            let bytes = source.resolve()?;
            let glossary = load_glossary(&bytes)?;
            info!("Loaded glossary with {} term(s)", glossary.len());
            Some(glossary)
        }
        None => None,
    };

    let translated_text = orchestrator
        .translate(
            &request.text,
            &request.source_language,
            &request.target_language,
            glossary.as_ref(),
        )
        .await?;

    Ok(TranslateResponse { translated_text })
}
