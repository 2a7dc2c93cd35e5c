/*!
 * Image detection service.
 *
 * Dispatches a detect request to the selected backend. The selector is
 * parsed before any file or provider work so an unrecognized selection never
 * triggers a provider call.
 *
 * Error policy differs by backend and mirrors the existing caller contract:
 * OpenAI and Rekognition failures propagate as provider errors, while Gemini
 * and Claude failures are logged and reported as an absent result.
 */

use log::error;
use serde::Serialize;

use crate::errors::{GatewayError, ProviderError};
use crate::file_utils::FileSource;
use crate::providers::anthropic::Anthropic;
use crate::providers::gemini::Gemini;
use crate::providers::openai::OpenAI;
use crate::providers::rekognition::Rekognition;
use crate::providers::VisionModel;
use crate::services::{AiSelector, ItemList};

/// An image detection request
#[derive(Debug)]
pub struct DetectRequest {
    /// The image to analyze
    pub image: FileSource,
    /// Item names to look for
    pub items: ItemList,
    /// Backend selector string; defaults to the OpenAI backend when absent
    pub ai_selection: Option<String>,
}

/// An image detection response
#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DetectResponse {
    /// Detection result, absent when a swallowing backend failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detected_items: Option<String>,
}

/// Build the detection prompt for a list of item names.
pub fn detection_prompt(items: &[String]) -> String {
    format!(
        "Please analyze this image and detect if the following items are in the image: {}",
        items.join(", ")
    )
}

/// Convert a backend result into an absent result on failure, logging the
/// real error. Used for the backends whose failures are not surfaced.
pub fn swallow_to_absent(
    result: Result<String, ProviderError>,
    backend: AiSelector,
) -> Option<String> {
    match result {
        Ok(text) => Some(text),
        Err(e) => {
            error!("{} detection failed: {}", backend, e);
            None
        }
    }
}

/// Handle a detection request.
pub async fn handle(
    openai: &OpenAI,
    gemini: &Gemini,
    anthropic: &Anthropic,
    rekognition: &Rekognition,
    request: DetectRequest,
) -> Result<DetectResponse, GatewayError> {
    let selector = match &request.ai_selection {
        Some(value) => value.parse::<AiSelector>()?,
        None => AiSelector::DEFAULT,
    };

    let items = request.items.into_vec();
    if items.is_empty() {
        return Err(GatewayError::Validation("Invalid request"));
    }

    let image_base64 = request.image.resolve_base64()?;
    let prompt = detection_prompt(&items);

    let detected_items = match selector {
        AiSelector::OpenAI => Some(openai.describe_image(&prompt, &image_base64).await?),
        AiSelector::Gemini => swallow_to_absent(
            gemini.describe_image(&prompt, &image_base64).await,
            selector,
        ),
        AiSelector::Claude => swallow_to_absent(
            anthropic.describe_image(&prompt, &image_base64).await,
            selector,
        ),
        AiSelector::Rekognition => Some(rekognition.detect_labels(&image_base64).await?),
    };

    Ok(DetectResponse { detected_items })
}
