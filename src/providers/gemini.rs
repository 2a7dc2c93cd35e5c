use std::time::Duration;

use async_trait::async_trait;
use log::error;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::app_config::GeminiConfig;
use crate::errors::ProviderError;
use crate::file_utils::{strip_base64_prefix, MIME_JPEG};
use crate::providers::VisionModel;

/// Gemini client for the Google Generative Language API
#[derive(Debug)]
pub struct Gemini {
    /// HTTP client for API requests
    client: Client,
    /// API key for authentication
    api_key: String,
    /// API endpoint URL
    endpoint: String,
    /// Model name
    model: String,
}

/// A generateContent request
#[derive(Debug, Serialize)]
pub struct GeminiRequest {
    /// Conversation contents
    contents: Vec<GeminiContent>,
}

/// One content block of a request
#[derive(Debug, Serialize)]
pub struct GeminiContent {
    /// Parts making up the block
    parts: Vec<GeminiPart>,
}

/// One part: either text or inline image data
#[derive(Debug, Serialize)]
pub struct GeminiPart {
    /// Text fragment
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,

    /// Inline binary data (base64)
    #[serde(rename = "inline_data", skip_serializing_if = "Option::is_none")]
    inline_data: Option<GeminiInlineData>,
}

/// Inline base64 payload with its mime type
#[derive(Debug, Serialize)]
pub struct GeminiInlineData {
    /// Mime type of the payload
    mime_type: String,
    /// Base64-encoded bytes
    data: String,
}

/// A generateContent response
#[derive(Debug, Deserialize)]
pub struct GeminiResponse {
    /// Generated candidates
    #[serde(default)]
    pub candidates: Vec<GeminiCandidate>,
}

/// A single response candidate
#[derive(Debug, Deserialize)]
pub struct GeminiCandidate {
    /// Candidate content
    pub content: GeminiResponseContent,
}

/// Content of a candidate
#[derive(Debug, Deserialize)]
pub struct GeminiResponseContent {
    /// Parts of the candidate content
    #[serde(default)]
    pub parts: Vec<GeminiResponsePart>,
}

/// A single response part
#[derive(Debug, Deserialize)]
pub struct GeminiResponsePart {
    /// Text of the part
    #[serde(default)]
    pub text: String,
}

impl GeminiRequest {
    /// Build a request pairing a text prompt with an inline JPEG image
    pub fn with_image(prompt: impl Into<String>, image_base64: impl Into<String>) -> Self {
        Self {
            contents: vec![GeminiContent {
                parts: vec![
                    GeminiPart {
                        text: Some(prompt.into()),
                        inline_data: None,
                    },
                    GeminiPart {
                        text: None,
                        inline_data: Some(GeminiInlineData {
                            mime_type: MIME_JPEG.to_string(),
                            data: image_base64.into(),
                        }),
                    },
                ],
            }],
        }
    }
}

impl Gemini {
    /// Create a new Gemini client from configuration
    pub fn new(config: &GeminiConfig) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(config.timeout_secs))
                .build()
                .unwrap_or_default(),
            api_key: config.api_key.clone(),
            endpoint: config.endpoint.clone(),
            model: config.model.clone(),
        }
    }

    /// Send a generateContent request
    pub async fn generate(&self, request: GeminiRequest) -> Result<GeminiResponse, ProviderError> {
        let api_url = format!(
            "{}/models/{}:generateContent?key={}",
            self.endpoint.trim_end_matches('/'),
            self.model,
            self.api_key
        );

        let response = self
            .client
            .post(&api_url)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| ProviderError::RequestFailed(format!("Gemini request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to get error response text".to_string());
            error!("Gemini API error ({}): {}", status, error_text);
            return Err(ProviderError::ApiError {
                status_code: status.as_u16(),
                message: error_text,
            });
        }

        response
            .json::<GeminiResponse>()
            .await
            .map_err(|e| ProviderError::ParseError(format!("Gemini response: {e}")))
    }

    /// Concatenate the text parts of the first candidate
    pub fn extract_text(response: &GeminiResponse) -> Result<String, ProviderError> {
        response
            .candidates
            .first()
            .map(|candidate| {
                candidate
                    .content
                    .parts
                    .iter()
                    .map(|part| part.text.as_str())
                    .collect::<String>()
            })
            .ok_or_else(|| ProviderError::ParseError("Gemini returned no candidates".to_string()))
    }
}

#[async_trait]
impl VisionModel for Gemini {
    async fn describe_image(
        &self,
        prompt: &str,
        image_base64: &str,
    ) -> Result<String, ProviderError> {
        let request = GeminiRequest::with_image(prompt, strip_base64_prefix(image_base64));
        let response = self.generate(request).await?;
        Self::extract_text(&response)
    }
}
