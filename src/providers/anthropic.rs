use std::time::Duration;

use async_trait::async_trait;
use log::error;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::app_config::AnthropicConfig;
use crate::errors::ProviderError;
use crate::file_utils::{strip_base64_prefix, MIME_JPEG};
use crate::providers::{CompletionModel, VisionModel};

/// Anthropic client for interacting with the Anthropic messages API
#[derive(Debug)]
pub struct Anthropic {
    /// HTTP client for API requests
    client: Client,
    /// API key for authentication
    api_key: String,
    /// API endpoint URL (optional, defaults to public API)
    endpoint: String,
    /// Model name
    model: String,
    /// Maximum number of tokens to generate
    max_tokens: u32,
}

/// Anthropic message request
#[derive(Debug, Serialize)]
pub struct AnthropicRequest {
    /// The model to use
    model: String,

    /// The messages for the conversation
    messages: Vec<AnthropicMessage>,

    /// System prompt to guide the AI
    #[serde(skip_serializing_if = "Option::is_none")]
    system: Option<String>,

    /// Temperature for generation
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,

    /// Maximum number of tokens to generate
    max_tokens: u32,
}

/// Anthropic message format
#[derive(Debug, Serialize)]
pub struct AnthropicMessage {
    /// Role of the message sender (user, assistant)
    pub role: String,

    /// Content blocks of the message
    pub content: Vec<ContentBlock>,
}

/// A typed content block within a message
#[derive(Debug, Serialize)]
#[serde(tag = "type")]
pub enum ContentBlock {
    /// A text block
    #[serde(rename = "text")]
    Text {
        /// The text itself
        text: String,
    },
    /// A base64 image block
    #[serde(rename = "image")]
    Image {
        /// The image payload
        source: ImageSource,
    },
}

/// Base64 image source
#[derive(Debug, Serialize)]
pub struct ImageSource {
    /// Source type, always "base64"
    #[serde(rename = "type")]
    pub source_type: String,
    /// Mime type of the image
    pub media_type: String,
    /// Base64-encoded image bytes
    pub data: String,
}

impl ImageSource {
    /// A base64 JPEG source
    pub fn jpeg(data: impl Into<String>) -> Self {
        Self {
            source_type: "base64".to_string(),
            media_type: MIME_JPEG.to_string(),
            data: data.into(),
        }
    }
}

/// Anthropic response
#[derive(Debug, Deserialize)]
pub struct AnthropicResponse {
    /// The content of the response
    pub content: Vec<AnthropicContent>,
}

/// Individual content block in an Anthropic response
#[derive(Debug, Deserialize)]
pub struct AnthropicContent {
    /// The type of content
    #[serde(rename = "type")]
    pub content_type: String,

    /// The actual text content
    #[serde(default)]
    pub text: String,
}

impl AnthropicRequest {
    /// Create a new Anthropic request
    pub fn new(model: impl Into<String>, max_tokens: u32) -> Self {
        Self {
            model: model.into(),
            messages: Vec::new(),
            system: None,
            temperature: None,
            max_tokens,
        }
    }

    /// Add a text-only message to the request
    pub fn add_message(mut self, role: impl Into<String>, content: impl Into<String>) -> Self {
        self.messages.push(AnthropicMessage {
            role: role.into(),
            content: vec![ContentBlock::Text { text: content.into() }],
        });
        self
    }

    /// Add a user message carrying an image followed by a text prompt
    pub fn add_image_message(mut self, image_base64: impl Into<String>, prompt: impl Into<String>) -> Self {
        self.messages.push(AnthropicMessage {
            role: "user".to_string(),
            content: vec![
                ContentBlock::Image {
                    source: ImageSource::jpeg(image_base64),
                },
                ContentBlock::Text { text: prompt.into() },
            ],
        });
        self
    }

    /// Set the system prompt
    pub fn system(mut self, system: impl Into<String>) -> Self {
        self.system = Some(system.into());
        self
    }

    /// Set the temperature
    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }
}

impl Anthropic {
    /// Create a new Anthropic client from configuration
    pub fn new(config: &AnthropicConfig) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(config.timeout_secs))
                .build()
                .unwrap_or_default(),
            api_key: config.api_key.clone(),
            endpoint: config.endpoint.clone(),
            model: config.model.clone(),
            max_tokens: config.max_tokens,
        }
    }

    /// Complete a messages request
    pub async fn complete_request(
        &self,
        request: AnthropicRequest,
    ) -> Result<AnthropicResponse, ProviderError> {
        let api_url = if self.endpoint.is_empty() {
            "https://api.anthropic.com/v1/messages".to_string()
        } else {
            format!("{}/v1/messages", self.endpoint.trim_end_matches('/'))
        };

        let response = self
            .client
            .post(&api_url)
            .header("Content-Type", "application/json")
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", "2023-06-01")
            .json(&request)
            .send()
            .await
            .map_err(|e| ProviderError::RequestFailed(format!("Anthropic request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to get error response text".to_string());
            error!("Anthropic API error ({}): {}", status, error_text);
            return Err(ProviderError::ApiError {
                status_code: status.as_u16(),
                message: error_text,
            });
        }

        response
            .json::<AnthropicResponse>()
            .await
            .map_err(|e| ProviderError::ParseError(format!("Anthropic response: {e}")))
    }

    /// Extract text from an Anthropic response
    pub fn extract_text(response: &AnthropicResponse) -> String {
        response
            .content
            .iter()
            .filter(|c| c.content_type == "text")
            .map(|c| c.text.clone())
            .collect()
    }
}

#[async_trait]
impl CompletionModel for Anthropic {
    async fn complete(&self, prompt: &str) -> Result<String, ProviderError> {
        let request = AnthropicRequest::new(&self.model, self.max_tokens).add_message("user", prompt);
        let response = self.complete_request(request).await?;
        Ok(Self::extract_text(&response))
    }
}

#[async_trait]
impl VisionModel for Anthropic {
    async fn describe_image(
        &self,
        prompt: &str,
        image_base64: &str,
    ) -> Result<String, ProviderError> {
        let request = AnthropicRequest::new(&self.model, self.max_tokens)
            .add_image_message(strip_base64_prefix(image_base64), prompt);
        let response = self.complete_request(request).await?;
        Ok(Self::extract_text(&response))
    }
}
