use std::time::Duration;

use async_trait::async_trait;
use log::error;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::app_config::OpenAIConfig;
use crate::errors::ProviderError;
use crate::file_utils::format_base64_image;
use crate::providers::{CompletionModel, VisionModel};

/// OpenAI client for the chat completions API
#[derive(Debug)]
pub struct OpenAI {
    /// HTTP client for API requests
    client: Client,
    /// API key for authentication
    api_key: String,
    /// API endpoint URL
    endpoint: String,
    /// Model used for text-only requests
    text_model: String,
    /// Model used for vision requests
    vision_model: String,
    /// Temperature for generation
    temperature: f32,
}

/// A chat completion request
#[derive(Debug, Serialize)]
pub struct OpenAIRequest {
    /// The model to use
    model: String,

    /// The messages for the conversation
    messages: Vec<OpenAIMessage>,

    /// Temperature for generation
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

/// A single chat message. Content is either a plain string or a list of
/// typed parts (text / image_url) for vision requests.
#[derive(Debug, Serialize)]
pub struct OpenAIMessage {
    /// Role of the message sender (system, user, assistant)
    pub role: String,

    /// Content of the message
    pub content: MessageContent,
}

/// Message content variants
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum MessageContent {
    /// Plain text content
    Text(String),
    /// Multi-part content for vision requests
    Parts(Vec<ContentPart>),
}

/// One part of a multi-part message
#[derive(Debug, Serialize)]
#[serde(tag = "type")]
pub enum ContentPart {
    /// A text fragment
    #[serde(rename = "text")]
    Text {
        /// The text itself
        text: String,
    },
    /// An image reference (data URL or https URL)
    #[serde(rename = "image_url")]
    ImageUrl {
        /// The image payload
        image_url: ImageUrl,
    },
}

/// Image URL wrapper object
#[derive(Debug, Serialize)]
pub struct ImageUrl {
    /// Data URL or https URL of the image
    pub url: String,
}

/// A chat completion response
#[derive(Debug, Deserialize)]
pub struct OpenAIResponse {
    /// Response choices
    pub choices: Vec<OpenAIChoice>,
}

/// A single completion choice
#[derive(Debug, Deserialize)]
pub struct OpenAIChoice {
    /// The generated message
    pub message: OpenAIResponseMessage,
}

/// The message inside a completion choice
#[derive(Debug, Deserialize)]
pub struct OpenAIResponseMessage {
    /// The generated content
    #[serde(default)]
    pub content: String,
}

impl OpenAIRequest {
    /// Create a new request for a model
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            messages: Vec::new(),
            temperature: None,
        }
    }

    /// Add a plain text message
    pub fn add_message(mut self, role: impl Into<String>, content: impl Into<String>) -> Self {
        self.messages.push(OpenAIMessage {
            role: role.into(),
            content: MessageContent::Text(content.into()),
        });
        self
    }

    /// Add a user message combining a text prompt and an image data URL
    pub fn add_vision_message(mut self, text: impl Into<String>, image_url: impl Into<String>) -> Self {
        self.messages.push(OpenAIMessage {
            role: "user".to_string(),
            content: MessageContent::Parts(vec![
                ContentPart::Text { text: text.into() },
                ContentPart::ImageUrl {
                    image_url: ImageUrl { url: image_url.into() },
                },
            ]),
        });
        self
    }

    /// Set the temperature
    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }
}

impl OpenAI {
    /// Create a new OpenAI client from configuration
    pub fn new(config: &OpenAIConfig, temperature: f32) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(config.timeout_secs))
                .build()
                .unwrap_or_default(),
            api_key: config.api_key.clone(),
            endpoint: config.endpoint.clone(),
            text_model: config.text_model.clone(),
            vision_model: config.vision_model.clone(),
            temperature,
        }
    }

    /// Send a chat completion request
    pub async fn send(&self, request: OpenAIRequest) -> Result<OpenAIResponse, ProviderError> {
        let api_url = format!("{}/chat/completions", self.endpoint.trim_end_matches('/'));

        let response = self
            .client
            .post(&api_url)
            .header("Content-Type", "application/json")
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| ProviderError::RequestFailed(format!("OpenAI request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to get error response text".to_string());
            error!("OpenAI API error ({}): {}", status, error_text);
            return Err(ProviderError::ApiError {
                status_code: status.as_u16(),
                message: error_text,
            });
        }

        response
            .json::<OpenAIResponse>()
            .await
            .map_err(|e| ProviderError::ParseError(format!("OpenAI response: {e}")))
    }

    /// Extract the first choice's content from a response
    pub fn extract_text(response: &OpenAIResponse) -> Result<String, ProviderError> {
        response
            .choices
            .first()
            .map(|choice| choice.message.content.clone())
            .ok_or_else(|| ProviderError::ParseError("OpenAI returned no choices".to_string()))
    }
}

#[async_trait]
impl CompletionModel for OpenAI {
    async fn complete(&self, prompt: &str) -> Result<String, ProviderError> {
        let request = OpenAIRequest::new(&self.text_model)
            .add_message("user", prompt)
            .temperature(self.temperature);

        let response = self.send(request).await?;
        Self::extract_text(&response)
    }
}

#[async_trait]
impl VisionModel for OpenAI {
    async fn describe_image(
        &self,
        prompt: &str,
        image_base64: &str,
    ) -> Result<String, ProviderError> {
        let request = OpenAIRequest::new(&self.vision_model)
            .add_vision_message(prompt, format_base64_image(image_base64))
            .temperature(self.temperature);

        let response = self.send(request).await?;
        Self::extract_text(&response)
    }
}
