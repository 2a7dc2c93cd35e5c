/*!
 * Provider implementations for the AI backends the gateway forwards to.
 *
 * This module contains client implementations for the supported providers:
 * - OpenAI: chat completions, with vision content parts
 * - Gemini: Google Generative Language API
 * - Anthropic: Anthropic messages API, with image blocks
 * - Rekognition: AWS Rekognition label detection
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::errors::ProviderError;

/// Text completion capability used by the translation, knowledge-base and
/// field-extraction pipelines.
#[async_trait]
pub trait CompletionModel: Send + Sync + Debug {
    /// Complete a text prompt, returning the model's raw reply.
    async fn complete(&self, prompt: &str) -> Result<String, ProviderError>;
}

/// Vision capability: analyze an image guided by a text prompt.
#[async_trait]
pub trait VisionModel: Send + Sync + Debug {
    /// Submit a prompt plus a base64-encoded JPEG, returning the model's
    /// free-text reply.
    async fn describe_image(
        &self,
        prompt: &str,
        image_base64: &str,
    ) -> Result<String, ProviderError>;
}

pub mod anthropic;
pub mod gemini;
pub mod mock;
pub mod openai;
pub mod rekognition;
