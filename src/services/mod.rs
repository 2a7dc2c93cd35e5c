/*!
 * Gateway services.
 *
 * Each submodule implements one gateway operation over the provider clients:
 *
 * - `translate`: glossary-aware text translation
 * - `detection`: item detection in images, dispatched across backends
 * - `knowledge_base`: question answering over a PDF document
 * - `values`: structured field extraction from an image
 *
 * The `Gateway` struct wires the configured provider clients to those
 * operations. Selector parsing and request validation happen here, before
 * any provider call is made.
 */

use std::str::FromStr;
use std::sync::Arc;

use serde::Deserialize;

use crate::app_config::Config;
use crate::errors::GatewayError;
use crate::providers::anthropic::Anthropic;
use crate::providers::gemini::Gemini;
use crate::providers::openai::OpenAI;
use crate::providers::rekognition::Rekognition;
use crate::translation::TranslationOrchestrator;

pub mod detection;
pub mod knowledge_base;
pub mod translate;
pub mod values;

pub use detection::{DetectRequest, DetectResponse};
pub use knowledge_base::{AskRequest, AskResponse};
pub use translate::{TranslateRequest, TranslateResponse};
pub use values::{ExtractFieldsRequest, ExtractFieldsResponse};

/// Closed set of AI backends a caller may select.
///
/// Selector strings are part of the request contract and match the values
/// callers already send; an unrecognized string is an error, never a
/// fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AiSelector {
    /// OpenAI vision-language model
    OpenAI,
    /// Google Gemini model
    Gemini,
    /// Anthropic Claude model
    Claude,
    /// AWS Rekognition label detection
    Rekognition,
}

impl AiSelector {
    /// Selector used when the caller does not specify one.
    pub const DEFAULT: Self = Self::OpenAI;

    /// The wire string for this selector.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OpenAI => "OpenAI gpt-4o",
            Self::Gemini => "Google gemini-light",
            Self::Claude => "Anthropic Claude-3",
            Self::Rekognition => "AWS Rekognition",
        }
    }
}

impl FromStr for AiSelector {
    type Err = GatewayError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "OpenAI gpt-4o" => Ok(Self::OpenAI),
            "Google gemini-light" => Ok(Self::Gemini),
            "Anthropic Claude-3" => Ok(Self::Claude),
            "AWS Rekognition" => Ok(Self::Rekognition),
            _ => Err(GatewayError::InvalidSelection),
        }
    }
}

impl std::fmt::Display for AiSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A list of item names, accepted either as a JSON array or as a single
/// comma-separated string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ItemList {
    /// Already a list
    List(Vec<String>),
    /// Comma-separated string, split and trimmed
    Csv(String),
}

impl ItemList {
    /// Normalize to a vector of trimmed, non-empty item names.
    pub fn into_vec(self) -> Vec<String> {
        match self {
            Self::List(items) => items
                .into_iter()
                .map(|item| item.trim().to_string())
                .filter(|item| !item.is_empty())
                .collect(),
            Self::Csv(csv) => csv
                .split(',')
                .map(|item| item.trim().to_string())
                .filter(|item| !item.is_empty())
                .collect(),
        }
    }
}

/// The gateway: configured provider clients plus the translation pipeline.
pub struct Gateway {
    /// OpenAI client, the default backend for every operation
    openai: Arc<OpenAI>,
    /// Gemini vision client
    gemini: Gemini,
    /// Claude vision client
    anthropic: Anthropic,
    /// Rekognition label detection client
    rekognition: Rekognition,
    /// Translation pipeline over the OpenAI text model
    orchestrator: TranslationOrchestrator,
}

impl Gateway {
    /// Build a gateway from configuration.
    pub fn new(config: &Config) -> Self {
        let openai = Arc::new(OpenAI::new(
            &config.openai,
            config.translation.temperature,
        ));
        let orchestrator = TranslationOrchestrator::new(
            openai.clone(),
            config.translation.glossary_strategy,
            config.translation.max_chunk_chars,
        );
        Self {
            openai,
            gemini: Gemini::new(&config.gemini),
            anthropic: Anthropic::new(&config.anthropic),
            rekognition: Rekognition::new(&config.rekognition),
            orchestrator,
        }
    }

    /// Translate text, loading a glossary from the request if one is attached.
    pub async fn translate(
        &self,
        request: TranslateRequest,
    ) -> Result<TranslateResponse, GatewayError> {
        translate::handle(&self.orchestrator, request).await
    }

    /// Detect items in an image using the selected backend.
    pub async fn detect(&self, request: DetectRequest) -> Result<DetectResponse, GatewayError> {
        detection::handle(
            self.openai.as_ref(),
            &self.gemini,
            &self.anthropic,
            &self.rekognition,
            request,
        )
        .await
    }

    /// Answer a question against a PDF document.
    pub async fn ask(&self, request: AskRequest) -> Result<AskResponse, GatewayError> {
        knowledge_base::handle(self.openai.as_ref(), request).await
    }

    /// Extract field values from an image.
    pub async fn extract_fields(
        &self,
        request: ExtractFieldsRequest,
    ) -> Result<ExtractFieldsResponse, GatewayError> {
        values::handle(self.openai.as_ref(), request).await
    }
}
