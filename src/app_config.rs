use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::path::Path;

/// Application configuration module
/// This module handles the gateway configuration including loading,
/// validating and saving configuration settings.
/// Represents the gateway configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// OpenAI provider settings
    #[serde(default)]
    pub openai: OpenAIConfig,

    /// Gemini provider settings
    #[serde(default)]
    pub gemini: GeminiConfig,

    /// Anthropic provider settings
    #[serde(default)]
    pub anthropic: AnthropicConfig,

    /// AWS Rekognition settings
    #[serde(default)]
    pub rekognition: RekognitionConfig,

    /// Translation pipeline settings
    #[serde(default)]
    pub translation: TranslationSettings,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Strategy used when a glossary file accompanies a translation request
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "snake_case")]
pub enum GlossaryStrategy {
    /// Apply the glossary one bounded chunk at a time, feeding each chunk's
    /// model output forward as the next chunk's input
    #[default]
    ChunkedGlossary,
    /// Substitute glossary terms locally, then translate the result literally
    SubstituteThenTranslate,
}

impl std::fmt::Display for GlossaryStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ChunkedGlossary => write!(f, "chunked_glossary"),
            Self::SubstituteThenTranslate => write!(f, "substitute_then_translate"),
        }
    }
}

impl std::str::FromStr for GlossaryStrategy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "chunked_glossary" | "chunked" => Ok(Self::ChunkedGlossary),
            "substitute_then_translate" | "substitute" => Ok(Self::SubstituteThenTranslate),
            _ => Err(anyhow!("Invalid glossary strategy: {}", s)),
        }
    }
}

/// OpenAI service configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct OpenAIConfig {
    /// Model used for image analysis (detection, field extraction)
    #[serde(default = "default_openai_vision_model")]
    pub vision_model: String,

    /// Model used for text tasks (translation, document Q&A)
    #[serde(default = "default_openai_text_model")]
    pub text_model: String,

    /// API key for the service
    #[serde(default = "String::new")]
    pub api_key: String,

    /// Service endpoint URL (optional, for Azure OpenAI or self-hosted)
    #[serde(default = "default_openai_endpoint")]
    pub endpoint: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for OpenAIConfig {
    fn default() -> Self {
        Self {
            vision_model: default_openai_vision_model(),
            text_model: default_openai_text_model(),
            api_key: String::new(),
            endpoint: default_openai_endpoint(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Google Gemini service configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GeminiConfig {
    /// Model name
    #[serde(default = "default_gemini_model")]
    pub model: String,

    /// API key for the service
    #[serde(default = "String::new")]
    pub api_key: String,

    /// Service endpoint URL
    #[serde(default = "default_gemini_endpoint")]
    pub endpoint: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            model: default_gemini_model(),
            api_key: String::new(),
            endpoint: default_gemini_endpoint(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Anthropic service configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AnthropicConfig {
    /// Model name
    #[serde(default = "default_anthropic_model")]
    pub model: String,

    /// API key for the service
    #[serde(default = "String::new")]
    pub api_key: String,

    /// Service endpoint URL (optional, for self-hosted)
    #[serde(default = "default_anthropic_endpoint")]
    pub endpoint: String,

    /// Maximum tokens per response
    #[serde(default = "default_anthropic_max_tokens")]
    pub max_tokens: u32,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for AnthropicConfig {
    fn default() -> Self {
        Self {
            model: default_anthropic_model(),
            api_key: String::new(),
            endpoint: default_anthropic_endpoint(),
            max_tokens: default_anthropic_max_tokens(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// AWS Rekognition configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct RekognitionConfig {
    /// AWS access key id
    #[serde(default = "String::new")]
    pub access_key_id: String,

    /// AWS secret access key
    #[serde(default = "String::new")]
    pub secret_access_key: String,

    /// AWS region
    #[serde(default = "default_aws_region")]
    pub region: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for RekognitionConfig {
    fn default() -> Self {
        Self {
            access_key_id: String::new(),
            secret_access_key: String::new(),
            region: default_aws_region(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Translation pipeline settings
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TranslationSettings {
    /// Strategy used when a glossary file is supplied
    #[serde(default)]
    pub glossary_strategy: GlossaryStrategy,

    /// Maximum characters per glossary chunk
    #[serde(default = "default_max_chunk_chars")]
    pub max_chunk_chars: usize,

    /// Temperature parameter for text generation (0.0 to 1.0)
    /// Lower values make output more deterministic
    #[serde(default = "default_temperature")]
    pub temperature: f32,
}

impl Default for TranslationSettings {
    fn default() -> Self {
        Self {
            glossary_strategy: GlossaryStrategy::default(),
            max_chunk_chars: default_max_chunk_chars(),
            temperature: default_temperature(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn default_timeout_secs() -> u64 {
    120
}

fn default_max_chunk_chars() -> usize {
    10_000
}

fn default_temperature() -> f32 {
    0.0
}

fn default_openai_endpoint() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_gemini_endpoint() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_anthropic_endpoint() -> String {
    "https://api.anthropic.com".to_string()
}

fn default_openai_vision_model() -> String {
    "gpt-4o".to_string()
}

fn default_openai_text_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_gemini_model() -> String {
    "gemini-1.5-flash-latest".to_string()
}

fn default_anthropic_model() -> String {
    "claude-3-opus-20240229".to_string()
}

fn default_anthropic_max_tokens() -> u32 {
    1024
}

fn default_aws_region() -> String {
    "us-east-1".to_string()
}

impl Config {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| anyhow!("Failed to read config file {}: {}", path.as_ref().display(), e))?;
        let config: Config = serde_json::from_str(&content)
            .map_err(|e| anyhow!("Failed to parse config file: {}", e))?;
        Ok(config)
    }

    /// Fill empty credentials from the process environment.
    ///
    /// Called once at startup so the rest of the gateway only ever sees the
    /// explicit configuration struct.
    pub fn fill_from_env(mut self) -> Self {
        fill_if_empty(&mut self.openai.api_key, "OPENAI_API_KEY");
        fill_if_empty(&mut self.gemini.api_key, "GOOGLE_AI_API_KEY");
        fill_if_empty(&mut self.anthropic.api_key, "CLAUDE_API_KEY");
        fill_if_empty(&mut self.rekognition.access_key_id, "AWS_ACCESS_KEY_ID");
        fill_if_empty(&mut self.rekognition.secret_access_key, "AWS_SECRET_ACCESS_KEY");
        fill_if_empty(&mut self.rekognition.region, "AWS_REGION");
        self
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        if self.translation.max_chunk_chars == 0 {
            return Err(anyhow!("max_chunk_chars must be greater than zero"));
        }
        if !(0.0..=1.0).contains(&self.translation.temperature) {
            return Err(anyhow!("temperature must be between 0.0 and 1.0"));
        }
        Ok(())
    }
}

fn fill_if_empty(field: &mut String, var: &str) {
    if field.is_empty() {
        if let Ok(value) = std::env::var(var) {
            *field = value;
        }
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            openai: OpenAIConfig::default(),
            gemini: GeminiConfig::default(),
            anthropic: AnthropicConfig::default(),
            rekognition: RekognitionConfig::default(),
            translation: TranslationSettings::default(),
            log_level: LogLevel::default(),
        }
    }
}
