/*!
 * Error types for the babelgate gateway.
 *
 * This module contains custom error types for different parts of the gateway,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors that can occur when working with provider APIs
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Error when making an API request fails
    #[error("API request failed: {0}")]
    RequestFailed(String),

    /// Error when parsing an API response fails
    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    /// Error returned by the API itself
    #[error("API responded with error: {status_code} - {message}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Error message from the API
        message: String,
    },

    /// Error with authentication or missing credentials
    #[error("Authentication error: {0}")]
    AuthenticationError(String),
}

/// Errors that can occur while loading or using a glossary
#[derive(Error, Debug)]
pub enum GlossaryError {
    /// The byte buffer could not be parsed as a supported spreadsheet
    #[error("Invalid glossary format: {0}")]
    Parse(String),

    /// The parsed glossary contains no usable entries
    #[error("Invalid glossary format")]
    Empty,
}

/// Errors that can occur during translation
#[derive(Error, Debug)]
pub enum TranslationError {
    /// Error from the provider API
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Error with the supplied glossary
    #[error("Glossary error: {0}")]
    Glossary(#[from] GlossaryError),
}

/// Gateway error type covering every request-handling failure.
///
/// The split between client-side (400) and provider-side (500) errors and the
/// asymmetry in exposed messages follow the original service contract:
/// input-preparation failures carry their own message back to the caller,
/// provider failures are logged and replaced with a fixed generic message.
#[derive(Error, Debug)]
pub enum GatewayError {
    /// A required request field is missing
    #[error("{0}")]
    Validation(&'static str),

    /// A file reference is neither a readable path nor a raw byte buffer
    #[error("Unsupported file format")]
    UnsupportedInput,

    /// A remote document fetch failed; carries the transport status
    #[error("Failed to fetch PDF from URL: {0}")]
    Retrieval(String),

    /// The glossary spreadsheet was unparseable or empty
    #[error(transparent)]
    Glossary(#[from] GlossaryError),

    /// The AI/vision backend call failed or returned unparsable output
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// The translation pipeline failed
    #[error("Translation error: {0}")]
    Translation(#[from] TranslationError),

    /// The caller selected an unknown provider
    #[error("Invalid AI selection")]
    InvalidSelection,
}

impl GatewayError {
    /// HTTP-style status code for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Validation(_)
            | Self::UnsupportedInput
            | Self::Retrieval(_)
            | Self::Glossary(_)
            | Self::InvalidSelection => 400,
            Self::Provider(_) | Self::Translation(_) => 500,
        }
    }

    /// Message safe to return to the caller.
    ///
    /// Client errors expose their own message (with a generic fallback when
    /// empty); provider errors are replaced with a fixed message so upstream
    /// internals never leak.
    pub fn public_message(&self) -> String {
        match self {
            Self::Translation(_) => "Failed to translate text".to_string(),
            Self::Provider(_) => "Failed to process the AI response".to_string(),
            other => {
                let message = other.to_string();
                if message.is_empty() {
                    "An error occurred".to_string()
                } else {
                    message
                }
            }
        }
    }
}

impl From<std::io::Error> for GatewayError {
    fn from(_error: std::io::Error) -> Self {
        Self::UnsupportedInput
    }
}
