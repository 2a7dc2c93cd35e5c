/*!
 * # Babelgate - AI gateway core
 *
 * A Rust library implementing the core of an AI gateway: glossary-aware
 * text translation, image analysis, and document question answering across
 * several AI backends.
 *
 * ## Features
 *
 * - Glossary-aware translation with two strategies:
 *   - chunked glossary prompts applied sequentially
 *   - local term substitution followed by a literal translation
 * - Spreadsheet glossary loading with a fixed column-to-language mapping
 * - Image item detection across OpenAI, Gemini, Claude and AWS Rekognition
 * - Question answering over PDF documents
 * - Structured field extraction from images
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `glossary`: Glossary model, spreadsheet loader, term substitution and
 *   chunking
 * - `translation`: Prompt templates and the translation orchestrator
 * - `providers`: Client implementations for the AI backends:
 *   - `providers::openai`: OpenAI chat completions (text and vision)
 *   - `providers::gemini`: Google Gemini generateContent
 *   - `providers::anthropic`: Anthropic messages API
 *   - `providers::rekognition`: AWS Rekognition label detection
 * - `services`: The gateway operations (translate, detect, ask, extract)
 * - `file_utils`: File, URL and base64 payload handling
 * - `errors`: Custom error types for the gateway
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod errors;
pub mod file_utils;
pub mod glossary;
pub mod providers;
pub mod services;
pub mod translation;

// Re-export main types for easier usage
pub use app_config::{Config, GlossaryStrategy};
pub use errors::{GatewayError, GlossaryError, ProviderError, TranslationError};
pub use glossary::{Glossary, GlossaryEntry};
pub use services::{AiSelector, Gateway};
pub use translation::TranslationOrchestrator;
