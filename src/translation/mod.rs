/*!
 * Translation pipeline.
 *
 * This module turns a translation request into one or more prompts against a
 * completion backend. It is split into two submodules:
 *
 * - `prompts`: the fixed prompt templates
 * - `orchestrator`: strategy selection and sequential chunked translation
 */

pub use self::orchestrator::TranslationOrchestrator;
pub use self::prompts::PromptTemplate;

pub mod orchestrator;
pub mod prompts;
