/*!
 * Translation orchestration.
 *
 * The orchestrator picks between a plain literal translation and the two
 * glossary strategies. The chunked strategy is strictly sequential: the
 * glossary is flattened and split into chunks, and the output of translating
 * against chunk N becomes the input text for chunk N+1, so every chunk's
 * terminology gets applied to the final text.
 */

use std::sync::Arc;

use log::{debug, info};

use crate::app_config::GlossaryStrategy;
use crate::errors::TranslationError;
use crate::glossary::chunker::chunk_lines;
use crate::glossary::substitution::TermSubstituter;
use crate::glossary::Glossary;
use crate::providers::CompletionModel;
use crate::translation::prompts::PromptTemplate;

/// Orchestrates translation requests against a completion backend
pub struct TranslationOrchestrator {
    /// Completion backend used for every prompt
    model: Arc<dyn CompletionModel>,
    /// Strategy used when a glossary is supplied
    strategy: GlossaryStrategy,
    /// Character budget per glossary chunk
    max_chunk_chars: usize,
}

impl TranslationOrchestrator {
    /// Create a new orchestrator over the given backend
    pub fn new(
        model: Arc<dyn CompletionModel>,
        strategy: GlossaryStrategy,
        max_chunk_chars: usize,
    ) -> Self {
        Self {
            model,
            strategy,
            max_chunk_chars,
        }
    }

    /// Translate text, applying the configured glossary strategy when a
    /// non-empty glossary is supplied.
    pub async fn translate(
        &self,
        text: &str,
        source_language: &str,
        target_language: &str,
        glossary: Option<&Glossary>,
    ) -> Result<String, TranslationError> {
        match glossary {
            Some(glossary) if !glossary.is_empty() => match self.strategy {
                GlossaryStrategy::ChunkedGlossary => {
                    self.translate_chunked(text, source_language, target_language, glossary)
                        .await
                }
                GlossaryStrategy::SubstituteThenTranslate => {
                    self.translate_substituted(text, source_language, target_language, glossary)
                        .await
                }
            },
            _ => {
                self.translate_literal(text, source_language, target_language)
                    .await
            }
        }
    }

    /// Single literal translation prompt, no glossary involved.
    async fn translate_literal(
        &self,
        text: &str,
        source_language: &str,
        target_language: &str,
    ) -> Result<String, TranslationError> {
        let prompt =
            PromptTemplate::literal_translation().render(source_language, target_language, text);
        let response = self.model.complete(&prompt).await?;
        Ok(response.trim().to_string())
    }

    /// Chunked glossary translation.
    ///
    /// Chunks are processed in order, one completion each, and the result of
    /// each pass feeds the next. Chunk order therefore matters and no two
    /// chunk requests ever run concurrently.
    async fn translate_chunked(
        &self,
        text: &str,
        source_language: &str,
        target_language: &str,
        glossary: &Glossary,
    ) -> Result<String, TranslationError> {
        let lines = glossary.flatten();
        let chunks = chunk_lines(&lines, self.max_chunk_chars);
        info!(
            "Translating with {} glossary chunk(s) ({} terms)",
            chunks.len(),
            glossary.len()
        );

        let template = PromptTemplate::glossary_translation();
        let mut current = text.to_string();
        for (index, chunk) in chunks.iter().enumerate() {
            debug!(
                "Glossary chunk {}/{} ({} chars)",
                index + 1,
                chunks.len(),
                chunk.len()
            );
            let prompt =
                template.render_with_glossary(source_language, target_language, chunk, &current);
            current = self.model.complete(&prompt).await?.trim().to_string();
        }

        Ok(current)
    }

    /// Local term substitution followed by a single literal translation.
    async fn translate_substituted(
        &self,
        text: &str,
        source_language: &str,
        target_language: &str,
        glossary: &Glossary,
    ) -> Result<String, TranslationError> {
        let substituter = TermSubstituter::new(glossary)?;
        let substituted = substituter.apply(text, target_language);
        debug!(
            "Substituted glossary terms before translation ({} -> {} chars)",
            text.len(),
            substituted.len()
        );
        self.translate_literal(&substituted, source_language, target_language)
            .await
    }
}
