/*!
 * Prompt templates for gateway translation.
 *
 * Two fixed templates: a literal translation used when no glossary is
 * supplied (or after local term substitution), and a glossary-chunk template
 * used by the chunked strategy.
 */

/// Prompt template with `{placeholder}` substitution.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    /// The template string with placeholders
    template: String,
}

impl PromptTemplate {
    /// Literal translation prompt.
    /// Placeholders: {source_lang}, {target_lang}, {text}.
    pub const LITERAL_TRANSLATION: &'static str = "Translate the following text from {source_lang} to {target_lang}. Provide only the translation, without any additional text:\n\n{text}";

    /// Glossary-chunk translation prompt.
    /// Placeholders: {source_lang}, {target_lang}, {glossary_chunk}, {text}.
    pub const GLOSSARY_TRANSLATION: &'static str = "You are a professional translator. Translate the following text from {source_lang} to {target_lang}.\nUse the provided glossary chunk for consistent terminology. Each line of the glossary contains all information about a term, separated by '|':\n\nGlossary Chunk:\n{glossary_chunk}\n\nText to translate:\n{text}\n\nTranslation:";

    /// Create a new prompt template.
    pub fn new(template: &str) -> Self {
        Self {
            template: template.to_string(),
        }
    }

    /// Create the literal translation template.
    pub fn literal_translation() -> Self {
        Self::new(Self::LITERAL_TRANSLATION)
    }

    /// Create the glossary-chunk translation template.
    pub fn glossary_translation() -> Self {
        Self::new(Self::GLOSSARY_TRANSLATION)
    }

    /// Render the literal template with its three variables.
    pub fn render(&self, source_lang: &str, target_lang: &str, text: &str) -> String {
        self.template
            .replace("{source_lang}", source_lang)
            .replace("{target_lang}", target_lang)
            .replace("{text}", text)
    }

    /// Render the glossary template, including the chunk variable.
    pub fn render_with_glossary(
        &self,
        source_lang: &str,
        target_lang: &str,
        glossary_chunk: &str,
        text: &str,
    ) -> String {
        self.template
            .replace("{source_lang}", source_lang)
            .replace("{target_lang}", target_lang)
            .replace("{glossary_chunk}", glossary_chunk)
            .replace("{text}", text)
    }
}
