/*!
 * Glossary handling for terminology-consistent translation.
 *
 * A glossary is loaded fresh from a spreadsheet buffer for each request that
 * supplies one, used during that request, and discarded. The module provides:
 * - `loader`: spreadsheet bytes -> term/per-language-translation mapping
 * - `substitution`: deterministic term replacement ahead of the model call
 * - `chunker`: line-aligned splitting of the flattened glossary
 */

pub mod chunker;
pub mod loader;
pub mod substitution;

use log::warn;

/// Field delimiter used when a glossary entry is flattened to a single line.
pub const FIELD_DELIMITER: &str = " | ";

/// A single glossary entry: one term with its per-language translations.
#[derive(Debug, Clone, PartialEq)]
pub struct GlossaryEntry {
    /// Canonical term, singular form, as written in the spreadsheet
    pub term: String,

    /// (language code, translation) pairs in spreadsheet column order
    pub translations: Vec<(String, String)>,
}

impl GlossaryEntry {
    /// Create an entry with no translations yet.
    pub fn new(term: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            translations: Vec::new(),
        }
    }

    /// Look up the translation for a language code.
    pub fn translation_for(&self, language: &str) -> Option<&str> {
        self.translations
            .iter()
            .find(|(code, _)| code == language)
            .map(|(_, translation)| translation.as_str())
    }

    /// Render the entry as one delimited line: term first, then translations.
    pub fn to_line(&self) -> String {
        let mut fields = Vec::with_capacity(self.translations.len() + 1);
        fields.push(self.term.as_str());
        for (_, translation) in &self.translations {
            fields.push(translation.as_str());
        }
        fields.join(FIELD_DELIMITER)
    }
}

/// A request-scoped term -> per-language-translation mapping.
#[derive(Debug, Clone, Default)]
pub struct Glossary {
    entries: Vec<GlossaryEntry>,
}

impl Glossary {
    /// Create an empty glossary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry, enforcing term-key uniqueness (case-insensitive).
    /// The first occurrence of a duplicated term wins.
    pub fn insert(&mut self, entry: GlossaryEntry) {
        let key = entry.term.to_lowercase();
        if self.entries.iter().any(|e| e.term.to_lowercase() == key) {
            warn!("Duplicate glossary term skipped: {}", entry.term);
            return;
        }
        self.entries.push(entry);
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the glossary has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries, in insertion order.
    pub fn entries(&self) -> &[GlossaryEntry] {
        &self.entries
    }

    /// Find an entry by term, case-insensitive.
    pub fn get(&self, term: &str) -> Option<&GlossaryEntry> {
        let key = term.to_lowercase();
        self.entries.iter().find(|e| e.term.to_lowercase() == key)
    }

    /// Flatten the glossary to one line per entry.
    ///
    /// Entries with no populated fields are skipped with a warning rather
    /// than failing the request.
    pub fn flatten(&self) -> Vec<String> {
        self.entries
            .iter()
            .filter_map(|entry| {
                if entry.term.is_empty() && entry.translations.is_empty() {
                    warn!("Empty glossary entry skipped");
                    return None;
                }
                Some(entry.to_line())
            })
            .collect()
    }
}
