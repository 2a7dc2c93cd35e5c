/*!
 * Deterministic glossary term substitution.
 *
 * Replaces recognized terms in the source text with their target-language
 * translations before the text ever reaches the language model. Matching is
 * case-insensitive, longest term first (so a short term never shadows a
 * longer overlapping one), with every regex metacharacter escaped and a
 * single optional trailing "s" per term as naive plural handling.
 */

use regex::{Captures, Regex, RegexBuilder};

use crate::errors::GlossaryError;
use crate::glossary::Glossary;

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// One alternation fragment for a term. Word boundaries are only attached
/// where the term edge is a word character; a term like "C++" would never
/// match with a trailing `\b` because '+' and the following space are both
/// non-word.
fn term_fragment(term: &str) -> String {
    let escaped = regex::escape(term);
    let leading = if term.chars().next().is_some_and(is_word_char) {
        r"\b"
    } else {
        ""
    };
    let trailing = if term.chars().last().is_some_and(is_word_char) {
        r"\b"
    } else {
        ""
    };
    format!("{leading}{escaped}s?{trailing}")
}

/// Request-scoped term substitution engine over a borrowed glossary.
pub struct TermSubstituter<'a> {
    glossary: &'a Glossary,
    pattern: Regex,
}

impl<'a> TermSubstituter<'a> {
    /// Build the combined term expression for a glossary.
    pub fn new(glossary: &'a Glossary) -> Result<Self, GlossaryError> {
        if glossary.is_empty() {
            return Err(GlossaryError::Empty);
        }

        let mut terms: Vec<&str> = glossary.entries().iter().map(|e| e.term.as_str()).collect();
        // Longest first: the regex alternation is first-match-wins, so the
        // longer of two overlapping terms must come first.
        terms.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

        let alternation = terms
            .iter()
            .map(|term| term_fragment(term))
            .collect::<Vec<_>>()
            .join("|");

        let pattern = RegexBuilder::new(&alternation)
            .case_insensitive(true)
            .build()
            .map_err(|e| GlossaryError::Parse(e.to_string()))?;

        Ok(Self { glossary, pattern })
    }

    /// Replace every recognized term with its target-language translation.
    ///
    /// A matched term without a translation for `target_language` is left
    /// unchanged. The operation is purely local and idempotent on its own
    /// output as long as no translation collides with another term.
    pub fn apply(&self, text: &str, target_language: &str) -> String {
        self.pattern
            .replace_all(text, |caps: &Captures| {
                let matched = caps.get(0).map(|m| m.as_str()).unwrap_or_default();
                self.substitute_match(matched, target_language)
            })
            .into_owned()
    }

    fn substitute_match(&self, matched: &str, target_language: &str) -> String {
        // The match is either a term verbatim or a term plus the optional
        // trailing "s" the expression allows.
        let (entry, pluralized) = match self.glossary.get(matched) {
            Some(entry) => (entry, false),
            None if matched.ends_with(['s', 'S']) => {
                match self.glossary.get(&matched[..matched.len() - 1]) {
                    Some(entry) => (entry, true),
                    None => return matched.to_string(),
                }
            }
            None => return matched.to_string(),
        };

        match entry.translation_for(target_language) {
            Some(translation) if pluralized && !translation.ends_with('s') => {
                format!("{translation}s")
            }
            Some(translation) => translation.to_string(),
            None => matched.to_string(),
        }
    }
}
