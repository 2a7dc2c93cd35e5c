/*!
 * Unit tests for the glossary model, term substitution and chunking,
 * exercised through the public crate API.
 */

use babelgate::glossary::chunker::chunk_lines;
use babelgate::glossary::substitution::TermSubstituter;
use babelgate::glossary::{Glossary, GlossaryEntry};

fn entry(term: &str, translations: &[(&str, &str)]) -> GlossaryEntry {
    let mut entry = GlossaryEntry::new(term);
    for (language, translation) in translations {
        entry
            .translations
            .push((language.to_string(), translation.to_string()));
    }
    entry
}

fn sample_glossary() -> Glossary {
    let mut glossary = Glossary::new();
    glossary.insert(entry("apple", &[("es", "manzana"), ("fr", "pomme")]));
    glossary.insert(entry("C++", &[("es", "C++ estandar")]));
    glossary.insert(entry("C", &[("es", "lenguaje C")]));
    glossary.insert(entry("scissor", &[("es", "tijeras")]));
    glossary
}

#[test]
fn test_substitution_twiceApplied_shouldEqualOnceApplied() {
    let glossary = sample_glossary();
    let substituter = TermSubstituter::new(&glossary).unwrap();

    // "C++" is excluded here: its translation contains the term itself,
    // which is exactly the collision the idempotence property excludes.
    let input = "An apple a day, sharpen the scissors";
    let once = substituter.apply(input, "es");
    let twice = substituter.apply(&once, "es");

    assert_eq!(once, twice);
}

#[test]
fn test_substitution_overlappingTerms_shouldPreferLongestMatch() {
    let glossary = sample_glossary();
    let substituter = TermSubstituter::new(&glossary).unwrap();

    let output = substituter.apply("I write C++ every day", "es");

    assert!(output.contains("C++ estandar"));
    assert!(!output.contains("lenguaje C++"));
}

#[test]
fn test_substitution_pluralMatch_shouldPluralizeTranslation() {
    let glossary = sample_glossary();
    let substituter = TermSubstituter::new(&glossary).unwrap();

    assert_eq!(substituter.apply("I like apples", "es"), "I like manzanas");
}

#[test]
fn test_substitution_translationEndingInS_shouldNotDoublePlural() {
    let glossary = sample_glossary();
    let substituter = TermSubstituter::new(&glossary).unwrap();

    assert_eq!(substituter.apply("two scissors", "es"), "two tijeras");
}

#[test]
fn test_substitution_missingTargetLanguage_shouldLeaveTermUnchanged() {
    let glossary = sample_glossary();
    let substituter = TermSubstituter::new(&glossary).unwrap();

    // "scissor" has no French translation
    let output = substituter.apply("a scissor and an apple", "fr");

    assert!(output.contains("scissor"));
    assert!(output.contains("pomme"));
}

#[test]
fn test_glossary_duplicateTerm_shouldKeepFirstEntry() {
    let mut glossary = Glossary::new();
    glossary.insert(entry("apple", &[("es", "manzana")]));
    glossary.insert(entry("Apple", &[("es", "poma")]));

    assert_eq!(glossary.len(), 1);
    assert_eq!(
        glossary.get("APPLE").unwrap().translation_for("es"),
        Some("manzana")
    );
}

#[test]
fn test_chunker_anyBudgetAtLeastLongestLine_shouldPreserveLineSet() {
    let lines: Vec<String> = (0..40)
        .map(|i| format!("term{} | translation number {}", i, i))
        .collect();
    let longest = lines.iter().map(|l| l.len()).max().unwrap();

    for budget in [longest, longest + 7, 100, 1000, 100_000] {
        let chunks = chunk_lines(&lines, budget);
        let rejoined: Vec<String> = chunks
            .iter()
            .flat_map(|chunk| chunk.lines().map(|l| l.to_string()))
            .collect();
        assert_eq!(rejoined, lines, "budget {}", budget);
        for chunk in &chunks {
            assert!(chunk.len() <= budget, "budget {}", budget);
        }
    }
}

#[test]
fn test_flatten_shouldEmitOneDelimitedLinePerEntry() {
    let glossary = sample_glossary();
    let lines = glossary.flatten();

    assert_eq!(lines.len(), glossary.len());
    assert!(lines[0].starts_with("apple | "));
    assert!(lines[0].contains("manzana"));
}
