/*!
 * Integration tests for spreadsheet glossary loading, using a real xlsx
 * fixture with both mapped and unmapped language columns.
 */

use babelgate::errors::GlossaryError;
use babelgate::glossary::loader::load_glossary;
use babelgate::glossary::substitution::TermSubstituter;

use crate::common;

#[test]
fn test_loadGlossary_fixture_shouldLoadAllTermRows() {
    let bytes = common::load_resource_bytes("glossary.xlsx");
    let glossary = load_glossary(&bytes).unwrap();

    // Rows without a term are skipped
    assert_eq!(glossary.len(), 5);
    for term in ["apple", "C++", "C", "scissor", "compiler"] {
        assert!(glossary.get(term).is_some(), "missing term {term}");
    }
}

#[test]
fn test_loadGlossary_mappedColumns_shouldUseLanguageCodes() {
    let bytes = common::load_resource_bytes("glossary.xlsx");
    let glossary = load_glossary(&bytes).unwrap();

    let apple = glossary.get("apple").unwrap();
    assert_eq!(apple.translation_for("es"), Some("manzana"));
    assert_eq!(apple.translation_for("fr"), Some("pomme"));
}

#[test]
fn test_loadGlossary_unmappedColumn_shouldKeepHeaderAsLanguageKey() {
    let bytes = common::load_resource_bytes("glossary.xlsx");
    let glossary = load_glossary(&bytes).unwrap();

    let apple = glossary.get("apple").unwrap();
    assert_eq!(apple.translation_for("Notes"), Some("fruit"));
}

#[test]
fn test_loadGlossary_sparseRow_shouldOnlyCarryPopulatedCells() {
    let bytes = common::load_resource_bytes("glossary.xlsx");
    let glossary = load_glossary(&bytes).unwrap();

    let compiler = glossary.get("compiler").unwrap();
    assert_eq!(compiler.translation_for("fr"), Some("compilateur"));
    assert_eq!(compiler.translation_for("es"), None);
}

#[test]
fn test_loadGlossary_nonSpreadsheetBytes_shouldBeParseError() {
    let result = load_glossary(b"definitely not a spreadsheet");
    assert!(matches!(result, Err(GlossaryError::Parse(_))));
}

#[test]
fn test_loadedGlossary_substitution_shouldApplyFixtureTerms() {
    let bytes = common::load_resource_bytes("glossary.xlsx");
    let glossary = load_glossary(&bytes).unwrap();
    let substituter = TermSubstituter::new(&glossary).unwrap();

    let output = substituter.apply("I eat apples while writing C++", "es");

    assert_eq!(output, "I eat manzanas while writing C++ estandar");
}

#[test]
fn test_loadedGlossary_flatten_shouldPreserveSpreadsheetOrder() {
    let bytes = common::load_resource_bytes("glossary.xlsx");
    let glossary = load_glossary(&bytes).unwrap();

    let lines = glossary.flatten();
    assert_eq!(lines.len(), 5);
    assert!(lines[0].starts_with("apple | "));
    assert!(lines[1].starts_with("C++ | "));
}
