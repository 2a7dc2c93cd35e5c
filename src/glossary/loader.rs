/*!
 * Glossary spreadsheet loading.
 *
 * Reads the first sheet of an xlsx/xls/ods workbook supplied as a raw byte
 * buffer. The first column holds the canonical term; every other populated
 * column maps through a fixed column-position -> language-code table.
 * Columns outside the table keep their raw header text as the language key.
 */

use std::collections::HashMap;
use std::io::Cursor;

use calamine::{open_workbook_auto_from_rs, Data, Reader};
use log::{debug, warn};
use once_cell::sync::Lazy;

use crate::errors::GlossaryError;
use crate::glossary::{Glossary, GlossaryEntry};

/// Fixed 1-based spreadsheet column -> language code mapping.
static COLUMN_LANGUAGES: Lazy<HashMap<usize, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (17, "es"),
        (18, "fr"),
        (19, "de"),
        (20, "pt"),
        (21, "it"),
    ])
});

/// Language code for a 0-based column index, falling back to the raw header.
fn language_for_column(index: usize, header: &str) -> String {
    match COLUMN_LANGUAGES.get(&(index + 1)) {
        Some(code) => (*code).to_string(),
        None if !header.is_empty() => header.to_string(),
        None => format!("Column{}", index + 1),
    }
}

/// Text content of a cell, None when the cell is empty or whitespace.
fn cell_text(cell: &Data) -> Option<String> {
    let text = match cell {
        Data::Empty => return None,
        Data::String(s) => s.clone(),
        other => other.to_string(),
    };
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Parse raw spreadsheet bytes into a Glossary.
///
/// Rows with an empty or missing term column are skipped. Fails when the
/// buffer is not a readable spreadsheet or when no usable entries remain.
pub fn load_glossary(bytes: &[u8]) -> Result<Glossary, GlossaryError> {
    let cursor = Cursor::new(bytes.to_vec());
    let mut workbook = open_workbook_auto_from_rs(cursor)
        .map_err(|e| GlossaryError::Parse(e.to_string()))?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| GlossaryError::Parse("workbook has no sheets".to_string()))?;

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| GlossaryError::Parse(e.to_string()))?;

    let mut rows = range.rows();

    // First row carries the column headers used for unmapped columns.
    let headers: Vec<String> = rows
        .next()
        .map(|row| {
            row.iter()
                .map(|cell| cell_text(cell).unwrap_or_default())
                .collect()
        })
        .unwrap_or_default();

    let mut glossary = Glossary::new();
    for row in rows {
        let Some(term) = row.first().and_then(cell_text) else {
            debug!("Skipping glossary row with empty term column");
            continue;
        };

        let mut entry = GlossaryEntry::new(term);
        for (index, cell) in row.iter().enumerate().skip(1) {
            let Some(translation) = cell_text(cell) else {
                continue;
            };
            let header = headers.get(index).map(String::as_str).unwrap_or("");
            entry
                .translations
                .push((language_for_column(index, header), translation));
        }
        glossary.insert(entry);
    }

    if glossary.is_empty() {
        warn!("Glossary sheet '{}' produced no usable entries", sheet_name);
        return Err(GlossaryError::Empty);
    }

    debug!("Loaded {} glossary entries from sheet '{}'", glossary.len(), sheet_name);
    Ok(glossary)
}
