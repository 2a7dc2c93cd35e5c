/*!
 * Line-aligned chunking of a flattened glossary.
 *
 * When a glossary is too large for a single model prompt it is split into
 * bounded chunks. Chunk boundaries always fall on entry (line) boundaries;
 * a line is never split across two chunks.
 */

use log::warn;

/// Default maximum characters per glossary chunk.
pub const DEFAULT_MAX_CHUNK_CHARS: usize = 10_000;

/// Greedily accumulate whole lines into chunks under `max_chars`.
///
/// Empty lines are dropped. A single line longer than the budget becomes its
/// own oversized chunk rather than being split. Chunks are trimmed.
pub fn chunk_lines(lines: &[String], max_chars: usize) -> Vec<String> {
    let mut chunks: Vec<String> = Vec::new();
    let mut current = String::new();

    for line in lines {
        if line.trim().is_empty() {
            continue;
        }
        if line.len() > max_chars {
            warn!(
                "Glossary line exceeds chunk budget ({} > {} chars); emitting oversized chunk",
                line.len(),
                max_chars
            );
        }

        // +1 accounts for the newline that would join the line in.
        if !current.is_empty() && current.len() + line.len() + 1 > max_chars {
            chunks.push(current.trim().to_string());
            current = String::new();
        }
        current.push_str(line);
        current.push('\n');
    }

    if !current.trim().is_empty() {
        chunks.push(current.trim().to_string());
    }

    chunks
}

/// Flattened-glossary convenience wrapper: split a glossary string by lines,
/// then chunk.
pub fn chunk_glossary_text(glossary_text: &str, max_chars: usize) -> Vec<String> {
    let lines: Vec<String> = glossary_text.lines().map(str::to_string).collect();
    chunk_lines(&lines, max_chars)
}
