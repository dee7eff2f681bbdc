//! Word frequency accumulation.
//!
//! Counts case-insensitively merged word occurrences across a text. Tokens
//! whose first character is a separator are whitespace/punctuation and are
//! discarded; everything else is lowercased and counted.

use std::collections::HashMap;
use std::io::BufRead;

use crate::error::{CloudError, CloudResult};
use crate::tokenizer::{is_separator, tokens};

/// Count word frequencies in a complete text.
///
/// The sum of all counts equals the number of maximal non-separator runs in
/// the input. "The" and "the" collapse into one entry.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn count_frequencies(text: &str) -> HashMap<String, usize> {
    let mut freq = HashMap::new();
    accumulate_line(text, &mut freq);
    freq
}

/// Count word frequencies from a buffered reader, line by line.
///
/// A read failure mid-stream aborts the run: the error is returned and the
/// partial accumulation is dropped with it. The caller must treat this as
/// fatal, not resumable.
#[tracing::instrument(skip_all)]
pub fn count_from_reader<R: BufRead>(reader: R) -> CloudResult<HashMap<String, usize>> {
    let mut freq = HashMap::new();
    for line in reader.lines() {
        let line = line.map_err(CloudError::Read)?;
        accumulate_line(&line, &mut freq);
    }
    tracing::debug!(distinct = freq.len(), "frequency map built");
    Ok(freq)
}

/// Tokenize one line and fold its words into `freq`.
fn accumulate_line(line: &str, freq: &mut HashMap<String, usize>) {
    for token in tokens(line) {
        // A token's characters all share separator membership, so checking
        // the first character classifies the whole run.
        let first = token.chars().next().unwrap_or(' ');
        if is_separator(first) {
            continue;
        }
        *freq.entry(token.to_lowercase()).or_insert(0) += 1;
    }
}
