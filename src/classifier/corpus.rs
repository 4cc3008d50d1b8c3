//! Line-oriented training corpus parsing.
//!
//! The corpus format is plain text, one document per line:
//!
//! ```text
//! <label>: <phrase>
//! <label>: <phrase>
//! ```
//!
//! Whitespace around the label is trimmed; everything after the first `:` on
//! the line is the phrase. Lines without a `:` are silently skipped and do
//! not count toward any statistic. No escaping, comments, or multi-line
//! phrases are supported.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::classifier::types::TrainingExample;
use crate::error::Result;

/// Parse a single corpus line, returning `None` for malformed lines.
pub fn parse_line(line: &str) -> Option<TrainingExample> {
    let (label, phrase) = line.split_once(':')?;
    Some(TrainingExample {
        intent: label.trim().to_string(),
        phrase: phrase.to_string(),
    })
}

/// Read every well-formed example from a corpus source.
///
/// I/O errors from the underlying reader are surfaced; malformed lines are
/// not errors and are skipped.
pub fn read_examples<R: BufRead>(reader: R) -> Result<Vec<TrainingExample>> {
    let mut examples = Vec::new();
    let mut skipped = 0usize;

    for line in reader.lines() {
        let line = line?;
        match parse_line(&line) {
            Some(example) => examples.push(example),
            None => {
                if !line.trim().is_empty() {
                    skipped += 1;
                    log::debug!("skipping malformed corpus line: {line:?}");
                }
            }
        }
    }

    if skipped > 0 {
        log::debug!("skipped {skipped} malformed corpus lines");
    }

    Ok(examples)
}

/// Load a training corpus from a file on disk.
///
/// Fails with [`crate::error::VesperError::Io`] if the file cannot be opened
/// or read.
pub fn load_corpus<P: AsRef<Path>>(path: P) -> Result<Vec<TrainingExample>> {
    let file = File::open(path)?;
    read_examples(BufReader::new(file))
}
