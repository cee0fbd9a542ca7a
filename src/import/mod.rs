//! Source file -> card document.
//!
//! The import is a one-shot batch: read the whole file, validate the header,
//! group rows, then write the document. Header problems abort before
//! anything is written; bad data rows are skipped and only counted.

pub mod aggregate;

pub use aggregate::*;

use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::collate::JaCollator;
use crate::document::CardDocument;
use crate::error::ImportError;
use crate::parser::{parse_line, split_lines};
use crate::writer::write_document;

/// Column names the header line must carry, in order
pub const EXPECTED_HEADERS: [&str; 3] = ["駅名", "期間", "カード名"];

pub const DEFAULT_INPUT: &str = "new_data.csv";
pub const DEFAULT_OUTPUT: &str = "data/card_shops.json";

/// Result of a successful import
#[derive(Debug, Clone)]
pub struct ImportOutcome {
    pub document: CardDocument,
    pub rows_read: usize,
    pub rows_skipped: usize,
}

impl ImportOutcome {
    pub fn station_count(&self) -> usize {
        self.document.stations.len()
    }
}

/// Check the header fields against [`EXPECTED_HEADERS`]
pub fn validate_header(fields: &[String]) -> Result<(), ImportError> {
    let matches = fields.len() == EXPECTED_HEADERS.len()
        && fields.iter().zip(EXPECTED_HEADERS).all(|(found, expected)| found == expected);

    if matches {
        Ok(())
    } else {
        Err(ImportError::HeaderMismatch {
            found: fields.to_vec(),
            expected: EXPECTED_HEADERS.iter().map(|h| h.to_string()).collect(),
        })
    }
}

/// Transform raw source text into a document without touching the filesystem
pub fn import_str(
    raw: &str,
    delimiter: char,
    collator: &JaCollator,
) -> Result<ImportOutcome, ImportError> {
    let lines = split_lines(raw);
    let (header, data) = lines.split_first().ok_or(ImportError::EmptySource)?;

    validate_header(&parse_line(header, delimiter))?;

    let mut aggregator = Aggregator::new();
    let mut rows_skipped = 0;

    for (idx, line) in data.iter().enumerate() {
        let fields = parse_line(line, delimiter);
        match SourceRow::from_fields(&fields) {
            Some(row) => aggregator.push(row),
            None => {
                // +2: one for the header, one for 1-based numbering
                debug!(line = idx + 2, fields = fields.len(), "skipping row");
                rows_skipped += 1;
            }
        }
    }

    Ok(ImportOutcome {
        document: aggregator.finish(collator),
        rows_read: data.len(),
        rows_skipped,
    })
}

/// Read `input`, transform it, and write the document to `output`
pub fn import_file(
    input: &Path,
    output: &Path,
    delimiter: char,
    collator: &JaCollator,
) -> Result<ImportOutcome, ImportError> {
    let raw = fs::read_to_string(input).map_err(|e| ImportError::io(input, e))?;
    let outcome = import_str(&raw, delimiter, collator)?;

    write_document(&outcome.document, output)?;

    info!(
        stations = outcome.station_count(),
        rows = outcome.rows_read,
        skipped = outcome.rows_skipped,
        output = %output.display(),
        "import complete"
    );

    Ok(outcome)
}
