pub mod breadcrumbs;
pub mod driver;
pub mod kinds;
pub mod lines;
pub mod rope;
pub mod shortcuts;
pub mod snapshot;

use std::collections::BTreeMap;

use serde::Serialize;
use xi_rope::Rope;

use crate::error::{Diagnostic, ParseError};
use crate::export::RecordSet;
use crate::models::{Bundle, DataPoint, DataTable, DocumentGraph, Header};
use crate::settings::Settings;
use driver::DocumentDriver;
use lines::TranscriptionLineClassifier;
use rope::lines_with_spans;

/// Everything recovered from one transcription.
#[derive(Debug, Serialize)]
pub struct ParsedDocument {
    pub header: Header,
    pub graph: DocumentGraph,
    /// Frozen shortcut blocks by id.
    pub shortcuts: BTreeMap<String, Bundle>,
    pub tables: Vec<DataTable>,
    pub data_points: Vec<DataPoint>,
    pub records: RecordSet,
    pub diagnostics: Vec<Diagnostic>,
}

pub fn parse_document(rope: &Rope, settings: &Settings) -> Result<ParsedDocument, ParseError> {
    let classifier = TranscriptionLineClassifier;
    let mut driver = DocumentDriver::new(settings);

    for lr in lines_with_spans(rope) {
        let lc = classifier.classify(&lr);
        driver.push(&lc)?;
    }

    Ok(driver.finish())
}

/// Convenience: parse a transcription held in a string.
pub fn parse_str(text: &str, settings: &Settings) -> Result<ParsedDocument, ParseError> {
    parse_document(&Rope::from(text), settings)
}

#[cfg(test)]
mod tests;
