//! The `check-json` command: validate a standard JSON input document.
//!
//! Only the document's shape is checked; compiling the sources it carries is
//! not the driver's job.

use std::collections::BTreeMap;

use serde::Deserialize;
use tracing::debug;
use vy_diagnostic::InputFormatError;

use super::{read_file, DriverError};

/// The subset of the compiler's JSON input this driver understands.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct InputDocument {
    pub language: String,
    pub sources: BTreeMap<String, SourceEntry>,
}

/// One named source unit in the input document.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SourceEntry {
    pub content: String,
}

/// Decode and validate an input document.
pub fn check_json(text: &str) -> Result<InputDocument, InputFormatError> {
    let document: InputDocument = serde_json::from_str(text)?;

    if document.language != "Vyper" {
        return Err(InputFormatError::new(format!(
            "Invalid language '{}' - Only Vyper is supported.",
            document.language
        )));
    }
    if document.sources.is_empty() {
        return Err(InputFormatError::new("No input sources specified."));
    }

    debug!(sources = document.sources.len(), "input document accepted");
    Ok(document)
}

/// Read `path` and validate it as an input document.
pub fn check_json_file(path: &str) -> Result<InputDocument, DriverError> {
    let text = read_file(path)?;
    Ok(check_json(&text)?)
}
