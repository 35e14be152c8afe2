//! Command handlers for the `vyc` CLI.
//!
//! Handlers return their failure instead of exiting so `main` owns every
//! exit path. Shared helpers like `read_file` live here.

mod check_json;
mod kinds;
mod raise;

use std::io;

use thiserror::Error;
use vy_diagnostic::{ConfigError, InputFormatError, ParseKindError};

pub use check_json::{check_json, check_json_file, InputDocument, SourceEntry};
pub use kinds::{explain_kind, list_kinds};
pub use raise::{parse_position, raise, raise_file, RaiseRequest};

/// Failures of the driver itself, as opposed to the diagnostics it reports.
#[derive(Debug, Error)]
pub enum DriverError {
    #[error("{message}")]
    Read {
        message: String,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    UnknownKind(#[from] ParseKindError),
    #[error(transparent)]
    Input(#[from] InputFormatError),
    #[error("invalid position `{0}`, expected LINE or LINE:COLUMN")]
    InvalidPosition(String),
    #[error("usage: {0}")]
    Usage(&'static str),
}

/// Read a file, describing the failure the way users expect to see it.
pub(crate) fn read_file(path: &str) -> Result<String, DriverError> {
    std::fs::read_to_string(path).map_err(|source| {
        let message = match source.kind() {
            io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
            io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
            io::ErrorKind::InvalidData => format!("'{path}' contains invalid UTF-8 data"),
            _ => format!("error reading '{path}': {source}"),
        };
        DriverError::Read { message, source }
    })
}
