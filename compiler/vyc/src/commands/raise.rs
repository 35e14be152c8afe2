//! The `raise` command: render a diagnostic exactly as a compiler pass
//! raising it at a given location would have it reported.

use std::sync::Arc;

use vy_diagnostic::{Diagnostic, DiagnosticKind, Origin};

use super::{read_file, DriverError};

const USAGE: &str = "vyc raise <file.vy> <Kind> <LINE[:COLUMN]> <message...>";

/// A diagnostic to raise against a source file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RaiseRequest {
    pub path: String,
    pub kind: DiagnosticKind,
    pub line: u32,
    pub column: Option<u32>,
    pub message: String,
}

impl RaiseRequest {
    /// Parse the arguments following `raise`.
    pub fn from_args(args: &[String]) -> Result<Self, DriverError> {
        let [path, kind, position, message @ ..] = args else {
            return Err(DriverError::Usage(USAGE));
        };
        if message.is_empty() {
            return Err(DriverError::Usage(USAGE));
        }

        let (line, column) = parse_position(position)?;
        Ok(RaiseRequest {
            path: path.clone(),
            kind: kind.parse()?,
            line,
            column,
            message: message.join(" "),
        })
    }
}

/// Parse `LINE` or `LINE:COLUMN`. Lines are 1-based.
pub fn parse_position(text: &str) -> Result<(u32, Option<u32>), DriverError> {
    let invalid = || DriverError::InvalidPosition(text.to_owned());

    let (line, column) = match text.split_once(':') {
        Some((line, column)) => (line, Some(column)),
        None => (text, None),
    };
    let line: u32 = line.parse().ok().filter(|&l| l > 0).ok_or_else(invalid)?;
    let column = column
        .map(|c| c.parse::<u32>().map_err(|_| invalid()))
        .transpose()?;
    Ok((line, column))
}

/// Build the diagnostic `request` describes against `source`.
pub fn raise(request: &RaiseRequest, source: impl Into<Arc<str>>) -> Diagnostic {
    Diagnostic::at(
        request.kind,
        request.message.as_str(),
        Origin::Node {
            line: request.line,
            column: request.column,
            source: Some(source.into()),
        },
    )
}

/// Read the requested file and raise the diagnostic against it.
#[tracing::instrument(level = "debug", skip_all, fields(path = %request.path, kind = %request.kind))]
pub fn raise_file(request: &RaiseRequest) -> Result<Diagnostic, DriverError> {
    let source = read_file(&request.path)?;
    Ok(raise(request, source))
}
