//! Conversion of host parser failures into diagnostics.
//!
//! Vyper source is first parsed by the host language's parser. Only this
//! module knows the shape of that parser's failure report.

use std::sync::Arc;

use crate::{Diagnostic, DiagnosticKind, Origin};

/// A failure reported by the host parser.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct HostSyntaxError {
    /// 1-based line of the failure, when the parser reported one.
    pub line_number: Option<u32>,
    /// Offset of the failure within the line.
    pub character_offset: Option<u32>,
    /// The parser's own description of the problem.
    pub description: String,
}

impl HostSyntaxError {
    pub fn new(line_number: u32, character_offset: u32, description: impl Into<String>) -> Self {
        HostSyntaxError {
            line_number: Some(line_number),
            character_offset: Some(character_offset),
            description: description.into(),
        }
    }
}

impl Diagnostic {
    /// Build a [`DiagnosticKind::HostSyntax`] diagnostic from a host parser
    /// failure in `source`.
    #[cold]
    pub fn from_host_syntax_error(error: &HostSyntaxError, source: impl Into<Arc<str>>) -> Self {
        let source = source.into();
        let diag = Diagnostic::new(DiagnosticKind::HostSyntax)
            .with_message(format!("SyntaxError: {}", error.description));

        match error.line_number {
            Some(line) => diag.with_origin(Origin::Node {
                line,
                column: error.character_offset,
                source: Some(source),
            }),
            None => diag.with_source(source),
        }
    }
}
