//! The core user-facing diagnostic.
//!
//! A [`Diagnostic`] pairs a [`DiagnosticKind`] and message with the first
//! position any pass managed to attach to it, plus the full source text when
//! the originating node carried it.

use std::fmt;
use std::sync::Arc;

use tracing::trace;

use crate::{DiagnosticKind, Origin, Position, RenderConfig};

/// Message used when a pass raises a diagnostic without one.
pub const DEFAULT_MESSAGE: &str = "Error Message not found.";

/// A problem found in the user's source code.
///
/// Positions follow a first-write-wins rule: once a line is attached, later
/// attempts to position the diagnostic are ignored, and the column can only
/// be filled together with that first line. This lets the innermost pass
/// claim the precise location while outer passes re-raise it untouched.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use = "diagnostics should be reported or returned, not silently dropped"]
pub struct Diagnostic {
    /// Category of the problem.
    pub kind: DiagnosticKind,
    /// Main error message.
    pub message: String,
    position: Option<Position>,
    source: Option<Arc<str>>,
}

impl Diagnostic {
    /// Create an unpositioned diagnostic with the placeholder message.
    #[cold]
    pub fn new(kind: DiagnosticKind) -> Self {
        Diagnostic {
            kind,
            message: DEFAULT_MESSAGE.to_owned(),
            position: None,
            source: None,
        }
    }

    /// Create a diagnostic raised from `origin`.
    #[cold]
    pub fn at(kind: DiagnosticKind, message: impl Into<String>, origin: Origin) -> Self {
        Self::new(kind).with_message(message).with_origin(origin)
    }

    /// Set the main message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Attach the position (and source text, if any) of `origin`.
    ///
    /// Subject to first-write-wins; see [`Diagnostic::set_origin`].
    pub fn with_origin(mut self, origin: Origin) -> Self {
        self.set_origin(origin);
        self
    }

    /// Attach the full source text unless one is already attached.
    pub fn with_source(mut self, source: impl Into<Arc<str>>) -> Self {
        if self.source.is_none() {
            self.source = Some(source.into());
        }
        self
    }

    /// Attach the position of `origin` if none is set yet.
    ///
    /// Source text carried by a node origin is attached when the diagnostic
    /// has none, independently of whether the position was accepted.
    /// Returns whether the position was set.
    pub fn set_origin(&mut self, origin: Origin) -> bool {
        let set = self.try_set_position(origin.line(), origin.column());
        if let Origin::Node {
            source: Some(source),
            ..
        } = origin
        {
            if self.source.is_none() {
                self.source = Some(source);
            }
        }
        set
    }

    /// Set the position if no line has been set yet.
    ///
    /// The column is only recorded alongside the line that introduces it, so
    /// a diagnostic positioned without a column never gains one later. Line
    /// `0` is not a source line and is ignored. Returns whether the position
    /// was set.
    pub fn try_set_position(&mut self, line: u32, column: Option<u32>) -> bool {
        if let Some(existing) = self.position {
            trace!(
                kind = %self.kind,
                %existing,
                ignored_line = line,
                "position already claimed"
            );
            return false;
        }
        if line == 0 {
            return false;
        }
        self.position = Some(Position { line, column });
        true
    }

    pub fn position(&self) -> Option<Position> {
        self.position
    }

    pub fn line(&self) -> Option<u32> {
        self.position.map(|p| p.line)
    }

    pub fn column(&self) -> Option<u32> {
        self.position.and_then(|p| p.column)
    }

    /// The full source text of the unit this diagnostic was raised in.
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    /// Render the diagnostic for display.
    ///
    /// Picks the richest form the available information allows:
    ///
    /// 1. position and source text: `line {line}:{column} {message}` followed
    ///    by an annotated excerpt (the column is left empty when unknown)
    /// 2. line and column only: `line {line}:{column} {message}`
    /// 3. otherwise: the bare message
    ///
    /// A position that lies outside the attached source drops to the next
    /// form instead of failing.
    pub fn render(&self, config: &RenderConfig) -> String {
        if let (Some(position), Some(source)) = (self.position, &self.source) {
            if let Some(annotation) =
                config
                    .annotator()
                    .annotate(source, position.line, position.column)
            {
                return format!("line {position} {}\n{annotation}", self.message);
            }
        }

        match self.position {
            Some(Position {
                line,
                column: Some(column),
            }) => format!("line {line}:{column} {}", self.message),
            _ => self.message.clone(),
        }
    }
}

/// Renders with [`RenderConfig::default`].
impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&RenderConfig::default()))
    }
}

impl std::error::Error for Diagnostic {}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
