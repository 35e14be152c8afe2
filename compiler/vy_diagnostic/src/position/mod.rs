//! Source positions and the origins diagnostics are raised from.
//!
//! A pass raising a diagnostic either knows a raw `(line, column)` pair or
//! holds an AST node that carries its own location (and, for the module
//! root, the full source text). [`Origin`] names both cases explicitly.

use std::fmt;
use std::sync::Arc;

use thiserror::Error;

/// A location in the compiled source buffer.
///
/// Lines are 1-based. The column is the offset within the line and may be
/// unknown, in which case only the line is reported.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Position {
    pub line: u32,
    pub column: Option<u32>,
}

impl Position {
    pub const fn new(line: u32, column: u32) -> Self {
        Position {
            line,
            column: Some(column),
        }
    }

    /// A position whose column is unknown.
    pub const fn line_only(line: u32) -> Self {
        Position { line, column: None }
    }
}

/// Formats as `line:column`, leaving the column empty when unknown.
impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.column {
            Some(column) => write!(f, "{}:{column}", self.line),
            None => write!(f, "{}:", self.line),
        }
    }
}

/// Anything that knows where it sits in the source text.
///
/// Implemented by AST nodes so passes can raise diagnostics directly from the
/// node they are inspecting. Producers always supply line and column together.
pub trait Located {
    fn line(&self) -> u32;

    fn column(&self) -> u32;

    /// The full source text of the compilation unit, if this node carries it.
    fn full_source_text(&self) -> Option<Arc<str>> {
        None
    }
}

/// Where a diagnostic was raised from.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Origin {
    /// A raw `(line, column)` pair.
    Pair { line: u32, column: u32 },
    /// A located node, optionally carrying the full source text.
    Node {
        line: u32,
        column: Option<u32>,
        source: Option<Arc<str>>,
    },
}

/// Failure to interpret a raw position tuple.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Error)]
pub enum OriginError {
    #[error("position tuple needs a line and a column, got {len} element(s)")]
    TooFewElements { len: usize },
}

impl Origin {
    pub const fn pair(line: u32, column: u32) -> Self {
        Origin::Pair { line, column }
    }

    /// Interpret a raw position tuple `(line, column, ...)`.
    ///
    /// Elements past the second are ignored; fewer than two is an error.
    pub fn from_tuple(elements: &[u32]) -> Result<Self, OriginError> {
        match *elements {
            [line, column, ..] => Ok(Origin::Pair { line, column }),
            _ => Err(OriginError::TooFewElements {
                len: elements.len(),
            }),
        }
    }

    /// Capture the location (and source text, if any) of a node.
    pub fn of<N: Located + ?Sized>(node: &N) -> Self {
        Origin::Node {
            line: node.line(),
            column: Some(node.column()),
            source: node.full_source_text(),
        }
    }

    pub fn line(&self) -> u32 {
        match self {
            Origin::Pair { line, .. } | Origin::Node { line, .. } => *line,
        }
    }

    pub fn column(&self) -> Option<u32> {
        match self {
            Origin::Pair { column, .. } => Some(*column),
            Origin::Node { column, .. } => *column,
        }
    }

    /// The source text attached to this origin. Raw pairs never carry one.
    pub fn source(&self) -> Option<&Arc<str>> {
        match self {
            Origin::Pair { .. } => None,
            Origin::Node { source, .. } => source.as_ref(),
        }
    }
}

impl From<(u32, u32)> for Origin {
    fn from((line, column): (u32, u32)) -> Self {
        Origin::Pair { line, column }
    }
}

impl TryFrom<&[u32]> for Origin {
    type Error = OriginError;

    fn try_from(elements: &[u32]) -> Result<Self, Self::Error> {
        Origin::from_tuple(elements)
    }
}
