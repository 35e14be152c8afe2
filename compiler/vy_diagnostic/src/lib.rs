//! Diagnostic system for the Vyper compiler front end.
//!
//! Every pass (lexing, parsing, type checking, code generation) reports
//! problems through one of three independent error families:
//!
//! - [`Diagnostic`]: a problem in the user's source code, tagged with a
//!   [`DiagnosticKind`] and optionally positioned in the source text
//! - [`CompilerPanic`]: an invariant violated inside the compiler itself
//! - [`InputFormatError`]: malformed structured (JSON) input to the compiler
//!
//! # Positions
//!
//! A diagnostic keeps the *first* position it is given. Inner passes know the
//! precise location of a problem; outer passes that re-raise the same
//! diagnostic only know a coarser one, so later claims are ignored:
//!
//! ```
//! use vy_diagnostic::{Diagnostic, DiagnosticKind, Origin};
//!
//! let mut diag = Diagnostic::at(DiagnosticKind::TypeMismatch, "bad operand", Origin::pair(4, 8));
//! assert!(!diag.try_set_position(1, Some(0)));
//! assert_eq!(diag.to_string(), "line 4:8 bad operand");
//! ```
//!
//! # Rendering
//!
//! Rendering never fails. When the full source text is known, the output
//! includes an annotated excerpt produced by [`SourceAnnotator`], configured
//! explicitly through [`RenderConfig`].

mod annotate;
mod config;
mod diagnostic;
mod input;
mod kind;
mod panic;
mod position;
mod syntax;

pub use annotate::{annotate_source, SourceAnnotator};
pub use config::{ConfigError, RenderConfig, CONTEXT_LINES_VAR, LINE_NUMBERS_VAR};
pub use diagnostic::{Diagnostic, DEFAULT_MESSAGE};
pub use input::InputFormatError;
pub use kind::{DiagnosticKind, KindCategory, ParseKindError};
pub use panic::CompilerPanic;
pub use position::{Located, Origin, OriginError, Position};
pub use syntax::HostSyntaxError;
