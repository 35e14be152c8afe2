//! Internal compiler failures.

use thiserror::Error;

/// An invariant violated inside the compiler itself.
///
/// Never attributed to the user's source: it carries no position and always
/// renders as a request to report the bug. Drivers must surface it distinctly
/// from [`Diagnostic`](crate::Diagnostic)s and never suppress it.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Error)]
#[error("{message} Please create an issue.")]
pub struct CompilerPanic {
    pub message: String,
}

impl CompilerPanic {
    #[cold]
    pub fn new(message: impl Into<String>) -> Self {
        CompilerPanic {
            message: message.into(),
        }
    }
}
