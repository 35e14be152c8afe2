//! Top-level catch-and-render policy.
//!
//! Each failure family is reported on its own terms: user diagnostics and
//! input errors are ordinary failures, while a compiler panic is logged on
//! the error channel and exits with a distinct code so it is never mistaken
//! for a problem in the user's code.

use std::any::Any;
use std::io::Write;
use std::panic::{self, AssertUnwindSafe};

use tracing::error;
use vy_diagnostic::{CompilerPanic, Diagnostic, InputFormatError, RenderConfig};

use crate::commands::DriverError;

/// Exit code for user-facing failures.
pub const EXIT_FAILURE: i32 = 1;

/// Exit code for internal compiler failures.
pub const EXIT_PANIC: i32 = 101;

/// Report a user diagnostic as `{Kind}: {rendered}`.
pub fn report_diagnostic<W: Write>(out: &mut W, diag: &Diagnostic, config: &RenderConfig) -> i32 {
    let _ = writeln!(out, "{}: {}", diag.kind, diag.render(config));
    EXIT_FAILURE
}

/// Report malformed structured input.
pub fn report_input_error<W: Write>(out: &mut W, err: &InputFormatError) -> i32 {
    let _ = writeln!(out, "JSONError: {err}");
    EXIT_FAILURE
}

/// Report an internal compiler failure.
pub fn report_panic<W: Write>(out: &mut W, panic: &CompilerPanic) -> i32 {
    error!(message = %panic.message, "compiler panic");
    let _ = writeln!(out, "CompilerPanic: {panic}");
    EXIT_PANIC
}

/// Report a failure of the driver itself.
pub fn report_driver_error<W: Write>(out: &mut W, err: &DriverError) -> i32 {
    match err {
        DriverError::Input(input) => report_input_error(out, input),
        other => {
            let _ = writeln!(out, "error: {other}");
            EXIT_FAILURE
        }
    }
}

/// Run `f`, turning an unexpected Rust panic into a [`CompilerPanic`].
pub fn catch_panics<T>(f: impl FnOnce() -> T) -> Result<T, CompilerPanic> {
    panic::catch_unwind(AssertUnwindSafe(f))
        .map_err(|payload| CompilerPanic::new(panic_message(&*payload)))
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_owned()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "Unexpected internal error.".to_owned()
    }
}
