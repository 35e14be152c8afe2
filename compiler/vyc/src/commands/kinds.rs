//! The `kinds` and `explain` commands: describe the diagnostic taxonomy.

use std::fmt::Write;

use vy_diagnostic::DiagnosticKind;

use super::DriverError;

/// One line per kind: identifier, category and description.
pub fn list_kinds() -> String {
    let width = DiagnosticKind::ALL
        .iter()
        .map(|kind| kind.as_str().len())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for kind in DiagnosticKind::ALL {
        let _ = writeln!(
            out,
            "{kind:<width$}  {:<13}  {}",
            kind.category(),
            kind.description()
        );
    }
    out
}

/// Describe a single kind looked up by name.
pub fn explain_kind(name: &str) -> Result<String, DriverError> {
    let kind: DiagnosticKind = name.parse()?;
    Ok(format!(
        "{kind}: {} ({})",
        kind.description(),
        kind.category()
    ))
}
