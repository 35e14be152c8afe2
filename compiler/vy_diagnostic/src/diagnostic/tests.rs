use super::*;
use crate::Located;
use pretty_assertions::assert_eq;

const SOURCE: &str = "@external\ndef foo() -> uint256:\n    return 1 / 0\n";

struct Node {
    line: u32,
    column: u32,
    source: Option<Arc<str>>,
}

impl Located for Node {
    fn line(&self) -> u32 {
        self.line
    }

    fn column(&self) -> u32 {
        self.column
    }

    fn full_source_text(&self) -> Option<Arc<str>> {
        self.source.clone()
    }
}

fn node_with_source(line: u32, column: u32) -> Node {
    Node {
        line,
        column,
        source: Some(Arc::from(SOURCE)),
    }
}

#[test]
fn test_default_message() {
    let diag = Diagnostic::new(DiagnosticKind::Structure);
    assert_eq!(diag.message, DEFAULT_MESSAGE);
    assert_eq!(diag.to_string(), "Error Message not found.");
    assert!(diag.position().is_none());
    assert!(diag.source().is_none());
}

#[test]
fn test_pair_origin_stores_position() {
    let diag = Diagnostic::at(DiagnosticKind::InvalidLiteral, "bad", Origin::pair(7, 3));
    assert_eq!(diag.line(), Some(7));
    assert_eq!(diag.column(), Some(3));
    assert_eq!(diag.position(), Some(Position::new(7, 3)));
    assert!(diag.source().is_none());
}

#[test]
fn test_tuple_origin_ignores_trailing_elements() {
    let origin = Origin::from_tuple(&[2, 5, 2, 9]).unwrap();
    let diag = Diagnostic::at(DiagnosticKind::Structure, "bad", origin);
    assert_eq!(diag.position(), Some(Position::new(2, 5)));
}

#[test]
fn test_node_origin_copies_source() {
    let node = node_with_source(3, 15);
    let diag = Diagnostic::at(DiagnosticKind::ZeroDivision, "division by zero", Origin::of(&node));
    assert_eq!(diag.line(), Some(3));
    assert_eq!(diag.column(), Some(15));
    assert_eq!(diag.source(), Some(SOURCE));
}

#[test]
fn test_node_origin_without_source() {
    let node = Node {
        line: 1,
        column: 0,
        source: None,
    };
    let diag = Diagnostic::at(DiagnosticKind::Structure, "bad", Origin::of(&node));
    assert!(diag.source().is_none());
    assert_eq!(diag.to_string(), "line 1:0 bad");
}

#[test]
fn test_first_write_wins() {
    let mut diag = Diagnostic::at(DiagnosticKind::TypeMismatch, "mismatch", Origin::pair(4, 2));
    assert!(!diag.try_set_position(9, Some(11)));
    assert_eq!(diag.position(), Some(Position::new(4, 2)));
}

#[test]
fn test_column_sticks_with_first_line() {
    let mut diag = Diagnostic::new(DiagnosticKind::TypeMismatch);
    assert!(diag.try_set_position(4, None));
    assert!(!diag.try_set_position(4, Some(8)));
    assert_eq!(diag.line(), Some(4));
    assert_eq!(diag.column(), None);
}

#[test]
fn test_line_zero_is_not_a_position() {
    let mut diag = Diagnostic::new(DiagnosticKind::Structure);
    assert!(!diag.try_set_position(0, Some(1)));
    assert!(diag.position().is_none());
    assert!(diag.try_set_position(2, Some(1)));
}

#[test]
fn test_outer_pass_cannot_clobber_inner_position() {
    fn inner() -> Result<(), Diagnostic> {
        Err(Diagnostic::at(
            DiagnosticKind::ZeroDivision,
            "division by zero",
            Origin::pair(3, 15),
        ))
    }

    fn outer() -> Result<(), Diagnostic> {
        inner().map_err(|diag| diag.with_origin(Origin::pair(2, 0)))
    }

    let diag = outer().unwrap_err();
    assert_eq!(diag.position(), Some(Position::new(3, 15)));
}

#[test]
fn test_outer_pass_fills_missing_position_and_source() {
    let diag = Diagnostic::new(DiagnosticKind::Structure)
        .with_message("bad")
        .with_origin(Origin::of(&node_with_source(2, 4)));
    assert_eq!(diag.position(), Some(Position::new(2, 4)));
    assert_eq!(diag.source(), Some(SOURCE));
}

#[test]
fn test_source_attaches_even_when_position_is_taken() {
    let mut diag = Diagnostic::at(DiagnosticKind::Structure, "bad", Origin::pair(3, 4));
    assert!(!diag.set_origin(Origin::of(&node_with_source(1, 0))));
    assert_eq!(diag.position(), Some(Position::new(3, 4)));
    assert_eq!(diag.source(), Some(SOURCE));
}

#[test]
fn test_with_source_keeps_first() {
    let diag = Diagnostic::new(DiagnosticKind::Structure)
        .with_source("first")
        .with_source("second");
    assert_eq!(diag.source(), Some("first"));
}

#[test]
fn test_render_with_source() {
    let node = node_with_source(3, 15);
    let diag = Diagnostic::at(DiagnosticKind::ZeroDivision, "division by zero", Origin::of(&node));

    let caret = format!("{}^", "-".repeat(7 + 15));
    let expected = [
        "line 3:15 division by zero",
        "     2 def foo() -> uint256:",
        "---> 3     return 1 / 0",
        caret.as_str(),
    ]
    .join("\n");
    assert_eq!(diag.render(&RenderConfig::default()), expected);
    assert_eq!(diag.to_string(), expected);
}

#[test]
fn test_render_with_source_no_column() {
    let mut diag = Diagnostic::new(DiagnosticKind::Structure)
        .with_message("missing body")
        .with_source(SOURCE);
    diag.try_set_position(2, None);

    let config = RenderConfig::default()
        .with_context_lines(0)
        .with_line_numbers(false);
    assert_eq!(
        diag.render(&config),
        "line 2: missing body\n---> def foo() -> uint256:"
    );
}

#[test]
fn test_render_without_source() {
    let diag = Diagnostic::at(DiagnosticKind::TypeMismatch, "bad operand", Origin::pair(5, 10));
    assert_eq!(diag.to_string(), "line 5:10 bad operand");
}

#[test]
fn test_render_line_without_column_or_source() {
    let mut diag = Diagnostic::new(DiagnosticKind::Version).with_message("bad pragma");
    diag.try_set_position(1, None);
    assert_eq!(diag.to_string(), "bad pragma");
}

#[test]
fn test_render_bare_message() {
    let diag = Diagnostic::new(DiagnosticKind::EvmVersion).with_message("no PUSH0 before shanghai");
    assert_eq!(diag.to_string(), "no PUSH0 before shanghai");
}

#[test]
fn test_render_source_without_position_is_bare() {
    let diag = Diagnostic::new(DiagnosticKind::Structure)
        .with_message("empty module")
        .with_source(SOURCE);
    assert_eq!(diag.to_string(), "empty module");
}

#[test]
fn test_render_out_of_range_position_degrades() {
    let diag = Diagnostic::at(
        DiagnosticKind::Structure,
        "dangling",
        Origin::of(&node_with_source(40, 2)),
    );
    assert_eq!(diag.to_string(), "line 40:2 dangling");
}

#[test]
fn test_render_respects_config() {
    let diag = Diagnostic::at(
        DiagnosticKind::ZeroDivision,
        "division by zero",
        Origin::of(&node_with_source(3, 11)),
    );
    let config = RenderConfig::default()
        .with_context_lines(0)
        .with_line_numbers(false);
    assert_eq!(
        diag.render(&config),
        "line 3:11 division by zero\n    return 1 / 0\n-----------^"
    );
}

#[test]
fn test_render_is_idempotent() {
    let diag = Diagnostic::at(
        DiagnosticKind::ZeroDivision,
        "division by zero",
        Origin::of(&node_with_source(3, 15)),
    );
    assert_eq!(diag.to_string(), diag.to_string());
}

#[test]
fn test_diagnostic_is_error() {
    fn boxed() -> Result<(), Box<dyn std::error::Error>> {
        Err(Diagnostic::at(DiagnosticKind::Structure, "bad", Origin::pair(1, 1)))?;
        Ok(())
    }

    assert_eq!(boxed().unwrap_err().to_string(), "line 1:1 bad");
}

#[test]
fn test_match_on_kind_category() {
    let diags = [
        Diagnostic::new(DiagnosticKind::VariableDeclaration),
        Diagnostic::new(DiagnosticKind::EventDeclaration),
        Diagnostic::new(DiagnosticKind::TypeMismatch),
    ];
    let declarations = diags.iter().filter(|d| d.kind.is_declaration()).count();
    assert_eq!(declarations, 2);
}

// === Property tests ===

mod proptest_position {
    use super::super::Diagnostic;
    use crate::{DiagnosticKind, Origin, Position};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn pair_origin_round_trips(line in 1u32..10_000, column in 0u32..500) {
            let diag = Diagnostic::at(DiagnosticKind::Structure, "m", Origin::pair(line, column));
            prop_assert_eq!(diag.position(), Some(Position::new(line, column)));
        }

        #[test]
        fn first_write_wins(
            first in (1u32..10_000, proptest::option::of(0u32..500)),
            later in proptest::collection::vec((0u32..10_000, proptest::option::of(0u32..500)), 0..8),
        ) {
            let mut diag = Diagnostic::new(DiagnosticKind::TypeMismatch);
            prop_assert!(diag.try_set_position(first.0, first.1));
            for (line, column) in later {
                prop_assert!(!diag.try_set_position(line, column));
            }
            prop_assert_eq!(diag.position(), Some(Position { line: first.0, column: first.1 }));
        }

        #[test]
        fn positioned_without_source_renders_prefix(
            line in 1u32..10_000,
            column in 0u32..500,
            message in "[a-z ]{1,30}",
        ) {
            let diag = Diagnostic::at(DiagnosticKind::Structure, message.clone(), Origin::pair(line, column));
            prop_assert_eq!(diag.to_string(), format!("line {line}:{column} {message}"));
        }
    }
}
