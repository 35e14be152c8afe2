//! The closed taxonomy of user-facing diagnostic kinds.
//!
//! Kinds are pure tags: they select no special construction or rendering.
//! Handlers match on them (or on their [`KindCategory`]) to treat a whole
//! class of problems alike without inspecting message text.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// What kind of problem a [`Diagnostic`](crate::Diagnostic) reports.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum DiagnosticKind {
    // Syntax
    /// Invalid syntax reported by the host parser.
    HostSyntax,
    /// Valid host syntax, but invalid Vyper syntax.
    Syntax,

    // Structure
    /// Malformed program structure.
    Structure,

    // Values
    /// Invalid literal value.
    InvalidLiteral,
    /// Array index out of range.
    ArrayIndex,
    /// Second argument to a division or modulo operation was zero.
    ZeroDivision,

    // Declarations
    /// Invalid type declaration.
    InvalidType,
    /// Invalid variable declaration.
    VariableDeclaration,
    /// Invalid function declaration.
    FunctionDeclaration,
    /// Invalid event declaration.
    EventDeclaration,

    // Types and mutability
    /// Operand or value types do not agree.
    TypeMismatch,
    /// State-changing action inside a constant function.
    ConstancyViolation,
    /// Value transfer in a nonpayable function.
    NonPayableViolation,

    // Compatibility
    /// Version string is malformed or incompatible with this compiler.
    Version,
    /// Action not possible under the active EVM ruleset.
    EvmVersion,
}

/// Coarse grouping of [`DiagnosticKind`]s.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum KindCategory {
    Syntax,
    Structure,
    Value,
    Declaration,
    Type,
    Compatibility,
}

impl KindCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            KindCategory::Syntax => "syntax",
            KindCategory::Structure => "structure",
            KindCategory::Value => "value",
            KindCategory::Declaration => "declaration",
            KindCategory::Type => "type",
            KindCategory::Compatibility => "compatibility",
        }
    }
}

impl fmt::Display for KindCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// A string that names no [`DiagnosticKind`].
#[derive(Clone, Eq, PartialEq, Hash, Debug, Error)]
#[error("unknown diagnostic kind `{0}`")]
pub struct ParseKindError(pub String);

impl DiagnosticKind {
    /// Every kind, in declaration order.
    pub const ALL: &[DiagnosticKind] = &[
        DiagnosticKind::HostSyntax,
        DiagnosticKind::Syntax,
        DiagnosticKind::Structure,
        DiagnosticKind::InvalidLiteral,
        DiagnosticKind::ArrayIndex,
        DiagnosticKind::ZeroDivision,
        DiagnosticKind::InvalidType,
        DiagnosticKind::VariableDeclaration,
        DiagnosticKind::FunctionDeclaration,
        DiagnosticKind::EventDeclaration,
        DiagnosticKind::TypeMismatch,
        DiagnosticKind::ConstancyViolation,
        DiagnosticKind::NonPayableViolation,
        DiagnosticKind::Version,
        DiagnosticKind::EvmVersion,
    ];

    /// Stable identifier used in output and for lookup by name.
    pub fn as_str(&self) -> &'static str {
        match self {
            DiagnosticKind::HostSyntax => "PythonSyntaxException",
            DiagnosticKind::Syntax => "SyntaxException",
            DiagnosticKind::Structure => "StructureException",
            DiagnosticKind::InvalidLiteral => "InvalidLiteralException",
            DiagnosticKind::ArrayIndex => "ArrayIndexException",
            DiagnosticKind::ZeroDivision => "ZeroDivisionException",
            DiagnosticKind::InvalidType => "InvalidTypeException",
            DiagnosticKind::VariableDeclaration => "VariableDeclarationException",
            DiagnosticKind::FunctionDeclaration => "FunctionDeclarationException",
            DiagnosticKind::EventDeclaration => "EventDeclarationException",
            DiagnosticKind::TypeMismatch => "TypeMismatchException",
            DiagnosticKind::ConstancyViolation => "ConstancyViolationException",
            DiagnosticKind::NonPayableViolation => "NonPayableViolationException",
            DiagnosticKind::Version => "VersionException",
            DiagnosticKind::EvmVersion => "EvmVersionException",
        }
    }

    /// One-line summary of the problem class.
    pub fn description(&self) -> &'static str {
        match self {
            DiagnosticKind::HostSyntax => "invalid syntax",
            DiagnosticKind::Syntax => "valid Python syntax, but invalid Vyper syntax",
            DiagnosticKind::Structure => "malformed program structure",
            DiagnosticKind::InvalidLiteral => "invalid literal value",
            DiagnosticKind::ArrayIndex => "array index out of range",
            DiagnosticKind::ZeroDivision => {
                "second argument to a division or modulo operation was zero"
            }
            DiagnosticKind::InvalidType => "invalid type declaration",
            DiagnosticKind::VariableDeclaration => "invalid variable declaration",
            DiagnosticKind::FunctionDeclaration => "invalid function declaration",
            DiagnosticKind::EventDeclaration => "invalid event declaration",
            DiagnosticKind::TypeMismatch => "type mismatch",
            DiagnosticKind::ConstancyViolation => {
                "state-changing action inside a constant function"
            }
            DiagnosticKind::NonPayableViolation => "used msg.value in a nonpayable function",
            DiagnosticKind::Version => {
                "version string is malformed or incompatible with this version of Vyper"
            }
            DiagnosticKind::EvmVersion => {
                "cannot perform an action based on the active EVM ruleset"
            }
        }
    }

    pub fn category(&self) -> KindCategory {
        match self {
            DiagnosticKind::HostSyntax | DiagnosticKind::Syntax => KindCategory::Syntax,
            DiagnosticKind::Structure => KindCategory::Structure,
            DiagnosticKind::InvalidLiteral
            | DiagnosticKind::ArrayIndex
            | DiagnosticKind::ZeroDivision => KindCategory::Value,
            DiagnosticKind::InvalidType
            | DiagnosticKind::VariableDeclaration
            | DiagnosticKind::FunctionDeclaration
            | DiagnosticKind::EventDeclaration => KindCategory::Declaration,
            DiagnosticKind::TypeMismatch
            | DiagnosticKind::ConstancyViolation
            | DiagnosticKind::NonPayableViolation => KindCategory::Type,
            DiagnosticKind::Version | DiagnosticKind::EvmVersion => KindCategory::Compatibility,
        }
    }

    pub fn is_syntax(&self) -> bool {
        self.category() == KindCategory::Syntax
    }

    pub fn is_declaration(&self) -> bool {
        self.category() == KindCategory::Declaration
    }
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for DiagnosticKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| ParseKindError(s.to_owned()))
    }
}
