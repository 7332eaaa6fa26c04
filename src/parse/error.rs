use crate::{
    common::config::{Diagnostic, GenDiagnostic, Process},
    parse::TokenKind,
};
use codespan_reporting::diagnostic::Label;
use std::fmt;
use text_size::TextRange;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub range: TextRange,
    pub kind: ParseErrorKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    Expected {
        expected: &'static str,
        found: TokenKind,
    },
    UnexpectedEof {
        expected: &'static str,
    },
    DuplicateField {
        field: &'static str,
        op: String,
    },
    IntegerOverflow,
    InvalidEscape,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use ParseErrorKind::*;
        match &self.kind {
            Expected { expected, found } => {
                write!(f, "expected {expected}, found {}", found.as_str())
            }
            UnexpectedEof { expected } => write!(f, "expected {expected}, found end of file"),
            DuplicateField { field, op } => {
                write!(f, "`{field}` is given more than once for operation '{op}'")
            }
            IntegerOverflow => f.write_str("integer literal is too large"),
            InvalidEscape => f.write_str("invalid escape sequence in string literal"),
        }
    }
}

impl std::error::Error for ParseError {}

impl GenDiagnostic for ParseError {
    fn to_diagnostic(&self, process: &Process) -> Diagnostic {
        use ParseErrorKind::*;

        let label = match &self.kind {
            Expected { expected, .. } | UnexpectedEof { expected } => {
                format!("expected {expected}")
            }
            DuplicateField { .. } => "duplicate field".to_string(),
            IntegerOverflow => "does not fit in 32 bits".to_string(),
            InvalidEscape => "invalid escape".to_string(),
        };
        Diagnostic::error()
            .with_message(self.to_string())
            .with_labels(vec![Label::primary(process.file_id(), self.range).with_message(label)])
    }
}
