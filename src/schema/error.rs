use crate::common::{
    config::{Diagnostic, GenDiagnostic, Process},
    Opcode,
};
use codespan_reporting::diagnostic::Label;
use std::fmt;
use text_size::TextRange;

/// A schema authoring mistake. Any of these aborts generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenError {
    pub range: TextRange,
    pub kind: GenErrorKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenErrorKind {
    UnsupportedAttributeKind {
        op: String,
        attribute: String,
        kind: String,
    },
    TooManyResults {
        op: String,
        arity: u32,
    },
    MisplacedVariadic {
        op: String,
        operand: String,
    },
    DuplicateVariadic {
        op: String,
        operand: String,
    },
    DuplicateOperation {
        op: String,
        original: TextRange,
    },
    DuplicateOpcode {
        op: String,
        opcode: Opcode,
        original_op: String,
        original: TextRange,
    },
    OpcodeOutOfRange {
        op: String,
        opcode: Opcode,
    },
    ReservedOpcode {
        op: String,
        opcode: Opcode,
    },
    DuplicateEnum {
        name: String,
        original: TextRange,
    },
    UnsupportedUnderlyingType {
        name: String,
        ty: String,
    },
    CaseOutOfRange {
        name: String,
        symbol: String,
        value: u64,
        ty: String,
    },
    DuplicateCase {
        name: String,
        symbol: String,
        original: TextRange,
    },
    EmptySeparator {
        name: String,
    },
}

impl GenError {
    #[must_use]
    pub fn new(range: TextRange, kind: GenErrorKind) -> Self {
        Self { range, kind }
    }
}

impl fmt::Display for GenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use GenErrorKind::*;

        match &self.kind {
            UnsupportedAttributeKind {
                op,
                attribute,
                kind,
            } => write!(
                f,
                "unhandled attribute kind '{kind}' for attribute '{attribute}' of operation '{op}'"
            ),
            TooManyResults { op, arity } => write!(
                f,
                "operation '{op}' declares {arity} results, but operations can only have zero or one result"
            ),
            MisplacedVariadic { op, operand } => write!(
                f,
                "operation '{op}' can have a variadic operand only as its last argument, but '{operand}' is not last"
            ),
            DuplicateVariadic { op, operand } => write!(
                f,
                "operation '{op}' declares more than one variadic operand ('{operand}')"
            ),
            DuplicateOperation { op, .. } => {
                write!(f, "operation '{op}' is defined more than once")
            }
            DuplicateOpcode {
                op,
                opcode,
                original_op,
                ..
            } => write!(
                f,
                "opcode {opcode} of operation '{op}' is already used by operation '{original_op}'"
            ),
            OpcodeOutOfRange { op, opcode } => write!(
                f,
                "opcode {opcode} of operation '{op}' does not fit in 16 bits"
            ),
            ReservedOpcode { op, opcode } => write!(
                f,
                "opcode {opcode} of operation '{op}' is reserved for decorations"
            ),
            DuplicateEnum { name, .. } => write!(f, "enum '{name}' is defined more than once"),
            UnsupportedUnderlyingType { name, ty } => write!(
                f,
                "enum '{name}' has unsupported underlying type '{ty}' (expected u8, u16, u32 or u64)"
            ),
            CaseOutOfRange {
                name,
                symbol,
                value,
                ty,
            } => write!(
                f,
                "case '{symbol}' of enum '{name}' has value {value}, which does not fit in {ty}"
            ),
            DuplicateCase { name, symbol, .. } => {
                write!(f, "case '{symbol}' of enum '{name}' is defined more than once")
            }
            EmptySeparator { name } => write!(f, "bit enum '{name}' has an empty separator"),
        }
    }
}

impl std::error::Error for GenError {}

impl GenDiagnostic for GenError {
    fn to_diagnostic(&self, process: &Process) -> Diagnostic {
        use GenErrorKind::*;

        let file_id = process.file_id();
        let message = self.to_string();
        let primary = Label::primary(file_id, self.range);
        match &self.kind {
            UnsupportedAttributeKind { .. } => Diagnostic::error()
                .with_message(message)
                .with_labels(vec![primary.with_message("unsupported attribute kind")])
                .with_notes(vec![
                    "supported kinds are scalar-int32, enum-as-int32 and array-of-int32".to_string(),
                ]),
            TooManyResults { .. } => Diagnostic::error()
                .with_message(message)
                .with_labels(vec![primary.with_message("too many results")]),
            MisplacedVariadic { .. } => Diagnostic::error()
                .with_message(message)
                .with_labels(vec![primary.with_message("variadic operand declared here")]),
            DuplicateVariadic { .. } => Diagnostic::error()
                .with_message(message)
                .with_labels(vec![primary.with_message("second variadic operand")]),
            DuplicateOperation { original, .. }
            | DuplicateEnum { original, .. }
            | DuplicateCase { original, .. } => {
                Diagnostic::error().with_message(message).with_labels(vec![
                    Label::secondary(file_id, *original)
                        .with_message("the name is first defined here..."),
                    primary.with_message("...but is redefined here"),
                ])
            }
            DuplicateOpcode { original, .. } => {
                Diagnostic::error().with_message(message).with_labels(vec![
                    Label::secondary(file_id, *original)
                        .with_message("the opcode is first used here..."),
                    primary.with_message("...and used again here"),
                ])
            }
            OpcodeOutOfRange { .. } => Diagnostic::error()
                .with_message(message)
                .with_labels(vec![primary.with_message("opcode is out of range")])
                .with_notes(vec![
                    "instruction headers keep the opcode in the low 16 bits".to_string(),
                ]),
            ReservedOpcode { .. } => Diagnostic::error()
                .with_message(message)
                .with_labels(vec![primary.with_message("opcode 71 is `OpDecorate`")]),
            UnsupportedUnderlyingType { .. } => Diagnostic::error()
                .with_message(message)
                .with_labels(vec![primary.with_message("invalid underlying type")]),
            CaseOutOfRange { .. } => Diagnostic::error()
                .with_message(message)
                .with_labels(vec![primary.with_message("value is out of range")]),
            EmptySeparator { .. } => Diagnostic::error()
                .with_message(message)
                .with_labels(vec![primary.with_message("separator must not be empty")]),
        }
    }
}
