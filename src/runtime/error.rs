use crate::{
    common::{Id, List, Opcode, MAX_WORD_COUNT},
    runtime::{Location, Type},
};
use std::fmt;

/// A recoverable failure while encoding or decoding one instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    UnresolvedType { location: Location, ty: Type },
    MissingResult { op: String },
    UseBeforeDef { op: String, positions: List<usize> },
    InvalidAttribute { op: String, name: String },
    UnknownDecoration { name: String },
    InvalidDecoration { name: String },
    UnhandledSerialization { op: String },
    ExpectedResultType { op: String },
    ExpectedResultId { op: String },
    UnknownTypeId { op: String, id: Id },
    UnknownValueId { id: Id },
    WordCountMismatch { op: String, consumed: usize, total: usize },
    UnhandledDeserialization { opcode: Opcode },
    MalformedInstruction { offset: usize },
    OpcodeOutOfRange { opcode: Opcode },
    InstructionTooLong { opcode: Opcode, word_count: usize },
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnresolvedType { location, ty } => {
                write!(f, "{location}: unable to resolve type {ty:?}")
            }
            Self::MissingResult { op } => write!(f, "operation '{op}' must have a result"),
            Self::UseBeforeDef { op, positions } => {
                write!(f, "operation '{op}': ")?;
                for (i, position) in positions.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "operand {position}")?;
                }
                f.write_str(" has a use before def")
            }
            Self::InvalidAttribute { op, name } => write!(
                f,
                "attribute '{name}' of operation '{op}' does not have the declared kind"
            ),
            Self::UnknownDecoration { name } => {
                write!(f, "attribute '{name}' has no decoration number")
            }
            Self::InvalidDecoration { name } => {
                write!(f, "attribute '{name}' cannot be encoded as a decoration")
            }
            Self::UnhandledSerialization { op } => {
                write!(f, "unhandled operation serialization of '{op}'")
            }
            Self::ExpectedResultType { op } => {
                write!(f, "expected result type <id> while deserializing {op}")
            }
            Self::ExpectedResultId { op } => {
                write!(f, "expected result <id> while deserializing {op}")
            }
            Self::UnknownTypeId { op, id } => {
                write!(f, "unknown type result <id> : {id} while deserializing {op}")
            }
            Self::UnknownValueId { id } => write!(f, "unknown result <id> : {id}"),
            Self::WordCountMismatch {
                op,
                consumed,
                total,
            } => write!(
                f,
                "found more operands than expected when deserializing {op}, only {consumed} of {total} processed"
            ),
            Self::UnhandledDeserialization { opcode } => {
                write!(f, "unhandled deserialization of opcode {opcode}")
            }
            Self::MalformedInstruction { offset } => {
                write!(f, "malformed instruction header at word {offset}")
            }
            Self::OpcodeOutOfRange { opcode } => {
                write!(f, "opcode {opcode} does not fit in an instruction header")
            }
            Self::InstructionTooLong { opcode, word_count } => write!(
                f,
                "instruction with opcode {opcode} needs {word_count} words, but a header can only count {MAX_WORD_COUNT}"
            ),
        }
    }
}

impl std::error::Error for CodecError {}
