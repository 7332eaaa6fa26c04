mod bit_enum;
mod codec;
mod context;
mod debug;
mod error;
mod model;

pub use bit_enum::BitEnumCodec;
pub use codec::Codec;
pub use context::{DecorationTable, DeserializeContext, Deserializer, SerializeContext, Serializer};
pub use debug::disassemble;
pub use error::CodecError;
pub use model::{
    opcode_of, Attribute, EnumAttr, Location, NamedAttribute, OpDef, OpResult, Operation,
    SymbolizeFn, Type, Value,
};

pub use crate::common::{List, Word, WordReader, MAX_OPCODE, MAX_WORD_COUNT, OP_DECORATE};
