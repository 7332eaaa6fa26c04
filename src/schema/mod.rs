mod error;
mod repr;
mod validate;

pub use error::{GenError, GenErrorKind};
pub use repr::{
    Argument, ArgumentKind, EnumCase, EnumDescriptor, OperationDescriptor, Schema, UnderlyingType,
};
pub use validate::validate;
