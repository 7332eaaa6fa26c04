use crate::{
    common::Opcode,
    plan::{plan_attribute, DecodeStrategy, EncodeStrategy},
    schema::{ArgumentKind, GenError, OperationDescriptor},
};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpPlan {
    pub name: String,
    pub opcode: Opcode,
    pub has_result: bool,
    pub serializer: SerializerPlan,
    pub deserializer: DeserializerPlan,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SerializerPlan {
    pub steps: Vec<EncodeStep>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeserializerPlan {
    pub steps: Vec<DecodeStep>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodeStep {
    /// Resolve the result type, allocate the result id, push both.
    Result,
    /// `index` counts operand arguments, so it is also the position of the
    /// first value of a variadic group.
    Operand { index: usize, variadic: bool },
    Attribute {
        name: String,
        strategy: EncodeStrategy,
        optional: bool,
    },
    Append,
    Decorations,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeStep {
    ResultType,
    ResultId,
    Operand { variadic: bool },
    Attribute {
        name: String,
        strategy: DecodeStrategy,
        optional: bool,
    },
    CheckWordCount,
    MergeDecorations,
    /// Build the operation and, if it has a result, register its id.
    Construct,
}

/// Plans one operation. Returns `Ok(None)` for operations that are not
/// eligible for generated (de)serialization.
pub fn plan_operation(op: &OperationDescriptor) -> Result<Option<OpPlan>, Vec<GenError>> {
    let opcode = match op.opcode {
        Some(opcode) if op.is_eligible() => opcode,
        _ => return Ok(None),
    };
    let has_result = op.result_arity == 1;

    let mut errors = Vec::new();
    let mut encode = Vec::with_capacity(op.arguments.len() + 3);
    let mut decode = Vec::with_capacity(op.arguments.len() + 5);

    if has_result {
        encode.push(EncodeStep::Result);
        decode.push(DecodeStep::ResultType);
        decode.push(DecodeStep::ResultId);
    }

    let mut operand_index = 0;
    for arg in &op.arguments {
        match &arg.kind {
            &ArgumentKind::Operand { variadic } => {
                encode.push(EncodeStep::Operand {
                    index: operand_index,
                    variadic,
                });
                decode.push(DecodeStep::Operand { variadic });
                operand_index += 1;
            }
            ArgumentKind::Attribute { kind, optional } => {
                match plan_attribute(&op.name, &arg.name, kind, arg.range) {
                    Ok(kind) => {
                        encode.push(EncodeStep::Attribute {
                            name: arg.name.clone(),
                            strategy: kind.encode_strategy(),
                            optional: *optional,
                        });
                        decode.push(DecodeStep::Attribute {
                            name: arg.name.clone(),
                            strategy: kind.decode_strategy(),
                            optional: *optional,
                        });
                    }
                    Err(err) => errors.push(err),
                }
            }
        }
    }

    encode.push(EncodeStep::Append);
    decode.push(DecodeStep::CheckWordCount);
    if has_result {
        encode.push(EncodeStep::Decorations);
        decode.push(DecodeStep::MergeDecorations);
    }
    decode.push(DecodeStep::Construct);

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(Some(OpPlan {
        name: op.name.clone(),
        opcode,
        has_result,
        serializer: SerializerPlan { steps: encode },
        deserializer: DeserializerPlan { steps: decode },
    }))
}

impl fmt::Display for EncodeStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Result => f.write_str("result"),
            Self::Operand { index, variadic } => {
                write!(f, "operand {index}{}", if *variadic { "..." } else { "" })
            }
            Self::Attribute {
                name,
                strategy,
                optional,
            } => write!(f, "attr {name}{}: {strategy}", if *optional { "?" } else { "" }),
            Self::Append => f.write_str("append"),
            Self::Decorations => f.write_str("decorations"),
        }
    }
}

impl fmt::Display for DecodeStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ResultType => f.write_str("result-type"),
            Self::ResultId => f.write_str("result-id"),
            Self::Operand { variadic } => {
                write!(f, "operand{}", if *variadic { "..." } else { "" })
            }
            Self::Attribute {
                name,
                strategy,
                optional,
            } => write!(f, "attr {name}{}: {strategy}", if *optional { "?" } else { "" }),
            Self::CheckWordCount => f.write_str("check-word-count"),
            Self::MergeDecorations => f.write_str("merge-decorations"),
            Self::Construct => f.write_str("construct"),
        }
    }
}

fn join<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

impl fmt::Display for OpPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} = {}", self.name, self.opcode)?;
        f.write_str("  encode: ")?;
        join(f, &self.serializer.steps)?;
        f.write_str("\n  decode: ")?;
        join(f, &self.deserializer.steps)
    }
}
