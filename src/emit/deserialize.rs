use crate::{
    common::to_snake_case,
    plan::{DecodeStep, DecodeStrategy, OpPlan, Plan},
};
use std::fmt;

/// Decode functions for every planned operation, then the opcode dispatch.
pub struct Deserializers<'a> {
    pub plan: &'a Plan,
    pub rt: &'a str,
}

impl fmt::Display for Deserializers<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for op in &self.plan.ops {
            writeln!(f)?;
            write_deserializer(f, op, self.rt)?;
        }
        writeln!(f)?;
        write_dispatch(f, &self.plan.ops, self.rt)
    }
}

fn write_deserializer(f: &mut fmt::Formatter<'_>, op: &OpPlan, rt: &str) -> fmt::Result {
    let name = &op.name;
    let steps = &op.deserializer.steps;
    let has_operands = steps
        .iter()
        .any(|step| matches!(step, DecodeStep::Operand { .. }));
    let has_attributes = steps
        .iter()
        .any(|step| matches!(step, DecodeStep::Attribute { .. }));
    let reads = op.has_result || has_operands || has_attributes;

    writeln!(f, "pub fn deserialize_{}(", to_snake_case(name))?;
    writeln!(f, "    ctx: &mut impl {rt}::DeserializeContext,")?;
    writeln!(f, "    words: &[u32],")?;
    writeln!(f, ") -> Result<(), {rt}::CodecError> {{")?;
    let mutability = if reads { "mut " } else { "" };
    writeln!(f, "    let {mutability}reader = {rt}::WordReader::new(words);")?;
    if op.has_result {
        writeln!(f, "    let mut result_types: {rt}::List<{rt}::Type> = {rt}::List::new();")?;
    }
    if has_operands {
        writeln!(f, "    let mut operands: {rt}::List<{rt}::Value> = {rt}::List::new();")?;
    }
    let mutability = if has_attributes || op.has_result { "mut " } else { "" };
    writeln!(f, "    let {mutability}attributes: Vec<{rt}::NamedAttribute> = Vec::new();")?;

    for step in steps {
        match step {
            DecodeStep::ResultType => {
                writeln!(
                    f,
                    "    let type_id = reader.take().ok_or_else(|| {rt}::CodecError::ExpectedResultType {{"
                )?;
                writeln!(f, "        op: {name:?}.into(),")?;
                writeln!(f, "    }})?;")?;
                writeln!(
                    f,
                    "    let ty = ctx.lookup_type(type_id).ok_or_else(|| {rt}::CodecError::UnknownTypeId {{"
                )?;
                writeln!(f, "        op: {name:?}.into(),")?;
                writeln!(f, "        id: type_id,")?;
                writeln!(f, "    }})?;")?;
                writeln!(f, "    result_types.push(ty);")?;
            }
            DecodeStep::ResultId => {
                writeln!(
                    f,
                    "    let value_id = reader.take().ok_or_else(|| {rt}::CodecError::ExpectedResultId {{"
                )?;
                writeln!(f, "        op: {name:?}.into(),")?;
                writeln!(f, "    }})?;")?;
            }
            DecodeStep::Operand { variadic } => {
                if *variadic {
                    writeln!(f, "    for &id in reader.take_rest() {{")?;
                } else {
                    writeln!(f, "    if let Some(id) = reader.take() {{")?;
                }
                writeln!(f, "        let value = ctx")?;
                writeln!(f, "            .lookup_value(id)")?;
                writeln!(f, "            .ok_or({rt}::CodecError::UnknownValueId {{ id }})?;")?;
                writeln!(f, "        operands.push(value);")?;
                writeln!(f, "    }}")?;
            }
            DecodeStep::Attribute {
                name: attr, strategy, ..
            } => match strategy {
                DecodeStrategy::Word => {
                    writeln!(f, "    if let Some(word) = reader.take() {{")?;
                    writeln!(f, "        let value = {rt}::Attribute::from_word(word);")?;
                    writeln!(
                        f,
                        "        attributes.push({rt}::NamedAttribute::new({attr:?}, value));"
                    )?;
                    writeln!(f, "    }}")?;
                }
                DecodeStrategy::Remaining => {
                    writeln!(f, "    if !reader.is_at_end() {{")?;
                    writeln!(f, "        let elements = reader")?;
                    writeln!(f, "            .take_rest()")?;
                    writeln!(f, "            .iter()")?;
                    writeln!(f, "            .copied()")?;
                    writeln!(f, "            .map({rt}::Attribute::from_word)")?;
                    writeln!(f, "            .collect();")?;
                    writeln!(f, "        let value = {rt}::Attribute::Array(elements);")?;
                    writeln!(
                        f,
                        "        attributes.push({rt}::NamedAttribute::new({attr:?}, value));"
                    )?;
                    writeln!(f, "    }}")?;
                }
            },
            DecodeStep::CheckWordCount => {
                writeln!(f, "    if !reader.is_at_end() {{")?;
                writeln!(f, "        return Err({rt}::CodecError::WordCountMismatch {{")?;
                writeln!(f, "            op: {name:?}.into(),")?;
                writeln!(f, "            consumed: reader.offset(),")?;
                writeln!(f, "            total: reader.len(),")?;
                writeln!(f, "        }});")?;
                writeln!(f, "    }}")?;
            }
            DecodeStep::MergeDecorations => {
                writeln!(f, "    attributes.extend_from_slice(ctx.decorations_for(value_id));")?;
            }
            DecodeStep::Construct => {
                let result_types = if op.has_result {
                    "result_types"
                } else {
                    "Default::default()"
                };
                let operands = if has_operands {
                    "operands"
                } else {
                    "Default::default()"
                };
                writeln!(f, "    let location = ctx.location();")?;
                if op.has_result {
                    writeln!(f, "    let produced = ctx")?;
                    writeln!(
                        f,
                        "        .construct_operation(location, {name:?}, {result_types}, {operands}, attributes)"
                    )?;
                    writeln!(f, "        .result();")?;
                    writeln!(f, "    if let Some(result) = produced {{")?;
                    writeln!(f, "        ctx.register_value(value_id, result.value);")?;
                    writeln!(f, "    }}")?;
                } else {
                    writeln!(
                        f,
                        "    ctx.construct_operation(location, {name:?}, {result_types}, {operands}, attributes);"
                    )?;
                }
            }
        }
    }

    writeln!(f, "    Ok(())")?;
    writeln!(f, "}}")
}

fn write_dispatch(f: &mut fmt::Formatter<'_>, ops: &[OpPlan], rt: &str) -> fmt::Result {
    let (ctx, words) = if ops.is_empty() {
        ("_ctx", "_words")
    } else {
        ("ctx", "words")
    };
    writeln!(f, "pub fn dispatch_deserialization(")?;
    writeln!(f, "    {ctx}: &mut impl {rt}::DeserializeContext,")?;
    writeln!(f, "    opcode: u32,")?;
    writeln!(f, "    {words}: &[u32],")?;
    writeln!(f, ") -> Result<(), {rt}::CodecError> {{")?;
    writeln!(f, "    match opcode {{")?;
    for op in ops {
        writeln!(
            f,
            "        {} => deserialize_{}(ctx, words),",
            op.opcode,
            to_snake_case(&op.name)
        )?;
    }
    writeln!(f, "        _ => Err({rt}::CodecError::UnhandledDeserialization {{ opcode }}),")?;
    writeln!(f, "    }}")?;
    writeln!(f, "}}")
}
