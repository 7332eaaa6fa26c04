use crate::{
    common::to_snake_case,
    plan::{EncodeStep, EncodeStrategy, OpPlan, Plan},
};
use std::fmt;

/// Encode functions for every planned operation, then the dispatch chain.
pub struct Serializers<'a> {
    pub plan: &'a Plan,
    pub rt: &'a str,
}

impl fmt::Display for Serializers<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for op in &self.plan.ops {
            writeln!(f)?;
            write_serializer(f, op, self.rt)?;
        }
        writeln!(f)?;
        write_dispatch(f, &self.plan.ops, self.rt)
    }
}

fn write_serializer(f: &mut fmt::Formatter<'_>, op: &OpPlan, rt: &str) -> fmt::Result {
    let name = &op.name;
    let steps = &op.serializer.steps;
    let has_operands = steps
        .iter()
        .any(|step| matches!(step, EncodeStep::Operand { .. }));
    let has_attributes = steps
        .iter()
        .any(|step| matches!(step, EncodeStep::Attribute { .. }));
    let pushes = op.has_result || has_operands || has_attributes;

    writeln!(f, "pub fn serialize_{}(", to_snake_case(name))?;
    writeln!(f, "    ctx: &mut impl {rt}::SerializeContext,")?;
    let op_param = if pushes { "op" } else { "_op" };
    writeln!(f, "    {op_param}: &{rt}::Operation,")?;
    writeln!(f, ") -> Result<(), {rt}::CodecError> {{")?;
    let mutability = if pushes { "mut " } else { "" };
    writeln!(f, "    let {mutability}operands: Vec<u32> = Vec::new();")?;
    if has_attributes && op.has_result {
        writeln!(f, "    let mut elided: Vec<&str> = Vec::new();")?;
    }
    if has_operands {
        writeln!(f, "    let mut undefined: Vec<usize> = Vec::new();")?;
    }

    for step in steps {
        match step {
            EncodeStep::Result => {
                writeln!(
                    f,
                    "    let result = op.result().ok_or_else(|| {rt}::CodecError::MissingResult {{"
                )?;
                writeln!(f, "        op: {name:?}.into(),")?;
                writeln!(f, "    }})?;")?;
                writeln!(f, "    let type_id = ctx.resolve_type(op.location(), result.ty)?;")?;
                writeln!(f, "    operands.push(type_id);")?;
                writeln!(f, "    let result_id = ctx.allocate_value_id();")?;
                writeln!(f, "    ctx.bind_value(result.value, result_id);")?;
                writeln!(f, "    operands.push(result_id);")?;
            }
            &EncodeStep::Operand { index, variadic } => {
                if variadic {
                    writeln!(
                        f,
                        "    for (offset, &value) in op.operand_group({index}, true).iter().enumerate() {{"
                    )?;
                } else {
                    writeln!(f, "    for &value in op.operand_group({index}, false) {{")?;
                }
                writeln!(f, "        match ctx.value_id(value) {{")?;
                writeln!(f, "            Some(id) => operands.push(id),")?;
                match (variadic, index) {
                    (false, _) => writeln!(f, "            None => undefined.push({index}),")?,
                    (true, 0) => writeln!(f, "            None => undefined.push(offset),")?,
                    (true, _) => writeln!(
                        f,
                        "            None => undefined.push({index} + offset),"
                    )?,
                }
                writeln!(f, "        }}")?;
                writeln!(f, "    }}")?;
            }
            EncodeStep::Attribute {
                name: attr, strategy, ..
            } => {
                let (binding, accessor) = match strategy {
                    EncodeStrategy::Word => ("word", "as_word"),
                    EncodeStrategy::EachElement => ("words", "as_words"),
                };
                writeln!(f, "    if let Some(attr) = op.attribute({attr:?}) {{")?;
                writeln!(
                    f,
                    "        let {binding} = attr.{accessor}().ok_or_else(|| {rt}::CodecError::InvalidAttribute {{"
                )?;
                writeln!(f, "            op: {name:?}.into(),")?;
                writeln!(f, "            name: {attr:?}.into(),")?;
                writeln!(f, "        }})?;")?;
                match strategy {
                    EncodeStrategy::Word => writeln!(f, "        operands.push(word);")?,
                    EncodeStrategy::EachElement => writeln!(f, "        operands.extend(words);")?,
                }
                if op.has_result {
                    writeln!(f, "        elided.push({attr:?});")?;
                }
                writeln!(f, "    }}")?;
            }
            EncodeStep::Append => {
                if has_operands {
                    writeln!(f, "    if !undefined.is_empty() {{")?;
                    writeln!(f, "        return Err({rt}::CodecError::UseBeforeDef {{")?;
                    writeln!(f, "            op: {name:?}.into(),")?;
                    writeln!(f, "            positions: undefined.into_iter().collect(),")?;
                    writeln!(f, "        }});")?;
                    writeln!(f, "    }}")?;
                }
                writeln!(
                    f,
                    "    ctx.append_instruction({rt}::opcode_of::<{name}>(), &operands)?;"
                )?;
            }
            EncodeStep::Decorations => {
                writeln!(f, "    for attr in op.attributes() {{")?;
                if has_attributes {
                    writeln!(f, "        if !elided.contains(&attr.name.as_str()) {{")?;
                    writeln!(
                        f,
                        "            ctx.emit_decoration(op.location(), result_id, attr)?;"
                    )?;
                    writeln!(f, "        }}")?;
                } else {
                    writeln!(f, "        ctx.emit_decoration(op.location(), result_id, attr)?;")?;
                }
                writeln!(f, "    }}")?;
            }
        }
    }

    writeln!(f, "    Ok(())")?;
    writeln!(f, "}}")
}

fn write_dispatch(f: &mut fmt::Formatter<'_>, ops: &[OpPlan], rt: &str) -> fmt::Result {
    let ctx = if ops.is_empty() { "_ctx" } else { "ctx" };
    writeln!(f, "pub fn dispatch_serialization(")?;
    writeln!(f, "    {ctx}: &mut impl {rt}::SerializeContext,")?;
    writeln!(f, "    op: &{rt}::Operation,")?;
    writeln!(f, ") -> Result<(), {rt}::CodecError> {{")?;
    for (i, op) in ops.iter().enumerate() {
        let keyword = if i == 0 { "    if" } else { " else if" };
        writeln!(f, "{keyword} op.isa::<{}>() {{", op.name)?;
        writeln!(f, "        serialize_{}(ctx, op)", to_snake_case(&op.name))?;
        write!(f, "    }}")?;
    }
    let indent = if ops.is_empty() {
        "    "
    } else {
        writeln!(f, " else {{")?;
        "        "
    };
    writeln!(f, "{indent}Err({rt}::CodecError::UnhandledSerialization {{")?;
    writeln!(f, "{indent}    op: op.name().to_string(),")?;
    writeln!(f, "{indent}}})")?;
    if !ops.is_empty() {
        writeln!(f, "    }}")?;
    }
    writeln!(f, "}}")
}
