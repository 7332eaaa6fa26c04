use crate::{
    common::{Id, List, Opcode, Word, WordReader},
    plan::{DecodeStep, DecodeStrategy, EncodeStep, EncodeStrategy, OpPlan, Plan},
    runtime::{
        Attribute, CodecError, DeserializeContext, NamedAttribute, Operation, SerializeContext,
        Type, Value, OP_DECORATE,
    },
    schema::{GenError, Schema},
};
use rustc_hash::FxHashMap;

/// Runs operation plans directly against a context, with the behaviour the
/// rendered serializers and deserializers have.
#[derive(Debug, Clone, Default)]
pub struct Codec {
    ops: Vec<OpPlan>,
    by_opcode: FxHashMap<Opcode, usize>,
}

impl Codec {
    #[must_use]
    pub fn new(plan: &Plan) -> Self {
        let ops = plan.ops.clone();
        let by_opcode = ops
            .iter()
            .enumerate()
            .map(|(index, op)| (op.opcode, index))
            .collect();
        Self { ops, by_opcode }
    }

    pub fn from_schema(schema: &Schema) -> Result<Self, Vec<GenError>> {
        crate::plan::plan(schema).map(|plan| Self::new(&plan))
    }

    #[must_use]
    pub fn opcode_name(&self, opcode: Opcode) -> Option<&str> {
        if opcode == OP_DECORATE {
            return Some("Decorate");
        }
        self.by_opcode
            .get(&opcode)
            .map(|&index| self.ops[index].name.as_str())
    }

    /// Encodes one operation. Plans are tried in declaration order.
    pub fn serialize(
        &self,
        ctx: &mut impl SerializeContext,
        op: &Operation,
    ) -> Result<(), CodecError> {
        let plan = self
            .ops
            .iter()
            .find(|plan| plan.name == op.name())
            .ok_or_else(|| CodecError::UnhandledSerialization {
                op: op.name().to_string(),
            })?;
        serialize_op(plan, ctx, op)
    }

    /// Decodes the operand words of one instruction.
    pub fn deserialize(
        &self,
        ctx: &mut impl DeserializeContext,
        opcode: Opcode,
        words: &[Word],
    ) -> Result<(), CodecError> {
        let &index = self
            .by_opcode
            .get(&opcode)
            .ok_or(CodecError::UnhandledDeserialization { opcode })?;
        deserialize_op(&self.ops[index], ctx, words)
    }

    #[must_use]
    pub fn disassemble(&self, words: &[Word]) -> String {
        crate::runtime::disassemble(words, |opcode| self.opcode_name(opcode))
    }
}

fn serialize_op(
    plan: &OpPlan,
    ctx: &mut impl SerializeContext,
    op: &Operation,
) -> Result<(), CodecError> {
    let mut operands: List<Word> = List::new();
    let mut elided: List<&str> = List::new();
    let mut undefined: List<usize> = List::new();
    let mut result_id: Option<Id> = None;

    for step in &plan.serializer.steps {
        match step {
            EncodeStep::Result => {
                let result = op.result().ok_or_else(|| CodecError::MissingResult {
                    op: plan.name.clone(),
                })?;
                let type_id = ctx.resolve_type(op.location(), result.ty)?;
                operands.push(type_id);
                let id = ctx.allocate_value_id();
                ctx.bind_value(result.value, id);
                operands.push(id);
                result_id = Some(id);
            }
            &EncodeStep::Operand { index, variadic } => {
                for (offset, &value) in op.operand_group(index, variadic).iter().enumerate() {
                    if let Some(id) = ctx.value_id(value) {
                        operands.push(id);
                    } else {
                        undefined.push(index + offset);
                    }
                }
            }
            EncodeStep::Attribute { name, strategy, .. } => {
                let attr = match op.attribute(name) {
                    Some(attr) => attr,
                    None => continue,
                };
                let invalid = || CodecError::InvalidAttribute {
                    op: plan.name.clone(),
                    name: name.clone(),
                };
                match strategy {
                    EncodeStrategy::Word => operands.push(attr.as_word().ok_or_else(invalid)?),
                    EncodeStrategy::EachElement => {
                        operands.extend(attr.as_words().ok_or_else(invalid)?);
                    }
                }
                elided.push(name.as_str());
            }
            EncodeStep::Append => {
                if !undefined.is_empty() {
                    return Err(CodecError::UseBeforeDef {
                        op: plan.name.clone(),
                        positions: undefined,
                    });
                }
                ctx.append_instruction(plan.opcode, &operands)?;
            }
            EncodeStep::Decorations => {
                if let Some(id) = result_id {
                    for attr in op.attributes() {
                        if !elided.contains(&attr.name.as_str()) {
                            ctx.emit_decoration(op.location(), id, attr)?;
                        }
                    }
                }
            }
        }
    }
    Ok(())
}

fn deserialize_op(
    plan: &OpPlan,
    ctx: &mut impl DeserializeContext,
    words: &[Word],
) -> Result<(), CodecError> {
    let mut reader = WordReader::new(words);
    let mut result_types: List<Type> = List::new();
    let mut value_id: Option<Id> = None;
    let mut operands: List<Value> = List::new();
    let mut attributes: Vec<NamedAttribute> = Vec::new();

    for step in &plan.deserializer.steps {
        match step {
            DecodeStep::ResultType => {
                let id = reader.take().ok_or_else(|| CodecError::ExpectedResultType {
                    op: plan.name.clone(),
                })?;
                let ty = ctx.lookup_type(id).ok_or_else(|| CodecError::UnknownTypeId {
                    op: plan.name.clone(),
                    id,
                })?;
                result_types.push(ty);
            }
            DecodeStep::ResultId => {
                let id = reader.take().ok_or_else(|| CodecError::ExpectedResultId {
                    op: plan.name.clone(),
                })?;
                value_id = Some(id);
            }
            DecodeStep::Operand { variadic: true } => {
                for &id in reader.take_rest() {
                    operands.push(lookup_operand(&*ctx, id)?);
                }
            }
            DecodeStep::Operand { variadic: false } => {
                if let Some(id) = reader.take() {
                    operands.push(lookup_operand(&*ctx, id)?);
                }
            }
            DecodeStep::Attribute { name, strategy, .. } => {
                if reader.is_at_end() {
                    continue;
                }
                let value = match strategy {
                    DecodeStrategy::Word => {
                        Attribute::from_word(reader.take().unwrap_or_default())
                    }
                    DecodeStrategy::Remaining => Attribute::Array(
                        reader
                            .take_rest()
                            .iter()
                            .copied()
                            .map(Attribute::from_word)
                            .collect(),
                    ),
                };
                attributes.push(NamedAttribute::new(name.clone(), value));
            }
            DecodeStep::CheckWordCount => {
                if !reader.is_at_end() {
                    return Err(CodecError::WordCountMismatch {
                        op: plan.name.clone(),
                        consumed: reader.offset(),
                        total: reader.len(),
                    });
                }
            }
            DecodeStep::MergeDecorations => {
                if let Some(id) = value_id {
                    attributes.extend_from_slice(ctx.decorations_for(id));
                }
            }
            DecodeStep::Construct => {
                let location = ctx.location();
                let produced = ctx
                    .construct_operation(
                        location,
                        &plan.name,
                        std::mem::take(&mut result_types),
                        std::mem::take(&mut operands),
                        std::mem::take(&mut attributes),
                    )
                    .result();
                if let (Some(id), Some(result)) = (value_id, produced) {
                    ctx.register_value(id, result.value);
                }
            }
        }
    }
    Ok(())
}

fn lookup_operand(ctx: &impl DeserializeContext, id: Id) -> Result<Value, CodecError> {
    ctx.lookup_value(id).ok_or(CodecError::UnknownValueId { id })
}
