mod attr;
mod op;

pub use attr::{plan_attribute, AttributeKind, DecodeStrategy, EncodeStrategy};
pub use op::{plan_operation, DecodeStep, DeserializerPlan, EncodeStep, OpPlan, SerializerPlan};

use crate::{
    common::Opcode,
    schema::{self, EnumDescriptor, GenError, Schema, UnderlyingType},
};
use std::fmt;

/// Everything the emitters need, in declaration order.
#[derive(Debug, Clone, Default)]
pub struct Plan {
    /// Every operation with an opcode, including hand-serialized ones.
    pub opcodes: Vec<OpcodeEntry>,
    /// Operations with generated (de)serializers.
    pub ops: Vec<OpPlan>,
    pub enums: Vec<EnumPlan>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpcodeEntry {
    pub name: String,
    pub opcode: Opcode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumPlan {
    pub desc: EnumDescriptor,
    pub underlying: UnderlyingType,
}

/// Validates the schema and lowers it into emitter plans. Nothing is planned
/// unless the whole schema is free of errors.
pub fn plan(schema: &Schema) -> Result<Plan, Vec<GenError>> {
    let mut errors = schema::validate(schema).err().unwrap_or_default();
    let mut out = Plan::default();

    for op in &schema.operations {
        if let Some(opcode) = op.opcode {
            out.opcodes.push(OpcodeEntry {
                name: op.name.clone(),
                opcode,
            });
        }
        match plan_operation(op) {
            Ok(Some(plan)) => out.ops.push(plan),
            Ok(None) => {}
            Err(errs) => errors.extend(errs),
        }
    }

    for desc in &schema.enums {
        if let Some(underlying) = UnderlyingType::from_name(&desc.underlying_type) {
            out.enums.push(EnumPlan {
                desc: desc.clone(),
                underlying,
            });
        }
    }

    if errors.is_empty() {
        Ok(out)
    } else {
        Err(errors)
    }
}

impl Plan {
    pub fn bit_enums(&self) -> impl Iterator<Item = &EnumPlan> + '_ {
        self.enums.iter().filter(|plan| plan.desc.is_bit_enum)
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for op in &self.ops {
            writeln!(f, "{op}")?;
        }
        for plan in &self.enums {
            let desc = &plan.desc;
            let kind = if desc.is_bit_enum { "bitenum" } else { "enum" };
            write!(f, "{kind} {}: {} [", desc.class_name, plan.underlying.as_str())?;
            for (i, case) in desc.cases.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{}={}", case.symbol, case.value)?;
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}
