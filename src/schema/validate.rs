use crate::{
    common::{Opcode, MAX_OPCODE, OP_DECORATE},
    schema::{EnumDescriptor, GenError, GenErrorKind, OperationDescriptor, Schema, UnderlyingType},
};
use rustc_hash::FxHashMap;
use std::collections::hash_map::Entry;
use text_size::TextRange;

/// Checks every structural invariant of the schema except attribute kinds,
/// which belong to the attribute planner.
pub fn validate(schema: &Schema) -> Result<(), Vec<GenError>> {
    let mut ctx = Validator::default();
    for op in &schema.operations {
        ctx.operation(op);
    }
    for desc in &schema.enums {
        ctx.enumeration(desc);
    }
    if ctx.errors.is_empty() {
        Ok(())
    } else {
        Err(ctx.errors)
    }
}

#[derive(Default)]
struct Validator<'a> {
    op_names: FxHashMap<&'a str, TextRange>,
    opcodes: FxHashMap<Opcode, (&'a str, TextRange)>,
    enum_names: FxHashMap<&'a str, TextRange>,
    errors: Vec<GenError>,
}

impl<'a> Validator<'a> {
    fn error(&mut self, range: TextRange, kind: GenErrorKind) {
        self.errors.push(GenError::new(range, kind));
    }

    fn operation(&mut self, op: &'a OperationDescriptor) {
        match self.op_names.entry(op.name.as_str()) {
            Entry::Vacant(vacant) => {
                vacant.insert(op.range);
            }
            Entry::Occupied(occupied) => {
                let original = *occupied.get();
                self.error(
                    op.range,
                    GenErrorKind::DuplicateOperation {
                        op: op.name.clone(),
                        original,
                    },
                );
            }
        }

        if let Some(opcode) = op.opcode {
            if opcode > MAX_OPCODE {
                self.error(
                    op.range,
                    GenErrorKind::OpcodeOutOfRange {
                        op: op.name.clone(),
                        opcode,
                    },
                );
            } else if opcode == OP_DECORATE {
                self.error(
                    op.range,
                    GenErrorKind::ReservedOpcode {
                        op: op.name.clone(),
                        opcode,
                    },
                );
            }
            match self.opcodes.entry(opcode) {
                Entry::Vacant(vacant) => {
                    vacant.insert((op.name.as_str(), op.range));
                }
                Entry::Occupied(occupied) => {
                    let (original_op, original) = *occupied.get();
                    self.error(
                        op.range,
                        GenErrorKind::DuplicateOpcode {
                            op: op.name.clone(),
                            opcode,
                            original_op: original_op.to_string(),
                            original,
                        },
                    );
                }
            }
        }

        if op.result_arity > 1 {
            self.error(
                op.range,
                GenErrorKind::TooManyResults {
                    op: op.name.clone(),
                    arity: op.result_arity,
                },
            );
        }

        let last = op.arguments.len().saturating_sub(1);
        let mut seen_variadic = false;
        for (i, arg) in op.arguments.iter().enumerate() {
            if !arg.is_variadic() {
                continue;
            }
            if seen_variadic {
                self.error(
                    arg.range,
                    GenErrorKind::DuplicateVariadic {
                        op: op.name.clone(),
                        operand: arg.name.clone(),
                    },
                );
            } else if i != last {
                self.error(
                    arg.range,
                    GenErrorKind::MisplacedVariadic {
                        op: op.name.clone(),
                        operand: arg.name.clone(),
                    },
                );
            }
            seen_variadic = true;
        }
    }

    fn enumeration(&mut self, desc: &'a EnumDescriptor) {
        match self.enum_names.entry(desc.class_name.as_str()) {
            Entry::Vacant(vacant) => {
                vacant.insert(desc.range);
            }
            Entry::Occupied(occupied) => {
                let original = *occupied.get();
                self.error(
                    desc.range,
                    GenErrorKind::DuplicateEnum {
                        name: desc.class_name.clone(),
                        original,
                    },
                );
            }
        }

        let max = if let Some(ty) = UnderlyingType::from_name(&desc.underlying_type) {
            ty.max_value()
        } else {
            self.error(
                desc.range,
                GenErrorKind::UnsupportedUnderlyingType {
                    name: desc.class_name.clone(),
                    ty: desc.underlying_type.clone(),
                },
            );
            u64::MAX
        };

        if desc.is_bit_enum && desc.separator.is_empty() {
            self.error(
                desc.range,
                GenErrorKind::EmptySeparator {
                    name: desc.class_name.clone(),
                },
            );
        }

        let mut symbols = FxHashMap::<&str, TextRange>::default();
        for case in &desc.cases {
            if case.value > max {
                self.error(
                    case.range,
                    GenErrorKind::CaseOutOfRange {
                        name: desc.class_name.clone(),
                        symbol: case.symbol.clone(),
                        value: case.value,
                        ty: desc.underlying_type.clone(),
                    },
                );
            }
            if let Some(&original) = symbols.get(case.symbol.as_str()) {
                self.error(
                    case.range,
                    GenErrorKind::DuplicateCase {
                        name: desc.class_name.clone(),
                        symbol: case.symbol.clone(),
                        original,
                    },
                );
            } else {
                symbols.insert(case.symbol.as_str(), case.range);
            }
        }
    }
}
