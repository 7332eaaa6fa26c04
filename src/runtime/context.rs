use crate::{
    common::{Id, List, Opcode, Word, WordReader, WordWriter, MAX_OPCODE, OP_DECORATE},
    runtime::{Attribute, CodecError, Location, NamedAttribute, Operation, Type, Value},
};
use rustc_hash::FxHashMap;

/// Primitives generated serializers are written against.
pub trait SerializeContext {
    fn resolve_type(&mut self, location: Location, ty: Type) -> Result<Id, CodecError>;

    fn allocate_value_id(&mut self) -> Id;

    fn bind_value(&mut self, value: Value, id: Id);

    fn value_id(&self, value: Value) -> Option<Id>;

    /// Fails if the instruction cannot be described by a single header word.
    fn append_instruction(&mut self, opcode: Opcode, operands: &[Word]) -> Result<(), CodecError>;

    fn emit_decoration(
        &mut self,
        location: Location,
        id: Id,
        attr: &NamedAttribute,
    ) -> Result<(), CodecError>;
}

/// Primitives generated deserializers are written against.
pub trait DeserializeContext {
    fn lookup_type(&self, id: Id) -> Option<Type>;

    fn lookup_value(&self, id: Id) -> Option<Value>;

    fn register_value(&mut self, id: Id, value: Value);

    /// Decorations buffered for `id`, in the order they were read.
    fn decorations_for(&self, id: Id) -> &[NamedAttribute];

    fn location(&self) -> Location;

    fn construct_operation(
        &mut self,
        location: Location,
        name: &str,
        result_types: List<Type>,
        operands: List<Value>,
        attributes: Vec<NamedAttribute>,
    ) -> &Operation;
}

/// Maps attribute names to decoration numbers and back.
#[derive(Debug, Clone, Default)]
pub struct DecorationTable {
    numbers: FxHashMap<String, Word>,
    names: FxHashMap<Word, String>,
}

impl DecorationTable {
    #[must_use]
    pub fn new<'a, I: IntoIterator<Item = (&'a str, Word)>>(entries: I) -> Self {
        let mut table = Self::default();
        for (name, number) in entries {
            table.numbers.insert(name.to_string(), number);
            table.names.insert(number, name.to_string());
        }
        table
    }

    #[must_use]
    pub fn number(&self, name: &str) -> Option<Word> {
        self.numbers.get(name).copied()
    }

    #[must_use]
    pub fn name(&self, number: Word) -> Option<&str> {
        self.names.get(&number).map(String::as_str)
    }
}

/// Reference serialization context: one id space for types and values,
/// starting at 1, and a single module stream.
#[derive(Debug, Clone)]
pub struct Serializer {
    next_id: Id,
    types: FxHashMap<Type, Id>,
    values: FxHashMap<Value, Id>,
    decorations: DecorationTable,
    module: WordWriter,
}

impl Serializer {
    #[must_use]
    pub fn new(decorations: DecorationTable) -> Self {
        Self {
            next_id: 1,
            types: FxHashMap::default(),
            values: FxHashMap::default(),
            decorations,
            module: WordWriter::default(),
        }
    }

    pub fn define_type(&mut self, ty: Type) -> Id {
        if let Some(&id) = self.types.get(&ty) {
            return id;
        }
        let id = self.allocate_value_id();
        self.types.insert(ty, id);
        id
    }

    /// Assigns an id to a value produced outside the serialized operations,
    /// e.g. a function parameter.
    pub fn define_value(&mut self, value: Value) -> Id {
        let id = self.allocate_value_id();
        self.bind_value(value, id);
        id
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        self.module.as_words()
    }

    #[must_use]
    pub fn into_words(self) -> Vec<Word> {
        self.module.into_inner()
    }
}

impl SerializeContext for Serializer {
    fn resolve_type(&mut self, location: Location, ty: Type) -> Result<Id, CodecError> {
        self.types
            .get(&ty)
            .copied()
            .ok_or(CodecError::UnresolvedType { location, ty })
    }

    fn allocate_value_id(&mut self) -> Id {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn bind_value(&mut self, value: Value, id: Id) {
        self.values.insert(value, id);
    }

    fn value_id(&self, value: Value) -> Option<Id> {
        self.values.get(&value).copied()
    }

    fn append_instruction(&mut self, opcode: Opcode, operands: &[Word]) -> Result<(), CodecError> {
        if opcode > MAX_OPCODE {
            return Err(CodecError::OpcodeOutOfRange { opcode });
        }
        self.module
            .push_instruction(opcode, operands)
            .ok_or(CodecError::InstructionTooLong {
                opcode,
                word_count: operands.len() + 1,
            })
    }

    /// Writes `attr` as one `OpDecorate`. The words do not record the
    /// attribute's shape: on the way back a one-element `Array` reads as
    /// `Int` and an empty `Array` as `Unit`.
    fn emit_decoration(
        &mut self,
        _location: Location,
        id: Id,
        attr: &NamedAttribute,
    ) -> Result<(), CodecError> {
        let number = self
            .decorations
            .number(&attr.name)
            .ok_or_else(|| CodecError::UnknownDecoration {
                name: attr.name.clone(),
            })?;
        let mut operands: List<Word> = List::from_slice(&[id, number]);
        match &attr.value {
            Attribute::Unit => {}
            Attribute::Int(_) => operands.extend(attr.value.as_word()),
            Attribute::Array(_) => {
                let words = attr
                    .value
                    .as_words()
                    .ok_or_else(|| CodecError::InvalidDecoration {
                        name: attr.name.clone(),
                    })?;
                operands.extend(words);
            }
        }
        self.append_instruction(OP_DECORATE, &operands)
    }
}

/// Reference deserialization context.
#[derive(Debug, Clone)]
pub struct Deserializer {
    types: FxHashMap<Id, Type>,
    values: FxHashMap<Id, Value>,
    decorations: FxHashMap<Id, Vec<NamedAttribute>>,
    table: DecorationTable,
    next_value: u32,
    location: Location,
    operations: Vec<Operation>,
}

impl Deserializer {
    #[must_use]
    pub fn new(table: DecorationTable) -> Self {
        Self {
            types: FxHashMap::default(),
            values: FxHashMap::default(),
            decorations: FxHashMap::default(),
            table,
            next_value: 0,
            location: Location::Unknown,
            operations: Vec::new(),
        }
    }

    pub fn define_type(&mut self, id: Id, ty: Type) {
        self.types.insert(id, ty);
    }

    pub fn define_value(&mut self, id: Id, value: Value) {
        self.next_value = self.next_value.max(value.0 + 1);
        self.values.insert(id, value);
    }

    #[must_use]
    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    #[must_use]
    pub fn into_operations(self) -> Vec<Operation> {
        self.operations
    }

    /// Buffers the attribute carried by the `OpDecorate` instruction at word
    /// `offset`.
    ///
    /// Literal words map back to `Unit` (none), `Int` (one) or `Array`
    /// (several).
    pub fn buffer_decoration(
        &mut self,
        offset: usize,
        operands: &[Word],
    ) -> Result<(), CodecError> {
        let mut reader = WordReader::new(operands);
        let malformed = CodecError::MalformedInstruction { offset };
        let target = reader.take().ok_or_else(|| malformed.clone())?;
        let number = reader.take().ok_or(malformed)?;
        let name = self
            .table
            .name(number)
            .ok_or_else(|| CodecError::UnknownDecoration {
                name: format!("#{number}"),
            })?
            .to_string();
        let value = match reader.take_rest() {
            [] => Attribute::Unit,
            &[word] => Attribute::from_word(word),
            words => Attribute::Array(words.iter().copied().map(Attribute::from_word).collect()),
        };
        self.decorations
            .entry(target)
            .or_default()
            .push(NamedAttribute::new(name, value));
        Ok(())
    }

    /// Decodes a whole module stream. Decorations are buffered in a first
    /// pass so they may appear before or after the instruction they decorate;
    /// every other instruction goes to `dispatch` in stream order.
    pub fn read_module<F>(&mut self, words: &[Word], mut dispatch: F) -> Result<(), CodecError>
    where
        F: FnMut(&mut Self, Opcode, &[Word]) -> Result<(), CodecError>,
    {
        let mut reader = WordReader::new(words);
        while !reader.is_at_end() {
            let offset = reader.offset();
            let (opcode, operands) = reader
                .take_instruction()
                .ok_or(CodecError::MalformedInstruction { offset })?;
            if opcode == OP_DECORATE {
                self.buffer_decoration(offset, operands)?;
            }
        }

        let mut reader = WordReader::new(words);
        while !reader.is_at_end() {
            let offset = reader.offset();
            let (opcode, operands) = reader
                .take_instruction()
                .ok_or(CodecError::MalformedInstruction { offset })?;
            if opcode == OP_DECORATE {
                continue;
            }
            self.location = Location::Word(offset);
            dispatch(self, opcode, operands)?;
        }
        self.location = Location::Unknown;
        Ok(())
    }
}

impl DeserializeContext for Deserializer {
    fn lookup_type(&self, id: Id) -> Option<Type> {
        self.types.get(&id).copied()
    }

    fn lookup_value(&self, id: Id) -> Option<Value> {
        self.values.get(&id).copied()
    }

    fn register_value(&mut self, id: Id, value: Value) {
        self.values.insert(id, value);
    }

    fn decorations_for(&self, id: Id) -> &[NamedAttribute] {
        self.decorations.get(&id).map_or(&[], Vec::as_slice)
    }

    fn location(&self) -> Location {
        self.location
    }

    fn construct_operation(
        &mut self,
        location: Location,
        name: &str,
        result_types: List<Type>,
        operands: List<Value>,
        attributes: Vec<NamedAttribute>,
    ) -> &Operation {
        let mut op = Operation::new(name)
            .with_location(location)
            .with_operands(operands);
        if let Some(&ty) = result_types.first() {
            let value = Value(self.next_value);
            self.next_value += 1;
            op = op.with_result(ty, value);
        }
        for attr in attributes {
            op.set_attribute(attr);
        }
        self.operations.push(op);
        &self.operations[self.operations.len() - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> DecorationTable {
        DecorationTable::new([("relaxed_precision", 0), ("binding", 33), ("offsets", 90)])
    }

    #[test]
    fn decorations_round_trip_through_words() {
        let mut ser = Serializer::new(table());
        ser.emit_decoration(
            Location::Unknown,
            7,
            &NamedAttribute::new("binding", Attribute::Int(2)),
        )
        .unwrap();
        ser.emit_decoration(
            Location::Unknown,
            7,
            &NamedAttribute::new("relaxed_precision", Attribute::Unit),
        )
        .unwrap();
        ser.emit_decoration(
            Location::Unknown,
            8,
            &NamedAttribute::new("offsets", Attribute::int_array([0, 16])),
        )
        .unwrap();
        assert_eq!(
            ser.words(),
            &[
                (4 << 16) | OP_DECORATE,
                7,
                33,
                2,
                (3 << 16) | OP_DECORATE,
                7,
                0,
                (5 << 16) | OP_DECORATE,
                8,
                90,
                0,
                16,
            ]
        );

        let mut de = Deserializer::new(table());
        de.read_module(ser.words(), |_, opcode, _| {
            Err(CodecError::UnhandledDeserialization { opcode })
        })
        .unwrap();
        assert_eq!(
            de.decorations_for(7),
            &[
                NamedAttribute::new("binding", Attribute::Int(2)),
                NamedAttribute::new("relaxed_precision", Attribute::Unit),
            ]
        );
        assert_eq!(
            de.decorations_for(8),
            &[NamedAttribute::new("offsets", Attribute::int_array([0, 16]))]
        );
        assert_eq!(de.decorations_for(9), &[] as &[NamedAttribute]);
    }

    #[test]
    fn unknown_decoration_name() {
        let mut ser = Serializer::new(DecorationTable::default());
        let binding = NamedAttribute::new("binding", Attribute::Int(0));
        let err = ser.emit_decoration(Location::Unknown, 1, &binding).unwrap_err();
        assert_eq!(err.to_string(), "attribute 'binding' has no decoration number");
        assert!(ser.words().is_empty());
    }

    #[test]
    fn decoration_shape_is_not_preserved() {
        let single = NamedAttribute::new("offsets", Attribute::int_array([4]));
        let empty = NamedAttribute::new("offsets", Attribute::int_array(Vec::new()));
        let mut ser = Serializer::new(table());
        ser.emit_decoration(Location::Unknown, 3, &single).unwrap();
        ser.emit_decoration(Location::Unknown, 4, &empty).unwrap();

        let mut de = Deserializer::new(table());
        de.read_module(ser.words(), |_, _, _| Ok(())).unwrap();
        assert_eq!(
            de.decorations_for(3),
            &[NamedAttribute::new("offsets", Attribute::Int(4))]
        );
        assert_eq!(
            de.decorations_for(4),
            &[NamedAttribute::new("offsets", Attribute::Unit)]
        );
    }

    #[test]
    fn truncated_decoration_reports_its_offset() {
        let words = [(3 << 16) | 12, 1, 2, (2 << 16) | OP_DECORATE, 7];
        let mut de = Deserializer::new(table());
        let err = de.read_module(&words, |_, _, _| Ok(())).unwrap_err();
        assert_eq!(err, CodecError::MalformedInstruction { offset: 3 });
    }

    #[test]
    fn oversized_instructions_are_rejected() {
        let mut ser = Serializer::new(table());
        assert_eq!(
            ser.append_instruction(0x1_000c, &[1, 2]),
            Err(CodecError::OpcodeOutOfRange { opcode: 0x1_000c })
        );
        let operands = vec![0; 0xffff];
        let err = ser.append_instruction(57, &operands).unwrap_err();
        assert_eq!(
            err.to_string(),
            "instruction with opcode 57 needs 65536 words, but a header can only count 65535"
        );
        assert!(ser.words().is_empty());
    }

    #[test]
    fn truncated_module_is_rejected() {
        let mut de = Deserializer::new(table());
        let err = de.read_module(&[(4 << 16) | 12, 1], |_, _, _| Ok(())).unwrap_err();
        assert_eq!(err, CodecError::MalformedInstruction { offset: 0 });
    }
}
