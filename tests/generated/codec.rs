// ==== BEGIN opcode_table ====
// @generated by spirv-autogen: opcode table. Do not edit.

pub enum Nop {}

impl ::spirv_autogen::runtime::OpDef for Nop {
    const NAME: &'static str = "Nop";
    const OPCODE: u32 = 0;
}

pub enum Add {}

impl ::spirv_autogen::runtime::OpDef for Add {
    const NAME: &'static str = "Add";
    const OPCODE: u32 = 12;
}

pub enum Load {}

impl ::spirv_autogen::runtime::OpDef for Load {
    const NAME: &'static str = "Load";
    const OPCODE: u32 = 61;
}

pub enum Call {}

impl ::spirv_autogen::runtime::OpDef for Call {
    const NAME: &'static str = "Call";
    const OPCODE: u32 = 57;
}

pub enum Store {}

impl ::spirv_autogen::runtime::OpDef for Store {
    const NAME: &'static str = "Store";
    const OPCODE: u32 = 62;
}

pub enum Manual {}

impl ::spirv_autogen::runtime::OpDef for Manual {
    const NAME: &'static str = "Manual";
    const OPCODE: u32 = 9;
}
// ==== END opcode_table ====

// ==== BEGIN serialization ====
// @generated by spirv-autogen: operation serializers. Do not edit.

pub fn serialize_nop(
    ctx: &mut impl ::spirv_autogen::runtime::SerializeContext,
    _op: &::spirv_autogen::runtime::Operation,
) -> Result<(), ::spirv_autogen::runtime::CodecError> {
    let operands: Vec<u32> = Vec::new();
    ctx.append_instruction(::spirv_autogen::runtime::opcode_of::<Nop>(), &operands)?;
    Ok(())
}

pub fn serialize_add(
    ctx: &mut impl ::spirv_autogen::runtime::SerializeContext,
    op: &::spirv_autogen::runtime::Operation,
) -> Result<(), ::spirv_autogen::runtime::CodecError> {
    let mut operands: Vec<u32> = Vec::new();
    let mut undefined: Vec<usize> = Vec::new();
    let result = op.result().ok_or_else(|| ::spirv_autogen::runtime::CodecError::MissingResult {
        op: "Add".into(),
    })?;
    let type_id = ctx.resolve_type(op.location(), result.ty)?;
    operands.push(type_id);
    let result_id = ctx.allocate_value_id();
    ctx.bind_value(result.value, result_id);
    operands.push(result_id);
    for &value in op.operand_group(0, false) {
        match ctx.value_id(value) {
            Some(id) => operands.push(id),
            None => undefined.push(0),
        }
    }
    for &value in op.operand_group(1, false) {
        match ctx.value_id(value) {
            Some(id) => operands.push(id),
            None => undefined.push(1),
        }
    }
    if !undefined.is_empty() {
        return Err(::spirv_autogen::runtime::CodecError::UseBeforeDef {
            op: "Add".into(),
            positions: undefined.into_iter().collect(),
        });
    }
    ctx.append_instruction(::spirv_autogen::runtime::opcode_of::<Add>(), &operands)?;
    for attr in op.attributes() {
        ctx.emit_decoration(op.location(), result_id, attr)?;
    }
    Ok(())
}

pub fn serialize_load(
    ctx: &mut impl ::spirv_autogen::runtime::SerializeContext,
    op: &::spirv_autogen::runtime::Operation,
) -> Result<(), ::spirv_autogen::runtime::CodecError> {
    let mut operands: Vec<u32> = Vec::new();
    let mut elided: Vec<&str> = Vec::new();
    let mut undefined: Vec<usize> = Vec::new();
    let result = op.result().ok_or_else(|| ::spirv_autogen::runtime::CodecError::MissingResult {
        op: "Load".into(),
    })?;
    let type_id = ctx.resolve_type(op.location(), result.ty)?;
    operands.push(type_id);
    let result_id = ctx.allocate_value_id();
    ctx.bind_value(result.value, result_id);
    operands.push(result_id);
    for &value in op.operand_group(0, false) {
        match ctx.value_id(value) {
            Some(id) => operands.push(id),
            None => undefined.push(0),
        }
    }
    if let Some(attr) = op.attribute("access") {
        let word = attr.as_word().ok_or_else(|| ::spirv_autogen::runtime::CodecError::InvalidAttribute {
            op: "Load".into(),
            name: "access".into(),
        })?;
        operands.push(word);
        elided.push("access");
    }
    if !undefined.is_empty() {
        return Err(::spirv_autogen::runtime::CodecError::UseBeforeDef {
            op: "Load".into(),
            positions: undefined.into_iter().collect(),
        });
    }
    ctx.append_instruction(::spirv_autogen::runtime::opcode_of::<Load>(), &operands)?;
    for attr in op.attributes() {
        if !elided.contains(&attr.name.as_str()) {
            ctx.emit_decoration(op.location(), result_id, attr)?;
        }
    }
    Ok(())
}

pub fn serialize_call(
    ctx: &mut impl ::spirv_autogen::runtime::SerializeContext,
    op: &::spirv_autogen::runtime::Operation,
) -> Result<(), ::spirv_autogen::runtime::CodecError> {
    let mut operands: Vec<u32> = Vec::new();
    let mut elided: Vec<&str> = Vec::new();
    let mut undefined: Vec<usize> = Vec::new();
    let result = op.result().ok_or_else(|| ::spirv_autogen::runtime::CodecError::MissingResult {
        op: "Call".into(),
    })?;
    let type_id = ctx.resolve_type(op.location(), result.ty)?;
    operands.push(type_id);
    let result_id = ctx.allocate_value_id();
    ctx.bind_value(result.value, result_id);
    operands.push(result_id);
    if let Some(attr) = op.attribute("callee") {
        let word = attr.as_word().ok_or_else(|| ::spirv_autogen::runtime::CodecError::InvalidAttribute {
            op: "Call".into(),
            name: "callee".into(),
        })?;
        operands.push(word);
        elided.push("callee");
    }
    for (offset, &value) in op.operand_group(0, true).iter().enumerate() {
        match ctx.value_id(value) {
            Some(id) => operands.push(id),
            None => undefined.push(offset),
        }
    }
    if !undefined.is_empty() {
        return Err(::spirv_autogen::runtime::CodecError::UseBeforeDef {
            op: "Call".into(),
            positions: undefined.into_iter().collect(),
        });
    }
    ctx.append_instruction(::spirv_autogen::runtime::opcode_of::<Call>(), &operands)?;
    for attr in op.attributes() {
        if !elided.contains(&attr.name.as_str()) {
            ctx.emit_decoration(op.location(), result_id, attr)?;
        }
    }
    Ok(())
}

pub fn serialize_store(
    ctx: &mut impl ::spirv_autogen::runtime::SerializeContext,
    op: &::spirv_autogen::runtime::Operation,
) -> Result<(), ::spirv_autogen::runtime::CodecError> {
    let mut operands: Vec<u32> = Vec::new();
    let mut undefined: Vec<usize> = Vec::new();
    for &value in op.operand_group(0, false) {
        match ctx.value_id(value) {
            Some(id) => operands.push(id),
            None => undefined.push(0),
        }
    }
    for &value in op.operand_group(1, false) {
        match ctx.value_id(value) {
            Some(id) => operands.push(id),
            None => undefined.push(1),
        }
    }
    if let Some(attr) = op.attribute("offsets") {
        let words = attr.as_words().ok_or_else(|| ::spirv_autogen::runtime::CodecError::InvalidAttribute {
            op: "Store".into(),
            name: "offsets".into(),
        })?;
        operands.extend(words);
    }
    if !undefined.is_empty() {
        return Err(::spirv_autogen::runtime::CodecError::UseBeforeDef {
            op: "Store".into(),
            positions: undefined.into_iter().collect(),
        });
    }
    ctx.append_instruction(::spirv_autogen::runtime::opcode_of::<Store>(), &operands)?;
    Ok(())
}

pub fn dispatch_serialization(
    ctx: &mut impl ::spirv_autogen::runtime::SerializeContext,
    op: &::spirv_autogen::runtime::Operation,
) -> Result<(), ::spirv_autogen::runtime::CodecError> {
    if op.isa::<Nop>() {
        serialize_nop(ctx, op)
    } else if op.isa::<Add>() {
        serialize_add(ctx, op)
    } else if op.isa::<Load>() {
        serialize_load(ctx, op)
    } else if op.isa::<Call>() {
        serialize_call(ctx, op)
    } else if op.isa::<Store>() {
        serialize_store(ctx, op)
    } else {
        Err(::spirv_autogen::runtime::CodecError::UnhandledSerialization {
            op: op.name().to_string(),
        })
    }
}
// ==== END serialization ====

// ==== BEGIN deserialization ====
// @generated by spirv-autogen: operation deserializers. Do not edit.

pub fn deserialize_nop(
    ctx: &mut impl ::spirv_autogen::runtime::DeserializeContext,
    words: &[u32],
) -> Result<(), ::spirv_autogen::runtime::CodecError> {
    let reader = ::spirv_autogen::runtime::WordReader::new(words);
    let attributes: Vec<::spirv_autogen::runtime::NamedAttribute> = Vec::new();
    if !reader.is_at_end() {
        return Err(::spirv_autogen::runtime::CodecError::WordCountMismatch {
            op: "Nop".into(),
            consumed: reader.offset(),
            total: reader.len(),
        });
    }
    let location = ctx.location();
    ctx.construct_operation(location, "Nop", Default::default(), Default::default(), attributes);
    Ok(())
}

pub fn deserialize_add(
    ctx: &mut impl ::spirv_autogen::runtime::DeserializeContext,
    words: &[u32],
) -> Result<(), ::spirv_autogen::runtime::CodecError> {
    let mut reader = ::spirv_autogen::runtime::WordReader::new(words);
    let mut result_types: ::spirv_autogen::runtime::List<::spirv_autogen::runtime::Type> = ::spirv_autogen::runtime::List::new();
    let mut operands: ::spirv_autogen::runtime::List<::spirv_autogen::runtime::Value> = ::spirv_autogen::runtime::List::new();
    let mut attributes: Vec<::spirv_autogen::runtime::NamedAttribute> = Vec::new();
    let type_id = reader.take().ok_or_else(|| ::spirv_autogen::runtime::CodecError::ExpectedResultType {
        op: "Add".into(),
    })?;
    let ty = ctx.lookup_type(type_id).ok_or_else(|| ::spirv_autogen::runtime::CodecError::UnknownTypeId {
        op: "Add".into(),
        id: type_id,
    })?;
    result_types.push(ty);
    let value_id = reader.take().ok_or_else(|| ::spirv_autogen::runtime::CodecError::ExpectedResultId {
        op: "Add".into(),
    })?;
    if let Some(id) = reader.take() {
        let value = ctx
            .lookup_value(id)
            .ok_or(::spirv_autogen::runtime::CodecError::UnknownValueId { id })?;
        operands.push(value);
    }
    if let Some(id) = reader.take() {
        let value = ctx
            .lookup_value(id)
            .ok_or(::spirv_autogen::runtime::CodecError::UnknownValueId { id })?;
        operands.push(value);
    }
    if !reader.is_at_end() {
        return Err(::spirv_autogen::runtime::CodecError::WordCountMismatch {
            op: "Add".into(),
            consumed: reader.offset(),
            total: reader.len(),
        });
    }
    attributes.extend_from_slice(ctx.decorations_for(value_id));
    let location = ctx.location();
    let produced = ctx
        .construct_operation(location, "Add", result_types, operands, attributes)
        .result();
    if let Some(result) = produced {
        ctx.register_value(value_id, result.value);
    }
    Ok(())
}

pub fn deserialize_load(
    ctx: &mut impl ::spirv_autogen::runtime::DeserializeContext,
    words: &[u32],
) -> Result<(), ::spirv_autogen::runtime::CodecError> {
    let mut reader = ::spirv_autogen::runtime::WordReader::new(words);
    let mut result_types: ::spirv_autogen::runtime::List<::spirv_autogen::runtime::Type> = ::spirv_autogen::runtime::List::new();
    let mut operands: ::spirv_autogen::runtime::List<::spirv_autogen::runtime::Value> = ::spirv_autogen::runtime::List::new();
    let mut attributes: Vec<::spirv_autogen::runtime::NamedAttribute> = Vec::new();
    let type_id = reader.take().ok_or_else(|| ::spirv_autogen::runtime::CodecError::ExpectedResultType {
        op: "Load".into(),
    })?;
    let ty = ctx.lookup_type(type_id).ok_or_else(|| ::spirv_autogen::runtime::CodecError::UnknownTypeId {
        op: "Load".into(),
        id: type_id,
    })?;
    result_types.push(ty);
    let value_id = reader.take().ok_or_else(|| ::spirv_autogen::runtime::CodecError::ExpectedResultId {
        op: "Load".into(),
    })?;
    if let Some(id) = reader.take() {
        let value = ctx
            .lookup_value(id)
            .ok_or(::spirv_autogen::runtime::CodecError::UnknownValueId { id })?;
        operands.push(value);
    }
    if let Some(word) = reader.take() {
        let value = ::spirv_autogen::runtime::Attribute::from_word(word);
        attributes.push(::spirv_autogen::runtime::NamedAttribute::new("access", value));
    }
    if !reader.is_at_end() {
        return Err(::spirv_autogen::runtime::CodecError::WordCountMismatch {
            op: "Load".into(),
            consumed: reader.offset(),
            total: reader.len(),
        });
    }
    attributes.extend_from_slice(ctx.decorations_for(value_id));
    let location = ctx.location();
    let produced = ctx
        .construct_operation(location, "Load", result_types, operands, attributes)
        .result();
    if let Some(result) = produced {
        ctx.register_value(value_id, result.value);
    }
    Ok(())
}

pub fn deserialize_call(
    ctx: &mut impl ::spirv_autogen::runtime::DeserializeContext,
    words: &[u32],
) -> Result<(), ::spirv_autogen::runtime::CodecError> {
    let mut reader = ::spirv_autogen::runtime::WordReader::new(words);
    let mut result_types: ::spirv_autogen::runtime::List<::spirv_autogen::runtime::Type> = ::spirv_autogen::runtime::List::new();
    let mut operands: ::spirv_autogen::runtime::List<::spirv_autogen::runtime::Value> = ::spirv_autogen::runtime::List::new();
    let mut attributes: Vec<::spirv_autogen::runtime::NamedAttribute> = Vec::new();
    let type_id = reader.take().ok_or_else(|| ::spirv_autogen::runtime::CodecError::ExpectedResultType {
        op: "Call".into(),
    })?;
    let ty = ctx.lookup_type(type_id).ok_or_else(|| ::spirv_autogen::runtime::CodecError::UnknownTypeId {
        op: "Call".into(),
        id: type_id,
    })?;
    result_types.push(ty);
    let value_id = reader.take().ok_or_else(|| ::spirv_autogen::runtime::CodecError::ExpectedResultId {
        op: "Call".into(),
    })?;
    if let Some(word) = reader.take() {
        let value = ::spirv_autogen::runtime::Attribute::from_word(word);
        attributes.push(::spirv_autogen::runtime::NamedAttribute::new("callee", value));
    }
    for &id in reader.take_rest() {
        let value = ctx
            .lookup_value(id)
            .ok_or(::spirv_autogen::runtime::CodecError::UnknownValueId { id })?;
        operands.push(value);
    }
    if !reader.is_at_end() {
        return Err(::spirv_autogen::runtime::CodecError::WordCountMismatch {
            op: "Call".into(),
            consumed: reader.offset(),
            total: reader.len(),
        });
    }
    attributes.extend_from_slice(ctx.decorations_for(value_id));
    let location = ctx.location();
    let produced = ctx
        .construct_operation(location, "Call", result_types, operands, attributes)
        .result();
    if let Some(result) = produced {
        ctx.register_value(value_id, result.value);
    }
    Ok(())
}

pub fn deserialize_store(
    ctx: &mut impl ::spirv_autogen::runtime::DeserializeContext,
    words: &[u32],
) -> Result<(), ::spirv_autogen::runtime::CodecError> {
    let mut reader = ::spirv_autogen::runtime::WordReader::new(words);
    let mut operands: ::spirv_autogen::runtime::List<::spirv_autogen::runtime::Value> = ::spirv_autogen::runtime::List::new();
    let mut attributes: Vec<::spirv_autogen::runtime::NamedAttribute> = Vec::new();
    if let Some(id) = reader.take() {
        let value = ctx
            .lookup_value(id)
            .ok_or(::spirv_autogen::runtime::CodecError::UnknownValueId { id })?;
        operands.push(value);
    }
    if let Some(id) = reader.take() {
        let value = ctx
            .lookup_value(id)
            .ok_or(::spirv_autogen::runtime::CodecError::UnknownValueId { id })?;
        operands.push(value);
    }
    if !reader.is_at_end() {
        let elements = reader
            .take_rest()
            .iter()
            .copied()
            .map(::spirv_autogen::runtime::Attribute::from_word)
            .collect();
        let value = ::spirv_autogen::runtime::Attribute::Array(elements);
        attributes.push(::spirv_autogen::runtime::NamedAttribute::new("offsets", value));
    }
    if !reader.is_at_end() {
        return Err(::spirv_autogen::runtime::CodecError::WordCountMismatch {
            op: "Store".into(),
            consumed: reader.offset(),
            total: reader.len(),
        });
    }
    let location = ctx.location();
    ctx.construct_operation(location, "Store", Default::default(), operands, attributes);
    Ok(())
}

pub fn dispatch_deserialization(
    ctx: &mut impl ::spirv_autogen::runtime::DeserializeContext,
    opcode: u32,
    words: &[u32],
) -> Result<(), ::spirv_autogen::runtime::CodecError> {
    match opcode {
        0 => deserialize_nop(ctx, words),
        12 => deserialize_add(ctx, words),
        61 => deserialize_load(ctx, words),
        57 => deserialize_call(ctx, words),
        62 => deserialize_store(ctx, words),
        _ => Err(::spirv_autogen::runtime::CodecError::UnhandledDeserialization { opcode }),
    }
}
// ==== END deserialization ====

// ==== BEGIN op_utils ====
// @generated by spirv-autogen: enum attribute utilities. Do not edit.

impl ::spirv_autogen::runtime::EnumAttr for spirv::MemoryAccess {
    const ATTRIBUTE_NAME: &'static str = "memory_access";

    fn symbolize_enum() -> ::spirv_autogen::runtime::SymbolizeFn<Self> {
        spirv::MemoryAccess::symbolize
    }
}

impl ::spirv_autogen::runtime::EnumAttr for Flags {
    const ATTRIBUTE_NAME: &'static str = "flags";

    fn symbolize_enum() -> ::spirv_autogen::runtime::SymbolizeFn<Self> {
        Flags::symbolize
    }
}
// ==== END op_utils ====

// ==== BEGIN bit_enum_decls ====
// @generated by spirv-autogen: bit enum declarations. Do not edit.

#[repr(transparent)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Flags(u8);

#[allow(non_upper_case_globals)]
impl Flags {
    pub const A: Self = Self(0x1);
    pub const B: Self = Self(0x2);

    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Wraps `bits` without checking them against the declared cases.
    #[must_use]
    pub const fn from_bits_unchecked(bits: u8) -> Self {
        Self(bits)
    }

    #[must_use]
    pub const fn bit_enum_contains(bits: Self, bit: Self) -> bool {
        bits.0 & bit.0 != 0
    }
}

impl ::core::ops::BitOr for Flags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

pub mod spirv {
    #[repr(transparent)]
    #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
    pub struct MemoryAccess(u32);

    #[allow(non_upper_case_globals)]
    impl MemoryAccess {
        pub const None: Self = Self(0x0);
        pub const Volatile: Self = Self(0x1);
        pub const Aligned: Self = Self(0x2);
        pub const Nontemporal: Self = Self(0x4);

        #[must_use]
        pub const fn bits(self) -> u32 {
            self.0
        }

        /// Wraps `bits` without checking them against the declared cases.
        #[must_use]
        pub const fn from_bits_unchecked(bits: u32) -> Self {
            Self(bits)
        }

        #[must_use]
        pub const fn bit_enum_contains(bits: Self, bit: Self) -> bool {
            bits.0 & bit.0 != 0
        }
    }

    impl ::core::ops::BitOr for MemoryAccess {
        type Output = Self;

        fn bitor(self, rhs: Self) -> Self {
            Self(self.0 | rhs.0)
        }
    }
}
// ==== END bit_enum_decls ====

// ==== BEGIN bit_enum_defs ====
// @generated by spirv-autogen: bit enum definitions. Do not edit.

impl spirv::MemoryAccess {
    #[must_use]
    pub fn stringify(self) -> String {
        let value = self.bits();
        if value == 0 {
            return "None".to_string();
        }
        let mut remaining = value;
        let mut symbols: Vec<&'static str> = Vec::new();
        if 0x1 & remaining == 0x1 {
            symbols.push("Volatile");
            remaining &= !0x1;
        }
        if 0x2 & remaining == 0x2 {
            symbols.push("Aligned");
            remaining &= !0x2;
        }
        if 0x4 & remaining == 0x4 {
            symbols.push("Nontemporal");
            remaining &= !0x4;
        }
        if remaining != 0 {
            return String::new();
        }
        symbols.join("|")
    }

    #[must_use]
    pub fn symbolize(text: &str) -> Option<Self> {
        if text == "None" {
            return Some(Self::from_bits_unchecked(0));
        }
        let mut bits: u32 = 0;
        for piece in text.split("|") {
            bits |= match piece {
                "Volatile" => 0x1,
                "Aligned" => 0x2,
                "Nontemporal" => 0x4,
                _ => return None,
            };
        }
        Some(Self::from_bits_unchecked(bits))
    }

    #[must_use]
    pub fn from_underlying(value: u32) -> Option<Self> {
        if value & !0x7 != 0 {
            return None;
        }
        Some(Self::from_bits_unchecked(value))
    }
}

impl Flags {
    #[must_use]
    pub fn stringify(self) -> String {
        let value = self.bits();
        if value == 0 {
            return "None".to_string();
        }
        let mut remaining = value;
        let mut symbols: Vec<&'static str> = Vec::new();
        if 0x1 & remaining == 0x1 {
            symbols.push("A");
            remaining &= !0x1;
        }
        if 0x2 & remaining == 0x2 {
            symbols.push("B");
            remaining &= !0x2;
        }
        if remaining != 0 {
            return String::new();
        }
        symbols.join(", ")
    }

    #[must_use]
    pub fn symbolize(text: &str) -> Option<Self> {
        if text == "None" {
            return Some(Self::from_bits_unchecked(0));
        }
        let mut bits: u8 = 0;
        for piece in text.split(", ") {
            bits |= match piece {
                "A" => 0x1,
                "B" => 0x2,
                _ => return None,
            };
        }
        Some(Self::from_bits_unchecked(bits))
    }

    #[must_use]
    pub fn from_underlying(value: u8) -> Option<Self> {
        if value & !0x3 != 0 {
            return None;
        }
        Some(Self::from_bits_unchecked(value))
    }
}
// ==== END bit_enum_defs ====
