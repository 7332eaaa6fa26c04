use crate::common::{List, Opcode, Word};
use std::fmt;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Type(pub u32);

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Value(pub u32);

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum Location {
    #[default]
    Unknown,
    /// Word offset of the instruction in a module stream.
    Word(usize),
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown => f.write_str("<unknown>"),
            Self::Word(offset) => write!(f, "word {offset}"),
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum Attribute {
    Unit,
    Int(i32),
    Array(Vec<Attribute>),
}

#[allow(clippy::cast_sign_loss, clippy::cast_possible_wrap)]
impl Attribute {
    #[must_use]
    pub fn int_array<I: IntoIterator<Item = i32>>(values: I) -> Self {
        Self::Array(values.into_iter().map(Self::Int).collect())
    }

    #[must_use]
    pub fn from_word(word: Word) -> Self {
        Self::Int(word as i32)
    }

    #[must_use]
    pub fn as_word(&self) -> Option<Word> {
        match self {
            Self::Int(value) => Some(*value as Word),
            Self::Unit | Self::Array(_) => None,
        }
    }

    /// Every element as a word; `None` if this is not an array of integers.
    #[must_use]
    pub fn as_words(&self) -> Option<List<Word>> {
        match self {
            Self::Array(elems) => elems.iter().map(Self::as_word).collect(),
            Self::Unit | Self::Int(_) => None,
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct NamedAttribute {
    pub name: String,
    pub value: Attribute,
}

impl NamedAttribute {
    #[must_use]
    pub fn new(name: impl Into<String>, value: Attribute) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct OpResult {
    pub ty: Type,
    pub value: Value,
}

/// A generic operation instance. Attributes are kept sorted by name so two
/// operations with the same attribute set compare equal.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Operation {
    name: String,
    location: Location,
    result: Option<OpResult>,
    operands: List<Value>,
    attributes: Vec<NamedAttribute>,
}

impl Operation {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            location: Location::Unknown,
            result: None,
            operands: List::new(),
            attributes: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_location(mut self, location: Location) -> Self {
        self.location = location;
        self
    }

    #[must_use]
    pub fn with_result(mut self, ty: Type, value: Value) -> Self {
        self.result = Some(OpResult { ty, value });
        self
    }

    #[must_use]
    pub fn with_operands<I: IntoIterator<Item = Value>>(mut self, operands: I) -> Self {
        self.operands.extend(operands);
        self
    }

    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: Attribute) -> Self {
        self.set_attribute(NamedAttribute::new(name, value));
        self
    }

    pub fn set_attribute(&mut self, attr: NamedAttribute) {
        match self
            .attributes
            .binary_search_by(|probe| probe.name.as_str().cmp(&attr.name))
        {
            Ok(index) => self.attributes[index] = attr,
            Err(index) => self.attributes.insert(index, attr),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn isa<T: OpDef>(&self) -> bool {
        self.name == T::NAME
    }

    #[must_use]
    pub fn location(&self) -> Location {
        self.location
    }

    #[must_use]
    pub fn result(&self) -> Option<OpResult> {
        self.result
    }

    #[must_use]
    pub fn operands(&self) -> &[Value] {
        &self.operands
    }

    /// The operand group starting at argument position `index`: one value for
    /// a singular operand, the rest of the list for a trailing variadic one.
    #[must_use]
    pub fn operand_group(&self, index: usize, variadic: bool) -> &[Value] {
        let start = index.min(self.operands.len());
        if variadic {
            &self.operands[start..]
        } else {
            let end = (index + 1).min(self.operands.len());
            &self.operands[start..end]
        }
    }

    #[must_use]
    pub fn attributes(&self) -> &[NamedAttribute] {
        &self.attributes
    }

    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes
            .binary_search_by(|probe| probe.name.as_str().cmp(name))
            .ok()
            .map(|index| &self.attributes[index].value)
    }
}

/// Static identity of a concrete operation type. Generated opcode tables
/// implement this once per operation.
pub trait OpDef {
    const NAME: &'static str;
    const OPCODE: Opcode;
}

#[must_use]
pub fn opcode_of<T: OpDef>() -> Opcode {
    T::OPCODE
}

pub type SymbolizeFn<E> = fn(&str) -> Option<E>;

/// Attribute metadata of an enum used as an operation attribute.
pub trait EnumAttr: Sized {
    const ATTRIBUTE_NAME: &'static str;

    fn symbolize_enum() -> SymbolizeFn<Self>;
}
