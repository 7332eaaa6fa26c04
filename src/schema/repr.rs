use crate::common::Opcode;
use text_size::TextRange;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
    pub operations: Vec<OperationDescriptor>,
    pub enums: Vec<EnumDescriptor>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationDescriptor {
    pub name: String,
    pub opcode: Option<Opcode>,
    pub autogen_serialization: bool,
    pub result_arity: u32,
    pub arguments: Vec<Argument>,
    pub range: TextRange,
}

impl OperationDescriptor {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            opcode: None,
            autogen_serialization: true,
            result_arity: 0,
            arguments: Vec::new(),
            range: TextRange::default(),
        }
    }

    #[must_use]
    pub fn with_opcode(mut self, opcode: Opcode) -> Self {
        self.opcode = Some(opcode);
        self
    }

    #[must_use]
    pub fn with_results(mut self, arity: u32) -> Self {
        self.result_arity = arity;
        self
    }

    #[must_use]
    pub fn manual(mut self) -> Self {
        self.autogen_serialization = false;
        self
    }

    #[must_use]
    pub fn operand(mut self, name: impl Into<String>) -> Self {
        self.arguments.push(Argument::operand(name, false));
        self
    }

    #[must_use]
    pub fn variadic_operand(mut self, name: impl Into<String>) -> Self {
        self.arguments.push(Argument::operand(name, true));
        self
    }

    #[must_use]
    pub fn attribute(mut self, name: impl Into<String>, kind: impl Into<String>) -> Self {
        self.arguments.push(Argument::attribute(name, kind, false));
        self
    }

    #[must_use]
    pub fn optional_attribute(mut self, name: impl Into<String>, kind: impl Into<String>) -> Self {
        self.arguments.push(Argument::attribute(name, kind, true));
        self
    }

    #[must_use]
    pub fn has_opcode(&self) -> bool {
        self.opcode.is_some()
    }

    /// Operations that get generated (de)serializers.
    #[must_use]
    pub fn is_eligible(&self) -> bool {
        self.has_opcode() && self.autogen_serialization
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argument {
    pub name: String,
    pub kind: ArgumentKind,
    pub range: TextRange,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgumentKind {
    Operand {
        variadic: bool,
    },
    /// `kind` is the name the schema declared; the planner decides whether it
    /// is supported.
    Attribute {
        kind: String,
        optional: bool,
    },
}

impl Argument {
    #[must_use]
    pub fn operand(name: impl Into<String>, variadic: bool) -> Self {
        Self {
            name: name.into(),
            kind: ArgumentKind::Operand { variadic },
            range: TextRange::default(),
        }
    }

    #[must_use]
    pub fn attribute(name: impl Into<String>, kind: impl Into<String>, optional: bool) -> Self {
        Self {
            name: name.into(),
            kind: ArgumentKind::Attribute {
                kind: kind.into(),
                optional,
            },
            range: TextRange::default(),
        }
    }

    #[must_use]
    pub fn is_variadic(&self) -> bool {
        matches!(self.kind, ArgumentKind::Operand { variadic: true })
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum UnderlyingType {
    U8,
    U16,
    U32,
    U64,
}

impl UnderlyingType {
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "u8" => Self::U8,
            "u16" => Self::U16,
            "u32" => Self::U32,
            "u64" => Self::U64,
            _ => return None,
        })
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::U64 => "u64",
        }
    }

    #[must_use]
    pub fn max_value(self) -> u64 {
        match self {
            Self::U8 => u8::MAX.into(),
            Self::U16 => u16::MAX.into(),
            Self::U32 => u32::MAX.into(),
            Self::U64 => u64::MAX,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumDescriptor {
    pub class_name: String,
    /// As written in the schema; resolved with [`UnderlyingType::from_name`].
    pub underlying_type: String,
    pub namespace_path: Vec<String>,
    pub is_bit_enum: bool,
    pub cases: Vec<EnumCase>,
    pub separator: String,
    pub range: TextRange,
}

impl EnumDescriptor {
    #[must_use]
    pub fn value_enum(class_name: impl Into<String>, underlying_type: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            underlying_type: underlying_type.into(),
            namespace_path: Vec::new(),
            is_bit_enum: false,
            cases: Vec::new(),
            separator: String::new(),
            range: TextRange::default(),
        }
    }

    #[must_use]
    pub fn bit_enum(class_name: impl Into<String>, underlying_type: impl Into<String>) -> Self {
        Self {
            is_bit_enum: true,
            separator: "|".to_string(),
            ..Self::value_enum(class_name, underlying_type)
        }
    }

    #[must_use]
    pub fn in_namespace<I, S>(mut self, path: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.namespace_path = path.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    #[must_use]
    pub fn case(mut self, symbol: impl Into<String>, value: u64) -> Self {
        self.cases.push(EnumCase {
            symbol: symbol.into(),
            value,
            range: TextRange::default(),
        });
        self
    }

    /// Union of every nonzero case value.
    #[must_use]
    pub fn valid_bits(&self) -> u64 {
        self.cases.iter().fold(0, |acc, case| acc | case.value)
    }

    pub fn nonzero_cases(&self) -> impl Iterator<Item = &EnumCase> + '_ {
        self.cases.iter().filter(|case| case.value != 0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumCase {
    pub symbol: String,
    pub value: u64,
    pub range: TextRange,
}
