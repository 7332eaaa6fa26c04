use crate::schema::{GenError, GenErrorKind};
use std::fmt;
use text_size::TextRange;

/// Every attribute kind that can be encoded as inline operand words.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum AttributeKind {
    ScalarInt32,
    EnumAsInt32,
    ArrayOfInt32,
}

impl AttributeKind {
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "scalar-int32" => Self::ScalarInt32,
            "enum-as-int32" => Self::EnumAsInt32,
            "array-of-int32" => Self::ArrayOfInt32,
            _ => return None,
        })
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ScalarInt32 => "scalar-int32",
            Self::EnumAsInt32 => "enum-as-int32",
            Self::ArrayOfInt32 => "array-of-int32",
        }
    }

    #[must_use]
    pub fn encode_strategy(self) -> EncodeStrategy {
        match self {
            Self::ScalarInt32 | Self::EnumAsInt32 => EncodeStrategy::Word,
            Self::ArrayOfInt32 => EncodeStrategy::EachElement,
        }
    }

    #[must_use]
    pub fn decode_strategy(self) -> DecodeStrategy {
        match self {
            Self::ScalarInt32 | Self::EnumAsInt32 => DecodeStrategy::Word,
            Self::ArrayOfInt32 => DecodeStrategy::Remaining,
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum EncodeStrategy {
    /// One word holding the integer value.
    Word,
    /// One word per array element, in element order.
    EachElement,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum DecodeStrategy {
    /// Exactly one word from the cursor.
    Word,
    /// Every word left in the region, one element each.
    Remaining,
}

impl fmt::Display for EncodeStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Word => "word",
            Self::EachElement => "each-element",
        })
    }
}

impl fmt::Display for DecodeStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Word => "word",
            Self::Remaining => "remaining",
        })
    }
}

/// Resolves a declared attribute kind.
///
/// Optional attributes are planned with their base kind; presence checks are
/// the emitters' business.
pub fn plan_attribute(
    op: &str,
    attribute: &str,
    kind: &str,
    range: TextRange,
) -> Result<AttributeKind, GenError> {
    AttributeKind::from_name(kind).ok_or_else(|| {
        GenError::new(
            range,
            GenErrorKind::UnsupportedAttributeKind {
                op: op.to_string(),
                attribute: attribute.to_string(),
                kind: kind.to_string(),
            },
        )
    })
}
