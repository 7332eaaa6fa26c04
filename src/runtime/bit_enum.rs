use crate::schema::EnumDescriptor;

/// Bit-enum string conversions evaluated straight from a descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitEnumCodec {
    cases: Vec<(String, u64)>,
    separator: String,
    valid_bits: u64,
}

impl BitEnumCodec {
    #[must_use]
    pub fn new(desc: &EnumDescriptor) -> Self {
        Self {
            cases: desc
                .nonzero_cases()
                .map(|case| (case.symbol.clone(), case.value))
                .collect(),
            separator: desc.separator.clone(),
            valid_bits: desc.valid_bits(),
        }
    }

    /// `"None"` for zero; `""` if bits outside the declared cases remain.
    #[must_use]
    pub fn stringify(&self, value: u64) -> String {
        if value == 0 {
            return "None".to_string();
        }
        let mut remaining = value;
        let mut symbols = Vec::new();
        for (symbol, bits) in &self.cases {
            if bits & remaining == *bits {
                symbols.push(symbol.as_str());
                remaining &= !bits;
            }
        }
        if remaining != 0 {
            return String::new();
        }
        symbols.join(self.separator.as_str())
    }

    #[must_use]
    pub fn symbolize(&self, text: &str) -> Option<u64> {
        if text == "None" {
            return Some(0);
        }
        text.split(self.separator.as_str())
            .map(|piece| {
                self.cases
                    .iter()
                    .find(|(symbol, _)| symbol == piece)
                    .map(|&(_, bits)| bits)
            })
            .try_fold(0, |acc, bits| Some(acc | bits?))
    }

    #[must_use]
    pub fn from_underlying(&self, value: u64) -> Option<u64> {
        (value & !self.valid_bits == 0).then_some(value)
    }

    #[must_use]
    pub fn or(a: u64, b: u64) -> u64 {
        a | b
    }

    #[must_use]
    pub fn contains(bits: u64, bit: u64) -> bool {
        bits & bit != 0
    }
}
