use crate::{
    common::to_snake_case,
    emit::qualified_name,
    plan::{EnumPlan, Plan},
};
use std::fmt;

/// `EnumAttr` impls for every enum, bit enums included.
pub struct OpUtils<'a> {
    pub plan: &'a Plan,
    pub rt: &'a str,
}

impl fmt::Display for OpUtils<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rt = self.rt;
        for plan in &self.plan.enums {
            let desc = &plan.desc;
            let path = qualified_name(&desc.namespace_path, &desc.class_name);
            writeln!(f)?;
            writeln!(f, "impl {rt}::EnumAttr for {path} {{")?;
            writeln!(
                f,
                "    const ATTRIBUTE_NAME: &'static str = {:?};",
                to_snake_case(&desc.class_name)
            )?;
            writeln!(f)?;
            writeln!(f, "    fn symbolize_enum() -> {rt}::SymbolizeFn<Self> {{")?;
            writeln!(f, "        {path}::symbolize")?;
            writeln!(f, "    }}")?;
            writeln!(f, "}}")?;
        }
        Ok(())
    }
}

/// Bit-enum types, case constants and operators, nested in their namespaces.
pub struct BitEnumDecls<'a> {
    pub plan: &'a Plan,
}

#[derive(Default)]
struct Namespace<'a> {
    name: &'a str,
    enums: Vec<&'a EnumPlan>,
    children: Vec<Namespace<'a>>,
}

impl<'a> Namespace<'a> {
    fn insert(&mut self, path: &'a [String], plan: &'a EnumPlan) {
        match path.split_first() {
            None => self.enums.push(plan),
            Some((head, rest)) => {
                let index = match self.children.iter().position(|ns| ns.name == head.as_str()) {
                    Some(index) => index,
                    None => {
                        self.children.push(Namespace {
                            name: head.as_str(),
                            ..Namespace::default()
                        });
                        self.children.len() - 1
                    }
                };
                self.children[index].insert(rest, plan);
            }
        }
    }
}

impl fmt::Display for BitEnumDecls<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut root = Namespace::default();
        for plan in self.plan.bit_enums() {
            root.insert(&plan.desc.namespace_path, plan);
        }
        write_namespace(f, &root, 0)
    }
}

fn write_namespace(f: &mut fmt::Formatter<'_>, ns: &Namespace, depth: usize) -> fmt::Result {
    // No blank line right after a `pub mod` opener.
    let mut first = depth > 0;
    for plan in &ns.enums {
        if !std::mem::take(&mut first) {
            writeln!(f)?;
        }
        write_bit_enum_decl(f, plan, depth)?;
    }
    for child in &ns.children {
        let pad = "    ".repeat(depth);
        if !std::mem::take(&mut first) {
            writeln!(f)?;
        }
        writeln!(f, "{pad}pub mod {} {{", child.name)?;
        write_namespace(f, child, depth + 1)?;
        writeln!(f, "{pad}}}")?;
    }
    Ok(())
}

fn write_bit_enum_decl(f: &mut fmt::Formatter<'_>, plan: &EnumPlan, depth: usize) -> fmt::Result {
    let pad = "    ".repeat(depth);
    let name = &plan.desc.class_name;
    let ty = plan.underlying.as_str();
    let lines = [
        "#[repr(transparent)]".to_string(),
        "#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]".to_string(),
        format!("pub struct {name}({ty});"),
        String::new(),
        "#[allow(non_upper_case_globals)]".to_string(),
        format!("impl {name} {{"),
    ];
    for line in &lines {
        write_line(f, &pad, line)?;
    }
    for case in &plan.desc.cases {
        write_line(
            f,
            &pad,
            &format!("    pub const {}: Self = Self({:#x});", case.symbol, case.value),
        )?;
    }
    let lines = [
        String::new(),
        "    #[must_use]".to_string(),
        format!("    pub const fn bits(self) -> {ty} {{"),
        "        self.0".to_string(),
        "    }".to_string(),
        String::new(),
        "    /// Wraps `bits` without checking them against the declared cases.".to_string(),
        "    #[must_use]".to_string(),
        format!("    pub const fn from_bits_unchecked(bits: {ty}) -> Self {{"),
        "        Self(bits)".to_string(),
        "    }".to_string(),
        String::new(),
        "    #[must_use]".to_string(),
        "    pub const fn bit_enum_contains(bits: Self, bit: Self) -> bool {".to_string(),
        "        bits.0 & bit.0 != 0".to_string(),
        "    }".to_string(),
        "}".to_string(),
        String::new(),
        format!("impl ::core::ops::BitOr for {name} {{"),
        "    type Output = Self;".to_string(),
        String::new(),
        "    fn bitor(self, rhs: Self) -> Self {".to_string(),
        "        Self(self.0 | rhs.0)".to_string(),
        "    }".to_string(),
        "}".to_string(),
    ];
    for line in &lines {
        write_line(f, &pad, line)?;
    }
    Ok(())
}

fn write_line(f: &mut fmt::Formatter<'_>, pad: &str, line: &str) -> fmt::Result {
    if line.is_empty() {
        writeln!(f)
    } else {
        writeln!(f, "{pad}{line}")
    }
}

/// `stringify`, `symbolize` and `from_underlying` for every bit enum.
pub struct BitEnumDefs<'a> {
    pub plan: &'a Plan,
}

impl fmt::Display for BitEnumDefs<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for plan in self.plan.bit_enums() {
            writeln!(f)?;
            write_bit_enum_def(f, plan)?;
        }
        Ok(())
    }
}

fn write_bit_enum_def(f: &mut fmt::Formatter<'_>, plan: &EnumPlan) -> fmt::Result {
    let desc = &plan.desc;
    let ty = plan.underlying.as_str();
    let separator = &desc.separator;
    let has_cases = desc.nonzero_cases().next().is_some();

    writeln!(f, "impl {} {{", qualified_name(&desc.namespace_path, &desc.class_name))?;

    writeln!(f, "    #[must_use]")?;
    writeln!(f, "    pub fn stringify(self) -> String {{")?;
    writeln!(f, "        let value = self.bits();")?;
    writeln!(f, "        if value == 0 {{")?;
    writeln!(f, "            return \"None\".to_string();")?;
    writeln!(f, "        }}")?;
    if has_cases {
        writeln!(f, "        let mut remaining = value;")?;
        writeln!(f, "        let mut symbols: Vec<&'static str> = Vec::new();")?;
        for case in desc.nonzero_cases() {
            let bits = format!("{:#x}", case.value);
            writeln!(f, "        if {bits} & remaining == {bits} {{")?;
            writeln!(f, "            symbols.push({:?});", case.symbol)?;
            writeln!(f, "            remaining &= !{bits};")?;
            writeln!(f, "        }}")?;
        }
        writeln!(f, "        if remaining != 0 {{")?;
        writeln!(f, "            return String::new();")?;
        writeln!(f, "        }}")?;
        writeln!(f, "        symbols.join({separator:?})")?;
    } else {
        writeln!(f, "        String::new()")?;
    }
    writeln!(f, "    }}")?;

    writeln!(f)?;
    writeln!(f, "    #[must_use]")?;
    writeln!(f, "    pub fn symbolize(text: &str) -> Option<Self> {{")?;
    writeln!(f, "        if text == \"None\" {{")?;
    writeln!(f, "            return Some(Self::from_bits_unchecked(0));")?;
    writeln!(f, "        }}")?;
    if has_cases {
        writeln!(f, "        let mut bits: {ty} = 0;")?;
        writeln!(f, "        for piece in text.split({separator:?}) {{")?;
        writeln!(f, "            bits |= match piece {{")?;
        for case in desc.nonzero_cases() {
            writeln!(f, "                {:?} => {:#x},", case.symbol, case.value)?;
        }
        writeln!(f, "                _ => return None,")?;
        writeln!(f, "            }};")?;
        writeln!(f, "        }}")?;
        writeln!(f, "        Some(Self::from_bits_unchecked(bits))")?;
    } else {
        writeln!(f, "        None")?;
    }
    writeln!(f, "    }}")?;

    writeln!(f)?;
    writeln!(f, "    #[must_use]")?;
    writeln!(f, "    pub fn from_underlying(value: {ty}) -> Option<Self> {{")?;
    writeln!(f, "        if value & !{:#x} != 0 {{", desc.valid_bits())?;
    writeln!(f, "            return None;")?;
    writeln!(f, "        }}")?;
    writeln!(f, "        Some(Self::from_bits_unchecked(value))")?;
    writeln!(f, "    }}")?;

    writeln!(f, "}}")
}
