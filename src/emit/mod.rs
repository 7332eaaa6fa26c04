mod deserialize;
mod enums;
mod opcodes;
mod serialize;

pub use deserialize::Deserializers;
pub use enums::{BitEnumDecls, BitEnumDefs, OpUtils};
pub use opcodes::OpcodeTable;
pub use serialize::Serializers;

use crate::{
    common::config::{GenConfig, Sections},
    plan::Plan,
};
use std::{fmt, io, path::Path};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Section {
    OpcodeTable,
    Serialization,
    Deserialization,
    OpUtils,
    BitEnumDecls,
    BitEnumDefs,
}

impl Section {
    pub const ALL: [Self; 6] = [
        Self::OpcodeTable,
        Self::Serialization,
        Self::Deserialization,
        Self::OpUtils,
        Self::BitEnumDecls,
        Self::BitEnumDefs,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        use Section::*;
        match self {
            OpcodeTable => "opcode_table",
            Serialization => "serialization",
            Deserialization => "deserialization",
            OpUtils => "op_utils",
            BitEnumDecls => "bit_enum_decls",
            BitEnumDefs => "bit_enum_defs",
        }
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        use Section::*;
        match self {
            OpcodeTable => "opcode table",
            Serialization => "operation serializers",
            Deserialization => "operation deserializers",
            OpUtils => "enum attribute utilities",
            BitEnumDecls => "bit enum declarations",
            BitEnumDefs => "bit enum definitions",
        }
    }

    #[must_use]
    pub fn flag(self) -> Sections {
        use Section::*;
        match self {
            OpcodeTable => Sections::OPCODE_TABLE,
            Serialization => Sections::SERIALIZATION,
            Deserialization => Sections::DESERIALIZATION,
            OpUtils => Sections::OP_UTILS,
            BitEnumDecls => Sections::BIT_ENUM_DECLS,
            BitEnumDefs => Sections::BIT_ENUM_DEFS,
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rendered sections, in [`Section::ALL`] order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Output {
    sections: Vec<(Section, String)>,
}

impl Output {
    #[must_use]
    pub fn get(&self, section: Section) -> Option<&str> {
        self.sections
            .iter()
            .find(|(s, _)| *s == section)
            .map(|(_, text)| text.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (Section, &str)> + '_ {
        self.sections.iter().map(|(s, text)| (*s, text.as_str()))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Every section between `BEGIN`/`END` marker lines, for printing to a
    /// single stream.
    #[must_use]
    pub fn render_combined(&self) -> String {
        let mut buf = String::new();
        for (i, (section, text)) in self.sections.iter().enumerate() {
            if i > 0 {
                buf.push('\n');
            }
            buf.push_str(&format!("// ==== BEGIN {section} ====\n"));
            buf.push_str(text);
            buf.push_str(&format!("// ==== END {section} ====\n"));
        }
        buf
    }

    /// Writes each section to `<dir>/<section>.rs`.
    pub fn write_to_dir(&self, dir: &Path) -> io::Result<()> {
        std::fs::create_dir_all(dir)?;
        for (section, text) in &self.sections {
            std::fs::write(dir.join(format!("{section}.rs")), text)?;
        }
        Ok(())
    }
}

/// Renders the sections selected in `config`.
#[must_use]
pub fn emit(plan: &Plan, config: &GenConfig) -> Output {
    let rt = config.runtime_path.as_str();
    let mut out = Output::default();
    for section in Section::ALL {
        if !config.sections.contains(section.flag()) {
            continue;
        }
        let body = match section {
            Section::OpcodeTable => OpcodeTable { plan, rt }.to_string(),
            Section::Serialization => Serializers { plan, rt }.to_string(),
            Section::Deserialization => Deserializers { plan, rt }.to_string(),
            Section::OpUtils => OpUtils { plan, rt }.to_string(),
            Section::BitEnumDecls => BitEnumDecls { plan }.to_string(),
            Section::BitEnumDefs => BitEnumDefs { plan }.to_string(),
        };
        let text = format!(
            "// @generated by spirv-autogen: {}. Do not edit.\n{body}",
            section.description()
        );
        out.sections.push((section, text));
    }
    out
}

/// `spirv::MemoryAccess` for a class in namespace `spirv`.
pub(crate) fn qualified_name(namespace_path: &[String], class_name: &str) -> String {
    let mut path = namespace_path.join("::");
    if !path.is_empty() {
        path.push_str("::");
    }
    path.push_str(class_name);
    path
}
