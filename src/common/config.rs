use codespan_reporting::diagnostic::Severity;
use codespan_reporting::files::SimpleFiles;

pub type Files<'a> = SimpleFiles<&'a str, &'a str>;
pub type FileId = usize;
pub type Diagnostic = codespan_reporting::diagnostic::Diagnostic<FileId>;

pub const DEFAULT_RUNTIME_PATH: &str = "::spirv_autogen::runtime";

pub trait GenDiagnostic {
    fn severity(&self) -> Severity {
        Severity::Error
    }

    fn to_diagnostic(&self, process: &Process) -> Diagnostic;
}

pub struct Process<'a> {
    pub source: &'a str,
    pub config: GenConfig,
    files: Files<'a>,
    file_id: FileId,
}

impl<'a> Process<'a> {
    #[must_use]
    pub fn new(source: &'a str, file_name: &'a str, config: GenConfig) -> Self {
        let mut files = Files::new();
        let file_id = files.add(file_name, source);
        Self {
            source,
            config,
            files,
            file_id,
        }
    }

    #[must_use]
    pub fn files(&self) -> &Files<'a> {
        &self.files
    }

    #[must_use]
    pub fn file_id(&self) -> FileId {
        self.file_id
    }
}

bitflags::bitflags! {
    pub struct Sections: u8 {
        const OPCODE_TABLE = 1 << 0;
        const SERIALIZATION = 1 << 1;
        const DESERIALIZATION = 1 << 2;
        const OP_UTILS = 1 << 3;
        const BIT_ENUM_DECLS = 1 << 4;
        const BIT_ENUM_DEFS = 1 << 5;

        const SERIALIZATION_FNS = Self::OPCODE_TABLE.bits
            | Self::SERIALIZATION.bits
            | Self::DESERIALIZATION.bits;
    }
}

#[derive(Debug, Clone)]
pub struct GenConfig {
    pub sections: Sections,
    /// Path the generated code uses to name the runtime support module.
    pub runtime_path: String,
    pub dump_plans: bool,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            sections: Sections::all(),
            runtime_path: DEFAULT_RUNTIME_PATH.to_string(),
            dump_plans: false,
        }
    }
}
