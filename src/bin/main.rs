use clap::{Parser, ValueEnum};
use codespan_reporting::term::{
    self,
    termcolor::{ColorChoice, StandardStream},
};
use spirv_autogen::config::{self, GenConfig, Sections, DEFAULT_RUNTIME_PATH};
use std::path::PathBuf;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Gen {
    /// Opcode table, serializers and deserializers.
    Serialization,
    OpUtils,
    EnumDecls,
    EnumDefs,
    All,
}

impl Gen {
    fn sections(self) -> Sections {
        match self {
            Self::Serialization => Sections::SERIALIZATION_FNS,
            Self::OpUtils => Sections::OP_UTILS,
            Self::EnumDecls => Sections::BIT_ENUM_DECLS,
            Self::EnumDefs => Sections::BIT_ENUM_DEFS,
            Self::All => Sections::all(),
        }
    }
}

#[derive(Parser)]
#[clap(about = "Generates SPIR-V codecs and enum utilities from a schema")]
struct Cli {
    #[clap(value_parser)]
    schema: PathBuf,
    #[clap(long = "gen", value_enum, default_value = "all")]
    gen: Vec<Gen>,
    /// Write one `<section>.rs` per section instead of printing to stdout.
    #[clap(long, value_parser)]
    out_dir: Option<PathBuf>,
    #[clap(long, default_value = DEFAULT_RUNTIME_PATH)]
    runtime_path: String,
    #[clap(long)]
    dump_plans: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Cli = Parser::parse();
    let source = std::fs::read_to_string(&args.schema)?;
    let file_name = args.schema.display().to_string();
    let gen_config = GenConfig {
        sections: args
            .gen
            .iter()
            .fold(Sections::empty(), |acc, gen| acc | gen.sections()),
        runtime_path: args.runtime_path,
        dump_plans: args.dump_plans,
    };
    let process = config::Process::new(&source, &file_name, gen_config);

    match spirv_autogen::run(&process) {
        Ok(output) => {
            if let Some(dir) = &args.out_dir {
                output.write_to_dir(dir)?;
            } else {
                print!("{}", output.render_combined());
            }
            Ok(())
        }
        Err(diagnostics) => {
            let writer = StandardStream::stderr(ColorChoice::Auto);
            let term_config = term::Config::default();
            for diagnostic in &diagnostics {
                term::emit(&mut writer.lock(), &term_config, process.files(), diagnostic)?;
            }
            std::process::exit(1);
        }
    }
}
