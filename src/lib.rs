#![deny(unsafe_code)]
#![warn(clippy::pedantic)]
#![allow(
    clippy::module_name_repetitions,
    clippy::match_same_arms,
    clippy::enum_glob_use,
    clippy::too_many_lines
)]

mod common;
pub mod emit;
pub mod parse;
pub mod plan;
pub mod runtime;
pub mod schema;

pub use common::config::Diagnostic;
pub use common::{config, to_snake_case};
pub use emit::{emit, Output, Section};
pub use parse::parse;
pub use plan::plan;

use common::config::{GenConfig, GenDiagnostic, Process};
use schema::{GenError, Schema};

/// Plans and renders a schema. Nothing is rendered if any descriptor is
/// rejected.
pub fn generate(schema: &Schema, config: &GenConfig) -> Result<Output, Vec<GenError>> {
    let plan = plan(schema)?;
    if config.dump_plans {
        println!("=== PLANS ===");
        print!("{plan}");
        println!("=============\n");
    }
    Ok(emit(&plan, config))
}

pub fn run(process: &Process) -> Result<Output, Vec<Diagnostic>> {
    // Parsing (source -> descriptors)
    let schema = parse(process.source).map_err(|errors| {
        errors
            .iter()
            .map(|err| err.to_diagnostic(process))
            .collect::<Vec<_>>()
    })?;

    // Planning and rendering (descriptors -> sections)
    generate(&schema, &process.config).map_err(|errors| {
        errors
            .iter()
            .map(|err| err.to_diagnostic(process))
            .collect()
    })
}
