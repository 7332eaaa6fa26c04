#![allow(dead_code)]

use expect_test::Expect;
use spirv_autogen::{
    config::{GenConfig, Process},
    runtime::DecorationTable,
    Output,
};

pub const CODEC_SCHEMA: &str = include_str!("../data/codec.schema");

pub fn check(source: &str, expected: Expect) {
    expected.assert_eq(&generate_to_string(source, GenConfig::default()));
}

pub fn generate(source: &str, config: GenConfig) -> Result<Output, String> {
    let process = Process::new(source, "main.schema", config);
    spirv_autogen::run(&process).map_err(|diagnostics| {
        let mut buf = Vec::<u8>::new();
        let mut writer = codespan_reporting::term::termcolor::NoColor::new(&mut buf);
        let config = codespan_reporting::term::Config::default();

        for diagnostic in diagnostics {
            codespan_reporting::term::emit(&mut writer, &config, process.files(), &diagnostic)
                .unwrap();
        }

        String::from_utf8(buf).unwrap()
    })
}

pub fn generate_to_string(source: &str, config: GenConfig) -> String {
    match generate(source, config) {
        Ok(output) => output.render_combined(),
        Err(diagnostics) => diagnostics,
    }
}

pub fn decorations() -> DecorationTable {
    DecorationTable::new([("relaxed_precision", 0), ("binding", 33), ("offsets", 90)])
}
