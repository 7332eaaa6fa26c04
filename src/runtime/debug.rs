use crate::common::{Opcode, Word, WordReader};
use std::fmt::Write;

/// Renders a module stream one instruction per line. `names` maps opcodes to
/// mnemonics; unknown opcodes print as `op<N>`.
pub fn disassemble<'a>(words: &[Word], names: impl Fn(Opcode) -> Option<&'a str>) -> String {
    let mut buf = String::new();
    let mut code = WordReader::new(words);

    while !code.is_at_end() {
        let offset = code.offset();
        let (opcode, args) = if let Some(instruction) = code.take_instruction() {
            instruction
        } else {
            let rest = code.take_rest();
            let _ = writeln!(buf, "{offset:>04} | <malformed> {rest:?}");
            break;
        };
        let _ = match names(opcode) {
            Some(name) => write!(buf, "{offset:>04} | {name:<9}"),
            None => write!(buf, "{offset:>04} | {:<9}", format!("op{opcode}")),
        };
        let _ = writeln!(buf, " {args:?}");
    }

    buf
}
