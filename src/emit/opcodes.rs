use crate::plan::Plan;
use std::fmt;

/// One marker type and `OpDef` impl per operation with an opcode.
pub struct OpcodeTable<'a> {
    pub plan: &'a Plan,
    pub rt: &'a str,
}

impl fmt::Display for OpcodeTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rt = self.rt;
        for entry in &self.plan.opcodes {
            let name = &entry.name;
            writeln!(f)?;
            writeln!(f, "pub enum {name} {{}}")?;
            writeln!(f)?;
            writeln!(f, "impl {rt}::OpDef for {name} {{")?;
            writeln!(f, "    const NAME: &'static str = {name:?};")?;
            writeln!(f, "    const OPCODE: u32 = {};", entry.opcode)?;
            writeln!(f, "}}")?;
        }
        Ok(())
    }
}
