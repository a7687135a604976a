use anyhow::{Context, Result};
use cyclegen_core::render;

pub enum InstructionSet {
    Mos6502,
}

impl InstructionSet {
    pub fn name(&self) -> &'static str {
        match self {
            InstructionSet::Mos6502 => "mos6502",
        }
    }
}

/// Build the cycle table for `set` and render it as the C
/// array-initializer literal, ready to splice into a source file.
pub fn generate(set: InstructionSet) -> Result<String> {
    let table = match set {
        InstructionSet::Mos6502 => cyclegen_mos6502::cycle_table(),
    }
    .with_context(|| format!("building {} cycle table", set.name()))?;
    Ok(render(&table))
}
