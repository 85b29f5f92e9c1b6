//! Instruction listing: one decoded instruction per line, indexed.

use starry_common::Program;
use std::fmt::Write;

/// Render `program` as `[NNN] <instruction>` lines.
pub(crate) fn listing(program: &Program) -> String {
    let mut out = String::new();
    for (index, instr) in program.instructions.iter().enumerate() {
        let _ = writeln!(out, "[{index:03}] {instr}");
    }
    out
}
