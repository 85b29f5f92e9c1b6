//! The Starry instruction set.
//!
//! Every instruction is produced by the parser from a single marker
//! character and the run of spaces in front of it. The VM only ever reads
//! them.

use std::fmt;

/// A single Starry instruction.
///
/// At most one integer payload per variant. `Label` and `JumpNz` carry a
/// label id, which is the space count that preceded the marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Instruction {
    /// Do nothing.
    Nop,
    /// Push a constant.
    Push(i64),
    /// Discard the top value.
    Pop,
    /// Duplicate the top value.
    Dup,
    /// Exchange the top two values.
    Swap,
    /// `[z, y, x]` (bottom to top) becomes `[x, z, y]`.
    Rotate,
    /// Pop x, pop y, push `y + x`.
    Add,
    /// Pop x, pop y, push `y - x`.
    Sub,
    /// Pop x, pop y, push `y * x`.
    Mul,
    /// Pop x, pop y, push `y / x` truncated toward zero.
    Div,
    /// Pop x, pop y, push `y % x`. Sign follows y.
    Mod,
    /// Jump destination. No-op when executed.
    Label(usize),
    /// Pop the top; jump to the label if it is nonzero.
    JumpNz(usize),
    /// Pop the top and write it in decimal.
    OutputNumber,
    /// Pop the top and write the character with that code point.
    OutputChar,
    /// Read a decimal integer and push it.
    InputNumber,
    /// Read one character and push its code point.
    InputChar,
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::Nop => f.write_str("nop"),
            Instruction::Push(v) => write!(f, "push {v}"),
            Instruction::Pop => f.write_str("pop"),
            Instruction::Dup => f.write_str("dup"),
            Instruction::Swap => f.write_str("swap"),
            Instruction::Rotate => f.write_str("rotate"),
            Instruction::Add => f.write_str("+"),
            Instruction::Sub => f.write_str("-"),
            Instruction::Mul => f.write_str("*"),
            Instruction::Div => f.write_str("/"),
            Instruction::Mod => f.write_str("%"),
            Instruction::Label(id) => write!(f, "label {id}"),
            Instruction::JumpNz(id) => write!(f, "jumpnz {id}"),
            Instruction::OutputNumber => f.write_str("output number"),
            Instruction::OutputChar => f.write_str("output character"),
            Instruction::InputNumber => f.write_str("input number"),
            Instruction::InputChar => f.write_str("input character"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_payload_free_instructions() {
        let cases = [
            (Instruction::Nop, "nop"),
            (Instruction::Pop, "pop"),
            (Instruction::Dup, "dup"),
            (Instruction::Swap, "swap"),
            (Instruction::Rotate, "rotate"),
            (Instruction::Add, "+"),
            (Instruction::Sub, "-"),
            (Instruction::Mul, "*"),
            (Instruction::Div, "/"),
            (Instruction::Mod, "%"),
            (Instruction::OutputNumber, "output number"),
            (Instruction::OutputChar, "output character"),
            (Instruction::InputNumber, "input number"),
            (Instruction::InputChar, "input character"),
        ];
        for (instr, text) in cases {
            assert_eq!(instr.to_string(), text, "decode mismatch for {instr:?}");
        }
    }

    #[test]
    fn decode_push() {
        assert_eq!(Instruction::Push(3).to_string(), "push 3");
        assert_eq!(Instruction::Push(0).to_string(), "push 0");
    }

    #[test]
    fn decode_label_and_jump() {
        assert_eq!(Instruction::Label(9).to_string(), "label 9");
        assert_eq!(Instruction::JumpNz(0).to_string(), "jumpnz 0");
    }
}
