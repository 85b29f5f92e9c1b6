//! Parser for Starry tokens → instructions and labels.
//!
//! Each marker resolves to an instruction from its space count. Errors are
//! recorded and parsing carries on, so one pass reports every defect.

use crate::error::ParseError;
use crate::lexer::{Marker, Token};
use starry_common::{Instruction, LabelTable, Program};

/// Resolve a `+` by its space count. Zero spaces has no instruction.
pub(crate) fn stack_op(spaces: usize) -> Option<Instruction> {
    match spaces {
        0 => None,
        1 => Some(Instruction::Dup),
        2 => Some(Instruction::Swap),
        3 => Some(Instruction::Rotate),
        4 => Some(Instruction::Pop),
        n => Some(Instruction::Push((n - 5) as i64)),
    }
}

/// Resolve a `*` by its space count modulo 5.
pub(crate) fn arithmetic_op(spaces: usize) -> Instruction {
    match spaces % 5 {
        0 => Instruction::Add,
        1 => Instruction::Sub,
        2 => Instruction::Mul,
        3 => Instruction::Div,
        _ => Instruction::Mod,
    }
}

/// Resolve a `.` by its space count modulo 2.
pub(crate) fn output_op(spaces: usize) -> Instruction {
    if spaces % 2 == 0 {
        Instruction::OutputNumber
    } else {
        Instruction::OutputChar
    }
}

/// Resolve a `,` by its space count modulo 2.
pub(crate) fn input_op(spaces: usize) -> Instruction {
    if spaces % 2 == 0 {
        Instruction::InputNumber
    } else {
        Instruction::InputChar
    }
}

/// Accumulates instructions, labels and errors over a token stream.
#[derive(Debug, Default)]
pub(crate) struct Parser {
    instructions: Vec<Instruction>,
    labels: LabelTable,
    errors: Vec<ParseError>,
}

impl Parser {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Consume one token.
    pub(crate) fn feed(&mut self, token: &Token) {
        let spaces = token.spaces;
        match token.marker {
            Marker::Stack => match stack_op(spaces) {
                Some(instr) => self.instructions.push(instr),
                None => self
                    .errors
                    .push(ParseError::ZeroSpaceStackOp { line: token.line }),
            },
            Marker::Arithmetic => self.instructions.push(arithmetic_op(spaces)),
            Marker::Output => self.instructions.push(output_op(spaces)),
            Marker::Input => self.instructions.push(input_op(spaces)),
            Marker::Label => {
                // The label points at its own slot; execution falls through it.
                let index = self.instructions.len();
                match self.labels.define(spaces, index) {
                    Ok(()) => self.instructions.push(Instruction::Label(spaces)),
                    Err(_) => self.errors.push(ParseError::DuplicatedLabel {
                        line: token.line,
                        label: spaces,
                    }),
                }
            }
            Marker::Jump => self.instructions.push(Instruction::JumpNz(spaces)),
        }
    }

    /// Finish parsing, returning the program and every error found.
    pub(crate) fn finish(self) -> (Program, Vec<ParseError>) {
        (Program::new(self.instructions, self.labels), self.errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed_all(tokens: &[Token]) -> (Program, Vec<ParseError>) {
        let mut parser = Parser::new();
        for token in tokens {
            parser.feed(token);
        }
        parser.finish()
    }

    fn token(marker: Marker, spaces: usize) -> Token {
        Token {
            marker,
            spaces,
            line: 0,
        }
    }

    #[test]
    fn stack_op_table() {
        assert_eq!(stack_op(0), None);
        assert_eq!(stack_op(1), Some(Instruction::Dup));
        assert_eq!(stack_op(2), Some(Instruction::Swap));
        assert_eq!(stack_op(3), Some(Instruction::Rotate));
        assert_eq!(stack_op(4), Some(Instruction::Pop));
        assert_eq!(stack_op(5), Some(Instruction::Push(0)));
        assert_eq!(stack_op(77), Some(Instruction::Push(72)));
    }

    #[test]
    fn arithmetic_op_table() {
        assert_eq!(arithmetic_op(0), Instruction::Add);
        assert_eq!(arithmetic_op(1), Instruction::Sub);
        assert_eq!(arithmetic_op(2), Instruction::Mul);
        assert_eq!(arithmetic_op(3), Instruction::Div);
        assert_eq!(arithmetic_op(4), Instruction::Mod);
        assert_eq!(arithmetic_op(10), Instruction::Add);
    }

    #[test]
    fn io_op_tables() {
        assert_eq!(output_op(0), Instruction::OutputNumber);
        assert_eq!(output_op(1), Instruction::OutputChar);
        assert_eq!(input_op(2), Instruction::InputNumber);
        assert_eq!(input_op(3), Instruction::InputChar);
    }

    #[test]
    fn zero_space_stack_op_appends_nothing() {
        let (program, errors) = feed_all(&[token(Marker::Stack, 0)]);
        assert!(program.is_empty());
        assert_eq!(errors, vec![ParseError::ZeroSpaceStackOp { line: 0 }]);
    }

    #[test]
    fn label_registers_own_index() {
        let (program, errors) = feed_all(&[
            token(Marker::Stack, 9),
            token(Marker::Label, 9),
            token(Marker::Jump, 9),
        ]);
        assert!(errors.is_empty());
        assert_eq!(program.labels.resolve(9), Some(1));
        assert_eq!(program.instructions[1], Instruction::Label(9));
        assert_eq!(program.instructions[2], Instruction::JumpNz(9));
    }

    #[test]
    fn duplicate_label_keeps_first() {
        let (program, errors) = feed_all(&[
            token(Marker::Label, 2),
            token(Marker::Stack, 1),
            token(Marker::Label, 2),
        ]);
        assert_eq!(
            errors,
            vec![ParseError::DuplicatedLabel { line: 0, label: 2 }]
        );
        assert_eq!(program.labels.resolve(2), Some(0));
        assert_eq!(program.len(), 2);
    }
}
