//! Program representation: the parser's output and the VM's input.

use crate::instruction::Instruction;
use crate::label::LabelTable;

/// A parsed Starry program.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    /// The instruction stream. Indices are the only jump destinations.
    pub instructions: Vec<Instruction>,
    /// Label id → index of its `Label` instruction.
    pub labels: LabelTable,
}

impl Program {
    /// Create a program from an instruction sequence and its labels.
    pub fn new(instructions: Vec<Instruction>, labels: LabelTable) -> Self {
        Self {
            instructions,
            labels,
        }
    }

    /// Build a program, deriving the label table from the `Label`
    /// instructions in the sequence.
    ///
    /// A repeated label id keeps its first position, matching what the
    /// parser registers.
    pub fn from_instructions(instructions: Vec<Instruction>) -> Self {
        let labels = instructions
            .iter()
            .enumerate()
            .filter_map(|(index, instr)| match instr {
                Instruction::Label(id) => Some((*id, index)),
                _ => None,
            })
            .collect();
        Self {
            instructions,
            labels,
        }
    }

    /// Number of instructions in the program.
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    /// Returns true if the program has no instructions.
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Instruction at `pc`, if within bounds.
    pub fn get(&self, pc: usize) -> Option<&Instruction> {
        self.instructions.get(pc)
    }
}
