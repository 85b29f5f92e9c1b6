//! Runtime faults for the Starry VM.
//!
//! Every fault is terminal and carries the program counter (`at`) of the
//! instruction that raised it.

use thiserror::Error;

/// Errors that abort a run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// Pop on an empty stack.
    #[error("pc={at} insufficient stack size")]
    StackUnderflow { at: usize },

    /// Divide or modulo with a zero divisor.
    #[error("pc={at} division by zero")]
    DivisionByZero { at: usize },

    /// Jump to a label id that was never defined.
    #[error("pc={at} jump target is not found")]
    UnresolvedJumpTarget { at: usize, label: usize },

    /// The output sink refused a write.
    #[error("pc={at} output failed: {message}")]
    OutputFailed { at: usize, message: String },
}

impl RuntimeError {
    /// Program counter at the moment of the fault.
    pub fn pc(&self) -> usize {
        match self {
            RuntimeError::StackUnderflow { at }
            | RuntimeError::DivisionByZero { at }
            | RuntimeError::UnresolvedJumpTarget { at, .. }
            | RuntimeError::OutputFailed { at, .. } => *at,
        }
    }
}
