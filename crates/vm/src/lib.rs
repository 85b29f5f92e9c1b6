//! Starry virtual machine — executes parsed instruction streams.
//!
//! The VM is a stack machine over `i64` values with:
//! - An unbounded operand stack
//! - A program counter into a read-only [`Program`]
//! - Injected input, output and trace streams
//!
//! A run ends successfully when the program counter reaches the end of the
//! instruction sequence. The first fault ends it with an error.
//!
//! # Usage
//!
//! ```
//! use starry_common::{Instruction, Program};
//!
//! let program = Program::from_instructions(vec![
//!     Instruction::Push(40),
//!     Instruction::Push(2),
//!     Instruction::Add,
//!     Instruction::OutputNumber,
//! ]);
//!
//! let mut out = Vec::new();
//! let result = starry_vm::run(&program, std::io::empty(), &mut out);
//! assert_eq!(starry_vm::exit_code(&result), 0);
//! assert_eq!(out, b"42");
//! ```

pub mod error;
pub mod execute;
pub mod machine;

mod input;

pub use error::RuntimeError;
pub use machine::VM;

use starry_common::Program;
use std::io::{BufRead, Write};

/// Execute a program against the given streams.
///
/// # Errors
///
/// Returns [`RuntimeError`] on the first fault (stack underflow, division
/// by zero, unresolved jump target, failed output).
pub fn run<R: BufRead, W: Write>(
    program: &Program,
    input: R,
    output: W,
) -> Result<(), RuntimeError> {
    let mut vm = VM::with_io(program, input, output);
    vm.run()
}

/// Process exit code for a run: 0 on success, 1 on any fault.
pub fn exit_code(result: &Result<(), RuntimeError>) -> i32 {
    match result {
        Ok(()) => 0,
        Err(_) => 1,
    }
}
