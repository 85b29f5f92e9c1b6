//! VM state management: stack, program counter, I/O handles.

use crate::error::RuntimeError;
use crate::input::Input;
use starry_common::Program;
use std::io::{self, BufRead, Stdout, StdinLock, Write};

/// The Starry virtual machine.
///
/// One instance serves exactly one run. Input, output and the trace sink
/// are owned by the VM for its lifetime; pass `&mut` handles to keep
/// access to them afterwards.
pub struct VM<'a, R, W> {
    /// The program being executed.
    pub(crate) program: &'a Program,
    /// Operand stack. Last element is the top.
    pub(crate) stack: Vec<i64>,
    /// Program counter (instruction index).
    pub(crate) pc: usize,
    pub(crate) input: Input<R>,
    pub(crate) output: W,
    /// Receives one line per step in trace mode.
    pub(crate) trace: Box<dyn Write + 'a>,
}

impl<'a> VM<'a, StdinLock<'static>, Stdout> {
    /// Create a VM wired to the process's standard streams.
    pub fn new(program: &'a Program) -> Self {
        Self::with_io(program, io::stdin().lock(), io::stdout())
    }
}

impl<'a, R: BufRead, W: Write> VM<'a, R, W> {
    /// Create a VM reading from `input` and writing to `output`.
    ///
    /// Trace lines go to stderr.
    pub fn with_io(program: &'a Program, input: R, output: W) -> Self {
        Self::with_trace(program, input, output, io::stderr())
    }

    /// Create a VM with an explicit trace sink for [`VM::run_with_trace`].
    pub fn with_trace(
        program: &'a Program,
        input: R,
        output: W,
        trace: impl Write + 'a,
    ) -> Self {
        Self {
            program,
            stack: Vec::new(),
            pc: 0,
            input: Input::new(input),
            output,
            trace: Box::new(trace),
        }
    }

    /// Current stack contents, bottom first.
    pub fn stack(&self) -> &[i64] {
        &self.stack
    }

    /// Current program counter.
    pub fn pc(&self) -> usize {
        self.pc
    }

    /// Push a value onto the stack.
    pub(crate) fn push(&mut self, value: i64) {
        self.stack.push(value);
    }

    /// Pop a value from the stack.
    pub(crate) fn pop(&mut self) -> Result<i64, RuntimeError> {
        self.stack
            .pop()
            .ok_or(RuntimeError::StackUnderflow { at: self.pc })
    }

    /// Pop the top two values as `(x, y)`: x was the top, y the one below.
    pub(crate) fn pop_pair(&mut self) -> Result<(i64, i64), RuntimeError> {
        let x = self.pop()?;
        let y = self.pop()?;
        Ok((x, y))
    }

    /// Write to the output sink, mapping failures to a fault.
    pub(crate) fn emit(&mut self, args: std::fmt::Arguments<'_>) -> Result<(), RuntimeError> {
        self.output
            .write_fmt(args)
            .map_err(|e| RuntimeError::OutputFailed {
                at: self.pc,
                message: e.to_string(),
            })
    }

    /// Flush pending output. Called before blocking on input and when a
    /// run ends.
    pub(crate) fn flush(&mut self) -> Result<(), RuntimeError> {
        self.output.flush().map_err(|e| RuntimeError::OutputFailed {
            at: self.pc,
            message: e.to_string(),
        })
    }
}
