//! Main execution loop and instruction dispatch for the Starry VM.

use crate::error::RuntimeError;
use crate::machine::VM;
use starry_common::Instruction;
use std::fmt;
use std::io::{BufRead, Write};
use tracing::{debug, trace};

impl<'a, R: BufRead, W: Write> VM<'a, R, W> {
    /// Execute the program until the program counter runs off the end.
    pub fn run(&mut self) -> Result<(), RuntimeError> {
        self.run_loop(false)
    }

    /// Like [`VM::run`], writing `[Debug] Stack=[a b] PC=n` to the trace
    /// sink after every step.
    pub fn run_with_trace(&mut self) -> Result<(), RuntimeError> {
        self.run_loop(true)
    }

    fn run_loop(&mut self, traced: bool) -> Result<(), RuntimeError> {
        let result = self.drive(traced);
        // Flush even after a fault so output written before it is kept.
        let flushed = self.flush();
        match result.and(flushed) {
            Ok(()) => {
                debug!(instructions = self.program.len(), "run finished");
                Ok(())
            }
            Err(e) => {
                debug!(pc = e.pc(), error = %e, "run aborted");
                Err(e)
            }
        }
    }

    fn drive(&mut self, traced: bool) -> Result<(), RuntimeError> {
        while let Some(&instr) = self.program.get(self.pc) {
            self.step(instr)?;
            if traced {
                // Trace write failures are ignored.
                let _ = writeln!(
                    self.trace,
                    "[Debug] Stack={} PC={}",
                    StackSnapshot(&self.stack),
                    self.pc
                );
            }
        }
        Ok(())
    }

    /// Execute `instr`, the instruction at the program counter, and advance.
    pub(crate) fn step(&mut self, instr: Instruction) -> Result<(), RuntimeError> {
        trace!(pc = self.pc, %instr, "step");

        match instr {
            Instruction::Nop | Instruction::Label(_) => {}
            Instruction::Push(v) => self.push(v),
            Instruction::Pop => {
                self.pop()?;
            }
            Instruction::Dup => self.exec_dup()?,
            Instruction::Swap => self.exec_swap()?,
            Instruction::Rotate => self.exec_rotate()?,
            Instruction::Add => self.exec_binary_arith(i64::wrapping_add)?,
            Instruction::Sub => self.exec_binary_arith(i64::wrapping_sub)?,
            Instruction::Mul => self.exec_binary_arith(i64::wrapping_mul)?,
            Instruction::Div => self.exec_checked_div(i64::wrapping_div)?,
            Instruction::Mod => self.exec_checked_div(i64::wrapping_rem)?,
            Instruction::JumpNz(label) => {
                // Sets the program counter itself.
                return self.exec_jumpnz(label);
            }
            Instruction::OutputNumber => {
                let top = self.pop()?;
                self.emit(format_args!("{top}"))?;
            }
            Instruction::OutputChar => {
                let top = self.pop()?;
                let c = u32::try_from(top)
                    .ok()
                    .and_then(char::from_u32)
                    .unwrap_or(char::REPLACEMENT_CHARACTER);
                self.emit(format_args!("{c}"))?;
            }
            Instruction::InputNumber => {
                self.flush()?;
                let value = self.input.read_number();
                self.push(value);
            }
            Instruction::InputChar => {
                self.flush()?;
                let value = self.input.read_char();
                self.push(value);
            }
        }

        self.pc += 1;
        Ok(())
    }

    // ---- Stack manipulation ----

    fn exec_dup(&mut self) -> Result<(), RuntimeError> {
        let top = self.pop()?;
        self.push(top);
        self.push(top);
        Ok(())
    }

    fn exec_swap(&mut self) -> Result<(), RuntimeError> {
        let (x, y) = self.pop_pair()?;
        self.push(x);
        self.push(y);
        Ok(())
    }

    fn exec_rotate(&mut self) -> Result<(), RuntimeError> {
        let (x, y) = self.pop_pair()?;
        let z = self.pop()?;
        self.push(x);
        self.push(z);
        self.push(y);
        Ok(())
    }

    // ---- Arithmetic ----

    /// Pop x (top) and y, push `op(y, x)`.
    fn exec_binary_arith(&mut self, op: fn(i64, i64) -> i64) -> Result<(), RuntimeError> {
        let (x, y) = self.pop_pair()?;
        self.push(op(y, x));
        Ok(())
    }

    /// Like `exec_binary_arith`, faulting on a zero divisor. Both operands
    /// stay popped when it does.
    fn exec_checked_div(&mut self, op: fn(i64, i64) -> i64) -> Result<(), RuntimeError> {
        let (x, y) = self.pop_pair()?;
        if x == 0 {
            return Err(RuntimeError::DivisionByZero { at: self.pc });
        }
        self.push(op(y, x));
        Ok(())
    }

    // ---- Control ----

    fn exec_jumpnz(&mut self, label: usize) -> Result<(), RuntimeError> {
        let target = self
            .program
            .labels
            .resolve(label)
            .ok_or(RuntimeError::UnresolvedJumpTarget { at: self.pc, label })?;
        if self.pop()? != 0 {
            self.pc = target;
        } else {
            self.pc += 1;
        }
        Ok(())
    }
}

/// Stack rendered bottom first as `[a b c]`.
struct StackSnapshot<'s>(&'s [i64]);

impl fmt::Display for StackSnapshot<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, v) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{v}")?;
        }
        f.write_str("]")
    }
}
