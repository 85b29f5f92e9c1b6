//! Starry parser — source text to instruction translation.
//!
//! Source is scanned one character at a time. Runs of spaces become the
//! operand of the next marker character (`+ * . , ` '`); everything else
//! except newlines is ignored.
//!
//! # Usage
//!
//! ```
//! use starry_parser::{listing, parse_program};
//!
//! let program = parse_program("      +  *").unwrap();
//! assert_eq!(listing(&program), "[000] push 1\n[001] *\n");
//! ```
//!
//! # Errors
//!
//! Parsing does not stop at the first problem. [`parse`] always runs over
//! the whole source and returns every [`ParseError`] next to whatever was
//! built; a program with errors must not be executed.

pub mod error;

mod lexer;
mod listing;
mod parser;

pub use error::ParseError;

use lexer::tokenize;
use parser::Parser;
use starry_common::Program;
use tracing::debug;

/// Everything a parse pass produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parsed {
    /// Instructions and labels built from the valid markers.
    pub program: Program,
    /// Every error found, in source order.
    pub errors: Vec<ParseError>,
}

impl Parsed {
    /// Returns true if the source had no errors.
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// The program if there were no errors, otherwise all the errors.
    pub fn into_result(self) -> Result<Program, Vec<ParseError>> {
        if self.errors.is_empty() {
            Ok(self.program)
        } else {
            Err(self.errors)
        }
    }
}

/// Parse source text into a program, collecting every error.
pub fn parse(source: &str) -> Parsed {
    let mut parser = Parser::new();
    for token in tokenize(source) {
        parser.feed(&token);
    }
    let (program, errors) = parser.finish();

    debug!(
        instructions = program.len(),
        labels = program.labels.len(),
        errors = errors.len(),
        "parsed source"
    );

    Parsed { program, errors }
}

/// Parse source text, gating on errors.
pub fn parse_program(source: &str) -> Result<Program, Vec<ParseError>> {
    parse(source).into_result()
}

/// Render a program as an indexed instruction listing.
pub fn listing(program: &Program) -> String {
    listing::listing(program)
}

#[cfg(test)]
mod tests {
    use super::*;
    use starry_common::Instruction;

    #[test]
    fn parse_empty_source() {
        let parsed = parse("");
        assert!(parsed.is_ok());
        assert!(parsed.program.is_empty());
    }

    #[test]
    fn parse_minimal() {
        let program = parse_program("       +      +*.").unwrap();
        assert_eq!(
            program.instructions,
            vec![
                Instruction::Push(2),
                Instruction::Push(1),
                Instruction::Add,
                Instruction::OutputNumber,
            ]
        );
    }

    #[test]
    fn errors_are_accumulated() {
        let parsed = parse("+\n`\n`\n+");
        assert_eq!(
            parsed.errors,
            vec![
                ParseError::ZeroSpaceStackOp { line: 0 },
                ParseError::DuplicatedLabel { line: 2, label: 0 },
                ParseError::ZeroSpaceStackOp { line: 3 },
            ]
        );
        assert_eq!(parsed.program.instructions, vec![Instruction::Label(0)]);
    }

    #[test]
    fn error_resets_space_count() {
        // The rejected label consumes its two spaces; the dup sees only one.
        let parsed = parse("  `  ` +");
        assert_eq!(parsed.errors.len(), 1);
        assert_eq!(
            parsed.program.instructions,
            vec![Instruction::Label(2), Instruction::Dup]
        );
    }

    #[test]
    fn into_result_gates_on_errors() {
        assert!(parse("+").into_result().is_err());
        assert!(parse(" +").into_result().is_ok());
    }

    #[test]
    fn listing_of_parsed_source() {
        let program = parse_program(" ` '").unwrap();
        assert_eq!(listing(&program), "[000] label 1\n[001] jumpnz 1\n");
    }
}
