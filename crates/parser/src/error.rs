//! Error types for the Starry parser.

use thiserror::Error;

/// Errors produced while translating source text to instructions.
///
/// The parser never stops at the first error, so these are collected into
/// a list covering the whole source.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A `+` marker with no spaces in front of it.
    #[error("line {line} - zero space on '+'")]
    ZeroSpaceStackOp { line: usize },

    /// A `` ` `` marker whose space count is already a registered label.
    #[error("line {line} - duplicated label")]
    DuplicatedLabel { line: usize, label: usize },
}

impl ParseError {
    /// Source line the error was found on. The first line is 0.
    pub fn line(&self) -> usize {
        match self {
            ParseError::ZeroSpaceStackOp { line } | ParseError::DuplicatedLabel { line, .. } => {
                *line
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_zero_space() {
        let e = ParseError::ZeroSpaceStackOp { line: 3 };
        assert_eq!(e.to_string(), "line 3 - zero space on '+'");
    }

    #[test]
    fn error_display_duplicated_label() {
        let e = ParseError::DuplicatedLabel { line: 5, label: 2 };
        assert_eq!(e.to_string(), "line 5 - duplicated label");
    }

    #[test]
    fn line_accessor() {
        assert_eq!(ParseError::ZeroSpaceStackOp { line: 7 }.line(), 7);
        assert_eq!(ParseError::DuplicatedLabel { line: 2, label: 0 }.line(), 2);
    }
}
