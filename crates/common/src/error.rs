//! Errors raised by the shared Starry containers.

use thiserror::Error;

/// Errors that occur while building a label table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LabelError {
    /// The label id is already bound to an instruction index.
    #[error("label {label} already defined at instruction {index}")]
    Duplicated { label: usize, index: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_duplicated() {
        assert_eq!(
            LabelError::Duplicated { label: 9, index: 1 }.to_string(),
            "label 9 already defined at instruction 1"
        );
    }
}
