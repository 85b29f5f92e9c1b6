//! Starry common types.
//!
//! This crate provides the data structures shared by the parser and the VM:
//!
//! - [`Instruction`] — the closed set of 17 Starry instructions
//! - [`LabelTable`] — label id to instruction index mapping
//! - [`Program`] — an instruction sequence plus its label table
//! - [`LabelError`] — rejected label redefinition
//!
//! # Dependencies
//!
//! This crate uses `thiserror` (compile-time proc-macro, zero runtime cost)
//! and has no other dependencies.

pub mod error;
pub mod instruction;
pub mod label;
pub mod program;

// Re-export commonly used types at the crate root.
pub use error::LabelError;
pub use instruction::Instruction;
pub use label::LabelTable;
pub use program::Program;

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Decoded text of a push always carries its payload verbatim.
        #[test]
        fn push_decodes_with_value(v in any::<i64>()) {
            prop_assert_eq!(Instruction::Push(v).to_string(), format!("push {v}"));
        }

        /// The first registration of a label id always wins.
        #[test]
        fn first_label_definition_wins(
            id in 0usize..64,
            first in 0usize..1000,
            second in 0usize..1000,
        ) {
            let mut labels = LabelTable::new();
            labels.define(id, first).unwrap();
            let err = labels.define(id, second).unwrap_err();
            prop_assert_eq!(err, LabelError::Duplicated { label: id, index: first });
            prop_assert_eq!(labels.resolve(id), Some(first));
        }
    }
}
