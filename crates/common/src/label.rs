//! Label table: label id → index of the defining `Label` instruction.

use std::collections::BTreeMap;

use crate::error::LabelError;

/// Mapping from label ids to instruction indices.
///
/// Ids come from space run lengths, so they are sparse. Once an id is
/// defined it can never be rebound.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelTable {
    entries: BTreeMap<usize, usize>,
}

impl LabelTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `label` to `index`.
    ///
    /// Fails without modifying the table if `label` is already bound.
    pub fn define(&mut self, label: usize, index: usize) -> Result<(), LabelError> {
        if let Some(&existing) = self.entries.get(&label) {
            return Err(LabelError::Duplicated {
                label,
                index: existing,
            });
        }
        self.entries.insert(label, index);
        Ok(())
    }

    /// Instruction index of `label`, if defined.
    pub fn resolve(&self, label: usize) -> Option<usize> {
        self.entries.get(&label).copied()
    }

    /// Returns true if `label` is defined.
    pub fn contains(&self, label: usize) -> bool {
        self.entries.contains_key(&label)
    }

    /// Number of defined labels.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no label is defined.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

}

impl FromIterator<(usize, usize)> for LabelTable {
    /// Collect pairs into a table. Later duplicates are dropped.
    fn from_iter<I: IntoIterator<Item = (usize, usize)>>(iter: I) -> Self {
        let mut table = LabelTable::new();
        for (label, index) in iter {
            let _ = table.define(label, index);
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_table() {
        let labels = LabelTable::new();
        assert!(labels.is_empty());
        assert_eq!(labels.resolve(0), None);
    }

    #[test]
    fn define_and_resolve() {
        let mut labels = LabelTable::new();
        labels.define(9, 1).unwrap();
        labels.define(0, 4).unwrap();
        assert_eq!(labels.resolve(9), Some(1));
        assert_eq!(labels.resolve(0), Some(4));
        assert!(labels.contains(9));
        assert!(!labels.contains(1));
        assert_eq!(labels.len(), 2);
    }

    #[test]
    fn redefinition_is_rejected() {
        let mut labels = LabelTable::new();
        labels.define(3, 0).unwrap();
        assert_eq!(
            labels.define(3, 7),
            Err(LabelError::Duplicated { label: 3, index: 0 })
        );
        assert_eq!(labels.resolve(3), Some(0));
    }

    #[test]
    fn collect_keeps_first_duplicate() {
        let labels: LabelTable = [(2, 0), (2, 9)].into_iter().collect();
        assert_eq!(labels.resolve(2), Some(0));
    }
}
