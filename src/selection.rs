//! Out-of-band cell selection owned by the input side.
//!
//! The engine never stores selection on cells. Input code toggles cells
//! here and the human strategy reads the result. The contract is that at
//! most one cell is selected when a move is requested; [`Selection::single`]
//! reports a broken contract instead of guessing.

use std::collections::BTreeSet;

use crate::board::CellId;
use crate::error::{ReversiError, Result};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    cells: BTreeSet<CellId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the selection state of `id`. Returns whether it is now selected.
    pub fn toggle(&mut self, id: CellId) -> bool {
        if self.cells.remove(&id) {
            false
        } else {
            self.cells.insert(id);
            true
        }
    }

    /// Make `id` the only selected cell.
    pub fn select_only(&mut self, id: CellId) {
        self.cells.clear();
        self.cells.insert(id);
    }

    pub fn clear(&mut self) {
        self.cells.clear();
    }

    pub fn is_selected(&self, id: CellId) -> bool {
        self.cells.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The selected cell, if exactly one is selected.
    ///
    /// # Errors
    /// `InvalidState` if more than one cell is selected.
    pub fn single(&self) -> Result<Option<CellId>> {
        match self.cells.len() {
            0 => Ok(None),
            1 => Ok(self.cells.first().copied()),
            n => Err(ReversiError::invalid_state(format!(
                "{n} cells are selected, expected at most one"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle() {
        let mut selection = Selection::new();
        assert!(selection.toggle(3));
        assert!(selection.is_selected(3));
        assert!(!selection.toggle(3));
        assert!(selection.is_empty());
    }

    #[test]
    fn test_single() {
        let mut selection = Selection::new();
        assert_eq!(selection.single().unwrap(), None);
        selection.toggle(5);
        assert_eq!(selection.single().unwrap(), Some(5));
        selection.toggle(7);
        assert!(matches!(
            selection.single(),
            Err(ReversiError::InvalidState { .. })
        ));
        selection.select_only(7);
        assert_eq!(selection.single().unwrap(), Some(7));
        assert_eq!(selection.len(), 1);
    }
}
