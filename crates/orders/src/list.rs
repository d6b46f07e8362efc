//! The session's accumulated list of committed order lines.

use serde::{Deserialize, Serialize};

use crate::line::OrderLine;

/// Ordered, session-scoped collection of committed lines.
///
/// Insertion order is display and export order. Lines have no identity
/// beyond their position: removal is by 0-based index, and removing index
/// `i` shifts every successor down by one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderList {
    lines: Vec<OrderLine>,
}

impl OrderList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line at the end. No deduplication.
    pub fn append(&mut self, line: OrderLine) {
        self.lines.push(line);
    }

    /// Remove the line at `index`, returning it.
    ///
    /// Out-of-range indices are a no-op returning `None`; the list is never
    /// corrupted by a bad index.
    pub fn remove_at(&mut self, index: usize) -> Option<OrderLine> {
        if index < self.lines.len() {
            Some(self.lines.remove(index))
        } else {
            None
        }
    }

    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl<'a> IntoIterator for &'a OrderList {
    type Item = &'a OrderLine;
    type IntoIter = core::slice::Iter<'a, OrderLine>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}
