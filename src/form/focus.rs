//! Focus ring for the transaction form
//!
//! Focus order is date, description, then account and amount of every pair.
//! The ring is rebuilt from the pair ids whenever a pair is added.

use super::entry::EntryId;

/// Identifies one focusable field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldId {
    #[default]
    Date,
    Description,
    Account(EntryId),
    Amount(EntryId),
}

/// Ordered list of focusable fields with the current position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusRing {
    fields: Vec<FieldId>,
    position: usize,
}

impl FocusRing {
    /// Build a ring for the given pairs, focused on the date
    pub fn new(entries: impl IntoIterator<Item = EntryId>) -> Self {
        let mut ring = Self {
            fields: Vec::new(),
            position: 0,
        };
        ring.rebuild(entries);
        ring
    }

    /// Rebuild the ring for a new set of pairs, keeping the focused field
    pub fn rebuild(&mut self, entries: impl IntoIterator<Item = EntryId>) {
        let current = self.current();
        self.fields = vec![FieldId::Date, FieldId::Description];
        for id in entries {
            self.fields.push(FieldId::Account(id));
            self.fields.push(FieldId::Amount(id));
        }
        self.position = self.index_of(current).unwrap_or(0);
    }

    /// Currently focused field
    pub fn current(&self) -> FieldId {
        self.fields.get(self.position).copied().unwrap_or_default()
    }

    /// Position of the focused field in the ring
    pub fn position(&self) -> usize {
        self.position
    }

    /// Number of fields in the ring
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Advance focus, wrapping to the start
    pub fn next(&mut self) {
        if !self.fields.is_empty() {
            self.position = (self.position + 1) % self.fields.len();
        }
    }

    /// Retreat focus, wrapping to the end
    pub fn prev(&mut self) {
        if !self.fields.is_empty() {
            self.position = (self.position + self.fields.len() - 1) % self.fields.len();
        }
    }

    /// Focus a specific field; returns false if it is not in the ring
    pub fn focus(&mut self, field: FieldId) -> bool {
        match self.index_of(field) {
            Some(i) => {
                self.position = i;
                true
            }
            None => false,
        }
    }

    fn index_of(&self, field: FieldId) -> Option<usize> {
        self.fields.iter().position(|f| *f == field)
    }
}
