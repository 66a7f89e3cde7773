//! Authoritative / pending settings pairs for live editing.
//!
//! The presentation layer writes only into the pending copy. `commit` is the
//! single place where pending values flow into the authoritative copy.

/// Structural comparison and assignment used by [`Editable::commit`].
pub trait LiveEdit: PartialEq {
    /// Copies every edit-tracked field of `other` into `self`.
    fn assign(&mut self, other: &Self);

    /// Clamps values that would otherwise reach the evaluators out of range
    /// and replaces non-finite ones.
    fn validate(&mut self) {}
}

#[derive(Debug, Clone)]
pub struct Editable<T> {
    authoritative: T,
    pending: T,
}

impl<T: LiveEdit + Clone> Editable<T> {
    /// Pending starts as an exact copy, so nothing is dirty yet.
    pub fn new(value: T) -> Self {
        Self {
            pending: value.clone(),
            authoritative: value,
        }
    }
}

impl<T: LiveEdit> Editable<T> {
    pub fn with_pending(authoritative: T, pending: T) -> Self {
        Self {
            authoritative,
            pending,
        }
    }

    pub fn authoritative(&self) -> &T {
        &self.authoritative
    }

    pub fn pending(&self) -> &T {
        &self.pending
    }

    pub fn pending_mut(&mut self) -> &mut T {
        &mut self.pending
    }

    pub(crate) fn authoritative_mut(&mut self) -> &mut T {
        &mut self.authoritative
    }

    pub fn is_dirty(&self) -> bool {
        self.pending != self.authoritative
    }

    /// Validates the pending copy and, if it differs from the authoritative
    /// one, copies it over. Returns whether a copy happened.
    pub fn commit(&mut self) -> bool {
        self.pending.validate();
        if !self.is_dirty() {
            return false;
        }
        self.authoritative.assign(&self.pending);
        true
    }

    /// Throws away pending edits.
    pub fn revert(&mut self) {
        self.pending.assign(&self.authoritative);
    }
}
