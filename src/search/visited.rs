use std::collections::HashSet;

use crate::search::node::PageId;

/// Identities already expanded during the current run.
///
/// Grows monotonically; a fresh set is created for every run.
#[derive(Debug, Default)]
pub struct VisitedSet {
    identities: HashSet<PageId>,
}

impl VisitedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an identity; returns `false` if it was already present
    pub fn insert(&mut self, identity: PageId) -> bool {
        self.identities.insert(identity)
    }

    pub fn contains(&self, identity: &str) -> bool {
        self.identities.contains(&PageId::new(identity))
    }

    pub fn len(&self) -> usize {
        self.identities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.identities.is_empty()
    }
}
