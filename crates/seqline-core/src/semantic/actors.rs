//! Ordered registry of the actors taking part in a sequence.
//!
//! Actors are created on first reference and never removed. Their order is
//! the left-to-right order of the lanes in the rendered diagram.

use indexmap::IndexSet;
use log::trace;

use crate::identifier::Id;

/// Insertion-ordered set of actor identifiers.
#[derive(Debug, Clone, Default)]
pub struct ActorRegistry {
    actors: IndexSet<Id>,
}

impl ActorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `id` at the end if it is not known yet.
    ///
    /// Empty identifiers are ignored.
    pub fn ensure(&mut self, id: Id) {
        if id.is_empty() {
            return;
        }
        if self.actors.insert(id) {
            trace!(actor:% = id; "Registered actor");
        }
    }

    /// Places the named actors, in the given order, in front of every other
    /// actor.
    ///
    /// Empty identifiers are skipped and repeated identifiers keep their
    /// first position. Actors that were known before but are not named keep
    /// their relative order behind the named ones.
    ///
    /// ```
    /// # use seqline_core::{identifier::Id, semantic::ActorRegistry};
    /// let mut registry = ActorRegistry::new();
    /// registry.set_order(["A", "B", "C"].map(Id::new));
    /// registry.set_order(["C", "A"].map(Id::new));
    ///
    /// let order: Vec<String> = registry.iter().map(|id| id.to_string()).collect();
    /// assert_eq!(order, ["C", "A", "B"]);
    /// ```
    pub fn set_order(&mut self, ids: impl IntoIterator<Item = Id>) {
        let mut ordered: IndexSet<Id> = ids.into_iter().filter(|id| !id.is_empty()).collect();
        for id in &self.actors {
            ordered.insert(*id);
        }
        self.actors = ordered;
    }

    pub fn contains(&self, id: Id) -> bool {
        self.actors.contains(&id)
    }

    /// Lane index of `id`, counted from the left.
    pub fn position(&self, id: Id) -> Option<usize> {
        self.actors.get_index_of(&id)
    }

    pub fn len(&self) -> usize {
        self.actors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Id> + '_ {
        self.actors.iter().copied()
    }
}
