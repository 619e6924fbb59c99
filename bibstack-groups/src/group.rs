use crate::GroupHierarchy;
use bibstack_model::Entry;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Base data every group carries: display name and tree relation.
///
/// Equality and hashing are structural over both attributes; matcher
/// configurations embed this value so their own derived equality
/// includes it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GroupCore {
    name: String,
    hierarchy: GroupHierarchy,
}

impl GroupCore {
    /// Creates the base data for a group.
    #[must_use]
    pub fn new(name: impl Into<String>, hierarchy: GroupHierarchy) -> Self {
        Self {
            name: name.into(),
            hierarchy,
        }
    }

    /// Display name of the group.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Relation to parent and children in a group tree.
    #[must_use]
    pub fn hierarchy(&self) -> GroupHierarchy {
        self.hierarchy
    }
}

/// A named classifier deciding whether an entry belongs to it.
///
/// Implementations are immutable value objects; `contains` performs only
/// local computation, so one group instance can evaluate many entries
/// concurrently.
pub trait Group: fmt::Debug + Send + Sync {
    /// Display name of the group.
    fn name(&self) -> &str;

    /// Relation of this group to its parent and children.
    fn hierarchy(&self) -> GroupHierarchy;

    /// True when membership is recomputed per entry rather than stored
    /// as a fixed assignment.
    fn is_dynamic(&self) -> bool;

    /// Decides whether `entry` belongs to this group.
    fn contains(&self, entry: &Entry) -> bool;

    /// Returns an independent copy, safe to place in a different group
    /// tree.
    fn deep_copy(&self) -> Box<dyn Group>;
}
