use serde::{Deserialize, Serialize};

/// Relation of a group to its parent and children in a group tree.
///
/// Opaque to matching: strategies carry it through unchanged, and tree
/// consumers interpret it when combining memberships.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupHierarchy {
    /// Membership stands on its own.
    #[default]
    Independent,
    /// Narrows the parent group: an entry counts only if the parent
    /// matches too.
    Refining,
    /// Widens to the subgroups: an entry counts if any child matches.
    Including,
}
