use crate::{Group, GroupCore, GroupHierarchy};
use bibstack_types::Field;
use serde::{Deserialize, Serialize};

/// Shared configuration for groups that match a field's content against
/// a stored search expression.
///
/// Equality and hashing are structural over the whole configuration:
/// base data, target field, expression, and case flag. Two groups with
/// the same expression but different target fields are distinct, so
/// trees and deduplication can compare any keyword-style groups without
/// knowing the concrete strategy.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeywordGroupConfig {
    core: GroupCore,
    search_field: Field,
    search_expression: String,
    case_sensitive: bool,
}

impl KeywordGroupConfig {
    /// Creates a matching configuration. All values are stored as given.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        hierarchy: GroupHierarchy,
        search_field: Field,
        search_expression: impl Into<String>,
        case_sensitive: bool,
    ) -> Self {
        Self {
            core: GroupCore::new(name, hierarchy),
            search_field,
            search_expression: search_expression.into(),
            case_sensitive,
        }
    }

    /// The base group data.
    #[must_use]
    pub fn core(&self) -> &GroupCore {
        &self.core
    }

    /// Field inspected on each entry.
    #[must_use]
    pub fn search_field(&self) -> &Field {
        &self.search_field
    }

    /// Expression candidate values are compared against.
    #[must_use]
    pub fn search_expression(&self) -> &str {
        &self.search_expression
    }

    /// Whether comparison distinguishes case.
    #[must_use]
    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }
}

/// Contract shared by every keyword-style matching strategy.
///
/// An implementor stores its configuration in a [`KeywordGroupConfig`]
/// and supplies the matching algorithm through [`Group::contains`].
/// Membership in this family is always computed on demand: every
/// implementation of [`Group::is_dynamic`] returns true.
pub trait KeywordGroup: Group {
    /// The matching configuration of this group.
    fn keyword_config(&self) -> &KeywordGroupConfig;

    /// Field inspected on each entry.
    fn search_field(&self) -> &Field {
        self.keyword_config().search_field()
    }

    /// Expression candidate values are compared against.
    fn search_expression(&self) -> &str {
        self.keyword_config().search_expression()
    }

    /// Whether comparison distinguishes case.
    fn is_case_sensitive(&self) -> bool {
        self.keyword_config().is_case_sensitive()
    }
}
