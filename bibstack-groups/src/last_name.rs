use crate::{Group, GroupHierarchy, KeywordGroup, KeywordGroupConfig};
use bibstack_latex::latex_to_unicode;
use bibstack_model::{Author, AuthorList, Entry};
use bibstack_types::Field;
use serde::{Deserialize, Serialize};

/// Matches entries whose configured field lists an author with a given
/// last name.
///
/// The name to match is normalized to plain text at construction, and
/// the same normalization is applied to each candidate family name
/// during evaluation, so markup-encoded diacritics on either side
/// compare equal. Comparison is exact: whole name, always
/// case-sensitive, no substring matching.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LastNameGroup {
    config: KeywordGroupConfig,
}

impl LastNameGroup {
    /// Creates a group matching `last_name` against the authors listed
    /// in `search_field`.
    ///
    /// `last_name` is normalized immediately, so the stored search
    /// expression is always in plain-text form.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        hierarchy: GroupHierarchy,
        search_field: Field,
        last_name: &str,
    ) -> Self {
        Self {
            config: KeywordGroupConfig::new(
                name,
                hierarchy,
                search_field,
                latex_to_unicode(last_name),
                true,
            ),
        }
    }
}

/// Plain-text family names of every author listed in `field` of `entry`.
///
/// A missing field, an unparseable value, and authors without a family
/// component all degrade to fewer candidates, never to an error.
fn last_names_latex_free(field: &Field, entry: &Entry) -> Vec<String> {
    entry
        .field(field)
        .map(|raw| {
            AuthorList::parse(raw)
                .iter()
                .filter_map(Author::family_latex_free)
                .collect()
        })
        .unwrap_or_default()
}

impl Group for LastNameGroup {
    fn name(&self) -> &str {
        self.config.core().name()
    }

    fn hierarchy(&self) -> GroupHierarchy {
        self.config.core().hierarchy()
    }

    fn is_dynamic(&self) -> bool {
        true
    }

    fn contains(&self, entry: &Entry) -> bool {
        last_names_latex_free(self.search_field(), entry)
            .iter()
            .any(|name| name == self.search_expression())
    }

    fn deep_copy(&self) -> Box<dyn Group> {
        // the stored expression is already normalized; the copy reuses it
        // as-is rather than running normalization again
        Box::new(self.clone())
    }
}

impl KeywordGroup for LastNameGroup {
    fn keyword_config(&self) -> &KeywordGroupConfig {
        &self.config
    }
}
