use bibstack_latex::latex_to_unicode;
use serde::{Deserialize, Serialize};

/// One author of a bibliographic entry, decomposed into name parts.
///
/// Components hold the raw text as it appeared in the source, markup
/// included. The `*_latex_free` accessors resolve that markup to plain
/// text on demand; nothing is cached.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Author {
    given: Option<String>,
    prefix: Option<String>,
    family: Option<String>,
    suffix: Option<String>,
}

impl Author {
    /// Creates an author from its name parts. Blank parts count as absent.
    #[must_use]
    pub fn new(
        given: Option<&str>,
        prefix: Option<&str>,
        family: Option<&str>,
        suffix: Option<&str>,
    ) -> Self {
        Self {
            given: non_blank(given),
            prefix: non_blank(prefix),
            family: non_blank(family),
            suffix: non_blank(suffix),
        }
    }

    /// Given name ("Albert").
    #[must_use]
    pub fn given(&self) -> Option<&str> {
        self.given.as_deref()
    }

    /// Lowercase particle chunk preceding the family name ("van den").
    #[must_use]
    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    /// Family name, raw.
    #[must_use]
    pub fn family(&self) -> Option<&str> {
        self.family.as_deref()
    }

    /// Generational suffix ("Jr.", "III").
    #[must_use]
    pub fn suffix(&self) -> Option<&str> {
        self.suffix.as_deref()
    }

    /// Family name with markup resolved to plain text.
    #[must_use]
    pub fn family_latex_free(&self) -> Option<String> {
        self.family.as_deref().map(latex_to_unicode)
    }

    /// Given name with markup resolved to plain text.
    #[must_use]
    pub fn given_latex_free(&self) -> Option<String> {
        self.given.as_deref().map(latex_to_unicode)
    }
}

fn non_blank(part: Option<&str>) -> Option<String> {
    part.map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
}
