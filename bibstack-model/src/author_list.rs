//! Lenient parser for BibTeX-style author lists.
//!
//! A name list is authors joined by the word `and` at brace depth 0.
//! Each author is decomposed by comma count:
//! - `First von Last`
//! - `von Last, First`
//! - `von Last, Suffix, First`
//!
//! `{...}` protects its content from splitting, so corporate names stay
//! intact. Parsing is total: input that cannot be decomposed yields an
//! empty list, never an error.

use crate::Author;
use serde::{Deserialize, Serialize};

/// An ordered list of authors parsed from a raw field value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorList {
    authors: Vec<Author>,
}

impl AuthorList {
    /// Parses a raw name-list field value.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let authors: Vec<Author> = split_authors(raw)
            .into_iter()
            .filter_map(|tokens| parse_author(&tokens))
            .collect();
        if authors.is_empty() && !raw.trim().is_empty() {
            tracing::debug!(length = raw.len(), "name list yielded no parseable authors");
        }
        Self { authors }
    }

    /// The parsed authors, in source order.
    #[must_use]
    pub fn authors(&self) -> &[Author] {
        &self.authors
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.authors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.authors.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Author> {
        self.authors.iter()
    }
}

impl<'a> IntoIterator for &'a AuthorList {
    type Item = &'a Author;
    type IntoIter = std::slice::Iter<'a, Author>;

    fn into_iter(self) -> Self::IntoIter {
        self.authors.iter()
    }
}

#[derive(Debug, PartialEq)]
enum Token {
    Word(String),
    Comma,
}

fn tokenize(raw: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut word = String::new();
    let mut depth = 0usize;
    for c in raw.chars() {
        match c {
            '{' => {
                depth += 1;
                word.push(c);
            }
            '}' => {
                depth = depth.saturating_sub(1);
                word.push(c);
            }
            ',' if depth == 0 => {
                flush(&mut word, &mut tokens);
                tokens.push(Token::Comma);
            }
            c if c.is_whitespace() && depth == 0 => flush(&mut word, &mut tokens),
            _ => word.push(c),
        }
    }
    flush(&mut word, &mut tokens);
    tokens
}

fn flush(word: &mut String, tokens: &mut Vec<Token>) {
    if !word.is_empty() {
        tokens.push(Token::Word(std::mem::take(word)));
    }
}

/// Splits the token stream into per-author groups on the `and` keyword.
fn split_authors(raw: &str) -> Vec<Vec<Token>> {
    let mut groups = vec![Vec::new()];
    for token in tokenize(raw) {
        match &token {
            Token::Word(w) if w.eq_ignore_ascii_case("and") => groups.push(Vec::new()),
            _ => groups.last_mut().expect("groups starts non-empty").push(token),
        }
    }
    groups.retain(|g| !g.is_empty());
    groups
}

fn parse_author(tokens: &[Token]) -> Option<Author> {
    let mut segments: Vec<Vec<&str>> = vec![Vec::new()];
    for token in tokens {
        match token {
            Token::Comma => segments.push(Vec::new()),
            Token::Word(w) => segments
                .last_mut()
                .expect("segments starts non-empty")
                .push(w.as_str()),
        }
    }

    if segments.iter().all(|s| s.is_empty()) {
        return None;
    }

    match segments.len() {
        1 => first_von_last(&segments[0]),
        2 => Some(von_last_given(&segments[0], &segments[1], None)),
        _ => {
            let given: Vec<&str> = segments[2..]
                .iter()
                .flat_map(|s| s.iter().copied())
                .collect();
            Some(von_last_given(&segments[0], &given, Some(&segments[1])))
        }
    }
}

/// The comma-less `First von Last` form.
fn first_von_last(words: &[&str]) -> Option<Author> {
    if words.is_empty() {
        return None;
    }
    if words.len() == 1 {
        return Some(Author::new(None, None, Some(words[0]), None));
    }

    // the particle is the span from the first to the last lowercase-starting
    // word, and the final word always belongs to the family name
    let candidates = &words[..words.len() - 1];
    match candidates.iter().position(|w| starts_lowercase(w)) {
        Some(start) => {
            let end = candidates
                .iter()
                .rposition(|w| starts_lowercase(w))
                .expect("a lowercase word was found above");
            let given = join(&words[..start]);
            let prefix = join(&words[start..=end]);
            let family = join(&words[end + 1..]);
            Some(Author::new(
                given.as_deref(),
                prefix.as_deref(),
                family.as_deref(),
                None,
            ))
        }
        None => {
            let given = join(&words[..words.len() - 1]);
            Some(Author::new(given.as_deref(), None, Some(words[words.len() - 1]), None))
        }
    }
}

/// The comma forms: `von Last, First` and `von Last, Suffix, First`.
fn von_last_given(last_words: &[&str], given_words: &[&str], suffix_words: Option<&[&str]>) -> Author {
    let (prefix, family) = split_von_last(last_words);
    let given = join(given_words);
    let suffix = suffix_words.and_then(join);
    Author::new(
        given.as_deref(),
        prefix.as_deref(),
        family.as_deref(),
        suffix.as_deref(),
    )
}

/// Leading lowercase-starting words form the particle, as long as at
/// least one word remains for the family name.
fn split_von_last(words: &[&str]) -> (Option<String>, Option<String>) {
    if words.is_empty() {
        return (None, None);
    }
    let mut von_len = 0;
    while von_len < words.len() - 1 && starts_lowercase(words[von_len]) {
        von_len += 1;
    }
    (join(&words[..von_len]), join(&words[von_len..]))
}

/// A word steers von-splitting only when its first letter outside braces
/// is lowercase; brace-protected and command-led words count as uppercase.
fn starts_lowercase(word: &str) -> bool {
    for c in word.chars() {
        match c {
            '{' | '}' | '\\' => return false,
            c if c.is_alphabetic() => return c.is_lowercase(),
            _ => {}
        }
    }
    false
}

fn join(words: &[&str]) -> Option<String> {
    if words.is_empty() {
        None
    } else {
        Some(words.join(" "))
    }
}
