//! Bibliographic record model for bibstack.
//!
//! Defines the types the grouping layer inspects:
//! - [`Entry`], one record as a typed bag of raw field values
//! - [`Author`], one author decomposed into name parts
//! - [`AuthorList`], a lenient parser for BibTeX-style name lists
//!
//! Field text is stored exactly as authored, markup included; the
//! `*_latex_free` accessors resolve markup to plain text at the point
//! of use.

mod author;
mod author_list;
mod entry;

pub use author::Author;
pub use author_list::AuthorList;
pub use entry::Entry;
