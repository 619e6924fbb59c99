//! LaTeX-to-plain-text normalization.
//!
//! Bibliographic sources encode accented and special characters as LaTeX
//! markup (`M{\"u}ller`, `\v{S}koda`, `Gau\ss`). Comparisons over names
//! must be encoding-agnostic, so [`latex_to_unicode`] resolves that markup
//! to plain Unicode text: accent commands and letter macros are decoded,
//! grouping braces stripped, and the result NFC-normalized.
//!
//! The transform is total and idempotent: already-plain text passes
//! through unchanged, and re-normalizing normalized output is a no-op.

mod decode;

pub use decode::latex_to_unicode;
