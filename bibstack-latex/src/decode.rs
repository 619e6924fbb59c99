//! Decoder for LaTeX accent commands and letter macros.

use std::iter::Peekable;
use std::str::Chars;
use unicode_normalization::UnicodeNormalization;

type Scanner<'a> = Peekable<Chars<'a>>;

/// Converts LaTeX-encoded text to plain Unicode, NFC-normalized.
///
/// Accent commands (`\"u`, `\"{u}`, `\v{S}`, `\c c`) become the base
/// character plus a combining mark, letter macros (`\ss`, `\o`, `\ae`)
/// become their Unicode counterparts, and grouping braces are removed.
/// Commands this decoder does not recognize are preserved verbatim, so
/// text we cannot interpret is never mangled.
#[must_use]
pub fn latex_to_unicode(input: &str) -> String {
    let decoded = decode(input);
    decoded.as_str().nfc().collect()
}

fn decode(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            // grouping braces carry no text of their own
            '{' | '}' => {}
            '\\' => decode_command(&mut chars, &mut out),
            _ => out.push(c),
        }
    }
    out
}

/// Result of looking for an accent command's argument.
enum Arg {
    /// The base character the accent attaches to.
    Char(char),
    /// An empty group was consumed; the accent attaches to nothing.
    EmptyGroup,
    /// No argument present; nothing was consumed.
    Missing,
}

fn decode_command(chars: &mut Scanner<'_>, out: &mut String) {
    let Some(next) = chars.peek().copied() else {
        out.push('\\');
        return;
    };

    if next.is_ascii_alphabetic() {
        let word = read_word(chars);
        decode_word_command(&word, chars, out);
        return;
    }

    chars.next();
    if let Some(mark) = accent_mark(next) {
        match read_argument(chars) {
            Arg::Char(base) => push_accented(base, mark, out),
            Arg::EmptyGroup => {}
            Arg::Missing => {
                out.push('\\');
                out.push(next);
            }
        }
    } else if matches!(next, '&' | '%' | '$' | '#' | '_') {
        out.push(next);
    } else {
        out.push('\\');
        out.push(next);
    }
}

fn decode_word_command(word: &str, chars: &mut Scanner<'_>, out: &mut String) {
    if let Some(mapped) = letter_macro(word) {
        // a control word eats one following space as its delimiter
        if chars.peek() == Some(&' ') {
            chars.next();
        }
        out.push(mapped);
        return;
    }

    if word.len() == 1 {
        let cmd = word.as_bytes()[0] as char;
        if let Some(mark) = accent_mark(cmd) {
            // letter-named accents need a brace or space before the argument
            match chars.peek().copied() {
                Some('{') => {
                    match read_argument(chars) {
                        Arg::Char(base) => push_accented(base, mark, out),
                        Arg::EmptyGroup | Arg::Missing => {}
                    }
                    return;
                }
                Some(' ') => {
                    chars.next();
                    match read_argument(chars) {
                        Arg::Char(base) => push_accented(base, mark, out),
                        Arg::EmptyGroup => {}
                        Arg::Missing => {
                            out.push('\\');
                            out.push_str(word);
                            out.push(' ');
                        }
                    }
                    return;
                }
                _ => {}
            }
        }
    }

    // unrecognized command: preserve it verbatim, together with any braced
    // argument, so a later pass re-reads exactly what this pass emitted
    out.push('\\');
    out.push_str(word);
    if chars.peek() == Some(&'{') {
        copy_group(chars, out);
    }
}

/// Copies a balanced `{...}` group verbatim, braces included.
fn copy_group(chars: &mut Scanner<'_>, out: &mut String) {
    let mut depth = 0usize;
    while let Some(&c) = chars.peek() {
        match c {
            '{' => depth += 1,
            '}' => depth = depth.saturating_sub(1),
            _ => {}
        }
        out.push(c);
        chars.next();
        if c == '}' && depth == 0 {
            break;
        }
    }
}

fn read_argument(chars: &mut Scanner<'_>) -> Arg {
    match chars.peek().copied() {
        Some('{') => {
            chars.next();
            let base = match chars.peek().copied() {
                Some('}') | None => {
                    chars.next();
                    return Arg::EmptyGroup;
                }
                // nested group: descend to the real content
                Some('{') => match read_argument(chars) {
                    Arg::Char(c) => Some(c),
                    Arg::EmptyGroup | Arg::Missing => None,
                },
                Some('\\') => {
                    chars.next();
                    argument_from_command(chars)
                }
                Some(c) => {
                    chars.next();
                    Some(c)
                }
            };
            if chars.peek() == Some(&'}') {
                chars.next();
            }
            match base {
                Some(c) => Arg::Char(c),
                None => Arg::EmptyGroup,
            }
        }
        Some('\\') => {
            chars.next();
            match argument_from_command(chars) {
                Some(c) => Arg::Char(c),
                None => Arg::EmptyGroup,
            }
        }
        Some(c) if !c.is_whitespace() => {
            chars.next();
            Arg::Char(c)
        }
        _ => Arg::Missing,
    }
}

/// Base character contributed by a command in argument position,
/// e.g. the `\i` in `\'{\i}`.
fn argument_from_command(chars: &mut Scanner<'_>) -> Option<char> {
    let word = read_word(chars);
    match word.as_str() {
        // dotless i and j take their accent on the plain letter
        "i" => Some('i'),
        "j" => Some('j'),
        "" => None,
        _ => word.chars().next(),
    }
}

fn read_word(chars: &mut Scanner<'_>) -> String {
    let mut word = String::new();
    while let Some(&c) = chars.peek() {
        if c.is_ascii_alphabetic() {
            word.push(c);
            chars.next();
        } else {
            break;
        }
    }
    word
}

fn push_accented(base: char, mark: char, out: &mut String) {
    out.push(base);
    out.push(mark);
}

/// Combining mark for a LaTeX accent command, by command character.
fn accent_mark(cmd: char) -> Option<char> {
    Some(match cmd {
        '`' => '\u{0300}',  // grave
        '\'' => '\u{0301}', // acute
        '^' => '\u{0302}',  // circumflex
        '~' => '\u{0303}',  // tilde
        '"' => '\u{0308}',  // diaeresis
        '=' => '\u{0304}',  // macron
        '.' => '\u{0307}',  // dot above
        'u' => '\u{0306}',  // breve
        'v' => '\u{030C}',  // caron
        'H' => '\u{030B}',  // double acute
        'c' => '\u{0327}',  // cedilla
        'k' => '\u{0328}',  // ogonek
        'r' => '\u{030A}',  // ring above
        'b' => '\u{0331}',  // macron below
        'd' => '\u{0323}',  // dot below
        _ => return None,
    })
}

/// Unicode counterpart of a LaTeX letter macro.
fn letter_macro(word: &str) -> Option<char> {
    Some(match word {
        "ss" => 'ß',
        "o" => 'ø',
        "O" => 'Ø',
        "ae" => 'æ',
        "AE" => 'Æ',
        "aa" => 'å',
        "AA" => 'Å',
        "l" => 'ł',
        "L" => 'Ł',
        "i" => 'ı',
        "j" => 'ȷ',
        _ => return None,
    })
}
