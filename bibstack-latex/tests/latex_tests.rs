use bibstack_latex::latex_to_unicode;
use pretty_assertions::assert_eq;

// ── Accent commands ──────────────────────────────────────────────

#[test]
fn umlaut_in_braced_group() {
    assert_eq!(latex_to_unicode(r#"M{\"u}ller"#), "Müller");
}

#[test]
fn umlaut_bare_form() {
    assert_eq!(latex_to_unicode(r#"M\"uller"#), "Müller");
}

#[test]
fn umlaut_braced_argument() {
    assert_eq!(latex_to_unicode(r#"M\"{u}ller"#), "Müller");
}

#[test]
fn acute_accent() {
    assert_eq!(latex_to_unicode(r"G\'omez"), "Gómez");
}

#[test]
fn grave_accent() {
    assert_eq!(latex_to_unicode(r"\`a la carte"), "à la carte");
}

#[test]
fn circumflex_and_tilde() {
    assert_eq!(latex_to_unicode(r"c\^ote"), "côte");
    assert_eq!(latex_to_unicode(r"Pe\~na"), "Peña");
}

#[test]
fn caron_with_braced_argument() {
    assert_eq!(latex_to_unicode(r"\v{S}koda"), "Škoda");
}

#[test]
fn caron_with_space_delimited_argument() {
    assert_eq!(latex_to_unicode(r"\v S"), "Š");
}

#[test]
fn cedilla() {
    assert_eq!(latex_to_unicode(r"Fran\c{c}ois"), "François");
}

#[test]
fn accent_on_uppercase() {
    assert_eq!(latex_to_unicode(r#"\"Ostberg"#), "Östberg");
}

#[test]
fn accent_over_dotless_i() {
    assert_eq!(latex_to_unicode(r"Mart\'{\i}nez"), "Martínez");
}

// ── Letter macros ────────────────────────────────────────────────

#[test]
fn sharp_s() {
    assert_eq!(latex_to_unicode(r"Gau\ss"), "Gauß");
}

#[test]
fn slashed_o() {
    assert_eq!(latex_to_unicode(r"S\o rensen"), "Sørensen");
}

#[test]
fn ligatures_and_ring() {
    assert_eq!(latex_to_unicode(r"\AE sir"), "Æsir");
    assert_eq!(latex_to_unicode(r#"\aa ngstr\"om"#), "ångström");
}

#[test]
fn polish_stroke_l() {
    assert_eq!(latex_to_unicode(r"\L ukasiewicz"), "Łukasiewicz");
}

// ── Braces & passthrough ─────────────────────────────────────────

#[test]
fn grouping_braces_are_stripped() {
    assert_eq!(latex_to_unicode("{Brighton Beach}"), "Brighton Beach");
}

#[test]
fn plain_ascii_is_unchanged() {
    assert_eq!(latex_to_unicode("Einstein"), "Einstein");
    assert_eq!(latex_to_unicode("van der Waals"), "van der Waals");
}

#[test]
fn precomposed_unicode_is_unchanged() {
    assert_eq!(latex_to_unicode("Müller"), "Müller");
    assert_eq!(latex_to_unicode("Škoda"), "Škoda");
}

#[test]
fn decomposed_input_is_composed() {
    // u + combining diaeresis composes to the precomposed form
    assert_eq!(latex_to_unicode("Mu\u{0308}ller"), "Müller");
}

#[test]
fn empty_input() {
    assert_eq!(latex_to_unicode(""), "");
}

// ── Unknown commands & escapes ───────────────────────────────────

#[test]
fn unknown_command_is_preserved() {
    assert_eq!(latex_to_unicode(r"\textbf"), r"\textbf");
}

#[test]
fn unknown_command_keeps_its_braced_argument() {
    assert_eq!(latex_to_unicode(r"\textbf{Smith}"), r"\textbf{Smith}");
}

#[test]
fn escaped_specials_are_unescaped() {
    assert_eq!(latex_to_unicode(r"Smith \& Jones"), "Smith & Jones");
    assert_eq!(latex_to_unicode(r"100\%"), "100%");
}

#[test]
fn dangling_accent_is_preserved() {
    assert_eq!(latex_to_unicode("\\\""), "\\\"");
}

// ── Markup and plain forms agree ─────────────────────────────────

#[test]
fn encoded_and_plain_forms_normalize_identically() {
    assert_eq!(latex_to_unicode(r#"M{\"u}ller"#), latex_to_unicode("Müller"));
    assert_eq!(latex_to_unicode(r"\v{S}koda"), latex_to_unicode("Škoda"));
    assert_eq!(latex_to_unicode(r"Gau\ss"), latex_to_unicode("Gauß"));
}
