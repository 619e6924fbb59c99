use bibstack_model::{Author, AuthorList};
use pretty_assertions::assert_eq;

fn single(raw: &str) -> Author {
    let list = AuthorList::parse(raw);
    assert_eq!(list.len(), 1, "expected exactly one author in {raw:?}");
    list.authors()[0].clone()
}

// ── Comma forms ──────────────────────────────────────────────────

#[test]
fn last_comma_first() {
    let author = single("Einstein, Albert");
    assert_eq!(author.family(), Some("Einstein"));
    assert_eq!(author.given(), Some("Albert"));
    assert_eq!(author.prefix(), None);
    assert_eq!(author.suffix(), None);
}

#[test]
fn family_only_with_trailing_comma() {
    let author = single("Einstein,");
    assert_eq!(author.family(), Some("Einstein"));
    assert_eq!(author.given(), None);
}

#[test]
fn von_particle_in_comma_form() {
    let author = single("van der Waals, Johannes Diderik");
    assert_eq!(author.prefix(), Some("van der"));
    assert_eq!(author.family(), Some("Waals"));
    assert_eq!(author.given(), Some("Johannes Diderik"));
}

#[test]
fn suffix_in_three_part_form() {
    let author = single("King, Jr., Martin Luther");
    assert_eq!(author.family(), Some("King"));
    assert_eq!(author.suffix(), Some("Jr."));
    assert_eq!(author.given(), Some("Martin Luther"));
}

// ── First-Last form ──────────────────────────────────────────────

#[test]
fn first_last_without_comma() {
    let author = single("Albert Einstein");
    assert_eq!(author.given(), Some("Albert"));
    assert_eq!(author.family(), Some("Einstein"));
}

#[test]
fn single_word_is_a_family_name() {
    let author = single("Aristotle");
    assert_eq!(author.family(), Some("Aristotle"));
    assert_eq!(author.given(), None);
}

#[test]
fn von_particle_without_comma() {
    let author = single("Jean de la Fontaine");
    assert_eq!(author.given(), Some("Jean"));
    assert_eq!(author.prefix(), Some("de la"));
    assert_eq!(author.family(), Some("Fontaine"));
}

#[test]
fn final_word_stays_in_the_family_name() {
    // a trailing lowercase word cannot be swallowed by the particle
    let author = single("Juan de cervantes");
    assert_eq!(author.prefix(), Some("de"));
    assert_eq!(author.family(), Some("cervantes"));
}

// ── List splitting ───────────────────────────────────────────────

#[test]
fn splits_on_and() {
    let list = AuthorList::parse("Einstein, Albert and Bohr, Niels");
    assert_eq!(list.len(), 2);
    assert_eq!(list.authors()[0].family(), Some("Einstein"));
    assert_eq!(list.authors()[1].family(), Some("Bohr"));
}

#[test]
fn and_is_case_insensitive() {
    let list = AuthorList::parse("Curie, Marie AND Curie, Pierre");
    assert_eq!(list.len(), 2);
}

#[test]
fn and_inside_braces_does_not_split() {
    let list = AuthorList::parse("{Barnes and Noble, Inc.}");
    assert_eq!(list.len(), 1);
    assert_eq!(list.authors()[0].family(), Some("{Barnes and Noble, Inc.}"));
}

#[test]
fn brace_protected_name_keeps_internal_spacing() {
    let author = single("{Brighton Beach Committee}");
    assert_eq!(author.family(), Some("{Brighton Beach Committee}"));
    assert_eq!(author.family_latex_free().as_deref(), Some("Brighton Beach Committee"));
}

// ── Markup resolution ────────────────────────────────────────────

#[test]
fn family_latex_free_resolves_markup() {
    let author = single(r#"M{\"u}ller, Hans"#);
    assert_eq!(author.family(), Some(r#"M{\"u}ller"#));
    assert_eq!(author.family_latex_free().as_deref(), Some("Müller"));
}

#[test]
fn family_latex_free_is_identity_on_plain_names() {
    let author = single("Einstein, Albert");
    assert_eq!(author.family_latex_free().as_deref(), Some("Einstein"));
}

#[test]
fn given_latex_free_resolves_markup() {
    let author = single(r"Gomez, Jos\'e");
    assert_eq!(author.given_latex_free().as_deref(), Some("José"));
}

// ── Degradation ──────────────────────────────────────────────────

#[test]
fn empty_input_yields_empty_list() {
    assert!(AuthorList::parse("").is_empty());
    assert!(AuthorList::parse("   ").is_empty());
}

#[test]
fn lone_and_yields_empty_list() {
    assert!(AuthorList::parse("and").is_empty());
}

#[test]
fn commas_only_yield_no_author() {
    assert!(AuthorList::parse(", ,").is_empty());
}

#[test]
fn default_list_is_empty() {
    assert!(AuthorList::default().is_empty());
    assert_eq!(AuthorList::default().len(), 0);
}

#[test]
fn iteration_visits_authors_in_order() {
    let list = AuthorList::parse("Einstein, Albert and Bohr, Niels and Curie, Marie");
    let families: Vec<_> = list.iter().filter_map(Author::family).collect();
    assert_eq!(families, vec!["Einstein", "Bohr", "Curie"]);
}
