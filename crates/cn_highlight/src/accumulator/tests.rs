use super::*;
use crate::category::KeywordGroup;
use crate::{highlight, Theme};
use cn_lexer_core::scan;
use pretty_assertions::assert_eq;

/// Helper: highlight with the built-in theme, keep `(text, category)`.
fn runs_of(source: &str) -> Vec<(&str, Category)> {
    highlight(source, Theme::builtin_shared())
        .into_iter()
        .map(|run| (run.text, run.category))
        .collect()
}

const BLUE: Category = Category::Keyword(KeywordGroup::BLUE);
const MAGENTA: Category = Category::Keyword(KeywordGroup::MAGENTA);
const GREEN: Category = Category::Keyword(KeywordGroup::GREEN);
const DEFAULT: Category = Category::Default;
const STRING: Category = Category::StringLiteral;

// === Classification and merging ===

#[test]
fn class_declaration() {
    assert_eq!(
        runs_of("class Foo { }"),
        vec![("class", BLUE), (" Foo { }", DEFAULT)]
    );
}

#[test]
fn import_statement() {
    assert_eq!(
        runs_of("import Component from 'x'"),
        vec![
            ("import", MAGENTA),
            (" ", DEFAULT),
            ("Component", GREEN),
            (" ", DEFAULT),
            ("from", MAGENTA),
            (" ", DEFAULT),
            ("'x'", STRING),
        ]
    );
}

#[test]
fn unterminated_string_is_last_run() {
    assert_eq!(
        runs_of("let s = \"abc"),
        vec![("let s = ", DEFAULT), ("\"abc", STRING)]
    );
}

#[test]
fn escaped_quote_stays_in_literal() {
    assert_eq!(runs_of("\"a\\\"b\""), vec![("\"a\\\"b\"", STRING)]);
}

#[test]
fn empty_input_has_no_runs() {
    assert!(runs_of("").is_empty());
}

#[test]
fn default_tokens_and_symbols_coalesce() {
    assert_eq!(
        runs_of("a.b(c, d);"),
        vec![("a.b(c, d);", DEFAULT)]
    );
}

#[test]
fn keywords_split_default_stretches() {
    assert_eq!(
        runs_of("x class y class"),
        vec![
            ("x ", DEFAULT),
            ("class", BLUE),
            (" y ", DEFAULT),
            ("class", BLUE),
        ]
    );
}

#[test]
fn adjacent_keywords_are_not_merged() {
    // Merging only applies to default entries.
    let source = "class class";
    let theme = Theme::builtin();
    let mut acc = RunAccumulator::new(source, theme.keywords());
    acc.extend(scan(source));
    assert_eq!(
        acc.entries(),
        &[
            RunInfo {
                span: Span::new(0, 4),
                category: BLUE
            },
            RunInfo {
                span: Span::new(5, 5),
                category: DEFAULT
            },
            RunInfo {
                span: Span::new(6, 10),
                category: BLUE
            },
        ]
    );
}

#[test]
fn strings_are_never_merged() {
    assert_eq!(
        runs_of("'a''b'"),
        vec![("'a'", STRING), ("'b'", STRING)]
    );
    assert_eq!(
        runs_of("x'a'y z"),
        vec![("x", DEFAULT), ("'a'", STRING), ("y z", DEFAULT)]
    );
}

#[test]
fn keyword_text_inside_string_is_not_classified() {
    assert_eq!(runs_of("'class'"), vec![("'class'", STRING)]);
}

#[test]
fn keyword_glued_to_symbol() {
    assert_eq!(
        runs_of("export{Component}"),
        vec![
            ("export", MAGENTA),
            ("{", DEFAULT),
            ("Component", GREEN),
            ("}", DEFAULT),
        ]
    );
}

// === Gap bridging ===

#[test]
fn gap_between_entries_is_bridged_with_default() {
    let source = "class   Foo";
    let theme = Theme::builtin();
    let mut acc = RunAccumulator::new(source, theme.keywords());
    acc.push(RawSpan::plain(0, 4));
    acc.push(RawSpan::plain(8, 10));
    let runs = acc.finish(theme.palette());

    let texts: Vec<_> = runs.iter().map(|r| (r.text, r.category)).collect();
    assert_eq!(
        texts,
        vec![("class", BLUE), ("   ", DEFAULT), ("Foo", DEFAULT)]
    );
    assert_eq!(runs[1].span, Span::new(5, 7));
    assert_eq!(runs[1].color, Palette::DEFAULT_TEXT);
}

#[test]
fn bridge_never_inherits_neighbour_color() {
    let source = "'s' import";
    let theme = Theme::builtin();
    let mut acc = RunAccumulator::new(source, theme.keywords());
    acc.push(RawSpan::string(0, 2));
    acc.push(RawSpan::plain(4, 9));
    let runs = acc.finish(theme.palette());
    assert_eq!(runs[1].text, " ");
    assert_eq!(runs[1].color, Palette::DEFAULT_TEXT);
    assert_eq!(runs[2].color, Palette::MAGENTA);
}

#[test]
fn trailing_gap_is_bridged() {
    let source = "class x";
    let theme = Theme::builtin();
    let mut acc = RunAccumulator::new(source, theme.keywords());
    acc.push(RawSpan::plain(0, 4));
    let runs = acc.finish(theme.palette());
    assert_eq!(runs.len(), 2);
    assert_eq!(runs[1].text, " x");
    assert_eq!(runs[1].span, Span::new(5, 6));
}

#[test]
fn no_entries_bridges_whole_text() {
    let source = "abc";
    let theme = Theme::builtin();
    let acc = RunAccumulator::new(source, theme.keywords());
    let runs = acc.finish(theme.palette());
    assert_eq!(runs.len(), 1);
    assert_eq!(runs[0].text, "abc");
    assert_eq!(runs[0].category, DEFAULT);
}

#[test]
fn default_entry_after_gap_absorbs_it() {
    // Extending the previous default entry covers the skipped bytes too.
    let source = "ab cd";
    let theme = Theme::builtin();
    let mut acc = RunAccumulator::new(source, theme.keywords());
    acc.push(RawSpan::plain(0, 1));
    acc.push(RawSpan::plain(3, 4));
    let runs = acc.finish(theme.palette());
    assert_eq!(runs.len(), 1);
    assert_eq!(runs[0].text, "ab cd");
}

// === Colors ===

#[test]
fn colors_follow_palette() {
    let runs = highlight("import 'x'", Theme::builtin_shared());
    let colors: Vec<_> = runs.iter().map(|r| r.color).collect();
    assert_eq!(
        colors,
        vec![Palette::MAGENTA, Palette::DEFAULT_TEXT, Palette::STRING]
    );
}
