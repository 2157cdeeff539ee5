use super::*;
use crate::category::KeywordGroup;
use pretty_assertions::assert_eq;

const CUSTOM: &str = r##"{
    "default": "#101010",
    "string": "#00FF00",
    "groups": [
        { "name": "control", "color": "#FF0000", "keywords": ["if", "else"] },
        { "name": "types", "color": "#0000FF", "keywords": ["Int"] }
    ]
}"##;

// === Built-in ===

#[test]
fn builtin_shared_is_built_once() {
    let a = Theme::builtin_shared();
    let b = Theme::builtin_shared();
    assert!(std::ptr::eq(a, b));
}

#[test]
fn builtin_shared_across_threads() {
    let here = Theme::builtin_shared() as *const Theme as usize;
    let there = std::thread::spawn(|| Theme::builtin_shared() as *const Theme as usize)
        .join()
        .expect("thread completes");
    assert_eq!(here, there);
}

#[test]
fn builtin_colors() {
    let theme = Theme::builtin();
    assert_eq!(theme.color_of(Category::Default), Rgb::new(0xEE, 0xEE, 0xEE));
    assert_eq!(
        theme.color_of(Category::Keyword(KeywordGroup::BLUE)),
        Rgb::new(0x3B, 0x99, 0xC9)
    );
    assert_eq!(
        theme.color_of(Category::Keyword(KeywordGroup::MAGENTA)),
        Rgb::new(0xC6, 0x85, 0xBE)
    );
    assert_eq!(
        theme.color_of(Category::Keyword(KeywordGroup::GREEN)),
        Rgb::new(0x49, 0xC9, 0xB1)
    );
    assert_eq!(
        theme.color_of(Category::StringLiteral),
        Rgb::new(0xCF, 0x92, 0x79)
    );
}

#[test]
fn builtin_config_round_trips() {
    let config = Theme::builtin().to_config();
    let json = serde_json::to_string_pretty(&config).expect("serialize");
    let reloaded = Theme::from_json(&json).expect("reload");
    assert_eq!(reloaded.to_config(), config);
    assert_eq!(
        reloaded.classify("Component"),
        Category::Keyword(KeywordGroup::GREEN)
    );
}

#[test]
fn builtin_config_shape() {
    let config = Theme::builtin().to_config();
    assert_eq!(config.default.to_string(), "#EEEEEE");
    assert_eq!(config.string.to_string(), "#CF9279");
    let names: Vec<_> = config.groups.iter().map(|g| g.name.as_str()).collect();
    assert_eq!(names, vec!["blue", "magenta", "green"]);
    assert_eq!(config.groups[1].keywords, vec!["import", "from", "export"]);
}

// === Custom themes ===

#[test]
fn custom_theme_from_json() {
    let theme = Theme::from_json(CUSTOM).expect("valid theme");
    let control = theme.classify("else");
    assert!(matches!(control, Category::Keyword(_)));
    assert_eq!(theme.color_of(control), Rgb::new(0xFF, 0, 0));
    assert_eq!(theme.color_of(theme.classify("Int")), Rgb::new(0, 0, 0xFF));
    assert_eq!(theme.classify("class"), Category::Default);
    assert_eq!(theme.color_of(Category::Default), Rgb::new(0x10, 0x10, 0x10));
    assert_eq!(theme.category_name(control), "control");
}

#[test]
fn groups_are_optional() {
    let theme = Theme::from_json(r##"{ "default": "#000000", "string": "#FFFFFF" }"##)
        .expect("valid theme");
    assert!(theme.keywords().is_empty());
    assert_eq!(theme.classify("class"), Category::Default);
}

#[test]
fn bad_color_is_reported() {
    let err = Theme::from_json(r##"{ "default": "white", "string": "#FFFFFF" }"##)
        .expect_err("bad color");
    assert!(matches!(err, ThemeError::Json(_)));
    assert!(err.to_string().contains("must start with `#`"), "{err}");
}

#[test]
fn unknown_field_is_reported() {
    let err = Theme::from_json(r##"{ "default": "#000000", "string": "#FFFFFF", "bold": true }"##)
        .expect_err("unknown field");
    assert!(matches!(err, ThemeError::Json(_)));
}

#[test]
fn duplicate_keyword_is_reported() {
    let json = r##"{
        "default": "#000000",
        "string": "#FFFFFF",
        "groups": [
            { "name": "a", "color": "#111111", "keywords": ["x"] },
            { "name": "b", "color": "#222222", "keywords": ["x"] }
        ]
    }"##;
    let err = Theme::from_json(json).expect_err("duplicate keyword");
    assert!(matches!(
        err,
        ThemeError::Table(TableError::DuplicateKeyword { .. })
    ));
    assert_eq!(
        err.to_string(),
        "keyword `x` is listed in both `a` and `b`"
    );
}

// === Naming ===

#[test]
fn category_names() {
    let theme = Theme::builtin();
    assert_eq!(theme.category_name(Category::Default), "default");
    assert_eq!(theme.category_name(Category::StringLiteral), "string");
    assert_eq!(
        theme.category_name(Category::Keyword(KeywordGroup::MAGENTA)),
        "magenta"
    );
}

// === Palette ===

#[test]
fn uncolored_group_falls_back_to_default() {
    let palette = Palette::new(Rgb::new(1, 2, 3), Rgb::new(4, 5, 6));
    assert_eq!(
        palette.color_of(Category::Keyword(KeywordGroup::GREEN)),
        Rgb::new(1, 2, 3)
    );
    assert_eq!(palette.group_color(KeywordGroup::BLUE), None);
}

#[test]
fn pushed_group_colors_follow_index_order() {
    let mut palette = Palette::new(Rgb::new(0, 0, 0), Rgb::new(0, 0, 0));
    palette.push_group(Rgb::new(9, 9, 9));
    assert_eq!(palette.group_color(KeywordGroup::BLUE), Some(Rgb::new(9, 9, 9)));
    assert_eq!(Palette::default(), Palette::builtin());
}
