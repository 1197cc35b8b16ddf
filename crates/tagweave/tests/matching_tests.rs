//! Matching-engine behavior across modes, kinds and pattern forms

use tagweave::{AttributeName, Error, MatchingAttributeName, TemplateMode};

#[test]
fn all_attributes_matches_every_name_of_its_dialect() {
    let html = MatchingAttributeName::for_all_attributes(TemplateMode::Html);
    for name in [
        AttributeName::html(None, "href"),
        AttributeName::html(Some("th"), "if"),
        AttributeName::html(Some("data"), "role"),
    ] {
        assert!(html.matches(&name), "expected match for {name}");
    }

    let xml = MatchingAttributeName::for_all_attributes(TemplateMode::Xml);
    for name in [
        AttributeName::xml(None, "id"),
        AttributeName::xml(Some("xsi"), "type"),
    ] {
        assert!(xml.matches(&name), "expected match for {name}");
    }
}

#[test]
fn text_mode_matches_nothing() {
    for mode in [TemplateMode::Text, TemplateMode::JavaScript, TemplateMode::Css] {
        let matcher = MatchingAttributeName::for_all_attributes(mode);
        assert!(!matcher.matches(&AttributeName::html(None, "href")));
        assert!(!matcher.matches(&AttributeName::xml(Some("th"), "if")));
    }
}

#[test]
fn no_prefix_wildcard_tracks_prefix_absence() {
    let matcher = MatchingAttributeName::for_all_attributes_with_prefix(TemplateMode::Html, None);

    let without = AttributeName::html(None, "href");
    let with = AttributeName::html(Some("th"), "href");
    assert_eq!(matcher.matches(&without), without.prefix().is_none());
    assert_eq!(matcher.matches(&with), with.prefix().is_none());
}

#[test]
fn prefix_case_sensitivity_follows_mode() {
    let xml = MatchingAttributeName::for_all_attributes_with_prefix(TemplateMode::Xml, Some("th"));
    assert!(!xml.matches(&AttributeName::xml(Some("TH"), "if")));

    let html =
        MatchingAttributeName::for_all_attributes_with_prefix(TemplateMode::Html, Some("th"));
    assert!(html.matches(&AttributeName::html(Some("TH"), "if")));
}

#[test]
fn exact_matcher_mirrors_name_equality() {
    let names = [
        AttributeName::html(Some("th"), "if"),
        AttributeName::html(Some("th"), "each"),
        AttributeName::html(None, "if"),
        AttributeName::html(Some("TH"), "IF"),
    ];
    for x in &names {
        let matcher =
            MatchingAttributeName::for_attribute_name(TemplateMode::Html, x.clone()).unwrap();
        for y in &names {
            assert_eq!(matcher.matches(y), x == y, "matcher {x} candidate {y}");
        }
    }
}

#[test]
fn exact_construction_rejects_kind_mode_disagreement() {
    let cases = [
        (TemplateMode::Html, AttributeName::xml(Some("th"), "if")),
        (TemplateMode::Xml, AttributeName::html(Some("th"), "if")),
    ];
    for (mode, name) in cases {
        match MatchingAttributeName::for_attribute_name(mode, name) {
            Err(Error::KindMismatch { mode: m, .. }) => assert_eq!(m, mode),
            other => panic!("expected kind mismatch, got {other:?}"),
        }
    }
}

#[test]
fn validation_failure_is_not_a_non_match() {
    // A mismatched exact matcher never gets constructed at all, so a
    // dispatch table can only ever hold well-formed patterns.
    let result = MatchingAttributeName::for_attribute_name(
        TemplateMode::Xml,
        AttributeName::html(None, "href"),
    );
    assert!(result.is_err());
}

#[test]
fn wildcard_rejects_foreign_kind_before_prefix_check() {
    let matcher =
        MatchingAttributeName::for_all_attributes_with_prefix(TemplateMode::Html, Some("th"));
    // Right prefix text, wrong dialect.
    assert!(!matcher.matches(&AttributeName::xml(Some("th"), "if")));
}
