//! Property-based tests for conversion
//!
//! These tests verify invariants that should hold for all inputs:
//! - Conversion is deterministic
//! - Text without signature blocks yields only the markers
//! - Every extracted field yields exactly one composition edge
//! - Multiplicity annotations stay within the known ranges

use alloy2puml::{convert, extract_signatures};
use proptest::prelude::*;

const RANGES: &[&str] = &["1..*", "1", "0..1", "0..*", ""];

/// Alloy keywords that would change how a block is read
const RESERVED: &[&str] = &["sig", "extends"];

fn identifier() -> impl Strategy<Value = String> {
    "[A-Z][A-Za-z0-9_]{0,10}".prop_filter("not reserved", |s| {
        !RESERVED.iter().any(|r| s.contains(r))
    })
}

fn keyword() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("some".to_string()),
        Just("one".to_string()),
        Just("lone".to_string()),
        Just("set".to_string()),
        Just("seq".to_string()),
    ]
}

fn field() -> impl Strategy<Value = (String, String, String)> {
    (identifier(), keyword(), identifier())
}

fn signature() -> impl Strategy<Value = (String, Option<String>, Vec<(String, String, String)>)> {
    (
        identifier(),
        proptest::option::of(identifier()),
        proptest::collection::vec(field(), 0..5),
    )
}

fn render_source(sigs: &[(String, Option<String>, Vec<(String, String, String)>)]) -> String {
    sigs.iter()
        .map(|(name, parent, fields)| {
            let extends = parent
                .as_ref()
                .map(|p| format!(" extends {p}"))
                .unwrap_or_default();
            let body = fields
                .iter()
                .map(|(f, m, t)| format!("    {f}: {m} {t}"))
                .collect::<Vec<_>>()
                .join(",\n");
            format!("sig {name}{extends} {{\n{body}\n}}\n")
        })
        .collect()
}

proptest! {
    /// Property: converting the same text twice gives byte-identical output
    #[test]
    fn prop_convert_is_deterministic(text in ".{0,200}") {
        prop_assert_eq!(convert(&text), convert(&text));
    }

    /// Property: text with no `sig` keyword is just the two markers
    #[test]
    fn prop_no_signatures_yields_markers(text in "[^s{}]{0,200}") {
        prop_assert_eq!(convert(&text), "@startuml\n@enduml");
    }

    /// Property: one class line per block, one edge per field, in order
    #[test]
    fn prop_lines_follow_structure(sigs in proptest::collection::vec(signature(), 0..6)) {
        let source = render_source(&sigs);
        let output = convert(&source);
        let lines: Vec<&str> = output.lines().collect();

        let expected_len = 2 + sigs
            .iter()
            .map(|(_, parent, fields)| 1 + usize::from(parent.is_some()) + fields.len())
            .sum::<usize>();
        prop_assert_eq!(lines.len(), expected_len);

        let classes: Vec<String> = lines
            .iter()
            .filter_map(|l| l.strip_prefix("class "))
            .map(|l| l.trim_end_matches(" {}").to_string())
            .collect();
        let names: Vec<String> = sigs.iter().map(|(n, _, _)| n.clone()).collect();
        prop_assert_eq!(classes, names);
        prop_assert_eq!(extract_signatures(&source).len(), sigs.len());
    }

    /// Property: both ends of every composition edge carry a known range
    #[test]
    fn prop_multiplicities_are_known_ranges(sigs in proptest::collection::vec(signature(), 1..4)) {
        let output = convert(&render_source(&sigs));
        for line in output.lines().filter(|l| l.contains(" *-- ")) {
            let quoted: Vec<&str> = line.split('"').collect();
            prop_assert_eq!(quoted.len(), 5);
            prop_assert!(RANGES.contains(&quoted[1]));
            prop_assert_eq!(quoted[1], quoted[3]);
        }
    }
}
