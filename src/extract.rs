//! Pattern-based extraction of signatures and fields.
//!
//! This is not a parser: there is no grammar and no symbol table. Blocks are
//! located with a single regular expression and field lists are scanned with
//! another. Facts, predicates and other paragraphs are never extracted.

use crate::model::{Field, Multiplicity, Signature};
use once_cell::sync::Lazy;
use regex::Regex;

// `[^}]*` keeps the field list single-level: a nested brace ends the block early.
static SIGNATURE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"sig\s+(\w+)(?:\s+extends\s+(\w+))?\s*\{([^}]*)\}")
        .expect("signature pattern is valid")
});
static FIELD_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\w+)\s*:\s*(\w+)\s+(\w+)").expect("field pattern is valid"));

/// Find every signature block in document order.
pub fn extract_signatures(text: &str) -> Vec<Signature> {
    SIGNATURE_PATTERN
        .captures_iter(text)
        .map(|caps| {
            let body = caps.get(3).map_or("", |m| m.as_str());
            Signature {
                name: caps[1].to_string(),
                extends: caps.get(2).map(|m| m.as_str().to_string()),
                fields: extract_fields(body.trim()),
            }
        })
        .collect()
}

/// Find every `name : mult Type` triple in a captured field list.
pub fn extract_fields(span: &str) -> Vec<Field> {
    FIELD_PATTERN
        .captures_iter(span)
        .map(|caps| Field::new(&caps[1], Multiplicity::from_keyword(&caps[2]), &caps[3]))
        .collect()
}
