//! Transient records extracted from Alloy source text.
//!
//! A [`Signature`] and its [`Field`]s live for exactly one conversion pass.
//! Nothing here is mutated after extraction.

use std::fmt;

/// Cardinality keyword attached to a field declaration.
///
/// Alloy has four keywords that map to a PlantUML range. Anything else is
/// kept verbatim as [`Multiplicity::Unrecognized`] and renders as an empty
/// range instead of failing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Multiplicity {
    /// `some`: one or more
    Some,
    /// `one`: exactly one
    One,
    /// `lone`: zero or one
    Lone,
    /// `set`: any number
    Set,
    Unrecognized(String),
}

impl Multiplicity {
    pub fn from_keyword(keyword: &str) -> Self {
        match keyword {
            "some" => Self::Some,
            "one" => Self::One,
            "lone" => Self::Lone,
            "set" => Self::Set,
            other => Self::Unrecognized(other.to_string()),
        }
    }

    pub fn keyword(&self) -> &str {
        match self {
            Self::Some => "some",
            Self::One => "one",
            Self::Lone => "lone",
            Self::Set => "set",
            Self::Unrecognized(keyword) => keyword,
        }
    }

    /// Range notation shown on a composition edge.
    pub fn range(&self) -> &'static str {
        match self {
            Self::Some => "1..*",
            Self::One => "1",
            Self::Lone => "0..1",
            Self::Set => "0..*",
            Self::Unrecognized(_) => "",
        }
    }
}

impl fmt::Display for Multiplicity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// A `name : mult Type` member of a signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub mult: Multiplicity,
    pub type_name: String,
}

impl Field {
    pub fn new(
        name: impl Into<String>,
        mult: Multiplicity,
        type_name: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            mult,
            type_name: type_name.into(),
        }
    }

    /// Range on the owning signature's side of the edge.
    pub fn source_range(&self) -> &'static str {
        self.mult.range()
    }

    /// Range on the field type's side of the edge.
    ///
    /// NOTE: this is derived from the field's own keyword, so it always equals
    /// [`Field::source_range`]. No multiplicity declared on the referenced
    /// signature is consulted.
    pub fn target_range(&self) -> &'static str {
        self.mult.range()
    }
}

/// A `sig Name [extends Parent] { ... }` block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    pub name: String,
    pub extends: Option<String>,
    pub fields: Vec<Field>,
}

impl Signature {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            extends: None,
            fields: Vec::new(),
        }
    }

    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.extends = Some(parent.into());
        self
    }

    pub fn with_fields(mut self, fields: Vec<Field>) -> Self {
        self.fields = fields;
        self
    }
}
