//! PlantUML text assembly.

use crate::extract::extract_signatures;
use crate::model::{Field, Signature};

pub const START_MARKER: &str = "@startuml";
pub const END_MARKER: &str = "@enduml";

/// Converts Alloy source text into a marker-wrapped PlantUML class diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Converter {
    start_marker: &'static str,
    end_marker: &'static str,
}

impl Default for Converter {
    fn default() -> Self {
        Self {
            start_marker: START_MARKER,
            end_marker: END_MARKER,
        }
    }
}

impl Converter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Never fails: text without signatures yields just the two markers.
    pub fn convert(&self, text: &str) -> String {
        let signatures = extract_signatures(text);
        log::trace!("extracted {} signature(s)", signatures.len());

        let mut lines = vec![self.start_marker.to_string()];
        lines.extend(signatures.iter().flat_map(render_signature));
        lines.push(self.end_marker.to_string());
        lines.join("\n")
    }

    /// Drop this converter's own start/end lines from a converted document.
    pub fn strip_markers<'a>(&self, output: &'a str) -> Vec<&'a str> {
        output
            .split('\n')
            .filter(|line| {
                !line.starts_with(self.start_marker) && !line.starts_with(self.end_marker)
            })
            .collect()
    }

    pub fn wrap(&self, body: &[String]) -> String {
        let mut lines = Vec::with_capacity(body.len() + 2);
        lines.push(self.start_marker);
        lines.extend(body.iter().map(String::as_str));
        lines.push(self.end_marker);
        lines.join("\n")
    }
}

pub fn convert(text: &str) -> String {
    Converter::default().convert(text)
}

pub fn strip_markers(output: &str) -> Vec<&str> {
    Converter::default().strip_markers(output)
}

/// Class line, optional inheritance edge, then one composition edge per field.
pub fn render_signature(sig: &Signature) -> Vec<String> {
    let mut lines = Vec::with_capacity(sig.fields.len() + 2);
    lines.push(class_line(&sig.name));
    if let Some(parent) = &sig.extends {
        lines.push(inheritance_line(&sig.name, parent));
    }
    lines.extend(sig.fields.iter().map(|f| composition_line(&sig.name, f)));
    lines
}

fn class_line(name: &str) -> String {
    format!("class {name} {{}}")
}

fn inheritance_line(name: &str, parent: &str) -> String {
    format!("{name} --|> {parent}")
}

fn composition_line(owner: &str, field: &Field) -> String {
    format!(
        "{owner} \"{}\" *-- \"{}\" {}",
        field.source_range(),
        field.target_range(),
        field.type_name
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Multiplicity;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_input_yields_markers_only() {
        assert_eq!(convert(""), "@startuml\n@enduml");
    }

    #[test]
    fn test_person_example() {
        let out = convert("sig Person extends Entity { name : one String friends : set Person }");
        assert_eq!(
            out,
            [
                "@startuml",
                "class Person {}",
                "Person --|> Entity",
                "Person \"1\" *-- \"1\" String",
                "Person \"0..*\" *-- \"0..*\" Person",
                "@enduml",
            ]
            .join("\n")
        );
    }

    #[test]
    fn test_render_signature_without_parent() {
        let sig = Signature::new("Book")
            .with_fields(vec![Field::new("author", Multiplicity::Some, "Person")]);
        assert_eq!(
            render_signature(&sig),
            vec!["class Book {}", "Book \"1..*\" *-- \"1..*\" Person"]
        );
    }

    #[test]
    fn test_unrecognized_multiplicity_renders_empty_quotes() {
        let sig = Signature::new("Queue").with_fields(vec![Field::new(
            "items",
            Multiplicity::Unrecognized("seq".into()),
            "Item",
        )]);
        assert_eq!(render_signature(&sig)[1], "Queue \"\" *-- \"\" Item");
    }

    #[test]
    fn test_strip_markers() {
        let out = convert("sig A {}");
        assert_eq!(strip_markers(&out), vec!["class A {}"]);
    }

    #[test]
    fn test_wrap_is_inverse_of_strip() {
        let out = convert("sig A extends B { x: lone C }");
        let body: Vec<String> = strip_markers(&out).into_iter().map(String::from).collect();
        assert_eq!(Converter::new().wrap(&body), out);
    }
}
