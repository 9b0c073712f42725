//! CLI command implementations.
//!
//! Available commands:
//! - **combine**: Convert every Alloy file in a directory into one PlantUML diagram

pub mod combine;

pub use combine::{
    combine, combine_sources, prepare, validate_directory, CombineReport, PreparedDiagram,
};
