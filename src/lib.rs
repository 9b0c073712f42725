// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod errors;
pub mod extract;
pub mod io;
pub mod model;
pub mod render;

// Re-export commonly used types
pub use crate::model::{Field, Multiplicity, Signature};

pub use crate::extract::{extract_fields, extract_signatures};

pub use crate::render::{
    convert, render_signature, strip_markers, Converter, END_MARKER, START_MARKER,
};

pub use crate::commands::combine::{combine, CombineReport};
pub use crate::config::CombineConfig;
pub use crate::errors::{BatchResults, ConvertError, FileFailure, OperationType};
