pub mod real;
pub mod traits;
pub mod walker;

// Re-export I/O traits for convenient access
pub use real::RealFileSystem;
pub use traits::FileSystem;
pub use walker::{find_source_files, SourceWalker};
