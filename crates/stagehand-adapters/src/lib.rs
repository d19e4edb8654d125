//! Infrastructure adapters for Stagehand.
//!
//! This crate implements the ports defined in
//! `stagehand_core::application::ports`. It contains all external
//! dependencies and I/O operations.

pub mod console;
pub mod filesystem;
pub mod templates;

// Re-export commonly used adapters
pub use console::{MemoryConsole, TermConsole};
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use templates::{BuiltinTemplates, DirTemplates};
