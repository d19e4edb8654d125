//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `stagehand-adapters` implement
//! these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Console`: Interactive session detection, greeting, user-facing log lines
//!   - `Filesystem`: File operations
//!   - `TemplateSource`: Raw template text retrieval
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{Console, Filesystem, TemplateSource};
