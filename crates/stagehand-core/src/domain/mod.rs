//! Domain layer: pure logic, no I/O.
//!
//! The types here carry the invariants of one scaffold operation — a
//! validated [`ServiceIdentity`], its [`ResolvedService`] target directory,
//! the [`EnvironmentDocument`] seeded for the stage/region pair, and the
//! pure rendering functions that inject the identity into parsed templates.

pub mod environment;
pub mod error;
pub mod render;
pub mod service;

pub use environment::{EnvironmentDocument, RegionVars, StageEntry};
pub use error::{DomainError, ErrorCategory};
pub use render::{rendered_manifest, rendered_package};
pub use service::{CreateOptions, ResolvedService, ServiceIdentity};
