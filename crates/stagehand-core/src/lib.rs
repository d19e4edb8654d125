//! Stagehand Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Stagehand
//! service scaffolding tool, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │         stagehand-cli (CLI)             │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Service             │
//! │            (CreateService)              │
//! │   Prompt → Validate → Parse →           │
//! │          Scaffold → Finish              │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Driven: Console, Filesystem, Source)   │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    stagehand-adapters (Infrastructure)  │
//! │ (TermConsole, LocalFilesystem, etc)     │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │ (ServiceIdentity, EnvironmentDocument,  │
//! │   rendering)  No External Dependencies  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use stagehand_core::{
//!     application::CreateService,
//!     domain::CreateOptions,
//! };
//!
//! // 1. Gather options (CLI supplies the working directory)
//! let options = CreateOptions::new("new-service", "dev", "aws_useast1", ".");
//!
//! // 2. Use the application service (with injected adapters)
//! let service = CreateService::new(console, filesystem, templates);
//! let report = service.run(&options).unwrap();
//! println!("wrote {} files", report.files.len());
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        CreateService, ScaffoldReport, TemplatePair,
        ports::{Console, Filesystem, TemplateSource},
    };
    pub use crate::domain::{
        CreateOptions, EnvironmentDocument, ResolvedService, ServiceIdentity,
    };
    pub use crate::error::{StagehandError, StagehandResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
