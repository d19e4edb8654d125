//! Application services.

pub mod create_service;

pub use create_service::{
    CreateService, ENV_FILE, HANDLER_FILE, MANIFEST_FILE, PACKAGE_FILE, ScaffoldReport,
    TemplatePair,
};
