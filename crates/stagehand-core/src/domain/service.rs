//! Service identity: the name/stage/region triple a scaffold is addressed by.
//!
//! [`CreateOptions`] is the raw, possibly incomplete user input; validation
//! turns it into a [`ServiceIdentity`] and then a [`ResolvedService`] carrying
//! the target directory. The resolved value is handed explicitly from the
//! validate step to the scaffold step — there is no shared configuration
//! record behind the pipeline's back.

use std::fmt;
use std::path::PathBuf;

use crate::domain::error::DomainError;

/// Raw input to the create pipeline.
///
/// All three identifiers are optional here; presence is enforced during
/// validation, not construction, so an interactive caller can fill fields in
/// gradually. `working_dir` is supplied by the caller (the CLI passes the
/// process working directory) so the core never reads ambient state.
#[derive(Debug, Clone)]
pub struct CreateOptions {
    pub name: Option<String>,
    pub stage: Option<String>,
    pub region: Option<String>,
    pub working_dir: PathBuf,
}

impl CreateOptions {
    /// Options with every identifier present, rooted at `working_dir`.
    pub fn new(
        name: impl Into<String>,
        stage: impl Into<String>,
        region: impl Into<String>,
        working_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            stage: Some(stage.into()),
            region: Some(region.into()),
            working_dir: working_dir.into(),
        }
    }

    /// Empty options rooted at `working_dir`; fields to be filled by prompts.
    pub fn in_dir(working_dir: impl Into<PathBuf>) -> Self {
        Self {
            name: None,
            stage: None,
            region: None,
            working_dir: working_dir.into(),
        }
    }
}

/// A validated name/stage/region triple. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceIdentity {
    name: String,
    stage: String,
    region: String,
}

impl ServiceIdentity {
    /// Validate raw options into an identity.
    ///
    /// Each of the three fields is checked for presence independently
    /// (absent and empty both count as missing), then the name is checked
    /// against the naming grammar.
    ///
    /// # Errors
    ///
    /// - [`DomainError::MissingField`] naming the first absent field.
    /// - [`DomainError::InvalidName`] when the name violates the grammar.
    pub fn from_options(options: &CreateOptions) -> Result<Self, DomainError> {
        let name = require(&options.name, "name")?;
        let stage = require(&options.stage, "stage")?;
        let region = require(&options.region, "region")?;

        if !is_valid_name(&name) {
            return Err(DomainError::InvalidName { name });
        }

        Ok(Self {
            name,
            stage,
            region,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn stage(&self) -> &str {
        &self.stage
    }

    pub fn region(&self) -> &str {
        &self.region
    }
}

impl fmt::Display for ServiceIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}/{})", self.name, self.stage, self.region)
    }
}

/// Identity plus the directory the scaffold will be written into.
///
/// Output of the validate step; explicit input to scaffold and finish.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedService {
    identity: ServiceIdentity,
    root: PathBuf,
}

impl ResolvedService {
    /// Resolve the target directory as `working_dir/<name>`.
    pub fn resolve(identity: ServiceIdentity, working_dir: impl Into<PathBuf>) -> Self {
        let root = working_dir.into().join(identity.name());
        Self { identity, root }
    }

    pub fn identity(&self) -> &ServiceIdentity {
        &self.identity
    }

    pub fn name(&self) -> &str {
        self.identity.name()
    }

    pub fn root(&self) -> &std::path::Path {
        &self.root
    }
}

fn require(value: &Option<String>, field: &'static str) -> Result<String, DomainError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v.clone()),
        _ => Err(DomainError::MissingField { field }),
    }
}

/// Naming grammar: `^[a-zA-Z][0-9a-zA-Z-]+$`.
///
/// First character is an ASCII letter, every following character is ASCII
/// alphanumeric or `-`, and there is at least one following character.
fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !first.is_ascii_alphabetic() {
        return false;
    }
    let mut rest = 0usize;
    for c in chars {
        if !(c.is_ascii_alphanumeric() || c == '-') {
            return false;
        }
        rest += 1;
    }
    rest >= 1
}

// ── Tests ─────────────────────────────────────────────────────────────────────
