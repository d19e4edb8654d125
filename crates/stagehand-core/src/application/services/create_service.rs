//! Create Service - main application orchestrator.
//!
//! This service coordinates the entire create workflow:
//! 1. Prompt (greeting in interactive sessions)
//! 2. Validate options into a resolved service
//! 3. Parse the template pair
//! 4. Scaffold the project directory
//! 5. Finish with the completion summary
//!
//! The steps run strictly forward; each takes the previous step's output as
//! an explicit value. It implements the driving port (incoming) and uses
//! driven ports (outgoing).

use std::path::PathBuf;

use tracing::{info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{Console, Filesystem, TemplateSource},
    },
    domain::{
        CreateOptions, EnvironmentDocument, ResolvedService, ServiceIdentity, rendered_manifest,
        rendered_package,
    },
    error::{StagehandError, StagehandResult},
};

/// File name of the service manifest artifact.
pub const MANIFEST_FILE: &str = "stagehand.yaml";

/// File name of the package descriptor artifact.
pub const PACKAGE_FILE: &str = "package.json";

/// File name of the environment document artifact.
pub const ENV_FILE: &str = "stagehand.env.yaml";

/// File name of the handler stub artifact.
pub const HANDLER_FILE: &str = "handler.js";

/// Fixed handler stub, written verbatim (never templated).
const HANDLER_STUB: &str = r#"'use strict';

module.exports.hello = (event, context, callback) => {
  const response = {
    statusCode: 200,
    body: JSON.stringify({
      message: 'Your stagehand function executed successfully!',
    }),
  };

  callback(null, response);
};
"#;

/// The two parsed templates, re-read on every invocation.
///
/// Both documents are independent owned copies; rendering never touches the
/// canonical template text behind them.
#[derive(Debug, Clone, PartialEq)]
pub struct TemplatePair {
    pub manifest: serde_yaml::Value,
    pub package: serde_json::Value,
}

/// The artifacts one scaffold run wrote to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldReport {
    pub root: PathBuf,
    pub files: Vec<PathBuf>,
}

/// Main create service.
///
/// Orchestrates the prompt, validate, parse, scaffold and finish steps.
pub struct CreateService {
    console: Box<dyn Console>,
    filesystem: Box<dyn Filesystem>,
    templates: Box<dyn TemplateSource>,
}

impl CreateService {
    /// Create a new service with the given adapters.
    pub fn new(
        console: Box<dyn Console>,
        filesystem: Box<dyn Filesystem>,
        templates: Box<dyn TemplateSource>,
    ) -> Self {
        Self {
            console,
            filesystem,
            templates,
        }
    }

    /// Run the full pipeline for one set of options.
    #[instrument(skip_all, fields(service = options.name.as_deref().unwrap_or("<none>")))]
    pub fn run(&self, options: &CreateOptions) -> StagehandResult<ScaffoldReport> {
        self.prompt();
        let service = self.validate(options)?;
        let templates = self.parse()?;
        let report = self.scaffold(&service, &templates)?;
        self.finish(&service);
        Ok(report)
    }

    /// Display the greeting in interactive sessions; otherwise do nothing.
    ///
    /// Never fails and mutates no state.
    pub fn prompt(&self) {
        if self.console.is_interactive() {
            self.console.greeting();
        }
    }

    /// Validate the options into a resolved service.
    ///
    /// No side effects; rejects before any filesystem or template work.
    #[instrument(skip_all)]
    pub fn validate(&self, options: &CreateOptions) -> StagehandResult<ResolvedService> {
        let identity = ServiceIdentity::from_options(options).map_err(StagehandError::Domain)?;
        let service = ResolvedService::resolve(identity, &options.working_dir);
        info!(root = %service.root().display(), "Service resolved");
        Ok(service)
    }

    /// Load and parse the manifest and package templates.
    ///
    /// Both documents are guaranteed to be non-empty mappings; anything else
    /// fails with [`ApplicationError::TemplateLoad`].
    #[instrument(skip_all)]
    pub fn parse(&self) -> StagehandResult<TemplatePair> {
        let manifest_raw = self.templates.manifest_template()?;
        let manifest: serde_yaml::Value =
            serde_yaml::from_str(&manifest_raw).map_err(|e| ApplicationError::TemplateLoad {
                name: MANIFEST_FILE,
                reason: e.to_string(),
            })?;
        ensure_mapping(&manifest, MANIFEST_FILE)?;

        let package_raw = self.templates.package_template()?;
        let package: serde_json::Value =
            serde_json::from_str(&package_raw).map_err(|e| ApplicationError::TemplateLoad {
                name: PACKAGE_FILE,
                reason: e.to_string(),
            })?;
        ensure_object(&package, PACKAGE_FILE)?;

        info!("Templates parsed");
        Ok(TemplatePair { manifest, package })
    }

    /// Write the scaffold into the service's target directory.
    ///
    /// Steps run in order and abort on the first failure. Artifacts written
    /// by earlier steps are left in place — there is no rollback across the
    /// four artifacts. Re-running against a populated directory overwrites
    /// each artifact with equal content; that is the supported recovery path.
    #[instrument(skip_all, fields(root = %service.root().display()))]
    pub fn scaffold(
        &self,
        service: &ResolvedService,
        templates: &TemplatePair,
    ) -> StagehandResult<ScaffoldReport> {
        let root = service.root();
        let name = service.name();

        // 1. Target directory (pre-existing is fine).
        self.filesystem.create_dir_all(root)?;

        // 2. Handler stub, verbatim.
        let handler_path = root.join(HANDLER_FILE);
        self.filesystem.write_file(&handler_path, HANDLER_STUB)?;

        // 3. Service manifest with the identity injected.
        let manifest = rendered_manifest(&templates.manifest, name)?;
        let manifest_path = root.join(MANIFEST_FILE);
        let manifest_text =
            serde_yaml::to_string(&manifest).map_err(|e| ApplicationError::FileWrite {
                path: manifest_path.clone(),
                reason: e.to_string(),
            })?;
        self.filesystem.write_file(&manifest_path, &manifest_text)?;

        // 4. Package descriptor.
        let package = rendered_package(&templates.package, name)?;
        let package_path = root.join(PACKAGE_FILE);
        let package_text =
            serde_json::to_string_pretty(&package).map_err(|e| ApplicationError::FileWrite {
                path: package_path.clone(),
                reason: e.to_string(),
            })? + "\n";
        self.filesystem.write_file(&package_path, &package_text)?;

        // 5. Environment document seeded for this stage/region.
        let env = EnvironmentDocument::seeded(service.identity());
        let env_path = root.join(ENV_FILE);
        let env_text = serde_yaml::to_string(&env).map_err(|e| ApplicationError::FileWrite {
            path: env_path.clone(),
            reason: e.to_string(),
        })?;
        self.filesystem.write_file(&env_path, &env_text)?;

        info!(files = 4, "Scaffold written");
        Ok(ScaffoldReport {
            root: root.to_path_buf(),
            files: vec![handler_path, manifest_path, package_path, env_path],
        })
    }

    /// Emit the five-line completion summary.
    pub fn finish(&self, service: &ResolvedService) {
        let identity = service.identity();
        self.console.log(&format!(
            "Successfully created service '{}'",
            identity.name()
        ));
        self.console
            .log(&format!("Scaffold written to {}", service.root().display()));
        self.console.log(&format!("  cd {}", identity.name()));
        self.console
            .log(&format!("  edit {MANIFEST_FILE} to shape your service"));
        self.console.log(&format!(
            "Deploy with: stagehand deploy --stage {} --region {}",
            identity.stage(),
            identity.region()
        ));
    }
}

fn ensure_mapping(doc: &serde_yaml::Value, name: &'static str) -> Result<(), ApplicationError> {
    match doc {
        serde_yaml::Value::Mapping(m) if !m.is_empty() => Ok(()),
        _ => Err(ApplicationError::TemplateLoad {
            name,
            reason: "template is not a non-empty mapping".into(),
        }),
    }
}

fn ensure_object(doc: &serde_json::Value, name: &'static str) -> Result<(), ApplicationError> {
    match doc {
        serde_json::Value::Object(o) if !o.is_empty() => Ok(()),
        _ => Err(ApplicationError::TemplateLoad {
            name,
            reason: "template is not a non-empty object".into(),
        }),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
