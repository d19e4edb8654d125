//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Config file (`--config` path, or the default location)
//! 3. Built-in defaults (always present)

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Default values for new services.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
    /// Template settings.
    pub templates: TemplateConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    /// Stage used when `--stage` is omitted.
    pub stage: Option<String>,
    /// Region used when `--region` is omitted.
    pub region: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    /// Directory holding `stagehand.yaml` / `package.json` overrides.
    pub local_path: Option<PathBuf>,
}

impl AppConfig {
    /// Load configuration.
    ///
    /// With an explicit `--config` path the file must exist and parse; a
    /// missing file at the default location silently yields the built-in
    /// defaults.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let (path, required) = match config_file {
            Some(p) => (p.clone(), true),
            None => (Self::config_path(), false),
        };

        let raw = match std::fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if !required && e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(anyhow::anyhow!(
                    "failed to read config file '{}': {e}",
                    path.display()
                ));
            }
        };

        toml::from_str(&raw).map_err(|e| {
            anyhow::anyhow!("failed to parse config file '{}': {e}", path.display())
        })
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.stagehand.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "stagehand", "stagehand")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".stagehand.toml"))
    }
}
