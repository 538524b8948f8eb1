//! Configuration system for structgen.
//!
//! Loads config from:
//! 1. Global: ~/.config/structgen/config.toml
//! 2. Per-project: .structgen/config.toml (overrides global)
//!
//! Command-line flags override both.
//!
//! Example config.toml:
//! ```toml
//! [generate]
//! backend = "go"
//! public = true
//! package = "models"
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Defaults for `structgen generate`.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct GenerateConfig {
    /// Backend used when `--lang` is not given.
    pub backend: Option<String>,
    /// Emit the backend's visibility modifier.
    pub public: Option<bool>,
    /// Package name for backends that declare one.
    pub package: Option<String>,
}

/// Root configuration structure.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct StructgenConfig {
    pub generate: GenerateConfig,
}

impl StructgenConfig {
    /// Load configuration for a project.
    ///
    /// Loads global config from ~/.config/structgen/config.toml,
    /// then merges with per-project config from .structgen/config.toml.
    pub fn load(root: &Path) -> Self {
        let mut config = Self::default();

        if let Some(global_path) = Self::global_config_path() {
            if let Some(global) = Self::load_file(&global_path) {
                config = config.merge(global);
            }
        }

        let project_path = root.join(".structgen").join("config.toml");
        if let Some(project) = Self::load_file(&project_path) {
            config = config.merge(project);
        }

        config
    }

    /// Get the global config path.
    fn global_config_path() -> Option<PathBuf> {
        let config_home = std::env::var("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .ok()
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))?;
        Some(config_home.join("structgen").join("config.toml"))
    }

    /// Load config from a file path.
    ///
    /// A missing file is silently skipped; a malformed one is skipped with a
    /// warning.
    fn load_file(path: &Path) -> Option<Self> {
        let content = std::fs::read_to_string(path).ok()?;
        match toml::from_str(&content) {
            Ok(config) => {
                tracing::debug!(path = %path.display(), "loaded config");
                Some(config)
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring malformed config");
                None
            }
        }
    }

    /// Merge another config into this one; keys set in `other` win.
    fn merge(self, other: Self) -> Self {
        Self {
            generate: GenerateConfig {
                backend: other.generate.backend.or(self.generate.backend),
                public: other.generate.public.or(self.generate.public),
                package: other.generate.package.or(self.generate.package),
            },
        }
    }
}
