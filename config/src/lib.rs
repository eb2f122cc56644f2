//! Configuration for caller-owned checkers.
//!
//! Every section and field is optional; an empty document yields the same
//! behavior as the built-in default checker.
//!
//! ```toml
//! [template]
//! policy = "strict"      # "lenient" (default) | "strict"
//!
//! [labels]
//! element = "Index"      # description used by element index checks
//! position = "Position"  # description used by position index checks
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use precond_types::{Label, TemplatePolicy};
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CheckerConfig {
    pub template: TemplateConfig,
    pub labels: LabelsConfig,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    /// Mismatch policy for message templates. Default: lenient.
    pub policy: TemplatePolicy,
}

/// Default description labels. Empty labels are rejected while parsing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LabelsConfig {
    pub element: Label,
    pub position: Label,
}

impl Default for LabelsConfig {
    fn default() -> Self {
        Self {
            element: Label::ELEMENT,
            position: Label::POSITION,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read checker config {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse checker config{}: {source}", location(.path))]
    Parse {
        path: Option<PathBuf>,
        source: toml::de::Error,
    },
}

fn location(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" {}", p.display()))
        .unwrap_or_default()
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            ConfigError::Read { path, .. } => Some(path),
            ConfigError::Parse { path, .. } => path.as_deref(),
        }
    }
}

impl CheckerConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Parse { path: None, source })
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read checker config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        match toml::from_str::<Self>(&content) {
            Ok(config) => {
                tracing::debug!(
                    path = %path.display(),
                    policy = config.template.policy.as_str(),
                    "Loaded checker config"
                );
                Ok(config)
            }
            Err(err) => {
                tracing::warn!("Failed to parse checker config at {:?}: {}", path, err);
                Err(ConfigError::Parse {
                    path: Some(path.to_path_buf()),
                    source: err,
                })
            }
        }
    }

    /// Like [`CheckerConfig::load`], but a missing file is not an error.
    pub fn load_if_exists(path: impl AsRef<Path>) -> Result<Option<Self>, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(None);
        }
        Self::load(path).map(Some)
    }
}
