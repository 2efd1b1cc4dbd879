//! User configuration
//!
//! Stored at `~/.config/gitlink/config.toml` (or the platform equivalent)
//! and never checked into a repository. All keys are optional:
//!
//! ```toml
//! default-branch = "main"
//! default-remote = "origin"
//! exclude-current-revision = false
//! ```
//!
//! Config file location:
//! - Linux/macOS: `$XDG_CONFIG_HOME/gitlink/config.toml` or `~/.config/gitlink/config.toml`
//! - Windows: `%APPDATA%\gitlink\config.toml`

use std::path::PathBuf;

use anyhow::Context;
use etcetera::base_strategy::{BaseStrategy, choose_base_strategy};
use serde::Deserialize;

/// Settings supplied by the user, with the historical defaults of the link
/// workflow (`develop`/`origin`).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct UserConfig {
    /// Fallback branch offered alongside the current branch.
    #[serde(default = "default_branch")]
    pub default_branch: String,

    /// Remote consulted when only the default branch is a candidate.
    #[serde(default = "default_remote")]
    pub default_remote: String,

    /// When false, the current commit revision is appended as an extra
    /// ref-like candidate. Serde only applies the default when the key is
    /// absent, so an explicit `false` in the file is honored.
    #[serde(default = "default_true")]
    pub exclude_current_revision: bool,
}

fn default_branch() -> String {
    "develop".to_string()
}

fn default_remote() -> String {
    "origin".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            default_branch: default_branch(),
            default_remote: default_remote(),
            exclude_current_revision: true,
        }
    }
}

/// Path of the user config file, if a config directory can be determined.
pub fn config_path() -> Option<PathBuf> {
    choose_base_strategy()
        .ok()
        .map(|strategy| strategy.config_dir().join("gitlink").join("config.toml"))
}

impl UserConfig {
    /// Load the user config, falling back to defaults when no file exists.
    ///
    /// A file that exists but fails to parse is an error, not a silent
    /// fallback to the defaults.
    pub fn load() -> anyhow::Result<Self> {
        match config_path() {
            Some(path) if path.exists() => {
                let content = std::fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read config at {}", path.display()))?;
                Self::from_toml(&content)
                    .with_context(|| format!("Invalid config at {}", path.display()))
            }
            _ => Ok(Self::default()),
        }
    }

    /// Parse a config from TOML text.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }
}
