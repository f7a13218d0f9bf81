//! Process-wide settings.
//!
//! Settings can be built in code or loaded from TOML:
//!
//! ```toml
//! max_chain_depth = 64
//! group_message = "Validation failed"
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use serde::Deserialize;

pub const DEFAULT_GROUP_MESSAGE: &str = "Multiple exceptions occurred";

static SETTINGS: Lazy<RwLock<Settings>> = Lazy::new(|| RwLock::new(Settings::default()));

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Upper bound on the number of nodes a chain walk visits. Unset means
    /// every node is visited.
    #[serde(default)]
    pub max_chain_depth: Option<usize>,
    /// Message used by exception groups built without one.
    #[serde(default = "Settings::default_group_message")]
    pub group_message: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_chain_depth: None,
            group_message: DEFAULT_GROUP_MESSAGE.to_string(),
        }
    }
}

impl Settings {
    fn default_group_message() -> String {
        DEFAULT_GROUP_MESSAGE.to_string()
    }

    /// Traversal cap actually applied, never below one so a node always
    /// sees itself.
    pub fn effective_max_chain_depth(&self) -> usize {
        self.max_chain_depth.map_or(usize::MAX, |depth| depth.max(1))
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        let settings: Settings = toml::from_str(text).context("invalid errchain settings")?;
        Ok(settings)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read settings {}", path.display()))?;
        let settings: Settings =
            toml::from_str(&text).with_context(|| format!("invalid TOML in {}", path.display()))?;
        Ok(settings)
    }
}

/// Replace the active settings, returning the previous ones.
pub fn install(settings: Settings) -> Settings {
    tracing::debug!(
        max_chain_depth = ?settings.max_chain_depth,
        "installing errchain settings"
    );
    std::mem::replace(&mut *SETTINGS.write(), settings)
}

/// Restore the built-in defaults.
pub fn reset() {
    install(Settings::default());
}

/// Snapshot of the active settings.
pub fn current() -> Settings {
    SETTINGS.read().clone()
}

pub fn max_chain_depth() -> usize {
    SETTINGS.read().effective_max_chain_depth()
}

pub fn group_message() -> String {
    SETTINGS.read().group_message.clone()
}
