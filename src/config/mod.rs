//! # Configuration Source Module
//!
//! This module provides [`TomlSource`], a read-only hierarchical view over a TOML
//! configuration tree, addressed by dotted path (`wtf.exitMessage.display`).
//!
//! ## Read Contract
//!
//! - **Absence is not an error**: [`TomlSource::bool_or`] and
//!   [`TomlSource::string_or`] return the caller's default when the path is
//!   missing *or* holds a value of the wrong type. No read ever fails.
//! - **Sub-sections may be absent**: [`TomlSource::section`] returns `None` for a
//!   missing table; callers treat that as a valid, expected state.
//! - **Read-only**: nothing here mutates the underlying tree.
//!
//! ## Configuration File Format
//!
//! Dotted paths map onto nested TOML tables:
//!
//! ```toml
//! [wtf.exitMessage]
//! display = true
//! githubAPIKey = ""
//!
//! [wtf.mods.github]
//! apiKey = ""
//! ```

use anyhow::{anyhow, Result};
use tokio::fs;
use toml::Value;

/// Starter configuration written by `wtfmsg init`.
const DEFAULT_CONFIG: &str = r#"# wtfmsg configuration
#
# display:      set to false (as a contributor or sponsor) to silence the exit
#               message; ordinary users always see it
# githubAPIKey: GitHub API key used to classify you as contributor/sponsor;
#               falls back to $WTF_GITHUB_TOKEN, then to wtf.mods.github.apiKey

[wtf.exitMessage]
display = true
githubAPIKey = ""
"#;

/// A read-only hierarchical configuration source backed by a TOML value tree.
///
/// Every read takes a dotted path and a default; sub-section lookup is the only
/// operation that can "fail", and it does so by returning `None`.
#[derive(Debug, Clone)]
pub struct TomlSource {
    root: Value,
}

impl TomlSource {
    /// Load a configuration source from a TOML file.
    pub async fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .await
            .map_err(|e| anyhow!("Failed to read config file {}: {}", path, e))?;

        Self::from_str(&content)
            .map_err(|e| anyhow!("Failed to parse config file {}: {}", path, e))
    }

    /// Parse a configuration source from a TOML string.
    pub fn from_str(content: &str) -> Result<Self> {
        let root: Value = toml::from_str(content)?;
        Ok(Self { root })
    }

    /// Write the starter configuration file.
    pub async fn create_default(path: &str) -> Result<()> {
        fs::write(path, DEFAULT_CONFIG)
            .await
            .map_err(|e| anyhow!("Failed to write config file {}: {}", path, e))?;

        Ok(())
    }

    /// Read a boolean at `path`, or `default` if the path is absent or holds a
    /// non-boolean value.
    pub fn bool_or(&self, path: &str, default: bool) -> bool {
        match self.lookup(path).and_then(Value::as_bool) {
            Some(b) => b,
            None => default,
        }
    }

    /// Read a string at `path`, or `default` if the path is absent or holds a
    /// non-string value.
    pub fn string_or(&self, path: &str, default: &str) -> String {
        match self.lookup(path).and_then(Value::as_str) {
            Some(s) => s.to_string(),
            None => default.to_string(),
        }
    }

    /// Look up the table at `path` as its own source. Returns `None` when the
    /// path is absent or not a table; absence is an expected state, not an error.
    pub fn section(&self, path: &str) -> Option<TomlSource> {
        let value = self.lookup(path)?;
        if value.is_table() {
            Some(TomlSource {
                root: value.clone(),
            })
        } else {
            None
        }
    }

    /// Walk the value tree one dotted-path segment at a time.
    fn lookup(&self, path: &str) -> Option<&Value> {
        let mut current = &self.root;
        for segment in path.split('.') {
            current = current.as_table()?.get(segment)?;
        }
        Some(current)
    }
}
