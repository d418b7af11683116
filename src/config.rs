//! Terminal configuration
//!
//! Optional TOML config for the embedding site. A missing or unreadable
//! file falls back to the defaults so the terminal always comes up.

use std::path::Path;

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TerminalConfig {
    /// Host name shown in the prompt (`user@host:/path$`)
    pub host: String,
    /// Lines written into the transcript when the terminal starts
    pub greeting: Vec<String>,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            host: String::from("folio"),
            greeting: vec![
                String::from("folioterm v0.2.0 -- type 'help' for commands"),
                String::new(),
            ],
        }
    }
}

impl TerminalConfig {
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Read a config file, falling back to defaults if it is missing or
    /// malformed.
    pub fn load(path: &Path) -> Self {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                log::warn!("cannot read config {}: {}", path.display(), err);
                return Self::default();
            }
        };
        match Self::from_toml(&content) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("cannot parse config {}: {}", path.display(), err);
                Self::default()
            }
        }
    }
}
