//! Configuration management
//!
//! Settings live in `settings.json` inside the qbank directory:
//! ```json
//! {
//!   "output": { "prettyJson": true }
//! }
//! ```
//! Keys this crate doesn't know about are kept as-is when saving.

use std::collections::HashMap;
use std::path::Path;

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Environment variable overriding `output.prettyJson`
pub const PRETTY_JSON_ENV: &str = "QBANK_PRETTY_JSON";

/// Raw settings.json structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SettingsFile {
    #[serde(default)]
    output: OutputSettings,
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct OutputSettings {
    #[serde(default = "default_pretty_json")]
    pretty_json: bool,
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            pretty_json: default_pretty_json(),
            other: HashMap::new(),
        }
    }
}

fn default_pretty_json() -> bool {
    true
}

/// QBank configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Indent JSON output
    pub pretty_json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pretty_json: default_pretty_json(),
        }
    }
}

impl Config {
    /// Load config from the qbank directory
    ///
    /// A missing or malformed settings file yields defaults. QBANK_PRETTY_JSON
    /// wins over whatever the file says.
    pub fn load(qbank_dir: &Path) -> Result<Self> {
        let env = std::env::var(PRETTY_JSON_ENV).ok();
        Self::load_with_override(qbank_dir, env.as_deref())
    }

    /// Load config, applying `pretty_override` the way QBANK_PRETTY_JSON is applied
    pub fn load_with_override(qbank_dir: &Path, pretty_override: Option<&str>) -> Result<Self> {
        let raw = read_settings(qbank_dir)?;
        Ok(Self::resolve(&raw, pretty_override))
    }

    fn resolve(raw: &SettingsFile, pretty_override: Option<&str>) -> Self {
        let pretty_json = match pretty_override {
            Some("true" | "1" | "yes" | "TRUE" | "YES") => true,
            Some("false" | "0" | "no" | "FALSE" | "NO") => false,
            _ => raw.output.pretty_json,
        };

        Self { pretty_json }
    }

    /// Save config to the qbank directory
    /// Preserves other settings that we don't manage
    pub fn save(&self, qbank_dir: &Path) -> Result<()> {
        let settings_path = qbank_dir.join("settings.json");
        let mut settings = read_settings(qbank_dir)?;

        settings.output.pretty_json = self.pretty_json;

        let content = serde_json::to_string_pretty(&settings)?;
        std::fs::write(&settings_path, content)?;
        Ok(())
    }
}

fn read_settings(qbank_dir: &Path) -> Result<SettingsFile> {
    let settings_path = qbank_dir.join("settings.json");
    if !settings_path.exists() {
        return Ok(SettingsFile::default());
    }

    let content = std::fs::read_to_string(&settings_path)?;
    Ok(serde_json::from_str(&content).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "settings.json is malformed, using defaults");
        SettingsFile::default()
    }))
}
