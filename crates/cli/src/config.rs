//! Configuration parsing and validation.
//!
//! Handles lexiscan.toml parsing with version validation and unknown key warnings.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::cipher::FrequencyTable;
use crate::error::{Error, Result};
use crate::spell::SpellOptions;

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_FILE_NAME: &str = "lexiscan.toml";

/// Currently supported config version.
pub const SUPPORTED_VERSION: i64 = 1;

/// Known keys per section; the empty section name is the top level.
const KNOWN_KEYS: &[(&str, &[&str])] = &[
    ("", &["version", "spell", "cipher", "output"]),
    ("spell", &["dictionary", "max_distance", "max_suggestions"]),
    ("cipher", &["frequencies"]),
    ("output", &["limit"]),
];

/// Minimum config structure for version checking.
#[derive(Deserialize)]
struct VersionOnly {
    version: Option<i64>,
}

/// Full configuration.
#[derive(Debug, Deserialize)]
pub struct Config {
    /// Config file version (must be 1).
    pub version: i64,

    #[serde(default)]
    pub spell: SpellConfig,

    #[serde(default)]
    pub cipher: CipherConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: SUPPORTED_VERSION,
            spell: SpellConfig::default(),
            cipher: CipherConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

/// Spell check configuration.
#[derive(Debug, Deserialize)]
pub struct SpellConfig {
    /// Word list, one entry per line (default: pt_BR.dic).
    #[serde(default = "SpellConfig::default_dictionary")]
    pub dictionary: PathBuf,

    /// Largest edit distance for suggestions (default: 2).
    #[serde(default = "SpellConfig::default_max_distance")]
    pub max_distance: usize,

    /// Suggestions shown per unknown word (default: 3).
    #[serde(default = "SpellConfig::default_max_suggestions")]
    pub max_suggestions: usize,
}

impl Default for SpellConfig {
    fn default() -> Self {
        Self {
            dictionary: Self::default_dictionary(),
            max_distance: Self::default_max_distance(),
            max_suggestions: Self::default_max_suggestions(),
        }
    }
}

impl SpellConfig {
    fn default_dictionary() -> PathBuf {
        PathBuf::from("pt_BR.dic")
    }

    fn default_max_distance() -> usize {
        2
    }

    fn default_max_suggestions() -> usize {
        3
    }

    pub fn options(&self) -> SpellOptions {
        SpellOptions {
            max_distance: self.max_distance,
            max_suggestions: self.max_suggestions,
        }
    }
}

/// Cipher configuration.
#[derive(Debug, Default, Deserialize)]
pub struct CipherConfig {
    /// Letter frequency order used when cracking (default: English).
    #[serde(default)]
    pub frequencies: FrequencyTable,
}

/// Output configuration.
#[derive(Debug, Deserialize)]
pub struct OutputConfig {
    /// Maximum entries shown per report (default: 50).
    #[serde(default = "OutputConfig::default_limit")]
    pub limit: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            limit: Self::default_limit(),
        }
    }
}

impl OutputConfig {
    fn default_limit() -> usize {
        50
    }
}

/// Find and load the config.
///
/// An explicit path must exist. Otherwise `lexiscan.toml` in `dir` is used
/// when present, and defaults apply when it is not. A relative dictionary
/// path is resolved against the config file's directory.
pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Config> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => {
            let candidate = dir.join(DEFAULT_FILE_NAME);
            if !candidate.is_file() {
                tracing::debug!("no config file, using defaults");
                return Ok(Config::default());
            }
            candidate
        }
    };

    let mut config = load_with_warnings(&path)?;
    if config.spell.dictionary.is_relative()
        && let Some(parent) = path.parent()
    {
        config.spell.dictionary = parent.join(&config.spell.dictionary);
    }
    tracing::debug!(path = %path.display(), "loaded config");
    Ok(config)
}

/// Load config with warnings for unknown keys.
pub fn load_with_warnings(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse_with_warnings(&content, path)
}

/// Parse config from string content (strict mode).
pub fn parse(content: &str, path: &Path) -> Result<Config> {
    let config_error = |message: String| Error::Config {
        message,
        path: Some(path.to_path_buf()),
    };

    let version_check: VersionOnly =
        toml::from_str(content).map_err(|e| config_error(e.to_string()))?;

    let version = version_check
        .version
        .ok_or_else(|| config_error("missing required field: version".to_string()))?;

    if version != SUPPORTED_VERSION {
        return Err(config_error(format!(
            "unsupported config version {} (supported: {})\n  Upgrade lexiscan to use this config.",
            version, SUPPORTED_VERSION
        )));
    }

    toml::from_str(content).map_err(|e| config_error(e.to_string()))
}

/// Parse config, warning on unknown keys.
pub fn parse_with_warnings(content: &str, path: &Path) -> Result<Config> {
    let config = parse(content, path)?;

    // `parse` already proved the content is valid TOML.
    if let Ok(table) = content.parse::<toml::Table>() {
        for key in unknown_keys(&table) {
            warn_unknown_key(path, &key);
        }
    }

    Ok(config)
}

/// Dotted names of keys not recognised by any section.
fn unknown_keys(table: &toml::Table) -> Vec<String> {
    let known = |section: &str| {
        KNOWN_KEYS
            .iter()
            .find(|(name, _)| *name == section)
            .map(|(_, keys)| *keys)
            .unwrap_or_default()
    };

    let mut unknown = Vec::new();
    for (key, value) in table {
        if !known("").contains(&key.as_str()) {
            unknown.push(key.clone());
            continue;
        }
        if let toml::Value::Table(section) = value {
            let section_keys = known(key);
            unknown.extend(
                section
                    .keys()
                    .filter(|k| !section_keys.contains(&k.as_str()))
                    .map(|k| format!("{}.{}", key, k)),
            );
        }
    }
    unknown
}

fn warn_unknown_key(path: &Path, key: &str) {
    eprintln!(
        "lexiscan: warning: {}: unrecognized field `{}` (ignored)",
        path.display(),
        key
    );
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
