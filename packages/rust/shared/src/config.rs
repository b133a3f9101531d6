//! Application configuration for selkit.
//!
//! User config lives at `~/.selkit/selkit.toml`.
//! CLI flags override config file values, which override defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, SelkitError};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "selkit.toml";

/// Default config directory name under the user's home.
const CONFIG_DIR_NAME: &str = ".selkit";

// ---------------------------------------------------------------------------
// Config structs (matching selkit.toml schema)
// ---------------------------------------------------------------------------

/// Top-level application config, deserialized from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Global defaults.
    #[serde(default)]
    pub defaults: DefaultsConfig,

    /// Output formatting.
    #[serde(default)]
    pub output: OutputConfig,
}

/// `[defaults]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Combinator used by recipes that do not name one.
    #[serde(default = "default_combinator")]
    pub combinator: String,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            combinator: default_combinator(),
        }
    }
}

fn default_combinator() -> String {
    " ".into()
}

/// `[output]` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Indent JSON printed by the CLI.
    #[serde(default)]
    pub pretty_json: bool,
}

// ---------------------------------------------------------------------------
// Config loading
// ---------------------------------------------------------------------------

/// Get the path to the config directory (`~/.selkit/`).
pub fn config_dir() -> Result<PathBuf> {
    let home =
        dirs::home_dir().ok_or_else(|| SelkitError::config("could not determine home directory"))?;
    Ok(home.join(CONFIG_DIR_NAME))
}

/// Get the path to the config file (`~/.selkit/selkit.toml`).
pub fn config_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Load the application config from disk. Returns defaults if the file does not exist.
pub fn load_config() -> Result<AppConfig> {
    let path = config_file_path()?;

    if !path.exists() {
        tracing::debug!(?path, "config file not found, using defaults");
        return Ok(AppConfig::default());
    }

    load_config_from(&path)
}

/// Load the application config from a specific file path.
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| SelkitError::io(path, e))?;

    toml::from_str(&content)
        .map_err(|e| SelkitError::config(format!("failed to parse {}: {e}", path.display())))
}

/// Create the config directory and write a default config file.
/// Returns the path to the created file.
pub fn init_config() -> Result<PathBuf> {
    let dir = config_dir()?;
    std::fs::create_dir_all(&dir).map_err(|e| SelkitError::io(&dir, e))?;

    let path = dir.join(CONFIG_FILE_NAME);
    let config = AppConfig::default();
    let content =
        toml::to_string_pretty(&config).map_err(|e| SelkitError::config(e.to_string()))?;

    std::fs::write(&path, content).map_err(|e| SelkitError::io(&path, e))?;
    tracing::info!(?path, "created default config file");

    Ok(path)
}
