use std::path::Path;

use anyhow::Result;
use serde::Deserialize;

#[derive(Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Characters kept per abbreviated path component; 0 disables abbreviation.
    pub pwd_dir_length: Option<usize>,
    pub colors: Colors,
}

/// Color name per prompt role. Any unset role uses its built-in default;
/// `cwd_root` has none and falls back to `cwd`.
#[derive(Deserialize, Default)]
#[serde(default)]
pub struct Colors {
    pub host: Option<String>,
    pub cwd: Option<String>,
    pub cwd_root: Option<String>,
    pub status: Option<String>,
}

impl Config {
    pub fn pwd_dir_length(&self) -> usize {
        self.pwd_dir_length.unwrap_or(1)
    }
}

pub fn load_config() -> Result<Config> {
    let Some(config_dir) = dirs::config_dir() else {
        return Ok(Config::default());
    };
    read_config(&config_dir.join("promptr").join("config.toml"))
}

fn read_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }
    let contents = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&contents)?;
    Ok(config)
}
