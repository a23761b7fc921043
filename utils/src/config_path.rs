use anyhow::{anyhow, Result};
use std::path::PathBuf;

/// Get the path to the cfkvs config directory
/// On macOS: ~/Library/Application Support/cfkvs
/// On Linux: ~/.config/cfkvs
/// On Windows: %APPDATA%\cfkvs
pub fn get_config_dir() -> Result<PathBuf> {
    let mut path = dirs::config_dir().ok_or_else(|| anyhow!("Could not find config directory"))?;
    path.push("cfkvs");
    Ok(path)
}

pub fn get_config_path() -> Result<PathBuf> {
    let mut path = get_config_dir()?;
    path.push("config.json");
    Ok(path)
}
