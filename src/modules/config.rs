use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult};
use crate::models::AppConfig;

const DATA_DIR: &str = ".leetdash_proxy";
const CONFIG_FILE: &str = "config.json";
const CONFIG_PATH_ENV: &str = "LEETDASH_CONFIG";

/// Get data directory path
pub fn get_data_dir() -> AppResult<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| AppError::Config("Failed to get user home directory".to_string()))?;
    let data_dir = home.join(DATA_DIR);

    // Ensure directory exists
    if !data_dir.exists() {
        fs::create_dir_all(&data_dir)?;
    }

    Ok(data_dir)
}

/// Config file location, `LEETDASH_CONFIG` wins over the data directory
pub fn get_config_path() -> AppResult<PathBuf> {
    match std::env::var(CONFIG_PATH_ENV) {
        Ok(path) if !path.trim().is_empty() => Ok(PathBuf::from(path)),
        _ => Ok(get_data_dir()?.join(CONFIG_FILE)),
    }
}

/// Load application config
pub fn load_app_config() -> AppResult<AppConfig> {
    let config_path = get_config_path()?;
    load_app_config_from(&config_path)
}

/// Load config from an explicit path, writing defaults when the file is absent
pub fn load_app_config_from(config_path: &Path) -> AppResult<AppConfig> {
    if !config_path.exists() {
        let config = AppConfig::new();
        save_app_config_to(config_path, &config)?;
        tracing::info!("Created default config at {}", config_path.display());
        return Ok(config);
    }

    let content = fs::read_to_string(config_path)?;

    serde_json::from_str(&content).map_err(|e| {
        AppError::Config(format!(
            "Failed to parse config file {}: {}",
            config_path.display(),
            e
        ))
    })
}

/// Save application config
pub fn save_app_config_to(config_path: &Path, config: &AppConfig) -> AppResult<()> {
    if let Some(parent) = config_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let content = serde_json::to_string_pretty(config)?;
    fs::write(config_path, content)?;
    Ok(())
}
