//! Where tedit keeps its config file and logs

use std::{env, fs, path::PathBuf};

use anyhow::{anyhow, Context, Result};

const APP_DIR: &str = "tedit";

/// Base name of the daily-rotated log file
pub const LOG_FILE_NAME: &str = "tedit.log";

/// `$XDG_CONFIG_HOME/tedit`, falling back to `~/.config/tedit`;
/// `%APPDATA%\tedit` on Windows
pub fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        env::var("APPDATA")
            .ok()
            .map(|appdata| PathBuf::from(appdata).join(APP_DIR))
    }

    #[cfg(not(target_os = "windows"))]
    {
        env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
            .map(|config| config.join(APP_DIR))
    }
}

/// `~/.config/tedit/config.yaml`
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.yaml"))
}

/// `~/.config/tedit/logs/`
pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("logs"))
}

/// Create the logs directory if needed and return it
pub fn ensure_logs_dir() -> Result<PathBuf> {
    let logs = logs_dir().ok_or_else(|| anyhow!("cannot resolve a config directory"))?;
    fs::create_dir_all(&logs)
        .with_context(|| format!("creating log directory {}", logs.display()))?;
    Ok(logs)
}
