use std::{env, fs, path::PathBuf};
use serde::Deserialize;
use thiserror::Error;

const SETTINGS_FILENAME: &str = "settings.json";
const SETTINGS_ENV_VAR: &str = "LAUNCHPAD_SETTINGS";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("cannot read settings file {path}: {source}")]
    Read { path: String, source: std::io::Error },
    #[error("cannot parse settings file {path}: {source}")]
    Parse { path: String, source: serde_json::Error },
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub tcp_socket_binding: String,
    pub tcp_socket_port: u16,
    pub database_path: String,
    pub static_files_dir: Option<String>,
    pub jwt_secret: String,
    pub jwt_expiration_in_minutes: u64,
    pub default_admin_email: String,
    pub default_admin_password: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tcp_socket_binding: "0.0.0.0".to_string(),
            tcp_socket_port: 7053,
            database_path: "launchpad.redb".to_string(),
            static_files_dir: None,
            jwt_secret: "change-me".to_string(),
            jwt_expiration_in_minutes: 1440,
            default_admin_email: "admin@launchpad.local".to_string(),
            default_admin_password: "admin".to_string(),
        }
    }
}

impl Settings {
    /// Reads `settings.json`, or the file named by `LAUNCHPAD_SETTINGS`.
    pub fn load() -> Result<Settings, SettingsError> {
        let path = env::var(SETTINGS_ENV_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(SETTINGS_FILENAME));
        Self::load_from(&path)
    }

    pub fn load_from(path: &std::path::Path) -> Result<Settings, SettingsError> {
        let display = path.display().to_string();
        let content = fs::read_to_string(path)
            .map_err(|source| SettingsError::Read { path: display.clone(), source })?;
        serde_json::from_str(&content).map_err(|source| SettingsError::Parse { path: display, source })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.tcp_socket_binding, self.tcp_socket_port)
    }
}
