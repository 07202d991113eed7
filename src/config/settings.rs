//! Application settings
//!
//! TOML-backed settings for the engine's external boundaries: the
//! avatar-imaging endpoint, the clothing-catalog API and the local asset
//! directory. Stored under the platform config directory.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::figure::AvatarSize;

const CONFIG_FILE: &str = "settings.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Avatar-imaging endpoint that renders figure strings
    pub imaging_base_url: String,
    /// Clothing-catalog API returning raw item records
    pub catalog_api_url: String,
    /// Root directory of bundled literal assets
    pub assets_dir: PathBuf,
    /// Bound on catalog fetches and thumbnail source probes, in seconds
    pub http_timeout_secs: u64,
    pub user_agent: String,
    /// Preview size applied to new editing sessions
    pub default_size: AvatarSize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            imaging_base_url: "https://imaging.example.net/avatarimage".to_string(),
            catalog_api_url: "https://catalog.example.net/api/items".to_string(),
            assets_dir: PathBuf::from("assets"),
            http_timeout_secs: 8,
            user_agent: format!("avatar-studio/{}", env!("CARGO_PKG_VERSION")),
            default_size: AvatarSize::Medium,
        }
    }
}

impl Settings {
    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }

    /// Build the shared HTTP client configured from these settings
    pub fn http_client(&self) -> reqwest::Result<reqwest::Client> {
        reqwest::Client::builder()
            .user_agent(self.user_agent.clone())
            .timeout(self.http_timeout())
            .build()
    }
}

fn config_path() -> Option<PathBuf> {
    ProjectDirs::from("net", "avatar-studio", "avatar-studio")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE))
}

/// Load settings from the config directory, falling back to defaults when
/// the file is missing or unreadable
pub fn load_settings() -> Settings {
    let Some(path) = config_path() else {
        warn!("⚙️ No config directory available, using default settings");
        return Settings::default();
    };

    match fs::read_to_string(&path) {
        Ok(raw) => match toml::from_str(&raw) {
            Ok(settings) => {
                debug!("⚙️ Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                warn!("⚙️ Failed to parse {}: {}, using defaults", path.display(), e);
                Settings::default()
            }
        },
        Err(_) => {
            debug!("⚙️ No settings file at {}, using defaults", path.display());
            Settings::default()
        }
    }
}

/// Persist settings to the config directory
pub fn save_settings(settings: &Settings) -> std::io::Result<()> {
    let Some(path) = config_path() else {
        return Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "no config directory available",
        ));
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let raw = toml::to_string_pretty(settings)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
    fs::write(&path, raw)?;
    debug!("⚙️ Saved settings to {}", path.display());
    Ok(())
}
