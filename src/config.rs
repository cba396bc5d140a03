use serde::{Deserialize, Serialize};
use directories::ProjectDirs;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::warn;

// Default configuration
pub const DEFAULT_USER_AGENT: &str = concat!("chat-row/", env!("CARGO_PKG_VERSION"));
pub const DEFAULT_AVATAR_SIZE: f32 = 36.0;
pub const DEFAULT_MAX_AVATAR_BYTES: u64 = 2 * 1024 * 1024;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// "dark" or "light"
    pub theme: String,
    /// Avatar diameter in points
    pub avatar_size: f32,
    pub user_agent: String,
    /// Larger avatar downloads are abandoned
    pub max_avatar_bytes: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            avatar_size: DEFAULT_AVATAR_SIZE,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            max_avatar_bytes: DEFAULT_MAX_AVATAR_BYTES,
        }
    }
}

pub fn settings_path() -> Option<PathBuf> {
    if let Some(proj) = ProjectDirs::from("com", "chat-row", "chat-row") {
        let dir = proj.config_dir();
        if let Err(e) = fs::create_dir_all(dir) {
            warn!("Failed to create config dir: {}", e);
            return None;
        }
        return Some(dir.join("settings.json"));
    }
    None
}

/// Load settings, falling back to defaults when the file is missing or broken
pub fn load_settings() -> Settings {
    settings_path()
        .and_then(|path| load_settings_from(&path))
        .unwrap_or_default()
}

pub fn load_settings_from(path: &Path) -> Option<Settings> {
    let content = fs::read_to_string(path).ok()?;
    match serde_json::from_str(&content) {
        Ok(settings) => Some(settings),
        Err(e) => {
            warn!("Ignoring malformed settings at {}: {}", path.display(), e);
            None
        }
    }
}

pub fn save_settings(settings: &Settings) -> std::io::Result<()> {
    if let Some(path) = settings_path() {
        save_settings_to(settings, &path)?;
    }
    Ok(())
}

pub fn save_settings_to(settings: &Settings, path: &Path) -> std::io::Result<()> {
    let data = serde_json::to_string_pretty(settings)?;
    let mut file = fs::File::create(path)?;
    file.write_all(data.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{ "theme": "light" }"#).unwrap();

        let settings = load_settings_from(&path).unwrap();
        assert_eq!(settings.theme, "light");
        assert_eq!(settings.avatar_size, DEFAULT_AVATAR_SIZE);
        assert_eq!(settings.max_avatar_bytes, DEFAULT_MAX_AVATAR_BYTES);
    }

    #[test]
    fn test_malformed_file_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(load_settings_from(&path).is_none());
        assert!(load_settings_from(&dir.path().join("missing.json")).is_none());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let settings = Settings {
            avatar_size: 48.0,
            ..Settings::default()
        };
        save_settings_to(&settings, &path).unwrap();
        assert_eq!(load_settings_from(&path), Some(settings));
    }
}
