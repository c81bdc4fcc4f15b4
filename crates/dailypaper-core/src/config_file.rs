use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// On-disk TOML configuration structure.
/// All fields are optional so partial configs work (merge with defaults).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    pub sources: Option<SourcesConfig>,
    pub display: Option<DisplayConfig>,
    pub web: Option<WebConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourcesConfig {
    pub remote_base_url: Option<String>,
    pub remote_enabled: Option<bool>,
    pub local_dir: Option<String>,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub theme: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WebConfig {
    pub bind: Option<String>,
}

/// Platform config directory path: `<config_dir>/dailypaper/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("dailypaper").join("config.toml"))
}

/// Load config by cascading CWD `.dailypaper.toml` over platform config.
/// CWD values override platform values.
pub fn load_config() -> ConfigFile {
    let platform = config_path().and_then(|p| load_from_path(&p));
    let cwd = load_from_path(Path::new(".dailypaper.toml"));

    match (platform, cwd) {
        (None, None) => ConfigFile::default(),
        (Some(p), None) => p,
        (None, Some(c)) => c,
        (Some(p), Some(c)) => merge(p, c),
    }
}

/// Load a config from a specific path. Returns `None` if the file doesn't
/// exist or can't be parsed.
pub fn load_from_path(path: &Path) -> Option<ConfigFile> {
    let content = std::fs::read_to_string(path).ok()?;
    match toml::from_str(&content) {
        Ok(config) => Some(config),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "ignoring unparsable config file");
            None
        }
    }
}

/// Merge two configs: `overlay` values take precedence over `base`.
pub fn merge(base: ConfigFile, overlay: ConfigFile) -> ConfigFile {
    let base_sources = base.sources.unwrap_or_default();
    let overlay_sources = overlay.sources.unwrap_or_default();
    let base_display = base.display.unwrap_or_default();
    let overlay_display = overlay.display.unwrap_or_default();
    let base_web = base.web.unwrap_or_default();
    let overlay_web = overlay.web.unwrap_or_default();

    ConfigFile {
        sources: Some(SourcesConfig {
            remote_base_url: overlay_sources
                .remote_base_url
                .or(base_sources.remote_base_url),
            remote_enabled: overlay_sources.remote_enabled.or(base_sources.remote_enabled),
            local_dir: overlay_sources.local_dir.or(base_sources.local_dir),
            timeout_secs: overlay_sources.timeout_secs.or(base_sources.timeout_secs),
        }),
        display: Some(DisplayConfig {
            theme: overlay_display.theme.or(base_display.theme),
        }),
        web: Some(WebConfig {
            bind: overlay_web.bind.or(base_web.bind),
        }),
    }
}

/// Save the config to the platform config directory.
pub fn save_config(config: &ConfigFile) -> Result<PathBuf, String> {
    let path = config_path().ok_or_else(|| "Could not determine config directory".to_string())?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| format!("Failed to create config directory: {}", e))?;
    }
    let content =
        toml::to_string_pretty(config).map_err(|e| format!("Failed to serialize config: {}", e))?;
    std::fs::write(&path, content).map_err(|e| format!("Failed to write config: {}", e))?;
    Ok(path)
}
