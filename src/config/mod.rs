mod types;

pub use types::*;

use crate::{Error, Result};
use std::path::Path;

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        Error::config(format!("Failed to read config file {:?}: {}", path, e))
    })?;

    let mut config: Config = toml::from_str(&content).map_err(|e| {
        Error::config(format!("Failed to parse config file {:?}: {}", path, e))
    })?;

    expand_paths(&mut config);
    validate_config(&config);

    Ok(config)
}

/// Load config from default locations or return default config
pub fn load_config_or_default(custom_path: Option<&Path>) -> Result<Config> {
    if let Some(path) = custom_path {
        return load_config(path);
    }

    // Try default locations
    let default_paths = [
        "./mediainfo.toml",
        "~/.config/mediainfo-wrapper/config.toml",
    ];

    for path_str in default_paths {
        let path = shellexpand::tilde(path_str);
        let path = Path::new(path.as_ref());
        if path.exists() {
            return load_config(path);
        }
    }

    Ok(Config::default())
}

fn expand_paths(config: &mut Config) {
    if let Some(path) = &config.library.path {
        let expanded = shellexpand::tilde(&path.to_string_lossy()).into_owned();
        config.library.path = Some(expanded.into());
    }
}

/// Validate configuration
fn validate_config(config: &Config) {
    if let Some(path) = &config.library.path {
        if !mediainfo_native::library::is_plausible_library_path(path) {
            tracing::warn!("Configured MediaInfo library does not exist: {:?}", path);
        }
    }
}
