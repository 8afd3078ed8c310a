use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, warn};

use super::error::ConfigError;
use crate::domain::map_settings::{MAX_ZOOM, MapSettings};

pub const LONDON_TITLE: &str = "London Neighborhoods Map";
pub const FASKIS_TITLE: &str = "VISIT FASKIS!";

/// Overrides the heading after the config file is read.
pub const TITLE_ENV_VAR: &str = "NEIGHBORHOOD_MAP_TITLE";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PageConfig {
    /// Text of the page heading
    pub title: String,

    /// Settings handed to the map surface through context
    pub map: MapSettings,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self::london()
    }
}

impl PageConfig {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            map: MapSettings::default(),
        }
    }

    pub fn london() -> Self {
        Self::new(LONDON_TITLE)
    }

    pub fn faskis() -> Self {
        Self::new(FASKIS_TITLE)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.title.trim().is_empty() {
            return Err(ConfigError::invalid("title", "must not be blank"));
        }

        let map = &self.map;
        if !map.has_valid_container_id() {
            return Err(ConfigError::invalid(
                "map.container_id",
                format!("{:?} is not a usable element id", map.container_id),
            ));
        }
        if !map.center.is_valid() {
            return Err(ConfigError::invalid(
                "map.center",
                format!("({}, {}) is out of range", map.center.lat, map.center.lng),
            ));
        }
        if map.zoom > MAX_ZOOM {
            return Err(ConfigError::invalid(
                "map.zoom",
                format!("{} exceeds the maximum of {}", map.zoom, MAX_ZOOM),
            ));
        }
        if map.height_px == 0 {
            return Err(ConfigError::invalid("map.height_px", "must be positive"));
        }
        if !map.has_tile_placeholders() {
            return Err(ConfigError::invalid(
                "map.tile_url",
                "must contain {z}, {x} and {y}",
            ));
        }

        Ok(())
    }

    /// Parse a TOML config file. Missing keys keep their defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Self = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        debug!(?path, title = %config.title, "Loaded page config");
        Ok(config)
    }

    /// Save configuration to file
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| ConfigError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        info!(?path, "Configuration saved");
        Ok(())
    }

    /// Load from the default location.
    ///
    /// A missing or unusable config directory never blocks the page: the
    /// defaults are used and writing them out is best effort. Only a file
    /// that exists but cannot be read or parsed is an error.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_or_default(Self::config_path().ok().as_deref())
    }

    /// Get the configuration file path
    #[cfg(not(target_arch = "wasm32"))]
    pub fn config_path() -> Result<std::path::PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(Self::config_path_in(&config_dir))
    }

    fn config_path_in(config_dir: &Path) -> std::path::PathBuf {
        config_dir.join("neighborhood-map").join("config.toml")
    }

    fn load_or_default(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(config_path) = config_path else {
            warn!("No config directory; using default page config");
            return Ok(Self::default());
        };

        if config_path.is_file() {
            return Self::load_from(config_path);
        }

        let default_config = Self::default();
        if let Err(e) = default_config.save_to(config_path) {
            warn!(path = ?config_path, error = %e, "Could not write default config");
        }
        Ok(default_config)
    }

    /// Apply `NEIGHBORHOOD_MAP_TITLE` from the given lookup. Blank values are ignored.
    pub fn with_env_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(title) = lookup(TITLE_ENV_VAR).filter(|t| !t.trim().is_empty()) {
            debug!(%title, "Title overridden from environment");
            self.title = title;
        }
        self
    }

    /// Browser builds have no file system or process environment, so the
    /// override is baked in at compile time instead.
    pub fn from_build_env() -> Self {
        Self::default().with_env_overrides(|key| match key {
            TITLE_ENV_VAR => option_env!("NEIGHBORHOOD_MAP_TITLE").map(str::to_string),
            _ => None,
        })
    }

    /// Resolve the config for a native launch: file, then environment, then
    /// command line, validated last.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn resolve(args: &super::cli::CliArgs) -> Result<Self, ConfigError> {
        Self::resolve_with(args, dirs::config_dir().as_deref(), |key| {
            std::env::var(key).ok()
        })
    }

    /// `resolve` with the config directory and environment supplied by the caller.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn resolve_with<F>(
        args: &super::cli::CliArgs,
        config_dir: Option<&Path>,
        env: F,
    ) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = match &args.config {
            Some(path) => Self::load_from(path)?,
            None => {
                let default_path = config_dir.map(Self::config_path_in);
                Self::load_or_default(default_path.as_deref())?
            }
        };

        let mut config = config.with_env_overrides(env);
        if let Some(title) = &args.title {
            config.title = title.clone();
        }

        config.validate()?;
        Ok(config)
    }
}
