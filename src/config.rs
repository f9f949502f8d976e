//! Startup configuration, read from TOML.
//!
//! ```toml
//! initial = "#3b82f6"
//! history = ["#3b82f6", "#ef4444"]
//! history_capacity = 10
//!
//! [canvas]
//! width = 400
//! height = 300
//! ```
//!
//! Every key is optional.

use std::path::Path;

use serde::Deserialize;

use crate::{
    error::ConfigError,
    hex::parse_hex,
    history,
    math::Size,
    spectrum::{self, Spectrum},
};

/// Largest history capacity a config may ask for.
pub const MAX_HISTORY_CAPACITY: usize = 100;

/// Largest spectrum canvas width or height a config may ask for.
pub const MAX_CANVAS_SIZE: u32 = 8192;

/// Startup configuration for a [`Picker`](crate::Picker).
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// The color selected at startup, as hex.
    pub initial: String,
    /// Colors the history starts with, most recent first.
    pub history: Vec<String>,
    /// Maximum number of history entries.
    pub history_capacity: usize,
    /// Size of the spectrum canvas.
    pub canvas: CanvasConfig,
}

/// Size of the spectrum canvas, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CanvasConfig {
    /// Canvas width.
    pub width: u32,
    /// Canvas height.
    pub height: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            initial: "#3b82f6".to_owned(),
            history: history::SEED.iter().map(|s| s.to_string()).collect(),
            history_capacity: history::CAPACITY,
            canvas: CanvasConfig::default(),
        }
    }
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: spectrum::DEFAULT_WIDTH,
            height: spectrum::DEFAULT_HEIGHT,
        }
    }
}

impl Config {
    /// Parse and validate a config from TOML text.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("loaded config from {}", path.display());
        Self::from_toml(&text)
    }

    /// Check that every color in the config is valid hex and every size is
    /// within its bounds.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let check = |key: &'static str, value: &String| {
            parse_hex(value).map(drop).map_err(|source| ConfigError::Color {
                key,
                value: value.clone(),
                source,
            })
        };

        check("initial", &self.initial)?;
        self.history.iter().try_for_each(|c| check("history", c))?;

        in_range("history_capacity", self.history_capacity as u64, MAX_HISTORY_CAPACITY as u64)?;
        in_range("canvas.width", self.canvas.width.into(), MAX_CANVAS_SIZE.into())?;
        in_range("canvas.height", self.canvas.height.into(), MAX_CANVAS_SIZE.into())
    }

    /// The spectrum canvas described by this config.
    pub fn spectrum(&self) -> Spectrum {
        Spectrum::new(Size::new(self.canvas.width, self.canvas.height))
    }
}

fn in_range(key: &'static str, value: u64, max: u64) -> Result<(), ConfigError> {
    if (1..=max).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange { key, value, min: 1, max })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseHexError;

    #[test]
    fn empty_config_is_default() {
        assert_eq!(Config::from_toml("").unwrap(), Config::default());
    }

    #[test]
    fn partial_config() {
        let config = Config::from_toml(
            r##"
            initial = "#FF0000"
            history_capacity = 3

            [canvas]
            width = 100
            "##,
        )
        .unwrap();

        assert_eq!(config.initial, "#FF0000");
        assert_eq!(config.history_capacity, 3);
        assert_eq!(config.history.len(), 5);
        assert_eq!(config.canvas, CanvasConfig { width: 100, height: 300 });
        assert_eq!(config.spectrum().size(), Size::new(100, 300));
    }

    #[test]
    fn invalid_colors_are_rejected() {
        let err = Config::from_toml(r##"history = ["#ffffff", "#ggg"]"##).unwrap_err();
        match err {
            ConfigError::Color { key, value, source } => {
                assert_eq!(key, "history");
                assert_eq!(value, "#ggg");
                assert_eq!(source, ParseHexError::InvalidDigit('g', 0));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn sizes_out_of_range_are_rejected() {
        let rejected = |text: &str| match Config::from_toml(text) {
            Err(ConfigError::OutOfRange { key, value, .. }) => (key, value),
            other => panic!("unexpected result for {text:?}: {other:?}"),
        };

        assert_eq!(rejected("history_capacity = 0"), ("history_capacity", 0));
        assert_eq!(rejected("history_capacity = 101"), ("history_capacity", 101));
        assert_eq!(
            rejected("history_capacity = 9223372036854775807"),
            ("history_capacity", 9223372036854775807)
        );
        assert_eq!(rejected("canvas = { width = 0 }"), ("canvas.width", 0));
        assert_eq!(rejected("canvas = { height = 0 }"), ("canvas.height", 0));
        assert_eq!(rejected("canvas = { width = 8193 }"), ("canvas.width", 8193));
        assert_eq!(rejected("canvas = { height = 4000000000 }"), ("canvas.height", 4000000000));
    }

    #[test]
    fn sizes_at_the_bounds_are_accepted() {
        let config = Config::from_toml(
            r##"
            history_capacity = 100

            [canvas]
            width = 8192
            height = 1
            "##,
        )
        .unwrap();
        assert_eq!(config.history_capacity, MAX_HISTORY_CAPACITY);
        assert_eq!(config.canvas, CanvasConfig { width: MAX_CANVAS_SIZE, height: 1 });
        assert!(Config::from_toml("history_capacity = 1").is_ok());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(matches!(
            Config::from_toml("colour = \"#ffffff\""),
            Err(ConfigError::Toml(_))
        ));
    }

    #[test]
    fn missing_file() {
        assert!(matches!(
            Config::load("/definitely/not/here.toml"),
            Err(ConfigError::Io { .. })
        ));
    }
}
