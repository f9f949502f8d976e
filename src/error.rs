//! Errors returned at the fallible edges of the crate. The conversion
//! functions themselves never fail.

use std::path::PathBuf;

/// Why a string could not be read as a hex color.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseHexError {
    /// The leading `#` was required but not present.
    #[error("hex color must start with '#'")]
    MissingHash,
    /// A character that is not a hex digit was found at the given byte
    /// offset (after any `#`).
    #[error("invalid hex digit {0:?} at offset {1}")]
    InvalidDigit(char, usize),
    /// The number of digits was not 6.
    #[error("hex color must have 6 digits, found {0}")]
    InvalidLength(usize),
}

/// Errors raised by the [`Picker`](crate::Picker) controller.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PickerError {
    /// An eye-dropper acquisition is already in progress.
    #[error("an eye-dropper pick is already in progress")]
    Busy,
}

/// Errors raised while loading a [`Config`](crate::Config).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("could not read config file {path}")]
    Io {
        /// The file that failed to read.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },
    /// The config was not valid TOML or did not match the expected shape.
    #[error("invalid config")]
    Toml(#[from] toml::de::Error),
    /// A color in the config could not be parsed.
    #[error("invalid color {value:?} in config key `{key}`")]
    Color {
        /// The config key holding the color.
        key: &'static str,
        /// The offending value.
        value: String,
        /// Why it was rejected.
        #[source]
        source: ParseHexError,
    },
    /// A number in the config was outside its allowed range.
    #[error("config key `{key}` is {value}, expected {min}..={max}")]
    OutOfRange {
        /// The config key holding the number.
        key: &'static str,
        /// The offending value.
        value: u64,
        /// Smallest allowed value.
        min: u64,
        /// Largest allowed value.
        max: u64,
    },
}
