//! chromapick keeps a picked color consistent across the hex, RGB, HSL and HSV
//! notations.
//!
//! RGB is the single source of truth. Every input, whether a slider, typed
//! text, a canvas click, an eye-dropper result or a history entry, is reduced
//! to an RGB triple and passed through [`normalize`], which derives the other
//! notations from it.
//!
//! ```rust
//! use chromapick::{Channel, Format, Picker};
//! let mut picker = Picker::new();
//! picker.set_channel(Channel::Red, 255);
//! assert_eq!(picker.copy(Format::Hex), "#ff82f6");
//! assert_eq!(picker.copy(Format::Rgb), "rgb(255, 130, 246)");
//! ```

#![deny(missing_docs)]

mod color;
mod config;
mod convert;
mod error;
mod eyedropper;
mod hex;
mod history;
mod math;
mod models;
mod picker;
mod spectrum;

#[cfg(test)]
mod test;

pub use color::{normalize, Color, Component, Format};
pub use config::{CanvasConfig, Config, MAX_CANVAS_SIZE, MAX_HISTORY_CAPACITY};
pub use convert::{hsl_to_rgb, rgb_to_hsl, rgb_to_hsv};
pub use error::{ConfigError, ParseHexError, PickerError};
pub use eyedropper::{EyeDropper, Pick, Unsupported};
pub use hex::{hex_to_rgb, parse_hex, parse_hex_strict, rgb_to_hex};
pub use history::{add_to_history, add_to_history_capped, History};
pub use math::{Point, Size};
pub use models::{Channel, Hsl, HslComponent, Hsv, Rgb};
pub use picker::{Changes, Picker, SubscriptionId};
pub use spectrum::Spectrum;

/// Default number of history entries.
pub const HISTORY_CAPACITY: usize = history::CAPACITY;

/// Colors a fresh history starts with.
pub const HISTORY_SEED: [&str; 5] = history::SEED;
