//! A [`Color`] is an immutable snapshot holding the same color in every
//! notation the picker displays.

use std::fmt;

use crate::hex::hex_to_rgb;
use crate::models::{Hsl, Hsv, Rgb};

/// A 64-bit floating point value used for intermediate conversion math.
pub type Component = f64;

/// A color in hex, RGB, HSL and HSV notations, all derived from the same RGB
/// triple. The only way to build one is [`normalize`] (or the helpers that
/// call it), so the four notations never disagree.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    hex: String,
    rgb: Rgb,
    hsl: Hsl,
    hsv: Hsv,
}

/// Build a [`Color`] snapshot from raw channel values. Each channel is clamped
/// into `[0,255]` before the other notations are derived from it.
///
/// ```rust
/// use chromapick::{normalize, Hsl, Hsv};
/// let color = normalize(59, 130, 246);
/// assert_eq!(color.hex(), "#3b82f6");
/// assert_eq!(color.hsl(), Hsl::new(217, 91, 60));
/// assert_eq!(color.hsv(), Hsv::new(217, 76, 96));
/// ```
pub fn normalize(red: i32, green: i32, blue: i32) -> Color {
    Color::from_rgb(Rgb::clamped(red, green, blue))
}

impl Color {
    /// Build a snapshot from an RGB color.
    pub fn from_rgb(rgb: Rgb) -> Self {
        Self {
            hex: rgb.to_hex(),
            rgb,
            hsl: rgb.to_hsl(),
            hsv: rgb.to_hsv(),
        }
    }

    /// Build a snapshot from a hex string. Unreadable input yields black, see
    /// [`hex_to_rgb`].
    pub fn from_hex(hex: &str) -> Self {
        Self::from_rgb(hex_to_rgb(hex))
    }

    /// Build a snapshot from the HSL notation, going through RGB.
    pub fn from_hsl(hue: i32, saturation: i32, lightness: i32) -> Self {
        Self::from_rgb(crate::hsl_to_rgb(hue, saturation, lightness))
    }

    /// The color as `#rrggbb`, lowercase.
    pub fn hex(&self) -> &str {
        &self.hex
    }

    /// The color as 8-bit RGB channels.
    pub fn rgb(&self) -> Rgb {
        self.rgb
    }

    /// The color in the HSL notation.
    pub fn hsl(&self) -> Hsl {
        self.hsl
    }

    /// The color in the HSV notation.
    pub fn hsv(&self) -> Hsv {
        self.hsv
    }

    /// Render the color as text in the given format, e.g. for the clipboard.
    pub fn format(&self, format: Format) -> String {
        match format {
            Format::Hex => self.hex.clone(),
            Format::Rgb => {
                let Rgb { red, green, blue } = self.rgb;
                format!("rgb({red}, {green}, {blue})")
            }
            Format::Hsl => {
                let Hsl {
                    hue,
                    saturation,
                    lightness,
                } = self.hsl;
                format!("hsl({hue}, {saturation}%, {lightness}%)")
            }
            Format::Hsv => {
                let Hsv {
                    hue,
                    saturation,
                    value,
                } = self.hsv;
                format!("hsv({hue}, {saturation}%, {value}%)")
            }
        }
    }
}

impl Default for Color {
    /// The picker's starting color, `#3b82f6`.
    fn default() -> Self {
        normalize(59, 130, 246)
    }
}

impl From<Rgb> for Color {
    fn from(value: Rgb) -> Self {
        Self::from_rgb(value)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex)
    }
}

/// Text formats a [`Color`] can be rendered in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Format {
    /// `#3b82f6`
    Hex,
    /// `rgb(59, 130, 246)`
    Rgb,
    /// `hsl(217, 91%, 60%)`
    Hsl,
    /// `hsv(217, 76%, 96%)`
    Hsv,
}

impl Format {
    /// All formats, in display order.
    pub const ALL: [Format; 4] = [Format::Hex, Format::Rgb, Format::Hsl, Format::Hsv];

    /// A short label for the format.
    pub fn label(&self) -> &'static str {
        match self {
            Format::Hex => "HEX",
            Format::Rgb => "RGB",
            Format::Hsl => "HSL",
            Format::Hsv => "HSV",
        }
    }
}
