//! Hexadecimal notation for 8-bit RGB colors, e.g. `#3b82f6`.
//!
//! Two parsers are provided. [`hex_to_rgb`] is lenient: anything it can not
//! read yields black. [`parse_hex`] (and `str::parse::<Rgb>()`) reports why
//! the input was rejected.

use std::str::FromStr;

use crate::error::ParseHexError;
use crate::math::clamp_channel;
use crate::models::Rgb;

/// Number of hex digits in a color, excluding the `#`.
const DIGITS: usize = 6;

/// Format the channels as `#rrggbb`. Channels are clamped into `[0,255]`
/// first.
pub fn rgb_to_hex(red: i32, green: i32, blue: i32) -> String {
    format!(
        "#{:02x}{:02x}{:02x}",
        clamp_channel(red),
        clamp_channel(green),
        clamp_channel(blue)
    )
}

/// Read a color from an optional `#` followed by exactly 6 hex digits, in any
/// case. Input that does not match yields black.
pub fn hex_to_rgb(hex: &str) -> Rgb {
    parse_hex(hex).unwrap_or(Rgb::BLACK)
}

/// Read a color from an optional `#` followed by exactly 6 hex digits, in any
/// case.
pub fn parse_hex(hex: &str) -> Result<Rgb, ParseHexError> {
    parse_digits(hex.strip_prefix('#').unwrap_or(hex))
}

/// Like [`parse_hex`], but the leading `#` is required.
pub fn parse_hex_strict(hex: &str) -> Result<Rgb, ParseHexError> {
    let digits = hex.strip_prefix('#').ok_or(ParseHexError::MissingHash)?;
    parse_digits(digits)
}

fn parse_digits(digits: &str) -> Result<Rgb, ParseHexError> {
    if let Some((index, c)) = digits.char_indices().find(|(_, c)| !c.is_ascii_hexdigit()) {
        return Err(ParseHexError::InvalidDigit(c, index));
    }

    // Only ASCII digits are left, so the length is the digit count.
    if digits.len() != DIGITS {
        return Err(ParseHexError::InvalidLength(digits.len()));
    }

    let bytes = digits.as_bytes();
    let nibble = |b: u8| (b as char).to_digit(16).unwrap_or(0) as u8;
    let channel = |at: usize| nibble(bytes[at]) << 4 | nibble(bytes[at + 1]);

    Ok(Rgb::new(channel(0), channel(2), channel(4)))
}

impl Rgb {
    /// Format this color as `#rrggbb`.
    pub fn to_hex(&self) -> String {
        rgb_to_hex(self.red as i32, self.green as i32, self.blue as i32)
    }
}

impl FromStr for Rgb {
    type Err = ParseHexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hex(s)
    }
}
