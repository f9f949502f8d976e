//! Model a color in the 8-bit sRGB color space.

use crate::math::clamp_channel;

chromapick_macros::gen_model! {
    /// A color specified with 8-bit red, green and blue channels.
    pub struct Rgb {
        /// The red component of the color.
        red: u8,
        /// The green component of the color.
        green: u8,
        /// The blue component of the color.
        blue: u8,
    }
}

/// Identifies a single channel of an [`Rgb`] color, e.g. for a slider or a
/// numeric input bound to it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    /// The red channel.
    Red,
    /// The green channel.
    Green,
    /// The blue channel.
    Blue,
}

impl Rgb {
    /// Black, also the fallback for unparsable hex input.
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    /// White.
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    /// Create a color from unbounded integers, clamping each into `[0,255]`.
    pub fn clamped(red: i32, green: i32, blue: i32) -> Self {
        Self::new(
            clamp_channel(red),
            clamp_channel(green),
            clamp_channel(blue),
        )
    }

    /// Return the value of a single channel.
    pub fn channel(&self, channel: Channel) -> u8 {
        match channel {
            Channel::Red => self.red,
            Channel::Green => self.green,
            Channel::Blue => self.blue,
        }
    }

    /// Return a copy of this color with a single channel replaced. The value
    /// is clamped into `[0,255]`.
    pub fn with_channel(&self, channel: Channel, value: i32) -> Self {
        let value = clamp_channel(value);
        let mut rgb = *self;
        match channel {
            Channel::Red => rgb.red = value,
            Channel::Green => rgb.green = value,
            Channel::Blue => rgb.blue = value,
        }
        rgb
    }
}
