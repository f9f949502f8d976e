//! Math utility functions.

use num_traits::Float;

use crate::Component;

/// A pixel position on a canvas.
pub type Point = euclid::default::Point2D<u32>;

/// The pixel dimensions of a canvas.
pub type Size = euclid::default::Size2D<u32>;

/// Linearly interpolate between `a` and `b`.
pub fn lerp<T: Float>(a: T, b: T, t: T) -> T {
    a + (b - a) * t
}

/// Clamp an unbounded integer into an 8-bit channel.
pub fn clamp_channel(value: i32) -> u8 {
    value.clamp(0, u8::MAX as i32) as u8
}

/// Clamp an unbounded integer into `[0,100]`.
pub fn clamp_percent(value: i32) -> u8 {
    value.clamp(0, 100) as u8
}

/// Scale a component in `[0,1]` to an 8-bit channel, rounding to nearest.
pub fn unit_to_channel(value: Component) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Scale a component in `[0,1]` to a whole percentage, rounding to nearest.
pub fn unit_to_percent(value: Component) -> u8 {
    (value * 100.0).round().clamp(0.0, 100.0) as u8
}

/// Scale a hue given in turns (`[0,1]`) to whole degrees in `[0,360)`. A hue
/// that rounds up to a full turn wraps to 0.
pub fn turns_to_degrees(turns: Component) -> u16 {
    ((turns * 360.0).round() as u16) % 360
}
