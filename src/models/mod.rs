//! Models are small value types holding the three integer components of a
//! color in one notation. They are what the conversion functions take and
//! return, and what a [`Color`](crate::Color) snapshot is made of.

mod hsl;
mod hsv;
mod rgb;

pub use hsl::{Hsl, HslComponent};
pub use hsv::Hsv;
pub use rgb::{Channel, Rgb};

