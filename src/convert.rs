//! Conversions between the RGB, HSL and HSV notations.
//!
//! RGB is the pivot: HSL and HSV are only ever derived from RGB, and the only
//! way back is [`hsl_to_rgb`]. Results are rounded to whole channels, degrees
//! and percentages, so `hsl_to_rgb(rgb_to_hsl(c))` is close to `c` but not
//! always equal to it.
//!
//! ```rust
//! use chromapick::{hsl_to_rgb, rgb_to_hsl, Hsl, Rgb};
//! let hsl = rgb_to_hsl(59, 130, 246);
//! assert_eq!(hsl, Hsl::new(217, 91, 60));
//! assert_eq!(hsl_to_rgb(217, 91, 60), Rgb::new(60, 131, 246));
//! ```

use crate::{
    math::{clamp_channel, clamp_percent, turns_to_degrees, unit_to_channel, unit_to_percent},
    models::{Hsl, Hsv, Rgb},
};

/// Convert 8-bit RGB channels to the HSL notation. Channels are clamped into
/// `[0,255]` first.
pub fn rgb_to_hsl(red: i32, green: i32, blue: i32) -> Hsl {
    let (hue, saturation, lightness) = util::rgb_to_hsl(to_units(red, green, blue));
    Hsl::new(
        turns_to_degrees(hue),
        unit_to_percent(saturation),
        unit_to_percent(lightness),
    )
}

/// Convert 8-bit RGB channels to the HSV notation. Channels are clamped into
/// `[0,255]` first.
pub fn rgb_to_hsv(red: i32, green: i32, blue: i32) -> Hsv {
    let (hue, saturation, value) = util::rgb_to_hsv(to_units(red, green, blue));
    Hsv::new(
        turns_to_degrees(hue),
        unit_to_percent(saturation),
        unit_to_percent(value),
    )
}

/// Convert from the HSL notation to 8-bit RGB channels. The hue is taken
/// modulo 360 degrees; saturation and lightness are clamped into `[0,100]`.
pub fn hsl_to_rgb(hue: i32, saturation: i32, lightness: i32) -> Rgb {
    let hue = hue.rem_euclid(360) as crate::Component / 360.0;
    let saturation = clamp_percent(saturation) as crate::Component / 100.0;
    let lightness = clamp_percent(lightness) as crate::Component / 100.0;

    let (red, green, blue) = util::hsl_to_rgb(hue, saturation, lightness);
    Rgb::new(
        unit_to_channel(red),
        unit_to_channel(green),
        unit_to_channel(blue),
    )
}

fn to_units(red: i32, green: i32, blue: i32) -> util::Units {
    let unit = |c: i32| clamp_channel(c) as crate::Component / 255.0;
    (unit(red), unit(green), unit(blue))
}

impl Rgb {
    /// Convert this color to the HSL notation.
    pub fn to_hsl(&self) -> Hsl {
        rgb_to_hsl(self.red as i32, self.green as i32, self.blue as i32)
    }

    /// Convert this color to the HSV notation.
    pub fn to_hsv(&self) -> Hsv {
        rgb_to_hsv(self.red as i32, self.green as i32, self.blue as i32)
    }
}

impl Hsl {
    /// Convert this color from the HSL notation to 8-bit RGB.
    pub fn to_rgb(&self) -> Rgb {
        hsl_to_rgb(
            self.hue as i32,
            self.saturation as i32,
            self.lightness as i32,
        )
    }
}

mod util {
    use crate::Component;

    /// Three components, each in `[0,1]`. Hues are expressed in turns.
    pub type Units = (Component, Component, Component);

    /// Calculate the hue (in turns) from RGB components and return it along
    /// with the min and max RGB values. Achromatic colors get a hue of 0.
    fn rgb_to_hue_with_min_max(from: Units) -> (Component, Component, Component) {
        let (red, green, blue) = from;

        let max = red.max(green).max(blue);
        let min = red.min(green).min(blue);

        let delta = max - min;

        let hue = if delta != 0.0 {
            let sixths = if max == red {
                (green - blue) / delta + if green < blue { 6.0 } else { 0.0 }
            } else if max == green {
                (blue - red) / delta + 2.0
            } else {
                (red - green) / delta + 4.0
            };
            sixths / 6.0
        } else {
            0.0
        };

        (hue, min, max)
    }

    /// Convert from RGB notation to HSL notation.
    pub fn rgb_to_hsl(from: Units) -> Units {
        let (hue, min, max) = rgb_to_hue_with_min_max(from);

        let lightness = (max + min) / 2.0;
        let delta = max - min;

        let saturation = if delta == 0.0 {
            0.0
        } else if lightness > 0.5 {
            delta / (2.0 - max - min)
        } else {
            delta / (max + min)
        };

        (hue, saturation, lightness)
    }

    /// Convert from RGB notation to HSV notation.
    pub fn rgb_to_hsv(from: Units) -> Units {
        let (hue, min, max) = rgb_to_hue_with_min_max(from);

        let saturation = if max == 0.0 { 0.0 } else { (max - min) / max };

        (hue, saturation, max)
    }

    /// Convert from HSL notation to RGB notation.
    pub fn hsl_to_rgb(hue: Component, saturation: Component, lightness: Component) -> Units {
        if saturation == 0.0 {
            return (lightness, lightness, lightness);
        }

        let q = if lightness < 0.5 {
            lightness * (1.0 + saturation)
        } else {
            lightness + saturation - lightness * saturation
        };
        let p = 2.0 * lightness - q;

        (
            hue_to_rgb(p, q, hue + 1.0 / 3.0),
            hue_to_rgb(p, q, hue),
            hue_to_rgb(p, q, hue - 1.0 / 3.0),
        )
    }

    /// Evaluate one RGB channel at hue offset `t` (in turns) between the
    /// lower bound `p` and upper bound `q`.
    pub fn hue_to_rgb(p: Component, q: Component, t: Component) -> Component {
        let t = if t < 0.0 {
            t + 1.0
        } else if t > 1.0 {
            t - 1.0
        } else {
            t
        };

        if t < 1.0 / 6.0 {
            p + (q - p) * 6.0 * t
        } else if t < 1.0 / 2.0 {
            q
        } else if t < 2.0 / 3.0 {
            p + (q - p) * (2.0 / 3.0 - t) * 6.0
        } else {
            p
        }
    }
}
