//! Model a color with the HSL notation in the sRGB color space.

chromapick_macros::gen_model! {
    /// A color specified with the HSL notation, rounded to whole degrees and
    /// percentages.
    pub struct Hsl {
        /// The hue component of the color, in degrees `[0,360)`.
        hue: u16,
        /// The saturation component of the color, in percent.
        saturation: u8,
        /// The lightness component of the color, in percent.
        lightness: u8,
    }
}

/// Identifies a single component of an [`Hsl`] color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HslComponent {
    /// The hue, in degrees.
    Hue,
    /// The saturation, in percent.
    Saturation,
    /// The lightness, in percent.
    Lightness,
}

impl Hsl {
    /// Return the components widened to `i32`, replacing `component` with
    /// `value`. Used to feed a single slider change back into the converter.
    pub fn with_component(&self, component: HslComponent, value: i32) -> (i32, i32, i32) {
        let (h, s, l) = (
            self.hue as i32,
            self.saturation as i32,
            self.lightness as i32,
        );
        match component {
            HslComponent::Hue => (value, s, l),
            HslComponent::Saturation => (h, value, l),
            HslComponent::Lightness => (h, s, value),
        }
    }
}
