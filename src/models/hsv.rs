//! Model a color with the HSV notation in the sRGB color space.

chromapick_macros::gen_model! {
    /// A color specified with the HSV notation, rounded to whole degrees and
    /// percentages.
    pub struct Hsv {
        /// The hue component of the color, in degrees `[0,360)`.
        hue: u16,
        /// The saturation component of the color, in percent.
        saturation: u8,
        /// The value (brightness) component of the color, in percent.
        value: u8,
    }
}
