/// Check for equality between two components allowing for 16-bit rounding
/// errors.
#[macro_export]
macro_rules! assert_component_eq {
    ($actual:expr,$expected:expr) => {{
        approx::assert_abs_diff_eq!(
            $actual,
            $expected,
            epsilon = 1.0 / i16::MAX as $crate::Component
        );
    }};
}

/// Check that every field of a [`Color`](crate::Color) snapshot was derived
/// from its RGB triple.
#[macro_export]
macro_rules! assert_consistent {
    ($color:expr) => {{
        let color: &$crate::Color = &$color;
        let rgb = color.rgb();
        assert_eq!(color.hex(), rgb.to_hex());
        assert_eq!(color.hsl(), rgb.to_hsl());
        assert_eq!(color.hsv(), rgb.to_hsv());
    }};
}
