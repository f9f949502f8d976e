//! The spectrum canvas a user clicks to pick a color.
//!
//! The canvas is a horizontal hue gradient (red, yellow, green, cyan, blue,
//! magenta and back to red) covered by a vertical overlay that fades from
//! opaque white at the top to transparent in the middle, then to opaque black
//! at the bottom. Sampling a pixel yields the 8-bit color a renderer would
//! have drawn there.

use crate::{
    math::{lerp, unit_to_channel, Point, Size},
    models::Rgb,
    Component,
};

/// Hue gradient stops, evenly spaced from the left edge to the right edge.
const HUE_STOPS: [[Component; 3]; 7] = [
    [255.0, 0.0, 0.0],
    [255.0, 255.0, 0.0],
    [0.0, 255.0, 0.0],
    [0.0, 255.0, 255.0],
    [0.0, 0.0, 255.0],
    [255.0, 0.0, 255.0],
    [255.0, 0.0, 0.0],
];

/// Default canvas width, in pixels.
pub const DEFAULT_WIDTH: u32 = 400;

/// Default canvas height, in pixels.
pub const DEFAULT_HEIGHT: u32 = 300;

/// A spectrum canvas of a fixed pixel size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Spectrum {
    size: Size,
}

impl Spectrum {
    /// Create a canvas of the given size. Empty dimensions are widened to one
    /// pixel.
    pub fn new(size: Size) -> Self {
        Self {
            size: Size::new(size.width.max(1), size.height.max(1)),
        }
    }

    /// The canvas size in pixels.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Return the color drawn at the given pixel. Points outside the canvas
    /// are moved to the nearest edge pixel.
    pub fn sample(&self, point: Point) -> Rgb {
        let x = point.x.min(self.size.width - 1);
        let y = point.y.min(self.size.height - 1);

        // Sample at the pixel center.
        let u = (x as Component + 0.5) / self.size.width as Component;
        let v = (y as Component + 0.5) / self.size.height as Component;

        let [red, green, blue] = color_at(u, v);
        Rgb::new(
            unit_to_channel(red / 255.0),
            unit_to_channel(green / 255.0),
            unit_to_channel(blue / 255.0),
        )
    }

    /// Iterate over every pixel of the canvas, row by row.
    pub fn render(&self) -> impl Iterator<Item = (Point, Rgb)> + '_ {
        (0..self.size.height).flat_map(move |y| {
            (0..self.size.width).map(move |x| {
                let point = Point::new(x, y);
                (point, self.sample(point))
            })
        })
    }
}

impl Default for Spectrum {
    fn default() -> Self {
        Self::new(Size::new(DEFAULT_WIDTH, DEFAULT_HEIGHT))
    }
}

/// Evaluate the canvas at unit coordinates `u` (left to right) and `v` (top
/// to bottom), returning unrounded channels in `[0,255]`.
pub fn color_at(u: Component, v: Component) -> [Component; 3] {
    let u = u.clamp(0.0, 1.0);
    let v = v.clamp(0.0, 1.0);

    let segments = (HUE_STOPS.len() - 1) as Component;
    let position = u * segments;
    let index = (position.floor() as usize).min(HUE_STOPS.len() - 2);
    let t = position - index as Component;

    let (from, to) = (HUE_STOPS[index], HUE_STOPS[index + 1]);
    let base = [0, 1, 2].map(|i| lerp(from[i], to[i], t));

    // White fades out over the top half, black fades in over the bottom half.
    let (overlay, alpha) = if v < 0.5 {
        (255.0, 1.0 - v / 0.5)
    } else {
        (0.0, (v - 0.5) / 0.5)
    };

    base.map(|c| lerp(c, overlay, alpha))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    #[test]
    fn hue_stops_at_the_middle_row() {
        #[rustfmt::skip]
        const TESTS: &[(Component, [Component; 3])] = &[
            (0.0,       [255.0, 0.0, 0.0]),
            (1.0 / 6.0, [255.0, 255.0, 0.0]),
            (0.25,      [127.5, 255.0, 0.0]),
            (0.5,       [0.0, 255.0, 255.0]),
            (2.0 / 3.0, [0.0, 0.0, 255.0]),
            (1.0,       [255.0, 0.0, 0.0]),
        ];

        for &(u, expected) in TESTS {
            let actual = color_at(u, 0.5);
            for i in 0..3 {
                assert_component_eq!(actual[i], expected[i]);
            }
        }
    }

    #[test]
    fn overlay_fades_to_white_and_black() {
        for u in [0.0, 0.3, 0.7] {
            let top = color_at(u, 0.0);
            let bottom = color_at(u, 1.0);
            for i in 0..3 {
                assert_component_eq!(top[i], 255.0);
                assert_component_eq!(bottom[i], 0.0);
            }
        }

        let quarter = color_at(0.5, 0.25);
        assert_component_eq!(quarter[0], 127.5);
        assert_component_eq!(quarter[1], 255.0);
        assert_component_eq!(quarter[2], 255.0);
    }

    #[test]
    fn sample_default_canvas() {
        let spectrum = Spectrum::default();
        assert_eq!(spectrum.size(), Size::new(400, 300));
        assert_eq!(spectrum.sample(Point::new(100, 75)), Rgb::new(190, 255, 127));
        assert_eq!(spectrum.sample(Point::new(300, 225)), Rgb::new(64, 0, 127));
        assert_eq!(spectrum.sample(Point::new(200, 150)), Rgb::new(0, 252, 254));
        assert_eq!(spectrum.sample(Point::new(0, 0)), Rgb::new(255, 254, 254));
    }

    #[test]
    fn outside_points_are_clamped() {
        let spectrum = Spectrum::default();
        assert_eq!(
            spectrum.sample(Point::new(1000, 1000)),
            spectrum.sample(Point::new(399, 299))
        );
        assert_eq!(spectrum.sample(Point::new(399, 299)), Rgb::new(1, 0, 0));
    }

    #[test]
    fn render_covers_every_pixel() {
        let spectrum = Spectrum::new(Size::new(4, 3));
        let pixels: Vec<_> = spectrum.render().collect();
        assert_eq!(pixels.len(), 12);
        assert_eq!(pixels[0].0, Point::new(0, 0));
        assert_eq!(pixels[5].0, Point::new(1, 1));
        assert_eq!(pixels[11].0, Point::new(3, 2));
        assert!(pixels.iter().all(|(p, c)| spectrum.sample(*p) == *c));
    }

    #[test]
    fn empty_canvas_is_widened() {
        let spectrum = Spectrum::new(Size::new(0, 0));
        assert_eq!(spectrum.size(), Size::new(1, 1));
        assert_eq!(spectrum.render().count(), 1);
    }
}
