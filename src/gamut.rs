//! Gamut mapping functions.
//! <https://drafts.csswg.org/css-color-4/#binsearch>
//!
//! The search runs on CIE LCh chroma and measures the clipping error with
//! CIEDE2000.

use crate::{
    color::{Color, Component, Flags, Space},
    evaluation::ciede2000,
    models::{Lab, LinearRgb, Rgb},
    options::Options,
};

/// A CIEDE2000 difference below this is not noticeable.
const JND: Component = 2.0;

/// The chroma resolution of the search.
const EPSILON: Component = 1.0e-4;

fn delta_e(reference: &Color, sample: &Color, options: &Options) -> Component {
    let reference = Lab::from(reference.to_space(Space::Lab, options).components);
    let sample = Lab::from(sample.to_space(Space::Lab, options).components);
    ciede2000(&reference, &sample)
}

impl Color {
    /// Returns true if the color is within the gamut limits of its space.
    ///
    /// Only [`Space::Rgb`] and [`Space::Lrgb`] have limits, every other space
    /// can express any color.
    pub fn in_gamut(&self) -> bool {
        match self.space {
            Space::Rgb => Rgb::from(self.components).in_gamut(),
            Space::Lrgb => LinearRgb::from(self.components).in_gamut(),
            _ => true,
        }
    }

    /// Return a color with each of the components clamped into the gamut
    /// limits of its space. Spaces without limits are returned as is.
    /// NOTE: This is a lossy operation.
    pub fn clip(&self) -> Color {
        let components = match self.space {
            Space::Rgb => Rgb::from(self.components).clip().to_components(),
            Space::Lrgb => LinearRgb::from(self.components).clip().to_components(),
            _ => return *self,
        };
        Color {
            components,
            space: self.space,
            flags: self.flags - Flags::OUT_OF_GAMUT,
        }
    }

    /// If this color is not within the gamut limits of its space, reduce its
    /// chroma until clipping it is no longer noticeable, keeping lightness
    /// and hue.
    pub fn map_into_gamut(&self, options: &Options) -> Self {
        if !matches!(self.space, Space::Rgb | Space::Lrgb) || self.in_gamut() {
            return *self;
        }

        let origin = self.to_space(Space::Lch, options);
        let max_value = match self.space {
            Space::Rgb => Rgb::MAX,
            _ => 1.0,
        };

        if origin.components.0 >= 100.0 {
            return Color::new(self.space, max_value, max_value, max_value);
        }
        if origin.components.0 <= 0.0 {
            return Color::new(self.space, 0.0, 0.0, 0.0);
        }

        let mut current = origin;
        let mut current_in_space = *self;

        // Clipping may already be good enough.
        let clipped = current_in_space.clip();
        if delta_e(&current, &clipped, options) < JND {
            return clipped;
        }

        let mut min = 0.0;
        let mut max = origin.components.1;
        let mut min_in_gamut = true;

        while max - min > EPSILON {
            let chroma = (min + max) / 2.0;
            current.components.1 = chroma;
            current_in_space = current.to_space(self.space, options);

            if min_in_gamut && current_in_space.in_gamut() {
                min = chroma;
                continue;
            }

            let clipped = current_in_space.clip();
            let e = delta_e(&clipped, &current, options);
            if e < JND {
                if JND - e < EPSILON {
                    return clipped;
                }
                min_in_gamut = false;
                min = chroma;
            } else {
                max = chroma;
            }
        }

        current_in_space.clip()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    #[test]
    fn limits_per_space() {
        assert!(Color::new(Space::Rgb, 255.0, 0.0, 10.0).in_gamut());
        assert!(!Color::new(Space::Rgb, 256.0, 0.0, 10.0).in_gamut());
        assert!(!Color::new(Space::Lrgb, 0.5, -0.1, 0.2).in_gamut());
        assert!(Color::new(Space::Lab, 50.0, 200.0, -200.0).in_gamut());
    }

    #[test]
    fn clip_clamps_and_clears_the_flag() {
        let mut color = Color::new(Space::Rgb, 300.0, -5.0, 100.0);
        color.flags = Flags::OUT_OF_GAMUT | Flags::NOT_CONVERGED;
        let clipped = color.clip();
        assert_eq!(clipped.components, crate::Components(255.0, 0.0, 100.0));
        assert_eq!(clipped.flags, Flags::NOT_CONVERGED);
    }

    #[test]
    fn in_gamut_colors_are_untouched() {
        let color = Color::new(Space::Rgb, 10.0, 200.0, 30.0);
        assert_eq!(color.map_into_gamut(&Options::default()), color);
    }

    #[test]
    fn map_saturated_lab() {
        let options = Options::default();
        let source = Color::new(Space::Lab, 60.0, 110.0, 20.0).to_space(Space::Rgb, &options);
        assert!(source.is_out_of_gamut());

        let mapped = source.map_into_gamut(&options);
        assert!(mapped.in_gamut());

        let before = source.to_space(Space::Lch, &options).components;
        let after = mapped.to_space(Space::Lch, &options).components;
        assert!(after.1 < before.1);
        assert_component_eq!(after.0, before.0, 3.0);
        assert_component_eq!(after.2, before.2, 5.0);
    }

    #[test]
    fn extremes_map_to_black_and_white() {
        let options = Options::default();
        let white = Color::new(Space::Lrgb, 1.2, 1.1, 1.3).map_into_gamut(&options);
        assert_eq!(white, Color::new(Space::Lrgb, 1.0, 1.0, 1.0));
    }
}
