//! How strongly a color draws attention against a neutral background.
//!
//! The weights below are set by hand to follow the usual ordering of
//! attention studies, saturated warm colors first and strong lightness
//! contrast next. They are not fitted to observer data, so treat the degree
//! as a relative ranking rather than a measured quantity.

use crate::{color::Component, models::Lab};

/// Hue in degrees where chroma weighs the most, a warm orange-red.
const PEAK_HUE: Component = 50.0;

/// How much the chroma weight swings between the peak hue and its opposite.
const HUE_SWING: Component = 0.35;

/// The weight of the lightness distance from middle gray.
const LIGHTNESS_WEIGHT: Component = 0.8;

/// The conspicuity degree of a color, 0 for middle gray, 4 for black and
/// white and between 12 and 14 for the sRGB primaries, red being the highest.
///
/// Chroma is weighted by hue, warm hues standing out more than cool ones,
/// and combined with the distance of the lightness from middle gray.
pub fn conspicuity_of(lab: &Lab) -> Component {
    let lch = lab.to_lch();
    let weight = 1.0 + HUE_SWING * (lch.hue - PEAK_HUE).to_radians().cos();
    let chroma = lch.chroma * weight;
    let lightness = LIGHTNESS_WEIGHT * (lch.lightness - 50.0);
    chroma.hypot(lightness) / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    #[test]
    fn middle_gray_is_inconspicuous() {
        assert_component_eq!(conspicuity_of(&Lab::new(50.0, 0.0, 0.0)), 0.0);
    }

    #[test]
    fn warm_beats_cool_at_equal_chroma() {
        let warm = Lab::new(50.0, 40.0, 40.0);
        let cool = Lab::new(50.0, -40.0, -40.0);
        assert!(conspicuity_of(&warm) > conspicuity_of(&cool));
    }

    #[test]
    fn grows_with_chroma_and_lightness_contrast() {
        assert!(conspicuity_of(&Lab::new(50.0, 60.0, 0.0)) > conspicuity_of(&Lab::new(50.0, 30.0, 0.0)));
        assert!(conspicuity_of(&Lab::new(90.0, 0.0, 0.0)) > conspicuity_of(&Lab::new(70.0, 0.0, 0.0)));
        assert_component_eq!(conspicuity_of(&Lab::new(100.0, 0.0, 0.0)), 4.0);
    }

    #[test]
    fn srgb_primaries() {
        let red = conspicuity_of(&Lab::new(53.2408, 80.0925, 67.2032));
        let green = conspicuity_of(&Lab::new(87.7347, -86.1827, 83.1793));
        let blue = conspicuity_of(&Lab::new(32.2970, 79.1875, -107.8602));
        assert_component_eq!(red, 14.06, 0.01);
        for other in [green, blue] {
            assert!(other > 12.0 && other < red);
        }
        assert_component_eq!(conspicuity_of(&Lab::new(0.0, 0.0, 0.0)), 4.0);
    }
}
