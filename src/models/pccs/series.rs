//! Fixed coefficients relating PCCS to Munsell.

use crate::color::Component;
use crate::math::lerp;

/// The Munsell hue of every integer PCCS hue, unwrapped so the sequence
/// increases. Index 0 and 24 are the same hue, 6RP, and index 1 is 1R.
pub(super) const HUE_BREAKPOINTS: [Component; 25] = [
    96.0, 101.0, 104.0, 107.0, 110.0, 114.0, 118.0, 122.0, 125.0, 128.0, 133.0, 138.0, 143.0,
    149.0, 155.0, 160.0, 165.0, 170.0, 173.0, 176.0, 179.0, 183.0, 187.0, 191.0, 196.0,
];

/// The Munsell chroma of the vivid tone, one entry per even PCCS hue from 0
/// to 24.
pub(super) const VIVID_CHROMA: [Component; 13] = [
    13.0, 14.0, 14.0, 13.5, 12.5, 11.0, 10.0, 9.0, 8.5, 11.0, 12.0, 12.0, 13.0,
];

/// The share of the vivid chroma contributed by the linear, quadratic and
/// cubic terms of the saturation curve. Every hue shares this shape, only
/// the vivid chroma it is scaled to differs.
pub(super) const SATURATION_SHAPE: [Component; 3] = [0.9, 0.08, 0.02];

/// PCCS hue from Munsell hue: `24 H / 100` plus this series, period 100.
#[allow(clippy::excessive_precision)]
pub(super) const MUNSELL_TO_PCCS_HUE: [Component; 11] = [
    1.230000, -0.002876, 0.676415, -0.129955, -0.286556, -0.112867, 0.002295, -0.064938, 0.081802,
    -0.040694, 0.001476,
];

/// Munsell hue from PCCS hue: `100 h / 24` plus this series, period 24.
#[allow(clippy::excessive_precision)]
pub(super) const PCCS_TO_MUNSELL_HUE: [Component; 11] = [
    -5.125000, 0.896934, -2.557917, -0.374584, 1.479432, 0.596644, 0.055987, 0.266211, 0.197611,
    -0.155226, 0.173053,
];

/// Munsell chroma per unit of PCCS saturation, period 24.
#[allow(clippy::excessive_precision)]
pub(super) const CHROMA_PER_SATURATION: [Component; 7] = [
    1.300926, 0.198077, 0.179558, -0.037037, -0.032075, -0.037037, 0.027778,
];

/// The lightness of the vivid tone, period 24.
#[allow(clippy::excessive_precision)]
pub(super) const VIVID_LIGHTNESS: [Component; 5] = [5.041667, -1.005181, 1.741025, -0.291667, -0.505181];

/// Evaluate a truncated Fourier series. `coefficients` holds the constant
/// term followed by a cosine and sine coefficient per harmonic.
pub(super) fn fourier(coefficients: &[Component], x: Component, period: Component) -> Component {
    let w = 2.0 * std::f64::consts::PI as Component * x / period;
    coefficients[1..]
        .chunks_exact(2)
        .enumerate()
        .fold(coefficients[0], |sum, (k, pair)| {
            let k = (k + 1) as Component;
            sum + pair[0] * (k * w).cos() + pair[1] * (k * w).sin()
        })
}

/// The cubic coefficients `(a1, a2, a3)` with `C = a1 s + a2 s^2 + a3 s^3`
/// at a PCCS hue in `0..24`. The vivid chroma is interpolated between the
/// neighbouring even hues and the curve reaches it at saturation 9.
pub(super) fn saturation_coefficients(hue: Component) -> [Component; 3] {
    let row = ((hue / 2.0).floor() as usize).min(VIVID_CHROMA.len() - 2);
    let t = (hue - row as Component * 2.0) / 2.0;
    let vivid = lerp(VIVID_CHROMA[row], VIVID_CHROMA[row + 1], t);
    let [linear, quadratic, cubic] = SATURATION_SHAPE;
    [vivid * linear / 9.0, vivid * quadratic / 81.0, vivid * cubic / 729.0]
}

/// Evaluate `a1 s + a2 s^2 + a3 s^3`.
pub(super) fn cubic([a1, a2, a3]: [Component; 3], s: Component) -> Component {
    s * (a1 + s * (a2 + s * a3))
}

/// The derivative of [`cubic`] with respect to `s`.
pub(super) fn cubic_slope([a1, a2, a3]: [Component; 3], s: Component) -> Component {
    a1 + s * (2.0 * a2 + s * 3.0 * a3)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    #[test]
    fn curves_reach_vivid_chroma_at_nine() {
        assert_component_eq!(SATURATION_SHAPE.iter().sum::<Component>(), 1.0, 1.0e-12);
        for (row, vivid) in VIVID_CHROMA.iter().enumerate() {
            let hue = row as Component * 2.0;
            assert_component_eq!(cubic(saturation_coefficients(hue), 9.0), *vivid, 1.0e-9);
        }
        assert_component_eq!(cubic(saturation_coefficients(1.0), 9.0), 13.5, 1.0e-9);
    }

    #[test]
    fn curve_shape_is_shared_across_hues() {
        let red = saturation_coefficients(2.0);
        let blue = saturation_coefficients(17.0);
        for s in [1.0, 4.5, 7.0] {
            let ratio = cubic(red, s) / cubic(blue, s);
            assert_component_eq!(ratio, cubic(red, 9.0) / cubic(blue, 9.0), 1.0e-12);
        }
    }

    #[test]
    fn breakpoints_increase() {
        assert!(HUE_BREAKPOINTS.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(HUE_BREAKPOINTS[1], 101.0);
        assert_eq!(HUE_BREAKPOINTS[24] - HUE_BREAKPOINTS[0], 100.0);
    }

    #[test]
    fn series_are_periodic() {
        assert_component_eq!(
            fourier(&VIVID_LIGHTNESS, 0.0, 24.0),
            fourier(&VIVID_LIGHTNESS, 24.0, 24.0),
            1.0e-9
        );
        assert_component_eq!(fourier(&[2.0], 5.0, 24.0), 2.0);
    }

    #[test]
    fn yellow_is_the_lightest_vivid_tone() {
        let yellow = fourier(&VIVID_LIGHTNESS, 8.0, 24.0);
        for hue in [0.0, 4.0, 12.0, 16.0, 20.0] {
            assert!(fourier(&VIVID_LIGHTNESS, hue, 24.0) < yellow);
        }
    }
}
