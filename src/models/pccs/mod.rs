//! Model a color in the Practical Color Co-ordinate System.
//!
//! PCCS is defined on top of Munsell: lightness is Munsell value, the hue
//! circle is a warped Munsell hue circle with 24 steps, and saturation is a
//! cubic function of Munsell chroma that reaches 9 at the vivid tone of each
//! hue. [`Method::Accurate`] interpolates the tabulated correspondences and
//! solves the cubic with Newton's method, [`Method::Concise`] uses closed
//! form trigonometric fits instead.

mod series;
mod tone;

use std::fmt;

use crate::{
    color::{Component, Flagged, Flags, HasSpace, Space},
    math::{inverse_lerp, lerp, normalize_hue},
    models::{munsell, Munsell},
    options::{Method, SolverLimits},
};

pub use tone::Tone;

tincture_macros::gen_model! {
    /// A PCCS color.
    pub struct Pccs {
        /// The hue in `0..24`. Integer hues are the named PCCS hues, 2 is
        /// red, 8 yellow, 12 green, 18 blue, and 24 is the same as 0.
        hue: Component,
        /// The lightness, equal to Munsell value.
        lightness: Component,
        /// The saturation, 0 for neutral colors and 9 for vivid ones.
        saturation: Component,
    }
}

impl HasSpace for Pccs {
    const SPACE: Space = Space::Pccs;
}

/// The period of the PCCS hue circle.
pub const HUE_PERIOD: Component = 24.0;

/// Saturation or chroma below this is treated as neutral.
pub const NEUTRAL_SATURATION: Component = 0.01;

/// The symbols of the 24 integer PCCS hues, starting at hue 1.
pub const HUE_NAMES: [&str; 24] = [
    "pR", "R", "yR", "rO", "O", "yO", "rY", "Y", "gY", "YG", "yG", "G", "bG", "BG", "BG", "gB",
    "B", "B", "pB", "V", "bP", "P", "rP", "RP",
];

/// The nearest integer PCCS hue in `1..=24`.
fn hue_number(hue: Component) -> usize {
    match normalize_hue(hue, HUE_PERIOD).round() as usize {
        0 => 24,
        n => n,
    }
}

fn munsell_to_pccs_hue(hue: Component, method: Method) -> Component {
    let hue = normalize_hue(hue, munsell::HUE_PERIOD);
    match method {
        Method::Concise => {
            let series = series::fourier(&series::MUNSELL_TO_PCCS_HUE, hue, munsell::HUE_PERIOD);
            normalize_hue(HUE_PERIOD * hue / munsell::HUE_PERIOD + series, HUE_PERIOD)
        }
        Method::Accurate => {
            let breaks = &series::HUE_BREAKPOINTS;
            let unwrapped = if hue < breaks[0] { hue + munsell::HUE_PERIOD } else { hue };
            let index = breaks
                .windows(2)
                .position(|w| unwrapped < w[1])
                .unwrap_or(breaks.len() - 2);
            let t = inverse_lerp(breaks[index], breaks[index + 1], unwrapped);
            normalize_hue(index as Component + t, HUE_PERIOD)
        }
    }
}

fn pccs_to_munsell_hue(hue: Component, method: Method) -> Component {
    let hue = normalize_hue(hue, HUE_PERIOD);
    match method {
        Method::Concise => {
            let series = series::fourier(&series::PCCS_TO_MUNSELL_HUE, hue, HUE_PERIOD);
            normalize_hue(munsell::HUE_PERIOD * hue / HUE_PERIOD + series, munsell::HUE_PERIOD)
        }
        Method::Accurate => {
            let breaks = &series::HUE_BREAKPOINTS;
            let index = (hue.floor() as usize).min(breaks.len() - 2);
            let t = hue - index as Component;
            normalize_hue(lerp(breaks[index], breaks[index + 1], t), munsell::HUE_PERIOD)
        }
    }
}

/// Solve `a1 s + a2 s^2 + a3 s^3 = chroma` for the saturation.
fn solve_saturation(hue: Component, chroma: Component, solver: &SolverLimits) -> Flagged<Component> {
    let coefficients = series::saturation_coefficients(hue);
    let mut saturation = chroma / coefficients[0];

    for iteration in 0..solver.max_iterations {
        let residual = series::cubic(coefficients, saturation) - chroma;
        let step = residual / series::cubic_slope(coefficients, saturation);
        saturation -= step;
        log::trace!("pccs saturation iteration {iteration}: {saturation}");
        if step.abs() < solver.saturation_tolerance {
            return Flagged::clean(saturation);
        }
    }

    log::warn!(
        "pccs saturation for chroma {chroma} at hue {hue} did not converge in {} iterations",
        solver.max_iterations
    );
    Flagged::new(saturation, Flags::NOT_CONVERGED)
}

impl Pccs {
    /// Returns true if the color has no discernible hue.
    pub fn is_neutral(&self) -> bool {
        self.saturation < NEUTRAL_SATURATION
    }

    /// The symbol of the nearest integer hue, e.g. `yO`.
    pub fn hue_name(&self) -> &'static str {
        HUE_NAMES[hue_number(self.hue) - 1]
    }

    /// Convert a Munsell color. Only the accurate method iterates, so only
    /// it can report [`Flags::NOT_CONVERGED`].
    pub fn from_munsell(munsell: &Munsell, method: Method, solver: &SolverLimits) -> Flagged<Self> {
        let Munsell { hue, value, chroma } = munsell.normalized();
        if chroma < NEUTRAL_SATURATION {
            return Flagged::clean(Pccs::new(0.0, value, 0.0));
        }

        let pccs_hue = munsell_to_pccs_hue(hue, method);
        let saturation = match method {
            Method::Concise => {
                let ratio = series::fourier(&series::CHROMA_PER_SATURATION, pccs_hue, HUE_PERIOD);
                Flagged::clean(chroma / ratio)
            }
            Method::Accurate => solve_saturation(pccs_hue, chroma, solver),
        };

        saturation.map(|saturation| Pccs::new(pccs_hue, value, saturation))
    }

    /// Convert to a Munsell color. Both methods evaluate their formulas
    /// directly in this direction.
    pub fn to_munsell(&self, method: Method) -> Munsell {
        let hue = normalize_hue(self.hue, HUE_PERIOD);
        let lightness = self.lightness.max(0.0);
        if self.saturation < NEUTRAL_SATURATION {
            return Munsell::new(0.0, lightness, 0.0);
        }

        let chroma = match method {
            Method::Concise => {
                self.saturation * series::fourier(&series::CHROMA_PER_SATURATION, hue, HUE_PERIOD)
            }
            Method::Accurate => series::cubic(series::saturation_coefficients(hue), self.saturation),
        };

        Munsell::new(pccs_to_munsell_hue(hue, method), lightness, chroma)
    }
}

impl fmt::Display for Pccs {
    /// Formats chromatic colors as tone and hue, e.g. `v2` or `ltg18`, and
    /// neutral colors as `n` followed by the lightness, e.g. `n5.5`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.tone() {
            Some(tone) => write!(f, "{tone}{}", hue_number(self.hue)),
            None => write!(f, "n{}", (self.lightness * 10.0).round() / 10.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    fn hue_difference(a: Component, b: Component, period: Component) -> Component {
        let d = (a - b).rem_euclid(period);
        d.min(period - d)
    }

    const METHODS: [Method; 2] = [Method::Concise, Method::Accurate];

    #[test]
    fn named_hues() {
        let solver = SolverLimits::default();
        // 1R, 4R, 5Y and 3PB are the Munsell hues of PCCS 1, 2, 8 and 18.
        for (munsell_hue, pccs_hue) in [(1.0, 1.0), (4.0, 2.0), (25.0, 8.0), (73.0, 18.0), (96.0, 0.0)] {
            let pccs = Pccs::from_munsell(&Munsell::new(munsell_hue, 5.0, 6.0), Method::Accurate, &solver);
            assert!(hue_difference(pccs.value.hue, pccs_hue, HUE_PERIOD) < 1.0e-9);
        }
        for (pccs_hue, munsell_hue) in [(1.0, 1.0), (2.0, 4.0), (24.0, 96.0)] {
            let munsell = Pccs::new(pccs_hue, 5.0, 5.0).to_munsell(Method::Accurate);
            assert!(hue_difference(munsell.hue, munsell_hue, munsell::HUE_PERIOD) < 1.0e-9);
        }
        assert_eq!(Pccs::new(1.0, 4.0, 9.0).hue_name(), "pR");
        assert_eq!(Pccs::new(2.0, 4.0, 9.0).hue_name(), "R");
        assert_eq!(Pccs::new(0.2, 4.0, 9.0).hue_name(), "RP");
        assert_eq!(Pccs::new(8.4, 4.0, 9.0).hue_name(), "Y");
    }

    #[test]
    fn hue_wraps_at_twenty_four() {
        for method in METHODS {
            let a = Pccs::new(0.0, 5.0, 6.0).to_munsell(method);
            let b = Pccs::new(24.0, 5.0, 6.0).to_munsell(method);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn munsell_round_trip() {
        let solver = SolverLimits::default();
        for method in METHODS {
            for munsell in [
                Munsell::new(5.0, 4.0, 12.0),
                Munsell::new(27.5, 8.0, 6.0),
                Munsell::new(60.0, 5.0, 3.0),
                Munsell::new(97.0, 2.0, 9.0),
            ] {
                let pccs = Pccs::from_munsell(&munsell, method, &solver);
                assert!(pccs.is_converged());
                let back = pccs.value.to_munsell(method);
                assert_component_eq!(back.value, munsell.value);
                let tolerance = match method {
                    Method::Accurate => 1.0e-6,
                    Method::Concise => 0.5,
                };
                assert!(hue_difference(back.hue, munsell.hue, munsell::HUE_PERIOD) < tolerance);
            }
        }
    }

    #[test]
    fn accurate_chroma_round_trip() {
        let solver = SolverLimits::default();
        for chroma in [0.5, 4.0, 10.0, 14.0] {
            let munsell = Munsell::new(42.0, 6.0, chroma);
            let pccs = Pccs::from_munsell(&munsell, Method::Accurate, &solver).value;
            assert_component_eq!(pccs.to_munsell(Method::Accurate).chroma, chroma, 1.0e-6);
        }
    }

    #[test]
    fn concise_approximates_accurate() {
        let solver = SolverLimits::default();
        for hue in (0..100).step_by(7) {
            let munsell = Munsell::new(hue as Component, 5.0, 8.0);
            let accurate = Pccs::from_munsell(&munsell, Method::Accurate, &solver).value;
            let concise = Pccs::from_munsell(&munsell, Method::Concise, &solver).value;
            assert!(hue_difference(accurate.hue, concise.hue, HUE_PERIOD) < 0.25);
            assert!((accurate.saturation - concise.saturation).abs() < 0.15 * accurate.saturation);
            assert_eq!(accurate.lightness, concise.lightness);
        }
    }

    #[test]
    fn neutral_short_circuit() {
        let solver = SolverLimits::default();
        for method in METHODS {
            let pccs = Pccs::from_munsell(&Munsell::new(37.0, 5.5, 0.001), method, &solver);
            assert_eq!(pccs.value, Pccs::new(0.0, 5.5, 0.0));
            assert_eq!(pccs.value.to_munsell(method), Munsell::new(0.0, 5.5, 0.0));
        }
    }

    #[test]
    fn iteration_cap_reports_not_converged() {
        let solver = SolverLimits {
            max_iterations: 1,
            ..SolverLimits::default()
        };
        let pccs = Pccs::from_munsell(&Munsell::new(5.0, 4.0, 12.0), Method::Accurate, &solver);
        assert!(!pccs.is_converged());
        assert!(pccs.value.saturation > 0.0);
    }

    #[test]
    fn notation() {
        assert_eq!(Pccs::from_tone(Tone::Vivid, 2.0).to_string(), "v2");
        assert_eq!(Pccs::from_tone(Tone::LightGrayish, 18.0).to_string(), "ltg18");
        assert_eq!(Pccs::from_tone(Tone::Dark, 24.0).to_string(), "dk24");
        assert_eq!(Pccs::new(0.0, 5.5, 0.0).to_string(), "n5.5");
    }
}
