//! Model a color in the Munsell color system.
//!
//! There is no closed form for Munsell coordinates. Chromaticities come from
//! the renotation table measured under illuminant C, value maps to
//! luminance through the ASTM D1535 polynomial, and the inverse direction
//! searches the table with a bounded Newton iteration.

mod notation;
mod renotation;
mod table;

use crate::{
    color::{Component, Flagged, Flags, HasSpace, Space},
    math::normalize_hue,
    models::{Xyz, Yxy},
    options::{Illuminant, SolverLimits},
};

pub use notation::{hue_notation, HUE_FAMILIES};

tincture_macros::gen_model! {
    /// A Munsell color.
    pub struct Munsell {
        /// The hue in `0..100`, where 0 and 100 are both 10RP and every hue
        /// family spans 10 units, 5R being 5.
        hue: Component,
        /// The value, 0 for black and 10 for white.
        value: Component,
        /// The chroma, 0 for neutral colors.
        chroma: Component,
    }
}

impl HasSpace for Munsell {
    const SPACE: Space = Space::Munsell;
}

/// The period of the Munsell hue circle.
pub const HUE_PERIOD: Component = 100.0;

/// Chroma below this is displayed and treated as neutral.
pub const NEUTRAL_CHROMA: Component = 0.01;

/// Newton steps on the value smaller than this end the value solve.
const VALUE_TOLERANCE: Component = 1.0e-6;

/// The step used for the finite difference Jacobian of the chromaticity
/// search.
const JACOBIAN_STEP: Component = 1.0e-4;

/// The largest hue change a single search step may make.
const MAX_HUE_STEP: Component = 10.0;

/// How often a search step is halved when it does not improve the residual.
const MAX_BACKTRACKS: usize = 8;

#[allow(clippy::excessive_precision)]
const D1535: [Component; 5] = [1.1914, -0.22533, 0.23352, -0.020484, 0.00081939];

/// The relative luminance `Y` (1 for white) of a Munsell value, following
/// ASTM D1535.
pub fn value_to_luminance(value: Component) -> Component {
    let [a1, a2, a3, a4, a5] = D1535;
    let v = value;
    v * (a1 + v * (a2 + v * (a3 + v * (a4 + v * a5)))) / 100.0
}

fn value_to_luminance_slope(value: Component) -> Component {
    let [a1, a2, a3, a4, a5] = D1535;
    let v = value;
    (a1 + v * (2.0 * a2 + v * (3.0 * a3 + v * (4.0 * a4 + v * 5.0 * a5)))) / 100.0
}

/// The Munsell value of a relative luminance, inverting
/// [`value_to_luminance`] with Newton's method.
pub fn luminance_to_value(luminance: Component, solver: &SolverLimits) -> Flagged<Component> {
    if luminance <= 0.0 {
        return Flagged::clean(0.0);
    }

    // The lightness curve of Lab is close enough to start from.
    let mut value = (11.6 * luminance.cbrt() - 1.6).max(0.1);
    for iteration in 0..solver.max_iterations {
        let step = (value_to_luminance(value) - luminance) / value_to_luminance_slope(value);
        value -= step;
        log::trace!("munsell value iteration {iteration}: {value}");
        if step.abs() < VALUE_TOLERANCE {
            return Flagged::clean(value);
        }
    }

    log::warn!(
        "munsell value for luminance {luminance} did not converge in {} iterations",
        solver.max_iterations
    );
    Flagged::new(value, Flags::NOT_CONVERGED)
}

impl Munsell {
    /// Returns true if the color has no discernible hue.
    pub fn is_neutral(&self) -> bool {
        self.chroma < NEUTRAL_CHROMA
    }

    /// The same color with the hue wrapped into `0..100` and negative values
    /// and chroma clamped to 0.
    #[must_use]
    pub fn normalized(&self) -> Self {
        Self::new(
            normalize_hue(self.hue, HUE_PERIOD),
            self.value.max(0.0),
            self.chroma.max(0.0),
        )
    }

    /// Convert to luminance and chromaticity under illuminant C. Chroma past
    /// the table is extrapolated and flagged as out of gamut. Value 10 is
    /// white, so any chroma there is dropped and flagged.
    pub fn to_yxy(&self) -> Flagged<Yxy> {
        let Munsell { hue, value, chroma } = self.normalized();
        table::chromaticity(hue, value, chroma)
            .map(|(x, y)| Yxy::new(value_to_luminance(value), x, y))
    }

    /// Convert luminance and chromaticity under illuminant C to a Munsell
    /// color.
    ///
    /// The value follows directly from the luminance. Hue and chroma are
    /// found with a damped Newton search on the table interpolation, started
    /// from the hue sector whose direction from the neutral point matches
    /// best. The search stops when the chromaticity is reproduced within
    /// [`SolverLimits::chromaticity_tolerance`] or after
    /// [`SolverLimits::max_iterations`] steps, in which case the best
    /// estimate is returned with [`Flags::NOT_CONVERGED`].
    pub fn from_yxy(yxy: &Yxy, solver: &SolverLimits) -> Flagged<Self> {
        luminance_to_value(yxy.luminance, solver)
            .and_then(|value| search(value, (yxy.x, yxy.y), solver))
    }

    /// Convert to XYZ relative to `illuminant`.
    pub fn to_xyz(&self, illuminant: Illuminant) -> Flagged<Xyz> {
        self.to_yxy()
            .map(|yxy| yxy.to_xyz().adapt(Illuminant::C, illuminant))
    }

    /// Convert XYZ relative to `illuminant` to a Munsell color.
    pub fn from_xyz(xyz: &Xyz, illuminant: Illuminant, solver: &SolverLimits) -> Flagged<Self> {
        let under_c = xyz.adapt(illuminant, Illuminant::C);
        Self::from_yxy(&Yxy::from_xyz(&under_c, Illuminant::C), solver)
    }
}

fn distance(a: (Component, Component), b: (Component, Component)) -> Component {
    (a.0 - b.0).hypot(a.1 - b.1)
}

/// The hue and chroma to start the search from.
fn initial_guess(value: Component, target: (Component, Component)) -> (Component, Component) {
    let (nx, ny) = table::neutral();
    let angle = (target.1 - ny).atan2(target.0 - nx);
    let radius = distance(target, (nx, ny));

    let mut best = (Component::INFINITY, 0.0, 2.0);
    for sector in 0..40 {
        let hue = sector as Component * 2.5;
        let (x, y) = table::chromaticity(hue, value, 2.0).value;
        let turn = (y - ny).atan2(x - nx) - angle;
        let difference = turn.sin().atan2(turn.cos()).abs();
        if difference < best.0 {
            best = (difference, hue, distance((x, y), (nx, ny)));
        }
    }

    let (_, hue, unit) = best;
    (hue, 2.0 * radius / unit)
}

fn search(value: Component, target: (Component, Component), solver: &SolverLimits) -> Flagged<Munsell> {
    let neutral = table::neutral();
    if value <= 0.0 || distance(target, neutral) < solver.chromaticity_tolerance {
        return Flagged::clean(Munsell::new(0.0, value, 0.0));
    }

    let (mut hue, mut chroma) = initial_guess(value, target);

    for iteration in 0..solver.max_iterations {
        let current = table::chromaticity(hue, value, chroma);
        let (x, y) = current.value;
        let residual = (x - target.0, y - target.1);
        let error = residual.0.hypot(residual.1);
        log::trace!("munsell search iteration {iteration}: {hue} {value}/{chroma}, error {error}");

        if error < solver.chromaticity_tolerance {
            return current.map(|_| Munsell::new(hue, value, chroma));
        }

        let (hx, hy) = table::chromaticity(normalize_hue(hue + JACOBIAN_STEP, HUE_PERIOD), value, chroma).value;
        let (cx, cy) = table::chromaticity(hue, value, chroma + JACOBIAN_STEP).value;
        let j11 = (hx - x) / JACOBIAN_STEP;
        let j21 = (hy - y) / JACOBIAN_STEP;
        let j12 = (cx - x) / JACOBIAN_STEP;
        let j22 = (cy - y) / JACOBIAN_STEP;

        let determinant = j11 * j22 - j12 * j21;
        if determinant.abs() < Component::EPSILON {
            log::debug!("munsell search hit a singular jacobian at {hue} {value}/{chroma}");
            break;
        }

        let hue_step = ((j22 * residual.0 - j12 * residual.1) / determinant).clamp(-MAX_HUE_STEP, MAX_HUE_STEP);
        let chroma_step = (j11 * residual.1 - j21 * residual.0) / determinant;

        let mut scale = 1.0;
        let mut next = (hue, chroma);
        for _ in 0..MAX_BACKTRACKS {
            let next_hue = normalize_hue(hue - scale * hue_step, HUE_PERIOD);
            let mut next_chroma = chroma - scale * chroma_step;
            if next_chroma <= 0.0 {
                next_chroma = chroma * 0.5;
            }
            next = (next_hue, next_chroma);
            if distance(table::chromaticity(next_hue, value, next_chroma).value, target) < error {
                break;
            }
            scale *= 0.5;
        }
        (hue, chroma) = next;
    }

    log::warn!(
        "munsell search for ({}, {}) at value {value} did not converge in {} iterations",
        target.0,
        target.1,
        solver.max_iterations
    );
    table::chromaticity(hue, value, chroma)
        .map(|_| Munsell::new(hue, value, chroma))
        .with_flags(Flags::NOT_CONVERGED)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        assert_component_eq,
        models::{LinearRgb, Rgb},
    };

    fn hue_difference(a: Component, b: Component) -> Component {
        let d = (a - b).rem_euclid(HUE_PERIOD);
        d.min(HUE_PERIOD - d)
    }

    #[test]
    fn value_and_luminance() {
        assert_component_eq!(value_to_luminance(0.0), 0.0);
        assert_component_eq!(value_to_luminance(10.0), 1.0, 1.0e-4);
        assert_component_eq!(value_to_luminance(5.0), 0.1927184375, 1.0e-9);

        let solver = SolverLimits::default();
        for value in [0.05, 0.5, 1.0, 3.3, 5.0, 8.7, 10.0] {
            let back = luminance_to_value(value_to_luminance(value), &solver);
            assert!(back.is_converged());
            assert_component_eq!(back.value, value, 1.0e-9);
        }
        assert_eq!(luminance_to_value(0.0, &solver).value, 0.0);
    }

    #[test]
    fn neutral_gray_is_gray_rgb() {
        let gray = Munsell::new(0.0, 5.0, 0.0);
        let xyz = gray.to_xyz(Illuminant::D65);
        assert!(xyz.flags.is_empty());
        let rgb = xyz.value.to_linear_rgb(Illuminant::D65).to_rgb().value;
        assert_component_eq!(rgb.red, rgb.green, 1.0e-6);
        assert_component_eq!(rgb.green, rgb.blue, 1.0e-6);

        let back = Munsell::from_xyz(&xyz.value, Illuminant::D65, &SolverLimits::default());
        assert!(back.flags.is_empty());
        assert_component_eq!(back.value.value, 5.0, 1.0e-9);
        assert_component_eq!(back.value.chroma, 0.0, 1.0e-6);
    }

    #[test]
    fn hue_wraps_at_hundred() {
        let a = Munsell::new(0.0, 5.0, 4.0).to_yxy().value;
        let b = Munsell::new(100.0, 5.0, 4.0).to_yxy().value;
        assert_eq!(a, b);
        let c = Munsell::new(-2.5, 5.0, 4.0).to_yxy().value;
        let d = Munsell::new(97.5, 5.0, 4.0).to_yxy().value;
        assert_eq!(c, d);
    }

    #[test]
    fn round_trip_through_chromaticity() {
        let solver = SolverLimits::default();
        for munsell in [
            Munsell::new(5.0, 4.0, 10.0),
            Munsell::new(12.5, 6.0, 8.0),
            Munsell::new(67.5, 5.0, 6.0),
            Munsell::new(75.0, 3.0, 8.0),
            Munsell::new(99.99, 5.0, 4.0),
            Munsell::new(25.0, 8.0, 10.0),
            Munsell::new(52.5, 7.0, 4.0),
        ] {
            let yxy = munsell.to_yxy();
            assert!(yxy.flags.is_empty());
            let back = Munsell::from_yxy(&yxy.value, &solver);
            assert!(back.is_converged());
            assert!(hue_difference(back.value.hue, munsell.hue) < 1.0e-4);
            assert_component_eq!(back.value.value, munsell.value, 1.0e-9);
            assert_component_eq!(back.value.chroma, munsell.chroma, 1.0e-4);
        }
    }

    #[test]
    fn round_trip_through_srgb() {
        let solver = SolverLimits::default();
        for rgb in [
            Rgb::new(200.0, 40.0, 40.0),
            Rgb::new(30.0, 120.0, 200.0),
            Rgb::new(90.0, 160.0, 60.0),
        ] {
            let linear = rgb.to_linear_rgb().value;
            let xyz = Xyz::from_linear_rgb(&linear, Illuminant::D65);
            let munsell = Munsell::from_xyz(&xyz, Illuminant::D65, &solver);
            assert!(munsell.is_converged());
            let back = munsell.value.to_xyz(Illuminant::D65).value.to_linear_rgb(Illuminant::D65);
            let LinearRgb { red, green, blue } = back;
            assert_component_eq!(red, linear.red, 1.0e-5);
            assert_component_eq!(green, linear.green, 1.0e-5);
            assert_component_eq!(blue, linear.blue, 1.0e-5);
        }
    }

    #[test]
    fn beyond_the_table_is_flagged() {
        let vivid = Munsell::new(5.0, 4.0, 30.0);
        let yxy = vivid.to_yxy();
        assert!(yxy.is_out_of_gamut());
        let back = Munsell::from_yxy(&yxy.value, &SolverLimits::default());
        assert!(back.is_out_of_gamut());
        assert!(back.is_converged());
        assert_component_eq!(back.value.chroma, 30.0, 1.0e-4);
    }

    #[test]
    fn matches_published_renotation_point() {
        // 4.2YR 8.1/5.3 is (0.38737, 0.35752) with Y 0.59362 in the renotation data.
        let yxy = Munsell::new(14.2, 8.1, 5.3).to_yxy();
        assert!(yxy.flags.is_empty());
        assert_component_eq!(yxy.value.luminance, 0.59362, 1.0e-5);
        assert_component_eq!(yxy.value.x, 0.38737, 5.0e-4);
        assert_component_eq!(yxy.value.y, 0.35752, 5.0e-4);
    }

    #[test]
    fn pastels_are_inside_the_table() {
        let solver = SolverLimits::default();
        for rgb in [
            Rgb::new(255.0, 180.0, 180.0),
            Rgb::new(230.0, 160.0, 160.0),
            Rgb::new(255.0, 255.0, 200.0),
        ] {
            let xyz = Xyz::from_linear_rgb(&rgb.to_linear_rgb().value, Illuminant::D65);
            let munsell = Munsell::from_xyz(&xyz, Illuminant::D65, &solver);
            assert!(munsell.flags.is_empty(), "{rgb:?} gave {munsell:?}");
        }
    }

    #[test]
    fn srgb_cube_is_inside_the_table() {
        let solver = SolverLimits::default();
        let levels = (0..=255).step_by(51).map(|c| c as Component);
        for red in levels.clone() {
            for green in levels.clone() {
                for blue in levels.clone() {
                    let rgb = Rgb::new(red, green, blue);
                    let xyz = Xyz::from_linear_rgb(&rgb.to_linear_rgb().value, Illuminant::D65);
                    let munsell = Munsell::from_xyz(&xyz, Illuminant::D65, &solver);
                    assert!(munsell.flags.is_empty(), "{rgb:?} gave {munsell:?}");
                }
            }
        }
    }

    #[test]
    fn iteration_cap_reports_not_converged() {
        let yxy = Munsell::new(12.5, 6.0, 8.0).to_yxy().value;
        let solver = SolverLimits {
            max_iterations: 0,
            ..SolverLimits::default()
        };
        let result = Munsell::from_yxy(&yxy, &solver);
        assert!(!result.is_converged());
        assert!(result.value.value.is_finite());
        assert!(result.value.chroma >= 0.0);
    }
}
