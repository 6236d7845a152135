//! Convert components between any two color spaces.
//!
//! Each color space is modeled with its own type and conversions are only
//! implemented between neighbouring models. [`convert`] takes the direct
//! route where one exists and otherwise goes through CIE-XYZ relative to
//! D65, which every space is connected to. Every pair of spaces therefore
//! has a path and conversion never fails, problems are reported through the
//! [`Flags`] of the result instead.
//!
//! ```rust
//! use tincture::{convert::convert, Components, Options, Space};
//! let lab = convert(Components(255.0, 0.0, 0.0), Space::Rgb, Space::Lab, &Options::default());
//! assert!(lab.flags.is_empty());
//! assert!((lab.value.0 - 53.24).abs() < 0.01);
//! ```

use crate::{
    color::{Color, Components, Flagged, Flags, Space},
    models::{Lab, Lch, LinearRgb, Lms, Munsell, Pccs, Rgb, Xyz, Yxy},
    options::{Illuminant, Options},
};

fn linear_rgb_flags(linear: &LinearRgb) -> Flags {
    if linear.in_gamut() {
        Flags::empty()
    } else {
        Flags::OUT_OF_GAMUT
    }
}

/// Convert components in `space` to XYZ relative to D65.
fn to_hub(components: Components, space: Space, options: &Options) -> Flagged<Xyz> {
    let illuminant = options.illuminant;
    let from_linear = |linear: LinearRgb| Xyz::from_linear_rgb(&linear, Illuminant::D65);

    match space {
        Space::Rgb => Rgb::from(components).to_linear_rgb().map(from_linear),
        Space::Lrgb => Flagged::clean(from_linear(LinearRgb::from(components))),
        Space::Xyz => Flagged::clean(Xyz::from(components).adapt(illuminant, Illuminant::D65)),
        Space::Lab => Flagged::clean(
            Lab::from(components)
                .to_xyz(illuminant)
                .adapt(illuminant, Illuminant::D65),
        ),
        Space::Lch => Flagged::clean(
            Lch::from(components)
                .to_lab()
                .to_xyz(illuminant)
                .adapt(illuminant, Illuminant::D65),
        ),
        Space::Lms => Flagged::clean(Lms::from(components).to_xyz()),
        Space::Yxy => Flagged::clean(Yxy::from(components).to_xyz().adapt(illuminant, Illuminant::D65)),
        Space::Munsell => Munsell::from(components).to_xyz(Illuminant::D65),
        Space::Pccs => Pccs::from(components)
            .to_munsell(options.method)
            .to_xyz(Illuminant::D65),
    }
}

/// Convert XYZ relative to D65 to components in `space`.
fn from_hub(xyz: &Xyz, space: Space, options: &Options) -> Flagged<Components> {
    let illuminant = options.illuminant;
    let adapted = || xyz.adapt(Illuminant::D65, illuminant);

    match space {
        Space::Rgb => xyz.to_linear_rgb(Illuminant::D65).to_rgb().map(Components::from),
        Space::Lrgb => {
            let linear = xyz.to_linear_rgb(Illuminant::D65);
            Flagged::new(linear.to_components(), linear_rgb_flags(&linear))
        }
        Space::Xyz => Flagged::clean(adapted().to_components()),
        Space::Lab => Flagged::clean(Lab::from_xyz(&adapted(), illuminant).to_components()),
        Space::Lch => Flagged::clean(Lab::from_xyz(&adapted(), illuminant).to_lch().to_components()),
        Space::Lms => Flagged::clean(Lms::from_xyz(xyz).to_components()),
        Space::Yxy => Flagged::clean(Yxy::from_xyz(&adapted(), illuminant).to_components()),
        Space::Munsell => Munsell::from_xyz(xyz, Illuminant::D65, &options.solver).map(Components::from),
        Space::Pccs => Munsell::from_xyz(xyz, Illuminant::D65, &options.solver)
            .and_then(|munsell| Pccs::from_munsell(&munsell, options.method, &options.solver))
            .map(Components::from),
    }
}

/// Conversions between neighbouring spaces that do not need the hub.
fn direct(components: Components, from: Space, to: Space, options: &Options) -> Option<Flagged<Components>> {
    use Space as S;

    let illuminant = options.illuminant;

    Some(match (from, to) {
        (S::Rgb, S::Lrgb) => Rgb::from(components).to_linear_rgb().map(Components::from),
        (S::Lrgb, S::Rgb) => LinearRgb::from(components).to_rgb().map(Components::from),
        (S::Lrgb, S::Xyz) => {
            let linear = LinearRgb::from(components);
            Flagged::clean(Xyz::from_linear_rgb(&linear, illuminant).to_components())
        }
        (S::Xyz, S::Lrgb) => {
            let linear = Xyz::from(components).to_linear_rgb(illuminant);
            Flagged::new(linear.to_components(), linear_rgb_flags(&linear))
        }
        (S::Xyz, S::Lab) => Flagged::clean(Lab::from_xyz(&Xyz::from(components), illuminant).to_components()),
        (S::Lab, S::Xyz) => Flagged::clean(Lab::from(components).to_xyz(illuminant).to_components()),
        (S::Lab, S::Lch) => Flagged::clean(Lab::from(components).to_lch().to_components()),
        (S::Lch, S::Lab) => Flagged::clean(Lch::from(components).to_lab().to_components()),
        (S::Xyz, S::Yxy) => Flagged::clean(Yxy::from_xyz(&Xyz::from(components), illuminant).to_components()),
        (S::Yxy, S::Xyz) => Flagged::clean(Yxy::from(components).to_xyz().to_components()),
        (S::Munsell, S::Pccs) => {
            Pccs::from_munsell(&Munsell::from(components), options.method, &options.solver).map(Components::from)
        }
        (S::Pccs, S::Munsell) => Flagged::clean(Pccs::from(components).to_munsell(options.method).to_components()),
        _ => return None,
    })
}

/// Convert `components` from the `from` space to the `to` space.
///
/// XYZ, Yxy, Lab and LCh are taken relative to `options.illuminant`, LMS is
/// always relative to D65 and Munsell and PCCS are relative to illuminant C.
/// Results outside the target gamut and solvers that ran out of iterations
/// are reported through the flags of the result.
pub fn convert(components: Components, from: Space, to: Space, options: &Options) -> Flagged<Components> {
    if from == to {
        return Flagged::clean(components);
    }

    if let Some(result) = direct(components, from, to, options) {
        return result;
    }

    to_hub(components, from, options).and_then(|xyz| from_hub(&xyz, to, options))
}

impl Color {
    /// Convert this color from its current color space to the specified
    /// color space. Flags raised on the way are added to the flags the color
    /// already carries.
    pub fn to_space(&self, space: Space, options: &Options) -> Self {
        let converted = convert(self.components, self.space, space, options);
        Color {
            components: converted.value,
            space,
            flags: self.flags | converted.flags,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        assert_component_eq, assert_components_eq,
        options::{Method, SolverLimits},
    };

    const SAMPLES: [Components; 6] = [
        Components(200.0, 40.0, 40.0),
        Components(60.0, 110.0, 170.0),
        Components(90.0, 160.0, 60.0),
        Components(128.0, 128.0, 128.0),
        Components(250.0, 220.0, 30.0),
        Components(40.0, 30.0, 60.0),
    ];

    fn tolerance(space: Space) -> crate::Component {
        match space {
            // The chromaticity search stops within a small tolerance.
            Space::Munsell | Space::Pccs => 1.0e-3,
            _ => 1.0e-6,
        }
    }

    #[test]
    fn round_trip_through_every_space() {
        for illuminant in [Illuminant::D65, Illuminant::D50] {
            let options = Options::default().with_illuminant(illuminant);
            for rgb in SAMPLES {
                for space in Space::ALL {
                    let there = convert(rgb, Space::Rgb, space, &options);
                    assert!(there.is_converged(), "{space:?}");
                    assert!(!there.is_out_of_gamut(), "{space:?}");
                    let back = convert(there.value, space, Space::Rgb, &options);
                    assert!(back.flags.is_empty(), "{space:?}");
                    assert_components_eq!(back.value, rgb, tolerance(space));
                }
            }
        }
    }

    #[test]
    fn every_pair_has_a_path() {
        let options = Options::default();
        let rgb = Components(180.0, 90.0, 40.0);
        for from in Space::ALL {
            let start = convert(rgb, Space::Rgb, from, &options).value;
            for to in Space::ALL {
                let result = convert(start, from, to, &options);
                assert!(result.value.is_finite(), "{from:?} -> {to:?}");
            }
        }
    }

    #[test]
    fn direct_and_hub_routes_agree() {
        let options = Options::default().with_illuminant(Illuminant::D50);
        let xyz = Components(0.3, 0.25, 0.2);
        let direct = convert(xyz, Space::Xyz, Space::Lab, &options).value;
        let hub = from_hub(&to_hub(xyz, Space::Xyz, &options).value, Space::Lab, &options).value;
        assert_components_eq!(direct, hub, 1.0e-9);
    }

    #[test]
    fn white_point_to_lab() {
        let options = Options::default();
        let lab = convert(Illuminant::D65.white_point(), Space::Xyz, Space::Lab, &options);
        assert_components_eq!(lab.value, Components(100.0, 0.0, 0.0), 1.0e-9);
    }

    #[test]
    fn red_to_lab() {
        let lab = convert(Components(255.0, 0.0, 0.0), Space::Rgb, Space::Lab, &Options::default()).value;
        assert_component_eq!(lab.0, 53.24, 0.5);
        assert_component_eq!(lab.1, 80.09, 0.5);
        assert_component_eq!(lab.2, 67.20, 0.5);
    }

    #[test]
    fn neutral_munsell_is_gray() {
        let rgb = convert(Components(0.0, 5.0, 0.0), Space::Munsell, Space::Rgb, &Options::default());
        assert!(rgb.flags.is_empty());
        assert_component_eq!(rgb.value.0, rgb.value.1, 1.0e-6);
        assert_component_eq!(rgb.value.1, rgb.value.2, 1.0e-6);
    }

    #[test]
    fn munsell_hue_wraps_at_hundred() {
        let options = Options::default();
        let a = convert(Components(0.0, 5.0, 6.0), Space::Munsell, Space::Lab, &options).value;
        let b = convert(Components(100.0, 5.0, 6.0), Space::Munsell, Space::Lab, &options).value;
        assert_components_eq!(a, b, 1.0e-12);
    }

    #[test]
    fn pccs_hue_wraps_at_twenty_four() {
        for method in [Method::Concise, Method::Accurate] {
            let options = Options::default().with_method(method);
            let a = convert(Components(0.0, 5.0, 6.0), Space::Pccs, Space::Lab, &options).value;
            let b = convert(Components(24.0, 5.0, 6.0), Space::Pccs, Space::Lab, &options).value;
            assert_components_eq!(a, b, 1.0e-12);
        }
    }

    #[test]
    fn out_of_gamut_is_flagged() {
        let options = Options::default();
        let lab = Components(50.0, 120.0, 0.0);
        let rgb = convert(lab, Space::Lab, Space::Rgb, &options);
        assert!(rgb.is_out_of_gamut());
        let linear = convert(lab, Space::Lab, Space::Lrgb, &options);
        assert!(linear.is_out_of_gamut());
    }

    #[test]
    fn iteration_cap_is_flagged() {
        let options = Options::default().with_solver(SolverLimits {
            max_iterations: 0,
            ..SolverLimits::default()
        });
        let munsell = convert(Components(200.0, 40.0, 40.0), Space::Rgb, Space::Munsell, &options);
        assert!(!munsell.is_converged());
    }

    #[test]
    fn color_accumulates_flags() {
        let options = Options::default();
        let color = Color::new(Space::Lab, 50.0, 120.0, 0.0)
            .to_space(Space::Rgb, &options)
            .to_space(Space::Lab, &options);
        assert_eq!(color.space, Space::Lab);
        assert!(color.is_out_of_gamut());
    }
}
