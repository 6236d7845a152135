//! Simulate dichromatic color vision.
//!
//! Protanopes lack the long wavelength cones and deuteranopes the medium
//! wavelength ones. Both see colors on a plane of cone space, spanned by the
//! neutral axis and the blue primary, which every color is projected onto
//! along the missing cone's axis. [`VisionModel::Okajima2007`] rescales the
//! projection afterwards so the stimulus of the remaining cones relative to
//! white is kept.

use crate::{
    color::{Component, Components},
    math::{transform, transform_3x3, Transform, EPSILON},
    models::{LinearRgb, Lms, Xyz},
    options::{Illuminant, VisionModel},
};

/// The kinds of dichromacy that can be simulated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Deficiency {
    /// No functional long wavelength cones.
    Protanopia,
    /// No functional medium wavelength cones.
    Deuteranopia,
}

// Replaces L with a combination of M and S that keeps white and the sRGB
// blue primary fixed.
#[allow(clippy::excessive_precision)]
#[rustfmt::skip]
const PROTANOPIA: Transform = transform_3x3(
    0.0, 1.0511639480453259, -0.05116235362923224,
    0.0, 1.0,                 0.0,
    0.0, 0.0,                 1.0,
);

#[allow(clippy::excessive_precision)]
#[rustfmt::skip]
const DEUTERANOPIA: Transform = transform_3x3(
    1.0,                0.0, 0.0,
    0.9513263862022029, 0.0, 0.04867209698769667,
    0.0,                0.0, 1.0,
);

/// Gamma of the display model used by the linear RGB entry points.
const DISPLAY_GAMMA: Component = 2.2;

/// Gain and offset that keep the simulated colors of the linear RGB entry
/// points inside the sRGB gamut.
const COMPRESSION: (Component, Component) = (0.992052, 0.003974);

impl Deficiency {
    fn projection(&self) -> &'static Transform {
        match self {
            Deficiency::Protanopia => &PROTANOPIA,
            Deficiency::Deuteranopia => &DEUTERANOPIA,
        }
    }
}

/// The cone response of the reference white.
fn white_lms() -> Lms {
    Lms::from_xyz(&Xyz::white(Illuminant::D65))
}

/// Simulate a dichromat's view of cone responses.
pub fn simulate_lms(lms: &Lms, deficiency: Deficiency, model: VisionModel) -> Lms {
    let projected = transform(deficiency.projection(), lms.to_components());

    match model {
        VisionModel::Brettel1997 => Lms::from(projected),
        VisionModel::Okajima2007 => {
            let white = white_lms().to_components();
            let relative = projected.zip_map(&white, |v, w| v / w);
            let mean = (relative.0 + relative.1 + relative.2) / 3.0;
            if mean.abs() < EPSILON {
                return Lms::from(projected);
            }
            let kept = match deficiency {
                Deficiency::Protanopia => lms.medium / white.1,
                Deficiency::Deuteranopia => lms.long / white.0,
            };
            Lms::from(projected * (kept / mean))
        }
    }
}

/// Simulate protanopia on cone responses.
pub fn lms_to_protanopia(lms: &Lms, model: VisionModel) -> Lms {
    simulate_lms(lms, Deficiency::Protanopia, model)
}

/// Simulate deuteranopia on cone responses.
pub fn lms_to_deuteranopia(lms: &Lms, model: VisionModel) -> Lms {
    simulate_lms(lms, Deficiency::Deuteranopia, model)
}

fn compress(components: Components) -> Components {
    let (gain, offset) = COMPRESSION;
    components.map(|v| {
        let encoded = v.signum() * v.abs().powf(1.0 / DISPLAY_GAMMA);
        let encoded = gain * encoded + offset;
        encoded.signum() * encoded.abs().powf(DISPLAY_GAMMA)
    })
}

fn decompress(components: Components) -> Components {
    let (gain, offset) = COMPRESSION;
    components.map(|v| {
        let encoded = v.signum() * v.abs().powf(1.0 / DISPLAY_GAMMA);
        let encoded = (encoded - offset) / gain;
        encoded.signum() * encoded.abs().powf(DISPLAY_GAMMA)
    })
}

/// Simulate a dichromat's view of a linear sRGB color. The color is first
/// compressed slightly towards gray so the simulation stays inside the
/// gamut, then taken through cone space, then expanded again.
pub fn simulate_linear_rgb(linear: &LinearRgb, deficiency: Deficiency, model: VisionModel) -> LinearRgb {
    let compressed = LinearRgb::from(compress(linear.to_components()));
    let lms = Lms::from_xyz(&Xyz::from_linear_rgb(&compressed, Illuminant::D65));
    let simulated = simulate_lms(&lms, deficiency, model)
        .to_xyz()
        .to_linear_rgb(Illuminant::D65);
    LinearRgb::from(decompress(simulated.to_components()))
}

/// Simulate protanopia on a linear sRGB color.
pub fn lrgb_to_protanopia(linear: &LinearRgb, model: VisionModel) -> LinearRgb {
    simulate_linear_rgb(linear, Deficiency::Protanopia, model)
}

/// Simulate deuteranopia on a linear sRGB color.
pub fn lrgb_to_deuteranopia(linear: &LinearRgb, model: VisionModel) -> LinearRgb {
    simulate_linear_rgb(linear, Deficiency::Deuteranopia, model)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_component_eq, assert_components_eq};

    const MODELS: [VisionModel; 2] = [VisionModel::Brettel1997, VisionModel::Okajima2007];
    const DEFICIENCIES: [Deficiency; 2] = [Deficiency::Protanopia, Deficiency::Deuteranopia];

    fn lms_of(linear: LinearRgb) -> Lms {
        Lms::from_xyz(&Xyz::from_linear_rgb(&linear, Illuminant::D65))
    }

    #[test]
    fn red_loses_its_long_wavelength_response() {
        let red = lms_of(LinearRgb::new(1.0, 0.0, 0.0));
        assert_component_eq!(red.long, 0.31396, 1.0e-4);
        for model in MODELS {
            let simulated = lms_to_protanopia(&red, model);
            assert!(simulated.long < red.long);
        }
        let brettel = lms_to_protanopia(&red, VisionModel::Brettel1997);
        assert_component_eq!(brettel.long, 0.16239, 1.0e-4);
        assert_eq!(brettel.medium, red.medium);
        assert_eq!(brettel.short, red.short);
    }

    #[test]
    fn white_and_blue_are_unchanged() {
        for linear in [LinearRgb::new(1.0, 1.0, 1.0), LinearRgb::new(0.0, 0.0, 1.0)] {
            let lms = lms_of(linear);
            for deficiency in DEFICIENCIES {
                let simulated = simulate_lms(&lms, deficiency, VisionModel::Brettel1997);
                assert_components_eq!(simulated.to_components(), lms.to_components(), 1.0e-4);
            }
        }

        let white = LinearRgb::new(1.0, 1.0, 1.0);
        for model in MODELS {
            for deficiency in DEFICIENCIES {
                let simulated = simulate_linear_rgb(&white, deficiency, model);
                assert_components_eq!(simulated.to_components(), white.to_components(), 1.0e-3);
            }
        }
    }

    #[test]
    fn entry_points_agree() {
        let linear = LinearRgb::new(0.8, 0.3, 0.1);
        for model in MODELS {
            for deficiency in DEFICIENCIES {
                let direct = simulate_linear_rgb(&linear, deficiency, model);

                let compressed = LinearRgb::from(compress(linear.to_components()));
                let through_lms = simulate_lms(&lms_of(compressed), deficiency, model)
                    .to_xyz()
                    .to_linear_rgb(Illuminant::D65);
                let expanded = decompress(through_lms.to_components());

                assert_components_eq!(direct.to_components(), expanded, 1.0e-12);
            }
        }
        let protan = lrgb_to_protanopia(&linear, VisionModel::Brettel1997);
        let deutan = lrgb_to_deuteranopia(&linear, VisionModel::Brettel1997);
        assert_ne!(protan, deutan);
    }

    #[test]
    fn compression_round_trip() {
        let components = Components(0.25, 0.0, 0.9);
        assert_components_eq!(decompress(compress(components)), components, 1.0e-12);
    }

    #[test]
    fn okajima_keeps_the_remaining_cone() {
        let lms = lms_of(LinearRgb::new(0.2, 0.6, 0.3));
        let white = white_lms();
        let simulated = lms_to_protanopia(&lms, VisionModel::Okajima2007);
        let relative = Components(
            simulated.long / white.long,
            simulated.medium / white.medium,
            simulated.short / white.short,
        );
        let mean = (relative.0 + relative.1 + relative.2) / 3.0;
        assert_component_eq!(mean, lms.medium / white.medium, 1.0e-9);
    }
}
