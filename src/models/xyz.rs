//! Model a color in the CIE-XYZ color space.
//!
//! XYZ values carry no white point of their own. Every conversion that needs
//! one takes the [`Illuminant`] the values are relative to, and
//! [`Xyz::adapt`] moves values between illuminants.

use crate::{
    color::{Component, HasSpace, Space},
    math::{transform, transform_3x3, Transform},
    models::LinearRgb,
    options::Illuminant,
};

tincture_macros::gen_model! {
    /// A model for a color in the CIE-XYZ color space, with `Y = 1` for the
    /// reference white.
    pub struct Xyz {
        /// The X component of the color.
        x: Component,
        /// The Y component of the color, the relative luminance.
        y: Component,
        /// The Z component of the color.
        z: Component,
    }
}

impl HasSpace for Xyz {
    const SPACE: Space = Space::Xyz;
}

#[allow(clippy::excessive_precision)]
#[rustfmt::skip]
const LINEAR_RGB_TO_XYZ_D65: Transform = transform_3x3(
    0.41239079926595934, 0.357584339383878,   0.1804807884018343,
    0.21263900587151027, 0.715168678767756,   0.07219231536073371,
    0.01933081871559182, 0.11919477979462598, 0.9505321522496607,
);

#[allow(clippy::excessive_precision)]
#[rustfmt::skip]
const XYZ_D65_TO_LINEAR_RGB: Transform = transform_3x3(
     3.2409699419045226,  -1.537383177570094,   -0.4986107602930034,
    -0.9692436362808796,   1.8759675015077202,   0.04155505740717559,
     0.05563007969699366, -0.20397695888897652,  1.0569715142428786,
);

#[allow(clippy::excessive_precision)]
#[rustfmt::skip]
const LINEAR_RGB_TO_XYZ_D50: Transform = transform_3x3(
    0.4360657468742693, 0.3851515095901598, 0.1430784199651387,
    0.2224931771105652, 0.7168870130944826, 0.0606198097949524,
    0.0139239214631694, 0.0970813242314102, 0.7140993568158809,
);

#[allow(clippy::excessive_precision)]
#[rustfmt::skip]
const XYZ_D50_TO_LINEAR_RGB: Transform = transform_3x3(
     3.1341358529001186, -1.6173859980180429, -0.4906622179110976,
    -0.9787954765557779,  1.9162543773959881,  0.0334428733903670,
     0.0719553925579474, -0.2289767598151820,  1.4053860351131178,
);

// Linear Bradford adaptation.
#[allow(clippy::excessive_precision)]
#[rustfmt::skip]
const D65_TO_D50: Transform = transform_3x3(
     1.0479297925449969,   0.022946870601609652, -0.05019226628920524,
     0.02962780877005599,  0.9904344267538799,   -0.017073799063418826,
    -0.009243040646204504, 0.015055191490298152,  0.7518742814281371,
);

#[allow(clippy::excessive_precision)]
#[rustfmt::skip]
const D50_TO_D65: Transform = transform_3x3(
     0.955473421488075,   -0.02309845494876471,  0.06325924320057072,
    -0.0283697093338637,   1.0099953980813041,   0.021041441191917323,
     0.012314014864481998, -0.020507649298898964, 1.330365926242124,
);

// Von Kries adaptation on Hunt-Pointer-Estevez cone responses.
#[allow(clippy::excessive_precision)]
#[rustfmt::skip]
const C_TO_D65: Transform = transform_3x3(
     0.9972715505940309, -0.0094087529325639, -0.0153651874187203,
    -0.0010334847767100,  1.0007662880471522,  0.0002091408338570,
     0.0,                 0.0,                 0.9211742160635753,
);

#[allow(clippy::excessive_precision)]
#[rustfmt::skip]
const D65_TO_C: Transform = transform_3x3(
    1.0027456839010189, 0.0094273623189584,  0.0167236592724740,
    0.0010355288858157, 0.9992440342757875, -0.0002095929649139,
    0.0,                0.0,                 1.0855709838180974,
);

impl Xyz {
    /// Convert linear sRGB to XYZ relative to the given illuminant.
    pub fn from_linear_rgb(linear: &LinearRgb, illuminant: Illuminant) -> Self {
        let components = linear.to_components();
        match illuminant {
            Illuminant::D65 => Self::from(transform(&LINEAR_RGB_TO_XYZ_D65, components)),
            Illuminant::D50 => Self::from(transform(&LINEAR_RGB_TO_XYZ_D50, components)),
            Illuminant::C => Self::from(transform(&LINEAR_RGB_TO_XYZ_D65, components))
                .adapt(Illuminant::D65, Illuminant::C),
        }
    }

    /// Convert XYZ relative to the given illuminant to linear sRGB. The
    /// result is not clipped, use [`LinearRgb::in_gamut`] to check it.
    pub fn to_linear_rgb(&self, illuminant: Illuminant) -> LinearRgb {
        match illuminant {
            Illuminant::D65 => LinearRgb::from(transform(&XYZ_D65_TO_LINEAR_RGB, self.to_components())),
            Illuminant::D50 => LinearRgb::from(transform(&XYZ_D50_TO_LINEAR_RGB, self.to_components())),
            Illuminant::C => {
                let d65 = self.adapt(Illuminant::C, Illuminant::D65);
                LinearRgb::from(transform(&XYZ_D65_TO_LINEAR_RGB, d65.to_components()))
            }
        }
    }

    /// Chromatically adapt values relative to `from` so they are relative to
    /// `to`. D65 and D50 are related by the Bradford transform, illuminant C
    /// by a von Kries transform, both through D65.
    #[must_use]
    pub fn adapt(&self, from: Illuminant, to: Illuminant) -> Self {
        if from == to {
            return *self;
        }

        let d65 = match from {
            Illuminant::D65 => self.to_components(),
            Illuminant::D50 => transform(&D50_TO_D65, self.to_components()),
            Illuminant::C => transform(&C_TO_D65, self.to_components()),
        };

        Self::from(match to {
            Illuminant::D65 => d65,
            Illuminant::D50 => transform(&D65_TO_D50, d65),
            Illuminant::C => transform(&D65_TO_C, d65),
        })
    }

    /// The white point of the given illuminant.
    pub fn white(illuminant: Illuminant) -> Self {
        Self::from(illuminant.white_point())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_components_eq;

    const ILLUMINANTS: [Illuminant; 3] = [Illuminant::D65, Illuminant::D50, Illuminant::C];

    #[test]
    fn white_maps_to_white() {
        let white = LinearRgb::new(1.0, 1.0, 1.0);
        for illuminant in ILLUMINANTS {
            let xyz = Xyz::from_linear_rgb(&white, illuminant);
            assert_components_eq!(xyz.to_components(), illuminant.white_point(), 1.0e-9);
        }
    }

    #[test]
    fn known_primary() {
        let xyz = Xyz::from_linear_rgb(&LinearRgb::new(1.0, 0.0, 0.0), Illuminant::D65);
        assert_components_eq!(
            xyz.to_components(),
            crate::Components(0.41239079926595934, 0.21263900587151027, 0.01933081871559182),
            1.0e-12
        );
    }

    #[test]
    fn linear_rgb_round_trip() {
        let samples = [
            LinearRgb::new(0.2, 0.4, 0.6),
            LinearRgb::new(1.0, 0.0, 0.5),
            LinearRgb::new(0.0, 0.0, 0.0),
            LinearRgb::new(0.9, 0.85, 0.01),
        ];
        for illuminant in ILLUMINANTS {
            for linear in samples {
                let back = Xyz::from_linear_rgb(&linear, illuminant).to_linear_rgb(illuminant);
                assert_components_eq!(back.to_components(), linear.to_components(), 1.0e-9);
            }
        }
    }

    #[test]
    fn adaptation_moves_white_points() {
        for from in ILLUMINANTS {
            for to in ILLUMINANTS {
                let adapted = Xyz::white(from).adapt(from, to);
                assert_components_eq!(adapted.to_components(), to.white_point(), 1.0e-9);
            }
        }
    }

    #[test]
    fn adaptation_round_trip() {
        let xyz = Xyz::new(0.3, 0.25, 0.6);
        for from in ILLUMINANTS {
            for to in ILLUMINANTS {
                let back = xyz.adapt(from, to).adapt(to, from);
                assert_components_eq!(back.to_components(), xyz.to_components(), 1.0e-9);
            }
        }
    }
}
