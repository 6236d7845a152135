//! Model a color as cone responses.

use crate::{
    color::{Component, HasSpace, Space},
    math::{transform, transform_3x3, Transform},
    models::Xyz,
};

tincture_macros::gen_model! {
    /// Long, medium and short wavelength cone responses, computed from D65
    /// relative XYZ with the Hunt-Pointer-Estevez matrix.
    pub struct Lms {
        /// The long wavelength (red) cone response.
        long: Component,
        /// The medium wavelength (green) cone response.
        medium: Component,
        /// The short wavelength (blue) cone response.
        short: Component,
    }
}

impl HasSpace for Lms {
    const SPACE: Space = Space::Lms;
}

#[rustfmt::skip]
const XYZ_TO_LMS: Transform = transform_3x3(
     0.40024, 0.7076,  -0.08081,
    -0.2263,  1.16532,  0.0457,
     0.0,     0.0,      0.91822,
);

#[allow(clippy::excessive_precision)]
#[rustfmt::skip]
const LMS_TO_XYZ: Transform = transform_3x3(
    1.8599363874558397, -1.1293816185800916,  0.2198974095961933,
    0.3611914362417676,  0.6388124632850422, -0.0000063705968387,
    0.0,                 0.0,                 1.0890636230968613,
);

impl Lms {
    /// Convert D65 relative XYZ to cone responses.
    pub fn from_xyz(xyz: &Xyz) -> Self {
        Self::from(transform(&XYZ_TO_LMS, xyz.to_components()))
    }

    /// Convert cone responses to D65 relative XYZ.
    pub fn to_xyz(&self) -> Xyz {
        Xyz::from(transform(&LMS_TO_XYZ, self.to_components()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_components_eq, options::Illuminant, Components};

    #[test]
    fn white_is_balanced() {
        let lms = Lms::from_xyz(&Xyz::white(Illuminant::D65));
        assert_components_eq!(lms.to_components(), Components(1.0, 1.0, 1.0), 1.0e-4);
    }

    #[test]
    fn xyz_round_trip() {
        for xyz in [Xyz::new(0.2, 0.3, 0.4), Xyz::new(0.95, 1.0, 1.09), Xyz::new(0.0, 0.0, 0.0)] {
            let back = Lms::from_xyz(&xyz).to_xyz();
            assert_components_eq!(back.to_components(), xyz.to_components(), 1.0e-9);
        }
    }
}
