//! Model a color as luminance plus chromaticity coordinates.

use crate::{
    color::{Component, HasSpace, Space},
    math::almost_zero,
    models::Xyz,
    options::Illuminant,
};

tincture_macros::gen_model! {
    /// Luminance `Y` and CIE 1931 chromaticity coordinates `x` and `y`.
    pub struct Yxy {
        /// The luminance, equal to XYZ `Y`.
        luminance: Component,
        /// The x chromaticity coordinate.
        x: Component,
        /// The y chromaticity coordinate.
        y: Component,
    }
}

impl HasSpace for Yxy {
    const SPACE: Space = Space::Yxy;
}

impl Yxy {
    /// Convert from XYZ. Black has no chromaticity of its own, so it takes
    /// the chromaticity of the white of `illuminant`.
    pub fn from_xyz(xyz: &Xyz, illuminant: Illuminant) -> Self {
        let sum = xyz.x + xyz.y + xyz.z;
        if almost_zero(sum) {
            let (x, y) = illuminant.chromaticity();
            return Self::new(xyz.y, x, y);
        }
        Self::new(xyz.y, xyz.x / sum, xyz.y / sum)
    }

    /// Convert to XYZ. A zero `y` coordinate can only describe black.
    pub fn to_xyz(&self) -> Xyz {
        if almost_zero(self.y) {
            return Xyz::new(0.0, 0.0, 0.0);
        }
        let scale = self.luminance / self.y;
        Xyz::new(self.x * scale, self.luminance, (1.0 - self.x - self.y) * scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_component_eq, assert_components_eq};

    #[test]
    fn xyz_round_trip() {
        for xyz in [Xyz::new(0.2, 0.3, 0.4), Xyz::new(0.95, 1.0, 1.09), Xyz::new(0.05, 0.01, 0.3)] {
            let back = Yxy::from_xyz(&xyz, Illuminant::D65).to_xyz();
            assert_components_eq!(back.to_components(), xyz.to_components(), 1.0e-9);
        }
    }

    #[test]
    fn white_chromaticity() {
        let yxy = Yxy::from_xyz(&Xyz::white(Illuminant::D65), Illuminant::D65);
        assert_component_eq!(yxy.luminance, 1.0);
        assert_component_eq!(yxy.x, 0.3127, 1.0e-4);
        assert_component_eq!(yxy.y, 0.3290, 1.0e-4);
    }

    #[test]
    fn black_takes_white_chromaticity() {
        let yxy = Yxy::from_xyz(&Xyz::new(0.0, 0.0, 0.0), Illuminant::C);
        assert_eq!(yxy.luminance, 0.0);
        let (x, y) = Illuminant::C.chromaticity();
        assert_eq!((yxy.x, yxy.y), (x, y));
        assert_eq!(Yxy::new(0.0, 0.3, 0.0).to_xyz(), Xyz::new(0.0, 0.0, 0.0));
    }
}
