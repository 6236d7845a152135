//! Model a color in the CIE-Lab color space, in rectangular and polar form.

use crate::{
    color::{Component, Components, HasSpace, Space},
    math::{almost_zero, normalize_hue},
    models::Xyz,
    options::Illuminant,
};

const KAPPA: Component = 24389.0 / 27.0;
const EPSILON: Component = 216.0 / 24389.0;

tincture_macros::gen_model! {
    /// The model for a color specified in the CIE-Lab color space with the
    /// rectangular orthogonal form.
    pub struct Lab {
        /// The lightness component, 0 for black and 100 for the reference
        /// white.
        lightness: Component,
        /// The a component, green to red.
        a: Component,
        /// The b component, blue to yellow.
        b: Component,
    }
}

impl HasSpace for Lab {
    const SPACE: Space = Space::Lab;
}

tincture_macros::gen_model! {
    /// The model for a color specified in the CIE-Lab color space with the
    /// cylindrical polar form.
    pub struct Lch {
        /// The lightness component.
        lightness: Component,
        /// The chroma component, never negative.
        chroma: Component,
        /// The hue component in degrees, in `0..360`.
        hue: Component,
    }
}

impl HasSpace for Lch {
    const SPACE: Space = Space::Lch;
}

impl Lab {
    /// Convert XYZ relative to `illuminant` to Lab relative to the same white.
    pub fn from_xyz(xyz: &Xyz, illuminant: Illuminant) -> Self {
        let white = illuminant.white_point();
        let adapted = xyz.to_components().zip_map(&white, |v, w| v / w);

        let Components(f0, f1, f2) = adapted.map(|v| {
            if v > EPSILON {
                v.cbrt()
            } else {
                (KAPPA * v + 16.0) / 116.0
            }
        });

        let lightness = 116.0 * f1 - 16.0;
        let a = 500.0 * (f0 - f1);
        let b = 200.0 * (f1 - f2);

        Lab::new(lightness, a, b)
    }

    /// Convert to XYZ relative to `illuminant`.
    pub fn to_xyz(&self, illuminant: Illuminant) -> Xyz {
        // To avoid accessing the values through self all the time.
        let (lightness, a, b) = (self.lightness, self.a, self.b);

        let f1 = (lightness + 16.0) / 116.0;
        let f0 = f1 + a / 500.0;
        let f2 = f1 - b / 200.0;

        let f0_cubed = f0 * f0 * f0;
        let x = if f0_cubed > EPSILON {
            f0_cubed
        } else {
            (116.0 * f0 - 16.0) / KAPPA
        };

        let y = if lightness > KAPPA * EPSILON {
            f1 * f1 * f1
        } else {
            lightness / KAPPA
        };

        let f2_cubed = f2 * f2 * f2;
        let z = if f2_cubed > EPSILON {
            f2_cubed
        } else {
            (116.0 * f2 - 16.0) / KAPPA
        };

        Xyz::from(Components(x, y, z).zip_map(&illuminant.white_point(), |v, w| v * w))
    }

    /// Convert this rectangular model into its cylindrical polar form. The hue
    /// of an achromatic color is 0.
    pub fn to_lch(&self) -> Lch {
        let chroma = self.a.hypot(self.b);
        let hue = if almost_zero(chroma) {
            0.0
        } else {
            normalize_hue(self.b.atan2(self.a).to_degrees(), 360.0)
        };

        Lch::new(self.lightness, chroma, hue)
    }
}

impl Lch {
    /// Convert this cylindrical polar model into its orthogonal rectangular
    /// form.
    pub fn to_lab(&self) -> Lab {
        let hue = self.hue.to_radians();
        let a = self.chroma * hue.cos();
        let b = self.chroma * hue.sin();

        Lab::new(self.lightness, a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_component_eq, assert_components_eq, models::Rgb};

    #[test]
    fn white_is_full_lightness() {
        for illuminant in [Illuminant::D65, Illuminant::D50, Illuminant::C] {
            let lab = Lab::from_xyz(&Xyz::white(illuminant), illuminant);
            assert_components_eq!(lab.to_components(), Components(100.0, 0.0, 0.0), 1.0e-9);
        }
    }

    #[test]
    fn srgb_red() {
        let linear = Rgb::new(255.0, 0.0, 0.0).to_linear_rgb().value;
        let xyz = Xyz::from_linear_rgb(&linear, Illuminant::D65);
        let lab = Lab::from_xyz(&xyz, Illuminant::D65);
        assert_component_eq!(lab.lightness, 53.24, 0.5);
        assert_component_eq!(lab.a, 80.09, 0.5);
        assert_component_eq!(lab.b, 67.20, 0.5);
    }

    #[test]
    fn xyz_round_trip() {
        let samples = [
            Xyz::new(0.2, 0.3, 0.4),
            Xyz::new(0.001, 0.002, 0.0005),
            Xyz::new(0.0, 0.0, 0.0),
            Xyz::new(0.9, 0.95, 1.0),
        ];
        for illuminant in [Illuminant::D65, Illuminant::D50] {
            for xyz in samples {
                let back = Lab::from_xyz(&xyz, illuminant).to_xyz(illuminant);
                assert_components_eq!(back.to_components(), xyz.to_components(), 1.0e-9);
            }
        }
    }

    #[test]
    fn polar_round_trip() {
        for lab in [
            Lab::new(50.0, 20.0, -30.0),
            Lab::new(75.0, -60.0, 5.0),
            Lab::new(20.0, -1.0, -1.0),
        ] {
            let lch = lab.to_lch();
            assert!(lch.chroma >= 0.0);
            assert!((0.0..360.0).contains(&lch.hue));
            assert_components_eq!(lch.to_lab().to_components(), lab.to_components(), 1.0e-9);
        }
    }

    #[test]
    fn achromatic_hue_is_zero() {
        let lch = Lab::new(40.0, 0.0, 0.0).to_lch();
        assert_eq!(lch.chroma, 0.0);
        assert_eq!(lch.hue, 0.0);
        let lch = Lab::new(40.0, 0.0, -5.0).to_lch();
        assert_component_eq!(lch.hue, 270.0, 1.0e-9);
    }
}
