//! Conversion options.
//!
//! Every choice that affects the result of a conversion lives in [`Options`],
//! which is passed by reference to the functions that need it. Nothing is
//! kept in global state, so callers with different settings can share the
//! crate freely.

use crate::color::{Component, Components};

/// How the Munsell/PCCS engine computes PCCS coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Method {
    /// Closed-form trigonometric approximations, no iteration.
    Concise,
    /// Table interpolation and Newton-Raphson solves.
    #[default]
    Accurate,
}

/// The physical model used to simulate dichromatic vision.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VisionModel {
    /// Projection onto the dichromat's plane, Brettel et al. (1997).
    #[default]
    Brettel1997,
    /// The same projection followed by the stimulus correction of Okajima
    /// and Kanbe (2007).
    Okajima2007,
}

/// Reference white points.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Illuminant {
    /// CIE standard illuminant D65, the white of sRGB.
    #[default]
    D65,
    /// CIE standard illuminant D50, the white of print workflows.
    D50,
    /// CIE illuminant C, the white the Munsell renotation is measured under.
    C,
}

impl Illuminant {
    /// The XYZ tristimulus values of the white point, normalized to `Y = 1`.
    #[allow(clippy::excessive_precision)]
    pub const fn white_point(&self) -> Components {
        match self {
            Illuminant::D65 => Components(0.9504559270516716, 1.0, 1.0890577507598784),
            Illuminant::D50 => Components(0.9642956764295677, 1.0, 0.8251046025104602),
            Illuminant::C => Components(0.980705971659919, 1.0, 1.1822494939271255),
        }
    }

    /// The CIE 1931 chromaticity of the white point.
    pub fn chromaticity(&self) -> (Component, Component) {
        let Components(x, y, z) = self.white_point();
        let sum = x + y + z;
        (x / sum, y / sum)
    }
}

/// Bounds for the iterative solvers.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolverLimits {
    /// The maximum number of iterations before a solver gives up and reports
    /// [`Flags::NOT_CONVERGED`](crate::Flags::NOT_CONVERGED).
    pub max_iterations: usize,
    /// Step size below which the PCCS saturation solve has converged.
    pub saturation_tolerance: Component,
    /// Chromaticity distance below which the Munsell search has converged.
    pub chromaticity_tolerance: Component,
}

impl Default for SolverLimits {
    fn default() -> Self {
        Self {
            max_iterations: 50,
            saturation_tolerance: 1.0e-3,
            chromaticity_tolerance: 1.0e-7,
        }
    }
}

/// The options for conversions and simulations.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Options {
    /// The Munsell/PCCS conversion method.
    pub method: Method,
    /// The dichromacy simulation model.
    pub vision: VisionModel,
    /// The white point XYZ, Yxy and Lab are relative to.
    pub illuminant: Illuminant,
    /// Bounds for the iterative solvers.
    pub solver: SolverLimits,
}

impl Options {
    /// Return these options with the given conversion method.
    #[must_use]
    pub fn with_method(self, method: Method) -> Self {
        Self { method, ..self }
    }

    /// Return these options with the given vision model.
    #[must_use]
    pub fn with_vision(self, vision: VisionModel) -> Self {
        Self { vision, ..self }
    }

    /// Return these options with the given reference white.
    #[must_use]
    pub fn with_illuminant(self, illuminant: Illuminant) -> Self {
        Self { illuminant, ..self }
    }

    /// Return these options with the given solver bounds.
    #[must_use]
    pub fn with_solver(self, solver: SolverLimits) -> Self {
        Self { solver, ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let options = Options::default();
        assert_eq!(options.method, Method::Accurate);
        assert_eq!(options.vision, VisionModel::Brettel1997);
        assert_eq!(options.illuminant, Illuminant::D65);
        assert_eq!(options.solver.max_iterations, 50);
    }

    #[test]
    fn builder_replaces_single_fields() {
        let options = Options::default()
            .with_method(Method::Concise)
            .with_vision(VisionModel::Okajima2007);
        assert_eq!(options.method, Method::Concise);
        assert_eq!(options.vision, VisionModel::Okajima2007);
        assert_eq!(options.illuminant, Illuminant::D65);
    }

    #[test]
    fn white_point_chromaticities() {
        let (x, y) = Illuminant::D65.chromaticity();
        approx::assert_abs_diff_eq!(x, 0.3127, epsilon = 1.0e-4);
        approx::assert_abs_diff_eq!(y, 0.3290, epsilon = 1.0e-4);
        let (x, y) = Illuminant::C.chromaticity();
        approx::assert_abs_diff_eq!(x, 0.31006, epsilon = 1.0e-5);
        approx::assert_abs_diff_eq!(y, 0.31616, epsilon = 1.0e-5);
    }
}
