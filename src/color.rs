//! A [`Color`] pairs three components with the color space they are
//! expressed in.

use bitflags::bitflags;
use std::ops::{Add, Mul, Sub};

#[cfg(not(feature = "f64"))]
/// A 32-bit floating point value that all components are stored as.
pub type Component = f32;

#[cfg(feature = "f64")]
/// A 64-bit floating point value that all components are stored as.
pub type Component = f64;

/// Represent the three components that describe any color.
///
/// The components carry no meaning on their own, the color space they are
/// expressed in has to be tracked alongside them.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Components(pub Component, pub Component, pub Component);

impl Components {
    /// Return new components with each component mapped with the given
    /// function.
    pub fn map(&self, f: impl Fn(Component) -> Component) -> Self {
        Self(f(self.0), f(self.1), f(self.2))
    }

    /// Combine two sets of components pairwise.
    pub fn zip_map(&self, other: &Self, f: impl Fn(Component, Component) -> Component) -> Self {
        Self(f(self.0, other.0), f(self.1, other.1), f(self.2, other.2))
    }

    /// The components as an array.
    pub fn to_array(&self) -> [Component; 3] {
        [self.0, self.1, self.2]
    }

    /// Returns true if all three components are finite.
    pub fn is_finite(&self) -> bool {
        self.0.is_finite() && self.1.is_finite() && self.2.is_finite()
    }
}

impl From<[Component; 3]> for Components {
    fn from([c0, c1, c2]: [Component; 3]) -> Self {
        Self(c0, c1, c2)
    }
}

impl From<Components> for [Component; 3] {
    fn from(value: Components) -> Self {
        value.to_array()
    }
}

impl Add for Components {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.zip_map(&rhs, |a, b| a + b)
    }
}

impl Sub for Components {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self.zip_map(&rhs, |a, b| a - b)
    }
}

impl Mul<Component> for Components {
    type Output = Self;

    fn mul(self, rhs: Component) -> Self::Output {
        self.map(|v| v * rhs)
    }
}

bitflags! {
    /// Advisory diagnostics raised by a conversion. None of them are errors,
    /// the converted value is always the best estimate available.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Flags : u8 {
        /// Set when a result lies outside the representable range of its
        /// color space, e.g. an RGB channel outside `0..=255` or a Munsell
        /// chroma beyond the tabulated data.
        const OUT_OF_GAMUT = 1 << 0;
        /// Set when an iterative solver hit its iteration cap before reaching
        /// the requested tolerance.
        const NOT_CONVERGED = 1 << 1;
    }
}

/// A value together with the diagnostics raised while producing it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Flagged<T> {
    /// The converted value.
    pub value: T,
    /// Diagnostics raised during the conversion.
    pub flags: Flags,
}

impl<T> Flagged<T> {
    /// Wrap a value with the given flags.
    pub fn new(value: T, flags: Flags) -> Self {
        Self { value, flags }
    }

    /// Wrap a value that raised no diagnostics.
    pub fn clean(value: T) -> Self {
        Self::new(value, Flags::empty())
    }

    /// Map the value, keeping the flags.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Flagged<U> {
        Flagged::new(f(self.value), self.flags)
    }

    /// Chain another flagged conversion, accumulating its flags.
    pub fn and_then<U>(self, f: impl FnOnce(T) -> Flagged<U>) -> Flagged<U> {
        let next = f(self.value);
        Flagged::new(next.value, self.flags | next.flags)
    }

    /// Add more flags.
    pub fn with_flags(mut self, flags: Flags) -> Self {
        self.flags |= flags;
        self
    }

    /// Returns true if the value fell outside its gamut.
    pub fn is_out_of_gamut(&self) -> bool {
        self.flags.contains(Flags::OUT_OF_GAMUT)
    }

    /// Returns true unless a solver gave up before converging.
    pub fn is_converged(&self) -> bool {
        !self.flags.contains(Flags::NOT_CONVERGED)
    }

    /// Discard the flags.
    pub fn into_inner(self) -> T {
        self.value
    }
}

/// The color spaces connected by the conversion graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Space {
    /// Gamma encoded sRGB with components in `0..=255`.
    Rgb = 0,
    /// Linear light sRGB with components in `0..=1`.
    Lrgb = 1,
    /// CIE 1931 XYZ, relative to the configured illuminant.
    Xyz = 2,
    /// CIE 1976 L*a*b*.
    Lab = 3,
    /// CIE 1976 L*C*h, the polar form of Lab.
    Lch = 4,
    /// Cone responses (long, medium, short).
    Lms = 5,
    /// Luminance plus chromaticity coordinates.
    Yxy = 6,
    /// Munsell hue (`0..100`), value (`0..=10`) and chroma.
    Munsell = 7,
    /// PCCS hue (`0..24`), lightness and saturation.
    Pccs = 8,
}

impl Space {
    /// Every space, in declaration order.
    pub const ALL: [Space; 9] = [
        Space::Rgb,
        Space::Lrgb,
        Space::Xyz,
        Space::Lab,
        Space::Lch,
        Space::Lms,
        Space::Yxy,
        Space::Munsell,
        Space::Pccs,
    ];

    /// A short lowercase name for the space.
    pub fn name(&self) -> &'static str {
        match self {
            Space::Rgb => "rgb",
            Space::Lrgb => "lrgb",
            Space::Xyz => "xyz",
            Space::Lab => "lab",
            Space::Lch => "lch",
            Space::Lms => "lms",
            Space::Yxy => "yxy",
            Space::Munsell => "munsell",
            Space::Pccs => "pccs",
        }
    }
}

/// Implemented by models to name the space they live in.
pub trait HasSpace {
    /// The space of the model.
    const SPACE: Space;
}

/// Three components tagged with their color space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// The three components that make up any color.
    pub components: Components,
    /// The color space in which the components are set.
    pub space: Space,
    /// Diagnostics accumulated by the conversions that produced this color.
    pub flags: Flags,
}

impl Color {
    /// Create a new [`Color`] without any flags set.
    /// ```rust
    /// use tincture::{Color, Space};
    /// let c = Color::new(Space::Rgb, 255.0, 128.0, 0.0);
    /// ```
    pub fn new(space: Space, c0: Component, c1: Component, c2: Component) -> Self {
        Self {
            components: Components(c0, c1, c2),
            space,
            flags: Flags::empty(),
        }
    }

    /// Create a color from components that are already gathered.
    pub fn from_components(space: Space, components: Components) -> Self {
        Self {
            components,
            space,
            flags: Flags::empty(),
        }
    }

    /// Return the components as the given model.
    pub fn to_model<T: crate::models::Model>(&self) -> T {
        T::from_color(self)
    }

    /// Returns true if any conversion leading to this color went out of gamut.
    pub fn is_out_of_gamut(&self) -> bool {
        self.flags.contains(Flags::OUT_OF_GAMUT)
    }
}

impl From<Flagged<Color>> for Color {
    fn from(value: Flagged<Color>) -> Self {
        Self {
            flags: value.value.flags | value.flags,
            ..value.value
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_color_with_correct_components() {
        let c = Color::new(Space::Rgb, 0.1, 0.2, 0.3);
        assert_eq!(c.components, Components(0.1, 0.2, 0.3));
        assert_eq!(c.flags, Flags::empty());
        assert_eq!(c.space, Space::Rgb);
    }

    #[test]
    fn components_arithmetic() {
        let a = Components(1.0, 2.0, 3.0);
        let b = Components(0.5, 0.5, 0.5);
        assert_eq!(a + b, Components(1.5, 2.5, 3.5));
        assert_eq!(a - b, Components(0.5, 1.5, 2.5));
        assert_eq!(a * 2.0, Components(2.0, 4.0, 6.0));
        assert_eq!(Components::from([1.0, 2.0, 3.0]), a);
        assert_eq!(<[Component; 3]>::from(a), [1.0, 2.0, 3.0]);
    }

    #[test]
    fn flagged_accumulates_flags() {
        let first = Flagged::new(1, Flags::OUT_OF_GAMUT);
        let second = first.and_then(|v| Flagged::new(v + 1, Flags::NOT_CONVERGED));
        assert_eq!(second.value, 2);
        assert!(second.is_out_of_gamut());
        assert!(!second.is_converged());

        let clean = Flagged::clean(3).map(|v| v * 2);
        assert_eq!(clean.value, 6);
        assert!(clean.flags.is_empty());
    }

    #[test]
    fn flagged_color_merges_flags() {
        let mut color = Color::new(Space::Lab, 50.0, 0.0, 0.0);
        color.flags = Flags::NOT_CONVERGED;
        let merged = Color::from(Flagged::new(color, Flags::OUT_OF_GAMUT));
        assert_eq!(merged.flags, Flags::OUT_OF_GAMUT | Flags::NOT_CONVERGED);
    }
}
