//! One model per color space. Conversions are implemented on the models
//! between adjacent spaces only; [`crate::convert`] composes them into
//! arbitrary paths.

use crate::color::Color;

pub mod lab;
pub mod lms;
pub mod munsell;
pub mod pccs;
pub mod rgb;
pub mod xyz;
pub mod yxy;

pub use lab::{Lab, Lch};
pub use lms::Lms;
pub use munsell::Munsell;
pub use pccs::{Pccs, Tone};
pub use rgb::{LinearRgb, Rgb};
pub use xyz::Xyz;
pub use yxy::Yxy;

/// A trait implemented for color models that can be converted to and from a
/// generic [`Color`].
pub trait Model {
    /// Convert a model to a generic [`Color`].
    fn to_color(&self) -> Color;

    /// Convert a generic [`Color`] to a model.
    fn from_color(color: &Color) -> Self;
}
