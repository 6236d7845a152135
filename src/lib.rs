//! tincture converts colors between device, colorimetric and perceptual
//! color spaces, including the Munsell and PCCS color order systems, and
//! provides color difference, conspicuity, categorical naming and
//! dichromatic vision simulation on top of them.
//!
//! ```rust
//! use tincture::{Color, Options, Space};
//!
//! let options = Options::default();
//! let munsell = Color::new(Space::Rgb, 200.0, 40.0, 40.0).to_space(Space::Munsell, &options);
//! assert!(munsell.flags.is_empty());
//! ```

#![deny(missing_docs)]

mod color;
pub mod convert;
pub mod error;
pub mod evaluation;
mod gamut;
mod math;
pub mod models;
pub mod options;
pub mod simulation;

#[cfg(test)]
mod test;

pub use color::{Color, Component, Components, Flagged, Flags, HasSpace, Space};
pub use convert::convert;
pub use error::ColorError;
pub use options::{Illuminant, Method, Options, SolverLimits, VisionModel};
