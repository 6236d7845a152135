//! Evaluate colors: how far apart two colors are, how much a color draws
//! attention, and which basic color name it falls under.

mod categorical;
mod categorical_table;
mod conspicuity;
mod difference;

pub use categorical::{category_of_lab, category_of_rgb, category_of_xyy, Category};
pub use conspicuity::conspicuity_of;
pub use difference::{cie76, ciede2000, distance};
