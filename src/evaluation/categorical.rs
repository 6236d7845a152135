//! Classify colors into the eleven basic color categories.

use std::{fmt, str::FromStr};

use super::categorical_table::{GRIDS, LUMINANCE_LEVELS, STEP, X_ORIGIN, Y_ORIGIN};
use crate::{
    color::{Component, Space},
    convert::convert,
    error::ColorError,
    models::{Lab, Rgb, Yxy},
    options::Options,
};

/// The eleven basic color categories.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Category {
    /// white
    White,
    /// black
    Black,
    /// red
    Red,
    /// green
    Green,
    /// yellow
    Yellow,
    /// blue
    Blue,
    /// brown
    Brown,
    /// purple
    Purple,
    /// pink
    Pink,
    /// orange
    Orange,
    /// gray
    Gray,
}

impl Category {
    /// Every category.
    pub const ALL: [Category; 11] = [
        Category::White,
        Category::Black,
        Category::Red,
        Category::Green,
        Category::Yellow,
        Category::Blue,
        Category::Brown,
        Category::Purple,
        Category::Pink,
        Category::Orange,
        Category::Gray,
    ];

    /// The lowercase english name of the category.
    pub fn name(&self) -> &'static str {
        match self {
            Category::White => "white",
            Category::Black => "black",
            Category::Red => "red",
            Category::Green => "green",
            Category::Yellow => "yellow",
            Category::Blue => "blue",
            Category::Brown => "brown",
            Category::Purple => "purple",
            Category::Pink => "pink",
            Category::Orange => "orange",
            Category::Gray => "gray",
        }
    }

    fn from_code(code: u8) -> Option<Self> {
        Some(match code {
            b'W' => Category::White,
            b'K' => Category::Black,
            b'R' => Category::Red,
            b'G' => Category::Green,
            b'Y' => Category::Yellow,
            b'B' => Category::Blue,
            b'N' => Category::Brown,
            b'P' => Category::Purple,
            b'I' => Category::Pink,
            b'O' => Category::Orange,
            b'A' => Category::Gray,
            _ => return None,
        })
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        let lower = if lower == "grey" { "gray".to_string() } else { lower };
        Category::ALL
            .into_iter()
            .find(|c| c.name() == lower)
            .ok_or_else(|| ColorError::invalid(format!("{s:?} is not a color category")))
    }
}

/// The category of a color given as luminance (`Y`, 1 for white) and
/// chromaticity.
///
/// The luminance selects the nearest of the tabulated luminance levels, then
/// the category of the nearest populated cell of that level's chromaticity
/// grid is returned.
pub fn category_of_xyy(yxy: &Yxy) -> Category {
    let luminance = yxy.luminance * 60.0;
    let level = LUMINANCE_LEVELS
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| (*a - luminance).abs().total_cmp(&(*b - luminance).abs()))
        .map_or(0, |(index, _)| index);

    let mut nearest: Option<(Component, Category)> = None;
    for (row, cells) in GRIDS[level].iter().enumerate() {
        let y = Y_ORIGIN + row as Component * STEP;
        for (column, code) in cells.bytes().enumerate() {
            let Some(category) = Category::from_code(code) else {
                continue;
            };
            let x = X_ORIGIN + column as Component * STEP;
            let distance = (x - yxy.x).powi(2) + (y - yxy.y).powi(2);
            if nearest.map_or(true, |(best, _)| distance < best) {
                nearest = Some((distance, category));
            }
        }
    }

    nearest.map_or(Category::Gray, |(_, category)| category)
}

/// The category of a Lab color relative to the illuminant in `options`.
pub fn category_of_lab(lab: &Lab, options: &Options) -> Category {
    let yxy = convert(lab.to_components(), Space::Lab, Space::Yxy, options);
    category_of_xyy(&Yxy::from(yxy.value))
}

/// The category of a gamma encoded sRGB color.
pub fn category_of_rgb(rgb: &Rgb, options: &Options) -> Category {
    let yxy = convert(rgb.to_components(), Space::Rgb, Space::Yxy, options);
    category_of_xyy(&Yxy::from(yxy.value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grids_are_complete() {
        for grid in GRIDS.iter() {
            for row in grid.iter() {
                assert_eq!(row.len(), 26);
                assert!(row.bytes().all(|c| c == b'.' || Category::from_code(c).is_some()));
            }
        }
    }

    #[test]
    fn bright_yellow() {
        assert_eq!(category_of_xyy(&Yxy::new(0.9, 0.44, 0.47)), Category::Yellow);
    }

    #[test]
    fn neutrals_by_luminance() {
        let (x, y) = (0.3127, 0.3290);
        assert_eq!(category_of_xyy(&Yxy::new(1.0, x, y)), Category::White);
        assert_eq!(category_of_xyy(&Yxy::new(0.2, x, y)), Category::Gray);
        assert_eq!(category_of_xyy(&Yxy::new(0.01, x, y)), Category::Black);
    }

    #[test]
    fn chromatic_categories() {
        assert_eq!(category_of_xyy(&Yxy::new(0.2, 0.64, 0.33)), Category::Red);
        assert_eq!(category_of_xyy(&Yxy::new(0.7, 0.3, 0.6)), Category::Green);
        assert_eq!(category_of_xyy(&Yxy::new(0.3, 0.5, 0.42)), Category::Orange);
        assert_eq!(category_of_xyy(&Yxy::new(0.08, 0.45, 0.4)), Category::Brown);
    }

    #[test]
    fn rgb_and_lab_helpers() {
        let options = Options::default();
        assert_eq!(category_of_rgb(&Rgb::new(255.0, 255.0, 255.0), &options), Category::White);
        assert_eq!(category_of_rgb(&Rgb::new(0.0, 0.0, 0.0), &options), Category::Black);
        assert_eq!(category_of_lab(&Lab::new(100.0, 0.0, 0.0), &options), Category::White);
    }

    #[test]
    fn names() {
        for category in Category::ALL {
            assert_eq!(category.name().parse::<Category>().unwrap(), category);
        }
        assert_eq!("Grey".parse::<Category>().unwrap(), Category::Gray);
        assert!(matches!("teal".parse::<Category>(), Err(ColorError::InvalidInput(_))));
    }
}
