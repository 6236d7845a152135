//! Interpolation over the renotation data.
//!
//! Chromaticities are interpolated linearly in chroma within a hue sector,
//! then linearly between the two neighbouring hue sectors, then linearly
//! between the two neighbouring value levels.

use super::renotation::{RENOTATION, VALUES};
use crate::{
    color::{Component, Flagged, Flags},
    math::lerp,
    options::Illuminant,
};

/// A CIE 1931 chromaticity.
pub(super) type Chromaticity = (Component, Component);

/// The number of hue sectors in the table.
const SECTORS: usize = 40;

/// The hue distance between two sectors.
const SECTOR_WIDTH: Component = 2.5;

/// The chroma distance between two entries of a row.
const CHROMA_STEP: Component = 2.0;

/// The value of white.
const MAX_VALUE: Component = 10.0;

/// The chromaticity of illuminant C, where every hue meets at chroma 0.
pub(super) fn neutral() -> Chromaticity {
    Illuminant::C.chromaticity()
}

fn lerp_xy(a: Chromaticity, b: Chromaticity, t: Component) -> Chromaticity {
    (lerp(a.0, b.0, t), lerp(a.1, b.1, t))
}

/// The chromaticity of `chroma` along a single tabulated row. Chroma beyond
/// the end of the row is extrapolated from its last two points and flagged.
fn along_row(level: usize, sector: usize, chroma: Component) -> Flagged<Chromaticity> {
    let row = RENOTATION[level][sector];
    let steps = chroma / CHROMA_STEP;
    let point = |index: usize| -> Chromaticity {
        // Index 0 is chroma 0, the rows start at chroma 2.
        match index {
            0 => neutral(),
            i => (row[i - 1][0], row[i - 1][1]),
        }
    };

    let len = row.len();
    if steps <= len as Component {
        let index = (steps.floor() as usize).min(len.saturating_sub(1));
        let t = steps - index as Component;
        return Flagged::clean(lerp_xy(point(index), point(index + 1), t));
    }

    log::debug!(
        "munsell chroma {chroma} extrapolated past {} at value level {}",
        len as Component * CHROMA_STEP,
        VALUES[level]
    );
    let t = steps - (len - 1) as Component;
    Flagged::new(lerp_xy(point(len - 1), point(len), t), Flags::OUT_OF_GAMUT)
}

/// The chromaticity of a hue and chroma at one tabulated value level.
fn at_level(level: usize, hue: Component, chroma: Component) -> Flagged<Chromaticity> {
    let position = hue / SECTOR_WIDTH;
    let first = (position.floor() as usize) % SECTORS;
    let second = (first + 1) % SECTORS;
    let t = position - position.floor();

    along_row(level, first, chroma)
        .and_then(|a| along_row(level, second, chroma).map(|b| lerp_xy(a, b, t)))
}

/// The chromaticity of a Munsell color under illuminant C. `hue` has to be
/// wrapped into `0..100` and `chroma` must not be negative.
///
/// Values outside the tabulated levels reuse the nearest level, except that a
/// chromatic color at value 10 or above is pinned to the neutral point and
/// flagged.
pub(super) fn chromaticity(hue: Component, value: Component, chroma: Component) -> Flagged<Chromaticity> {
    if value <= 0.0 || chroma <= 0.0 {
        return Flagged::clean(neutral());
    }

    if value >= MAX_VALUE {
        // Only the white point has value 10.
        log::debug!("munsell value {value} with chroma {chroma} is past white");
        return Flagged::new(neutral(), Flags::OUT_OF_GAMUT);
    }

    let highest = VALUES.len() - 1;
    if value <= VALUES[0] {
        return at_level(0, hue, chroma);
    }
    if value >= VALUES[highest] {
        return at_level(highest, hue, chroma);
    }

    let level = VALUES
        .iter()
        .rposition(|&v| v <= value)
        .unwrap_or(0)
        .min(highest - 1);
    let t = (value - VALUES[level]) / (VALUES[level + 1] - VALUES[level]);

    at_level(level, hue, chroma)
        .and_then(|a| at_level(level + 1, hue, chroma).map(|b| lerp_xy(a, b, t)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    #[test]
    fn rows_are_never_empty() {
        for levels in RENOTATION.iter() {
            for row in levels.iter() {
                assert!(!row.is_empty());
            }
        }
    }

    #[test]
    fn zero_chroma_is_neutral() {
        let (x, y) = chromaticity(25.0, 5.0, 0.0).value;
        let (nx, ny) = neutral();
        assert_eq!((x, y), (nx, ny));
    }

    #[test]
    fn tabulated_points_are_exact() {
        // 5R at value 5, chroma 2.
        let row = RENOTATION[8][2];
        let (x, y) = chromaticity(5.0, 5.0, 2.0).value;
        assert_component_eq!(x, row[0][0], 1.0e-12);
        assert_component_eq!(y, row[0][1], 1.0e-12);
    }

    #[test]
    fn chroma_past_the_row_is_flagged() {
        let row = RENOTATION[7][2];
        let inside = chromaticity(5.0, 4.0, row.len() as Component * CHROMA_STEP);
        assert!(inside.flags.is_empty());
        let outside = chromaticity(5.0, 4.0, (row.len() + 1) as Component * CHROMA_STEP);
        assert!(outside.is_out_of_gamut());
    }

    #[test]
    fn white_has_no_chroma() {
        for value in [10.0, 10.5] {
            let white = chromaticity(5.0, value, 1.0);
            assert!(white.is_out_of_gamut());
            assert_eq!(white.value, neutral());
        }
        assert!(chromaticity(5.0, 10.0, 0.0).flags.is_empty());

        let near_white = chromaticity(5.0, 9.5, 1.0);
        assert!(near_white.flags.is_empty());
        assert_eq!(near_white.value, chromaticity(5.0, 9.0, 1.0).value);
    }

    #[test]
    fn darkest_level_is_reused_below_it() {
        let dark = chromaticity(42.5, 0.1, 6.0);
        assert!(dark.flags.is_empty());
        assert_eq!(dark.value, chromaticity(42.5, VALUES[0], 6.0).value);
    }

    #[test]
    fn last_sector_wraps_to_first() {
        let end = chromaticity(99.999_999, 5.0, 4.0).value;
        let start = chromaticity(0.0, 5.0, 4.0).value;
        assert_component_eq!(end.0, start.0, 1.0e-6);
        assert_component_eq!(end.1, start.1, 1.0e-6);
    }
}
