//! Munsell notation such as `5R 4/14` or `N 5`.

use std::{fmt, str::FromStr};

use super::{Munsell, HUE_PERIOD};
use crate::{color::Component, error::ColorError, math::normalize_hue};

/// The ten hue families in order of increasing hue. Every family spans 10
/// units of hue, ending at its own `10` step.
pub const HUE_FAMILIES: [&str; 10] = ["R", "YR", "Y", "GY", "G", "BG", "B", "PB", "P", "RP"];

/// Notation values are printed with at most two decimals.
fn rounded(value: Component) -> Component {
    let rounded = (value * 100.0).round() / 100.0;
    // Avoid printing "-0".
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// The hue part of a Munsell notation, e.g. `2.5YR` for 12.5 or `10RP` for 0.
pub fn hue_notation(hue: Component) -> String {
    let mut hue = rounded(normalize_hue(hue, HUE_PERIOD));
    if hue <= 0.0 {
        hue = HUE_PERIOD;
    }
    let family = ((hue / 10.0).ceil() as usize).clamp(1, HUE_FAMILIES.len()) - 1;
    let step = rounded(hue - family as Component * 10.0);
    format!("{step}{}", HUE_FAMILIES[family])
}

impl fmt::Display for Munsell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_neutral() {
            write!(f, "N {}", rounded(self.value))
        } else {
            write!(
                f,
                "{} {}/{}",
                hue_notation(self.hue),
                rounded(self.value),
                rounded(self.chroma)
            )
        }
    }
}

fn parse_number(text: &str, notation: &str) -> Result<Component, ColorError> {
    text.parse::<Component>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
        .ok_or_else(|| ColorError::invalid(format!("{notation:?} has an invalid number {text:?}")))
}

impl FromStr for Munsell {
    type Err = ColorError;

    /// Parse a notation such as `2.5YR 6/8`, `N 3.5` or `N3.5`.
    fn from_str(notation: &str) -> Result<Self, Self::Err> {
        let trimmed = notation.trim();

        if let Some(value) = trimmed.strip_prefix('N') {
            let value = value.trim().trim_end_matches('/');
            return Ok(Munsell::new(0.0, parse_number(value, notation)?, 0.0));
        }

        let (hue, rest) = trimmed
            .split_once(char::is_whitespace)
            .ok_or_else(|| ColorError::invalid(format!("{notation:?} is not a Munsell notation")))?;
        let (value, chroma) = rest
            .trim()
            .split_once('/')
            .ok_or_else(|| ColorError::invalid(format!("{notation:?} has no value/chroma part")))?;

        let split = hue
            .find(|c: char| c.is_ascii_alphabetic())
            .ok_or_else(|| ColorError::invalid(format!("{notation:?} has no hue family")))?;
        let (step, family) = hue.split_at(split);
        let family = HUE_FAMILIES
            .iter()
            .position(|f| *f == family)
            .ok_or_else(|| ColorError::invalid(format!("{notation:?} has an unknown hue family {family:?}")))?;
        let step = parse_number(step, notation)?;
        if step > 10.0 {
            return Err(ColorError::invalid(format!(
                "{notation:?} has a hue step above 10"
            )));
        }

        Ok(Munsell::new(
            normalize_hue(family as Component * 10.0 + step, HUE_PERIOD),
            parse_number(value.trim(), notation)?,
            parse_number(chroma.trim(), notation)?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hue_names() {
        assert_eq!(hue_notation(5.0), "5R");
        assert_eq!(hue_notation(12.5), "2.5YR");
        assert_eq!(hue_notation(10.0), "10R");
        assert_eq!(hue_notation(0.0), "10RP");
        assert_eq!(hue_notation(100.0), "10RP");
        assert_eq!(hue_notation(97.5), "7.5RP");
    }

    #[test]
    fn display() {
        assert_eq!(Munsell::new(5.0, 4.0, 14.0).to_string(), "5R 4/14");
        assert_eq!(Munsell::new(72.5, 6.5, 3.25).to_string(), "2.5PB 6.5/3.25");
        assert_eq!(Munsell::new(33.0, 5.0, 0.0).to_string(), "N 5");
    }

    #[test]
    fn parse() {
        assert_eq!("5R 4/14".parse::<Munsell>().unwrap(), Munsell::new(5.0, 4.0, 14.0));
        assert_eq!("2.5YR 6/8".parse::<Munsell>().unwrap(), Munsell::new(12.5, 6.0, 8.0));
        assert_eq!("10RP 3/6".parse::<Munsell>().unwrap(), Munsell::new(0.0, 3.0, 6.0));
        assert_eq!("N 3.5".parse::<Munsell>().unwrap(), Munsell::new(0.0, 3.5, 0.0));
        assert_eq!("N3.5".parse::<Munsell>().unwrap(), Munsell::new(0.0, 3.5, 0.0));
    }

    #[test]
    fn parse_errors() {
        for bad in ["", "5R", "5R 4", "5Q 4/2", "12R 4/2", "R 4/x", "N", "5R -1/2"] {
            assert!(
                matches!(bad.parse::<Munsell>(), Err(ColorError::InvalidInput(_))),
                "{bad:?} should not parse"
            );
        }
    }

    #[test]
    fn display_parses_back() {
        let munsell = Munsell::new(47.5, 7.0, 6.0);
        assert_eq!(munsell.to_string().parse::<Munsell>().unwrap(), munsell);
    }
}
