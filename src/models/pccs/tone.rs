//! PCCS tones, the named regions of the lightness/saturation plane.

use std::{fmt, str::FromStr};

use super::{series, Pccs};
use crate::{color::Component, error::ColorError};

/// One of the 14 chromatic PCCS tones.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tone {
    /// p
    Pale,
    /// p+
    PalePlus,
    /// ltg
    LightGrayish,
    /// g
    Grayish,
    /// dkg
    DarkGrayish,
    /// lt
    Light,
    /// lt+
    LightPlus,
    /// sf
    Soft,
    /// d
    Dull,
    /// dk
    Dark,
    /// b
    Bright,
    /// s
    Strong,
    /// dp
    Deep,
    /// v
    Vivid,
}

impl Tone {
    /// Every tone.
    pub const ALL: [Tone; 14] = [
        Tone::Pale,
        Tone::PalePlus,
        Tone::LightGrayish,
        Tone::Grayish,
        Tone::DarkGrayish,
        Tone::Light,
        Tone::LightPlus,
        Tone::Soft,
        Tone::Dull,
        Tone::Dark,
        Tone::Bright,
        Tone::Strong,
        Tone::Deep,
        Tone::Vivid,
    ];

    /// The abbreviation used in PCCS notation, e.g. `ltg`.
    pub fn short_name(&self) -> &'static str {
        match self {
            Tone::Pale => "p",
            Tone::PalePlus => "p+",
            Tone::LightGrayish => "ltg",
            Tone::Grayish => "g",
            Tone::DarkGrayish => "dkg",
            Tone::Light => "lt",
            Tone::LightPlus => "lt+",
            Tone::Soft => "sf",
            Tone::Dull => "d",
            Tone::Dark => "dk",
            Tone::Bright => "b",
            Tone::Strong => "s",
            Tone::Deep => "dp",
            Tone::Vivid => "v",
        }
    }

    /// The full name, e.g. `light grayish`.
    pub fn name(&self) -> &'static str {
        match self {
            Tone::Pale => "pale",
            Tone::PalePlus => "pale+",
            Tone::LightGrayish => "light grayish",
            Tone::Grayish => "grayish",
            Tone::DarkGrayish => "dark grayish",
            Tone::Light => "light",
            Tone::LightPlus => "light+",
            Tone::Soft => "soft",
            Tone::Dull => "dull",
            Tone::Dark => "dark",
            Tone::Bright => "bright",
            Tone::Strong => "strong",
            Tone::Deep => "deep",
            Tone::Vivid => "vivid",
        }
    }

    /// The saturation and relative lightness at the middle of the tone.
    fn center(&self) -> (Component, Component) {
        match self {
            Tone::Vivid => (9.0, 0.0),
            Tone::Bright => (8.0, 2.0),
            Tone::Strong => (8.0, 0.0),
            Tone::Deep => (8.0, -2.0),
            Tone::LightPlus => (5.5, 3.0),
            Tone::Light => (5.5, 1.75),
            Tone::Soft => (5.5, 0.25),
            Tone::Dull => (5.5, -1.5),
            Tone::Dark => (5.5, -3.5),
            Tone::PalePlus => (2.0, 3.75),
            Tone::Pale => (2.0, 2.75),
            Tone::LightGrayish => (2.0, 1.25),
            Tone::Grayish => (2.0, -0.75),
            Tone::DarkGrayish => (2.0, -3.0),
        }
    }

    /// Classify a saturation and a lightness relative to the tone axis of
    /// the hue.
    fn classify(saturation: Component, relative_lightness: Component) -> Self {
        let rl = relative_lightness;
        if saturation >= 8.5 {
            Tone::Vivid
        } else if saturation >= 7.0 {
            if rl >= 1.5 {
                Tone::Bright
            } else if rl <= -1.5 {
                Tone::Deep
            } else {
                Tone::Strong
            }
        } else if saturation >= 4.0 {
            if rl >= 2.5 {
                Tone::LightPlus
            } else if rl >= 1.0 {
                Tone::Light
            } else if rl >= -0.5 {
                Tone::Soft
            } else if rl >= -2.5 {
                Tone::Dull
            } else {
                Tone::Dark
            }
        } else if rl >= 3.5 {
            Tone::PalePlus
        } else if rl >= 2.0 {
            Tone::Pale
        } else if rl >= 0.5 {
            Tone::LightGrayish
        } else if rl >= -2.0 {
            Tone::Grayish
        } else {
            Tone::DarkGrayish
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

impl FromStr for Tone {
    type Err = ColorError;

    /// Accepts both the abbreviation and the full name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tone::ALL
            .into_iter()
            .find(|tone| tone.short_name() == s || tone.name() == s)
            .ok_or_else(|| ColorError::invalid(format!("{s:?} is not a PCCS tone")))
    }
}

/// The lightness of the tone axis at a hue and saturation. The axis runs
/// from middle gray at saturation 0 to the vivid tone at saturation 9.
fn axis_lightness(hue: Component, saturation: Component) -> Component {
    let vivid = series::fourier(&series::VIVID_LIGHTNESS, hue, super::HUE_PERIOD);
    5.5 + (vivid - 5.5) * saturation / 9.0
}

impl Pccs {
    /// The tone of the color, `None` for neutral colors.
    pub fn tone(&self) -> Option<Tone> {
        if self.is_neutral() {
            return None;
        }
        let relative = self.lightness - axis_lightness(self.hue, self.saturation);
        Some(Tone::classify(self.saturation, relative))
    }

    /// A representative color of `tone` at the given PCCS hue.
    pub fn from_tone(tone: Tone, hue: Component) -> Self {
        let (saturation, relative) = tone.center();
        let hue = crate::math::normalize_hue(hue, super::HUE_PERIOD);
        let lightness = (axis_lightness(hue, saturation) + relative).clamp(0.0, 10.0);
        Pccs::new(hue, lightness, saturation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_parse_back() {
        for tone in Tone::ALL {
            assert_eq!(tone.short_name().parse::<Tone>().unwrap(), tone);
            assert_eq!(tone.name().parse::<Tone>().unwrap(), tone);
            assert_eq!(tone.to_string(), tone.short_name());
        }
        assert!("x".parse::<Tone>().is_err());
    }

    #[test]
    fn representatives_classify_as_their_tone() {
        for hue in 0..24 {
            for tone in Tone::ALL {
                let pccs = Pccs::from_tone(tone, hue as Component);
                assert!((0.0..=10.0).contains(&pccs.lightness));
                assert_eq!(pccs.tone(), Some(tone), "{tone:?} at hue {hue}");
            }
        }
    }

    #[test]
    fn saturation_bands() {
        let hue = 8.0;
        let axis = axis_lightness(hue, 9.0);
        assert_eq!(Pccs::new(hue, axis, 9.0).tone(), Some(Tone::Vivid));
        assert_eq!(Pccs::new(hue, axis_lightness(hue, 7.5), 7.5).tone(), Some(Tone::Strong));
        assert_eq!(Pccs::new(hue, 9.5, 1.0).tone(), Some(Tone::PalePlus));
        assert_eq!(Pccs::new(hue, 1.0, 1.0).tone(), Some(Tone::DarkGrayish));
        assert_eq!(Pccs::new(hue, 5.0, 0.0).tone(), None);
    }
}
