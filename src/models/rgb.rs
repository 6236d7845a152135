//! Model a color in the sRGB color space, gamma encoded and linear.

use crate::{
    color::{Component, Components, Flagged, Flags, HasSpace, Space},
    error::ColorError,
};

tincture_macros::gen_model! {
    /// A gamma encoded sRGB color with components in `0..=255`.
    pub struct Rgb {
        /// The red component of the color.
        red: Component,
        /// The green component of the color.
        green: Component,
        /// The blue component of the color.
        blue: Component,
    }
}

impl HasSpace for Rgb {
    const SPACE: Space = Space::Rgb;
}

tincture_macros::gen_model! {
    /// A linear light sRGB color with components in `0..=1`.
    pub struct LinearRgb {
        /// The red component of the color.
        red: Component,
        /// The green component of the color.
        green: Component,
        /// The blue component of the color.
        blue: Component,
    }
}

impl HasSpace for LinearRgb {
    const SPACE: Space = Space::Lrgb;
}

/// The relative luminance weights of the sRGB primaries.
#[allow(clippy::excessive_precision)]
const LUMINANCE: Components = Components(0.21263900587151027, 0.715168678767756, 0.07219231536073371);

/// Rounding slack, relative to the upper bound, accepted as in gamut.
const GAMUT_SLACK: Component = 1.0e-9;

#[allow(clippy::manual_range_contains)]
fn in_range(value: Component, max: Component) -> bool {
    let slack = max * GAMUT_SLACK;
    value >= -slack && value <= max + slack
}

fn gamut_flags(components: &Components, max: Component) -> Flags {
    let Components(r, g, b) = *components;
    if in_range(r, max) && in_range(g, max) && in_range(b, max) {
        Flags::empty()
    } else {
        Flags::OUT_OF_GAMUT
    }
}

/// Apply the sRGB transfer function to a linear component in `0..=1`.
fn to_gamma_encoded(value: Component) -> Component {
    let abs = value.abs();

    if abs > 0.0031308 {
        value.signum() * (1.055 * abs.powf(1.0 / 2.4) - 0.055)
    } else {
        12.92 * value
    }
}

/// Undo the sRGB transfer function for a gamma encoded component in `0..=1`.
fn to_linear_light(value: Component) -> Component {
    let abs = value.abs();

    if abs < 0.04045 {
        value / 12.92
    } else {
        value.signum() * ((abs + 0.055) / 1.055).powf(2.4)
    }
}

impl Rgb {
    /// The upper bound of each component.
    pub const MAX: Component = 255.0;

    /// Convert to linear light. Components outside `0..=255` are converted
    /// anyway and flagged as out of gamut.
    pub fn to_linear_rgb(&self) -> Flagged<LinearRgb> {
        let components = self.to_components();
        let flags = gamut_flags(&components, Self::MAX);
        let linear = components.map(|v| to_linear_light(v / Self::MAX));
        Flagged::new(LinearRgb::from(linear), flags)
    }

    /// Returns true if every component lies in `0..=255`.
    pub fn in_gamut(&self) -> bool {
        gamut_flags(&self.to_components(), Self::MAX).is_empty()
    }

    /// Clamp every component into `0..=255`.
    #[must_use]
    pub fn clip(&self) -> Self {
        Self::from(self.to_components().map(|v| v.clamp(0.0, Self::MAX)))
    }

    /// Unpack a 24-bit integer of the form `0xRRGGBB`.
    pub fn from_color_integer(value: u32) -> Result<Self, ColorError> {
        if value > 0xff_ffff {
            return Err(ColorError::invalid(format!(
                "{value:#x} does not fit into 24 bits"
            )));
        }
        let [_, r, g, b] = value.to_be_bytes();
        Ok(Self::new(r as Component, g as Component, b as Component))
    }

    /// Pack into a 24-bit integer of the form `0xRRGGBB`. Components are
    /// rounded and clamped into `0..=255` first.
    pub fn to_color_integer(&self) -> u32 {
        let Components(r, g, b) = self.clip().to_components().map(|v| v.round());
        ((r as u32) << 16) | ((g as u32) << 8) | (b as u32)
    }

    /// Parse a hexadecimal color such as `#ff8000` or `#f80`.
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let digits = hex
            .strip_prefix('#')
            .ok_or_else(|| ColorError::invalid(format!("{hex:?} does not start with #")))?;

        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorError::invalid(format!("{hex:?} is not a hex color")));
        }

        let expanded = match digits.len() {
            3 => digits.chars().flat_map(|c| [c, c]).collect::<String>(),
            6 => digits.to_string(),
            _ => {
                return Err(ColorError::invalid(format!(
                    "{hex:?} does not have 3 or 6 hex digits"
                )))
            }
        };

        let value = u32::from_str_radix(&expanded, 16)
            .map_err(|_| ColorError::invalid(format!("{hex:?} is not a hex color")))?;
        Self::from_color_integer(value)
    }

    /// Format as a lowercase `#rrggbb` string.
    pub fn to_hex(&self) -> String {
        format!("#{:06x}", self.to_color_integer())
    }

    /// A gray with the same relative luminance as this color.
    pub fn to_monochrome(&self) -> Flagged<Rgb> {
        self.to_linear_rgb()
            .and_then(|linear| linear.to_monochrome().to_rgb())
    }
}

impl LinearRgb {
    /// Convert to gamma encoded sRGB. Components outside `0..=1` are
    /// converted anyway and flagged as out of gamut.
    pub fn to_rgb(&self) -> Flagged<Rgb> {
        let components = self.to_components();
        let flags = gamut_flags(&components, 1.0);
        let encoded = components.map(|v| to_gamma_encoded(v) * Rgb::MAX);
        if !flags.is_empty() {
            log::debug!("linear rgb {components:?} is outside the sRGB gamut");
        }
        Flagged::new(Rgb::from(encoded), flags)
    }

    /// Returns true if every component lies in `0..=1`.
    pub fn in_gamut(&self) -> bool {
        gamut_flags(&self.to_components(), 1.0).is_empty()
    }

    /// Clamp every component into `0..=1`.
    #[must_use]
    pub fn clip(&self) -> Self {
        Self::from(self.to_components().map(|v| v.clamp(0.0, 1.0)))
    }

    /// The relative luminance of this color.
    pub fn luminance(&self) -> Component {
        self.red * LUMINANCE.0 + self.green * LUMINANCE.1 + self.blue * LUMINANCE.2
    }

    /// A gray with the same relative luminance as this color.
    pub fn to_monochrome(&self) -> LinearRgb {
        let y = self.luminance();
        LinearRgb::new(y, y, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_component_eq, assert_components_eq};

    #[test]
    fn gamma_round_trip() {
        for value in [0.0, 1.0, 10.0, 64.0, 127.5, 200.0, 255.0] {
            let rgb = Rgb::new(value, 255.0 - value, value / 2.0);
            let linear = rgb.to_linear_rgb();
            assert!(linear.flags.is_empty());
            let back = linear.value.to_rgb();
            assert!(back.flags.is_empty());
            assert_components_eq!(back.value.to_components(), rgb.to_components(), 1.0e-9);
        }
    }

    #[test]
    fn known_linear_values() {
        let linear = Rgb::new(255.0, 0.0, 128.0).to_linear_rgb().value;
        assert_component_eq!(linear.red, 1.0);
        assert_component_eq!(linear.green, 0.0);
        assert_component_eq!(linear.blue, 0.2158605, 1.0e-6);
    }

    #[test]
    fn out_of_range_is_flagged_not_rejected() {
        let linear = LinearRgb::new(1.2, 0.5, -0.1);
        let rgb = linear.to_rgb();
        assert!(rgb.is_out_of_gamut());
        assert!(rgb.value.red > 255.0);
        assert!(rgb.value.blue < 0.0);
        assert!(!linear.in_gamut());
        assert!(linear.clip().in_gamut());

        let rgb = Rgb::new(300.0, 0.0, 0.0);
        assert!(rgb.to_linear_rgb().is_out_of_gamut());
        assert_eq!(rgb.clip(), Rgb::new(255.0, 0.0, 0.0));
    }

    #[test]
    fn color_integers() {
        let rgb = Rgb::from_color_integer(0x12ab_ef).unwrap();
        assert_eq!(rgb, Rgb::new(18.0, 171.0, 239.0));
        assert_eq!(rgb.to_color_integer(), 0x12ab_ef);
        assert_eq!(Rgb::new(-3.0, 255.4, 300.0).to_color_integer(), 0x00ff_ff);
        assert!(Rgb::from_color_integer(0x0100_0000).is_err());
    }

    #[test]
    fn hex_strings() {
        assert_eq!(Rgb::from_hex("#ff8000").unwrap(), Rgb::new(255.0, 128.0, 0.0));
        assert_eq!(Rgb::from_hex("#f80").unwrap(), Rgb::new(255.0, 136.0, 0.0));
        assert_eq!(Rgb::new(255.0, 128.0, 0.0).to_hex(), "#ff8000");
        assert!(matches!(
            Rgb::from_hex("ff8000"),
            Err(ColorError::InvalidInput(_))
        ));
        assert!(Rgb::from_hex("#ff80").is_err());
        assert!(Rgb::from_hex("#gg8000").is_err());
    }

    #[test]
    fn monochrome_keeps_luminance() {
        let rgb = Rgb::new(255.0, 0.0, 0.0);
        let gray = rgb.to_monochrome();
        assert!(gray.flags.is_empty());
        assert_component_eq!(gray.value.red, gray.value.green);
        assert_component_eq!(gray.value.green, gray.value.blue);

        let luminance = rgb.to_linear_rgb().value.luminance();
        let gray_luminance = gray.value.to_linear_rgb().value.luminance();
        assert_component_eq!(gray_luminance, luminance, 1.0e-9);
    }
}
