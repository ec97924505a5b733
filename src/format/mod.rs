//! The textual notations a color can be written in, each with a fixed grammar
//! and channel table.
//!
//! Validation and extraction are separate: [`Format::extract`] only checks the
//! shape of a string (prefix, separators, channel count, units), while
//! [`Format::validate`] also checks that every channel is inside its domain.

use std::{fmt, str::FromStr};

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::{
    color::Component,
    error::{Error, Result},
    math::normalize_hue,
};

mod grammar;
pub(crate) mod named;

/// A supported color notation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Format {
    /// `#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa`.
    #[default]
    Hex,
    /// `rgb(R G B)` or legacy `rgb(R, G, B)`.
    Rgb,
    /// `hsl(H S L)` or legacy `hsl(H, S, L)`.
    Hsl,
    /// `hwb(H W B)`.
    Hwb,
    /// `lab(L a b)`.
    Lab,
    /// `lch(L C H)`.
    Lch,
    /// `oklab(L a b)`.
    Oklab,
    /// `oklch(L C H)`.
    Oklch,
    /// `device-cmyk(C M Y K)`.
    DeviceCmyk,
    /// A CSS named color.
    Named,
}

bitflags! {
    /// The kinds of tokens a channel accepts.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct Accepts : u8 {
        /// A plain number.
        const NUMBER = 1 << 0;
        /// A number followed by `%`.
        const PERCENT = 1 << 1;
        /// A number optionally followed by `deg`, `rad`, `grad` or `turn`.
        const ANGLE = 1 << 2;
    }
}

/// The unit a token was written with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Unit {
    /// No unit.
    Number,
    /// `%`.
    Percent,
    /// `deg`.
    Degrees,
    /// `rad`.
    Radians,
    /// `grad`.
    Gradians,
    /// `turn`.
    Turns,
}

/// A raw numeric token with its unit stripped off.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Token {
    /// The number as written, sign and decimals preserved.
    pub value: Component,
    /// The unit that followed the number.
    pub unit: Unit,
}

impl Token {
    pub(crate) fn number(value: Component) -> Self {
        Self {
            value,
            unit: Unit::Number,
        }
    }

    /// The token as an angle in degrees. Plain numbers are degrees.
    pub fn degrees(&self) -> Component {
        match self.unit {
            Unit::Number | Unit::Degrees | Unit::Percent => self.value,
            Unit::Radians => self.value.to_degrees(),
            Unit::Gradians => self.value * 0.9,
            Unit::Turns => self.value * 360.0,
        }
    }

    fn is_accepted_by(&self, accepts: Accepts) -> bool {
        match self.unit {
            Unit::Number => accepts.intersects(Accepts::NUMBER | Accepts::ANGLE),
            Unit::Percent => accepts.contains(Accepts::PERCENT),
            Unit::Degrees | Unit::Radians | Unit::Gradians | Unit::Turns => {
                accepts.contains(Accepts::ANGLE)
            }
        }
    }
}

/// The grammar and domain of one channel. Domains are expressed in the
/// channel's physical unit, after scaling.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChannelSpec {
    /// Name used in range errors.
    pub name: &'static str,
    /// Which tokens the channel accepts.
    pub accepts: Accepts,
    /// Multiplier applied to plain numbers.
    pub number_scale: Component,
    /// Multiplier applied to percentages.
    pub percent_scale: Component,
    /// Smallest physical value.
    pub min: Component,
    /// Largest physical value.
    pub max: Component,
}

impl ChannelSpec {
    const fn new(
        name: &'static str,
        accepts: Accepts,
        number_scale: Component,
        percent_scale: Component,
        min: Component,
        max: Component,
    ) -> Self {
        Self {
            name,
            accepts,
            number_scale,
            percent_scale,
            min,
            max,
        }
    }

    const fn hue() -> Self {
        Self::new(
            "hue",
            Accepts::ANGLE,
            1.0,
            1.0,
            Component::NEG_INFINITY,
            Component::INFINITY,
        )
    }

    /// Convert a token to the physical unit of this channel and check it
    /// against the channel's domain.
    pub fn resolve(&self, token: &Token) -> Result<Component> {
        if self.accepts.contains(Accepts::ANGLE) {
            let degrees = token.degrees();
            if !degrees.is_finite() {
                return Err(self.out_of_range(degrees));
            }
            return Ok(normalize_hue(degrees));
        }

        let value = match token.unit {
            Unit::Percent => token.value * self.percent_scale,
            _ => token.value * self.number_scale,
        };
        self.check(value)
    }

    /// Check a value that is already in the physical unit of this channel.
    pub fn check(&self, value: Component) -> Result<Component> {
        if self.accepts.contains(Accepts::ANGLE) {
            // NaN marks a powerless hue.
            return if value.is_finite() || value.is_nan() {
                Ok(normalize_hue(value))
            } else {
                Err(self.out_of_range(value))
            };
        }

        if value.is_finite() && value >= self.min && value <= self.max {
            Ok(value)
        } else {
            Err(self.out_of_range(value))
        }
    }

    /// Clamp a physical value into the domain of this channel. Hues are
    /// returned as is.
    pub fn clamp(&self, value: Component) -> Component {
        if self.accepts.contains(Accepts::ANGLE) {
            value
        } else {
            value.clamp(self.min, self.max)
        }
    }

    fn out_of_range(&self, value: Component) -> Error {
        Error::range(self.name, value, self.min, self.max)
    }
}

const NUMBER_OR_PERCENT: Accepts = Accepts::NUMBER.union(Accepts::PERCENT);

/// The alpha channel shared by every notation.
pub const ALPHA: ChannelSpec = ChannelSpec::new("alpha", NUMBER_OR_PERCENT, 1.0, 0.01, 0.0, 1.0);

const fn rgb_channel(name: &'static str) -> ChannelSpec {
    ChannelSpec::new(name, NUMBER_OR_PERCENT, 1.0, 2.55, 0.0, 255.0)
}

const fn fraction_channel(name: &'static str, number_scale: Component) -> ChannelSpec {
    ChannelSpec::new(name, NUMBER_OR_PERCENT, number_scale, 0.01, 0.0, 1.0)
}

const RGB: [ChannelSpec; 3] = [rgb_channel("red"), rgb_channel("green"), rgb_channel("blue")];

const HSL: [ChannelSpec; 3] = [
    ChannelSpec::hue(),
    fraction_channel("saturation", 0.01),
    fraction_channel("lightness", 0.01),
];

const HWB: [ChannelSpec; 3] = [
    ChannelSpec::hue(),
    fraction_channel("whiteness", 0.01),
    fraction_channel("blackness", 0.01),
];

const LAB_LIGHTNESS: ChannelSpec =
    ChannelSpec::new("lightness", NUMBER_OR_PERCENT, 1.0, 1.0, 0.0, 100.0);

const LAB: [ChannelSpec; 3] = [
    LAB_LIGHTNESS,
    ChannelSpec::new("a", NUMBER_OR_PERCENT, 1.0, 1.25, -128.0, 128.0),
    ChannelSpec::new("b", NUMBER_OR_PERCENT, 1.0, 1.25, -128.0, 128.0),
];

const LCH: [ChannelSpec; 3] = [
    LAB_LIGHTNESS,
    ChannelSpec::new("chroma", NUMBER_OR_PERCENT, 1.0, 1.5, 0.0, 230.0),
    ChannelSpec::hue(),
];

const OKLAB_LIGHTNESS: ChannelSpec = fraction_channel("lightness", 1.0);

const OKLAB: [ChannelSpec; 3] = [
    OKLAB_LIGHTNESS,
    ChannelSpec::new("a", NUMBER_OR_PERCENT, 1.0, 0.004, -0.4, 0.4),
    ChannelSpec::new("b", NUMBER_OR_PERCENT, 1.0, 0.004, -0.4, 0.4),
];

const OKLCH: [ChannelSpec; 3] = [
    OKLAB_LIGHTNESS,
    ChannelSpec::new("chroma", NUMBER_OR_PERCENT, 1.0, 0.004, 0.0, 0.4),
    ChannelSpec::hue(),
];

const CMYK: [ChannelSpec; 4] = [
    fraction_channel("cyan", 1.0),
    fraction_channel("magenta", 1.0),
    fraction_channel("yellow", 1.0),
    fraction_channel("black", 1.0),
];

impl Format {
    /// Every format, in the order [`crate::parse`] tries them.
    pub const ALL: [Format; 10] = [
        Format::Hex,
        Format::Rgb,
        Format::Hsl,
        Format::Hwb,
        Format::Lab,
        Format::Lch,
        Format::Oklab,
        Format::Oklch,
        Format::DeviceCmyk,
        Format::Named,
    ];

    /// The CSS name of the notation.
    pub fn name(&self) -> &'static str {
        match self {
            Format::Hex => "hex",
            Format::Rgb => "rgb",
            Format::Hsl => "hsl",
            Format::Hwb => "hwb",
            Format::Lab => "lab",
            Format::Lch => "lch",
            Format::Oklab => "oklab",
            Format::Oklch => "oklch",
            Format::DeviceCmyk => "device-cmyk",
            Format::Named => "named",
        }
    }

    /// The channel table of the notation, alpha excluded. Hex and named
    /// colors resolve to the RGB channels.
    pub fn channels(&self) -> &'static [ChannelSpec] {
        match self {
            Format::Hex | Format::Rgb | Format::Named => &RGB,
            Format::Hsl => &HSL,
            Format::Hwb => &HWB,
            Format::Lab => &LAB,
            Format::Lch => &LCH,
            Format::Oklab => &OKLAB,
            Format::Oklch => &OKLCH,
            Format::DeviceCmyk => &CMYK,
        }
    }

    /// Function names accepted for functional notations, longest first.
    fn prefixes(&self) -> &'static [&'static str] {
        match self {
            Format::Rgb => &["rgba", "rgb"],
            Format::Hsl => &["hsla", "hsl"],
            Format::Hwb => &["hwb"],
            Format::Lab => &["lab"],
            Format::Lch => &["lch"],
            Format::Oklab => &["oklab"],
            Format::Oklch => &["oklch"],
            Format::DeviceCmyk => &["device-cmyk"],
            Format::Hex | Format::Named => &[],
        }
    }

    /// Only `rgb()` and `hsl()` keep the comma separated legacy syntax.
    fn allows_legacy(&self) -> bool {
        matches!(self, Format::Rgb | Format::Hsl)
    }

    /// Extract the raw numeric tokens of `input`, or `None` when the string
    /// does not have the shape of this notation. When an alpha is present it
    /// is the last token.
    pub fn extract(&self, input: &str) -> Option<Vec<Token>> {
        match self {
            Format::Hex => grammar::hex(input),
            Format::Named => named::lookup(input).and_then(grammar::hex),
            _ => grammar::functional(
                input,
                self.prefixes(),
                self.channels(),
                self.allows_legacy(),
            ),
        }
    }

    /// Resolve extracted tokens to physical channel values and an alpha.
    pub fn resolve(&self, tokens: &[Token]) -> Result<(Vec<Component>, Component)> {
        let channels = self.channels();

        let values = channels
            .iter()
            .zip(tokens)
            .map(|(spec, token)| spec.resolve(token))
            .collect::<Result<Vec<_>>>()?;

        let alpha = match tokens.get(channels.len()) {
            Some(token) => ALPHA.resolve(token)?,
            None => 1.0,
        };

        Ok((values, alpha))
    }

    /// Returns true if `input` is a well formed color in this notation with
    /// every channel inside its domain.
    pub fn validate(&self, input: &str) -> bool {
        self.extract(input)
            .is_some_and(|tokens| self.resolve(&tokens).is_ok())
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Format::ALL
            .into_iter()
            .find(|format| format.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::InvalidTarget(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    #[test]
    fn format_names_round_trip() {
        for format in Format::ALL {
            assert_eq!(format.name().parse::<Format>().unwrap(), format);
        }
        assert!(matches!(
            "cmyk".parse::<Format>(),
            Err(Error::InvalidTarget(name)) if name == "cmyk"
        ));
    }

    #[test]
    fn formats_deserialize_from_css_names() {
        let format: Format = serde_json::from_str("\"device-cmyk\"").unwrap();
        assert_eq!(format, Format::DeviceCmyk);
    }

    #[test]
    fn hue_units_are_normalized_to_degrees() {
        let tokens = Format::Lch.extract("lch(50% 30 0.5turn)").unwrap();
        assert_eq!(tokens[2].unit, Unit::Turns);
        assert_eq!(tokens[2].degrees(), 180.0);

        let tokens = Format::Lch.extract("lch(50% 30 100grad)").unwrap();
        assert_eq!(tokens[2].degrees(), 90.0);

        let tokens = Format::Lch.extract("lch(50% 30 3.14159265rad)").unwrap();
        assert_component_eq!(tokens[2].degrees(), 180.0);

        let (values, _) = Format::Lch
            .resolve(&Format::Lch.extract("lch(50% 30 -90deg)").unwrap())
            .unwrap();
        assert_eq!(values[2], 270.0);
    }

    #[test]
    fn resolve_scales_percentages() {
        let tokens = Format::Rgb.extract("rgb(100% 50% 0 / 50%)").unwrap();
        let (values, alpha) = Format::Rgb.resolve(&tokens).unwrap();
        assert_component_eq!(values[0], 255.0);
        assert_component_eq!(values[1], 127.5);
        assert_eq!(values[2], 0.0);
        assert_component_eq!(alpha, 0.5);

        let tokens = Format::Oklch.extract("oklch(50% 100% 30)").unwrap();
        let (values, alpha) = Format::Oklch.resolve(&tokens).unwrap();
        assert_component_eq!(values[0], 0.5);
        assert_component_eq!(values[1], 0.4);
        assert_eq!(alpha, 1.0);
    }

    #[test]
    fn out_of_domain_channels_are_range_errors() {
        let tokens = Format::Lch.extract("lch(50% 231 30)").unwrap();
        assert!(matches!(
            Format::Lch.resolve(&tokens),
            Err(Error::Range { channel: "chroma", .. })
        ));
        assert!(!Format::Lch.validate("lch(50% 231 30)"));
        assert!(Format::Lch.validate("lch(50% 230 30)"));

        assert!(!Format::Lab.validate("lab(50% 129 0)"));
        assert!(Format::Lab.validate("lab(50% -128 128)"));
        assert!(!Format::Rgb.validate("rgb(256 0 0)"));
        assert!(!Format::Rgb.validate("rgb(0 0 0 / 1.5)"));
    }

    #[test]
    fn clamp_keeps_values_inside_the_domain() {
        let [_, a, _] = LAB;
        assert_eq!(a.clamp(128.4), 128.0);
        assert_eq!(a.clamp(-300.0), -128.0);
        assert_eq!(a.clamp(12.5), 12.5);

        let hue = LCH[2];
        assert_eq!(hue.clamp(400.0), 400.0);
        assert!(hue.clamp(Component::NAN).is_nan());
    }

    #[test]
    fn validate_each_format() {
        let valid = [
            (Format::Hex, "#fff"),
            (Format::Hex, "#ffff"),
            (Format::Hex, "#A0b1C2"),
            (Format::Hex, "#a0b1c2d3"),
            (Format::Rgb, "rgb(0,0,0)"),
            (Format::Rgb, "rgba(255, 255, 255, 0.5)"),
            (Format::Rgb, "rgb(255 0 0 / 50%)"),
            (Format::Rgb, "rgb(255 0 0 0.5)"),
            (Format::Hsl, "hsl(120, 50%, 50%)"),
            (Format::Hsl, "hsl(120deg 50% 50% / 0.25)"),
            (Format::Hwb, "hwb(40 30% 40%)"),
            (Format::Lab, "lab(54.291% 80.805 69.891)"),
            (Format::Lch, "lch(54.291% 106.837 40.858)"),
            (Format::Oklab, "oklab(62.796% 0.22486 0.12585)"),
            (Format::Oklch, "oklch(0.628 0.258 29.234)"),
            (Format::DeviceCmyk, "device-cmyk(0% 100% 100% 0%)"),
            (Format::DeviceCmyk, "device-cmyk(0 1 1 0 / 0.5)"),
            (Format::Named, "rebeccapurple"),
            (Format::Named, "Crimson"),
        ];
        for (format, input) in valid {
            assert!(format.validate(input), "{format} should accept {input:?}");
        }

        let invalid = [
            (Format::Hex, "#ff"),
            (Format::Hex, "#fffff"),
            (Format::Hex, "ffffff"),
            (Format::Hex, "#gggggg"),
            (Format::Rgb, "rgb(0 0)"),
            (Format::Rgb, "rgb(0 0 0 0 0)"),
            (Format::Rgb, "rgb(0, 0 0)"),
            (Format::Rgb, "rgb(0 0 0"),
            (Format::Rgb, "rgb(0 0 0) "),
            (Format::Rgb, " rgb(0 0 0)"),
            (Format::Rgb, "rgb[0 0 0]"),
            (Format::Rgb, "rgb(0deg 0 0)"),
            (Format::Hsl, "hsl(120 50% 50% 0.5 1)"),
            (Format::Hwb, "hwb(40, 30%, 40%)"),
            (Format::Lab, "lab(50% 10deg 0)"),
            (Format::Oklch, "oklch(0.5 0.1 30 /)"),
            (Format::DeviceCmyk, "device-cmyk(0 0 0)"),
            (Format::Named, "notacolor"),
            (Format::Named, "red "),
        ];
        for (format, input) in invalid {
            assert!(!format.validate(input), "{format} should reject {input:?}");
        }
    }

    #[test]
    fn extract_preserves_sign_and_decimals() {
        let tokens = Format::Lab.extract("lab(50% -20.5 .25)").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token {
                    value: 50.0,
                    unit: Unit::Percent
                },
                Token::number(-20.5),
                Token::number(0.25),
            ]
        );
        assert_eq!(Format::Lab.extract("lab(50% -20.5 .25"), None);
    }
}
