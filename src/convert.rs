//! Conversion between the textual notations, the computational spaces and the
//! canonical CIE-XYZ (D65) pivot.
//!
//! Every path goes through the pivot, using the typed models to do the actual
//! math:
//!
//! ```rust
//! use chromakit::models::{Lab, Srgb, ToXyz};
//! let blue_in_lch = Lab::from(    // create color in lab.
//!     Srgb::new(0.0, 0.0, 1.0)
//!         .to_linear_light()      // convert to srgb-linear.
//!         .to_xyz()               // convert to xyz-d65.
//!         .transfer(),            // convert to xyz-d50.
//! )
//! .to_polar();                    // convert to lch.
//! ```
//!
//! NOTE: A powerless hue is reported as NaN by [`Color::to_space`] and
//!       [`Color::channels_in`], and serialized as 0.

use std::{fmt, str::FromStr};

use tracing::{debug, trace};

use crate::{
    color::{Color, Component, Components, Space},
    error::{Error, ParseError, Result},
    format::{named, Format, ALPHA},
    math::round_to,
    models::{
        Base, DeviceCmyk, FromBase, Hsl, Hwb, Lab, Lch, Oklab, Oklch, Srgb, SrgbLinear, ToBase,
        XyzD50,
    },
};

/// Parse a color in any supported notation.
///
/// Notations are tried in the order of [`Format::ALL`]. A string that has the
/// shape of a notation but a channel outside its domain is a
/// [`Error::Range`]; a string that has no known shape is a
/// [`Error::Parse`].
pub fn parse(input: &str) -> Result<Color> {
    parse_argument("color", input)
}

/// Same as [`parse`], with the failing argument named in the error.
pub fn parse_argument(argument: &'static str, input: &str) -> Result<Color> {
    for format in Format::ALL {
        let Some(tokens) = format.extract(input) else {
            continue;
        };

        trace!(argument, input, %format, "matched notation");
        let (values, alpha) = format.resolve(&tokens)?;
        return Ok(Color::from_channels(format, &values, alpha));
    }

    debug!(argument, input, "no notation matched");
    Err(ParseError {
        argument,
        input: input.to_string(),
        attempted: Format::ALL.to_vec(),
    }
    .into())
}

/// Parse `input` and serialize it in the `target` notation.
pub fn convert(input: &str, target: Format) -> Result<String> {
    Ok(parse(input)?.to_format(target))
}

macro_rules! entry_point {
    ($(#[$meta:meta])* $name:ident, $format:expr) => {
        $(#[$meta])*
        pub fn $name(input: &str) -> Result<String> {
            convert(input, $format)
        }
    };
}

entry_point!(
    /// Convert any color to `#rrggbb[aa]`.
    hex,
    Format::Hex
);
entry_point!(
    /// Convert any color to `rgb(R G B)`.
    rgb,
    Format::Rgb
);
entry_point!(
    /// Convert any color to `hsl(H S% L%)`.
    hsl,
    Format::Hsl
);
entry_point!(
    /// Convert any color to `hwb(H W% B%)`.
    hwb,
    Format::Hwb
);
entry_point!(
    /// Convert any color to `lab(L% a b)`.
    lab,
    Format::Lab
);
entry_point!(
    /// Convert any color to `lch(L% C H)`.
    lch,
    Format::Lch
);
entry_point!(
    /// Convert any color to `oklab(L% a b)`.
    oklab,
    Format::Oklab
);
entry_point!(
    /// Convert any color to `oklch(L% C H)`.
    oklch,
    Format::Oklch
);
entry_point!(
    /// Convert any color to `device-cmyk(C% M% Y% K%)`.
    cmyk,
    Format::DeviceCmyk
);
entry_point!(
    /// Convert any color to its CSS name, or hex when it has none.
    named,
    Format::Named
);

/// The format a color created in a space serializes to by default.
fn format_for(space: Space) -> Format {
    match space {
        Space::Hsl => Format::Hsl,
        Space::Hwb => Format::Hwb,
        Space::Lab => Format::Lab,
        Space::Lch => Format::Lch,
        Space::Oklab => Format::Oklab,
        Space::Oklch => Format::Oklch,
        Space::Srgb | Space::SrgbLinear | Space::XyzD50 | Space::XyzD65 => Format::Hex,
    }
}

impl Color {
    /// Create a color from channel values in the physical units of `format`:
    /// RGB on `[0..255]`, percentages as fractions, hue in degrees. Every
    /// value is checked against the notation's channel table.
    pub fn new(format: Format, channels: &[Component], alpha: Component) -> Result<Self> {
        let specs = format.channels();
        if channels.len() != specs.len() {
            let expected = specs.len() as Component;
            return Err(Error::range(
                "channel count",
                channels.len() as Component,
                expected,
                expected,
            ));
        }

        let values = specs
            .iter()
            .zip(channels)
            .map(|(spec, value)| spec.check(*value))
            .collect::<Result<Vec<_>>>()?;
        let alpha = ALPHA.check(alpha)?;

        Ok(Self::from_channels(format, &values, alpha))
    }

    /// Values must already be checked against the channel table of `format`.
    fn from_channels(format: Format, v: &[Component], alpha: Component) -> Self {
        let base = match format {
            Format::Hex | Format::Rgb | Format::Named => {
                Srgb::new(v[0] / 255.0, v[1] / 255.0, v[2] / 255.0).to_base()
            }
            Format::Hsl => Hsl::new(v[0], v[1], v[2]).to_base(),
            Format::Hwb => Hwb::new(v[0], v[1], v[2]).to_base(),
            Format::Lab => Lab::new(v[0], v[1], v[2]).to_base(),
            Format::Lch => Lch::new(v[0], v[1], v[2]).to_base(),
            Format::Oklab => Oklab::new(v[0], v[1], v[2]).to_base(),
            Format::Oklch => Oklch::new(v[0], v[1], v[2]).to_base(),
            Format::DeviceCmyk => DeviceCmyk::new(v[0], v[1], v[2], v[3]).to_base(),
        };

        Self::from_canonical(base.to_components(), alpha, format)
    }

    /// Create a color from components in a computational space. No domain
    /// checks are made; out of gamut colors are kept as is.
    pub fn from_space(space: Space, components: Components, alpha: Component) -> Self {
        macro_rules! to_base {
            ($m:ident) => {{
                $m::from(components).to_base()
            }};
        }

        let base = match space {
            Space::Srgb => to_base!(Srgb),
            Space::SrgbLinear => to_base!(SrgbLinear),
            Space::Hsl => to_base!(Hsl),
            Space::Hwb => to_base!(Hwb),
            Space::Lab => to_base!(Lab),
            Space::Lch => to_base!(Lch),
            Space::Oklab => to_base!(Oklab),
            Space::Oklch => to_base!(Oklch),
            Space::XyzD50 => to_base!(XyzD50),
            Space::XyzD65 => to_base!(Base),
        };

        Self::from_canonical(base.to_components(), alpha, format_for(space))
    }

    fn base(&self) -> Base {
        Base::from(self.components)
    }

    /// Convert this color to the components of a computational space.
    pub fn to_space(&self, space: Space) -> Components {
        macro_rules! from_base {
            ($m:ident) => {{
                $m::from_base(&self.base()).to_components()
            }};
        }

        match space {
            Space::Srgb => from_base!(Srgb),
            Space::SrgbLinear => from_base!(SrgbLinear),
            Space::Hsl => from_base!(Hsl),
            Space::Hwb => from_base!(Hwb),
            Space::Lab => from_base!(Lab),
            Space::Lch => from_base!(Lch),
            Space::Oklab => from_base!(Oklab),
            Space::Oklch => from_base!(Oklch),
            Space::XyzD50 => from_base!(XyzD50),
            Space::XyzD65 => self.components,
        }
    }

    /// The gamma encoded sRGB components, clipped into `[0..1]`.
    pub(crate) fn to_clipped_srgb(&self) -> Srgb {
        Srgb::from_base(&self.base()).clip()
    }

    /// The channel values of this color in the physical units of `format`,
    /// alpha excluded. sRGB derived notations are clipped into gamut first;
    /// every channel is then clamped into the domain of the notation.
    pub fn channels_in(&self, format: Format) -> Vec<Component> {
        let values = match format {
            Format::Hex | Format::Rgb | Format::Named => self
                .to_clipped_srgb()
                .channels()
                .map(|v| v * 255.0)
                .to_vec(),
            Format::Hsl => self.to_clipped_srgb().to_hsl().channels().to_vec(),
            Format::Hwb => self.to_clipped_srgb().to_hwb().channels().to_vec(),
            Format::Lab => Lab::from_base(&self.base()).channels().to_vec(),
            Format::Lch => Lch::from_base(&self.base()).channels().to_vec(),
            Format::Oklab => Oklab::from_base(&self.base()).channels().to_vec(),
            Format::Oklch => Oklch::from_base(&self.base()).channels().to_vec(),
            Format::DeviceCmyk => DeviceCmyk::from_base(&self.base()).channels().to_vec(),
        };

        format
            .channels()
            .iter()
            .zip(values)
            .map(|(spec, value)| spec.clamp(value))
            .collect()
    }

    /// Serialize this color in the given notation.
    pub fn to_format(&self, format: Format) -> String {
        let c = self.channels_in(format);
        let alpha = self.alpha_suffix();

        match format {
            Format::Hex => self.to_hex(),
            Format::Named => self.to_named(),
            Format::Rgb => format!(
                "rgb({} {} {}{alpha})",
                number(c[0], 0),
                number(c[1], 0),
                number(c[2], 0)
            ),
            Format::Hsl => format!(
                "hsl({} {}% {}%{alpha})",
                hue(c[0]),
                percent(c[1]),
                percent(c[2])
            ),
            Format::Hwb => format!(
                "hwb({} {}% {}%{alpha})",
                hue(c[0]),
                percent(c[1]),
                percent(c[2])
            ),
            Format::Lab => format!(
                "lab({}% {} {}{alpha})",
                number(c[0], 3),
                number(c[1], 3),
                number(c[2], 3)
            ),
            Format::Lch => format!(
                "lch({}% {} {}{alpha})",
                number(c[0], 3),
                number(c[1], 3),
                hue(c[2])
            ),
            Format::Oklab => format!(
                "oklab({}% {} {}{alpha})",
                percent(c[0]),
                number(c[1], 5),
                number(c[2], 5)
            ),
            Format::Oklch => format!(
                "oklch({}% {} {}{alpha})",
                percent(c[0]),
                number(c[1], 5),
                hue(c[2])
            ),
            Format::DeviceCmyk => format!(
                "device-cmyk({}% {}% {}% {}%{alpha})",
                percent(c[0]),
                percent(c[1]),
                percent(c[2]),
                percent(c[3])
            ),
        }
    }

    fn to_hex(&self) -> String {
        let Srgb { red, green, blue, .. } = self.to_clipped_srgb();
        let byte = |v: Component| (v * 255.0).round() as u8;

        let mut hex = format!("#{:02x}{:02x}{:02x}", byte(red), byte(green), byte(blue));
        if self.alpha != 1.0 {
            hex.push_str(&format!("{:02x}", byte(self.alpha)));
        }
        hex
    }

    fn to_named(&self) -> String {
        let hex = self.to_hex();
        if self.alpha != 1.0 {
            return hex;
        }
        named::name_of(&hex).map_or(hex, str::to_string)
    }

    fn alpha_suffix(&self) -> String {
        if self.alpha == 1.0 {
            String::new()
        } else {
            format!(" / {}", number(self.alpha, 3))
        }
    }
}

/// Round to `decimals` places and drop trailing zeros. Negative zero is
/// printed as `0`.
fn number(value: Component, decimals: i32) -> String {
    let rounded = round_to(value, decimals);
    if rounded == 0.0 {
        "0".to_string()
    } else {
        rounded.to_string()
    }
}

fn percent(fraction: Component) -> String {
    number(fraction * 100.0, 3)
}

fn hue(degrees: Component) -> String {
    if degrees.is_nan() {
        return "0".to_string();
    }
    let rounded = round_to(degrees, 3);
    number(if rounded >= 360.0 { 0.0 } else { rounded }, 3)
}

impl fmt::Display for Color {
    /// Serialize in the notation the color was created from.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_format(self.format))
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse(s)
    }
}
