//! Color harmonies: fixed sets of hue rotations in Oklch.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::{
    color::{Color, Component, Components, Space},
    convert::parse,
    error::{Error, Result},
    format::Format,
    math::normalize_hue,
};

/// A named harmony.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Scheme {
    /// The base and a color a quarter turn away.
    Dyad,
    /// The base and its opposite.
    #[default]
    Complementary,
    /// The base and its two neighbors on one side.
    Analogous,
    /// The base and the two neighbors of its opposite.
    SplitComplementary,
    /// Three colors evenly spaced.
    Triad,
    /// The base and the two colors a quarter turn away on either side.
    Clash,
    /// Two complementary pairs 45 degrees apart.
    Tetrad,
    /// Four colors evenly spaced.
    Square,
    /// Five colors evenly spaced.
    Star,
    /// Six colors evenly spaced.
    Hexagon,
}

/// One point of a harmony relative to the base color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rotation {
    /// Degrees added to the base hue.
    pub hue: Component,
    /// Factor applied to the base chroma.
    pub chroma: Component,
}

const fn rotate(hue: Component) -> Rotation {
    Rotation { hue, chroma: 1.0 }
}

/// The complement at half chroma, added by [`HarmonySettings::accented`].
pub const ACCENT: Rotation = Rotation {
    hue: 180.0,
    chroma: 0.5,
};

const DYAD: [Rotation; 2] = [rotate(0.0), rotate(90.0)];
const COMPLEMENTARY: [Rotation; 2] = [rotate(0.0), rotate(180.0)];
const ANALOGOUS: [Rotation; 3] = [rotate(0.0), rotate(30.0), rotate(60.0)];
const SPLIT_COMPLEMENTARY: [Rotation; 3] = [rotate(0.0), rotate(150.0), rotate(210.0)];
const TRIAD: [Rotation; 3] = [rotate(0.0), rotate(120.0), rotate(240.0)];
const CLASH: [Rotation; 3] = [rotate(0.0), rotate(90.0), rotate(270.0)];
const TETRAD: [Rotation; 4] = [rotate(0.0), rotate(45.0), rotate(180.0), rotate(225.0)];
const SQUARE: [Rotation; 4] = [rotate(0.0), rotate(90.0), rotate(180.0), rotate(270.0)];
const STAR: [Rotation; 5] = [
    rotate(0.0),
    rotate(72.0),
    rotate(144.0),
    rotate(216.0),
    rotate(288.0),
];
const HEXAGON: [Rotation; 6] = [
    rotate(0.0),
    rotate(60.0),
    rotate(120.0),
    rotate(180.0),
    rotate(240.0),
    rotate(300.0),
];

impl Scheme {
    /// Every scheme.
    pub const ALL: [Scheme; 10] = [
        Scheme::Dyad,
        Scheme::Complementary,
        Scheme::Analogous,
        Scheme::SplitComplementary,
        Scheme::Triad,
        Scheme::Clash,
        Scheme::Tetrad,
        Scheme::Square,
        Scheme::Star,
        Scheme::Hexagon,
    ];

    /// The kebab-case name of the scheme.
    pub fn name(&self) -> &'static str {
        match self {
            Scheme::Dyad => "dyad",
            Scheme::Complementary => "complementary",
            Scheme::Analogous => "analogous",
            Scheme::SplitComplementary => "split-complementary",
            Scheme::Triad => "triad",
            Scheme::Clash => "clash",
            Scheme::Tetrad => "tetrad",
            Scheme::Square => "square",
            Scheme::Star => "star",
            Scheme::Hexagon => "hexagon",
        }
    }

    /// The rotations of the scheme. The first one is always the base color.
    pub fn rotations(&self) -> &'static [Rotation] {
        match self {
            Scheme::Dyad => &DYAD,
            Scheme::Complementary => &COMPLEMENTARY,
            Scheme::Analogous => &ANALOGOUS,
            Scheme::SplitComplementary => &SPLIT_COMPLEMENTARY,
            Scheme::Triad => &TRIAD,
            Scheme::Clash => &CLASH,
            Scheme::Tetrad => &TETRAD,
            Scheme::Square => &SQUARE,
            Scheme::Star => &STAR,
            Scheme::Hexagon => &HEXAGON,
        }
    }

    /// Whether an accent point can be appended to the scheme.
    pub fn accepts_accent(&self) -> bool {
        matches!(
            self,
            Scheme::Dyad | Scheme::Complementary | Scheme::SplitComplementary
        )
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Scheme {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Scheme::ALL
            .into_iter()
            .find(|scheme| scheme.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::InvalidTarget(s.to_string()))
    }
}

/// Settings for [`harmony`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HarmonySettings {
    /// The harmony to generate.
    pub scheme: Scheme,
    /// Append [`ACCENT`] to schemes that accept it.
    pub accented: bool,
}

impl Color {
    /// Rotate this color through the hues of `scheme` in Oklch. Lightness is
    /// kept; each result is clipped into sRGB.
    pub fn harmony(&self, scheme: Scheme, accented: bool) -> Vec<Color> {
        let Components(lightness, chroma, hue) = self.to_space(Space::Oklch);
        let accent = (accented && scheme.accepts_accent()).then_some(&ACCENT);

        scheme
            .rotations()
            .iter()
            .chain(accent)
            .map(|rotation| {
                let hue = normalize_hue(hue + rotation.hue);
                let rotated = Components(lightness, chroma * rotation.chroma, hue);
                Color::from_space(Space::Oklch, rotated, self.alpha)
                    .clip()
                    .with_format(Format::Hex)
            })
            .collect()
    }
}

/// Generate the harmony of `color` described by `settings`, as hex strings.
pub fn harmony(settings: &HarmonySettings, color: &str) -> Result<Vec<String>> {
    let base = parse(color)?;
    trace!(color, scheme = %settings.scheme, accented = settings.accented, "harmony");

    Ok(base
        .harmony(settings.scheme, settings.accented)
        .iter()
        .map(|c| c.to_format(Format::Hex))
        .collect())
}

macro_rules! scheme_entry_point {
    ($(#[$meta:meta])* $name:ident, $scheme:expr) => {
        $(#[$meta])*
        pub fn $name(color: &str) -> Result<Vec<String>> {
            harmony(
                &HarmonySettings {
                    scheme: $scheme,
                    accented: false,
                },
                color,
            )
        }
    };
}

scheme_entry_point!(
    /// The base and the color 90 degrees away.
    dyad,
    Scheme::Dyad
);
scheme_entry_point!(
    /// The base and its complement.
    complementary,
    Scheme::Complementary
);
scheme_entry_point!(
    /// The base followed by rotations of 30 and 60 degrees.
    analogous,
    Scheme::Analogous
);
scheme_entry_point!(
    /// The base and the colors 150 and 210 degrees away.
    split_complementary,
    Scheme::SplitComplementary
);
scheme_entry_point!(
    /// Three colors 120 degrees apart.
    triad,
    Scheme::Triad
);
scheme_entry_point!(
    /// The base and the colors 90 and 270 degrees away.
    clash,
    Scheme::Clash
);
scheme_entry_point!(
    /// Rotations of 0, 45, 180 and 225 degrees.
    tetrad,
    Scheme::Tetrad
);
scheme_entry_point!(
    /// Four colors 90 degrees apart.
    square,
    Scheme::Square
);
scheme_entry_point!(
    /// Five colors 72 degrees apart.
    star,
    Scheme::Star
);
scheme_entry_point!(
    /// Six colors 60 degrees apart.
    hexagon,
    Scheme::Hexagon
);

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn fixtures() {
        assert_eq!(complementary("red").unwrap(), ["#ff0000", "#00a9db"]);
        assert_eq!(triad("blue").unwrap(), ["#0000ff", "#ce0000", "#007700"]);
        assert_eq!(dyad("purple").unwrap(), ["#800080", "#931700"]);
    }

    #[test]
    fn lengths() {
        let lengths = [2, 2, 3, 3, 3, 3, 4, 4, 5, 6];
        for (scheme, length) in Scheme::ALL.into_iter().zip(lengths) {
            let colors = harmony(
                &HarmonySettings {
                    scheme,
                    accented: false,
                },
                "crimson",
            )
            .unwrap();
            assert_eq!(colors.len(), length, "{scheme}");
            assert_eq!(colors[0], "#dc143c", "{scheme}");
        }
    }

    #[test]
    fn accent_is_appended_to_complementary_schemes() {
        let accented = |scheme| {
            harmony(
                &HarmonySettings {
                    scheme,
                    accented: true,
                },
                "red",
            )
            .unwrap()
        };

        assert_eq!(accented(Scheme::Complementary).len(), 3);
        assert_eq!(accented(Scheme::Dyad).len(), 3);
        assert_eq!(accented(Scheme::SplitComplementary).len(), 4);
        assert_eq!(accented(Scheme::Triad).len(), 3);
    }

    #[test]
    fn gray_has_no_hue_to_rotate() {
        assert_eq!(square("gray").unwrap(), ["#808080"; 4]);
    }

    #[test]
    fn scheme_names() {
        assert_eq!(
            "split-complementary".parse::<Scheme>().unwrap(),
            Scheme::SplitComplementary
        );
        assert!(matches!(
            "pentagon".parse::<Scheme>(),
            Err(Error::InvalidTarget(name)) if name == "pentagon"
        ));

        let settings: HarmonySettings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings.scheme, Scheme::Complementary);
        assert!(!settings.accented);
    }

    #[test]
    fn invalid_color() {
        for generate in [dyad, complementary, analogous, split_complementary, triad] {
            assert!(matches!(generate("invalid"), Err(Error::Parse(_))));
        }
        for generate in [clash, tetrad, square, star, hexagon] {
            assert!(matches!(generate("invalid"), Err(Error::Parse(_))));
        }
    }
}
