//! WCAG 2 contrast and the partitioning of palette candidates into accepted
//! and rejected colors.
//! <https://www.w3.org/TR/WCAG21/#dfn-contrast-ratio>

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::{
    color::{Color, Component},
    error::{Error, Result},
    format::Format,
    palette::{palette, Palette, PaletteSettings},
};

/// How candidates are accepted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    /// Accept candidates that meet the WCAG threshold of a [`Rating`].
    #[default]
    Standard,
    /// Accept candidates whose ratio is inside `[min..max]`.
    Custom,
}

/// A WCAG conformance level.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rating {
    /// Level AA.
    #[default]
    #[serde(rename = "AA", alias = "aa")]
    Aa,
    /// Level AAA.
    #[serde(rename = "AAA", alias = "aaa")]
    Aaa,
}

/// Settings for [`contrast`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContrastSettings {
    /// Standard WCAG thresholds or a custom range.
    pub mode: Mode,
    /// The level used in [`Mode::Standard`].
    pub rating: Rating,
    /// Use the thresholds for large text.
    pub large: bool,
    /// Lowest accepted ratio in [`Mode::Custom`].
    pub min: Component,
    /// Highest accepted ratio in [`Mode::Custom`].
    pub max: Component,
    /// Rate against the dark anchor instead of the light one.
    pub dark: bool,
}

impl Default for ContrastSettings {
    fn default() -> Self {
        Self {
            mode: Mode::Standard,
            rating: Rating::Aa,
            large: false,
            min: 4.5,
            max: 21.0,
            dark: false,
        }
    }
}

impl ContrastSettings {
    /// The minimum ratio required in [`Mode::Standard`].
    pub fn threshold(&self) -> Component {
        match (self.rating, self.large) {
            (Rating::Aa, false) => 4.5,
            (Rating::Aa, true) => 3.0,
            (Rating::Aaa, false) => 7.0,
            (Rating::Aaa, true) => 4.5,
        }
    }

    /// Returns true if a candidate with this contrast ratio is accepted.
    pub fn accepts(&self, ratio: Component) -> bool {
        match self.mode {
            Mode::Standard => ratio >= self.threshold(),
            Mode::Custom => self.min <= ratio && ratio <= self.max,
        }
    }

    fn check(&self) -> Result<()> {
        if self.mode == Mode::Custom {
            if !(1.0..=21.0).contains(&self.min) {
                return Err(Error::range("min", self.min, 1.0, 21.0));
            }
            if !(self.min..=21.0).contains(&self.max) {
                return Err(Error::range("max", self.max, self.min, 21.0));
            }
        }
        Ok(())
    }
}

impl Color {
    /// WCAG relative luminance of the color clipped into sRGB.
    pub fn relative_luminance(&self) -> Component {
        let linear = self.to_clipped_srgb().to_linear_light();
        0.2126 * linear.red + 0.7152 * linear.green + 0.0722 * linear.blue
    }

    /// WCAG contrast ratio between two colors, in `[1..21]`.
    pub fn contrast_ratio(&self, other: &Color) -> Component {
        let a = self.relative_luminance();
        let b = other.relative_luminance();
        let (lighter, darker) = if a >= b { (a, b) } else { (b, a) };
        (lighter + 0.05) / (darker + 0.05)
    }
}

/// The outcome of rating a palette.
#[derive(Clone, Debug, PartialEq)]
pub struct PaletteResult {
    /// The background anchor first, then the other anchor.
    pub anchors: [Color; 2],
    /// The accepted candidates of each family, in input order.
    pub families: Vec<Vec<Color>>,
    /// Every rejected candidate, in input order across families.
    pub rejected: Vec<Color>,
}

impl PaletteResult {
    /// Serialize as `[[anchor, anchor], family..., rejected]`.
    pub fn to_strings(&self, format: Format) -> Vec<Vec<String>> {
        let strings = |colors: &[Color]| {
            colors
                .iter()
                .map(|c| c.to_format(format))
                .collect::<Vec<_>>()
        };

        std::iter::once(strings(&self.anchors))
            .chain(self.families.iter().map(|family| strings(family)))
            .chain(std::iter::once(strings(&self.rejected)))
            .collect()
    }
}

/// Rate every candidate of `palette` against its background anchor and
/// partition them into accepted and rejected colors.
pub fn contrast(settings: &ContrastSettings, palette: &Palette) -> Result<PaletteResult> {
    settings.check()?;
    if palette.candidates() == 0 {
        return Err(Error::EmptyInput);
    }

    let (background, other) = if settings.dark {
        (palette.dark, palette.light)
    } else {
        (palette.light, palette.dark)
    };

    let mut families = Vec::with_capacity(palette.families.len());
    let mut rejected = Vec::new();

    for family in &palette.families {
        let mut accepted = Vec::new();
        for candidate in &family.colors {
            let ratio = candidate.contrast_ratio(&background);
            let accept = settings.accepts(ratio);
            trace!(kind = ?family.kind, ratio, accept, "rated candidate");

            if accept {
                accepted.push(*candidate);
            } else {
                rejected.push(*candidate);
            }
        }
        families.push(accepted);
    }

    debug!(
        accepted = families.iter().map(Vec::len).sum::<usize>(),
        rejected = rejected.len(),
        "partitioned palette"
    );

    Ok(PaletteResult {
        anchors: [background, other],
        families,
        rejected,
    })
}

/// Build the palette of `color` and rate it.
pub fn contrast_of(
    settings: &ContrastSettings,
    palette_settings: &PaletteSettings,
    color: &str,
) -> Result<PaletteResult> {
    contrast(settings, &palette(palette_settings, color)?)
}
