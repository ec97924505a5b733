//! Candidate families (tints, tones and shades) and the light and dark
//! anchors they are rated against.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    color::{Color, Component, Components, Space},
    convert::parse,
    error::{Error, Result},
    format::Format,
};

/// Settings for [`palette`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteSettings {
    /// Number of colors toward the light anchor.
    pub tints: usize,
    /// Number of colors toward a gray of equal lightness.
    pub tones: usize,
    /// Number of colors toward the dark anchor.
    pub shades: usize,
    /// How far the families reach toward their targets, in `[0..100]`. Also
    /// sets the dark anchor to a gray with Lab lightness `100 - contrast`.
    pub contrast: Component,
}

impl Default for PaletteSettings {
    fn default() -> Self {
        Self {
            tints: 3,
            tones: 0,
            shades: 3,
            contrast: 95.0,
        }
    }
}

/// What a family of candidates moves toward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FamilyKind {
    /// Toward the light anchor.
    Tints,
    /// Toward a gray of equal lightness.
    Tones,
    /// Toward the dark anchor.
    Shades,
}

/// An ordered list of candidates, nearest to the base first.
#[derive(Clone, Debug, PartialEq)]
pub struct Family {
    /// What the family moves toward.
    pub kind: FamilyKind,
    /// The candidates.
    pub colors: Vec<Color>,
}

/// A base color with its anchors and candidate families.
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    /// The color the palette was built from.
    pub base: Color,
    /// The light anchor, pure white.
    pub light: Color,
    /// The dark anchor.
    pub dark: Color,
    /// The requested families, in tints, tones, shades order.
    pub families: Vec<Family>,
}

impl Palette {
    /// Number of candidates across all families.
    pub fn candidates(&self) -> usize {
        self.families.iter().map(|f| f.colors.len()).sum()
    }
}

/// Samples `1..=count` of `count` toward `target`, ending at `end`.
fn family(base: &Color, target: &Color, end: Component, count: usize) -> Vec<Color> {
    let interpolation = base.interpolate(target, Space::Oklab);
    (1..=count)
        .map(|k| {
            interpolation
                .at(end * k as Component / count as Component)
                .with_format(Format::Hex)
        })
        .collect()
}

impl Color {
    /// Build the candidate families of this color.
    pub fn palette(&self, settings: &PaletteSettings) -> Result<Palette> {
        let contrast = settings.contrast;
        if !(0.0..=100.0).contains(&contrast) {
            return Err(Error::range("contrast", contrast, 0.0, 100.0));
        }
        let end = contrast / 100.0;

        let light = Color::from_space(Space::Srgb, Components(1.0, 1.0, 1.0), 1.0);
        let dark = Color::from_space(Space::Lab, Components(100.0 - contrast, 0.0, 0.0), 1.0)
            .with_format(Format::Hex);

        let Components(lightness, _, _) = self.to_space(Space::Oklch);
        let gray = Color::from_space(
            Space::Oklch,
            Components(lightness, 0.0, Component::NAN),
            self.alpha,
        );

        // Every family keeps the alpha of the base; the anchors stay opaque.
        let requested = [
            (FamilyKind::Tints, settings.tints, light.with_alpha(self.alpha)),
            (FamilyKind::Tones, settings.tones, gray),
            (FamilyKind::Shades, settings.shades, dark.with_alpha(self.alpha)),
        ];
        let families = requested
            .into_iter()
            .filter(|(_, count, _)| *count > 0)
            .map(|(kind, count, target)| Family {
                kind,
                colors: family(self, &target, end, count),
            })
            .collect::<Vec<_>>();

        debug!(
            tints = settings.tints,
            tones = settings.tones,
            shades = settings.shades,
            contrast,
            "built palette"
        );

        Ok(Palette {
            base: *self,
            light,
            dark,
            families,
        })
    }
}

/// Parse `color` and build its palette.
pub fn palette(settings: &PaletteSettings, color: &str) -> Result<Palette> {
    parse(color)?.palette(settings)
}
