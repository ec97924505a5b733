//! Gamut checks against sRGB.
//! <https://drafts.csswg.org/css-color-4/#gamut-mapping>

use crate::{
    color::{Color, Component, Space},
    models::Srgb,
};

/// Slack for rounding errors picked up on the way through the pivot.
const GAMUT_EPSILON: Component = 1.0e-5;

impl Color {
    /// Returns true if the color can be shown in sRGB without clipping.
    pub fn in_gamut(&self) -> bool {
        Srgb::from(self.to_space(Space::Srgb))
            .channels()
            .iter()
            .all(|v| (-GAMUT_EPSILON..=1.0 + GAMUT_EPSILON).contains(v))
    }

    /// Return a color with each sRGB component clipped (clamped to `[0..1]`).
    /// NOTE: This is a lossy operation.
    pub fn clip(&self) -> Color {
        let clipped = Color::from_space(
            Space::Srgb,
            self.to_clipped_srgb().to_components(),
            self.alpha,
        );
        clipped.with_format(self.format)
    }

    /// Calculate deltaE OK (simple root sum of squares).
    /// <https://drafts.csswg.org/css-color-4/#color-difference-OK>
    pub fn delta_e_ok(&self, other: &Color) -> Component {
        let d = other.to_space(Space::Oklab) - self.to_space(Space::Oklab);
        (d.0 * d.0 + d.1 * d.1 + d.2 * d.2).sqrt()
    }
}
