//! Blending two colors, optionally as a stepped gradient.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::{
    color::{Color, Component, Space},
    convert::{parse, parse_argument},
    error::{Error, Result},
    format::Format,
};

/// Settings for [`mix`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MixSettings {
    /// The color to blend toward.
    pub target: String,
    /// How far to move toward the target, from 0 (the base) to 100 (the
    /// target).
    pub strength: Component,
    /// When set, return this many evenly spaced samples ending at
    /// `strength`. Must be at least 2.
    pub steps: Option<usize>,
    /// The space to interpolate in.
    pub space: Space,
}

impl Default for MixSettings {
    fn default() -> Self {
        Self {
            target: String::new(),
            strength: 50.0,
            steps: None,
            space: Space::Oklab,
        }
    }
}

/// The result of [`mix`]: one color, or the samples of a gradient.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Mixed {
    /// A single blended color.
    Single(String),
    /// The gradient samples, in order.
    Steps(Vec<String>),
}

fn check_strength(strength: Component) -> Result<Component> {
    if (0.0..=100.0).contains(&strength) {
        Ok(strength)
    } else {
        Err(Error::range("strength", strength, 0.0, 100.0))
    }
}

fn check_steps(steps: usize) -> Result<usize> {
    if steps >= 2 {
        Ok(steps)
    } else {
        Err(Error::range(
            "steps",
            steps as Component,
            2.0,
            Component::INFINITY,
        ))
    }
}

impl Color {
    /// Blend toward `target` in `space`. `strength` is in `[0..100]`.
    pub fn mix_in(&self, target: &Color, strength: Component, space: Space) -> Result<Color> {
        let t = check_strength(strength)? / 100.0;
        Ok(self.interpolate(target, space).at(t))
    }

    /// Blend toward `target` in Oklab. `strength` is in `[0..100]`.
    pub fn mix(&self, target: &Color, strength: Component) -> Result<Color> {
        self.mix_in(target, strength, Space::Oklab)
    }

    /// `steps` evenly spaced samples toward `target` in `space`. The base is
    /// not included; the last sample is the blend at `strength`.
    pub fn gradient_in(
        &self,
        target: &Color,
        strength: Component,
        steps: usize,
        space: Space,
    ) -> Result<Vec<Color>> {
        let end = check_strength(strength)? / 100.0;
        let steps = check_steps(steps)?;

        let interpolation = self.interpolate(target, space);
        Ok((1..=steps)
            .map(|k| interpolation.at(end * k as Component / steps as Component))
            .collect())
    }

    /// Same as [`Color::gradient_in`], interpolating in Oklab.
    pub fn gradient(&self, target: &Color, strength: Component, steps: usize) -> Result<Vec<Color>> {
        self.gradient_in(target, strength, steps, Space::Oklab)
    }
}

/// Blend `color` toward `settings.target`, returning hex strings.
///
/// An unparsable `color` or target is a [`Error::Parse`] whose `argument`
/// names the one that failed.
pub fn mix(settings: &MixSettings, color: &str) -> Result<Mixed> {
    let base = parse(color)?;
    let target = parse_argument("target", &settings.target)?;

    trace!(color, target = %settings.target, strength = settings.strength, "mix");

    match settings.steps {
        None => {
            let mixed = base.mix_in(&target, settings.strength, settings.space)?;
            Ok(Mixed::Single(mixed.to_format(Format::Hex)))
        }
        Some(steps) => {
            let colors = base.gradient_in(&target, settings.strength, steps, settings.space)?;
            Ok(Mixed::Steps(
                colors.iter().map(|c| c.to_format(Format::Hex)).collect(),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn settings(target: &str, strength: Component, steps: Option<usize>) -> MixSettings {
        MixSettings {
            target: target.to_string(),
            strength,
            steps,
            ..Default::default()
        }
    }

    #[test]
    fn strength_end_points() {
        assert_eq!(
            mix(&settings("orange", 0.0, None), "red").unwrap(),
            Mixed::Single("#ff0000".to_string())
        );
        assert_eq!(
            mix(&settings("orange", 100.0, None), "red").unwrap(),
            Mixed::Single("#ffa500".to_string())
        );
    }

    #[test]
    fn stepped_gradient() {
        let mixed = mix(&settings("cyan", 100.0, Some(5)), "red").unwrap();
        assert_eq!(
            mixed,
            Mixed::Steps(
                ["#f2674f", "#df957e", "#c3bca9", "#94ded4", "#00ffff"]
                    .map(String::from)
                    .to_vec()
            )
        );
    }

    #[test]
    fn gradient_stops_at_strength() {
        let red = parse("red").unwrap();
        let white = parse("white").unwrap();
        let half = red.mix(&white, 50.0).unwrap();
        let steps = red.gradient(&white, 50.0, 4).unwrap();
        assert_eq!(steps.len(), 4);
        assert_eq!(steps[3].to_format(Format::Hex), half.to_format(Format::Hex));
    }

    #[test]
    fn invalid_settings() {
        assert!(matches!(
            mix(&settings("orange", 101.0, None), "red"),
            Err(Error::Range { channel: "strength", .. })
        ));
        assert!(matches!(
            mix(&settings("orange", Component::NAN, None), "red"),
            Err(Error::Range { channel: "strength", .. })
        ));
        assert!(matches!(
            mix(&settings("orange", 50.0, Some(1)), "red"),
            Err(Error::Range { channel: "steps", .. })
        ));
    }

    #[test]
    fn invalid_colors() {
        assert!(matches!(
            mix(&settings("orange", 50.0, None), "invalid"),
            Err(Error::Parse(error)) if error.argument == "color"
        ));
        assert!(matches!(
            mix(&settings("nope", 50.0, None), "red"),
            Err(Error::Parse(error)) if error.argument == "target" && error.input == "nope"
        ));
        assert!(matches!(
            mix(&MixSettings::default(), "red"),
            Err(Error::Parse(error)) if error.argument == "target"
        ));
        assert!(matches!(
            mix(&settings("rgb(300 0 0)", 50.0, None), "red"),
            Err(Error::Range { channel: "red", .. })
        ));
    }

    #[test]
    fn settings_from_json() {
        let settings: MixSettings =
            serde_json::from_str(r#"{"target": "cyan", "steps": 5, "space": "oklch"}"#).unwrap();
        assert_eq!(settings.strength, 50.0);
        assert_eq!(settings.steps, Some(5));
        assert_eq!(settings.space, Space::Oklch);

        let json = serde_json::to_string(&Mixed::Single("#ff0000".to_string())).unwrap();
        assert_eq!(json, "\"#ff0000\"");
    }
}
