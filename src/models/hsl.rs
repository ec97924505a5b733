//! Model a color with the HSL notation in the sRGB color space.

use crate::{
    color::{Component, Components},
    math::{almost_zero, normalize_hue},
    models::rgb::Srgb,
};

chromakit_macros::gen_model! {
    /// A color specified with the HSL notation in the sRGB color space.
    /// Saturation and lightness are fractions in `[0..1]`.
    pub struct Hsl {
        /// The hue component of the color, NaN when powerless.
        pub hue: Component,
        /// The saturation component of the color.
        pub saturation: Component,
        /// The lightness component of the color.
        pub lightness: Component,
    }
}

/// Calculate the hue from RGB components and return it along with the min
/// and max RGB values.
pub(crate) fn rgb_to_hue_with_min_max(from: &Components) -> (Component, Component, Component) {
    let Components(red, green, blue) = *from;

    let max = red.max(green).max(blue);
    let min = red.min(green).min(blue);

    let delta = max - min;

    let hue = if !almost_zero(delta) {
        60.0 * if max == red {
            (green - blue) / delta + if green < blue { 6.0 } else { 0.0 }
        } else if max == green {
            (blue - red) / delta + 2.0
        } else {
            (red - green) / delta + 4.0
        }
    } else {
        Component::NAN
    };

    (hue, min, max)
}

impl Srgb {
    /// Convert a color specified in the sRGB color space to the HSL notation.
    /// <https://drafts.csswg.org/css-color-4/#rgb-to-hsl>
    pub fn to_hsl(&self) -> Hsl {
        let (hue, min, max) = rgb_to_hue_with_min_max(&self.to_components());

        let lightness = (min + max) / 2.0;
        let delta = max - min;

        let saturation =
            if almost_zero(delta) || almost_zero(lightness) || almost_zero(1.0 - lightness) {
                0.0
            } else {
                (max - lightness) / lightness.min(1.0 - lightness)
            };

        Hsl::new(hue, saturation, lightness)
    }
}

impl Hsl {
    /// Convert this color from the HSL notation to the sRGB color space.
    /// <https://drafts.csswg.org/css-color-4/#hsl-to-rgb>
    pub fn to_srgb(&self) -> Srgb {
        let (saturation, lightness) = (self.saturation, self.lightness);

        if saturation <= 0.0 || self.hue.is_nan() {
            return Srgb::new(lightness, lightness, lightness);
        }

        let hue = normalize_hue(self.hue);

        let f = |n: Component| {
            let k = (n + hue / 30.0) % 12.0;
            let a = saturation * lightness.min(1.0 - lightness);
            lightness - a * (k - 3.0).min(9.0 - k).clamp(-1.0, 1.0)
        };

        Srgb::new(f(0.0), f(8.0), f(4.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    #[test]
    fn rgb_to_hsl() {
        // color(srgb 0.46 0.52 0.28)
        let hsl = Srgb::new(0.46, 0.52, 0.28).to_hsl();
        assert_component_eq!(hsl.hue, 75.0);
        assert_component_eq!(hsl.saturation, 0.3);
        assert_component_eq!(hsl.lightness, 0.4);
    }

    #[test]
    fn hsl_to_rgb() {
        let srgb = Hsl::new(25.0, 0.75, 120.0 / 255.0).to_srgb();
        assert_component_eq!(srgb.red, 210.0 / 255.0);
        assert_component_eq!(srgb.green, 105.0 / 255.0);
        assert_component_eq!(srgb.blue, 30.0 / 255.0);
    }

    #[test]
    fn hue_is_powerless_if_there_is_no_chroma() {
        assert!(Srgb::new(1.0, 1.0, 1.0).to_hsl().hue.is_nan());
        assert!(Srgb::new(0.0, 0.0, 0.0).to_hsl().hue.is_nan());
        assert!(Srgb::new(0.5, 0.5, 0.5).to_hsl().hue.is_nan());
        assert_eq!(
            Hsl::new(Component::NAN, 0.0, 0.5).to_srgb().channels(),
            [0.5, 0.5, 0.5]
        );
    }
}
