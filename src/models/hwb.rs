//! Model a color with the HWB notation in the sRGB color space.

use crate::{
    color::Component,
    models::{hsl::rgb_to_hue_with_min_max, rgb::Srgb, Hsl},
};

chromakit_macros::gen_model! {
    /// A color specified with the HWB notation in the sRGB color space.
    /// Whiteness and blackness are fractions in `[0..1]`.
    pub struct Hwb {
        /// The hue component of the color, NaN when powerless.
        pub hue: Component,
        /// The whiteness component of the color.
        pub whiteness: Component,
        /// The blackness component of the color.
        pub blackness: Component,
    }
}

impl Srgb {
    /// Convert a color specified in the sRGB color space to the HWB notation.
    /// <https://drafts.csswg.org/css-color-4/#rgb-to-hwb>
    pub fn to_hwb(&self) -> Hwb {
        let (hue, min, max) = rgb_to_hue_with_min_max(&self.to_components());

        Hwb::new(hue, min, 1.0 - max)
    }
}

impl Hwb {
    /// Convert this color from the HWB notation to the sRGB color space.
    /// <https://drafts.csswg.org/css-color-4/#hwb-to-rgb>
    pub fn to_srgb(&self) -> Srgb {
        let (whiteness, blackness) = (self.whiteness, self.blackness);

        if whiteness + blackness >= 1.0 {
            let gray = whiteness / (whiteness + blackness);
            return Srgb::new(gray, gray, gray);
        }

        let rgb = Hsl::new(self.hue, 1.0, 0.5).to_srgb().to_components();
        rgb.map(|v| v * (1.0 - whiteness - blackness) + whiteness)
            .into()
    }
}
