//! Model a color with the naive device CMYK notation over sRGB.

use crate::{color::Component, models::rgb::Srgb};

chromakit_macros::gen_model! {
    /// A color specified as subtractive device CMYK, all channels in `[0..1]`.
    pub struct DeviceCmyk {
        /// The cyan component of the color.
        pub cyan: Component,
        /// The magenta component of the color.
        pub magenta: Component,
        /// The yellow component of the color.
        pub yellow: Component,
        /// The black (key) component of the color.
        pub black: Component,
    }
}

impl DeviceCmyk {
    /// Convert to sRGB with `R = (1 - C)(1 - K)`.
    pub fn to_srgb(&self) -> Srgb {
        let keep = 1.0 - self.black;
        Srgb::new(
            (1.0 - self.cyan) * keep,
            (1.0 - self.magenta) * keep,
            (1.0 - self.yellow) * keep,
        )
    }
}

impl Srgb {
    /// Convert to naive device CMYK. Expects components inside `[0..1]`.
    pub fn to_device_cmyk(&self) -> DeviceCmyk {
        let black = 1.0 - self.red.max(self.green).max(self.blue);
        let keep = 1.0 - black;

        if keep <= 0.0 {
            return DeviceCmyk::new(0.0, 0.0, 0.0, 1.0);
        }

        DeviceCmyk::new(
            (keep - self.red) / keep,
            (keep - self.green) / keep,
            (keep - self.blue) / keep,
            black,
        )
    }
}
