//! Model a color in the sRGB color space.

use crate::{
    color::{Component, Components},
    math::{transform, transform_3x3, Transform},
    models::xyz::{ToXyz, Xyz, D65},
};

pub mod encoding {
    //! Tags that specify whether RGB components are gamma encoded.

    /// This trait is used to identity tags that specify gamma encoding.
    pub trait Encoding: Clone + Copy {}

    /// Components are gamma encoded (companded).
    #[derive(Clone, Copy, Debug, PartialEq)]
    pub struct GammaEncoded;
    impl Encoding for GammaEncoded {}

    /// Components are linear light.
    #[derive(Clone, Copy, Debug, PartialEq)]
    pub struct LinearLight;
    impl Encoding for LinearLight {}
}

chromakit_macros::gen_model! {
    /// A color specified in the sRGB color space with components in `[0..1]`.
    pub struct Rgb<E: encoding::Encoding> {
        /// The red component of the color.
        pub red: Component,
        /// The green component of the color.
        pub green: Component,
        /// The blue component of the color.
        pub blue: Component,
    }
}

fn to_linear_light(from: &Components) -> Components {
    from.map(|value| {
        let abs = value.abs();

        if abs < 0.04045 {
            value / 12.92
        } else {
            value.signum() * ((abs + 0.055) / 1.055).powf(2.4)
        }
    })
}

fn to_gamma_encoded(from: &Components) -> Components {
    from.map(|value| {
        let abs = value.abs();

        if abs > 0.0031308 {
            value.signum() * (1.055 * abs.powf(1.0 / 2.4) - 0.055)
        } else {
            12.92 * value
        }
    })
}

impl Rgb<encoding::GammaEncoded> {
    /// Convert this model from gamma encoded to linear light.
    pub fn to_linear_light(&self) -> Rgb<encoding::LinearLight> {
        to_linear_light(&self.to_components()).into()
    }

    /// Returns true if all components are inside `[0..1]`.
    pub fn in_gamut(&self) -> bool {
        self.channels().iter().all(|v| (0.0..=1.0).contains(v))
    }

    /// Clamp each component into `[0..1]`.
    pub fn clip(&self) -> Self {
        self.to_components().map(|v| v.clamp(0.0, 1.0)).into()
    }
}

impl Rgb<encoding::LinearLight> {
    /// Convert this model from linear light to gamma encoded.
    pub fn to_gamma_encoded(&self) -> Rgb<encoding::GammaEncoded> {
        to_gamma_encoded(&self.to_components()).into()
    }
}

/// Model for a color in the sRGB color space with gamma encoding.
pub type Srgb = Rgb<encoding::GammaEncoded>;

/// Model for a color in the sRGB color space with no gamma encoding.
pub type SrgbLinear = Rgb<encoding::LinearLight>;

impl From<Xyz<D65>> for SrgbLinear {
    fn from(value: Xyz<D65>) -> Self {
        #[rustfmt::skip]
        #[allow(clippy::excessive_precision)]
        const FROM_XYZ: Transform = transform_3x3(
             3.2409699419045213, -0.9692436362808798,  0.05563007969699361,
            -1.5373831775700935,  1.8759675015077206, -0.20397695888897657,
            -0.4986107602930033,  0.04155505740717561, 1.0569715142428786,
        );

        transform(&FROM_XYZ, value.to_components()).into()
    }
}

impl ToXyz<D65> for SrgbLinear {
    fn to_xyz(&self) -> Xyz<D65> {
        #[rustfmt::skip]
        #[allow(clippy::excessive_precision)]
        const TO_XYZ: Transform = transform_3x3(
            0.4123907992659595,  0.21263900587151036, 0.01933081871559185,
            0.35758433938387796, 0.7151686787677559,  0.11919477979462599,
            0.1804807884018343,  0.07219231536073371, 0.9505321522496606,
        );

        transform(&TO_XYZ, self.to_components()).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;
    use crate::models::xyz::WhitePoint;

    #[test]
    fn gamma_round_trip() {
        let srgb = Srgb::new(210.0 / 255.0, 105.0 / 255.0, 30.0 / 255.0);
        let linear = srgb.to_linear_light();
        assert_component_eq!(linear.red, 0.644480);
        assert_component_eq!(linear.green, 0.141263);
        assert_component_eq!(linear.blue, 0.012983);

        let back = linear.to_gamma_encoded();
        assert_component_eq!(back.red, srgb.red);
        assert_component_eq!(back.green, srgb.green);
        assert_component_eq!(back.blue, srgb.blue);
    }

    #[test]
    fn white_maps_to_d65() {
        let xyz = Srgb::new(1.0, 1.0, 1.0).to_linear_light().to_xyz();
        assert_component_eq!(xyz.x, D65::WHITE_POINT.0);
        assert_component_eq!(xyz.y, 1.0);
        assert_component_eq!(xyz.z, D65::WHITE_POINT.2);
    }

    #[test]
    fn clipping() {
        let srgb = Srgb::new(1.2, -0.1, 0.5);
        assert!(!srgb.in_gamut());
        let clipped = srgb.clip();
        assert!(clipped.in_gamut());
        assert_eq!(clipped.channels(), [1.0, 0.0, 0.5]);
    }
}
