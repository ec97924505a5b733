//! Conversions between every model and the canonical pivot, CIE-XYZ with a
//! D65 white point.

use crate::models::{
    DeviceCmyk, Hsl, Hwb, Lab, Lch, Oklab, Oklch, Srgb, SrgbLinear, ToXyz, Xyz, XyzD50, D50, D65,
};

/// The white point reference used by the base model.
pub type BaseWhitePoint = D65;

/// The model used as the base color for color conversions.
pub type Base = Xyz<BaseWhitePoint>;

/// Used to convert any model to the base color space.
pub trait ToBase {
    /// Convert the model to the base color space.
    fn to_base(&self) -> Base;
}

/// Used to create any model from the base color space.
pub trait FromBase {
    /// Convert from the base color space into this model.
    fn from_base(base: &Base) -> Self;
}

impl ToBase for SrgbLinear {
    fn to_base(&self) -> Base {
        self.to_xyz()
    }
}

impl FromBase for SrgbLinear {
    fn from_base(base: &Base) -> Self {
        SrgbLinear::from(*base)
    }
}

impl ToBase for Srgb {
    fn to_base(&self) -> Base {
        self.to_linear_light().to_base()
    }
}

impl FromBase for Srgb {
    fn from_base(base: &Base) -> Self {
        SrgbLinear::from_base(base).to_gamma_encoded()
    }
}

impl ToBase for Hsl {
    fn to_base(&self) -> Base {
        self.to_srgb().to_base()
    }
}

impl FromBase for Hsl {
    fn from_base(base: &Base) -> Self {
        Srgb::from_base(base).to_hsl()
    }
}

impl ToBase for Hwb {
    fn to_base(&self) -> Base {
        self.to_srgb().to_base()
    }
}

impl FromBase for Hwb {
    fn from_base(base: &Base) -> Self {
        Srgb::from_base(base).to_hwb()
    }
}

impl ToBase for DeviceCmyk {
    fn to_base(&self) -> Base {
        self.to_srgb().to_base()
    }
}

impl FromBase for DeviceCmyk {
    fn from_base(base: &Base) -> Self {
        Srgb::from_base(base).clip().to_device_cmyk()
    }
}

impl ToBase for Lab {
    fn to_base(&self) -> Base {
        self.to_xyz().transfer()
    }
}

impl FromBase for Lab {
    fn from_base(base: &Base) -> Self {
        Lab::from(base.transfer::<D50>())
    }
}

impl ToBase for Lch {
    fn to_base(&self) -> Base {
        self.to_rectangular().to_base()
    }
}

impl FromBase for Lch {
    fn from_base(base: &Base) -> Self {
        Lab::from_base(base).to_polar()
    }
}

impl ToBase for Oklab {
    fn to_base(&self) -> Base {
        self.to_xyz()
    }
}

impl FromBase for Oklab {
    fn from_base(base: &Base) -> Self {
        Oklab::from(*base)
    }
}

impl ToBase for Oklch {
    fn to_base(&self) -> Base {
        self.to_rectangular().to_base()
    }
}

impl FromBase for Oklch {
    fn from_base(base: &Base) -> Self {
        Oklab::from_base(base).to_polar()
    }
}

impl ToBase for XyzD50 {
    fn to_base(&self) -> Base {
        self.transfer::<D65>()
    }
}

impl FromBase for XyzD50 {
    fn from_base(base: &Base) -> Self {
        base.transfer::<D50>()
    }
}

impl ToBase for Base {
    fn to_base(&self) -> Base {
        *self
    }
}

impl FromBase for Base {
    fn from_base(base: &Base) -> Self {
        *base
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    fn chocolate() -> Base {
        Srgb::new(210.0 / 255.0, 105.0 / 255.0, 30.0 / 255.0).to_base()
    }

    #[test]
    fn test_srgb() {
        let base = chocolate();
        assert_component_eq!(base.x, 0.318634);
        assert_component_eq!(base.y, 0.239006);
        assert_component_eq!(base.z, 0.041637);

        let linear = SrgbLinear::from_base(&base);
        assert_component_eq!(linear.red, 0.644480);
    }

    #[test]
    fn test_hsl_hwb() {
        let hsl = Hsl::from_base(&chocolate());
        assert_component_eq!(hsl.hue, 25.0);
        assert_component_eq!(hsl.saturation, 0.75);
        assert_component_eq!(hsl.lightness, 0.470588);

        let hwb = Hwb::from_base(&chocolate());
        assert_component_eq!(hwb.whiteness, 0.117647);
        assert_component_eq!(hwb.blackness, 0.176471);
    }

    #[test]
    fn test_lab() {
        let lab = Lab::from_base(&chocolate());
        assert_component_eq!(lab.lightness, 56.629300);
        assert_component_eq!(lab.a, 39.237080);
        assert_component_eq!(lab.b, 57.553769);

        let lch = Lch::from_base(&chocolate());
        assert_component_eq!(lch.chroma, 69.656190);
        assert_component_eq!(lch.hue, 55.715927);

        let oklch = Oklch::from_base(&chocolate());
        assert_component_eq!(oklch.lightness, 0.634398);
        assert_component_eq!(oklch.chroma, 0.154992);
        assert_component_eq!(oklch.hue, 50.266483);
    }

    #[test]
    fn test_xyz() {
        let d50 = XyzD50::from_base(&chocolate());
        assert_component_eq!(d50.x, 0.337301);
        assert_component_eq!(d50.y, 0.245449);
        assert_component_eq!(d50.z, 0.031959);
        let back = d50.to_base();
        assert_component_eq!(back.x, 0.318634);
    }
}
