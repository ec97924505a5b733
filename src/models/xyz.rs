//! Model a color in the CIE-XYZ color space.

use crate::color::{Component, Components};
use crate::math::{transform, transform_3x3, Transform};

/// A reference white point.
pub trait WhitePoint: Clone + Copy {
    /// XYZ of the reference white.
    const WHITE_POINT: Components;
}

/// CIE-XYZ color with a D50 white point reference.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct D50;

impl WhitePoint for D50 {
    #[allow(clippy::excessive_precision)]
    const WHITE_POINT: Components = Components(0.9642956764295677, 1.0, 0.8251046025104602);
}

/// CIE-XYZ color with a D65 white point reference.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct D65;

impl WhitePoint for D65 {
    #[allow(clippy::excessive_precision)]
    const WHITE_POINT: Components = Components(0.9504559270516716, 1.0, 1.0890577507598784);
}

/// Chromatic adaptation from one white point to another (Bradford).
pub trait TransferWhitePoint<To: WhitePoint>: WhitePoint {
    /// The adaptation matrix.
    const ADAPTATION: Transform;
}

impl TransferWhitePoint<D50> for D65 {
    #[rustfmt::skip]
    #[allow(clippy::excessive_precision)]
    const ADAPTATION: Transform = transform_3x3(
         1.0479298208405488,   0.029627815688159344, -0.009243058152591178,
         0.022946793341019088, 0.990434484573249,     0.015055144896577895,
        -0.05019222954313557, -0.01707382502938514,   0.7518742899580008,
    );
}

impl TransferWhitePoint<D65> for D50 {
    #[rustfmt::skip]
    #[allow(clippy::excessive_precision)]
    const ADAPTATION: Transform = transform_3x3(
         0.9554734527042182,   -0.028369706963208136,  0.012314001688319899,
        -0.023098536874261423,  1.0099954580058226,   -0.020507696433477912,
         0.0632593086610217,    0.021041398966943008,  1.3303659366080753,
    );
}

/// Specify that a color model supports conversion to CIE-XYZ.
pub trait ToXyz<W: WhitePoint> {
    /// Convert this color to CIE-XYZ.
    fn to_xyz(&self) -> Xyz<W>;
}

chromakit_macros::gen_model! {
    /// A model for a color in the CIE-XYZ color space with a specified white point reference.
    pub struct Xyz<W: WhitePoint> {
        /// The X component of the color.
        pub x: Component,
        /// The Y component of the color.
        pub y: Component,
        /// The Z component of the color.
        pub z: Component,
    }
}

impl<W: WhitePoint> Xyz<W> {
    /// Adapt this color to another white point.
    pub fn transfer<To: WhitePoint>(&self) -> Xyz<To>
    where
        W: TransferWhitePoint<To>,
    {
        transform(&<W as TransferWhitePoint<To>>::ADAPTATION, self.to_components()).into()
    }
}

/// Model for a color in the CIE-XYZ color space with a D50 white point.
pub type XyzD50 = Xyz<D50>;

/// Model for a color in the CIE-XYZ color space with a D65 white point.
pub type XyzD65 = Xyz<D65>;
