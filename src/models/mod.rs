//! Models are structs that represent a color in a specified color space or
//! form. They represent a type safe way to convert between different color
//! spaces and forms.

mod base;
mod cmyk;
mod hsl;
mod hwb;
mod lab;
mod rgb;
mod xyz;

pub use base::{Base, BaseWhitePoint, FromBase, ToBase};
pub use cmyk::DeviceCmyk;
pub use hsl::Hsl;
pub use hwb::Hwb;
pub use lab::{space, Lab, Lch, Oklab, Oklch, Polar, Rectangular};
pub use rgb::{encoding, Rgb, Srgb, SrgbLinear};
pub use xyz::{ToXyz, TransferWhitePoint, WhitePoint, Xyz, XyzD50, XyzD65, D50, D65};
