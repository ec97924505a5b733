//! chromakit converts CSS color strings between notations and derives
//! related colors from them: harmonies, blends, and palettes rated for
//! WCAG contrast.
//!
//! ```rust
//! assert_eq!(chromakit::hex("rgb(255 0 0)").unwrap(), "#ff0000");
//! assert_eq!(
//!     chromakit::complementary("red").unwrap(),
//!     ["#ff0000", "#00a9db"]
//! );
//! ```

#![warn(missing_docs)]

mod color;
mod contrast;
mod convert;
mod error;
mod format;
mod gamut;
mod harmony;
mod interpolate;
mod math;
mod mix;
pub mod models;
mod palette;

pub use color::{Color, Component, Components, Space};
pub use contrast::{contrast, contrast_of, ContrastSettings, Mode, PaletteResult, Rating};
pub use convert::{
    cmyk, convert, hex, hsl, hwb, lab, lch, named, oklab, oklch, parse, parse_argument, rgb,
};
pub use error::{Error, ParseError, Result};
pub use format::{Accepts, ChannelSpec, Format, Token, Unit, ALPHA};
pub use harmony::{
    analogous, clash, complementary, dyad, harmony, hexagon, split_complementary, square, star,
    tetrad, triad, HarmonySettings, Rotation, Scheme, ACCENT,
};
pub use interpolate::Interpolation;
pub use mix::{mix, MixSettings, Mixed};
pub use palette::{palette, Family, FamilyKind, Palette, PaletteSettings};

/// The CSS named colors as `(name, #rrggbb)` pairs, in alphabetical order.
pub use format::named::NAMED_COLORS;
