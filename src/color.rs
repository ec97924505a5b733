//! A [`Color`] holds a color that was specified in any of the supported
//! notations, normalized into the canonical CIE-XYZ (D65) pivot.

use serde::{Deserialize, Serialize};

use crate::format::Format;

#[cfg(not(feature = "f64"))]
/// A 32-bit floating point value that all components are stored as.
pub type Component = f32;

#[cfg(feature = "f64")]
/// A 64-bit floating point value that all components are stored as.
pub type Component = f64;

/// Represent the three components that describe any color.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Components(pub Component, pub Component, pub Component);

impl Components {
    /// Return new components with each component mapped with the given
    /// function.
    pub fn map(&self, f: impl Fn(Component) -> Component) -> Self {
        Self(f(self.0), f(self.1), f(self.2))
    }
}

impl std::ops::Sub for Components {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0, self.1 - rhs.1, self.2 - rhs.2)
    }
}

impl From<[Component; 3]> for Components {
    fn from(value: [Component; 3]) -> Self {
        Self(value[0], value[1], value[2])
    }
}

/// Color spaces and forms that colors can be converted to and interpolated
/// in. Unlike [`Format`], a space has no textual notation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[repr(u8)]
pub enum Space {
    /// The sRGB color space, components in `[0..1]`.
    /// <https://drafts.csswg.org/css-color-4/#numeric-srgb>
    Srgb = 0,
    /// The sRGB color space with no gamma encoding.
    SrgbLinear = 1,
    /// Hue, saturation and lightness over sRGB.
    Hsl = 2,
    /// Hue, whiteness and blackness over sRGB.
    Hwb = 3,
    /// CIE-Lab, D50 relative.
    Lab = 4,
    /// The cylindrical polar form of CIE-Lab.
    Lch = 5,
    /// Oklab.
    #[default]
    Oklab = 6,
    /// The cylindrical polar form of Oklab.
    Oklch = 7,
    /// CIE-XYZ with a D50 white point.
    XyzD50 = 8,
    /// CIE-XYZ with a D65 white point, the canonical pivot.
    XyzD65 = 9,
}

impl Space {
    /// Index of the hue component for spaces with a polar form.
    pub fn hue_index(&self) -> Option<usize> {
        match self {
            Space::Hsl | Space::Hwb => Some(0),
            Space::Lch | Space::Oklch => Some(2),
            _ => None,
        }
    }
}

/// An immutable color. The components are always stored in CIE-XYZ with a D65
/// white point. The originating [`Format`] is kept only to pick a default
/// serialization.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub(crate) components: Components,
    pub(crate) alpha: Component,
    pub(crate) format: Format,
}

impl Color {
    /// Create a color directly from canonical XYZ-D65 components.
    pub fn from_canonical(components: Components, alpha: Component, format: Format) -> Self {
        Self {
            components,
            alpha: alpha.clamp(0.0, 1.0),
            format,
        }
    }

    /// The canonical XYZ-D65 components of this color.
    pub fn to_canonical(&self) -> Components {
        self.components
    }

    /// The alpha component of the color in `[0..1]`.
    pub fn alpha(&self) -> Component {
        self.alpha
    }

    /// The notation this color was specified in.
    pub fn format(&self) -> Format {
        self.format
    }

    /// Return a copy of this color with a different alpha.
    pub fn with_alpha(&self, alpha: Component) -> Self {
        Self::from_canonical(self.components, alpha, self.format)
    }

    /// Return a copy of this color that serializes to another notation by
    /// default.
    pub fn with_format(&self, format: Format) -> Self {
        Self { format, ..*self }
    }
}
