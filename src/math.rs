//! Math utility functions.

use euclid::default::{Transform3D, Vector3D};
use num_traits::Float;

use crate::color::{Component, Components};

pub type Transform = Transform3D<Component>;

type Vector = Vector3D<Component>;

/// Below this, chroma (or an sRGB channel spread) is treated as zero and the
/// hue becomes powerless.
pub const ACHROMATIC_EPSILON: Component = 1.0e-4;

/// Build a transform from a 3x3 matrix. Vectors are multiplied as rows, so
/// each row of arguments holds the contributions of one *input* component.
#[allow(clippy::too_many_arguments)]
pub const fn transform_3x3(
    m11: Component,
    m12: Component,
    m13: Component,
    m21: Component,
    m22: Component,
    m23: Component,
    m31: Component,
    m32: Component,
    m33: Component,
) -> Transform {
    Transform::new(
        m11, m12, m13, 0.0, //
        m21, m22, m23, 0.0, //
        m31, m32, m33, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    )
}

/// Multiply the given matrix in `transform` with the 3 components.
pub fn transform(transform: &Transform, from: Components) -> Components {
    let Vector { x, y, z, .. } = transform.transform_vector3d(Vector::new(from.0, from.1, from.2));
    Components(x, y, z)
}

pub fn almost_zero(value: Component) -> bool {
    value.abs() < ACHROMATIC_EPSILON
}

/// Wrap a hue in degrees into `[0..360)`. A missing (NaN) hue stays missing.
pub fn normalize_hue(hue: Component) -> Component {
    let hue = hue.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs.
    if hue >= 360.0 {
        0.0
    } else {
        hue
    }
}

pub fn lerp<T: Float>(a: T, b: T, t: T) -> T {
    a + (b - a) * t
}

/// Round `value` to at most `decimals` decimal places.
pub fn round_to(value: Component, decimals: i32) -> Component {
    let factor = (10.0 as Component).powi(decimals);
    (value * factor).round() / factor
}
