//! Interpolation between two colors in a chosen space.
//! <https://drafts.csswg.org/css-color-4/#interpolation>

use crate::{
    color::{Color, Component, Components, Space},
    format::Format,
    math::{lerp, normalize_hue},
};

/// Two colors prepared for interpolation in a space. Created with
/// [`Color::interpolate`], sampled with [`Interpolation::at`].
#[derive(Clone, Debug, PartialEq)]
pub struct Interpolation {
    space: Space,
    left: Components,
    right: Components,
    left_alpha: Component,
    right_alpha: Component,
    format: Format,
}

impl Color {
    /// Prepare to interpolate from this color to `other` in `space`.
    ///
    /// Hues in polar spaces take the shorter arc. A powerless hue takes the
    /// hue of the other color.
    pub fn interpolate(&self, other: &Self, space: Space) -> Interpolation {
        let mut left = self.to_space(space);
        let mut right = other.to_space(space);

        if let Some(index) = space.hue_index() {
            let (a, b) = fix_hues(hue_of(&left, index), hue_of(&right, index));
            set_hue(&mut left, index, a);
            set_hue(&mut right, index, b);
        }

        Interpolation {
            space,
            left,
            right,
            left_alpha: self.alpha,
            right_alpha: other.alpha,
            format: self.format,
        }
    }
}

fn hue_of(c: &Components, index: usize) -> Component {
    if index == 0 {
        c.0
    } else {
        c.2
    }
}

fn set_hue(c: &mut Components, index: usize, hue: Component) {
    if index == 0 {
        c.0 = hue;
    } else {
        c.2 = hue;
    }
}

/// Resolve missing hues and unwrap `b` so that `a -> b` is the shorter arc.
fn fix_hues(a: Component, b: Component) -> (Component, Component) {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => (a, b),
        (true, false) => (b, b),
        (false, true) => (a, a),
        (false, false) => {
            let delta = b - a;
            if delta > 180.0 {
                (a + 360.0, b)
            } else if delta < -180.0 {
                (a, b + 360.0)
            } else {
                (a, b)
            }
        }
    }
}

impl Interpolation {
    /// The color at progress `t`, where 0 is the first color and 1 the
    /// second.
    pub fn at(&self, t: Component) -> Color {
        let mut components = Components(
            lerp(self.left.0, self.right.0, t),
            lerp(self.left.1, self.right.1, t),
            lerp(self.left.2, self.right.2, t),
        );
        if let Some(index) = self.space.hue_index() {
            let hue = normalize_hue(hue_of(&components, index));
            set_hue(&mut components, index, hue);
        }

        let alpha = lerp(self.left_alpha, self.right_alpha, t);
        Color::from_space(self.space, components, alpha).with_format(self.format)
    }
}
