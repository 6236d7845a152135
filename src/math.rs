//! Math utility functions.

use euclid::default::{Transform3D, Vector3D};
use num_traits::Float;

use crate::color::{Component, Components};

/// A 3x3 color matrix, stored as a 3D transform.
pub type Transform = Transform3D<Component>;

type Vector = Vector3D<Component>;

/// Components smaller than this are treated as zero.
pub const EPSILON: Component = 1.0e-10;

/// Build a transform from a 3x3 matrix given in row-major order, i.e. the
/// first three arguments produce the first output component.
#[allow(clippy::too_many_arguments)]
#[rustfmt::skip]
pub const fn transform_3x3(
    m11: Component, m12: Component, m13: Component,
    m21: Component, m22: Component, m23: Component,
    m31: Component, m32: Component, m33: Component,
) -> Transform {
    // euclid multiplies row vectors, so the matrix is stored transposed.
    Transform3D::new(
        m11, m21, m31, 0.0,
        m12, m22, m32, 0.0,
        m13, m23, m33, 0.0,
        0.0, 0.0, 0.0, 1.0,
    )
}

/// Multiply the given matrix in `transform` with the 3 components.
pub fn transform(transform: &Transform, components: Components) -> Components {
    let Components(x, y, z) = components;
    let Vector { x, y, z, .. } = transform.transform_vector3d(Vector::new(x, y, z));
    Components(x, y, z)
}

/// Wrap a hue into `0..period`.
pub fn normalize_hue(hue: Component, period: Component) -> Component {
    let hue = hue.rem_euclid(period);
    // rem_euclid can round up to exactly `period` for tiny negative inputs.
    if hue >= period {
        0.0
    } else {
        hue
    }
}

/// Returns true if the value is close enough to zero to be treated as zero.
pub fn almost_zero(value: Component) -> bool {
    value.abs() < EPSILON
}

/// The euclidean length of the components.
pub fn magnitude(components: Components) -> Component {
    let Components(a, b, c) = components;
    (a * a + b * b + c * c).sqrt()
}

/// Linear interpolation from `a` to `b`.
pub fn lerp<T: Float>(a: T, b: T, t: T) -> T {
    a + (b - a) * t
}

/// The position of `value` between `a` and `b`, 0 at `a` and 1 at `b`.
pub fn inverse_lerp<T: Float>(a: T, b: T, value: T) -> T {
    if b == a {
        T::zero()
    } else {
        (value - a) / (b - a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_major_transform() {
        #[rustfmt::skip]
        const M: Transform = transform_3x3(
            1.0, 2.0, 3.0,
            4.0, 5.0, 6.0,
            7.0, 8.0, 9.0,
        );
        let result = transform(&M, Components(1.0, 0.0, -1.0));
        assert_eq!(result, Components(-2.0, -2.0, -2.0));
        let result = transform(&M, Components(0.0, 1.0, 0.0));
        assert_eq!(result, Components(2.0, 5.0, 8.0));
    }

    #[test]
    fn hue_wraps() {
        assert_eq!(normalize_hue(370.0, 360.0), 10.0);
        assert_eq!(normalize_hue(-10.0, 360.0), 350.0);
        assert_eq!(normalize_hue(100.0, 100.0), 0.0);
        assert_eq!(normalize_hue(24.0, 24.0), 0.0);
    }

    #[test]
    fn interpolation() {
        assert_eq!(lerp(2.0, 4.0, 0.5), 3.0);
        assert_eq!(inverse_lerp(2.0, 4.0, 3.0), 0.5);
        assert_eq!(inverse_lerp(2.0, 2.0, 3.0), 0.0);
        assert_eq!(magnitude(Components(3.0, 4.0, 0.0)), 5.0);
    }
}
