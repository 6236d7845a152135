/// Check for equality between two components, by default allowing for the
/// rounding errors of a conversion round trip.
#[macro_export]
macro_rules! assert_component_eq {
    ($actual:expr, $expected:expr) => {{
        approx::assert_abs_diff_eq!($actual, $expected, epsilon = 1.0e-6);
    }};
    ($actual:expr, $expected:expr, $epsilon:expr) => {{
        approx::assert_abs_diff_eq!($actual, $expected, epsilon = $epsilon);
    }};
}

/// Check for equality between all three components of two
/// [`Components`](crate::Components).
#[macro_export]
macro_rules! assert_components_eq {
    ($actual:expr, $expected:expr) => {{
        $crate::assert_components_eq!($actual, $expected, 1.0e-6);
    }};
    ($actual:expr, $expected:expr, $epsilon:expr) => {{
        let actual: $crate::Components = $actual;
        let expected: $crate::Components = $expected;
        approx::assert_abs_diff_eq!(actual.0, expected.0, epsilon = $epsilon);
        approx::assert_abs_diff_eq!(actual.1, expected.1, epsilon = $epsilon);
        approx::assert_abs_diff_eq!(actual.2, expected.2, epsilon = $epsilon);
    }};
}
