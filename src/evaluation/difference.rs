//! Color difference formulas.

use crate::{
    color::{Component, Components},
    math::magnitude,
    models::Lab,
};

use std::f64::consts::PI as PI_F64;

const PI: Component = PI_F64 as Component;
const TWO_PI: Component = 2.0 * PI;

/// 25^7, where the chroma compensation of CIEDE2000 reaches one half.
const POW25_7: Component = 6_103_515_625.0;

/// The euclidean distance between two vectors of the same space.
pub fn distance(a: Components, b: Components) -> Component {
    magnitude(a - b)
}

/// The CIE 1976 color difference, the euclidean distance in Lab.
pub fn cie76(a: &Lab, b: &Lab) -> Component {
    distance(a.to_components(), b.to_components())
}

/// Hue angle in radians in `0..2π`, 0 for neutral colors.
fn hue_angle(a: Component, b: Component) -> Component {
    if a == 0.0 && b == 0.0 {
        0.0
    } else {
        let h = b.atan2(a);
        if h < 0.0 {
            h + TWO_PI
        } else {
            h
        }
    }
}

/// The CIEDE2000 color difference with unit parametric weights.
pub fn ciede2000(first: &Lab, second: &Lab) -> Component {
    let Lab { lightness: l1, a: a1, b: b1 } = *first;
    let Lab { lightness: l2, a: a2, b: b2 } = *second;

    let c1_star = a1.hypot(b1);
    let c2_star = a2.hypot(b2);
    let c_bar = (c1_star + c2_star) / 2.0;

    // G factor for a' adjustment
    let c_bar_7 = c_bar.powi(7);
    let g = 0.5 * (1.0 - (c_bar_7 / (c_bar_7 + POW25_7)).sqrt());

    let a1_prime = a1 * (1.0 + g);
    let a2_prime = a2 * (1.0 + g);

    let c1_prime = a1_prime.hypot(b1);
    let c2_prime = a2_prime.hypot(b2);

    let h1_prime = hue_angle(a1_prime, b1);
    let h2_prime = hue_angle(a2_prime, b2);

    let dl_prime = l2 - l1;
    let dc_prime = c2_prime - c1_prime;

    let dh_prime = if c1_prime * c2_prime == 0.0 {
        0.0
    } else {
        let diff = h2_prime - h1_prime;
        if diff.abs() <= PI {
            diff
        } else if diff > PI {
            diff - TWO_PI
        } else {
            diff + TWO_PI
        }
    };

    let dh_prime_big = 2.0 * (c1_prime * c2_prime).sqrt() * (dh_prime / 2.0).sin();

    let l_bar_prime = (l1 + l2) / 2.0;
    let c_bar_prime = (c1_prime + c2_prime) / 2.0;

    let h_bar_prime = if c1_prime * c2_prime == 0.0 {
        h1_prime + h2_prime
    } else if (h1_prime - h2_prime).abs() <= PI {
        (h1_prime + h2_prime) / 2.0
    } else if h1_prime + h2_prime < TWO_PI {
        (h1_prime + h2_prime + TWO_PI) / 2.0
    } else {
        (h1_prime + h2_prime - TWO_PI) / 2.0
    };

    let t = 1.0 - 0.17 * (h_bar_prime - (30.0 as Component).to_radians()).cos()
        + 0.24 * (2.0 * h_bar_prime).cos()
        + 0.32 * (3.0 * h_bar_prime + (6.0 as Component).to_radians()).cos()
        - 0.20 * (4.0 * h_bar_prime - (63.0 as Component).to_radians()).cos();

    let l_bar_minus_mid_sq = (l_bar_prime - 50.0).powi(2);
    let sl = 1.0 + (0.015 * l_bar_minus_mid_sq) / (20.0 + l_bar_minus_mid_sq).sqrt();
    let sc = 1.0 + 0.045 * c_bar_prime;
    let sh = 1.0 + 0.015 * c_bar_prime * t;

    // Rotation term for blue colors.
    let delta_theta = (30.0 as Component).to_radians()
        * (-((h_bar_prime.to_degrees() - 275.0) / 25.0).powi(2)).exp();
    let c_bar_prime_7 = c_bar_prime.powi(7);
    let rc = 2.0 * (c_bar_prime_7 / (c_bar_prime_7 + POW25_7)).sqrt();
    let rt = -rc * (2.0 * delta_theta).sin();

    let dl_term = dl_prime / sl;
    let dc_term = dc_prime / sc;
    let dh_term = dh_prime_big / sh;

    (dl_term * dl_term + dc_term * dc_term + dh_term * dh_term + rt * dc_term * dh_term).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    #[test]
    fn published_vectors() {
        // Sharma, Wu and Dalal (2005), pairs 1, 7, 17 and 25.
        let pairs = [
            ((50.0, 2.6772, -79.7751), (50.0, 0.0, -82.7485), 2.0425),
            ((50.0, 0.0, 0.0), (50.0, -1.0, 2.0), 2.3669),
            ((50.0, 2.5, 0.0), (73.0, 25.0, -18.0), 27.1492),
            ((60.2574, -34.0099, 36.2677), (60.4626, -34.1751, 39.4387), 1.2644),
        ];
        for (a, b, expected) in pairs {
            let a = Lab::new(a.0, a.1, a.2);
            let b = Lab::new(b.0, b.1, b.2);
            assert_component_eq!(ciede2000(&a, &b), expected, 1.0e-4);
        }
    }

    #[test]
    fn identical_colors_have_no_difference() {
        for lab in [Lab::new(50.0, 20.0, -30.0), Lab::new(0.0, 0.0, 0.0), Lab::new(100.0, -5.0, 90.0)] {
            assert_eq!(cie76(&lab, &lab), 0.0);
            assert_eq!(ciede2000(&lab, &lab), 0.0);
        }
    }

    #[test]
    fn symmetric() {
        let a = Lab::new(40.0, 50.0, -10.0);
        let b = Lab::new(60.0, -20.0, 35.0);
        assert_eq!(distance(a.to_components(), b.to_components()), distance(b.to_components(), a.to_components()));
        assert_eq!(cie76(&a, &b), cie76(&b, &a));
        assert_component_eq!(ciede2000(&a, &b), ciede2000(&b, &a), 1.0e-12);
    }

    #[test]
    fn cie76_is_euclidean() {
        let a = Lab::new(50.0, 0.0, 0.0);
        let b = Lab::new(53.0, 4.0, 0.0);
        assert_component_eq!(cie76(&a, &b), 5.0);
    }
}
