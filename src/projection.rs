//! Geometry for turning a wheel angle into a point on a pair of cartesian colour axes, and back.
//!
//! Angles are in *turns*: 0 is the +x axis, 0.25 is +y, and they wind counter-clockwise. Any real
//! angle is accepted and reduced modulo 1 first.
//!
//! Three strategies are provided:
//!
//! - [`no_projection`], the plain unit circle;
//! - [`ray_project`], which follows the ray from the origin at the given angle until it hits the
//!   perimeter of the 2×2 square centred on the origin, so that 45° is (1, 1) rather than
//!   (1/√2, 1/√2);
//! - [`elliptical_disc_project`], the Fernandez-Guasti elliptical grid mapping of the circle onto
//!   the same square. It agrees with the ray projection at every multiple of 1/8 turn and lands on
//!   the same edge everywhere else, but slides along that edge differently in between.
//!
//! The square projections let a model reach the corners of an opponent-colour plane such as
//! CIELAB's a\*/b\*, where the most chromatic colours live.

use std::f64::consts::{PI, SQRT_2};

/// Reduces an angle in turns into `[0, 1)`.
fn normalize_turns(angle: f64) -> f64 {
    let t = angle.rem_euclid(1.0);
    // rem_euclid rounds a tiny negative angle up to exactly 1
    if t >= 1.0 {
        0.0
    } else {
        t
    }
}

/// `min(1, 1/t)` for a nonnegative tangent, defined as 1 at `t == 0`.
///
/// This is the one place the tangent singularities are absorbed. Floating point cannot represent a
/// quarter turn exactly, so `tan` just below a quarter turn is merely enormous, never infinite, and
/// its reciprocal is tiny; at exactly zero the reciprocal would be infinite, and the clamp to 1 is
/// what the geometry wants anyway.
fn unit_reciprocal(t: f64) -> f64 {
    if t == 0.0 {
        1.0
    } else {
        (1.0 / t).min(1.0)
    }
}

fn clamp_unit(v: f64) -> f64 {
    v.max(-1.0).min(1.0)
}

/// The point on the unit circle at the given angle.
/// # Example
/// ```
/// # use colour_wheel::projection::no_projection;
/// let (x, y) = no_projection(0.25);
/// assert!(x.abs() <= 1e-12 && (y - 1.).abs() <= 1e-12);
/// ```
pub fn no_projection(angle: f64) -> (f64, f64) {
    let (sin, cos) = (normalize_turns(angle) * 2.0 * PI).sin_cos();
    (cos, sin)
}

/// Projects an angle linearly onto the perimeter of the 2×2 square centred on the origin: the
/// result always has at least one coordinate of magnitude exactly 1.
///
/// The work is done in the first quadrant, where the point is `(min(1, 1/tan), min(1, tan))`, and
/// then rotated a quarter turn at a time into the quadrant the angle is actually in.
/// # Example
/// ```
/// # use colour_wheel::projection::ray_project;
/// let (x, y) = ray_project(0.125);
/// assert!((x - 1.).abs() <= 1e-12 && (y - 1.).abs() <= 1e-12);
/// let (x, y) = ray_project(0.5);
/// assert!((x + 1.).abs() <= 1e-12 && y.abs() <= 1e-12);
/// ```
pub fn ray_project(angle: f64) -> (f64, f64) {
    let turns = normalize_turns(angle);
    let quadrant = ((turns * 4.0).floor() as u8).min(3);
    let local = turns - f64::from(quadrant) * 0.25;
    let tan_angle = (local * 2.0 * PI).tan();
    let u = unit_reciprocal(tan_angle);
    let v = tan_angle.min(1.0);
    let (x, y) = match quadrant {
        0 => (u, v),
        1 => (-v, u),
        2 => (-u, -v),
        _ => (v, -u),
    };
    (clamp_unit(x), clamp_unit(y))
}

/// The angle of a point, in turns in `[0, 1)`. This inverts [`ray_project`] and [`no_projection`]
/// exactly, and works for any point, not only those on a perimeter, since only the direction
/// matters. The origin has no direction and maps to 0.
/// # Example
/// ```
/// # use colour_wheel::projection::ray_unproject;
/// assert_eq!(ray_unproject(0., 2.), 0.25);
/// assert!((ray_unproject(-1., -1.) - 0.625).abs() <= 1e-12);
/// ```
pub fn ray_unproject(x: f64, y: f64) -> f64 {
    if x == 0.0 {
        // vertical: settle the quadrant without going near atan2's cut
        if y > 0.0 {
            0.25
        } else if y < 0.0 {
            0.75
        } else {
            0.0
        }
    } else {
        normalize_turns(y.atan2(x) / (2.0 * PI))
    }
}

/// Projects an angle onto the perimeter of the 2×2 square using the elliptical grid mapping of the
/// unit disc onto the square.
///
/// The general mapping is `x = (√(2 + u² - v² + 2√2·u) - √(2 + u² - v² - 2√2·u)) / 2`, and `y`
/// likewise with the roles swapped. On the unit circle both radicands are perfect squares,
/// `(√2·u ± 1)²`, so `x` is exactly `√2·u` clamped into `[-1, 1]`. Taking square roots instead
/// leaves an error near 1e-8 at the corners, where a radicand that should be 0 rounds to 1e-16.
/// # Example
/// ```
/// # use colour_wheel::projection::elliptical_disc_project;
/// let (x, y) = elliptical_disc_project(0.875);
/// assert!((x - 1.).abs() <= 1e-12 && (y + 1.).abs() <= 1e-12);
/// ```
pub fn elliptical_disc_project(angle: f64) -> (f64, f64) {
    let (v, u) = (normalize_turns(angle) * 2.0 * PI).sin_cos();
    (clamp_unit(SQRT_2 * u), clamp_unit(SQRT_2 * v))
}

/// The angle, in turns, of the disc point that [`elliptical_disc_project`] would map to the
/// direction of `(x, y)`. The point is first pushed out along its ray to the square's perimeter,
/// then mapped back onto the circle with the square-to-disc half of the elliptical grid mapping.
pub fn elliptical_disc_unproject(x: f64, y: f64) -> f64 {
    let r = x.abs().max(y.abs());
    if r == 0.0 {
        return 0.0;
    }
    let (xn, yn) = (x / r, y / r);
    let u = xn * (1.0 - yn * yn / 2.0).sqrt();
    let v = yn * (1.0 - xn * xn / 2.0).sqrt();
    ray_unproject(u, v)
}

/// A projection strategy, pairing the forward mapping with its inverse and the radial measure
/// under which its perimeter sits at radius 1.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Projection {
    /// The plain unit circle: see [`no_projection`].
    Circle,
    /// Linear projection onto the square: see [`ray_project`].
    Ray,
    /// Elliptical grid mapping onto the square: see [`elliptical_disc_project`].
    EllipticalDisc,
}

impl Projection {
    /// The boundary point for an angle in turns.
    pub fn project(&self, angle: f64) -> (f64, f64) {
        match *self {
            Projection::Circle => no_projection(angle),
            Projection::Ray => ray_project(angle),
            Projection::EllipticalDisc => elliptical_disc_project(angle),
        }
    }

    /// The angle in turns whose projection points the same way as `(x, y)`.
    pub fn unproject(&self, x: f64, y: f64) -> f64 {
        match *self {
            Projection::Circle | Projection::Ray => ray_unproject(x, y),
            Projection::EllipticalDisc => elliptical_disc_unproject(x, y),
        }
    }

    /// How far `(x, y)` is from the origin, measured so that every projected point is at 1:
    /// Euclidean for the circle, the larger coordinate magnitude for the square.
    pub fn radius(&self, x: f64, y: f64) -> f64 {
        match *self {
            Projection::Circle => x.hypot(y),
            Projection::Ray | Projection::EllipticalDisc => x.abs().max(y.abs()),
        }
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    // distance between two angles in turns, going whichever way round is shorter
    fn turn_difference(a: f64, b: f64) -> f64 {
        let d = (a - b).rem_euclid(1.0);
        d.min(1.0 - d)
    }

    fn samples() -> Vec<f64> {
        // offset by half a step so no sample is an axis or an octant
        (0..400).map(|i| (f64::from(i) + 0.5) / 400.).collect()
    }

    #[test]
    fn test_unit_reciprocal() {
        assert_eq!(unit_reciprocal(0.), 1.);
        assert_eq!(unit_reciprocal(0.5), 1.);
        assert_eq!(unit_reciprocal(4.), 0.25);
        let tiny = unit_reciprocal(f64::MAX);
        assert!(tiny > 0. && tiny.is_finite());
    }

    #[test]
    fn test_singular_angles() {
        let expected = [(0., (1., 0.)), (0.25, (0., 1.)), (0.5, (-1., 0.)), (0.75, (0., -1.)), (1., (1., 0.))];
        for &(angle, (ex, ey)) in expected.iter() {
            let (x, y) = ray_project(angle);
            assert!(x.is_finite() && y.is_finite());
            assert!((x - ex).abs() <= 1e-12, "{} gave x = {}", angle, x);
            assert!((y - ey).abs() <= 1e-12, "{} gave y = {}", angle, y);
            let (x, y) = elliptical_disc_project(angle);
            assert!((x - ex).abs() <= 1e-12, "{} gave x = {}", angle, x);
            assert!((y - ey).abs() <= 1e-12, "{} gave y = {}", angle, y);
        }
        // just shy of a quarter turn the tangent is huge but finite
        let (x, y) = ray_project(0.25 - 1e-17);
        assert!(x.is_finite() && y.is_finite());
    }

    #[test]
    fn test_quadrant_corners() {
        let corners = [(0.125, (1., 1.)), (0.375, (-1., 1.)), (0.625, (-1., -1.)), (0.875, (1., -1.))];
        for &(angle, (ex, ey)) in corners.iter() {
            let (x, y) = ray_project(angle);
            // tan of an eighth turn is a hair under 1
            assert!((x - ex).abs() <= 1e-12 && (y - ey).abs() <= 1e-12, "{} gave ({}, {})", angle, x, y);
        }
    }

    #[test]
    fn test_out_of_range_angles_wrap() {
        assert_eq!(ray_project(1.125), ray_project(0.125));
        assert_eq!(ray_project(-0.875), ray_project(0.125));
        assert_eq!(normalize_turns(-1e-20), 0.);
    }

    #[test]
    fn test_ray_on_square_boundary() {
        for angle in samples() {
            let (x, y) = ray_project(angle);
            assert!((x.abs().max(y.abs()) - 1.).abs() <= 1e-12, "{} gave ({}, {})", angle, x, y);
        }
    }

    #[test]
    fn test_ray_inverse_consistency() {
        for angle in samples() {
            let (x, y) = ray_project(angle);
            assert!(turn_difference(ray_unproject(x, y), angle) <= 1e-12, "angle {}", angle);
        }
        // and in every quadrant, including the exact axes
        for &angle in [0., 0.1, 0.25, 0.3, 0.5, 0.6, 0.75, 0.9].iter() {
            let (x, y) = ray_project(angle);
            assert!(turn_difference(ray_unproject(x, y), angle) <= 1e-12, "angle {}", angle);
        }
    }

    #[test]
    fn test_unproject_vertical_and_origin() {
        assert_eq!(ray_unproject(0., 1.), 0.25);
        assert_eq!(ray_unproject(0., -3.), 0.75);
        assert_eq!(ray_unproject(0., 0.), 0.);
        assert_eq!(ray_unproject(-2., 0.), 0.5);
    }

    #[test]
    fn test_circle_projection() {
        for angle in samples() {
            let (x, y) = no_projection(angle);
            assert!((x.hypot(y) - 1.).abs() <= 1e-12);
            assert!(turn_difference(ray_unproject(x, y), angle) <= 1e-12);
        }
    }

    #[test]
    fn test_elliptical_matches_ray_at_octants() {
        for k in 0..8 {
            let angle = f64::from(k) / 8.;
            let (ex, ey) = elliptical_disc_project(angle);
            let (rx, ry) = ray_project(angle);
            assert!((ex - rx).abs() <= 1e-9, "octant {}", k);
            assert!((ey - ry).abs() <= 1e-9, "octant {}", k);
        }
    }

    #[test]
    fn test_elliptical_corners_are_exact() {
        // each corner is where one radicand should vanish
        let corners = [(0.125, (1., 1.)), (0.375, (-1., 1.)), (0.625, (-1., -1.)), (0.875, (1., -1.))];
        for &(angle, (ex, ey)) in corners.iter() {
            let (x, y) = elliptical_disc_project(angle);
            assert!((x - ex).abs() <= 1e-12 && (y - ey).abs() <= 1e-12, "{} gave ({}, {})", angle, x, y);
        }
    }

    #[test]
    fn test_elliptical_lands_on_same_edge() {
        for angle in samples() {
            let (ex, ey) = elliptical_disc_project(angle);
            let (rx, ry) = ray_project(angle);
            assert!((ex.abs().max(ey.abs()) - 1.).abs() <= 1e-12);
            assert_eq!(ex.signum(), rx.signum(), "angle {}", angle);
            assert_eq!(ey.signum(), ry.signum(), "angle {}", angle);
            assert_eq!(ex.abs() >= 1. - 1e-12, rx.abs() >= 1. - 1e-12, "angle {}", angle);
            assert!((ex - rx).abs() <= 0.14 && (ey - ry).abs() <= 0.14, "angle {}", angle);
        }
    }

    #[test]
    fn test_elliptical_inverse() {
        for angle in samples() {
            let (x, y) = elliptical_disc_project(angle);
            assert!(turn_difference(elliptical_disc_unproject(x, y), angle) <= 1e-9, "angle {}", angle);
            // scaling towards the origin keeps the direction
            let back = elliptical_disc_unproject(x * 0.3, y * 0.3);
            assert!(turn_difference(back, angle) <= 1e-9, "angle {}", angle);
        }
        assert_eq!(elliptical_disc_unproject(0., 0.), 0.);
    }

    #[test]
    fn test_projection_radius() {
        assert_eq!(Projection::Ray.radius(0.5, -0.8), 0.8);
        assert_eq!(Projection::EllipticalDisc.radius(-0.9, 0.2), 0.9);
        assert!((Projection::Circle.radius(0.6, 0.8) - 1.).abs() <= 1e-12);
        let (x, y) = Projection::Ray.project(0.3);
        assert!((Projection::Ray.radius(x, y) - 1.).abs() <= 1e-12);
    }
}
