//! This module contains a struct, [`Coord`], that models a point in a 3D coordinate space and
//! supports scaling by a scalar and clamping. Every colour model describes a located colour as a
//! `Coord` of its native components, and raw 0-255 RGB triples travel as `Coord`s too.

use std::ops::Mul;
use num;
use num::{Num, NumCast};

/// Represents a scalar value that can be easily converted, described using the common numeric traits
/// in [`num`]. Anything that falls under this category can be multiplied by a [`Coord`] to scale
/// it. This has no added functionality: it's just for convenience.
pub trait Scalar: NumCast + Num {}

impl<T: NumCast + Num> Scalar for T {}

/// A point in 3D space. The axes are denoted `x`, `y`, and `z`, and the distinction between them is
/// completely conventional: a colour model's native coordinates map onto them in the order the
/// model names them. For example, the HSL model's `Coord` has hue on `x`, saturation on `y` and
/// lightness on `z`, while an RGB triple has red, green and blue in that order.
///
/// # Example
/// ```
/// # use colour_wheel::coord::Coord;
/// let rgb = Coord{x: 1., y: 0.5, z: 0.};
/// // scalar multiplication only works with the scalar on the right
/// let scaled = rgb * 255u8;
/// assert_eq!(scaled, Coord{x: 255., y: 127.5, z: 0.});
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Coord {
    /// The first axis.
    pub x: f64,
    /// The second axis.
    pub y: f64,
    /// The third axis.
    pub z: f64,
}

// scalar multiplication: (a, b, c) * s = (sa, sb, sc). Not commutative, but it'll do.
impl<U: Scalar> Mul<U> for Coord {
    type Output = Coord;
    fn mul(self, rhs: U) -> Coord {
        // every primitive number casts to f64, so NaN only shows up for exotic Scalar impls
        let r: f64 = num::cast(rhs).unwrap_or(f64::NAN);
        Coord {
            x: self.x * r,
            y: self.y * r,
            z: self.z * r,
        }
    }
}

impl Coord {
    /// Returns `true` if any of the three components falls outside `[min, max]`.
    pub fn any_outside(&self, min: f64, max: f64) -> bool {
        [self.x, self.y, self.z].iter().any(|&v| v < min || v > max)
    }

    /// Clamps each component independently into `[min, max]`.
    pub fn clamp_each(&self, min: f64, max: f64) -> Coord {
        let clamp = |v: f64| v.max(min).min(max);
        Coord {
            x: clamp(self.x),
            y: clamp(self.y),
            z: clamp(self.z),
        }
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_scalar_multiplication() {
        let half = Coord{x: 0.2, y: 1., z: 0.5};
        assert_eq!(half * 2u8, Coord{x: 0.4, y: 2., z: 1.});
        assert_eq!(half * 0.5f64, Coord{x: 0.1, y: 0.5, z: 0.25});
    }

    #[test]
    fn test_clamping() {
        let raw = Coord{x: -10., y: 128., z: 300.};
        assert!(raw.any_outside(0., 255.));
        let clamped = raw.clamp_each(0., 255.);
        assert_eq!(clamped, Coord{x: 0., y: 128., z: 255.});
        assert!(!clamped.any_outside(0., 255.));
    }
}
