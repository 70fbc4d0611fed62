//! This file provides constants that are used for matrix multiplication and color space conversion,
//! along with a function for computing inverses. The reason for this method of doing things instead
//! of hard-coding both directions is that hand-copied inverses are always slightly off, allowing
//! errors to creep in when a color goes out to a space and back again. Computing each inverse once
//! from the forward matrix keeps round trips honest.

use rulinalg::matrix::Matrix;
use rulinalg::vector::Vector;

/// The D65 reference white in CIE 1931 XYZ, normalized so that Y is 1.
pub const D65_WHITE: [f64; 3] = [0.95047, 1.0, 1.08883];

/// Not safe for general use: the only reason this is here is to invert the constant matrices
/// below. Panics on singular matrices, which would mean one of the constants was mistyped.
pub fn inv(m: Matrix<f64>) -> Matrix<f64> {
    match m.inverse() {
        Ok(inverse) => inverse,
        Err(_) => panic!("Constant matrix not invertible!"),
    }
}

/// Multiplies a 3x3 matrix by a column vector given as an array.
pub fn transform(m: &Matrix<f64>, v: [f64; 3]) -> [f64; 3] {
    let out = m * Vector::new(v.to_vec());
    [out[0], out[1], out[2]]
}

lazy_static! {
    /// Linear sRGB to XYZ (D65), per IEC 61966-2-1.
    pub static ref SRGB_TO_XYZ: Matrix<f64> = matrix![
        0.4124564, 0.3575761, 0.1804375;
        0.2126729, 0.7151522, 0.0721750;
        0.0193339, 0.1191920, 0.9503041
    ];
    pub static ref XYZ_TO_SRGB: Matrix<f64> = inv(SRGB_TO_XYZ.clone());

    /// The CAT02 chromatic adaptation transform used by CIECAM02.
    pub static ref CAT02: Matrix<f64> = matrix![
        00.7328, 0.4296, -0.1624;
        -0.7036, 1.6975, 00.0061;
        00.0030, 0.0136, 00.9834
    ];
    pub static ref CAT02_INV: Matrix<f64> = inv(CAT02.clone());

    /// The Hunt-Pointer-Estevez transform into cone fundamentals.
    pub static ref HPE: Matrix<f64> = matrix![
        00.38971, 0.68898, -0.07868;
        -0.22981, 1.18340, 00.04641;
        00.00000, 0.00000, 01.00000
    ];
    pub static ref HPE_INV: Matrix<f64> = inv(HPE.clone());

    /// CAT02-adapted RGB straight to HPE cone space, as CIECAM02 needs after adaptation.
    pub static ref CAT02_TO_HPE: Matrix<f64> = &*HPE * &*CAT02_INV;
    pub static ref HPE_TO_CAT02: Matrix<f64> = &*CAT02 * &*HPE_INV;
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;
    use rulinalg::matrix::BaseMatrix;

    #[test]
    fn test_srgb_white_is_d65() {
        let white = transform(&SRGB_TO_XYZ, [1., 1., 1.]);
        for i in 0..3 {
            assert!((white[i] - D65_WHITE[i]).abs() <= 1e-4);
        }
    }

    #[test]
    fn test_inv() {
        let m = matrix![2., 0., 0.; 0., 4., 0.; 1., 0., 1.];
        let expected = matrix![0.5, 0., 0.; 0., 0.25, 0.; -0.5, 0., 1.];
        for (a, b) in inv(m).iter().zip(expected.iter()) {
            assert!((a - b).abs() <= 1e-12);
        }
    }

    #[test]
    fn test_inverse_round_trip() {
        let v = [0.2, 0.7, 0.4];
        let back = transform(&XYZ_TO_SRGB, transform(&SRGB_TO_XYZ, v));
        for i in 0..3 {
            assert!((back[i] - v[i]).abs() <= 1e-12);
        }
        let back = transform(&HPE_TO_CAT02, transform(&CAT02_TO_HPE, v));
        for i in 0..3 {
            assert!((back[i] - v[i]).abs() <= 1e-12);
        }
    }
}
