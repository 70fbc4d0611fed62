//! A module that implements the [CIELAB color
//! space](https://en.wikipedia.org/wiki/Lab_color_space#CIELAB), the perceptual reference space
//! colours are located from. CIELAB has an L value for luminance and two opponent color axes for
//! chromaticity. Formally the three values are called L\*, a\*, and b\*, but for convenience they are
//! just `l`, `a`, and `b` in this module.
//!
//! CIELAB is always relative to a white point: here that is D65, the white of sRGB, so no chromatic
//! adaptation is ever needed on the way to the screen.

use color::{Color, XYZColor};
use consts::D65_WHITE;

/// A color in the CIELAB color space (D65).
/// # Example
/// ```
/// # use colour_wheel::color::{Color, RGBColor};
/// # use colour_wheel::colors::CIELABColor;
/// let lab = CIELABColor::from([50., 0., 0.]);
/// let gray: RGBColor = lab.convert();
/// assert_eq!(gray.to_string(), "#777777");
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct CIELABColor {
    /// The luminance (loosely, brightness) of a given color. 0 is black, whereas 100 is the value of
    /// diffuse white.
    pub l: f64,
    /// The first opponent color axis: negative is green, positive is magenta-red. Usually between
    /// -128 and 127 for visible colors, but imaginary colors can go further.
    pub a: f64,
    /// The second opponent color axis: negative is blue, positive is yellow.
    pub b: f64,
}

impl From<[f64; 3]> for CIELABColor {
    fn from(lab: [f64; 3]) -> CIELABColor {
        CIELABColor {
            l: lab[0],
            a: lab[1],
            b: lab[2],
        }
    }
}

// the cube root with a linear toe, so that very dark colors don't blow up
fn lab_f(t: f64) -> f64 {
    let delta: f64 = 6.0 / 29.0;
    if t <= delta.powi(3) {
        t / (3.0 * delta * delta) + 4.0 / 29.0
    } else {
        t.cbrt()
    }
}

fn lab_f_inv(t: f64) -> f64 {
    let delta: f64 = 6.0 / 29.0;
    if t > delta {
        t * t * t
    } else {
        3.0 * delta * delta * (t - 4.0 / 29.0)
    }
}

impl Color for CIELABColor {
    /// Converts a given CIE XYZ color to CIELAB.
    fn from_xyz(xyz: XYZColor) -> CIELABColor {
        // https://en.wikipedia.org/wiki/Lab_color_space#CIELAB-CIEXYZ_conversions
        let fx = lab_f(xyz.x / D65_WHITE[0]);
        let fy = lab_f(xyz.y / D65_WHITE[1]);
        let fz = lab_f(xyz.z / D65_WHITE[2]);
        CIELABColor {
            l: 116.0 * fy - 16.0,
            a: 500.0 * (fx - fy),
            b: 200.0 * (fy - fz),
        }
    }
    fn to_xyz(&self) -> XYZColor {
        let fy = (self.l + 16.0) / 116.0;
        XYZColor {
            x: D65_WHITE[0] * lab_f_inv(fy + self.a / 500.0),
            y: D65_WHITE[1] * lab_f_inv(fy),
            z: D65_WHITE[2] * lab_f_inv(fy - self.b / 200.0),
        }
    }
}
