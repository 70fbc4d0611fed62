//! This module implements the CIECAM02 color appearance model, restricted to its lightness (J),
//! chroma (C) and hue angle (h) correlates. Unlike CIELAB, CIECAM02 models the viewing conditions
//! a color is seen under: how bright the surroundings are, how adapted the eye is to the white, and
//! how the background lightens or darkens everything on it. That makes its hue and chroma far more
//! even than CIELAB's, particularly in the blues.
//!
//! Every conversion here assumes the sRGB reference viewing conditions: a D65 display white, an
//! adapting luminance of 64/π × 0.2 cd/m², a 20% gray background and an average surround. Those are
//! derived into the model's internal constants once, on first use.
//!
//! The formulae follow CIE 159:2004. The hue correlate is the angle of the opponent (a, b) plane
//! CIECAM02 builds internally, so [`CIECAM02Color::ab`] exposes that plane for models that want
//! cartesian coordinates.

use std::f64::consts::PI;

use color::{Color, XYZColor};
use consts::{transform, CAT02, CAT02_INV, CAT02_TO_HPE, D65_WHITE, HPE_TO_CAT02};

/// The constants CIECAM02 derives from a set of viewing conditions.
#[derive(Debug, Clone)]
struct ViewingConditions {
    /// Impact of surround.
    c: f64,
    /// Chromatic induction factor.
    nc: f64,
    /// Background relative luminance.
    n: f64,
    /// Brightness induction factor (also the chromatic one, they are equal).
    nbb: f64,
    /// Base exponential nonlinearity.
    z: f64,
    /// Luminance level adaptation factor.
    fl: f64,
    /// Per-channel degree-of-adaptation factors.
    d_rgb: [f64; 3],
    /// Achromatic response of the white.
    aw: f64,
}

impl ViewingConditions {
    fn srgb_reference() -> ViewingConditions {
        let la = 64.0 / PI * 0.2;
        let yb = 20.0;
        // average surround
        let (f, c, nc) = (1.0, 0.69, 1.0);
        let white = [D65_WHITE[0] * 100.0, D65_WHITE[1] * 100.0, D65_WHITE[2] * 100.0];
        let yw = white[1];

        let k = 1.0 / (5.0 * la + 1.0);
        let k4 = k.powi(4);
        let fl = 0.2 * k4 * (5.0 * la) + 0.1 * (1.0 - k4).powi(2) * (5.0 * la).cbrt();
        let n = yb / yw;
        let nbb = 0.725 * (1.0 / n).powf(0.2);
        let z = 1.48 + n.sqrt();
        let d = (f * (1.0 - (1.0 / 3.6) * ((-la - 42.0) / 92.0).exp())).max(0.0).min(1.0);

        let rgb_w = transform(&CAT02, white);
        let d_rgb = [
            d * yw / rgb_w[0] + 1.0 - d,
            d * yw / rgb_w[1] + 1.0 - d,
            d * yw / rgb_w[2] + 1.0 - d,
        ];
        let rgb_wc = [d_rgb[0] * rgb_w[0], d_rgb[1] * rgb_w[1], d_rgb[2] * rgb_w[2]];
        let rgb_pw = transform(&CAT02_TO_HPE, rgb_wc);
        let aw = (2.0 * adapt(rgb_pw[0], fl) + adapt(rgb_pw[1], fl) + adapt(rgb_pw[2], fl) / 20.0
            - 0.305) * nbb;

        ViewingConditions {
            c,
            nc,
            n,
            nbb,
            z,
            fl,
            d_rgb,
            aw,
        }
    }

    // the chroma scale's dependence on background luminance
    fn chroma_factor(&self) -> f64 {
        (1.64 - 0.29f64.powf(self.n)).powf(0.73)
    }
}

lazy_static! {
    static ref SRGB_VIEWING: ViewingConditions = ViewingConditions::srgb_reference();
}

/// The post-adaptation cone compression, applied symmetrically around zero.
fn adapt(component: f64, fl: f64) -> f64 {
    let p = (fl * component.abs() / 100.0).powf(0.42);
    (400.0 * p / (27.13 + p)).copysign(component) + 0.1
}

fn unadapt(adapted: f64, fl: f64) -> f64 {
    let shifted = adapted - 0.1;
    // the compression saturates at 400: anything at or past that has no preimage
    let mag = shifted.abs().min(399.999_999);
    ((100.0 / fl) * (27.13 * mag / (400.0 - mag)).powf(1.0 / 0.42)).copysign(shifted)
}

// eccentricity factor, which evens out perceived colorfulness around the hue circle
fn eccentricity(hue_deg: f64) -> f64 {
    0.25 * ((hue_deg.to_radians() + 2.0).cos() + 3.8)
}

/// A color described by its CIECAM02 lightness, chroma and hue under sRGB viewing conditions.
/// # Example
/// ```
/// # use colour_wheel::color::{Color, XYZColor};
/// # use colour_wheel::colors::CIECAM02Color;
/// let white = CIECAM02Color::from_xyz(XYZColor::white_point());
/// assert!((white.j - 100.).abs() <= 1e-9);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct CIECAM02Color {
    /// The lightness correlate J, from 0 (black) to 100 (the display white).
    pub j: f64,
    /// The chroma correlate C. Colors sRGB can show reach a little over 100.
    pub c: f64,
    /// The hue angle h in degrees, from 0 to 360.
    pub h: f64,
}

impl CIECAM02Color {
    /// The chroma and hue as a point on the opponent (a, b) plane: `(C cos h, C sin h)`.
    pub fn ab(&self) -> (f64, f64) {
        let (sin, cos) = self.h.to_radians().sin_cos();
        (self.c * cos, self.c * sin)
    }

    /// The inverse of [`ab`](#method.ab): builds a color from lightness and a point on the (a, b)
    /// plane.
    pub fn from_jab(j: f64, a: f64, b: f64) -> CIECAM02Color {
        CIECAM02Color {
            j,
            c: a.hypot(b),
            h: b.atan2(a).to_degrees().rem_euclid(360.0),
        }
    }
}

impl Color for CIECAM02Color {
    fn from_xyz(xyz: XYZColor) -> CIECAM02Color {
        let vc = &*SRGB_VIEWING;
        let rgb = transform(&CAT02, [xyz.x * 100.0, xyz.y * 100.0, xyz.z * 100.0]);
        let rgb_c = [vc.d_rgb[0] * rgb[0], vc.d_rgb[1] * rgb[1], vc.d_rgb[2] * rgb[2]];
        let rgb_p = transform(&CAT02_TO_HPE, rgb_c);
        let ra = adapt(rgb_p[0], vc.fl);
        let ga = adapt(rgb_p[1], vc.fl);
        let ba = adapt(rgb_p[2], vc.fl);

        // opponent dimensions
        let a = ra - 12.0 * ga / 11.0 + ba / 11.0;
        let b = (ra + ga - 2.0 * ba) / 9.0;
        let h = b.atan2(a).to_degrees().rem_euclid(360.0);

        let achromatic = ((2.0 * ra + ga + ba / 20.0 - 0.305) * vc.nbb).max(0.0);
        let j = 100.0 * (achromatic / vc.aw).powf(vc.c * vc.z);

        let denom = ra + ga + 21.0 * ba / 20.0;
        let t = if denom <= 0.0 {
            0.0
        } else {
            (50000.0 / 13.0 * vc.nc * vc.nbb * eccentricity(h) * a.hypot(b)) / denom
        };
        let c = t.powf(0.9) * (j / 100.0).sqrt() * vc.chroma_factor();
        CIECAM02Color { j, c, h }
    }

    fn to_xyz(&self) -> XYZColor {
        let vc = &*SRGB_VIEWING;
        if self.j <= 0.0 {
            return XYZColor { x: 0.0, y: 0.0, z: 0.0 };
        }
        let t = if self.c <= 0.0 {
            0.0
        } else {
            (self.c / ((self.j / 100.0).sqrt() * vc.chroma_factor())).powf(1.0 / 0.9)
        };
        let achromatic = vc.aw * (self.j / 100.0).powf(1.0 / (vc.c * vc.z));
        let p2 = achromatic / vc.nbb + 0.305;
        let p3 = 21.0 / 20.0;

        let (a, b) = if t == 0.0 {
            (0.0, 0.0)
        } else {
            let p1 = (50000.0 / 13.0 * vc.nc * vc.nbb * eccentricity(self.h)) / t;
            let (sin, cos) = self.h.to_radians().sin_cos();
            // divide by whichever of sin and cos is larger, to stay away from zero
            if sin.abs() >= cos.abs() {
                let p4 = p1 / sin;
                let b = p2 * (2.0 + p3) * (460.0 / 1403.0)
                    / (p4 + (2.0 + p3) * (220.0 / 1403.0) * (cos / sin) - 27.0 / 1403.0
                        + p3 * (6300.0 / 1403.0));
                (b * cos / sin, b)
            } else {
                let p5 = p1 / cos;
                let a = p2 * (2.0 + p3) * (460.0 / 1403.0)
                    / (p5 + (2.0 + p3) * (220.0 / 1403.0)
                        - (27.0 / 1403.0 - p3 * (6300.0 / 1403.0)) * (sin / cos));
                (a, a * sin / cos)
            }
        };

        let ra = (460.0 * p2 + 451.0 * a + 288.0 * b) / 1403.0;
        let ga = (460.0 * p2 - 891.0 * a - 261.0 * b) / 1403.0;
        let ba = (460.0 * p2 - 220.0 * a - 6300.0 * b) / 1403.0;
        let rgb_p = [unadapt(ra, vc.fl), unadapt(ga, vc.fl), unadapt(ba, vc.fl)];
        let rgb_c = transform(&HPE_TO_CAT02, rgb_p);
        let rgb = [rgb_c[0] / vc.d_rgb[0], rgb_c[1] / vc.d_rgb[1], rgb_c[2] / vc.d_rgb[2]];
        let xyz = transform(&CAT02_INV, rgb);
        XYZColor {
            x: xyz[0] / 100.0,
            y: xyz[1] / 100.0,
            z: xyz[2] / 100.0,
        }
    }
}
