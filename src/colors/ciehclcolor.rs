//! This file implements CIELAB in polar coordinates, often called CIELCh or HCL: chroma and hue
//! instead of two opponent color axes. Be careful not to confuse this with the hexagonal hue of HSL:
//! this hue is a true angle on the a\*/b\* plane.

use color::{Color, XYZColor};
use super::cielabcolor::CIELABColor;

/// A cylindrical form of CIELAB, analogous to the relationship between HSL and RGB.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct CIEHCLColor {
    /// The hue component, in degrees from 0 to 360. 90 degrees is roughly yellow, 180 green, 270 blue
    /// and 360 red.
    pub h: f64,
    /// The chroma component: the distance from the gray of the same lightness. Ranges from 0 to
    /// about 134 for colors sRGB can show, though for most lightness values the limit is far lower.
    pub c: f64,
    /// The lightness component, identical to CIELAB's. Ranges between 0 and 100.
    pub l: f64,
}

impl From<CIELABColor> for CIEHCLColor {
    fn from(lab: CIELABColor) -> CIEHCLColor {
        CIEHCLColor {
            h: lab.b.atan2(lab.a).to_degrees().rem_euclid(360.0),
            c: lab.b.hypot(lab.a),
            l: lab.l,
        }
    }
}

impl From<CIEHCLColor> for CIELABColor {
    fn from(hcl: CIEHCLColor) -> CIELABColor {
        let (sin, cos) = hcl.h.to_radians().sin_cos();
        CIELABColor {
            l: hcl.l,
            a: hcl.c * cos,
            b: hcl.c * sin,
        }
    }
}

impl Color for CIEHCLColor {
    /// Converts from XYZ to HCL by way of CIELAB.
    fn from_xyz(xyz: XYZColor) -> CIEHCLColor {
        CIEHCLColor::from(CIELABColor::from_xyz(xyz))
    }
    fn to_xyz(&self) -> XYZColor {
        CIELABColor::from(*self).to_xyz()
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_hcl_lab_conversion() {
        let lab = CIELABColor{l: 60., a: 0., b: 40.};
        let hcl = CIEHCLColor::from(lab);
        assert!((hcl.h - 90.).abs() <= 1e-10);
        assert!((hcl.c - 40.).abs() <= 1e-10);
        let neg = CIEHCLColor::from(CIELABColor{l: 60., a: 10., b: -10.});
        assert!((neg.h - 315.).abs() <= 1e-10);
        let back = CIELABColor::from(neg);
        assert!((back.a - 10.).abs() <= 1e-10);
        assert!((back.b + 10.).abs() <= 1e-10);
    }

    #[test]
    fn test_hcl_xyz_round_trip() {
        let xyz = XYZColor{x: 0.2, y: 0.42, z: 0.23};
        let hcl = CIEHCLColor::from_xyz(xyz);
        let xyz2 = hcl.to_xyz();
        assert!((xyz.x - xyz2.x).abs() <= 1e-12);
        assert!((xyz.y - xyz2.y).abs() <= 1e-12);
        assert!((xyz.z - xyz2.z).abs() <= 1e-12);
    }
}
