//! The HCG (hue, chroma, grayness) space. Where HSL and HSV both fold chroma into a
//! lightness-relative saturation, HCG keeps the hexagonal chroma as is and describes the rest of
//! the color by how gray it is: the shade of gray the color is lifted towards as chroma drops. At
//! full chroma the grayness has no effect, and at zero chroma the color *is* that gray.

use color::{Color, RGBColor, XYZColor};
use super::{hexcone, hue_chroma_to_rgb};

/// A color in the HCG space.
/// # Example
/// ```
/// # use colour_wheel::colors::HCGColor;
/// // mostly-chromatic red over a mid gray
/// let brick = HCGColor{h: 0., c: 0.6, g: 0.5};
/// assert_eq!(brick.to_rgb().to_string(), "#CC3333");
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct HCGColor {
    /// The hue in degrees, shared with HSL and HSV.
    pub h: f64,
    /// The chroma: the largest RGB component minus the smallest. Ranges from 0 to 1.
    pub c: f64,
    /// The grayness: the gray the color sits over, from 0 (black) to 1 (white).
    pub g: f64,
}

impl HCGColor {
    /// Converts to sRGB.
    pub fn to_rgb(&self) -> RGBColor {
        let (r1, g1, b1) = hue_chroma_to_rgb(self.h, self.c);
        // the floor of the color is the gray, scaled by how much room chroma leaves
        let offset = (1.0 - self.c) * self.g;
        RGBColor {
            r: r1 + offset,
            g: g1 + offset,
            b: b1 + offset,
        }
    }
}

impl From<RGBColor> for HCGColor {
    fn from(rgb: RGBColor) -> HCGColor {
        let hc = hexcone(&rgb);
        let chroma = hc.chroma();
        let grayness = if chroma < 1.0 {
            hc.min / (1.0 - chroma)
        } else {
            // fully chromatic: grayness is undefined, so use 0
            0.0
        };
        HCGColor {
            h: hc.hue,
            c: chroma,
            g: grayness,
        }
    }
}

impl Color for HCGColor {
    fn from_xyz(xyz: XYZColor) -> HCGColor {
        HCGColor::from(RGBColor::from_xyz(xyz))
    }
    fn to_xyz(&self) -> XYZColor {
        self.to_rgb().to_xyz()
    }
}
