//! This module implements the HSV color space, a cousin of the HSL color space. The definition of
//! value differs from lightness: it goes from black to full saturation instead of black to
//! white. This makes value an extraordinarily poor analog of luminance (dark purple is the same
//! value as white, despite reflecting one-tenth the light), but does make the hue and saturation a
//! bit more meaningful than HSL.

use color::{Color, RGBColor, XYZColor};
use super::{hexcone, hue_chroma_to_rgb};

/// An HSV color, defining parameters for hue, saturation, and value from the sRGB space.
/// # Example
/// As with HSL, changing a red to a yellow results in a lightness increase as well.
///
/// ```
/// # use colour_wheel::colors::HSVColor;
/// let red = HSVColor{h: 0., s: 0.5, v: 0.8};
/// let yellow = HSVColor{h: 50., s: 0.5, v: 0.8};
/// assert_eq!(red.to_rgb().to_string(), "#CC6666");
/// assert_eq!(yellow.to_rgb().to_string(), "#CCBB66");
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct HSVColor {
    /// The hue, described as an angle that ranges between 0 and 360 in degrees.
    pub h: f64,
    /// The saturation, the distance between the color and the equivalent-value grayscale. Ranges
    /// between 0 and 1.
    pub s: f64,
    /// The value, defined as the largest RGB primary value of a color.
    pub v: f64,
}

impl HSVColor {
    /// Converts to sRGB.
    pub fn to_rgb(&self) -> RGBColor {
        let chroma = self.s * self.v;
        let (r1, g1, b1) = hue_chroma_to_rgb(self.h, chroma);
        let offset = self.v - chroma;
        RGBColor {
            r: r1 + offset,
            g: g1 + offset,
            b: b1 + offset,
        }
    }
}

impl From<RGBColor> for HSVColor {
    fn from(rgb: RGBColor) -> HSVColor {
        let hc = hexcone(&rgb);
        let value = hc.max;
        let saturation = if value == 0.0 {
            // black: any saturation is the same color
            0.0
        } else {
            hc.chroma() / value
        };
        HSVColor {
            h: hc.hue,
            s: saturation,
            v: value,
        }
    }
}

impl Color for HSVColor {
    /// Converts to HSV by going through sRGB.
    fn from_xyz(xyz: XYZColor) -> HSVColor {
        HSVColor::from(RGBColor::from_xyz(xyz))
    }
    fn to_xyz(&self) -> XYZColor {
        self.to_rgb().to_xyz()
    }
}
