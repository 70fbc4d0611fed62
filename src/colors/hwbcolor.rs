//! The HWB (hue, whiteness, blackness) space, the CSS-friendly way of describing a color as a pure
//! hue with some white and some black mixed in. If whiteness and blackness add up to more than 1,
//! they are scaled down proportionally, which gives a gray.

use color::{Color, RGBColor, XYZColor};
use super::{hexcone, hue_chroma_to_rgb};

/// A color in the HWB space.
/// # Example
/// ```
/// # use colour_wheel::colors::HWBColor;
/// let pure = HWBColor{h: 120., w: 0., b: 0.};
/// assert_eq!(pure.to_rgb().to_string(), "#00FF00");
/// // too much of both is gray
/// let gray = HWBColor{h: 120., w: 0.8, b: 0.8};
/// assert_eq!(gray.to_rgb().to_string(), "#808080");
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct HWBColor {
    /// The hue in degrees, shared with HSL and HSV.
    pub h: f64,
    /// The whiteness: the smallest RGB component. Ranges from 0 to 1.
    pub w: f64,
    /// The blackness: one minus the largest RGB component. Ranges from 0 to 1.
    pub b: f64,
}

impl HWBColor {
    /// Converts to sRGB.
    pub fn to_rgb(&self) -> RGBColor {
        let (mut white, mut black) = (self.w, self.b);
        let total = white + black;
        if total > 1.0 {
            white /= total;
            black /= total;
        }
        let (r1, g1, b1) = hue_chroma_to_rgb(self.h, 1.0 - white - black);
        RGBColor {
            r: r1 + white,
            g: g1 + white,
            b: b1 + white,
        }
    }
}

impl From<RGBColor> for HWBColor {
    fn from(rgb: RGBColor) -> HWBColor {
        let hc = hexcone(&rgb);
        HWBColor {
            h: hc.hue,
            w: hc.min,
            b: 1.0 - hc.max,
        }
    }
}

impl Color for HWBColor {
    fn from_xyz(xyz: XYZColor) -> HWBColor {
        HWBColor::from(RGBColor::from_xyz(xyz))
    }
    fn to_xyz(&self) -> XYZColor {
        self.to_rgb().to_xyz()
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_hwb_round_trip() {
        let rgb = RGBColor{r: 0.2, g: 0.6, b: 0.9};
        let hwb = HWBColor::from(rgb);
        assert!((hwb.w - 0.2).abs() <= 1e-12);
        assert!((hwb.b - 0.1).abs() <= 1e-12);
        let back = hwb.to_rgb();
        assert!((back.r - 0.2).abs() <= 1e-12);
        assert!((back.g - 0.6).abs() <= 1e-12);
        assert!((back.b - 0.9).abs() <= 1e-12);
    }

    #[test]
    fn test_hwb_normalizes_overflow() {
        let over = HWBColor{h: 0., w: 1., b: 1.}.to_rgb();
        let gray = HWBColor{h: 0., w: 0.5, b: 0.5}.to_rgb();
        assert_eq!(over, gray);
    }
}
