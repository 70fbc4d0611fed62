//! This file implements what I refer to as HSL but which would precisely be called sHSL: a simple
//! transformation of sRGB that creates a cylindrical space. HSL has the same problems with
//! perceptual uniformity as sRGB does, but it does have the advantage of being easy to display on a
//! monitor and having some conception of common color attributes. *Lightness* in HSL runs from
//! black to fully saturated in the middle to white at the end, which makes the saturation component
//! extremely inaccurate: light colors can have a very high saturation even if they are extremely
//! close to white.
//!
//! This implementation is hexagonal: values are put on a hexagon, and then that hexagon is
//! "squeezed" into a circle. Converting gray gives a hue of 0 degrees, although any hue could be
//! used in its place.

use color::{Color, RGBColor, XYZColor};
use super::{hexcone, hue_chroma_to_rgb};

/// A color in the HSL color space, a direct transformation of the sRGB space.
/// # Example
/// ```
/// # use colour_wheel::colors::HSLColor;
/// let indigo = HSLColor{h: 245., s: 0.5, l: 0.5};
/// assert_eq!(indigo.to_rgb().to_string(), "#4A40BF");
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct HSLColor {
    /// The hue component, in degrees from 0 to 360. Exactly the same as the hue component of HSV.
    pub h: f64,
    /// The saturation component. Ranges between 0 and 1.
    pub s: f64,
    /// The lightness component. Ranges from 0 to 1, defined as the average of the largest and
    /// smallest color components in RGB.
    pub l: f64,
}

impl HSLColor {
    /// Converts to sRGB. Inputs outside their nominal ranges are not rejected; the result simply
    /// falls outside `[0, 1]`.
    pub fn to_rgb(&self) -> RGBColor {
        let chroma = (1.0 - (2.0 * self.l - 1.0).abs()) * self.s;
        let (r1, g1, b1) = hue_chroma_to_rgb(self.h, chroma);
        // lift off the floor to get the right lightness
        let offset = self.l - chroma / 2.0;
        RGBColor {
            r: r1 + offset,
            g: g1 + offset,
            b: b1 + offset,
        }
    }
}

impl From<RGBColor> for HSLColor {
    fn from(rgb: RGBColor) -> HSLColor {
        let hc = hexcone(&rgb);
        // lightness first, because saturation is chroma relative to the widest the double cone
        // gets at that lightness
        let lightness = (hc.max + hc.min) / 2.0;
        let saturation = if lightness == 1.0 || lightness == 0.0 {
            0.0
        } else {
            hc.chroma() / (1.0 - (2.0 * lightness - 1.0).abs())
        };
        HSLColor {
            h: hc.hue,
            s: saturation,
            l: lightness,
        }
    }
}

impl Color for HSLColor {
    /// Converts from XYZ to HSL through RGB.
    fn from_xyz(xyz: XYZColor) -> HSLColor {
        HSLColor::from(RGBColor::from_xyz(xyz))
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
    fn test_hsl_rgb_conversion() {
        let red_hsl = HSLColor::from(RGBColor{r: 1., g: 0., b: 0.});
        assert!(red_hsl.h.abs() <= 0.0001);
        assert!((red_hsl.s - 1.0).abs() <= 0.0001);
        assert!((red_hsl.l - 0.5).abs() <= 0.0001);
        let indigo_hsl = HSLColor{h: 245.0, s: 0.5, l: 0.5};
        assert_eq!(indigo_hsl.to_rgb().to_string(), "#4A40BF");
    }

    #[test]
    fn test_hsl_round_trip() {
        let hsl = HSLColor{h: 90., s: 0.5, l: 0.5};
        let back = HSLColor::from(hsl.to_rgb());
        assert!((back.h - 90.).abs() <= 1e-9);
        assert!((back.s - 0.5).abs() <= 1e-9);
        assert!((back.l - 0.5).abs() <= 1e-9);
    }

    #[test]
    fn test_gray_has_no_saturation() {
        let gray = HSLColor::from(RGBColor{r: 0.4, g: 0.4, b: 0.4});
        assert_eq!(gray.h, 0.);
        assert_eq!(gray.s, 0.);
        let white = HSLColor::from(RGBColor{r: 1., g: 1., b: 1.});
        assert_eq!(white.s, 0.);
    }
}
