//! This file defines the [`Color`] trait and the two colour types everything else converts through:
//! [`XYZColor`], the CIE 1931 hub every colour space knows how to reach, and [`RGBColor`], the sRGB
//! space a wheel is finally rendered in.
//!
//! Unlike most RGB types, [`RGBColor`] does not clamp. A perceptual colour that has no sRGB
//! equivalent converts to components below 0 or above 1, and that overshoot is exactly what gamut
//! detection needs to see.

use std::error::Error;
use std::fmt;

use regex::Regex;

use consts::{transform, D65_WHITE, SRGB_TO_XYZ, XYZ_TO_SRGB};
use coord::Coord;
use gamut::rgb_to_clamped_hex;

/// A point in the CIE 1931 XYZ color space, relative to the D65 white point with Y of white equal
/// to 1.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct XYZColor {
    /// The X axis, a mix of the cone response curves chosen to be nonnegative.
    pub x: f64,
    /// The Y axis, the luminance.
    pub y: f64,
    /// The Z axis, roughly the response of the short-wavelength cones.
    pub z: f64,
}

impl XYZColor {
    /// The D65 reference white.
    pub fn white_point() -> XYZColor {
        XYZColor {
            x: D65_WHITE[0],
            y: D65_WHITE[1],
            z: D65_WHITE[2],
        }
    }
}

/// A trait that includes any color representation that can be converted to and from the CIE 1931 XYZ
/// color space.
pub trait Color: Sized {
    /// Converts from a color in CIE 1931 XYZ to the given color type.
    fn from_xyz(xyz: XYZColor) -> Self;
    /// Converts from the given color type to a color in CIE 1931 XYZ space.
    fn to_xyz(&self) -> XYZColor;
    /// Converts between any two color types by way of XYZ.
    /// # Example
    /// ```
    /// # use colour_wheel::color::{Color, RGBColor};
    /// # use colour_wheel::colors::CIELABColor;
    /// let white = RGBColor{r: 1., g: 1., b: 1.};
    /// let lab: CIELABColor = white.convert();
    /// assert!((lab.l - 100.).abs() <= 1e-3);
    /// ```
    fn convert<T: Color>(&self) -> T {
        T::from_xyz(self.to_xyz())
    }
}

impl Color for XYZColor {
    fn from_xyz(xyz: XYZColor) -> XYZColor {
        xyz
    }
    fn to_xyz(&self) -> XYZColor {
        *self
    }
}

/// An error in parsing a hex colour code.
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq)]
pub enum RGBParseError {
    /// The string was not of the form `#rgb` or `#rrggbb`.
    InvalidHexSyntax,
}

impl fmt::Display for RGBParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            RGBParseError::InvalidHexSyntax => write!(f, "Invalid hex code syntax"),
        }
    }
}

impl Error for RGBParseError {}

lazy_static! {
    static ref HEX_CODE: Regex = Regex::new(r"^#([0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").unwrap();
}

/// A color in the sRGB space, with each gamma-encoded component nominally between 0 and 1. Values
/// outside that range are kept, not clamped: they mean the color is out of the sRGB gamut.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct RGBColor {
    /// The red component.
    pub r: f64,
    /// The green component.
    pub g: f64,
    /// The blue component.
    pub b: f64,
}

// sRGB's piecewise transfer function. Mirrored through zero so that out-of-gamut components keep
// their sign and magnitude.
fn srgb_encode(linear: f64) -> f64 {
    let mag = linear.abs();
    let encoded = if mag <= 0.0031308 {
        12.92 * mag
    } else {
        1.055 * mag.powf(1.0 / 2.4) - 0.055
    };
    encoded.copysign(linear)
}

fn srgb_decode(encoded: f64) -> f64 {
    let mag = encoded.abs();
    let linear = if mag <= 0.04045 {
        mag / 12.92
    } else {
        ((mag + 0.055) / 1.055).powf(2.4)
    };
    linear.copysign(encoded)
}

impl Color for RGBColor {
    fn from_xyz(xyz: XYZColor) -> RGBColor {
        let [r, g, b] = transform(&XYZ_TO_SRGB, [xyz.x, xyz.y, xyz.z]);
        RGBColor {
            r: srgb_encode(r),
            g: srgb_encode(g),
            b: srgb_encode(b),
        }
    }
    fn to_xyz(&self) -> XYZColor {
        let linear = [srgb_decode(self.r), srgb_decode(self.g), srgb_decode(self.b)];
        let [x, y, z] = transform(&SRGB_TO_XYZ, linear);
        XYZColor { x, y, z }
    }
}

impl RGBColor {
    /// Parses a hex code of the form `#rrggbb` or the shorthand `#rgb`, case-insensitively.
    /// # Errors
    /// Returns [`RGBParseError::InvalidHexSyntax`] for anything else.
    /// # Example
    /// ```
    /// # use colour_wheel::color::RGBColor;
    /// let teal = RGBColor::from_hex_code("#008080").unwrap();
    /// assert_eq!(teal.to_string(), "#008080");
    /// assert!(RGBColor::from_hex_code("008080").is_err());
    /// ```
    pub fn from_hex_code(hex: &str) -> Result<RGBColor, RGBParseError> {
        let caps = HEX_CODE.captures(hex).ok_or(RGBParseError::InvalidHexSyntax)?;
        let digits = &caps[1];
        // shorthand doubles every digit: #abc is #aabbcc
        let full: String = if digits.len() == 3 {
            digits.chars().flat_map(|c| vec![c, c]).collect()
        } else {
            digits.to_string()
        };
        let channel = |i: usize| {
            u8::from_str_radix(&full[i..i + 2], 16)
                .map(|v| f64::from(v) / 255.)
                .map_err(|_| RGBParseError::InvalidHexSyntax)
        };
        Ok(RGBColor {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
        })
    }

    /// Returns the components scaled to 0-255 as a [`Coord`], without clamping or rounding.
    pub fn to_coord_255(&self) -> Coord {
        Coord {
            x: self.r,
            y: self.g,
            z: self.b,
        } * 255u8
    }

    /// Returns a copy with every component clamped between 0 and 1.
    pub fn clamped(&self) -> RGBColor {
        let c = Coord {
            x: self.r,
            y: self.g,
            z: self.b,
        }.clamp_each(0., 1.);
        RGBColor {
            r: c.x,
            g: c.y,
            b: c.z,
        }
    }
}

/// Formats as an upper-case `#RRGGBB` hex code, clamping out-of-gamut components first.
impl fmt::Display for RGBColor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", rgb_to_clamped_hex(self.to_coord_255()))
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_hex_parsing() {
        let rgb = RGBColor::from_hex_code("#11457c").unwrap();
        assert_eq!(rgb.to_string(), "#11457C");
        let short = RGBColor::from_hex_code("#F0a").unwrap();
        assert_eq!(short.to_string(), "#FF00AA");
        assert_eq!(RGBColor::from_hex_code("#12345"), Err(RGBParseError::InvalidHexSyntax));
        assert_eq!(RGBColor::from_hex_code("#gggggg"), Err(RGBParseError::InvalidHexSyntax));
        assert_eq!(RGBColor::from_hex_code("rgb(1, 2, 3)"), Err(RGBParseError::InvalidHexSyntax));
    }

    #[test]
    fn test_rgb_xyz_conversion() {
        let white = RGBColor{r: 1., g: 1., b: 1.}.to_xyz();
        assert!((white.x - 0.95047).abs() <= 1e-4);
        assert!((white.y - 1.).abs() <= 1e-4);
        assert!((white.z - 1.08883).abs() <= 1e-4);
        let color = RGBColor{r: 0.3, g: 0.6, b: 0.9};
        let back = RGBColor::from_xyz(color.to_xyz());
        assert!((back.r - 0.3).abs() <= 1e-10);
        assert!((back.g - 0.6).abs() <= 1e-10);
        assert!((back.b - 0.9).abs() <= 1e-10);
    }

    #[test]
    fn test_out_of_gamut_is_kept() {
        // a very saturated cyan that sRGB cannot show: red goes negative
        let xyz = XYZColor{x: 0.15, y: 0.4, z: 0.6};
        let rgb = RGBColor::from_xyz(xyz);
        assert!(rgb.r < 0.);
        let clamped = rgb.clamped();
        assert_eq!(clamped.r, 0.);
        assert!(clamped.g <= 1. && clamped.b <= 1.);
    }
}
