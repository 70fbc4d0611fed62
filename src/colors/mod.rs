//! This module contains the colour spaces a wheel model can be bound to, one per submodule. Each
//! type implements [`Color`]. For convenience, each main type is imported into this module's
//! namespace directly.
//!
//! The RGB-derived spaces (HSL, HSV, HCG, HWB) are all reshapings of the same hexagonal cone, so the
//! hexagon math they share lives here.
//!
//! [`Color`]: ../color/trait.Color.html
pub mod ciecam02color;
pub mod ciehclcolor;
pub mod cielabcolor;
pub mod hcgcolor;
pub mod hslcolor;
pub mod hsvcolor;
pub mod hwbcolor;

// for convenience, use this namespace for the color objects
pub use self::ciecam02color::CIECAM02Color;
pub use self::ciehclcolor::CIEHCLColor;
pub use self::cielabcolor::CIELABColor;
pub use self::hcgcolor::HCGColor;
pub use self::hslcolor::HSLColor;
pub use self::hsvcolor::HSVColor;
pub use self::hwbcolor::HWBColor;

use color::RGBColor;

/// The attributes of an RGB color once the cube is tilted onto its gray axis and projected into a
/// hexagon: the hue around the hexagon, and the largest and smallest components. Chroma, the
/// hexagonal stand-in for radius, is the difference of the two.
#[derive(Debug, Copy, Clone)]
pub(crate) struct Hexcone {
    pub hue: f64,
    pub max: f64,
    pub min: f64,
}

impl Hexcone {
    pub fn chroma(&self) -> f64 {
        self.max - self.min
    }
}

pub(crate) fn hexcone(rgb: &RGBColor) -> Hexcone {
    let components = [rgb.r, rgb.g, rgb.b];
    let max_c = components.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let min_c = components.iter().cloned().fold(f64::INFINITY, f64::min);
    let chroma = max_c - min_c;

    // hue is the proportion of the way around the hexagon, treated as degrees
    let hue = if chroma == 0.0 {
        // undefined for gray: use 0
        0.0
    } else if max_c == rgb.r {
        (((rgb.g - rgb.b) / chroma).rem_euclid(6.0)) * 60.0
    } else if max_c == rgb.g {
        ((rgb.b - rgb.r) / chroma) * 60.0 + 120.0
    } else {
        ((rgb.r - rgb.g) / chroma) * 60.0 + 240.0
    };

    Hexcone {
        hue,
        max: max_c,
        min: min_c,
    }
}

/// The inverse of the hexagonal hue: the RGB color with the given hue and chroma whose smallest
/// component is 0. Each space then lifts it off the floor by its own offset.
pub(crate) fn hue_chroma_to_rgb(hue: f64, chroma: f64) -> (f64, f64, f64) {
    let h = hue.rem_euclid(360.0);
    // the second-largest component
    let x = chroma * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    if h < 60.0 {
        (chroma, x, 0.0)
    } else if h < 120.0 {
        (x, chroma, 0.0)
    } else if h < 180.0 {
        (0.0, chroma, x)
    } else if h < 240.0 {
        (0.0, x, chroma)
    } else if h < 300.0 {
        (x, 0.0, chroma)
    } else {
        (chroma, 0.0, x)
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_hexcone_primaries() {
        let red = hexcone(&RGBColor{r: 1., g: 0., b: 0.});
        assert!(red.hue.abs() <= 1e-10);
        let magenta_ish = hexcone(&RGBColor{r: 1., g: 0., b: 0.2});
        assert!((magenta_ish.hue - 348.).abs() <= 1e-10);
        let blue = hexcone(&RGBColor{r: 0., g: 0., b: 1.});
        assert!((blue.hue - 240.).abs() <= 1e-10);
        assert_eq!(blue.chroma(), 1.);
    }

    #[test]
    fn test_hue_chroma_inverse() {
        for &hue in &[0., 30., 90., 150., 210., 270., 330., 359.] {
            let (r, g, b) = hue_chroma_to_rgb(hue, 0.8);
            let hc = hexcone(&RGBColor{r, g, b});
            assert!((hc.hue - hue).abs() <= 1e-9, "hue {} came back as {}", hue, hc.hue);
            assert!((hc.chroma() - 0.8).abs() <= 1e-12);
        }
        // hue wraps
        assert_eq!(hue_chroma_to_rgb(-60., 1.), hue_chroma_to_rgb(300., 1.));
    }
}
