//! Gamut detection and hex rendering. Every model whose forward transform can leave the sRGB cube
//! goes through [`rgb_to_result`], so there is exactly one policy for what "out of gamut" means:
//! any channel below 0 or above 255 before rounding.

use coord::Coord;

/// The output of a colour model's forward transform.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModelResult {
    /// Whether the colour could be shown exactly in sRGB. When `false`, `srgb` is the nearest colour
    /// after clamping each channel, which is only an approximation.
    pub in_gamut: bool,
    /// The colour as a `#RRGGBB` hex code.
    pub srgb: String,
}

/// Formats a raw RGB triple (channels nominally 0-255, in `x`, `y`, `z` order) as an upper-case
/// `#RRGGBB` hex code. Each channel is clamped into `[0, 255]` independently, then rounded.
/// # Example
/// ```
/// # use colour_wheel::coord::Coord;
/// # use colour_wheel::gamut::rgb_to_clamped_hex;
/// assert_eq!(rgb_to_clamped_hex(Coord{x: 255.2, y: 127.6, z: -3.}), "#FF8000");
/// ```
pub fn rgb_to_clamped_hex(rgb: Coord) -> String {
    let clamped = rgb.clamp_each(0., 255.);
    format!(
        "#{:02X}{:02X}{:02X}",
        clamped.x.round() as u8,
        clamped.y.round() as u8,
        clamped.z.round() as u8
    )
}

/// Builds a [`ModelResult`] from a raw RGB triple in 0-255, flagging it out of gamut if any channel
/// falls outside that range.
pub fn rgb_to_result(rgb: Coord) -> ModelResult {
    ModelResult {
        in_gamut: !rgb.any_outside(0., 255.),
        srgb: rgb_to_clamped_hex(rgb),
    }
}

/// A result for spaces that are gamut-complete by construction (HSL, HSV, HCG and HWB are all just
/// reshapings of the sRGB cube), so they are always reported as in gamut.
pub(crate) fn gamut_complete_result(rgb: Coord) -> ModelResult {
    ModelResult {
        in_gamut: true,
        srgb: rgb_to_clamped_hex(rgb),
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_out_of_gamut_clamps() {
        let result = rgb_to_result(Coord{x: -10., y: 128., z: 300.});
        assert!(!result.in_gamut);
        assert!(result.srgb.eq_ignore_ascii_case("#0080ff"));
    }

    #[test]
    fn test_in_gamut_edges() {
        let result = rgb_to_result(Coord{x: 0., y: 255., z: 17.});
        assert!(result.in_gamut);
        assert_eq!(result.srgb, "#00FF11");
        // the tiniest overshoot still counts
        assert!(!rgb_to_result(Coord{x: 255.0001, y: 0., z: 0.}).in_gamut);
    }

    #[test]
    fn test_gamut_complete_ignores_overshoot() {
        let result = gamut_complete_result(Coord{x: 300., y: 0., z: 0.});
        assert!(result.in_gamut);
        assert_eq!(result.srgb, "#FF0000");
    }
}
