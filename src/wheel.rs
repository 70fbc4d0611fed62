//! Laying a model out as a drawable wheel: sampling it into cells, and placing located colours on
//! it as swatches. Drawing itself is left to the caller.
//!
//! A wheel is cut into `slices` wedges and `rings` annuli. A cell is coloured by the model at the
//! angle where its slice starts and the distance where its ring ends, so the outermost ring always
//! shows the colour at the rim. Walking outwards along a slice, the cell where the colour enters or
//! leaves sRGB is flagged so the gamut boundary can be outlined.

use gamut::ModelResult;
use model::{ColourLocation, ColourModel};
use projection::no_projection;
use scaling::RadialScaling;

/// One sampled cell of a wheel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WheelCell {
    /// Which wedge, counting counter-clockwise from the +x axis.
    pub slice: usize,
    /// Which annulus, counting out from the centre.
    pub ring: usize,
    /// The angle the cell was rendered at, in turns in `[0, 1)`.
    pub angle: f64,
    /// The distance the cell was rendered at, in `(0, 1]`.
    pub distance: f64,
    /// The rendered colour.
    pub result: ModelResult,
    /// Whether this cell's gamut status differs from the cell just inside it. Never set on the
    /// innermost ring.
    pub gamut_edge: bool,
}

/// Renders every cell of a wheel, slice by slice, each slice from the centre out. Either count
/// being 0 gives an empty wheel.
/// # Example
/// ```
/// # use colour_wheel::model::get_model_from_code;
/// # use colour_wheel::scaling::RadialScaling;
/// # use colour_wheel::wheel::sample_wheel;
/// let hsv = get_model_from_code("HSV").unwrap();
/// let cells = sample_wheel(hsv, 60, 10, &RadialScaling::default());
/// assert_eq!(cells.len(), 600);
/// assert_eq!(cells[9].distance, 1.);
/// ```
pub fn sample_wheel(
    model: &ColourModel,
    slices: usize,
    rings: usize,
    scaling: &RadialScaling,
) -> Vec<WheelCell> {
    let mut cells = Vec::with_capacity(slices * rings);
    for slice in 0..slices {
        let angle = slice as f64 / slices as f64;
        let mut previous_in_gamut: Option<bool> = None;
        for ring in 0..rings {
            let distance = (ring + 1) as f64 / rings as f64;
            let result = model.generate_rgb(angle, distance, scaling);
            let gamut_edge = previous_in_gamut.map_or(false, |prev| prev != result.in_gamut);
            previous_in_gamut = Some(result.in_gamut);
            cells.push(WheelCell {
                slice,
                ring,
                angle,
                distance,
                result,
                gamut_edge,
            });
        }
    }
    trace!(
        model = model.code,
        slices,
        rings,
        edges = cells.iter().filter(|cell| cell.gamut_edge).count(),
        "sampled wheel"
    );
    cells
}

/// Where a located colour is relative to the wheel.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WheelSide {
    /// Closer in than the centre allows: the distance is negative.
    Inside,
    /// On the wheel.
    OnWheel,
    /// Further out than the rim: the distance is above 1.
    Outside,
}

/// Where to draw a swatch for a located colour.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwatchPlacement {
    /// Horizontal position, -1 at the left edge of the wheel to 1 at the right.
    pub x: f64,
    /// Vertical position, -1 at the bottom to 1 at the top.
    pub y: f64,
    /// The distance the swatch is drawn at, which is the located distance clamped into `[0, 1]`.
    pub clamped_distance: f64,
    /// Whether the colour was really on the wheel.
    pub side: WheelSide,
}

impl SwatchPlacement {
    /// The position as percentages of a square box around the wheel, from its top left corner:
    /// `(left, top)`. Screen y runs downwards, so it is flipped.
    pub fn box_percentages(&self) -> (f64, f64) {
        (self.x * 50.0 + 50.0, 50.0 - self.y * 50.0)
    }
}

/// Places a located colour on the wheel. Colours off the wheel are pinned to its centre or rim,
/// and say which way they fell off.
/// # Example
/// ```
/// # use colour_wheel::coord::Coord;
/// # use colour_wheel::model::ColourLocation;
/// # use colour_wheel::wheel::{place_swatch, WheelSide};
/// let location = ColourLocation{angle: 0., distance: 1.4, in_model: Coord{x: 0., y: 0., z: 0.},
///                               a_delta: 0., b_delta: 0.};
/// let placement = place_swatch(&location);
/// assert_eq!(placement.side, WheelSide::Outside);
/// assert_eq!((placement.x, placement.y), (1., 0.));
/// ```
pub fn place_swatch(location: &ColourLocation) -> SwatchPlacement {
    let clamped_distance = location.distance.max(0.0).min(1.0);
    let side = if location.distance < 0.0 {
        WheelSide::Inside
    } else if location.distance > 1.0 {
        WheelSide::Outside
    } else {
        WheelSide::OnWheel
    };
    if side != WheelSide::OnWheel {
        debug!(distance = location.distance, "swatch pinned to the wheel");
    }
    let (x, y) = no_projection(location.angle);
    SwatchPlacement {
        x: x * clamped_distance,
        y: y * clamped_distance,
        clamped_distance,
        side,
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;
    use coord::Coord;
    use model::get_model_from_code;
    use scaling::get_model_defaults;

    fn location_at(angle: f64, distance: f64) -> ColourLocation {
        ColourLocation {
            angle,
            distance,
            in_model: Coord{x: 0., y: 0., z: 0.},
            a_delta: 0.,
            b_delta: 0.,
        }
    }

    #[test]
    fn test_grid_shape() {
        let hsl = get_model_from_code("HSL").unwrap();
        let cells = sample_wheel(hsl, 12, 4, &get_model_defaults(hsl));
        assert_eq!(cells.len(), 48);
        assert_eq!((cells[0].slice, cells[0].ring), (0, 0));
        assert_eq!((cells[5].slice, cells[5].ring), (1, 1));
        assert_eq!(cells[5].angle, 1. / 12.);
        assert_eq!(cells[5].distance, 0.5);
        for cell in cells.iter() {
            assert!(cell.angle >= 0. && cell.angle < 1.);
            assert!(cell.distance > 0. && cell.distance <= 1.);
            // HSL never leaves sRGB
            assert!(cell.result.in_gamut && !cell.gamut_edge);
        }
    }

    #[test]
    fn test_empty_wheel() {
        let jch = get_model_from_code("JCh").unwrap();
        assert!(sample_wheel(jch, 0, 10, &RadialScaling::default()).is_empty());
        assert!(sample_wheel(jch, 10, 0, &RadialScaling::default()).is_empty());
    }

    #[test]
    fn test_gamut_edges() {
        let jch = get_model_from_code("JCh").unwrap();
        let cells = sample_wheel(jch, 24, 10, &get_model_defaults(jch));
        for slice in cells.chunks(10) {
            assert!(!slice[0].gamut_edge);
            for pair in slice.windows(2) {
                assert_eq!(pair[1].gamut_edge, pair[0].result.in_gamut != pair[1].result.in_gamut);
            }
            // the rim at full lightness and chroma is never displayable
            assert!(!slice[9].result.in_gamut);
        }
    }

    #[test]
    fn test_swatch_sides() {
        assert_eq!(place_swatch(&location_at(0.3, -0.2)).side, WheelSide::Inside);
        assert_eq!(place_swatch(&location_at(0.3, 0.)).side, WheelSide::OnWheel);
        assert_eq!(place_swatch(&location_at(0.3, 1.)).side, WheelSide::OnWheel);
        assert_eq!(place_swatch(&location_at(0.3, 1.01)).side, WheelSide::Outside);
        let inside = place_swatch(&location_at(0.3, -0.2));
        assert_eq!(inside.clamped_distance, 0.);
        assert_eq!(inside.x.abs() + inside.y.abs(), 0.);
    }

    #[test]
    fn test_swatch_position() {
        let placement = place_swatch(&location_at(0.25, 0.5));
        assert!(placement.x.abs() <= 1e-12);
        assert!((placement.y - 0.5).abs() <= 1e-12);
        let (left, top) = placement.box_percentages();
        assert!((left - 50.).abs() <= 1e-9);
        assert!((top - 25.).abs() <= 1e-9);
        let (left, top) = place_swatch(&location_at(0.5, 3.)).box_percentages();
        assert!(left.abs() <= 1e-9 && (top - 50.).abs() <= 1e-9);
    }

    #[test]
    fn test_located_colour_lands_in_its_cell() {
        let hsv = get_model_from_code("HSV").unwrap();
        let scaling = get_model_defaults(hsv);
        let cells = sample_wheel(hsv, 12, 4, &scaling);
        // a cell's own colour locates back to where the cell was rendered
        let cell = &cells[4 * 7 + 3];
        let location = hsv.locate_srgb_hex(&cell.result.srgb, &scaling).unwrap();
        assert!((location.angle - cell.angle).abs() < 0.01);
        assert!((location.distance - cell.distance).abs() < 0.01);
        assert_eq!(place_swatch(&location).side, WheelSide::OnWheel);
    }
}
