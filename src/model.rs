//! The catalog of colour models a wheel can be drawn in.
//!
//! Every model maps a wheel position, an angle in turns and a distance from the centre, to a colour,
//! and maps a colour back to a wheel position. They come in two kinds:
//!
//! - *Polar* models are bound to a colour space that already has a hue: the angle is the hue, and
//!   the distance is scaled into the space's other two coordinates (A and B) with a
//!   [`RadialScaling`]. The RGB-derived spaces (HSL, HSV, HCG and HWB) put yellow at a different
//!   hue than the perceptual ones, so their hue is rotated by [`HEXCONE_HUE_OFFSET`] to line all the
//!   wheels up.
//! - *Cartesian* models are bound to a lightness plus an opponent-colour plane, like CIELAB's
//!   a\*/b\*. A is the lightness; the angle is projected onto the plane with a [`Projection`], and
//!   B is how far out along that direction the colour is.
//!
//! Some spaces naturally reach further than 100 on an axis, so polar models can multiply A or B by
//! a fixed factor, and cartesian models the extent. Native coordinates ([`ColourLocation::in_model`])
//! are always unscaled, and so are gradient stops and positions. Only distances are in axis units,
//! which are native values divided by the factor.
//!
//! Models are looked up by their short code with [`get_model_from_code`].

use color::{Color, RGBColor, RGBParseError};
use colors::{CIECAM02Color, CIEHCLColor, CIELABColor, HCGColor, HSLColor, HSVColor, HWBColor};
use coord::Coord;
use gamut::{gamut_complete_result, rgb_to_result, ModelResult};
use gradient::ColourOnGradient;
use projection::Projection;
use scaling::{scale_ab, unscale_ab, AbTarget, RadialScaling, ScaleOverrides};

/// How far the hues of the RGB-derived spaces are rotated, in degrees, so that yellow sits at the
/// same wheel angle as it does in the perceptual models.
pub const HEXCONE_HUE_OFFSET: f64 = 330.0;

/// The code of the model to fall back on when none is chosen.
pub const DEFAULT_MODEL_CODE: &str = "JCh";

/// A colour space with an explicit hue.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
enum PolarSpace {
    Hsl,
    Hsv,
    Hcg,
    Hwb,
    Jch,
    Hcl,
}

/// A colour space with a lightness and an opponent-colour plane.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
enum CartesianSpace {
    Lab,
    Jab,
}

#[derive(Debug, Copy, Clone, PartialEq)]
enum ModelKind {
    Polar {
        space: PolarSpace,
        hue_offset: f64,
        a_scale: f64,
        b_scale: f64,
    },
    Cartesian {
        space: CartesianSpace,
        projection: Projection,
        extent_scale: f64,
    },
}

fn perceptual_result<T: Color>(colour: &T) -> ModelResult {
    rgb_to_result(RGBColor::from_xyz(colour.to_xyz()).to_coord_255())
}

fn angle_to_hue(angle: f64, offset: f64) -> f64 {
    (angle * 360.0 + offset).rem_euclid(360.0)
}

fn hue_to_angle(hue: f64, offset: f64) -> f64 {
    let angle = (hue - offset).rem_euclid(360.0) / 360.0;
    // rem_euclid rounds a tiny negative up to a whole turn
    if angle >= 1.0 {
        0.0
    } else {
        angle
    }
}

impl PolarSpace {
    /// Renders a colour from its hue in degrees and its two other native coordinates. The
    /// RGB-derived spaces take theirs in percent.
    fn render(self, hue: f64, a: f64, b: f64) -> ModelResult {
        match self {
            PolarSpace::Hsl => gamut_complete_result(
                HSLColor{h: hue, s: a / 100.0, l: b / 100.0}.to_rgb().to_coord_255(),
            ),
            PolarSpace::Hsv => gamut_complete_result(
                HSVColor{h: hue, s: a / 100.0, v: b / 100.0}.to_rgb().to_coord_255(),
            ),
            PolarSpace::Hcg => gamut_complete_result(
                HCGColor{h: hue, c: a / 100.0, g: b / 100.0}.to_rgb().to_coord_255(),
            ),
            PolarSpace::Hwb => gamut_complete_result(
                HWBColor{h: hue, w: a / 100.0, b: b / 100.0}.to_rgb().to_coord_255(),
            ),
            PolarSpace::Jch => perceptual_result(&CIECAM02Color{j: a, c: b, h: hue}),
            PolarSpace::Hcl => perceptual_result(&CIEHCLColor{h: hue, c: a, l: b}),
        }
    }

    /// Hue, A and B of a CIELAB colour. The RGB-derived spaces can only describe colours inside
    /// sRGB, so the colour is clamped into it first.
    fn from_lab(self, lab: CIELABColor) -> (f64, f64, f64) {
        let rgb = || RGBColor::from_xyz(lab.to_xyz()).clamped();
        match self {
            PolarSpace::Hsl => {
                let hsl = HSLColor::from(rgb());
                (hsl.h, hsl.s * 100.0, hsl.l * 100.0)
            }
            PolarSpace::Hsv => {
                let hsv = HSVColor::from(rgb());
                (hsv.h, hsv.s * 100.0, hsv.v * 100.0)
            }
            PolarSpace::Hcg => {
                let hcg = HCGColor::from(rgb());
                (hcg.h, hcg.c * 100.0, hcg.g * 100.0)
            }
            PolarSpace::Hwb => {
                let hwb = HWBColor::from(rgb());
                (hwb.h, hwb.w * 100.0, hwb.b * 100.0)
            }
            PolarSpace::Jch => {
                let cam = CIECAM02Color::from_xyz(lab.to_xyz());
                (cam.h, cam.j, cam.c)
            }
            PolarSpace::Hcl => {
                let hcl = CIEHCLColor::from(lab);
                (hcl.h, hcl.c, hcl.l)
            }
        }
    }

    /// Lays hue, A and B out in the space's own coordinate order.
    fn to_native(self, hue: f64, a: f64, b: f64) -> Coord {
        match self {
            PolarSpace::Jch => Coord{x: a, y: b, z: hue},
            _ => Coord{x: hue, y: a, z: b},
        }
    }

    fn from_native(self, native: Coord) -> (f64, f64, f64) {
        match self {
            PolarSpace::Jch => (native.z, native.x, native.y),
            _ => (native.x, native.y, native.z),
        }
    }
}

impl CartesianSpace {
    fn render(self, lightness: f64, x: f64, y: f64) -> ModelResult {
        match self {
            CartesianSpace::Lab => perceptual_result(&CIELABColor{l: lightness, a: x, b: y}),
            CartesianSpace::Jab => perceptual_result(&CIECAM02Color::from_jab(lightness, x, y)),
        }
    }

    /// Lightness and the point on the opponent plane, as `(lightness, x, y)`.
    fn from_lab(self, lab: CIELABColor) -> Coord {
        match self {
            CartesianSpace::Lab => Coord{x: lab.l, y: lab.a, z: lab.b},
            CartesianSpace::Jab => {
                let cam = CIECAM02Color::from_xyz(lab.to_xyz());
                let (a, b) = cam.ab();
                Coord{x: cam.j, y: a, z: b}
            }
        }
    }
}

/// Where a colour lands on a model's wheel.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColourLocation {
    /// The wheel angle, in turns in `[0, 1)`.
    pub angle: f64,
    /// The distance from the centre. Values below 0 or above 1 mean the colour can't be reached
    /// with the scaling that was used.
    pub distance: f64,
    /// The colour's native coordinates in the model's colour space, in that space's own order.
    pub in_model: Coord,
    /// How far A is from what `distance` reaches, in native units.
    pub a_delta: f64,
    /// How far B is from what `distance` reaches, in native units.
    pub b_delta: f64,
}

/// A colour model: a way of laying a colour space out on a wheel.
#[derive(Debug)]
pub struct ColourModel {
    /// The unique short code the model is looked up by.
    pub code: &'static str,
    /// A human-readable name.
    pub name: &'static str,
    /// A longer description for tooltips and the like.
    pub description: &'static str,
    /// What the A parameter is.
    pub a_label: &'static str,
    /// What the B parameter is.
    pub b_label: &'static str,
    /// Bounds this model sets over the global default scaling.
    pub scale_defaults: ScaleOverrides,
    kind: ModelKind,
}

impl ColourModel {
    /// Renders the colour at a wheel position.
    /// # Example
    /// ```
    /// # use colour_wheel::model::get_model_from_code;
    /// # use colour_wheel::scaling::RadialScaling;
    /// let hsv = get_model_from_code("HSV").unwrap();
    /// let centre = hsv.generate_rgb(0.3, 0., &RadialScaling::default());
    /// assert!(centre.in_gamut);
    /// assert_eq!(centre.srgb, "#000000");
    /// ```
    pub fn generate_rgb(&self, angle: f64, distance: f64, scaling: &RadialScaling) -> ModelResult {
        let ab = scale_ab(distance, scaling);
        match self.kind {
            ModelKind::Polar{space, hue_offset, a_scale, b_scale} => {
                space.render(angle_to_hue(angle, hue_offset), ab.a * a_scale, ab.b * b_scale)
            }
            ModelKind::Cartesian{space, projection, extent_scale} => {
                let (x, y) = projection.project(angle);
                let extent = ab.b * extent_scale;
                space.render(ab.a, x * extent, y * extent)
            }
        }
    }

    /// Finds where a CIELAB colour sits on the wheel.
    pub fn locate_lab(&self, lab: CIELABColor, scaling: &RadialScaling) -> ColourLocation {
        let location = match self.kind {
            ModelKind::Polar{space, hue_offset, a_scale, b_scale} => {
                let (hue, a, b) = space.from_lab(lab);
                let target = AbTarget {
                    a: Some(a / a_scale),
                    b: Some(b / b_scale),
                };
                let unscaled = unscale_ab(target, scaling);
                ColourLocation {
                    angle: hue_to_angle(hue, hue_offset),
                    distance: unscaled.distance,
                    in_model: space.to_native(hue, a, b),
                    a_delta: unscaled.a_delta * a_scale,
                    b_delta: unscaled.b_delta * b_scale,
                }
            }
            ModelKind::Cartesian{space, projection, extent_scale} => {
                let native = space.from_lab(lab);
                let target = AbTarget {
                    a: Some(native.x),
                    b: Some(projection.radius(native.y, native.z) / extent_scale),
                };
                let unscaled = unscale_ab(target, scaling);
                ColourLocation {
                    angle: projection.unproject(native.y, native.z),
                    distance: unscaled.distance,
                    in_model: native,
                    a_delta: unscaled.a_delta,
                    b_delta: unscaled.b_delta * extent_scale,
                }
            }
        };
        trace!(
            model = self.code,
            angle = location.angle,
            distance = location.distance,
            "located colour"
        );
        if location.distance < 0.0 || location.distance > 1.0 {
            debug!(
                model = self.code,
                distance = location.distance,
                "colour falls outside the wheel at this scaling"
            );
        }
        location
    }

    /// Finds where an sRGB hex code sits on the wheel.
    /// # Errors
    /// Fails if `hex` isn't a valid hex code.
    /// # Example
    /// ```
    /// # use colour_wheel::model::get_model_from_code;
    /// # use colour_wheel::scaling::RadialScaling;
    /// let hsl = get_model_from_code("HSL").unwrap();
    /// let gray = hsl.locate_srgb_hex("#808080", &RadialScaling::default()).unwrap();
    /// assert!((gray.in_model.y).abs() < 1e-6);
    /// assert!(hsl.locate_srgb_hex("gray", &RadialScaling::default()).is_err());
    /// ```
    pub fn locate_srgb_hex(
        &self,
        hex: &str,
        scaling: &RadialScaling,
    ) -> Result<ColourLocation, RGBParseError> {
        let rgb = RGBColor::from_hex_code(hex)?;
        Ok(self.locate_lab(CIELABColor::from_xyz(rgb.to_xyz()), scaling))
    }

    /// The gradient along A through a colour with the given native coordinates, holding everything
    /// else fixed. Stops and position are native values, so a scaled axis can run past 100.
    pub fn a_gradient(&self, in_model: Coord) -> ColourOnGradient {
        match self.kind {
            ModelKind::Polar{space, ..} => {
                let (hue, a, b) = space.from_native(in_model);
                ColourOnGradient::new(move |p| space.render(hue, p, b).srgb, a)
            }
            ModelKind::Cartesian{space, ..} => {
                let (x, y) = (in_model.y, in_model.z);
                ColourOnGradient::new(move |p| space.render(p, x, y).srgb, in_model.x)
            }
        }
    }

    /// The gradient along B through a colour with the given native coordinates. For cartesian
    /// models this moves the colour in or out along its direction on the opponent plane.
    pub fn b_gradient(&self, in_model: Coord) -> ColourOnGradient {
        match self.kind {
            ModelKind::Polar{space, ..} => {
                let (hue, a, b) = space.from_native(in_model);
                ColourOnGradient::new(move |p| space.render(hue, a, p).srgb, b)
            }
            ModelKind::Cartesian{space, projection, ..} => {
                let lightness = in_model.x;
                let (x, y) = (in_model.y, in_model.z);
                // the edge point in the colour's direction, so any extent can be reached
                let (edge_x, edge_y) = projection.project(projection.unproject(x, y));
                ColourOnGradient::new(
                    move |p| space.render(lightness, edge_x * p, edge_y * p).srgb,
                    projection.radius(x, y),
                )
            }
        }
    }

    /// The gradient around the wheel through a colour, in percent of a turn. Only polar models have
    /// one: in a cartesian model, turning changes how far the colour can reach.
    pub fn angle_gradient(&self, in_model: Coord) -> Option<ColourOnGradient> {
        match self.kind {
            ModelKind::Polar{space, hue_offset, ..} => {
                let (hue, a, b) = space.from_native(in_model);
                Some(ColourOnGradient::new(
                    move |p| space.render(angle_to_hue(p / 100.0, hue_offset), a, b).srgb,
                    hue_to_angle(hue, hue_offset) * 100.0,
                ))
            }
            ModelKind::Cartesian{..} => None,
        }
    }
}

const NO_DEFAULTS: ScaleOverrides = ScaleOverrides::NONE;

/// Every model, in display order.
pub static ALL_MODELS: [ColourModel; 8] = [
    ColourModel {
        code: "HSL",
        name: "Hue/Saturation/Lightness",
        description: "sRGB as a double hexcone: saturation out from the gray axis, lightness from black through the pure hue to white",
        a_label: "Saturation",
        b_label: "Lightness",
        scale_defaults: NO_DEFAULTS,
        kind: ModelKind::Polar {
            space: PolarSpace::Hsl,
            hue_offset: HEXCONE_HUE_OFFSET,
            a_scale: 1.0,
            b_scale: 1.0,
        },
    },
    ColourModel {
        code: "HSV",
        name: "Hue/Saturation/Value",
        description: "sRGB as a single hexcone: saturation out from the gray axis, value from black to the brightest colour of that hue",
        a_label: "Saturation",
        b_label: "Value",
        scale_defaults: NO_DEFAULTS,
        kind: ModelKind::Polar {
            space: PolarSpace::Hsv,
            hue_offset: HEXCONE_HUE_OFFSET,
            a_scale: 1.0,
            b_scale: 1.0,
        },
    },
    ColourModel {
        code: "HCV",
        name: "Hue/Chroma/inverted Value (Greyness)",
        description: "Hue/chroma/greyness: chroma out from the gray axis, and the gray the colour is mixed towards",
        a_label: "Chroma",
        b_label: "Greyness (100 is the most grey, 0 is none)",
        scale_defaults: ScaleOverrides {
            a_min: None,
            a_max: None,
            b_min: None,
            b_max: Some(0.0),
        },
        kind: ModelKind::Polar {
            space: PolarSpace::Hcg,
            hue_offset: HEXCONE_HUE_OFFSET,
            a_scale: 1.0,
            b_scale: 1.0,
        },
    },
    ColourModel {
        code: "HWB",
        name: "Hue/White/Black",
        description: "A pure hue with amounts of white and black mixed in",
        a_label: "White",
        b_label: "Black",
        scale_defaults: ScaleOverrides {
            a_min: None,
            a_max: Some(0.0),
            b_min: None,
            b_max: None,
        },
        kind: ModelKind::Polar {
            space: PolarSpace::Hwb,
            hue_offset: HEXCONE_HUE_OFFSET,
            a_scale: 1.0,
            b_scale: 1.0,
        },
    },
    ColourModel {
        code: "JCh",
        name: "CIECAM02 JCh",
        description: "CIECAM02 lightness, chroma and hue under the sRGB reference viewing conditions",
        a_label: "Lightness",
        b_label: "Chroma",
        scale_defaults: NO_DEFAULTS,
        kind: ModelKind::Polar {
            space: PolarSpace::Jch,
            hue_offset: 0.0,
            a_scale: 1.0,
            b_scale: 1.0,
        },
    },
    ColourModel {
        code: "HCL",
        name: "CIELAB in polar coordinates",
        description: "CIELAB lightness with a*/b* as chroma and hue (CIELCh)",
        a_label: "Chroma",
        b_label: "Lightness",
        scale_defaults: NO_DEFAULTS,
        kind: ModelKind::Polar {
            space: PolarSpace::Hcl,
            hue_offset: 0.0,
            a_scale: 1.35,
            b_scale: 1.0,
        },
    },
    ColourModel {
        code: "LAB",
        name: "CIELAB",
        description: "CIELAB lightness with the angle projected onto the a*/b* square, so 45° is (1, 1) and not (1/√2, 1/√2)",
        a_label: "Lightness",
        b_label: "a*/b* extent",
        scale_defaults: ScaleOverrides {
            a_min: None,
            a_max: None,
            b_min: Some(100.0),
            b_max: None,
        },
        kind: ModelKind::Cartesian {
            space: CartesianSpace::Lab,
            projection: Projection::Ray,
            extent_scale: 1.28,
        },
    },
    ColourModel {
        code: "JAB",
        name: "CIECAM02 a/b",
        description: "CIECAM02 lightness with the angle mapped onto its a/b opponent square by an elliptical disc projection",
        a_label: "Lightness",
        b_label: "a/b extent",
        scale_defaults: NO_DEFAULTS,
        kind: ModelKind::Cartesian {
            space: CartesianSpace::Jab,
            projection: Projection::EllipticalDisc,
            extent_scale: 1.0,
        },
    },
];

/// Looks a model up by its exact code. An unknown code is an ordinary outcome, not an error.
/// # Example
/// ```
/// # use colour_wheel::model::get_model_from_code;
/// assert_eq!(get_model_from_code("HCL").unwrap().name, "CIELAB in polar coordinates");
/// assert!(get_model_from_code("XYZ123").is_none());
/// ```
pub fn get_model_from_code(code: &str) -> Option<&'static ColourModel> {
    let found = ALL_MODELS.iter().find(|model| model.code == code);
    if found.is_none() {
        debug!(code, "no colour model with this code");
    }
    found
}

/// The model to show when none is chosen, the one named by [`DEFAULT_MODEL_CODE`]. Panics if no
/// model has that code, which would mean the catalog was edited without updating it.
pub fn default_model() -> &'static ColourModel {
    match ALL_MODELS.iter().find(|model| model.code == DEFAULT_MODEL_CODE) {
        Some(model) => model,
        None => panic!("No colour model has the default code!"),
    }
}

/// Looks a model up by code, falling back on [`default_model`] for an unknown or empty code.
pub fn get_model_or_default(code: &str) -> &'static ColourModel {
    get_model_from_code(code).unwrap_or_else(default_model)
}
