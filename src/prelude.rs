//! This module brings the most common colour-wheel functionality under a single namespace, to
//! prevent excessive imports: the [`Color`] trait and [`RGBColor`] with its parse error, the model
//! catalog and its lookups, and the scaling and result types every model call takes or returns.
//! Individual colour spaces from the [`colors`] module are not included, nor are the projection
//! functions.
//!
//! [`Color`]: ../color/trait.Color.html
//! [`RGBColor`]: ../color/struct.RGBColor.html
//! [`colors`]: ../colors/index.html

pub use color::{Color, RGBColor, RGBParseError};
pub use gamut::ModelResult;
pub use gradient::ColourOnGradient;
pub use model::{get_model_from_code, get_model_or_default, ColourLocation, ColourModel, ALL_MODELS};
pub use scaling::{get_model_defaults, RadialScaling, ScaleOverrides};
pub use wheel::{place_swatch, sample_wheel, SwatchPlacement, WheelCell, WheelSide};
