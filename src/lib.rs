//! colour-wheel lays colour spaces out on a wheel and finds colours on it again. A position on a
//! wheel is an angle, which is the hue, and a distance from the centre, which blends two secondary
//! parameters such as saturation and lightness. Each [`ColourModel`] turns positions into
//! displayable sRGB colours, flagging the ones that had to be clamped into gamut, and locates
//! reference colours back onto its wheel, with gradients along each axis to explain where they
//! landed.
//!
//! The crate also carries the colour-space conversions the models are built on, in [`colors`]: the
//! RGB-derived HSL, HSV, HCG and HWB, the perceptual CIELAB and its polar form, and CIECAM02.
//!
//! [`ColourModel`]: model/struct.ColourModel.html
//! [`colors`]: colors/index.html

// we don't mess around with documentation
#![deny(missing_docs)]
// Clippy doesn't like long decimals, but adding separators in decimals isn't any more readable
// compare -0.96924 with -0.96_924
#![allow(clippy::unreadable_literal)]

extern crate num;
extern crate regex;
#[macro_use]
extern crate rulinalg;
extern crate serde;
#[macro_use]
extern crate serde_derive;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate tracing;

#[cfg(test)]
#[macro_use]
extern crate float_cmp;

pub mod color;
pub mod colors;
mod consts;
pub mod coord;
pub mod gamut;
pub mod gradient;
pub mod model;
pub mod prelude;
pub mod projection;
pub mod scaling;
pub mod wheel;
