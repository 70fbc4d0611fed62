//! Radial scaling: how a normalized distance from the centre of the wheel turns into the two
//! secondary parameters of a model (called A and B), and how a pair of targets for those parameters
//! turns back into a single distance.
//!
//! Both parameters are linear in distance between their own minimum and maximum. Nothing requires
//! the minimum to be below the maximum: a wheel can just as well run from 100 at the centre to 0 at
//! the rim. When the two are equal the axis is *fixed*: it has the same value everywhere on the
//! wheel, and so can't say anything about distance.

use model::ColourModel;

/// The bounds of the two secondary parameters along the wheel's radius. A value of this type is
/// usually built per call with [`RadialScaling::resolve`].
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadialScaling {
    /// The value of A at the centre of the wheel.
    pub a_min: f64,
    /// The value of A at the rim.
    pub a_max: f64,
    /// The value of B at the centre of the wheel.
    pub b_min: f64,
    /// The value of B at the rim.
    pub b_max: f64,
}

/// The scaling used when neither the model nor the caller says otherwise: both axes run from 0 to
/// 100.
pub const GLOBAL_DEFAULT_SCALING: RadialScaling = RadialScaling {
    a_min: 0.0,
    a_max: 100.0,
    b_min: 0.0,
    b_max: 100.0,
};

impl Default for RadialScaling {
    fn default() -> RadialScaling {
        GLOBAL_DEFAULT_SCALING
    }
}

/// A partial [`RadialScaling`]: each bound that is `Some` replaces the corresponding bound of
/// whatever it is applied over. Models use this for their defaults, and callers for their own
/// settings.
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScaleOverrides {
    /// Replacement for `a_min`, if any.
    pub a_min: Option<f64>,
    /// Replacement for `a_max`, if any.
    pub a_max: Option<f64>,
    /// Replacement for `b_min`, if any.
    pub b_min: Option<f64>,
    /// Replacement for `b_max`, if any.
    pub b_max: Option<f64>,
}

impl ScaleOverrides {
    /// Overrides nothing.
    pub const NONE: ScaleOverrides = ScaleOverrides {
        a_min: None,
        a_max: None,
        b_min: None,
        b_max: None,
    };

    /// Returns `base` with every bound this overrides replaced.
    /// # Example
    /// ```
    /// # use colour_wheel::scaling::{RadialScaling, ScaleOverrides};
    /// let overrides = ScaleOverrides{b_max: Some(0.), ..ScaleOverrides::NONE};
    /// let scaling = overrides.apply_to(RadialScaling::default());
    /// assert_eq!(scaling.a_max, 100.);
    /// assert_eq!(scaling.b_max, 0.);
    /// ```
    pub fn apply_to(&self, base: RadialScaling) -> RadialScaling {
        RadialScaling {
            a_min: self.a_min.unwrap_or(base.a_min),
            a_max: self.a_max.unwrap_or(base.a_max),
            b_min: self.b_min.unwrap_or(base.b_min),
            b_max: self.b_max.unwrap_or(base.b_max),
        }
    }
}

impl From<RadialScaling> for ScaleOverrides {
    /// Overrides every bound.
    fn from(scaling: RadialScaling) -> ScaleOverrides {
        ScaleOverrides {
            a_min: Some(scaling.a_min),
            a_max: Some(scaling.a_max),
            b_min: Some(scaling.b_min),
            b_max: Some(scaling.b_max),
        }
    }
}

/// The model's own defaults laid over the global default scaling.
pub fn get_model_defaults(model: &ColourModel) -> RadialScaling {
    model.scale_defaults.apply_to(GLOBAL_DEFAULT_SCALING)
}

impl RadialScaling {
    /// Resolves the scaling for a call: the caller's overrides win, then the model's defaults, then
    /// the global default, independently for each bound.
    /// # Example
    /// ```
    /// # use colour_wheel::model::get_model_from_code;
    /// # use colour_wheel::scaling::{RadialScaling, ScaleOverrides};
    /// let hcv = get_model_from_code("HCV").unwrap();
    /// let caller = ScaleOverrides{a_min: Some(20.), ..ScaleOverrides::NONE};
    /// let scaling = RadialScaling::resolve(hcv, &caller);
    /// assert_eq!(scaling, RadialScaling{a_min: 20., a_max: 100., b_min: 0., b_max: 0.});
    /// ```
    pub fn resolve(model: &ColourModel, overrides: &ScaleOverrides) -> RadialScaling {
        overrides.apply_to(get_model_defaults(model))
    }

    /// The scaling to carry over when the selected model changes from `prev` to `next`. If `self`
    /// is still exactly `prev`'s defaults, nobody has touched it, so it moves to `next`'s defaults;
    /// otherwise it is the user's own setting and is kept as is.
    pub fn for_model_change(&self, prev: &ColourModel, next: &ColourModel) -> RadialScaling {
        if *self == get_model_defaults(prev) {
            get_model_defaults(next)
        } else {
            *self
        }
    }

    /// Whether A has the same value everywhere on the wheel.
    pub fn a_is_fixed(&self) -> bool {
        self.a_min == self.a_max
    }

    /// Whether B has the same value everywhere on the wheel.
    pub fn b_is_fixed(&self) -> bool {
        self.b_min == self.b_max
    }
}

/// Values of the two secondary parameters.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ab {
    /// The A parameter.
    pub a: f64,
    /// The B parameter.
    pub b: f64,
}

/// Target values for either or both of the secondary parameters.
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AbTarget {
    /// The wanted A, if any.
    pub a: Option<f64>,
    /// The wanted B, if any.
    pub b: Option<f64>,
}

/// The result of [`unscale_ab`]: a distance, and how far each target is from what that distance
/// actually reaches.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unscaled {
    /// The distance that best reaches the targets. Not clamped: anything outside `[0, 1]` is off the
    /// wheel.
    pub distance: f64,
    /// Target A minus the A reached at `distance`, or 0 if there was no A target.
    pub a_delta: f64,
    /// Target B minus the B reached at `distance`, or 0 if there was no B target.
    pub b_delta: f64,
}

/// Interpolates both parameters at a distance. Distances outside `[0, 1]` extrapolate.
/// # Example
/// ```
/// # use colour_wheel::scaling::{scale_ab, RadialScaling};
/// let scaling = RadialScaling{a_min: 0., a_max: 100., b_min: 100., b_max: 50.};
/// let ab = scale_ab(0.4, &scaling);
/// assert_eq!((ab.a, ab.b), (40., 80.));
/// ```
pub fn scale_ab(distance: f64, scaling: &RadialScaling) -> Ab {
    Ab {
        a: scaling.a_min + (scaling.a_max - scaling.a_min) * distance,
        b: scaling.b_min + (scaling.b_max - scaling.b_min) * distance,
    }
}

/// What one axis says about distance.
#[derive(Debug, Copy, Clone, PartialEq)]
enum AxisSolution {
    /// No target for this axis.
    Absent,
    /// A target, but the axis is fixed so every distance reaches the same value.
    Fixed,
    /// The distance at which the axis reaches its target.
    Solved(f64),
}

fn solve_axis(target: Option<f64>, min: f64, max: f64) -> AxisSolution {
    match target {
        None => AxisSolution::Absent,
        Some(_) if min == max => AxisSolution::Fixed,
        Some(value) => AxisSolution::Solved((value - min) / (max - min)),
    }
}

/// The distance at which the scaled parameters best reach the given targets, with the residuals.
///
/// Each targeted axis that isn't fixed is solved on its own. When both are, the two distances
/// usually disagree, and their average is taken. When only one is, it decides alone; a fixed axis
/// is no help. When neither is, the distance is 0.5, the middle of the wheel's radius.
/// # Example
/// ```
/// # use colour_wheel::scaling::{unscale_ab, AbTarget, RadialScaling};
/// let scaling = RadialScaling{a_min: 50., a_max: 50., b_min: 0., b_max: 100.};
/// let unscaled = unscale_ab(AbTarget{a: Some(50.), b: Some(75.)}, &scaling);
/// assert_eq!(unscaled.distance, 0.75);
/// ```
pub fn unscale_ab(target: AbTarget, scaling: &RadialScaling) -> Unscaled {
    let a = solve_axis(target.a, scaling.a_min, scaling.a_max);
    let b = solve_axis(target.b, scaling.b_min, scaling.b_max);
    let distance = match (a, b) {
        (AxisSolution::Solved(a_dist), AxisSolution::Solved(b_dist)) => (a_dist + b_dist) / 2.0,
        (AxisSolution::Solved(dist), _) | (_, AxisSolution::Solved(dist)) => dist,
        _ => 0.5,
    };
    let reached = scale_ab(distance, scaling);
    Unscaled {
        distance,
        a_delta: target.a.map_or(0.0, |a| a - reached.a),
        b_delta: target.b.map_or(0.0, |b| b - reached.b),
    }
}
