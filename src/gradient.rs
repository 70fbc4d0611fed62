//! Gradients that explain where a located colour sits along one of a model's axes. A gradient is a
//! function from a position in `[0, 100]` to a colour, plus the position of the located colour on
//! it, which is enough for a UI to draw a slider or legend.

use std::fmt;

/// The number of evenly spaced stops a gradient is sampled at: every 10 from 0 to 100.
pub const GRADIENT_STOPS: usize = 11;

/// The distance between consecutive stops.
pub const GRADIENT_STOP_SIZE: f64 = 100.0 / (GRADIENT_STOPS - 1) as f64;

/// One axis of a colour as a gradient, and where the colour is on it.
pub struct ColourOnGradient {
    /// Renders the gradient at a position, nominally between 0 and 100, as a `#RRGGBB` hex code.
    pub stop_fn: Box<dyn Fn(f64) -> String + Send + Sync>,
    /// Where the colour sits on the gradient. This is not clamped: a colour beyond the end of the
    /// axis has a position above 100 or below 0, and it is up to the caller to clamp it for display.
    pub position: f64,
}

impl fmt::Debug for ColourOnGradient {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("ColourOnGradient")
            .field("stops", &self.stops())
            .field("position", &self.position)
            .finish()
    }
}

impl ColourOnGradient {
    /// Builds a gradient from a stop function and a position.
    pub fn new<F>(stop_fn: F, position: f64) -> ColourOnGradient
    where
        F: Fn(f64) -> String + Send + Sync + 'static,
    {
        ColourOnGradient {
            stop_fn: Box::new(stop_fn),
            position,
        }
    }

    /// Renders the gradient at a position.
    pub fn colour_at(&self, position: f64) -> String {
        (self.stop_fn)(position)
    }

    /// The colours at the [`GRADIENT_STOPS`] evenly spaced positions 0, 10, ... 100.
    pub fn stops(&self) -> Vec<String> {
        (0..GRADIENT_STOPS)
            .map(|i| self.colour_at(i as f64 * GRADIENT_STOP_SIZE))
            .collect()
    }

    /// The position clamped to `[0, 100]`, for placing a marker on a drawn gradient.
    pub fn display_position(&self) -> f64 {
        self.position.max(0.0).min(100.0)
    }

    /// Whether the colour is past either end of the gradient.
    pub fn off_scale(&self) -> bool {
        self.position < 0.0 || self.position > 100.0
    }

    /// The stops as a left-to-right CSS gradient.
    /// # Example
    /// ```
    /// # use colour_wheel::gradient::ColourOnGradient;
    /// let gray = ColourOnGradient::new(|_| "#808080".to_string(), 50.);
    /// let css = gray.css_linear_gradient();
    /// assert!(css.starts_with("linear-gradient(90deg, #808080, "));
    /// assert!(css.ends_with("#808080)"));
    /// ```
    pub fn css_linear_gradient(&self) -> String {
        format!("linear-gradient(90deg, {})", self.stops().join(", "))
    }
}
