//! Checking raw user input before it reaches the calculations.

use std::fmt;

use tracing::trace;

use crate::errors::InvalidInput;

/// Accepted interval for a numeric input.
///
/// The upper bound is always inclusive. The lower bound is exclusive for leg
/// lengths so that a zero-length side is rejected.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    /// Lower limit.
    pub min: f64,
    /// Upper limit, inclusive.
    pub max: f64,
    /// Whether `min` itself is rejected.
    pub min_exclusive: bool,
}

impl Bounds {
    /// Leg lengths typed into the calculator: `(0, 20]`.
    pub const LEG: Self = Self::exclusive_min(0.0, 20.0);

    /// Signed components of a spatial delta: `[-20, 20]`.
    pub const DELTA: Self = Self::inclusive(-20.0, 20.0);

    /// Bounds covering `[min, max]`.
    #[must_use]
    pub const fn inclusive(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            min_exclusive: false,
        }
    }

    /// Bounds covering `(min, max]`.
    #[must_use]
    pub const fn exclusive_min(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            min_exclusive: true,
        }
    }

    /// Return `true` when `value` lies inside the bounds.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        let above_min = if self.min_exclusive {
            value > self.min
        } else {
            value >= self.min
        };
        above_min && value <= self.max
    }

    /// Pass `value` through when it is finite and inside the bounds.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInput::NonFinite`] or [`InvalidInput::OutOfRange`].
    pub fn check(&self, value: f64) -> Result<f64, InvalidInput> {
        if !value.is_finite() {
            return Err(InvalidInput::NonFinite(value));
        }
        if !self.contains(value) {
            return Err(InvalidInput::OutOfRange {
                value,
                bounds: self.to_string(),
            });
        }
        Ok(value)
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let open = if self.min_exclusive { '(' } else { '[' };
        write!(f, "{open}{}, {}]", self.min, self.max)
    }
}

/// Parse `raw` and accept it only when it is a finite number inside `bounds`.
///
/// Out-of-range values are rejected outright rather than moved to the nearest
/// bound. Surrounding whitespace is ignored; anything else that is not a plain
/// decimal or scientific literal is [`InvalidInput::Unparseable`].
///
/// # Errors
///
/// Returns the [`InvalidInput`] variant describing why `raw` was rejected.
///
/// # Examples
/// ```
/// use pythagorx::{validate_and_clamp, Bounds};
///
/// assert_eq!(validate_and_clamp(" 7.5 ", Bounds::LEG), Ok(7.5));
/// assert!(validate_and_clamp("25", Bounds::LEG).is_err());
/// assert!(validate_and_clamp("0", Bounds::LEG).is_err());
/// ```
pub fn validate_and_clamp(raw: &str, bounds: Bounds) -> Result<f64, InvalidInput> {
    let value = bounds.check(parse_number(raw)?)?;
    trace!(raw, value, "input accepted");
    Ok(value)
}

/// Parse `raw` as a number without applying any bounds.
///
/// # Errors
///
/// Returns [`InvalidInput::Unparseable`] when `raw` is not a float literal.
pub fn parse_number(raw: &str) -> Result<f64, InvalidInput> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| InvalidInput::Unparseable(raw.to_string()))
}

/// A range control that can only produce valid values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Slider {
    /// Leftmost value.
    pub min: f64,
    /// Rightmost value.
    pub max: f64,
    /// Distance between neighbouring stops.
    pub step: f64,
}

impl Slider {
    /// Slider shown under each leg input: `1` to `20` in steps of `0.5`.
    pub const LEG: Self = Self {
        min: 1.0,
        max: 20.0,
        step: 0.5,
    };

    /// Value of the stop nearest to `position`.
    ///
    /// Positions past either end land on that end; NaN lands on `min`.
    ///
    /// # Examples
    /// ```
    /// use pythagorx::Slider;
    ///
    /// assert_eq!(Slider::LEG.value_at(7.3), 7.5);
    /// assert_eq!(Slider::LEG.value_at(-4.0), 1.0);
    /// assert_eq!(Slider::LEG.value_at(99.0), 20.0);
    /// ```
    #[must_use]
    pub fn value_at(&self, position: f64) -> f64 {
        if position.is_nan() {
            return self.min;
        }
        let position = position.clamp(self.min, self.max);
        let stops = ((position - self.min) / self.step).round();
        (self.min + stops * self.step).min(self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_text_negative_and_oversized_values() {
        assert_eq!(
            validate_and_clamp("abc", Bounds::LEG),
            Err(InvalidInput::Unparseable("abc".to_string()))
        );
        assert_eq!(
            validate_and_clamp("-5", Bounds::LEG),
            Err(InvalidInput::OutOfRange {
                value: -5.0,
                bounds: "(0, 20]".to_string()
            })
        );
        assert!(matches!(
            validate_and_clamp("25", Bounds::LEG),
            Err(InvalidInput::OutOfRange { value, .. }) if value == 25.0
        ));
        assert_eq!(
            validate_and_clamp("", Bounds::LEG),
            Err(InvalidInput::Unparseable(String::new()))
        );
    }

    #[test]
    fn rejects_non_finite_literals() {
        assert!(matches!(
            validate_and_clamp("inf", Bounds::LEG),
            Err(InvalidInput::NonFinite(_))
        ));
        assert!(matches!(
            validate_and_clamp("NaN", Bounds::LEG),
            Err(InvalidInput::NonFinite(_))
        ));
    }

    #[test]
    fn accepts_boundary_values() {
        assert_eq!(validate_and_clamp("20", Bounds::LEG), Ok(20.0));
        assert_eq!(validate_and_clamp("0.01", Bounds::LEG), Ok(0.01));
        assert_eq!(validate_and_clamp("0", Bounds::inclusive(0.0, 1.0)), Ok(0.0));
        assert_eq!(validate_and_clamp("-20", Bounds::DELTA), Ok(-20.0));
        assert!(validate_and_clamp("-20.5", Bounds::DELTA).is_err());
    }

    #[test]
    fn bounds_render_their_interval() {
        assert_eq!(Bounds::LEG.to_string(), "(0, 20]");
        assert_eq!(Bounds::inclusive(-1.5, 2.0).to_string(), "[-1.5, 2]");
    }

    #[test]
    fn slider_snaps_to_half_steps() {
        let slider = Slider::LEG;
        assert_eq!(slider.value_at(3.0), 3.0);
        assert_eq!(slider.value_at(3.2), 3.0);
        assert_eq!(slider.value_at(3.3), 3.5);
        assert_eq!(slider.value_at(f64::NAN), 1.0);
        assert_eq!(slider.value_at(f64::INFINITY), 20.0);
    }
}
