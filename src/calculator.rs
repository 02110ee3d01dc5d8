//! Interactive calculator session holding the current pair of legs.

use tracing::debug;

use crate::errors::InvalidInput;
use crate::geometry::{LegPair, Triple};
use crate::validation::{validate_and_clamp, Bounds, Slider};

/// Identifies one of the two legs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Leg {
    /// The horizontal leg.
    A,
    /// The vertical leg.
    B,
}

/// State of one interactive session.
///
/// The session only ever holds a valid [`LegPair`]. Input that fails validation
/// leaves the pair untouched, so the displayed triangle is always the last one
/// that was accepted.
#[derive(Clone, Debug, Default)]
pub struct Calculator {
    /// Last accepted legs.
    legs: LegPair,
}

impl Calculator {
    /// Start a session on the 3-4-5 triangle.
    ///
    /// # Examples
    /// ```
    /// use pythagorx::Calculator;
    ///
    /// let calculator = Calculator::new();
    /// assert_eq!(calculator.hypotenuse(), 5.0);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session on an existing pair.
    #[must_use]
    pub const fn with_legs(legs: LegPair) -> Self {
        Self { legs }
    }

    /// Current legs.
    #[must_use]
    pub const fn legs(&self) -> LegPair {
        self.legs
    }

    /// Rounded hypotenuse of the current legs.
    #[must_use]
    pub fn hypotenuse(&self) -> f64 {
        self.triple().c
    }

    /// Current legs together with the rounded hypotenuse.
    #[must_use]
    pub fn triple(&self) -> Triple {
        self.legs.triple()
    }

    /// Apply text typed into the field for `leg`.
    ///
    /// The previous pair is kept when the text is rejected.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInput`] describing the rejection. The session is unchanged.
    ///
    /// # Examples
    /// ```
    /// use pythagorx::{Calculator, Leg};
    ///
    /// let mut calculator = Calculator::new();
    /// assert!(calculator.enter(Leg::A, "abc").is_err());
    /// assert_eq!(calculator.legs().a(), 3.0);
    /// calculator.enter(Leg::A, "6").expect("in range");
    /// calculator.enter(Leg::B, "8").expect("in range");
    /// assert_eq!(calculator.hypotenuse(), 10.0);
    /// ```
    pub fn enter(&mut self, leg: Leg, raw: &str) -> Result<Triple, InvalidInput> {
        let value = validate_and_clamp(raw, Bounds::LEG).map_err(|error| {
            debug!(?leg, raw, %error, "input ignored");
            error
        })?;
        self.set(leg, value)
    }

    /// Apply a slider movement for `leg`. Slider values are always accepted.
    pub fn slide(&mut self, leg: Leg, position: f64) -> Triple {
        let value = Slider::LEG.value_at(position);
        self.set(leg, value)
            .expect("slider stops lie inside the leg bounds")
    }

    /// Replace one leg with an already parsed value.
    fn set(&mut self, leg: Leg, value: f64) -> Result<Triple, InvalidInput> {
        let legs = match leg {
            Leg::A => self.legs.with_a(value)?,
            Leg::B => self.legs.with_b(value)?,
        };
        self.legs = legs;
        let triple = self.triple();
        debug!(?leg, a = triple.a, b = triple.b, c = triple.c, "legs updated");
        Ok(triple)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_input_keeps_previous_state() {
        let mut calculator = Calculator::new();
        for raw in ["-5", "abc", "25", "0", "", "NaN"] {
            assert!(calculator.enter(Leg::A, raw).is_err(), "{raw} should be rejected");
            assert!(calculator.enter(Leg::B, raw).is_err(), "{raw} should be rejected");
        }
        assert_eq!(calculator.legs(), LegPair::default());
        assert_eq!(calculator.hypotenuse(), 5.0);
    }

    #[test]
    fn accepted_input_recomputes_hypotenuse() {
        let mut calculator = Calculator::new();
        let triple = calculator.enter(Leg::B, "12").expect("in range");
        assert_eq!(triple, Triple { a: 3.0, b: 12.0, c: 12.37 });
        assert_eq!(calculator.triple(), triple);
    }

    #[test]
    fn slider_snaps_and_updates() {
        let mut calculator = Calculator::new();
        let triple = calculator.slide(Leg::A, 5.9);
        assert_eq!(triple.a, 6.0);
        let triple = calculator.slide(Leg::B, 0.0);
        assert_eq!(triple.b, 1.0);
        assert_eq!(calculator.legs().b(), 1.0);
    }

    #[test]
    fn slider_never_rejects_a_position() {
        let mut calculator = Calculator::new();
        for position in [f64::NAN, f64::NEG_INFINITY, -3.0, 0.74, 19.76, 1.0e9] {
            let triple = calculator.slide(Leg::A, position);
            assert!(Bounds::LEG.contains(triple.a), "{position} gave {}", triple.a);
        }
        assert_eq!(calculator.legs().a(), 20.0);
    }

    #[test]
    fn session_can_start_from_existing_pair() {
        let legs = LegPair::new(5.0, 12.0).expect("in range");
        let calculator = Calculator::with_legs(legs);
        assert_eq!(calculator.hypotenuse(), 13.0);
    }
}
