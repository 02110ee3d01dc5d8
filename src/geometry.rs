//! Right-triangle and distance calculations.

use nalgebra::{Point2, Point3, Vector3};
use serde::{Deserialize, Serialize};

use crate::errors::InvalidInput;
use crate::validation::{parse_number, Bounds};

/// Number of decimal places used when showing lengths.
pub const DISPLAY_DECIMALS: u8 = 2;

/// Length of the hypotenuse for legs `a` and `b`.
///
/// Defined for any finite input. The caller is responsible for rejecting
/// non-finite or out-of-range values beforehand.
///
/// # Examples
/// ```
/// use pythagorx::compute_hypotenuse;
///
/// assert_eq!(compute_hypotenuse(3.0, 4.0), 5.0);
/// assert_eq!(compute_hypotenuse(4.0, 3.0), 5.0);
/// ```
#[must_use]
pub fn compute_hypotenuse(a: f64, b: f64) -> f64 {
    (a * a + b * b).sqrt()
}

/// Euclidean length of the delta `(x, y, z)`.
///
/// # Examples
/// ```
/// use pythagorx::compute_spatial_distance;
///
/// assert_eq!(compute_spatial_distance(3.0, 4.0, 12.0), 13.0);
/// ```
#[must_use]
pub fn compute_spatial_distance(x: f64, y: f64, z: f64) -> f64 {
    SpatialDelta::new(x, y, z).distance()
}

/// Straight-line distance between two points on a plane.
///
/// The differences of the coordinates act as the legs of a right triangle.
///
/// # Examples
/// ```
/// use nalgebra::Point2;
/// use pythagorx::planar_distance;
///
/// let d = planar_distance(Point2::new(10.0, 20.0), Point2::new(40.0, 60.0));
/// assert_eq!(d, 50.0);
/// ```
#[must_use]
pub fn planar_distance(start: Point2<f64>, end: Point2<f64>) -> f64 {
    let delta = end - start;
    compute_hypotenuse(delta.x, delta.y)
}

/// Round `value` to `decimals` places, with ties rounded away from zero.
///
/// # Examples
/// ```
/// use pythagorx::round_for_display;
///
/// assert_eq!(round_for_display(2.0_f64.sqrt(), 2), 1.41);
/// assert_eq!(round_for_display(0.125, 2), 0.13);
/// ```
#[must_use]
pub fn round_for_display(value: f64, decimals: u8) -> f64 {
    let factor = 10.0_f64.powi(i32::from(decimals));
    (value * factor).round() / factor
}

/// The two legs of a right triangle, each inside [`Bounds::LEG`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct LegPair {
    /// First leg.
    a: f64,
    /// Second leg.
    b: f64,
}

impl LegPair {
    /// Create a pair after checking both legs against [`Bounds::LEG`].
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInput`] for the first leg that is non-finite or out of range.
    pub fn new(a: f64, b: f64) -> Result<Self, InvalidInput> {
        Ok(Self {
            a: Bounds::LEG.check(a)?,
            b: Bounds::LEG.check(b)?,
        })
    }

    /// First leg.
    #[must_use]
    pub const fn a(&self) -> f64 {
        self.a
    }

    /// Second leg.
    #[must_use]
    pub const fn b(&self) -> f64 {
        self.b
    }

    /// Return a copy with leg `a` replaced, or an error leaving `self` untouched.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInput`] when `a` is non-finite or out of range.
    pub fn with_a(self, a: f64) -> Result<Self, InvalidInput> {
        Self::new(a, self.b)
    }

    /// Return a copy with leg `b` replaced, or an error leaving `self` untouched.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInput`] when `b` is non-finite or out of range.
    pub fn with_b(self, b: f64) -> Result<Self, InvalidInput> {
        Self::new(self.a, b)
    }

    /// Unrounded hypotenuse, recomputed on every call.
    #[must_use]
    pub fn hypotenuse(&self) -> f64 {
        compute_hypotenuse(self.a, self.b)
    }

    /// Legs and rounded hypotenuse ready for display.
    #[must_use]
    pub fn triple(&self) -> Triple {
        Triple::from(*self)
    }
}

impl Default for LegPair {
    /// The 3-4-5 triangle.
    fn default() -> Self {
        Self { a: 3.0, b: 4.0 }
    }
}

/// Displacement along the three global axes, such as a print head move.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpatialDelta {
    /// Change along the X axis.
    pub x: f64,
    /// Change along the Y axis.
    pub y: f64,
    /// Change along the Z axis.
    pub z: f64,
}

impl SpatialDelta {
    /// Create a [`SpatialDelta`] with explicit components.
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Delta that carries `start` onto `end`.
    #[must_use]
    pub fn between(start: Point3<f64>, end: Point3<f64>) -> Self {
        Self::from(end - start)
    }

    /// Parse three typed components and check them against `bounds`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInput`] for the first component that does not parse or is rejected.
    ///
    /// # Examples
    /// ```
    /// use pythagorx::{Bounds, SpatialDelta};
    ///
    /// let delta = SpatialDelta::parse("3", "-4", "12", Bounds::DELTA).expect("in range");
    /// assert_eq!(delta.distance(), 13.0);
    /// assert!(SpatialDelta::parse("3", "4", "25", Bounds::DELTA).is_err());
    /// ```
    pub fn parse(x: &str, y: &str, z: &str, bounds: Bounds) -> Result<Self, InvalidInput> {
        Self::new(parse_number(x)?, parse_number(y)?, parse_number(z)?).validated(bounds)
    }

    /// Check each component against `bounds`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInput`] for the first component that is rejected.
    pub fn validated(self, bounds: Bounds) -> Result<Self, InvalidInput> {
        Ok(Self::new(
            bounds.check(self.x)?,
            bounds.check(self.y)?,
            bounds.check(self.z)?,
        ))
    }

    /// Convert the delta into an algebraic vector.
    #[must_use]
    pub fn to_vector(self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Unrounded length of the delta.
    #[must_use]
    pub fn distance(&self) -> f64 {
        self.to_vector().norm()
    }
}

impl From<Vector3<f64>> for SpatialDelta {
    fn from(value: Vector3<f64>) -> Self {
        Self::new(value.x, value.y, value.z)
    }
}

impl From<SpatialDelta> for Vector3<f64> {
    fn from(value: SpatialDelta) -> Self {
        value.to_vector()
    }
}

/// Legs and hypotenuse as handed to the scene and display layers.
///
/// `c` is already rounded to [`DISPLAY_DECIMALS`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Triple {
    /// First leg.
    pub a: f64,
    /// Second leg.
    pub b: f64,
    /// Rounded hypotenuse.
    pub c: f64,
}

impl Triple {
    /// Formula with the current numbers substituted.
    ///
    /// # Examples
    /// ```
    /// use pythagorx::LegPair;
    ///
    /// let triple = LegPair::default().triple();
    /// assert_eq!(triple.formula(), "c = √(3² + 4²) = 5");
    /// ```
    #[must_use]
    pub fn formula(&self) -> String {
        format!("c = √({}² + {}²) = {}", self.a, self.b, self.c)
    }
}

impl From<LegPair> for Triple {
    fn from(value: LegPair) -> Self {
        Self {
            a: value.a,
            b: value.b,
            c: round_for_display(value.hypotenuse(), DISPLAY_DECIMALS),
        }
    }
}
