//! Placement of the triangle and its labels for a 3D viewer.
//!
//! Nothing here draws. The layout gives a renderer the numbers it needs to
//! extrude the triangle and put a label next to each side.

use nalgebra::{Point3, Vector3};
use serde::Serialize;

use crate::geometry::Triple;

/// Thickness of the extruded triangle.
pub const EXTRUDE_DEPTH: f64 = 0.5;

/// Height of the label plane above the front face of the triangle.
const LABEL_Z: f64 = 0.6;

/// Text placed next to one side of the triangle.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Label {
    /// Displayed text, such as `a: 3`.
    pub text: String,
    /// Anchor of the text centre.
    pub position: Point3<f64>,
    /// Rotation about the Z axis in radians.
    pub rotation_z: f64,
}

/// Vertices and labels for one right triangle.
///
/// All coordinates are already shifted so the extruded prism is centred on the
/// origin.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TriangleLayout {
    /// Right-angle corner, end of leg `a`, end of leg `b`.
    pub vertices: [Point3<f64>; 3],
    /// Extrusion depth along Z.
    pub depth: f64,
    /// Labels for sides `a`, `b` and `c` in that order.
    pub labels: [Label; 3],
}

impl TriangleLayout {
    /// Lay out the triangle described by `triple`.
    ///
    /// # Examples
    /// ```
    /// use pythagorx::{LegPair, TriangleLayout};
    ///
    /// let layout = TriangleLayout::new(&LegPair::default().triple());
    /// assert_eq!(layout.labels[2].text, "c: 5");
    /// ```
    #[must_use]
    pub fn new(triple: &Triple) -> Self {
        let Triple { a, b, c } = *triple;
        let offset = -Vector3::new(a / 2.0, b / 2.0, EXTRUDE_DEPTH / 2.0);
        let place = |x: f64, y: f64, z: f64| Point3::new(x, y, z) + offset;

        Self {
            vertices: [place(0.0, 0.0, 0.0), place(a, 0.0, 0.0), place(0.0, b, 0.0)],
            depth: EXTRUDE_DEPTH,
            labels: [
                Label {
                    text: format!("a: {a}"),
                    position: place(a / 2.0, -0.5, LABEL_Z),
                    rotation_z: 0.0,
                },
                Label {
                    text: format!("b: {b}"),
                    position: place(-0.8, b / 2.0, LABEL_Z),
                    rotation_z: 0.0,
                },
                Label {
                    text: format!("c: {c}"),
                    position: place(a / 2.2, b / 2.2, LABEL_Z),
                    rotation_z: -(b / a).atan(),
                },
            ],
        }
    }

    /// Length of the side joining the two acute corners.
    #[must_use]
    pub fn hypotenuse_length(&self) -> f64 {
        nalgebra::distance(&self.vertices[1], &self.vertices[2])
    }
}

impl From<Triple> for TriangleLayout {
    fn from(value: Triple) -> Self {
        Self::new(&value)
    }
}
