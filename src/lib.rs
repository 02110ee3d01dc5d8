#![warn(clippy::all)]
#![warn(missing_docs)]
#![warn(rustdoc::missing_doc_code_examples)]
#![warn(clippy::missing_docs_in_private_items)]
#![doc = include_str!("../README.md")]

pub mod calculator;
pub mod catalog;
pub mod errors;
pub mod explain;
pub mod geometry;
pub mod scene;
pub mod validation;

pub use calculator::{Calculator, Leg};
pub use catalog::{applications, catalog_json, find_application, Application, ShapeType};
pub use errors::{ExplanationError, InvalidInput};
pub use explain::{explain_or_fallback, ExplainerConfig, Explanation, ExplanationService};
pub use geometry::{
    compute_hypotenuse, compute_spatial_distance, planar_distance, round_for_display, LegPair,
    SpatialDelta, Triple, DISPLAY_DECIMALS,
};
pub use scene::{Label, TriangleLayout};
pub use validation::{parse_number, validate_and_clamp, Bounds, Slider};
