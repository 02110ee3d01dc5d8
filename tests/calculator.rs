#![warn(clippy::pedantic)]

use pythagorx::{
    compute_hypotenuse, compute_spatial_distance, find_application, planar_distance,
    round_for_display, Calculator, InvalidInput, Leg, LegPair, ShapeType, SpatialDelta, Triple,
    TriangleLayout,
};

fn session_after(inputs: &[(Leg, &str)]) -> Calculator {
    let mut calculator = Calculator::new();
    for (leg, raw) in inputs {
        // Rejections are part of the scenario; only the final state matters.
        let _ = calculator.enter(*leg, raw);
    }
    calculator
}

#[test]
fn known_triangles_are_exact() {
    assert_eq!(compute_hypotenuse(3.0, 4.0), 5.0);
    assert_eq!(compute_hypotenuse(6.0, 8.0), 10.0);
    assert_eq!(compute_spatial_distance(3.0, 4.0, 12.0), 13.0);
    assert_eq!(round_for_display(2.0_f64.sqrt(), 2), 1.41);
}

#[test]
fn invalid_events_leave_the_three_four_five_triangle() {
    let calculator = session_after(&[(Leg::A, "-5"), (Leg::B, "abc"), (Leg::A, "25")]);
    assert_eq!(calculator.legs(), LegPair::default());
    assert_eq!(calculator.triple(), Triple { a: 3.0, b: 4.0, c: 5.0 });
}

#[test]
fn valid_events_after_invalid_ones_still_apply() {
    let calculator = session_after(&[
        (Leg::A, "abc"),
        (Leg::A, "6"),
        (Leg::B, "30"),
        (Leg::B, "8"),
    ]);
    assert_eq!(calculator.hypotenuse(), 10.0);
}

#[test]
fn rejection_reports_the_reason() {
    let mut calculator = Calculator::new();
    let error = calculator
        .enter(Leg::B, "25")
        .expect_err("oversized leg is rejected");
    assert!(matches!(error, InvalidInput::OutOfRange { value, .. } if value == 25.0));
    assert_eq!(error.to_string(), "25 is outside the accepted range (0, 20]");
}

#[test]
fn ladder_card_matches_its_triangle() {
    let card = find_application("ladder").expect("ladder card exists");
    assert_eq!(card.shape_type, ShapeType::Ladder);

    let legs = LegPair::new(2.0, 5.0).expect("legs in range");
    let triple = legs.triple();
    assert_eq!(triple.c, 5.39);

    let layout = TriangleLayout::new(&triple);
    assert!((layout.hypotenuse_length() - legs.hypotenuse()).abs() < 1.0e-12);
}

#[test]
fn pixel_and_print_head_examples() {
    use nalgebra::{Point2, Point3};

    assert_eq!(planar_distance(Point2::new(10.0, 20.0), Point2::new(40.0, 60.0)), 50.0);

    let delta = SpatialDelta::between(Point3::origin(), Point3::new(3.0, 4.0, 12.0));
    assert_eq!(delta.distance(), 13.0);
}

#[test]
fn triple_serializes_for_the_display_layer() {
    let triple = Calculator::new().triple();
    let json = serde_json::to_string(&triple).expect("triple serializes");
    assert_eq!(json, r#"{"a":3.0,"b":4.0,"c":5.0}"#);
    let back: Triple = serde_json::from_str(&json).expect("triple deserializes");
    assert_eq!(back, triple);
}
