use pythagorx::{Calculator, Leg, SpatialDelta, TriangleLayout};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Start from the 3-4-5 triangle shown when the page opens
    let mut calculator = Calculator::new();

    // A leg outside (0, 20] is ignored and the previous triangle stays
    if let Err(error) = calculator.enter(Leg::A, "25") {
        println!("Ignored input: {error}");
    }

    // Type the ladder problem: 2 m from the wall, 5 m up
    calculator.enter(Leg::A, "2")?;
    let triple = calculator.enter(Leg::B, "5")?;
    println!("{}", triple.formula());

    // Where a viewer would put the hypotenuse label
    let layout = TriangleLayout::new(&triple);
    let label = &layout.labels[2];
    println!(
        "{} at ({:.2}, {:.2}, {:.2})",
        label.text, label.position.x, label.position.y, label.position.z
    );

    // The printer head move from the last card
    let delta = SpatialDelta::parse("3", "4", "12", pythagorx::Bounds::DELTA)?;
    println!("Print head travels {:.2}", delta.distance());

    Ok(())
}
