use pythagorx::{Application, SpatialDelta, Triple, TriangleLayout};
use std::fmt::Write;

/// Render a textual summary of a right triangle.
///
/// The report restates the legs, the formula with numbers substituted, and
/// where the viewer would place the hypotenuse label.
#[must_use]
pub fn render_triangle(triple: &Triple) -> String {
    let mut output = String::new();
    let layout = TriangleLayout::new(triple);

    writeln!(&mut output, "Right triangle (a = {}, b = {})", triple.a, triple.b)
        .expect("writing to string cannot fail");
    writeln!(&mut output, "{}", triple.formula()).expect("writing to string cannot fail");

    let label = &layout.labels[2];
    writeln!(
        &mut output,
        "Hypotenuse label at ({:+.2}, {:+.2}, {:+.2}), rotated {:.1}°",
        label.position.x,
        label.position.y,
        label.position.z,
        label.rotation_z.to_degrees()
    )
    .expect("writing to string cannot fail");

    output
}

/// Render the length of a three-dimensional move.
#[must_use]
pub fn render_distance(delta: &SpatialDelta, rounded: f64) -> String {
    format!(
        "d = √({}² + {}² + {}²) = {rounded}\n",
        delta.x, delta.y, delta.z
    )
}

/// Render one application card, or every card when `id` is `None`.
///
/// Returns `None` when `id` names no card.
#[must_use]
pub fn render_catalog(id: Option<&str>, cards: &[Application]) -> Option<String> {
    let mut output = String::new();
    match id {
        Some(id) => {
            let card = cards.iter().find(|card| card.id == id)?;
            writeln!(&mut output, "{} {}", card.icon, card.title)
                .expect("writing to string cannot fail");
            writeln!(&mut output, "{}", card.problem).expect("writing to string cannot fail");
            writeln!(&mut output, "{}", card.solution).expect("writing to string cannot fail");
            writeln!(&mut output, "{}", card.formula).expect("writing to string cannot fail");
        }
        None => {
            for card in cards {
                writeln!(&mut output, "{:<10} {} {}", card.id, card.icon, card.short_desc)
                    .expect("writing to string cannot fail");
            }
        }
    }
    Some(output)
}
