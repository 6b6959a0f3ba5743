use std::collections::HashMap;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use linework::{
    concat_paths, make_polygon, svg, AttrValue, Canvas, Coord, PathBuilder, PathCommand,
};

fn main() {
    let canvas = Canvas::new(400.0, 300.0);
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    // A polygon record with a couple of overridden attributes
    let mut overrides = HashMap::new();
    overrides.insert("name".to_string(), AttrValue::Str("backdrop".to_string()));
    overrides.insert("strokeWidth".to_string(), AttrValue::Float(2.0));
    let polygon = make_polygon::<f32>(&canvas, &mut rng, overrides);

    // Two independently built sub-paths: a line run and a curve that starts where the run ends
    let mut run = PathBuilder::new();
    run.move_to(Coord::new(50.0, 250.0))
        .line_to(Coord::new(150.0, 250.0))
        .line_to(Coord::new(200.0, 200.0));
    let mut sweep = PathBuilder::new();
    sweep
        .move_to(Coord::new(200.0, 200.0))
        .quad_to(Coord::new(300.0, 100.0), Coord::new(350.0, 250.0));

    // Join them into one outline: each seam's `M` becomes an `L`, and the loop is closed back
    // towards the start with the same policy
    let connect = |command: &PathCommand<f32>| match command {
        PathCommand::MoveTo(end) => Some(PathCommand::LineTo(*end)),
        _ => None,
    };
    let outline = concat_paths(
        vec![run.into_path(), sweep.into_path()],
        Some(&connect),
        true,
    );

    let root = svg::gen_svg_root(
        &canvas,
        vec![svg::gen_svg_shape(&polygon), svg::gen_svg_path(&outline)],
    );
    let svg_string = root.to_string();
    println!("{}", svg_string);
    std::fs::write("outline.svg", svg_string).unwrap();
}
