//! Default-value samplers for shape attributes.  Some samplers are fixed values, others draw
//! from an rng; the shape factory in [`crate::shape`] only forwards their results and works the
//! same either way.

use rand::Rng;
use rgb::RGB8;

use crate::{Coord, Scalar};

/// The drawing surface that shapes are placed onto.  This crate never draws to it - it is
/// read-only context forwarded to the samplers so that defaults can respect the canvas bounds.
#[derive(Debug, Clone, Copy)]
pub struct Canvas {
    pub width: f32,
    pub height: f32,
}

impl Canvas {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// A paint value: either "no paint" or a concrete colour
pub type Paint = Option<RGB8>;

/// The "no paint" value, rendered as `fill="none"`/`stroke="none"`
pub fn no_paint() -> Paint {
    None
}

/// Solid black, the default stroke colour
pub fn black() -> Paint {
    Some(RGB8::new(0, 0, 0))
}

/// Samples a colour uniformly from RGB space
pub fn sample_color(rng: &mut impl Rng) -> Paint {
    Some(RGB8::new(rng.gen(), rng.gen(), rng.gen()))
}

/// The default string attribute value (empty)
pub fn default_string() -> String {
    String::new()
}

/// The default boolean attribute value
pub fn default_bool() -> bool {
    true
}

/// Lifts a float default into the scalar type
pub fn default_float<N: Scalar>(value: f32) -> N {
    N::lift(value)
}

/// The default polygon outline: a triangle centred on the canvas, with vertices roughly a tenth
/// of the canvas width from the centre
pub fn default_points<N: Scalar>(canvas: &Canvas) -> Vec<Coord<N>> {
    let centre_x = canvas.width * 0.5;
    let centre_y = canvas.height * 0.5;
    let radius = canvas.width * 0.1;
    vec![
        Coord {
            x: N::lift(centre_x),
            y: N::lift(centre_y - radius),
        },
        Coord {
            x: N::lift(centre_x - radius),
            y: N::lift(centre_y + radius),
        },
        Coord {
            x: N::lift(centre_x + radius),
            y: N::lift(centre_y + radius),
        },
    ]
}
