use vector2d::Vector2D;

pub mod path;
pub mod sample;
pub mod shape;
pub mod svg;

pub use path::{concat_paths, PathBuilder, PathCommand, PathData};
pub use sample::{Canvas, Paint};
pub use shape::{make_polygon, sample_polygon_defaults, AttrValue, ShapeType, ShapeValue};

/// Type alias for 2D coordinates.  This is generic over the scalar type, so the components can be
/// plain numbers or opaque expression nodes (see [`Scalar`]).
pub type Coord<N> = Vector2D<N>;

/// The numeric values stored inside [`Coord`]s and path commands.  This crate never performs
/// arithmetic on scalars - it only lifts literals into the type and stores the results - so
/// implementors can be anything from `f32` to symbolic expression trees.
pub trait Scalar: Clone {
    /// Lifts a literal constant into this scalar type
    fn lift(literal: f32) -> Self;
}

impl Scalar for f32 {
    fn lift(literal: f32) -> f32 {
        literal
    }
}

impl Scalar for f64 {
    fn lift(literal: f32) -> f64 {
        literal as f64
    }
}
