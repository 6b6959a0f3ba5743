//! Path geometry as an ordered sequence of drawing commands, compatible with SVG path syntax.
//! Paths are assembled one command at a time with a [`PathBuilder`], and finished command
//! sequences can be spliced together with [`concat_paths`].

use angle::Deg;

use crate::{Coord, Scalar};

/// An ordered sequence of [`PathCommand`]s.  The order is semantically significant - it is the
/// order in which a renderer will draw the commands.
pub type PathData<N> = Vec<PathCommand<N>>;

/// One drawing instruction in a vector path.  The variants correspond one-to-one to the
/// single-letter command codes of SVG path syntax, each carrying its fixed set of operands.
#[derive(Debug, Clone, PartialEq)]
pub enum PathCommand<N> {
    /// `M`: start a new sub-path at the given point
    MoveTo(Coord<N>),
    /// `L`: straight line to the given point
    LineTo(Coord<N>),
    /// `Q`: quadratic Bézier curve
    QuadTo { control: Coord<N>, end: Coord<N> },
    /// `C`: cubic Bézier curve
    CubicTo {
        control1: Coord<N>,
        control2: Coord<N>,
        end: Coord<N>,
    },
    /// `T`: quadratic curve continuation.  The control point is left implicit; the renderer is
    /// expected to infer it as the reflection of the previous curve's control point.  This crate
    /// neither computes nor validates that reflection.
    QuadJoin { end: Coord<N> },
    /// `S`: cubic curve continuation, with an implicit first control point
    CubicJoin { control: Coord<N>, end: Coord<N> },
    /// `A`: elliptical arc.  The parameters are a value-tuple of exactly five scalars in the
    /// fixed order `[rx, ry, rotation_degrees, large_arc_flag, sweep_flag]`.  The two flags are
    /// stored as 0/1 scalars and passed through uninterpreted - their semantics are a renderer
    /// concern.
    ArcTo { params: [N; 5], end: Coord<N> },
    /// `Z`: close the current sub-path
    Close,
}

impl<N> PathCommand<N> {
    /// The single-letter SVG command code of this command
    pub fn code(&self) -> char {
        match self {
            PathCommand::MoveTo(_) => 'M',
            PathCommand::LineTo(_) => 'L',
            PathCommand::QuadTo { .. } => 'Q',
            PathCommand::CubicTo { .. } => 'C',
            PathCommand::QuadJoin { .. } => 'T',
            PathCommand::CubicJoin { .. } => 'S',
            PathCommand::ArcTo { .. } => 'A',
            PathCommand::Close => 'Z',
        }
    }
}

/// A mutable accumulator of path commands.  Every drawing method appends exactly one command to
/// the owned command sequence and returns the builder again, so calls can be chained:
///
/// ```
/// use linework::{Coord, PathBuilder};
///
/// let mut builder = PathBuilder::<f32>::new();
/// builder
///     .move_to(Coord::new(0.0, 0.0))
///     .line_to(Coord::new(10.0, 0.0))
///     .close_path();
/// assert_eq!(builder.path().len(), 3);
/// ```
///
/// The drawing methods are total: inputs are trusted to be well-formed and nothing is validated.
#[derive(Debug, Clone)]
pub struct PathBuilder<N> {
    commands: PathData<N>,
}

impl<N: Scalar> PathBuilder<N> {
    /// Creates a `PathBuilder` with an empty command sequence
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Appends an `M` command, starting a new sub-path at `end`
    pub fn move_to(&mut self, end: Coord<N>) -> &mut Self {
        self.commands.push(PathCommand::MoveTo(end));
        self
    }

    /// Appends an `L` command, drawing a straight line to `end`
    pub fn line_to(&mut self, end: Coord<N>) -> &mut Self {
        self.commands.push(PathCommand::LineTo(end));
        self
    }

    /// Appends a `Q` command, drawing a quadratic Bézier curve to `end`
    pub fn quad_to(&mut self, control: Coord<N>, end: Coord<N>) -> &mut Self {
        self.commands.push(PathCommand::QuadTo { control, end });
        self
    }

    /// Appends a `C` command, drawing a cubic Bézier curve to `end`
    pub fn cubic_to(&mut self, control1: Coord<N>, control2: Coord<N>, end: Coord<N>) -> &mut Self {
        self.commands.push(PathCommand::CubicTo {
            control1,
            control2,
            end,
        });
        self
    }

    /// Appends a `T` command, continuing the previous quadratic curve to `end` with a reflected
    /// control point
    pub fn quad_join(&mut self, end: Coord<N>) -> &mut Self {
        self.commands.push(PathCommand::QuadJoin { end });
        self
    }

    /// Appends an `S` command, continuing the previous cubic curve to `end` with an implicit
    /// first control point
    pub fn cubic_join(&mut self, control: Coord<N>, end: Coord<N>) -> &mut Self {
        self.commands.push(PathCommand::CubicJoin { control, end });
        self
    }

    /// Appends an `A` command with no axis rotation and both flags clear.  See
    /// [`arc_to_rotated`](Self::arc_to_rotated) for the full parameter set.
    pub fn arc_to(&mut self, radii: Coord<N>, end: Coord<N>) -> &mut Self {
        self.arc_to_rotated(radii, end, Deg(0.0), false, false)
    }

    /// Appends an `A` command, drawing an elliptical arc to `end` with the given radii, x-axis
    /// rotation and flags.  The flags are stored as lifted 0/1 scalars and forwarded to the
    /// renderer uninterpreted.
    pub fn arc_to_rotated(
        &mut self,
        radii: Coord<N>,
        end: Coord<N>,
        rotation: Deg<f32>,
        large_arc: bool,
        sweep: bool,
    ) -> &mut Self {
        let flag = |set: bool| N::lift(if set { 1.0 } else { 0.0 });
        let params = [
            radii.x,
            radii.y,
            N::lift(rotation.0),
            flag(large_arc),
            flag(sweep),
        ];
        self.commands.push(PathCommand::ArcTo { params, end });
        self
    }

    /// Appends a `Z` command, closing the current sub-path
    pub fn close_path(&mut self) -> &mut Self {
        self.commands.push(PathCommand::Close);
        self
    }

    /// Appends a closed outline (`M`, `L`..., `Z`) visiting the given points in order.  A
    /// composite convenience over the single-command methods; appends nothing if `points` is
    /// empty.
    pub fn polygon(&mut self, points: &[Coord<N>]) -> &mut Self {
        let mut point_iter = points.iter();
        if let Some(first) = point_iter.next() {
            self.move_to(first.clone());
            for point in point_iter {
                self.line_to(point.clone());
            }
            self.close_path();
        }
        self
    }

    /// Borrows the command sequence built so far.  This is a view of the builder's live backing
    /// store, not a copy - further drawing methods on the same builder will extend it.
    pub fn path(&self) -> &PathData<N> {
        &self.commands
    }

    /// Consumes the builder, returning the finished command sequence
    pub fn into_path(self) -> PathData<N> {
        self.commands
    }
}

impl<N: Scalar> Default for PathBuilder<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// The junction policy applied at each seam by [`concat_paths`].  Given the first command of the
/// sequence being joined on, it either returns a replacement command or `None` to elide the seam
/// command entirely.
pub type ConnectFn<'a, N> = &'a dyn Fn(&PathCommand<N>) -> Option<PathCommand<N>>;

/// Splices several independently built command sequences into one.
///
/// Sequences are merged left to right; empty sequences contribute nothing (and do not consume a
/// seam transform).  When `connect` is supplied, it is applied to the first command of every
/// sequence joined onto an earlier one: a `Some(replacement)` substitutes that command in place,
/// while a `None` drops it, so the sequence starts at what was its second command (which may
/// leave nothing of a single-command sequence).  Without a `connect` policy the sequences are
/// simply concatenated back-to-back.
///
/// If `connect_last` is set (and `connect` is supplied), the policy is additionally applied to
/// the merged result's own first command, and a `Some` result is appended at the very end -
/// closing a composite outline back towards its start.
///
/// Commands are only inspected and replaced wholesale; their operands are never validated.
pub fn concat_paths<N>(
    paths: Vec<PathData<N>>,
    connect: Option<ConnectFn<'_, N>>,
    connect_last: bool,
) -> PathData<N> {
    let mut joined: PathData<N> = Vec::new();
    // Set once the first non-empty sequence has been spliced in; only sequences after that point
    // have a seam to transform
    let mut past_first_sequence = false;
    for mut path in paths {
        if path.is_empty() {
            continue;
        }
        if past_first_sequence {
            if let Some(connect) = connect {
                match connect(&path[0]) {
                    Some(replacement) => path[0] = replacement,
                    None => {
                        path.remove(0);
                    }
                }
            }
        }
        joined.extend(path);
        past_first_sequence = true;
    }
    if connect_last {
        if let Some(connect) = connect {
            if let Some(closing) = joined.first().and_then(|first| connect(first)) {
                joined.push(closing);
            }
        }
    }
    joined
}
