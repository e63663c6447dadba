use crate::core::curves::peano::errors::{CurveError, InvalidParameter};
use crate::core::curves::peano::traversal::traversal;
use crate::core::data::orientation::Orientation;
use crate::core::data::point::Point;

/// Deepest subdivision `generate` accepts. A curve at this depth already holds
/// 9^8 (about 43 million) points.
pub const MAX_GENERATION_DEPTH: u32 = 8;

const CHILDREN_PER_CELL: usize = 9;

/// Ordered polyline produced by one call to [`generate`].
pub type Curve = Vec<Point>;

/// Number of points in a curve of the given depth, if it fits in a `usize`.
#[must_use]
pub fn curve_len(depth: u32) -> Option<usize> {
    CHILDREN_PER_CELL.checked_pow(depth)
}

/// Generates the points of the curve filling the square cell of side `size`
/// centered on `center`.
///
/// At depth 0 the curve is the center itself. Otherwise the cell is split into
/// a 3×3 grid and the nine sub-cells are visited in the order given by
/// `orientation`, each one recursively filled with the child orientation from
/// the traversal table. The result always holds exactly `9^depth` points, all
/// strictly inside `center ± size / 2`.
pub fn generate(
    center: Point,
    size: f64,
    depth: u32,
    orientation: Orientation,
) -> Result<Curve, CurveError> {
    if !size.is_finite() || size <= 0.0 {
        return Err(InvalidParameter::Size { size }.into());
    }

    if !center.is_finite() {
        return Err(InvalidParameter::Center {
            x: center.x,
            y: center.y,
        }
        .into());
    }

    if depth > MAX_GENERATION_DEPTH {
        return Err(InvalidParameter::Depth {
            depth,
            ceiling: MAX_GENERATION_DEPTH,
        }
        .into());
    }

    let mut points = Vec::with_capacity(curve_len(depth).unwrap_or_default());
    subdivide(center, size, depth, orientation, &mut points);

    Ok(points)
}

fn subdivide(
    center: Point,
    size: f64,
    depth: u32,
    orientation: Orientation,
    points: &mut Curve,
) {
    if depth == 0 {
        points.push(center);
        return;
    }

    let third = size / 3.0;

    for step in traversal(orientation) {
        let (dx, dy) = step.cell.offset();
        let child_center = Point {
            x: center.x + dx * third,
            y: center.y + dy * third,
        };

        subdivide(child_center, third, depth - 1, step.child, points);
    }
}
