use std::fmt::{self, Display};

use rug::Integer;

/// A point, aka share, of the polynomial to be reconstructed
#[derive(Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Point {
    /// Share index
    pub x: i64,
    /// Share value
    pub y: Integer,
}

impl Point {
    pub fn new(x: i64, y: impl Into<Integer>) -> Self {
        Self { x, y: y.into() }
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Copy of `pts`, stably sorted by `x`
pub(crate) fn sorted_by_x(pts: &[Point]) -> Vec<Point> {
    let mut pts = pts.to_vec();
    pts.sort_by_key(|pt| pt.x);
    pts
}
