//! Integer grid coordinates and a point-membership container.
use core::fmt;
use fxhash::FxBuildHasher;
use indexmap::IndexSet;
use smallvec::SmallVec;
use std::cmp::Ordering;

use crate::{N_SMALLVEC_SIZE, SQRT_2};

type FxIndexSet<K> = IndexSet<K, FxBuildHasher>;

/// A cell on the grid, addressed by column `x` and row `y`.
///
/// Ordering is row-major, which gives the grid a stable iteration order.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: usize,
    pub y: usize,
}

impl Point {
    pub const fn new(x: usize, y: usize) -> Point {
        Point { x, y }
    }

    /// Shifts the point by the given offsets, returning [None] if that would leave the
    /// non-negative quadrant. Upper bounds are the grid's concern.
    pub fn offset(&self, dx: isize, dy: isize) -> Option<Point> {
        Some(Point::new(
            self.x.checked_add_signed(dx)?,
            self.y.checked_add_signed(dy)?,
        ))
    }

    pub fn delta(&self, other: &Point) -> (usize, usize) {
        (self.x.abs_diff(other.x), self.y.abs_diff(other.y))
    }

    /// The up to four cardinal neighbours (north, east, south, west).
    pub fn neumann_neighborhood(&self) -> SmallVec<[Point; N_SMALLVEC_SIZE]> {
        [(0, -1), (1, 0), (0, 1), (-1, 0)]
            .into_iter()
            .filter_map(|(dx, dy)| self.offset(dx, dy))
            .collect()
    }

    /// The up to eight neighbours, clockwise starting north.
    pub fn moore_neighborhood(&self) -> SmallVec<[Point; N_SMALLVEC_SIZE]> {
        [
            (0, -1),
            (1, -1),
            (1, 0),
            (1, 1),
            (0, 1),
            (-1, 1),
            (-1, 0),
            (-1, -1),
        ]
        .into_iter()
        .filter_map(|(dx, dy)| self.offset(dx, dy))
        .collect()
    }

    pub fn is_diagonal_to(&self, other: &Point) -> bool {
        let (dx, dy) = self.delta(other);
        dx == 1 && dy == 1
    }

    /// True if `other` is one cardinal (or, when `allow_diagonal`, diagonal) move away.
    pub fn is_adjacent(&self, other: &Point, allow_diagonal: bool) -> bool {
        match self.delta(other) {
            (1, 0) | (0, 1) => true,
            (1, 1) => allow_diagonal,
            _ => false,
        }
    }

    /// Cost of a single move between adjacent cells: 1 for cardinal moves and
    /// the square root of two for diagonal ones.
    pub fn move_cost(&self, other: &Point) -> f64 {
        if self.is_diagonal_to(other) {
            SQRT_2
        } else {
            1.0
        }
    }
}

impl Ord for Point {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.y, self.x).cmp(&(other.y, other.x))
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Set of [Point]s with constant-time membership checks. Iteration follows insertion
/// order so that repeated runs enumerate cells identically; equality ignores order.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PointSet {
    points: FxIndexSet<Point>,
}

impl PointSet {
    pub fn new() -> PointSet {
        PointSet::default()
    }
    /// Returns [true] if the point was not yet present.
    pub fn insert(&mut self, point: Point) -> bool {
        self.points.insert(point)
    }
    /// Returns [true] if the point was present.
    pub fn remove(&mut self, point: &Point) -> bool {
        self.points.shift_remove(point)
    }
    pub fn contains(&self, point: &Point) -> bool {
        self.points.contains(point)
    }
    pub fn len(&self) -> usize {
        self.points.len()
    }
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
    pub fn clear(&mut self) {
        self.points.clear();
    }
    pub fn retain<F>(&mut self, keep: F)
    where
        F: FnMut(&Point) -> bool,
    {
        self.points.retain(keep);
    }
    pub fn iter(&self) -> impl Iterator<Item = &Point> {
        self.points.iter()
    }
}

impl PartialEq for PointSet {
    fn eq(&self, other: &Self) -> bool {
        // IndexSet equality is already order-insensitive
        self.points == other.points
    }
}

impl Eq for PointSet {}

impl FromIterator<Point> for PointSet {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        PointSet {
            points: iter.into_iter().collect(),
        }
    }
}

impl Extend<Point> for PointSet {
    fn extend<I: IntoIterator<Item = Point>>(&mut self, iter: I) {
        self.points.extend(iter);
    }
}

impl<'a> IntoIterator for &'a PointSet {
    type Item = &'a Point;
    type IntoIter = indexmap::set::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
