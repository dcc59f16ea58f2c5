use itertools::Itertools;

use crate::geometry::{Point, PointSet};
use crate::search_state::SearchStatus;

/// How a collaborator should draw a single cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellKind {
    Free,
    Seen,
    Obstacle,
    Path,
    Start,
    Goal,
}

/// Owned copy of the engine's state at one moment, detached from the engine so that
/// nothing read from it can change the search.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot {
    pub start: Point,
    pub goal: Point,
    /// Start to frontier (or to goal once the search succeeded). Empty before the first
    /// expansion and when the goal is unreachable.
    pub current_path: Vec<Point>,
    /// Every expanded node.
    pub seen_nodes: PointSet,
    pub obstacles: PointSet,
    pub status: SearchStatus,
}

impl Snapshot {
    /// Classifies a cell. Endpoints win over the path, the path over seen cells and seen
    /// cells over obstacles.
    pub fn cell_kind(&self, point: &Point) -> CellKind {
        if *point == self.start {
            CellKind::Start
        } else if *point == self.goal {
            CellKind::Goal
        } else if self.current_path.contains(point) {
            CellKind::Path
        } else if self.seen_nodes.contains(point) {
            CellKind::Seen
        } else if self.obstacles.contains(point) {
            CellKind::Obstacle
        } else {
            CellKind::Free
        }
    }

    /// Sum of the move costs along [current_path](Self::current_path).
    pub fn path_cost(&self) -> f64 {
        self.current_path
            .iter()
            .tuple_windows()
            .map(|(a, b)| a.move_cost(b))
            .sum()
    }

    /// Number of moves along [current_path](Self::current_path).
    pub fn path_len(&self) -> usize {
        self.current_path.len().saturating_sub(1)
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_terminal()
    }
}
