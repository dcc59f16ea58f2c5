//! Live state of an incremental A* run. The open set, the parent links and the g-scores
//! follow the layout of
//! [pathfinding's astar function](https://docs.rs/pathfinding/latest/pathfinding/directed/astar/index.html):
//! every node ever reached gets a slot in an insertion-ordered map holding its parent's
//! slot index and its best known cost, and the heap refers to nodes by slot.
use fxhash::FxBuildHasher;
use indexmap::map::Entry::{Occupied, Vacant};
use indexmap::IndexMap;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::geometry::{Point, PointSet};

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Parent slot of the start node.
const NO_PARENT: usize = usize::MAX;

/// Where a run is in its lifecycle. [Failed](SearchStatus::Failed) is an ordinary outcome
/// meaning the goal cannot be reached, not an error.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchStatus {
    #[default]
    Unstarted,
    Running,
    Succeeded,
    Failed,
}

impl SearchStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, SearchStatus::Succeeded | SearchStatus::Failed)
    }
}

struct SmallestCostHolder {
    estimated_cost: f64,
    heuristic: f64,
    cost: f64,
    sequence: u64,
    index: usize,
}

impl Eq for SmallestCostHolder {}

impl PartialEq for SmallestCostHolder {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl PartialOrd for SmallestCostHolder {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SmallestCostHolder {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap, so every comparison is reversed: lowest estimated
        // cost first, then lowest heuristic, then whichever was pushed earliest
        other
            .estimated_cost
            .total_cmp(&self.estimated_cost)
            .then_with(|| other.heuristic.total_cmp(&self.heuristic))
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

/// A node taken off the open set by [SearchState::pop].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Expansion {
    pub point: Point,
    pub cost: f64,
}

#[derive(Default)]
pub struct SearchState {
    status: SearchStatus,
    to_see: BinaryHeap<SmallestCostHolder>,
    /// g-score and predecessor slot for every node reached so far.
    parents: FxIndexMap<Point, (usize, f64)>,
    closed: PointSet,
    frontier: Option<usize>,
    sequence: u64,
}

impl SearchState {
    pub fn new() -> SearchState {
        SearchState::default()
    }

    pub fn status(&self) -> SearchStatus {
        self.status
    }

    pub fn set_status(&mut self, status: SearchStatus) {
        self.status = status;
    }

    /// Drops everything and goes back to [SearchStatus::Unstarted].
    pub fn clear(&mut self) {
        self.status = SearchStatus::Unstarted;
        self.to_see.clear();
        self.parents.clear();
        self.closed.clear();
        self.frontier = None;
        self.sequence = 0;
    }

    /// Puts the start node in the open set with a cost of zero.
    pub fn seed(&mut self, start: Point, heuristic: f64) {
        let (index, _) = self.parents.insert_full(start, (NO_PARENT, 0.0));
        self.push(index, 0.0, heuristic);
    }

    fn push(&mut self, index: usize, cost: f64, heuristic: f64) {
        self.to_see.push(SmallestCostHolder {
            estimated_cost: cost + heuristic,
            heuristic,
            cost,
            sequence: self.sequence,
            index,
        });
        self.sequence += 1;
    }

    /// Takes the most promising open node, moves it to the closed set and makes it the
    /// frontier. Returns [None] once no open node is left.
    pub fn pop(&mut self) -> Option<Expansion> {
        while let Some(SmallestCostHolder { cost, index, .. }) = self.to_see.pop() {
            let Some((&point, &(_, best))) = self.parents.get_index(index) else {
                continue;
            };
            // A node is pushed again whenever a cheaper way to it is found, so older
            // entries for it are outdated and skipped here.
            if cost > best || self.closed.contains(&point) {
                continue;
            }
            self.closed.insert(point);
            self.frontier = Some(index);
            return Some(Expansion { point, cost });
        }
        None
    }

    /// Records `successor` as reached from the current frontier at `cost`, keeping it
    /// only if it is new or cheaper than what was known. Returns whether it was updated.
    pub fn relax(&mut self, successor: Point, cost: f64, heuristic: f64) -> bool {
        let Some(parent) = self.frontier else {
            return false;
        };
        if self.closed.contains(&successor) {
            return false;
        }
        let index = match self.parents.entry(successor) {
            Vacant(e) => {
                let n = e.index();
                e.insert((parent, cost));
                n
            }
            Occupied(mut e) => {
                if e.get().1 > cost {
                    e.insert((parent, cost));
                    e.index()
                } else {
                    return false;
                }
            }
        };
        self.push(index, cost, heuristic);
        true
    }

    /// Number of nodes currently waiting in the open set.
    pub fn open_len(&self) -> usize {
        self.parents
            .iter()
            .filter(|(point, _)| !self.closed.contains(point))
            .count()
    }

    pub fn closed(&self) -> &PointSet {
        &self.closed
    }

    pub fn frontier(&self) -> Option<Point> {
        self.frontier
            .and_then(|index| self.parents.get_index(index))
            .map(|(point, _)| *point)
    }

    /// Best known cost from the start to `point`, if it has been reached.
    pub fn g_score(&self, point: &Point) -> Option<f64> {
        self.parents.get(point).map(|&(_, cost)| cost)
    }

    pub fn came_from(&self, point: &Point) -> Option<Point> {
        let &(parent, _) = self.parents.get(point)?;
        self.parents.get_index(parent).map(|(p, _)| *p)
    }

    /// Walks the parent links from the frontier back to the start and returns the
    /// chain in start-to-frontier order.
    pub fn frontier_path(&self) -> Vec<Point> {
        let mut path: Vec<Point> = std::iter::successors(self.frontier, |&i| {
            self.parents
                .get_index(i)
                .map(|(_, &(parent, _))| parent)
                .filter(|&parent| parent != NO_PARENT)
        })
        .filter_map(|i| self.parents.get_index(i).map(|(point, _)| *point))
        .collect();
        path.reverse();
        path
    }
}
