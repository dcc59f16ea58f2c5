//! # stepwise_pathfinding
//!
//! An [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) search on a uniform grid
//! that is advanced one node expansion at a time. After every
//! [step](PathFinder::step) the caller can take a [Snapshot] of the search (expanded
//! cells, best path to the most recently expanded cell, status) to draw it, which is
//! what makes the engine suitable for interactive visualization. Cardinal moves cost
//! 1 and diagonal moves, when enabled, cost √2.
//!
//! ```
//! use stepwise_pathfinding::{GridConfig, Heuristic, PathFinder, Point, SearchStatus};
//!
//! let grid = GridConfig::new(5, 5, Point::new(0, 0), Point::new(4, 4)).unwrap();
//! let mut path_finder = PathFinder::new(grid, Heuristic::Manhattan);
//! path_finder.add_obstacle(Point::new(2, 2)).unwrap();
//! path_finder.init();
//! while path_finder.step() == SearchStatus::Running {
//!     let snapshot = path_finder.snapshot();
//!     assert!(!snapshot.current_path.is_empty());
//! }
//! assert_eq!(path_finder.status(), SearchStatus::Succeeded);
//! assert_eq!(path_finder.snapshot().path_len(), 8);
//! ```
pub mod error;
pub mod geometry;
pub mod heuristic;
pub mod path_finder;
pub mod pathing_grid;
pub mod search_state;
pub mod snapshot;

pub use error::ConfigError;
pub use geometry::{Point, PointSet};
pub use heuristic::Heuristic;
pub use path_finder::PathFinder;
pub use pathing_grid::GridConfig;
pub use search_state::SearchStatus;
pub use snapshot::{CellKind, Snapshot};

/// Cost of a diagonal move.
pub const SQRT_2: f64 = std::f64::consts::SQRT_2;

/// Inline capacity of neighbour lists, enough for a full Moore neighbourhood.
pub const N_SMALLVEC_SIZE: usize = 8;
