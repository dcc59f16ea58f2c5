use log::{debug, info, warn};

use crate::error::ConfigError;
use crate::geometry::Point;
use crate::heuristic::Heuristic;
use crate::pathing_grid::GridConfig;
use crate::search_state::{SearchState, SearchStatus};
use crate::snapshot::Snapshot;

/// [PathFinder] runs A* on a [GridConfig] one expansion at a time.
///
/// The typical cycle is: configure while [Unstarted](SearchStatus::Unstarted), call
/// [init](Self::init), then call [step](Self::step) at whatever pace suits the caller and
/// read a [snapshot](Self::snapshot) after each call until the status is terminal.
/// Configuration edits made after [init](Self::init) are not applied to the running
/// search; call [reinitialize](Self::reinitialize) before starting over. Resizing is the
/// exception and always resets the search.
#[derive(Default)]
pub struct PathFinder {
    grid: GridConfig,
    heuristic: Heuristic,
    state: SearchState,
}

impl PathFinder {
    pub fn new(grid: GridConfig, heuristic: Heuristic) -> PathFinder {
        PathFinder {
            grid,
            heuristic,
            state: SearchState::new(),
        }
    }

    pub fn config(&self) -> &GridConfig {
        &self.grid
    }
    pub fn status(&self) -> SearchStatus {
        self.state.status()
    }
    pub fn size(&self) -> (usize, usize) {
        self.grid.size()
    }
    pub fn start(&self) -> Point {
        self.grid.start()
    }
    pub fn goal(&self) -> Point {
        self.grid.goal()
    }
    pub fn heuristic(&self) -> Heuristic {
        self.heuristic
    }
    pub fn allow_diagonal(&self) -> bool {
        self.grid.allow_diagonal()
    }
    pub fn is_obstacle(&self, point: &Point) -> bool {
        self.grid.is_obstacle(point)
    }
    /// Number of nodes expanded so far.
    pub fn expanded_count(&self) -> usize {
        self.state.closed().len()
    }
    /// Number of nodes waiting to be expanded.
    pub fn open_len(&self) -> usize {
        self.state.open_len()
    }
    /// Best known cost from the start to `point` in the current run.
    pub fn g_score(&self, point: &Point) -> Option<f64> {
        self.state.g_score(point)
    }

    /// Changes the dimensions and resets the search, see [GridConfig::set_size].
    pub fn set_size(&mut self, width: usize, height: usize) -> Result<(), ConfigError> {
        self.grid.set_size(width, height).inspect_err(|e| {
            warn!("Rejected resize: {}", e);
        })?;
        self.reinitialize();
        Ok(())
    }

    pub fn add_obstacle(&mut self, point: Point) -> Result<(), ConfigError> {
        self.grid.add_obstacle(point).inspect_err(|e| {
            warn!("Rejected obstacle: {}", e);
        })
    }

    pub fn remove_obstacle(&mut self, point: &Point) -> bool {
        self.grid.remove_obstacle(point)
    }

    pub fn toggle_obstacle(&mut self, point: Point) -> Result<bool, ConfigError> {
        self.grid.toggle_obstacle(point).inspect_err(|e| {
            warn!("Rejected obstacle: {}", e);
        })
    }

    pub fn clear_obstacles(&mut self) {
        self.grid.clear_obstacles();
    }

    pub fn set_start(&mut self, point: Point) -> Result<(), ConfigError> {
        self.grid.set_start(point).inspect_err(|e| {
            warn!("Rejected start: {}", e);
        })
    }

    pub fn set_goal(&mut self, point: Point) -> Result<(), ConfigError> {
        self.grid.set_goal(point).inspect_err(|e| {
            warn!("Rejected goal: {}", e);
        })
    }

    pub fn set_diagonal_allowed(&mut self, allow_diagonal: bool) {
        self.grid.set_diagonal_allowed(allow_diagonal);
    }

    /// Takes effect at the next [init](Self::init); scores already computed are kept.
    pub fn set_heuristic(&mut self, heuristic: Heuristic) {
        self.heuristic = heuristic;
    }

    /// Seeds the open set with the start node. Only has an effect while
    /// [Unstarted](SearchStatus::Unstarted); no node is expanded yet.
    pub fn init(&mut self) -> SearchStatus {
        if self.state.status() != SearchStatus::Unstarted {
            warn!("init ignored, search is {:?}", self.state.status());
            return self.state.status();
        }
        let start = self.grid.start();
        let goal = self.grid.goal();
        if !self.heuristic.is_admissible(self.grid.allow_diagonal()) {
            debug!(
                "{} heuristic overestimates with diagonal moves, paths may be suboptimal",
                self.heuristic
            );
        }
        info!(
            "Starting search from {} to {} on a {}x{} grid ({} heuristic, diagonal: {})",
            start,
            goal,
            self.grid.width(),
            self.grid.height(),
            self.heuristic,
            self.grid.allow_diagonal()
        );
        self.state
            .seed(start, self.heuristic.estimate(&start, &goal));
        self.state.set_status(SearchStatus::Running);
        SearchStatus::Running
    }

    /// Expands exactly one node. Does nothing unless the search is
    /// [Running](SearchStatus::Running).
    pub fn step(&mut self) -> SearchStatus {
        if self.state.status() != SearchStatus::Running {
            return self.state.status();
        }
        let Some(current) = self.state.pop() else {
            info!(
                "Open set exhausted after {} expansions, {} is unreachable",
                self.expanded_count(),
                self.grid.goal()
            );
            self.state.set_status(SearchStatus::Failed);
            return SearchStatus::Failed;
        };
        let goal = self.grid.goal();
        if current.point == goal {
            info!(
                "Reached {} with cost {:.3} after {} expansions",
                goal,
                current.cost,
                self.expanded_count()
            );
            self.state.set_status(SearchStatus::Succeeded);
            return SearchStatus::Succeeded;
        }
        debug!("Expanding {} (g = {:.3})", current.point, current.cost);
        for (successor, move_cost) in self.grid.neighborhood_points_and_cost(&current.point) {
            let h = self.heuristic.estimate(&successor, &goal);
            self.state.relax(successor, current.cost + move_cost, h);
        }
        SearchStatus::Running
    }

    /// One tick of a render loop. The first tick initializes the search and expands two
    /// nodes, so the start and the first cell beyond it show up together; later ticks
    /// expand one node each.
    pub fn advance(&mut self) -> SearchStatus {
        if self.state.status() == SearchStatus::Unstarted {
            self.init();
            self.step();
        }
        self.step()
    }

    /// Steps until the search reaches a terminal status, initializing it first if it
    /// has not been started.
    pub fn run_to_completion(&mut self) -> SearchStatus {
        if self.state.status() == SearchStatus::Unstarted {
            self.init();
        }
        while self.state.status() == SearchStatus::Running {
            self.step();
        }
        self.state.status()
    }

    /// Throws the current search away. The grid and heuristic are kept.
    pub fn reinitialize(&mut self) {
        if self.state.status() != SearchStatus::Unstarted {
            info!("Resetting search ({:?})", self.state.status());
        }
        self.state.clear();
    }

    pub fn snapshot(&self) -> Snapshot {
        let current_path = match self.state.status() {
            SearchStatus::Failed => Vec::new(),
            _ => self.state.frontier_path(),
        };
        Snapshot {
            start: self.grid.start(),
            goal: self.grid.goal(),
            current_path,
            seen_nodes: self.state.closed().clone(),
            obstacles: self.grid.obstacles().clone(),
            status: self.state.status(),
        }
    }
}
