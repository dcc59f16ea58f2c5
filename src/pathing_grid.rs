use core::fmt;
use log::{debug, warn};
use smallvec::SmallVec;

use crate::error::ConfigError;
use crate::geometry::{Point, PointSet};
use crate::N_SMALLVEC_SIZE;

/// [GridConfig] holds everything a search runs on: the dimensions, the blocked cells,
/// the two endpoints and the movement policy. It is plain data; the mutators validate
/// their input and leave the configuration untouched when they return an error.
///
/// Invariant: `start != goal`, both are in bounds, neither is an obstacle, and every
/// obstacle is in bounds.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "GridConfigData"))]
pub struct GridConfig {
    width: usize,
    height: usize,
    obstacles: PointSet,
    start: Point,
    goal: Point,
    allow_diagonal: bool,
}

/// Unchecked form of [GridConfig] as it appears on the wire.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct GridConfigData {
    width: usize,
    height: usize,
    obstacles: PointSet,
    start: Point,
    goal: Point,
    allow_diagonal: bool,
}

#[cfg(feature = "serde")]
impl TryFrom<GridConfigData> for GridConfig {
    type Error = ConfigError;

    fn try_from(data: GridConfigData) -> Result<Self, Self::Error> {
        let mut config = GridConfig::new(data.width, data.height, data.start, data.goal)?;
        config.allow_diagonal = data.allow_diagonal;
        for point in &data.obstacles {
            config.check_in_bounds(*point)?;
            config.add_obstacle(*point)?;
        }
        Ok(config)
    }
}

impl Default for GridConfig {
    fn default() -> GridConfig {
        GridConfig {
            width: 30,
            height: 20,
            obstacles: PointSet::new(),
            start: Point::new(0, 0),
            goal: Point::new(10, 10),
            allow_diagonal: false,
        }
    }
}

fn check_size(width: usize, height: usize) -> Result<(), ConfigError> {
    if width == 0 || height == 0 || (width == 1 && height == 1) {
        Err(ConfigError::InvalidSize { width, height })
    } else {
        Ok(())
    }
}

impl GridConfig {
    /// Creates an obstacle-free grid with 4-directional movement.
    pub fn new(
        width: usize,
        height: usize,
        start: Point,
        goal: Point,
    ) -> Result<GridConfig, ConfigError> {
        check_size(width, height)?;
        let config = GridConfig {
            width,
            height,
            obstacles: PointSet::new(),
            start,
            goal,
            allow_diagonal: false,
        };
        config.check_in_bounds(start)?;
        config.check_in_bounds(goal)?;
        if start == goal {
            return Err(ConfigError::EndpointCollision(start));
        }
        Ok(config)
    }

    pub fn width(&self) -> usize {
        self.width
    }
    pub fn height(&self) -> usize {
        self.height
    }
    pub fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }
    pub fn start(&self) -> Point {
        self.start
    }
    pub fn goal(&self) -> Point {
        self.goal
    }
    pub fn obstacles(&self) -> &PointSet {
        &self.obstacles
    }
    pub fn allow_diagonal(&self) -> bool {
        self.allow_diagonal
    }

    pub fn in_bounds(&self, point: &Point) -> bool {
        point.x < self.width && point.y < self.height
    }
    pub fn is_obstacle(&self, point: &Point) -> bool {
        self.obstacles.contains(point)
    }
    pub fn can_move_to(&self, point: &Point) -> bool {
        self.in_bounds(point) && !self.is_obstacle(point)
    }

    fn check_in_bounds(&self, point: Point) -> Result<(), ConfigError> {
        if self.in_bounds(&point) {
            Ok(())
        } else {
            Err(ConfigError::OutOfBounds {
                point,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Free in-bound neighbours of `point` under the current movement policy.
    pub fn neighborhood_points(&self, point: &Point) -> SmallVec<[Point; N_SMALLVEC_SIZE]> {
        let mut neighborhood = if self.allow_diagonal {
            point.moore_neighborhood()
        } else {
            point.neumann_neighborhood()
        };
        neighborhood.retain(|p| self.can_move_to(p));
        neighborhood
    }

    pub fn neighborhood_points_and_cost(
        &self,
        pos: &Point,
    ) -> SmallVec<[(Point, f64); N_SMALLVEC_SIZE]> {
        self.neighborhood_points(pos)
            .into_iter()
            .map(|p| (p, pos.move_cost(&p)))
            .collect()
    }

    /// Resizes the grid. Obstacles that fall outside the new bounds are dropped and
    /// endpoints are clamped onto the last row/column, clearing any obstacle they land
    /// on. The call is rejected if clamping would put start and goal on the same cell.
    pub fn set_size(&mut self, width: usize, height: usize) -> Result<(), ConfigError> {
        check_size(width, height)?;
        let clamp = |p: Point| Point::new(p.x.min(width - 1), p.y.min(height - 1));
        let start = clamp(self.start);
        let goal = clamp(self.goal);
        if start == goal {
            warn!(
                "Resize to {}x{} rejected: start and goal would collide at {}",
                width, height, start
            );
            return Err(ConfigError::EndpointCollision(start));
        }
        self.width = width;
        self.height = height;
        self.start = start;
        self.goal = goal;
        let before = self.obstacles.len();
        self.obstacles
            .retain(|p| p.x < width && p.y < height && *p != start && *p != goal);
        debug!(
            "Resized grid to {}x{}, dropped {} obstacles",
            width,
            height,
            before - self.obstacles.len()
        );
        Ok(())
    }

    /// Marks a cell as blocked. Points outside the grid are ignored.
    pub fn add_obstacle(&mut self, point: Point) -> Result<(), ConfigError> {
        if point == self.start || point == self.goal {
            return Err(ConfigError::ObstacleOnEndpoint(point));
        }
        if self.in_bounds(&point) {
            self.obstacles.insert(point);
        }
        Ok(())
    }

    /// Returns [true] if there was an obstacle to remove.
    pub fn remove_obstacle(&mut self, point: &Point) -> bool {
        self.obstacles.remove(point)
    }

    /// Flips a cell between free and blocked and returns whether it is now blocked.
    pub fn toggle_obstacle(&mut self, point: Point) -> Result<bool, ConfigError> {
        if self.remove_obstacle(&point) {
            Ok(false)
        } else {
            self.add_obstacle(point)?;
            Ok(self.is_obstacle(&point))
        }
    }

    pub fn clear_obstacles(&mut self) {
        self.obstacles.clear();
    }

    pub fn set_start(&mut self, point: Point) -> Result<(), ConfigError> {
        self.check_in_bounds(point)?;
        if point == self.goal {
            return Err(ConfigError::EndpointCollision(point));
        }
        self.obstacles.remove(&point);
        self.start = point;
        Ok(())
    }

    pub fn set_goal(&mut self, point: Point) -> Result<(), ConfigError> {
        self.check_in_bounds(point)?;
        if point == self.start {
            return Err(ConfigError::EndpointCollision(point));
        }
        self.obstacles.remove(&point);
        self.goal = point;
        Ok(())
    }

    pub fn set_diagonal_allowed(&mut self, allow_diagonal: bool) {
        self.allow_diagonal = allow_diagonal;
    }
}

impl fmt::Display for GridConfig {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for y in 0..self.height {
            let row = (0..self.width)
                .map(|x| {
                    let p = Point::new(x, y);
                    if p == self.start {
                        'S'
                    } else if p == self.goal {
                        'G'
                    } else if self.is_obstacle(&p) {
                        '#'
                    } else {
                        '.'
                    }
                })
                .collect::<String>();
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}
