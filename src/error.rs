use core::fmt;

use crate::geometry::Point;

/// Rejected configuration edit. The grid is left exactly as it was before the call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Both dimensions must be at least one and the grid must fit two distinct endpoints.
    InvalidSize { width: usize, height: usize },
    /// Point lies outside `[0, width) x [0, height)`.
    OutOfBounds {
        point: Point,
        width: usize,
        height: usize,
    },
    /// Start and goal would end up on the same cell.
    EndpointCollision(Point),
    /// Obstacles cannot be placed on the start or goal.
    ObstacleOnEndpoint(Point),
    UnknownHeuristic(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConfigError::InvalidSize { width, height } => {
                write!(f, "invalid grid size {}x{}", width, height)
            }
            ConfigError::OutOfBounds {
                point,
                width,
                height,
            } => write!(f, "{} is outside the {}x{} grid", point, width, height),
            ConfigError::EndpointCollision(p) => {
                write!(f, "start and goal would both be at {}", p)
            }
            ConfigError::ObstacleOnEndpoint(p) => {
                write!(f, "cannot place an obstacle on endpoint {}", p)
            }
            ConfigError::UnknownHeuristic(name) => write!(f, "unknown heuristic '{}'", name),
        }
    }
}

impl std::error::Error for ConfigError {}
