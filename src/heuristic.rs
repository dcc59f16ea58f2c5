use core::fmt;
use std::str::FromStr;

use crate::{error::ConfigError, geometry::Point, SQRT_2};

/// Estimate of the remaining cost between two cells. Which variant is admissible
/// depends on the movement policy, see [Heuristic::is_admissible]; the engine never
/// checks the pairing.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Heuristic {
    /// Straight-line distance.
    Euclidean,
    /// `dx + dy`, overestimates once diagonal moves are allowed.
    #[default]
    Manhattan,
    /// `max(dx, dy)`.
    Chebyshev,
    /// `max(dx, dy) + (√2 - 1) * min(dx, dy)`, exact on an empty 8-grid.
    Octile,
}

impl Heuristic {
    /// Every variant, in the order a picker would list them.
    pub const ALL: [Heuristic; 4] = [
        Heuristic::Euclidean,
        Heuristic::Manhattan,
        Heuristic::Chebyshev,
        Heuristic::Octile,
    ];

    pub fn estimate(&self, a: &Point, b: &Point) -> f64 {
        let (dx, dy) = a.delta(b);
        let (dx, dy) = (dx as f64, dy as f64);
        match self {
            Heuristic::Euclidean => dx.hypot(dy),
            Heuristic::Manhattan => dx + dy,
            Heuristic::Chebyshev => dx.max(dy),
            Heuristic::Octile => dx.max(dy) + (SQRT_2 - 1.0) * dx.min(dy),
        }
    }

    /// Whether the estimate never exceeds the true remaining cost under the given
    /// movement policy, with cardinal moves costing 1 and diagonal moves √2.
    pub fn is_admissible(&self, allow_diagonal: bool) -> bool {
        match self {
            Heuristic::Manhattan => !allow_diagonal,
            Heuristic::Euclidean | Heuristic::Chebyshev | Heuristic::Octile => true,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Heuristic::Euclidean => "euclidean",
            Heuristic::Manhattan => "manhattan",
            Heuristic::Chebyshev => "chebyshev",
            Heuristic::Octile => "octile",
        }
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Heuristic {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "euclidean" | "euclidian" => Ok(Heuristic::Euclidean),
            "manhattan" => Ok(Heuristic::Manhattan),
            "chebyshev" => Ok(Heuristic::Chebyshev),
            "octile" => Ok(Heuristic::Octile),
            _ => Err(ConfigError::UnknownHeuristic(s.to_owned())),
        }
    }
}
