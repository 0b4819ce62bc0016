use crate::{C, D, E};
use grid_util::point::Point;

/// Distance function used for both edge costs and the heuristic. Edge cost
/// and heuristic must agree for the search to stay admissible, so the
/// metric is derived from the neighborhood configuration rather than
/// chosen independently.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Metric {
    /// Integer octile distance: [C] per cardinal step, [D] per diagonal
    /// step. Paired with the 8-directional neighborhood.
    Octile,
    /// Straight-line distance truncated to an integer and scaled by [C].
    /// Paired with the 4-directional neighborhood.
    Euclidean,
}

impl Metric {
    /// The metric matching a neighborhood configuration.
    pub fn for_neighborhood(allow_diagonal_move: bool) -> Metric {
        if allow_diagonal_move {
            Metric::Octile
        } else {
            Metric::Euclidean
        }
    }

    pub fn distance(&self, p1: &Point, p2: &Point) -> i32 {
        let delta_x = (p1.x - p2.x).abs();
        let delta_y = (p1.y - p2.y).abs();
        match self {
            // Formula from https://github.com/riscy/a_star_on_grids
            // to efficiently compute the cost of a path taking the maximal
            // amount of diagonal steps before going straight
            Metric::Octile => (E * (delta_x - delta_y).abs() + D * (delta_x + delta_y)) / 2,
            Metric::Euclidean => {
                (((delta_x * delta_x + delta_y * delta_y) as f64).sqrt() as i32) * C
            }
        }
    }
}
