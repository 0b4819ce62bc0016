//! # astar_stepper
//!
//! An incremental [A*](https://en.wikipedia.org/wiki/A*_search_algorithm)
//! engine for grid-based pathfinding visualizers. A host paints walls and
//! endpoints on a [SearchGrid], then advances the search one expansion per
//! frame with [driver::tick], animating the open/closed frontier live and
//! replaying the reconstructed path one cell per tick. Pre-computes
//! [connected components](https://en.wikipedia.org/wiki/Component_(graph_theory))
//! so hosts can flag an unreachable target without waiting for the frontier
//! to exhaust itself.
//!
//! The engine owns no rendering state beyond a per-cell [NodeKind] tag;
//! window setup, hit-testing and drawing are left to the host.
pub mod driver;
pub mod metric;
pub mod node;
pub mod search_grid;

pub use metric::Metric;
pub use node::{Node, NodeKind, INFINITY};
pub use search_grid::{SearchGrid, SearchState};

/// Cost of a cardinal (straight) step.
pub const C: i32 = 10;
/// Cost of a diagonal step.
pub const D: i32 = 14;
/// Octile distance helper constant, equal to 2 * C - D.
pub const E: i32 = 6;
/// Upper bound on the size of a cell neighborhood.
pub const N_SMALLVEC_SIZE: usize = 8;
