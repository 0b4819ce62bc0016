//! Frame-driven control of a [SearchGrid]: exactly one unit of work per
//! host tick, plus the mapping from toolbar tools and commands onto engine
//! operations.

use crate::search_grid::{SearchGrid, SearchState};
use grid_util::point::Point;
use log::info;

/// Editing tool selected in the host toolbar. Tool selection itself has no
/// engine effect; it only decides which mutation hook a click routes to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tool {
    Start,
    Target,
    Wall,
    Erase,
}

/// Discrete toolbar command mapped onto an engine operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Play,
    Pause,
    Reset,
    Clear,
}

/// What a single tick did, so hosts can decide what to redraw.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickAction {
    /// One node of the finished path was revealed.
    Revealed(Point),
    /// One A* expansion was performed.
    Expanded,
    /// Nothing to do: the grid is idle or finished.
    Idle,
}

/// Advances the search by exactly one unit of work. Draining a finished
/// path takes priority over expansion, which guarantees the frontier
/// animation has fully completed before the path reveal begins and that
/// reveal and expansion never interleave.
pub fn tick(grid: &mut SearchGrid) -> TickAction {
    if let Some(point) = grid.reveal_next() {
        TickAction::Revealed(point)
    } else if grid.state == SearchState::Running {
        grid.step();
        TickAction::Expanded
    } else {
        TickAction::Idle
    }
}

/// Applies a toolbar command. Play refreshes the component index so
/// reachability queries reflect the walls painted since the last run.
pub fn apply_command(grid: &mut SearchGrid, command: Command) {
    match command {
        Command::Play => {
            grid.update();
            if !grid.target_reachable() {
                info!("target is not reachable from the start");
            }
            grid.state = SearchState::Running;
        }
        Command::Pause => grid.state = SearchState::Idle,
        Command::Reset => grid.reset(),
        Command::Clear => grid.clear(),
    }
}

/// Routes a click at a grid position through the mutation hook selected by
/// the active tool. Invalid targets are ignored by the hooks themselves.
pub fn apply_tool(grid: &mut SearchGrid, tool: Tool, point: Point) {
    match tool {
        Tool::Start => grid.move_start(point),
        Tool::Target => grid.move_target(point),
        Tool::Wall => grid.set_wall(point),
        Tool::Erase => grid.clear_wall(point),
    }
}
