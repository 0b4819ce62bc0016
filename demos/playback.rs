use astar_stepper::driver::{self, Command, TickAction, Tool};
use astar_stepper::SearchGrid;
use grid_util::point::Point;

// Replays a full search frame by frame the way a rendering host would,
// printing the grid after every tick: the frontier floods first, then the
// path is revealed one cell at a time.

fn main() {
    let mut grid = SearchGrid::new(8, 6, Point::new(0, 0), Point::new(7, 5));
    for y in 0..5 {
        driver::apply_tool(&mut grid, Tool::Wall, Point::new(4, y));
    }
    driver::apply_command(&mut grid, Command::Play);
    let mut frame = 0;
    loop {
        let action = driver::tick(&mut grid);
        if action == TickAction::Idle {
            break;
        }
        frame += 1;
        println!("frame {frame} ({action:?}):");
        println!("{}", grid);
    }
}
