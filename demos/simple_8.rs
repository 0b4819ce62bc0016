use astar_stepper::driver::{self, Command};
use astar_stepper::{SearchGrid, SearchState};
use grid_util::point::Point;

// In this example a path is found on a 3x3 grid with shape
//  ___
// |S  |
// | # |
// |  T|
//  ___
// where
// - # marks an obstacle
// - S marks the start
// - T marks the target
//
// Nodes have an 8-neighborhood

fn main() {
    let mut grid = SearchGrid::new(3, 3, Point::new(0, 0), Point::new(2, 2));
    grid.set_wall(Point::new(1, 1));
    driver::apply_command(&mut grid, Command::Play);
    while grid.state == SearchState::Running && !grid.path_pending() {
        driver::tick(&mut grid);
    }
    println!("{}", grid);
    println!("Path:");
    for point in grid.path_points().iter().rev() {
        println!("{:?}", point);
    }
}
