use astar_stepper::driver::{self, Command};
use astar_stepper::{SearchGrid, SearchState};
use grid_util::point::Point;

// Same search as simple_8, but with a 4-neighborhood and the matching
// Euclidean metric: the path has to walk around the obstacle instead of
// cutting the corner.

fn main() {
    let mut grid = SearchGrid::new(3, 3, Point::new(0, 0), Point::new(2, 2));
    grid.allow_diagonal_move = false;
    grid.set_wall(Point::new(1, 1));
    grid.generate_components();
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
