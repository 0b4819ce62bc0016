use crate::metric::Metric;
use crate::node::{Node, NodeKind};
use crate::N_SMALLVEC_SIZE;
use core::fmt;
use fxhash::FxBuildHasher;
use grid_util::point::Point;
use indexmap::IndexSet;
use log::{info, warn};
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

type FxIndexSet<K> = IndexSet<K, FxBuildHasher>;

/// Neighbor probe order for the two adjacency configurations. The order is
/// fixed: together with insertion-order iteration of the open set it makes
/// tie-breaking between equal-cost nodes deterministic.
const MOORE_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];
const NEUMANN_OFFSETS: [(i32, i32); 4] = [(0, -1), (-1, 0), (1, 0), (0, 1)];

/// Phase of the search state machine. Hosts flip between Idle and Running;
/// the engine moves to Finished on its own when the target is revealed or
/// the frontier is exhausted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchState {
    Idle,
    Running,
    Finished,
}

/// A fixed-size grid of [Node]s plus the working state of an incremental
/// A* search over it.
///
/// The search advances one expansion per [step](Self::step) call so that a
/// rendering host can animate the frontier. Cells live in a flat row-major
/// arena; origin back-references are arena indices. Mutation hooks
/// ([set_wall](Self::set_wall) and friends) are meant to be called while
/// the search is not running; the engine does not lock or reject
/// out-of-order calls, the host serializes them.
#[derive(Clone, Debug)]
pub struct SearchGrid {
    width: usize,
    height: usize,
    nodes: Vec<Node>,
    start: usize,
    target: usize,
    /// Construction coordinates, restored by [clear](Self::clear).
    initial_start: Point,
    initial_target: Point,
    /// Selects the 8-directional neighborhood with the octile metric when
    /// true, the 4-directional neighborhood with the Euclidean metric when
    /// false.
    pub allow_diagonal_move: bool,
    pub state: SearchState,
    open: FxIndexSet<usize>,
    closed: FxIndexSet<usize>,
    current: Option<usize>,
    /// Reconstructed path in target-to-start order, drained from the back.
    path: Vec<usize>,
    pub components: UnionFind<usize>,
    pub components_dirty: bool,
}

impl SearchGrid {
    /// Creates a grid of Default nodes with the start and target placed at
    /// the given coordinates. Both must be in bounds and distinct.
    pub fn new(width: usize, height: usize, start: Point, target: Point) -> SearchGrid {
        assert!(width > 0 && height > 0, "grid dimensions must be non-zero");
        assert!(start != target, "start and target must be distinct cells");
        let mut grid = SearchGrid {
            width,
            height,
            nodes: vec![Node::default(); width * height],
            start: 0,
            target: 0,
            initial_start: start,
            initial_target: target,
            allow_diagonal_move: true,
            state: SearchState::Idle,
            open: FxIndexSet::default(),
            closed: FxIndexSet::default(),
            current: None,
            path: Vec::new(),
            components: UnionFind::new(width * height),
            components_dirty: false,
        };
        grid.place_endpoints();
        grid.generate_components();
        grid
    }

    fn place_endpoints(&mut self) {
        assert!(
            self.in_bounds(self.initial_start) && self.in_bounds(self.initial_target),
            "start and target must be in bounds"
        );
        self.start = self.get_ix_point(&self.initial_start);
        self.target = self.get_ix_point(&self.initial_target);
        self.nodes[self.start].kind = NodeKind::Start;
        self.nodes[self.target].kind = NodeKind::Target;
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn get_ix(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    fn get_ix_point(&self, point: &Point) -> usize {
        self.get_ix(point.x as usize, point.y as usize)
    }

    fn point_of(&self, ix: usize) -> Point {
        Point::new((ix % self.width) as i32, (ix / self.width) as i32)
    }

    pub fn in_bounds(&self, point: Point) -> bool {
        point.x >= 0
            && point.y >= 0
            && (point.x as usize) < self.width
            && (point.y as usize) < self.height
    }

    pub fn node_at(&self, point: Point) -> Option<&Node> {
        self.in_bounds(point)
            .then(|| &self.nodes[self.get_ix_point(&point)])
    }

    /// The kind a host should render at a position.
    pub fn kind_at(&self, point: Point) -> Option<NodeKind> {
        self.node_at(point).map(|node| node.kind)
    }

    pub fn start_point(&self) -> Point {
        self.point_of(self.start)
    }

    pub fn target_point(&self) -> Point {
        self.point_of(self.target)
    }

    /// The most recently expanded cell, if any expansion has happened.
    pub fn current_point(&self) -> Option<Point> {
        self.current.map(|ix| self.point_of(ix))
    }

    /// Cells discovered but not yet expanded, in insertion order.
    pub fn open_points(&self) -> Vec<Point> {
        self.open.iter().map(|&ix| self.point_of(ix)).collect()
    }

    /// Cells already expanded, in insertion order.
    pub fn closed_points(&self) -> Vec<Point> {
        self.closed.iter().map(|&ix| self.point_of(ix)).collect()
    }

    /// Remaining path buffer in target-to-start order. Empty until the
    /// target is reached and again once the reveal has drained it.
    pub fn path_points(&self) -> Vec<Point> {
        self.path.iter().map(|&ix| self.point_of(ix)).collect()
    }

    pub fn path_pending(&self) -> bool {
        !self.path.is_empty()
    }

    /// The metric paired with the current neighborhood configuration.
    pub fn metric(&self) -> Metric {
        Metric::for_neighborhood(self.allow_diagonal_move)
    }

    fn neighborhood(&self, point: Point) -> SmallVec<[usize; N_SMALLVEC_SIZE]> {
        let offsets: &[(i32, i32)] = if self.allow_diagonal_move {
            &MOORE_OFFSETS
        } else {
            &NEUMANN_OFFSETS
        };
        offsets
            .iter()
            .map(|&(dx, dy)| Point::new(point.x + dx, point.y + dy))
            .filter(|p| self.in_bounds(*p))
            .map(|p| self.get_ix_point(&p))
            .collect()
    }

    /// Performs one A* expansion. Hosts call this once per frame while the
    /// state is Running; [driver::tick](crate::driver::tick) does so and
    /// additionally suppresses expansion while a finished path is being
    /// revealed.
    pub fn step(&mut self) {
        if self.current.is_none() {
            self.add_to_open(self.start);
        }
        let Some(current) = self.select_current() else {
            // Frontier exhausted before the target was reached: no path
            // exists. The empty path buffer is the signal to callers.
            warn!("open set exhausted before reaching the target");
            self.state = SearchState::Finished;
            return;
        };
        self.current = Some(current);
        self.open.shift_remove(&current);
        self.add_to_closed(current);

        if current == self.target {
            self.build_path();
            return;
        }

        let current_point = self.point_of(current);
        let target_point = self.point_of(self.target);
        let metric = self.metric();
        for neighbor in self.neighborhood(current_point) {
            if self.nodes[neighbor].kind == NodeKind::Wall || self.closed.contains(&neighbor) {
                continue;
            }
            let neighbor_point = self.point_of(neighbor);
            let tentative_g =
                self.nodes[current].g_cost + metric.distance(&current_point, &neighbor_point);
            let in_open = self.open.contains(&neighbor);
            if tentative_g < self.nodes[neighbor].g_cost || !in_open {
                let node = &mut self.nodes[neighbor];
                node.g_cost = tentative_g;
                node.h_cost = metric.distance(&neighbor_point, &target_point);
                node.f_cost = node.g_cost + node.h_cost;
                node.origin = Some(current);
                if !in_open {
                    self.add_to_open(neighbor);
                }
            }
        }
    }

    /// The open node with minimal f cost, ties broken by minimal h cost,
    /// remaining ties by insertion order (first inserted wins).
    fn select_current(&self) -> Option<usize> {
        self.open.iter().copied().reduce(|best, candidate| {
            let (b, c) = (&self.nodes[best], &self.nodes[candidate]);
            if c.f_cost < b.f_cost || (c.f_cost == b.f_cost && c.h_cost < b.h_cost) {
                candidate
            } else {
                best
            }
        })
    }

    fn add_to_open(&mut self, ix: usize) {
        if !self.nodes[ix].kind.is_endpoint() {
            self.nodes[ix].kind = NodeKind::Open;
        }
        self.open.insert(ix);
    }

    fn add_to_closed(&mut self, ix: usize) {
        if !self.nodes[ix].kind.is_endpoint() {
            self.nodes[ix].kind = NodeKind::Closed;
        }
        self.closed.insert(ix);
    }

    /// Chases origin back-references from the target, collecting the path
    /// in target-to-start order. The start node itself (the one node with
    /// no origin) is excluded; [reveal_next](Self::reveal_next) drains the
    /// result from the back.
    fn build_path(&mut self) {
        let nodes = &self.nodes;
        self.path = itertools::unfold(self.current, |cursor| {
            let ix = (*cursor)?;
            *cursor = nodes[ix].origin;
            nodes[ix].origin.map(|_| ix)
        })
        .collect();
    }

    /// Pops the next path node (start-adjacent end first) and marks it as
    /// part of the revealed path. Popping the target node completes the
    /// playback and moves the state to Finished. Returns the revealed
    /// position, or None when no path is pending.
    pub fn reveal_next(&mut self) -> Option<Point> {
        let ix = self.path.pop()?;
        let node = &mut self.nodes[ix];
        if !node.kind.is_endpoint() {
            node.kind = NodeKind::Path;
        }
        if node.kind == NodeKind::Target {
            self.state = SearchState::Finished;
        }
        Some(self.point_of(ix))
    }

    /// Turns a Default cell into a Wall. Any other kind, or an
    /// out-of-bounds position, is silently ignored: the hooks tolerate
    /// tool clicks on invalid targets rather than raising errors.
    pub fn set_wall(&mut self, point: Point) {
        if !self.in_bounds(point) {
            return;
        }
        let ix = self.get_ix_point(&point);
        if self.nodes[ix].kind == NodeKind::Default {
            self.nodes[ix].kind = NodeKind::Wall;
            // A new wall may split a component in two
            self.components_dirty = true;
        }
    }

    /// Turns a Wall cell back into a Default cell.
    pub fn clear_wall(&mut self, point: Point) {
        if !self.in_bounds(point) {
            return;
        }
        let ix = self.get_ix_point(&point);
        if self.nodes[ix].kind == NodeKind::Wall {
            self.nodes[ix].kind = NodeKind::Default;
            self.union_with_neighbours(ix);
        }
    }

    /// Moves the start node to a Default or Wall cell, demoting the old
    /// start to Default. A wall at the destination is removed first.
    pub fn move_start(&mut self, point: Point) {
        if let Some(ix) = self.claim_endpoint_cell(point) {
            self.nodes[self.start].kind = NodeKind::Default;
            self.start = ix;
            self.nodes[ix].kind = NodeKind::Start;
        }
    }

    /// Moves the target node to a Default or Wall cell, demoting the old
    /// target to Default.
    pub fn move_target(&mut self, point: Point) {
        if let Some(ix) = self.claim_endpoint_cell(point) {
            self.nodes[self.target].kind = NodeKind::Default;
            self.target = ix;
            self.nodes[ix].kind = NodeKind::Target;
        }
    }

    /// Checks the endpoint-move precondition and unblocks the destination
    /// if it was a wall. Returns None if the destination is not eligible.
    fn claim_endpoint_cell(&mut self, point: Point) -> Option<usize> {
        if !self.in_bounds(point) {
            return None;
        }
        let ix = self.get_ix_point(&point);
        match self.nodes[ix].kind {
            NodeKind::Default => Some(ix),
            NodeKind::Wall => {
                self.nodes[ix].kind = NodeKind::Default;
                self.union_with_neighbours(ix);
                Some(ix)
            }
            _ => None,
        }
    }

    /// Discards all search-derived state while preserving painted walls
    /// and the current start/target placement. Leaves the grid in the
    /// Finished (idle-equivalent) state, ready for editing or a new run.
    pub fn reset(&mut self) {
        for node in &mut self.nodes {
            let kind = match node.kind {
                NodeKind::Wall => NodeKind::Wall,
                NodeKind::Start => NodeKind::Start,
                NodeKind::Target => NodeKind::Target,
                _ => NodeKind::Default,
            };
            *node = Node::new(kind);
        }
        self.open.clear();
        self.closed.clear();
        self.current = None;
        self.path.clear();
        self.state = SearchState::Finished;
    }

    /// Additionally erases walls and restores the start and target at
    /// their construction coordinates.
    pub fn clear(&mut self) {
        self.nodes.fill_with(Node::default);
        self.place_endpoints();
        self.open.clear();
        self.closed.clear();
        self.current = None;
        self.path.clear();
        self.components_dirty = true;
        self.state = SearchState::Finished;
    }

    fn blocked(&self, ix: usize) -> bool {
        self.nodes[ix].kind == NodeKind::Wall
    }

    /// Joins a newly traversable cell with its traversable neighbours.
    fn union_with_neighbours(&mut self, ix: usize) {
        let point = self.point_of(ix);
        for neighbour in self.neighborhood(point) {
            if !self.blocked(neighbour) {
                self.components.union(ix, neighbour);
            }
        }
    }

    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            self.generate_components();
        }
    }

    /// Generates a new [UnionFind] structure and links up traversable grid
    /// neighbours to the same components. Adjacency follows
    /// [allow_diagonal_move](Self::allow_diagonal_move), like the search
    /// itself.
    pub fn generate_components(&mut self) {
        info!("generating connected components");
        self.components = UnionFind::new(self.width * self.height);
        self.components_dirty = false;
        // Linking the forward half-neighborhood is enough: the backward
        // half is linked when the neighbour cell is visited.
        let forward: &[(i32, i32)] = if self.allow_diagonal_move {
            &[(1, 0), (0, 1), (1, 1), (1, -1)]
        } else {
            &[(1, 0), (0, 1)]
        };
        for y in 0..self.height as i32 {
            for x in 0..self.width as i32 {
                let point = Point::new(x, y);
                let ix = self.get_ix_point(&point);
                if self.blocked(ix) {
                    continue;
                }
                for &(dx, dy) in forward {
                    let neighbour = Point::new(x + dx, y + dy);
                    if self.in_bounds(neighbour) {
                        let n_ix = self.get_ix_point(&neighbour);
                        if !self.blocked(n_ix) {
                            self.components.union(ix, n_ix);
                        }
                    }
                }
            }
        }
    }

    /// Checks if two positions are on the same component. Out-of-bounds
    /// positions are never reachable. Call [update](Self::update) first if
    /// walls changed since the last generation.
    pub fn reachable(&self, a: &Point, b: &Point) -> bool {
        !self.unreachable(a, b)
    }

    /// Checks if two positions are on different components.
    pub fn unreachable(&self, a: &Point, b: &Point) -> bool {
        if self.in_bounds(*a) && self.in_bounds(*b) {
            !self
                .components
                .equiv(self.get_ix_point(a), self.get_ix_point(b))
        } else {
            true
        }
    }

    /// Whether the target is reachable from the start under the current
    /// wall layout.
    pub fn target_reachable(&self) -> bool {
        self.reachable(&self.start_point(), &self.target_point())
    }
}

impl fmt::Display for SearchGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for y in 0..self.height {
            for x in 0..self.width {
                let glyph = match self.nodes[self.get_ix(x, y)].kind {
                    NodeKind::Default => '.',
                    NodeKind::Wall => '#',
                    NodeKind::Start => 'S',
                    NodeKind::Target => 'T',
                    NodeKind::Open => 'o',
                    NodeKind::Closed => 'x',
                    NodeKind::Path => '*',
                };
                write!(f, "{}", glyph)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_until_settled(grid: &mut SearchGrid) {
        grid.state = SearchState::Running;
        let budget = grid.width() * grid.height();
        for _ in 0..=budget {
            if grid.state != SearchState::Running || grid.path_pending() {
                return;
            }
            grid.step();
        }
        panic!("search failed to settle within the expansion budget");
    }

    /// Tests whether points are correctly mapped to different connected
    /// components.
    #[test]
    fn test_component_generation() {
        // Corresponds to the following 3x2 grid:
        //  ___
        // |S#T|
        // | # |
        //  ___
        let mut grid = SearchGrid::new(3, 2, Point::new(0, 0), Point::new(2, 0));
        grid.set_wall(Point::new(1, 0));
        grid.set_wall(Point::new(1, 1));
        grid.generate_components();
        assert!(grid.unreachable(&Point::new(0, 0), &Point::new(2, 0)));
        assert!(grid.reachable(&Point::new(0, 0), &Point::new(0, 1)));
        assert!(!grid.target_reachable());
    }

    // Tests whether allowing diagonals has the expected effect on diagonal
    // reachability in a minimal setting.
    #[test]
    fn test_diagonal_switch_reachable() {
        //  ___
        // |S#|
        // |#T|
        //  __
        let mut grid = SearchGrid::new(2, 2, Point::new(0, 0), Point::new(1, 1));
        grid.set_wall(Point::new(1, 0));
        grid.set_wall(Point::new(0, 1));
        grid.generate_components();
        assert!(grid.target_reachable());
        grid.allow_diagonal_move = false;
        grid.generate_components();
        assert!(!grid.target_reachable());
    }

    #[test]
    fn wall_hooks_respect_preconditions() {
        let mut grid = SearchGrid::new(4, 4, Point::new(0, 0), Point::new(3, 3));
        // Endpoints are never convertible to walls
        grid.set_wall(Point::new(0, 0));
        assert_eq!(grid.kind_at(Point::new(0, 0)), Some(NodeKind::Start));
        // Erasing a non-wall is ignored
        grid.clear_wall(Point::new(1, 1));
        assert_eq!(grid.kind_at(Point::new(1, 1)), Some(NodeKind::Default));
        // Out-of-bounds clicks are ignored
        grid.set_wall(Point::new(-1, 2));
        grid.set_wall(Point::new(4, 0));
        grid.set_wall(Point::new(2, 2));
        assert_eq!(grid.kind_at(Point::new(2, 2)), Some(NodeKind::Wall));
        grid.clear_wall(Point::new(2, 2));
        assert_eq!(grid.kind_at(Point::new(2, 2)), Some(NodeKind::Default));
    }

    #[test]
    fn endpoint_moves_respect_preconditions() {
        let mut grid = SearchGrid::new(4, 4, Point::new(0, 0), Point::new(3, 3));
        // Moving the start onto the target is ignored
        grid.move_start(Point::new(3, 3));
        assert_eq!(grid.start_point(), Point::new(0, 0));
        // Moving onto a wall removes the wall first
        grid.set_wall(Point::new(2, 2));
        grid.move_start(Point::new(2, 2));
        assert_eq!(grid.start_point(), Point::new(2, 2));
        assert_eq!(grid.kind_at(Point::new(2, 2)), Some(NodeKind::Start));
        assert_eq!(grid.kind_at(Point::new(0, 0)), Some(NodeKind::Default));
        // The old position is free again
        grid.move_target(Point::new(0, 0));
        assert_eq!(grid.target_point(), Point::new(0, 0));
        assert_eq!(grid.kind_at(Point::new(3, 3)), Some(NodeKind::Default));
        // Exactly one start and one target remain
        let mut starts = 0;
        let mut targets = 0;
        for y in 0..4 {
            for x in 0..4 {
                match grid.kind_at(Point::new(x, y)).unwrap() {
                    NodeKind::Start => starts += 1,
                    NodeKind::Target => targets += 1,
                    _ => {}
                }
            }
        }
        assert_eq!((starts, targets), (1, 1));
    }

    #[test]
    fn first_step_expands_the_start() {
        let mut grid = SearchGrid::new(3, 3, Point::new(0, 0), Point::new(2, 2));
        grid.state = SearchState::Running;
        grid.step();
        assert_eq!(grid.current_point(), Some(Point::new(0, 0)));
        assert_eq!(grid.closed_points(), vec![Point::new(0, 0)]);
        // The start keeps its kind when expanded
        assert_eq!(grid.kind_at(Point::new(0, 0)), Some(NodeKind::Start));
        for point in grid.open_points() {
            assert_eq!(grid.kind_at(point), Some(NodeKind::Open));
        }
    }

    #[test]
    fn solve_simple_problem() {
        //  ___
        // |S  |
        // | # |
        // |  T|
        //  ___
        let mut grid = SearchGrid::new(3, 3, Point::new(0, 0), Point::new(2, 2));
        grid.set_wall(Point::new(1, 1));
        run_until_settled(&mut grid);
        // Corner cutting past the obstacle keeps the path at three moves
        assert_eq!(grid.path_points().len(), 3);
    }

    #[test]
    fn expansion_order_is_deterministic() {
        let build = || {
            let mut grid = SearchGrid::new(6, 6, Point::new(0, 0), Point::new(5, 5));
            for point in [Point::new(2, 1), Point::new(2, 2), Point::new(2, 3)] {
                grid.set_wall(point);
            }
            grid.state = SearchState::Running;
            grid
        };
        let mut a = build();
        let mut b = build();
        for _ in 0..(6 * 6) {
            a.step();
            b.step();
            assert_eq!(a.closed_points(), b.closed_points());
            assert_eq!(a.open_points(), b.open_points());
        }
    }

    #[test]
    fn exhausted_frontier_finishes_with_empty_path() {
        //  ____
        // |S#.|
        // |.#.|
        // |.#T|
        //  ____
        let mut grid = SearchGrid::new(3, 3, Point::new(0, 0), Point::new(2, 2));
        for y in 0..3 {
            grid.set_wall(Point::new(1, y));
        }
        grid.state = SearchState::Running;
        for _ in 0..(3 * 3) {
            grid.step();
        }
        assert_eq!(grid.state, SearchState::Finished);
        assert!(grid.path_points().is_empty());
        // Extra steps after exhaustion are harmless
        grid.step();
        assert_eq!(grid.state, SearchState::Finished);
    }

    #[test]
    fn reveal_marks_path_and_finishes_on_target() {
        let mut grid = SearchGrid::new(3, 1, Point::new(0, 0), Point::new(2, 0));
        run_until_settled(&mut grid);
        assert_eq!(grid.path_points(), vec![Point::new(2, 0), Point::new(1, 0)]);
        assert_eq!(grid.reveal_next(), Some(Point::new(1, 0)));
        assert_eq!(grid.kind_at(Point::new(1, 0)), Some(NodeKind::Path));
        assert_eq!(grid.state, SearchState::Running);
        assert_eq!(grid.reveal_next(), Some(Point::new(2, 0)));
        assert_eq!(grid.kind_at(Point::new(2, 0)), Some(NodeKind::Target));
        assert_eq!(grid.state, SearchState::Finished);
        assert_eq!(grid.reveal_next(), None);
    }

    #[test]
    fn reset_preserves_walls_and_clears_search_state() {
        let mut grid = SearchGrid::new(4, 4, Point::new(0, 0), Point::new(3, 3));
        grid.set_wall(Point::new(1, 2));
        run_until_settled(&mut grid);
        grid.reset();
        assert_eq!(grid.state, SearchState::Finished);
        assert_eq!(grid.kind_at(Point::new(1, 2)), Some(NodeKind::Wall));
        assert!(grid.open_points().is_empty());
        assert!(grid.closed_points().is_empty());
        assert!(grid.path_points().is_empty());
        assert_eq!(grid.current_point(), None);
        for y in 0..4 {
            for x in 0..4 {
                let node = grid.node_at(Point::new(x, y)).unwrap();
                assert_eq!(node.origin, None);
                assert_eq!(node.g_cost, 0);
                assert_eq!(node.h_cost, crate::INFINITY);
                assert_eq!(node.f_cost, crate::INFINITY);
            }
        }
    }

    #[test]
    fn clear_restores_initial_endpoints() {
        let mut grid = SearchGrid::new(4, 4, Point::new(0, 0), Point::new(3, 3));
        grid.set_wall(Point::new(1, 1));
        grid.move_start(Point::new(2, 0));
        grid.move_target(Point::new(0, 3));
        grid.clear();
        assert_eq!(grid.start_point(), Point::new(0, 0));
        assert_eq!(grid.target_point(), Point::new(3, 3));
        assert_eq!(grid.kind_at(Point::new(1, 1)), Some(NodeKind::Default));
        assert_eq!(grid.state, SearchState::Finished);
        assert!(grid.components_dirty);
        grid.update();
        assert!(!grid.components_dirty);
        assert!(grid.target_reachable());
    }
}
