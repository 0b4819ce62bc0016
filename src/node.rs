/// Sentinel for costs that have not been computed yet.
pub const INFINITY: i32 = i32::MAX;

/// Classification of a cell. Only [NodeKind::Wall] affects the search
/// itself; the remaining variants exist so a rendering host can draw each
/// cell by its kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeKind {
    Default,
    Wall,
    Start,
    Target,
    /// Discovered but not yet expanded (member of the open set).
    Open,
    /// Already expanded (member of the closed set).
    Closed,
    /// Part of the revealed path.
    Path,
}

impl NodeKind {
    /// Start and target keep their kind when the search decorates cells.
    pub fn is_endpoint(&self) -> bool {
        matches!(self, NodeKind::Start | NodeKind::Target)
    }
}

/// A single grid cell together with its A* bookkeeping. The predecessor on
/// the best known path is an index into the grid's node arena, which keeps
/// the origin chain free of ownership cycles and makes path reconstruction
/// a matter of index-chasing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
    pub kind: NodeKind,
    pub origin: Option<usize>,
    /// Accumulated cost from the start node.
    pub g_cost: i32,
    /// Heuristic estimate of the remaining cost to the target node.
    pub h_cost: i32,
    /// g_cost + h_cost, the expansion priority.
    pub f_cost: i32,
}

impl Node {
    pub fn new(kind: NodeKind) -> Node {
        Node {
            kind,
            origin: None,
            g_cost: 0,
            h_cost: INFINITY,
            f_cost: INFINITY,
        }
    }
}

impl Default for Node {
    fn default() -> Node {
        Node::new(NodeKind::Default)
    }
}
