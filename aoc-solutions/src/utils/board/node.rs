//! Nodes, links and directions.

/// Index of a node in its [`Board`](super::Board), stable for the board's lifetime.
///
/// Ids are laid out layer by layer, row-major within a layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// One of the four compass directions, clockwise from `Up`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// `(row, col)` delta of one step
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Right => (0, 1),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
        }
    }

    pub(crate) const fn slot(self) -> usize {
        self as usize
    }
}

/// Directed, weighted edge to a neighbouring node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Link {
    pub to: NodeId,
    pub cost: u64,
}

/// What the value mapper sees for each character of the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub row: usize,
    pub col: usize,
}

/// One grid cell: position, source character, payload and its four links.
#[derive(Debug, Clone)]
pub struct BoardNode<T> {
    pub(crate) id: NodeId,
    pub(crate) layer: usize,
    pub(crate) row: usize,
    pub(crate) col: usize,
    pub(crate) ch: char,
    pub value: T,
    pub(crate) links: [Option<Link>; 4],
}

impl<T> BoardNode<T> {
    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn layer(&self) -> usize {
        self.layer
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    /// `(row, col)`, ignoring the layer
    pub fn position(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    /// Character this node was parsed from
    pub fn ch(&self) -> char {
        self.ch
    }

    pub fn link(&self, direction: Direction) -> Option<Link> {
        self.links[direction.slot()]
    }

    /// Existing links, clockwise from `Up`
    pub fn links(&self) -> impl Iterator<Item = (Direction, Link)> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(|direction| self.link(direction).map(|link| (direction, link)))
    }

    /// Position one step away, possibly out of bounds
    pub fn step(&self, direction: Direction) -> (isize, isize) {
        let (dr, dc) = direction.offset();
        (self.row as isize + dr, self.col as isize + dc)
    }

    /// Manhattan distance to another node's position
    pub fn manhattan(&self, other: &BoardNode<T>) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}
