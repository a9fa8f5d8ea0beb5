//! Weighted grid graph for maze and shortest-path puzzles.
//!
//! A [`Board`] is built from a text block, one [`BoardNode`] per character,
//! each carrying a caller-chosen value and up to four [`Link`]s to its
//! in-bounds neighbours (cost 1 unless overridden). Walks run Dijkstra from a
//! source and return a [`Walk`] holding distances and every tied predecessor,
//! from which all shortest paths can be rebuilt.
//!
//! # Example: shortest paths on an open grid
//!
//! ```rust
//! use aoc_solutions::utils::board::Board;
//!
//! let board = Board::parse("...\n...\n...", |cell| cell.ch == '#').unwrap();
//! let start = board.get(0, 0).unwrap().id();
//! let end = board.get(2, 2).unwrap().id();
//!
//! let walk = board.walk_from(start);
//! assert_eq!(walk.distance(end), Some(4));
//! assert_eq!(walk.paths_to(end).unwrap().len(), 6);
//! ```
//!
//! # Example: walls and unreachable cells
//!
//! ```rust
//! use aoc_solutions::utils::board::Board;
//!
//! let board = Board::parse(".#.\n.#.\n.#.", |cell| cell.ch == '#').unwrap();
//! let start = board.get(0, 0).unwrap().id();
//! let walk = board.walk_from_where(start, |node| !node.value);
//!
//! assert_eq!(walk.distance(board.get(2, 0).unwrap().id()), Some(2));
//! assert_eq!(walk.distance(board.get(0, 2).unwrap().id()), None);
//! assert!(walk.paths_to(board.get(0, 2).unwrap().id()).is_err());
//! ```
//!
//! # Example: two layers with a turning penalty
//!
//! Layer 0 moves horizontally, layer 1 vertically; switching costs 1000 on
//! top of the step.
//!
//! ```rust
//! use aoc_solutions::utils::board::{Board, Direction};
//!
//! let flat = Board::parse("..\n..", |_| ()).unwrap();
//! let mut board = Board::stack([flat.clone(), flat]).unwrap();
//! board.cross_link(0, &[Direction::Up, Direction::Down], 1, 1001).unwrap();
//! board.cross_link(1, &[Direction::Left, Direction::Right], 0, 1001).unwrap();
//!
//! let start = board.get_in(0, 0, 0).unwrap().id();
//! let walk = board.walk_from(start);
//! let corner = |layer| walk.distance(board.get_in(layer, 1, 1).unwrap().id());
//! assert_eq!(corner(0), Some(2002));
//! assert_eq!(corner(1), Some(1002));
//! ```

mod error;
mod layers;
mod node;
mod paths;
mod walk;

pub use error::{BoardError, PathError};
pub use node::{BoardNode, Cell, Direction, Link, NodeId};
pub use walk::Walk;

/// Cost given to every link at construction
pub const DEFAULT_COST: u64 = 1;

/// A rectangular grid of nodes, optionally made of several same-shape layers.
#[derive(Debug, Clone)]
pub struct Board<T> {
    nodes: Vec<BoardNode<T>>,
    width: usize,
    height: usize,
    layers: usize,
}

impl<T> Board<T> {
    /// Build a board from newline-separated rows of equal length.
    ///
    /// Trailing newlines are ignored; input without a single cell is
    /// [`BoardError::Empty`] and blank rows anywhere else, leading ones
    /// included, are [`BoardError::Ragged`]. Every link gets [`DEFAULT_COST`].
    pub fn parse(input: &str, mut value: impl FnMut(Cell) -> T) -> Result<Self, BoardError> {
        Self::try_parse(input, |cell| Ok::<_, BoardError>(value(cell)))
    }

    /// Like [`Board::parse`] with a fallible value mapper
    pub fn try_parse<E>(
        input: &str,
        mut value: impl FnMut(Cell) -> Result<T, E>,
    ) -> Result<Self, E>
    where
        E: From<BoardError>,
    {
        let rows: Vec<&str> = input.trim_end_matches(['\n', '\r']).lines().collect();
        // width comes from the first row with cells, so a leading blank row
        // is reported as ragged
        let Some(width) = rows
            .iter()
            .map(|row| row.chars().count())
            .find(|&count| count > 0)
        else {
            return Err(BoardError::Empty.into());
        };
        let height = rows.len();

        let mut nodes = Vec::with_capacity(width * height);
        for (row, line) in rows.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(BoardError::Ragged {
                    row,
                    expected: width,
                    found,
                }
                .into());
            }
            for (col, ch) in line.chars().enumerate() {
                nodes.push(BoardNode {
                    id: NodeId(nodes.len()),
                    layer: 0,
                    row,
                    col,
                    ch,
                    value: value(Cell { ch, row, col })?,
                    links: [None; 4],
                });
            }
        }

        let mut board = Board {
            nodes,
            width,
            height,
            layers: 1,
        };
        board.link_neighbours();
        Ok(board)
    }

    /// Wire every node to its in-bounds neighbours within its own layer
    fn link_neighbours(&mut self) {
        for index in 0..self.nodes.len() {
            let node = &self.nodes[index];
            let (layer, row, col) = (node.layer, node.row as isize, node.col as isize);
            let links = Direction::ALL.map(|direction| {
                let (dr, dc) = direction.offset();
                self.id_in(layer, row + dr, col + dc).map(|to| Link {
                    to,
                    cost: DEFAULT_COST,
                })
            });
            self.nodes[index].links = links;
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn layers(&self) -> usize {
        self.layers
    }

    /// Node count over all layers
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: construction rejects empty input
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Id of the cell at `(row, col)` in `layer`, `None` when out of bounds
    pub fn id_in(&self, layer: usize, row: isize, col: isize) -> Option<NodeId> {
        if layer >= self.layers || row < 0 || col < 0 {
            return None;
        }
        let (row, col) = (row as usize, col as usize);
        if row >= self.height || col >= self.width {
            return None;
        }
        Some(NodeId(layer * self.width * self.height + row * self.width + col))
    }

    /// Cell in layer 0; negative or too-large coordinates give `None`
    pub fn get(&self, row: isize, col: isize) -> Option<&BoardNode<T>> {
        self.get_in(0, row, col)
    }

    pub fn get_in(&self, layer: usize, row: isize, col: isize) -> Option<&BoardNode<T>> {
        self.id_in(layer, row, col).map(|id| &self.nodes[id.0])
    }

    pub fn get_mut(&mut self, row: isize, col: isize) -> Option<&mut BoardNode<T>> {
        self.id_in(0, row, col).map(|id| &mut self.nodes[id.0])
    }

    /// # Panics
    /// If `id` belongs to another board.
    pub fn node(&self, id: NodeId) -> &BoardNode<T> {
        &self.nodes[id.0]
    }

    /// Neighbour reached through the link in `direction`
    pub fn neighbour(&self, id: NodeId, direction: Direction) -> Option<&BoardNode<T>> {
        self.node(id).link(direction).map(|link| self.node(link.to))
    }

    /// Every node of every layer, in id order
    pub fn nodes(&self) -> impl Iterator<Item = &BoardNode<T>> {
        self.nodes.iter()
    }

    pub fn layer_nodes(&self, layer: usize) -> impl Iterator<Item = &BoardNode<T>> {
        let size = self.width * self.height;
        let start = (layer * size).min(self.nodes.len());
        let end = (start + size).min(self.nodes.len());
        self.nodes[start..end].iter()
    }

    pub fn find(&self, predicate: impl Fn(&BoardNode<T>) -> bool) -> Option<&BoardNode<T>> {
        self.nodes.iter().find(|node| predicate(node))
    }

    pub fn filter<'a>(
        &'a self,
        predicate: impl Fn(&BoardNode<T>) -> bool + 'a,
    ) -> impl Iterator<Item = &'a BoardNode<T>> + 'a {
        self.nodes.iter().filter(move |node| predicate(node))
    }

    pub fn count(&self, predicate: impl Fn(&BoardNode<T>) -> bool) -> usize {
        self.nodes.iter().filter(|node| predicate(node)).count()
    }

    /// Override the cost of an existing link. Returns `false` when there is no
    /// link in that direction.
    pub fn set_cost(&mut self, id: NodeId, direction: Direction, cost: u64) -> bool {
        match &mut self.nodes[id.0].links[direction.slot()] {
            Some(link) => {
                link.cost = cost;
                true
            }
            None => false,
        }
    }

    /// Cheapest direct link from `from` to `to`
    pub fn link_cost(&self, from: NodeId, to: NodeId) -> Option<u64> {
        self.node(from)
            .links()
            .filter(|(_, link)| link.to == to)
            .map(|(_, link)| link.cost)
            .min()
    }

    /// Render layer 0 back to text
    pub fn render(&self, glyph: impl Fn(&T) -> char) -> String {
        self.render_layer(0, glyph)
    }

    pub fn render_layer(&self, layer: usize, glyph: impl Fn(&T) -> char) -> String {
        let mut out = String::with_capacity((self.width + 1) * self.height);
        for (index, node) in self.layer_nodes(layer).enumerate() {
            if index > 0 && index % self.width == 0 {
                out.push('\n');
            }
            out.push(glyph(&node.value));
        }
        out
    }

    /// Write layer 0 to the debug log
    pub fn print(&self, glyph: impl Fn(&T) -> char) {
        log::debug!("\n{}", self.render(glyph));
    }
}

#[cfg(test)]
mod tests;
