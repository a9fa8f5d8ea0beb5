//! Stacking same-shape boards into one graph with cross-layer links.
//!
//! Each layer stands for one extra bit of state (e.g. "moving horizontally"
//! vs "moving vertically"). Rewriting a layer's links in some directions to
//! land in another layer, at a chosen cost, makes a single walk price that
//! state change without storing it per node.

use super::{Board, BoardError, Direction, Link, NodeId};

impl<T> Board<T> {
    /// Concatenate boards of identical width and height into one board.
    ///
    /// Layer `k` of the result is the `k`-th layer of the inputs, in order;
    /// its node ids are shifted by `k * width * height` and every existing
    /// link keeps pointing into its own layer.
    pub fn stack<I>(boards: I) -> Result<Board<T>, BoardError>
    where
        I: IntoIterator<Item = Board<T>>,
    {
        let mut boards = boards.into_iter();
        let mut stacked = boards.next().ok_or(BoardError::NoLayers)?;

        for board in boards {
            if board.width != stacked.width || board.height != stacked.height {
                return Err(BoardError::LayerShape {
                    width: stacked.width,
                    height: stacked.height,
                    found_width: board.width,
                    found_height: board.height,
                });
            }

            let id_offset = stacked.nodes.len();
            let layer_offset = stacked.layers;
            stacked.nodes.extend(board.nodes.into_iter().map(|mut node| {
                node.id = NodeId(node.id.0 + id_offset);
                node.layer += layer_offset;
                for link in node.links.iter_mut().flatten() {
                    link.to = NodeId(link.to.0 + id_offset);
                }
                node
            }));
            stacked.layers += board.layers;
        }

        Ok(stacked)
    }

    /// Redirect the links of every node in `from_layer` going in one of
    /// `directions` to the same-position neighbour in `to_layer`, at `cost`.
    ///
    /// Directions with no link (board edge) stay unlinked.
    pub fn cross_link(
        &mut self,
        from_layer: usize,
        directions: &[Direction],
        to_layer: usize,
        cost: u64,
    ) -> Result<(), BoardError> {
        for layer in [from_layer, to_layer] {
            if layer >= self.layers {
                return Err(BoardError::NoSuchLayer(layer));
            }
        }

        let size = self.width * self.height;
        for index in from_layer * size..(from_layer + 1) * size {
            for &direction in directions {
                let node = &self.nodes[index];
                if node.links[direction.slot()].is_none() {
                    continue;
                }
                let (row, col) = node.step(direction);
                let target = self.id_in(to_layer, row, col);
                self.nodes[index].links[direction.slot()] = target.map(|to| Link { to, cost });
            }
        }

        Ok(())
    }
}
