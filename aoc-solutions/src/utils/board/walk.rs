//! Single-source shortest paths (Dijkstra) over a board.

use super::{Board, BoardNode, Link, NodeId};
use crate::utils::queue::PriorityQueue;

const UNREACHABLE: u64 = u64::MAX;

/// Result of one walk: distance and tied predecessors for every node.
///
/// A `Walk` does not borrow the board, so several walks (from different
/// sources, or before/after the board's values change) can be kept side by side.
#[derive(Debug, Clone)]
pub struct Walk {
    pub(crate) source: NodeId,
    pub(crate) distances: Vec<u64>,
    pub(crate) predecessors: Vec<Vec<NodeId>>,
}

impl Walk {
    pub fn source(&self) -> NodeId {
        self.source
    }

    /// Shortest distance from the source, `None` when unreachable
    pub fn distance(&self, id: NodeId) -> Option<u64> {
        self.distances
            .get(id.0)
            .copied()
            .filter(|&distance| distance != UNREACHABLE)
    }

    pub fn is_reachable(&self, id: NodeId) -> bool {
        self.distance(id).is_some()
    }

    /// Every node that is a last hop on some shortest path to `id`.
    ///
    /// Empty for the source and for unreachable nodes.
    pub fn predecessors(&self, id: NodeId) -> &[NodeId] {
        self.predecessors
            .get(id.0)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Reachable nodes with their distances, in id order
    pub fn reachable(&self) -> impl Iterator<Item = (NodeId, u64)> + '_ {
        self.distances
            .iter()
            .enumerate()
            .filter(|&(_, &distance)| distance != UNREACHABLE)
            .map(|(index, &distance)| (NodeId(index), distance))
    }

    /// Smallest distance among `targets`, with the node that has it
    pub fn closest<I: IntoIterator<Item = NodeId>>(&self, targets: I) -> Option<(NodeId, u64)> {
        targets
            .into_iter()
            .filter_map(|id| self.distance(id).map(|distance| (id, distance)))
            .min_by_key(|&(_, distance)| distance)
    }
}

impl<T> Board<T> {
    /// Walk every link from `start`
    pub fn walk_from(&self, start: NodeId) -> Walk {
        self.walk_from_where(start, |_| true)
    }

    /// Walk links whose target satisfies `passable` (the start itself is
    /// never tested).
    pub fn walk_from_where(&self, start: NodeId, passable: impl Fn(&BoardNode<T>) -> bool) -> Walk {
        self.walk_with(start, |node, out| {
            out.extend(
                node.links()
                    .map(|(_, link)| link)
                    .filter(|link| passable(self.node(link.to))),
            );
        })
    }

    /// Walk edges produced by `expand`, which appends the outgoing links of
    /// the node it is given. Links need not be adjacent: this is how jump
    /// moves and layer switches that the four directional links cannot
    /// express are modelled.
    ///
    /// Costs must be non-negative (guaranteed by `u64`); a strictly better
    /// distance replaces a node's predecessors, an equal one is added to them.
    pub fn walk_with(
        &self,
        start: NodeId,
        mut expand: impl FnMut(&BoardNode<T>, &mut Vec<Link>),
    ) -> Walk {
        let count = self.nodes.len();
        let mut distances = vec![UNREACHABLE; count];
        let mut predecessors: Vec<Vec<NodeId>> = vec![Vec::new(); count];
        let mut settled = vec![false; count];
        let mut settled_count = 0usize;

        let mut queue = PriorityQueue::with_capacity(count);
        distances[start.0] = 0;
        queue.push(start, 0);

        let mut out = Vec::with_capacity(4);
        while let Some((current, distance)) = queue.pop() {
            if settled[current.0] || distance > distances[current.0] {
                continue;
            }
            settled[current.0] = true;
            settled_count += 1;

            out.clear();
            expand(&self.nodes[current.0], &mut out);

            for &Link { to, cost } in &out {
                let candidate = distance.saturating_add(cost);
                if candidate == UNREACHABLE {
                    continue;
                }
                let known = distances[to.0];
                if candidate < known {
                    distances[to.0] = candidate;
                    let preds = &mut predecessors[to.0];
                    preds.clear();
                    preds.push(current);
                    queue.push(to, candidate);
                } else if candidate == known && to != start && !predecessors[to.0].contains(&current) {
                    predecessors[to.0].push(current);
                }
            }
        }

        log::trace!(
            "walk from {:?} settled {} of {} nodes",
            start,
            settled_count,
            count
        );

        Walk {
            source: start,
            distances,
            predecessors,
        }
    }
}
