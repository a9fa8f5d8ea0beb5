//! Rebuilding shortest paths from a finished walk.

use std::collections::{HashSet, VecDeque};

use super::{NodeId, PathError, Walk};

impl Walk {
    fn ensure_reachable(&self, target: NodeId) -> Result<(), PathError> {
        if self.is_reachable(target) {
            Ok(())
        } else {
            Err(PathError::Unreachable(target))
        }
    }

    /// Every shortest path from the source to `target`, each ordered
    /// source first.
    ///
    /// Breadth-first over predecessor links; partial paths never revisit a
    /// node, so zero-cost cycles cannot make it loop. The number of paths can
    /// grow exponentially with ties; use [`Walk::nodes_on_paths_to`] when only
    /// the visited cells matter.
    pub fn paths_to(&self, target: NodeId) -> Result<Vec<Vec<NodeId>>, PathError> {
        self.ensure_reachable(target)?;

        let mut paths = Vec::new();
        let mut queue = VecDeque::from([vec![target]]);

        while let Some(path) = queue.pop_front() {
            let Some(&last) = path.last() else {
                continue;
            };
            if last == self.source {
                let mut path = path;
                path.reverse();
                paths.push(path);
                continue;
            }
            for &previous in self.predecessors(last) {
                if !path.contains(&previous) {
                    let mut extended = path.clone();
                    extended.push(previous);
                    queue.push_back(extended);
                }
            }
        }

        Ok(paths)
    }

    /// One shortest path, following the first recorded predecessor at each step
    pub fn first_path_to(&self, target: NodeId) -> Result<Vec<NodeId>, PathError> {
        self.ensure_reachable(target)?;

        let mut path = vec![target];
        let mut seen = HashSet::from([target]);
        let mut current = target;
        while current != self.source {
            let Some(&previous) = self
                .predecessors(current)
                .iter()
                .find(|previous| !seen.contains(*previous))
            else {
                // Only reachable through a zero-cost cycle already on the path
                return Err(PathError::Unreachable(target));
            };
            seen.insert(previous);
            path.push(previous);
            current = previous;
        }

        path.reverse();
        Ok(path)
    }

    /// Union of the nodes of every shortest path to `target`, source and
    /// target included
    pub fn nodes_on_paths_to(&self, target: NodeId) -> Result<HashSet<NodeId>, PathError> {
        self.ensure_reachable(target)?;

        let mut seen = HashSet::from([target]);
        let mut stack = vec![target];
        while let Some(current) = stack.pop() {
            for &previous in self.predecessors(current) {
                if seen.insert(previous) {
                    stack.push(previous);
                }
            }
        }
        Ok(seen)
    }
}
