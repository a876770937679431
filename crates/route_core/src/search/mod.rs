use crate::graph::NodeIndex;

pub mod dijkstra;
pub mod shortest_path;

/// Walks the predecessor table back from `target` and returns the nodes in
/// start to target order.
pub fn reconstruct_path(target: NodeIndex, previous: &[Option<NodeIndex>]) -> Vec<NodeIndex> {
    let mut path = vec![target];
    let mut current = target;

    while let Some(prev_node) = previous[current.index()] {
        path.push(prev_node);
        current = prev_node;
    }
    path.reverse();
    path
}
