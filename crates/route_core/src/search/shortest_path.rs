use std::{borrow::Borrow, hash::Hash};

use rustc_hash::FxHashMap;

use crate::{
    constants::{Distance, Weight},
    graph::{Graph, NodeKey, Station},
    render::render_path,
};

#[derive(Debug, PartialEq, Clone)]
pub struct ShortestPath<N = Station> {
    pub nodes: Vec<N>,
    pub weight: Weight,
}

impl<N> ShortestPath<N> {
    pub fn new(nodes: Vec<N>, weight: Weight) -> Self {
        ShortestPath { nodes, weight }
    }
}

/// Best known distance from the start of a search to every node of the graph.
/// Entries keep the node order of the graph.
#[derive(Debug, Clone)]
pub struct DistanceTable<N = Station> {
    entries: Vec<(N, Distance)>,
    index: FxHashMap<N, usize>,
}

impl<N: NodeKey> DistanceTable<N> {
    /// `distances` is indexed by [`NodeIndex`](crate::graph::NodeIndex) of `g`.
    pub(crate) fn new(g: &Graph<N>, distances: Vec<Distance>) -> Self {
        debug_assert_eq!(g.num_nodes(), distances.len());

        let mut index = FxHashMap::with_capacity_and_hasher(distances.len(), Default::default());
        let entries: Vec<(N, Distance)> = g
            .nodes()
            .cloned()
            .zip(distances)
            .enumerate()
            .map(|(i, (node, distance))| {
                index.insert(node.clone(), i);
                (node, distance)
            })
            .collect();

        DistanceTable { entries, index }
    }

    /// Distance of `node`, `Unreached` for nodes the graph does not know.
    pub fn get<Q>(&self, node: &Q) -> Distance
    where
        N: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index
            .get(node)
            .map_or(Distance::Unreached, |&i| self.entries[i].1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&N, Distance)> {
        self.entries.iter().map(|(node, distance)| (node, *distance))
    }

    /// Only the nodes the search reached
    pub fn reached(&self) -> impl Iterator<Item = (&N, Weight)> {
        self.entries
            .iter()
            .filter_map(|(node, distance)| distance.weight().map(|w| (node, w)))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// The index is derived from `entries`, comparing those is enough
impl<N: NodeKey> PartialEq for DistanceTable<N> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

/// Outcome of a single query.
///
/// If the target is unreachable `distance` is [`Distance::Unreached`] and
/// `path` is empty.
#[derive(Debug, Clone)]
pub struct SearchResult<N = Station> {
    pub distance: Distance,
    pub path: Vec<N>,
    pub distances: DistanceTable<N>,
}

impl<N: NodeKey> SearchResult<N> {
    pub fn new(distance: Distance, path: Vec<N>, distances: DistanceTable<N>) -> Self {
        SearchResult {
            distance,
            path,
            distances,
        }
    }

    pub fn is_reachable(&self) -> bool {
        self.distance.is_reached()
    }

    pub fn shortest_path(&self) -> Option<ShortestPath<N>> {
        self.distance
            .weight()
            .map(|weight| ShortestPath::new(self.path.clone(), weight))
    }

    /// Annotated path, see [`render_path`]
    pub fn render(&self) -> String {
        render_path(&self.path, &self.distances)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::dijkstra::Dijkstra;

    #[test]
    fn tables_of_repeated_searches_are_equal() {
        let mut g = Graph::new();
        g.add_edge("A", "B", 2);
        g.add_edge("B", "C", 3);
        g.add_node("D");

        let mut d = Dijkstra::new(&g);
        let first = d.search("A", "D").unwrap();
        let second = d.search("A", "D").unwrap();
        let other_start = d.search("C", "D").unwrap();

        assert_eq!(first.distances, second.distances);
        assert_ne!(first.distances, other_start.distances);
        assert_eq!(
            first.distances.iter().collect::<Vec<_>>(),
            vec![
                (&"A", Distance::Reached(0)),
                (&"B", Distance::Reached(2)),
                (&"C", Distance::Reached(5)),
                (&"D", Distance::Unreached),
            ]
        );
    }
}
