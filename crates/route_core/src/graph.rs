use crate::constants::Weight;
use crate::error::GraphError;
use crate::input::Network;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::{borrow::Borrow, fmt, hash::Hash, path::Path};

/// Default integer typer for node and edge indices
pub type DefaultIdx = u32;

/// Bound for node identifiers. Any hashable, printable value works, the
/// REPL and the `route` binary use [`Station`].
pub trait NodeKey: Clone + Eq + Hash + fmt::Debug + fmt::Display {}

impl<T> NodeKey for T where T: Clone + Eq + Hash + fmt::Debug + fmt::Display {}

/// Dense index of an interned node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeIndex(DefaultIdx);

impl NodeIndex {
    #[inline]
    pub fn new(x: usize) -> Self {
        NodeIndex(x as DefaultIdx)
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub fn end() -> Self {
        NodeIndex(DefaultIdx::MAX)
    }
}

/// Edge identifier.
#[derive(Debug, Copy, Clone, Default, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub struct EdgeIndex(DefaultIdx);

impl EdgeIndex {
    #[inline]
    pub fn new(x: usize) -> Self {
        EdgeIndex(x as DefaultIdx)
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// An invalid `EdgeIndex` used to denote absence of an edge.
    #[inline]
    pub fn end() -> Self {
        EdgeIndex(DefaultIdx::MAX)
    }
}

/// Name of a station, the node identifier used by the front-ends.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Station(String);

impl Station {
    pub fn new(name: impl Into<String>) -> Self {
        Station(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Station {
    fn from(name: &str) -> Self {
        Station(name.to_owned())
    }
}

impl From<String> for Station {
    fn from(name: String) -> Self {
        Station(name)
    }
}

impl Borrow<str> for Station {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Undirected edge between two interned nodes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    pub source: NodeIndex,
    pub target: NodeIndex,
    pub weight: Weight,
}

impl Edge {
    pub fn new(source: NodeIndex, target: NodeIndex, weight: Weight) -> Self {
        Edge {
            source,
            target,
            weight,
        }
    }

    pub(crate) fn reverse(&self) -> Self {
        Edge {
            source: self.target,
            target: self.source,
            weight: self.weight,
        }
    }
}

/// Undirected weighted graph. Node identifiers are interned to a
/// [`NodeIndex`] the first time they show up in [`Graph::add_node`] or
/// [`Graph::add_edge`]; nothing is ever removed.
#[derive(Debug, Clone)]
pub struct Graph<N = Station> {
    pub nodes: Vec<N>,
    pub edges: Vec<Edge>,
    pub edges_out: Vec<Vec<EdgeIndex>>,
    node_index: FxHashMap<N, NodeIndex>,
}

impl<N: NodeKey> Graph<N> {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
            edges_out: Vec::new(),
            node_index: FxHashMap::default(),
        }
    }

    pub fn with_capacity(num_nodes: usize, num_edges: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(num_nodes),
            edges: Vec::with_capacity(num_edges),
            edges_out: Vec::with_capacity(num_nodes),
            node_index: FxHashMap::with_capacity_and_hasher(num_nodes, Default::default()),
        }
    }

    /// Adds a node to the graph if it is not known yet.
    ///
    /// **Panics** if the Graph is at the maximum number of nodes for its index
    /// type
    ///
    /// Returns the index of the node.
    pub fn add_node(&mut self, node: N) -> NodeIndex {
        if let Some(idx) = self.node_index.get(&node) {
            return *idx;
        }

        let node_idx = NodeIndex::new(self.nodes.len());
        assert!(
            NodeIndex::end() != node_idx,
            "Maximum number of nodes for index type {} exceeded",
            std::any::type_name::<DefaultIdx>()
        );

        // Create new entry in adjacency list for new node
        self.edges_out.push(Vec::new());
        self.node_index.insert(node.clone(), node_idx);
        self.nodes.push(node);

        node_idx
    }

    /// Add an undirected edge between `source` and `target`. Unknown nodes
    /// are created first. Parallel edges are kept side by side.
    ///
    /// **Panics** if the Graph is at the maximum number of edges for its index
    /// type
    ///
    /// Returns the index of the new created edge.
    pub fn add_edge(&mut self, source: N, target: N, weight: Weight) -> EdgeIndex {
        let source = self.add_node(source);
        let target = self.add_node(target);

        let edge_idx = EdgeIndex::new(self.edges.len());
        assert!(
            EdgeIndex::end() != edge_idx,
            "Maximum number of edges for index type {} exceeded",
            std::any::type_name::<DefaultIdx>()
        );

        self.edges_out[source.index()].push(edge_idx);
        self.edges_out[target.index()].push(edge_idx);
        self.edges.push(Edge::new(source, target, weight));

        edge_idx
    }

    pub fn add_edges(&mut self, edges: impl IntoIterator<Item = (N, N, Weight)>) {
        for (source, target, weight) in edges {
            self.add_edge(source, target, weight);
        }
    }

    pub fn node_index<Q>(&self, node: &Q) -> Option<NodeIndex>
    where
        N: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.node_index.get(node).copied()
    }

    pub fn contains<Q>(&self, node: &Q) -> bool
    where
        N: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.node_index.contains_key(node)
    }

    pub fn node(&self, node_idx: NodeIndex) -> Option<&N> {
        self.nodes.get(node_idx.index())
    }

    /// Returns an iterator over all nodes in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.nodes.iter()
    }

    /// Returns an iterator over all edges of the graph
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter()
    }

    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Edges incident to `node_idx`, each oriented so that `source == node_idx`.
    pub fn neighbors_outgoing(
        &self,
        node_idx: NodeIndex,
    ) -> impl Iterator<Item = (EdgeIndex, Edge)> + '_ {
        self.edges_out[node_idx.index()].iter().map(move |edge_idx| {
            let edge = &self.edges[edge_idx.index()];
            if edge.source == node_idx {
                (*edge_idx, edge.clone())
            } else {
                (*edge_idx, edge.reverse())
            }
        })
    }

    /// Returns the `(neighbor, weight)` pairs of `node`.
    pub fn neighbors<Q>(
        &self,
        node: &Q,
    ) -> Result<impl Iterator<Item = (&N, Weight)> + '_, GraphError>
    where
        N: Borrow<Q>,
        Q: Hash + Eq + fmt::Display + ?Sized,
    {
        let node_idx = self
            .node_index(node)
            .ok_or_else(|| GraphError::NodeNotFound(node.to_string()))?;

        Ok(self
            .neighbors_outgoing(node_idx)
            .map(move |(_, edge)| (&self.nodes[edge.target.index()], edge.weight)))
    }

    pub fn print_info(&self) {
        println!(
            "Graph:\t#Nodes: {}, #Edges: {}",
            self.nodes.len(),
            self.edges.len()
        );
    }
}

impl Graph<Station> {
    /// Reads a headered `source,target,weight` file.
    pub fn from_csv(path_to_edges: &Path) -> anyhow::Result<Self> {
        Ok(Network::read_csv(path_to_edges)?.to_graph())
    }
}

impl<N: NodeKey> Default for Graph<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Macro to create a route triple between two stations
///
/// edge!("A", "B", 3) Returns `(Station, Station, Weight)`
#[macro_export]
macro_rules! edge {
    ($source:expr, $target:expr, $weight:expr) => {
        (
            $crate::graph::Station::from($source),
            $crate::graph::Station::from($target),
            $weight,
        )
    };
}
