use std::{borrow::Borrow, collections::BinaryHeap, fmt, hash::Hash};

use log::{debug, info};

use crate::constants::{Distance, Weight};
use crate::error::SearchError;
use crate::graph::*;
use crate::search::shortest_path::{DistanceTable, SearchResult};
use crate::statistics::SearchStats;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Candidate {
    pub(crate) node_idx: NodeIndex,
    pub(crate) weight: Weight,
}

impl Candidate {
    pub(crate) fn new(node_idx: NodeIndex, weight: Weight) -> Self {
        Self { node_idx, weight }
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Candidate {
    // Reversed, so the max heap pops the lowest weight first
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        other
            .weight
            .cmp(&self.weight)
            .then_with(|| other.node_idx.cmp(&self.node_idx))
    }
}

pub struct Dijkstra<'a, N = Station> {
    pub stats: SearchStats,
    g: &'a Graph<N>,
}

impl<'a, N: NodeKey> Dijkstra<'a, N> {
    pub fn new(graph: &'a Graph<N>) -> Self {
        Dijkstra {
            g: graph,
            stats: SearchStats::default(),
        }
    }

    /// Shortest path from `start` to `end`.
    ///
    /// Stops as soon as `end` is settled, so only the distances of settled
    /// nodes in the returned table are final. An `end` the graph does not
    /// know is reported as unreachable.
    pub fn search<Q>(&mut self, start: &Q, end: &Q) -> Result<SearchResult<N>, SearchError>
    where
        N: Borrow<Q>,
        Q: Hash + Eq + fmt::Display + ?Sized,
    {
        self.stats.init();

        let source = self
            .g
            .node_index(start)
            .ok_or_else(|| SearchError::UnknownStartNode(start.to_string()))?;
        let target = self.g.node_index(end);

        info!("BEGIN DIJKSTRA from {} to {}", start, end);

        let num_nodes = self.g.num_nodes();
        let mut distances = vec![Distance::Unreached; num_nodes];
        let mut previous: Vec<Option<NodeIndex>> = vec![None; num_nodes];
        distances[source.index()] = Distance::Reached(0);

        let mut queue = BinaryHeap::new();
        queue.push(Candidate::new(source, 0));

        while let Some(Candidate { node_idx, weight }) = queue.pop() {
            if Some(node_idx) == target {
                self.stats.nodes_settled += 1;
                break;
            }

            // Stale entry, a cheaper one for this node was pushed later
            if Distance::Reached(weight) > distances[node_idx.index()] {
                continue;
            }
            self.stats.nodes_settled += 1;

            for (_, edge) in self.g.neighbors_outgoing(node_idx) {
                let Some(new_distance) = weight.checked_add(edge.weight) else {
                    continue;
                };
                if Distance::Reached(new_distance) < distances[edge.target.index()] {
                    distances[edge.target.index()] = Distance::Reached(new_distance);
                    previous[edge.target.index()] = Some(node_idx);
                    queue.push(Candidate::new(edge.target, new_distance));
                }
            }
        }
        self.stats.finish();

        let distance = target.map_or(Distance::Unreached, |t| distances[t.index()]);
        let path: Vec<N> = match target {
            Some(t) if distance.is_reached() => super::reconstruct_path(t, &previous)
                .into_iter()
                .map(|node_idx| self.g.nodes[node_idx.index()].clone())
                .collect(),
            _ => Vec::new(),
        };

        if distance.is_reached() {
            debug!("Path found: {:?}", path);
            info!("Path found with distance {}. {}", distance, self.stats);
        } else {
            info!("No path found. {}", self.stats);
        }

        Ok(SearchResult::new(
            distance,
            path,
            DistanceTable::new(self.g, distances),
        ))
    }
}
