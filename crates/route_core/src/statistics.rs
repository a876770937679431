use std::{
    fmt::Display,
    time::{Duration, Instant},
};

use crate::graph::{Graph, NodeKey};

#[derive(Debug, Default, Clone)]
pub struct SearchStats {
    pub nodes_settled: usize,
    pub duration: Option<Duration>,
    start_time: Option<Instant>,
}

impl SearchStats {
    pub fn init(&mut self) {
        self.nodes_settled = 0;
        self.duration = None;
        self.start_timer();
    }

    fn start_timer(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn finish(&mut self) {
        if let Some(start_time) = self.start_time {
            self.duration = Some(start_time.elapsed());
        }
    }
}

impl Display for SearchStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Stats: {} nodes settled in {:?}",
            self.nodes_settled, self.duration
        )
    }
}

/// Average number of incident edges per node. Parallel edges count once each.
pub fn average_degree<N: NodeKey>(g: &Graph<N>) -> f64 {
    if g.nodes.is_empty() {
        return 0.0;
    }
    let sum: usize = g.edges_out.iter().map(|edges| edges.len()).sum();
    sum as f64 / g.nodes.len() as f64
}

#[cfg(test)]
mod tests {
    use crate::{graph::Graph, search::dijkstra::Dijkstra, statistics::average_degree};

    #[test]
    fn stats_work() {
        //      7 -- 8 -- 9
        //      |         |
        // 0 -- 5 -- 6 -  |
        // |         |  \ |
        // 1 -- 2 -- 3 -- 4
        let mut g = Graph::new();
        g.add_edges(vec![
            (0, 1, 1),
            (1, 2, 1),
            (2, 3, 1),
            (3, 4, 20),
            (0, 5, 5),
            (5, 6, 1),
            (6, 4, 20),
            (6, 3, 20),
            (5, 7, 5),
            (7, 8, 1),
            (8, 9, 1),
            (9, 4, 1),
        ]);

        let mut d = Dijkstra::new(&g);
        d.search(&0, &4).unwrap();

        assert!(d.stats.duration.is_some());
        assert!(d.stats.nodes_settled > 0);
        assert!(d.stats.nodes_settled <= 10);
    }

    #[test]
    fn degree() {
        let mut g = Graph::new();
        assert_eq!(average_degree(&g), 0.0);

        g.add_edge("A", "B", 1);
        g.add_edge("B", "C", 1);
        g.add_node("D");

        assert_eq!(average_degree(&g), 1.0);
    }
}
