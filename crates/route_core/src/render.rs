//! Human readable rendering of a found path.
use crate::{
    constants::Distance,
    graph::NodeKey,
    search::shortest_path::DistanceTable,
};

/// Renders `path` as `A → (d1) → B → (d2) → C`.
///
/// Every `dk` is the difference of the table distances of two consecutive
/// nodes, i.e. the cost of the hop the search actually took. A single node
/// renders as its name, an empty path as an empty string. A hop touching a
/// node without a reached distance renders as `(?)`.
pub fn render_path<N: NodeKey>(path: &[N], distances: &DistanceTable<N>) -> String {
    let Some((first, rest)) = path.split_first() else {
        return String::new();
    };

    let mut rendered = first.to_string();
    let mut previous = distances.get(first);

    for node in rest {
        let current = distances.get(node);
        let hop = match (previous, current) {
            (Distance::Reached(prev), Distance::Reached(cur)) => cur.checked_sub(prev),
            _ => None,
        };

        match hop {
            Some(hop) => rendered.push_str(&format!(" → ({}) → {}", hop, node)),
            None => rendered.push_str(&format!(" → (?) → {}", node)),
        }
        previous = current;
    }

    rendered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{graph::Graph, search::dijkstra::Dijkstra};

    fn table(distances: &[(&'static str, Distance)]) -> DistanceTable<&'static str> {
        let mut g = Graph::new();
        for (node, _) in distances {
            g.add_node(*node);
        }
        DistanceTable::new(&g, distances.iter().map(|(_, d)| *d).collect())
    }

    #[test]
    fn single_node() {
        let distances = table(&[("A", Distance::Reached(0))]);
        assert_eq!(render_path(&["A"], &distances), "A");
    }

    #[test]
    fn empty_path() {
        let distances = table(&[]);
        assert_eq!(render_path::<&str>(&[], &distances), "");
    }

    #[test]
    fn deltas_come_from_the_table() {
        let distances = table(&[
            ("S1", Distance::Reached(0)),
            ("S2", Distance::Reached(10)),
            ("S3", Distance::Reached(25)),
        ]);
        assert_eq!(
            render_path(&["S1", "S2", "S3"], &distances),
            "S1 → (10) → S2 → (15) → S3"
        );
    }

    #[test]
    fn unreached_hop() {
        let distances = table(&[("A", Distance::Reached(0)), ("B", Distance::Unreached)]);
        assert_eq!(render_path(&["A", "B", "C"], &distances), "A → (?) → B → (?) → C");
    }

    #[test]
    fn uses_hop_taken_by_search() {
        //   A =4/9= B -1- C
        let mut g = Graph::new();
        g.add_edge("A", "B", 9);
        g.add_edge("A", "B", 4);
        g.add_edge("B", "C", 1);

        let result = Dijkstra::new(&g).search("A", "C").unwrap();
        assert_eq!(render_path(&result.path, &result.distances), "A → (4) → B → (1) → C");
    }
}
