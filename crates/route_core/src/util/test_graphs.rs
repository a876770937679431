use crate::{edge, graph::Graph};

/// Eleven stations `A` to `K`, every station has three to five routes.
pub fn generate_complex_graph() -> Graph {
    let mut graph = Graph::new();

    graph.add_edges(vec![
        edge!("A", "B", 3), // A <=> B
        edge!("A", "C", 5), // A <=> C
        edge!("A", "K", 3), // A <=> K
        edge!("B", "D", 5), // B <=> D
        edge!("B", "C", 3), // B <=> C
        edge!("C", "D", 2), // C <=> D
        edge!("C", "J", 2), // C <=> J
        edge!("D", "J", 4), // D <=> J
        edge!("D", "E", 7), // D <=> E
        edge!("E", "J", 3), // E <=> J
        edge!("E", "F", 6), // E <=> F
        edge!("F", "H", 2), // F <=> H
        edge!("F", "G", 4), // F <=> G
        edge!("G", "H", 3), // G <=> H
        edge!("G", "I", 5), // G <=> I
        edge!("H", "I", 3), // H <=> I
        edge!("H", "J", 2), // H <=> J
        edge!("I", "J", 4), // I <=> J
        edge!("I", "K", 6), // I <=> K
        edge!("J", "K", 3), // J <=> K
    ]);

    graph
}

pub fn generate_simple_graph() -> Graph {
    // S1 -10- S2 -15- S3
    //  \______30______/
    let mut g = Graph::new();

    g.add_edges(vec![
        edge!("S1", "S2", 10),
        edge!("S2", "S3", 15),
        edge!("S1", "S3", 30),
    ]);

    g
}
