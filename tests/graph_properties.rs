//! Structural properties checked across hand-built and generated graphs.
//!
//! petgraph serves as an independent oracle for strongly connected
//! components and shortest distances.

use std::collections::{BTreeSet, HashSet};

use graphscope::graph::{Direction, Graph, Order, Weight};
use petgraph::algo::{dijkstra, tarjan_scc};
use petgraph::visit::EdgeRef;

/// Small linear congruential generator so generated graphs are reproducible.
struct Lcg(u64);

impl Lcg {
    fn next(&mut self, bound: u32) -> u32 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        ((self.0 >> 33) % u64::from(bound)) as u32
    }
}

fn random_directed(seed: u64, vertices: u32, edges: usize) -> Graph<u32> {
    let mut rng = Lcg(seed);
    let mut graph = Graph::new();
    for v in 0..vertices {
        graph.add(v);
    }
    for _ in 0..edges {
        let (u, v) = (rng.next(vertices), rng.next(vertices));
        if u != v {
            graph.connect(&u, &v, Weight::Value(f64::from(rng.next(9) + 1)));
        }
    }
    graph
}

fn random_undirected(seed: u64, vertices: u32, edges: usize) -> Graph<u32> {
    let mut rng = Lcg(seed);
    let mut graph = Graph::new();
    for v in 0..vertices {
        graph.add(v);
    }
    // Spanning path keeps the graph connected
    for v in 1..vertices {
        graph
            .connect(&(v - 1), &v, Weight::Unit)
            .connect(&v, &(v - 1), Weight::Unit);
    }
    for _ in 0..edges {
        let (u, v) = (rng.next(vertices), rng.next(vertices));
        if u != v {
            graph
                .connect(&u, &v, Weight::Unit)
                .connect(&v, &u, Weight::Unit);
        }
    }
    graph
}

fn undirected(edges: &[(&'static str, &'static str)]) -> Graph<&'static str> {
    let mut graph = Graph::new();
    for &(u, v) in edges {
        graph.add(u).add(v);
        graph
            .connect(&u, &v, Weight::Unit)
            .connect(&v, &u, Weight::Unit);
    }
    graph
}

fn edge_set<T: Clone + Ord>(
    edges: impl Iterator<Item = (T, T, Weight)>,
) -> BTreeSet<(T, T, String)> {
    edges
        .map(|(source, target, weight)| (source, target, weight.to_string()))
        .collect()
}

fn partition<T: Clone + Ord>(components: &[Vec<T>]) -> BTreeSet<BTreeSet<T>> {
    components
        .iter()
        .map(|component| component.iter().cloned().collect())
        .collect()
}

#[test]
fn test_double_reverse_preserves_edges() {
    for seed in 1..6 {
        let graph = random_directed(seed, 10, 25);
        let twice = graph.reverse_graph().reverse_graph();
        assert_eq!(
            edge_set(graph.edges().map(|(u, v, w)| (*u, *v, w))),
            edge_set(twice.edges().map(|(u, v, w)| (*u, *v, w)))
        );
    }
}

#[test]
fn test_is_directed_matches_twin_edges() {
    for seed in 1..6 {
        let graph = random_directed(seed, 8, 20);
        let symmetric = graph
            .edges()
            .all(|(u, v, w)| graph.weight(v, u).ok().flatten() == Some(w));
        assert_eq!(graph.is_directed(), !symmetric);

        let undirected = random_undirected(seed, 8, 10);
        assert!(!undirected.is_directed());
    }
}

#[test]
fn test_connected_undirected_graph_is_one_component() {
    for seed in 1..6 {
        let graph = random_undirected(seed, 12, 8);
        let components = graph.connected_components();
        assert_eq!(components.len(), 1);
        assert_eq!(components[0].len(), 12);
        assert!(graph.is_connected());
    }
}

#[test]
fn test_strong_components_match_tarjan() {
    for seed in 1..8 {
        let graph = random_directed(seed, 12, 20);
        if !graph.is_directed() {
            continue;
        }
        let view = graph.to_petgraph();
        let oracle: Vec<Vec<u32>> = tarjan_scc(&view.graph)
            .into_iter()
            .map(|component| {
                component
                    .into_iter()
                    .filter_map(|index| view.vertex_at(index).copied())
                    .collect()
            })
            .collect();

        assert_eq!(partition(&graph.connected_components()), partition(&oracle));
    }
}

#[test]
fn test_strong_components_are_mutually_reachable() {
    let graph = random_directed(42, 10, 22);
    for component in graph.connected_components().iter() {
        for vertex in component {
            let reach: HashSet<u32> = graph
                .traverse(vertex, Direction::Forward, Order::Width)
                .unwrap()
                .into_iter()
                .collect();
            assert!(component.iter().all(|other| reach.contains(other)));
        }
    }
}

#[test]
fn test_cut_vertex_removal_round_trip() {
    for seed in 1..6 {
        let graph = random_undirected(seed, 10, 4);
        let before = graph.connected_components().len();
        let cut = graph.cut_vertices();

        for vertex in graph.vertices().iter() {
            let mut without = graph.copy();
            without.remove(vertex);
            let after = without.connected_components().len();
            if cut.contains(vertex) {
                assert!(after > before, "{} should be a cut vertex", vertex);
            } else {
                assert!(after <= before, "{} should not be a cut vertex", vertex);
            }
        }
    }
}

#[test]
fn test_strong_articulation_point_round_trip() {
    for seed in 1..8 {
        let graph = random_directed(seed, 9, 24);
        if !graph.is_directed() {
            continue;
        }
        let before = graph.connected_components().len();
        let points = graph.cut_vertices();

        for vertex in graph.vertices().iter() {
            let mut without = graph.copy();
            without.remove(vertex);
            let increased = without.connected_components().len() > before;
            assert_eq!(
                points.contains(vertex),
                increased,
                "seed {}: vertex {}",
                seed,
                vertex
            );
        }
    }
}

#[test]
fn test_dijkstra_example() {
    let graph = Graph::from_edges([
        ("A", "B", Weight::Value(2.0)),
        ("B", "C", Weight::Value(3.0)),
        ("A", "C", Weight::Value(10.0)),
    ]);
    let paths = graph.dijkstra(&"A").unwrap();

    assert_eq!(paths.distance(&"A"), Some(0.0));
    assert_eq!(paths.distance(&"B"), Some(2.0));
    assert_eq!(paths.distance(&"C"), Some(5.0));
    assert_eq!(graph.path(&"A", &"C").unwrap(), vec!["A", "B", "C"]);
}

#[test]
fn test_dijkstra_matches_petgraph() {
    for seed in 1..6 {
        let graph = random_directed(seed, 12, 30);
        let view = graph.to_petgraph();

        for source in graph.vertices().iter() {
            let ours = graph.dijkstra(source).unwrap();
            let start = view.index_of(source).unwrap();
            let oracle = dijkstra(&view.graph, start, None, |edge| edge.weight().cost());

            for target in graph.vertices().iter() {
                let index = view.index_of(target).unwrap();
                match oracle.get(&index) {
                    Some(&expected) => {
                        assert_eq!(ours.distance(target), Some(expected));
                        let path = ours.path(target);
                        assert_eq!(path.first(), Some(source));
                        assert_eq!(path.last(), Some(target));
                    }
                    None => assert!(!ours.is_reachable(target)),
                }
            }
        }
    }
}

#[test]
fn test_triangle_has_no_cut_vertices() {
    let graph = undirected(&[("A", "B"), ("B", "C"), ("C", "A")]);
    assert!(graph.cut_vertices().is_empty());
}

#[test]
fn test_bridge_path_cut_vertex() {
    let graph = undirected(&[("A", "B"), ("B", "C")]);
    let cut = graph.cut_vertices();
    assert_eq!(cut.len(), 1);
    assert!(cut.contains(&"B"));
}

#[test]
fn test_caches_follow_disconnect_and_reconnect() {
    let mut graph = undirected(&[("A", "B"), ("B", "C"), ("C", "A"), ("C", "D")]);
    assert_eq!(graph.connected_components().len(), 1);
    assert_eq!(graph.cut_vertices().iter().copied().collect::<Vec<_>>(), vec!["C"]);

    graph.disconnect(&"C", &"A").disconnect(&"A", &"C");
    assert_eq!(graph.connected_components().len(), 1);
    assert_eq!(
        graph.cut_vertices().iter().copied().collect::<Vec<_>>(),
        vec!["B", "C"]
    );

    graph.disconnect(&"C", &"D").disconnect(&"D", &"C");
    assert_eq!(graph.connected_components().len(), 2);
    assert!(!graph.is_connected());

    graph
        .connect(&"C", &"A", Weight::Unit)
        .connect(&"A", &"C", Weight::Unit)
        .connect(&"C", &"D", Weight::Unit)
        .connect(&"D", &"C", Weight::Unit);
    assert_eq!(graph.connected_components().len(), 1);
    assert!(graph.is_connected());
    assert_eq!(graph.cut_vertices().iter().copied().collect::<Vec<_>>(), vec!["C"]);
}

#[test]
fn test_full_traversal_covers_every_vertex() {
    let graph = random_directed(7, 15, 10);
    for order in [Order::Depth, Order::Width] {
        let visited = graph.travel_full_graph(&0, order).unwrap();
        assert_eq!(visited.len(), 15);
        assert_eq!(visited[0], 0);
        let unique: HashSet<_> = visited.iter().collect();
        assert_eq!(unique.len(), 15);
    }
}
