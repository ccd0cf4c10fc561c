use narwhal::dijkstra::{self, DijkstraVertex, INFINITY};
use narwhal::graphlib::io::{parse_adj_list, read_edge_list};
use narwhal::graphlib::{Graph, Orientation};

const DIJKSTRA: &str = include_str!("../../../fixtures/dijkstra.txt");
const DIJKSTRA_EDGES: &str = include_str!("../../../fixtures/dijkstra_edges.txt");

fn fixture() -> Graph<DijkstraVertex, i64> {
    parse_adj_list(DIJKSTRA).unwrap()
}

#[test]
fn distances_from_vertex_zero() {
    let mut g = fixture();
    dijkstra::shortest_paths(&mut g, 0).unwrap();
    let expected = [0, 10, 6, 7, 5, 13, 9, 16, 20, 19];
    assert_eq!(
        dijkstra::distances(&g),
        expected.iter().map(|&d| Some(d)).collect::<Vec<_>>()
    );
}

#[test]
fn parent_pointers_trace_a_shortest_path() {
    let mut g = fixture();
    dijkstra::shortest_paths(&mut g, 0).unwrap();
    assert_eq!(dijkstra::path_to(&g, 8), Some(vec![0, 2, 6, 7, 8]));
    assert_eq!(dijkstra::path_to(&g, 0), Some(vec![0]));
    assert_eq!(g[0].parent, None);
}

#[test]
fn edge_list_input_gives_the_same_distances() {
    let mut from_edges: Graph<DijkstraVertex, i64> =
        read_edge_list(DIJKSTRA_EDGES.as_bytes(), Orientation::Undirected).unwrap();
    let mut from_adj = fixture();
    dijkstra::shortest_paths(&mut from_edges, 3).unwrap();
    dijkstra::shortest_paths(&mut from_adj, 3).unwrap();
    assert_eq!(dijkstra::distances(&from_edges), dijkstra::distances(&from_adj));
}

#[test]
fn unreachable_vertices_keep_infinity() {
    let mut g: Graph<DijkstraVertex, i64> =
        parse_adj_list("directed\n4\n0 1,2\n1 2,3\n3 0,1\n").unwrap();
    dijkstra::shortest_paths(&mut g, 0).unwrap();
    assert_eq!(g[3].distance, INFINITY);
    assert_eq!(g[3].parent, None);
    assert_eq!(dijkstra::distances(&g), vec![Some(0), Some(2), Some(5), None]);
    assert_eq!(dijkstra::path_to(&g, 3), None);
}

#[test]
fn zero_length_edges_are_allowed() {
    let mut g: Graph<DijkstraVertex, i64> =
        parse_adj_list("directed\n3\n0 1,0 2,4\n1 2,0\n").unwrap();
    dijkstra::shortest_paths(&mut g, 0).unwrap();
    assert_eq!(dijkstra::distances(&g), vec![Some(0), Some(0), Some(0)]);
}

#[test]
fn rerun_from_another_source_resets_labels() {
    let mut g = fixture();
    dijkstra::shortest_paths(&mut g, 0).unwrap();
    dijkstra::shortest_paths(&mut g, 9).unwrap();
    assert_eq!(g[9].distance, 0);
    assert_eq!(g[0].distance, 19);
}

#[test]
fn unknown_source_is_an_error() {
    let mut g = fixture();
    assert!(dijkstra::shortest_paths(&mut g, 10).is_err());
}
