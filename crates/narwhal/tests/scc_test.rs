use narwhal::graphlib::Graph;
use narwhal::graphlib::io::parse_adj_list;
use narwhal::scc::{self, DfsStrategy, SccVertex};

const STRONGLY_CONNECTED: &str = include_str!("../../../fixtures/strongly_connected.txt");

fn fixture() -> Graph<SccVertex, ()> {
    parse_adj_list(STRONGLY_CONNECTED).unwrap()
}

fn sorted_sizes(g: &mut Graph<SccVertex, ()>, strategy: DfsStrategy) -> Vec<usize> {
    let mut sizes: Vec<usize> = scc::kosaraju_with(g, strategy).into_values().collect();
    sizes.sort_unstable_by(|a, b| b.cmp(a));
    sizes
}

#[test]
fn finds_component_sizes() {
    let mut g = fixture();
    assert_eq!(sorted_sizes(&mut g, DfsStrategy::Iterative), vec![4, 3, 3, 1]);
}

#[test]
fn recursive_and_iterative_label_identically() {
    let mut recursive = fixture();
    let mut iterative = fixture();
    let a = scc::kosaraju_with(&mut recursive, DfsStrategy::Recursive);
    let b = scc::kosaraju_with(&mut iterative, DfsStrategy::Iterative);
    assert_eq!(a, b);
    let labels = |g: &Graph<SccVertex, ()>| -> Vec<SccVertex> {
        g.vertices().map(|(_, l)| l.clone()).collect()
    };
    assert_eq!(labels(&recursive), labels(&iterative));
}

#[test]
fn leaders_group_cycle_members() {
    let mut g = fixture();
    let members = scc::components(&mut g);
    let mut groups: Vec<Vec<usize>> = members.into_values().collect();
    groups.sort();
    assert_eq!(
        groups,
        vec![vec![0, 1, 2, 3], vec![4, 5, 6], vec![7, 8, 9], vec![10]]
    );
    for (v, label) in g.vertices() {
        let leader = label.leader.unwrap();
        assert_eq!(g[leader].leader, Some(leader), "leader of {v} leads itself");
    }
}

#[test]
fn acyclic_graph_has_singleton_components() {
    let mut g: Graph<SccVertex, ()> = parse_adj_list("directed\n4\n0 1\n1 2\n2 3\n").unwrap();
    let sizes = scc::kosaraju(&mut g);
    assert_eq!(sizes.len(), 4);
    assert!(sizes.values().all(|&size| size == 1));
}

#[test]
fn every_vertex_is_assigned_after_a_run() {
    let mut g = fixture();
    scc::kosaraju(&mut g);
    assert!(
        g.vertices()
            .all(|(_, l)| l.explored && l.leader.is_some() && l.finish_time.is_some())
    );
}

#[test]
fn deep_chain_does_not_need_recursion() {
    let n = 200_000;
    let mut text = format!("directed\n{n}\n");
    for v in 0..n - 1 {
        text.push_str(&format!("{v} {}\n", v + 1));
    }
    text.push_str(&format!("{} 0\n", n - 1));
    let mut g: Graph<SccVertex, ()> = parse_adj_list(&text).unwrap();
    let sizes = scc::kosaraju(&mut g);
    assert_eq!(sizes.into_values().collect::<Vec<_>>(), vec![n]);
}
