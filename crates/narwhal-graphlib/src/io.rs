//! Plain-text graph formats.
//!
//! - [`read_adj_list`] / [`write_adj_list`]: the adjacency-list format
//!   (`directed|undirected`, `<n> [<m>]`, then `<src> <dst>[,<value>] ...` lines).
//! - [`read_edge_list`]: a 1-based weighted edge list (`<n> [<m>]`, then `<u> <v> <cost>`).

mod adj_list;
mod edge_list;

pub use adj_list::{parse_adj_list, read_adj_list, write_adj_list};
pub use edge_list::read_edge_list;

use crate::error::{Error, Result};
use crate::graph::{Graph, Orientation};
use regex::Regex;
use std::sync::OnceLock;

const COUNTS_EXPECTED: &str = "number of vertices followed by optional number of edges";

// Edge counts only size the initial reservation; don't trust huge headers.
const MAX_EDGE_RESERVATION: usize = 1 << 20;

fn counts_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(\d+)(\s+\d+)?").expect("valid regex"))
}

/// Parses `<vertex-count> [<edge-count>]`.
fn parse_counts(line: &str) -> Result<(usize, Option<usize>)> {
    let bad_format = || Error::Format {
        expected: COUNTS_EXPECTED,
        actual: line.to_string(),
    };
    let caps = counts_re().captures(line).ok_or_else(bad_format)?;
    let vertices = caps[1].parse::<usize>().map_err(|_| bad_format())?;
    let edges = match caps.get(2) {
        Some(m) => Some(m.as_str().trim().parse::<usize>().map_err(|_| bad_format())?),
        None => None,
    };
    Ok((vertices, edges))
}

fn edge_reservation(edges: Option<usize>, mirrored: bool) -> usize {
    let edges = edges.unwrap_or(0).min(MAX_EDGE_RESERVATION);
    if mirrored { edges * 2 } else { edges }
}

/// Builds a graph with the vertices announced by the counts line.
///
/// A vertex count that cannot be allocated is reported as a format error.
fn allocate_graph<V, E>(orientation: Orientation, counts: &str) -> Result<Graph<V, E>>
where
    V: Default,
{
    let (vertex_count, edge_count) = parse_counts(counts)?;
    let mut g: Graph<V, E> = Graph::with_capacity(
        orientation,
        0,
        edge_reservation(edge_count, orientation == Orientation::Undirected),
    );
    g.try_reserve_vertices(vertex_count)
        .map_err(|_| Error::Format {
            expected: COUNTS_EXPECTED,
            actual: counts.to_string(),
        })?;
    for _ in 0..vertex_count {
        g.add_vertex(V::default());
    }
    Ok(g)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_accept_optional_edge_count() {
        assert_eq!(parse_counts("10").unwrap(), (10, None));
        assert_eq!(parse_counts("10 16").unwrap(), (10, Some(16)));
        assert_eq!(parse_counts("10\t16").unwrap(), (10, Some(16)));
        assert_eq!(parse_counts("7 trailing text").unwrap(), (7, None));
    }

    #[test]
    fn counts_require_a_leading_integer() {
        for line in ["", "n=10", " 10", "ten 16"] {
            let err = parse_counts(line).unwrap_err();
            assert!(
                matches!(err, Error::Format { expected, ref actual } if expected == COUNTS_EXPECTED && actual == line),
                "{line:?} -> {err}"
            );
        }
    }
}
