use super::allocate_graph;
use crate::error::{Error, Result};
use crate::graph::{Graph, Orientation, VertexId};
use crate::value::EdgeValue;
use std::io::BufRead;

const EDGE_LINE_EXPECTED: &str = "<u> <v> [<cost>] with 1-based vertex ids";

/// Loads a 1-based weighted edge list into a graph with zero-based ids.
///
/// The first non-blank line is `<vertex-count> [<edge-count>]`; every following non-blank
/// line is `<u> <v> [<cost>]` (cost defaults to 0).
pub fn read_edge_list<V, E, R>(reader: R, orientation: Orientation) -> Result<Graph<V, E>>
where
    V: Default,
    E: EdgeValue + Clone,
    R: BufRead,
{
    let mut lines = reader.lines();

    let mut counts = String::new();
    for line in lines.by_ref() {
        let line = line?;
        if !line.trim().is_empty() {
            counts = line;
            break;
        }
    }
    let mut g: Graph<V, E> = allocate_graph(orientation, &counts)?;

    for line in lines {
        let line = line?;
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let (u, v, cost) = match tokens.as_slice() {
            [] => continue,
            [u, v] => (*u, *v, "0"),
            [u, v, cost] => (*u, *v, *cost),
            _ => return Err(bad_line(&line)),
        };
        let u = parse_one_based(u, &line)?;
        let v = parse_one_based(v, &line)?;
        let cost = cost.parse::<i64>().map_err(|_| bad_line(&line))?;
        let label = E::from_value(cost).ok_or_else(|| bad_line(&line))?;
        g.add_edge(u, v, label)?;
    }

    tracing::debug!(
        %orientation,
        vertices = g.vertex_count(),
        edges = g.edge_count(),
        "loaded edge list"
    );
    Ok(g)
}

fn parse_one_based(token: &str, line: &str) -> Result<VertexId> {
    match token.parse::<VertexId>() {
        Ok(id) if id > 0 => Ok(id - 1),
        _ => Err(bad_line(line)),
    }
}

fn bad_line(line: &str) -> Error {
    Error::Format {
        expected: EDGE_LINE_EXPECTED,
        actual: line.to_string(),
    }
}
