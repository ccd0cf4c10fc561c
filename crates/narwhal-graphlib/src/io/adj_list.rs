use super::allocate_graph;
use crate::error::{Error, Result};
use crate::graph::{Graph, Orientation, VertexId};
use crate::value::EdgeValue;
use std::io::{BufRead, Write};

const ORIENTATION_EXPECTED: &str = "directed or undirected";
const VERTEX_ID_EXPECTED: &str = "vertex id";
const EDGE_VALUE_EXPECTED: &str = "edge value accepted by the edge label type";

/// Loads a graph from the adjacency-list format.
///
/// All vertices `0..n` are created (with `V::default()`) before any edge line is read.
/// Each `<dst>` token inserts one edge with value 0, each `<dst>,<value>` token one edge
/// with that value; undirected graphs get the mirrored record as well. Blank lines are
/// skipped. Vertex ids outside `0..n` fail with [`Error::VertexNotFound`].
pub fn read_adj_list<V, E, R>(reader: R) -> Result<Graph<V, E>>
where
    V: Default,
    E: EdgeValue + Clone,
    R: BufRead,
{
    let mut lines = reader.lines();

    let header = lines.next().transpose()?.unwrap_or_default();
    let orientation = header
        .parse::<Orientation>()
        .map_err(|_| Error::Format {
            expected: ORIENTATION_EXPECTED,
            actual: header.clone(),
        })?;

    let counts = lines.next().transpose()?.unwrap_or_default();
    let mut g: Graph<V, E> = allocate_graph(orientation, &counts)?;

    for line in lines {
        read_edge_line(&mut g, &line?)?;
    }

    tracing::debug!(
        %orientation,
        vertices = g.vertex_count(),
        edges = g.edge_count(),
        "loaded adjacency list"
    );
    Ok(g)
}

pub fn parse_adj_list<V, E>(text: &str) -> Result<Graph<V, E>>
where
    V: Default,
    E: EdgeValue + Clone,
{
    read_adj_list(text.as_bytes())
}

fn read_edge_line<V, E>(g: &mut Graph<V, E>, line: &str) -> Result<()>
where
    E: EdgeValue + Clone,
{
    let mut tokens = line.split_whitespace();
    let Some(first) = tokens.next() else {
        return Ok(());
    };
    let u = parse_vertex_id(first, line)?;
    g.check_vertex(u)?;

    for token in tokens {
        let (dst, value) = match token.split_once(',') {
            Some((dst, value)) => {
                let value = value.parse::<i64>().map_err(|_| Error::Format {
                    expected: EDGE_VALUE_EXPECTED,
                    actual: line.to_string(),
                })?;
                (dst, value)
            }
            None => (token, 0),
        };
        let v = parse_vertex_id(dst, line)?;
        let label = E::from_value(value).ok_or_else(|| Error::Format {
            expected: EDGE_VALUE_EXPECTED,
            actual: line.to_string(),
        })?;
        g.add_edge(u, v, label)?;
    }
    Ok(())
}

fn parse_vertex_id(token: &str, line: &str) -> Result<VertexId> {
    token.parse::<VertexId>().map_err(|_| Error::Format {
        expected: VERTEX_ID_EXPECTED,
        actual: line.to_string(),
    })
}

/// Writes `<nvertices>\t<nedges>` followed by one line per vertex: its id and the targets
/// of its outgoing edges (`<dst>,<value>` when the label carries a value).
///
/// This is the inverse of the reader's edge section only: the orientation line is not
/// written and undirected graphs list both mirrored records.
pub fn write_adj_list<V, E, W>(g: &Graph<V, E>, mut out: W) -> Result<()>
where
    E: EdgeValue,
    W: Write,
{
    writeln!(out, "{}\t{}", g.vertex_count(), g.edge_count())?;
    for v in g.vertex_ids() {
        write!(out, "{v}")?;
        for &e in g.out_edges(v) {
            let Some(edge) = g.edge(e) else {
                continue;
            };
            match edge.label.value() {
                Some(value) => write!(out, "\t{},{value}", edge.target)?,
                None => write!(out, "\t{}", edge.target)?,
            }
        }
        writeln!(out)?;
    }
    out.flush()?;
    Ok(())
}
