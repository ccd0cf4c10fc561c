use narwhal::bfs::{self, BfsVertex};
use narwhal::dijkstra::{self, DijkstraVertex};
use narwhal::graphlib::io::{parse_adj_list, read_edge_list, write_adj_list};
use narwhal::graphlib::{self, EdgeValue, Graph, Orientation, VertexId};
use narwhal::min_cut;
use narwhal::mst::{self, PrimVertex, SpanningTree};
use narwhal::scc::{self, DfsStrategy, SccVertex};
use serde::Serialize;
use std::io::Read;
use std::str::FromStr;

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Graph(graphlib::Error),
    Algorithm(narwhal::Error),
    Json(serde_json::Error),
    Unsupported(&'static str),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Graph(err) => write!(f, "{err}"),
            CliError::Algorithm(err) => write!(f, "{err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
            CliError::Unsupported(msg) => write!(f, "{msg}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<graphlib::Error> for CliError {
    fn from(value: graphlib::Error) -> Self {
        Self::Graph(value)
    }
}

impl From<narwhal::Error> for CliError {
    fn from(value: narwhal::Error) -> Self {
        Self::Algorithm(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Bfs,
    Dijkstra,
    Prim,
    Kruskal,
    Scc,
    MinCut,
    Write,
}

impl FromStr for Command {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bfs" => Ok(Self::Bfs),
            "dijkstra" => Ok(Self::Dijkstra),
            "prim" => Ok(Self::Prim),
            "kruskal" => Ok(Self::Kruskal),
            "scc" => Ok(Self::Scc),
            "mincut" => Ok(Self::MinCut),
            "write" => Ok(Self::Write),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Default)]
struct Args {
    command: Option<Command>,
    input: Option<String>,
    pretty: bool,
    edge_list: bool,
    directed: bool,
    from: Option<VertexId>,
    to: Option<VertexId>,
    source: VertexId,
    strategy: DfsStrategy,
    seed: Option<u64>,
}

#[derive(Serialize)]
struct DistanceOut {
    from: VertexId,
    to: VertexId,
    distance: Option<usize>,
}

#[derive(Serialize)]
struct TraverseOut {
    from: VertexId,
    reached: usize,
    distances: Vec<Option<usize>>,
}

#[derive(Serialize)]
struct ShortestPathsOut {
    source: VertexId,
    distances: Vec<Option<i64>>,
    parents: Vec<Option<VertexId>>,
}

#[derive(Serialize)]
struct TreeEdgeOut {
    source: VertexId,
    target: VertexId,
    cost: i64,
}

#[derive(Serialize)]
struct SpanningTreeOut {
    algorithm: &'static str,
    cost: i64,
    edges: Vec<TreeEdgeOut>,
}

#[derive(Serialize)]
struct ComponentOut {
    leader: VertexId,
    size: usize,
}

#[derive(Serialize)]
struct SccOut {
    count: usize,
    components: Vec<ComponentOut>,
}

#[derive(Serialize)]
struct MinCutOut {
    vertices: usize,
    trials: usize,
    cut: usize,
}

fn usage() -> &'static str {
    "narwhal-cli\n\
\n\
USAGE:\n\
  narwhal-cli bfs --from <id> [--to <id>] [<input options>] [<path>|-]\n\
  narwhal-cli dijkstra [--source <id>] [--pretty] [<input options>] [<path>|-]\n\
  narwhal-cli prim|kruskal [--pretty] [<input options>] [<path>|-]\n\
  narwhal-cli scc [--strategy iterative|recursive] [--pretty] [<input options>] [<path>|-]\n\
  narwhal-cli mincut [--seed <n>] [<input options>] [<path>|-]\n\
  narwhal-cli write [<input options>] [<path>|-]\n\
\n\
INPUT OPTIONS:\n\
  --edge-list    read a 1-based `<u> <v> [<cost>]` edge list instead of an adjacency list\n\
  --directed     treat an edge list as directed (default: undirected)\n\
\n\
NOTES:\n\
  - If <path> is omitted or '-', input is read from stdin.\n\
  - Results are printed as JSON; write re-emits the adjacency list.\n\
  - Set RUST_LOG (e.g. RUST_LOG=narwhal=debug) for diagnostics on stderr.\n\
"
}

fn parse_id(value: Option<&String>) -> Result<VertexId, CliError> {
    let Some(value) = value else {
        return Err(CliError::Usage(usage()));
    };
    value
        .parse::<VertexId>()
        .map_err(|_| CliError::Usage(usage()))
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args::default();

    let mut it = argv.iter().skip(1).peekable();
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "--pretty" => args.pretty = true,
            "--edge-list" => args.edge_list = true,
            "--directed" => args.directed = true,
            "--from" => args.from = Some(parse_id(it.next())?),
            "--to" => args.to = Some(parse_id(it.next())?),
            "--source" => args.source = parse_id(it.next())?,
            "--strategy" => {
                let Some(strategy) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.strategy = match strategy.as_str() {
                    "iterative" => DfsStrategy::Iterative,
                    "recursive" => DfsStrategy::Recursive,
                    _ => return Err(CliError::Usage(usage())),
                };
            }
            "--seed" => {
                let Some(seed) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.seed = Some(seed.parse::<u64>().map_err(|_| CliError::Usage(usage()))?);
            }
            "--" => {
                if let Some(rest) = it.next() {
                    if args.input.is_some() {
                        return Err(CliError::Usage(usage()));
                    }
                    args.input = Some(rest.clone());
                }
                if it.peek().is_some() {
                    return Err(CliError::Usage(usage()));
                }
            }
            "-" if args.command.is_some() && args.input.is_none() => {
                args.input = Some("-".to_string());
            }
            other if other.starts_with('-') => return Err(CliError::Usage(usage())),
            word if args.command.is_none() => {
                args.command = Some(word.parse().map_err(|_| CliError::Usage(usage()))?);
            }
            path => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some(path.to_string());
            }
        }
    }

    match args.command {
        None => Err(CliError::Usage(usage())),
        Some(Command::Bfs) if args.from.is_none() => Err(CliError::Usage(usage())),
        Some(_) => Ok(args),
    }
}

fn read_input(input: Option<&str>) -> Result<String, CliError> {
    match input {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        Some(path) => Ok(std::fs::read_to_string(path)?),
    }
}

fn load<V, E>(text: &str, args: &Args) -> Result<Graph<V, E>, CliError>
where
    V: Default,
    E: EdgeValue + Clone,
{
    let g = if args.edge_list {
        let orientation = if args.directed {
            Orientation::Directed
        } else {
            Orientation::Undirected
        };
        read_edge_list(text.as_bytes(), orientation)?
    } else {
        parse_adj_list(text)?
    };
    Ok(g)
}

fn write_json(value: &impl Serialize, pretty: bool) -> Result<(), CliError> {
    if pretty {
        serde_json::to_writer_pretty(std::io::stdout().lock(), value)?;
    } else {
        serde_json::to_writer(std::io::stdout().lock(), value)?;
    }
    println!();
    Ok(())
}

fn tree_out<V>(
    algorithm: &'static str,
    g: &Graph<V, i64>,
    tree: SpanningTree,
) -> SpanningTreeOut {
    let edges = tree
        .edges
        .iter()
        .filter_map(|&e| g.edge(e))
        .map(|edge| TreeEdgeOut {
            source: edge.source,
            target: edge.target,
            cost: edge.label,
        })
        .collect();
    SpanningTreeOut {
        algorithm,
        cost: tree.cost,
        edges,
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let text = read_input(args.input.as_deref())?;
    let Some(command) = args.command else {
        return Err(CliError::Usage(usage()));
    };
    tracing::debug!(?command, input = ?args.input, edge_list = args.edge_list, "running");

    match command {
        Command::Bfs => {
            let mut g: Graph<BfsVertex, ()> = load(&text, &args)?;
            let from = args.from.unwrap_or_default();
            match args.to {
                Some(to) => {
                    let distance = bfs::distance(&mut g, from, to)?;
                    write_json(&DistanceOut { from, to, distance }, args.pretty)?;
                }
                None => {
                    let reached = bfs::traverse(&mut g, from)?;
                    let distances = g.vertices().map(|(_, label)| label.distance).collect();
                    write_json(
                        &TraverseOut {
                            from,
                            reached,
                            distances,
                        },
                        args.pretty,
                    )?;
                }
            }
        }
        Command::Dijkstra => {
            let mut g: Graph<DijkstraVertex, i64> = load(&text, &args)?;
            dijkstra::shortest_paths(&mut g, args.source)?;
            let out = ShortestPathsOut {
                source: args.source,
                distances: dijkstra::distances(&g),
                parents: g.vertices().map(|(_, label)| label.parent).collect(),
            };
            write_json(&out, args.pretty)?;
        }
        Command::Prim => {
            let mut g: Graph<PrimVertex, i64> = load(&text, &args)?;
            let tree = mst::prim(&mut g)?;
            write_json(&tree_out("prim", &g, tree), args.pretty)?;
        }
        Command::Kruskal => {
            let g: Graph<(), i64> = load(&text, &args)?;
            let tree = mst::kruskal(&g)?;
            write_json(&tree_out("kruskal", &g, tree), args.pretty)?;
        }
        Command::Scc => {
            let mut g: Graph<SccVertex, ()> = load(&text, &args)?;
            if !g.is_directed() {
                return Err(CliError::Unsupported("scc requires a directed graph"));
            }
            let sizes = scc::kosaraju_with(&mut g, args.strategy);
            let mut components: Vec<ComponentOut> = sizes
                .into_iter()
                .map(|(leader, size)| ComponentOut { leader, size })
                .collect();
            components.sort_by(|a, b| b.size.cmp(&a.size).then(a.leader.cmp(&b.leader)));
            let out = SccOut {
                count: components.len(),
                components,
            };
            write_json(&out, args.pretty)?;
        }
        Command::MinCut => {
            let g: Graph<(), ()> = load(&text, &args)?;
            let cut = match args.seed {
                Some(seed) => min_cut::min_cut_seeded(&g, seed),
                None => min_cut::min_cut(&g),
            };
            let vertices = g.vertex_count();
            write_json(
                &MinCutOut {
                    vertices,
                    trials: min_cut::trials(vertices),
                    cut,
                },
                args.pretty,
            )?;
        }
        Command::Write => {
            let g: Graph<(), i64> = load(&text, &args)?;
            write_adj_list(&g, std::io::stdout().lock())?;
        }
    }
    Ok(())
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("narwhal=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_tracing();

    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    if let Err(err) = run(args) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
