use manifold::graph::InterestGraph;
use manifold::{LayoutEngine, LayoutOptions, Viewport};
use serde::Serialize;
use std::io::Read;

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Graph(manifold::graph::Error),
    Json(serde_json::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Graph(err) => write!(f, "{err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<manifold::graph::Error> for CliError {
    fn from(value: manifold::graph::Error) -> Self {
        Self::Graph(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[derive(Debug, Clone, Copy, Default)]
enum Command {
    #[default]
    Layout,
    Validate,
}

#[derive(Debug, Default)]
struct Args {
    command: Command,
    input: Option<String>,
    width: f64,
    height: f64,
    seed: u64,
    iterations: usize,
    pretty: bool,
}

#[derive(Serialize)]
struct NodeOut {
    x: f64,
    y: f64,
    start_x: f64,
    start_y: f64,
}

fn usage() -> &'static str {
    "manifold-cli\n\
\n\
USAGE:\n\
  manifold-cli [layout] [--width <px>] [--height <px>] [--seed <n>] [--iterations <n>] [--pretty] [<path>|-]\n\
  manifold-cli validate [<path>|-]\n\
\n\
NOTES:\n\
  - If <path> is omitted or '-', the graph JSON is read from stdin.\n\
  - layout prints a JSON object mapping node id to its resting position and\n\
    off-viewport entry point, in input node order.\n\
  - The default viewport is 1200x700.\n\
"
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args {
        width: 1200.0,
        height: 700.0,
        iterations: LayoutOptions::default().iterations,
        ..Default::default()
    };

    let mut it = argv.iter().skip(1).peekable();
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "layout" => args.command = Command::Layout,
            "validate" => args.command = Command::Validate,
            "--pretty" => args.pretty = true,
            "--width" => {
                let Some(w) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.width = w.parse::<f64>().map_err(|_| CliError::Usage(usage()))?;
                if !(args.width.is_finite() && args.width > 0.0) {
                    return Err(CliError::Usage(usage()));
                }
            }
            "--height" => {
                let Some(h) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.height = h.parse::<f64>().map_err(|_| CliError::Usage(usage()))?;
                if !(args.height.is_finite() && args.height > 0.0) {
                    return Err(CliError::Usage(usage()));
                }
            }
            "--seed" => {
                let Some(seed) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.seed = seed.parse::<u64>().map_err(|_| CliError::Usage(usage()))?;
            }
            "--iterations" => {
                let Some(iterations) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.iterations = iterations
                    .parse::<usize>()
                    .map_err(|_| CliError::Usage(usage()))?;
            }
            other if other.starts_with('-') && other != "-" => {
                return Err(CliError::Usage(usage()));
            }
            path => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some(path.to_string());
            }
        }
    }

    Ok(args)
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

fn write_json(value: &impl Serialize, pretty: bool) -> Result<(), CliError> {
    if pretty {
        serde_json::to_writer_pretty(std::io::stdout().lock(), value)?;
    } else {
        serde_json::to_writer(std::io::stdout().lock(), value)?;
    }
    Ok(())
}

fn run(args: Args) -> Result<(), CliError> {
    let text = read_input(args.input.as_deref())?;
    let graph = InterestGraph::from_json(&text)?;

    match args.command {
        Command::Validate => {
            println!("{} nodes, {} edges", graph.nodes().len(), graph.edges().len());
            Ok(())
        }
        Command::Layout => {
            let options = LayoutOptions {
                iterations: args.iterations,
                seed: args.seed,
                ..Default::default()
            };
            let viewport = Viewport::new(args.width, args.height);
            let engine = LayoutEngine::new(graph, viewport, options);

            let mut out = serde_json::Map::new();
            for (node, pos) in engine.graph().nodes().iter().zip(engine.positions()) {
                out.insert(
                    node.id.clone(),
                    serde_json::to_value(NodeOut {
                        x: pos.x,
                        y: pos.y,
                        start_x: pos.start_x,
                        start_y: pos.start_y,
                    })?,
                );
            }
            write_json(&out, args.pretty)
        }
    }
}

fn main() {
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

    match run(args) {
        Ok(()) => {}
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}
