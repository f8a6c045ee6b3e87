use cladogram::{DisplayLevel, LayoutConfig, create_phylogenetic_tree};
use std::io::Read;
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Cladogram(cladogram::Error),
    Json(serde_json::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Cladogram(err) => write!(f, "{err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<cladogram::Error> for CliError {
    fn from(value: cladogram::Error) -> Self {
        Self::Cladogram(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[derive(Debug, Default)]
struct Args {
    input: Option<String>,
    config: Option<String>,
    display_level: Option<DisplayLevel>,
    hide_labels: bool,
    pretty: bool,
}

fn usage() -> &'static str {
    "cladogram\n\
\n\
USAGE:\n\
  cladogram [--display-level <n>|unlimited] [--hide-labels] [--config <path>] [--pretty] [<path>|-]\n\
\n\
NOTES:\n\
  - If <path> is omitted or '-', the Newick string is read from stdin.\n\
  - Prints the figure as Plotly JSON to stdout.\n\
  - --config reads a JSON layout configuration; flags given on the command line take precedence.\n\
  - Set RUST_LOG (e.g. RUST_LOG=debug) for diagnostics on stderr.\n\
"
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args::default();

    let mut it = argv.iter().skip(1);
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "--pretty" => args.pretty = true,
            "--hide-labels" => args.hide_labels = true,
            "--display-level" => {
                let Some(level) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.display_level = Some(level.parse().map_err(|_| CliError::Usage(usage()))?);
            }
            "--config" => {
                let Some(path) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.config = Some(path.clone());
            }
            other if other.starts_with("--") => return Err(CliError::Usage(usage())),
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

fn read_input(path: Option<&str>) -> Result<String, CliError> {
    match path {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        Some(path) => Ok(std::fs::read_to_string(path)?),
    }
}

fn load_config(args: &Args) -> Result<LayoutConfig, CliError> {
    let mut config = match args.config.as_deref() {
        Some(path) => LayoutConfig::from_json_str(&std::fs::read_to_string(path)?)?,
        None => LayoutConfig::default(),
    };
    if let Some(display_level) = args.display_level {
        config = config.with_display_level(display_level);
    }
    if args.hide_labels {
        config = config.with_show_labels(false);
    }
    Ok(config)
}

fn run(args: Args) -> Result<(), CliError> {
    let config = load_config(&args)?;
    let newick = read_input(args.input.as_deref())?;
    tracing::debug!(bytes = newick.len(), ?config, "read input");

    let figure = create_phylogenetic_tree(newick.trim(), &config)?;
    let json = if args.pretty {
        figure.to_json_pretty()?
    } else {
        figure.to_json()?
    };
    println!("{json}");
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

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
