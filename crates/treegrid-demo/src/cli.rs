#![forbid(unsafe_code)]

//! Command-line argument parsing for the demo.
//!
//! Parses args manually to keep the binary lean. Environment variables with
//! the `TREEGRID_` prefix supply defaults; explicit flags win.

use std::env;
use std::time::Duration;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const HELP_TEXT: &str = "\
treegrid demo - scripted edits on a tree grid with undo/redo

USAGE:
    treegrid-demo [OPTIONS]

OPTIONS:
    --latency-ms=N   Simulated fetch latency in milliseconds (default: 100)
    --expand=N|all   Expand rows shallower than N levels (default: all)
    --json           Print the final items as JSON instead of rows
    --help, -h       Show this help message
    --version, -V    Show version

ENVIRONMENT VARIABLES:
    TREEGRID_LATENCY_MS   Override --latency-ms
    TREEGRID_EXPAND       Override --expand
    RUST_LOG              Log filter (e.g. treegrid=debug)";

/// What the binary should do after parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Run(Opts),
    Help,
    Version,
}

/// Parsed command-line options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Opts {
    /// Simulated fetch latency.
    pub latency: Duration,
    /// Default expansion depth, `None` expands everything.
    pub expand: Option<usize>,
    /// Emit JSON instead of a row listing.
    pub json: bool,
}

impl Default for Opts {
    fn default() -> Self {
        Self {
            latency: Duration::from_millis(100),
            expand: None,
            json: false,
        }
    }
}

/// Invalid command-line input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgError(pub String);

impl std::fmt::Display for ArgError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for ArgError {}

fn parse_expand(val: &str) -> Result<Option<usize>, ArgError> {
    if val.eq_ignore_ascii_case("all") {
        return Ok(None);
    }
    val.parse()
        .map(Some)
        .map_err(|_| ArgError(format!("Invalid --expand value: {val}")))
}

fn parse_latency(val: &str) -> Result<Duration, ArgError> {
    val.parse()
        .map(Duration::from_millis)
        .map_err(|_| ArgError(format!("Invalid --latency-ms value: {val}")))
}

/// Parse the process environment and arguments.
pub fn parse() -> Result<Command, ArgError> {
    let vars = |key: &str| env::var(key).ok();
    parse_from(env::args().skip(1), vars)
}

/// Parse explicit arguments with an environment lookup.
pub fn parse_from(
    args: impl IntoIterator<Item = String>,
    var: impl Fn(&str) -> Option<String>,
) -> Result<Command, ArgError> {
    let mut opts = Opts::default();

    if let Some(val) = var("TREEGRID_LATENCY_MS") {
        opts.latency = parse_latency(&val)?;
    }
    if let Some(val) = var("TREEGRID_EXPAND") {
        opts.expand = parse_expand(&val)?;
    }

    for arg in args {
        match arg.as_str() {
            "--help" | "-h" => return Ok(Command::Help),
            "--version" | "-V" => return Ok(Command::Version),
            "--json" => opts.json = true,
            other => {
                if let Some(val) = other.strip_prefix("--latency-ms=") {
                    opts.latency = parse_latency(val)?;
                } else if let Some(val) = other.strip_prefix("--expand=") {
                    opts.expand = parse_expand(val)?;
                } else {
                    return Err(ArgError(format!(
                        "Unknown argument: {other}\nRun with --help for usage information."
                    )));
                }
            }
        }
    }

    Ok(Command::Run(opts))
}

/// Version line printed by `--version`.
#[must_use]
pub fn version_line() -> String {
    format!("treegrid-demo {VERSION}")
}
