use clap::Parser;
use std::path::PathBuf;

use depgraph_nav::application::dto::OutputFormat;
use depgraph_nav::config::CliOverrides;
use depgraph_nav::shared::error::ExitCode;

/// Browse a module dependency graph as drill-down diagrams in the browser
#[derive(Parser, Debug)]
#[command(name = "depgraph-nav")]
#[command(version)]
#[command(
    about = "Browse a module dependency graph as drill-down diagrams in the browser",
    long_about = "Reads a `before after` edge list (by default from `go mod graph`), \
                  serves it on a loopback port and opens the browser at the graph's root. \
                  Clicking a node drills down into it; dashed nodes lead back up the path."
)]
pub struct Args {
    /// Read the edge list from a file instead of running a command ("-" for stdin)
    #[arg(short, long, value_name = "PATH")]
    pub input: Option<String>,

    /// Command producing the edge list (default: go mod graph)
    /// Takes the following values up to the next option: --command cat deps.txt
    #[arg(short, long, num_args = 1.., value_name = "CMD")]
    pub command: Vec<String>,

    /// Layout-engine program used for rendering (default: dot)
    #[arg(short, long, value_name = "PROG")]
    pub renderer: Option<String>,

    /// Output format: svg, png or dot (default: svg)
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Loopback port to listen on (default: 0, an ephemeral port)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Do not open the browser on startup
    #[arg(long)]
    pub no_browser: bool,

    /// Show a legend of every recorded package version
    #[arg(long)]
    pub legend: bool,

    /// Do not append dependency counts to neighbor labels
    #[arg(long)]
    pub no_fan_out: bool,

    /// Path to a config file (default: ./depgraph-nav.config.yml if present)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Args {
    pub fn try_parse_args() -> Result<Self, clap::Error> {
        Self::try_parse()
    }

    /// Splits off the values that override the config file
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            input: self.input.clone(),
            command: if self.command.is_empty() {
                None
            } else {
                Some(self.command.clone())
            },
            renderer: self.renderer.clone(),
            format: self.format,
            port: self.port,
            no_browser: self.no_browser,
            legend: self.legend,
            no_fan_out: self.no_fan_out,
        }
    }
}

/// Exit code for a parse outcome: `--help`/`--version` succeed, anything else is an argument error
pub fn exit_code_for(error: &clap::Error) -> ExitCode {
    if error.use_stderr() {
        ExitCode::InvalidArguments
    } else {
        ExitCode::Success
    }
}
