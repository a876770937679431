use std::{ffi::OsString, path::PathBuf};

use clap::Parser;

#[derive(Parser)]
#[command(author = "Daniel Holzner", version, about = "Shortest route between two stations", long_about = None)]
struct Cli {
    /// Path to the routes file with a `source,target,weight` header
    routes_file: String,

    /// Name of the start station
    start: String,

    /// Name of the end station
    end: String,

    /// Log search statistics
    #[arg(short, long, default_value = "false")]
    verbose: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cfg {
    pub routes_file: PathBuf,
    pub start: String,
    pub end: String,
    pub verbose: bool,
}

impl Cfg {
    /// Log filter used when `RUST_LOG` is not set
    pub fn log_filter(&self) -> &'static str {
        if self.verbose {
            "info"
        } else {
            "warn"
        }
    }
}

impl From<Cli> for Cfg {
    fn from(cli: Cli) -> Self {
        Cfg {
            routes_file: PathBuf::from(cli.routes_file),
            start: cli.start,
            end: cli.end,
            verbose: cli.verbose,
        }
    }
}

pub fn parse() -> Cfg {
    Cli::parse().into()
}

pub fn try_parse_from<I, T>(args: I) -> Result<Cfg, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Cli::try_parse_from(args).map(Cfg::from)
}
