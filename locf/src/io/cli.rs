use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Number of experiments to run
    #[arg(short, long, value_name = "N")]
    pub experiments: usize,
    /// Number of items generated per experiment
    #[arg(short, long, value_name = "N")]
    pub items: usize,
    /// File to append one result line per experiment to
    #[arg(short, long, value_name = "FILE")]
    pub report_file: PathBuf,
    #[arg(short, long, value_name = "FILE")]
    pub config_file: Option<PathBuf>,
    #[arg(
        short,
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "info"
    )]
    pub log_level: LevelFilter,
}
