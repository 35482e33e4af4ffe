use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// File to read heap commands from, one per line.
    ///
    /// If unset, commands are read from stdin
    #[arg(short, long)]
    pub script: Option<PathBuf>,

    /// Log filter used when RUST_LOG is not set (e.g. "debug", "indexed_heap=trace")
    #[arg(short, long, default_value = "info")]
    pub log_level: String,
}
