use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "sp", about = concat!("[%] splits v", env!("CARGO_PKG_VERSION"), " - who trains on what"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Read benchmark paths from a different config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List projects in a splits file
    Projects(ProjectsArgs),
    /// Show one project's split in full
    Show(ShowArgs),
    /// Report which split(s) a file falls in
    Which(WhichArgs),
    /// Search split file entries by regex
    Search(SearchArgs),
    /// Validate a splits file
    Check(CheckArgs),
    /// Resolve a dataset path to a known benchmark and load it
    Bench(BenchArgs),
}

// ---------------------------------------------------------------------------
// Per-command args
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct ProjectsArgs {
    /// Path to the splits file
    pub splits_file: PathBuf,
    /// Root directory the projects live under (default: the splits file's directory)
    #[arg(long)]
    pub root: Option<PathBuf>,
    /// Only list projects whose name matches this regex
    #[arg(long)]
    pub filter: Option<String>,
}

#[derive(Args)]
pub struct ShowArgs {
    /// Path to the splits file
    pub splits_file: PathBuf,
    /// Project name
    pub project: String,
    /// Root directory the projects live under (default: the splits file's directory)
    #[arg(long)]
    pub root: Option<PathBuf>,
}

#[derive(Args)]
pub struct WhichArgs {
    /// Path to the splits file
    pub splits_file: PathBuf,
    /// Filename to look up (path fragments allowed)
    pub file: String,
    /// Restrict the lookup to one project
    #[arg(long)]
    pub project: Option<String>,
    /// Root directory the projects live under (default: the splits file's directory)
    #[arg(long)]
    pub root: Option<PathBuf>,
}

#[derive(Args)]
pub struct SearchArgs {
    /// Path to the splits file
    pub splits_file: PathBuf,
    /// Regex matched against every split file entry
    pub pattern: String,
    /// Root directory the projects live under (default: the splits file's directory)
    #[arg(long)]
    pub root: Option<PathBuf>,
}

#[derive(Args)]
pub struct CheckArgs {
    /// Path to the splits file
    pub splits_file: PathBuf,
    /// Root directory the projects live under (default: the splits file's directory)
    #[arg(long)]
    pub root: Option<PathBuf>,
}

#[derive(Args)]
pub struct BenchArgs {
    /// Dataset path naming a known benchmark (e.g. contains "compcert")
    pub path: String,
}
