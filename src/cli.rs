use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, PartialEq)]
#[command(name = "gf")]
#[command(about = "Git Finder - find a Git repository under your project roots and print its path")]
pub struct CliArgs {
    /// Directories to search for repositories (overrides config)
    pub roots: Vec<PathBuf>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Additional directory name to skip while scanning (repeatable)
    #[arg(long, value_name = "NAME")]
    pub ignore: Vec<String>,

    /// Follow symlinked directories while scanning
    #[arg(long)]
    pub follow_links: bool,

    /// Maximum directory depth below each root
    #[arg(long, value_name = "N")]
    pub max_depth: Option<usize>,

    /// Print discovered repositories instead of opening the picker
    #[arg(long)]
    pub list: bool,

    /// Write the effective configuration to the config path and exit
    #[arg(long)]
    pub write_config: bool,
}
