use clap::{ArgAction, Parser};
use std::path::PathBuf;
use tracing::Level;

use crate::core::WalkOptions;

#[derive(Parser, Debug)]
#[command(name = "foldertree")]
#[command(about = "Print a folder's file hierarchy as an indented text tree", long_about = None)]
pub struct Cli {
    /// Folder to display (defaults to current directory)
    pub path: Option<PathBuf>,

    /// Show at most LEVEL levels below the folder
    #[arg(
        short = 'L',
        long = "level",
        value_name = "LEVEL",
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub level: Option<u64>,

    /// Pipe-separated names or globs to leave out, e.g. "target|*.log"
    #[arg(short = 'I', long = "ignore", value_name = "PATTERN")]
    pub ignore: Option<String>,

    /// Show symbolic links as plain entries instead of following them
    #[arg(long)]
    pub no_follow: bool,

    /// Write the tree to FILE instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Log more to stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn root(&self) -> PathBuf {
        self.path.clone().unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn walk_options(&self) -> WalkOptions {
        WalkOptions {
            max_depth: self.level.and_then(|level| usize::try_from(level).ok()),
            ignore_pattern: self.ignore.clone(),
            follow_symlinks: !self.no_follow,
        }
    }

    pub fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            _ => Level::DEBUG,
        }
    }
}
