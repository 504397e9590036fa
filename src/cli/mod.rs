pub mod commands;

use clap::{Parser, Subcommand};
use linesift::{LineEnding, OutputMode};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "linesift")]
#[command(about = "Trim, filter and rewrite the lines of text files", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(short, long, global = true, help = "Show debug logging on stderr")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Process a batch of files and print the transformed text")]
    Process(ProcessArgs),

    #[command(about = "Write a default .linesift/config.toml")]
    Init {
        #[arg(short, long, default_value = ".")]
        path: PathBuf,
    },

    #[command(about = "Configure linesift settings")]
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(clap::Args, Debug, Default)]
pub struct ProcessArgs {
    #[arg(help = "Files or directories to process (reads stdin if empty or '-')")]
    pub paths: Vec<PathBuf>,

    #[arg(short = 'b', long, help = "Delete blank lines (also trims unless --no-trim)")]
    pub remove_blank: bool,

    #[arg(long, conflicts_with = "no_trim", help = "Trim whitespace from every line")]
    pub trim: bool,

    #[arg(long, help = "Never trim whitespace")]
    pub no_trim: bool,

    #[arg(short, long, env = "LINESIFT_PATTERN", help = "Regex each line must match")]
    pub pattern: Option<String>,

    #[arg(short, long, help = "Replacement template, $0 is the whole match, $1.. are groups")]
    pub substitute: Option<String>,

    #[arg(short, long, help = "Output area behaviour: last or concat")]
    pub mode: Option<OutputMode>,

    #[arg(long, help = "Output line ending: crlf, lf or cr")]
    pub line_ending: Option<LineEnding>,

    #[arg(short, long, help = "Number of files processed at once")]
    pub jobs: Option<usize>,

    #[arg(long, help = "Print the batch report as JSON")]
    pub json: bool,

    #[arg(short, long, help = "Only print the output text")]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum ConfigAction {
    #[command(about = "Set a configuration value")]
    Set {
        key: String,
        value: String,
    },
    #[command(about = "Get a configuration value")]
    Get {
        key: String,
    },
    #[command(about = "List all configuration values")]
    List,
}
