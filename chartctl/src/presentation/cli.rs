use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about = "chartctl: multiplication chart files", long_about = None)]
pub struct Cli {
    /// Directory holding chart-<base>.txt files
    #[arg(long, global = true, default_value = ".")]
    pub dir: PathBuf,

    /// Increase log verbosity (-v info, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Without a subcommand the interactive menu starts
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interactive menu (generate, read, read a line, exit)
    Menu,

    /// Generate the chart file for a base number (1-10)
    Generate {
        #[arg(allow_negative_numbers = true)]
        base: i64,
        /// delete an existing chart file first instead of failing
        #[arg(long)]
        force: bool,
    },

    /// Print a stored chart
    Read {
        #[arg(allow_negative_numbers = true)]
        base: i64,
        #[arg(long)]
        json: bool,
    },

    /// Print one line (1-10) of a stored chart
    Line {
        #[arg(allow_negative_numbers = true)]
        base: i64,
        #[arg(allow_negative_numbers = true)]
        index: i64,
        #[arg(long)]
        json: bool,
    },

    /// Delete a stored chart (asks for confirmation)
    Delete {
        #[arg(allow_negative_numbers = true)]
        base: i64,
        /// skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// List bases that have a chart file
    List {
        #[arg(long)]
        json: bool,
    },
}
