//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueHint};

/// Draw parsed syntax trees as labeled box diagrams
#[derive(Parser, Debug)]
#[command(name = "astview")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase debug output (repeat for more: -d -d -d)
    #[arg(short = 'd', long = "debug", action = clap::ArgAction::Count, global = true)]
    pub debug: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a parsed tree as an SVG box diagram
    Render {
        /// ESTree JSON input file ('-' for stdin)
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,

        /// Output SVG file (default: stdout)
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        output: Option<PathBuf>,

        /// Override canvas width
        #[arg(long)]
        width: Option<f64>,

        /// Override canvas height
        #[arg(long)]
        height: Option<f64>,
    },

    /// Print the parsed tree as indented JSON
    Json {
        /// ESTree JSON input file ('-' for stdin)
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
    },

    /// Print the parsed tree as a terminal outline
    Tree {
        /// ESTree JSON input file ('-' for stdin)
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
    },

    /// Show effective settings as TOML
    Config,

    /// Show author and version
    Info,

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
