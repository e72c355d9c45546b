//! CLI definitions and command dispatch.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands::{family, score_names, sort};

#[derive(Parser)]
#[command(name = "font-sorter", version)]
#[command(about = "Sort fonts the way a type designer reads a family")]
#[command(after_help = "Examples:\n  \
    font-sorter sort fonts/\n  \
    font-sorter sort -i masters/Family.designspace\n  \
    font-sorter score MyFont-Bold MyFont-Light MyFont-BoldItalic")]
pub struct Cli {
    /// Debug output (log level and sort keys)
    #[arg(short, long, global = true)]
    pub debug: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, clap::Args)]
pub struct SortArgs {
    /// Italics adjacent to their related Romans
    #[arg(short = 'i', long)]
    pub alternate_italics: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print discovered fonts in discovery order and in family order
    Sort {
        /// Directory or file: UFOs, a designspace, OTFs, or TTFs (in order of preference)
        #[arg(value_name = "INPUT")]
        input: PathBuf,
        #[command(flatten)]
        args: SortArgs,
    },
    /// Print the sort key of each name, in family order
    Score {
        #[arg(value_name = "NAME", required = true)]
        names: Vec<String>,
        #[command(flatten)]
        args: SortArgs,
    },
    /// Print the family name shared by the discovered fonts
    Family {
        #[arg(value_name = "INPUT")]
        input: PathBuf,
    },
}

impl Cli {
    pub fn run(self) -> Result<()> {
        self.command.run(self.debug)
    }
}

impl Commands {
    pub fn run(self, debug: bool) -> Result<()> {
        match self {
            Commands::Sort { input, args } => {
                sort(&input, args.alternate_italics, debug)?;
            }
            Commands::Score { names, args } => {
                for (key, name) in score_names(&names, args.alternate_italics) {
                    println!("{key}  {name}");
                }
            }
            Commands::Family { input } => {
                family(&input)?;
            }
        }
        Ok(())
    }
}
