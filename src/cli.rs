use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::import::{DEFAULT_INPUT, DEFAULT_OUTPUT};
use crate::source::DEFAULT_LOCATION;

#[derive(Parser, Debug)]
#[command(name = "card-search")]
#[command(version, about = "Import station card listings and search them")]
pub struct Cli {
    /// Config file overriding the built-in categories and prefectures
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert the station/period/card source file to JSON
    Import {
        /// Source file
        #[arg(default_value = DEFAULT_INPUT)]
        input: PathBuf,

        /// Output JSON path
        #[arg(short, long, default_value = DEFAULT_OUTPUT)]
        output: PathBuf,

        /// Field separator
        #[arg(short, long, default_value_t = ',')]
        delimiter: char,
    },

    /// Find stations by station or card name
    Search {
        /// Text to look for
        query: String,

        /// Document path or http(s) URL
        #[arg(long, default_value = DEFAULT_LOCATION)]
        data: String,

        /// Print hits as JSON
        #[arg(long)]
        json: bool,
    },

    /// List card categories present in the data
    Categories {
        /// Document path or http(s) URL
        #[arg(long, default_value = DEFAULT_LOCATION)]
        data: String,
    },

    /// List every station in the data
    Stations {
        /// Document path or http(s) URL
        #[arg(long, default_value = DEFAULT_LOCATION)]
        data: String,
    },

    /// Search interactively, updating results on every keystroke
    Browse {
        /// Document path or http(s) URL
        #[arg(long, default_value = DEFAULT_LOCATION)]
        data: String,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
