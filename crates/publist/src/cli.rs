use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "publist")]
#[command(about = "Render an academic publication list as static HTML", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Configuration file (defaults to ./publist.toml when present).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    #[command(about = "Render the publication page")]
    Build {
        /// Publication list (.yaml, .yml, or .json).
        references: PathBuf,

        /// Assets directory to scan for preview images.
        #[arg(long)]
        assets: Option<PathBuf>,

        /// Output file.
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// INSPIRE-HEP search query used for citation counts.
        #[arg(long)]
        author_query: Option<String>,

        /// Skip citation enrichment even when INSPIRE ids are present.
        #[arg(long)]
        offline: bool,

        /// Page title.
        #[arg(long)]
        title: Option<String>,
    },

    #[command(about = "Check the publication list without writing output")]
    Validate {
        references: PathBuf,

        #[arg(long)]
        assets: Option<PathBuf>,
    },

    #[command(about = "Print BibTeX entries to stdout")]
    Bibtex {
        references: PathBuf,

        /// Limit output to one citation key.
        #[arg(long)]
        key: Option<String>,
    },

    #[command(about = "Print the JSON Schema of the publication list format")]
    Schema,

    #[command(about = "Generate shell completions")]
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
