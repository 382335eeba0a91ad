use clap::Subcommand;
use std::path::PathBuf;

pub mod records;
pub mod tree;

#[derive(Subcommand)]
pub enum Commands {
    /// Print the entity tree rooted at the global entity
    Tree {
        /// XSRC file
        source: PathBuf,

        /// Emit the tree as JSON
        #[arg(long)]
        json: bool,

        /// Rescan the record list per entity instead of indexing parent keys
        #[arg(long)]
        scan: bool,
    },

    /// List the flat entity records as parsed
    Records {
        /// XSRC file
        source: PathBuf,
    },
}

impl Commands {
    pub fn execute(&self) -> anyhow::Result<()> {
        match self {
            Commands::Tree { source, json, scan } => tree::execute(source, *json, *scan),
            Commands::Records { source } => records::execute(source),
        }
    }
}
