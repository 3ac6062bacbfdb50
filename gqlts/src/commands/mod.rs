mod check;
mod completions;
mod generate;

use std::path::PathBuf;

use check::CheckCommand;
use clap::{Args, Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use generate::GenerateCommand;
use gqlts_schema::{Config, ConfigOverrides};

/// Extension trait for exiting on schema-crate errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for gqlts_schema::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "gqlts")]
#[command(version)]
#[command(about = "Generate TypeScript declarations from a GraphQL schema")]
pub(crate) struct Cli {
    /// Show debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run().await,
            Commands::Check(cmd) => cmd.run().await,
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate TypeScript declarations
    Generate(GenerateCommand),

    /// Load and walk the schema without writing files
    Check(CheckCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

/// Options shared by every command that loads a schema.
#[derive(Args)]
pub(crate) struct SchemaArgs {
    /// Path to the config file (defaults to ./gqlts.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Schema URL or file path, overriding `schema` in the config
    #[arg(short, long)]
    pub schema: Option<String>,

    /// Type name to skip (repeatable)
    #[arg(long = "ignore", value_name = "TYPE")]
    pub ignore: Vec<String>,

    /// Extra introspection request header as NAME:VALUE (repeatable)
    #[arg(long = "header", value_name = "NAME:VALUE")]
    pub headers: Vec<String>,
}

impl SchemaArgs {
    /// Load the config file and apply these options on top of it.
    pub fn load_config(&self, out_dir: Option<PathBuf>) -> gqlts_schema::Result<Config> {
        let overrides = ConfigOverrides {
            schema: self.schema.clone(),
            out_dir,
            ignore: self.ignore.clone(),
            headers: self.headers.clone(),
        };
        Config::load(self.config.as_deref(), overrides)
    }
}
