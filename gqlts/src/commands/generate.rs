use std::path::PathBuf;

use clap::Args;
use eyre::Result;

use super::{SchemaArgs, UnwrapOrExit};
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    #[command(flatten)]
    pub schema: SchemaArgs,

    /// Output directory, overriding `outDir` in the config
    #[arg(short, long)]
    pub out_dir: Option<PathBuf>,

    /// Print the generated files instead of writing them
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    pub async fn run(&self) -> Result<()> {
        let config = self.schema.load_config(self.out_dir.clone()).unwrap_or_exit();
        let schema = ops::acquire(&config).await.unwrap_or_exit();

        let report = ops::generate(&config, schema, self.dry_run)?;
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
