use clap::Args;
use eyre::{Context, Result};

use super::{SchemaArgs, UnwrapOrExit};
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub schema: SchemaArgs,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

impl CheckCommand {
    pub async fn run(&self) -> Result<()> {
        let config = self.schema.load_config(None).unwrap_or_exit();
        let schema = ops::acquire(&config).await.unwrap_or_exit();

        let report = ops::check(&config, schema)?;

        if self.json {
            let json = serde_json::to_string_pretty(&report).wrap_err("failed to encode report")?;
            println!("{json}");
        } else {
            report.render(&mut TerminalOutput::new());
        }

        if !report.is_valid() {
            std::process::exit(1);
        }

        Ok(())
    }
}
