use anyhow::Result;
use clap::Args;

use crate::calculator::{sample_packages, Calculator};
use crate::config::{Config, OutputFormat};

#[derive(Args)]
pub struct BatchCommand {}

impl BatchCommand {
    pub fn execute(self, config: &Config) -> Result<()> {
        let outcome = Calculator::from_config(config).run_batch(&sample_packages());

        match config.output.format {
            OutputFormat::Text => {
                for report in &outcome.reports {
                    println!("{}", report.render());
                }
            }
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&outcome.reports)?);
            }
        }

        if outcome.all_failed() {
            anyhow::bail!("All {} packages failed", outcome.failures.len());
        }

        Ok(())
    }
}
