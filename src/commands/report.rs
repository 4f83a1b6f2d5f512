use anyhow::{Context, Result};
use clap::Args;

use crate::calculator::{compute_report, show_report, Calculator, Package};
use crate::config::{Config, OutputFormat};

#[derive(Args)]
pub struct ReportCommand {
    /// Workout type code (RUN, WLK or SWM)
    code: String,

    /// Sensor readings: actions, hours, kg, then height (WLK) or pool length and laps (SWM)
    #[arg(required = true, num_args = 1.., allow_negative_numbers = true)]
    values: Vec<f64>,
}

impl ReportCommand {
    pub fn execute(self, config: &Config) -> Result<()> {
        let calculator = Calculator::from_config(config);
        let package = Package::new(self.code, self.values);

        let workout = calculator
            .workout(&package)
            .with_context(|| format!("Invalid {} package", package.code))?;

        match config.output.format {
            OutputFormat::Text => {
                show_report(&workout, calculator.labels())?;
            }
            OutputFormat::Json => {
                let report = compute_report(&workout, calculator.labels())?;
                println!("{}", serde_json::to_string_pretty(&report)?);
            }
        }

        Ok(())
    }
}
