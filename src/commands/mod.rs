mod batch;
mod config_cmd;
mod report;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{Config, OutputFormat};

pub use batch::BatchCommand;
pub use report::ReportCommand;

#[derive(Parser)]
#[command(name = "training-stats")]
#[command(about = "Workout statistics from raw sensor packages", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file
    #[arg(long, global = true, env = "TRAINING_STATS_CONFIG")]
    config: Option<PathBuf>,

    /// Output format (overrides the configuration file)
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the report for one sensor package
    Report(ReportCommand),

    /// Compute reports for the built-in sample packages
    Batch(BatchCommand),

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigSubcommands),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand)]
enum ConfigSubcommands {
    /// Show current configuration
    Show,
}

impl Cli {
    pub fn verbose(&self) -> bool {
        self.verbose
    }

    pub fn execute(self) -> Result<()> {
        if let Commands::Completions { shell } = self.command {
            generate_completions(shell);
            return Ok(());
        }

        let mut config = Config::load(self.config.as_deref())?;
        if let Some(format) = self.format {
            config.output.format = format;
        }

        match self.command {
            Commands::Report(cmd) => cmd.execute(&config),
            Commands::Batch(cmd) => cmd.execute(&config),
            Commands::Config(subcmd) => match subcmd {
                ConfigSubcommands::Show => config_cmd::show_config(&config),
            },
            Commands::Completions { .. } => Ok(()),
        }
    }
}

fn generate_completions(shell: clap_complete::Shell) {
    use clap::CommandFactory;
    use clap_complete::generate;
    use std::io;

    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
}
