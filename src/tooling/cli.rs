//! CLI Tooling
//!
//! Command-line interface for FASTA extraction. Parses arguments, loads configuration,
//! and runs the extraction against a simulation directory.

use crate::config::{ConfigLoader, ExtractorConfig};
use crate::error::ExtractError;
use crate::extract::{CycleFilter, ExternalConverter, ExtractionDriver, SequenceConverter};
use crate::logging::LoggingConfig;
use crate::selection::{build_selection, SelectionPolicy};
use crate::simulation::Simulation;
use crate::tooling::format::{format_report_text, format_selection_text};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

/// Simfasta CLI - extract per-node FASTA files from a simulation directory
#[derive(Parser, Debug)]
#[command(name = "simfasta")]
#[command(about = "Extract FASTA files from the leaves (or all cycles) of a simulation")]
pub struct Cli {
    /// The simulation directory
    pub sim_dir: PathBuf,

    /// The directory to extract the FASTA files to (must not exist)
    #[arg(required_unless_present = "list_selection")]
    pub dest_dir: Option<PathBuf>,

    /// Extract FASTA files from all cycles, not just leaves
    #[arg(long, alias = "allCycles")]
    pub all_cycles: bool,

    /// Extract FASTA files from ancestors as well
    #[arg(long, alias = "includeAncestors")]
    pub include_ancestors: bool,

    /// Report what would be extracted without converting anything
    #[arg(long)]
    pub dry_run: bool,

    /// Print the node names selected from the tree and exit
    #[arg(long)]
    pub list_selection: bool,

    /// Output format (text or json)
    #[arg(long, default_value = "text", value_parser = ["text", "json"])]
    pub format: String,

    /// Configuration file path (layered over the user config file)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (debug level)
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file, file+stderr, both)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Apply logging flags on top of the configured logging section.
    pub fn logging_config(&self, base: &LoggingConfig) -> LoggingConfig {
        let mut config = base.clone();
        if self.verbose {
            config.level = "debug".to_string();
        }
        if let Some(level) = &self.log_level {
            config.level = level.clone();
        }
        if let Some(format) = &self.log_format {
            config.format = format.clone();
        }
        if let Some(output) = &self.log_output {
            config.output = output.clone();
        }
        if let Some(file) = &self.log_file {
            config.file = Some(file.clone());
        }
        config
    }

    pub fn selection_policy(&self) -> SelectionPolicy {
        SelectionPolicy::from_include_ancestors(self.include_ancestors)
    }
}

/// Loaded configuration plus the operations the CLI exposes.
pub struct CliContext {
    config: ExtractorConfig,
}

impl CliContext {
    pub fn new(config_path: Option<PathBuf>) -> Result<Self, ExtractError> {
        let config = match config_path {
            Some(path) => ConfigLoader::load_from_file(&path)?,
            None => ConfigLoader::load()?,
        };
        Ok(Self { config })
    }

    pub fn with_config(config: ExtractorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Run the CLI using the configured external converter.
    pub fn execute(&self, cli: &Cli) -> Result<String, ExtractError> {
        let converter = ExternalConverter::from_config(&self.config.converter);
        self.execute_with_converter(cli, &converter)
    }

    /// Run the CLI with a caller-supplied converter.
    pub fn execute_with_converter(
        &self,
        cli: &Cli,
        converter: &dyn SequenceConverter,
    ) -> Result<String, ExtractError> {
        let simulation = Simulation::open(&cli.sim_dir)?;
        let tree = simulation.info.parse_tree()?;
        let selection = build_selection(&tree, cli.selection_policy());
        info!(
            sim_dir = %simulation.dir.display(),
            nodes = tree.node_count(),
            selected = selection.len(),
            "Built selection set"
        );

        if cli.list_selection {
            let names = selection.sorted();
            return match cli.format.as_str() {
                "json" => serde_json::to_string_pretty(&names)
                    .map_err(|e| ExtractError::ConfigError(format!("JSON output: {}", e))),
                _ => Ok(format_selection_text(&names)),
            };
        }

        let dest_dir = cli.dest_dir.clone().ok_or_else(|| {
            ExtractError::ConfigError("destination directory is required".to_string())
        })?;
        if dest_dir.exists() {
            return Err(ExtractError::ConfigError(format!(
                "destination directory {} already exists",
                dest_dir.display()
            )));
        }

        let cycle_dirs = simulation.cycle_dirs()?;
        let filter = if cli.all_cycles {
            CycleFilter::All
        } else {
            CycleFilter::Selected(selection)
        };
        let driver = ExtractionDriver::new(converter, self.config.layout.clone());
        let report = if cli.dry_run {
            driver.plan(&cycle_dirs, &filter, &dest_dir)
        } else {
            driver.extract(&cycle_dirs, &filter, &dest_dir)?
        };

        match cli.format.as_str() {
            "json" => serde_json::to_string_pretty(&report)
                .map_err(|e| ExtractError::ConfigError(format!("JSON output: {}", e))),
            _ => Ok(format_report_text(&report)),
        }
    }
}
