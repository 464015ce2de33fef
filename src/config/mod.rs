//! Configuration
//!
//! Layered settings for the extractor: built-in defaults, the user config file, an
//! explicit `--config` file, then `SIMFASTA__*` environment variables.

pub mod facade;
pub mod merge;
pub mod paths;
pub mod sources;

pub use facade::ConfigLoader;

use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};

/// Top-level extractor configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractorConfig {
    #[serde(default)]
    pub converter: ConverterConfig,
    #[serde(default)]
    pub layout: LayoutConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// External sequence converter invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConverterConfig {
    /// Program to run (looked up on `PATH` when not absolute)
    #[serde(default = "default_program")]
    pub program: String,

    /// Flag preceding the binary source path
    #[serde(default = "default_from_flag")]
    pub from_flag: String,

    /// Flag preceding the FASTA destination path
    #[serde(default = "default_to_flag")]
    pub to_flag: String,
}

fn default_program() -> String {
    "evolver_cvt".to_string()
}

fn default_from_flag() -> String {
    "-fromrev".to_string()
}

fn default_to_flag() -> String {
    "-tofasta".to_string()
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
            from_flag: default_from_flag(),
            to_flag: default_to_flag(),
        }
    }
}

/// File names used inside each cycle directory and for outputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Binary sequence file in each cycle directory
    #[serde(default = "default_sequence_file")]
    pub sequence_file: String,

    /// Converter output before it is renamed
    #[serde(default = "default_temp_fasta")]
    pub temp_fasta: String,

    /// Stable FASTA name inside the cycle directory
    #[serde(default = "default_fasta")]
    pub fasta: String,

    /// Appended to the cleaned node name for the destination file
    #[serde(default = "default_output_suffix")]
    pub output_suffix: String,
}

fn default_sequence_file() -> String {
    "seq.rev".to_string()
}

fn default_temp_fasta() -> String {
    "seq.fa.tmp".to_string()
}

fn default_fasta() -> String {
    "seq.fa".to_string()
}

fn default_output_suffix() -> String {
    ".name.fa".to_string()
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            sequence_file: default_sequence_file(),
            temp_fasta: default_temp_fasta(),
            fasta: default_fasta(),
            output_suffix: default_output_suffix(),
        }
    }
}

impl LayoutConfig {
    /// Reject names that would escape the cycle directory or collide.
    pub fn validate(&self) -> Result<(), String> {
        for (key, value) in [
            ("sequence_file", &self.sequence_file),
            ("temp_fasta", &self.temp_fasta),
            ("fasta", &self.fasta),
        ] {
            if value.is_empty() || value.contains('/') || value.contains('\\') {
                return Err(format!("layout.{} must be a plain file name: {:?}", key, value));
            }
        }
        if self.temp_fasta == self.fasta || self.sequence_file == self.fasta {
            return Err("layout file names must be distinct".to_string());
        }
        if self.output_suffix.contains('/') {
            return Err(format!(
                "layout.output_suffix must not contain '/': {:?}",
                self.output_suffix
            ));
        }
        Ok(())
    }
}
