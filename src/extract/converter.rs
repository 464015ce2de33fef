//! Sequence conversion collaborator
//!
//! Conversion from the simulator's binary sequence format to FASTA is delegated to an
//! out-of-process tool. The tool is always invoked with an argument vector, never
//! through a shell, so node names cannot be interpreted as shell syntax.

use crate::config::ConverterConfig;
use crate::error::ExtractError;
use std::path::Path;
use std::process::Command;
use tracing::debug;

/// Converts a binary sequence file into a FASTA file.
pub trait SequenceConverter {
    /// Write FASTA for `source` to `dest`. Any failure aborts the run.
    fn convert(&self, source: &Path, dest: &Path) -> Result<(), ExtractError>;

    /// Name used in logs and reports.
    fn name(&self) -> &str;
}

/// Runs an external program as `<program> <from_flag> <source> <to_flag> <dest>`.
#[derive(Debug, Clone)]
pub struct ExternalConverter {
    program: String,
    from_flag: String,
    to_flag: String,
}

impl ExternalConverter {
    pub fn new(
        program: impl Into<String>,
        from_flag: impl Into<String>,
        to_flag: impl Into<String>,
    ) -> Self {
        Self {
            program: program.into(),
            from_flag: from_flag.into(),
            to_flag: to_flag.into(),
        }
    }

    pub fn from_config(config: &ConverterConfig) -> Self {
        Self::new(&config.program, &config.from_flag, &config.to_flag)
    }

    fn command(&self, source: &Path, dest: &Path) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.arg(&self.from_flag)
            .arg(source)
            .arg(&self.to_flag)
            .arg(dest);
        cmd
    }
}

impl SequenceConverter for ExternalConverter {
    fn convert(&self, source: &Path, dest: &Path) -> Result<(), ExtractError> {
        debug!(
            program = %self.program,
            source = %source.display(),
            dest = %dest.display(),
            "Running sequence converter"
        );
        let output = self
            .command(source, dest)
            .output()
            .map_err(|e| ExtractError::ConverterSpawn {
                program: self.program.clone(),
                source: e,
            })?;
        if !output.status.success() {
            return Err(ExtractError::ConverterFailed {
                program: self.program.clone(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Ok(())
    }

    fn name(&self) -> &str {
        &self.program
    }
}
