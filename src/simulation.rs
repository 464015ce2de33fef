//! Simulation directory access
//!
//! Reads `simulationInfo.xml` from a simulation root and lists the per-node cycle
//! directories next to it.

use crate::error::ExtractError;
use crate::tree::{parse_newick, TreeNode};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Metadata file expected at the simulation root.
pub const SIMULATION_INFO_FILE: &str = "simulationInfo.xml";

/// Fields read from `simulationInfo.xml`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SimulationInfo {
    /// Newick tree that was simulated.
    pub tree: String,
    /// Root directory recorded by the simulator.
    #[serde(rename = "rootDir")]
    pub root_dir: String,
}

impl SimulationInfo {
    pub fn from_xml(xml: &str) -> Result<Self, ExtractError> {
        let info: SimulationInfo = quick_xml::de::from_str(xml).map_err(|e| {
            ExtractError::ConfigError(format!("Invalid {}: {}", SIMULATION_INFO_FILE, e))
        })?;
        Ok(SimulationInfo {
            tree: info.tree.trim().to_string(),
            root_dir: info.root_dir.trim().to_string(),
        })
    }

    /// Load the metadata file from `sim_dir`.
    pub fn load(sim_dir: &Path) -> Result<Self, ExtractError> {
        let path = sim_dir.join(SIMULATION_INFO_FILE);
        if !path.is_file() {
            return Err(ExtractError::ConfigError(format!(
                "unable to find {}",
                path.display()
            )));
        }
        let xml = std::fs::read_to_string(&path).map_err(|e| ExtractError::io(&path, e))?;
        Self::from_xml(&xml)
    }

    pub fn parse_tree(&self) -> Result<TreeNode, ExtractError> {
        Ok(parse_newick(&self.tree)?)
    }
}

/// A validated simulation root.
#[derive(Debug, Clone)]
pub struct Simulation {
    pub dir: PathBuf,
    pub info: SimulationInfo,
}

impl Simulation {
    /// Validate `sim_dir`, make it absolute, and read its metadata.
    pub fn open(sim_dir: &Path) -> Result<Self, ExtractError> {
        if !sim_dir.is_dir() {
            return Err(ExtractError::ConfigError(format!(
                "simulation directory \"{}\" not a directory",
                sim_dir.display()
            )));
        }
        let dir = dunce::canonicalize(sim_dir).map_err(|e| ExtractError::io(sim_dir, e))?;
        let info = SimulationInfo::load(&dir)?;
        debug!(sim_dir = %dir.display(), root_dir = %info.root_dir, "Loaded simulation info");
        Ok(Simulation { dir, info })
    }

    pub fn cycle_dirs(&self) -> Result<Vec<PathBuf>, ExtractError> {
        list_cycle_dirs(&self.dir)
    }
}

/// Immediate subdirectories of `sim_dir` in directory-listing order.
///
/// Hidden entries are skipped. Symlinks count when they resolve to a directory;
/// dangling links and unreadable entries are skipped. The order is whatever the
/// filesystem returns and is not sorted.
pub fn list_cycle_dirs(sim_dir: &Path) -> Result<Vec<PathBuf>, ExtractError> {
    let mut dirs = Vec::new();
    for entry in WalkDir::new(sim_dir).min_depth(1).max_depth(1) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() > 0 => {
                debug!(path = ?e.path(), error = %e, "Skipping unreadable entry");
                continue;
            }
            Err(e) => {
                let path = e.path().unwrap_or(sim_dir).to_path_buf();
                let source = e
                    .into_io_error()
                    .unwrap_or_else(|| std::io::Error::other("filesystem loop"));
                return Err(ExtractError::io(path, source));
            }
        };
        if entry.file_name().to_string_lossy().starts_with('.') {
            continue;
        }
        if entry.path().is_dir() {
            dirs.push(entry.into_path());
        }
    }
    Ok(dirs)
}
