use simfasta::error::ExtractError;
use simfasta::extract::SequenceConverter;
use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

/// Converter that writes a small two-record FASTA and remembers what it converted.
pub struct RecordingConverter {
    pub converted: RefCell<Vec<String>>,
}

impl RecordingConverter {
    pub fn new() -> Self {
        Self {
            converted: RefCell::new(Vec::new()),
        }
    }

    pub fn converted_sorted(&self) -> Vec<String> {
        let mut names = self.converted.borrow().clone();
        names.sort();
        names
    }
}

impl SequenceConverter for RecordingConverter {
    fn convert(&self, source: &Path, dest: &Path) -> Result<(), ExtractError> {
        let dir = source
            .parent()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        self.converted.borrow_mut().push(dir);
        fs::write(dest, ">chr1 len=4\nACGT\n>chr2\nGG\n").map_err(|e| ExtractError::Io {
            path: dest.to_path_buf(),
            source: e,
        })
    }

    fn name(&self) -> &str {
        "recording"
    }
}

/// Lay out a simulation root with `simulationInfo.xml` and one cycle directory per name.
pub fn create_simulation(root: &Path, newick: &str, cycles: &[&str]) -> PathBuf {
    let sim = root.join("sim");
    fs::create_dir_all(&sim).unwrap();
    fs::write(
        sim.join("simulationInfo.xml"),
        format!(
            "<info>\n  <tree>{}</tree>\n  <rootDir>{}</rootDir>\n</info>\n",
            newick,
            sim.join("root").display()
        ),
    )
    .unwrap();
    for cycle in cycles {
        let dir = sim.join(cycle);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("seq.rev"), [0u8, 1, 2, 3]).unwrap();
    }
    sim
}

pub fn output_names(dest: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dest)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
