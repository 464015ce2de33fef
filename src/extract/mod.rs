//! FASTA extraction
//!
//! Drives the per-directory pipeline: convert the binary sequence file through an
//! external converter, relabel FASTA headers with the node name, and move the result
//! into the destination directory.

pub mod converter;
pub mod driver;
pub mod fasta;

pub use converter::{ExternalConverter, SequenceConverter};
pub use driver::{
    clean_name, prepare_destination, CycleFilter, ExtractedEntry, ExtractionDriver,
    ExtractionReport,
};
pub use fasta::{move_file, prefix_headers, rewrite_headers};
