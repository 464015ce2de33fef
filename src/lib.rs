//! Simfasta: FASTA extraction for phylogenetic simulations
//!
//! Reads the Newick tree of a simulation, works out which per-node cycle directories
//! correspond to leaves (or to every node), converts each selected directory's binary
//! sequence into FASTA, and labels the records with the node's name.

pub mod config;
pub mod error;
pub mod extract;
pub mod logging;
pub mod naming;
pub mod selection;
pub mod simulation;
pub mod tooling;
pub mod tree;

pub use error::{ExtractError, TreeError};
pub use naming::{name_of, sanitize};
pub use selection::{build_selection, SelectionPolicy, SelectionSet};
pub use tree::{parse_newick, TreeNode};
