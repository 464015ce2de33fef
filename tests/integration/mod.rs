//! Integration tests for the simfasta extractor

mod cli_extraction;
mod support;
mod tree_selection;
