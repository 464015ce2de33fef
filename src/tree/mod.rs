//! Phylogenetic tree model
//!
//! Newick input is parsed once into an owned, strictly binary [`TreeNode`]. Everything
//! downstream (naming, selection) walks it by reference.

pub mod node;
pub mod parser;
pub mod render;

pub use node::TreeNode;
pub use parser::parse_newick;
pub use render::render_subtree;
