//! Canonical Newick rendering of a subtree
//!
//! The rendering is the structural signature used to name unlabeled internal nodes, so
//! its format is fixed: six decimal places for every branch length and a closing `;`.

use crate::tree::node::TreeNode;

/// Render the subtree rooted at `node` as Newick text.
pub fn render_subtree(node: &TreeNode, include_distances: bool) -> String {
    let mut out = String::new();
    write_node(node, include_distances, node.distance(), &mut out);
    out.push(';');
    out
}

/// Render with `root_distance` in place of the root's own branch length. Descendant
/// branch lengths are rendered unchanged.
pub(crate) fn render_with_root_distance(node: &TreeNode, root_distance: f64) -> String {
    let mut out = String::new();
    write_node(node, true, root_distance, &mut out);
    out.push(';');
    out
}

fn write_node(node: &TreeNode, include_distances: bool, distance: f64, out: &mut String) {
    match node {
        TreeNode::Leaf { id, .. } => out.push_str(id),
        TreeNode::Internal {
            label, left, right, ..
        } => {
            out.push('(');
            write_node(left, include_distances, left.distance(), out);
            out.push(',');
            write_node(right, include_distances, right.distance(), out);
            out.push(')');
            if let Some(label) = label {
                out.push_str(label);
            }
        }
    }
    if include_distances {
        out.push(':');
        out.push_str(&format!("{:.6}", distance));
    }
}
