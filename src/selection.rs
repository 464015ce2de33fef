//! Selection of node names to extract
//!
//! Walks the tree and collects the directory names that should be turned into FASTA
//! files. The tree is only borrowed: internal names are computed without the node's own
//! branch length instead of zeroing distances in place.

use crate::naming::name_of;
use crate::tree::TreeNode;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};

/// Which tree nodes contribute names to the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionPolicy {
    LeavesOnly,
    AllNodes,
}

impl SelectionPolicy {
    pub fn from_include_ancestors(include_ancestors: bool) -> Self {
        if include_ancestors {
            SelectionPolicy::AllNodes
        } else {
            SelectionPolicy::LeavesOnly
        }
    }
}

/// Set of node names that must be extracted. Immutable once built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    names: HashSet<String>,
}

impl SelectionSet {
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Names in lexicographic order.
    pub fn sorted(&self) -> Vec<&str> {
        self.names
            .iter()
            .map(String::as_str)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

impl FromIterator<String> for SelectionSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        SelectionSet {
            names: iter.into_iter().collect(),
        }
    }
}

/// Build the selection set for `root` under `policy`.
///
/// Pre-order walk visiting the right child before the left. Leaves contribute their raw
/// identifier; internal nodes contribute their distance-free name under
/// [`SelectionPolicy::AllNodes`].
pub fn build_selection(root: &TreeNode, policy: SelectionPolicy) -> SelectionSet {
    let mut names = HashSet::new();
    collect(root, policy, &mut names);
    SelectionSet { names }
}

fn collect(node: &TreeNode, policy: SelectionPolicy, names: &mut HashSet<String>) {
    match node {
        TreeNode::Leaf { id, .. } => {
            names.insert(id.clone());
        }
        TreeNode::Internal { left, right, .. } => {
            if policy == SelectionPolicy::AllNodes {
                names.insert(name_of(node, false));
            }
            collect(right, policy, names);
            collect(left, policy, names);
        }
    }
}
