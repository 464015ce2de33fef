//! Tree node types

/// Node of a strictly binary phylogenetic tree.
///
/// Leaves always carry an identifier. Internal nodes always own both children and
/// may carry a label when the Newick source names them.
#[derive(Debug, Clone, PartialEq)]
pub enum TreeNode {
    Leaf {
        id: String,
        distance: f64,
    },
    Internal {
        label: Option<String>,
        distance: f64,
        left: Box<TreeNode>,
        right: Box<TreeNode>,
    },
}

impl TreeNode {
    pub fn leaf(id: impl Into<String>, distance: f64) -> Self {
        TreeNode::Leaf {
            id: id.into(),
            distance,
        }
    }

    pub fn internal(left: TreeNode, right: TreeNode, distance: f64) -> Self {
        TreeNode::Internal {
            label: None,
            distance,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Branch length to the parent.
    pub fn distance(&self) -> f64 {
        match self {
            TreeNode::Leaf { distance, .. } | TreeNode::Internal { distance, .. } => *distance,
        }
    }

    pub(crate) fn distance_mut(&mut self) -> &mut f64 {
        match self {
            TreeNode::Leaf { distance, .. } | TreeNode::Internal { distance, .. } => distance,
        }
    }

    /// Leaf id or internal label, if any.
    pub fn identifier(&self) -> Option<&str> {
        match self {
            TreeNode::Leaf { id, .. } => Some(id),
            TreeNode::Internal { label, .. } => label.as_deref(),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, TreeNode::Leaf { .. })
    }

    /// Number of nodes in the subtree, this node included.
    pub fn node_count(&self) -> usize {
        match self {
            TreeNode::Leaf { .. } => 1,
            TreeNode::Internal { left, right, .. } => 1 + left.node_count() + right.node_count(),
        }
    }

    /// Leaf identifiers in left-to-right order.
    pub fn leaf_ids(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_leaf_ids(&mut out);
        out
    }

    fn collect_leaf_ids<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            TreeNode::Leaf { id, .. } => out.push(id),
            TreeNode::Internal { left, right, .. } => {
                left.collect_leaf_ids(out);
                right.collect_leaf_ids(out);
            }
        }
    }
}
