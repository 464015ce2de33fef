use simfasta::naming::name_of;
use simfasta::selection::{build_selection, SelectionPolicy};
use simfasta::tree::{parse_newick, TreeNode};

const TREE: &str = "((human:0.1,chimp:0.12):0.05,(mouse:0.3,rat:0.28)rodent:0.2);";

fn internal_children(node: &TreeNode) -> (&TreeNode, &TreeNode) {
    match node {
        TreeNode::Internal { left, right, .. } => (left, right),
        TreeNode::Leaf { .. } => panic!("expected internal node"),
    }
}

#[test]
fn leaves_only_selects_every_leaf() {
    let tree = parse_newick(TREE).unwrap();
    let selection = build_selection(&tree, SelectionPolicy::LeavesOnly);
    assert_eq!(selection.sorted(), vec!["chimp", "human", "mouse", "rat"]);
}

#[test]
fn all_nodes_adds_one_name_per_internal_node() {
    let tree = parse_newick(TREE).unwrap();
    let selection = build_selection(&tree, SelectionPolicy::AllNodes);
    assert_eq!(selection.len(), tree.node_count());

    let (primates, rodents) = internal_children(&tree);
    assert!(selection.contains("_L_human-0_100000chimp-0_120000_R"));
    assert!(selection.contains(&name_of(primates, false)));
    assert!(selection.contains("rodent"));
    assert_eq!(name_of(rodents, true), "rodent0_2");
    assert!(selection.contains(&name_of(&tree, false)));
}

#[test]
fn internal_names_are_filesystem_safe() {
    let tree = parse_newick(TREE).unwrap();
    let leaves = build_selection(&tree, SelectionPolicy::LeavesOnly);
    let all = build_selection(&tree, SelectionPolicy::AllNodes);
    for name in all.sorted().into_iter().filter(|n| !leaves.contains(n)) {
        assert!(!name.is_empty());
        for c in [' ', ',', ':', '.', ';', '\'', '"', '(', ')'] {
            assert!(!name.contains(c), "{name:?} contains {c:?}");
        }
    }
}

#[test]
fn naming_is_deterministic_across_parses() {
    let a = parse_newick(TREE).unwrap();
    let b = parse_newick(TREE).unwrap();
    assert_eq!(
        build_selection(&a, SelectionPolicy::AllNodes),
        build_selection(&b, SelectionPolicy::AllNodes)
    );
    assert_eq!(name_of(&a, true), name_of(&b, true));
}

#[test]
fn malformed_tree_rejected_at_load() {
    assert!(parse_newick("((a,),b);").is_err());
    assert!(parse_newick("(a,b").is_err());
}
