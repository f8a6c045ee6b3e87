use cladogram::model::{BranchLength, Clade, PhyloTree, PhyloTreeBuilder, TreeBuilder};
use cladogram::newick::parse_str;

fn names<'a>(clades: impl Iterator<Item = &'a Clade>) -> Vec<&'a str> {
    clades.filter_map(Clade::name).collect()
}

#[test]
fn test_building_tree() {
    let mut tree = PhyloTree::new(5);
    let index_l1 = tree.add_clade(Some("Kaki".to_string()), Some(BranchLength::new(1.0)));
    let index_l2 = tree.add_clade(Some("Pied stilt".to_string()), Some(BranchLength::new(1.0)));
    let index_l3 = tree.add_clade(Some("Wrybill".to_string()), Some(BranchLength::new(0.5)));
    let index_i1 = tree.add_clade(None, Some(BranchLength::new(1.5)));
    let index_root = tree.add_clade(None, None);
    tree.attach(index_i1, index_l1);
    tree.attach(index_i1, index_l2);
    tree.attach(index_root, index_l3);
    tree.attach(index_root, index_i1);
    tree.set_root(index_root);

    // Counts
    assert_eq!(tree.num_terminals(), 3);
    assert_eq!(tree.num_internal(), 2);
    assert_eq!(tree.num_clades(), 5);
    assert!(tree.is_valid());

    // Root
    let root = tree.root();
    assert_eq!(root.index(), index_root);
    assert!(!root.has_parent());
    assert_eq!(root.children(), &[index_l3, index_i1]);

    // Terminal
    let l2 = &tree[index_l2];
    assert!(l2.is_terminal());
    assert_eq!(l2.index(), index_l2);
    assert_eq!(l2.name(), Some("Pied stilt"));

    // Internal
    let internal = &tree[index_i1];
    assert!(!internal.is_terminal());
    assert_eq!(internal.index(), index_i1);
    assert_eq!(internal.branch_length().unwrap(), BranchLength::new(1.5));
    assert_eq!(internal.parent_index(), Some(index_root));
}

#[test]
fn test_builder_lifecycle() {
    let mut builder = PhyloTreeBuilder::new();
    builder.init_next(3);
    let a = builder.add_leaf(Some("A".to_string()), None);
    let b = builder.add_leaf(Some("B".to_string()), Some(BranchLength::new(2.0)));
    let root = builder.add_internal(&[a, b], Some("R".to_string()), None);
    let tree = builder.finish_tree(root).unwrap();

    assert!(tree.is_valid());
    assert_eq!(tree.root().name(), Some("R"));
    assert_eq!(tree.root().children(), &[a, b]);

    // Builder is empty again
    assert!(builder.finish_tree(root).is_none());
}

#[test]
fn test_traversal_orders() {
    let tree = parse_str("((A,B)C,(D,(E,F)G)H)I;").unwrap();

    assert_eq!(
        names(tree.level_order_iter()),
        vec!["I", "C", "H", "A", "B", "D", "G", "E", "F"]
    );
    assert_eq!(
        names(tree.pre_order_iter()),
        vec!["I", "C", "A", "B", "H", "D", "G", "E", "F"]
    );
    assert_eq!(
        names(tree.post_order_iter()),
        vec!["A", "B", "C", "D", "E", "F", "G", "H", "I"]
    );
    assert_eq!(names(tree.terminals()), vec!["A", "B", "D", "E", "F"]);
}

#[test]
fn test_paths_and_depths() {
    let tree = parse_str("((A:1,B:2)C:0.5,(D,(E,F:0)G:3)H)I:9;").unwrap();
    let index = |name: &str| tree.find_by_name(name).unwrap();

    assert!(tree.path_to(tree.root_index()).is_empty());
    assert_eq!(tree.path_to(index("E")), vec![index("H"), index("G"), index("E")]);
    assert_eq!(tree.depth_of(index("I")), 0);
    assert_eq!(tree.depth_of(index("F")), 3);

    // Root branch length is not counted; missing and zero lengths count as 1
    assert_eq!(tree.distance_from_root(index("I")), 0.0);
    assert_eq!(tree.distance_from_root(index("B")), 2.5);
    assert_eq!(tree.distance_from_root(index("F")), 1.0 + 3.0 + 1.0);
}

#[test]
fn test_find_by_name_uses_level_order() {
    let tree = parse_str("(((X)Deep)P,X)R;").unwrap();
    let found = tree.find_by_name("X").unwrap();
    assert_eq!(tree.depth_of(found), 1);
    assert!(tree.find_by_name("Missing").is_none());
}

#[test]
fn test_detached_clade_is_not_traversed() {
    let mut tree = parse_str("(A,B)R;").unwrap();
    let detached = tree.add_clade(Some("Loner".to_string()), None);

    assert!(tree.is_valid());
    assert_eq!(tree.num_clades(), 4);
    assert_eq!(tree.pre_order_iter().count(), 3);
    assert!(tree.find_by_name("Loner").is_none());
    assert_eq!(tree.path_to(detached), vec![detached]);
}

#[test]
fn test_clade_mut_renames() {
    let mut tree = parse_str("(A,B);").unwrap();
    let root = tree.root_index();
    tree.clade_mut(root).set_name("Aves");
    assert_eq!(tree.root().name(), Some("Aves"));
    assert!(tree.get(root + 100).is_none());
}

#[test]
#[should_panic]
fn test_get_root_panics_on_empty_tree() {
    let tree = PhyloTree::new(2);
    tree.root(); // Should panic
}

#[test]
#[should_panic]
fn test_get_clade_out_of_bounds() {
    let tree = PhyloTree::new(2);
    let _ = &tree[55];
}
