#![allow(unused)]

use cladogram::model::{BranchLength, Clade, DEFAULT_EDGE_LENGTH};

// ============= Branch Length Tests =============
#[test]
fn test_branch_lengths() {
    let test_length = 1.234;
    let clade = Clade::new(5, None, Some(BranchLength::new(test_length)));
    assert_eq!(*clade.branch_length().unwrap(), test_length);
    assert_eq!(clade.edge_length(), test_length);
}

#[test]
#[should_panic]
fn test_negative_branch_length() {
    let negative_length = BranchLength::new(-1.0);
}

#[test]
fn test_try_new_branch_length() {
    assert!(BranchLength::try_new(0.0).is_some());
    assert!(BranchLength::try_new(-0.1).is_none());
    assert!(BranchLength::try_new(f64::INFINITY).is_none());
    assert!(BranchLength::try_new(f64::NAN).is_none());
}

#[test]
fn test_edge_length_defaults() {
    let missing = Clade::new(0, None, None);
    assert_eq!(missing.edge_length(), DEFAULT_EDGE_LENGTH);

    let zero = Clade::new(0, None, Some(BranchLength::new(0.0)));
    assert_eq!(zero.edge_length(), DEFAULT_EDGE_LENGTH);
}

// ============= Names =============
#[test]
fn test_empty_name_is_unnamed() {
    let clade = Clade::new(0, Some(String::new()), None);
    assert_eq!(clade.name(), None);

    let mut clade = Clade::new(0, Some("Tieke".to_string()), None);
    assert!(clade.is_named("Tieke"));
    clade.set_name("");
    assert_eq!(clade.name(), None);
}

// ============= Structure =============
#[test]
fn test_new_clade_is_detached_terminal() {
    let clade = Clade::new(3, Some("Hihi".to_string()), None);
    assert_eq!(clade.index(), 3);
    assert!(clade.is_terminal());
    assert_eq!(clade.num_children(), 0);
    assert!(clade.children().is_empty());
    assert_eq!(clade.parent_index(), None);
    assert!(!clade.has_parent());
}
