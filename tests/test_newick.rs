use cladogram::layout::Dendrogram;
use cladogram::model::BranchLength;
use cladogram::newick::{NewickParser, normalize_whitespace, parse_str, to_newick};
use cladogram::parser::ParsingErrorType;
use cladogram::parser::byte_parser::ByteParser;
use cladogram::{Error, LayoutConfig, create_phylogenetic_tree};

// --- TESTS NEWICK STRING PARSING ---
#[test]
fn test_basic_tree() {
    let newick = "((A:1.0,B:2.0):3.0,C:4.0):0.5;";
    let mut parser = ByteParser::for_str(newick);
    let tree = NewickParser::new_defaults()
        .with_num_clades(5)
        .parse_str(&mut parser)
        .unwrap();

    // Test counts
    assert_eq!(tree.num_terminals(), 3);
    assert_eq!(tree.num_internal(), 2);
    assert_eq!(tree.num_clades(), 5);
    assert!(tree.is_valid());

    // Test relationships
    // - Root has children (internal, C)
    let root = tree.root();
    let root_index = root.index();
    assert_eq!(root.branch_length(), Some(BranchLength::new(0.5)));
    let &[root_left, root_right] = root.children() else {
        panic!("root should have two children");
    };

    // - Internal clade has children (A, B)
    let internal = tree.clade(root_left);
    assert!(!internal.is_terminal());
    assert_eq!(*internal.branch_length().unwrap(), 3.0);
    let &[internal_left, internal_right] = internal.children() else {
        panic!("internal clade should have two children");
    };

    // - Three terminals
    let a = tree.clade(internal_left);
    let b = tree.clade(internal_right);
    let c = tree.clade(root_right);
    assert_eq!(a.name(), Some("A"));
    assert_eq!(b.name(), Some("B"));
    assert_eq!(c.name(), Some("C"));
    assert!(a.is_terminal() && b.is_terminal() && c.is_terminal());

    // - Parent relationships
    assert_eq!(internal.parent_index(), Some(root_index));
    assert_eq!(a.parent_index(), Some(root_left));
    assert_eq!(b.parent_index(), Some(root_left));
    assert_eq!(c.parent_index(), Some(root_index));
    assert_eq!(root.parent_index(), None);
}

#[test]
fn test_internal_labels_and_polytomy() {
    let tree = parse_str("(A,B,(C,D)E)F;").unwrap();
    assert_eq!(tree.root().name(), Some("F"));
    assert_eq!(tree.root().num_children(), 3);

    let names: Vec<&str> = tree.level_order_iter().filter_map(|c| c.name()).collect();
    assert_eq!(names, vec!["F", "A", "B", "E", "C", "D"]);
}

#[test]
fn test_missing_branch_lengths() {
    let tree = parse_str("(A,B:2.5)R;").unwrap();
    let a = tree.clade(tree.find_by_name("A").unwrap());
    let b = tree.clade(tree.find_by_name("B").unwrap());
    assert_eq!(a.branch_length(), None);
    assert_eq!(a.edge_length(), 1.0);
    assert_eq!(b.edge_length(), 2.5);
}

#[test]
fn test_scientific_notation() {
    let tree = parse_str("(A:1.5e-3,B:2E2);").unwrap();
    let &[a, b] = tree.root().children() else {
        panic!("root should have two children");
    };
    assert_eq!(*tree[a].branch_length().unwrap(), 0.0015);
    assert_eq!(*tree[b].branch_length().unwrap(), 200.0);
}

#[test]
fn test_quoted_labels_comments_and_whitespace() {
    let newick = " [&R] ( 'Homo sapiens' : 0.1 [a comment],\n\t'Pan''s' [x] :0.2 ) 'Hominini' ; \n";
    let tree = parse_str(newick).unwrap();

    let names: Vec<&str> = tree.pre_order_iter().filter_map(|c| c.name()).collect();
    assert_eq!(names, vec!["Hominini", "Homo sapiens", "Pan's"]);
    assert_eq!(tree.num_terminals(), 2);
}

#[test]
fn test_unnamed_clades() {
    let tree = parse_str("((,),);").unwrap();
    assert_eq!(tree.num_clades(), 5);
    assert_eq!(tree.num_terminals(), 3);
    assert!(tree.pre_order_iter().all(|c| c.name().is_none()));
}

#[test]
fn test_single_child_chain() {
    let tree = parse_str("(((A)B)C)D;").unwrap();
    assert_eq!(tree.num_terminals(), 1);
    let a = tree.find_by_name("A").unwrap();
    assert_eq!(tree.depth_of(a), 3);
}

// --- TESTS INVALID INPUT ---
#[test]
fn test_empty_input() {
    for newick in ["", "   \n", "[only a comment]"] {
        let err = parse_str(newick).unwrap_err();
        assert_eq!(err.kind(), &ParsingErrorType::EmptyInput, "input: {newick:?}");
    }
}

#[test]
fn test_mismatched_parentheses() {
    let err = parse_str("((A,B);").unwrap_err();
    assert!(matches!(err.kind(), ParsingErrorType::InvalidNewickString(_)));

    let err = parse_str("((A,B").unwrap_err();
    assert_eq!(err.kind(), &ParsingErrorType::UnexpectedEof);

    let err = parse_str("(A,B));").unwrap_err();
    assert!(matches!(err.kind(), ParsingErrorType::InvalidNewickString(_)));
}

#[test]
fn test_missing_semicolon() {
    let err = parse_str("(A,B)C").unwrap_err();
    assert!(matches!(err.kind(), ParsingErrorType::InvalidNewickString(_)));
    assert_eq!(err.position(), 6);
}

#[test]
fn test_trailing_content() {
    let err = parse_str("(A,B);(C,D);").unwrap_err();
    assert!(matches!(err.kind(), ParsingErrorType::InvalidNewickString(_)));

    // Trailing whitespace and comments are fine
    assert!(parse_str("(A,B); [end]\n").is_ok());
}

#[test]
fn test_unclosed_quote_and_comment() {
    let err = parse_str("('A,B);").unwrap_err();
    assert_eq!(err.kind(), &ParsingErrorType::UnclosedQuotedLabel);

    let err = parse_str("(A,B)[;").unwrap_err();
    assert_eq!(err.kind(), &ParsingErrorType::UnclosedComment);
}

#[test]
fn test_invalid_branch_lengths() {
    for newick in ["(A:,B);", "(A:x,B);", "(A:-0.5,B);", "(A:1.2.3,B);"] {
        let err = parse_str(newick).unwrap_err();
        assert!(
            matches!(err.kind(), ParsingErrorType::InvalidBranchLength(_)),
            "input: {newick:?}, error: {err}"
        );
    }
}

// --- TESTS NORMALIZATION AND WRITING ---
#[test]
fn test_normalize_whitespace() {
    assert_eq!(normalize_whitespace("(Homo sapiens,Pan);"), "(Homo_sapiens,Pan);");
    assert_eq!(normalize_whitespace("(A,\tB);"), "(A,\tB);");

    let tree = parse_str(normalize_whitespace("(Homo sapiens, Pan troglodytes);")).unwrap();
    let names: Vec<&str> = tree.terminals().filter_map(|c| c.name()).collect();
    assert_eq!(names, vec!["Homo_sapiens", "_Pan_troglodytes"]);
}

#[test]
fn test_write_round_trip() {
    for newick in [
        "(A,B,(C,D)E)F;",
        "((B:0.2,(C:0.3,D:0.4)E:0.5)F:0.1)A;",
        "(('Baillon''s crake',Pukeko)Rallidae,Kiwi);",
        "((,),);",
        "A;",
    ] {
        let tree = parse_str(newick).unwrap();
        assert_eq!(to_newick(&tree), newick);
    }
}

// --- TESTS DEEP NESTING ---
const LADDER_DEPTH: usize = 100_000;

/// `((((A))));` with `depth` pairs of parentheses
fn ladder(depth: usize) -> String {
    format!("{}A{};", "(".repeat(depth), ")".repeat(depth))
}

/// `(((T0,T1),T2),T3);` with `depth` internal clades
fn caterpillar(depth: usize) -> String {
    let mut newick = "(".repeat(depth);
    newick.push_str("T0");
    for i in 1..=depth {
        newick.push_str(&format!(",T{i})"));
    }
    newick.push(';');
    newick
}

#[test]
fn test_deep_ladder_parses_and_writes() {
    let newick = ladder(LADDER_DEPTH);
    let tree = parse_str(&newick).unwrap();

    assert_eq!(tree.num_clades(), LADDER_DEPTH + 1);
    assert_eq!(tree.num_terminals(), 1);
    assert!(tree.is_valid());
    assert_eq!(tree.depth_of(tree.find_by_name("A").unwrap()), LADDER_DEPTH);
    assert_eq!(to_newick(&tree), newick);
}

#[test]
fn test_deep_ladder_lays_out() {
    let dendrogram = Dendrogram::from_newick(&ladder(LADDER_DEPTH), &LayoutConfig::default()).unwrap();
    let a = dendrogram.position_of("A").unwrap();
    assert_eq!((a.x, a.y), (LADDER_DEPTH as f64, 0.0));

    let figure = dendrogram.figure();
    assert_eq!(figure.markers().count(), LADDER_DEPTH + 1);
    assert_eq!(figure.lines().count(), 2 * LADDER_DEPTH);
}

#[test]
fn test_deep_caterpillar_lays_out() {
    let depth = 20_000;
    let figure = create_phylogenetic_tree(&caterpillar(depth), &LayoutConfig::default()).unwrap();
    assert_eq!(figure.markers().count(), 2 * depth + 1);
    assert!(figure.to_json().is_ok());
}

#[test]
fn test_deep_unclosed_nesting_is_an_error() {
    let newick = "(".repeat(LADDER_DEPTH) + "A";
    let err = parse_str(&newick).unwrap_err();
    assert_eq!(err.kind(), &ParsingErrorType::UnexpectedEof);

    let result = create_phylogenetic_tree(&newick, &LayoutConfig::default());
    assert!(matches!(result, Err(Error::InvalidInput(_))));
}
