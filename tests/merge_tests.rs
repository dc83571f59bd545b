use attr_tree::{Error, Tag, Tree};

#[test]
fn test_scenario_nested_merge() {
    // merging {a: {b: 1}} into {a: {c: 2}}
    let mut target = Tree::new();
    target.get_or_add_tree("a").unwrap().set_int("c", 2);
    let mut source = Tree::new();
    source.get_or_add_tree("a").unwrap().set_int("b", 1);

    target.merge(&source).unwrap();

    let mut expected = Tree::new();
    let a = expected.get_or_add_tree("a").unwrap();
    a.set_int("b", 1);
    a.set_int("c", 2);
    assert!(target.equals(&expected));
    assert_eq!(target.len(), 1);
}

#[test]
fn test_scenario_conflicting_kinds() {
    // merging {a: int 1} into {a: string "x"}
    let mut target = Tree::new();
    target.set_string("a", "x");
    let mut source = Tree::new();
    source.set_int("a", 1);

    let err = target.merge(&source).unwrap_err();
    assert!(matches!(
        err,
        Error::MergeConflict { ref key, expected, actual }
            if key == "a" && expected == Tag::String as u8 && actual == Tag::Int as u8
    ));
    assert_eq!(target.get_string("a", ""), "x");
}

#[test]
fn test_merge_overwrites_same_kind() {
    let mut target = Tree::new();
    target.set_int("hp", 10);
    target.set_int_array("slots", vec![1, 2, 3]);
    let mut source = Tree::new();
    source.set_int("hp", 3);
    source.set_int_array("slots", vec![9]);

    target.merge(&source).unwrap();
    assert_eq!(target.get_int("hp", 0), 3);
    assert_eq!(target.get_int_array("slots", &[]), &[9]);
}

#[test]
fn test_merge_is_idempotent() {
    let mut tree = Tree::new();
    tree.set_int("a", 1);
    tree.get_or_add_tree("b").unwrap().set_string("c", "d");
    let snapshot = tree.clone();

    let copy = tree.clone();
    tree.merge(&copy).unwrap();
    assert!(tree.equals(&snapshot));
    assert_eq!(tree.structural_hash(&[]), snapshot.structural_hash(&[]));
}

#[test]
fn test_tree_over_leaf_conflicts() {
    let mut target = Tree::new();
    target.set_int("a", 1);
    let mut source = Tree::new();
    source.get_or_add_tree("a").unwrap();
    assert!(matches!(
        target.merge(&source),
        Err(Error::MergeConflict { expected: 1, actual: 6, .. })
    ));
}

#[test]
fn test_merge_appends_new_keys_in_source_order() {
    let mut target = Tree::new();
    target.set_int("z", 0);
    let source: Tree = [("b", 1), ("a", 2)].into_iter().collect();
    target.merge(&source).unwrap();
    assert_eq!(target.keys().collect::<Vec<_>>(), vec!["z", "b", "a"]);
}
