use attr_tree::{ItemClass, ItemStack, Tree, Value};
use proptest::prelude::*;

fn leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<i32>().prop_map(Value::Int),
        any::<i64>().prop_map(Value::Long),
        any::<f64>().prop_map(Value::Double),
        any::<f32>().prop_map(Value::Float),
        "[a-z]{0,8}".prop_map(Value::String),
        any::<bool>().prop_map(Value::Bool),
        prop::collection::vec(any::<u8>(), 0..16).prop_map(Value::Bytes),
        prop::collection::vec("[a-z]{0,4}", 0..4).prop_map(Value::StringArray),
        prop::collection::vec(any::<i32>(), 0..8).prop_map(Value::IntArray),
        prop::collection::vec(any::<i64>(), 0..8).prop_map(Value::LongArray),
        prop::collection::vec(any::<f32>(), 0..8).prop_map(Value::FloatArray),
        prop::collection::vec(any::<f64>(), 0..8).prop_map(Value::DoubleArray),
        prop::collection::vec(any::<bool>(), 0..8).prop_map(Value::BoolArray),
    ]
}

fn entries(value: impl Strategy<Value = Value>) -> impl Strategy<Value = Tree> {
    prop::collection::vec(("[a-e]{1,3}", value), 0..6)
        .prop_map(|pairs| pairs.into_iter().collect::<Tree>())
}

fn tree() -> impl Strategy<Value = Tree> {
    let value = leaf().prop_recursive(4, 48, 6, |inner| {
        prop_oneof![
            entries(inner.clone()).prop_map(Value::Tree),
            prop::collection::vec(entries(inner.clone()), 0..3).prop_map(Value::TreeArray),
            (any::<bool>(), any::<i32>(), 0..64i32, entries(inner)).prop_map(
                |(item, id, size, attributes)| {
                    let class = if item { ItemClass::Item } else { ItemClass::Block };
                    Value::from(ItemStack::new(class, id, size).with_attributes(attributes))
                }
            ),
            Just(Value::ItemStack(None)),
        ]
    });
    entries(value)
}

proptest! {
    #[test]
    fn round_trip_preserves_equality_and_hash(t in tree()) {
        let bytes = t.to_bytes().unwrap();
        let back = Tree::from_bytes(&bytes).unwrap();
        prop_assert!(back.equals(&t));
        prop_assert_eq!(back.structural_hash(&[]), t.structural_hash(&[]));
        prop_assert_eq!(back.keys().collect::<Vec<_>>(), t.keys().collect::<Vec<_>>());
        prop_assert_eq!(back.to_bytes().unwrap(), bytes);
    }

    #[test]
    fn reordering_keeps_equality_and_hash(t in tree()) {
        let reversed: Tree = t.clone().into_iter().rev().collect();
        prop_assert!(reversed.equals(&t));
        prop_assert!(t.equals(&reversed));
        prop_assert_eq!(reversed.structural_hash(&[]), t.structural_hash(&[]));
    }

    #[test]
    fn merging_a_tree_into_itself_changes_nothing(t in tree()) {
        let mut merged = t.clone();
        merged.merge(&t).unwrap();
        prop_assert!(merged.equals(&t));
    }

    #[test]
    fn merge_result_contains_source(a in tree(), b in tree()) {
        let mut merged = a.clone();
        if merged.merge(&b).is_ok() {
            prop_assert!(b.is_subset_of(&merged, &[]));
        } else {
            prop_assert!(merged.equals(&a));
        }
    }

    #[test]
    fn subset_laws(t in tree(), extra in "[x-z]{4}", v in leaf()) {
        prop_assert!(t.is_subset_of(&t, &[]));
        let mut bigger = t.clone();
        bigger.set(extra.clone(), v);
        prop_assert!(t.is_subset_of(&bigger, &[]));
        prop_assert!(bigger.is_subset_of(&t, &[extra.as_str()]));
    }

    #[test]
    fn codec_clone_matches_structural_clone(t in tree()) {
        let via_codec = t.clone_via_codec().unwrap();
        let structural = t.clone();
        prop_assert!(via_codec.equals(&structural));
        prop_assert_eq!(via_codec.structural_hash(&[]), structural.structural_hash(&[]));
    }

    #[test]
    fn arbitrary_bytes_never_panic(data in prop::collection::vec(any::<u8>(), 0..256)) {
        let _ = Tree::from_bytes(&data);
    }
}
