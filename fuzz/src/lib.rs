use attr_tree::{DecodeConfig, Reader, Tree, TypeRegistry};

/// Decodes `data` and checks that whatever decodes survives a round trip.
pub fn test(data: &[u8]) {
    let Ok(tree) = Tree::from_bytes(data) else {
        return;
    };

    let bytes = tree.to_bytes().expect("decoded tree re-encodes");
    let again = Tree::from_bytes(&bytes).expect("re-encoded tree decodes");
    assert!(again.equals(&tree));
    assert_eq!(again.to_bytes().expect("re-encodes"), bytes);
    assert_eq!(again.structural_hash(&[]), tree.structural_hash(&[]));

    let mut merged = tree.clone();
    merged.merge(&tree).expect("self merge cannot conflict");
    assert!(merged.equals(&tree));
    assert!(tree.is_subset_of(&merged, &[]));
}

/// Streams trees one after another until the input runs out, with a tight
/// depth limit to drive the skip path.
pub fn test_stream(data: &[u8]) {
    let registry = TypeRegistry::with_builtins();
    let config = DecodeConfig::default().with_max_depth(2);
    let mut reader = Reader::with_config(data, &registry, config);
    while !reader.is_at_end() {
        if Tree::decode_from(&mut reader).is_err() {
            break;
        }
    }
}
