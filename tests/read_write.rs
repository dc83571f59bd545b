use attr_tree::{
    DecodeConfig, ItemClass, ItemStack, Reader, Tree, TypeRegistry, Value, Writer,
};

// ==================== Helper Functions ====================

fn every_kind() -> Tree {
    let mut tree = Tree::new();
    tree.set_int("int", -42);
    tree.set_long("long", i64::MAX);
    tree.set_double("double", 2.5);
    tree.set_float("float", -0.25);
    tree.set_string("string", "héllo");
    tree.get_or_add_tree("tree").unwrap().set_int("inner", 1);
    let mut stack = ItemStack::new(ItemClass::Item, 1234, 16);
    stack.attributes.set_string("material", "copper");
    tree.set_item_stack("stack", Some(stack));
    tree.set_item_stack("empty_slot", None);
    tree.set_bytes("bytes", vec![0u8, 1, 255]);
    tree.set_bool("bool", true);
    tree.set_string_array("strings", vec!["a".to_owned(), String::new()]);
    tree.set_int_array("ints", vec![1, -1, i32::MIN]);
    tree.set_float_array("floats", vec![0.5f32, 1e10]);
    tree.set_double_array("doubles", vec![1e-300, -7.0]);
    let mut element = Tree::new();
    element.set_bool("flag", false);
    tree.set_tree_array("trees", vec![element, Tree::new()]);
    tree.set_long_array("longs", vec![i64::MIN, 0]);
    tree.set_bool_array("bools", vec![true, false, true]);
    tree
}

// ==================== Round Trips ====================

#[test]
fn test_scenario_int_and_string() {
    let mut tree = Tree::new();
    tree.set("x", 5);
    tree.set("y", "hi");

    let bytes = tree.to_bytes().unwrap();
    let decoded = Tree::from_bytes(&bytes).unwrap();

    assert_eq!(decoded.get_int("x", -1), 5);
    assert_eq!(decoded.get_string("y", ""), "hi");
    assert_eq!(decoded.len(), 2);
}

#[test]
fn test_every_kind_round_trips() {
    let tree = every_kind();
    let bytes = tree.to_bytes().unwrap();
    let decoded = Tree::from_bytes(&bytes).unwrap();

    assert!(decoded.equals(&tree));
    assert_eq!(decoded.structural_hash(&[]), tree.structural_hash(&[]));
    assert_eq!(decoded.keys().collect::<Vec<_>>(), tree.keys().collect::<Vec<_>>());

    let stack = decoded.get_item_stack("stack").unwrap();
    assert_eq!(stack.class, ItemClass::Item);
    assert_eq!(stack.id, 1234);
    assert_eq!(stack.stack_size, 16);
    assert_eq!(stack.attributes.get_string("material", ""), "copper");
    assert!(matches!(decoded.get("empty_slot"), Some(Value::ItemStack(None))));
    assert_eq!(decoded.get_bytes("bytes", &[]), &[0, 1, 255]);
    assert_eq!(decoded.get_tree_array("trees", &[]).len(), 2);
}

#[test]
fn test_reencoding_is_byte_identical() {
    let bytes = every_kind().to_bytes().unwrap();
    let again = Tree::from_bytes(&bytes).unwrap().to_bytes().unwrap();
    assert_eq!(bytes, again);
}

#[test]
fn test_empty_tree_is_single_terminator() {
    assert_eq!(Tree::new().to_bytes().unwrap(), vec![0]);
    assert!(Tree::from_bytes(&[0]).unwrap().is_empty());
}

#[test]
fn test_manual_bytes_decode() {
    // tag 9 (bool), key "ok", true; tag 11 (int array), key "v", [7]
    let data = vec![
        9, 2, b'o', b'k', 1, //
        11, 1, b'v', 1, 0, 0, 0, 7, 0, 0, 0, //
        0,
    ];
    let tree = Tree::from_bytes(&data).unwrap();
    assert!(tree.get_bool("ok", false));
    assert_eq!(tree.get_int_array("v", &[]), &[7]);
}

#[test]
fn test_nonzero_bool_reads_true() {
    let data = vec![9, 1, b'b', 0x7F, 0];
    let tree = Tree::from_bytes(&data).unwrap();
    assert_eq!(tree.try_get_bool("b"), Some(true));
}

#[test]
fn test_long_key_uses_multibyte_prefix() {
    let key = "k".repeat(200);
    let mut tree = Tree::new();
    tree.set_int(key.clone(), 1);
    let bytes = tree.to_bytes().unwrap();
    assert_eq!(&bytes[..3], &[1, 0xC8, 0x01]);
    assert_eq!(Tree::from_bytes(&bytes).unwrap().get_int(&key, 0), 1);
}

#[test]
fn test_write_to_and_read_from() {
    let tree = every_kind();
    let mut sink = Vec::new();
    tree.write_to(&mut sink).unwrap();
    let decoded = Tree::read_from(sink.as_slice()).unwrap();
    assert!(decoded.equals(&tree));
}

#[test]
fn test_clone_is_independent() {
    let original = every_kind();
    let mut copy = original.clone();
    copy.get_tree_mut("tree").unwrap().set_int("inner", 99);
    assert_eq!(original.get_tree("tree").unwrap().get_int("inner", 0), 1);

    let via_codec = original.clone_via_codec().unwrap();
    assert!(via_codec.equals(&original));
}

#[test]
fn test_batch_decode_with_one_reader() {
    let mut first = Tree::new();
    first.set_int("n", 1);
    let mut second = Tree::new();
    second.set_string("s", "two");

    let mut writer = Writer::new();
    first.encode_into(&mut writer).unwrap();
    second.encode_into(&mut writer).unwrap();
    let bytes = writer.into_inner();

    let registry = TypeRegistry::with_builtins();
    let mut reader = Reader::new(&bytes, &registry);
    assert!(Tree::decode_from(&mut reader).unwrap().equals(&first));
    assert!(Tree::decode_from(&mut reader).unwrap().equals(&second));
    assert!(reader.is_at_end());
}

#[test]
fn test_trailing_data_allowed_by_config() {
    let mut bytes = every_kind().to_bytes().unwrap();
    bytes.extend_from_slice(&[1, 2, 3]);
    let config = DecodeConfig::default().with_trailing_data(true);
    let tree = Tree::from_bytes_with(&bytes, &config).unwrap();
    assert!(tree.equals(&every_kind()));
}

#[test]
fn test_duplicate_key_in_stream_keeps_last_value() {
    let data = vec![
        1, 1, b'a', 1, 0, 0, 0, //
        1, 1, b'a', 2, 0, 0, 0, //
        0,
    ];
    let tree = Tree::from_bytes(&data).unwrap();
    assert_eq!(tree.len(), 1);
    assert_eq!(tree.get_int("a", 0), 2);
}
