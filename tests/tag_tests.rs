use attr_tree::{Tag, TypeRegistry, Value};

#[test]
fn test_tag_values() {
    assert_eq!(Tag::End as u8, 0);
    assert_eq!(Tag::Int as u8, 1);
    assert_eq!(Tag::Long as u8, 2);
    assert_eq!(Tag::Double as u8, 3);
    assert_eq!(Tag::Float as u8, 4);
    assert_eq!(Tag::String as u8, 5);
    assert_eq!(Tag::Tree as u8, 6);
    assert_eq!(Tag::ItemStack as u8, 7);
    assert_eq!(Tag::Bytes as u8, 8);
    assert_eq!(Tag::Bool as u8, 9);
    assert_eq!(Tag::StringArray as u8, 10);
    assert_eq!(Tag::IntArray as u8, 11);
    assert_eq!(Tag::FloatArray as u8, 12);
    assert_eq!(Tag::DoubleArray as u8, 13);
    assert_eq!(Tag::TreeArray as u8, 14);
    assert_eq!(Tag::LongArray as u8, 15);
    assert_eq!(Tag::BoolArray as u8, 16);
    assert_eq!(Tag::FIRST_CUSTOM, 17);
}

#[test]
fn test_tag_from_u8() {
    for raw in 0..Tag::FIRST_CUSTOM {
        let tag = Tag::from_u8(raw).unwrap();
        assert_eq!(u8::from(tag), raw);
    }
    assert_eq!(Tag::from_u8(Tag::FIRST_CUSTOM), None);
    assert_eq!(Tag::from_u8(255), None);
}

#[test]
fn test_tag_classification() {
    assert!(Tag::Int.is_primitive());
    assert!(Tag::Bool.is_primitive());
    assert!(!Tag::String.is_primitive());
    assert!(!Tag::End.is_primitive());

    assert!(Tag::Bytes.is_array());
    assert!(Tag::StringArray.is_array());
    assert!(Tag::BoolArray.is_array());
    assert!(!Tag::TreeArray.is_array());
    assert!(!Tag::Int.is_array());

    assert!(Tag::Tree.is_composite());
    assert!(Tag::ItemStack.is_composite());
    assert!(Tag::TreeArray.is_composite());
    assert!(!Tag::IntArray.is_composite());
}

#[test]
fn test_tag_element_size() {
    assert_eq!(Tag::Int.element_size(), Some(4));
    assert_eq!(Tag::FloatArray.element_size(), Some(4));
    assert_eq!(Tag::Long.element_size(), Some(8));
    assert_eq!(Tag::DoubleArray.element_size(), Some(8));
    assert_eq!(Tag::Bytes.element_size(), Some(1));
    assert_eq!(Tag::BoolArray.element_size(), Some(1));
    assert_eq!(Tag::String.element_size(), None);
    assert_eq!(Tag::Tree.element_size(), None);
}

#[test]
fn test_values_report_builtin_tags() {
    let registry = TypeRegistry::with_builtins();
    for raw in 1..Tag::FIRST_CUSTOM {
        let value = registry.resolve(raw).unwrap()();
        assert_eq!(value.type_tag(), raw);
        assert_eq!(value.tag(), Tag::from_u8(raw));
    }
    assert_eq!(Value::from(3i64).tag(), Some(Tag::Long));
}
