//! [`serde::Serialize`] for trees, so they can be exported to any serde
//! format (JSON dumps of save data, debug views).
//!
//! Trees become maps in insertion order, arrays become sequences, byte blobs
//! use `serialize_bytes`, a null item stack is `none`, and custom kinds are
//! written as their token string. There is deliberately no `Deserialize`:
//! the binary codec is the only way back into a tree.

use serde::ser::{Serialize, SerializeMap, SerializeStruct, Serializer};

use crate::{ItemStack, Tree, Value};

impl Serialize for Tree {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self.iter() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Int(v) => serializer.serialize_i32(*v),
            Value::Long(v) => serializer.serialize_i64(*v),
            Value::Double(v) => serializer.serialize_f64(*v),
            Value::Float(v) => serializer.serialize_f32(*v),
            Value::String(v) => serializer.serialize_str(v),
            Value::Tree(tree) => tree.serialize(serializer),
            Value::ItemStack(None) => serializer.serialize_none(),
            Value::ItemStack(Some(stack)) => serializer.serialize_some(stack.as_ref()),
            Value::Bytes(v) => serializer.serialize_bytes(v),
            Value::Bool(v) => serializer.serialize_bool(*v),
            Value::StringArray(v) => serializer.collect_seq(v),
            Value::IntArray(v) => serializer.collect_seq(v),
            Value::FloatArray(v) => serializer.collect_seq(v),
            Value::DoubleArray(v) => serializer.collect_seq(v),
            Value::TreeArray(v) => serializer.collect_seq(v),
            Value::LongArray(v) => serializer.collect_seq(v),
            Value::BoolArray(v) => serializer.collect_seq(v),
            Value::Custom(attribute) => serializer.serialize_str(&attribute.to_json_token()),
        }
    }
}

impl Serialize for ItemStack {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ItemStack", 4)?;
        state.serialize_field("class", self.class.as_str())?;
        state.serialize_field("id", &self.id)?;
        state.serialize_field("stack_size", &self.stack_size)?;
        state.serialize_field("attributes", &self.attributes)?;
        state.end()
    }
}
