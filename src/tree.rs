use std::fmt;
use std::io::{Read, Write};

use indexmap::IndexMap;

use crate::{
    DecodeConfig, Error, ItemStack, Reader, Result, Tag, Value, Writer, registry,
    util::quote,
};

/// An ordered, self-describing map from string keys to [`Value`]s.
///
/// Keys are unique. Insertion order is kept for deterministic re-encoding
/// but plays no part in equality or hashing. A tree owns everything nested
/// in it; [`Clone`] is a full deep copy.
///
/// Mutation goes through `&mut self`, so a plain `Tree` is never shared
/// mutably. Use [`SyncedTree`](crate::SyncedTree) to share one across
/// threads behind a single lock.
///
/// # Example
///
/// ```
/// use attr_tree::Tree;
///
/// let mut tree = Tree::new();
/// tree.set_int("x", 5);
/// tree.set_string("y", "hi");
///
/// let bytes = tree.to_bytes().unwrap();
/// let decoded = Tree::from_bytes(&bytes).unwrap();
///
/// assert_eq!(decoded.get_int("x", -1), 5);
/// assert_eq!(decoded.get_string("y", ""), "hi");
/// assert_eq!(decoded.len(), 2);
/// ```
#[derive(Clone, Default)]
pub struct Tree {
    pub(crate) entries: IndexMap<String, Value>,
}

// get_*/try_get_*/set_* for the `Copy` kinds.
macro_rules! copy_accessors {
    ($($get:ident, $try_get:ident, $set:ident, $variant:ident, $ty:ty;)*) => {
        $(
            #[inline]
            pub fn $try_get(&self, key: &str) -> Option<$ty> {
                match self.entries.get(key) {
                    Some(Value::$variant(value)) => Some(*value),
                    _ => None,
                }
            }

            #[inline]
            pub fn $get(&self, key: &str, default: $ty) -> $ty {
                self.$try_get(key).unwrap_or(default)
            }

            #[inline]
            pub fn $set(&mut self, key: impl Into<String>, value: $ty) {
                self.entries.insert(key.into(), Value::$variant(value));
            }
        )*
    };
}

// Same for the array kinds, borrowing the stored slice.
macro_rules! slice_accessors {
    ($($get:ident, $try_get:ident, $set:ident, $variant:ident, $elem:ty;)*) => {
        $(
            #[inline]
            pub fn $try_get(&self, key: &str) -> Option<&[$elem]> {
                match self.entries.get(key) {
                    Some(Value::$variant(values)) => Some(values),
                    _ => None,
                }
            }

            #[inline]
            pub fn $get<'a>(&'a self, key: &str, default: &'a [$elem]) -> &'a [$elem] {
                self.$try_get(key).unwrap_or(default)
            }

            #[inline]
            pub fn $set(&mut self, key: impl Into<String>, values: impl Into<Vec<$elem>>) {
                self.entries.insert(key.into(), Value::$variant(values.into()));
            }
        )*
    };
}

impl Tree {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Position of `key` in insertion order.
    #[inline]
    pub fn index_of(&self, key: &str) -> Option<usize> {
        self.entries.get_index_of(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.values()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&str, &mut Value)> {
        self.entries.iter_mut().map(|(k, v)| (k.as_str(), v))
    }

    #[inline]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    #[inline]
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.entries.get_mut(key)
    }

    /// Inserts or replaces the value at `key`, returning the previous one.
    /// A replaced key keeps its position.
    #[inline]
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(key.into(), value.into())
    }

    /// Removes `key`, keeping the order of the remaining entries.
    #[inline]
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.entries.shift_remove(key)
    }

    #[inline]
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    copy_accessors! {
        get_int, try_get_int, set_int, Int, i32;
        get_long, try_get_long, set_long, Long, i64;
        get_double, try_get_double, set_double, Double, f64;
        get_float, try_get_float, set_float, Float, f32;
        get_bool, try_get_bool, set_bool, Bool, bool;
    }

    slice_accessors! {
        get_bytes, try_get_bytes, set_bytes, Bytes, u8;
        get_string_array, try_get_string_array, set_string_array, StringArray, String;
        get_int_array, try_get_int_array, set_int_array, IntArray, i32;
        get_float_array, try_get_float_array, set_float_array, FloatArray, f32;
        get_double_array, try_get_double_array, set_double_array, DoubleArray, f64;
        get_tree_array, try_get_tree_array, set_tree_array, TreeArray, Tree;
        get_long_array, try_get_long_array, set_long_array, LongArray, i64;
        get_bool_array, try_get_bool_array, set_bool_array, BoolArray, bool;
    }

    #[inline]
    pub fn try_get_string(&self, key: &str) -> Option<&str> {
        self.entries.get(key).and_then(Value::as_str)
    }

    #[inline]
    pub fn get_string<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.try_get_string(key).unwrap_or(default)
    }

    #[inline]
    pub fn set_string(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), Value::String(value.into()));
    }

    /// Reads an int, long, float or double, whichever is stored, as `f64`.
    pub fn get_decimal(&self, key: &str, default: f64) -> f64 {
        self.entries
            .get(key)
            .and_then(Value::as_decimal)
            .unwrap_or(default)
    }

    #[inline]
    pub fn get_tree(&self, key: &str) -> Option<&Tree> {
        self.entries.get(key).and_then(Value::as_tree)
    }

    #[inline]
    pub fn get_tree_mut(&mut self, key: &str) -> Option<&mut Tree> {
        self.entries.get_mut(key).and_then(Value::as_tree_mut)
    }

    #[inline]
    pub fn set_tree(&mut self, key: impl Into<String>, tree: Tree) {
        self.entries.insert(key.into(), Value::Tree(tree));
    }

    /// Returns the nested tree at `key`, inserting an empty one if the key is
    /// absent.
    ///
    /// Fails with [`Error::TypeMismatch`] when `key` holds another kind.
    pub fn get_or_add_tree(&mut self, key: &str) -> Result<&mut Tree> {
        let value = self
            .entries
            .entry(key.to_owned())
            .or_insert_with(|| Value::Tree(Tree::new()));
        match value {
            Value::Tree(tree) => Ok(tree),
            other => Err(Error::TypeMismatch {
                key: key.to_owned(),
                expected: Tag::Tree as u8,
                actual: other.type_tag(),
            }),
        }
    }

    #[inline]
    pub fn get_item_stack(&self, key: &str) -> Option<&ItemStack> {
        self.entries.get(key).and_then(Value::as_item_stack)
    }

    /// Stores `stack`, or a null stack slot for `None`.
    pub fn set_item_stack(&mut self, key: impl Into<String>, stack: Option<ItemStack>) {
        self.entries
            .insert(key.into(), Value::ItemStack(stack.map(Box::new)));
    }

    /// Levels of nested trees below this one; `0` when no value is a tree.
    ///
    /// Trees inside tree arrays and item stacks count as one level deeper,
    /// matching how the decoder tracks depth.
    pub fn depth(&self) -> usize {
        self.entries
            .values()
            .map(|value| match value {
                Value::Tree(tree) => tree.depth() + 1,
                Value::TreeArray(trees) => {
                    trees.iter().map(|tree| tree.depth() + 1).max().unwrap_or(0)
                }
                Value::ItemStack(Some(stack)) => stack.attributes.depth() + 1,
                _ => 0,
            })
            .max()
            .unwrap_or(0)
    }

    /// Appends the encoded tree: per entry a tag byte, the key and the
    /// payload, then a `0` terminator.
    pub fn encode_into(&self, writer: &mut Writer) -> Result<()> {
        for (key, value) in &self.entries {
            writer.write_u8(value.type_tag());
            writer.write_string(key)?;
            value.encode_payload(writer)?;
        }
        writer.write_u8(Tag::End as u8);
        Ok(())
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut writer = Writer::with_capacity(64);
        self.encode_into(&mut writer)?;
        Ok(writer.into_inner())
    }

    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<()> {
        writer.write_all(&self.to_bytes()?).map_err(Error::Io)
    }

    /// Decodes one tree at the reader's current position.
    ///
    /// A tree reached deeper than the configured limit comes back empty;
    /// its bytes are consumed so decoding continues in step.
    pub fn decode_from(reader: &mut Reader<'_>) -> Result<Tree> {
        let mut tree = Tree::new();
        if reader.depth() > reader.config().max_depth {
            reader.skip_tree()?;
            return Ok(tree);
        }
        loop {
            let tag = reader.read_u8()?;
            if tag == Tag::End as u8 {
                return Ok(tree);
            }
            let key = reader.read_string()?;
            let value = Value::decode(tag, reader)?;
            tree.entries.insert(key, value);
        }
    }

    /// Decodes a complete tree with the process-wide registry and the
    /// default [`DecodeConfig`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Tree> {
        Self::from_bytes_with(bytes, &DecodeConfig::default())
    }

    pub fn from_bytes_with(bytes: &[u8], config: &DecodeConfig) -> Result<Tree> {
        let registry = registry::global();
        let mut reader = Reader::with_config(bytes, &registry, *config);
        let tree = Self::decode_from(&mut reader)?;
        if !config.allow_trailing_data && !reader.is_at_end() {
            return Err(Error::TrailingData(reader.remaining()));
        }
        Ok(tree)
    }

    pub fn read_from<R: Read>(mut reader: R) -> Result<Tree> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes).map_err(Error::Io)?;
        Self::from_bytes(&bytes)
    }

    /// Deep copy through an encode/decode round trip, so custom kinds come
    /// back as whatever the process-wide registry builds for their tags.
    pub fn clone_via_codec(&self) -> Result<Tree> {
        Self::from_bytes(&self.to_bytes()?)
    }

    /// `{ "key": token, ... }` rendering for logs and debugging.
    pub fn to_json_token(&self) -> String {
        let entries: Vec<String> = self
            .entries
            .iter()
            .map(|(key, value)| format!("{}: {}", quote(key), value.to_json_token()))
            .collect();
        format!("{{ {} }}", entries.join(", "))
    }
}

impl fmt::Debug for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.entries.iter()).finish()
    }
}

impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_json_token())
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Tree {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl<K: Into<String>, V: Into<Value>> Extend<(K, V)> for Tree {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.entries
            .extend(iter.into_iter().map(|(k, v)| (k.into(), v.into())));
    }
}

impl IntoIterator for Tree {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
