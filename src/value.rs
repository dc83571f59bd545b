use std::any::Any;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::{
    Attribute, ItemStack, Reader, Result, Tag, Tree, Writer,
    util::{f32_bits, f64_bits, hash_of, quote},
};

/// A single attribute: one leaf or composite value stored at a tree key.
///
/// The variant fixes the wire tag, so a value never changes kind after it is
/// built; setters on [`Tree`] replace the whole value instead.
#[derive(Debug, Clone)]
pub enum Value {
    Int(i32),
    Long(i64),
    Double(f64),
    Float(f32),
    String(String),
    Tree(Tree),
    /// `None` encodes a null stack slot.
    ItemStack(Option<Box<ItemStack>>),
    Bytes(Vec<u8>),
    Bool(bool),
    StringArray(Vec<String>),
    IntArray(Vec<i32>),
    FloatArray(Vec<f32>),
    DoubleArray(Vec<f64>),
    TreeArray(Vec<Tree>),
    LongArray(Vec<i64>),
    BoolArray(Vec<bool>),
    Custom(Box<dyn Attribute>),
}

macro_rules! copy_accessors {
    ($($name:ident, $variant:ident, $ty:ty;)*) => {
        $(
            #[inline]
            pub fn $name(&self) -> Option<$ty> {
                match self {
                    Value::$variant(value) => Some(*value),
                    _ => None,
                }
            }
        )*
    };
}

macro_rules! ref_accessors {
    ($($name:ident, $variant:ident, $ty:ty;)*) => {
        $(
            #[inline]
            pub fn $name(&self) -> Option<&$ty> {
                match self {
                    Value::$variant(value) => Some(value),
                    _ => None,
                }
            }
        )*
    };
}

fn join_tokens<T>(items: &[T], token: impl Fn(&T) -> String) -> String {
    let parts: Vec<String> = items.iter().map(token).collect();
    format!("[{}]", parts.join(", "))
}

impl Value {
    /// Wire tag of this value.
    pub fn type_tag(&self) -> u8 {
        match self {
            Value::Int(_) => Tag::Int as u8,
            Value::Long(_) => Tag::Long as u8,
            Value::Double(_) => Tag::Double as u8,
            Value::Float(_) => Tag::Float as u8,
            Value::String(_) => Tag::String as u8,
            Value::Tree(_) => Tag::Tree as u8,
            Value::ItemStack(_) => Tag::ItemStack as u8,
            Value::Bytes(_) => Tag::Bytes as u8,
            Value::Bool(_) => Tag::Bool as u8,
            Value::StringArray(_) => Tag::StringArray as u8,
            Value::IntArray(_) => Tag::IntArray as u8,
            Value::FloatArray(_) => Tag::FloatArray as u8,
            Value::DoubleArray(_) => Tag::DoubleArray as u8,
            Value::TreeArray(_) => Tag::TreeArray as u8,
            Value::LongArray(_) => Tag::LongArray as u8,
            Value::BoolArray(_) => Tag::BoolArray as u8,
            Value::Custom(attribute) => attribute.type_tag(),
        }
    }

    /// Built-in [`Tag`] of this value, `None` for custom kinds.
    #[inline]
    pub fn tag(&self) -> Option<Tag> {
        match self {
            Value::Custom(_) => None,
            other => Tag::from_u8(other.type_tag()),
        }
    }

    #[inline]
    pub fn is_tree(&self) -> bool {
        matches!(self, Value::Tree(_))
    }

    copy_accessors! {
        as_int, Int, i32;
        as_long, Long, i64;
        as_double, Double, f64;
        as_float, Float, f32;
        as_bool, Bool, bool;
    }

    ref_accessors! {
        as_tree, Tree, Tree;
        as_bytes, Bytes, [u8];
        as_string_array, StringArray, [String];
        as_int_array, IntArray, [i32];
        as_float_array, FloatArray, [f32];
        as_double_array, DoubleArray, [f64];
        as_tree_array, TreeArray, [Tree];
        as_long_array, LongArray, [i64];
        as_bool_array, BoolArray, [bool];
    }

    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(value) => Some(value),
            _ => None,
        }
    }

    #[inline]
    pub fn as_tree_mut(&mut self) -> Option<&mut Tree> {
        match self {
            Value::Tree(tree) => Some(tree),
            _ => None,
        }
    }

    #[inline]
    pub fn as_item_stack(&self) -> Option<&ItemStack> {
        match self {
            Value::ItemStack(Some(stack)) => Some(stack),
            _ => None,
        }
    }

    #[inline]
    pub fn as_custom(&self) -> Option<&dyn Attribute> {
        match self {
            Value::Custom(attribute) => Some(attribute.as_ref()),
            _ => None,
        }
    }

    /// Widens any numeric kind to `f64`.
    pub fn as_decimal(&self) -> Option<f64> {
        match *self {
            Value::Int(v) => Some(v as f64),
            Value::Long(v) => Some(v as f64),
            Value::Float(v) => Some(v as f64),
            Value::Double(v) => Some(v),
            _ => None,
        }
    }

    /// The payload as an opaque reference; downcast to the payload type
    /// (`i32`, `String`, `Vec<f32>`, `Tree`, …) or to the custom attribute.
    pub fn raw_value(&self) -> &dyn Any {
        match self {
            Value::Int(v) => v,
            Value::Long(v) => v,
            Value::Double(v) => v,
            Value::Float(v) => v,
            Value::String(v) => v,
            Value::Tree(v) => v,
            Value::ItemStack(v) => v,
            Value::Bytes(v) => v,
            Value::Bool(v) => v,
            Value::StringArray(v) => v,
            Value::IntArray(v) => v,
            Value::FloatArray(v) => v,
            Value::DoubleArray(v) => v,
            Value::TreeArray(v) => v,
            Value::LongArray(v) => v,
            Value::BoolArray(v) => v,
            Value::Custom(attribute) => {
                let attribute: &dyn Attribute = attribute.as_ref();
                attribute as &dyn Any
            }
        }
    }

    /// Writes the payload only; the tag and key belong to the enclosing tree.
    pub fn encode_payload(&self, writer: &mut Writer) -> Result<()> {
        match self {
            Value::Int(v) => writer.write_i32(*v),
            Value::Long(v) => writer.write_i64(*v),
            Value::Double(v) => writer.write_f64(*v),
            Value::Float(v) => writer.write_f32(*v),
            Value::String(v) => writer.write_string(v)?,
            Value::Tree(tree) => tree.encode_into(writer)?,
            Value::ItemStack(stack) => {
                writer.write_bool(stack.is_none());
                if let Some(stack) = stack {
                    stack.encode(writer)?;
                }
            }
            Value::Bytes(bytes) => {
                writer.write_len(bytes.len())?;
                writer.write_bytes(bytes);
            }
            Value::Bool(v) => writer.write_bool(*v),
            Value::StringArray(values) => {
                writer.write_len(values.len())?;
                for value in values {
                    writer.write_string(value)?;
                }
            }
            Value::IntArray(values) => {
                writer.write_len(values.len())?;
                values.iter().for_each(|v| writer.write_i32(*v));
            }
            Value::FloatArray(values) => {
                writer.write_len(values.len())?;
                values.iter().for_each(|v| writer.write_f32(*v));
            }
            Value::DoubleArray(values) => {
                writer.write_len(values.len())?;
                values.iter().for_each(|v| writer.write_f64(*v));
            }
            Value::TreeArray(trees) => {
                writer.write_len(trees.len())?;
                for tree in trees {
                    tree.encode_into(writer)?;
                }
            }
            Value::LongArray(values) => {
                writer.write_len(values.len())?;
                values.iter().for_each(|v| writer.write_i64(*v));
            }
            Value::BoolArray(values) => {
                writer.write_len(values.len())?;
                values.iter().for_each(|v| writer.write_bool(*v));
            }
            Value::Custom(attribute) => attribute.encode(writer)?,
        }
        Ok(())
    }

    /// Replaces the payload with one read from `reader`, keeping the kind.
    pub fn decode_payload(&mut self, reader: &mut Reader<'_>) -> Result<()> {
        match self {
            Value::Int(v) => *v = reader.read_i32()?,
            Value::Long(v) => *v = reader.read_i64()?,
            Value::Double(v) => *v = reader.read_f64()?,
            Value::Float(v) => *v = reader.read_f32()?,
            Value::String(v) => *v = reader.read_string()?,
            Value::Tree(tree) => *tree = reader.nested(Tree::decode_from)?,
            Value::ItemStack(stack) => {
                *stack = if reader.read_bool()? {
                    None
                } else {
                    Some(Box::new(ItemStack::decode_from(reader)?))
                };
            }
            Value::Bytes(bytes) => {
                let len = reader.read_count(1)?;
                *bytes = reader.take(len)?.to_vec();
            }
            Value::Bool(v) => *v = reader.read_bool()?,
            Value::StringArray(values) => {
                let len = reader.read_count(1)?;
                *values = (0..len)
                    .map(|_| reader.read_string())
                    .collect::<Result<_>>()?;
            }
            Value::IntArray(values) => {
                let len = reader.read_count(4)?;
                *values = (0..len).map(|_| reader.read_i32()).collect::<Result<_>>()?;
            }
            Value::FloatArray(values) => {
                let len = reader.read_count(4)?;
                *values = (0..len).map(|_| reader.read_f32()).collect::<Result<_>>()?;
            }
            Value::DoubleArray(values) => {
                let len = reader.read_count(8)?;
                *values = (0..len).map(|_| reader.read_f64()).collect::<Result<_>>()?;
            }
            Value::TreeArray(trees) => {
                let len = reader.read_count(1)?;
                *trees = (0..len)
                    .map(|_| reader.nested(Tree::decode_from))
                    .collect::<Result<_>>()?;
            }
            Value::LongArray(values) => {
                let len = reader.read_count(8)?;
                *values = (0..len).map(|_| reader.read_i64()).collect::<Result<_>>()?;
            }
            Value::BoolArray(values) => {
                let len = reader.read_count(1)?;
                *values = (0..len).map(|_| reader.read_bool()).collect::<Result<_>>()?;
            }
            Value::Custom(attribute) => attribute.decode(reader)?,
        }
        Ok(())
    }

    /// Resolves `tag` in the reader's registry and decodes one payload.
    pub fn decode(tag: u8, reader: &mut Reader<'_>) -> Result<Value> {
        let factory = reader.registry().resolve(tag)?;
        let mut value = factory();
        value.decode_payload(reader)?;
        Ok(value)
    }

    /// Exact structural equality; trees recurse.
    ///
    /// Floats compare by bit pattern with `-0.0` and `0.0` treated as one
    /// value, so every value, `NaN` payloads included, equals itself and
    /// equal values hash alike.
    pub fn equals(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Long(a), Value::Long(b)) => a == b,
            (Value::Double(a), Value::Double(b)) => f64_bits(*a) == f64_bits(*b),
            (Value::Float(a), Value::Float(b)) => f32_bits(*a) == f32_bits(*b),
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Tree(a), Value::Tree(b)) => a.equals(b),
            (Value::ItemStack(a), Value::ItemStack(b)) => match (a, b) {
                (None, None) => true,
                (Some(a), Some(b)) => a.equals(b),
                _ => false,
            },
            (Value::Bytes(a), Value::Bytes(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::StringArray(a), Value::StringArray(b)) => a == b,
            (Value::IntArray(a), Value::IntArray(b)) => a == b,
            (Value::FloatArray(a), Value::FloatArray(b)) => {
                a.len() == b.len() && a.iter().zip(b).all(|(a, b)| f32_bits(*a) == f32_bits(*b))
            }
            (Value::DoubleArray(a), Value::DoubleArray(b)) => {
                a.len() == b.len() && a.iter().zip(b).all(|(a, b)| f64_bits(*a) == f64_bits(*b))
            }
            (Value::TreeArray(a), Value::TreeArray(b)) => {
                a.len() == b.len() && a.iter().zip(b).all(|(a, b)| a.equals(b))
            }
            (Value::LongArray(a), Value::LongArray(b)) => a == b,
            (Value::BoolArray(a), Value::BoolArray(b)) => a == b,
            (Value::Custom(a), Value::Custom(b)) => {
                a.type_tag() == b.type_tag() && a.equals(b.as_ref())
            }
            _ => false,
        }
    }

    /// Hash consistent with [`equals`](Value::equals).
    pub fn structural_hash(&self) -> u64 {
        let tag = self.type_tag();
        match self {
            Value::Int(v) => hash_of(&(tag, v)),
            Value::Long(v) => hash_of(&(tag, v)),
            Value::Double(v) => hash_of(&(tag, f64_bits(*v))),
            Value::Float(v) => hash_of(&(tag, f32_bits(*v))),
            Value::String(v) => hash_of(&(tag, v)),
            Value::Tree(tree) => tree.structural_hash(&[]),
            Value::ItemStack(stack) => match stack {
                None => hash_of(&(tag, 0u8)),
                Some(stack) => stack.structural_hash(&[]),
            },
            Value::Bytes(v) => hash_of(&(tag, v)),
            Value::Bool(v) => hash_of(&(tag, v)),
            Value::StringArray(v) => hash_of(&(tag, v)),
            Value::IntArray(v) => hash_of(&(tag, v)),
            Value::FloatArray(v) => {
                hash_of(&(tag, v.iter().map(|f| f32_bits(*f)).collect::<Vec<_>>()))
            }
            Value::DoubleArray(v) => {
                hash_of(&(tag, v.iter().map(|f| f64_bits(*f)).collect::<Vec<_>>()))
            }
            Value::TreeArray(trees) => hash_of(&(
                tag,
                trees
                    .iter()
                    .map(|tree| tree.structural_hash(&[]))
                    .collect::<Vec<_>>(),
            )),
            Value::LongArray(v) => hash_of(&(tag, v)),
            Value::BoolArray(v) => hash_of(&(tag, v)),
            Value::Custom(attribute) => attribute.structural_hash(),
        }
    }

    /// JSON-like rendering for logs and debugging; not meant to be parsed back.
    pub fn to_json_token(&self) -> String {
        match self {
            Value::Int(v) => v.to_string(),
            Value::Long(v) => v.to_string(),
            Value::Double(v) => v.to_string(),
            Value::Float(v) => v.to_string(),
            Value::String(v) => quote(v),
            Value::Tree(tree) => tree.to_json_token(),
            Value::ItemStack(None) => "null".to_owned(),
            Value::ItemStack(Some(stack)) => stack.to_json_token(),
            Value::Bytes(v) => join_tokens(v, u8::to_string),
            Value::Bool(v) => v.to_string(),
            Value::StringArray(v) => join_tokens(v, |s| quote(s)),
            Value::IntArray(v) => join_tokens(v, i32::to_string),
            Value::FloatArray(v) => join_tokens(v, f32::to_string),
            Value::DoubleArray(v) => join_tokens(v, f64::to_string),
            Value::TreeArray(v) => join_tokens(v, Tree::to_json_token),
            Value::LongArray(v) => join_tokens(v, i64::to_string),
            Value::BoolArray(v) => join_tokens(v, bool::to_string),
            Value::Custom(attribute) => attribute.to_json_token(),
        }
    }
}

impl PartialEq for Value {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.structural_hash());
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_json_token())
    }
}

macro_rules! impl_from {
    ($($ty:ty => $variant:ident;)*) => {
        $(
            impl From<$ty> for Value {
                #[inline]
                fn from(value: $ty) -> Self {
                    Value::$variant(value)
                }
            }
        )*
    };
}

impl_from! {
    i32 => Int;
    i64 => Long;
    f64 => Double;
    f32 => Float;
    String => String;
    Tree => Tree;
    Vec<u8> => Bytes;
    bool => Bool;
    Vec<String> => StringArray;
    Vec<i32> => IntArray;
    Vec<f32> => FloatArray;
    Vec<f64> => DoubleArray;
    Vec<Tree> => TreeArray;
    Vec<i64> => LongArray;
    Vec<bool> => BoolArray;
    Box<dyn Attribute> => Custom;
}

impl From<&str> for Value {
    #[inline]
    fn from(value: &str) -> Self {
        Value::String(value.to_owned())
    }
}

impl From<&[u8]> for Value {
    #[inline]
    fn from(value: &[u8]) -> Self {
        Value::Bytes(value.to_vec())
    }
}

impl From<ItemStack> for Value {
    #[inline]
    fn from(stack: ItemStack) -> Self {
        Value::ItemStack(Some(Box::new(stack)))
    }
}
