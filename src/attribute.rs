use std::any::Any;
use std::fmt;

use crate::{Reader, Result, Writer};

/// A collaborator-defined value kind.
///
/// Implementors are stored as [`Value::Custom`](crate::Value::Custom) and
/// travel through the same wire format as the built-in kinds: the tree
/// writes [`type_tag`](Attribute::type_tag), the key, then whatever
/// [`encode`](Attribute::encode) emits. Decoding needs a factory for the tag
/// in the registry that was used; it builds an empty instance and calls
/// [`decode`](Attribute::decode) on it.
///
/// # Example
///
/// ```
/// use attr_tree::{Attribute, Reader, Result, TypeRegistry, Tree, Value, Writer};
///
/// #[derive(Debug, Clone, Default, PartialEq)]
/// struct Color(u8, u8, u8);
///
/// impl Attribute for Color {
///     fn type_tag(&self) -> u8 { 40 }
///     fn encode(&self, writer: &mut Writer) -> Result<()> {
///         writer.write_bytes(&[self.0, self.1, self.2]);
///         Ok(())
///     }
///     fn decode(&mut self, reader: &mut Reader<'_>) -> Result<()> {
///         let [r, g, b] = reader.read_array::<3>()?;
///         *self = Color(r, g, b);
///         Ok(())
///     }
///     fn equals(&self, other: &dyn Attribute) -> bool {
///         other.downcast_ref::<Color>() == Some(self)
///     }
///     fn to_json_token(&self) -> String {
///         format!("\"#{:02x}{:02x}{:02x}\"", self.0, self.1, self.2)
///     }
///     fn structural_hash(&self) -> u64 {
///         u64::from_le_bytes([self.0, self.1, self.2, 0, 0, 0, 0, 0])
///     }
///     fn clone_box(&self) -> Box<dyn Attribute> { Box::new(self.clone()) }
/// }
///
/// let mut registry = TypeRegistry::with_builtins();
/// registry.register(40, || Value::Custom(Box::new(Color::default()))).unwrap();
///
/// let mut tree = Tree::new();
/// tree.set("tint", Value::Custom(Box::new(Color(255, 128, 0))));
/// let bytes = tree.to_bytes().unwrap();
///
/// let mut reader = Reader::new(&bytes, &registry);
/// let decoded = Tree::decode_from(&mut reader).unwrap();
/// assert!(decoded.equals(&tree));
/// ```
pub trait Attribute: Any + Send + Sync + fmt::Debug {
    /// Wire tag; must be stable for the lifetime of the value and must not be `0`.
    fn type_tag(&self) -> u8;

    fn encode(&self, writer: &mut Writer) -> Result<()>;

    /// Fills `self` from the reader; `self` is a fresh factory-built instance.
    fn decode(&mut self, reader: &mut Reader<'_>) -> Result<()>;

    fn equals(&self, other: &dyn Attribute) -> bool;

    fn to_json_token(&self) -> String;

    /// Must agree with [`equals`](Attribute::equals): equal values hash equal.
    fn structural_hash(&self) -> u64;

    fn clone_box(&self) -> Box<dyn Attribute>;
}

impl dyn Attribute {
    #[inline]
    pub fn is<T: Attribute>(&self) -> bool {
        (self as &dyn Any).is::<T>()
    }

    #[inline]
    pub fn downcast_ref<T: Attribute>(&self) -> Option<&T> {
        (self as &dyn Any).downcast_ref::<T>()
    }

    #[inline]
    pub fn downcast_mut<T: Attribute>(&mut self) -> Option<&mut T> {
        (self as &mut dyn Any).downcast_mut::<T>()
    }
}

impl Clone for Box<dyn Attribute> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}
