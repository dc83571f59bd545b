use crate::{
    Error, Reader, Result, Tree, Writer,
    util::{hash_of, quote},
};

/// Which registry an item stack's collectible id refers to.
#[repr(i32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum ItemClass {
    #[default]
    Block = 0,
    Item = 1,
}

impl ItemClass {
    pub fn from_i32(value: i32) -> Result<Self> {
        match value {
            0 => Ok(ItemClass::Block),
            1 => Ok(ItemClass::Item),
            other => Err(Error::InvalidItemClass(other)),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            ItemClass::Block => "block",
            ItemClass::Item => "item",
        }
    }
}

/// A stack of one collectible, carried by value inside a tree.
///
/// The stack owns its attribute tree outright; nothing in it refers back to
/// world state, so it clones and compares like any other value.
#[derive(Clone, Debug, Default)]
pub struct ItemStack {
    pub class: ItemClass,
    pub id: i32,
    pub stack_size: i32,
    pub attributes: Tree,
}

impl ItemStack {
    pub fn new(class: ItemClass, id: i32, stack_size: i32) -> Self {
        Self {
            class,
            id,
            stack_size,
            attributes: Tree::new(),
        }
    }

    pub fn with_attributes(mut self, attributes: Tree) -> Self {
        self.attributes = attributes;
        self
    }

    pub fn encode(&self, writer: &mut Writer) -> Result<()> {
        writer.write_i32(self.class as i32);
        writer.write_i32(self.id);
        writer.write_i32(self.stack_size);
        self.attributes.encode_into(writer)
    }

    /// Reads a non-null stack; the attribute tree is one level deeper.
    pub fn decode_from(reader: &mut Reader<'_>) -> Result<Self> {
        let class = ItemClass::from_i32(reader.read_i32()?)?;
        let id = reader.read_i32()?;
        let stack_size = reader.read_i32()?;
        let attributes = reader.nested(Tree::decode_from)?;
        Ok(Self {
            class,
            id,
            stack_size,
            attributes,
        })
    }

    pub fn equals(&self, other: &ItemStack) -> bool {
        self.equals_ignoring(other, &[])
    }

    /// Same collectible, same size, attributes equal apart from `ignore_paths`.
    pub fn equals_ignoring(&self, other: &ItemStack, ignore_paths: &[&str]) -> bool {
        self.equals_at(other, "", ignore_paths)
    }

    pub(crate) fn equals_at(&self, other: &ItemStack, path: &str, ignore_paths: &[&str]) -> bool {
        self.class == other.class
            && self.id == other.id
            && self.stack_size == other.stack_size
            && self.attributes.equals_at(&other.attributes, path, ignore_paths)
    }

    /// Hash consistent with [`equals`](ItemStack::equals); attribute keys in
    /// `ignored_keys` are left out at every level.
    pub fn structural_hash(&self, ignored_keys: &[&str]) -> u64 {
        hash_of(&(
            self.class,
            self.id,
            self.stack_size,
            self.attributes.structural_hash(ignored_keys),
        ))
    }

    pub fn to_json_token(&self) -> String {
        format!(
            "{{ \"class\": {}, \"id\": {}, \"stacksize\": {}, \"attributes\": {} }}",
            quote(self.class.as_str()),
            self.id,
            self.stack_size,
            self.attributes.to_json_token()
        )
    }
}

impl PartialEq for ItemStack {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}
