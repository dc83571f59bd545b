//! Type tag → value factory table.
//!
//! Decoding reads a tag byte, asks the registry for the factory registered
//! under it, builds an empty value and lets that value decode its payload.
//! A process-wide registry seeded with the built-in kinds backs
//! [`Tree::from_bytes`](crate::Tree::from_bytes); collaborators extend it
//! with [`register`] during startup, before decoding data that uses their
//! tags. Registration takes a write lock, so it is safe at any time, but a
//! decode running concurrently sees the table as it was when it started.

use std::sync::LazyLock;

use parking_lot::{RwLock, RwLockReadGuard};

use crate::{Error, ItemStack, Result, Tag, Tree, Value};

/// Builds an empty value of one kind, ready to decode its payload.
pub type Factory = fn() -> Value;

#[derive(Clone)]
pub struct TypeRegistry {
    factories: [Option<Factory>; 256],
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

impl std::fmt::Debug for TypeRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TypeRegistry")
            .field("tags", &self.tags().collect::<Vec<_>>())
            .finish()
    }
}

impl TypeRegistry {
    /// A registry that resolves nothing.
    pub fn empty() -> Self {
        Self {
            factories: [None; 256],
        }
    }

    /// A registry holding the sixteen built-in kinds.
    pub fn with_builtins() -> Self {
        let builtins: [(Tag, Factory); 16] = [
            (Tag::Int, || Value::Int(0)),
            (Tag::Long, || Value::Long(0)),
            (Tag::Double, || Value::Double(0.0)),
            (Tag::Float, || Value::Float(0.0)),
            (Tag::String, || Value::String(String::new())),
            (Tag::Tree, || Value::Tree(Tree::new())),
            (Tag::ItemStack, || Value::ItemStack(None::<Box<ItemStack>>)),
            (Tag::Bytes, || Value::Bytes(Vec::new())),
            (Tag::Bool, || Value::Bool(false)),
            (Tag::StringArray, || Value::StringArray(Vec::new())),
            (Tag::IntArray, || Value::IntArray(Vec::new())),
            (Tag::FloatArray, || Value::FloatArray(Vec::new())),
            (Tag::DoubleArray, || Value::DoubleArray(Vec::new())),
            (Tag::TreeArray, || Value::TreeArray(Vec::new())),
            (Tag::LongArray, || Value::LongArray(Vec::new())),
            (Tag::BoolArray, || Value::BoolArray(Vec::new())),
        ];

        let mut registry = Self::empty();
        for (tag, factory) in builtins {
            registry.factories[tag as usize] = Some(factory);
        }
        registry
    }

    /// Registers `factory` under `tag`, returning the factory it replaced.
    ///
    /// Overwriting an existing tag, built-in ones included, is allowed. Tag
    /// `0` is rejected with [`Error::ReservedTag`], and a factory whose values
    /// report a tag other than `tag` with [`Error::FactoryTagMismatch`],
    /// since such values could never re-encode to what was decoded.
    pub fn register(&mut self, tag: u8, factory: Factory) -> Result<Option<Factory>> {
        if tag == Tag::End as u8 {
            return Err(Error::ReservedTag);
        }
        let produced = factory().type_tag();
        if produced != tag {
            return Err(Error::FactoryTagMismatch { tag, produced });
        }
        let previous = self.factories[tag as usize].replace(factory);
        if previous.is_some() {
            tracing::debug!(tag, "replaced attribute factory");
        } else {
            tracing::debug!(tag, "registered attribute factory");
        }
        Ok(previous)
    }

    /// Looks up the factory for `tag`.
    #[inline]
    pub fn resolve(&self, tag: u8) -> Result<Factory> {
        self.factories[tag as usize].ok_or(Error::UnknownTypeTag(tag))
    }

    #[inline]
    pub fn contains(&self, tag: u8) -> bool {
        self.factories[tag as usize].is_some()
    }

    /// Registered tags in ascending order.
    pub fn tags(&self) -> impl Iterator<Item = u8> + '_ {
        (0..=u8::MAX).filter(|&tag| self.contains(tag))
    }
}

static GLOBAL: LazyLock<RwLock<TypeRegistry>> =
    LazyLock::new(|| RwLock::new(TypeRegistry::with_builtins()));

/// Read access to the process-wide registry.
///
/// Hold the guard only for the duration of a decode; [`register`] blocks
/// while any guard is alive. The lock is taken recursively, so an
/// [`Attribute::decode`](crate::Attribute::decode) may itself call
/// [`Tree::from_bytes`](crate::Tree::from_bytes) on an embedded blob even
/// while a registration is waiting.
pub fn global() -> RwLockReadGuard<'static, TypeRegistry> {
    GLOBAL.read_recursive()
}

/// Registers a factory in the process-wide registry.
///
/// See [`TypeRegistry::register`] for the rules.
pub fn register(tag: u8, factory: Factory) -> Result<Option<Factory>> {
    GLOBAL.write().register(tag, factory)
}
