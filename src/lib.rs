//! Self-describing attribute trees.
//!
//! A [`Tree`] is an ordered map from string keys to [`Value`]s: numbers,
//! strings, booleans, byte blobs, arrays of those, [`ItemStack`]s, nested
//! trees, arrays of trees, or collaborator-defined [`Attribute`] kinds. Trees
//! encode to a compact tagged binary format and back, and support deep
//! equality (optionally ignoring paths), subset checks, deep merge and an
//! order-independent structural hash.
//!
//! # Wire format
//!
//! ```text
//! Tree  := Entry* 0x00
//! Entry := tag:u8 key:string payload
//! ```
//!
//! Numbers are little-endian, strings are UTF-8 prefixed with a 7-bit
//! encoded byte length, arrays and blobs carry an `i32` count. See [`Tag`]
//! for the built-in tags; others are resolved through the [`TypeRegistry`].
//!
//! # Example
//!
//! ```
//! use attr_tree::{Error, Tree};
//!
//! let mut player = Tree::new();
//! player.set_string("name", "Ada");
//! player.get_or_add_tree("stats").unwrap().set_int("hp", 20);
//!
//! let bytes = player.to_bytes().unwrap();
//! let mut restored = Tree::from_bytes(&bytes).unwrap();
//! assert!(restored.equals(&player));
//! assert_eq!(restored.structural_hash(&[]), player.structural_hash(&[]));
//!
//! let mut patch = Tree::new();
//! patch.get_or_add_tree("stats").unwrap().set_int("xp", 7);
//! restored.merge(&patch).unwrap();
//! assert!(player.is_subset_of(&restored, &[]));
//!
//! let mut clash = Tree::new();
//! clash.set_int("name", 1);
//! assert!(matches!(restored.merge(&clash), Err(Error::MergeConflict { .. })));
//! ```

mod attribute;
mod compare;
mod config;
mod error;
mod item_stack;
mod merge;
mod read;
pub mod registry;
#[cfg(feature = "serde")]
mod ser;
mod synced;
mod tag;
mod tree;
mod util;
mod value;
mod vector;
mod write;

pub use attribute::*;
pub use compare::*;
pub use config::*;
pub use error::*;
pub use item_stack::*;
pub use read::*;
pub use registry::{Factory, TypeRegistry, register};
pub use synced::*;
pub use tag::*;
pub use tree::*;
pub(crate) use util::*;
pub use value::*;
pub use vector::*;
pub use write::*;
