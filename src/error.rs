//! Error types for attribute tree encoding, decoding and structural operations.
//!
//! This module contains the [`Error`] type which represents every failure a
//! tree operation can report.
//!
//! # Example
//!
//! ```
//! use attr_tree::{Error, Result, Tree};
//!
//! fn try_load(data: &[u8]) -> Result<Tree> {
//!     match Tree::from_bytes(data) {
//!         Err(Error::EndOfFile) => {
//!             println!("Data was truncated");
//!             Err(Error::EndOfFile)
//!         }
//!         Err(Error::UnknownTypeTag(tag)) => {
//!             println!("Unknown type tag: {tag}");
//!             Err(Error::UnknownTypeTag(tag))
//!         }
//!         other => other,
//!     }
//! }
//!
//! assert!(try_load(&[0]).is_ok());
//! ```

use thiserror::Error;

/// Alias for a `Result` with the error type [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors of attribute tree operations.
///
/// Decode errors abort the decode call that produced them; nothing decoded
/// by that call should be trusted. The depth-limit soft stop is not an
/// error and never shows up here.
#[derive(Error, Debug)]
pub enum Error {
    /// Free-form failure reported by a collaborator-defined attribute.
    #[error("{0}")]
    Message(String),

    /// An I/O error occurred while reading from or writing to a stream.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The input ended in the middle of an entry.
    #[error("unexpected end of input")]
    EndOfFile,

    /// Bytes remain after the root tree terminator.
    #[error("trailing data after end of input: {0} bytes remaining")]
    TrailingData(usize),

    /// A type tag with no registered constructor was read.
    #[error("unknown attribute type tag: {0}")]
    UnknownTypeTag(u8),

    /// Tag `0` terminates trees and cannot be assigned to a value kind.
    #[error("type tag 0 is reserved as the tree terminator")]
    ReservedTag,

    /// A registered factory builds values reporting a different tag.
    #[error("factory registered for type tag {tag} produces values with type tag {produced}")]
    FactoryTagMismatch { tag: u8, produced: u8 },

    /// A length or count prefix was negative or does not fit the format.
    #[error("invalid length: {0}")]
    InvalidLength(i64),

    /// A string payload was not valid UTF-8.
    #[error("string is not valid UTF-8")]
    InvalidUtf8(#[from] std::str::Utf8Error),

    /// An item stack carried an unknown collectible class.
    #[error("invalid item class: {0}")]
    InvalidItemClass(i32),

    /// The value stored at `key` is not of the kind the operation requires.
    #[error("attribute '{key}' has type tag {actual}, expected type tag {expected}")]
    TypeMismatch { key: String, expected: u8, actual: u8 },

    /// A merge found the same key holding different kinds on both sides.
    #[error("cannot merge attribute '{key}': expected type tag {expected}, got type tag {actual}")]
    MergeConflict { key: String, expected: u8, actual: u8 },
}

impl Error {
    /// Builds a [`Error::Message`] from anything printable.
    pub fn custom(msg: impl std::fmt::Display) -> Self {
        Error::Message(msg.to_string())
    }
}
