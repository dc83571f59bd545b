use std::sync::Arc;

use parking_lot::Mutex;

use crate::{Result, Tree, Value};

/// A tree shared between threads behind one coarse lock.
///
/// Every method takes the lock once, so each call sees and leaves a
/// consistent tree, but nothing is atomic across calls. Use
/// [`read`](SyncedTree::read) or [`write`](SyncedTree::write) to run several
/// operations under a single acquisition. Cloning a `SyncedTree` shares the
/// same tree; use [`snapshot`](SyncedTree::snapshot) for an independent copy.
#[derive(Clone, Debug, Default)]
pub struct SyncedTree {
    inner: Arc<Mutex<Tree>>,
}

impl SyncedTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_tree(tree: Tree) -> Self {
        Self {
            inner: Arc::new(Mutex::new(tree)),
        }
    }

    pub fn set(&self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.inner.lock().set(key, value)
    }

    pub fn remove(&self, key: &str) -> Option<Value> {
        self.inner.lock().remove(key)
    }

    /// Clone of the value at `key`.
    pub fn get(&self, key: &str) -> Option<Value> {
        self.inner.lock().get(key).cloned()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    pub fn merge(&self, other: &Tree) -> Result<()> {
        self.inner.lock().merge(other)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        self.inner.lock().to_bytes()
    }

    /// Independent deep copy of the current contents.
    pub fn snapshot(&self) -> Tree {
        self.inner.lock().clone()
    }

    pub fn read<R>(&self, f: impl FnOnce(&Tree) -> R) -> R {
        f(&self.inner.lock())
    }

    pub fn write<R>(&self, f: impl FnOnce(&mut Tree) -> R) -> R {
        f(&mut self.inner.lock())
    }

    /// Swaps in a freshly decoded tree, e.g. from a network update.
    pub fn replace(&self, tree: Tree) -> Tree {
        std::mem::replace(&mut *self.inner.lock(), tree)
    }
}

impl From<Tree> for SyncedTree {
    fn from(tree: Tree) -> Self {
        Self::from_tree(tree)
    }
}
