//! Deep merge of one tree into another.

use indexmap::map::Entry;

use crate::{Error, Result, Tree, Value, util::join_path};

impl Tree {
    /// Merges `other` into `self`, overwriting existing values.
    ///
    /// Keys missing here are copied over, trees on both sides merge
    /// recursively, and any other value of the same kind is replaced. A key
    /// holding different kinds on the two sides is a
    /// [`Error::MergeConflict`] naming the `/`-joined path, the existing tag
    /// (`expected`) and the incoming one (`actual`). Conflicts are found
    /// before anything is written, so a failed merge leaves `self` as it was.
    pub fn merge(&mut self, other: &Tree) -> Result<()> {
        self.check_merge(other, "")?;
        self.apply_merge(other);
        Ok(())
    }

    /// Like [`merge`](Tree::merge), moving values out of `other` instead of
    /// cloning them.
    pub fn merge_owned(&mut self, other: Tree) -> Result<()> {
        self.check_merge(&other, "")?;
        self.apply_merge_owned(other);
        Ok(())
    }

    fn check_merge(&self, other: &Tree, path: &str) -> Result<()> {
        for (key, incoming) in &other.entries {
            let Some(existing) = self.entries.get(key) else {
                continue;
            };
            match (existing, incoming) {
                (Value::Tree(existing), Value::Tree(incoming)) => {
                    existing.check_merge(incoming, &join_path(path, key))?;
                }
                (existing, incoming) if existing.type_tag() != incoming.type_tag() => {
                    return Err(Error::MergeConflict {
                        key: join_path(path, key),
                        expected: existing.type_tag(),
                        actual: incoming.type_tag(),
                    });
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn apply_merge(&mut self, other: &Tree) {
        for (key, incoming) in &other.entries {
            match self.entries.entry(key.clone()) {
                Entry::Occupied(mut slot) => match (slot.get_mut(), incoming) {
                    (Value::Tree(existing), Value::Tree(incoming)) => existing.apply_merge(incoming),
                    (existing, incoming) => *existing = incoming.clone(),
                },
                Entry::Vacant(slot) => {
                    slot.insert(incoming.clone());
                }
            }
        }
    }

    fn apply_merge_owned(&mut self, other: Tree) {
        for (key, incoming) in other.entries {
            match self.entries.entry(key) {
                Entry::Occupied(mut slot) => match (slot.get_mut(), incoming) {
                    (Value::Tree(existing), Value::Tree(incoming)) => {
                        existing.apply_merge_owned(incoming)
                    }
                    (existing, incoming) => *existing = incoming,
                },
                Entry::Vacant(slot) => {
                    slot.insert(incoming);
                }
            }
        }
    }
}
