//! Structural comparison and hashing of trees.

use std::hash::{Hash, Hasher};

use crate::{
    Tree, Value,
    util::{hash_of, join_path},
};

/// Bookkeeping keys item stacks pick up while in use; they say nothing about
/// what the stack is and are usually skipped by [`Tree::is_subset_of`].
pub const TRANSIENT_KEYS: &[&str] = &[
    "temperature",
    "toolMode",
    "renderVariant",
    "transitionstate",
];

impl Tree {
    /// Exact structural equality: same keys, equal values, any order.
    #[inline]
    pub fn equals(&self, other: &Tree) -> bool {
        self.equals_at(other, "", &[])
    }

    /// Structural equality that skips the given paths.
    ///
    /// Paths are keys joined with `/` from this tree, e.g. `"stats/hp"`,
    /// matched verbatim. Nested trees and item stack attributes extend the
    /// path with their key.
    ///
    /// When `ignore_paths` is non-empty the up-front entry count comparison is
    /// skipped at every level; every non-ignored key is still required on
    /// both sides.
    pub fn equals_ignoring(&self, other: &Tree, ignore_paths: &[&str]) -> bool {
        self.equals_at(other, "", ignore_paths)
    }

    pub(crate) fn equals_at(&self, other: &Tree, path: &str, ignore_paths: &[&str]) -> bool {
        if ignore_paths.is_empty() && self.len() != other.len() {
            return false;
        }

        let tracked_path = |key: &str| -> Option<String> {
            let key_path = join_path(path, key);
            (!ignore_paths.contains(&key_path.as_str())).then_some(key_path)
        };

        for (key, value) in &self.entries {
            let Some(key_path) = tracked_path(key) else {
                continue;
            };
            let Some(other_value) = other.entries.get(key) else {
                return false;
            };
            let equal = match (value, other_value) {
                (Value::Tree(a), Value::Tree(b)) => a.equals_at(b, &key_path, ignore_paths),
                (Value::ItemStack(Some(a)), Value::ItemStack(Some(b))) => {
                    a.equals_at(b, &key_path, ignore_paths)
                }
                _ => value.equals(other_value),
            };
            if !equal {
                return false;
            }
        }

        other
            .entries
            .keys()
            .all(|key| tracked_path(key).is_none() || self.entries.contains_key(key))
    }

    /// `true` if every entry of this tree, apart from `ignored_keys`, is also
    /// in `other` with an equal value. Nested trees must in turn be subsets;
    /// `other` may hold extra entries.
    ///
    /// `ignored_keys` apply by bare key name at every level; pass
    /// [`TRANSIENT_KEYS`] for the usual item stack bookkeeping.
    pub fn is_subset_of(&self, other: &Tree, ignored_keys: &[&str]) -> bool {
        self.entries.iter().all(|(key, value)| {
            if ignored_keys.contains(&key.as_str()) {
                return true;
            }
            match (value, other.entries.get(key)) {
                (_, None) => false,
                (Value::Tree(mine), Some(Value::Tree(theirs))) => {
                    mine.is_subset_of(theirs, ignored_keys)
                }
                (mine, Some(theirs)) => mine.equals(theirs),
            }
        })
    }

    /// Order-independent hash: the XOR of `hash(key) ^ hash(value)` over all
    /// entries whose key is not in `ignored_keys`. Nested trees and item stack
    /// attributes hash with the same ignore set.
    pub fn structural_hash(&self, ignored_keys: &[&str]) -> u64 {
        self.entries
            .iter()
            .filter(|(key, _)| !ignored_keys.contains(&key.as_str()))
            .fold(0, |acc, (key, value)| {
                let value_hash = match value {
                    Value::Tree(tree) => tree.structural_hash(ignored_keys),
                    Value::ItemStack(Some(stack)) => stack.structural_hash(ignored_keys),
                    other => other.structural_hash(),
                };
                acc ^ hash_of(key.as_str()) ^ value_hash
            })
    }
}

impl PartialEq for Tree {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl Hash for Tree {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.structural_hash(&[]));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Tree {
        let mut tree = Tree::new();
        tree.set_int("a", 1);
        tree.set_string("b", "two");
        let child = tree.get_or_add_tree("c").unwrap();
        child.set_double("d", 4.0);
        child.set_bool("e", true);
        tree
    }

    #[test]
    fn test_equals_ignores_order() {
        let a = sample();
        let mut b = Tree::new();
        let child = b.get_or_add_tree("c").unwrap();
        child.set_bool("e", true);
        child.set_double("d", 4.0);
        b.set_string("b", "two");
        b.set_int("a", 1);

        assert!(a.equals(&b));
        assert_eq!(a.structural_hash(&[]), b.structural_hash(&[]));
    }

    #[test]
    fn test_equals_nested_difference() {
        let a = sample();
        let mut b = sample();
        b.get_tree_mut("c").unwrap().set_double("d", 5.0);
        assert!(!a.equals(&b));
        assert!(a.equals_ignoring(&b, &["c/d"]));
        assert!(!a.equals_ignoring(&b, &["d"]));
    }

    #[test]
    fn test_subset_recurses() {
        let small = sample();
        let mut big = sample();
        big.get_tree_mut("c").unwrap().set_int("extra", 0);
        assert!(small.is_subset_of(&big, &[]));
        assert!(!big.is_subset_of(&small, &[]));
    }

    #[test]
    fn test_hash_ignores_keys_at_every_level() {
        let a = sample();
        let mut b = sample();
        b.get_tree_mut("c").unwrap().set_int("temperature", 900);
        assert_ne!(a.structural_hash(&[]), b.structural_hash(&[]));
        assert_eq!(
            a.structural_hash(&["temperature"]),
            b.structural_hash(&["temperature"])
        );
    }
}
