use crate::arena::Handle;
use crate::bst::{BaseTree, Bounds, Search};
use crate::entry::Entry;
use crate::error::InvariantError;
use crate::splay_tree::rotate::{rotate, rotate_up, Direction};
use std::borrow::Borrow;

/// Result of `SplayTree::find_approx`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Approx {
    /// The node holding the key, if present. When set, both bounds are `None`.
    pub exact: Option<Handle>,
    /// The node with the greatest key below the searched key.
    pub lower: Option<Handle>,
    /// The node with the smallest key above the searched key.
    pub upper: Option<Handle>,
}

/// A bottom-up splay tree.
///
/// Searching, inserting and removing are delegated to an unbalanced `BaseTree`; afterwards the
/// node the base tree touched is splayed to the root. Nodes are addressed by `Handle`s, which stay
/// valid while their node is in the tree no matter how often it is rotated. A handle only names a
/// node of the tree that issued it.
///
/// # Examples
///
/// ```
/// use splay_collections::splay_tree::SplayTree;
///
/// let mut tree = SplayTree::new();
/// for key in &[10, 5, 15, 3, 7] {
///     tree.insert(*key, ());
/// }
///
/// let three = tree.find(&3).unwrap();
/// assert_eq!(tree.root(), Some(three));
///
/// let approx = tree.find_approx(&12);
/// assert_eq!(approx.exact, None);
/// assert_eq!(tree.key(approx.upper.unwrap()), Some(&15));
/// assert_eq!(tree.root(), approx.upper);
/// ```
pub struct SplayTree<K, V> {
    tree: BaseTree<K, V>,
}

impl<K, V> SplayTree<K, V> {
    /// Constructs a new, empty `SplayTree<K, V>`.
    pub fn new() -> Self {
        SplayTree {
            tree: BaseTree::new(),
        }
    }

    /// Constructs a new, empty `SplayTree<K, V>` whose arena allocates `chunk_size` nodes at a
    /// time.
    pub fn with_chunk_size(chunk_size: usize) -> Self {
        SplayTree {
            tree: BaseTree::with_chunk_size(chunk_size),
        }
    }

    /// Read-only access to the underlying tree, for walking links without splaying.
    pub fn base(&self) -> &BaseTree<K, V> {
        &self.tree
    }

    pub fn len(&self) -> usize {
        self.tree.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    pub fn clear(&mut self) {
        self.tree.clear();
    }

    pub fn root(&self) -> Option<Handle> {
        self.tree.root()
    }

    pub fn entry(&self, node: Handle) -> Option<&Entry<K, V>> {
        self.tree.entry(node)
    }

    pub fn key(&self, node: Handle) -> Option<&K> {
        self.tree.key(node)
    }

    pub fn value(&self, node: Handle) -> Option<&V> {
        self.tree.value(node)
    }

    pub fn value_mut(&mut self, node: Handle) -> Option<&mut V> {
        self.tree.value_mut(node)
    }

    pub fn left(&self, node: Handle) -> Option<Handle> {
        self.tree.left(node)
    }

    pub fn right(&self, node: Handle) -> Option<Handle> {
        self.tree.right(node)
    }

    pub fn parent(&self, node: Handle) -> Option<Handle> {
        self.tree.parent(node)
    }

    pub fn height(&self) -> usize {
        self.tree.height()
    }

    pub fn traverse(&self) -> Vec<(&K, &V)> {
        self.tree.traverse()
    }

    /// Rotates `node` up until it is the root. Does nothing if `node` already is the root or is
    /// no longer in the tree.
    ///
    /// Handles are only meaningful for the tree that issued them. A handle from another tree is
    /// not detected and may name an unrelated node of this one.
    pub fn splay(&mut self, node: Handle) {
        if !self.tree.contains(node) {
            return;
        }

        let mut steps = 0;
        while let Some(parent) = self.tree.parent(node) {
            steps += 1;
            match self.tree.parent(parent) {
                Some(grandparent) => rotate_up(&mut self.tree, node, parent, grandparent),
                None => {
                    let direction =
                        Direction::of(&self.tree, node).expect("Expected node to have a parent.");
                    rotate(&mut self.tree, direction, node, parent);
                    break;
                },
            }
        }

        if steps > 0 {
            trace!("splayed {:?} to the root in {} steps", node, steps);
        }
    }

    /// Returns the leftmost node after splaying it, or `None` if the tree is empty.
    pub fn min(&mut self) -> Option<Handle> {
        let node = self.tree.min()?;
        self.splay(node);
        Some(node)
    }

    /// Returns the rightmost node after splaying it, or `None` if the tree is empty.
    pub fn max(&mut self) -> Option<Handle> {
        let node = self.tree.max()?;
        self.splay(node);
        Some(node)
    }
}

impl<K, V> SplayTree<K, V>
where
    K: Ord,
{
    /// Searches for `key`. On a hit the node is splayed and returned; on a miss the last node
    /// examined is splayed and `None` is returned.
    pub fn find<Q>(&mut self, key: &Q) -> Option<Handle>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        match self.tree.search(key) {
            Search::Found(node) => {
                self.splay(node);
                Some(node)
            },
            Search::Missing(last) => {
                if let Some(last) = last {
                    self.splay(last);
                }
                None
            },
        }
    }

    /// Searches for `key`. On a hit the node is splayed. On a miss the lower bound is splayed
    /// first and the upper bound second, so the upper bound ends up as the root when it exists.
    pub fn find_approx<Q>(&mut self, key: &Q) -> Approx
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        match self.tree.find_approx(key) {
            Bounds::Exact(node) => {
                self.splay(node);
                Approx {
                    exact: Some(node),
                    ..Approx::default()
                }
            },
            Bounds::Between { lower, upper } => {
                for &node in lower.iter().chain(upper.iter()) {
                    self.splay(node);
                }
                Approx {
                    exact: None,
                    lower,
                    upper,
                }
            },
        }
    }

    /// Inserts a key-value pair and splays its node. If the key already exists, the stored entry
    /// is replaced and returned.
    pub fn insert(&mut self, key: K, value: V) -> (Handle, Option<Entry<K, V>>) {
        let (node, old) = self.tree.insert(key, value);
        self.splay(node);
        (node, old)
    }

    /// Removes `key` and returns its key-value pair, splaying the removed node's former parent.
    pub fn take<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let removed = self.tree.remove(key)?;
        if let Some(parent) = removed.parent {
            self.splay(parent);
        }
        Some(removed.entry.into_pair())
    }

    /// Removes `key`, splaying the removed node's former parent. Returns `true` if the key was
    /// present.
    pub fn remove<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.take(key).is_some()
    }

    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        self.tree.check_invariants()
    }
}

impl<K, V> Default for SplayTree<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
