use crate::arena::{Handle, TypedArena, DEFAULT_CHUNK_SIZE};
use crate::bst::node::{Node, Side};
use crate::entry::Entry;
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::mem;

/// Outcome of an exact search.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Search {
    /// The node holding the key.
    Found(Handle),
    /// The key is absent. Holds the last node examined, or `None` if the tree is empty.
    Missing(Option<Handle>),
}

impl Search {
    pub fn found(self) -> Option<Handle> {
        match self {
            Search::Found(node) => Some(node),
            Search::Missing(_) => None,
        }
    }
}

/// Outcome of a bounded search.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Bounds {
    /// The node holding the key.
    Exact(Handle),
    /// The key is absent. `lower` is its in-order predecessor and `upper` its successor.
    Between {
        lower: Option<Handle>,
        upper: Option<Handle>,
    },
}

/// A node unlinked and freed by `BaseTree::remove`.
#[derive(Debug)]
pub struct Removed<K, V> {
    pub entry: Entry<K, V>,
    /// The deepest node whose child link changed. `None` when the removed node was the root and
    /// had at most one child.
    pub parent: Option<Handle>,
}

/// An unbalanced binary search tree whose nodes live in a `TypedArena`.
///
/// Every node carries a parent link, so callers holding a `Handle` can walk upwards. Link
/// mutators are crate-private: only the tree itself and the splay engine rewire nodes.
///
/// # Examples
///
/// ```
/// use splay_collections::bst::BaseTree;
///
/// let mut tree = BaseTree::new();
/// let (two, _) = tree.insert(2, "two");
/// let (one, _) = tree.insert(1, "one");
///
/// assert_eq!(tree.root(), Some(two));
/// assert_eq!(tree.left(two), Some(one));
/// assert_eq!(tree.parent(one), Some(two));
/// assert_eq!(tree.find(&1), Some(one));
/// ```
pub struct BaseTree<K, V> {
    arena: TypedArena<Node<K, V>>,
    root: Option<Handle>,
}

impl<K, V> BaseTree<K, V> {
    /// Constructs a new, empty `BaseTree<K, V>`.
    pub fn new() -> Self {
        Self::with_chunk_size(DEFAULT_CHUNK_SIZE)
    }

    /// Constructs a new, empty `BaseTree<K, V>` whose arena allocates `chunk_size` nodes at a
    /// time.
    pub fn with_chunk_size(chunk_size: usize) -> Self {
        BaseTree {
            arena: TypedArena::new(chunk_size),
            root: None,
        }
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops every node. Handles issued before the call must not be reused.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
    }

    /// Returns `true` if `node` refers to a node currently in the tree.
    pub fn contains(&self, node: Handle) -> bool {
        self.arena.contains(node)
    }

    pub fn root(&self) -> Option<Handle> {
        self.root
    }

    pub(crate) fn set_root(&mut self, root: Option<Handle>) {
        self.root = root;
    }

    fn node(&self, node: Handle) -> &Node<K, V> {
        &self.arena[node]
    }

    fn node_mut(&mut self, node: Handle) -> &mut Node<K, V> {
        &mut self.arena[node]
    }

    pub fn entry(&self, node: Handle) -> Option<&Entry<K, V>> {
        self.arena.get(node).map(|node| &node.entry)
    }

    pub fn key(&self, node: Handle) -> Option<&K> {
        self.entry(node).map(|entry| &entry.key)
    }

    pub fn value(&self, node: Handle) -> Option<&V> {
        self.entry(node).map(|entry| &entry.value)
    }

    pub fn value_mut(&mut self, node: Handle) -> Option<&mut V> {
        self.arena.get_mut(node).map(|node| &mut node.entry.value)
    }

    pub fn left(&self, node: Handle) -> Option<Handle> {
        self.arena.get(node).and_then(|node| node.left)
    }

    pub fn right(&self, node: Handle) -> Option<Handle> {
        self.arena.get(node).and_then(|node| node.right)
    }

    pub fn parent(&self, node: Handle) -> Option<Handle> {
        self.arena.get(node).and_then(|node| node.parent)
    }

    pub fn child(&self, node: Handle, side: Side) -> Option<Handle> {
        self.arena.get(node).and_then(|node| node.child(side))
    }

    /// Returns the slot `node` occupies under its parent, or `None` for the root.
    pub fn side_of(&self, node: Handle) -> Option<Side> {
        let parent = self.parent(node)?;
        if self.left(parent) == Some(node) {
            Some(Side::Left)
        } else {
            Some(Side::Right)
        }
    }

    pub(crate) fn set_left(&mut self, node: Handle, child: Option<Handle>) {
        self.node_mut(node).left = child;
    }

    pub(crate) fn set_right(&mut self, node: Handle, child: Option<Handle>) {
        self.node_mut(node).right = child;
    }

    pub(crate) fn set_child(&mut self, node: Handle, side: Side, child: Option<Handle>) {
        self.node_mut(node).set_child(side, child);
    }

    pub(crate) fn set_parent(&mut self, node: Handle, parent: Option<Handle>) {
        self.node_mut(node).parent = parent;
    }

    fn extreme(&self, mut node: Handle, side: Side) -> Handle {
        while let Some(child) = self.node(node).child(side) {
            node = child;
        }
        node
    }

    /// Returns the leftmost node.
    pub fn min(&self) -> Option<Handle> {
        self.root.map(|root| self.extreme(root, Side::Left))
    }

    /// Returns the rightmost node.
    pub fn max(&self) -> Option<Handle> {
        self.root.map(|root| self.extreme(root, Side::Right))
    }

    // Points whatever held `old` (a parent slot or the root) at `new`.
    fn replace_child(&mut self, parent: Option<Handle>, old: Handle, new: Option<Handle>) {
        match parent {
            None => self.root = new,
            Some(parent) => {
                let side = if self.node(parent).left == Some(old) {
                    Side::Left
                } else {
                    Side::Right
                };
                self.set_child(parent, side, new);
            },
        }
        if let Some(new) = new {
            self.set_parent(new, parent);
        }
    }

    fn remove_node(&mut self, target: Handle) -> Removed<K, V> {
        let (left, right, parent) = {
            let node = self.node(target);
            (node.left, node.right, node.parent)
        };

        let vacated = match (left, right) {
            (Some(left), Some(right)) => {
                let successor = self.extreme(right, Side::Left);
                let vacated = if successor == right {
                    successor
                } else {
                    let successor_parent = self
                        .node(successor)
                        .parent
                        .expect("Expected successor to have a parent.");
                    let successor_right = self.node(successor).right;
                    self.set_left(successor_parent, successor_right);
                    if let Some(child) = successor_right {
                        self.set_parent(child, Some(successor_parent));
                    }
                    self.set_right(successor, Some(right));
                    self.set_parent(right, Some(successor));
                    successor_parent
                };
                self.set_left(successor, Some(left));
                self.set_parent(left, Some(successor));
                self.replace_child(parent, target, Some(successor));
                Some(vacated)
            },
            (child, None) | (None, child) => {
                self.replace_child(parent, target, child);
                parent
            },
        };

        debug!("removed {:?}, vacated parent {:?}", target, vacated);
        let node = self
            .arena
            .free(target)
            .expect("Expected removed node to be live.");
        Removed {
            entry: node.entry,
            parent: vacated,
        }
    }

    pub(crate) fn handles_in_order(&self) -> Vec<Handle> {
        let mut ret = Vec::with_capacity(self.len());
        let mut stack = Vec::new();
        let mut curr = self.root;
        loop {
            while let Some(node) = curr {
                stack.push(node);
                curr = self.node(node).left;
            }
            match stack.pop() {
                Some(node) => {
                    ret.push(node);
                    curr = self.node(node).right;
                },
                None => break,
            }
        }
        ret
    }

    /// Returns the key-value pairs in key order.
    pub fn traverse(&self) -> Vec<(&K, &V)> {
        self.handles_in_order()
            .into_iter()
            .map(|node| {
                let entry = &self.node(node).entry;
                (&entry.key, &entry.value)
            })
            .collect()
    }

    /// Returns the number of nodes on the longest root-to-leaf path.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(Handle, usize)> = self.root.map(|root| (root, 1)).into_iter().collect();
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            let node = self.node(node);
            for &child in node.left.iter().chain(node.right.iter()) {
                stack.push((child, depth + 1));
            }
        }
        height
    }
}

impl<K, V> BaseTree<K, V>
where
    K: Ord,
{
    /// Searches for `key`, remembering the last node examined on a miss.
    pub fn search<Q>(&self, key: &Q) -> Search
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut last = None;
        let mut curr = self.root;
        while let Some(node) = curr {
            last = Some(node);
            let Node {
                ref entry,
                left,
                right,
                ..
            } = *self.node(node);
            curr = match key.cmp(entry.key.borrow()) {
                Ordering::Less => left,
                Ordering::Greater => right,
                Ordering::Equal => return Search::Found(node),
            };
        }
        Search::Missing(last)
    }

    pub fn find<Q>(&self, key: &Q) -> Option<Handle>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.search(key).found()
    }

    /// Searches for `key`, returning either the exact node or its two neighbours in key order.
    pub fn find_approx<Q>(&self, key: &Q) -> Bounds
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut lower = None;
        let mut upper = None;
        let mut curr = self.root;
        while let Some(node) = curr {
            let Node {
                ref entry,
                left,
                right,
                ..
            } = *self.node(node);
            curr = match key.cmp(entry.key.borrow()) {
                Ordering::Less => {
                    upper = Some(node);
                    left
                },
                Ordering::Greater => {
                    lower = Some(node);
                    right
                },
                Ordering::Equal => return Bounds::Exact(node),
            };
        }
        Bounds::Between { lower, upper }
    }

    /// Inserts a key-value pair as a new leaf and returns its handle. If the key already exists,
    /// its entry is replaced in place and the old entry is returned alongside the existing handle.
    pub fn insert(&mut self, key: K, value: V) -> (Handle, Option<Entry<K, V>>) {
        let mut parent = None;
        let mut side = Side::Left;
        let mut curr = self.root;
        while let Some(node) = curr {
            match key.cmp(&self.node(node).entry.key) {
                Ordering::Less => side = Side::Left,
                Ordering::Greater => side = Side::Right,
                Ordering::Equal => {
                    let old = mem::replace(&mut self.node_mut(node).entry, Entry::new(key, value));
                    return (node, Some(old));
                },
            }
            parent = Some(node);
            curr = self.node(node).child(side);
        }

        let node = self.arena.allocate(Node::new(key, value, parent));
        match parent {
            None => self.root = Some(node),
            Some(parent) => self.set_child(parent, side, Some(node)),
        }
        (node, None)
    }

    /// Removes the node holding `key`. A node with two children is replaced by its in-order
    /// successor, which is relinked rather than copied so that handles to it stay valid.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<Removed<K, V>>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let target = self.find(key)?;
        Some(self.remove_node(target))
    }
}

impl<K, V> Default for BaseTree<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
