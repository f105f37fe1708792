use crate::arena::Handle;
use crate::entry::Entry;

/// The slot a node occupies under its parent.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// A tree node. Child links own their subtrees; `parent` is a back-reference only.
pub struct Node<K, V> {
    pub entry: Entry<K, V>,
    pub left: Option<Handle>,
    pub right: Option<Handle>,
    pub parent: Option<Handle>,
}

impl<K, V> Node<K, V> {
    pub fn new(key: K, value: V, parent: Option<Handle>) -> Self {
        Node {
            entry: Entry::new(key, value),
            left: None,
            right: None,
            parent,
        }
    }

    pub fn child(&self, side: Side) -> Option<Handle> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub fn set_child(&mut self, side: Side, child: Option<Handle>) {
        match side {
            Side::Left => self.left = child,
            Side::Right => self.right = child,
        }
    }
}
