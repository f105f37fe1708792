//! Unbalanced binary search tree over an arena of parent-linked nodes.
//!
//! The tree never rebalances. It exposes the search primitives and the link accessors that the
//! splay engine in `splay_tree` drives.

mod node;
mod tree;
mod verify;

pub use self::node::Side;
pub use self::tree::{BaseTree, Bounds, Removed, Search};
