//! Splay trees over an arena of parent-linked nodes.
//!
//! - `bst::BaseTree` is a plain, unbalanced binary search tree.
//! - `splay_tree::SplayTree` wraps it and splays every node it touches to the root.
//! - `splay_tree::SplayMap` and `splay_tree::SplaySet` are key-level collections on top.

#[macro_use]
extern crate log;
extern crate serde;
#[macro_use]
extern crate serde_derive;
extern crate thiserror;

#[cfg(test)]
extern crate serde_test;

pub mod arena;
pub mod bst;
mod entry;
mod error;
pub mod splay_tree;

pub use self::entry::Entry;
pub use self::error::InvariantError;
