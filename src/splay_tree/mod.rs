//! Self-adjusting binary search tree with the additional property that recently accessed elements
//! are quick to access again.
//!
//! `SplayTree` is the handle-level engine: it drives the rotations in `rotate` over a
//! `bst::BaseTree`. `SplayMap` and `SplaySet` are key-level collections built on top of it.

mod map;
mod rotate;
mod set;
mod tree;

pub use self::map::SplayMap;
pub use self::rotate::Direction;
pub use self::set::SplaySet;
pub use self::tree::{Approx, SplayTree};
