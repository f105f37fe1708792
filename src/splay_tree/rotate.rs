//! Rotation steps that move a node towards the root.
//!
//! A rotation only rewires links between nodes already in the tree. Keys are never compared, so
//! in-order sequence is preserved by construction.

use crate::arena::Handle;
use crate::bst::{BaseTree, Side};

/// Which way a node is rotated past its parent.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Direction {
    /// The node is a left child and the rotation is to the right.
    Zig,
    /// The node is a right child and the rotation is to the left.
    Zag,
}

impl Direction {
    /// The rotation that lifts `node` past its parent, or `None` if `node` is the root.
    pub fn of<K, V>(tree: &BaseTree<K, V>, node: Handle) -> Option<Direction> {
        tree.side_of(node).map(|side| match side {
            Side::Left => Direction::Zig,
            Side::Right => Direction::Zag,
        })
    }

    // The slot under its parent that a node rotated this way comes from.
    fn side(self) -> Side {
        match self {
            Direction::Zig => Side::Left,
            Direction::Zag => Side::Right,
        }
    }
}

/// Rotates `node` above `parent`.
///
/// `node`'s inner subtree (its right subtree on a zig, its left on a zag) moves under `parent`
/// into the slot `node` vacated, and `parent` becomes `node`'s child on the other side. If
/// `parent` was the root, `node` becomes the root. Otherwise `node` inherits `parent`'s parent
/// link, but that node's child slot still names `parent` and must be rewritten by the caller.
pub(crate) fn rotate<K, V>(
    tree: &mut BaseTree<K, V>,
    direction: Direction,
    node: Handle,
    parent: Handle,
) {
    let outer = direction.side();
    let inner = outer.opposite();
    let moved = tree.child(node, inner);
    let grandparent = tree.parent(parent);

    tree.set_child(parent, outer, moved);
    if let Some(moved) = moved {
        tree.set_parent(moved, Some(parent));
    }
    tree.set_child(node, inner, Some(parent));
    tree.set_parent(parent, Some(node));
    tree.set_parent(node, grandparent);
    if grandparent.is_none() {
        tree.set_root(Some(node));
    }
}

/// Moves `node` two levels up, past `parent` and `grandparent`.
///
/// When `node` and `parent` hang on the same side (zig-zig, zag-zag) `parent` is rotated past
/// `grandparent` first and `node` past `parent` second. When they hang on opposite sides
/// (zig-zag, zag-zig) `node` is rotated past `parent` and then past `grandparent`. The link from
/// the great-grandparent is captured before any rotation and rewritten to `node` afterwards.
pub(crate) fn rotate_up<K, V>(
    tree: &mut BaseTree<K, V>,
    node: Handle,
    parent: Handle,
    grandparent: Handle,
) {
    let node_direction = Direction::of(tree, node).expect("Expected node to have a parent.");
    let parent_direction =
        Direction::of(tree, parent).expect("Expected parent to have a parent.");
    let great_grandparent = tree
        .parent(grandparent)
        .map(|great_grandparent| (great_grandparent, tree.side_of(grandparent)));

    if node_direction == parent_direction {
        trace!("{:?}-{:?} at {:?}", node_direction, node_direction, node);
        rotate(tree, parent_direction, parent, grandparent);
        rotate(tree, node_direction, node, parent);
    } else {
        trace!("{:?}-{:?} at {:?}", node_direction, parent_direction, node);
        rotate(tree, node_direction, node, parent);
        rotate(tree, parent_direction, node, grandparent);
    }

    match great_grandparent {
        Some((great_grandparent, Some(side))) => {
            tree.set_child(great_grandparent, side, Some(node));
            tree.set_parent(node, Some(great_grandparent));
        },
        _ => {
            tree.set_root(Some(node));
            tree.set_parent(node, None);
        },
    }
}

#[cfg(test)]
mod tests {
    use super::{rotate, rotate_up, Direction};
    use crate::arena::Handle;
    use crate::bst::BaseTree;

    // Builds an unsplayed tree whose shape follows insertion order.
    fn tree_of(keys: &[u32]) -> BaseTree<u32, ()> {
        let mut tree = BaseTree::new();
        for &key in keys {
            tree.insert(key, ());
        }
        tree
    }

    fn keys(tree: &BaseTree<u32, ()>) -> Vec<u32> {
        tree.traverse().into_iter().map(|(key, _)| *key).collect()
    }

    fn key_of(tree: &BaseTree<u32, ()>, node: Option<Handle>) -> Option<u32> {
        node.and_then(|node| tree.key(node)).cloned()
    }

    #[test]
    fn test_direction_of() {
        let tree = tree_of(&[2, 1, 3]);
        assert_eq!(Direction::of(&tree, tree.find(&1).unwrap()), Some(Direction::Zig));
        assert_eq!(Direction::of(&tree, tree.find(&3).unwrap()), Some(Direction::Zag));
        assert_eq!(Direction::of(&tree, tree.find(&2).unwrap()), None);
    }

    #[test]
    fn test_zig_at_root() {
        // 4(2(1, 3), 5) becomes 2(1, 4(3, 5))
        let mut tree = tree_of(&[4, 2, 5, 1, 3]);
        let two = tree.find(&2).unwrap();
        let four = tree.find(&4).unwrap();
        rotate(&mut tree, Direction::Zig, two, four);

        assert_eq!(tree.root(), Some(two));
        assert_eq!(tree.parent(two), None);
        assert_eq!(key_of(&tree, tree.left(two)), Some(1));
        assert_eq!(tree.right(two), Some(four));
        assert_eq!(key_of(&tree, tree.left(four)), Some(3));
        assert_eq!(key_of(&tree, tree.right(four)), Some(5));
        assert_eq!(keys(&tree), vec![1, 2, 3, 4, 5]);
        assert_eq!(tree.check_invariants(), Ok(()));
    }

    #[test]
    fn test_zag_at_root() {
        // 2(1, 4(3, 5)) becomes 4(2(1, 3), 5)
        let mut tree = tree_of(&[2, 1, 4, 3, 5]);
        let two = tree.find(&2).unwrap();
        let four = tree.find(&4).unwrap();
        rotate(&mut tree, Direction::Zag, four, two);

        assert_eq!(tree.root(), Some(four));
        assert_eq!(tree.left(four), Some(two));
        assert_eq!(key_of(&tree, tree.right(two)), Some(3));
        assert_eq!(keys(&tree), vec![1, 2, 3, 4, 5]);
        assert_eq!(tree.check_invariants(), Ok(()));
    }

    #[test]
    fn test_rotate_back_and_forth() {
        let mut tree = tree_of(&[4, 2, 6, 1, 3, 5, 7]);
        let two = tree.find(&2).unwrap();
        let four = tree.find(&4).unwrap();
        rotate(&mut tree, Direction::Zig, two, four);
        rotate(&mut tree, Direction::Zag, four, two);

        assert_eq!(tree.root(), Some(four));
        assert_eq!(tree.left(four), Some(two));
        assert_eq!(tree.height(), 3);
        assert_eq!(keys(&tree), vec![1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(tree.check_invariants(), Ok(()));
    }

    #[test]
    fn test_rotate_below_root_leaves_grandparent_slot() {
        let mut tree = tree_of(&[10, 5, 3]);
        let ten = tree.find(&10).unwrap();
        let five = tree.find(&5).unwrap();
        let three = tree.find(&3).unwrap();
        rotate(&mut tree, Direction::Zig, three, five);

        assert_eq!(tree.parent(three), Some(ten));
        assert_eq!(tree.right(three), Some(five));
        assert_eq!(tree.left(ten), Some(five));
        assert_eq!(tree.root(), Some(ten));
    }

    #[test]
    fn test_zig_zig() {
        // 30(20(10)) becomes 10(-, 20(-, 30)). The parent is rotated first; rotating the node
        // twice would give the move-to-root shape 10(-, 30(20)) and keep spines deep.
        let mut tree = tree_of(&[30, 20, 10]);
        let ten = tree.find(&10).unwrap();
        let twenty = tree.find(&20).unwrap();
        let thirty = tree.find(&30).unwrap();
        rotate_up(&mut tree, ten, twenty, thirty);

        assert_eq!(tree.root(), Some(ten));
        assert_eq!(tree.right(ten), Some(twenty));
        assert_eq!(tree.right(twenty), Some(thirty));
        assert_eq!(tree.left(thirty), None);
        assert_eq!(tree.height(), 3);
        assert_eq!(tree.check_invariants(), Ok(()));
    }

    #[test]
    fn test_zag_zag_with_subtrees() {
        // 1(0, 3(2, 5(4, 6))) becomes 5(3(1(0, 2), 4), 6)
        let mut tree = tree_of(&[1, 0, 3, 2, 5, 4, 6]);
        let one = tree.find(&1).unwrap();
        let three = tree.find(&3).unwrap();
        let five = tree.find(&5).unwrap();
        rotate_up(&mut tree, five, three, one);

        assert_eq!(tree.root(), Some(five));
        assert_eq!(tree.left(five), Some(three));
        assert_eq!(key_of(&tree, tree.right(five)), Some(6));
        assert_eq!(tree.left(three), Some(one));
        assert_eq!(key_of(&tree, tree.right(three)), Some(4));
        assert_eq!(key_of(&tree, tree.left(one)), Some(0));
        assert_eq!(key_of(&tree, tree.right(one)), Some(2));
        assert_eq!(keys(&tree), vec![0, 1, 2, 3, 4, 5, 6]);
        assert_eq!(tree.check_invariants(), Ok(()));
    }

    #[test]
    fn test_zig_zag() {
        // 30(10(-, 20)) becomes 20(10, 30)
        let mut tree = tree_of(&[30, 10, 20]);
        let ten = tree.find(&10).unwrap();
        let twenty = tree.find(&20).unwrap();
        let thirty = tree.find(&30).unwrap();
        rotate_up(&mut tree, twenty, ten, thirty);

        assert_eq!(tree.root(), Some(twenty));
        assert_eq!(tree.left(twenty), Some(ten));
        assert_eq!(tree.right(twenty), Some(thirty));
        assert_eq!(tree.height(), 2);
        assert_eq!(tree.check_invariants(), Ok(()));
    }

    #[test]
    fn test_zag_zig_with_subtrees() {
        // 10(5, 30(20(15, 25), 35)) becomes 20(10(5, 15), 30(25, 35))
        let mut tree = tree_of(&[10, 5, 30, 20, 35, 15, 25]);
        let ten = tree.find(&10).unwrap();
        let twenty = tree.find(&20).unwrap();
        let thirty = tree.find(&30).unwrap();
        rotate_up(&mut tree, twenty, thirty, ten);

        assert_eq!(tree.root(), Some(twenty));
        assert_eq!(tree.left(twenty), Some(ten));
        assert_eq!(tree.right(twenty), Some(thirty));
        assert_eq!(key_of(&tree, tree.right(ten)), Some(15));
        assert_eq!(key_of(&tree, tree.left(thirty)), Some(25));
        assert_eq!(keys(&tree), vec![5, 10, 15, 20, 25, 30, 35]);
        assert_eq!(tree.check_invariants(), Ok(()));
    }

    #[test]
    fn test_rotate_up_reattaches_great_grandparent() {
        for &order in &[[50u32, 40, 30, 20], [10, 40, 30, 20]] {
            let mut tree = tree_of(&order);
            let top = tree.root().unwrap();
            let twenty = tree.find(&20).unwrap();
            let thirty = tree.find(&30).unwrap();
            let forty = tree.find(&40).unwrap();
            let side = tree.side_of(forty);
            rotate_up(&mut tree, twenty, thirty, forty);

            assert_eq!(tree.root(), Some(top));
            assert_eq!(tree.parent(twenty), Some(top));
            assert_eq!(tree.side_of(twenty), side);
            assert_eq!(tree.check_invariants(), Ok(()));
        }
    }
}
