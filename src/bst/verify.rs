use crate::bst::tree::BaseTree;
use crate::error::InvariantError;

impl<K, V> BaseTree<K, V>
where
    K: Ord,
{
    /// Walks the whole tree and reports the first broken structural invariant: the root must
    /// have no parent, every child must name its parent, keys must strictly increase in order,
    /// every link must resolve, and the node count must match.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::bst::BaseTree;
    ///
    /// let mut tree = BaseTree::new();
    /// tree.insert(2, ());
    /// tree.insert(1, ());
    /// assert_eq!(tree.check_invariants(), Ok(()));
    /// ```
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        let len = self.len();
        let root = match self.root() {
            Some(root) => root,
            None if len == 0 => return Ok(()),
            None => {
                return Err(InvariantError::LenMismatch {
                    expected: len,
                    found: 0,
                })
            },
        };
        if !self.contains(root) {
            return Err(InvariantError::DanglingLink(root));
        }
        if self.parent(root).is_some() {
            return Err(InvariantError::RootHasParent(root));
        }

        // Both counters are capped at `len` so a cyclic link cannot loop forever.
        let mut found = 0;
        let mut prev: Option<&K> = None;
        let mut stack = Vec::new();
        let mut curr = Some(root);
        loop {
            while let Some(node) = curr {
                for &child in self.left(node).iter().chain(self.right(node).iter()) {
                    if !self.contains(child) {
                        return Err(InvariantError::DanglingLink(child));
                    }
                    if self.parent(child) != Some(node) {
                        return Err(InvariantError::ParentMismatch {
                            parent: node,
                            child,
                        });
                    }
                }
                stack.push(node);
                if stack.len() > len {
                    return Err(InvariantError::LenMismatch {
                        expected: len,
                        found: stack.len(),
                    });
                }
                curr = self.left(node);
            }

            let node = match stack.pop() {
                Some(node) => node,
                None => break,
            };
            found += 1;
            if found > len {
                return Err(InvariantError::LenMismatch {
                    expected: len,
                    found,
                });
            }
            let key = self.key(node).ok_or(InvariantError::DanglingLink(node))?;
            if let Some(prev) = prev {
                if prev >= key {
                    return Err(InvariantError::OutOfOrder(node));
                }
            }
            prev = Some(key);
            curr = self.right(node);
        }

        if found != len {
            return Err(InvariantError::LenMismatch {
                expected: len,
                found,
            });
        }
        Ok(())
    }
}
