use crate::arena::Handle;
use thiserror::Error;

/// A structural invariant found broken by `check_invariants`.
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum InvariantError {
    #[error("root {0:?} has a parent link")]
    RootHasParent(Handle),
    #[error("node {child:?} hangs under {parent:?} but does not name it as its parent")]
    ParentMismatch { parent: Handle, child: Handle },
    #[error("node {0:?} breaks key order during in-order traversal")]
    OutOfOrder(Handle),
    #[error("link to {0:?} does not resolve to a live node")]
    DanglingLink(Handle),
    #[error("tree records {expected} nodes but {found} are reachable from the root")]
    LenMismatch { expected: usize, found: usize },
}
