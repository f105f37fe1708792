//! Chunked typed arena that hands out generation-checked handles.

use std::mem;
use std::ops::{Index, IndexMut};
use std::vec::Vec;

/// Number of objects per chunk used by the collections when no chunk size is given.
pub const DEFAULT_CHUNK_SIZE: usize = 1024;

/// A handle to an object stored in a `TypedArena<T>`.
///
/// Handles are `Copy` and stay valid for as long as the object they refer to is allocated. Once
/// the object is freed, the handle no longer resolves, even after its slot is reused.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Handle {
    chunk_index: usize,
    block_index: usize,
    generation: u32,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct Slot {
    chunk_index: usize,
    block_index: usize,
}

enum Block<T> {
    Occupied { generation: u32, value: T },
    Vacant { generation: u32, next: Option<Slot> },
}

/// A slab allocator for a single type of object.
///
/// Objects live in fixed-size chunks, so growing the arena never moves existing objects. Freed
/// blocks are threaded onto a free list and reused by later allocations; each reuse bumps the
/// block's generation so stale handles are rejected.
///
/// # Examples
///
/// ```
/// use splay_collections::arena::TypedArena;
///
/// let mut arena = TypedArena::new(1024);
///
/// let x = arena.allocate(1);
/// assert_eq!(arena[x], 1);
///
/// arena[x] += 1;
/// assert_eq!(arena[x], 2);
///
/// assert_eq!(arena.free(x), Some(2));
/// assert_eq!(arena.get(x), None);
/// ```
pub struct TypedArena<T> {
    head: Option<Slot>,
    chunks: Vec<Vec<Block<T>>>,
    chunk_size: usize,
    len: usize,
    capacity: usize,
}

impl<T> TypedArena<T> {
    /// Constructs a new, empty `TypedArena<T>` holding `chunk_size` objects per chunk. A chunk
    /// size of zero is treated as one.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::arena::TypedArena;
    ///
    /// let arena: TypedArena<u32> = TypedArena::new(64);
    /// assert!(arena.is_empty());
    /// ```
    pub fn new(chunk_size: usize) -> Self {
        TypedArena {
            head: None,
            chunks: Vec::new(),
            chunk_size: chunk_size.max(1),
            len: 0,
            capacity: 0,
        }
    }

    fn block(&self, handle: Handle) -> Option<&Block<T>> {
        self.chunks
            .get(handle.chunk_index)
            .and_then(|chunk| chunk.get(handle.block_index))
    }

    fn block_mut(&mut self, handle: Handle) -> Option<&mut Block<T>> {
        self.chunks
            .get_mut(handle.chunk_index)
            .and_then(|chunk| chunk.get_mut(handle.block_index))
    }

    /// Allocates an object and returns a handle to it.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::arena::TypedArena;
    ///
    /// let mut arena = TypedArena::new(2);
    /// let x = arena.allocate("x");
    /// assert_eq!(arena.get(x), Some(&"x"));
    /// ```
    pub fn allocate(&mut self, value: T) -> Handle {
        if self.len == self.capacity {
            self.chunks.push(Vec::with_capacity(self.chunk_size));
            self.capacity += self.chunk_size;
            debug!(
                "arena grew to {} chunks ({} slots)",
                self.chunks.len(),
                self.capacity,
            );
        }
        self.len += 1;

        match self.head.take() {
            None => {
                let chunk_index = self.chunks.len() - 1;
                let chunk = &mut self.chunks[chunk_index];
                chunk.push(Block::Occupied {
                    generation: 0,
                    value,
                });
                Handle {
                    chunk_index,
                    block_index: chunk.len() - 1,
                    generation: 0,
                }
            },
            Some(slot) => {
                let block = &mut self.chunks[slot.chunk_index][slot.block_index];
                let (generation, next) = match *block {
                    Block::Vacant { generation, next } => (generation, next),
                    Block::Occupied { .. } => unreachable!("free list points at an occupied block"),
                };
                *block = Block::Occupied { generation, value };
                self.head = next;
                Handle {
                    chunk_index: slot.chunk_index,
                    block_index: slot.block_index,
                    generation,
                }
            },
        }
    }

    /// Frees the object behind `handle` and returns it. Returns `None` if the handle is stale or
    /// never belonged to this arena.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::arena::TypedArena;
    ///
    /// let mut arena = TypedArena::new(1024);
    /// let x = arena.allocate(0);
    /// assert_eq!(arena.free(x), Some(0));
    /// assert_eq!(arena.free(x), None);
    /// ```
    pub fn free(&mut self, handle: Handle) -> Option<T> {
        if !self.contains(handle) {
            return None;
        }
        let next = self.head;
        let block = self.block_mut(handle)?;
        let vacant = Block::Vacant {
            generation: handle.generation.wrapping_add(1),
            next,
        };
        match mem::replace(block, vacant) {
            Block::Occupied { value, .. } => {
                self.len -= 1;
                self.head = Some(Slot {
                    chunk_index: handle.chunk_index,
                    block_index: handle.block_index,
                });
                Some(value)
            },
            Block::Vacant { .. } => unreachable!("contains() accepted a vacant block"),
        }
    }

    /// Returns `true` if `handle` refers to a live object in this arena.
    pub fn contains(&self, handle: Handle) -> bool {
        match self.block(handle) {
            Some(Block::Occupied { generation, .. }) => *generation == handle.generation,
            _ => false,
        }
    }

    /// Returns an immutable reference to an object in the arena. Returns `None` if the handle
    /// is stale.
    pub fn get(&self, handle: Handle) -> Option<&T> {
        match self.block(handle) {
            Some(Block::Occupied { generation, value }) if *generation == handle.generation => {
                Some(value)
            },
            _ => None,
        }
    }

    /// Returns a mutable reference to an object in the arena. Returns `None` if the handle is
    /// stale.
    pub fn get_mut(&mut self, handle: Handle) -> Option<&mut T> {
        match self.block_mut(handle) {
            Some(Block::Occupied { generation, value }) if *generation == handle.generation => {
                Some(value)
            },
            _ => None,
        }
    }

    /// Returns the number of live objects.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the arena holds no live objects.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of objects the arena can hold without allocating another chunk.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drops every object and releases all chunks. Handles issued before the call may resolve
    /// to objects allocated afterwards, so callers must discard them.
    pub fn clear(&mut self) {
        self.head = None;
        self.chunks.clear();
        self.len = 0;
        self.capacity = 0;
    }
}

impl<T> Index<Handle> for TypedArena<T> {
    type Output = T;

    fn index(&self, handle: Handle) -> &Self::Output {
        self.get(handle).expect("Error: stale arena handle.")
    }
}

impl<T> IndexMut<Handle> for TypedArena<T> {
    fn index_mut(&mut self, handle: Handle) -> &mut Self::Output {
        self.get_mut(handle).expect("Error: stale arena handle.")
    }
}
