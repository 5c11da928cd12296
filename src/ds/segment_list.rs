//! Doubly linked list threaded through a shared [`SlotArena`].
//!
//! Several `SegmentList`s can share one arena: each list only owns its
//! `head`, `tail` and `len`, while the `prev`/`next` links live inside the
//! arena nodes (anything implementing [`Linked`]). Moving a node from one
//! list to another is a detach followed by an attach; the node never leaves
//! its slot, so its [`SlotId`] stays valid.
//!
//! ```text
//!   arena (SlotArena<Node>)
//!   ┌────────┬──────────────────────────────┐
//!   │ SlotId │ Node { .., prev, next }      │
//!   ├────────┼──────────────────────────────┤
//!   │ id_0   │ prev: None,       next: id_2 │   list A: id_0 ◄──► id_2
//!   │ id_1   │ prev: None,       next: None │   list B: id_1
//!   │ id_2   │ prev: Some(id_0), next: None │
//!   └────────┴──────────────────────────────┘
//! ```
//!
//! All operations are O(1) except iteration and [`SegmentList::position`].

use crate::ds::slot_arena::{SlotArena, SlotId};
use crate::error::InvariantError;

/// Node that carries its own list links.
pub trait Linked {
    fn prev(&self) -> Option<SlotId>;
    fn next(&self) -> Option<SlotId>;
    fn set_prev(&mut self, prev: Option<SlotId>);
    fn set_next(&mut self, next: Option<SlotId>);
}

/// Head/tail/len of one list whose nodes live in a shared arena.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SegmentList {
    head: Option<SlotId>,
    tail: Option<SlotId>,
    len: usize,
}

impl SegmentList {
    pub const fn new() -> Self {
        Self {
            head: None,
            tail: None,
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Front (most recently inserted or touched) slot.
    pub fn front(&self) -> Option<SlotId> {
        self.head
    }

    /// Back (next eviction candidate) slot.
    pub fn back(&self) -> Option<SlotId> {
        self.tail
    }

    /// Links an already allocated, currently unlinked node at the front.
    pub fn push_front<T: Linked>(&mut self, arena: &mut SlotArena<T>, id: SlotId) {
        let old_head = self.head;
        match arena.get_mut(id) {
            Some(node) => {
                node.set_prev(None);
                node.set_next(old_head);
            },
            None => return,
        }
        match old_head.and_then(|h| arena.get_mut(h)) {
            Some(head_node) => head_node.set_prev(Some(id)),
            None => self.tail = Some(id),
        }
        self.head = Some(id);
        self.len += 1;
    }

    /// Unlinks `id` from this list, leaving the node in the arena.
    ///
    /// The caller guarantees `id` belongs to this list.
    pub fn detach<T: Linked>(&mut self, arena: &mut SlotArena<T>, id: SlotId) -> Option<()> {
        let (prev, next) = {
            let node = arena.get(id)?;
            (node.prev(), node.next())
        };

        match prev.and_then(|p| arena.get_mut(p)) {
            Some(prev_node) => prev_node.set_next(next),
            None => self.head = next,
        }
        match next.and_then(|n| arena.get_mut(n)) {
            Some(next_node) => next_node.set_prev(prev),
            None => self.tail = prev,
        }

        if let Some(node) = arena.get_mut(id) {
            node.set_prev(None);
            node.set_next(None);
        }
        self.len -= 1;
        Some(())
    }

    /// Unlinks and returns the back slot. The node stays in the arena.
    pub fn pop_back<T: Linked>(&mut self, arena: &mut SlotArena<T>) -> Option<SlotId> {
        let id = self.tail?;
        self.detach(arena, id)?;
        Some(id)
    }

    /// Moves `id` (already in this list) to the front.
    pub fn move_to_front<T: Linked>(&mut self, arena: &mut SlotArena<T>, id: SlotId) {
        if self.head == Some(id) {
            return;
        }
        if self.detach(arena, id).is_some() {
            self.push_front(arena, id);
        }
    }

    /// Zero-based distance of `id` from the front. O(n).
    pub fn position<T: Linked>(&self, arena: &SlotArena<T>, id: SlotId) -> Option<usize> {
        self.iter(arena).position(|(cur, _)| cur == id)
    }

    /// Iterates `(SlotId, &node)` from front to back.
    pub fn iter<'a, T: Linked>(&self, arena: &'a SlotArena<T>) -> SegmentIter<'a, T> {
        SegmentIter {
            arena,
            current: self.head,
            remaining: self.len,
        }
    }

    /// Forgets all links. Nodes must be cleared from the arena separately.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Walks the list and checks link symmetry and the recorded length.
    pub fn validate<T: Linked>(&self, arena: &SlotArena<T>, name: &str) -> Result<(), InvariantError> {
        if self.head.is_none() != self.tail.is_none() {
            return Err(InvariantError::new(format!(
                "{} list: head {:?} / tail {:?} disagree on emptiness",
                name, self.head, self.tail
            )));
        }

        let mut count = 0usize;
        let mut prev: Option<SlotId> = None;
        let mut current = self.head;
        while let Some(id) = current {
            let node = arena
                .get(id)
                .ok_or_else(|| InvariantError::new(format!("{} list: stale SlotId {:?}", name, id)))?;
            if node.prev() != prev {
                return Err(InvariantError::new(format!(
                    "{} list: prev link of {:?} is {:?}, expected {:?}",
                    name,
                    id,
                    node.prev(),
                    prev
                )));
            }
            count += 1;
            if count > self.len {
                return Err(InvariantError::new(format!(
                    "{} list: walked past recorded len {} (cycle?)",
                    name, self.len
                )));
            }
            prev = Some(id);
            current = node.next();
        }

        if prev != self.tail {
            return Err(InvariantError::new(format!(
                "{} list: walk ended at {:?} but tail is {:?}",
                name, prev, self.tail
            )));
        }
        if count != self.len {
            return Err(InvariantError::new(format!(
                "{} list: counted {} nodes but len = {}",
                name, count, self.len
            )));
        }
        Ok(())
    }
}

/// Iterator over `(SlotId, &T)` from front to back.
pub struct SegmentIter<'a, T> {
    arena: &'a SlotArena<T>,
    current: Option<SlotId>,
    remaining: usize,
}

impl<'a, T: Linked> Iterator for SegmentIter<'a, T> {
    type Item = (SlotId, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        let node = self.arena.get(id)?;
        self.current = node.next();
        self.remaining = self.remaining.saturating_sub(1);
        Some((id, node))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.remaining))
    }
}
