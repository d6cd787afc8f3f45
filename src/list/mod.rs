// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"

//! Arena-backed doubly linked list.
//!
//! Nodes live in a `Vec` of slots and link to each other by slot index, so
//! there are no raw pointers and no `Rc` cycles. A [`NodeId`] carries the
//! slot's generation: removing a node bumps it, which turns every handle to
//! that node stale instead of dangling.
//!
//! Operations:
//! - push_back: O(1)
//! - remove_node: O(1)
//! - remove_first_match / contains / find: O(n) forward scan
//! - at / replace: O(n) walk from the head, 1-based positions
//! - clear: O(n) explicit loop over the chain, no recursion

mod node;
pub mod shuffle;
pub mod sort;

use std::fmt;

use crate::error::Error;
use crate::error::Result;
use node::Node;
use node::Slot;
use node::SlotIdx;
use node::NONE;

pub use node::NodeId;

/// An ordered sequence that owns its node chain.
pub struct Sequence<T> {
    slots: Vec<Slot<T>>,
    /// Released slots, reused before the arena grows.
    free: Vec<SlotIdx>,
    head: SlotIdx,
    tail: SlotIdx,
    len: usize,
}

impl<T> Sequence<T> {
    /// Create a new empty sequence.
    pub fn new() -> Sequence<T> {
        return Sequence {
            slots: Vec::new(),
            free: Vec::new(),
            head: NONE,
            tail: NONE,
            len: 0,
        };
    }

    /// Number of elements. O(1).
    #[inline]
    pub fn len(&self) -> usize {
        return self.len;
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        return self.len == 0;
    }

    #[inline(always)]
    fn node(&self, idx: SlotIdx) -> &Node<T> {
        return self.slots[idx as usize]
            .live()
            .expect("linked slot is live");
    }

    #[inline(always)]
    fn node_mut(&mut self, idx: SlotIdx) -> &mut Node<T> {
        return self.slots[idx as usize]
            .live_mut()
            .expect("linked slot is live");
    }

    #[inline]
    fn id_of(&self, idx: SlotIdx) -> NodeId {
        return NodeId {
            index: idx,
            generation: self.slots[idx as usize].generation,
        };
    }

    #[inline]
    fn id_at(&self, idx: SlotIdx) -> Option<NodeId> {
        if idx == NONE {
            return None;
        }
        return Some(self.id_of(idx));
    }

    /// Resolve a handle to its slot, or `None` if the node is gone.
    fn resolve(&self, id: NodeId) -> Option<SlotIdx> {
        let slot = self.slots.get(id.index as usize)?;
        if slot.generation != id.generation || slot.live().is_none() {
            return None;
        }
        return Some(id.index);
    }

    fn alloc(&mut self, node: Node<T>) -> SlotIdx {
        if let Some(idx) = self.free.pop() {
            self.slots[idx as usize].node = Some(node);
            return idx;
        }
        let idx = self.slots.len() as SlotIdx;
        assert!(idx != NONE, "sequence arena is full");
        self.slots.push(Slot {
            generation: 0,
            node: Some(node),
        });
        return idx;
    }

    /// Append a value after the last node.
    pub fn push_back(&mut self, value: T) -> NodeId {
        let tail = self.tail;
        let idx = self.alloc(Node {
            value,
            next: NONE,
            prev: tail,
        });

        if tail == NONE {
            self.head = idx;
        } else {
            self.node_mut(tail).next = idx;
        }
        self.tail = idx;
        self.len += 1;

        return self.id_of(idx);
    }

    /// Detach a live slot from the chain and release it.
    fn unlink(&mut self, idx: SlotIdx) -> T {
        let node = self.slots[idx as usize]
            .release()
            .expect("unlinked slot is live");

        // Sole node clears both ends; otherwise patch whichever side exists.
        if node.prev == NONE {
            self.head = node.next;
        } else {
            self.node_mut(node.prev).next = node.next;
        }
        if node.next == NONE {
            self.tail = node.prev;
        } else {
            self.node_mut(node.next).prev = node.prev;
        }

        self.free.push(idx);
        self.len -= 1;
        return node.value;
    }

    /// Remove the node named by `id`, returning its value.
    /// Returns `None` if the handle is stale.
    pub fn remove_node(&mut self, id: NodeId) -> Option<T> {
        let idx = self.resolve(id)?;
        return Some(self.unlink(idx));
    }

    /// Remove the first element equal to `value`.
    /// Returns false, without touching the sequence, if there is none.
    pub fn remove_first_match(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        return match self.find_slot(|v| v == value) {
            Some(idx) => {
                self.unlink(idx);
                true
            }
            None => false,
        };
    }

    fn find_slot<F: FnMut(&T) -> bool>(&self, mut pred: F) -> Option<SlotIdx> {
        let mut idx = self.head;
        while idx != NONE {
            let node = self.node(idx);
            if pred(&node.value) {
                return Some(idx);
            }
            idx = node.next;
        }
        return None;
    }

    /// Handle of the first element matching `pred`, scanning from the head.
    pub fn find<F: FnMut(&T) -> bool>(&self, pred: F) -> Option<NodeId> {
        let idx = self.find_slot(pred)?;
        return Some(self.id_of(idx));
    }

    /// True if any element equals `value`.
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        return self.find_slot(|v| v == value).is_some();
    }

    /// Walk forward to a 1-based position.
    pub(crate) fn locate(&self, position: usize) -> Result<SlotIdx> {
        if position == 0 || position > self.len {
            return Err(Error::OutOfRange {
                position,
                len: self.len,
            });
        }
        return Ok(self.walk(position - 1));
    }

    /// Slot `steps` links after the head. Caller keeps `steps < len`.
    pub(crate) fn walk(&self, steps: usize) -> SlotIdx {
        debug_assert!(steps < self.len);
        let mut idx = self.head;
        for _ in 0..steps {
            idx = self.node(idx).next;
        }
        return idx;
    }

    /// The element at a 1-based position.
    pub fn at(&self, position: usize) -> Result<&T> {
        let idx = self.locate(position)?;
        return Ok(&self.node(idx).value);
    }

    /// Overwrite the element at a 1-based position, returning the old one.
    pub fn replace(&mut self, position: usize, value: T) -> Result<T> {
        let idx = self.locate(position)?;
        return Ok(std::mem::replace(&mut self.node_mut(idx).value, value));
    }

    pub fn first(&self) -> Option<NodeId> {
        return self.id_at(self.head);
    }

    pub fn last(&self) -> Option<NodeId> {
        return self.id_at(self.tail);
    }

    /// The node after `id`, or `None` at the end or for a stale handle.
    pub fn next(&self, id: NodeId) -> Option<NodeId> {
        let idx = self.resolve(id)?;
        return self.id_at(self.node(idx).next);
    }

    /// The node before `id`, or `None` at the start or for a stale handle.
    pub fn prev(&self, id: NodeId) -> Option<NodeId> {
        let idx = self.resolve(id)?;
        return self.id_at(self.node(idx).prev);
    }

    pub fn get(&self, id: NodeId) -> Option<&T> {
        let idx = self.resolve(id)?;
        return Some(&self.node(idx).value);
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut T> {
        let idx = self.resolve(id)?;
        return Some(&mut self.node_mut(idx).value);
    }

    /// Release every node. Afterwards the sequence behaves as if new.
    pub fn clear(&mut self) {
        let mut idx = self.head;
        while idx != NONE {
            let next = self.node(idx).next;
            self.slots[idx as usize].release();
            self.free.push(idx);
            idx = next;
        }
        self.head = NONE;
        self.tail = NONE;
        self.len = 0;
    }

    /// Iterate values from first to last.
    pub fn iter(&self) -> Iter<'_, T> {
        return Iter {
            seq: self,
            front: self.head,
            back: self.tail,
            remaining: self.len,
        };
    }

    /// Iterate `(NodeId, &T)` from first to last.
    pub fn nodes(&self) -> Nodes<'_, T> {
        return Nodes {
            seq: self,
            idx: self.head,
        };
    }

    /// Slot indices in chain order.
    pub(crate) fn slot_order(&self) -> Vec<SlotIdx> {
        let mut order = Vec::with_capacity(self.len);
        let mut idx = self.head;
        while idx != NONE {
            order.push(idx);
            idx = self.node(idx).next;
        }
        return order;
    }

    #[inline]
    pub(crate) fn slot_value(&self, idx: SlotIdx) -> &T {
        return &self.node(idx).value;
    }

    /// Exchange the values held by two live slots. The nodes stay put.
    pub(crate) fn swap_values(&mut self, a: SlotIdx, b: SlotIdx) {
        if a == b {
            return;
        }
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        let (left, right) = self.slots.split_at_mut(hi as usize);
        match (left[lo as usize].live_mut(), right[0].live_mut()) {
            (Some(x), Some(y)) => std::mem::swap(&mut x.value, &mut y.value),
            _ => unreachable!("swap on a released slot"),
        }
    }
}

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        return Self::new();
    }
}

impl<T: Clone> Clone for Sequence<T> {
    /// Deep copy into a fresh, compact chain. No nodes are shared.
    fn clone(&self) -> Self {
        return self.iter().cloned().collect();
    }

    /// Release the existing chain, then copy `source` in order.
    fn clone_from(&mut self, source: &Self) {
        self.clear();
        self.extend(source.iter().cloned());
    }
}

impl<T: fmt::Debug> fmt::Debug for Sequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f.debug_list().entries(self.iter()).finish();
    }
}

impl<T: PartialEq> PartialEq for Sequence<T> {
    fn eq(&self, other: &Self) -> bool {
        return self.len == other.len && self.iter().eq(other.iter());
    }
}

impl<T: Eq> Eq for Sequence<T> {}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut seq = Sequence::new();
        seq.extend(iter);
        return seq;
    }
}

impl<T> Extend<T> for Sequence<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        return self.iter();
    }
}

/// Iterator over values, in either direction.
pub struct Iter<'a, T> {
    seq: &'a Sequence<T>,
    front: SlotIdx,
    back: SlotIdx,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.seq.node(self.front);
        self.front = node.next;
        self.remaining -= 1;
        return Some(&node.value);
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        return (self.remaining, Some(self.remaining));
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.seq.node(self.back);
        self.back = node.prev;
        self.remaining -= 1;
        return Some(&node.value);
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

/// Iterator over `(NodeId, &T)` pairs.
pub struct Nodes<'a, T> {
    seq: &'a Sequence<T>,
    idx: SlotIdx,
}

impl<'a, T> Iterator for Nodes<'a, T> {
    type Item = (NodeId, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        if self.idx == NONE {
            return None;
        }
        let idx = self.idx;
        let node = self.seq.node(idx);
        self.idx = node.next;
        return Some((self.seq.id_of(idx), &node.value));
    }
}
