// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"

//! Arena slots and node handles.

/// Index into the slot array.
pub(crate) type SlotIdx = u32;
/// Sentinel value for no neighbour.
pub(crate) const NONE: SlotIdx = u32::MAX;

/// A stable handle to a node in a [`Sequence`](super::Sequence).
///
/// Handles survive unrelated insertions and removals. Once the node they
/// name is removed, the slot's generation moves on and the handle resolves
/// to nothing, even if the slot is later reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId {
    pub(crate) index: SlotIdx,
    pub(crate) generation: u32,
}

impl NodeId {
    /// Raw slot index, for debugging.
    pub fn as_raw(&self) -> usize {
        return self.index as usize;
    }
}

/// A live node: one value plus its links.
#[derive(Clone, Debug)]
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) next: SlotIdx,
    pub(crate) prev: SlotIdx,
}

/// An arena slot. `node` is `None` while the slot sits on the free list.
#[derive(Clone, Debug)]
pub(crate) struct Slot<T> {
    pub(crate) generation: u32,
    pub(crate) node: Option<Node<T>>,
}

impl<T> Slot<T> {
    #[inline(always)]
    pub(crate) fn live(&self) -> Option<&Node<T>> {
        return self.node.as_ref();
    }

    #[inline(always)]
    pub(crate) fn live_mut(&mut self) -> Option<&mut Node<T>> {
        return self.node.as_mut();
    }

    /// Release the node, bumping the generation so old handles go stale.
    pub(crate) fn release(&mut self) -> Option<Node<T>> {
        let node = self.node.take();
        if node.is_some() {
            self.generation = self.generation.wrapping_add(1);
        }
        return node;
    }
}
