use crate::error::{Error, Result};

use super::{next_queue_id, EntryHandle, PriorityQueue};

#[derive(Debug)]
struct Entry<V> {
    key: i64,
    value: V,
    left: Option<usize>,
    right: Option<usize>,
    parent: Option<usize>,
}

#[derive(Debug)]
struct Slot<V> {
    generation: u64,
    entry: Option<Entry<V>>,
}

/// Self-adjusting mergeable min-heap with native decrease-key.
///
/// Each node has at most two children and the single structural primitive is
/// the skew merge: the smaller of two roots wins, its right child is
/// recursively merged with the other heap, and the new root's children are
/// then swapped. Insert merges a singleton with the root; extract-min merges
/// the root's two children. Decrease-key and remove cut the target entry out
/// of the tree (splicing the merge of its children under its former parent)
/// and, for decrease-key, re-merge it at the lowered key.
///
/// There is no rebalancing invariant beyond the merge rule; the child swap
/// alone yields amortised logarithmic cost per operation over a sequence,
/// not a worst-case bound per call.
///
/// Entries live in a generation-tagged slot arena so a handle can be checked
/// for staleness in O(1) and slots can be reused after extraction.
#[derive(Debug)]
pub struct SkewHeap<V> {
    id: u64,
    root: Option<usize>,
    slots: Vec<Slot<V>>,
    free: Vec<usize>,
    len: usize,
}

impl<V> SkewHeap<V> {
    pub fn new() -> Self {
        Self {
            id: next_queue_id(),
            root: None,
            slots: Vec::new(),
            free: Vec::new(),
            len: 0,
        }
    }

    /// Key of the current minimum without extracting it.
    pub fn peek_min_key(&self) -> Option<i64> {
        self.root.map(|idx| self.entry(idx).key)
    }

    fn entry(&self, idx: usize) -> &Entry<V> {
        self.slots[idx].entry.as_ref().expect("arena slot is occupied")
    }

    fn entry_mut(&mut self, idx: usize) -> &mut Entry<V> {
        self.slots[idx].entry.as_mut().expect("arena slot is occupied")
    }

    fn key_of(&self, idx: usize) -> i64 {
        self.entry(idx).key
    }

    fn alloc(&mut self, entry: Entry<V>) -> usize {
        match self.free.pop() {
            Some(idx) => {
                self.slots[idx].entry = Some(entry);
                idx
            }
            None => {
                self.slots.push(Slot {
                    generation: 0,
                    entry: Some(entry),
                });
                self.slots.len() - 1
            }
        }
    }

    /// Empty a slot, bump its generation so outstanding handles go stale,
    /// and put it on the free list.
    fn release(&mut self, idx: usize) -> Entry<V> {
        let slot = &mut self.slots[idx];
        let entry = slot.entry.take().expect("arena slot is occupied");
        slot.generation += 1;
        self.free.push(idx);
        entry
    }

    fn set_root(&mut self, root: Option<usize>) {
        if let Some(idx) = root {
            self.entry_mut(idx).parent = None;
        }
        self.root = root;
    }

    /// The skew merge. Returns the merged root; the caller owns re-pointing
    /// its parent.
    fn merge(&mut self, a: Option<usize>, b: Option<usize>) -> Option<usize> {
        let (root, other) = match (a, b) {
            (None, None) => return None,
            (Some(x), None) | (None, Some(x)) => return Some(x),
            (Some(x), Some(y)) => {
                if self.key_of(x) <= self.key_of(y) {
                    (x, y)
                } else {
                    (y, x)
                }
            }
        };

        let right = self.entry(root).right;
        let merged = self.merge(right, Some(other));

        // Swap children: the freshly merged subtree becomes the left child.
        let e = self.entry_mut(root);
        let former_left = e.left;
        e.left = merged;
        e.right = former_left;

        if let Some(m) = merged {
            self.entry_mut(m).parent = Some(root);
        }
        Some(root)
    }

    /// Structurally detach `idx` from the tree, replacing it under its former
    /// parent with the merge of its two children. Afterwards the entry is a
    /// free-standing singleton.
    fn cut(&mut self, idx: usize) {
        let (parent, left, right) = {
            let e = self.entry(idx);
            (e.parent, e.left, e.right)
        };
        let replacement = self.merge(left, right);

        match parent {
            Some(p) => {
                if self.entry(p).left == Some(idx) {
                    self.entry_mut(p).left = replacement;
                } else {
                    self.entry_mut(p).right = replacement;
                }
                if let Some(r) = replacement {
                    self.entry_mut(r).parent = Some(p);
                }
            }
            None => self.set_root(replacement),
        }

        let e = self.entry_mut(idx);
        e.left = None;
        e.right = None;
        e.parent = None;
    }

    fn validate(&self, handle: &EntryHandle) -> Result<usize> {
        if handle.queue != self.id {
            return Err(Error::ForeignHandle);
        }
        let slot = self.slots.get(handle.slot).ok_or(Error::ClosedHandle)?;
        if slot.generation != handle.generation || slot.entry.is_none() {
            return Err(Error::ClosedHandle);
        }
        Ok(handle.slot)
    }
}

impl<V> Default for SkewHeap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> PriorityQueue<V> for SkewHeap<V> {
    fn insert(&mut self, key: i64, value: V) -> EntryHandle {
        let slot = self.alloc(Entry {
            key,
            value,
            left: None,
            right: None,
            parent: None,
        });
        let handle = EntryHandle {
            queue: self.id,
            slot,
            generation: self.slots[slot].generation,
        };
        let root = self.merge(self.root, Some(slot));
        self.set_root(root);
        self.len += 1;
        handle
    }

    fn extract_min(&mut self) -> Result<(i64, V)> {
        let root = self.root.ok_or(Error::EmptyQueue)?;
        let entry = self.release(root);
        let merged = self.merge(entry.left, entry.right);
        self.set_root(merged);
        self.len -= 1;
        Ok((entry.key, entry.value))
    }

    fn decrease_key(&mut self, handle: &EntryHandle, new_key: i64) -> Result<()> {
        let idx = self.validate(handle)?;
        let current = self.key_of(idx);
        if new_key > current {
            return Err(Error::KeyNotDecreased {
                current,
                requested: new_key,
            });
        }
        if new_key == current {
            return Ok(());
        }
        if self.root == Some(idx) {
            // Lowering the root key cannot violate heap order.
            self.entry_mut(idx).key = new_key;
            return Ok(());
        }
        self.cut(idx);
        self.entry_mut(idx).key = new_key;
        let root = self.merge(self.root, Some(idx));
        self.set_root(root);
        Ok(())
    }

    fn remove(&mut self, handle: &EntryHandle) -> Result<V> {
        let idx = self.validate(handle)?;
        self.cut(idx);
        let entry = self.release(idx);
        self.len -= 1;
        Ok(entry.value)
    }

    fn union(&mut self, other: &mut Self) {
        if other.slots.is_empty() {
            other.root = None;
            other.len = 0;
            return;
        }
        let offset = self.slots.len();
        for mut slot in other.slots.drain(..) {
            if let Some(entry) = slot.entry.as_mut() {
                entry.left = entry.left.map(|i| i + offset);
                entry.right = entry.right.map(|i| i + offset);
                entry.parent = entry.parent.map(|i| i + offset);
            }
            self.slots.push(slot);
        }
        self.free.extend(other.free.drain(..).map(|i| i + offset));
        let donated = other.root.take().map(|i| i + offset);
        let root = self.merge(self.root, donated);
        self.set_root(root);
        self.len += other.len;
        other.len = 0;
    }

    fn len(&self) -> usize {
        self.len
    }
}
