use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::error::{Error, Result};

use super::{next_queue_id, EntryHandle, PriorityQueue};

#[derive(Debug)]
struct Slot<V> {
    generation: u64,
    key: i64,
    value: Option<V>,
}

/// Reference open set built on `std::collections::BinaryHeap`, which has no
/// native decrease-key.
///
/// Decrease-key is emulated by logically removing the entry and reinserting
/// it at the lower key. The removal is enforced through generation-tagged
/// slots: every heap entry carries the slot key and generation it was pushed
/// with, and extract-min discards entries whose tag no longer matches. That
/// guarantee is what keeps the emulation honest: a duplicate-insert scheme
/// that never invalidates stale entries silently returns wrong minima.
///
/// This queue exists as a comparison/benchmarking baseline for [`SkewHeap`];
/// the search strategies do not use it.
///
/// [`SkewHeap`]: super::SkewHeap
#[derive(Debug)]
pub struct BinaryQueue<V> {
    id: u64,
    heap: BinaryHeap<QueueEntry>,
    slots: Vec<Slot<V>>,
    free: Vec<usize>,
    len: usize,
}

impl<V> BinaryQueue<V> {
    pub fn new() -> Self {
        Self {
            id: next_queue_id(),
            heap: BinaryHeap::new(),
            slots: Vec::new(),
            free: Vec::new(),
            len: 0,
        }
    }

    fn alloc(&mut self, key: i64, value: V) -> usize {
        match self.free.pop() {
            Some(idx) => {
                let slot = &mut self.slots[idx];
                slot.key = key;
                slot.value = Some(value);
                idx
            }
            None => {
                self.slots.push(Slot {
                    generation: 0,
                    key,
                    value: Some(value),
                });
                self.slots.len() - 1
            }
        }
    }

    fn release(&mut self, idx: usize) -> Option<V> {
        let slot = &mut self.slots[idx];
        let value = slot.value.take();
        slot.generation += 1;
        self.free.push(idx);
        value
    }

    fn validate(&self, handle: &EntryHandle) -> Result<usize> {
        if handle.queue != self.id {
            return Err(Error::ForeignHandle);
        }
        let slot = self.slots.get(handle.slot).ok_or(Error::ClosedHandle)?;
        if slot.generation != handle.generation || slot.value.is_none() {
            return Err(Error::ClosedHandle);
        }
        Ok(handle.slot)
    }

    /// A heap entry is live only while its slot still carries the same
    /// generation and key it was pushed with.
    fn is_live(&self, entry: &QueueEntry) -> bool {
        let slot = &self.slots[entry.slot];
        slot.generation == entry.generation && slot.key == entry.key && slot.value.is_some()
    }
}

impl<V> Default for BinaryQueue<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> PriorityQueue<V> for BinaryQueue<V> {
    fn insert(&mut self, key: i64, value: V) -> EntryHandle {
        let slot = self.alloc(key, value);
        let generation = self.slots[slot].generation;
        self.heap.push(QueueEntry {
            key,
            slot,
            generation,
        });
        self.len += 1;
        EntryHandle {
            queue: self.id,
            slot,
            generation,
        }
    }

    fn extract_min(&mut self) -> Result<(i64, V)> {
        while let Some(entry) = self.heap.pop() {
            if !self.is_live(&entry) {
                continue;
            }
            let value = self
                .release(entry.slot)
                .expect("live heap entry has a value");
            self.len -= 1;
            return Ok((entry.key, value));
        }
        Err(Error::EmptyQueue)
    }

    fn decrease_key(&mut self, handle: &EntryHandle, new_key: i64) -> Result<()> {
        let idx = self.validate(handle)?;
        let current = self.slots[idx].key;
        if new_key > current {
            return Err(Error::KeyNotDecreased {
                current,
                requested: new_key,
            });
        }
        if new_key == current {
            return Ok(());
        }
        // Remove-and-reinsert: rewriting the slot key strands the old heap
        // entry, which extract-min will discard as stale.
        self.slots[idx].key = new_key;
        self.heap.push(QueueEntry {
            key: new_key,
            slot: idx,
            generation: handle.generation,
        });
        Ok(())
    }

    fn remove(&mut self, handle: &EntryHandle) -> Result<V> {
        let idx = self.validate(handle)?;
        let value = self.release(idx).expect("validated entry has a value");
        self.len -= 1;
        Ok(value)
    }

    fn union(&mut self, other: &mut Self) {
        if other.slots.is_empty() {
            other.heap.clear();
            other.len = 0;
            return;
        }
        let offset = self.slots.len();
        self.slots.append(&mut other.slots);
        self.free.extend(other.free.drain(..).map(|i| i + offset));
        for entry in other.heap.drain() {
            self.heap.push(QueueEntry {
                key: entry.key,
                slot: entry.slot + offset,
                generation: entry.generation,
            });
        }
        self.len += other.len;
        other.len = 0;
    }

    fn len(&self) -> usize {
        self.len
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct QueueEntry {
    key: i64,
    slot: usize,
    generation: u64,
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by key.
        other
            .key
            .cmp(&self.key)
            .then_with(|| other.slot.cmp(&self.slot))
            .then_with(|| other.generation.cmp(&self.generation))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
