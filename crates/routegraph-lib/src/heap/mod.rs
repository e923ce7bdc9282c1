//! Priority structures backing the open set.
//!
//! Two interchangeable implementations sit behind [`PriorityQueue`]:
//!
//! - [`SkewHeap`] - a self-adjusting mergeable heap with native decrease-key,
//!   the default open set for every search strategy.
//! - [`BinaryQueue`] - a `std::collections::BinaryHeap` wrapper that emulates
//!   decrease-key by remove-and-reinsert. It tombstones stale entries so the
//!   emulation stays correct, but it exists for benchmarking against the skew
//!   heap, not as the default: naive duplicate-insert schemes that skip stale
//!   invalidation silently produce wrong results.
//!
//! Neither structure is safe for concurrent mutation; callers must
//! synchronise externally or keep a queue private to one search invocation.

mod binary;
mod skew;

pub use binary::BinaryQueue;
pub use skew::SkewHeap;

use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::Result;

static NEXT_QUEUE_ID: AtomicU64 = AtomicU64::new(1);

/// Allocate a process-unique queue identifier so handles can be checked for
/// ownership in O(1).
fn next_queue_id() -> u64 {
    NEXT_QUEUE_ID.fetch_add(1, Ordering::Relaxed)
}

/// Opaque handle to a live queue entry, returned on insertion.
///
/// The handle names the issuing queue, the entry's arena slot, and the slot's
/// generation at insertion time. It becomes closed once the entry is
/// extracted or removed; using it afterwards fails with
/// [`Error::ClosedHandle`](crate::Error::ClosedHandle), and presenting it to
/// a different queue fails with
/// [`Error::ForeignHandle`](crate::Error::ForeignHandle).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntryHandle {
    queue: u64,
    slot: usize,
    generation: u64,
}

/// Mergeable min-priority queue keyed by `i64`, supporting decrease-key.
pub trait PriorityQueue<V> {
    /// Insert an entry, returning a handle for later key adjustment.
    fn insert(&mut self, key: i64, value: V) -> EntryHandle;

    /// Remove and return the entry with the globally minimum key.
    ///
    /// Fails with [`Error::EmptyQueue`](crate::Error::EmptyQueue) when the
    /// queue holds no entries.
    fn extract_min(&mut self) -> Result<(i64, V)>;

    /// Lower the key of a live entry in place.
    ///
    /// This is a decrease-only operation: a `new_key` greater than the
    /// current key fails with
    /// [`Error::KeyNotDecreased`](crate::Error::KeyNotDecreased) and leaves
    /// the queue untouched.
    fn decrease_key(&mut self, handle: &EntryHandle, new_key: i64) -> Result<()>;

    /// Remove a live entry, returning its value.
    fn remove(&mut self, handle: &EntryHandle) -> Result<V>;

    /// Merge `other` into `self` in place, leaving `other` empty. Handles
    /// issued by the donor are invalidated.
    fn union(&mut self, other: &mut Self)
    where
        Self: Sized;

    /// Number of live entries.
    fn len(&self) -> usize;

    /// Whether the queue holds no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
