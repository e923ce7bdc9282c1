use thiserror::Error;

use crate::graph::NodeId;

/// Convenient result alias for the routegraph library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a graph lookup is asked for an identifier it does not know.
    #[error("no node with id {id} in graph")]
    NodeNotFound { id: NodeId },

    /// Raised when extract-min is called on an empty priority queue.
    #[error("extract-min called on an empty priority queue")]
    EmptyQueue,

    /// Raised when decrease-key is asked to move a key upwards.
    #[error("decrease-key from {current} to {requested} would increase the key")]
    KeyNotDecreased { current: i64, requested: i64 },

    /// Raised when an entry handle was issued by a different queue instance.
    #[error("entry handle belongs to a different priority queue")]
    ForeignHandle,

    /// Raised when an entry handle refers to an entry that was already
    /// extracted or removed.
    #[error("entry handle is closed: its entry was already extracted or removed")]
    ClosedHandle,

    /// Raised when the best-under-criterion finder accepted no route. The
    /// caller of that strategy asserts reachability, so an empty result is a
    /// contract failure rather than a recoverable outcome.
    #[error("no route satisfied the acceptance criterion")]
    NoRouteFound,
}
