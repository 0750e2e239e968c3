//! Error taxonomy for the engine layers.
//!
//! The repository and aggregator convert every store fault into a checked
//! result at their boundary; callers never see a panic from these layers.
//! The original system signalled outcomes as `(success, message)` pairs;
//! here the message is the `Ok` payload of mutations and the `Display` of
//! the error, so nothing is lost in the translation.

use medgraph_store::StoreError;

#[derive(Debug, thiserror::Error)]
pub enum OpError {
    /// A uniquely-keyed entity or single-valued relation already exists.
    #[error("{0}")]
    AlreadyExists(String),
    /// A referenced entity or relation does not exist.
    #[error("{0}")]
    NotFound(String),
    /// Connectivity or query execution failure in the underlying store.
    #[error("store failure: {0}")]
    Store(#[from] StoreError),
}

pub type OpResult<T> = std::result::Result<T, OpError>;

/// Errors raised by the graph projection engine.
///
/// `NoData` is a distinct signal rather than an empty view: an empty
/// visualization is a meaningful, user-facing condition and callers render
/// an empty-state message instead of a blank canvas.
#[derive(Debug, thiserror::Error)]
pub enum ProjectionError {
    #[error("no data to visualize")]
    NoData,
    #[error("store failure: {0}")]
    Store(#[from] StoreError),
}
