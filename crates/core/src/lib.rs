//! # MedGraph Core
//!
//! Aggregation and projection engine for the MedGraph patient–disease
//! knowledge graph.
//!
//! This crate contains the engine layers sitting atop the store gateway:
//! - [`EntityRepository`]: CRUD and existence checks over Person, Disease
//!   and the `HAS_DISEASE` relation
//! - [`MedicalRecordService`]: per-patient record aggregation, diagnosis
//!   lifecycle, population statistics and the medical timeline
//! - [`GraphProjector`]: deduplicated, styled node/edge views for rendering
//! - [`advisory`]: context assembly for the external text-completion
//!   collaborator
//!
//! **No transport concerns**: HTTP routing, UI rendering and the store's own
//! query execution are external collaborators. Every public operation runs
//! one scoped session sequence against the injected [`Gateway`] and holds no
//! shared mutable state, so services are safe to invoke concurrently.
//!
//! [`Gateway`]: medgraph_store::Gateway

pub mod advisory;
pub mod error;
pub mod projection;
pub mod record;
pub mod repository;
pub mod stats;
pub mod style;
pub mod timeline;

pub(crate) mod cypher;

#[cfg(test)]
pub(crate) mod testutil;

pub use advisory::{MedicalAssistant, TextCompletion};
pub use error::{OpError, OpResult, ProjectionError};
pub use projection::{GraphBuilder, GraphProjector};
pub use record::MedicalRecordService;
pub use repository::EntityRepository;
