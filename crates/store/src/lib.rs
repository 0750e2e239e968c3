//! # MedGraph Store
//!
//! Store gateway for the MedGraph patient–disease knowledge graph.
//!
//! This crate owns everything that touches the external graph store:
//! - [`StoreConfig`]: connection settings resolved once at process startup
//! - [`Gateway`]: the one-method interface the engine layers depend on
//! - [`GraphClient`]: the Bolt implementation backed by `neo4rs`
//! - [`Row`]: typed access to result rows, so downstream components never
//!   handle untyped field mappings
//!
//! **No domain concerns**: Cypher templates and record mapping live in
//! `medgraph-core`.

mod client;
mod config;
mod error;
mod gateway;
mod row;

pub use client::GraphClient;
pub use config::StoreConfig;
pub use error::StoreError;
pub use gateway::{Gateway, Params};
pub use row::Row;
