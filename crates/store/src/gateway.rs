//! The gateway interface the engine layers depend on.

use crate::{Row, StoreError};
use async_trait::async_trait;

/// Named query parameters. Values use the JSON data model; the concrete
/// gateway translates them to the store's own parameter types.
pub type Params = Vec<(&'static str, serde_json::Value)>;

/// Executes one parameterized query inside a scoped session and returns the
/// result rows.
///
/// Each call is one logical transaction against the store; no session is
/// held across calls, so implementations are safe to share between
/// concurrently running operations. Tests substitute an in-memory
/// implementation.
#[async_trait]
pub trait Gateway: Send + Sync {
    async fn run(&self, cypher: &str, params: Params) -> Result<Vec<Row>, StoreError>;
}
