//! Bolt-backed gateway implementation.

use crate::{Gateway, Params, Row, StoreError};
use async_trait::async_trait;
use neo4rs::{query, Graph};
use serde_json::Value;

/// Gateway backed by a Neo4j Bolt connection pool.
///
/// The pool is process-wide: created once at startup and never torn down
/// except at process exit. Each [`Gateway::run`] call checks a connection
/// out of the pool for the duration of one query and releases it on every
/// exit path. Timeouts are delegated to the driver's own configuration.
pub struct GraphClient {
    graph: Graph,
}

impl GraphClient {
    /// Connect to the store described by `config`.
    pub async fn connect(config: &crate::StoreConfig) -> Result<Self, StoreError> {
        let graph = Graph::new(config.uri(), config.username(), config.password())
            .await
            .map_err(StoreError::Connect)?;
        tracing::info!(uri = config.uri(), "connected to graph store");
        Ok(Self { graph })
    }
}

#[async_trait]
impl Gateway for GraphClient {
    async fn run(&self, cypher: &str, params: Params) -> Result<Vec<Row>, StoreError> {
        let mut q = query(cypher);
        for (name, value) in params {
            q = match value {
                Value::Null => q.param(name, Option::<String>::None),
                Value::Bool(b) => q.param(name, b),
                Value::Number(n) => {
                    if let Some(i) = n.as_i64() {
                        q.param(name, i)
                    } else {
                        q.param(name, n.as_f64().unwrap_or(f64::NAN))
                    }
                }
                Value::String(s) => q.param(name, s),
                other => {
                    // Lists and nested objects never appear as parameters in
                    // this system's query set.
                    return Err(StoreError::Decode(format!(
                        "unsupported parameter type for '{name}': {other}"
                    )));
                }
            };
        }

        let mut stream = self.graph.execute(q).await.map_err(StoreError::Query)?;
        let mut rows = Vec::new();
        while let Some(row) = stream.next().await.map_err(StoreError::Query)? {
            let value: Value = row
                .to()
                .map_err(|e| StoreError::Decode(e.to_string()))?;
            rows.push(Row::from_value(value)?);
        }
        Ok(rows)
    }
}
