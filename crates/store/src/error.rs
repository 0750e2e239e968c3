#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to connect to graph store: {0}")]
    Connect(neo4rs::Error),
    #[error("query execution failed: {0}")]
    Query(neo4rs::Error),
    #[error("failed to decode result row: {0}")]
    Decode(String),
    #[error("missing field '{0}' in result row")]
    MissingField(String),
    #[error("field '{field}' has unexpected type (expected {expected})")]
    FieldType {
        field: String,
        expected: &'static str,
    },
    #[error("configuration error: {0}")]
    Config(String),
}
