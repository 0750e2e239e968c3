//! Store connection configuration.
//!
//! Settings are resolved once at process startup and then passed into the
//! gateway. The intent is to avoid reading process-wide environment
//! variables during request handling, which can lead to inconsistent
//! behaviour in multi-threaded runtimes and test harnesses.

use crate::StoreError;

/// Connection settings for the external graph store.
#[derive(Clone, Debug)]
pub struct StoreConfig {
    uri: String,
    username: String,
    password: String,
}

impl StoreConfig {
    /// Create a new `StoreConfig` from explicit values.
    pub fn new(
        uri: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, StoreError> {
        let uri = uri.into();
        if uri.trim().is_empty() {
            return Err(StoreError::Config("store URI cannot be empty".into()));
        }
        Ok(Self {
            uri,
            username: username.into(),
            password: password.into(),
        })
    }

    /// Resolve configuration from the environment.
    ///
    /// Reads `NEO4J_URI`, `NEO4J_USERNAME` and `NEO4J_PASSWORD`. Intended to
    /// be called once from the binary's entry point, after `.env` loading.
    pub fn from_env() -> Result<Self, StoreError> {
        fn required(name: &'static str) -> Result<String, StoreError> {
            std::env::var(name)
                .map_err(|_| StoreError::Config(format!("missing environment variable {name}")))
        }

        Self::new(
            required("NEO4J_URI")?,
            required("NEO4J_USERNAME")?,
            required("NEO4J_PASSWORD")?,
        )
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}
