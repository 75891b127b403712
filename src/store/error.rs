//! Store error types.

use thiserror::Error;

/// Errors that can occur reading or writing the local store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing file could not be read or written
    #[error("store I/O failed for key '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// The stored value is not a valid question document
    #[error("stored value for key '{key}' is malformed: {source}")]
    Parse {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// The value to store could not be encoded
    #[error("failed to encode value for key '{key}': {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}
