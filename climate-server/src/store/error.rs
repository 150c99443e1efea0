//! Data store error types.

/// Errors from the measurement store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The store could not be reached or a statement failed
    #[error("data store unavailable: {0}")]
    Unavailable(#[from] sqlx::Error),

    /// The connection string could not be parsed
    #[error("invalid database URL {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: sqlx::Error,
    },
}
