use thiserror::Error;

/// Failure from the external store collaborator. Propagated unmodified;
/// the query core performs no retries and no partial recovery.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("store error: {0}")]
    Backend(String),
}

#[derive(Error, Debug)]
pub enum HublineError {
    /// The caller failed the login precondition. The operation never
    /// touches the store.
    #[error("unauthorized")]
    Unauthorized,

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("configuration error: {0}")]
    Config(String),
}
