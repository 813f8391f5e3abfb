use thiserror::Error;

/// Errors originating from routing, user input, or the storage layer.
///
/// `Validation` and `Conflict` are the two user-facing failure modes: they
/// abort the operation with no state change and normally travel back to the
/// page as a banner rather than an error page.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Conflict(String),

    #[error("Storage Error: {0}")]
    StoreError(String),

    #[error("Internal Server Error")]
    InternalError,
}
