/// Domain-level error taxonomy shared by all crates.
///
/// Resource absence and not-owned are collapsed into a single [`NotFound`]
/// variant so callers cannot probe ownership by enumeration.
///
/// [`NotFound`]: CoreError::NotFound
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{entity} not found")]
    NotFound { entity: &'static str },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Upstream service error: {0}")]
    Upstream(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
