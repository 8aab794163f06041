use thiserror::Error;

/// Errors that can occur while ingesting front-end output.
///
/// The linking core itself never fails: unresolvable callees, non-local
/// callees, and arity mismatches are all normal no-op outcomes, not errors.
/// Only decoding a malformed translation-unit document is fallible.
#[derive(Error, Debug)]
pub enum FeatLinkError {
    #[error("ingest error: {message} (path: {path})")]
    Ingest { message: String, path: String },

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias for results using `FeatLinkError`.
pub type Result<T> = std::result::Result<T, FeatLinkError>;
