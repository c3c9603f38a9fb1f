use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by weft.
///
/// Per-cell drawing never errors: out-of-bounds writes are silently dropped
/// so paint code composes without propagating failures through the tree.
/// Errors here are either construction-time argument validation
/// ([`Error::Invalid`]) or failures in the terminal backend.
#[derive(PartialEq, Eq, Error, Debug, Clone)]
pub enum Error {
    #[error("render: {0}")]
    Render(String),
    #[error("invalid argument: {0}")]
    Invalid(String),
}
