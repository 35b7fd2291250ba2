//! Errors raised while constructing primitive values.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TypesError {
    #[error("invalid hash: {0}")]
    InvalidHash(String),
}
