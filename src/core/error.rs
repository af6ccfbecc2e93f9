//! Error types.
//!
//! Gameplay never fails: an empty deck and out-of-state commands are
//! ordinary outcomes, not errors. These types cover the edges where bad
//! input can arrive, namely card data and configuration.

use std::path::PathBuf;

use thiserror::Error;

use crate::cards::CardId;

/// Failure to build a valid card set.
#[derive(Debug, Error)]
pub enum CardSetError {
    #[error("card set is empty")]
    Empty,
    #[error("duplicate card id {0}")]
    DuplicateId(CardId),
    #[error("duplicate card name {0:?}")]
    DuplicateName(String),
    #[error("failed to read card list {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed card list: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Errors surfaced by the caller's public API.
#[derive(Debug, Error)]
pub enum CallerError {
    #[error("interval must be greater than zero")]
    ZeroInterval,
    #[error(transparent)]
    CardSet(#[from] CardSetError),
}
