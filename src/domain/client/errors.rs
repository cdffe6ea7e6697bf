//! Client Context - Errors

use thiserror::Error;

use super::ClientField;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    #[error("missing ID")]
    MissingId,

    #[error("malformed client ID: {0}")]
    MalformedId(String),

    #[error("missing {0}")]
    MissingField(ClientField),
}
