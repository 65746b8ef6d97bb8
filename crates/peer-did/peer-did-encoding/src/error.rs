//! Encoding errors

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodingError {
    #[error("Unsupported multibase prefix: '{0}'")]
    UnsupportedBase(char),

    #[error("Invalid base58 encoding: {0}")]
    InvalidBase58(String),

    #[error("Invalid base64url encoding: {0}")]
    InvalidBase64(String),

    #[error("Invalid multicodec: {0}")]
    InvalidMulticodec(String),
}
