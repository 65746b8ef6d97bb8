use peer_did_common::DocumentError;
use peer_did_encoding::EncodingError;
use thiserror::Error;

/// Reasons an ecnumbasis can't be built from decoded key bytes
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EcnumbasisError {
    #[error("Invalid key size: expected 32 bytes, got {0}")]
    InvalidKeySize(usize),
}

/// Error states for did:peer construction and resolution
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DIDPeerError {
    /// Empty or malformed identifier, or an unsupported numalgo
    #[error("Invalid peer DID: {0}")]
    InvalidPeerDID(String),

    /// The multibase prefix of an ecnumbasis isn't a supported base
    #[error("Unsupported multibase prefix: '{0}'")]
    UnsupportedBase(char),

    /// The multicodec prefix doesn't name an Ed25519 or X25519 public key
    #[error("Unknown multicodec: {0}")]
    UnknownCodec(String),

    #[error("Couldn't create ecnumbasis: {0}")]
    EcnumbasisCreation(#[from] EcnumbasisError),

    /// Service block isn't valid base64url, UTF-8 or service JSON
    #[error("Invalid service: {0}")]
    InvalidService(String),

    /// Serializing a service block failed
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// Raw key bytes couldn't be recovered from verification material
    #[error("Key decode error: {0}")]
    KeyDecode(String),
}

impl From<EncodingError> for DIDPeerError {
    fn from(err: EncodingError) -> Self {
        match err {
            EncodingError::UnsupportedBase(prefix) => DIDPeerError::UnsupportedBase(prefix),
            EncodingError::InvalidMulticodec(reason) => DIDPeerError::UnknownCodec(reason),
            EncodingError::InvalidBase58(_) | EncodingError::InvalidBase64(_) => {
                DIDPeerError::KeyDecode(err.to_string())
            }
        }
    }
}

impl From<DocumentError> for DIDPeerError {
    fn from(err: DocumentError) -> Self {
        DIDPeerError::KeyDecode(err.to_string())
    }
}
