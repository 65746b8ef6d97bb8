/*!
*   DID Document Definition
*/

use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

use crate::{
    service::Service,
    verification_method::{VerificationMethod, VerificationRelationship},
};

pub mod document;
pub mod material;
pub mod peer;
pub mod service;
pub mod verification_method;

pub use material::{
    AgreementKeyType, AuthenticationKeyType, Jwk, KEY_LENGTH, KeyFormat, KeyType, MaterialValue,
    VerificationMaterial, VerificationMaterialType,
};
pub use peer::{PeerNumAlgo, PeerPurpose};

/// Base context of every DID Document
pub const DID_CONTEXT_V1: &str = "https://www.w3.org/ns/did/v1";

#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("Verification method error: {0}")]
    VM(String),
    #[error("Couldn't decode key material: {0}")]
    KeyDecode(String),
}

/// A [DID Document]
///
/// [DID Document]: https://www.w3.org/TR/did-1.1/
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// DID Subject Identifier
    /// <https://www.w3.org/TR/cid-1.0/#subjects>
    pub id: Url,

    #[serde(rename = "@context")]
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub context: Vec<String>,

    /// https://www.w3.org/TR/cid-1.0/#verification-methods
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub verification_method: Vec<VerificationMethod>,

    /// https://www.w3.org/TR/cid-1.0/#authentication
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub authentication: Vec<VerificationRelationship>,

    /// https://www.w3.org/TR/cid-1.0/#assertion
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub assertion_method: Vec<VerificationRelationship>,

    /// https://www.w3.org/TR/cid-1.0/#key-agreement
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub key_agreement: Vec<VerificationRelationship>,

    /// Set of Services
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub service: Vec<Service>,
}

impl Document {
    /// An empty document for the given subject
    pub fn new(id: Url) -> Self {
        Document {
            id,
            context: vec![DID_CONTEXT_V1.to_string()],
            verification_method: Vec::new(),
            authentication: Vec::new(),
            assertion_method: Vec::new(),
            key_agreement: Vec::new(),
            service: Vec::new(),
        }
    }

    /// Adds a context entry unless it is already present
    pub fn add_context(&mut self, context: &str) {
        if !self.context.iter().any(|c| c == context) {
            self.context.push(context.to_string());
        }
    }
}
