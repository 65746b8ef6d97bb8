//! DID Verification Method Definition
//! <https://www.w3.org/TR/cid-1.0/#verification-methods>
use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use url::Url;

use crate::{
    DocumentError,
    material::{Jwk, KeyType, MaterialValue, VerificationMaterial, VerificationMaterialType},
};

const PUBLIC_KEY_JWK: &str = "publicKeyJwk";
const PUBLIC_KEY_BASE58: &str = "publicKeyBase58";
const PUBLIC_KEY_MULTIBASE: &str = "publicKeyMultibase";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VerificationMethod {
    pub id: Url,

    #[serde(rename = "type")]
    pub type_: String,

    pub controller: Url,

    /// Key properties (publicKeyJwk, publicKeyBase58 or publicKeyMultibase)
    #[serde(flatten)]
    pub property_set: HashMap<String, Value>,
}

impl VerificationMethod {
    /// Publishes `material` under the property matching its format
    pub fn from_material(id: Url, controller: Url, material: &VerificationMaterial) -> Self {
        let (name, value) = match material.value() {
            MaterialValue::Jwk(jwk) => (
                PUBLIC_KEY_JWK,
                serde_json::json!({ "kty": jwk.kty, "crv": jwk.crv, "x": jwk.x }),
            ),
            MaterialValue::Base58(key) => (PUBLIC_KEY_BASE58, Value::String(key.clone())),
            MaterialValue::Multibase(key) => (PUBLIC_KEY_MULTIBASE, Value::String(key.clone())),
        };

        VerificationMethod {
            id,
            type_: material.type_().method_type().to_string(),
            controller,
            property_set: HashMap::from([(name.to_string(), value)]),
        }
    }

    /// Reconstructs the verification material published by this method
    pub fn material(&self) -> Result<VerificationMaterial, DocumentError> {
        if let Some(jwk) = self.property_set.get(PUBLIC_KEY_JWK) {
            let jwk: Jwk = serde_json::from_value(jwk.clone())
                .map_err(|e| DocumentError::VM(format!("Invalid publicKeyJwk: {e}")))?;
            let key_type = KeyType::from_curve(&jwk.crv)
                .ok_or_else(|| DocumentError::VM(format!("Unsupported JWK curve: {}", jwk.crv)))?;
            let type_ = self.material_type(key_type)?;
            return Ok(VerificationMaterial::from_value(
                type_,
                MaterialValue::Jwk(jwk),
            ));
        }

        let key_type = match self.type_.as_str() {
            "Ed25519VerificationKey2018" | "Ed25519VerificationKey2020" => KeyType::Ed25519,
            "X25519KeyAgreementKey2019" | "X25519KeyAgreementKey2020" => KeyType::X25519,
            other => {
                return Err(DocumentError::VM(format!(
                    "VerificationMethod type ({other}) isn't supported!"
                )));
            }
        };
        let type_ = self.material_type(key_type)?;

        let value = if let Some(key) = self.string_property(PUBLIC_KEY_BASE58) {
            MaterialValue::Base58(key.to_string())
        } else if let Some(key) = self.string_property(PUBLIC_KEY_MULTIBASE) {
            MaterialValue::Multibase(key.to_string())
        } else {
            return Err(DocumentError::VM(format!(
                "{} type, but does not include a public key attribute",
                self.type_
            )));
        };

        Ok(VerificationMaterial::from_value(type_, value))
    }

    /// Attempts to extract Public Key Bytes from the Verification Method
    pub fn get_public_key_bytes(&self) -> Result<Vec<u8>, DocumentError> {
        self.material()?.decoded_key()
    }

    fn material_type(&self, key_type: KeyType) -> Result<VerificationMaterialType, DocumentError> {
        VerificationMaterialType::from_method_type(&self.type_, key_type).ok_or_else(|| {
            DocumentError::VM(format!(
                "VerificationMethod type ({}) can't carry a {key_type} key",
                self.type_
            ))
        })
    }

    fn string_property(&self, name: &str) -> Option<&str> {
        self.property_set.get(name).and_then(Value::as_str)
    }
}

/// https://www.w3.org/TR/cid-1.0/#verification-relationships
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum VerificationRelationship {
    /// Reference to a Verification Method
    Reference(Url),
    /// Embedded Verification Method
    VerificationMethod(Box<VerificationMethod>),
}

impl VerificationRelationship {
    /// Returns the id of the verification-method
    pub fn get_id(&self) -> &str {
        match self {
            VerificationRelationship::Reference(url) => url.as_str(),
            VerificationRelationship::VerificationMethod(map) => map.id.as_str(),
        }
    }
}
