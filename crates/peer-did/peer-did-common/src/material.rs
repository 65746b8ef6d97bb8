//! Verification material: a public key together with its purpose and the
//! representation it is published in.
//!
//! The representation (`KeyFormat`) is never stored separately, it is implied by
//! the verification method type. Every mapping below is an exhaustive match so
//! adding a key type or format forces each of them to be revisited.

use std::fmt;

use base64::{Engine, prelude::BASE64_URL_SAFE_NO_PAD};
use peer_did_encoding::{Codec, decode_multikey_with_codec, encode_multikey};
use serde::{Deserialize, Serialize};

use crate::DocumentError;

/// Raw public key length for every supported key type
pub const KEY_LENGTH: usize = 32;

/// Supported public key algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyType {
    Ed25519,
    X25519,
}

impl KeyType {
    pub fn codec(self) -> Codec {
        match self {
            KeyType::Ed25519 => Codec::Ed25519Pub,
            KeyType::X25519 => Codec::X25519Pub,
        }
    }

    pub fn from_codec(codec: Codec) -> Option<Self> {
        match codec {
            Codec::Ed25519Pub => Some(KeyType::Ed25519),
            Codec::X25519Pub => Some(KeyType::X25519),
            Codec::Unknown(_) => None,
        }
    }

    /// JWK `crv` value
    pub fn curve(self) -> &'static str {
        match self {
            KeyType::Ed25519 => "Ed25519",
            KeyType::X25519 => "X25519",
        }
    }

    pub fn from_curve(curve: &str) -> Option<Self> {
        match curve {
            "Ed25519" => Some(KeyType::Ed25519),
            "X25519" => Some(KeyType::X25519),
            _ => None,
        }
    }
}

impl fmt::Display for KeyType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.curve())
    }
}

/// How a public key is represented inside a verification method
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyFormat {
    Jwk,
    Base58,
    #[default]
    Multibase,
}

impl fmt::Display for KeyFormat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            KeyFormat::Jwk => write!(f, "jwk"),
            KeyFormat::Base58 => write!(f, "base58"),
            KeyFormat::Multibase => write!(f, "multibase"),
        }
    }
}

/// Verification method types usable for authentication (Ed25519 keys)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuthenticationKeyType {
    JsonWebKey2020,
    Ed25519VerificationKey2018,
    Ed25519VerificationKey2020,
}

/// Verification method types usable for key agreement (X25519 keys)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgreementKeyType {
    JsonWebKey2020,
    X25519KeyAgreementKey2019,
    X25519KeyAgreementKey2020,
}

/// Purpose of a key crossed with the verification method type it is published as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VerificationMaterialType {
    Authentication(AuthenticationKeyType),
    Agreement(AgreementKeyType),
}

impl VerificationMaterialType {
    pub fn key_type(&self) -> KeyType {
        match self {
            VerificationMaterialType::Authentication(_) => KeyType::Ed25519,
            VerificationMaterialType::Agreement(_) => KeyType::X25519,
        }
    }

    pub fn format(&self) -> KeyFormat {
        use AgreementKeyType as Ag;
        use AuthenticationKeyType as Au;
        use VerificationMaterialType::*;

        match self {
            Authentication(Au::JsonWebKey2020) | Agreement(Ag::JsonWebKey2020) => KeyFormat::Jwk,
            Authentication(Au::Ed25519VerificationKey2018)
            | Agreement(Ag::X25519KeyAgreementKey2019) => KeyFormat::Base58,
            Authentication(Au::Ed25519VerificationKey2020)
            | Agreement(Ag::X25519KeyAgreementKey2020) => KeyFormat::Multibase,
        }
    }

    /// The W3C verification method `type` value
    pub fn method_type(&self) -> &'static str {
        use AgreementKeyType as Ag;
        use AuthenticationKeyType as Au;
        use VerificationMaterialType::*;

        match self {
            Authentication(Au::JsonWebKey2020) | Agreement(Ag::JsonWebKey2020) => {
                "JsonWebKey2020"
            }
            Authentication(Au::Ed25519VerificationKey2018) => "Ed25519VerificationKey2018",
            Authentication(Au::Ed25519VerificationKey2020) => "Ed25519VerificationKey2020",
            Agreement(Ag::X25519KeyAgreementKey2019) => "X25519KeyAgreementKey2019",
            Agreement(Ag::X25519KeyAgreementKey2020) => "X25519KeyAgreementKey2020",
        }
    }

    /// JSON-LD context defining the verification method type
    pub fn context(&self) -> &'static str {
        use AgreementKeyType as Ag;
        use AuthenticationKeyType as Au;
        use VerificationMaterialType::*;

        match self {
            Authentication(Au::JsonWebKey2020) | Agreement(Ag::JsonWebKey2020) => {
                "https://w3id.org/security/suites/jws-2020/v1"
            }
            Authentication(Au::Ed25519VerificationKey2018) => {
                "https://w3id.org/security/suites/ed25519-2018/v1"
            }
            Authentication(Au::Ed25519VerificationKey2020) => {
                "https://w3id.org/security/suites/ed25519-2020/v1"
            }
            Agreement(Ag::X25519KeyAgreementKey2019) => {
                "https://w3id.org/security/suites/x25519-2019/v1"
            }
            Agreement(Ag::X25519KeyAgreementKey2020) => {
                "https://w3id.org/security/suites/x25519-2020/v1"
            }
        }
    }

    /// Reverse of [`method_type`](Self::method_type). `JsonWebKey2020` is shared by both
    /// purposes, so the key type decides which one it is.
    pub fn from_method_type(name: &str, key_type: KeyType) -> Option<Self> {
        use AgreementKeyType as Ag;
        use AuthenticationKeyType as Au;
        use VerificationMaterialType::*;

        let material_type = match (name, key_type) {
            ("JsonWebKey2020", KeyType::Ed25519) => Authentication(Au::JsonWebKey2020),
            ("JsonWebKey2020", KeyType::X25519) => Agreement(Ag::JsonWebKey2020),
            ("Ed25519VerificationKey2018", KeyType::Ed25519) => {
                Authentication(Au::Ed25519VerificationKey2018)
            }
            ("Ed25519VerificationKey2020", KeyType::Ed25519) => {
                Authentication(Au::Ed25519VerificationKey2020)
            }
            ("X25519KeyAgreementKey2019", KeyType::X25519) => {
                Agreement(Ag::X25519KeyAgreementKey2019)
            }
            ("X25519KeyAgreementKey2020", KeyType::X25519) => {
                Agreement(Ag::X25519KeyAgreementKey2020)
            }
            _ => return None,
        };
        Some(material_type)
    }
}

/// Public JSON Web Key of an OKP curve
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Jwk {
    pub kty: String,
    pub crv: String,
    pub x: String,
}

impl Jwk {
    pub fn okp(key_type: KeyType, public_key: &[u8]) -> Self {
        Jwk {
            kty: "OKP".to_string(),
            crv: key_type.curve().to_string(),
            x: BASE64_URL_SAFE_NO_PAD.encode(public_key),
        }
    }
}

/// The encoded key value, one variant per [`KeyFormat`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MaterialValue {
    Jwk(Jwk),
    Base58(String),
    Multibase(String),
}

impl MaterialValue {
    pub fn format(&self) -> KeyFormat {
        match self {
            MaterialValue::Jwk(_) => KeyFormat::Jwk,
            MaterialValue::Base58(_) => KeyFormat::Base58,
            MaterialValue::Multibase(_) => KeyFormat::Multibase,
        }
    }
}

/// A public key, what it is used for, and how it is represented
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationMaterial {
    type_: VerificationMaterialType,
    value: MaterialValue,
}

impl VerificationMaterial {
    /// Wraps raw public key bytes, encoding them in the format implied by `type_`
    pub fn from_key(type_: VerificationMaterialType, public_key: &[u8]) -> Self {
        let key_type = type_.key_type();
        let value = match type_.format() {
            KeyFormat::Jwk => MaterialValue::Jwk(Jwk::okp(key_type, public_key)),
            KeyFormat::Base58 => MaterialValue::Base58(bs58::encode(public_key).into_string()),
            KeyFormat::Multibase => {
                MaterialValue::Multibase(encode_multikey(key_type.codec(), public_key))
            }
        };

        VerificationMaterial { type_, value }
    }

    /// Wraps an already encoded value. Nothing is validated until
    /// [`decoded_key`](Self::decoded_key) is called.
    pub fn from_value(type_: VerificationMaterialType, value: MaterialValue) -> Self {
        VerificationMaterial { type_, value }
    }

    pub fn type_(&self) -> VerificationMaterialType {
        self.type_
    }

    pub fn value(&self) -> &MaterialValue {
        &self.value
    }

    pub fn format(&self) -> KeyFormat {
        self.type_.format()
    }

    pub fn key_type(&self) -> KeyType {
        self.type_.key_type()
    }

    /// Recovers the raw public key bytes
    pub fn decoded_key(&self) -> Result<Vec<u8>, DocumentError> {
        let key_type = self.key_type();
        match (self.format(), &self.value) {
            (KeyFormat::Jwk, MaterialValue::Jwk(jwk)) => {
                if KeyType::from_curve(&jwk.crv) != Some(key_type) {
                    return Err(DocumentError::KeyDecode(format!(
                        "JWK curve ({}) doesn't match key type ({key_type})",
                        jwk.crv
                    )));
                }
                BASE64_URL_SAFE_NO_PAD
                    .decode(jwk.x.as_bytes())
                    .map_err(|e| DocumentError::KeyDecode(format!("JWK x: {e}")))
            }
            (KeyFormat::Base58, MaterialValue::Base58(encoded)) => bs58::decode(encoded)
                .into_vec()
                .map_err(|e| DocumentError::KeyDecode(format!("base58: {e}"))),
            (KeyFormat::Multibase, MaterialValue::Multibase(encoded)) => {
                let (_, codec, key) = decode_multikey_with_codec(encoded)
                    .map_err(|e| DocumentError::KeyDecode(format!("multibase: {e}")))?;
                if codec != key_type.codec() {
                    return Err(DocumentError::KeyDecode(format!(
                        "multikey codec (0x{:x}) doesn't match key type ({key_type})",
                        codec.to_u64()
                    )));
                }
                Ok(key)
            }
            (expected, value) => Err(DocumentError::KeyDecode(format!(
                "{} expects a {expected} value, found {}",
                self.type_.method_type(),
                value.format()
            ))),
        }
    }
}
