/*!
 * Ecnumbasis: a single public key as `multibase(multicodec-prefix || key)`
 *
 * Keys are always written as base58btc (`z...`); decoding accepts any base known
 * to `peer-did-encoding` and reports which one was used.
 */

use peer_did_common::{
    AgreementKeyType, AuthenticationKeyType, KEY_LENGTH, KeyFormat, KeyType, VerificationMaterial,
    VerificationMaterialType,
};
use peer_did_encoding::{MultiEncoded, encode_multikey, multibase};

use crate::errors::{DIDPeerError, EcnumbasisError};

/// Encodes the public key held by `material`
pub fn encode(material: &VerificationMaterial) -> Result<String, DIDPeerError> {
    let key = material.decoded_key()?;
    validate_key_length(&key)?;

    Ok(encode_multikey(material.key_type().codec(), &key))
}

/// Decodes an ecnumbasis into verification material published in `format`
///
/// Returns the multibase prefix character of the input alongside the material.
pub fn decode(
    ecnumbasis: &str,
    format: KeyFormat,
) -> Result<(char, VerificationMaterial), DIDPeerError> {
    let (base, bytes) = multibase::decode(ecnumbasis)?;
    let encoded = MultiEncoded::new(&bytes)?;

    let key_type = KeyType::from_codec(encoded.codec_type()).ok_or_else(|| {
        DIDPeerError::UnknownCodec(format!("0x{:x} is not a did:peer key", encoded.codec()))
    })?;
    validate_key_length(encoded.data())?;

    let material =
        VerificationMaterial::from_key(material_type(format, key_type), encoded.data());
    Ok((base.prefix(), material))
}

/// Verification method type used for a key of `key_type` published as `format`
pub fn material_type(format: KeyFormat, key_type: KeyType) -> VerificationMaterialType {
    match (format, key_type) {
        (KeyFormat::Jwk, KeyType::X25519) => {
            VerificationMaterialType::Agreement(AgreementKeyType::JsonWebKey2020)
        }
        (KeyFormat::Jwk, KeyType::Ed25519) => {
            VerificationMaterialType::Authentication(AuthenticationKeyType::JsonWebKey2020)
        }
        (KeyFormat::Base58, KeyType::X25519) => {
            VerificationMaterialType::Agreement(AgreementKeyType::X25519KeyAgreementKey2019)
        }
        (KeyFormat::Base58, KeyType::Ed25519) => VerificationMaterialType::Authentication(
            AuthenticationKeyType::Ed25519VerificationKey2018,
        ),
        (KeyFormat::Multibase, KeyType::X25519) => {
            VerificationMaterialType::Agreement(AgreementKeyType::X25519KeyAgreementKey2020)
        }
        (KeyFormat::Multibase, KeyType::Ed25519) => VerificationMaterialType::Authentication(
            AuthenticationKeyType::Ed25519VerificationKey2020,
        ),
    }
}

fn validate_key_length(key: &[u8]) -> Result<(), EcnumbasisError> {
    if key.len() != KEY_LENGTH {
        return Err(EcnumbasisError::InvalidKeySize(key.len()));
    }
    Ok(())
}
