//! Multibase encoding/decoding utilities
//!
//! Multibase is a protocol for self-describing base encodings.
//! The first character indicates the encoding used.
//!
//! See: <https://github.com/multiformats/multibase>

use base64::{Engine, prelude::BASE64_URL_SAFE_NO_PAD};

use crate::EncodingError;
use crate::multicodec::{Codec, MultiEncoded, MultiEncodedBuf};

/// Multibase prefix for base58btc (Bitcoin alphabet)
pub const BASE58BTC_PREFIX: char = 'z';

/// Multibase prefix for base64url without padding
pub const BASE64URL_PREFIX: char = 'u';

/// Supported multibase encodings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Base {
    Base58Btc,
    Base64Url,
}

impl Base {
    /// The leading character that identifies this base
    pub fn prefix(self) -> char {
        match self {
            Base::Base58Btc => BASE58BTC_PREFIX,
            Base::Base64Url => BASE64URL_PREFIX,
        }
    }

    pub fn from_prefix(prefix: char) -> Option<Self> {
        match prefix {
            BASE58BTC_PREFIX => Some(Base::Base58Btc),
            BASE64URL_PREFIX => Some(Base::Base64Url),
            _ => None,
        }
    }

    /// Encode bytes with this base, prefix included
    pub fn encode(self, bytes: &[u8]) -> String {
        let body = match self {
            Base::Base58Btc => bs58::encode(bytes).into_string(),
            Base::Base64Url => BASE64_URL_SAFE_NO_PAD.encode(bytes),
        };
        format!("{}{body}", self.prefix())
    }

    /// Decode a payload that has already had its prefix removed
    fn decode_body(self, body: &str) -> Result<Vec<u8>, EncodingError> {
        match self {
            Base::Base58Btc => bs58::decode(body)
                .into_vec()
                .map_err(|e| EncodingError::InvalidBase58(e.to_string())),
            Base::Base64Url => BASE64_URL_SAFE_NO_PAD
                .decode(body.trim_end_matches('='))
                .map_err(|e| EncodingError::InvalidBase64(e.to_string())),
        }
    }
}

/// Decode a multibase string, reporting which base was used
pub fn decode(s: &str) -> Result<(Base, Vec<u8>), EncodingError> {
    let mut chars = s.chars();
    let prefix = chars.next().unwrap_or('\0');
    let base = Base::from_prefix(prefix).ok_or(EncodingError::UnsupportedBase(prefix))?;

    Ok((base, base.decode_body(chars.as_str())?))
}

/// Decode a base58btc multibase string (must start with 'z')
///
/// Returns the decoded bytes without the prefix.
pub fn decode_base58btc(s: &str) -> Result<Vec<u8>, EncodingError> {
    let Some(encoded) = s.strip_prefix(BASE58BTC_PREFIX) else {
        let prefix = s.chars().next().unwrap_or('\0');
        return Err(EncodingError::UnsupportedBase(prefix));
    };

    Base::Base58Btc.decode_body(encoded)
}

/// Encode bytes as base58btc with multibase prefix 'z'
pub fn encode_base58btc(bytes: &[u8]) -> String {
    Base::Base58Btc.encode(bytes)
}

/// Encode key bytes with a multicodec prefix as a multibase (base58btc) string
///
/// The result is suitable for use as a did:key identifier or publicKeyMultibase value.
pub fn encode_multikey(codec: Codec, key_bytes: &[u8]) -> String {
    let encoded = MultiEncodedBuf::encode(codec, key_bytes);
    encode_base58btc(encoded.as_bytes())
}

/// Decode a multikey string of any supported base and return the base,
/// codec and key bytes
pub fn decode_multikey_with_codec(key: &str) -> Result<(Base, Codec, Vec<u8>), EncodingError> {
    let (base, bytes) = decode(key)?;
    let multi_encoded = MultiEncoded::new(&bytes)?;
    Ok((
        base,
        multi_encoded.codec_type(),
        multi_encoded.data().to_vec(),
    ))
}
