//! Multicodec encoding/decoding
//!
//! Multicodec is a self-describing format that prefixes data with a varint
//! indicating the type of data that follows.
//!
//! Only the two public key codecs used by did:peer are named here, anything
//! else surfaces as [`Codec::Unknown`] so callers can decide how to reject it.
//!
//! See: <https://github.com/multiformats/multicodec>

use crate::EncodingError;

// ****************************************************************************
// Codec Magic Numbers
// See: https://github.com/multiformats/multicodec/blob/master/table.csv
// ****************************************************************************
pub const ED25519_PUB: u64 = 0xed;
pub const X25519_PUB: u64 = 0xec;

/// Known codec types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Codec {
    Ed25519Pub,
    X25519Pub,
    Unknown(u64),
}

impl Codec {
    pub fn from_u64(value: u64) -> Self {
        match value {
            ED25519_PUB => Codec::Ed25519Pub,
            X25519_PUB => Codec::X25519Pub,
            other => Codec::Unknown(other),
        }
    }

    pub fn to_u64(self) -> u64 {
        match self {
            Codec::Ed25519Pub => ED25519_PUB,
            Codec::X25519Pub => X25519_PUB,
            Codec::Unknown(v) => v,
        }
    }
}

/// A multicodec-encoded byte slice split into its codec and payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MultiEncoded<'a> {
    codec: u64,
    data: &'a [u8],
}

impl<'a> MultiEncoded<'a> {
    /// Splits the leading varint off `bytes`
    pub fn new(bytes: &'a [u8]) -> Result<Self, EncodingError> {
        let (codec, data) = unsigned_varint::decode::u64(bytes)
            .map_err(|e| EncodingError::InvalidMulticodec(format!("varint decode: {e}")))?;

        Ok(MultiEncoded { codec, data })
    }

    /// Raw codec value (u64)
    pub fn codec(&self) -> u64 {
        self.codec
    }

    /// Codec as typed enum
    pub fn codec_type(&self) -> Codec {
        Codec::from_u64(self.codec)
    }

    /// Data bytes (without codec prefix)
    pub fn data(&self) -> &'a [u8] {
        self.data
    }
}

/// A multicodec-encoded byte buffer (owned)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiEncodedBuf(Vec<u8>);

impl MultiEncodedBuf {
    /// Encode bytes with the given codec
    pub fn encode(codec: Codec, bytes: &[u8]) -> Self {
        let mut codec_buffer = unsigned_varint::encode::u64_buffer();
        let encoded_codec = unsigned_varint::encode::u64(codec.to_u64(), &mut codec_buffer);
        let mut result = Vec::with_capacity(encoded_codec.len() + bytes.len());
        result.extend_from_slice(encoded_codec);
        result.extend_from_slice(bytes);
        Self(result)
    }

    /// Returns a reference to the raw bytes, including the codec prefix
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_decode_ed25519() {
        let key_bytes = [0u8; 32];
        let encoded = MultiEncodedBuf::encode(Codec::Ed25519Pub, &key_bytes);

        // 0xed does not fit in 7 bits, so the varint takes two bytes
        assert_eq!(&encoded.as_bytes()[..2], &[0xed, 0x01]);

        let decoded = MultiEncoded::new(encoded.as_bytes()).unwrap();
        assert_eq!(decoded.codec(), ED25519_PUB);
        assert_eq!(decoded.codec_type(), Codec::Ed25519Pub);
        assert_eq!(decoded.data(), &key_bytes);
    }

    #[test]
    fn test_encode_decode_x25519() {
        let key_bytes = [7u8; 32];
        let encoded = MultiEncodedBuf::encode(Codec::X25519Pub, &key_bytes);
        assert_eq!(&encoded.as_bytes()[..2], &[0xec, 0x01]);

        let decoded = MultiEncoded::new(encoded.as_bytes()).unwrap();
        assert_eq!(decoded.codec_type(), Codec::X25519Pub);
        assert_eq!(decoded.data().len(), 32);
    }

    #[test]
    fn test_unknown_codec() {
        // secp256k1-pub (0xe7) is a valid varint but not a did:peer key codec
        let decoded = MultiEncoded::new(&[0xe7, 0x01, 1, 2, 3]).unwrap();
        assert_eq!(decoded.codec_type(), Codec::Unknown(0xe7));
        assert_eq!(decoded.codec(), 0xe7);
    }

    #[test]
    fn test_truncated_varint() {
        assert!(matches!(
            MultiEncoded::new(&[0xed]),
            Err(EncodingError::InvalidMulticodec(_))
        ));
        assert!(MultiEncoded::new(&[]).is_err());
    }
}
