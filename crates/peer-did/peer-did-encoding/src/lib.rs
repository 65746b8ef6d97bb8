//! Multibase and multicodec encoding utilities for did:peer
//!
//! This crate provides the encoding primitives the did:peer codecs are built on:
//! - Multibase encoding/decoding (base58btc, base64url) with base detection
//! - Multicodec varint prefixes for the Ed25519 and X25519 public key codecs
//! - Multikey helpers combining the two (`z6Mk...` style strings)

pub mod multibase;
pub mod multicodec;

pub use multibase::{
    BASE58BTC_PREFIX, BASE64URL_PREFIX, Base, decode_base58btc, decode_multikey_with_codec,
    encode_base58btc, encode_multikey,
};
pub use multicodec::{Codec, ED25519_PUB, MultiEncoded, MultiEncodedBuf, X25519_PUB};

mod error;
pub use error::EncodingError;
